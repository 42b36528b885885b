//! Built-in failure handlers.
//!
//! One file per handled failure source. Each handler file exposes the type
//! identifier constants it registers under and a `handle` function with the
//! standard handler signature.
//!
//! # Adding a handler
//!
//! 1. Create a new file in this directory (e.g. `pg.rs`)
//! 2. Write a `handle(&mut ErrorRecord, &dyn Failure)` function building
//!    commands from the failure
//! 3. Re-export the module here and register the handler in
//!    [`register_defaults`](HandlerRegistry::register_defaults), or leave
//!    registration to the application for handlers that should stay opt-in

pub mod redis;
pub mod sql;

use crate::registry::HandlerRegistry;

impl HandlerRegistry {
    /// Registers the built-in handler set: the SQL Server query handler under
    /// both client generations' identifiers, and the Redis handler. Returns
    /// the registry for chained configuration.
    pub fn register_defaults(&mut self) -> &mut Self {
        self.register(sql::SQL_SERVER_FAILURE, sql::handle);
        self.register(sql::SQL_SERVER_FAILURE_LEGACY, sql::handle);
        self.register(redis::REDIS_FAILURE, redis::handle);
        self
    }

    /// Creates a registry preloaded with the built-in handler set.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register_defaults();
        registry
    }
}
