//! Handler registry and chain dispatch for enriching captured error records
//! with structured diagnostic context.
//!
//! When the capture pipeline records a failure, this crate decides, per
//! failure *type*, what additional structured information to pull off the
//! failure and attaches it to the record as commands.
//!
//! # Architecture
//!
//! - [`HandlerRegistry`]: maps a failure type identifier to an extraction
//!   handler; populated once at initialization and threaded through the
//!   capture pipeline's configuration
//! - [`HandlerRegistry::dispatch`]: walks the causal chain of a record's root
//!   failure and applies every handler whose identifier matches a node
//! - [`handlers`]: the built-in handler set (SQL Server, Redis)
//!
//! # Usage
//!
//! ```ignore
//! let mut registry = HandlerRegistry::with_defaults();
//! registry.register_typed(|record, failure: &PoolExhausted| {
//!     record.add_command(Command::new("Connection Pool").with_data("Size", failure.size.to_string()));
//! });
//!
//! // Per captured failure, after the record is populated:
//! registry.dispatch(&mut record);
//! ```

mod dispatch;
mod registry;

pub mod handlers;

pub use registry::{Handler, HandlerRegistry};
