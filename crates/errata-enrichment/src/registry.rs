//! Registry mapping failure type identifiers to extraction handlers.

use std::any::type_name;
use std::collections::HashMap;
use std::sync::Arc;

use errata_record::{ErrorRecord, Failure};

/// A dispatch-ready extraction handler.
///
/// Handlers are infallible by signature: extraction misses degrade to zero
/// values (see [`errata_record::read_attribute`]) and command building never
/// fails, so there is nothing to return.
pub type Handler = Arc<dyn Fn(&mut ErrorRecord, &dyn Failure) + Send + Sync>;

/// Maps failure type identifiers to the handler to apply when a failure of
/// that type appears anywhere in a captured causal chain.
///
/// The registry is built once during initialization and then only read by
/// [`dispatch`](HandlerRegistry::dispatch); it carries no internal locking.
/// Cloning is cheap (handlers are `Arc`-shared), so concurrent pipelines can
/// each hold their own handle.
#[derive(Clone, Default)]
pub struct HandlerRegistry {
    handlers: HashMap<String, Handler>,
}

impl HandlerRegistry {
    /// Creates an empty registry. See
    /// [`with_defaults`](HandlerRegistry::with_defaults) for one preloaded
    /// with the built-in handler set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` under `type_identifier`, replacing any prior entry
    /// for that identifier. Returns the registry for chained configuration.
    pub fn register<H>(&mut self, type_identifier: impl Into<String>, handler: H) -> &mut Self
    where
        H: Fn(&mut ErrorRecord, &dyn Failure) + Send + Sync + 'static,
    {
        self.handlers.insert(type_identifier.into(), Arc::new(handler));
        self
    }

    /// Registers a handler for the concrete failure type `F`, keyed by `F`'s
    /// type path. The handler only fires for chain nodes whose runtime type
    /// is exactly `F`; nodes that merely share the identifier string are
    /// filtered out by downcast.
    pub fn register_typed<F, H>(&mut self, handler: H) -> &mut Self
    where
        F: Failure,
        H: Fn(&mut ErrorRecord, &F) + Send + Sync + 'static,
    {
        self.register(type_name::<F>(), move |record: &mut ErrorRecord, failure: &dyn Failure| {
            if let Some(failure) = failure.as_any().downcast_ref::<F>() {
                handler(record, failure);
            }
        })
    }

    /// Returns the handler registered under `type_identifier`, if any.
    pub fn get(&self, type_identifier: &str) -> Option<&Handler> {
        self.handlers.get(type_identifier)
    }

    pub fn contains(&self, type_identifier: &str) -> bool {
        self.handlers.contains_key(type_identifier)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
