//! The failure abstraction: one captured error occurrence, its causal chain,
//! and the dynamic views handlers use to pull diagnostic information out of it.
//!
//! A [`Failure`] is deliberately opaque. Handlers never take a compile-time
//! dependency on the concrete type that produced a failure; they work through
//! three runtime surfaces instead:
//!
//! - the **type identifier**, a stable globally unique string used as the
//!   dispatch key,
//! - the **data bag** ([`FailureData`]), ad-hoc string-keyed entries attached
//!   by whatever raised the failure,
//! - the **attribute probe**, a by-name lookup of typed fields resolved with
//!   [`read_attribute`].

use std::any::Any;
use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// One captured exception/error occurrence, possibly with a causal predecessor.
///
/// Implementations are free to expose as much or as little as they have: every
/// method except [`Failure::as_any`] has a defaulted empty answer, and the
/// type identifier defaults to the concrete Rust type path so native failure
/// types dispatch under their own name without any ceremony.
pub trait Failure: Any + Send + Sync {
    /// Stable, globally unique string naming this failure's runtime type.
    fn type_identifier(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Human-readable description of the failure.
    fn message(&self) -> Option<&str> {
        None
    }

    /// The causal predecessor, if any. Chains are finite and acyclic by
    /// contract of the failure producer.
    fn cause(&self) -> Option<&dyn Failure> {
        None
    }

    /// Ad-hoc diagnostic entries attached by the runtime that raised the
    /// failure.
    fn data(&self) -> Option<&FailureData> {
        None
    }

    /// Looks up a named attribute. Returning `None` covers both "no such
    /// attribute" and "not exposed"; callers go through [`read_attribute`]
    /// for typed access.
    fn attribute(&self, _name: &str) -> Option<Value> {
        None
    }

    fn as_any(&self) -> &dyn Any;
}

impl dyn Failure {
    /// Returns an iterator over the causal chain, starting with this failure
    /// and following [`Failure::cause`] links until none remains.
    pub fn chain(&self) -> Chain<'_> {
        Chain { next: Some(self) }
    }
}

/// Iterator over a causal chain, outermost failure first.
pub struct Chain<'a> {
    next: Option<&'a dyn Failure>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a dyn Failure;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take();
        self.next = current.and_then(|failure| failure.cause());
        current
    }
}

/// Reads the named attribute of a failure as a `T`.
///
/// This is a total function: if the attribute is absent or its value cannot be
/// viewed as `T`, the zero value of `T` is returned. The two cases are
/// indistinguishable from the caller's perspective, which is exactly what
/// extraction handlers want: a miss degrades to a missing field, never to a
/// failed enrichment.
pub fn read_attribute<T>(failure: &dyn Failure, name: &str) -> T
where
    T: DeserializeOwned + Default,
{
    failure
        .attribute(name)
        .and_then(|value| serde_json::from_value(value).ok())
        .unwrap_or_default()
}

/// Unordered bag of ad-hoc diagnostic entries carried by a failure.
///
/// Keys are strings, values arbitrary JSON. Entry order is not meaningful.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FailureData(HashMap<String, Value>);

impl FailureData {
    pub fn new() -> Self {
        FailureData(HashMap::new())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns the entry as a string slice, or `None` if absent or not a
    /// string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A failure reconstructed at capture time, for failure types that are not
/// statically referenceable: foreign library errors, errors crossing a
/// process boundary, or anything else the capture pipeline only knows by name.
///
/// Everything is owned and set through infallible `with_*` builders:
///
/// ```ignore
/// let failure = CapturedFailure::new("redis::RedisError")
///     .with_message("connection reset")
///     .with_data("redis-command", "GET foo")
///     .with_cause(CapturedFailure::new("std::io::Error"));
/// ```
pub struct CapturedFailure {
    type_identifier: String,
    message: Option<String>,
    data: Option<FailureData>,
    attributes: HashMap<String, Value>,
    cause: Option<Box<dyn Failure>>,
}

impl CapturedFailure {
    pub fn new(type_identifier: impl Into<String>) -> Self {
        Self {
            type_identifier: type_identifier.into(),
            message: None,
            data: None,
            attributes: HashMap::new(),
            cause: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Adds one entry to the data bag, creating the bag on first use. A
    /// failure built without any data reports no bag at all.
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.get_or_insert_with(FailureData::new).insert(key, value);
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_cause(mut self, cause: impl Failure) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }
}

impl Failure for CapturedFailure {
    fn type_identifier(&self) -> &str {
        &self.type_identifier
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn cause(&self) -> Option<&dyn Failure> {
        self.cause.as_deref()
    }

    fn data(&self) -> Option<&FailureData> {
        self.data.as_ref()
    }

    fn attribute(&self, name: &str) -> Option<Value> {
        self.attributes.get(name).cloned()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
