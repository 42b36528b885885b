//! Structured diagnostic payloads attached to an error record.

use indexmap::IndexMap;
use serde::Serialize;

/// One structured diagnostic unit attached to an [`ErrorRecord`](crate::ErrorRecord).
///
/// A command carries a human-readable `name` (e.g. "SQL Server Query"), an
/// optional free-form `command_text` (e.g. the failing query) and an ordered
/// map of display fields. Field keys are unique; a later write for an existing
/// key overwrites the value in place without changing its position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Command {
    pub name: String,
    pub command_text: Option<String>,
    pub data: IndexMap<String, String>,
}

impl Command {
    /// Creates a command with no text and no data fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command_text: None,
            data: IndexMap::new(),
        }
    }

    /// Sets the command text, consuming and returning the command for chaining.
    pub fn with_command_text(mut self, text: impl Into<String>) -> Self {
        self.command_text = Some(text.into());
        self
    }

    /// Sets the command text on an already-built command.
    pub fn set_command_text(&mut self, text: impl Into<String>) {
        self.command_text = Some(text.into());
    }

    /// Adds a data field, consuming and returning the command for chaining.
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Adds a data field only when `predicate` holds; a no-op otherwise.
    pub fn with_data_if(self, predicate: bool, key: impl Into<String>, value: impl Into<String>) -> Self {
        if predicate {
            self.with_data(key, value)
        } else {
            self
        }
    }

    /// Adds a data field on an already-built command.
    pub fn insert_data(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.data.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod with_data {
        use super::*;

        #[test]
        fn should_preserve_insertion_order() {
            let command = Command::new("SQL Server Query")
                .with_data("Server", "db1")
                .with_data("Number", "207")
                .with_data("LineNumber", "12");

            let keys: Vec<_> = command.data.keys().collect();
            assert_eq!(keys, vec!["Server", "Number", "LineNumber"]);
        }

        #[test]
        fn should_overwrite_value_when_key_already_present() {
            let command = Command::new("Redis").with_data("Host", "node1").with_data("Host", "node2");

            assert_eq!(command.data.len(), 1);
            assert_eq!(command.data.get("Host"), Some(&"node2".to_string()));
        }
    }

    mod with_data_if {
        use super::*;

        #[test]
        fn should_skip_field_when_predicate_is_false() {
            let command = Command::new("SQL Server Query").with_data_if(false, "Procedure", "x");

            assert!(!command.data.contains_key("Procedure"));
        }

        #[test]
        fn should_add_field_when_predicate_is_true() {
            let command = Command::new("SQL Server Query").with_data_if(true, "Procedure", "x");

            assert_eq!(command.data.get("Procedure"), Some(&"x".to_string()));
        }
    }

    mod set_command_text {
        use super::*;

        #[test]
        fn should_replace_existing_text() {
            let mut command = Command::new("Redis").with_command_text("GET foo");
            command.set_command_text("GET bar");

            assert_eq!(command.command_text.as_deref(), Some("GET bar"));
        }
    }
}
