//! The captured error record: root failure plus accumulated diagnostic
//! commands.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::command::Command;
use crate::failure::Failure;
use crate::Error;

/// A captured error on its way to the logging pipeline.
///
/// The record owns the root [`Failure`] and an ordered sequence of
/// [`Command`]s appended by enrichment handlers. Identity fields (id,
/// timestamp, root type identifier, message) are snapshotted at construction;
/// once the record is handed to the logging pipeline it is treated as
/// immutable.
#[derive(Serialize)]
pub struct ErrorRecord {
    id: Uuid,
    failure_type: String,
    message: Option<String>,
    created_at: DateTime<Utc>,
    commands: Vec<Command>,

    #[serde(skip)]
    failure: Arc<dyn Failure>,
}

impl ErrorRecord {
    /// Captures a failure into a fresh record with no commands.
    pub fn new(failure: impl Failure) -> Self {
        Self::from_shared(Arc::new(failure))
    }

    /// Captures an already-shared failure into a fresh record.
    pub fn from_shared(failure: Arc<dyn Failure>) -> Self {
        Self {
            id: Uuid::new_v4(),
            failure_type: failure.type_identifier().to_string(),
            message: failure.message().map(str::to_string),
            created_at: Utc::now(),
            commands: Vec::new(),
            failure,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Type identifier of the root failure, snapshotted at capture.
    pub fn failure_type(&self) -> &str {
        &self.failure_type
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn failure(&self) -> &dyn Failure {
        self.failure.as_ref()
    }

    /// A shared handle on the root failure. Lets a caller walk the causal
    /// chain while holding the record mutably; the handle keeps the chain
    /// alive independently of the record.
    pub fn failure_shared(&self) -> Arc<dyn Failure> {
        Arc::clone(&self.failure)
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Appends a command and returns it for further mutation.
    pub fn add_command(&mut self, command: Command) -> &mut Command {
        self.commands.push(command);
        let last = self.commands.len() - 1;
        &mut self.commands[last]
    }

    /// Serializes the record for the logging pipeline. The root failure
    /// itself is not serialized; it is represented by the snapshot fields and
    /// the commands extracted from it.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::failure::CapturedFailure;

    fn cache_failure() -> CapturedFailure {
        CapturedFailure::new("redis::RedisError").with_message("connection reset")
    }

    mod new {
        use super::*;

        #[test]
        fn should_snapshot_type_identifier_and_message() {
            let record = ErrorRecord::new(cache_failure());

            assert_eq!(record.failure_type(), "redis::RedisError");
            assert_eq!(record.message(), Some("connection reset"));
            assert!(record.commands().is_empty());
        }
    }

    mod add_command {
        use super::*;

        #[test]
        fn should_append_in_order() {
            let mut record = ErrorRecord::new(cache_failure());
            record.add_command(Command::new("Redis"));
            record.add_command(Command::new("SQL Server Query"));

            let names: Vec<_> = record.commands().iter().map(|c| c.name.as_str()).collect();
            assert_eq!(names, vec!["Redis", "SQL Server Query"]);
        }

        #[test]
        fn should_return_command_for_further_mutation() {
            let mut record = ErrorRecord::new(cache_failure());

            let command = record.add_command(Command::new("Redis"));
            command.set_command_text("GET foo");
            command.insert_data("Host", "node1");

            let stored = &record.commands()[0];
            assert_eq!(stored.command_text.as_deref(), Some("GET foo"));
            assert_eq!(stored.data.get("Host"), Some(&"node1".to_string()));
        }
    }

    mod to_json {
        use super::*;

        #[test]
        fn should_serialize_commands_in_order() {
            let mut record = ErrorRecord::new(cache_failure());
            record.add_command(Command::new("Redis").with_command_text("GET foo").with_data("Host", "node1"));

            let json: serde_json::Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();

            assert_eq!(json["failure_type"], "redis::RedisError");
            assert_eq!(json["message"], "connection reset");
            assert_eq!(json["commands"][0]["name"], "Redis");
            assert_eq!(json["commands"][0]["command_text"], "GET foo");
            assert_eq!(json["commands"][0]["data"]["Host"], "node1");
        }
    }
}
