//! Redis client failure handler.

use errata_record::{Command, ErrorRecord, Failure};

/// Type identifier reported for failures of the Redis client.
pub const REDIS_FAILURE: &str = "redis::RedisError";

/// Bag entry holding the command that was in flight when the failure hit.
const COMMAND_KEY: &str = "redis-command";

/// Bag entries starting with this prefix contribute display fields, named by
/// the remainder of the key.
const FIELD_PREFIX: &str = "Redis-";

/// Builds a "Redis" command from a cache client failure.
///
/// The command is appended unconditionally; the failure's data bag then fills
/// it in. The `"redis-command"` entry becomes the command text and every
/// `"Redis-"`-prefixed entry becomes a field. Entries with non-string values
/// or unrecognized keys contribute nothing.
pub fn handle(record: &mut ErrorRecord, failure: &dyn Failure) {
    let command = record.add_command(Command::new("Redis"));
    let Some(data) = failure.data() else { return };

    for (key, value) in data.iter() {
        let Some(value) = value.as_str() else { continue };
        if key == COMMAND_KEY {
            command.set_command_text(value);
        } else if let Some(field) = key.strip_prefix(FIELD_PREFIX) {
            command.insert_data(field, value);
        }
    }
}
