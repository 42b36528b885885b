//! SQL Server client failure handler.

use errata_record::{read_attribute, Command, ErrorRecord, Failure};

/// Type identifier reported for failures of the current SQL Server client.
pub const SQL_SERVER_FAILURE: &str = "tiberius::error::Error";

/// Identifier found in captures recorded by the previous client generation.
/// Maps to the same handler.
pub const SQL_SERVER_FAILURE_LEGACY: &str = "mssql::error::Error";

/// Builds a "SQL Server Query" command from a database client failure.
///
/// The failing statement is taken from the data bag entry keyed `"SQL"` when
/// present. `Server`, `Number` and `LineNumber` are read as attributes and
/// degrade to empty/zero when missing; `Procedure` is only added when
/// non-empty. A failure carrying no data bag contributes nothing.
pub fn handle(record: &mut ErrorRecord, failure: &dyn Failure) {
    let Some(data) = failure.data() else { return };

    let mut command = Command::new("SQL Server Query");
    if let Some(sql) = data.get_str("SQL") {
        command.set_command_text(sql);
    }

    let procedure: String = read_attribute(failure, "Procedure");
    let command = command
        .with_data("Server", read_attribute::<String>(failure, "Server"))
        .with_data("Number", read_attribute::<i64>(failure, "Number").to_string())
        .with_data("LineNumber", read_attribute::<i64>(failure, "LineNumber").to_string())
        .with_data_if(!procedure.is_empty(), "Procedure", procedure);

    record.add_command(command);
}
