//! Chain dispatch: applying registered handlers across a causal chain.

use tracing::debug;

use errata_record::ErrorRecord;

use crate::registry::HandlerRegistry;

impl HandlerRegistry {
    /// Applies every matching handler to the record's causal chain.
    ///
    /// The chain is walked outermost to innermost. For each node, the handler
    /// registered under that node's type identifier (exact string equality)
    /// is invoked with the record and the node. There is no per-type dedup:
    /// when two nodes in the chain share a type identifier, the handler fires
    /// once per node and the record ends up with one command per occurrence.
    ///
    /// Handler panics are not caught here; they propagate to the capture
    /// pipeline.
    pub fn dispatch(&self, record: &mut ErrorRecord) {
        let root = record.failure_shared();
        for failure in root.chain() {
            let type_identifier = failure.type_identifier();
            if let Some(handler) = self.get(type_identifier) {
                debug!(record_id = %record.id(), failure_type = type_identifier, "applying failure handler");
                handler(record, failure);
            }
        }
    }
}
