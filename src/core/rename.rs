use std::collections::HashSet;

use tracing::debug;

use crate::error::{PlotError, PlotResult};

/// Association between a node's Rust field identifier and its wire key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldRename {
    pub field: &'static str,
    pub key: &'static str,
}

impl FieldRename {
    #[must_use]
    pub const fn new(field: &'static str, key: &'static str) -> Self {
        Self { field, key }
    }

    #[must_use]
    pub fn is_identity(self) -> bool {
        self.field == self.key
    }
}

/// Per-node rename table in field declaration order.
pub type RenameTable = &'static [FieldRename];

/// Looks up the wire key registered for `field`.
///
/// Identity mappings are registered like any other entry, so `None` always
/// means the field is unknown to the table.
#[must_use]
pub fn wire_key(table: RenameTable, field: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|entry| entry.field == field)
        .map(|entry| entry.key)
}

/// Checks that a rename table is total and unambiguous.
pub fn validate_rename_table(node: &'static str, table: RenameTable) -> PlotResult<()> {
    let mut fields = HashSet::with_capacity(table.len());
    let mut keys = HashSet::with_capacity(table.len());

    for entry in table {
        if entry.key.is_empty() {
            return Err(PlotError::EmptyWireKey {
                node,
                field: entry.field,
            });
        }
        if !fields.insert(entry.field) {
            return Err(PlotError::DuplicateFieldIdentifier {
                node,
                field: entry.field,
            });
        }
        if !keys.insert(entry.key) {
            return Err(PlotError::DuplicateWireKey {
                node,
                key: entry.key,
            });
        }
    }

    debug!(node, fields = table.len(), "rename table validated");
    Ok(())
}
