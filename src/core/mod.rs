//! Encoding engine: wire values, rename tables, flag sets and the node encoder.

mod encode;
mod flags;
mod rename;
#[cfg(test)]
pub(crate) mod test_support;
mod wire;

pub use encode::{AnyValue, ConfigNode, Encode, WireToken, encode_node};
pub use flags::{
    FLAG_SEPARATOR, FlagSet, combine_flags, validate_flag_set, validate_flag_vocabulary,
};
pub use rename::{FieldRename, RenameTable, validate_rename_table, wire_key};
pub use wire::{WireMap, WireValue};

pub(crate) use encode::{config_node, wire_enum};
pub(crate) use flags::wire_flags;
