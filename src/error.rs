use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlotError {
    #[error("node `{node}` declares field `{field}` more than once")]
    DuplicateFieldIdentifier {
        node: &'static str,
        field: &'static str,
    },

    #[error("node `{node}` maps more than one field to wire key `{key}`")]
    DuplicateWireKey {
        node: &'static str,
        key: &'static str,
    },

    #[error("node `{node}` registers an empty wire key for field `{field}`")]
    EmptyWireKey {
        node: &'static str,
        field: &'static str,
    },

    #[error("flag set `{flags}` option `{option}` uses bits {bits:#010b}, expected exactly one bit")]
    InvalidFlagBit {
        flags: &'static str,
        option: &'static str,
        bits: u8,
    },

    #[error("flag set `{flags}` assigns bit {bits:#010b} to more than one option")]
    DuplicateFlagBit { flags: &'static str, bits: u8 },

    #[error("flag set `{flags}` has no wire token for bits {bits:#010b}")]
    UnmappedFlagBits { flags: &'static str, bits: u8 },

    #[error("flag set `{flags}` declares option `{option}` more than once")]
    DuplicateFlagName {
        flags: &'static str,
        option: &'static str,
    },

    #[error("serialization failed: {0}")]
    Serialization(String),
}
