//! plot-layout: typed figure layout model for an external charting runtime.
//!
//! Layout regions are plain value types whose fields are all optional. The
//! encoder in [`core`] walks a node tree and produces the runtime's wire
//! document: renamed keys, omitted absent fields, enum tokens and
//! `+`-joined flag strings.

pub mod api;
pub mod core;
pub mod error;
pub mod schema;
pub mod telemetry;

pub use api::Figure;
pub use crate::core::{AnyValue, ConfigNode, Encode, FlagSet, WireMap, WireValue, encode_node};
pub use error::{PlotError, PlotResult};
pub use schema::Layout;
