use std::io::Write;

use serde::Serialize;
use serde_json::Value;

use crate::error::{PlotError, PlotResult};
use crate::schema::Layout;

use super::Figure;

fn to_json_string<T: Serialize>(value: &T, what: &str) -> PlotResult<String> {
    serde_json::to_string(value)
        .map_err(|e| PlotError::Serialization(format!("failed to serialize {what} json: {e}")))
}

fn to_json_pretty<T: Serialize>(value: &T, what: &str) -> PlotResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| PlotError::Serialization(format!("failed to serialize {what} json: {e}")))
}

impl Figure {
    pub fn to_json_string(&self) -> PlotResult<String> {
        to_json_string(self, "figure")
    }

    pub fn to_json_pretty(&self) -> PlotResult<String> {
        to_json_pretty(self, "figure")
    }

    #[must_use]
    pub fn to_json_value(&self) -> Value {
        self.to_wire().to_json_value()
    }

    /// Streams compact JSON into `writer`.
    pub fn write_json<W: Write>(&self, writer: W) -> PlotResult<()> {
        serde_json::to_writer(writer, self)
            .map_err(|e| PlotError::Serialization(format!("failed to write figure json: {e}")))
    }
}

impl Layout {
    pub fn to_json_string(&self) -> PlotResult<String> {
        to_json_string(self, "layout")
    }

    pub fn to_json_pretty(&self) -> PlotResult<String> {
        to_json_pretty(self, "layout")
    }

    #[must_use]
    pub fn to_json_value(&self) -> Value {
        crate::core::encode_node(self).to_json_value()
    }
}
