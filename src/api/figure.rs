use serde::{Serialize, Serializer};
use tracing::debug;

use crate::core::{
    AnyValue, ConfigNode, Encode, FieldRename, RenameTable, WireMap, WireValue, encode_node,
};
use crate::schema::{Layout, SchemaRegistry};

/// Complete figure description: opaque trace objects plus a typed layout.
///
/// Both keys are always written, so an empty figure encodes to
/// `{"data": [], "layout": {}}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Figure {
    data: Vec<AnyValue>,
    layout: Layout,
}

impl Figure {
    #[must_use]
    pub fn new() -> Self {
        debug_assert!(
            SchemaRegistry::validate_once().is_ok(),
            "layout schema rename tables or flag vocabularies are inconsistent"
        );
        Self::default()
    }

    #[must_use]
    pub fn with_trace(mut self, trace: impl Into<AnyValue>) -> Self {
        self.add_trace(trace);
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn add_trace(&mut self, trace: impl Into<AnyValue>) {
        self.data.push(trace.into());
    }

    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
    }

    #[must_use]
    pub fn data(&self) -> &[AnyValue] {
        &self.data
    }

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn layout_mut(&mut self) -> &mut Layout {
        &mut self.layout
    }

    /// Encodes the figure into its wire document.
    #[must_use]
    pub fn to_wire(&self) -> WireMap {
        let document = encode_node(self);
        debug!(
            traces = self.data.len(),
            layout_keys = document
                .get("layout")
                .and_then(WireValue::as_map)
                .map_or(0, WireMap::len),
            "encoded figure"
        );
        document
    }
}

impl ConfigNode for Figure {
    const NODE_NAME: &'static str = "Figure";
    const FIELDS: RenameTable = &[
        FieldRename::new("data", "data"),
        FieldRename::new("layout", "layout"),
    ];

    fn visit_present(&self, visitor: &mut dyn FnMut(&'static str, WireValue)) {
        visitor("data", self.data.encode());
        visitor("layout", self.layout.encode());
    }
}

impl Serialize for Figure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_wire().serialize(serializer)
    }
}
