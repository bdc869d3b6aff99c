//! Representative slice of the external layout schema.
//!
//! Every node type is declared with `config_node!`, which keeps the struct
//! and its rename table in one field list. `SCHEMA` lists all node types and
//! flag vocabularies so their tables can be checked in one pass.

pub mod annotation;
pub mod axis;
pub mod common;
pub mod layout;
pub mod legend;
pub mod scene;
pub mod shape;

pub use annotation::{Annotation, ArrowHead, ArrowSide};
pub use axis::{
    AutoRange, Axis, AxisSide, AxisType, CategoryOrder, Mirror, SpikeMode, TickMode, TickPosition,
};
pub use common::{
    AxisRef, Domain, Font, HorizontalAlign, Orientation, Pad, Title, VerticalAlign, XAnchor,
    YAnchor,
};
pub use layout::{BarMode, ClickMode, DragMode, HoverLabel, HoverMode, Layout, Margin, ModeBar};
pub use legend::{ItemClick, ItemSizing, Legend, TraceOrder};
pub use scene::{
    AspectMode, AspectRatio, Camera, CameraProjection, CameraVector, ProjectionType, Scene,
    SceneAxis, SceneDragMode, SceneHoverMode,
};
pub use shape::{Dash, FillRule, Shape, ShapeLayer, ShapeLine, ShapeType};

use std::sync::OnceLock;

use tracing::warn;

use crate::core::{ConfigNode, FlagSet, RenameTable, validate_flag_set, validate_rename_table};
use crate::error::PlotResult;

/// Name and rename table of one node type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeSchema {
    pub name: &'static str,
    pub fields: RenameTable,
}

impl NodeSchema {
    #[must_use]
    pub const fn of<N: ConfigNode>() -> Self {
        Self {
            name: N::NODE_NAME,
            fields: N::FIELDS,
        }
    }
}

/// Name of one flag set and the check of its wire vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct FlagSchema {
    pub name: &'static str,
    validate: fn() -> PlotResult<()>,
}

impl FlagSchema {
    #[must_use]
    pub const fn of<F: FlagSet>() -> Self {
        Self {
            name: F::NAME,
            validate: validate_flag_set::<F>,
        }
    }

    pub fn validate(&self) -> PlotResult<()> {
        (self.validate)()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SchemaRegistry {
    nodes: &'static [NodeSchema],
    flags: &'static [FlagSchema],
}

impl SchemaRegistry {
    #[must_use]
    pub fn nodes(&self) -> &'static [NodeSchema] {
        self.nodes
    }

    #[must_use]
    pub fn flags(&self) -> &'static [FlagSchema] {
        self.flags
    }

    #[must_use]
    pub fn node(&self, name: &str) -> Option<&'static NodeSchema> {
        self.nodes.iter().find(|node| node.name == name)
    }

    /// Runs the rename-table and flag-vocabulary checks over every entry.
    pub fn validate(&self) -> PlotResult<()> {
        for node in self.nodes {
            validate_rename_table(node.name, node.fields).inspect_err(|err| {
                warn!(node = node.name, %err, "invalid rename table");
            })?;
        }
        for flags in self.flags {
            flags.validate().inspect_err(|err| {
                warn!(flags = flags.name, %err, "invalid flag vocabulary");
            })?;
        }
        Ok(())
    }

    /// Result of [`SchemaRegistry::validate`] on the static registry,
    /// computed on first use and shared afterwards.
    pub fn validate_once() -> &'static PlotResult<()> {
        static VALIDATED: OnceLock<PlotResult<()>> = OnceLock::new();
        VALIDATED.get_or_init(|| SCHEMA.validate())
    }
}

pub static SCHEMA: SchemaRegistry = SchemaRegistry {
    nodes: &[
        NodeSchema::of::<Layout>(),
        NodeSchema::of::<Margin>(),
        NodeSchema::of::<HoverLabel>(),
        NodeSchema::of::<ModeBar>(),
        NodeSchema::of::<Font>(),
        NodeSchema::of::<Pad>(),
        NodeSchema::of::<Title>(),
        NodeSchema::of::<Domain>(),
        NodeSchema::of::<Axis>(),
        NodeSchema::of::<Legend>(),
        NodeSchema::of::<Scene>(),
        NodeSchema::of::<SceneAxis>(),
        NodeSchema::of::<Camera>(),
        NodeSchema::of::<CameraVector>(),
        NodeSchema::of::<CameraProjection>(),
        NodeSchema::of::<AspectRatio>(),
        NodeSchema::of::<Annotation>(),
        NodeSchema::of::<Shape>(),
        NodeSchema::of::<ShapeLine>(),
    ],
    flags: &[
        FlagSchema::of::<ClickMode>(),
        FlagSchema::of::<SpikeMode>(),
        FlagSchema::of::<TraceOrder>(),
        FlagSchema::of::<ArrowSide>(),
    ],
};

#[must_use]
pub fn registry() -> &'static SchemaRegistry {
    &SCHEMA
}
