use crate::core::{config_node, wire_enum};

use super::common::AxisRef;

config_node! {
    /// Line, rectangle, circle or SVG path drawn in data or paper coordinates.
    pub struct Shape {
        visible: bool => "visible",
        shape_type: ShapeType => "type",
        layer: ShapeLayer => "layer",
        x_ref: AxisRef => "xref",
        x0: f64 => "x0",
        x1: f64 => "x1",
        y_ref: AxisRef => "yref",
        y0: f64 => "y0",
        y1: f64 => "y1",
        path: String => "path",
        opacity: f64 => "opacity",
        line: ShapeLine => "line",
        fill_color: String => "fillcolor",
        fill_rule: FillRule => "fillrule",
        editable: bool => "editable",
        name: String => "name",
    }
}

config_node! {
    pub struct ShapeLine {
        color: String => "color",
        width: f64 => "width",
        dash: Dash => "dash",
    }
}

wire_enum! {
    pub enum ShapeType {
        Circle => "circle",
        Rect => "rect",
        Path => "path",
        Line => "line",
    }
}

wire_enum! {
    pub enum ShapeLayer {
        Below => "below",
        Above => "above",
    }
}

wire_enum! {
    pub enum FillRule {
        EvenOdd => "evenodd",
        NonZero => "nonzero",
    }
}

wire_enum! {
    pub enum Dash {
        Solid => "solid",
        Dot => "dot",
        Dash => "dash",
        LongDash => "longdash",
        DashDot => "dashdot",
        LongDashDot => "longdashdot",
    }
}
