use bitflags::bitflags;

use crate::core::{config_node, wire_enum, wire_flags};

use super::common::{AxisRef, Font, HorizontalAlign, VerticalAlign, XAnchor, YAnchor};

config_node! {
    /// Text label, optionally with an arrow pointing at `(x, y)`.
    pub struct Annotation {
        visible: bool => "visible",
        text: String => "text",
        text_angle: f64 => "textangle",
        font: Font => "font",
        width: f64 => "width",
        height: f64 => "height",
        opacity: f64 => "opacity",
        align: HorizontalAlign => "align",
        vertical_align: VerticalAlign => "valign",
        background_color: String => "bgcolor",
        border_color: String => "bordercolor",
        border_pad: f64 => "borderpad",
        border_width: f64 => "borderwidth",
        show_arrow: bool => "showarrow",
        arrow_color: String => "arrowcolor",
        arrow_head: ArrowHead => "arrowhead",
        start_arrow_head: ArrowHead => "startarrowhead",
        arrow_side: ArrowSide => "arrowside",
        arrow_size: f64 => "arrowsize",
        arrow_width: f64 => "arrowwidth",
        ax: f64 => "ax",
        ay: f64 => "ay",
        ax_ref: AxisRef => "axref",
        ay_ref: AxisRef => "ayref",
        x_ref: AxisRef => "xref",
        x: f64 => "x",
        x_anchor: XAnchor => "xanchor",
        y_ref: AxisRef => "yref",
        y: f64 => "y",
        y_anchor: YAnchor => "yanchor",
        hover_text: String => "hovertext",
        capture_events: bool => "captureevents",
        name: String => "name",
    }
}

bitflags! {
    /// Which ends of the annotation line carry an arrowhead.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ArrowSide: u8 {
        const END = 1 << 0;
        const START = 1 << 1;
        const NONE = 1 << 2;
    }
}

wire_flags! {
    ArrowSide {
        END => "end",
        START => "start",
        NONE => "none",
    }
}

wire_enum! {
    /// Arrowhead style; the runtime identifies styles by integer.
    pub enum ArrowHead: int {
        Flat => 0,
        Standard => 1,
        Narrow => 2,
        Wide => 3,
        Long => 4,
        Open => 5,
        Circle => 6,
        Square => 7,
        Bar => 8,
    }
}
