//! Top-level layout node and the regions that only the layout owns.

use bitflags::bitflags;

use crate::core::{AnyValue, config_node, wire_enum, wire_flags};

use super::annotation::Annotation;
use super::axis::Axis;
use super::common::{Font, HorizontalAlign, Orientation, Title};
use super::legend::Legend;
use super::scene::Scene;
use super::shape::Shape;

config_node! {
    pub struct Layout {
        title: Title => "title",
        show_legend: bool => "showlegend",
        legend: Legend => "legend",
        margin: Margin => "margin",
        auto_size: bool => "autosize",
        width: f64 => "width",
        height: f64 => "height",
        font: Font => "font",
        paper_background_color: String => "paper_bgcolor",
        plot_background_color: String => "plot_bgcolor",
        separators: String => "separators",
        hide_sources: bool => "hidesources",
        color_way: Vec<String> => "colorway",
        click_mode: ClickMode => "clickmode",
        drag_mode: DragMode => "dragmode",
        hover_mode: HoverMode => "hovermode",
        hover_distance: i64 => "hoverdistance",
        hover_label: HoverLabel => "hoverlabel",
        x_axis: Axis => "xaxis",
        y_axis: Axis => "yaxis",
        x_axis2: Axis => "xaxis2",
        y_axis2: Axis => "yaxis2",
        scene: Scene => "scene",
        annotations: Vec<Annotation> => "annotations",
        shapes: Vec<Shape> => "shapes",
        mode_bar: ModeBar => "modebar",
        /// Free-form metadata referenced by `%{meta}` templates.
        meta: AnyValue => "meta",
        bar_mode: BarMode => "barmode",
    }
}

config_node! {
    /// Plot margins in px.
    pub struct Margin {
        left: f64 => "l",
        right: f64 => "r",
        top: f64 => "t",
        bottom: f64 => "b",
        pad: f64 => "pad",
        auto_expand: bool => "autoexpand",
    }
}

config_node! {
    pub struct HoverLabel {
        background_color: String => "bgcolor",
        border_color: String => "bordercolor",
        font: Font => "font",
        align: HorizontalAlign => "align",
        name_length: i64 => "namelength",
    }
}

config_node! {
    pub struct ModeBar {
        orientation: Orientation => "orientation",
        background_color: String => "bgcolor",
        color: String => "color",
        active_color: String => "activecolor",
    }
}

bitflags! {
    /// Reaction of the plot to click events.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ClickMode: u8 {
        const EVENT = 1 << 0;
        const SELECT = 1 << 1;
        const NONE = 1 << 2;
    }
}

wire_flags! {
    ClickMode {
        EVENT => "event",
        SELECT => "select",
        NONE => "none",
    }
}

wire_enum! {
    pub enum DragMode {
        Zoom => "zoom",
        Pan => "pan",
        Select => "select",
        Lasso => "lasso",
        DrawClosedPath => "drawclosedpath",
        DrawOpenPath => "drawopenpath",
        DrawLine => "drawline",
        DrawRect => "drawrect",
        DrawCircle => "drawcircle",
        Orbit => "orbit",
        Turntable => "turntable",
        Disabled => "false",
    }
}

wire_enum! {
    pub enum HoverMode {
        X => "x",
        Y => "y",
        Closest => "closest",
        Disabled => "false",
        XUnified => "x unified",
        YUnified => "y unified",
    }
}

wire_enum! {
    pub enum BarMode {
        Stack => "stack",
        Group => "group",
        Overlay => "overlay",
        Relative => "relative",
    }
}
