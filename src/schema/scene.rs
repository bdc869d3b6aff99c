//! 3D scene: its three axes, camera and aspect handling.

use crate::core::{AnyValue, config_node, wire_enum};

use super::axis::{AutoRange, AxisType, Mirror, SpikeMode, TickMode, TickPosition};
use super::common::{Domain, Font, Title};

config_node! {
    pub struct Scene {
        background_color: String => "bgcolor",
        camera: Camera => "camera",
        domain: Domain => "domain",
        aspect_mode: AspectMode => "aspectmode",
        aspect_ratio: AspectRatio => "aspectratio",
        x_axis: SceneAxis => "xaxis",
        y_axis: SceneAxis => "yaxis",
        z_axis: SceneAxis => "zaxis",
        drag_mode: SceneDragMode => "dragmode",
        hover_mode: SceneHoverMode => "hovermode",
    }
}

config_node! {
    pub struct SceneAxis {
        visible: bool => "visible",
        title: Title => "title",
        axis_type: AxisType => "type",
        auto_range: AutoRange => "autorange",
        range: AnyValue => "range",
        tick_mode: TickMode => "tickmode",
        num_ticks: i64 => "nticks",
        ticks: TickPosition => "ticks",
        mirror: Mirror => "mirror",
        tick_font: Font => "tickfont",
        show_spikes: bool => "showspikes",
        spike_sides: bool => "spikesides",
        spike_mode: SpikeMode => "spikemode",
        show_background: bool => "showbackground",
        background_color: String => "backgroundcolor",
        show_axis_labels: bool => "showaxeslabels",
        show_grid: bool => "showgrid",
        grid_color: String => "gridcolor",
        zero_line: bool => "zeroline",
    }
}

config_node! {
    pub struct Camera {
        up: CameraVector => "up",
        center: CameraVector => "center",
        eye: CameraVector => "eye",
        projection: CameraProjection => "projection",
    }
}

config_node! {
    pub struct CameraVector {
        x: f64 => "x",
        y: f64 => "y",
        z: f64 => "z",
    }
}

impl CameraVector {
    #[must_use]
    pub fn at(x: f64, y: f64, z: f64) -> Self {
        Self::new().x(x).y(y).z(z)
    }
}

config_node! {
    pub struct CameraProjection {
        projection_type: ProjectionType => "type",
    }
}

config_node! {
    pub struct AspectRatio {
        x: f64 => "x",
        y: f64 => "y",
        z: f64 => "z",
    }
}

wire_enum! {
    pub enum ProjectionType {
        Perspective => "perspective",
        Orthographic => "orthographic",
    }
}

wire_enum! {
    pub enum AspectMode {
        Auto => "auto",
        Cube => "cube",
        Data => "data",
        Manual => "manual",
    }
}

wire_enum! {
    pub enum SceneDragMode {
        Orbit => "orbit",
        Turntable => "turntable",
        Zoom => "zoom",
        Pan => "pan",
        /// Disables dragging; the runtime expects the string, not a boolean.
        Disabled => "false",
    }
}

wire_enum! {
    pub enum SceneHoverMode {
        Closest => "closest",
        Disabled => "false",
    }
}
