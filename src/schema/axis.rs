use bitflags::bitflags;

use crate::core::{AnyValue, Encode, WireToken, WireValue, config_node, wire_enum, wire_flags};

use super::common::{AxisRef, Font, Title};

config_node! {
    /// Cartesian axis, used for every `xaxis*` and `yaxis*` entry of the layout.
    pub struct Axis {
        visible: bool => "visible",
        color: String => "color",
        title: Title => "title",
        axis_type: AxisType => "type",
        auto_range: AutoRange => "autorange",
        /// Pair of bounds, kept opaque because dates and categories are accepted.
        range: AnyValue => "range",
        fixed_range: bool => "fixedrange",
        tick_mode: TickMode => "tickmode",
        num_ticks: i64 => "nticks",
        tick0: AnyValue => "tick0",
        dtick: AnyValue => "dtick",
        tick_values: Vec<f64> => "tickvals",
        tick_text: Vec<String> => "ticktext",
        ticks: TickPosition => "ticks",
        mirror: Mirror => "mirror",
        tick_length: f64 => "ticklen",
        tick_width: f64 => "tickwidth",
        tick_color: String => "tickcolor",
        show_tick_labels: bool => "showticklabels",
        tick_font: Font => "tickfont",
        tick_angle: f64 => "tickangle",
        tick_prefix: String => "tickprefix",
        tick_suffix: String => "ticksuffix",
        tick_format: String => "tickformat",
        show_spikes: bool => "showspikes",
        spike_color: String => "spikecolor",
        spike_thickness: f64 => "spikethickness",
        spike_mode: SpikeMode => "spikemode",
        anchor: AxisRef => "anchor",
        side: AxisSide => "side",
        overlaying: AxisRef => "overlaying",
        domain: Vec<f64> => "domain",
        position: f64 => "position",
        show_line: bool => "showline",
        line_color: String => "linecolor",
        line_width: f64 => "linewidth",
        show_grid: bool => "showgrid",
        grid_color: String => "gridcolor",
        grid_width: f64 => "gridwidth",
        zero_line: bool => "zeroline",
        zero_line_color: String => "zerolinecolor",
        zero_line_width: f64 => "zerolinewidth",
        category_order: CategoryOrder => "categoryorder",
        category_array: Vec<AnyValue> => "categoryarray",
    }
}

bitflags! {
    /// Where hover spikes are drawn.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SpikeMode: u8 {
        const TO_AXIS = 1 << 0;
        const ACROSS = 1 << 1;
        const MARKER = 1 << 2;
    }
}

wire_flags! {
    SpikeMode {
        TO_AXIS => "toaxis",
        ACROSS => "across",
        MARKER => "marker",
    }
}

wire_enum! {
    pub enum AxisType {
        Auto => "-",
        Linear => "linear",
        Log => "log",
        Date => "date",
        Category => "category",
        MultiCategory => "multicategory",
    }
}

wire_enum! {
    pub enum TickMode {
        Auto => "auto",
        Linear => "linear",
        Array => "array",
    }
}

wire_enum! {
    pub enum TickPosition {
        Outside => "outside",
        Inside => "inside",
        Hidden => "",
    }
}

wire_enum! {
    pub enum AxisSide {
        Top => "top",
        Bottom => "bottom",
        Left => "left",
        Right => "right",
    }
}

wire_enum! {
    pub enum CategoryOrder {
        Trace => "trace",
        CategoryAscending => "category ascending",
        CategoryDescending => "category descending",
        Array => "array",
        TotalAscending => "total ascending",
        TotalDescending => "total descending",
    }
}

/// Autorange accepts real booleans next to the `"reversed"` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AutoRange {
    Enabled,
    Disabled,
    Reversed,
}

impl AutoRange {
    #[must_use]
    pub const fn token(self) -> WireToken {
        match self {
            Self::Enabled => WireToken::Bool(true),
            Self::Disabled => WireToken::Bool(false),
            Self::Reversed => WireToken::Str("reversed"),
        }
    }
}

impl Encode for AutoRange {
    fn encode(&self) -> WireValue {
        self.token().into()
    }
}

/// Axis line mirroring; booleans and string tokens share one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mirror {
    Enabled,
    Disabled,
    Ticks,
    All,
    AllTicks,
}

impl Mirror {
    #[must_use]
    pub const fn token(self) -> WireToken {
        match self {
            Self::Enabled => WireToken::Bool(true),
            Self::Disabled => WireToken::Bool(false),
            Self::Ticks => WireToken::Str("ticks"),
            Self::All => WireToken::Str("all"),
            Self::AllTicks => WireToken::Str("allticks"),
        }
    }
}

impl Encode for Mirror {
    fn encode(&self) -> WireValue {
        self.token().into()
    }
}
