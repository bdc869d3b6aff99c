//! Nodes and tokens shared across several layout regions.

use std::borrow::Cow;

use crate::core::{Encode, WireValue, config_node, wire_enum};

config_node! {
    /// Text font shared by titles, tick labels, legends and annotations.
    pub struct Font {
        family: String => "family",
        size: f64 => "size",
        color: String => "color",
    }
}

config_node! {
    /// Padding in px; the runtime only honours the sides relevant to the anchor.
    pub struct Pad {
        top: f64 => "t",
        right: f64 => "r",
        bottom: f64 => "b",
        left: f64 => "l",
    }
}

config_node! {
    pub struct Title {
        text: String => "text",
        font: Font => "font",
        x: f64 => "x",
        y: f64 => "y",
        x_anchor: XAnchor => "xanchor",
        y_anchor: YAnchor => "yanchor",
        pad: Pad => "pad",
    }
}

impl From<&str> for Title {
    fn from(text: &str) -> Self {
        Self::new().text(text)
    }
}

impl From<String> for Title {
    fn from(text: String) -> Self {
        Self::new().text(text)
    }
}

config_node! {
    /// Fractional placement of a subplot or scene inside the figure.
    pub struct Domain {
        x: Vec<f64> => "x",
        y: Vec<f64> => "y",
        row: i64 => "row",
        column: i64 => "column",
    }
}

wire_enum! {
    pub enum XAnchor {
        Auto => "auto",
        Left => "left",
        Center => "center",
        Right => "right",
    }
}

wire_enum! {
    pub enum YAnchor {
        Auto => "auto",
        Top => "top",
        Middle => "middle",
        Bottom => "bottom",
    }
}

wire_enum! {
    pub enum HorizontalAlign {
        Left => "left",
        Center => "center",
        Right => "right",
    }
}

wire_enum! {
    pub enum VerticalAlign {
        Top => "top",
        Middle => "middle",
        Bottom => "bottom",
    }
}

wire_enum! {
    pub enum Orientation {
        Vertical => "v",
        Horizontal => "h",
    }
}

/// Reference to a cartesian axis, the paper coordinate system, or no anchor.
///
/// Axis indices start at 1; index 0 and 1 both name the primary axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisRef {
    Paper,
    Free,
    X(u8),
    Y(u8),
}

impl AxisRef {
    #[must_use]
    pub fn token(self) -> Cow<'static, str> {
        match self {
            Self::Paper => Cow::Borrowed("paper"),
            Self::Free => Cow::Borrowed("free"),
            Self::X(0 | 1) => Cow::Borrowed("x"),
            Self::Y(0 | 1) => Cow::Borrowed("y"),
            Self::X(index) => Cow::Owned(format!("x{index}")),
            Self::Y(index) => Cow::Owned(format!("y{index}")),
        }
    }
}

impl Encode for AxisRef {
    fn encode(&self) -> WireValue {
        WireValue::String(self.token().into_owned())
    }
}

#[cfg(test)]
impl crate::core::test_support::Sample for AxisRef {
    fn sample() -> Self {
        Self::X(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::encode_node;

    #[test]
    fn axis_refs_number_secondary_axes_only() {
        assert_eq!(AxisRef::X(1).token(), "x");
        assert_eq!(AxisRef::X(0).token(), "x");
        assert_eq!(AxisRef::Y(3).token(), "y3");
        assert_eq!(AxisRef::Paper.token(), "paper");
        assert_eq!(AxisRef::Free.encode(), WireValue::String("free".to_owned()));
    }

    #[test]
    fn title_from_text_sets_only_text() {
        let map = encode_node(&Title::from("Revenue"));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["text"]);
    }

    #[test]
    fn pad_uses_single_letter_keys() {
        let map = encode_node(&Pad::new().top(4).left(2));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["t", "l"]);
    }
}
