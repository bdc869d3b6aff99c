use bitflags::bitflags;

use crate::core::{config_node, wire_enum, wire_flags};

use super::common::{Font, Orientation, Title, VerticalAlign, XAnchor, YAnchor};

config_node! {
    pub struct Legend {
        background_color: String => "bgcolor",
        border_color: String => "bordercolor",
        border_width: f64 => "borderwidth",
        font: Font => "font",
        orientation: Orientation => "orientation",
        trace_order: TraceOrder => "traceorder",
        trace_group_gap: f64 => "tracegroupgap",
        item_sizing: ItemSizing => "itemsizing",
        item_click: ItemClick => "itemclick",
        item_double_click: ItemClick => "itemdoubleclick",
        x: f64 => "x",
        x_anchor: XAnchor => "xanchor",
        y: f64 => "y",
        y_anchor: YAnchor => "yanchor",
        vertical_align: VerticalAlign => "valign",
        title: Title => "title",
    }
}

bitflags! {
    /// Ordering of legend items relative to trace order.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TraceOrder: u8 {
        const REVERSED = 1 << 0;
        const GROUPED = 1 << 1;
        const NORMAL = 1 << 2;
    }
}

wire_flags! {
    TraceOrder {
        REVERSED => "reversed",
        GROUPED => "grouped",
        NORMAL => "normal",
    }
}

wire_enum! {
    pub enum ItemSizing {
        Trace => "trace",
        Constant => "constant",
    }
}

wire_enum! {
    pub enum ItemClick {
        Toggle => "toggle",
        ToggleOthers => "toggleothers",
        Disabled => "false",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{WireValue, encode_node};

    #[test]
    fn grouped_reversed_order_uses_canonical_token() {
        let legend = Legend::new().trace_order(TraceOrder::GROUPED | TraceOrder::REVERSED);
        assert_eq!(
            encode_node(&legend).get("traceorder"),
            Some(&WireValue::String("reversed+grouped".to_owned()))
        );
    }

    #[test]
    fn explicitly_empty_trace_order_is_written() {
        let map = encode_node(&Legend::new().trace_order(TraceOrder::empty()));
        assert_eq!(map.get("traceorder"), Some(&WireValue::String(String::new())));
    }

    #[test]
    fn item_click_can_be_disabled() {
        let map = encode_node(
            &Legend::new()
                .item_click(ItemClick::ToggleOthers)
                .item_double_click(ItemClick::Disabled),
        );
        assert_eq!(
            map.get("itemclick"),
            Some(&WireValue::String("toggleothers".to_owned()))
        );
        assert_eq!(
            map.get("itemdoubleclick"),
            Some(&WireValue::String("false".to_owned()))
        );
    }
}
