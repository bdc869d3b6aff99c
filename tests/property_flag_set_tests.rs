use bitflags::Flags;
use plot_layout::core::{FLAG_SEPARATOR, FlagSet, combine_flags};
use plot_layout::schema::{ArrowSide, ClickMode, SpikeMode, TraceOrder};
use proptest::prelude::*;

fn spike_option() -> impl Strategy<Value = SpikeMode> {
    prop_oneof![
        Just(SpikeMode::TO_AXIS),
        Just(SpikeMode::ACROSS),
        Just(SpikeMode::MARKER),
    ]
}

fn assert_canonical<F: FlagSet>(flags: F) -> Result<(), TestCaseError> {
    let encoded = combine_flags(flags);
    let expected: Vec<&str> = F::VOCABULARY
        .iter()
        .filter(|(option, _)| flags.contains(*option))
        .map(|(_, name)| *name)
        .collect();
    prop_assert_eq!(encoded, expected.join(FLAG_SEPARATOR));
    Ok(())
}

proptest! {
    #[test]
    fn spike_mode_order_ignores_insertion_order(
        options in proptest::collection::vec(spike_option(), 0..6)
    ) {
        let forward = options.iter().fold(SpikeMode::empty(), |acc, option| acc | *option);
        let backward = options.iter().rev().fold(SpikeMode::empty(), |acc, option| acc | *option);

        prop_assert_eq!(combine_flags(forward), combine_flags(backward));
        assert_canonical(forward)?;
    }

    #[test]
    fn every_subset_encodes_canonically(bits in 0u8..=255) {
        assert_canonical(ClickMode::from_bits_truncate(bits))?;
        assert_canonical(SpikeMode::from_bits_truncate(bits))?;
        assert_canonical(TraceOrder::from_bits_truncate(bits))?;
        assert_canonical(ArrowSide::from_bits_truncate(bits))?;
    }

    #[test]
    fn token_count_matches_set_bits(bits in 0u8..8) {
        let flags = ClickMode::from_bits_truncate(bits);
        let encoded = combine_flags(flags);
        let tokens = if encoded.is_empty() { 0 } else { encoded.split('+').count() };
        prop_assert_eq!(tokens, bits.count_ones() as usize);
    }
}

#[test]
fn spike_mode_marker_then_to_axis() {
    let mut flags = SpikeMode::MARKER;
    flags |= SpikeMode::TO_AXIS;
    assert_eq!(combine_flags(flags), "toaxis+marker");
}

#[test]
fn click_mode_event_and_none() {
    assert_eq!(combine_flags(ClickMode::EVENT | ClickMode::NONE), "event+none");
    assert_eq!(combine_flags(ClickMode::empty()), "");
}
