use std::collections::HashSet;

use bitflags::Flags;
use smallvec::SmallVec;
use tracing::debug;

use crate::error::{PlotError, PlotResult};

/// Separator used by the external runtime for "OR of flags" strings.
pub const FLAG_SEPARATOR: &str = "+";

/// Wire vocabulary layered over a `bitflags` type.
///
/// `VOCABULARY` lists `(option, wire name)` pairs in canonical encoding order.
/// Implement it with the `wire_flags!` macro next to the `bitflags!` block.
pub trait FlagSet: Flags<Bits = u8> + Copy + 'static {
    const NAME: &'static str;
    const VOCABULARY: &'static [(Self, &'static str)];

    /// Wire names of every set option, in vocabulary order.
    fn names(self) -> SmallVec<[&'static str; 5]> {
        Self::VOCABULARY
            .iter()
            .filter(|(option, _)| self.contains(*option))
            .map(|(_, name)| *name)
            .collect()
    }
}

/// Reduces a flag set to the runtime's single delimited token.
///
/// Order follows the vocabulary, never the order bits were set in. An empty
/// set yields an empty string.
#[must_use]
pub fn combine_flags<F: FlagSet>(flags: F) -> String {
    flags.names().join(FLAG_SEPARATOR)
}

/// Checks a raw vocabulary against the bits its flag type declares.
///
/// Every option must own exactly one distinct bit and a distinct name, and
/// together the options must cover `declared` exactly.
pub fn validate_flag_vocabulary(
    flags: &'static str,
    declared: u8,
    vocabulary: &[(u8, &'static str)],
) -> PlotResult<()> {
    let mut seen_bits = 0_u8;
    let mut seen_names = HashSet::with_capacity(vocabulary.len());

    for &(bits, option) in vocabulary {
        if bits.count_ones() != 1 {
            return Err(PlotError::InvalidFlagBit {
                flags,
                option,
                bits,
            });
        }
        if seen_bits & bits != 0 {
            return Err(PlotError::DuplicateFlagBit { flags, bits });
        }
        seen_bits |= bits;
        if !seen_names.insert(option) {
            return Err(PlotError::DuplicateFlagName { flags, option });
        }
    }
    if seen_bits != declared {
        return Err(PlotError::UnmappedFlagBits {
            flags,
            bits: declared & !seen_bits,
        });
    }

    debug!(flags, options = vocabulary.len(), "flag vocabulary validated");
    Ok(())
}

/// Validates the wire vocabulary of `F` against its `bitflags` declaration.
pub fn validate_flag_set<F: FlagSet>() -> PlotResult<()> {
    let vocabulary: SmallVec<[(u8, &'static str); 5]> = F::VOCABULARY
        .iter()
        .map(|(option, name)| (option.bits(), *name))
        .collect();
    validate_flag_vocabulary(F::NAME, F::all().bits(), &vocabulary)
}

/// Attaches wire tokens, `Encode` and test samples to a `bitflags!` type.
///
/// ```ignore
/// bitflags! {
///     #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
///     pub struct SpikeMode: u8 {
///         const TO_AXIS = 1 << 0;
///         const ACROSS = 1 << 1;
///         const MARKER = 1 << 2;
///     }
/// }
///
/// wire_flags! {
///     SpikeMode {
///         TO_AXIS => "toaxis",
///         ACROSS => "across",
///         MARKER => "marker",
///     }
/// }
/// ```
macro_rules! wire_flags {
    (
        $name:ident {
            $($option:ident => $token:literal),+ $(,)?
        }
    ) => {
        impl $crate::core::FlagSet for $name {
            const NAME: &'static str = stringify!($name);
            const VOCABULARY: &'static [(Self, &'static str)] =
                &[$((Self::$option, $token)),+];
        }

        impl $crate::core::Encode for $name {
            fn encode(&self) -> $crate::core::WireValue {
                $crate::core::WireValue::String($crate::core::combine_flags(*self))
            }
        }

        #[cfg(test)]
        impl $crate::core::test_support::Sample for $name {
            fn sample() -> Self {
                Self::all()
            }
        }
    };
}

pub(crate) use wire_flags;

#[cfg(test)]
mod tests {
    use bitflags::bitflags;

    use super::*;
    use crate::core::{Encode, WireValue};

    bitflags! {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        struct Modes: u8 {
            const EVENT = 1 << 0;
            const SELECT = 1 << 1;
            const NONE = 1 << 2;
        }
    }

    wire_flags! {
        Modes {
            EVENT => "event",
            SELECT => "select",
            NONE => "none",
        }
    }

    bitflags! {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        struct Partial: u8 {
            const LEFT = 1 << 0;
            const RIGHT = 1 << 1;
        }
    }

    wire_flags! {
        Partial {
            LEFT => "left",
        }
    }

    #[test]
    fn combines_in_vocabulary_order() {
        assert_eq!(combine_flags(Modes::NONE | Modes::EVENT), "event+none");
        assert_eq!(combine_flags(Modes::all()), "event+select+none");
        assert_eq!(combine_flags(Modes::SELECT), "select");
    }

    #[test]
    fn empty_set_encodes_as_empty_string() {
        assert_eq!(combine_flags(Modes::empty()), "");
        assert_eq!(Modes::empty().encode(), WireValue::String(String::new()));
    }

    #[test]
    fn membership_and_union() {
        let mut flags = Modes::EVENT;
        flags |= Modes::SELECT;
        assert!(flags.contains(Modes::EVENT));
        assert!(flags.contains(Modes::EVENT | Modes::SELECT));
        assert!(!flags.contains(Modes::NONE));
        assert_eq!(flags.union(Modes::NONE), Modes::all());
        assert!(Modes::empty().is_empty());
    }

    #[test]
    fn truncation_drops_unknown_bits() {
        assert_eq!(
            Modes::from_bits_truncate(0b1111_1101),
            Modes::EVENT | Modes::NONE
        );
        assert_eq!(Modes::from_bits_truncate(0b1111_1001), Modes::EVENT);
    }

    #[test]
    fn declared_vocabulary_is_valid() {
        assert_eq!(validate_flag_set::<Modes>(), Ok(()));
    }

    #[test]
    fn vocabulary_must_cover_every_declared_bit() {
        assert_eq!(
            validate_flag_set::<Partial>(),
            Err(PlotError::UnmappedFlagBits {
                flags: "Partial",
                bits: 0b10,
            })
        );
    }

    #[test]
    fn vocabulary_defects_are_reported() {
        const SHARED: &[(u8, &str)] = &[(0b01, "a"), (0b01, "b")];
        const WIDE: &[(u8, &str)] = &[(0b11, "a")];
        const MISSING: &[(u8, &str)] = &[(0, "a")];
        const RENAMED: &[(u8, &str)] = &[(0b01, "a"), (0b10, "a")];

        assert_eq!(
            validate_flag_vocabulary("Shared", 0b01, SHARED),
            Err(PlotError::DuplicateFlagBit {
                flags: "Shared",
                bits: 0b01,
            })
        );
        assert!(matches!(
            validate_flag_vocabulary("Wide", 0b11, WIDE),
            Err(PlotError::InvalidFlagBit { bits: 0b11, .. })
        ));
        assert!(matches!(
            validate_flag_vocabulary("Missing", 0b01, MISSING),
            Err(PlotError::InvalidFlagBit { bits: 0, .. })
        ));
        assert_eq!(
            validate_flag_vocabulary("Renamed", 0b11, RENAMED),
            Err(PlotError::DuplicateFlagName {
                flags: "Renamed",
                option: "a",
            })
        );
    }
}
