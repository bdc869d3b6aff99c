use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;

use super::rename::{RenameTable, wire_key};
use super::wire::{WireMap, WireValue};

/// Conversion of one present field value into its wire form.
///
/// Every field type a node may declare implements this trait, so an
/// unsupported field type is a compile error rather than a runtime fallback.
pub trait Encode {
    fn encode(&self) -> WireValue;
}

/// A configuration node: a named aggregate of optional fields with a rename table.
pub trait ConfigNode {
    const NODE_NAME: &'static str;
    const FIELDS: RenameTable;

    /// Calls `visitor` with `(field identifier, encoded value)` for every
    /// present field, in declaration order.
    fn visit_present(&self, visitor: &mut dyn FnMut(&'static str, WireValue));
}

/// Encodes one node into its wire mapping.
///
/// Absent fields produce no key. Present child nodes always produce a
/// mapping, even when all of their own fields are absent.
///
/// # Panics
///
/// Panics when a visited field has no entry in `N::FIELDS`. Node types
/// declared through `config_node!` generate both from one field list.
#[must_use]
pub fn encode_node<N: ConfigNode + ?Sized>(node: &N) -> WireMap {
    let mut map = WireMap::new();
    node.visit_present(&mut |field: &'static str, value: WireValue| {
        // Tables are short static slices; a linear scan per present field.
        let Some(key) = wire_key(N::FIELDS, field) else {
            panic!(
                "node `{}` field `{field}` has no registered wire key",
                N::NODE_NAME
            );
        };
        map.insert(key, value);
    });
    trace!(node = N::NODE_NAME, keys = map.len(), "encoded node");
    map
}

/// Literal token a closed enumeration case serializes as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireToken {
    Str(&'static str),
    Int(i64),
    Bool(bool),
}

impl From<WireToken> for WireValue {
    fn from(token: WireToken) -> Self {
        match token {
            WireToken::Str(text) => Self::String(text.to_owned()),
            WireToken::Int(value) => Self::Int(value),
            WireToken::Bool(value) => Self::Bool(value),
        }
    }
}

/// Opaque "any JSON value" slot, passed through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnyValue(pub Value);

impl AnyValue {
    #[must_use]
    pub fn new(value: impl Into<Value>) -> Self {
        Self(value.into())
    }
}

impl From<Value> for AnyValue {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl Encode for AnyValue {
    fn encode(&self) -> WireValue {
        WireValue::Any(self.0.clone())
    }
}

impl Encode for bool {
    fn encode(&self) -> WireValue {
        WireValue::Bool(*self)
    }
}

macro_rules! encode_as_int {
    ($($ty:ty),+) => {
        $(
            impl Encode for $ty {
                fn encode(&self) -> WireValue {
                    WireValue::Int(i64::from(*self))
                }
            }
        )+
    };
}

encode_as_int!(i8, i16, i32, i64, u8, u16, u32);

/// Integral finite values inside the `i64` range, as the runtime writes them.
fn exact_int(value: f64) -> Option<i64> {
    // i64::MIN is exact as f64; 2^63 is the first value past i64::MAX.
    let lower = i64::MIN as f64;
    let in_range = value >= lower && value < -lower;
    (value.is_finite() && value.fract() == 0.0 && in_range).then(|| value as i64)
}

impl Encode for f32 {
    fn encode(&self) -> WireValue {
        f64::from(*self).encode()
    }
}

impl Encode for f64 {
    fn encode(&self) -> WireValue {
        exact_int(*self).map_or(WireValue::Float(*self), WireValue::Int)
    }
}

impl Encode for String {
    fn encode(&self) -> WireValue {
        WireValue::String(self.clone())
    }
}

impl Encode for str {
    fn encode(&self) -> WireValue {
        WireValue::String(self.to_owned())
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode(&self) -> WireValue {
        WireValue::Seq(self.iter().map(Encode::encode).collect())
    }
}

impl<T: Encode + ?Sized> Encode for Box<T> {
    fn encode(&self) -> WireValue {
        (**self).encode()
    }
}

/// Declares a configuration node: the struct (every field optional), its
/// rename table, builder setters and the `Encode`/`Serialize` glue.
///
/// Each field is written `name: Type => "wirekey"`; the struct and the
/// rename table are generated from the same list.
macro_rules! config_node {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $ty:ty => $key:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                pub $field: ::core::option::Option<$ty>,
            )*
        }

        impl $name {
            #[must_use]
            pub fn new() -> Self {
                Self::default()
            }

            $(
                #[doc = concat!("Sets the `", $key, "` wire field.")]
                #[must_use]
                pub fn $field(mut self, value: impl ::core::convert::Into<$ty>) -> Self {
                    self.$field = ::core::option::Option::Some(value.into());
                    self
                }
            )*
        }

        impl $crate::core::ConfigNode for $name {
            const NODE_NAME: &'static str = stringify!($name);
            const FIELDS: $crate::core::RenameTable = &[
                $($crate::core::FieldRename::new(stringify!($field), $key),)*
            ];

            #[allow(unused_variables)]
            fn visit_present(
                &self,
                visitor: &mut dyn FnMut(&'static str, $crate::core::WireValue),
            ) {
                $(
                    if let ::core::option::Option::Some(value) = &self.$field {
                        visitor(stringify!($field), $crate::core::Encode::encode(value));
                    }
                )*
            }
        }

        impl $crate::core::Encode for $name {
            fn encode(&self) -> $crate::core::WireValue {
                $crate::core::WireValue::Map($crate::core::encode_node(self))
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::core::result::Result<S::Ok, S::Error> {
                ::serde::Serialize::serialize(&$crate::core::encode_node(self), serializer)
            }
        }

        #[cfg(test)]
        impl $crate::core::test_support::Sample for $name {
            fn sample() -> Self {
                Self {
                    $($field: ::core::option::Option::Some(
                        <$ty as $crate::core::test_support::Sample>::sample(),
                    ),)*
                }
            }
        }
    };
}

/// Declares a closed enumeration with literal wire tokens.
///
/// String-token form: `Case => "token"`. Integer-token form uses the `: int`
/// marker after the enum name: `Case => 3`.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : int {
            $($(#[$case_meta:meta])* $case:ident => $token:literal),+ $(,)?
        }
    ) => {
        $crate::core::wire_enum!(@emit $(#[$meta])* $vis $name
            [$($(#[$case_meta])* $case => $crate::core::WireToken::Int($token)),+]);
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$case_meta:meta])* $case:ident => $token:literal),+ $(,)?
        }
    ) => {
        $crate::core::wire_enum!(@emit $(#[$meta])* $vis $name
            [$($(#[$case_meta])* $case => $crate::core::WireToken::Str($token)),+]);
    };
    (@emit $(#[$meta:meta])* $vis:vis $name:ident
        [$($(#[$case_meta:meta])* $case:ident => $token:expr),+]) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($(#[$case_meta])* $case,)+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$case),+];

            #[must_use]
            pub const fn token(self) -> $crate::core::WireToken {
                match self {
                    $(Self::$case => $token,)+
                }
            }
        }

        impl $crate::core::Encode for $name {
            fn encode(&self) -> $crate::core::WireValue {
                self.token().into()
            }
        }

        #[cfg(test)]
        impl $crate::core::test_support::Sample for $name {
            fn sample() -> Self {
                Self::ALL[0]
            }
        }
    };
}

pub(crate) use config_node;
pub(crate) use wire_enum;
