//! Fully populated sample values used by the key-fidelity tests.

use super::AnyValue;

/// Produces a present value for every field of a node, recursively.
pub(crate) trait Sample {
    fn sample() -> Self;
}

macro_rules! sample_via {
    ($($ty:ty => $value:expr),+ $(,)?) => {
        $(
            impl Sample for $ty {
                fn sample() -> Self {
                    $value
                }
            }
        )+
    };
}

sample_via! {
    bool => true,
    i32 => 3,
    i64 => 7,
    u8 => 2,
    u32 => 5,
    f64 => 1.5,
    String => "sample".to_owned(),
    AnyValue => AnyValue::new(serde_json::json!([0, 1])),
}

impl<T: Sample> Sample for Vec<T> {
    fn sample() -> Self {
        vec![T::sample()]
    }
}
