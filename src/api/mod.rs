pub mod error;

use std::fmt::Debug;

/// Numeric sort key produced by a projection.
///
/// Implemented for all primitive integers and floats. Ordering only needs to be
/// partial: NaN keys make results unspecified, but never unsafe.
pub trait Key: Copy + PartialOrd + Debug {
    /// Absolute difference type, used to pick the nearer of two candidates.
    type Distance: PartialOrd;

    /// Absolute difference between two keys.
    fn distance(self, other: Self) -> Self::Distance;

    /// Whether the key is a finite number (always true for integers).
    fn is_finite(self) -> bool {
        true
    }
}

macro_rules! int_key {
    ($($t:ty => $d:ty),*) => {
        $(
            impl Key for $t {
                type Distance = $d;

                fn distance(self, other: Self) -> $d {
                    self.abs_diff(other)
                }
            }
        )*
    };
}

int_key!(
    u8 => u8, u16 => u16, u32 => u32, u64 => u64, u128 => u128, usize => usize,
    i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize
);

macro_rules! float_key {
    ($($t:ty),*) => {
        $(
            impl Key for $t {
                type Distance = $t;

                fn distance(self, other: Self) -> $t {
                    (self - other).abs()
                }

                fn is_finite(self) -> bool {
                    <$t>::is_finite(self)
                }
            }
        )*
    };
}

float_key!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        assert_eq!(3u8.distance(7), 4);
        assert_eq!(i32::MIN.distance(i32::MAX), u32::MAX);
        assert_eq!((-2i64).distance(3), 5);
        assert_eq!(2.5f64.distance(1.0), 1.5);
        assert_eq!(1.0f32.distance(2.5), 1.5);
    }

    #[test]
    fn test_is_finite() {
        assert!(42u32.is_finite());
        assert!(Key::is_finite(1.0f64));
        assert!(!Key::is_finite(f64::NAN));
        assert!(!Key::is_finite(f32::INFINITY));
    }
}
