//! Unit-safe quantities for grid topology analysis.
//!
//! Substation and line capacities are expressed in megawatts, line lengths in
//! kilometres. Keeping them as distinct newtypes means a capacity can never be
//! fed into a shortest-path cost by accident.
//!
//! ```
//! use pylon_core::units::{Kilometers, Megawatts};
//!
//! let route = Kilometers(5.2) + Kilometers(12.5);
//! assert!((route.value() - 17.7).abs() < 1e-9);
//!
//! let lost: Megawatts = [Megawatts(300.0), Megawatts(250.0)].iter().sum();
//! assert_eq!(lost, Megawatts(550.0));
//!
//! // Does not compile: different units
//! // let wrong = route + lost;
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Sub};

/// Implements arithmetic shared by every unit type.
macro_rules! impl_unit_ops {
    ($type:ty, $unit_name:literal) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl AddAssign for $type {
            fn add_assign(&mut self, rhs: Self) {
                self.0 += rhs.0;
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl std::fmt::Display for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{:.1} {}", self.0, $unit_name)
            }
        }

        impl $type {
            /// Zero quantity
            pub const ZERO: Self = Self(0.0);

            #[inline]
            pub const fn new(value: f64) -> Self {
                Self(value)
            }

            /// Raw numeric value
            #[inline]
            pub const fn value(self) -> f64 {
                self.0
            }

            #[inline]
            pub fn is_finite(self) -> bool {
                self.0.is_finite()
            }

            /// Strictly below zero, so `-0.0` is not negative
            #[inline]
            pub fn is_negative(self) -> bool {
                self.0 < 0.0
            }
        }

        impl std::iter::Sum for $type {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                Self(iter.map(|x| x.0).sum())
            }
        }

        impl<'a> std::iter::Sum<&'a $type> for $type {
            fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
                Self(iter.map(|x| x.0).sum())
            }
        }
    };
}

/// Throughput capacity in megawatts (MW)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Megawatts(pub f64);

impl_unit_ops!(Megawatts, "MW");

/// Physical line length in kilometres (km)
///
/// Used as the edge cost for weighted shortest-path queries.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Kilometers(pub f64);

impl_unit_ops!(Kilometers, "km");
