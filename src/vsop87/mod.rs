// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # VSOP87 Earth series
//!
//! The solar pipeline only needs one capability from a planetary theory: the
//! partial sums `L0‥L5`, `B0‥B4` and `R0‥R5` of Earth's heliocentric
//! coordinates at a time `t` in Julian millennia from J2000. [`EarthSeries`]
//! is that seam. Coefficient tables live behind it, so the pipeline can be
//! exercised with synthetic one-term series as easily as with real data.
//!
//! | Quantity | Orders | Unit of the sum |
//! |----------|--------|-----------------|
//! | [`EarthQuantity::Longitude`] | 0‥5 | rad |
//! | [`EarthQuantity::Latitude`] | 0‥4 | rad |
//! | [`EarthQuantity::Radius`] | 0‥5 | AU |
//!
//! [`Vsop87Earth`] is the bundled provider.

mod earth;

pub use earth::Vsop87Earth;

use qtty::Millennia;

/// One periodic term `A · cos(B + C · t)`, stored as `[A, B, C]`.
pub type Term = [f64; 3];

/// Physical quantity selector for an [`EarthSeries`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EarthQuantity {
    /// Heliocentric ecliptic longitude `L`.
    Longitude,
    /// Heliocentric ecliptic latitude `B`.
    Latitude,
    /// Sun–Earth distance `R`.
    Radius,
}

impl EarthQuantity {
    /// Number of polynomial orders the pipeline reads for this quantity.
    #[inline]
    pub const fn orders(self) -> usize {
        match self {
            Self::Longitude | Self::Radius => 6,
            Self::Latitude => 5,
        }
    }
}

/// Source of Earth's VSOP87 partial sums.
///
/// Implementations must be pure functions of their arguments. An order with
/// no terms evaluates to `0.0`.
pub trait EarthSeries {
    /// Partial sum of the series of `quantity` at `order`, evaluated at `t`.
    fn term(&self, quantity: EarthQuantity, order: usize, t: Millennia) -> f64;

    /// Full value `Σ termₙ(t) · tⁿ`, combined by Horner's rule from the
    /// highest order down.
    fn evaluate(&self, quantity: EarthQuantity, t: Millennia) -> f64 {
        let tv = t.value();
        (0..quantity.orders())
            .rev()
            .fold(0.0, |acc, order| acc * tv + self.term(quantity, order, t))
    }
}

impl<S: EarthSeries + ?Sized> EarthSeries for &S {
    #[inline]
    fn term(&self, quantity: EarthQuantity, order: usize, t: Millennia) -> f64 {
        (**self).term(quantity, order, t)
    }
}

/// Sums a table of periodic terms at `t` (Julian millennia).
#[inline]
pub fn sum_terms(terms: &[Term], t: f64) -> f64 {
    terms
        .iter()
        .map(|term| term[0] * term[2].mul_add(t, term[1]).cos())
        .sum()
}
