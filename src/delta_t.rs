// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # ΔT (Delta T): TT↔UT offset model
//!
//! Piecewise polynomial model for **ΔT = TT − UT** published by Espenak &
//! Meeus (NASA *Five Millennium Canon of Solar Eclipses*, 2006).
//!
//! Every polynomial is evaluated at the decimal year
//! `y = year + (month − 0.5) / 12`, i.e. the middle of the month. Regimes are
//! selected by the plain integer `year`:
//!
//! | Years | Argument |
//! |-------|----------|
//! | < −500 | long-term parabola in `u = (year − 1820) / 100` |
//! | −500 ‥ 500 | `u = y / 100` |
//! | 500 ‥ 1600 | `u = (y − 1000) / 100` |
//! | 1600 ‥ 2005 | `t = y − epoch`, one cubic–septic polynomial per span |
//! | 2005 ‥ 2050 | `t = y − 2000` |
//! | 2050 ‥ 2150 | parabola with a linear bridge term |
//! | ≥ 2150 | long-term parabola in `u = (y − 1820) / 100` |
//!
//! ## Quick Example
//! ```rust
//! use jieqi::delta_t::delta_t;
//!
//! let dt = delta_t(2000, 1);
//! assert!((dt.value() - 63.87).abs() < 0.01);
//! ```
//!
//! ## Valid Time Range
//! The fit is asserted for −1999 ‥ 3000. Outside that window the function
//! still returns a value (the long-term parabola), it just means less.
//! Values after ~2050 are predictions.

use qtty::Seconds;

use crate::julian_date::JulianDate;
use crate::julian_date_ext::{decompose, CIVIL_RANGE_DAYS};

/// Decimal year at the middle of `month`.
#[inline]
fn decimal_year(year: i32, month: u32) -> f64 {
    f64::from(year) + (f64::from(month) - 0.5) / 12.0
}

// ------------------------------------------------------------------------------------
// ΔT Approximation Sections by Time Interval
// ------------------------------------------------------------------------------------

/// Long-term parabola (Morrison & Stephenson 2004).
///
/// Below −500 this is evaluated at the *integer* year, above 2150 at the
/// decimal year.
#[inline]
fn delta_t_long_term(y: f64) -> Seconds {
    let u = (y - 1820.0) / 100.0;
    Seconds::new(-20.0 + 32.0 * u * u)
}

/// **Years −500 ‥ 500**
#[inline]
fn delta_t_antiquity(y: f64) -> Seconds {
    let u = y / 100.0;
    Seconds::new(polynomial(
        u,
        &[
            10_583.6,
            -1_014.41,
            33.783_11,
            -5.952_053,
            -0.179_845_2,
            0.022_174_192,
            0.009_031_652_1,
        ],
    ))
}

/// **Years 500 ‥ 1600**
#[inline]
fn delta_t_medieval(y: f64) -> Seconds {
    let u = (y - 1000.0) / 100.0;
    Seconds::new(polynomial(
        u,
        &[
            1_574.2,
            -556.01,
            71.234_72,
            0.319_781,
            -0.850_346_3,
            -0.005_050_998,
            0.008_357_207_3,
        ],
    ))
}

/// **Years 1600 ‥ 1700**
#[inline]
fn delta_t_1600(y: f64) -> Seconds {
    let t = y - 1600.0;
    Seconds::new(120.0 - 0.9808 * t - 0.01532 * t * t + t * t * t / 7129.0)
}

/// **Years 1700 ‥ 1800**
#[inline]
fn delta_t_1700(y: f64) -> Seconds {
    let t = y - 1700.0;
    let t2 = t * t;
    Seconds::new(
        8.83 + 0.1603 * t - 0.005_928_5 * t2 + 0.000_133_36 * t2 * t - t2 * t2 / 1_174_000.0,
    )
}

/// **Years 1800 ‥ 1860**
#[inline]
fn delta_t_1800(y: f64) -> Seconds {
    let t = y - 1800.0;
    Seconds::new(polynomial(
        t,
        &[
            13.72,
            -0.332_447,
            0.006_861_2,
            0.004_111_6,
            -0.000_374_36,
            0.000_012_127_2,
            -0.000_000_169_9,
            0.000_000_000_875,
        ],
    ))
}

/// **Years 1860 ‥ 1900**
#[inline]
fn delta_t_1860(y: f64) -> Seconds {
    let t = y - 1860.0;
    let t5 = t * t * t * t * t;
    Seconds::new(
        polynomial(
            t,
            &[7.62, 0.5737, -0.251_754, 0.016_806_68, -0.000_447_362_4],
        ) + t5 / 233_174.0,
    )
}

/// **Years 1900 ‥ 1920**
#[inline]
fn delta_t_1900(y: f64) -> Seconds {
    let t = y - 1900.0;
    Seconds::new(polynomial(
        t,
        &[-2.79, 1.494_119, -0.059_893_9, 0.006_196_6, -0.000_197],
    ))
}

/// **Years 1920 ‥ 1941**
#[inline]
fn delta_t_1920(y: f64) -> Seconds {
    let t = y - 1920.0;
    Seconds::new(polynomial(t, &[21.20, 0.844_93, -0.076_100, 0.002_093_6]))
}

/// **Years 1941 ‥ 1961**
#[inline]
fn delta_t_1941(y: f64) -> Seconds {
    let t = y - 1950.0;
    Seconds::new(29.07 + 0.407 * t - t * t / 233.0 + t * t * t / 2547.0)
}

/// **Years 1961 ‥ 1986**
#[inline]
fn delta_t_1961(y: f64) -> Seconds {
    let t = y - 1975.0;
    Seconds::new(45.45 + 1.067 * t - t * t / 260.0 - t * t * t / 718.0)
}

/// **Years 1986 ‥ 2005**
#[inline]
fn delta_t_1986(y: f64) -> Seconds {
    let t = y - 2000.0;
    Seconds::new(polynomial(
        t,
        &[
            63.86,
            0.3345,
            -0.060_374,
            0.001_727_5,
            0.000_651_814,
            0.000_023_735_99,
        ],
    ))
}

/// **Years 2005 ‥ 2050**
#[inline]
fn delta_t_2005(y: f64) -> Seconds {
    let t = y - 2000.0;
    Seconds::new(62.92 + 0.322_17 * t + 0.005_589 * t * t)
}

/// **Years 2050 ‥ 2150**
/// The linear term bridges the 2050 value onto the long-term parabola.
#[inline]
fn delta_t_2050(y: f64) -> Seconds {
    let u = (y - 1820.0) / 100.0;
    Seconds::new(-20.0 + 32.0 * u * u - 0.5628 * (2150.0 - y))
}

/// Evaluates `c[0] + c[1]·x + c[2]·x² + …` by Horner's rule.
#[inline]
fn polynomial(x: f64, coefficients: &[f64]) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

/// Returns **ΔT** in seconds for the middle of `month` in `year`.
///
/// Total: years outside −1999 ‥ 3000 are extrapolated, never rejected.
pub fn delta_t(year: i32, month: u32) -> Seconds {
    let y = decimal_year(year, month);
    match year {
        i32::MIN..=-501 => delta_t_long_term(f64::from(year)),
        -500..=499 => delta_t_antiquity(y),
        500..=1599 => delta_t_medieval(y),
        1600..=1699 => delta_t_1600(y),
        1700..=1799 => delta_t_1700(y),
        1800..=1859 => delta_t_1800(y),
        1860..=1899 => delta_t_1860(y),
        1900..=1919 => delta_t_1900(y),
        1920..=1940 => delta_t_1920(y),
        1941..=1960 => delta_t_1941(y),
        1961..=1985 => delta_t_1961(y),
        1986..=2004 => delta_t_1986(y),
        2005..=2049 => delta_t_2005(y),
        2050..=2149 => delta_t_2050(y),
        _ => delta_t_long_term(y),
    }
}

/// Returns **ΔT** for the calendar month containing `jd`.
///
/// The month is read from `jd` as given, without any TT→UT shift, so the
/// lookup never depends on its own result.
pub fn delta_t_for(jd: JulianDate) -> Seconds {
    let date = decompose(jd.value().clamp(-CIVIL_RANGE_DAYS, CIVIL_RANGE_DAYS));
    delta_t(date.year, date.month)
}
