// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Solar terms (节气)
//!
//! The 24 points where the Sun's apparent geocentric longitude crosses a
//! multiple of 15°. Term order 1 is the March equinox (春分, 0°); each later
//! order adds 15°.
//!
//! An instant is found with [`newton_raphson`](crate::root_finding::newton_raphson)
//! on `modπ(λ(jd) − λ_term)`, seeded at noon of the term's approximate date.
//! Results are on the **TT** axis; apply [`JulianDate::ut_from_tt`] or
//! [`JulianDate::to_civil`] with [`TimeCorrection::TtToUt`] for clock time.
//!
//! ```rust
//! use jieqi::{solar_terms, JulianDate, Vsop87Earth};
//!
//! let chunfen = solar_terms::by_name("春分").unwrap();
//! let jd = solar_terms::solar_term_instant(&Vsop87Earth, 2021, chunfen).unwrap();
//! // 2021-03-20 ~09:32 TT
//! assert!((jd.value() - 2_459_293.897).abs() < 0.01);
//! ```
//!
//! [`TimeCorrection::TtToUt`]: crate::TimeCorrection::TtToUt

use std::fmt;

use log::debug;
use qtty::{Degrees, Radians};

use crate::angle::{degrees_to_radians, mod_pi};
use crate::calendar::CalendarKind;
use crate::error::{Error, Result};
use crate::julian_date::JulianDate;
use crate::julian_date_ext::julian_day_number_in;
use crate::root_finding::{newton_raphson, MAX_ITERATIONS};
use crate::sun::apparent_geocentric_longitude;
use crate::vsop87::EarthSeries;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Longitude step between consecutive terms.
const DEGREES_PER_TERM: f64 = 15.0;

/// One of the 24 solar terms.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SolarTerm {
    /// 1 = 春分 (March equinox) … 24 = 惊蛰.
    pub order: u8,
    pub name: &'static str,
    pub pinyin: &'static str,
    /// Month of the approximate date.
    pub month: u32,
    /// Day of the approximate date; only used to seed the search.
    pub day: u32,
}

impl SolarTerm {
    /// Apparent solar longitude that defines the term.
    #[inline]
    pub fn longitude(&self) -> Degrees {
        Degrees::new(f64::from(self.order - 1) * DEGREES_PER_TERM)
    }
}

impl fmt::Display for SolarTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {}°)", self.name, self.pinyin, self.longitude().value())
    }
}

const fn term(order: u8, name: &'static str, pinyin: &'static str, month: u32, day: u32) -> SolarTerm {
    SolarTerm {
        order,
        name,
        pinyin,
        month,
        day,
    }
}

/// The 24 terms in calendar order, starting with 小寒 in early January.
pub const SOLAR_TERMS: [SolarTerm; 24] = [
    term(20, "小寒", "Xiaohan", 1, 5),
    term(21, "大寒", "Dahan", 1, 22),
    term(22, "立春", "Lichun", 2, 5),
    term(23, "雨水", "Yushui", 2, 22),
    term(24, "惊蛰", "Jingzhe", 3, 5),
    term(1, "春分", "Chunfen", 3, 22),
    term(2, "清明", "Qingming", 4, 5),
    term(3, "谷雨", "Guyu", 4, 22),
    term(4, "立夏", "Lixia", 5, 5),
    term(5, "小满", "Xiaoman", 5, 22),
    term(6, "芒种", "Mangzhong", 6, 5),
    term(7, "夏至", "Xiazhi", 6, 22),
    term(8, "小暑", "Xiaoshu", 7, 5),
    term(9, "大暑", "Dashu", 7, 22),
    term(10, "立秋", "Liqiu", 8, 5),
    term(11, "处暑", "Chushu", 8, 22),
    term(12, "白露", "Bailu", 9, 5),
    term(13, "秋分", "Qiufen", 9, 22),
    term(14, "寒露", "Hanlu", 10, 5),
    term(15, "霜降", "Shuangjiang", 10, 22),
    term(16, "立冬", "Lidong", 11, 5),
    term(17, "小雪", "Xiaoxue", 11, 22),
    term(18, "大雪", "Daxue", 12, 5),
    term(19, "冬至", "Dongzhi", 12, 22),
];

/// Looks a term up by its Chinese name or (case-insensitive) pinyin.
pub fn by_name(name: &str) -> Option<&'static SolarTerm> {
    SOLAR_TERMS
        .iter()
        .find(|t| t.name == name || t.pinyin.eq_ignore_ascii_case(name))
}

/// Looks a term up by its order (1 = 春分).
pub fn by_order(order: u8) -> Option<&'static SolarTerm> {
    SOLAR_TERMS.iter().find(|t| t.order == order)
}

/// TT instant at which the Sun reaches `term`'s longitude in `year`.
pub fn solar_term_instant<S: EarthSeries + ?Sized>(
    series: &S,
    year: i32,
    term: &SolarTerm,
) -> Result<JulianDate> {
    // The seed only has to be close; gap dates are not canonicalized here.
    let kind = CalendarKind::of(year, term.month, term.day);
    let seed = julian_day_number_in(kind, year, term.month, term.day) as f64;
    let target: Radians = degrees_to_radians(term.longitude());

    let offset = |jd: f64| {
        let lambda = apparent_geocentric_longitude(series, JulianDate::new(jd));
        mod_pi(lambda - target).value()
    };

    match newton_raphson(offset, seed) {
        Some(root) => {
            debug!(
                "{} {year}: converged to JD {} in {} iterations",
                term.pinyin, root.x, root.iterations
            );
            Ok(JulianDate::new(root.x))
        }
        None => Err(Error::NoConvergence {
            target_deg: term.longitude().value(),
            iterations: MAX_ITERATIONS,
        }),
    }
}

/// All 24 terms of `year` in calendar order, with their TT instants.
pub fn solar_terms_of_year<S: EarthSeries + ?Sized>(
    series: &S,
    year: i32,
) -> Result<Vec<(SolarTerm, JulianDate)>> {
    SOLAR_TERMS
        .iter()
        .map(|term| Ok((*term, solar_term_instant(series, year, term)?)))
        .collect()
}
