// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar, ΔT and solar-longitude arithmetic for the 24 solar terms.
//!
//! The crate is a stack of pure functions, leaves first:
//!
//! | Module | Role |
//! |--------|------|
//! | [`calendar`] | Julian/Gregorian boundary policy, leap years, weekday |
//! | [`civil`] | [`CivilDateTime`] value type |
//! | [`julian_date`] / `julian_date_ext` | [`JulianDate`] and the calendar ↔ JD conversions |
//! | [`delta_t`] | ΔT = TT − UT (Espenak & Meeus polynomials) |
//! | [`angle`] | unit conversions and range reduction |
//! | [`vsop87`] | [`EarthSeries`] provider seam and the bundled [`Vsop87Earth`] |
//! | [`sun`] | apparent geocentric longitude of the Sun |
//! | [`root_finding`] | Newton–Raphson with a numerical derivative |
//! | [`solar_terms`] | the 24 terms and their instants |
//!
//! # Time axes
//!
//! [`JulianDate`] does not record whether it is TT or UT. Calendar input is
//! UT; the solar pipeline expects TT. Convert with
//! [`JulianDate::tt_from_ut`] / [`JulianDate::ut_from_tt`], or ask
//! [`JulianDate::to_civil`] for [`TimeCorrection::TtToUt`].
//!
//! # Example
//!
//! ```rust
//! use chrono::FixedOffset;
//! use jieqi::{solar_terms, TimeCorrection, Vsop87Earth};
//!
//! let xiazhi = solar_terms::by_name("夏至").unwrap();
//! let tt = solar_terms::solar_term_instant(&Vsop87Earth, 2021, xiazhi).unwrap();
//! let beijing = FixedOffset::east_opt(8 * 3600).unwrap();
//! let local = tt.to_civil(beijing, TimeCorrection::TtToUt).unwrap();
//! assert_eq!((local.year, local.month, local.day), (2021, 6, 21));
//! ```

pub mod angle;
pub mod calendar;
pub mod civil;
pub mod delta_t;
mod error;
pub mod julian_date;
mod julian_date_ext;
pub mod root_finding;
pub mod solar_terms;
pub mod sun;
pub mod vsop87;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::{is_leap_year, weekday, CalendarKind};
pub use civil::CivilDateTime;
pub use delta_t::{delta_t, delta_t_for};
pub use error::{Error, Result};
pub use julian_date::JulianDate;
pub use julian_date_ext::{julian_day_number, julian_day_number_in, TimeCorrection};
pub use solar_terms::{solar_term_instant, solar_terms_of_year, SolarTerm, SOLAR_TERMS};
pub use sun::apparent_geocentric_longitude;
pub use vsop87::{EarthQuantity, EarthSeries, Vsop87Earth};
