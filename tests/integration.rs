use chrono::{DateTime, FixedOffset, Offset, Utc, Weekday};
use jieqi::calendar::is_gap_date;
use jieqi::{
    delta_t, julian_day_number, julian_day_number_in, solar_term_instant, solar_terms,
    solar_terms_of_year, weekday, CalendarKind, CivilDateTime, JulianDate, TimeCorrection,
    Vsop87Earth,
};
use proptest::prelude::*;
use qtty::{Days, Seconds};

fn utc() -> FixedOffset {
    Utc.fix()
}

#[test]
fn known_julian_day_numbers() {
    assert_eq!(julian_day_number(1977, 3, 27), 2_443_230);
    assert_eq!(julian_day_number(2005, 5, 31), 2_453_522);
    assert_eq!(julian_day_number(1400, 3, 27), 2_232_494);
    assert_eq!(
        julian_day_number_in(CalendarKind::Julian, 1400, 3, 27),
        2_232_494
    );
}

#[test]
fn calendar_switch_leaves_no_hole_and_no_overlap() {
    let last_julian = julian_day_number(1582, 10, 4);
    let first_gregorian = julian_day_number(1582, 10, 15);
    assert_eq!(first_gregorian - last_julian, 1);
    for day in 5..=14 {
        assert_eq!(julian_day_number(1582, 10, day), first_gregorian);
    }
}

#[test]
fn weekday_numbering_starts_on_sunday() {
    assert_eq!(weekday(2016, 2, 16).num_days_from_sunday(), 2);
    assert_eq!(weekday(1416, 2, 16).num_days_from_sunday(), 0);
    assert_eq!(weekday(1582, 10, 4), Weekday::Thu);
    assert_eq!(weekday(1582, 10, 15), Weekday::Fri);
}

#[test]
fn chrono_and_calendar_agree_after_1582() {
    let dt = DateTime::from_timestamp(1_616_233_020, 0).unwrap(); // 2021-03-20 09:37:00Z
    let from_chrono = JulianDate::from_utc(dt);
    let from_calendar = JulianDate::from_civil(&CivilDateTime::new(2021, 3, 20, 9, 37, 0.0).unwrap());
    assert!((from_chrono - from_calendar).abs() < Days::new(1e-9));
}

#[test]
fn delta_t_near_j2000() {
    let dt = delta_t(2000, 1);
    assert!((dt - Seconds::new(63.83)).abs() < Seconds::new(1.0));
}

#[test]
fn ut_tt_round_trip_through_the_calendar() {
    let ut = JulianDate::from_civil(&CivilDateTime::new(2021, 6, 21, 3, 32, 0.0).unwrap());
    let tt = ut.tt_from_ut();
    assert!(((tt - ut).value() * 86_400.0 - 72.41).abs() < 0.1);

    let back = tt.to_civil(utc(), TimeCorrection::TtToUt).unwrap();
    assert_eq!((back.year, back.month, back.day), (2021, 6, 21));
    assert!((back.seconds_of_day() - (3.0 * 3_600.0 + 32.0 * 60.0)).abs() < 1e-3);
}

#[test]
fn solstice_2021_in_beijing_time() {
    let xiazhi = solar_terms::by_name("Xiazhi").unwrap();
    let tt = solar_term_instant(&Vsop87Earth, 2021, xiazhi).unwrap();
    let beijing = FixedOffset::east_opt(8 * 3_600).unwrap();
    let local = tt.to_civil(beijing, TimeCorrection::TtToUt).unwrap();
    assert_eq!((local.year, local.month, local.day), (2021, 6, 21));
    // published 11:32; nutation is not modelled, so allow a few minutes
    let minutes = f64::from(local.hour * 60 + local.minute);
    assert!((minutes - (11.0 * 60.0 + 32.0)).abs() < 10.0, "{local}");
}

#[test]
fn every_term_of_2021_falls_near_its_table_date() {
    for (term, tt) in solar_terms_of_year(&Vsop87Earth, 2021).unwrap() {
        let civil = tt.to_civil(utc(), TimeCorrection::TtToUt).unwrap();
        assert_eq!(civil.month, term.month, "{term}");
        assert!(civil.day.abs_diff(term.day) <= 4, "{term} on {civil}");
    }
}

proptest! {
    #[test]
    fn civil_round_trip(
        year in -4000i32..4000,
        month in 1u32..=12,
        day in 1u32..=28,
        hour in 0u32..24,
        minute in 0u32..60,
        second in 0.0f64..59.999,
    ) {
        prop_assume!(!is_gap_date(year, month, day));
        let civil = CivilDateTime::new(year, month, day, hour, minute, second).unwrap();
        let back = JulianDate::from_civil(&civil)
            .to_civil(utc(), TimeCorrection::None)
            .unwrap();
        prop_assert_eq!((back.year, back.month, back.day), (year, month, day));
        prop_assert!((back.seconds_of_day() - civil.seconds_of_day()).abs() < 1e-3);
    }

    #[test]
    fn weekday_follows_the_day_count(
        year in -4000i32..3000,
        month in 1u32..=12,
        day in 1u32..=28,
    ) {
        prop_assume!(!is_gap_date(year, month, day));
        let from_count = (julian_day_number(year, month, day) + 1).rem_euclid(7);
        prop_assert_eq!(i64::from(weekday(year, month, day).num_days_from_sunday()), from_count);
    }

    #[test]
    fn later_dates_get_larger_julian_dates(
        year in -2000i32..3000,
        month in 1u32..=12,
        day in 1u32..=27,
    ) {
        prop_assume!(!is_gap_date(year, month, day) && !is_gap_date(year, month, day + 1));
        prop_assert!(julian_day_number(year, month, day + 1) > julian_day_number(year, month, day));
    }
}

#[cfg(feature = "serde")]
#[test]
fn serde_civil_and_terms() {
    let civil = CivilDateTime::new(1977, 3, 27, 6, 6, 6.0).unwrap();
    let json = serde_json::to_string(&civil).unwrap();
    let back: CivilDateTime = serde_json::from_str(&json).unwrap();
    assert_eq!(back, civil);

    let json = serde_json::to_value(solar_terms::by_name("春分").unwrap()).unwrap();
    assert_eq!(json["order"], 1);
    assert_eq!(json["pinyin"], "Chunfen");

    let kind: CalendarKind = serde_json::from_str("\"Julian\"").unwrap();
    assert_eq!(kind, CalendarKind::Julian);
}
