use chrono::{Datelike, FixedOffset, Utc};
use jieqi::{
    apparent_geocentric_longitude, delta_t_for, solar_terms_of_year, JulianDate, TimeCorrection,
    Vsop87Earth,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let now = Utc::now();
    let ut = JulianDate::from_utc(now);
    let tt = ut.tt_from_ut();
    let lambda = apparent_geocentric_longitude(&Vsop87Earth, tt);

    println!("JD(UT): {ut}");
    println!("ΔT: {}", delta_t_for(ut));
    println!("Solar longitude: {:.4}°", lambda.value().to_degrees());

    let beijing = FixedOffset::east_opt(8 * 3_600).ok_or("invalid offset")?;
    println!("\nSolar terms of {} (UTC+8):", now.year());
    for (term, instant) in solar_terms_of_year(&Vsop87Earth, now.year())? {
        let local = instant.to_civil(beijing, TimeCorrection::TtToUt)?;
        println!("  {:<24} {local}", term.to_string());
    }
    Ok(())
}
