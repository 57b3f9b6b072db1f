use chrono::Utc;
use solid_tide::{CalendarDate, GeodeticPosition, TideEvaluator};

fn main() -> Result<(), solid_tide::TideError> {
    let date = CalendarDate::from(Utc::now().date_naive());
    let site = GeodeticPosition::from_degrees(48.8566, 2.3522)?;

    let series = TideEvaluator::new().evaluate(site, date)?;
    let noon = &series[720];

    println!("date: {date}");
    println!("samples: {}", series.len());
    println!(
        "12:00 UTC: east {:+.4} m, north {:+.4} m, up {:+.4} m",
        noon.east, noon.north, noon.up
    );
    println!("peak: {:.4} m", series.peak());
    if series.leap_seconds_extrapolated() {
        println!("(leap seconds extrapolated)");
    }
    Ok(())
}
