// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Solid Earth Tide
//!
//! Displacement of a point on the Earth's crust caused by the solid Earth
//! tide, following IERS Conventions (2003) §7.1.2, sampled across one UTC
//! calendar day.
//!
//! # Core types
//!
//! - [`TideEvaluator`] — pure evaluator: site + date → [`TideSeries`].
//! - [`GeodeticPosition`] — validated latitude/longitude.
//! - [`CalendarDate`] — validated proleptic Gregorian date.
//! - [`TideSeries`] / [`TideSample`] — time offset and east/north/up in metres.
//! - [`EvaluatorOptions`] — [`SamplingPolicy`] and [`TideSystem`].
//! - [`TideError`] — everything that can go wrong.
//!
//! # Time scales
//!
//! Samples are laid out in UTC while the ephemerides run on TT. Both are
//! [`Time<S>`] instants:
//!
//! | Marker | Scale |
//! |--------|-------|
//! | [`JD`] | Julian Date (TT) |
//! | [`MJD`] | Modified Julian Date (TT) |
//! | [`UTC`] | Modified Julian Date (UTC) |
//!
//! `UTC → TT` applies the leap-second table of [`leap_seconds`]; days
//! outside it are reported through [`TideSeries::leap_seconds_extrapolated`].
//!
//! # Example
//!
//! ```
//! use solid_tide::{CalendarDate, GeodeticPosition, TideEvaluator};
//!
//! let site = GeodeticPosition::from_degrees(60.0, -32.0)?;
//! let date = CalendarDate::new(2021, 7, 5)?;
//! let series = TideEvaluator::new().evaluate(site, date)?;
//!
//! assert_eq!(series.len(), 1441);
//! assert!(series.peak() < 1.0);
//! # Ok::<(), solid_tide::TideError>(())
//! ```

mod calendar;
pub mod ephemeris;
mod error;
mod evaluator;
mod geodesy;
pub(crate) mod instant;
mod julian_date_ext;
pub mod leap_seconds;
pub mod report;
pub(crate) mod scales;
mod series;
pub mod terms;
pub mod tide;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::CalendarDate;
pub use error::TideError;
pub use evaluator::{
    evaluate, EvaluatorOptions, SamplingPolicy, TideEvaluator, DISPLACEMENT_ENVELOPE,
    MIN_STEP_SECONDS, SECONDS_PER_DAY,
};
pub use geodesy::{Enu, GeodeticPosition};
pub use instant::{Time, TimeScale};
pub use scales::{JD, MJD, UTC};
pub use series::{TideSample, TideSeries};
pub use tide::TideSystem;
