// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Tide evaluator
//!
//! Drives the displacement model across one UTC day:
//!
//! ```text
//! date ─► MJD(UTC) ─► sample instant ─► TT ─► Sun, Moon ─► ΔX (ECEF) ─► east/north/up
//! ```
//!
//! Each sample is independent of the others, and the evaluator holds no
//! state besides its options, so one instance can be shared freely.

use nalgebra::Vector3;
use qtty::Days;

use crate::calendar::CalendarDate;
use crate::ephemeris::{greenwich_hour_angle, moon_position, sun_position};
use crate::error::TideError;
use crate::geodesy::{Enu, GeodeticPosition};
use crate::instant::Time;
use crate::leap_seconds::tai_minus_utc;
use crate::scales::{JD, MJD, UTC};
use crate::series::{TideSample, TideSeries};
use crate::tide::{displacement, TideSystem};

/// Seconds in one UTC day (leap seconds aside).
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Any component at or above this magnitude (m) signals a defect.
pub const DISPLACEMENT_ENVELOPE: f64 = 1.0;

/// Finest accepted sampling step in seconds (86 401 samples).
pub const MIN_STEP_SECONDS: f64 = 1.0;

/// Regular sampling of one day, both midnights included.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "f64", into = "f64")
)]
pub struct SamplingPolicy {
    step_seconds: f64,
}

impl SamplingPolicy {
    /// One sample per minute: 1441 samples.
    pub const PER_MINUTE: Self = Self { step_seconds: 60.0 };

    /// A custom step of at least [`MIN_STEP_SECONDS`] that divides the day
    /// evenly.
    pub fn new(step_seconds: f64) -> Result<Self, TideError> {
        let intervals = SECONDS_PER_DAY / step_seconds;
        if !step_seconds.is_finite()
            || step_seconds < MIN_STEP_SECONDS
            || step_seconds > SECONDS_PER_DAY
            || intervals.fract() != 0.0
        {
            return Err(TideError::InvalidSampling(step_seconds));
        }
        Ok(Self { step_seconds })
    }

    #[inline]
    pub const fn step_seconds(&self) -> f64 {
        self.step_seconds
    }

    /// Number of samples, counting both midnights.
    #[inline]
    pub fn sample_count(&self) -> usize {
        (SECONDS_PER_DAY / self.step_seconds).round() as usize + 1
    }

    /// Seconds since midnight of sample `index`.
    #[inline]
    pub fn offset(&self, index: usize) -> f64 {
        index as f64 * self.step_seconds
    }
}

impl Default for SamplingPolicy {
    fn default() -> Self {
        Self::PER_MINUTE
    }
}

impl TryFrom<f64> for SamplingPolicy {
    type Error = TideError;

    fn try_from(step_seconds: f64) -> Result<Self, Self::Error> {
        Self::new(step_seconds)
    }
}

impl From<SamplingPolicy> for f64 {
    fn from(policy: SamplingPolicy) -> Self {
        policy.step_seconds
    }
}

/// Evaluator configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EvaluatorOptions {
    pub sampling: SamplingPolicy,
    pub tide_system: TideSystem,
}

/// Solid Earth tide evaluator for one site and one UTC day.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TideEvaluator {
    options: EvaluatorOptions,
}

impl TideEvaluator {
    /// Evaluator with one-minute sampling in the conventional tide-free system.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: EvaluatorOptions) -> Self {
        Self { options }
    }

    #[inline]
    pub fn options(&self) -> &EvaluatorOptions {
        &self.options
    }

    /// Displacement series from 00:00:00 UTC of `date` through 00:00:00 UTC
    /// of the following day.
    ///
    /// # Errors
    /// [`TideError::NumericInstability`] if any component reaches
    /// [`DISPLACEMENT_ENVELOPE`]; no partial series is returned.
    pub fn evaluate(
        &self,
        site: GeodeticPosition,
        date: CalendarDate,
    ) -> Result<TideSeries, TideError> {
        let sampling = self.options.sampling;
        let station = site.to_ecef();
        let midnight = date.midnight();

        let samples = sample_day(sampling, |offset| {
            let utc = midnight + Days::new(offset / SECONDS_PER_DAY);
            self.displacement_at_station(&site, &station, utc)
        })?;

        // The last sample sits on the following midnight.
        let mjd = date.mjd();
        let extrapolated = tai_minus_utc(mjd).extrapolated || tai_minus_utc(mjd + 1).extrapolated;

        Ok(TideSeries::new(site, date, samples, extrapolated))
    }

    /// Displacement of `site` at an arbitrary UTC instant.
    pub fn displacement_at(&self, site: &GeodeticPosition, utc: Time<UTC>) -> Enu {
        self.displacement_at_station(site, &site.to_ecef(), utc)
    }

    fn displacement_at_station(
        &self,
        site: &GeodeticPosition,
        station: &Vector3<f64>,
        utc: Time<UTC>,
    ) -> Enu {
        let gha = greenwich_hour_angle(utc);
        let jd: Time<JD> = utc.to::<JD>();
        let sun = sun_position(jd, gha);
        let moon = moon_position(jd, gha);
        let tt: Time<MJD> = utc.to::<MJD>();
        let dx = displacement(station, &sun, &moon, tt, self.options.tide_system);
        site.ecef_to_enu(&dx)
    }
}

/// Runs `displacement` over every offset of `sampling`, stopping at the
/// first sample outside the envelope.
fn sample_day<F>(
    sampling: SamplingPolicy,
    mut displacement: F,
) -> Result<Vec<TideSample>, TideError>
where
    F: FnMut(f64) -> Enu,
{
    let mut samples = Vec::with_capacity(sampling.sample_count());
    for index in 0..sampling.sample_count() {
        let offset = sampling.offset(index);
        let enu = displacement(offset);
        check_envelope(offset, &enu)?;
        samples.push(TideSample::new(offset, enu));
    }
    Ok(samples)
}

fn check_envelope(time_offset_seconds: f64, enu: &Enu) -> Result<(), TideError> {
    let magnitude = enu.max_abs();
    if !enu.is_finite() || magnitude >= DISPLACEMENT_ENVELOPE {
        return Err(TideError::NumericInstability {
            time_offset_seconds,
            magnitude,
        });
    }
    Ok(())
}

/// One-call form: validate the inputs and evaluate with the default options.
///
/// ```
/// let series = solid_tide::evaluate(45.0, -100.0, 2000, 1, 1).unwrap();
/// assert_eq!(series.len(), 1441);
/// ```
pub fn evaluate(
    latitude_deg: f64,
    longitude_deg: f64,
    year: i32,
    month: u32,
    day: u32,
) -> Result<TideSeries, TideError> {
    let date = CalendarDate::new(year, month, day)?;
    let site = GeodeticPosition::from_degrees(latitude_deg, longitude_deg)?;
    TideEvaluator::new().evaluate(site, date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_minute_has_1441_samples() {
        let p = SamplingPolicy::PER_MINUTE;
        assert_eq!(p.sample_count(), 1441);
        assert_eq!(p.offset(0), 0.0);
        assert_eq!(p.offset(1440), 86_400.0);
    }

    #[test]
    fn custom_step_must_divide_the_day() {
        assert_eq!(SamplingPolicy::new(3600.0).unwrap().sample_count(), 25);
        assert_eq!(SamplingPolicy::new(1.0).unwrap().sample_count(), 86_401);
        assert!(SamplingPolicy::new(7.0).is_err());
        assert!(SamplingPolicy::new(0.0).is_err());
        assert!(SamplingPolicy::new(-60.0).is_err());
        assert!(SamplingPolicy::new(f64::NAN).is_err());
        assert!(SamplingPolicy::new(172_800.0).is_err());
    }

    #[test]
    fn sub_second_steps_are_rejected() {
        for step in [0.5, 1e-3, 1e-9, f64::MIN_POSITIVE] {
            assert_eq!(
                SamplingPolicy::new(step),
                Err(TideError::InvalidSampling(step))
            );
        }
    }

    fn enu(east: f64, north: f64, up: f64) -> Enu {
        Enu { east, north, up }
    }

    #[test]
    fn envelope_is_exclusive_at_one_metre() {
        assert_eq!(check_envelope(0.0, &enu(0.999, -0.999, 0.999)), Ok(()));
        assert_eq!(
            check_envelope(60.0, &enu(0.0, 0.0, 1.0)),
            Err(TideError::NumericInstability {
                time_offset_seconds: 60.0,
                magnitude: 1.0,
            })
        );
        assert_eq!(
            check_envelope(120.0, &enu(0.0, -1.5, 0.0)),
            Err(TideError::NumericInstability {
                time_offset_seconds: 120.0,
                magnitude: 1.5,
            })
        );
    }

    #[test]
    fn non_finite_components_leave_the_envelope() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                check_envelope(180.0, &enu(bad, 0.0, 0.0)),
                Err(TideError::NumericInstability {
                    time_offset_seconds,
                    ..
                }) if time_offset_seconds == 180.0
            ));
        }
    }

    #[test]
    fn instability_discards_the_whole_day() {
        let sampling = SamplingPolicy::new(3600.0).unwrap();
        let mut calls = 0;
        let result = sample_day(sampling, |offset| {
            calls += 1;
            if offset == 7200.0 {
                enu(0.0, 0.0, 2.0)
            } else {
                enu(0.01, 0.02, 0.03)
            }
        });
        assert_eq!(
            result,
            Err(TideError::NumericInstability {
                time_offset_seconds: 7200.0,
                magnitude: 2.0,
            })
        );
        assert_eq!(calls, 3);
    }

    #[test]
    fn stable_day_keeps_every_sample() {
        let sampling = SamplingPolicy::new(21_600.0).unwrap();
        let samples = sample_day(sampling, |offset| enu(offset / 1e6, 0.0, 0.0)).unwrap();
        assert_eq!(samples.len(), 5);
        assert_eq!(samples[4].time_offset_seconds, 86_400.0);
        assert_eq!(samples[4].east, 0.0864);
    }

    #[test]
    fn date_is_checked_before_latitude() {
        assert!(matches!(
            evaluate(95.0, 0.0, 2001, 2, 29),
            Err(TideError::InvalidDate { .. })
        ));
    }

    #[test]
    fn hourly_sampling_matches_minute_grid() {
        let site = GeodeticPosition::from_degrees(-33.9, 18.4).unwrap();
        let date = CalendarDate::new(2015, 3, 20).unwrap();
        let minute = TideEvaluator::new().evaluate(site, date).unwrap();
        let hourly = TideEvaluator::with_options(EvaluatorOptions {
            sampling: SamplingPolicy::new(3600.0).unwrap(),
            ..EvaluatorOptions::default()
        })
        .evaluate(site, date)
        .unwrap();
        assert_eq!(hourly.len(), 25);
        for (k, sample) in hourly.iter().enumerate() {
            assert_eq!(sample, &minute[k * 60]);
        }
    }

    #[test]
    fn displacement_at_agrees_with_series() {
        let site = GeodeticPosition::from_degrees(52.0, 4.0).unwrap();
        let date = CalendarDate::new(2012, 12, 21).unwrap();
        let evaluator = TideEvaluator::new();
        let series = evaluator.evaluate(site, date).unwrap();
        let utc = date.midnight() + Days::new(600.0 / SECONDS_PER_DAY);
        let single = evaluator.displacement_at(&site, utc);
        assert_eq!(single, series[10].displacement());
    }

    #[test]
    fn evaluator_is_send_sync_copy() {
        fn check<T: Send + Sync + Copy>() {}
        check::<TideEvaluator>();
    }
}
