// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2026 Vallés Puig, Ramon

//! FFI bindings for the one-day tide evaluation.

use crate::catch_panic;
use crate::error::SolidTideStatus;
use solid_tide::{evaluate, SamplingPolicy, TideSeries};

/// Samples written per call (one per minute, both midnights included).
pub const SOLID_TIDE_SAMPLES: usize = 1441;

/// Number of samples the output buffers must hold.
#[no_mangle]
pub extern "C" fn solid_tide_sample_count() -> usize {
    SamplingPolicy::PER_MINUTE.sample_count()
}

fn evaluate_scalar(
    latitude: f64,
    longitude: f64,
    year: i32,
    month: i32,
    day: i32,
) -> Result<TideSeries, SolidTideStatus> {
    let (Ok(month), Ok(day)) = (u32::try_from(month), u32::try_from(day)) else {
        return Err(SolidTideStatus::InvalidDate);
    };
    evaluate(latitude, longitude, year, month, day).map_err(SolidTideStatus::from)
}

/// Evaluate one UTC day of solid Earth tide at a site.
///
/// On success `len` must be at least [`solid_tide_sample_count`]; the first
/// that many slots of each buffer receive seconds since midnight and the
/// east, north and up displacement in metres. Nothing is written on error.
///
/// # Safety
/// Every non-null output pointer must be valid for `len` writes of `f64`.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn solid_tide_evaluate(
    latitude: f64,
    longitude: f64,
    year: i32,
    month: i32,
    day: i32,
    out_tsec: *mut f64,
    out_east: *mut f64,
    out_north: *mut f64,
    out_up: *mut f64,
    len: usize,
) -> SolidTideStatus {
    catch_panic!(SolidTideStatus::Panic, {
        if out_tsec.is_null() || out_east.is_null() || out_north.is_null() || out_up.is_null() {
            return SolidTideStatus::NullPointer;
        }
        let count = solid_tide_sample_count();
        if len < count {
            return SolidTideStatus::BufferTooSmall;
        }
        let series = match evaluate_scalar(latitude, longitude, year, month, day) {
            Ok(series) => series,
            Err(status) => return status,
        };

        let tsec = unsafe { std::slice::from_raw_parts_mut(out_tsec, count) };
        let east = unsafe { std::slice::from_raw_parts_mut(out_east, count) };
        let north = unsafe { std::slice::from_raw_parts_mut(out_north, count) };
        let up = unsafe { std::slice::from_raw_parts_mut(out_up, count) };
        for (i, sample) in series.iter().enumerate() {
            tsec[i] = sample.time_offset_seconds;
            east[i] = sample.east;
            north[i] = sample.north;
            up[i] = sample.up;
        }
        SolidTideStatus::Ok
    })
}

/// Drop-in for the historical `solid` entry point.
///
/// Inputs are read through pointers; the four outputs hold
/// [`SOLID_TIDE_SAMPLES`] values each, in `time, north, east, up` order. On
/// any failure every slot of every non-null output is set to NaN.
///
/// # Safety
/// Non-null input pointers must be readable; non-null output pointers must be
/// valid for [`SOLID_TIDE_SAMPLES`] writes of `f64`.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn solid(
    latitude: *const f64,
    longitude: *const f64,
    year: *const i32,
    month: *const i32,
    day: *const i32,
    out_tsec: *mut f64,
    out_north: *mut f64,
    out_east: *mut f64,
    out_up: *mut f64,
) {
    let outputs = [out_tsec, out_north, out_east, out_up];

    let status = catch_panic!(SolidTideStatus::Panic, {
        if latitude.is_null()
            || longitude.is_null()
            || year.is_null()
            || month.is_null()
            || day.is_null()
            || outputs.iter().any(|p| p.is_null())
        {
            return SolidTideStatus::NullPointer;
        }
        let (latitude, longitude, year, month, day) =
            unsafe { (*latitude, *longitude, *year, *month, *day) };
        let series = match evaluate_scalar(latitude, longitude, year, month, day) {
            Ok(series) => series,
            Err(status) => return status,
        };

        let tsec = unsafe { std::slice::from_raw_parts_mut(out_tsec, SOLID_TIDE_SAMPLES) };
        let north = unsafe { std::slice::from_raw_parts_mut(out_north, SOLID_TIDE_SAMPLES) };
        let east = unsafe { std::slice::from_raw_parts_mut(out_east, SOLID_TIDE_SAMPLES) };
        let up = unsafe { std::slice::from_raw_parts_mut(out_up, SOLID_TIDE_SAMPLES) };
        for (i, sample) in series.iter().take(SOLID_TIDE_SAMPLES).enumerate() {
            tsec[i] = sample.time_offset_seconds;
            north[i] = sample.north;
            east[i] = sample.east;
            up[i] = sample.up;
        }
        SolidTideStatus::Ok
    });

    if status != SolidTideStatus::Ok {
        for out in outputs.into_iter().filter(|p| !p.is_null()) {
            unsafe { std::slice::from_raw_parts_mut(out, SOLID_TIDE_SAMPLES) }.fill(f64::NAN);
        }
    }
}
