// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-scale marker types.
//!
//! Each zero-sized type identifies a time scale and encodes how values in
//! that scale relate to the canonical **Julian Date in TT**.
//!
//! | Marker | Description | Axis | Epoch (JD) |
//! |--------|-------------|------|------------|
//! | [`JD`] | Julian Date | TT | 0.0 |
//! | [`MJD`] | Modified Julian Date | TT | 2 400 000.5 |
//! | [`UTC`] | Modified Julian Date | UTC | 2 400 000.5 |

use super::instant::TimeScale;
use super::leap_seconds::{tai_minus_utc, TT_MINUS_TAI};
use qtty::{Day, Days, Seconds};

// ---------------------------------------------------------------------------
// Epoch counters on the TT axis
// ---------------------------------------------------------------------------

/// Julian Date — the identity scale.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct JD;

impl TimeScale for JD {
    #[inline(always)]
    fn to_jd_tt(value: Days) -> Days {
        value
    }

    #[inline(always)]
    fn from_jd_tt(jd_tt: Days) -> Days {
        jd_tt
    }
}

/// Modified Julian Date (TT) — JD minus 2 400 000.5.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MJD;

/// The constant offset between JD and MJD: `JD = MJD + MJD_EPOCH`.
pub(crate) const MJD_EPOCH: Days = Days::new(2_400_000.5);

impl TimeScale for MJD {
    #[inline(always)]
    fn to_jd_tt(value: Days) -> Days {
        value + MJD_EPOCH
    }

    #[inline(always)]
    fn from_jd_tt(jd_tt: Days) -> Days {
        jd_tt - MJD_EPOCH
    }
}

// ---------------------------------------------------------------------------
// Civil UTC axis
// ---------------------------------------------------------------------------

/// Modified Julian Date counted on the **UTC** axis.
///
/// This is the axis the sample grid lives on: an integer value is a UTC
/// midnight. The conversion to JD(TT) adds `TAI − UTC` for the calendar day
/// containing the instant, plus the fixed `TT − TAI = 32.184 s`.
///
/// Inside a positive leap second the UTC axis is ambiguous; the inverse
/// resolves it by using the offset of the candidate day.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct UTC;

#[inline]
fn tt_minus_utc(mjd_utc: Days) -> Days {
    let leap = tai_minus_utc(mjd_utc.value().floor() as i64);
    (leap.seconds + TT_MINUS_TAI).to::<Day>()
}

impl TimeScale for UTC {
    #[inline]
    fn to_jd_tt(value: Days) -> Days {
        value + MJD_EPOCH + tt_minus_utc(value)
    }

    #[inline]
    fn from_jd_tt(jd_tt: Days) -> Days {
        // Start from the largest tabulated offset and refine once; the
        // leap-second count changes at most once per candidate step.
        let mjd_tt = jd_tt - MJD_EPOCH;
        let approx = mjd_tt - (Seconds::new(37.0) + TT_MINUS_TAI).to::<Day>();
        mjd_tt - tt_minus_utc(approx)
    }
}
