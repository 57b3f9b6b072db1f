// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error taxonomy of the tide evaluator.
//!
//! Every variant is detected before (or, for [`TideError::NumericInstability`],
//! instead of) returning a series: the evaluator never hands out a partial
//! result.

use thiserror::Error;

/// Errors returned by [`TideEvaluator`](crate::TideEvaluator).
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum TideError {
    /// Latitude outside `[-90, 90]` degrees, or not a number.
    #[error("latitude {0}° is outside [-90, 90]")]
    InvalidLatitude(f64),

    /// Longitude is NaN or infinite. Finite values are always reduced into range.
    #[error("longitude {0}° is not a finite value")]
    InvalidLongitude(f64),

    /// The (year, month, day) triple is not a proleptic Gregorian date.
    #[error("{year:04}-{month:02}-{day:02} is not a valid calendar date")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// Sampling step is not positive or does not split the day evenly.
    #[error("sampling step of {0} s does not evenly divide a day")]
    InvalidSampling(f64),

    /// A displacement component left the physically plausible envelope.
    #[error("displacement of {magnitude} m at t = {time_offset_seconds} s exceeds the solid tide envelope")]
    NumericInstability {
        time_offset_seconds: f64,
        magnitude: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_date_message_is_zero_padded() {
        let err = TideError::InvalidDate {
            year: 2001,
            month: 2,
            day: 29,
        };
        assert_eq!(err.to_string(), "2001-02-29 is not a valid calendar date");
    }

    #[test]
    fn latitude_message_carries_value() {
        let err = TideError::InvalidLatitude(90.1);
        assert!(err.to_string().contains("90.1"));
    }
}
