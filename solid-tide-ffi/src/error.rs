// SPDX-License-Identifier: AGPL-3.0-or-later

use solid_tide::TideError;

/// Status codes returned by solid-tide-ffi functions.
///
/// cbindgen:prefix-with-name
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolidTideStatus {
    /// Success.
    Ok = 0,
    /// A required pointer was null.
    NullPointer = 1,
    /// An output buffer is shorter than `solid_tide_sample_count()`.
    BufferTooSmall = 2,
    /// Latitude outside [-90, 90] or not a number.
    InvalidLatitude = 3,
    /// Longitude is NaN or infinite.
    InvalidLongitude = 4,
    /// (year, month, day) is not a calendar date.
    InvalidDate = 5,
    /// A displacement component reached 1 m.
    NumericInstability = 6,
    /// The evaluation panicked.
    Panic = 7,
}

impl From<TideError> for SolidTideStatus {
    fn from(err: TideError) -> Self {
        match err {
            TideError::InvalidLatitude(_) => Self::InvalidLatitude,
            TideError::InvalidLongitude(_) => Self::InvalidLongitude,
            TideError::InvalidDate { .. } => Self::InvalidDate,
            // Sampling is fixed at the boundary.
            TideError::InvalidSampling(_) | TideError::NumericInstability { .. } => {
                Self::NumericInstability
            }
        }
    }
}
