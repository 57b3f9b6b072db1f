// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # TAI − UTC (leap seconds)
//!
//! The ephemerides and tidal arguments are evaluated in Terrestrial Time while
//! the sample grid is laid out in UTC. The two differ by
//!
//! ```text
//! TT − UTC = (TAI − UTC) + 32.184 s
//! ```
//!
//! where `TAI − UTC` is the integer leap-second count published in IERS
//! Bulletin C.
//!
//! ## Table limits
//! Before 1972-01-01 UTC had fractional rates and offsets; the conventional
//! initial 10 s is used. After [`TABLE_VALID_UNTIL_MJD`] a future leap second
//! cannot be ruled out, so the last tabulated value is carried forward. Both
//! cases set [`LeapSeconds::extrapolated`].

use qtty::Seconds;

/// `TT − TAI`, fixed by definition.
pub const TT_MINUS_TAI: Seconds = Seconds::new(32.184);

/// Last UTC day (MJD) covered by the published Bulletin C announcements
/// (2026-12-28).
pub const TABLE_VALID_UNTIL_MJD: i64 = 61_402;

/// Total number of tabulated leap-second epochs.
const TERMS: usize = 28;

/// `(first MJD in effect, TAI − UTC in seconds)`.
#[rustfmt::skip]
const LEAP_SECONDS: [(i64, f64); TERMS] = [
    (41_317, 10.0), // 1972-01-01
    (41_499, 11.0), // 1972-07-01
    (41_683, 12.0), // 1973-01-01
    (42_048, 13.0), // 1974-01-01
    (42_413, 14.0), // 1975-01-01
    (42_778, 15.0), // 1976-01-01
    (43_144, 16.0), // 1977-01-01
    (43_509, 17.0), // 1978-01-01
    (43_874, 18.0), // 1979-01-01
    (44_239, 19.0), // 1980-01-01
    (44_786, 20.0), // 1981-07-01
    (45_151, 21.0), // 1982-07-01
    (45_516, 22.0), // 1983-07-01
    (46_247, 23.0), // 1985-07-01
    (47_161, 24.0), // 1988-01-01
    (47_892, 25.0), // 1990-01-01
    (48_257, 26.0), // 1991-01-01
    (48_804, 27.0), // 1992-07-01
    (49_169, 28.0), // 1993-07-01
    (49_534, 29.0), // 1994-07-01
    (50_083, 30.0), // 1996-01-01
    (50_630, 31.0), // 1997-07-01
    (51_179, 32.0), // 1999-01-01
    (53_736, 33.0), // 2006-01-01
    (54_832, 34.0), // 2009-01-01
    (56_109, 35.0), // 2012-07-01
    (57_204, 36.0), // 2015-07-01
    (57_754, 37.0), // 2017-01-01
];

/// Result of a leap-second lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeapSeconds {
    /// `TAI − UTC` in effect on the requested day.
    pub seconds: Seconds,
    /// `true` when the day falls outside the tabulated range and the value
    /// is an edge value rather than a published one.
    pub extrapolated: bool,
}

/// Look up cumulative TAI − UTC for a UTC calendar day given as an integer MJD.
#[inline]
pub fn tai_minus_utc(mjd_day: i64) -> LeapSeconds {
    // Binary search for the last entry <= mjd_day
    let mut lo = 0usize;
    let mut hi = LEAP_SECONDS.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if LEAP_SECONDS[mid].0 <= mjd_day {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    if lo == 0 {
        LeapSeconds {
            seconds: Seconds::new(10.0),
            extrapolated: true,
        }
    } else {
        LeapSeconds {
            seconds: Seconds::new(LEAP_SECONDS[lo - 1].1),
            extrapolated: mjd_day > TABLE_VALID_UNTIL_MJD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_and_monotonic() {
        for pair in LEAP_SECONDS.windows(2) {
            assert!(pair[0].0 < pair[1].0);
            assert_eq!(pair[1].1 - pair[0].1, 1.0);
        }
    }

    #[test]
    fn y2000_uses_32_seconds() {
        let leap = tai_minus_utc(51_544);
        assert_eq!(leap.seconds, Seconds::new(32.0));
        assert!(!leap.extrapolated);
    }

    #[test]
    fn boundary_day_takes_new_value() {
        assert_eq!(tai_minus_utc(57_753).seconds, Seconds::new(36.0));
        assert_eq!(tai_minus_utc(57_754).seconds, Seconds::new(37.0));
    }

    #[test]
    fn pre_1972_is_flagged() {
        let leap = tai_minus_utc(40_587); // 1970-01-01
        assert_eq!(leap.seconds, Seconds::new(10.0));
        assert!(leap.extrapolated);
    }

    #[test]
    fn beyond_validity_horizon_is_flagged() {
        let inside = tai_minus_utc(TABLE_VALID_UNTIL_MJD);
        assert!(!inside.extrapolated);
        let outside = tai_minus_utc(TABLE_VALID_UNTIL_MJD + 1);
        assert_eq!(outside.seconds, Seconds::new(37.0));
        assert!(outside.extrapolated);
    }
}
