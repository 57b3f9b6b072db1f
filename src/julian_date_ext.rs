// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Epoch constants and century counts used by the ephemerides and the tidal
//! arguments.

use qtty::*;

use super::instant::Time;
use super::scales::{JD, MJD};

impl Time<JD> {
    /// J2000.0 epoch: 2000-01-01T12:00:00 TT  (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// One Julian century expressed in days.
    pub const JULIAN_CENTURY: Days = Days::new(36_525.0);

    /// Julian centuries since J2000.0 (Sun and Moon mean elements).
    #[inline]
    pub fn julian_centuries(&self) -> Centuries {
        Centuries::new(
            ((*self - Self::J2000) / Self::JULIAN_CENTURY)
                .simplify()
                .value(),
        )
    }
}

impl Time<MJD> {
    /// 2000-01-01T00:00:00 TT (MJD 51 544.0), origin of the frequency-dependence
    /// arguments.
    pub const MIDNIGHT_2000: Self = Self::new(51_544.0);

    /// Julian centuries elapsed since [`Self::MIDNIGHT_2000`].
    #[inline]
    pub fn centuries_since_midnight_2000(&self) -> Centuries {
        Centuries::new(
            ((*self - Self::MIDNIGHT_2000) / Time::<JD>::JULIAN_CENTURY)
                .simplify()
                .value(),
        )
    }

    /// Hours elapsed in the current TT day.
    #[inline]
    pub fn hour_of_day(&self) -> f64 {
        self.day_fraction() * 24.0
    }
}
