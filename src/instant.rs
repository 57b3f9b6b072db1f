// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Instants tagged with the axis they are counted on.
//!
//! Samples are laid out on the civil UTC axis while the ephemerides and the
//! tidal arguments run on TT. [`Time<S>`] keeps the two apart at compile
//! time: a value is a count of [`Days`] whose epoch and rate are fixed by the
//! marker `S`, and the only way across axes is [`Time::to`], which passes
//! through JD(TT).

use qtty::Days;
use std::marker::PhantomData;
use std::ops::{Add, Sub};

/// An axis that can be mapped to and from JD(TT).
///
/// Epoch counters on TT are constant offsets; [`UTC`](crate::scales::UTC)
/// also applies the leap-second table.
pub trait TimeScale: Copy + std::fmt::Debug + PartialEq + 'static {
    /// Days on this axis to JD(TT).
    fn to_jd_tt(value: Days) -> Days;

    /// JD(TT) to days on this axis.
    fn from_jd_tt(jd_tt: Days) -> Days;
}

/// Day count on axis `S`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Time<S: TimeScale> {
    quantity: Days,
    _scale: PhantomData<S>,
}

impl<S: TimeScale> Time<S> {
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self::from_days(Days::new(value))
    }

    #[inline]
    pub const fn from_days(quantity: Days) -> Self {
        Self {
            quantity,
            _scale: PhantomData,
        }
    }

    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// Instant on this axis at an absolute JD(TT).
    #[inline]
    pub fn from_julian_day(jd_tt: Days) -> Self {
        Self::from_days(S::from_jd_tt(jd_tt))
    }

    /// The same instant counted on axis `T`.
    #[inline]
    pub fn to<T: TimeScale>(&self) -> Time<T> {
        Time::<T>::from_julian_day(S::to_jd_tt(self.quantity))
    }

    /// Part of the current day already elapsed on this axis, in `[0, 1)`.
    #[inline]
    pub fn day_fraction(&self) -> f64 {
        let v = self.value();
        v - v.floor()
    }
}

/// Shift along the same axis.
impl<S: TimeScale> Add<Days> for Time<S> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Days) -> Self {
        Self::from_days(self.quantity + rhs)
    }
}

/// Elapsed days between two instants on the same axis.
impl<S: TimeScale> Sub for Time<S> {
    type Output = Days;

    #[inline]
    fn sub(self, rhs: Self) -> Days {
        self.quantity - rhs.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scales::{JD, MJD, UTC};

    #[test]
    fn mjd_noon_is_j2000() {
        let jd = Time::<MJD>::new(51_544.5).to::<JD>();
        assert_eq!(jd.quantity(), Days::new(2_451_545.0));
        assert_eq!(Time::<MJD>::from_julian_day(jd.quantity()).value(), 51_544.5);
    }

    #[test]
    fn sample_offsets_stay_on_the_utc_axis() {
        let midnight = Time::<UTC>::new(59_400.0);
        let sample = midnight + Days::new(0.25);
        assert_eq!(sample.value(), 59_400.25);
        assert_eq!(sample - midnight, Days::new(0.25));
    }

    #[test]
    fn day_fraction_restarts_at_midnight() {
        assert!((Time::<UTC>::new(51_544.25).day_fraction() - 0.25).abs() < 1e-12);
        assert_eq!(Time::<UTC>::new(51_545.0).day_fraction(), 0.0);
        assert!((Time::<MJD>::new(-0.75).day_fraction() - 0.25).abs() < 1e-12);
    }
}
