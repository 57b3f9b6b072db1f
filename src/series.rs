// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Evaluator output: one record per sample instant, and the day's series.

use crate::calendar::CalendarDate;
use crate::geodesy::{Enu, GeodeticPosition};

/// Displacement at one sample instant, in metres.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TideSample {
    /// Seconds since 00:00:00 UTC of the evaluated date.
    pub time_offset_seconds: f64,
    pub east: f64,
    pub north: f64,
    pub up: f64,
}

impl TideSample {
    #[inline]
    pub fn new(time_offset_seconds: f64, enu: Enu) -> Self {
        Self {
            time_offset_seconds,
            east: enu.east,
            north: enu.north,
            up: enu.up,
        }
    }

    #[inline]
    pub fn displacement(&self) -> Enu {
        Enu {
            east: self.east,
            north: self.north,
            up: self.up,
        }
    }
}

/// The samples of one day at one site, in increasing time order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TideSeries {
    site: GeodeticPosition,
    date: CalendarDate,
    samples: Vec<TideSample>,
    leap_seconds_extrapolated: bool,
}

impl TideSeries {
    pub(crate) fn new(
        site: GeodeticPosition,
        date: CalendarDate,
        samples: Vec<TideSample>,
        leap_seconds_extrapolated: bool,
    ) -> Self {
        Self {
            site,
            date,
            samples,
            leap_seconds_extrapolated,
        }
    }

    #[inline]
    pub fn site(&self) -> GeodeticPosition {
        self.site
    }

    #[inline]
    pub fn date(&self) -> CalendarDate {
        self.date
    }

    #[inline]
    pub fn samples(&self) -> &[TideSample] {
        &self.samples
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, TideSample> {
        self.samples.iter()
    }

    /// `true` when part of the day lies outside the leap-second table, so
    /// the UTC→TT offset is an edge value rather than a published one.
    #[inline]
    pub fn leap_seconds_extrapolated(&self) -> bool {
        self.leap_seconds_extrapolated
    }

    /// Largest absolute displacement component over the whole day.
    pub fn peak(&self) -> f64 {
        self.samples
            .iter()
            .map(|s| s.displacement().max_abs())
            .fold(0.0, f64::max)
    }
}

impl<'a> IntoIterator for &'a TideSeries {
    type Item = &'a TideSample;
    type IntoIter = std::slice::Iter<'a, TideSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

impl std::ops::Index<usize> for TideSeries {
    type Output = TideSample;

    fn index(&self, index: usize) -> &Self::Output {
        &self.samples[index]
    }
}
