// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Observer position and the two frame changes the tide model needs:
//! geodetic → Earth-centred Earth-fixed (GRS80), and ECEF → local
//! east/north/up.

use nalgebra::Vector3;
use qtty::Degrees;

use crate::error::TideError;

/// GRS80 semi-major axis in metres.
pub const GRS80_A: f64 = 6_378_137.0;

/// GRS80 first eccentricity squared.
pub const GRS80_E2: f64 = 6.694_380_022_90e-3;

/// Geodetic latitude and longitude of a site on the ellipsoid surface.
///
/// Latitude is checked against `[-90, 90]`; longitude accepts any finite
/// value and is stored reduced into `[0, 360)`, so `-100°` and `260°` build
/// the same position.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "(f64, f64)", into = "(f64, f64)")
)]
pub struct GeodeticPosition {
    latitude: Degrees,
    longitude: Degrees,
}

impl GeodeticPosition {
    /// Validating constructor from plain degrees.
    pub fn from_degrees(latitude: f64, longitude: f64) -> Result<Self, TideError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(TideError::InvalidLatitude(latitude));
        }
        if !longitude.is_finite() {
            return Err(TideError::InvalidLongitude(longitude));
        }
        Ok(Self {
            latitude: Degrees::new(latitude),
            longitude: Degrees::new(longitude.rem_euclid(360.0)),
        })
    }

    #[inline]
    pub const fn latitude(&self) -> Degrees {
        self.latitude
    }

    /// Longitude in `[0, 360)`.
    #[inline]
    pub const fn longitude(&self) -> Degrees {
        self.longitude
    }

    /// Earth-fixed Cartesian coordinates of the site at zero ellipsoidal
    /// height, in metres.
    pub fn to_ecef(&self) -> Vector3<f64> {
        let (s, c) = self.latitude.value().to_radians().sin_cos();
        let (sl, cl) = self.longitude.value().to_radians().sin_cos();
        let n = GRS80_A / (1.0 - GRS80_E2 * s * s).sqrt();
        Vector3::new(n * c * cl, n * c * sl, n * (1.0 - GRS80_E2) * s)
    }

    /// Rotate an Earth-fixed vector into the site's local horizon frame.
    pub fn ecef_to_enu(&self, v: &Vector3<f64>) -> Enu {
        let (sp, cp) = self.latitude.value().to_radians().sin_cos();
        let (sl, cl) = self.longitude.value().to_radians().sin_cos();
        Enu {
            east: -sl * v.x + cl * v.y,
            north: -sp * cl * v.x - sp * sl * v.y + cp * v.z,
            up: cp * cl * v.x + cp * sl * v.y + sp * v.z,
        }
    }
}

impl TryFrom<(f64, f64)> for GeodeticPosition {
    type Error = TideError;

    fn try_from((latitude, longitude): (f64, f64)) -> Result<Self, Self::Error> {
        Self::from_degrees(latitude, longitude)
    }
}

impl From<GeodeticPosition> for (f64, f64) {
    fn from(site: GeodeticPosition) -> Self {
        (site.latitude.value(), site.longitude.value())
    }
}

/// Local topocentric displacement in metres.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enu {
    pub east: f64,
    pub north: f64,
    pub up: f64,
}

impl Enu {
    /// Largest absolute component.
    #[inline]
    pub fn max_abs(&self) -> f64 {
        self.east.abs().max(self.north.abs()).max(self.up.abs())
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.east.is_finite() && self.north.is_finite() && self.up.is_finite()
    }
}
