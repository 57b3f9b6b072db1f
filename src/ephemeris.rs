// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Low-precision geocentric Sun and Moon positions.
//!
//! Analytical series from Montenbruck & Gill, *Satellite Orbits* (2000),
//! §3.3.2. Accuracy is about 0.1° for the Moon and 0.01° for the Sun, which
//! keeps the tidal displacement error well below a millimetre.
//!
//! Both positions are returned in metres in the Earth-fixed frame. The
//! ecliptic coordinates are referred to the J2000 equinox by adding the
//! general precession in longitude (1.3972° per century) and rotated to the
//! equator with the J2000 obliquity, then spun by the Greenwich hour angle.

use nalgebra::Vector3;
use std::f64::consts::PI;

use crate::instant::Time;
use crate::scales::{JD, UTC};

const RAD: f64 = PI / 180.0;

/// Obliquity of the ecliptic at J2000.0 in degrees.
const OBLIQUITY_J2000: f64 = 23.439_291_11;

/// General precession in ecliptic longitude, degrees per Julian century.
const PRECESSION: f64 = 1.3972;

/// Reduce an angle in degrees to `[0, 360)`.
#[inline]
pub(crate) fn reduce_degrees(x: f64) -> f64 {
    x.rem_euclid(360.0)
}

#[inline]
fn sin_deg(x: f64) -> f64 {
    (x * RAD).sin()
}

#[inline]
fn cos_deg(x: f64) -> f64 {
    (x * RAD).cos()
}

/// Rotation about the z axis by `theta` (frame rotation).
#[inline]
fn rot3(theta: f64, v: Vector3<f64>) -> Vector3<f64> {
    let (s, c) = (theta.sin(), theta.cos());
    Vector3::new(c * v.x + s * v.y, c * v.y - s * v.x, v.z)
}

/// Rotation about the x axis by `theta` (frame rotation).
#[inline]
fn rot1(theta: f64, v: Vector3<f64>) -> Vector3<f64> {
    let (s, c) = (theta.sin(), theta.cos());
    Vector3::new(v.x, c * v.y + s * v.z, c * v.z - s * v.y)
}

/// Greenwich hour angle of the mean equinox in radians, `[0, 2π)`.
///
/// UT1 is taken equal to UTC; the 0.9 s bound on their difference moves the
/// bodies by under 4″ in hour angle.
pub fn greenwich_hour_angle(utc: Time<UTC>) -> f64 {
    let d = (utc - Time::<UTC>::new(51_544.5)).value();
    reduce_degrees(280.460_618_375_04 + 360.985_647_366_286_2 * d) * RAD
}

/// Earth-fixed position of the Sun in metres.
pub fn sun_position(tt: Time<JD>, gha: f64) -> Vector3<f64> {
    let t = tt.julian_centuries().value();

    let em_deg = reduce_degrees(357.5256 + 35_999.049 * t);
    let em = em_deg * RAD;
    let em2 = em + em;

    let r = (149.619 - 2.499 * em.cos() - 0.021 * em2.cos()) * 1.0e9;
    let lon = (282.94 + em_deg + (6892.0 * em.sin() + 72.0 * em2.sin()) / 3600.0 + PRECESSION * t)
        * RAD;

    let ob = OBLIQUITY_J2000 * RAD;
    let equatorial = Vector3::new(
        r * lon.cos(),
        r * lon.sin() * ob.cos(),
        r * lon.sin() * ob.sin(),
    );
    rot3(gha, equatorial)
}

/// Earth-fixed position of the Moon in metres.
pub fn moon_position(tt: Time<JD>, gha: f64) -> Vector3<f64> {
    let t = tt.julian_centuries().value();

    // Mean elements (degrees)
    let el0 = reduce_degrees(218.316_17 + 481_267.880_88 * t - PRECESSION * t);
    let el = reduce_degrees(134.962_92 + 477_198.867_53 * t);
    let elp = reduce_degrees(357.525_43 + 35_999.049_44 * t);
    let f = reduce_degrees(93.272_83 + 483_202.018_73 * t);
    let d = reduce_degrees(297.850_27 + 445_267.111_35 * t);

    let mut lon = el0
        + (22_640.0 * sin_deg(el) + 769.0 * sin_deg(el + el) - 4586.0 * sin_deg(el - d - d)
            + 2370.0 * sin_deg(d + d)
            - 668.0 * sin_deg(elp)
            - 412.0 * sin_deg(f + f)
            - 212.0 * sin_deg(el + el - d - d)
            - 206.0 * sin_deg(el + elp - d - d)
            + 192.0 * sin_deg(el + d + d)
            - 165.0 * sin_deg(elp - d - d)
            + 148.0 * sin_deg(el - elp)
            - 125.0 * sin_deg(d)
            - 110.0 * sin_deg(el + elp)
            - 55.0 * sin_deg(f + f - d - d))
            / 3600.0;

    let q = (412.0 * sin_deg(f + f) + 541.0 * sin_deg(elp)) / 3600.0;

    let lat = (18_520.0 * sin_deg(f + lon - el0 + q) - 526.0 * sin_deg(f - d - d)
        + 44.0 * sin_deg(el + f - d - d)
        - 31.0 * sin_deg(-el + f - d - d)
        - 25.0 * sin_deg(-el - el + f)
        - 23.0 * sin_deg(elp + f - d - d)
        + 21.0 * sin_deg(-el + f)
        + 11.0 * sin_deg(-elp + f - d - d))
        / 3600.0;

    let r = (385_000.0 - 20_905.0 * cos_deg(el) - 3699.0 * cos_deg(d + d - el)
        - 2956.0 * cos_deg(d + d)
        - 570.0 * cos_deg(el + el)
        + 246.0 * cos_deg(el + el - d - d)
        - 205.0 * cos_deg(elp - d - d)
        - 171.0 * cos_deg(el + d + d)
        - 152.0 * cos_deg(el + elp - d - d))
        * 1000.0;

    lon += PRECESSION * t;

    let ecliptic = Vector3::new(
        r * cos_deg(lon) * cos_deg(lat),
        r * sin_deg(lon) * cos_deg(lat),
        r * sin_deg(lat),
    );
    rot3(gha, rot1(-OBLIQUITY_J2000 * RAD, ecliptic))
}

#[cfg(test)]
mod tests {
    use super::*;

    const AU: f64 = 1.495_978_707e11;

    #[test]
    fn reduce_wraps_negative_angles() {
        assert_eq!(reduce_degrees(-10.0), 350.0);
        assert_eq!(reduce_degrees(370.0), 10.0);
        assert_eq!(reduce_degrees(360.0), 0.0);
    }

    #[test]
    fn hour_angle_at_j2000_noon() {
        let gha = greenwich_hour_angle(Time::<UTC>::new(51_544.5));
        assert!((gha / RAD - 280.460_618_375_04).abs() < 1e-9);
    }

    #[test]
    fn hour_angle_advances_one_sidereal_turn() {
        let a = greenwich_hour_angle(Time::<UTC>::new(51_544.0));
        let b = greenwich_hour_angle(Time::<UTC>::new(51_545.0));
        let delta = reduce_degrees((b - a) / RAD);
        assert!((delta - 0.985_647_366).abs() < 1e-6);
    }

    #[test]
    fn sun_distance_is_about_one_au() {
        let sun = sun_position(Time::<JD>::J2000, 0.0);
        let ratio = sun.norm() / AU;
        assert!((0.98..1.02).contains(&ratio), "ratio = {ratio}");
    }

    #[test]
    fn sun_is_near_winter_solstice_declination_on_new_year() {
        let sun = sun_position(Time::<JD>::J2000, 0.0);
        let dec = (sun.z / sun.norm()).asin() / RAD;
        assert!((dec + 23.0).abs() < 0.2, "dec = {dec}");
    }

    #[test]
    fn moon_distance_within_orbit_range() {
        for k in 0..30 {
            let tt = Time::<JD>::J2000 + qtty::Days::new(k as f64);
            let r = moon_position(tt, 0.0).norm();
            assert!((350_000e3..410_000e3).contains(&r), "r = {r}");
        }
    }

    #[test]
    fn hour_angle_rotation_preserves_norm() {
        let tt = Time::<JD>::J2000;
        let a = moon_position(tt, 0.0).norm();
        let b = moon_position(tt, 1.234).norm();
        assert!((a - b).abs() < 1e-6);
    }
}
