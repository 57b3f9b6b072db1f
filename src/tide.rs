// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Solid Earth tide displacement
//!
//! IERS Conventions (2003), §7.1.2, for a station on the crust. Given the
//! Earth-fixed positions of the station, the Sun and the Moon, the
//! displacement is built in three layers:
//!
//! 1. **Degree 2 and 3 in phase.** Nominal Love and Shida numbers with the
//!    latitude dependence of `h₂`, `l₂`.
//! 2. **Step 1 corrections** in the time domain: out-of-phase response in the
//!    diurnal and semi-diurnal bands (mantle anelasticity) and the
//!    latitude-dependent part of `l`.
//! 3. **Step 2 corrections** in the frequency domain: 31 diurnal and 5
//!    long-period terms ([`crate::terms`]).
//!
//! The result is in the conventional tide-free system unless
//! [`TideSystem::MeanTide`] asks for the permanent tide to be put back.
//!
//! All vectors are Earth-fixed and in metres.

use nalgebra::Vector3;
use std::f64::consts::PI;

use crate::instant::Time;
use crate::scales::MJD;
use crate::terms::{FundamentalArguments, DIURNAL_TERMS, LONG_PERIOD_TERMS};

const RAD: f64 = PI / 180.0;

/// Equatorial radius used by the IERS tidal model (m).
pub const EARTH_RADIUS: f64 = 6_378_136.55;

/// Sun-to-Earth mass ratio.
pub const MASS_RATIO_SUN: f64 = 332_945.943_062;

/// Moon-to-Earth mass ratio.
pub const MASS_RATIO_MOON: f64 = 0.012_300_034;

const H2_NOMINAL: f64 = 0.6078;
const L2_NOMINAL: f64 = 0.0847;
const H2_LATITUDE: f64 = -0.0006;
const L2_LATITUDE: f64 = 0.0002;
const H3: f64 = 0.292;
const L3: f64 = 0.015;

/// Permanent-tide convention of the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TideSystem {
    /// Permanent part removed (what the IERS procedure yields directly).
    #[default]
    ConventionalTideFree,
    /// Permanent part restored, for mean-tide coordinates.
    MeanTide,
}

/// Geocentric spherical frame at the station.
#[derive(Debug, Clone, Copy)]
struct StationFrame {
    r: f64,
    sin_phi: f64,
    cos_phi: f64,
    sin_lambda: f64,
    cos_lambda: f64,
    lambda: f64,
}

impl StationFrame {
    fn new(x: &Vector3<f64>) -> Self {
        let r = x.norm();
        let cos_phi = (x.x * x.x + x.y * x.y).sqrt() / r;
        Self {
            r,
            sin_phi: x.z / r,
            cos_phi,
            cos_lambda: x.x / cos_phi / r,
            sin_lambda: x.y / cos_phi / r,
            lambda: x.y.atan2(x.x),
        }
    }

    /// Local radial/north/east components to Earth-fixed.
    #[inline]
    fn to_ecef(&self, dr: f64, dn: f64, de: f64) -> Vector3<f64> {
        let (sp, cp, sl, cl) = (self.sin_phi, self.cos_phi, self.sin_lambda, self.cos_lambda);
        Vector3::new(
            dr * cl * cp - de * sl - dn * sp * cl,
            dr * sl * cp + de * cl - dn * sp * sl,
            dr * sp + dn * cp,
        )
    }

    /// `sin 2φ`
    #[inline]
    fn sin_2phi(&self) -> f64 {
        2.0 * self.sin_phi * self.cos_phi
    }

    /// `cos 2φ`
    #[inline]
    fn cos_2phi(&self) -> f64 {
        self.cos_phi * self.cos_phi - self.sin_phi * self.sin_phi
    }
}

/// A perturbing body together with its degree-2 scale factor
/// `GM_body/GM_earth · Rₑ⁴ / r³`.
#[derive(Debug, Clone, Copy)]
struct Body {
    position: Vector3<f64>,
    distance: f64,
    fac2: f64,
}

impl Body {
    fn new(position: Vector3<f64>, mass_ratio: f64) -> Self {
        let distance = position.norm();
        Self {
            position,
            distance,
            fac2: mass_ratio * EARTH_RADIUS * (EARTH_RADIUS / distance).powi(3),
        }
    }

    #[inline]
    fn fac3(&self) -> f64 {
        self.fac2 * (EARTH_RADIUS / self.distance)
    }

    /// `f / r²`, common factor of the step-1 corrections.
    #[inline]
    fn step1_scale(&self) -> f64 {
        self.fac2 / (self.distance * self.distance)
    }

    /// Sine and cosine parts of the body's hour angle as seen from the
    /// station meridian, scaled by the equatorial distance.
    #[inline]
    fn diurnal_parts(&self, frame: &StationFrame) -> (f64, f64) {
        let b = &self.position;
        (
            b.x * frame.sin_lambda - b.y * frame.cos_lambda,
            b.x * frame.cos_lambda + b.y * frame.sin_lambda,
        )
    }

    /// Sine and cosine parts of twice the hour angle.
    #[inline]
    fn semidiurnal_parts(&self, frame: &StationFrame) -> (f64, f64) {
        let b = &self.position;
        let c2 = frame.cos_lambda * frame.cos_lambda - frame.sin_lambda * frame.sin_lambda;
        let s2 = 2.0 * frame.cos_lambda * frame.sin_lambda;
        let diff = b.x * b.x - b.y * b.y;
        (
            diff * s2 - 2.0 * b.x * b.y * c2,
            diff * c2 + 2.0 * b.x * b.y * s2,
        )
    }
}

/// Latitude-dependent degree-2 Love and Shida numbers `(h₂, l₂)`.
#[inline]
fn love_numbers(frame: &StationFrame) -> (f64, f64) {
    let p2 = 1.0 - 1.5 * frame.cos_phi * frame.cos_phi;
    (H2_NOMINAL + H2_LATITUDE * p2, L2_NOMINAL + L2_LATITUDE * p2)
}

fn in_phase(x: &Vector3<f64>, frame: &StationFrame, body: &Body, h2: f64, l2: f64) -> Vector3<f64> {
    let sc = x.dot(&body.position) / (frame.r * body.distance);
    let p2 = 3.0 * (h2 / 2.0 - l2) * sc * sc - h2 / 2.0;
    let p3 = 2.5 * (H3 - 3.0 * L3) * sc.powi(3) + 1.5 * (L3 - H3) * sc;
    let x2 = 3.0 * l2 * sc;
    let x3 = 1.5 * L3 * (5.0 * sc * sc - 1.0);
    let fac2 = body.fac2;
    let fac3 = body.fac3();
    Vector3::from_fn(|i, _| {
        fac2 * (x2 * body.position[i] / body.distance + p2 * x[i] / frame.r)
            + fac3 * (x3 * body.position[i] / body.distance + p3 * x[i] / frame.r)
    })
}

fn out_of_phase_diurnal(frame: &StationFrame, body: &Body) -> Vector3<f64> {
    const DHI: f64 = -0.0025;
    const DLI: f64 = -0.0007;
    let k = body.step1_scale() * body.position.z;
    let (ws, wc) = body.diurnal_parts(frame);
    let (sp, cp) = (frame.sin_phi, frame.cos_phi);
    let dr = -3.0 * DHI * sp * cp * k * ws;
    let dn = -3.0 * DLI * frame.cos_2phi() * k * ws;
    let de = -3.0 * DLI * sp * k * wc;
    frame.to_ecef(dr, dn, de)
}

fn out_of_phase_semidiurnal(frame: &StationFrame, body: &Body) -> Vector3<f64> {
    const DHI: f64 = -0.0022;
    const DLI: f64 = -0.0007;
    let k = body.step1_scale();
    let (a, c) = body.semidiurnal_parts(frame);
    let (sp, cp) = (frame.sin_phi, frame.cos_phi);
    let dr = -0.75 * DHI * cp * cp * k * a;
    let dn = 1.5 * DLI * sp * cp * k * a;
    let de = -1.5 * DLI * cp * k * c;
    frame.to_ecef(dr, dn, de)
}

fn latitude_dependence(frame: &StationFrame, body: &Body) -> Vector3<f64> {
    const L1_DIURNAL: f64 = 0.0012;
    const L1_SEMIDIURNAL: f64 = 0.0024;
    let k = body.step1_scale();
    let bz = body.position.z;
    let (sp, cp) = (frame.sin_phi, frame.cos_phi);

    let (ws, wc) = body.diurnal_parts(frame);
    let mut dn = -L1_DIURNAL * sp * sp * k * bz * wc;
    let mut de = L1_DIURNAL * sp * frame.cos_2phi() * k * bz * ws;

    let (a, c) = body.semidiurnal_parts(frame);
    dn += -L1_SEMIDIURNAL / 2.0 * sp * cp * k * c;
    de += -L1_SEMIDIURNAL / 2.0 * sp * sp * cp * k * a;

    frame.to_ecef(0.0, 3.0 * dn, 3.0 * de)
}

/// Step 2 in millimetres.
fn frequency_dependence(frame: &StationFrame, tt: Time<MJD>) -> Vector3<f64> {
    let args = FundamentalArguments::at(tt);
    let (sp, cp) = (frame.sin_phi, frame.cos_phi);
    let mut acc = Vector3::zeros();

    for term in DIURNAL_TERMS.iter() {
        let theta = (args.tau + term.argument(&args)) * RAD + frame.lambda;
        let (st, ct) = theta.sin_cos();
        let dr = term.radial_in_phase * frame.sin_2phi() * st
            + term.radial_out_of_phase * frame.sin_2phi() * ct;
        let dn = term.transverse_in_phase * frame.cos_2phi() * st
            + term.transverse_out_of_phase * frame.cos_2phi() * ct;
        let de = term.transverse_in_phase * sp * ct - term.transverse_out_of_phase * sp * st;
        acc += frame.to_ecef(dr, dn, de);
    }

    let p2 = (3.0 * sp * sp - 1.0) / 2.0;
    for term in LONG_PERIOD_TERMS.iter() {
        let theta = term.argument(&args) * RAD;
        let (st, ct) = theta.sin_cos();
        let dr = term.radial_in_phase * p2 * ct + term.radial_out_of_phase * p2 * st;
        let dn = term.transverse_in_phase * 2.0 * sp * cp * ct
            + term.transverse_out_of_phase * 2.0 * sp * cp * st;
        acc += frame.to_ecef(dr, dn, 0.0);
    }

    acc
}

/// Permanent degree-2 tide at the station, conventional tide-free → mean tide.
fn permanent_tide(frame: &StationFrame, h2: f64, l2: f64) -> Vector3<f64> {
    let k = (5.0 / (4.0 * PI)).sqrt() * 0.3146;
    let (sp, cp) = (frame.sin_phi, frame.cos_phi);
    let dr = -k * h2 * (1.5 * sp * sp - 0.5);
    let dn = -k * l2 * 3.0 * cp * sp;
    frame.to_ecef(dr, dn, 0.0)
}

/// Tidal displacement of the station at Earth-fixed position `station`.
///
/// `sun` and `moon` are Earth-fixed geocentric positions; `tt` is the
/// instant on the TT axis.
pub fn displacement(
    station: &Vector3<f64>,
    sun: &Vector3<f64>,
    moon: &Vector3<f64>,
    tt: Time<MJD>,
    system: TideSystem,
) -> Vector3<f64> {
    let frame = StationFrame::new(station);
    let bodies = [
        Body::new(*sun, MASS_RATIO_SUN),
        Body::new(*moon, MASS_RATIO_MOON),
    ];
    let (h2, l2) = love_numbers(&frame);

    let mut out = Vector3::zeros();
    for body in &bodies {
        out += in_phase(station, &frame, body, h2, l2);
    }

    let step1: [fn(&StationFrame, &Body) -> Vector3<f64>; 3] = [
        out_of_phase_diurnal,
        out_of_phase_semidiurnal,
        latitude_dependence,
    ];
    for correction in step1 {
        out += bodies
            .iter()
            .fold(Vector3::zeros(), |acc, body| acc + correction(&frame, body));
    }

    out += frequency_dependence(&frame, tt) / 1000.0;

    if system == TideSystem::MeanTide {
        out -= permanent_tide(&frame, h2, l2);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station() -> Vector3<f64> {
        // 45° N, 0° E on GRS80
        Vector3::new(4_517_590.878_8, 0.0, 4_487_348.408_9)
    }

    #[test]
    fn frame_recovers_geocentric_latitude() {
        let frame = StationFrame::new(&station());
        let phi = frame.sin_phi.atan2(frame.cos_phi).to_degrees();
        // geocentric latitude is about 0.19° below geodetic at 45°
        assert!((phi - 44.8076).abs() < 1e-3, "phi = {phi}");
        assert!(frame.lambda.abs() < 1e-12);
    }

    #[test]
    fn frame_radial_maps_to_station_direction() {
        let x = station();
        let frame = StationFrame::new(&x);
        let v = frame.to_ecef(1.0, 0.0, 0.0);
        assert!((v - x / x.norm()).norm() < 1e-12);
    }

    #[test]
    fn sub_body_point_is_raised() {
        // Sun and Moon straight overhead: radial bulge ~ +0.32 m.
        let x = station();
        let moon = x / x.norm() * 384_400e3;
        let sun = x / x.norm() * 1.496e11;
        let d = displacement(&x, &sun, &moon, Time::<MJD>::new(51_544.0), TideSystem::default());
        let up = d.dot(&(x / x.norm()));
        assert!((0.25..0.40).contains(&up), "up = {up}");
    }

    #[test]
    fn mean_tide_differs_only_by_permanent_term() {
        let x = station();
        let moon = Vector3::new(3.0e8, 2.0e8, 1.0e8);
        let sun = Vector3::new(-1.0e11, 1.0e11, 2.0e10);
        let tt = Time::<MJD>::new(51_544.25);
        let free = displacement(&x, &sun, &moon, tt, TideSystem::ConventionalTideFree);
        let mean = displacement(&x, &sun, &moon, tt, TideSystem::MeanTide);
        let frame = StationFrame::new(&x);
        let (h2, l2) = love_numbers(&frame);
        assert!(((free - mean) - permanent_tide(&frame, h2, l2)).norm() < 1e-12);
        // about -3.0 cm radial, -2.5 cm north at 45°
        let shift = free - mean;
        let radial = shift.dot(&x) / x.norm();
        let north = -frame.sin_phi * shift.x + frame.cos_phi * shift.z;
        assert!((-0.031..-0.028).contains(&radial), "radial = {radial}");
        assert!((-0.026..-0.024).contains(&north), "north = {north}");
        assert!(shift.y.abs() < 1e-12);
    }

    #[test]
    fn frequency_dependence_stays_at_millimetre_level() {
        let frame = StationFrame::new(&station());
        for k in 0..48 {
            let tt = Time::<MJD>::new(59_400.0 + f64::from(k) / 48.0);
            let mm = frequency_dependence(&frame, tt).norm();
            assert!(mm < 20.0, "step 2 = {mm} mm");
        }
    }
}
