// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Frequency-dependence correction tables.
//!
//! IERS Conventions (2003), Tables 7.5a (diurnal band) and 7.5b (long-period
//! band). Each term is identified by integer multipliers of the fundamental
//! arguments `(s, h, p, N′, pₛ)`; amplitudes are in millimetres.

use crate::ephemeris::reduce_degrees;
use crate::instant::Time;
use crate::scales::MJD;

/// One periodic correction term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TidalTerm {
    /// Multipliers of `(s, h, p, N′, pₛ)`.
    pub multipliers: [i8; 5],
    /// Radial amplitude in phase with the argument (mm).
    pub radial_in_phase: f64,
    /// Radial amplitude in quadrature (mm).
    pub radial_out_of_phase: f64,
    /// Transverse amplitude in phase (mm).
    pub transverse_in_phase: f64,
    /// Transverse amplitude in quadrature (mm).
    pub transverse_out_of_phase: f64,
}

impl TidalTerm {
    /// Linear combination of the fundamental arguments in degrees.
    #[inline]
    pub fn argument(&self, args: &FundamentalArguments) -> f64 {
        let [ns, nh, np, nn, nps] = self.multipliers;
        f64::from(ns) * args.s
            + f64::from(nh) * args.h
            + f64::from(np) * args.p
            + f64::from(nn) * args.n_prime
            + f64::from(nps) * args.ps
    }
}

const fn diurnal(m: [i8; 5], r_ip: f64, r_op: f64, t_ip: f64, t_op: f64) -> TidalTerm {
    TidalTerm {
        multipliers: m,
        radial_in_phase: r_ip,
        radial_out_of_phase: r_op,
        transverse_in_phase: t_ip,
        transverse_out_of_phase: t_op,
    }
}

// Table 7.5b lists the columns as (ΔR ip, ΔT ip, ΔR op, ΔT op).
const fn long_period(m: [i8; 5], r_ip: f64, t_ip: f64, r_op: f64, t_op: f64) -> TidalTerm {
    TidalTerm {
        multipliers: m,
        radial_in_phase: r_ip,
        radial_out_of_phase: r_op,
        transverse_in_phase: t_ip,
        transverse_out_of_phase: t_op,
    }
}

/// Diurnal band: 31 terms.
#[rustfmt::skip]
pub static DIURNAL_TERMS: [TidalTerm; 31] = [
    diurnal([-3,  0,  2,  0,  0], -0.01,  0.00,  0.00,  0.00),
    diurnal([-3,  2,  0,  0,  0], -0.01,  0.00,  0.00,  0.00),
    diurnal([-2,  0,  1, -1,  0], -0.02,  0.00,  0.00,  0.00),
    diurnal([-2,  0,  1,  0,  0], -0.08,  0.00, -0.01,  0.01),
    diurnal([-2,  2, -1,  0,  0], -0.02,  0.00,  0.00,  0.00),
    diurnal([-1,  0,  0, -1,  0], -0.10,  0.00,  0.00,  0.00),
    diurnal([-1,  0,  0,  0,  0], -0.51,  0.00, -0.02,  0.03),
    diurnal([-1,  2,  0,  0,  0],  0.01,  0.00,  0.00,  0.00),
    diurnal([ 0, -2,  1,  0,  0],  0.01,  0.00,  0.00,  0.00),
    diurnal([ 0,  0, -1,  0,  0],  0.02,  0.00,  0.00,  0.00),
    diurnal([ 0,  0,  1,  0,  0],  0.06,  0.00,  0.00,  0.00),
    diurnal([ 0,  0,  1,  1,  0],  0.01,  0.00,  0.00,  0.00),
    diurnal([ 0,  2, -1,  0,  0],  0.01,  0.00,  0.00,  0.00),
    diurnal([ 1, -3,  0,  0,  1], -0.06,  0.00,  0.00,  0.00),
    diurnal([ 1, -2,  0, -1,  0],  0.01,  0.00,  0.00,  0.00),
    diurnal([ 1, -2,  0,  0,  0], -1.23, -0.07,  0.06,  0.01),
    diurnal([ 1, -1,  0,  0, -1],  0.02,  0.00,  0.00,  0.00),
    diurnal([ 1, -1,  0,  0,  1],  0.04,  0.00,  0.00,  0.00),
    diurnal([ 1,  0,  0, -1,  0], -0.22,  0.01,  0.01,  0.00),
    diurnal([ 1,  0,  0,  0,  0], 12.00, -0.78, -0.67, -0.03),
    diurnal([ 1,  0,  0,  1,  0],  1.73, -0.12, -0.10,  0.00),
    diurnal([ 1,  0,  0,  2,  0], -0.04,  0.00,  0.00,  0.00),
    diurnal([ 1,  1,  0,  0, -1], -0.50, -0.01,  0.03,  0.00),
    diurnal([ 1,  1,  0,  0,  1],  0.01,  0.00,  0.00,  0.00),
    diurnal([ 0,  1,  0,  1, -1], -0.01,  0.00,  0.00,  0.00),
    diurnal([ 1,  2, -2,  0,  0], -0.01,  0.00,  0.00,  0.00),
    diurnal([ 1,  2,  0,  0,  0], -0.11,  0.01,  0.01,  0.00),
    diurnal([ 2, -2,  1,  0,  0], -0.01,  0.00,  0.00,  0.00),
    diurnal([ 2,  0, -1,  0,  0], -0.02,  0.00,  0.00,  0.00),
    diurnal([ 3,  0,  0,  0,  0],  0.00,  0.00,  0.00,  0.00),
    diurnal([ 3,  0,  0,  1,  0],  0.00,  0.00,  0.00,  0.00),
];

/// Long-period band: 5 terms.
#[rustfmt::skip]
pub static LONG_PERIOD_TERMS: [TidalTerm; 5] = [
    long_period([0, 0,  0, 1, 0],  0.47,  0.23,  0.16,  0.07),
    long_period([0, 2,  0, 0, 0], -0.20, -0.12, -0.11, -0.05),
    long_period([1, 0, -1, 0, 0], -0.11, -0.08, -0.09, -0.04),
    long_period([2, 0,  0, 0, 0], -0.13, -0.11, -0.15, -0.07),
    long_period([2, 0,  0, 1, 0], -0.05, -0.05, -0.06, -0.03),
];

/// Fundamental arguments in degrees at one TT instant.
///
/// `s` is the Moon's mean longitude, `h` the Sun's, `p` the longitude of
/// lunar perigee, `n_prime` the negative longitude of the lunar node and
/// `ps` the longitude of solar perigee. `tau` is the mean lunar time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FundamentalArguments {
    pub tau: f64,
    pub s: f64,
    pub h: f64,
    pub p: f64,
    pub n_prime: f64,
    pub ps: f64,
}

impl FundamentalArguments {
    pub fn at(tt: Time<MJD>) -> Self {
        let t = tt.centuries_since_midnight_2000().value();
        let t2 = t * t;
        let t3 = t2 * t;
        let t4 = t3 * t;

        let s = 218.316_645_63 + 481_267.881_94 * t - 0.001_466_388_9 * t2
            + 0.000_001_851_39 * t3;
        let tau0 = 280.460_618_4 + 36_000.770_053_6 * t + 0.000_387_93 * t2
            - 0.000_000_025_8 * t3
            - s;
        let precession = 1.396_971_278 * t + 0.000_308_889 * t2
            + 0.000_000_021 * t3
            + 0.000_000_007 * t4;
        let h = 280.466_45 + 36_000.769_748_9 * t + 0.000_303_222_22 * t2
            + 0.000_000_020 * t3
            - 0.000_000_006_54 * t4;
        let p = 83.353_243_12 + 4069.013_635_25 * t - 0.010_321_722_22 * t2
            - 0.000_012_499_1 * t3
            + 0.000_000_052_63 * t4;
        let n_prime = 234.955_444_99 + 1934.136_261_97 * t - 0.002_075_611_11 * t2
            - 0.000_002_139_44 * t3
            + 0.000_000_016_50 * t4;
        let ps = 282.937_340_98 + 1.719_457_666_67 * t + 0.000_456_888_89 * t2
            - 0.000_000_017_78 * t3
            - 0.000_000_003_34 * t4;

        Self {
            tau: reduce_degrees(tt.hour_of_day() * 15.0 + tau0),
            s: reduce_degrees(s + precession),
            h: reduce_degrees(h),
            p: reduce_degrees(p),
            n_prime: reduce_degrees(n_prime),
            ps: reduce_degrees(ps),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dominant_diurnal_term_is_k1_neighbour() {
        let largest = DIURNAL_TERMS
            .iter()
            .max_by(|a, b| a.radial_in_phase.abs().total_cmp(&b.radial_in_phase.abs()))
            .unwrap();
        assert_eq!(largest.multipliers, [1, 0, 0, 0, 0]);
        assert_eq!(largest.radial_in_phase, 12.00);
        assert_eq!(largest.radial_out_of_phase, -0.78);
    }

    #[test]
    fn long_period_columns_are_mapped() {
        let node = LONG_PERIOD_TERMS[0];
        assert_eq!(node.radial_in_phase, 0.47);
        assert_eq!(node.transverse_in_phase, 0.23);
        assert_eq!(node.radial_out_of_phase, 0.16);
        assert_eq!(node.transverse_out_of_phase, 0.07);
    }

    #[test]
    fn arguments_are_reduced() {
        let args = FundamentalArguments::at(Time::<MJD>::new(59_400.3));
        for v in [args.tau, args.s, args.h, args.p, args.n_prime, args.ps] {
            assert!((0.0..360.0).contains(&v));
        }
    }

    #[test]
    fn arguments_at_epoch() {
        let args = FundamentalArguments::at(Time::<MJD>::MIDNIGHT_2000);
        assert!((args.s - 218.316_645_63).abs() < 1e-9);
        assert!((args.h - 280.466_45).abs() < 1e-9);
        assert!((args.tau - (280.460_618_4 - 218.316_645_63)).abs() < 1e-9);
    }

    #[test]
    fn argument_combines_multipliers() {
        let args = FundamentalArguments {
            tau: 0.0,
            s: 1.0,
            h: 10.0,
            p: 100.0,
            n_prime: 1000.0,
            ps: 10_000.0,
        };
        let term = DIURNAL_TERMS[13]; // [1, -3, 0, 0, 1]
        assert_eq!(term.argument(&args), 1.0 - 30.0 + 10_000.0);
    }
}
