// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Plain-text column output.
//!
//! One line per sample: `time east north up`, each value in C `%g` style
//! with five significant digits.

use std::io::{self, Write};

use crate::series::TideSeries;

/// Significant digits written per value.
pub const PRECISION: usize = 5;

/// Format `value` the way C's `%.{digits}g` does.
///
/// Fixed notation is used when the decimal exponent lies in
/// `[-4, digits)`, scientific otherwise; trailing zeros are dropped in both.
pub fn format_significant(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_owned();
    }
    let digits = digits.max(1);
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_owned();
    }

    // Rounding to `digits` may carry into the next decade, so the exponent
    // is read back from the rounded representation.
    let sci = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exponent < -4 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_owned()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Write every sample of `series` as a text line.
pub fn write_series<W: Write>(mut out: W, series: &TideSeries) -> io::Result<()> {
    for sample in series {
        writeln!(
            out,
            "{} {} {} {}",
            format_significant(sample.time_offset_seconds, PRECISION),
            format_significant(sample.east, PRECISION),
            format_significant(sample.north, PRECISION),
            format_significant(sample.up, PRECISION),
        )?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn g(v: f64) -> String {
        format_significant(v, 5)
    }

    #[test]
    fn integers_and_zero() {
        assert_eq!(g(0.0), "0");
        assert_eq!(g(-0.0), "-0");
        assert_eq!(g(60.0), "60");
        assert_eq!(g(86_400.0), "86400");
        assert_eq!(g(43_200.0), "43200");
    }

    #[test]
    fn fixed_notation_trims_zeros() {
        assert_eq!(g(0.038694448), "0.038694");
        assert_eq!(g(-0.021305718), "-0.021306");
        assert_eq!(g(0.1), "0.1");
        assert_eq!(g(1.5), "1.5");
        assert_eq!(g(0.00012345678), "0.00012346");
    }

    #[test]
    fn scientific_notation() {
        assert_eq!(g(123_456.0), "1.2346e+05");
        assert_eq!(g(0.000_012_345_6), "1.2346e-05");
        assert_eq!(g(-0.000_01), "-1e-05");
        assert_eq!(g(1.0e100), "1e+100");
    }

    #[test]
    fn rounding_carries_into_next_decade() {
        assert_eq!(g(99_999.7), "1e+05");
        assert_eq!(g(0.000_099_999_9), "0.0001");
    }

    #[test]
    fn non_finite() {
        assert_eq!(g(f64::NAN), "nan");
        assert_eq!(g(f64::NEG_INFINITY), "-inf");
    }
}
