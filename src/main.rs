// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # `solid` — reference run
//!
//! Evaluates the solid Earth tide at 45° N, 100° W on 2000-01-01 and writes
//! 1441 lines of `time east north up` to the path given as the only argument.
//!
//! ```text
//! solid <output-file>
//! ```
//!
//! Logging goes to stderr; the level is taken from `RUST_LOG` (default
//! `info`).

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use env_logger::{Builder, Target};
use log::LevelFilter;
use solid_tide::{report, CalendarDate, GeodeticPosition, TideEvaluator};

const LATITUDE: f64 = 45.0;
const LONGITUDE: f64 = -100.0;
const DATE: (i32, u32, u32) = (2000, 1, 1);

fn init_logging() {
    let level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|v| v.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);

    Builder::new()
        .filter_level(level)
        .target(Target::Stderr)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {:5}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();
}

fn run(output: &Path) -> anyhow::Result<()> {
    let site = GeodeticPosition::from_degrees(LATITUDE, LONGITUDE)?;
    let date = CalendarDate::try_from(DATE)?;
    log::info!(
        "evaluating solid tide at {}°, {}° on {}",
        LATITUDE,
        LONGITUDE,
        date
    );

    let series = TideEvaluator::new()
        .evaluate(site, date)
        .with_context(|| format!("evaluating {date}"))?;
    if series.leap_seconds_extrapolated() {
        log::warn!("{date} is outside the leap-second table; TT − UTC is extrapolated");
    }

    let file =
        File::create(output).with_context(|| format!("creating {}", output.display()))?;
    report::write_series(BufWriter::new(file), &series)
        .with_context(|| format!("writing {}", output.display()))?;

    log::info!(
        "wrote {} samples to {} (peak {:.4} m)",
        series.len(),
        output.display(),
        series.peak()
    );
    Ok(())
}

fn main() -> ExitCode {
    init_logging();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        let program = args.first().map(String::as_str).unwrap_or("solid");
        log::error!("usage: {program} <output-file>");
        return ExitCode::from(1);
    }

    match run(&PathBuf::from(&args[1])) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::from(2)
        }
    }
}
