// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! C FFI bindings for **solid-tide** — solid Earth tide displacement.
//!
//! Two entry points are exported:
//!
//! - [`solid_tide_evaluate`] — scalar inputs, status return, caller buffers
//!   in `time, east, north, up` order.
//! - [`solid`] — drop-in for the historical `solid` symbol: pointer inputs,
//!   no return value, fixed 1441-sample buffers in `time, north, east, up`
//!   order, NaN-filled on failure.
//!
//! No panic unwinds across the boundary.

mod error;
mod tide;

pub use error::*;
pub use tide::*;

/// Run `$body`, mapping a panic to `$default`.
///
/// `return` inside `$body` leaves the guarded closure, not the caller.
#[macro_export]
macro_rules! catch_panic {
    ($default:expr, $body:block) => {
        match ::std::panic::catch_unwind(::std::panic::AssertUnwindSafe(|| $body)) {
            Ok(value) => value,
            Err(_) => $default,
        }
    };
}

/// Returns the solid-tide-ffi ABI version (semver-encoded: major*10000 + minor*100 + patch).
#[allow(clippy::erasing_op, clippy::identity_op)]
#[no_mangle]
pub extern "C" fn solid_tide_ffi_version() -> u32 {
    0 * 10000 + 1 * 100 + 0 // 0.1.0
}
