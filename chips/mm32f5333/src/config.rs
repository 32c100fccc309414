// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Compile-time switches for this crate.
//!
//! Values come from cargo features but are read through a typed `const`, so
//! every code path is type-checked whether or not the feature is enabled.

/// Data structure holding compile-time configuration options.
pub(crate) struct Config {
    /// Whether `dump::dump_peripheral` logs every word it reads.
    ///
    /// Useful when the formatted dump itself cannot be shown, for example
    /// when only the defmt channel is connected.
    pub(crate) trace_register_dumps: bool,
}

/// A unique instance of `Config` where compile-time configuration options are
/// defined.
pub(crate) const CONFIG: Config = Config {
    trace_register_dumps: cfg!(feature = "trace_register_dumps"),
};
