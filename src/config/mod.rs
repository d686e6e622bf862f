// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Configuration module for dadjoke
//!
//! Resolves runtime settings from built-in defaults and command-line flags.

pub mod settings;

pub use settings::*;
