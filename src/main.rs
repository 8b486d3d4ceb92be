// Copyright (c) The liftlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Workout logging and weekly training statistics.

use anyhow::Result;

fn main() -> Result<()> {
    env_logger::init();
    liftlog::dispatch::dispatch()
}
