// Copyright (c) The liftlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration for workout logging and reporting.

use anyhow::{Context, Result};
use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Stats lookback used when no range is given on the command line.
    #[serde(default = "default_range")]
    pub default_range: String,

    /// Weight unit label used in output and chart captions.
    #[serde(default)]
    pub units: Units,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Kg,
    Lb,
}

impl Units {
    pub fn label(self) -> &'static str {
        match self {
            Units::Kg => "kg",
            Units::Lb => "lb",
        }
    }
}

fn default_range() -> String {
    "last4w".to_string()
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let content = fs::read_to_string(path.as_std_path())
            .with_context(|| format!("failed to read config file at {}", path))?;

        toml::from_str(&content)
            .with_context(|| format!("failed to parse config file at {}", path))
    }

    /// Load configuration, falling back to defaults when the file is absent.
    pub fn load_or_default(path: &Utf8Path) -> Result<Self> {
        if path.as_std_path().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_range: default_range(),
            units: Units::Kg,
        }
    }
}
