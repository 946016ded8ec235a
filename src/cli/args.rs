//! CLI argument structures

use crate::config::RosterConfig;
use crate::core::AverageMode;
use clap::Parser;
use std::path::PathBuf;

/// Keep a list of students and their grades
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "roster - Interactive student record manager", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file (defaults to ./roster.toml when present)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// JSON Schema used to validate files on load
    #[arg(long, value_name = "FILE")]
    pub schema: Option<PathBuf>,

    /// How the average grade used for sorting is computed (mean or fixed-five)
    #[arg(long, value_name = "MODE")]
    pub average: Option<AverageMode>,

    /// Load this file before the first prompt
    #[arg(long, value_name = "FILE")]
    pub load: Option<PathBuf>,
}

impl Cli {
    /// Apply command-line overrides on top of file and environment settings
    pub fn apply_overrides(&self, config: &mut RosterConfig) {
        if let Some(schema) = &self.schema {
            config.schema_path = schema.clone();
        }
        if let Some(average) = self.average {
            config.average = average;
        }
    }
}
