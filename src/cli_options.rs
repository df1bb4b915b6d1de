/*
cli_options.rs

Copyright 2025 Hervé Quatremain

This file is part of Wirefill.

Wirefill is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Wirefill is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Wirefill. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options.
//!
//! In command-line mode, Wirefill generates levels and prints them, either as a text grid or as
//! JSON documents that a level cache can store.
//!
//! # Examples
//!
//! Print the first three levels of the easy preset, with their solution:
//!
//! ```
//! $ wirefill -f easy -c 3 --solution
//! ```
//!
//! Generate a 9x9 grid with five wires for level 77 in JSON format:
//!
//! ```
//! $ wirefill --rows 9 --cols 9 -w 5 -l 77 --format json
//! ```

use clap::{Parser, ValueEnum};
use log::debug;
use std::env;
use std::time::Instant;

use wirefill::generator::level::{Difficulty, GeneratorConfig, LevelData};
use wirefill::generator::level_generator::LevelGenerator;
use wirefill::generator::pregenerate::pregenerate;

use crate::config::{COPYRIGHT_NOTICE, VERSION};

/// Output format.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Text grid
    Ascii,

    /// JSON array of levels
    Json,
}

/// Generate Wirefill levels.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Difficulty level, which sets the default grid size and number of wires
    #[arg(value_enum, short = 'f', long, default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// Number of grid rows (overrides the difficulty preset)
    #[arg(long)]
    rows: Option<usize>,

    /// Number of grid columns (overrides the difficulty preset)
    #[arg(long)]
    cols: Option<usize>,

    /// Number of wires (overrides the difficulty preset)
    #[arg(short, long)]
    wires: Option<usize>,

    /// Number of the first level to generate
    #[arg(short, long, default_value_t = 1)]
    level: u32,

    /// Number of levels to generate
    #[arg(short, long, default_value_t = 1)]
    count: u32,

    /// Output format
    #[arg(value_enum, long, default_value_t = Format::Ascii)]
    format: Format,

    /// Draw the solution in the text grid
    #[arg(long, default_value_t = false)]
    solution: bool,

    /// Generate the levels in parallel
    #[arg(short, long, default_value_t = false)]
    parallel: bool,

    /// Print some statistics after generating the levels
    #[arg(short, long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Generation statistics.
#[derive(Default)]
struct Summary {
    total: f32,
    max: f32,
    attempts: u32,
    fallbacks: usize,
}

/// Parse and process command-line options. Return the process exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();
    debug!("Wirefill {VERSION}");

    let (preset_rows, preset_cols, preset_wires) = args.difficulty.preset();
    let config: GeneratorConfig = match GeneratorConfig::new(
        args.rows.unwrap_or(preset_rows),
        args.cols.unwrap_or(preset_cols),
        args.wires.unwrap_or(preset_wires),
        args.difficulty,
    ) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };

    //
    // Generate the levels
    //
    let mut summary: Summary = Summary::default();
    let levels: Vec<LevelData> = if args.parallel {
        let start: Instant = Instant::now();
        let levels: Vec<LevelData> = pregenerate(config, args.level, args.count);
        summary.total = start.elapsed().as_secs_f32();
        summary.fallbacks = levels.iter().filter(|l| l.fallback).count();
        levels
    } else {
        let mut generator: LevelGenerator = LevelGenerator::new(config);
        let mut levels: Vec<LevelData> = Vec::with_capacity(args.count as usize);
        for level_number in args.level..args.level.saturating_add(args.count) {
            levels.push(generator.generate(level_number));
            summary.total += generator.duration;
            if generator.duration > summary.max {
                summary.max = generator.duration;
            }
            summary.attempts += generator.attempts;
            if generator.fallback {
                summary.fallbacks += 1;
            }
        }
        levels
    };

    //
    // Print the levels
    //
    match args.format {
        Format::Json => match serde_json::to_string_pretty(&levels) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Error: cannot serialize the levels: {e}");
                return 1;
            }
        },
        Format::Ascii => {
            for level in &levels {
                let strategy: String = match level.strategy {
                    Some(s) => s.to_string(),
                    None => "fallback".to_string(),
                };
                println!(
                    "Level {} ({}, {}x{}, {} wires, {}, seed {:#010x})",
                    level.id,
                    level.config.difficulty,
                    level.config.grid_rows,
                    level.config.grid_cols,
                    level.wires.len(),
                    strategy,
                    level.seed
                );
                println!("{}", level.ascii(args.solution));
            }
        }
    }

    // Print some stats
    if args.summary {
        let count: u32 = args.count.max(1);
        if args.parallel {
            eprintln!(
                "
        total time = {}s
         fallbacks = {}",
                summary.total, summary.fallbacks
            );
        } else {
            eprintln!(
                "
        total time = {}s
      average time = {}s
          max time = {}s
  average attempts = {}
         fallbacks = {}",
                summary.total,
                summary.total / count as f32,
                summary.max,
                summary.attempts as f32 / count as f32,
                summary.fallbacks
            );
        }
    }
    0
}
