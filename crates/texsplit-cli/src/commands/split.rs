//! Split command implementation
//!
//! Splits a packed metallic-roughness texture into metalness and roughness
//! maps and reports the outcome.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;
use texsplit_core::{split, SplitConfig};

use super::json_output::{JsonError, SplitOutput, SplitReport};

/// Run the split command
///
/// # Arguments
/// * `input` - Packed metallic-roughness texture
/// * `metal_out` - Metalness output path
/// * `roughness_out` - Roughness output path
/// * `quality` - JPEG quality (1-100)
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(
    input: &str,
    metal_out: &str,
    roughness_out: &str,
    quality: u8,
    json_output: bool,
) -> Result<ExitCode> {
    let config = SplitConfig::new(input)
        .with_metal_output(metal_out)
        .with_roughness_output(roughness_out)
        .with_quality(quality);

    if json_output {
        run_json(&config)
    } else {
        run_human(&config)
    }
}

/// Run split with human-readable (colored) output
fn run_human(config: &SplitConfig) -> Result<ExitCode> {
    let result = split(config)?;

    println!(
        "{} Created {} and {}",
        "Done!".green().bold(),
        result.metal.path.display(),
        result.roughness.path.display()
    );

    Ok(ExitCode::SUCCESS)
}

/// Run split with machine-readable JSON output
fn run_json(config: &SplitConfig) -> Result<ExitCode> {
    let (output, code) = match split(config) {
        Ok(result) => (
            SplitOutput::success(SplitReport::new(&result, config.quality)),
            ExitCode::SUCCESS,
        ),
        Err(e) => (
            SplitOutput::failure(vec![JsonError::from(&e)]),
            ExitCode::from(1),
        ),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(code)
}
