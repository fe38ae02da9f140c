//! texsplit CLI - splits packed metallic-roughness textures
//!
//! Reads a glTF-style metallic-roughness texture and writes the metalness
//! (blue) and roughness (green) channels as separate grayscale JPEG maps.
//! With no arguments it reads `Default_metalRoughness.jpg` and writes
//! `Default_metal.jpg` and `Default_roughness.jpg` in the current directory.

use clap::Parser;
use std::process::ExitCode;

use texsplit_cli::commands;
use texsplit_core::{
    DEFAULT_INPUT, DEFAULT_JPEG_QUALITY, DEFAULT_METAL_OUTPUT, DEFAULT_ROUGHNESS_OUTPUT,
};

/// texsplit - Split a metallic-roughness texture into metal and roughness maps
#[derive(Parser)]
#[command(name = "texsplit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Packed metallic-roughness texture to split
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: String,

    /// Output path for the metalness map (from the blue channel)
    #[arg(long, default_value = DEFAULT_METAL_OUTPUT)]
    metal_out: String,

    /// Output path for the roughness map (from the green channel)
    #[arg(long, default_value = DEFAULT_ROUGHNESS_OUTPUT)]
    roughness_out: String,

    /// JPEG quality for both outputs (1-100)
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_JPEG_QUALITY,
        value_parser = clap::value_parser!(u8).range(1..=100)
    )]
    quality: u8,

    /// Output machine-readable JSON diagnostics (no colored output)
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = commands::split::run(
        &cli.input,
        &cli.metal_out,
        &cli.roughness_out,
        cli.quality,
        cli.json,
    );

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
