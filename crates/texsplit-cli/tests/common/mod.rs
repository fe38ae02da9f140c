//! Test harness utilities for running the texsplit binary and checking outputs.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use image::{Rgb, RgbImage};
use tempfile::TempDir;

/// Result of running the texsplit CLI.
#[derive(Debug)]
pub struct CliResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Create a CliResult from a Command Output.
    pub fn from_output(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Assert that the command succeeded.
    pub fn assert_success(&self) {
        assert!(
            self.success,
            "Command failed with exit code {}.\nstdout: {}\nstderr: {}",
            self.exit_code, self.stdout, self.stderr
        );
    }

    /// Assert that the command failed.
    pub fn assert_failure(&self) {
        assert!(
            !self.success,
            "Expected command to fail, but it succeeded.\nstdout: {}",
            self.stdout
        );
    }
}

/// A scratch directory the CLI runs in.
pub struct TestHarness {
    /// Working directory for test inputs and outputs.
    pub work_dir: TempDir,
}

impl TestHarness {
    /// Create a new test harness.
    pub fn new() -> Self {
        Self {
            work_dir: TempDir::new().expect("Failed to create work dir"),
        }
    }

    /// Get the working directory path.
    pub fn path(&self) -> &Path {
        self.work_dir.path()
    }

    /// Run the texsplit binary inside the work directory.
    pub fn run_cli(&self, args: &[&str]) -> CliResult {
        let output = Command::new(env!("CARGO_BIN_EXE_texsplit"))
            .args(args)
            .current_dir(self.path())
            .env("NO_COLOR", "1")
            .output();

        match output {
            Ok(out) => CliResult::from_output(out),
            Err(e) => CliResult {
                success: false,
                exit_code: -1,
                stdout: String::new(),
                stderr: format!("Failed to run CLI: {}", e),
            },
        }
    }

    /// Save `image` as PNG under the work directory and return its path.
    pub fn write_png(&self, name: &str, image: &RgbImage) -> PathBuf {
        let path = self.path().join(name);
        image.save(&path).expect("Failed to write test image");
        path
    }

    /// Write `image` as the default input file name.
    ///
    /// The content is PNG; decoding goes by content, not extension.
    pub fn write_default_input(&self, image: &RgbImage) -> PathBuf {
        let path = self.path().join("Default_metalRoughness.jpg");
        image
            .save_with_format(&path, image::ImageFormat::Png)
            .expect("Failed to write default input");
        path
    }

    /// BLAKE3 hash of a file in the work directory.
    pub fn hash_file(&self, name: &str) -> String {
        let data = fs::read(self.path().join(name)).expect("Failed to read output");
        blake3::hash(&data).to_hex().to_string()
    }

    /// Decode a file in the work directory as RGB.
    pub fn load_rgb(&self, name: &str) -> RgbImage {
        image::open(self.path().join(name))
            .expect("Failed to decode output")
            .to_rgb8()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Packed texture of flat 8x8 blocks; every block has distinct G and B.
pub fn block_texture(blocks_x: u32, blocks_y: u32) -> RgbImage {
    RgbImage::from_fn(blocks_x * 8, blocks_y * 8, |x, y| {
        let bx = (x / 8) as u8;
        let by = (y / 8) as u8;
        Rgb([255, 20 + by * 40, 220 - bx * 35])
    })
}

/// Assert `output` is gray and tracks `channel` of `source` within JPEG error.
pub fn assert_channel_replicated(output: &RgbImage, source: &RgbImage, channel: usize) {
    assert_eq!(output.dimensions(), source.dimensions());
    for (x, y, px) in output.enumerate_pixels() {
        let expected = source.get_pixel(x, y)[channel] as i16;
        for c in 0..3 {
            assert!(
                (px[c] as i16 - expected).abs() <= 3,
                "pixel ({}, {}) channel {}: expected ~{}, got {}",
                x,
                y,
                c,
                expected,
                px[c]
            );
        }
    }
}
