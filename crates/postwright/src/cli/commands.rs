//! Command-line argument definitions.

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Validate social media posts and media against platform limits.
#[derive(Debug, Parser)]
#[command(name = "postwright", version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to ./postwright.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format, overriding the configured one
    #[arg(long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Treat warnings as failures (exit code 2)
    #[arg(long, global = true)]
    pub strict: bool,

    /// Only show errors, not warnings
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List supported platforms
    Platforms {
        /// Print each platform's full constraints
        #[arg(long)]
        details: bool,
    },

    /// Show one platform's constraints
    Spec {
        /// Platform key, e.g. "instagram"
        platform: String,
    },

    /// Show the default image and video dimensions for a platform
    Defaults {
        /// Platform key, e.g. "tiktok"
        platform: String,
    },

    /// Validate post text and hashtags
    Post {
        /// Target platform (falls back to default_platform)
        #[arg(short, long)]
        platform: Option<String>,

        /// Post text
        #[arg(short, long, conflicts_with = "file", required_unless_present = "file")]
        content: Option<String>,

        /// Hashtag, repeatable
        #[arg(long = "hashtag", conflicts_with = "file")]
        hashtags: Vec<String>,

        /// JSON file holding a generated post or a validation request
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Drop hashtags beyond the platform maximum before validating
        #[arg(long, requires = "file")]
        truncate_hashtags: bool,
    },

    /// Validate an image
    Image {
        /// Target platform (falls back to default_platform)
        #[arg(short, long)]
        platform: Option<String>,

        /// Width in pixels
        #[arg(long)]
        width: u32,

        /// Height in pixels
        #[arg(long)]
        height: u32,

        /// File size in megabytes
        #[arg(long)]
        size_mb: f64,

        /// File format, e.g. "jpeg" or "png"
        #[arg(long)]
        format: String,
    },

    /// Validate a video
    Video {
        /// Target platform (falls back to default_platform)
        #[arg(short, long)]
        platform: Option<String>,

        /// Width in pixels
        #[arg(long)]
        width: u32,

        /// Height in pixels
        #[arg(long)]
        height: u32,

        /// Duration in seconds
        #[arg(long)]
        duration: f64,

        /// File size in megabytes
        #[arg(long)]
        size_mb: f64,

        /// File format, e.g. "mp4"
        #[arg(long)]
        format: String,
    },
}
