//! Validation command handlers.

use super::output::{Verdict, render_human, to_json};
use crate::config::{CliConfig, OutputFormat};
use postwright_error::{IoError, JsonError, PostwrightResult};
use postwright_platform::{
    GeneratedPost, ValidationResult, validate_image, validate_post, validate_video,
};
use serde::Deserialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Flags shared by the validation commands.
#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    /// Show errors only
    pub quiet: bool,
}

/// A post file: a generated post, optionally carrying its target platform.
///
/// Covers both the generator's output and the validation request payload.
#[derive(Debug, Deserialize)]
pub struct PostFile {
    /// Target platform, if the file names one
    #[serde(default)]
    pub platform: Option<String>,
    /// The post itself
    #[serde(flatten)]
    pub post: GeneratedPost,
}

/// Reads and parses a post file.
#[instrument(fields(path = %path.display()))]
pub fn read_post_file(path: &Path) -> PostwrightResult<PostFile> {
    let raw = std::fs::read_to_string(path).map_err(|e| IoError::new(path, e.to_string()))?;
    let file: PostFile = serde_json::from_str(&raw).map_err(JsonError::from)?;
    debug!(
        hashtags = file.post.hashtags().len(),
        platform = ?file.platform,
        "Post file parsed"
    );
    Ok(file)
}

fn report(
    config: &CliConfig,
    options: ReportOptions,
    label: &str,
    result: &ValidationResult,
) -> PostwrightResult<Verdict> {
    match config.output() {
        OutputFormat::Json => println!("{}", to_json(result)?),
        OutputFormat::Human => print!(
            "{}",
            render_human(label, result, *config.strict(), options.quiet)
        ),
    }
    Ok(Verdict::of(result, *config.strict()))
}

/// Where the post being validated comes from.
#[derive(Debug, Clone)]
pub enum PostSource {
    /// Text and hashtags given on the command line
    Inline {
        /// Post text
        content: String,
        /// Hashtags
        hashtags: Vec<String>,
    },
    /// A JSON file
    File {
        /// Path to the file
        path: PathBuf,
        /// Drop hashtags beyond the platform maximum first
        truncate_hashtags: bool,
    },
}

/// Handles `post`.
#[instrument(skip(config, source))]
pub fn handle_post_command(
    config: &CliConfig,
    options: ReportOptions,
    platform: Option<&str>,
    source: PostSource,
) -> PostwrightResult<Verdict> {
    match source {
        PostSource::Inline { content, hashtags } => {
            let platform = config.resolve_platform(platform)?;
            info!(platform = %platform, "Validating post");
            let result = validate_post(&platform, &content, &hashtags);
            report(config, options, &format!("{} post", platform), &result)
        }
        PostSource::File {
            path,
            truncate_hashtags,
        } => {
            let PostFile {
                platform: file_platform,
                mut post,
            } = read_post_file(&path)?;
            let platform = config.resolve_platform(platform.or(file_platform.as_deref()))?;
            info!(platform = %platform, path = %path.display(), "Validating post file");

            let dropped = if truncate_hashtags {
                post.enforce_hashtag_limit(&platform)
            } else {
                0
            };
            let result = post.validate(&platform);

            if !truncate_hashtags {
                return report(config, options, &path.display().to_string(), &result);
            }

            match config.output() {
                OutputFormat::Json => println!(
                    "{}",
                    to_json(&json!({
                        "post": post,
                        "droppedHashtags": dropped,
                        "result": result,
                    }))?
                ),
                OutputFormat::Human => {
                    if dropped > 0 {
                        println!(
                            "✂️  Dropped {} hashtag(s) over the {} limit",
                            dropped, platform
                        );
                    }
                    print!(
                        "{}",
                        render_human(
                            &path.display().to_string(),
                            &result,
                            *config.strict(),
                            options.quiet
                        )
                    );
                    println!("\nCorrected post:\n{}", to_json(&post)?);
                }
            }
            Ok(Verdict::of(&result, *config.strict()))
        }
    }
}

/// Handles `image`.
#[instrument(skip(config))]
pub fn handle_image_command(
    config: &CliConfig,
    options: ReportOptions,
    platform: Option<&str>,
    width: u32,
    height: u32,
    size_mb: f64,
    format: &str,
) -> PostwrightResult<Verdict> {
    let platform = config.resolve_platform(platform)?;
    let result = validate_image(&platform, width, height, size_mb, format);
    report(config, options, &format!("{} image", platform), &result)
}

/// Handles `video`.
#[allow(clippy::too_many_arguments)]
#[instrument(skip(config))]
pub fn handle_video_command(
    config: &CliConfig,
    options: ReportOptions,
    platform: Option<&str>,
    width: u32,
    height: u32,
    duration: f64,
    size_mb: f64,
    format: &str,
) -> PostwrightResult<Verdict> {
    let platform = config.resolve_platform(platform)?;
    let result = validate_video(&platform, width, height, duration, size_mb, format);
    report(config, options, &format!("{} video", platform), &result)
}
