//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the postwright binary.

mod commands;
mod output;
mod platforms;
mod validate;

pub use commands::{Cli, Commands};
pub use output::{Verdict, render_human, to_json};
pub use platforms::{
    describe_spec, handle_defaults_command, handle_platforms_command, handle_spec_command,
};
pub use validate::{
    PostFile, PostSource, ReportOptions, handle_image_command, handle_post_command,
    handle_video_command, read_post_file,
};

use crate::config::CliConfig;
use postwright_error::PostwrightResult;

/// Dispatches a parsed command.
pub fn run(command: Commands, config: &CliConfig, quiet: bool) -> PostwrightResult<Verdict> {
    let options = ReportOptions { quiet };
    match command {
        Commands::Platforms { details } => handle_platforms_command(config, details),
        Commands::Spec { platform } => handle_spec_command(config, &platform),
        Commands::Defaults { platform } => handle_defaults_command(config, &platform),
        Commands::Post {
            platform,
            content,
            hashtags,
            file,
            truncate_hashtags,
        } => {
            let source = match file {
                Some(path) => PostSource::File {
                    path,
                    truncate_hashtags,
                },
                None => PostSource::Inline {
                    content: content.unwrap_or_default(),
                    hashtags,
                },
            };
            handle_post_command(config, options, platform.as_deref(), source)
        }
        Commands::Image {
            platform,
            width,
            height,
            size_mb,
            format,
        } => handle_image_command(
            config,
            options,
            platform.as_deref(),
            width,
            height,
            size_mb,
            &format,
        ),
        Commands::Video {
            platform,
            width,
            height,
            duration,
            size_mb,
            format,
        } => handle_video_command(
            config,
            options,
            platform.as_deref(),
            width,
            height,
            duration,
            size_mb,
            &format,
        ),
    }
}
