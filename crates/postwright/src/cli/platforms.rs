//! Registry inspection commands.

use super::output::{Verdict, to_json};
use crate::config::{CliConfig, OutputFormat};
use postwright_error::PostwrightResult;
use postwright_platform::{
    MediaDefaults, MediaDimension, PlatformSpec, get_platform_spec, get_supported_platforms,
};
use tracing::{instrument, warn};

fn describe_dimension(dim: &MediaDimension) -> String {
    format!("{} {}x{} ({})", dim.name, dim.width, dim.height, dim.aspect_ratio)
}

/// Multi-line human description of a spec.
pub fn describe_spec(spec: &PlatformSpec) -> String {
    let mut out = format!("{} ({})\n", spec.name, spec.key);
    out.push_str(&format!("  Text: max {} characters", spec.text.max_chars));
    if let Some(sweet_spot) = spec.text.sweet_spot {
        out.push_str(&format!(", best under {}", sweet_spot));
    }
    out.push('\n');
    out.push_str(&format!(
        "  Hashtags: max {}, recommended {}\n",
        spec.hashtags.max, spec.hashtags.recommended
    ));
    out.push_str(&format!(
        "  Images: {} up to {}MB\n",
        spec.images.formats.join(", "),
        spec.images.max_size_mb
    ));
    for dim in spec.images.dimensions {
        out.push_str(&format!("    - {}\n", describe_dimension(dim)));
    }
    out.push_str(&format!(
        "  Videos: {} up to {}MB",
        spec.videos.formats.join(", "),
        spec.videos.max_size_mb
    ));
    if let Some(max) = spec.videos.max_duration_seconds {
        out.push_str(&format!(", {}s", max));
    }
    out.push('\n');
    for dim in spec.videos.dimensions {
        out.push_str(&format!("    - {}\n", describe_dimension(dim)));
    }
    if let Some(og) = spec.open_graph {
        out.push_str(&format!(
            "  Open Graph: {} (image {})\n",
            if og.required { "required" } else { "optional" },
            og.image_size
        ));
    }
    out
}

/// Handles `platforms`.
#[instrument(skip(config))]
pub fn handle_platforms_command(config: &CliConfig, details: bool) -> PostwrightResult<Verdict> {
    let keys = get_supported_platforms();
    match (config.output(), details) {
        (OutputFormat::Json, false) => println!("{}", to_json(&keys)?),
        (OutputFormat::Json, true) => {
            let specs: Vec<&PlatformSpec> =
                keys.iter().filter_map(|key| get_platform_spec(key)).collect();
            println!("{}", to_json(&specs)?);
        }
        (OutputFormat::Human, false) => {
            for key in keys {
                println!("{}", key);
            }
        }
        (OutputFormat::Human, true) => {
            for spec in keys.iter().filter_map(|key| get_platform_spec(key)) {
                println!("{}", describe_spec(spec));
            }
        }
    }
    Ok(Verdict::Pass)
}

/// Handles `spec <platform>`.
#[instrument(skip(config))]
pub fn handle_spec_command(config: &CliConfig, platform: &str) -> PostwrightResult<Verdict> {
    let Some(spec) = get_platform_spec(platform) else {
        warn!("Unknown platform requested");
        eprintln!("Unknown platform: {}", platform);
        return Ok(Verdict::Invalid);
    };
    match config.output() {
        OutputFormat::Json => println!("{}", to_json(spec)?),
        OutputFormat::Human => print!("{}", describe_spec(spec)),
    }
    Ok(Verdict::Pass)
}

/// Handles `defaults <platform>`.
#[instrument(skip(config))]
pub fn handle_defaults_command(config: &CliConfig, platform: &str) -> PostwrightResult<Verdict> {
    let Some(defaults) = MediaDefaults::for_platform(platform) else {
        warn!("No media defaults for platform");
        eprintln!("Unknown platform: {}", platform);
        return Ok(Verdict::Invalid);
    };
    match config.output() {
        OutputFormat::Json => println!("{}", to_json(&defaults)?),
        OutputFormat::Human => {
            println!("{}", defaults.platform());
            println!("  Image: {}", describe_dimension(defaults.image()));
            println!("  Video: {}", describe_dimension(defaults.video()));
        }
    }
    Ok(Verdict::Pass)
}

#[cfg(test)]
mod tests {
    use super::*;
    use postwright_platform::Platform;

    #[test]
    fn test_describe_twitter() {
        let text = describe_spec(Platform::Twitter.spec());
        assert!(text.starts_with("Twitter/X (twitter)"));
        assert!(text.contains("max 280 characters, best under 100"));
        assert!(text.contains("Standard 1200x675 (16:9)"));
        assert!(!text.contains("Open Graph"));
    }

    #[test]
    fn test_describe_linkedin_open_graph() {
        let text = describe_spec(Platform::Linkedin.spec());
        assert!(text.contains("Open Graph: required (image 1200x627)"));
    }

    #[test]
    fn test_known_platform_verdicts() {
        let config = CliConfig::default();
        assert_eq!(handle_defaults_command(&config, "tiktok").unwrap(), Verdict::Pass);
        assert_eq!(handle_spec_command(&config, "Facebook").unwrap(), Verdict::Pass);
    }

    #[test]
    fn test_unknown_platform_verdicts() {
        let config = CliConfig::default();
        assert_eq!(handle_spec_command(&config, "myspace").unwrap(), Verdict::Invalid);
        assert_eq!(handle_defaults_command(&config, "myspace").unwrap(), Verdict::Invalid);
    }
}
