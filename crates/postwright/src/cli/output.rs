//! Rendering of validation results.

use postwright_error::{JsonError, PostwrightResult};
use postwright_platform::{ValidationResult, ValidationStats};
use serde::Serialize;

/// Outcome of a command, mapped to the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// No errors (and no warnings under strict mode)
    Pass,
    /// At least one error
    Invalid,
    /// Warnings only, in strict mode
    StrictWarnings,
}

impl Verdict {
    /// Derives the verdict for a result.
    pub fn of(result: &ValidationResult, strict: bool) -> Self {
        if !result.is_valid() {
            Verdict::Invalid
        } else if strict && !result.warnings().is_empty() {
            Verdict::StrictWarnings
        } else {
            Verdict::Pass
        }
    }

    /// Process exit code.
    pub fn exit_code(self) -> i32 {
        match self {
            Verdict::Pass => 0,
            Verdict::Invalid => 1,
            Verdict::StrictWarnings => 2,
        }
    }
}

/// Pretty-printed JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> PostwrightResult<String> {
    Ok(serde_json::to_string_pretty(value).map_err(JsonError::from)?)
}

fn stat_lines(stats: &ValidationStats) -> Vec<String> {
    let mut lines = Vec::new();
    if let (Some(count), Some(limit)) = (stats.char_count, stats.char_limit) {
        lines.push(format!("Characters: {}/{}", count, limit));
    }
    if let (Some(count), Some(limit)) = (stats.hashtag_count, stats.hashtag_limit) {
        lines.push(format!("Hashtags: {}/{}", count, limit));
    }
    if let (Some(width), Some(height)) = (stats.width, stats.height) {
        lines.push(format!("Dimensions: {}x{}", width, height));
    }
    if let (Some(size), Some(max)) = (stats.file_size_mb, stats.max_size_mb) {
        lines.push(format!("File size: {}MB/{}MB", size, max));
    }
    match (stats.duration_seconds, stats.max_duration_seconds) {
        (Some(duration), Some(max)) => lines.push(format!("Duration: {}s/{}s", duration, max)),
        (Some(duration), None) => lines.push(format!("Duration: {}s", duration)),
        _ => {}
    }
    lines
}

/// Human-readable report for `label`.
pub fn render_human(label: &str, result: &ValidationResult, strict: bool, quiet: bool) -> String {
    let status_icon = if !result.is_valid() {
        "❌"
    } else if !result.warnings().is_empty() {
        if strict { "⚠️" } else { "✅" }
    } else {
        "✅"
    };

    let mut out = format!("{} {}\n{}\n", status_icon, label, "─".repeat(60));

    if !result.errors().is_empty() {
        out.push_str("\nErrors:\n");
        for (i, error) in result.errors().iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", i + 1, error));
        }
    }

    if !quiet && !result.warnings().is_empty() {
        out.push_str("\nWarnings:\n");
        for (i, warning) in result.warnings().iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", i + 1, warning));
        }
    }

    if result.is_valid() && result.warnings().is_empty() {
        out.push_str("\n  No issues found\n");
    }

    let stats = stat_lines(result.stats());
    if !stats.is_empty() {
        out.push_str("\nStats:\n");
        for line in stats {
            out.push_str(&format!("  {}\n", line));
        }
    }

    out
}
