//! Rule checks for text, hashtags, images and videos.
//!
//! Every function here is pure and never fails. An unknown platform produces
//! an invalid [`ValidationResult`] with a single error; rule violations are
//! accumulated rather than short-circuited.

use crate::registry::get_platform_spec;
use crate::spec::{MediaConstraints, PlatformSpec};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Maximum absolute difference between an asset's width/height ratio and a
/// recommended ratio for the two to match. The comparison is strict.
pub const ASPECT_RATIO_TOLERANCE: f64 = 0.05;

/// Content shorter than this (but non-empty) gets a warning.
pub const VERY_SHORT_CONTENT_CHARS: usize = 10;

/// Hashtags longer than this (without the `#`) get a warning.
pub const MAX_HASHTAG_CHARS: usize = 30;

/// Videos shorter than this get a warning.
pub const VERY_SHORT_VIDEO_SECONDS: f64 = 3.0;

/// Images narrower than this fraction of the smallest recommended width get a warning.
pub const MIN_WIDTH_FRACTION: f64 = 0.5;

/// Numeric snapshot attached to a validation result.
///
/// Only the fields relevant to the check that produced it are present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationStats {
    /// Characters in the content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub char_count: Option<usize>,
    /// Platform character limit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub char_limit: Option<usize>,
    /// Number of hashtags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hashtag_count: Option<usize>,
    /// Platform hashtag limit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hashtag_limit: Option<usize>,
    /// Asset size in megabytes
    #[serde(rename = "fileSizeMB", skip_serializing_if = "Option::is_none")]
    pub file_size_mb: Option<f64>,
    /// Platform size limit in megabytes
    #[serde(rename = "maxSizeMB", skip_serializing_if = "Option::is_none")]
    pub max_size_mb: Option<f64>,
    /// Asset width in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Asset height in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Video duration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,
    /// Platform duration limit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_duration_seconds: Option<u32>,
}

impl ValidationStats {
    /// Combines two snapshots; fields present in `other` win.
    pub fn merge(self, other: ValidationStats) -> ValidationStats {
        ValidationStats {
            char_count: other.char_count.or(self.char_count),
            char_limit: other.char_limit.or(self.char_limit),
            hashtag_count: other.hashtag_count.or(self.hashtag_count),
            hashtag_limit: other.hashtag_limit.or(self.hashtag_limit),
            file_size_mb: other.file_size_mb.or(self.file_size_mb),
            max_size_mb: other.max_size_mb.or(self.max_size_mb),
            width: other.width.or(self.width),
            height: other.height.or(self.height),
            duration_seconds: other.duration_seconds.or(self.duration_seconds),
            max_duration_seconds: other.max_duration_seconds.or(self.max_duration_seconds),
        }
    }
}

/// Outcome of a validation call.
///
/// `valid` is true exactly when `errors` is empty; warnings never affect it.
///
/// # Examples
///
/// ```
/// use postwright_platform::validate_text_content;
///
/// let result = validate_text_content("twitter", &"A".repeat(300));
/// assert!(!result.is_valid());
/// assert!(result.errors()[0].contains("300/280"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(into = "ValidationResultRepr", from = "ValidationResultRepr")]
pub struct ValidationResult {
    /// Hard-limit violations
    errors: Vec<String>,
    /// Advisory findings
    warnings: Vec<String>,
    /// Numeric snapshot
    stats: ValidationStats,
}

// Wire shape. `valid` is written from `errors` and ignored on read.
#[derive(Serialize, Deserialize)]
struct ValidationResultRepr {
    #[serde(default)]
    valid: bool,
    #[serde(default)]
    errors: Vec<String>,
    #[serde(default)]
    warnings: Vec<String>,
    #[serde(default)]
    stats: ValidationStats,
}

impl From<ValidationResult> for ValidationResultRepr {
    fn from(result: ValidationResult) -> Self {
        Self {
            valid: result.is_valid(),
            errors: result.errors,
            warnings: result.warnings,
            stats: result.stats,
        }
    }
}

impl From<ValidationResultRepr> for ValidationResult {
    fn from(repr: ValidationResultRepr) -> Self {
        Self {
            errors: repr.errors,
            warnings: repr.warnings,
            stats: repr.stats,
        }
    }
}

impl ValidationResult {
    /// Creates a passing result carrying `stats`.
    pub fn new(stats: ValidationStats) -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
            stats,
        }
    }

    /// The structural rejection for a platform missing from the registry.
    pub fn unknown_platform(platform: &str) -> Self {
        let mut result = Self::new(ValidationStats::default());
        result.add_error(format!("Unknown platform: {}", platform));
        result
    }

    /// Returns true if validation passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Records an error, which makes the result invalid.
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
    }

    /// Records a warning.
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Concatenates two results, `self` first. Stats from `other` win on collision.
    pub fn merge(mut self, other: ValidationResult) -> ValidationResult {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        self.stats = self.stats.merge(other.stats);
        self
    }
}

fn resolve(platform: &str) -> Result<&'static PlatformSpec, ValidationResult> {
    get_platform_spec(platform).ok_or_else(|| {
        warn!(platform, "Validation requested for unknown platform");
        ValidationResult::unknown_platform(platform)
    })
}

/// Checks post text against the platform's character limits.
#[instrument(skip(content), fields(len = content.len()))]
pub fn validate_text_content(platform: &str, content: &str) -> ValidationResult {
    let spec = match resolve(platform) {
        Ok(spec) => spec,
        Err(result) => return result,
    };

    let char_count = content.chars().count();
    let max_chars = spec.text.max_chars;
    let mut result = ValidationResult::new(ValidationStats {
        char_count: Some(char_count),
        char_limit: Some(max_chars),
        ..Default::default()
    });

    if char_count > max_chars {
        debug!(char_count, max_chars, "Content over character limit");
        result.add_error(format!(
            "Content exceeds {} character limit ({}/{})",
            spec.name, char_count, max_chars
        ));
    }

    if let Some(sweet_spot) = spec.text.sweet_spot.filter(|s| char_count > *s) {
        debug!(char_count, sweet_spot, "Content past sweet spot");
        result.add_warning(format!(
            "Content is {} characters; {} posts perform best under {}. \
             Put the key message in the first {} characters",
            char_count, spec.name, sweet_spot, sweet_spot
        ));
    }

    if char_count > 0 && char_count < VERY_SHORT_CONTENT_CHARS {
        result.add_warning(format!(
            "Content is very short ({} characters); consider adding more detail",
            char_count
        ));
    }

    result
}

/// Checks hashtag count and each tag's shape.
///
/// A single leading `#` is ignored, so `"rust"` and `"#rust"` validate the same.
#[instrument(skip(hashtags), fields(count = hashtags.len()))]
pub fn validate_hashtags<S: AsRef<str>>(platform: &str, hashtags: &[S]) -> ValidationResult {
    let spec = match resolve(platform) {
        Ok(spec) => spec,
        Err(result) => return result,
    };

    let count = hashtags.len();
    let limits = spec.hashtags;
    let mut result = ValidationResult::new(ValidationStats {
        hashtag_count: Some(count),
        hashtag_limit: Some(limits.max),
        ..Default::default()
    });

    if count > limits.max {
        debug!(count, max = limits.max, "Too many hashtags");
        result.add_error(format!(
            "Too many hashtags for {} ({}/{})",
            spec.name, count, limits.max
        ));
    }

    // Fires alongside the error above when count > max.
    if count > limits.recommended {
        result.add_warning(format!(
            "{} hashtags used; {} recommends at most {}",
            count, spec.name, limits.recommended
        ));
    }

    for (index, tag) in hashtags.iter().enumerate() {
        let tag = tag.as_ref();
        let stripped = tag.strip_prefix('#').unwrap_or(tag);
        let position = index + 1;

        if stripped.is_empty() {
            result.add_error(format!("Hashtag {} is empty", position));
        }
        if stripped.contains(' ') {
            result.add_error(format!(
                "Hashtag {} (\"{}\") cannot contain spaces",
                position, tag
            ));
        }
        if stripped.chars().count() > MAX_HASHTAG_CHARS {
            result.add_warning(format!(
                "Hashtag {} (\"{}\") is longer than {} characters",
                position, tag, MAX_HASHTAG_CHARS
            ));
        }
    }

    if count == 0 && limits.encouraged {
        result.add_warning(format!(
            "No hashtags provided; hashtags improve discoverability on {}",
            spec.key
        ));
    }

    result
}

/// Uppercases an image format and folds `JPEG` into `JPG`.
pub fn normalize_image_format(format: &str) -> String {
    let upper = format.to_ascii_uppercase();
    if upper == "JPEG" { "JPG".to_string() } else { upper }
}

fn matches_recommended_ratio(width: u32, height: u32, media: &MediaConstraints) -> bool {
    let ratio = f64::from(width) / f64::from(height);
    media
        .dimensions
        .iter()
        .any(|dim| (dim.ratio() - ratio).abs() < ASPECT_RATIO_TOLERANCE)
}

fn recommended_ratios(media: &MediaConstraints) -> String {
    media
        .dimensions
        .iter()
        .map(|dim| format!("{} ({})", dim.name, dim.aspect_ratio))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Checks an image's format, size, aspect ratio and resolution.
#[instrument]
pub fn validate_image(
    platform: &str,
    width: u32,
    height: u32,
    file_size_mb: f64,
    format: &str,
) -> ValidationResult {
    let spec = match resolve(platform) {
        Ok(spec) => spec,
        Err(result) => return result,
    };

    let images = &spec.images;
    let mut result = ValidationResult::new(ValidationStats {
        width: Some(width),
        height: Some(height),
        file_size_mb: Some(file_size_mb),
        max_size_mb: Some(images.max_size_mb),
        ..Default::default()
    });

    let normalized = normalize_image_format(format);
    if !images.accepts(&normalized) {
        result.add_error(format!(
            "Image format {} is not supported by {}. Supported formats: {}",
            normalized,
            spec.name,
            images.formats.join(", ")
        ));
    }

    if file_size_mb > images.max_size_mb {
        result.add_error(format!(
            "Image size {}MB exceeds {} limit of {}MB",
            file_size_mb, spec.name, images.max_size_mb
        ));
    }

    if !matches_recommended_ratio(width, height, images) {
        debug!(width, height, "Image aspect ratio not recommended");
        result.add_warning(format!(
            "Image aspect ratio {}x{} doesn't match {} recommendations: {}",
            width,
            height,
            spec.name,
            recommended_ratios(images)
        ));
    }

    let too_narrow = |min: &u32| f64::from(width) < MIN_WIDTH_FRACTION * f64::from(*min);
    if let Some(min_width) = images.min_width().filter(too_narrow) {
        result.add_warning(format!(
            "Image width {}px is small for {}; recommended minimum is {}px",
            width, spec.name, min_width
        ));
    }

    result
}

/// Checks a video's format, size, duration and aspect ratio.
#[instrument]
pub fn validate_video(
    platform: &str,
    width: u32,
    height: u32,
    duration_seconds: f64,
    file_size_mb: f64,
    format: &str,
) -> ValidationResult {
    let spec = match resolve(platform) {
        Ok(spec) => spec,
        Err(result) => return result,
    };

    let videos = &spec.videos;
    let mut result = ValidationResult::new(ValidationStats {
        width: Some(width),
        height: Some(height),
        duration_seconds: Some(duration_seconds),
        max_duration_seconds: videos.max_duration_seconds,
        file_size_mb: Some(file_size_mb),
        max_size_mb: Some(videos.max_size_mb),
        ..Default::default()
    });

    let normalized = format.to_ascii_uppercase();
    if !videos.accepts(&normalized) {
        result.add_error(format!(
            "Video format {} is not supported by {}. Supported formats: {}",
            normalized,
            spec.name,
            videos.formats.join(", ")
        ));
    }

    if file_size_mb > videos.max_size_mb {
        result.add_error(format!(
            "Video size {}MB exceeds {} limit of {}MB",
            file_size_mb, spec.name, videos.max_size_mb
        ));
    }

    let too_long = |max: &u32| duration_seconds > f64::from(*max);
    if let Some(max_duration) = videos.max_duration_seconds.filter(too_long) {
        result.add_error(format!(
            "Video duration {}s exceeds {} limit of {}s",
            duration_seconds, spec.name, max_duration
        ));
    }

    if duration_seconds < VERY_SHORT_VIDEO_SECONDS {
        result.add_warning(format!(
            "Video is very short ({}s); consider at least {} seconds",
            duration_seconds, VERY_SHORT_VIDEO_SECONDS
        ));
    }

    if !matches_recommended_ratio(width, height, videos) {
        debug!(width, height, "Video aspect ratio not recommended");
        result.add_warning(format!(
            "Video aspect ratio {}x{} doesn't match {} recommendations: {}",
            width,
            height,
            spec.name,
            recommended_ratios(videos)
        ));
    }

    if let Some(soft) = videos
        .soft_duration
        .filter(|soft| duration_seconds > f64::from(soft.seconds))
    {
        result.add_warning(format!(
            "Video is longer than {} seconds; {}",
            soft.seconds, soft.advice
        ));
    }

    result
}

/// Validates text and hashtags together.
///
/// Text findings come first; the result is valid only if both parts are. An
/// unknown platform yields the single unknown-platform error.
#[instrument(skip(content, hashtags))]
pub fn validate_post<S: AsRef<str>>(
    platform: &str,
    content: &str,
    hashtags: &[S],
) -> ValidationResult {
    if let Err(result) = resolve(platform) {
        return result;
    }
    let text = validate_text_content(platform, content);
    let tags = validate_hashtags(platform, hashtags);
    let result = text.merge(tags);
    debug!(
        valid = result.is_valid(),
        errors = result.errors().len(),
        warnings = result.warnings().len(),
        "Post validated"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_inside_tolerance_matches() {
        // Instagram square is 1.0; 104x100 is 0.04 away.
        let result = validate_image("instagram", 1040, 1000, 1.0, "PNG");
        assert!(result.warnings().iter().all(|w| !w.contains("aspect ratio")));
    }

    #[test]
    fn test_ratio_at_tolerance_does_not_match() {
        // 1050x1000 is 0.05 away from square and nowhere near 4:5 or 1.91:1.
        let result = validate_image("instagram", 1050, 1000, 1.0, "PNG");
        assert!(result.warnings().iter().any(|w| w.contains("aspect ratio")));
    }

    #[test]
    fn test_zero_height_is_a_mismatch_not_a_panic() {
        let result = validate_image("twitter", 1200, 0, 1.0, "PNG");
        assert!(result.is_valid());
        assert!(result.warnings().iter().any(|w| w.contains("aspect ratio")));
    }

    #[test]
    fn test_jpeg_folds_into_jpg() {
        assert_eq!(normalize_image_format("jpeg"), "JPG");
        assert_eq!(normalize_image_format("Png"), "PNG");
        assert_eq!(normalize_image_format("webp"), "WEBP");
    }

    #[test]
    fn test_merge_keeps_order_and_validity() {
        let mut first = ValidationResult::new(ValidationStats::default());
        first.add_warning("first warning");
        let mut second = ValidationResult::new(ValidationStats::default());
        second.add_error("second error");
        second.add_warning("second warning");

        let merged = first.merge(second);
        assert!(!merged.is_valid());
        assert_eq!(merged.errors(), &vec!["second error".to_string()]);
        assert_eq!(
            merged.warnings(),
            &vec!["first warning".to_string(), "second warning".to_string()]
        );
    }

    #[test]
    fn test_stats_merge_prefers_right_hand_side() {
        let left = ValidationStats {
            char_count: Some(5),
            width: Some(10),
            ..Default::default()
        };
        let right = ValidationStats {
            width: Some(20),
            hashtag_count: Some(1),
            ..Default::default()
        };
        let merged = left.merge(right);
        assert_eq!(merged.char_count, Some(5));
        assert_eq!(merged.width, Some(20));
        assert_eq!(merged.hashtag_count, Some(1));
    }

    #[test]
    fn test_valid_is_derived_from_errors_on_read() {
        let json = r#"{"valid": true, "errors": ["boom"], "warnings": [], "stats": {}}"#;
        let result: ValidationResult = serde_json::from_str(json).unwrap();
        assert!(!result.is_valid());
        assert_eq!(serde_json::to_value(&result).unwrap()["valid"], false);

        let json = r#"{"valid": false, "errors": [], "warnings": ["hm"]}"#;
        let result: ValidationResult = serde_json::from_str(json).unwrap();
        assert!(result.is_valid());
        assert_eq!(result.warnings().len(), 1);
    }

    #[test]
    fn test_unknown_platform_post_has_single_error() {
        let result = validate_post("myspace", "hello world", &["#a"]);
        assert_eq!(result, ValidationResult::unknown_platform("myspace"));
        assert!(result.warnings().is_empty());
        assert_eq!(result.stats(), &ValidationStats::default());
    }

    #[test]
    fn test_stats_serialize_only_present_fields() {
        let stats = ValidationStats {
            file_size_mb: Some(2.0),
            max_size_mb: Some(5.0),
            ..Default::default()
        };
        let json = serde_json::to_value(stats).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(json["fileSizeMB"], 2.0);
        assert_eq!(json["maxSizeMB"], 5.0);
    }
}
