//! Constraint records describing what each platform accepts.

use serde::Serialize;

/// A recommended media size for a platform.
///
/// The first entry of a platform's dimension list is its primary (optimal)
/// dimension, so list order matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaDimension {
    /// Human-readable label, e.g. "Square" or "Reels"
    pub name: &'static str,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Aspect ratio label, e.g. "16:9"
    pub aspect_ratio: &'static str,
}

impl MediaDimension {
    /// Width divided by height.
    pub fn ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}

/// Character limits for post text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextLimits {
    /// Hard limit; longer content is rejected
    pub max_chars: usize,
    /// Engagement threshold below the hard limit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sweet_spot: Option<usize>,
}

/// An advisory duration threshold with platform-specific advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftDurationLimit {
    /// Duration above which the advice applies
    pub seconds: u32,
    /// Advice appended to the warning
    pub advice: &'static str,
}

/// Format, size and dimension constraints for images or videos.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaConstraints {
    /// Accepted formats as uppercase tokens
    pub formats: &'static [&'static str],
    /// Maximum file size in megabytes
    #[serde(rename = "maxSizeMB")]
    pub max_size_mb: f64,
    /// Recommended dimensions, primary first
    pub dimensions: &'static [MediaDimension],
    /// Upload ceiling for videos
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_duration_seconds: Option<u32>,
    /// Platform-specific soft limit for videos
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soft_duration: Option<SoftDurationLimit>,
}

impl MediaConstraints {
    /// Returns true if `format` (already normalized to uppercase) is accepted.
    pub fn accepts(&self, format: &str) -> bool {
        self.formats.iter().any(|f| *f == format)
    }

    /// The primary dimension, if any are declared.
    pub fn optimal(&self) -> Option<&'static MediaDimension> {
        self.dimensions.first()
    }

    /// Smallest recommended width across all dimensions.
    pub fn min_width(&self) -> Option<u32> {
        self.dimensions.iter().map(|d| d.width).min()
    }
}

/// Hashtag count limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HashtagLimits {
    /// Hard limit
    pub max: usize,
    /// Recommended count, never above `max`
    pub recommended: usize,
    /// Whether posts without hashtags get a discoverability warning
    pub encouraged: bool,
}

/// Open Graph metadata requirements for link previews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    /// Whether link posts need Open Graph tags
    pub required: bool,
    /// Preferred preview image size, e.g. "1200x630"
    pub image_size: &'static str,
}

/// Everything a platform accepts, as a single immutable record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformSpec {
    /// Lowercase registry key
    pub key: &'static str,
    /// Display name
    pub name: &'static str,
    /// Text limits
    pub text: TextLimits,
    /// Image constraints
    pub images: MediaConstraints,
    /// Video constraints
    pub videos: MediaConstraints,
    /// Hashtag limits
    pub hashtags: HashtagLimits,
    /// Link preview requirements
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_graph: Option<OpenGraph>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_divides_width_by_height() {
        let dim = MediaDimension {
            name: "Standard",
            width: 1200,
            height: 675,
            aspect_ratio: "16:9",
        };
        assert!((dim.ratio() - 16.0 / 9.0).abs() < 1e-3);
    }

    #[test]
    fn test_media_dimension_serializes_camel_case() {
        let dim = MediaDimension {
            name: "Square",
            width: 1080,
            height: 1080,
            aspect_ratio: "1:1",
        };
        let json = serde_json::to_value(dim).unwrap();
        assert_eq!(json["aspectRatio"], "1:1");
        assert_eq!(json["width"], 1080);
    }
}
