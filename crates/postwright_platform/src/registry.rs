//! Static table of platform constraints and lookups over it.
//!
//! Every limit used elsewhere in the workspace comes from this table.

use crate::spec::{
    HashtagLimits, MediaConstraints, MediaDimension, OpenGraph, PlatformSpec, SoftDurationLimit,
    TextLimits,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Supported platforms, in registry declaration order.
///
/// # Examples
///
/// ```
/// use postwright_platform::Platform;
///
/// let platform: Platform = "TikTok".parse().unwrap();
/// assert_eq!(platform, Platform::Tiktok);
/// assert_eq!(platform.to_string(), "tiktok");
/// assert!("myspace".parse::<Platform>().is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Platform {
    /// Instagram
    Instagram,
    /// Twitter / X
    Twitter,
    /// Facebook
    Facebook,
    /// TikTok
    Tiktok,
    /// LinkedIn
    Linkedin,
}

impl Platform {
    /// All platforms in declaration order.
    pub const ALL: [Platform; 5] = [
        Platform::Instagram,
        Platform::Twitter,
        Platform::Facebook,
        Platform::Tiktok,
        Platform::Linkedin,
    ];

    /// Lowercase registry key.
    pub fn key(self) -> &'static str {
        self.into()
    }

    /// The constraint record for this platform.
    pub fn spec(self) -> &'static PlatformSpec {
        &PLATFORM_SPECS[self as usize]
    }
}

#[rustfmt::skip]
const INSTAGRAM_IMAGE_DIMENSIONS: &[MediaDimension] = &[
    MediaDimension { name: "Square", width: 1080, height: 1080, aspect_ratio: "1:1" },
    MediaDimension { name: "Portrait", width: 1080, height: 1350, aspect_ratio: "4:5" },
    MediaDimension { name: "Landscape", width: 1080, height: 566, aspect_ratio: "1.91:1" },
];

#[rustfmt::skip]
const INSTAGRAM_VIDEO_DIMENSIONS: &[MediaDimension] = &[
    MediaDimension { name: "Reels", width: 1080, height: 1920, aspect_ratio: "9:16" },
    MediaDimension { name: "Square", width: 1080, height: 1080, aspect_ratio: "1:1" },
    MediaDimension { name: "Portrait", width: 1080, height: 1350, aspect_ratio: "4:5" },
];

#[rustfmt::skip]
const TWITTER_IMAGE_DIMENSIONS: &[MediaDimension] = &[
    MediaDimension { name: "Standard", width: 1200, height: 675, aspect_ratio: "16:9" },
    MediaDimension { name: "Square", width: 1200, height: 1200, aspect_ratio: "1:1" },
];

#[rustfmt::skip]
const TWITTER_VIDEO_DIMENSIONS: &[MediaDimension] = &[
    MediaDimension { name: "Landscape", width: 1280, height: 720, aspect_ratio: "16:9" },
    MediaDimension { name: "Portrait", width: 720, height: 1280, aspect_ratio: "9:16" },
    MediaDimension { name: "Square", width: 720, height: 720, aspect_ratio: "1:1" },
];

#[rustfmt::skip]
const FACEBOOK_IMAGE_DIMENSIONS: &[MediaDimension] = &[
    MediaDimension { name: "Link Share", width: 1200, height: 630, aspect_ratio: "1.91:1" },
    MediaDimension { name: "Square", width: 1080, height: 1080, aspect_ratio: "1:1" },
    MediaDimension { name: "Portrait", width: 1080, height: 1350, aspect_ratio: "4:5" },
];

#[rustfmt::skip]
const FACEBOOK_VIDEO_DIMENSIONS: &[MediaDimension] = &[
    MediaDimension { name: "Landscape", width: 1280, height: 720, aspect_ratio: "16:9" },
    MediaDimension { name: "Square", width: 1080, height: 1080, aspect_ratio: "1:1" },
    MediaDimension { name: "Stories", width: 1080, height: 1920, aspect_ratio: "9:16" },
];

#[rustfmt::skip]
const TIKTOK_IMAGE_DIMENSIONS: &[MediaDimension] = &[
    MediaDimension { name: "Vertical", width: 1080, height: 1920, aspect_ratio: "9:16" },
    MediaDimension { name: "Square", width: 1080, height: 1080, aspect_ratio: "1:1" },
];

#[rustfmt::skip]
const TIKTOK_VIDEO_DIMENSIONS: &[MediaDimension] = &[
    MediaDimension { name: "Vertical", width: 1080, height: 1920, aspect_ratio: "9:16" },
];

#[rustfmt::skip]
const LINKEDIN_IMAGE_DIMENSIONS: &[MediaDimension] = &[
    MediaDimension { name: "Landscape", width: 1200, height: 627, aspect_ratio: "1.91:1" },
    MediaDimension { name: "Square", width: 1080, height: 1080, aspect_ratio: "1:1" },
    MediaDimension { name: "Portrait", width: 1080, height: 1350, aspect_ratio: "4:5" },
];

#[rustfmt::skip]
const LINKEDIN_VIDEO_DIMENSIONS: &[MediaDimension] = &[
    MediaDimension { name: "Landscape", width: 1920, height: 1080, aspect_ratio: "16:9" },
    MediaDimension { name: "Square", width: 1080, height: 1080, aspect_ratio: "1:1" },
    MediaDimension { name: "Vertical", width: 1080, height: 1920, aspect_ratio: "9:16" },
];

// Indexed by `Platform as usize`; keep in the same order as the enum.
#[rustfmt::skip]
static PLATFORM_SPECS: [PlatformSpec; 5] = [
    PlatformSpec {
        key: "instagram",
        name: "Instagram",
        text: TextLimits { max_chars: 2200, sweet_spot: Some(125) },
        images: MediaConstraints {
            formats: &["JPG", "PNG"],
            max_size_mb: 8.0,
            dimensions: INSTAGRAM_IMAGE_DIMENSIONS,
            max_duration_seconds: None,
            soft_duration: None,
        },
        videos: MediaConstraints {
            formats: &["MP4", "MOV"],
            max_size_mb: 650.0,
            dimensions: INSTAGRAM_VIDEO_DIMENSIONS,
            max_duration_seconds: Some(900),
            soft_duration: Some(SoftDurationLimit {
                seconds: 90,
                advice: "Reels recorded in the Instagram app are limited to 90 seconds",
            }),
        },
        hashtags: HashtagLimits { max: 5, recommended: 3, encouraged: true },
        open_graph: None,
    },
    PlatformSpec {
        key: "twitter",
        name: "Twitter/X",
        text: TextLimits { max_chars: 280, sweet_spot: Some(100) },
        images: MediaConstraints {
            formats: &["JPG", "PNG", "GIF", "WEBP"],
            max_size_mb: 5.0,
            dimensions: TWITTER_IMAGE_DIMENSIONS,
            max_duration_seconds: None,
            soft_duration: None,
        },
        videos: MediaConstraints {
            formats: &["MP4", "MOV"],
            max_size_mb: 512.0,
            dimensions: TWITTER_VIDEO_DIMENSIONS,
            max_duration_seconds: Some(140),
            soft_duration: None,
        },
        hashtags: HashtagLimits { max: 3, recommended: 2, encouraged: true },
        open_graph: None,
    },
    PlatformSpec {
        key: "facebook",
        name: "Facebook",
        text: TextLimits { max_chars: 63206, sweet_spot: Some(80) },
        images: MediaConstraints {
            formats: &["JPG", "PNG", "GIF", "BMP", "TIFF"],
            max_size_mb: 10.0,
            dimensions: FACEBOOK_IMAGE_DIMENSIONS,
            max_duration_seconds: None,
            soft_duration: None,
        },
        videos: MediaConstraints {
            formats: &["MP4", "MOV"],
            max_size_mb: 4096.0,
            dimensions: FACEBOOK_VIDEO_DIMENSIONS,
            max_duration_seconds: Some(14400),
            soft_duration: None,
        },
        hashtags: HashtagLimits { max: 10, recommended: 3, encouraged: false },
        open_graph: Some(OpenGraph { required: true, image_size: "1200x630" }),
    },
    PlatformSpec {
        key: "tiktok",
        name: "TikTok",
        text: TextLimits { max_chars: 2200, sweet_spot: Some(150) },
        images: MediaConstraints {
            formats: &["JPG", "PNG", "WEBP"],
            max_size_mb: 20.0,
            dimensions: TIKTOK_IMAGE_DIMENSIONS,
            max_duration_seconds: None,
            soft_duration: None,
        },
        videos: MediaConstraints {
            formats: &["MP4", "MOV", "WEBM"],
            max_size_mb: 287.6,
            dimensions: TIKTOK_VIDEO_DIMENSIONS,
            max_duration_seconds: Some(600),
            soft_duration: Some(SoftDurationLimit {
                seconds: 60,
                advice: "shorter TikTok videos (under 60 seconds) tend to get more engagement",
            }),
        },
        hashtags: HashtagLimits { max: 5, recommended: 4, encouraged: true },
        open_graph: None,
    },
    PlatformSpec {
        key: "linkedin",
        name: "LinkedIn",
        text: TextLimits { max_chars: 3000, sweet_spot: Some(210) },
        images: MediaConstraints {
            formats: &["JPG", "PNG", "GIF"],
            max_size_mb: 8.0,
            dimensions: LINKEDIN_IMAGE_DIMENSIONS,
            max_duration_seconds: None,
            soft_duration: None,
        },
        videos: MediaConstraints {
            formats: &["MP4"],
            max_size_mb: 5120.0,
            dimensions: LINKEDIN_VIDEO_DIMENSIONS,
            max_duration_seconds: Some(600),
            soft_duration: None,
        },
        hashtags: HashtagLimits { max: 5, recommended: 3, encouraged: false },
        open_graph: Some(OpenGraph { required: true, image_size: "1200x627" }),
    },
];

/// Look up a platform's spec, ignoring case. Unknown platforms return `None`.
///
/// # Examples
///
/// ```
/// use postwright_platform::get_platform_spec;
///
/// assert_eq!(get_platform_spec("INSTAGRAM"), get_platform_spec("instagram"));
/// assert!(get_platform_spec("myspace").is_none());
/// ```
#[instrument(level = "trace")]
pub fn get_platform_spec(platform: &str) -> Option<&'static PlatformSpec> {
    let spec = platform.parse::<Platform>().ok().map(Platform::spec);
    if spec.is_none() {
        debug!("Platform not in registry");
    }
    spec
}

/// Platform keys in declaration order.
#[instrument(level = "trace")]
pub fn get_supported_platforms() -> Vec<&'static str> {
    PLATFORM_SPECS.iter().map(|spec| spec.key).collect()
}

/// Case-insensitive membership test.
#[instrument(level = "trace")]
pub fn is_platform_supported(platform: &str) -> bool {
    get_platform_spec(platform).is_some()
}

/// Aspect ratio label of the platform's primary image dimension.
#[instrument(level = "trace")]
pub fn get_optimal_aspect_ratio(platform: &str) -> Option<&'static str> {
    get_optimal_image_dimensions(platform).map(|dim| dim.aspect_ratio)
}

/// Primary (first declared) image dimension.
#[instrument(level = "trace")]
pub fn get_optimal_image_dimensions(platform: &str) -> Option<&'static MediaDimension> {
    get_platform_spec(platform).and_then(|spec| spec.images.optimal())
}

/// Primary (first declared) video dimension.
#[instrument(level = "trace")]
pub fn get_optimal_video_dimensions(platform: &str) -> Option<&'static MediaDimension> {
    get_platform_spec(platform).and_then(|spec| spec.videos.optimal())
}
