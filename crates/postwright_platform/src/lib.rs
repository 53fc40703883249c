//! Platform constraints and content validation for social media posts.
//!
//! This crate is the pure core of Postwright:
//! - A static registry of per-platform limits (text length, hashtags, image
//!   and video formats, sizes, durations and dimensions)
//! - Validators that check content against those limits and return a
//!   [`ValidationResult`] with errors, warnings and numeric stats
//!
//! Nothing here performs I/O or holds mutable state, so every function may be
//! called concurrently without coordination.
//!
//! # Example
//!
//! ```
//! use postwright_platform::{get_optimal_aspect_ratio, validate_post};
//!
//! let result = validate_post("instagram", "New blog post is live!", &["#rust", "#webdev"]);
//! assert!(result.is_valid());
//! assert_eq!(get_optimal_aspect_ratio("tiktok"), Some("9:16"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod media;
mod post;
mod registry;
mod spec;
mod validator;

pub use media::MediaDefaults;
pub use post::{
    GeneratedPost, GeneratedPostBuilder, PostMetadata, ValidationRequest, normalize_hashtag,
};
pub use registry::{
    Platform, get_optimal_aspect_ratio, get_optimal_image_dimensions,
    get_optimal_video_dimensions, get_platform_spec, get_supported_platforms,
    is_platform_supported,
};
pub use spec::{
    HashtagLimits, MediaConstraints, MediaDimension, OpenGraph, PlatformSpec, SoftDurationLimit,
    TextLimits,
};
pub use validator::{
    ASPECT_RATIO_TOLERANCE, MAX_HASHTAG_CHARS, MIN_WIDTH_FRACTION, VERY_SHORT_CONTENT_CHARS,
    VERY_SHORT_VIDEO_SECONDS, ValidationResult, ValidationStats, normalize_image_format,
    validate_hashtags, validate_image, validate_post, validate_text_content, validate_video,
};
