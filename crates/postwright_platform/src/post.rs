//! Models for posts produced by the text generator and for validation requests.

use crate::registry::get_platform_spec;
use crate::validator::{ValidationResult, validate_post};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Generator's own estimate of how a post will perform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase", default)]
pub struct PostMetadata {
    /// Engagement estimate, e.g. "high"
    estimated_engagement: String,
    /// Content category, e.g. "educational"
    content_type: String,
}

impl PostMetadata {
    /// Creates metadata from its two fields.
    pub fn new(estimated_engagement: impl Into<String>, content_type: impl Into<String>) -> Self {
        Self {
            estimated_engagement: estimated_engagement.into(),
            content_type: content_type.into(),
        }
    }
}

/// A post as returned by the text generation model.
///
/// # Examples
///
/// ```
/// use postwright_platform::GeneratedPost;
///
/// let json = r##"{"content": "Ship it", "hashtags": ["#a", "#b", "#c", "#d"]}"##;
/// let mut post: GeneratedPost = serde_json::from_str(json).unwrap();
/// assert_eq!(post.enforce_hashtag_limit("twitter"), 1);
/// assert_eq!(post.hashtags().len(), 3);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct GeneratedPost {
    /// Post body
    content: String,
    /// Hashtags, with or without a leading `#`
    #[serde(default)]
    #[builder(default)]
    hashtags: Vec<String>,
    /// Prompt for an accompanying image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    image_prompt: Option<String>,
    /// Prompt for an accompanying video
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    video_prompt: Option<String>,
    /// Generator metadata
    #[serde(default)]
    #[builder(default)]
    metadata: PostMetadata,
}

impl GeneratedPost {
    /// Creates a builder for GeneratedPost.
    pub fn builder() -> GeneratedPostBuilder {
        GeneratedPostBuilder::default()
    }

    /// Runs [`validate_post`] on this post's content and hashtags.
    pub fn validate(&self, platform: &str) -> ValidationResult {
        validate_post(platform, &self.content, &self.hashtags)
    }

    /// Drops hashtags beyond the platform's hard maximum.
    ///
    /// Returns how many were dropped. Unknown platforms leave the post untouched.
    #[instrument(skip(self), fields(count = self.hashtags.len()))]
    pub fn enforce_hashtag_limit(&mut self, platform: &str) -> usize {
        let Some(spec) = get_platform_spec(platform) else {
            return 0;
        };
        let max = spec.hashtags.max;
        if self.hashtags.len() <= max {
            return 0;
        }
        let dropped = self.hashtags.len() - max;
        self.hashtags.truncate(max);
        debug!(dropped, max, "Truncated hashtags");
        dropped
    }
}

/// Payload accepted by the validation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ValidationRequest {
    /// Platform key, matched case-insensitively
    platform: String,
    /// Post body
    content: String,
    /// Hashtags; missing means none
    #[serde(default)]
    hashtags: Vec<String>,
}

impl ValidationRequest {
    /// Creates a request.
    pub fn new(
        platform: impl Into<String>,
        content: impl Into<String>,
        hashtags: Vec<String>,
    ) -> Self {
        Self {
            platform: platform.into(),
            content: content.into(),
            hashtags,
        }
    }

    /// Validates the request's post. Unknown platforms produce an invalid result.
    pub fn validate(&self) -> ValidationResult {
        validate_post(&self.platform, &self.content, &self.hashtags)
    }
}

/// Trims a tag and gives it exactly one leading `#`.
///
/// ```
/// use postwright_platform::normalize_hashtag;
///
/// assert_eq!(normalize_hashtag(" rust "), "#rust");
/// assert_eq!(normalize_hashtag("##rust"), "#rust");
/// ```
pub fn normalize_hashtag(tag: &str) -> String {
    format!("#{}", tag.trim().trim_start_matches('#'))
}
