//! Default media settings for image and video generation requests.

use crate::registry::Platform;
use crate::spec::MediaDimension;
use serde::Serialize;

/// Optimal image and video dimensions for one platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct MediaDefaults {
    /// Platform the defaults belong to
    platform: Platform,
    /// Primary image dimension
    image: MediaDimension,
    /// Primary video dimension
    video: MediaDimension,
}

impl MediaDefaults {
    /// Defaults for `platform`, or `None` if it is unknown or declares no dimensions.
    ///
    /// ```
    /// use postwright_platform::MediaDefaults;
    ///
    /// let defaults = MediaDefaults::for_platform("TIKTOK").unwrap();
    /// assert_eq!(defaults.image().aspect_ratio, "9:16");
    /// assert!(MediaDefaults::for_platform("unknown").is_none());
    /// ```
    pub fn for_platform(platform: &str) -> Option<Self> {
        let platform = platform.parse::<Platform>().ok()?;
        let spec = platform.spec();
        Some(Self {
            platform,
            image: *spec.images.optimal()?,
            video: *spec.videos.optimal()?,
        })
    }

    /// Aspect ratio label to request from an image model.
    pub fn image_aspect_ratio(&self) -> &'static str {
        self.image.aspect_ratio
    }

    /// Aspect ratio label to request from a video model.
    pub fn video_aspect_ratio(&self) -> &'static str {
        self.video.aspect_ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instagram_defaults() {
        let defaults = MediaDefaults::for_platform("instagram").unwrap();
        assert_eq!(*defaults.platform(), Platform::Instagram);
        assert_eq!(defaults.image_aspect_ratio(), "1:1");
        assert_eq!(defaults.video_aspect_ratio(), "9:16");
        assert_eq!(defaults.video().width, 1080);
    }

    #[test]
    fn test_defaults_serialize_platform_key() {
        let defaults = MediaDefaults::for_platform("LinkedIn").unwrap();
        assert_eq!(defaults.platform().to_string(), "linkedin");
        let json = serde_json::to_value(defaults).unwrap();
        assert_eq!(json["platform"], "linkedin");
        assert_eq!(json["image"]["aspectRatio"], "1.91:1");
    }
}
