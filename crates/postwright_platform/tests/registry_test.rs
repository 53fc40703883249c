//! Tests for the platform registry lookups.

use postwright_platform::*;

#[test]
fn test_lookup_is_case_insensitive() {
    let lower = get_platform_spec("instagram").expect("instagram is registered");
    let upper = get_platform_spec("INSTAGRAM").expect("lookup ignores case");
    let mixed = get_platform_spec("InStAgRaM").expect("lookup ignores case");
    assert_eq!(lower, upper);
    assert_eq!(lower, mixed);
    assert_eq!(lower.name, "Instagram");
}

#[test]
fn test_unknown_platform_is_absent() {
    assert!(get_platform_spec("myspace").is_none());
    assert!(get_platform_spec("").is_none());
    assert!(get_platform_spec(" twitter").is_none());
    assert!(!is_platform_supported("myspace"));
}

#[test]
fn test_supported_platforms_in_declaration_order() {
    assert_eq!(
        get_supported_platforms(),
        vec!["instagram", "twitter", "facebook", "tiktok", "linkedin"]
    );
    for key in get_supported_platforms() {
        assert!(is_platform_supported(key));
        assert!(is_platform_supported(&key.to_uppercase()));
    }
}

#[test]
fn test_optimal_aspect_ratio() {
    assert_eq!(get_optimal_aspect_ratio("tiktok"), Some("9:16"));
    assert_eq!(get_optimal_aspect_ratio("Twitter"), Some("16:9"));
    assert_eq!(get_optimal_aspect_ratio("instagram"), Some("1:1"));
    assert_eq!(get_optimal_aspect_ratio("unknown"), None);
}

#[test]
fn test_optimal_dimensions_are_first_entries() {
    for key in get_supported_platforms() {
        let spec = get_platform_spec(key).unwrap();
        assert_eq!(get_optimal_image_dimensions(key), spec.images.dimensions.first());
        assert_eq!(get_optimal_video_dimensions(key), spec.videos.dimensions.first());
    }

    let standard = get_optimal_image_dimensions("twitter").unwrap();
    assert_eq!(standard.name, "Standard");
    assert_eq!((standard.width, standard.height), (1200, 675));

    assert!(get_optimal_image_dimensions("unknown").is_none());
    assert!(get_optimal_video_dimensions("unknown").is_none());
}

#[test]
fn test_platform_enum_round_trips_keys() {
    for platform in Platform::ALL {
        let parsed: Platform = platform.key().parse().unwrap();
        assert_eq!(parsed, platform);
        assert_eq!(get_platform_spec(platform.key()), Some(platform.spec()));
    }
}

#[test]
fn test_open_graph_only_where_declared() {
    let facebook = Platform::Facebook.spec();
    let og = facebook.open_graph.expect("facebook declares open graph");
    assert!(og.required);
    assert_eq!(og.image_size, "1200x630");
    assert!(Platform::Twitter.spec().open_graph.is_none());
}

#[test]
fn test_spec_serializes_for_clients() {
    let json = serde_json::to_value(Platform::Twitter.spec()).unwrap();
    assert_eq!(json["text"]["maxChars"], 280);
    assert_eq!(json["hashtags"]["max"], 3);
    assert_eq!(json["images"]["maxSizeMB"], 5.0);
    assert_eq!(json["videos"]["maxDurationSeconds"], 140);
    assert!(json.get("openGraph").is_none());
}
