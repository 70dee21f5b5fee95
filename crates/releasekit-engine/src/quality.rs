//! Resolution classification from video track dimensions.

use crate::model::MediaAttributes;

/// Height floors used when the width is inconclusive. Letterboxed encodes
/// keep their full width but lose height, so 816px tall at 1920 wide is
/// still a 1080p release.
const HEIGHT_THRESHOLDS: &[(u32, &str)] = &[(2160, "2160p"), (800, "1080p"), (700, "720p")];

/// Classify the resolution of the primary video track.
///
/// Width is consulted first because letterboxing shrinks the height but
/// never the width. Falls back to the height thresholds, then to a literal
/// `{height}p`, then to `"Unknown"`.
pub fn detect_resolution(media: &MediaAttributes) -> String {
    let Some(video) = media.primary_video() else {
        return "Unknown".to_string();
    };

    let width = video.width.unwrap_or(0);
    let height = video.height.unwrap_or(0);

    if width >= 3840 {
        return "2160p".to_string();
    }
    if width >= 1920 {
        return "1080p".to_string();
    }
    if width >= 1280 {
        return "720p".to_string();
    }

    for &(min_height, label) in HEIGHT_THRESHOLDS {
        if height >= min_height {
            return label.to_string();
        }
    }

    if height > 0 {
        format!("{height}p")
    } else {
        "Unknown".to_string()
    }
}

/// True when the release is standard definition and the resolution token
/// must be omitted from the release name. A file without a video track
/// counts as SD.
pub fn is_sd_resolution(media: &MediaAttributes) -> bool {
    match media.primary_video() {
        Some(video) => video.height.unwrap_or(0) < 720,
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::VideoTrack;

    fn media_with(width: u32, height: u32) -> MediaAttributes {
        MediaAttributes {
            video_tracks: vec![VideoTrack {
                width: Some(width),
                height: Some(height),
                ..VideoTrack::default()
            }],
            ..MediaAttributes::default()
        }
    }

    #[test]
    fn width_decides_first() {
        assert_eq!(detect_resolution(&media_with(3840, 2160)), "2160p");
        assert_eq!(detect_resolution(&media_with(1920, 1080)), "1080p");
        assert_eq!(detect_resolution(&media_with(1280, 720)), "720p");
    }

    #[test]
    fn letterboxed_1080p_classifies_by_width() {
        assert_eq!(detect_resolution(&media_with(1920, 816)), "1080p");
    }

    #[test]
    fn height_threshold_fallback() {
        // Narrow but tall enough for the 1080p floor.
        assert_eq!(detect_resolution(&media_with(1024, 1080)), "1080p");
        assert_eq!(detect_resolution(&media_with(960, 720)), "720p");
    }

    #[test]
    fn sd_heights_fall_through_to_literal() {
        assert_eq!(detect_resolution(&media_with(720, 576)), "576p");
        assert_eq!(detect_resolution(&media_with(640, 480)), "480p");
    }

    #[test]
    fn no_video_track_is_unknown_and_sd() {
        let media = MediaAttributes::default();
        assert_eq!(detect_resolution(&media), "Unknown");
        assert!(is_sd_resolution(&media));
    }

    #[test]
    fn sd_boundary_is_720() {
        assert!(is_sd_resolution(&media_with(960, 719)));
        assert!(!is_sd_resolution(&media_with(960, 720)));
    }
}
