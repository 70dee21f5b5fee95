//! Release name assembly.

use crate::codec::detect_video_codec;
use crate::episode::format_episode_tag;
use crate::language::detect_audio_languages;
use crate::metadata::{detect_group, detect_hdr, detect_platform, detect_source};
use crate::model::{ContentType, ReleaseNameRequest};
use crate::quality::{detect_resolution, is_sd_resolution};
use crate::sanitize::sanitize_title;

const DEFAULT_GROUP: &str = "NOTAG";

/// Assemble the final release name from a request.
///
/// Segment order is fixed: title, episode tag (series) and/or year, info,
/// edition, language, HDR, resolution, platform, source, video codec, and
/// the `-GROUP` suffix. Optional segments that detect to nothing are
/// skipped entirely, so the output never contains two adjacent dots, and
/// it always ends in `-GROUP` with `NOTAG` standing in when no group is
/// supplied or detected.
///
/// # Examples
///
/// ```
/// use releasekit_engine::{generate_release_name, MediaAttributes, ReleaseNameRequest};
///
/// let mut request = ReleaseNameRequest::new("Plain Movie", MediaAttributes::new("plain.mkv"));
/// request.year = Some("2020".to_string());
/// assert_eq!(generate_release_name(&request), "Plain.Movie.2020-NOTAG");
/// ```
pub fn generate_release_name(request: &ReleaseNameRequest) -> String {
    let mut parts: Vec<String> = Vec::new();
    let filename = request.media.file_name.as_str();

    let group = match non_empty(request.group.as_deref()) {
        Some(group) => group.to_string(),
        None => detect_group(filename).unwrap_or_else(|| DEFAULT_GROUP.to_string()),
    };
    let is_sd = is_sd_resolution(&request.media);

    let clean_title = sanitize_title(&request.title);
    if !clean_title.is_empty() {
        parts.push(clean_title);
    }

    // Series get an episode tag before the year; movies only the year.
    if request.content_type == ContentType::Tv {
        let episode_tag = format_episode_tag(
            request.season,
            request.episode,
            request.is_complete_season,
            request.is_complete_series,
            request.is_final_episode,
            request.episode_only,
        );
        if !episode_tag.is_empty() {
            parts.push(episode_tag);
        }
        if let Some(year) = non_empty(request.year.as_deref()) {
            parts.push(year.to_string());
        }
    } else if let Some(year) = non_empty(request.year.as_deref()) {
        parts.push(year.to_string());
    }

    if let Some(info) = non_empty(request.info.as_deref()) {
        parts.push(info.to_uppercase());
    }

    if let Some(edition) = non_empty(request.edition.as_deref()) {
        parts.push(edition.to_string());
    }

    // A manual language replaces auto-detection rather than refining it.
    match non_empty(request.language.as_deref()) {
        Some(language) => parts.push(language.to_string()),
        None => {
            let languages = detect_audio_languages(&request.media);
            if !languages.is_empty() {
                parts.push(languages);
            }
        }
    }

    if let Some(hdr) = detect_hdr(&request.media) {
        parts.push(hdr.to_string());
    }

    // SD releases omit the resolution token.
    if !is_sd {
        let resolution = detect_resolution(&request.media);
        if resolution != "Unknown" {
            parts.push(resolution);
        }
    }

    if let Some(platform) = detect_platform(filename) {
        parts.push(platform.to_string());
    }

    match non_empty(request.source.as_deref()) {
        Some(source) => parts.push(source.to_string()),
        None => {
            let detected = detect_source(filename);
            if detected != "Unknown" {
                parts.push(detected);
            }
        }
    }

    let video_codec = detect_video_codec(&request.media);
    if video_codec != "Unknown" {
        parts.push(video_codec);
    }

    format!("{}-{}", parts.join("."), group)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
