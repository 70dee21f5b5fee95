//! File-name and track-metadata classifiers: source, platform, HDR
//! format, and release group.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::dict;
use crate::model::MediaAttributes;

/// Dynamic-range tag of the primary video track.
///
/// Dolby Vision is checked first because DV releases usually carry an
/// HDR10 compatibility layer that would otherwise match the plainer tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HdrTag {
    DolbyVision,
    /// Dolby Vision with an HDR10 base layer.
    DolbyVisionHdr10,
    Hdr10Plus,
    Hdr,
    Hlg,
}

impl HdrTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            HdrTag::DolbyVision => "DV",
            HdrTag::DolbyVisionHdr10 => "HDR.DV",
            HdrTag::Hdr10Plus => "HDR10Plus",
            HdrTag::Hdr => "HDR",
            HdrTag::Hlg => "HLG",
        }
    }
}

impl std::fmt::Display for HdrTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `(?:^|[^a-z])key(?:[^a-z]|$)` over a lowercased haystack: the key must
/// not touch another letter on either side, so `dvd` never fires inside
/// `dvdscr` and `max` never fires inside `maximum`.
fn word_bounded(key: &str) -> Regex {
    let escaped = regex::escape(key);
    Regex::new(&format!(r"(?:^|[^a-z]){escaped}(?:[^a-z]|$)")).expect("valid regex")
}

static SOURCE_MATCHERS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    dict::SOURCES
        .iter()
        .map(|&(key, canonical)| (word_bounded(key), canonical))
        .collect()
});

/// Platform full names get word-boundary matching; the dotted short codes
/// are precise enough as plain substrings.
enum PlatformMatcher {
    Substring(&'static str),
    Bounded(Regex),
}

static PLATFORM_MATCHERS: LazyLock<Vec<(PlatformMatcher, &'static str)>> = LazyLock::new(|| {
    dict::PLATFORMS
        .iter()
        .map(|&(key, canonical)| {
            let matcher = if key.contains('.') {
                PlatformMatcher::Substring(key)
            } else {
                PlatformMatcher::Bounded(word_bounded(key))
            };
            (matcher, canonical)
        })
        .collect()
});

static RE_GROUP_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-([A-Za-z0-9]+)$").expect("valid regex"));

/// Source tag detected from the file name, `"Unknown"` when nothing
/// matches. First dictionary entry wins.
pub fn detect_source(filename: &str) -> String {
    let filename_lower = filename.to_lowercase();
    for (matcher, canonical) in SOURCE_MATCHERS.iter() {
        if matcher.is_match(&filename_lower) {
            return (*canonical).to_string();
        }
    }
    "Unknown".to_string()
}

/// Streaming platform tag detected from the file name.
pub fn detect_platform(filename: &str) -> Option<&'static str> {
    let filename_lower = filename.to_lowercase();
    for (matcher, canonical) in PLATFORM_MATCHERS.iter() {
        let hit = match matcher {
            PlatformMatcher::Substring(key) => filename_lower.contains(key),
            PlatformMatcher::Bounded(re) => re.is_match(&filename_lower),
        };
        if hit {
            return Some(*canonical);
        }
    }
    None
}

/// HDR tag of the primary video track, from the HDR format string first,
/// then the transfer characteristics, then the color primaries.
pub fn detect_hdr(media: &MediaAttributes) -> Option<HdrTag> {
    let video = media.primary_video()?;

    let hdr_format = video.hdr_format.as_deref().unwrap_or("").to_lowercase();
    let primaries = video.color_primaries.as_deref().unwrap_or("").to_lowercase();
    let transfer = video
        .transfer_characteristics
        .as_deref()
        .unwrap_or("")
        .to_lowercase();

    if hdr_format.contains("dolby vision") || hdr_format.contains("dovi") {
        if hdr_format.contains("hdr10") || transfer.contains("hdr") {
            return Some(HdrTag::DolbyVisionHdr10);
        }
        return Some(HdrTag::DolbyVision);
    }

    if hdr_format.contains("hdr10+") || hdr_format.contains("hdr10plus") {
        return Some(HdrTag::Hdr10Plus);
    }

    if hdr_format.contains("hdr10") || hdr_format.contains("hdr") {
        return Some(HdrTag::Hdr);
    }

    if transfer.contains("pq") || transfer.contains("smpte 2084") {
        return Some(HdrTag::Hdr);
    }
    if transfer.contains("hlg") {
        return Some(HdrTag::Hlg);
    }

    if primaries.contains("bt.2020") || primaries.contains("rec.2020") {
        return Some(HdrTag::Hdr);
    }

    None
}

/// Release group from the trailing `-GROUP` token of the file name, after
/// stripping the extension. Tokens on the denylist (codec and resolution
/// fragments that merely look like groups) are rejected.
pub fn detect_group(filename: &str) -> Option<String> {
    let name = if filename.contains('.') {
        Path::new(filename)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    } else {
        filename.to_string()
    };

    let caps = RE_GROUP_SUFFIX.captures(&name)?;
    let candidate = &caps[1];
    if dict::NON_GROUP_SUFFIXES.contains(candidate.to_lowercase().as_str()) {
        return None;
    }
    Some(candidate.to_string())
}
