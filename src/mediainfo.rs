//! Media inspection via the `mediainfo` binary.
//!
//! Runs `mediainfo --Output=JSON <file>` and maps the report onto the
//! engine's [`MediaAttributes`]. Every field is parsed leniently: missing
//! or malformed values degrade to `None` instead of failing the scan, so
//! a partial report still produces a usable release name.

use std::path::Path;
use std::process::Command;

use releasekit_engine::{AudioChannels, AudioTrack, MediaAttributes, SubtitleTrack, VideoTrack};
use serde::Deserialize;

use crate::error::{Error, Result};

const TOOL: &str = "mediainfo";

/// Inspect a media file and return its track attributes.
pub fn scan(path: &Path) -> Result<MediaAttributes> {
    if !path.exists() {
        return Err(Error::not_found(path.display().to_string()));
    }

    let tool = which::which(TOOL).map_err(|_| Error::tool_missing(TOOL))?;

    tracing::debug!("Running {} on {}", TOOL, path.display());
    let output = Command::new(tool)
        .arg("--Output=JSON")
        .arg(path)
        .output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::tool(format!(
            "{} exited with {:?}: {}",
            TOOL,
            output.status.code(),
            stderr.trim()
        )));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    parse_report(&stdout, &file_name)
}

/// Parse a mediainfo JSON report into [`MediaAttributes`].
///
/// Split out from [`scan`] so tests can feed canned reports without the
/// binary being installed.
pub fn parse_report(json: &str, file_name: &str) -> Result<MediaAttributes> {
    let report: Report = serde_json::from_str(json)?;

    let mut attributes = MediaAttributes::new(file_name);

    let tracks = report.media.map(|m| m.track).unwrap_or_default();
    for track in tracks {
        match track.kind.as_deref() {
            Some("Video") => attributes.video_tracks.push(VideoTrack {
                codec: track.format,
                width: track.width.and_then(|w| parse_dimension(&w)),
                height: track.height.and_then(|h| parse_dimension(&h)),
                hdr_format: track.hdr_format,
                color_primaries: track.colour_primaries,
                transfer_characteristics: track.transfer_characteristics,
            }),
            Some("Audio") => attributes.audio_tracks.push(AudioTrack {
                codec: track.format,
                channels: track.channels.map(parse_channels),
                language: track.language,
                title: track.title,
            }),
            Some("Text") => attributes.subtitle_tracks.push(SubtitleTrack {
                codec: track.format,
                language: track.language,
                title: track.title,
                forced: track.forced.as_deref() == Some("Yes"),
            }),
            _ => {}
        }
    }

    Ok(attributes)
}

/// mediainfo reports dimensions as strings, sometimes with spaces
/// (`"1 920"`); keep the digits only.
fn parse_dimension(value: &str) -> Option<u32> {
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// A channel field is a plain count for most codecs but a free-form
/// layout label for object-based audio.
fn parse_channels(value: String) -> AudioChannels {
    match value.trim().parse::<u32>() {
        Ok(count) => AudioChannels::Count(count),
        Err(_) => AudioChannels::Label(value),
    }
}

#[derive(Debug, Deserialize)]
struct Report {
    media: Option<MediaSection>,
}

#[derive(Debug, Deserialize)]
struct MediaSection {
    #[serde(default)]
    track: Vec<TrackSection>,
}

#[derive(Debug, Deserialize)]
struct TrackSection {
    #[serde(rename = "@type")]
    kind: Option<String>,
    #[serde(rename = "Format")]
    format: Option<String>,
    #[serde(rename = "Width")]
    width: Option<String>,
    #[serde(rename = "Height")]
    height: Option<String>,
    #[serde(rename = "HDR_Format")]
    hdr_format: Option<String>,
    #[serde(rename = "colour_primaries")]
    colour_primaries: Option<String>,
    #[serde(rename = "transfer_characteristics")]
    transfer_characteristics: Option<String>,
    #[serde(rename = "Channels")]
    channels: Option<String>,
    #[serde(rename = "Language")]
    language: Option<String>,
    #[serde(rename = "Title")]
    title: Option<String>,
    #[serde(rename = "Forced")]
    forced: Option<String>,
}
