//! Video and audio codec classification.

use crate::dict;
use crate::model::MediaAttributes;

/// Immersive audio layout detected across the audio tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AudioSpec {
    Atmos,
    Auro3d,
}

impl AudioSpec {
    pub fn as_str(&self) -> &'static str {
        match self {
            AudioSpec::Atmos => "Atmos",
            AudioSpec::Auro3d => "Auro3D",
        }
    }
}

impl std::fmt::Display for AudioSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical video codec token of the primary video track.
///
/// First matching dictionary key wins. An unrecognized but present codec
/// string is carried through verbatim; an absent one yields `"Unknown"`.
pub fn detect_video_codec(media: &MediaAttributes) -> String {
    let Some(video) = media.primary_video() else {
        return "Unknown".to_string();
    };

    let codec = video.codec.as_deref().unwrap_or("");
    let codec_lower = codec.to_lowercase();

    for (key, canonical) in dict::VIDEO_CODECS {
        if codec_lower.contains(key) {
            return canonical.to_string();
        }
    }

    if codec.is_empty() {
        "Unknown".to_string()
    } else {
        codec.to_string()
    }
}

/// Canonical audio codec token of the first audio track, with the channel
/// suffix appended when the layout maps to one.
pub fn detect_audio_codec(media: &MediaAttributes) -> String {
    let Some(audio) = media.audio_tracks.first() else {
        return "Unknown".to_string();
    };

    let codec = audio.codec.as_deref().unwrap_or("");
    let codec_lower = codec.to_lowercase();

    let mut detected = codec.to_string();
    for (key, canonical) in dict::AUDIO_CODECS {
        if codec_lower.contains(key) {
            detected = canonical.to_string();
            break;
        }
    }

    if let Some(suffix) = audio.channels.as_ref().and_then(|c| c.suffix()) {
        detected.push_str(suffix);
    }

    detected
}

/// Immersive audio tag (`Atmos`, `Auro3D`), scanning every audio track.
pub fn detect_audio_spec(media: &MediaAttributes) -> Option<AudioSpec> {
    for track in &media.audio_tracks {
        let codec = track.codec.as_deref().unwrap_or("").to_lowercase();
        let title = track.title.as_deref().unwrap_or("").to_lowercase();

        if codec.contains("atmos") || title.contains("atmos") {
            return Some(AudioSpec::Atmos);
        }
        if codec.contains("auro") || title.contains("auro3d") {
            return Some(AudioSpec::Auro3d);
        }
    }
    None
}
