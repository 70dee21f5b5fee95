//! Container and track metadata as reported by media inspection.

/// Structured metadata for one media file.
///
/// Produced by an external collaborator (mediainfo or equivalent) and
/// consumed read-only by the classifiers. The first video track is
/// authoritative for resolution, codec, and HDR detection.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaAttributes {
    /// Original file name, including extension.
    #[cfg_attr(feature = "serde", serde(default))]
    pub file_name: String,
    /// Video tracks in container order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub video_tracks: Vec<VideoTrack>,
    /// Audio tracks in container order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub audio_tracks: Vec<AudioTrack>,
    /// Subtitle tracks, carried for callers; the engine does not read them.
    #[cfg_attr(feature = "serde", serde(default))]
    pub subtitle_tracks: Vec<SubtitleTrack>,
}

impl MediaAttributes {
    /// Create empty attributes for the given file name.
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            ..Self::default()
        }
    }

    /// First video track, if any.
    pub fn primary_video(&self) -> Option<&VideoTrack> {
        self.video_tracks.first()
    }
}

/// One video track. Absent fields degrade detection to `"Unknown"`/`None`.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VideoTrack {
    pub codec: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub hdr_format: Option<String>,
    pub color_primaries: Option<String>,
    pub transfer_characteristics: Option<String>,
}

/// One audio track. The free-text `title` is the primary dub-type signal.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AudioTrack {
    pub codec: Option<String>,
    pub channels: Option<AudioChannels>,
    /// ISO-ish language code, matched case-insensitively.
    pub language: Option<String>,
    pub title: Option<String>,
}

/// One subtitle track. Unused by the engine itself.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SubtitleTrack {
    pub codec: Option<String>,
    pub language: Option<String>,
    pub title: Option<String>,
    pub forced: bool,
}

/// Channel layout of an audio track.
///
/// Media inspectors report channels either as a count (`6`) or as a
/// free-form label (`"5.1"`, `"Object Based / 8 channels"`), so both forms
/// are accepted.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum AudioChannels {
    Count(u32),
    Label(String),
}

impl AudioChannels {
    /// Release-name channel suffix (`.7.1`, `.5.1`, `.2.0`), if the layout
    /// maps to one. Label matching runs before count matching so that a
    /// label such as `"7.1"` is never misread through its digit count.
    pub fn suffix(&self) -> Option<&'static str> {
        match self {
            AudioChannels::Label(label) => {
                if label.contains("7.1") {
                    Some(".7.1")
                } else if label.contains("5.1") {
                    Some(".5.1")
                } else if label.contains("2.0") {
                    Some(".2.0")
                } else {
                    None
                }
            }
            AudioChannels::Count(8) => Some(".7.1"),
            AudioChannels::Count(6) => Some(".5.1"),
            AudioChannels::Count(2) => Some(".2.0"),
            AudioChannels::Count(_) => None,
        }
    }
}

impl From<u32> for AudioChannels {
    fn from(count: u32) -> Self {
        AudioChannels::Count(count)
    }
}

impl From<&str> for AudioChannels {
    fn from(label: &str) -> Self {
        AudioChannels::Label(label.to_string())
    }
}
