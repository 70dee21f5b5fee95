//! Release-name generation request.

use super::{MediaAttributes, ParseError};

/// Whether the release is a movie or a TV series.
///
/// Controls the assembly order: series get an episode tag before the year,
/// movies get the year directly after the title.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ContentType {
    #[default]
    Movie,
    Tv,
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentType::Movie => write!(f, "movie"),
            ContentType::Tv => write!(f, "tv"),
        }
    }
}

impl std::str::FromStr for ContentType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "movie" | "film" => Ok(ContentType::Movie),
            "tv" | "series" | "show" => Ok(ContentType::Tv),
            _ => Err(ParseError(format!("invalid content type: {}", s))),
        }
    }
}

/// Fully resolved input for [`generate_release_name`].
///
/// Every `Option` field is a manual override: when set it wins over
/// auto-detection for the same slot, when `None` the engine detects the
/// value from `media` or from the file name.
///
/// [`generate_release_name`]: crate::generate_release_name
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReleaseNameRequest {
    /// Semantic title, sanitized by the assembler.
    pub title: String,
    /// Release year, carried verbatim when present.
    pub year: Option<String>,
    /// Track metadata of the underlying file.
    pub media: MediaAttributes,
    /// Manual source tag (`BluRay`, `WEB-DL`, ...).
    pub source: Option<String>,
    /// Manual release group; detected from the file name when absent.
    pub group: Option<String>,
    pub season: Option<u16>,
    pub episode: Option<u16>,
    pub is_complete_season: bool,
    pub is_complete_series: bool,
    pub is_final_episode: bool,
    /// Episode number without a season (`E##` tag form).
    pub episode_only: bool,
    pub content_type: ContentType,
    /// Edition tag (`EXTENDED`, `REMASTERED`, ...), carried verbatim.
    pub edition: Option<String>,
    /// Info tag (`REPACK`, `PROPER`, ...), upper-cased by the assembler.
    pub info: Option<String>,
    /// Manual language tag; replaces audio-language auto-detection.
    pub language: Option<String>,
}

impl ReleaseNameRequest {
    /// Request with a title and media attributes, everything else default.
    pub fn new(title: impl Into<String>, media: MediaAttributes) -> Self {
        Self {
            title: title.into(),
            media,
            ..Self::default()
        }
    }
}
