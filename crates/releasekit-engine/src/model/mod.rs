//! Data model types for the release-name engine.
//!
//! Every type here is a plain value: constructed by the caller, passed in by
//! reference, and never mutated by the engine.

mod episode;
mod media;
mod request;

pub use episode::EpisodeInfo;
pub use media::{AudioChannels, AudioTrack, MediaAttributes, SubtitleTrack, VideoTrack};
pub use request::{ContentType, ReleaseNameRequest};

/// Error type for parsing enum values from strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError(pub String);

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "parse error: {}", self.0)
    }
}

impl std::error::Error for ParseError {}
