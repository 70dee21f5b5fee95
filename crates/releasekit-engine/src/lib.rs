//! Deterministic release-name engine.
//!
//! Turns a media title plus structured track metadata into a scene-style
//! release name: `Title.Year.Language.Resolution.Source.Codec-GROUP`.
//! Everything is pure and synchronous; the caller supplies the metadata
//! (typically from a mediainfo scan) and gets a string back. No I/O, no
//! global state, no panics on any input.
//!
//! The classifiers are driven by ordered `(key, canonical)` dictionaries
//! in [`dict`]: evaluation is top-to-bottom and the first match wins, so
//! specificity lives in the ordering, not in the matching logic.
//!
//! ```
//! use releasekit_engine::{
//!     generate_release_name, AudioTrack, MediaAttributes, ReleaseNameRequest, VideoTrack,
//! };
//!
//! let media = MediaAttributes {
//!     video_tracks: vec![VideoTrack {
//!         codec: Some("HEVC".into()),
//!         width: Some(1920),
//!         height: Some(1080),
//!         ..VideoTrack::default()
//!     }],
//!     audio_tracks: vec![AudioTrack {
//!         language: Some("fr".into()),
//!         ..AudioTrack::default()
//!     }],
//!     ..MediaAttributes::new("gladiator.ii.2024.bluray-PRODUX.mkv")
//! };
//!
//! let mut request = ReleaseNameRequest::new("Gladiator II", media);
//! request.year = Some("2024".into());
//!
//! assert_eq!(
//!     generate_release_name(&request),
//!     "Gladiator.II.2024.TrueFrench.1080p.BluRay.HEVC-PRODUX"
//! );
//! ```

pub mod dict;
pub mod model;

mod assemble;
mod codec;
mod episode;
mod language;
mod metadata;
mod quality;
mod sanitize;
mod title;

pub use assemble::generate_release_name;
pub use codec::{detect_audio_codec, detect_audio_spec, detect_video_codec, AudioSpec};
pub use episode::{detect_episode_info, format_episode_tag};
pub use language::{detect_audio_languages, detect_language_info, FrenchDub};
pub use metadata::{detect_group, detect_hdr, detect_platform, detect_source, HdrTag};
pub use model::{
    AudioChannels, AudioTrack, ContentType, EpisodeInfo, MediaAttributes, ParseError,
    ReleaseNameRequest, SubtitleTrack, VideoTrack,
};
pub use quality::{detect_resolution, is_sd_resolution};
pub use sanitize::sanitize_title;
pub use title::extract_movie_title_from_filename;
