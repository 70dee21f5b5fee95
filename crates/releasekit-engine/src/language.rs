//! Audio language classification.
//!
//! Works on boolean signals accumulated across all audio tracks rather
//! than a per-track vote: a release is MULTi as soon as two of
//! {french, english, other} are present, regardless of track order.

use crate::dict;
use crate::model::MediaAttributes;

/// French dub subtype, carried in the language tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrenchDub {
    /// Metropolitan French dub (VFF).
    TrueFrench,
    /// Quebec French dub.
    Vfq,
    /// International French dub.
    Vfi,
}

impl FrenchDub {
    pub fn as_str(&self) -> &'static str {
        match self {
            FrenchDub::TrueFrench => "TrueFrench",
            FrenchDub::Vfq => "VFQ",
            FrenchDub::Vfi => "VFi",
        }
    }
}

impl std::fmt::Display for FrenchDub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Language tag for the release name, empty when nothing is detected.
///
/// The dub subtype is resolved from the free-text track titles; a track
/// that is French only by language code defaults to [`FrenchDub::TrueFrench`]
/// unless an earlier track already pinned a subtype.
pub fn detect_audio_languages(media: &MediaAttributes) -> String {
    if media.audio_tracks.is_empty() {
        return String::new();
    }

    let mut has_french = false;
    let mut has_english = false;
    let mut has_other = false;
    let mut french_type: Option<FrenchDub> = None;

    for track in &media.audio_tracks {
        let lang = track.language.as_deref().unwrap_or("").to_lowercase();
        let title = track.title.as_deref().unwrap_or("").to_lowercase();

        if title.contains("vfq")
            || title.contains("quebec")
            || title.contains("québec")
            || title.contains("canadien")
        {
            has_french = true;
            french_type = Some(FrenchDub::Vfq);
        } else if title.contains("vff")
            || title.contains("truefrench")
            || title.contains("true french")
            || title.contains("france")
        {
            has_french = true;
            french_type = Some(FrenchDub::TrueFrench);
        } else if title.contains("vfi") || title.contains("international") {
            has_french = true;
            french_type = Some(FrenchDub::Vfi);
        } else if title.contains("vf") || dict::FRENCH_LANG_CODES.contains(lang.as_str()) {
            has_french = true;
            if french_type.is_none() {
                french_type = Some(FrenchDub::TrueFrench);
            }
        }

        if title.contains("vo")
            || title.contains("english")
            || dict::ENGLISH_LANG_CODES.contains(lang.as_str())
        {
            has_english = true;
        }

        if !lang.is_empty()
            && !dict::FRENCH_LANG_CODES.contains(lang.as_str())
            && !dict::ENGLISH_LANG_CODES.contains(lang.as_str())
            && !dict::NEUTRAL_LANG_CODES.contains(lang.as_str())
        {
            has_other = true;
        }
    }

    let language_count = [has_french, has_english, has_other]
        .iter()
        .filter(|&&b| b)
        .count();

    if language_count > 1 {
        if has_french {
            if let Some(dub) = french_type {
                return format!("MULTi.{dub}");
            }
        }
        return "MULTi".to_string();
    }
    if has_french {
        if let Some(dub) = french_type {
            return dub.to_string();
        }
    }
    if has_english {
        return "ENGLISH".to_string();
    }

    String::new()
}

/// Secondary language info tag: `VF2` when both metropolitan and Quebec
/// dubs are present, `VFF`/`VFQ` for one of them, with a `WiTH.AD` suffix
/// when an audio description track is found.
pub fn detect_language_info(media: &MediaAttributes) -> Option<String> {
    if media.audio_tracks.is_empty() {
        return None;
    }

    let mut has_vff = false;
    let mut has_vfq = false;
    let mut has_ad = false;

    for track in &media.audio_tracks {
        let title = track.title.as_deref().unwrap_or("").to_lowercase();

        if title.contains("vff") || title.contains("truefrench") || title.contains("true french") {
            has_vff = true;
        }
        if title.contains("vfq") || title.contains("quebec") || title.contains("québec") {
            has_vfq = true;
        }
        if title.contains("audio description") || title.contains("ad ") {
            has_ad = true;
        }
    }

    let mut parts = Vec::new();
    if has_vff && has_vfq {
        parts.push("VF2");
    } else if has_vff {
        parts.push("VFF");
    } else if has_vfq {
        parts.push("VFQ");
    }
    if has_ad {
        parts.push("WiTH.AD");
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AudioTrack;

    fn track(lang: Option<&str>, title: Option<&str>) -> AudioTrack {
        AudioTrack {
            language: lang.map(str::to_string),
            title: title.map(str::to_string),
            ..AudioTrack::default()
        }
    }

    fn media(tracks: Vec<AudioTrack>) -> MediaAttributes {
        MediaAttributes {
            audio_tracks: tracks,
            ..MediaAttributes::default()
        }
    }

    #[test]
    fn no_tracks_yields_empty() {
        assert_eq!(detect_audio_languages(&MediaAttributes::default()), "");
    }

    #[test]
    fn single_french_track_defaults_to_truefrench() {
        let m = media(vec![track(Some("fr"), Some("French"))]);
        assert_eq!(detect_audio_languages(&m), "TrueFrench");
    }

    #[test]
    fn single_english_track() {
        let m = media(vec![track(Some("en"), None)]);
        assert_eq!(detect_audio_languages(&m), "ENGLISH");
    }

    #[test]
    fn french_plus_english_is_multi_with_subtype() {
        let m = media(vec![
            track(Some("fr"), Some("Stereo")),
            track(Some("en"), Some("Surround")),
        ]);
        assert_eq!(detect_audio_languages(&m), "MULTi.TrueFrench");
    }

    #[test]
    fn quebec_dub_pins_vfq() {
        let m = media(vec![
            track(Some("fr"), Some("VFQ")),
            track(Some("en"), Some("English")),
        ]);
        assert_eq!(detect_audio_languages(&m), "MULTi.VFQ");

        let m = media(vec![track(Some("fr"), Some("Version Québec"))]);
        assert_eq!(detect_audio_languages(&m), "VFQ");
    }

    #[test]
    fn vfi_dub() {
        let m = media(vec![track(Some("fr"), Some("VFi International"))]);
        assert_eq!(detect_audio_languages(&m), "VFi");
    }

    #[test]
    fn other_language_pair_is_plain_multi() {
        let m = media(vec![track(Some("en"), None), track(Some("ja"), None)]);
        assert_eq!(detect_audio_languages(&m), "MULTi");
    }

    #[test]
    fn neutral_codes_do_not_count_as_other() {
        let m = media(vec![track(Some("fr"), Some("VFF")), track(Some("und"), None)]);
        assert_eq!(detect_audio_languages(&m), "TrueFrench");
    }

    #[test]
    fn language_info_vf2_when_both_dubs() {
        let m = media(vec![
            track(Some("fr"), Some("VFF")),
            track(Some("fr"), Some("VFQ")),
        ]);
        assert_eq!(detect_language_info(&m), Some("VF2".to_string()));
    }

    #[test]
    fn language_info_single_dub_and_ad() {
        let m = media(vec![track(Some("fr"), Some("TrueFrench"))]);
        assert_eq!(detect_language_info(&m), Some("VFF".to_string()));

        let m = media(vec![
            track(Some("fr"), Some("VFQ")),
            track(Some("fr"), Some("Audio Description")),
        ]);
        assert_eq!(detect_language_info(&m), Some("VFQ.WiTH.AD".to_string()));
    }

    #[test]
    fn language_info_none_without_signals() {
        let m = media(vec![track(Some("en"), Some("English"))]);
        assert_eq!(detect_language_info(&m), None);
        assert_eq!(detect_language_info(&MediaAttributes::default()), None);
    }
}
