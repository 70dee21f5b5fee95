//! Title extraction from arbitrary release file names.
//!
//! A prioritized chain of strategies: find a reliable anchor (a year, then
//! a season/episode token) and cut before it, falling back to stripping a
//! fixed catalogue of technical tags. The first strategy that yields a
//! non-empty title wins.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

static RE_TRAILING_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-[A-Za-z0-9]+$").expect("valid regex"));

static RE_YEAR_DOTTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.((19|20)\d{2})\.").expect("valid regex"));

static RE_YEAR_PAREN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\((19|20)\d{2}\)").expect("valid regex"));

static RE_YEAR_AT_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.((19|20)\d{2})$").expect("valid regex"));

static RE_SEASON_ANCHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.S\d{1,2}(E\d{1,2})?\.?").expect("valid regex"));

static RE_REPEATED_DOTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.+").expect("valid regex"));

/// Fallback catalogue of technical tags, stripped as delimiter-bounded
/// words when no year or season anchor is present. Evaluated in order.
const FALLBACK_STRIP_PATTERNS: &[&str] = &[
    // Season/episode forms
    r"(?i)\.S\d{1,2}E\d{1,2}\b",
    r"(?i)\.S\d{1,2}\b",
    r"(?i)\.\d{1,2}x\d{1,2}\b",
    // Resolutions
    r"(?i)\.\d{3,4}p\b",
    r"(?i)\.[24]k\b",
    r"(?i)\.uhd\b",
    // Video codecs
    r"(?i)\.h\.?264\b",
    r"(?i)\.h\.?265\b",
    r"(?i)\.x264\b",
    r"(?i)\.x265\b",
    r"(?i)\.hevc\b",
    r"(?i)\.avc\b",
    r"(?i)\.av1\b",
    // Audio codecs
    r"(?i)\.ac3\b",
    r"(?i)\.aac\b",
    r"(?i)\.dts[^a-z]*",
    r"(?i)\.truehd\b",
    r"(?i)\.atmos\b",
    r"(?i)\.eac3\b",
    r"(?i)\.ddp?\d*\.?\d*\b",
    r"(?i)\.flac\b",
    // Sources
    r"(?i)\.web-dl\b",
    r"(?i)\.webdl\b",
    r"(?i)\.webrip\b",
    r"(?i)\.web\b",
    r"(?i)\.bluray\b",
    r"(?i)\.blu-ray\b",
    r"(?i)\.bdrip\b",
    r"(?i)\.brrip\b",
    r"(?i)\.hdtv\b",
    r"(?i)\.dvdrip\b",
    r"(?i)\.remux\b",
    r"(?i)\.hdlight\b",
    // Language/dub tags
    r"(?i)\.french\b",
    r"(?i)\.vff\b",
    r"(?i)\.vfq\b",
    r"(?i)\.vostfr\b",
    r"(?i)\.subfrench\b",
    r"(?i)\.multi\b",
    r"(?i)\.english\b",
    r"(?i)\.eng\b",
    r"(?i)\.vo\b",
    r"(?i)\.vf\b",
    r"(?i)\.truefrench\b",
    r"(?i)\.vfi\b",
    // HDR / dynamic range
    r"(?i)\.hdr10plus\b",
    r"(?i)\.hdr10\b",
    r"(?i)\.hdr\b",
    r"(?i)\.dv\b",
    r"(?i)\.hlg\b",
    r"(?i)\.sdr\b",
    // Editions
    r"(?i)\.dc\b",
    r"(?i)\.extended\b",
    r"(?i)\.remastered\b",
    r"(?i)\.unrated\b",
    r"(?i)\.final\.cut\b",
    r"(?i)\.directors?\.?cut\b",
    r"(?i)\.theatrical\b",
    r"(?i)\.imax\b",
    r"(?i)\.proper\b",
    r"(?i)\.repack\b",
    r"(?i)\.rerip\b",
    r"(?i)\.custom\b",
    // Platforms
    r"(?i)\.nf\b",
    r"(?i)\.amzn\b",
    r"(?i)\.dsnp\b",
    r"(?i)\.atvp\b",
    r"(?i)\.hmax\b",
    r"(?i)\.pmtp\b",
    r"(?i)\.adn\b",
    r"(?i)\.cr\b",
];

static FALLBACK_STRIP: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    FALLBACK_STRIP_PATTERNS
        .iter()
        .map(|p| Regex::new(p).expect("valid regex"))
        .collect()
});

/// Extract the semantic title from a release file name.
///
/// The year anchor takes precedence over a season/episode token: when both
/// are present the year is the more reliable division between the title and
/// the technical tags.
///
/// # Examples
///
/// ```
/// use releasekit_engine::extract_movie_title_from_filename;
///
/// let title = extract_movie_title_from_filename("Iznogoud.2005.FRENCH.1080p.WEB-DL.H264.mkv");
/// assert_eq!(title, "Iznogoud");
/// ```
pub fn extract_movie_title_from_filename(filename: &str) -> String {
    let name = if filename.contains('.') {
        Path::new(filename)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    } else {
        filename.to_string()
    };

    let name = RE_TRAILING_GROUP.replace(&name, "");

    // Year in dotted form: cut before it.
    if let Some(m) = RE_YEAR_DOTTED.find(&name) {
        let title = name[..m.start()].trim_matches('.');
        if !title.is_empty() {
            return title.to_string();
        }
    }

    // Year in parentheses: cut before it, spaces become dots.
    if let Some(m) = RE_YEAR_PAREN.find(&name) {
        let title = name[..m.start()].trim();
        if !title.is_empty() {
            return title.replace(' ', ".");
        }
    }

    // Year at the very end.
    if let Some(m) = RE_YEAR_AT_END.find(&name) {
        let title = name[..m.start()].trim_matches('.');
        if !title.is_empty() {
            return title.to_string();
        }
    }

    // Season/episode token as a weaker anchor.
    if let Some(m) = RE_SEASON_ANCHOR.find(&name) {
        let title = name[..m.start()].trim_matches('.');
        if !title.is_empty() {
            return title.to_string();
        }
    }

    // No anchor at all: strip every known technical tag.
    let mut result = name.into_owned();
    for pattern in FALLBACK_STRIP.iter() {
        result = pattern.replace_all(&result, "").into_owned();
    }
    let result = RE_REPEATED_DOTS.replace_all(&result, ".");
    result.trim_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cuts_before_dotted_year() {
        assert_eq!(
            extract_movie_title_from_filename("Iznogoud.2005.FRENCH.1080p.WEB-DL.H264.mkv"),
            "Iznogoud"
        );
        assert_eq!(
            extract_movie_title_from_filename("The.Matrix.1999.1080p.BluRay.x264-GROUP"),
            "The.Matrix"
        );
    }

    #[test]
    fn cuts_before_parenthesized_year() {
        assert_eq!(
            extract_movie_title_from_filename("Le Grand Bleu (1988) [1080p]"),
            "Le.Grand.Bleu"
        );
    }

    #[test]
    fn cuts_before_year_at_end() {
        assert_eq!(extract_movie_title_from_filename("Old.Film.1954"), "Old.Film");
    }

    #[test]
    fn year_anchor_wins_over_season_token() {
        assert_eq!(
            extract_movie_title_from_filename("Show.2019.S01E01.720p.WEB-DL.mkv"),
            "Show"
        );
    }

    #[test]
    fn cuts_before_season_token_without_year() {
        assert_eq!(
            extract_movie_title_from_filename("Breaking.Bad.S05E14.FRENCH.720p.HDTV.x264-AMB3R.mkv"),
            "Breaking.Bad"
        );
        assert_eq!(
            extract_movie_title_from_filename("Serie.S08.MULTi.1080p.WEB-DL"),
            "Serie"
        );
    }

    #[test]
    fn fallback_strips_known_tags() {
        assert_eq!(
            extract_movie_title_from_filename("Some.Movie.FRENCH.1080p.WEB-DL.x264"),
            "Some.Movie"
        );
        assert_eq!(
            extract_movie_title_from_filename("Film.MULTi.2160p.UHD.HDR.HEVC"),
            "Film"
        );
    }

    #[test]
    fn strips_trailing_group_suffix() {
        assert_eq!(
            extract_movie_title_from_filename("Movie.Title.VOSTFR.720p.WEBRip-TEAM"),
            "Movie.Title"
        );
    }

    #[test]
    fn no_anchors_and_no_tags_returns_name() {
        assert_eq!(extract_movie_title_from_filename("just a plain name"), "just a plain name");
    }

    #[test]
    fn extracted_title_contains_no_technical_tokens() {
        let title =
            extract_movie_title_from_filename("Gladiator.II.2024.MULTi.2160p.WEB-DL.DV.HDR.HEVC-FW");
        assert_eq!(title, "Gladiator.II");
        for token in ["2024", "2160", "WEB", "HEVC", "MULTi"] {
            assert!(!title.contains(token));
        }
    }
}
