//! Static attribute dictionaries shared by the classifiers.
//!
//! The `(key, canonical)` tables are *ordered*: they are evaluated
//! top-to-bottom and the first matching key wins, so more specific keys
//! must be listed before the general substrings they contain (`remux`
//! before `bluray`, `dts-hd ma` before `dts`). Never replace them with an
//! unordered map. The membership sets, where order is irrelevant, are
//! compile-time perfect-hash sets.

use phf::{phf_set, Set};

/// Video codec tokens, matched case-insensitively as substrings of the
/// track codec string.
pub const VIDEO_CODECS: &[(&str, &str)] = &[
    ("hevc", "HEVC"),
    ("h.265", "H265"),
    ("h265", "H265"),
    ("x265", "x265"),
    ("avc", "H264"),
    ("h.264", "H264"),
    ("h264", "H264"),
    ("x264", "x264"),
    ("vp9", "VP9"),
    ("av1", "AV1"),
    ("vc-1", "VC-1"),
    ("vc1", "VC-1"),
    ("mpeg", "MPEG"),
    ("x266", "x266"),
    ("vvc", "VVC"),
];

/// Audio codec tokens. The lossless/extension variants come first so that
/// plain `dts`/`dd` never shadow them.
pub const AUDIO_CODECS: &[(&str, &str)] = &[
    ("dts-hd ma", "DTS-HD.MA"),
    ("dts-hd master", "DTS-HD.MA"),
    ("dts-hd hr", "DTS-HD.HR"),
    ("dts-hd high", "DTS-HD.HR"),
    ("dts:x", "DTS-X"),
    ("dts-x", "DTS-X"),
    ("dtsx", "DTS-X"),
    ("dts", "DTS"),
    ("truehd", "TrueHD"),
    ("true hd", "TrueHD"),
    ("atmos", "Atmos"),
    ("e-ac-3", "EAC3"),
    ("eac3", "EAC3"),
    ("ddp", "DDP"),
    ("dolby digital plus", "DDP"),
    ("ac-3", "AC3"),
    ("ac3", "AC3"),
    ("dd", "DD"),
    ("dolby digital", "DD"),
    ("ac-4", "AC4"),
    ("ac4", "AC4"),
    ("aac", "AAC"),
    ("he-aac", "HE-AAC"),
    ("flac", "FLAC"),
    ("mp3", "MP3"),
    ("opus", "OPUS"),
];

/// Source tokens, matched against the lowercased file name. `remux` is
/// listed before `bluray` because "BluRay REMUX" must classify as REMUX.
/// Single-word keys are matched with word-boundary semantics; keys
/// containing a delimiter are matched as plain substrings.
pub const SOURCES: &[(&str, &str)] = &[
    ("remux", "REMUX"),
    ("bluray", "BluRay"),
    ("blu-ray", "BluRay"),
    ("bdrip", "BluRay"),
    ("web-dl", "WEB-DL"),
    ("webdl", "WEB-DL"),
    ("webrip", "WEBRip"),
    ("hdtv", "HDTV"),
    ("dvdrip", "DVDRip"),
    ("dvd", "DVDRip"),
    ("full", "FULL"),
    ("complete", "COMPLETE"),
    ("hdlight", "HDLight"),
    ("4klight", "4KLight"),
];

/// Streaming platform tokens. The dotted short codes come first and match
/// as plain substrings; the full names below them are matched with
/// word-boundary semantics so that `max` never fires inside `maximum`.
pub const PLATFORMS: &[(&str, &str)] = &[
    (".nf.", "NF"),
    (".amzn.", "AMZN"),
    (".dsnp.", "DSNP"),
    (".atvp.", "ATVP"),
    (".hmax.", "HMAX"),
    (".pmtp.", "PMTP"),
    (".adn.", "ADN"),
    (".cr.", "CR"),
    ("netflix", "NF"),
    ("amazon", "AMZN"),
    ("prime", "AMZN"),
    ("disney", "DSNP"),
    ("apple", "ATVP"),
    ("itunes", "iT"),
    ("hbo", "HMAX"),
    ("max", "MAX"),
    ("paramount", "PMTP"),
    ("hulu", "HULU"),
    ("peacock", "PCOK"),
    ("starz", "STARZ"),
    ("crave", "CRAVE"),
    ("stan", "STAN"),
    ("mubi", "MUBI"),
    ("crunchyroll", "CR"),
    ("bravia", "BCORE"),
];

/// Character substitutions applied by the lexical normalizer. An empty
/// replacement removes the character. Each key is also applied in its
/// uppercase form with an uppercased replacement.
pub const CHAR_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("é", "e"),
    ("è", "e"),
    ("ê", "e"),
    ("ë", "e"),
    ("à", "a"),
    ("â", "a"),
    ("ä", "a"),
    ("ù", "u"),
    ("û", "u"),
    ("ü", "u"),
    ("ô", "o"),
    ("ö", "o"),
    ("î", "i"),
    ("ï", "i"),
    ("ç", "c"),
    ("'", "."),
    ("’", "."),
    (":", ""),
    (";", ""),
    (",", ""),
    ("{", ""),
    ("}", ""),
    ("[", ""),
    ("]", ""),
    ("!", ""),
    ("?", ""),
];

/// Technical tags that commonly leak into a raw title and must be removed
/// by the normalizer when they appear as delimiter-bounded words.
pub const TITLE_LEAK_TAGS: &[&str] = &[
    "french", "vff", "vfq", "vostfr", "multi", "1080p", "720p", "2160p", "4k", "h264", "h265",
    "x264", "x265", "hevc", "avc", "bluray", "web-dl", "webdl", "webrip", "hdtv", "dvdrip",
    "remux", "ac3", "aac", "dts", "hdma",
];

/// Known media container extensions (lowercase).
pub static MEDIA_EXTENSIONS: Set<&'static str> = phf_set! {
    "mkv", "mp4", "avi", "mov", "wmv", "flv", "webm", "m4v", "ts", "m2ts",
};

/// Trailing `-TOKEN` suffixes that look like release groups but are
/// codec/source/resolution/language fragments (lowercase).
pub static NON_GROUP_SUFFIXES: Set<&'static str> = phf_set! {
    // Tails of WEB-DL, WEBRip, DTS-HD MA, HDR10Plus and friends
    "dl", "rip", "hd", "ma", "hr", "x", "plus",
    // Tails of x264, x265, H266
    "264", "265", "266",
    // Audio codecs
    "ac3", "aac", "dts", "flac", "mp3",
    // Resolutions
    "1080p", "720p", "2160p", "480p", "576p",
    // Language tags
    "french", "multi", "vostfr", "vff", "vfq",
};

/// Language codes classified as French (lowercase).
pub static FRENCH_LANG_CODES: Set<&'static str> = phf_set! {
    "fr", "fra", "fre", "french",
};

/// Language codes classified as English (lowercase).
pub static ENGLISH_LANG_CODES: Set<&'static str> = phf_set! {
    "en", "eng", "english",
};

/// Language codes that are neither a real language nor "other" (lowercase).
pub static NEUTRAL_LANG_CODES: Set<&'static str> = phf_set! {
    "und", "zxx",
};
