//! Season and episode detection from file names.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::EpisodeInfo;

/// Patterns carrying both a season and an episode number, tried in order.
/// Always evaluated before the season-only patterns so that `S01E01` is
/// never mistaken for a season pack.
static EPISODE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"[Ss](\d{1,2})[Ee](\d{1,2})",
        r"[Ss](\d{1,2})\.?[Ee](\d{1,2})",
        r"(\d{1,2})x(\d{1,2})",
        r"[Ss]aison\s*(\d{1,2}).*[Ee]pisode\s*(\d{1,2})",
        r"[Ss]eason\s*(\d{1,2}).*[Ee]pisode\s*(\d{1,2})",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid regex"))
    .collect()
});

/// Patterns carrying only a season number. The trailing `(?:$|[^Ee])` on
/// the bare `S##` form keeps it from firing on the season half of an
/// `S##E##` token.
static SEASON_ONLY_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"[Ss]aison\s*(\d{1,2})",
        r"[Ss]eason\s*(\d{1,2})",
        r"[Ss](\d{1,2})(?:$|[^Ee])",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid regex"))
    .collect()
});

/// Classify a file name as a specific episode, a complete season, or
/// neither. First matching pattern wins.
///
/// # Examples
///
/// ```
/// use releasekit_engine::detect_episode_info;
///
/// let info = detect_episode_info("Breaking.Bad.S05E14.720p.mkv");
/// assert_eq!(info.season, Some(5));
/// assert_eq!(info.episode, Some(14));
///
/// let pack = detect_episode_info("Serie.S08.MULTi.1080p");
/// assert!(pack.is_complete_season);
/// ```
pub fn detect_episode_info(filename: &str) -> EpisodeInfo {
    for pattern in EPISODE_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(filename) {
            let season = caps[1].parse().unwrap_or(0);
            let episode = caps[2].parse().unwrap_or(0);
            return EpisodeInfo::episode(season, episode);
        }
    }

    for pattern in SEASON_ONLY_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(filename) {
            let season = caps[1].parse().unwrap_or(0);
            return EpisodeInfo::complete_season(season);
        }
    }

    EpisodeInfo::default()
}

/// Format the season/episode tag of a series release name.
///
/// Precedence: complete series, then a specific episode, then an episode
/// without a season, then a bare season. Returns an empty string when no
/// field applies.
pub fn format_episode_tag(
    season: Option<u16>,
    episode: Option<u16>,
    is_complete_season: bool,
    is_complete_series: bool,
    is_final_episode: bool,
    episode_only: bool,
) -> String {
    if is_complete_series {
        return "iNTEGRALE".to_string();
    }

    if let (Some(season), Some(episode)) = (season, episode) {
        let mut tag = format!("S{season:02}E{episode:02}");
        if is_final_episode {
            tag.push_str(".FiNAL");
        }
        return tag;
    }

    if episode_only {
        if let Some(episode) = episode {
            let mut tag = format!("E{episode:02}");
            if is_final_episode {
                tag.push_str(".FiNAL");
            }
            return tag;
        }
    }

    if is_complete_season {
        if let Some(season) = season {
            return format!("S{season:02}");
        }
    }

    if let Some(season) = season {
        return format!("S{season:02}");
    }

    String::new()
}
