//! Season/episode detection result.

/// What the episode detector found in one filename.
///
/// Produced once per filename and never merged across calls. The all-false
/// default means "no series marker found".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EpisodeInfo {
    pub is_series: bool,
    pub season: Option<u16>,
    pub episode: Option<u16>,
    /// True when only a season marker was found (a season-pack folder).
    pub is_complete_season: bool,
}

impl EpisodeInfo {
    /// A specific episode of a season.
    pub fn episode(season: u16, episode: u16) -> Self {
        Self {
            is_series: true,
            season: Some(season),
            episode: Some(episode),
            is_complete_season: false,
        }
    }

    /// A complete season without an episode marker.
    pub fn complete_season(season: u16) -> Self {
        Self {
            is_series: true,
            season: Some(season),
            episode: None,
            is_complete_season: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_a_series() {
        let info = EpisodeInfo::default();
        assert!(!info.is_series);
        assert!(info.season.is_none());
        assert!(info.episode.is_none());
        assert!(!info.is_complete_season);
    }

    #[test]
    fn constructors() {
        assert_eq!(
            EpisodeInfo::episode(4, 1),
            EpisodeInfo {
                is_series: true,
                season: Some(4),
                episode: Some(1),
                is_complete_season: false,
            }
        );
        assert!(EpisodeInfo::complete_season(8).is_complete_season);
    }
}
