//! Lexical normalizer for titles.

use std::sync::LazyLock;

use regex::Regex;

use crate::dict;

static RE_FORBIDDEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[<>"/\\|?*]"#).expect("valid regex"));

static RE_LEAK_AFTER_DOT: LazyLock<Regex> = LazyLock::new(|| {
    let tags = dict::TITLE_LEAK_TAGS
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\.(?:{tags})\b")).expect("valid regex")
});

static RE_LEAK_BEFORE_DOT: LazyLock<Regex> = LazyLock::new(|| {
    let tags = dict::TITLE_LEAK_TAGS
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{tags})\.")).expect("valid regex")
});

static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

static RE_REPEATED_DOTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.+").expect("valid regex"));

/// Normalize a title into a release-name token.
///
/// Applied in order: trailing media extension strip, accent/punctuation
/// substitution, filesystem-hostile character removal, leaked technical tag
/// removal, whitespace runs collapsed to `.`, repeated dots collapsed,
/// all-lowercase words capitalized, trailing dot stripped. Total function:
/// empty input yields empty output, nothing panics.
///
/// # Examples
///
/// ```
/// use releasekit_engine::sanitize_title;
///
/// assert_eq!(sanitize_title("L'étrange Noël"), "L.Etrange.Noel");
/// assert_eq!(sanitize_title("Movie: the sequel!.mkv"), "Movie.The.Sequel");
/// ```
pub fn sanitize_title(title: &str) -> String {
    let mut title = strip_media_extension(title).to_string();

    for (from, to) in dict::CHAR_SUBSTITUTIONS {
        if title.contains(from) {
            title = title.replace(from, to);
        }
        let upper_from = from.to_uppercase();
        if upper_from != *from && title.contains(&upper_from) {
            title = title.replace(&upper_from, &to.to_uppercase());
        }
    }

    let title = RE_FORBIDDEN.replace_all(&title, "");
    let title = RE_LEAK_AFTER_DOT.replace_all(&title, "");
    let title = RE_LEAK_BEFORE_DOT.replace_all(&title, "");
    let title = RE_WHITESPACE.replace_all(title.trim(), ".");
    let title = RE_REPEATED_DOTS.replace_all(&title, ".");

    let title = title
        .split('.')
        .filter(|word| !word.is_empty())
        .map(capitalize_if_all_lowercase)
        .collect::<Vec<_>>()
        .join(".");

    title.trim_end_matches('.').to_string()
}

/// Strip a trailing known media extension, case-insensitively.
fn strip_media_extension(title: &str) -> &str {
    if let Some((stem, extension)) = title.rsplit_once('.') {
        if dict::MEDIA_EXTENSIONS.contains(extension.to_ascii_lowercase().as_str()) {
            return stem;
        }
    }
    title
}

/// Uppercase the first character of a word only when the word is entirely
/// lowercase, preserving intentional acronyms and mixed case.
fn capitalize_if_all_lowercase(word: &str) -> String {
    let mut cased = word.chars().filter(|c| c.is_alphabetic());
    let all_lowercase = cased.clone().next().is_some() && cased.all(|c| c.is_lowercase());
    if !all_lowercase {
        return word.to_string();
    }
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_extension_and_capitalizes() {
        assert_eq!(sanitize_title("the movie.mkv"), "The.Movie");
        assert_eq!(sanitize_title("the movie.MKV"), "The.Movie");
    }

    #[test]
    fn extension_only_stripped_at_end() {
        assert_eq!(sanitize_title("mkv stories"), "Mkv.Stories");
    }

    #[test]
    fn replaces_accents_and_apostrophes() {
        assert_eq!(sanitize_title("L'étrange Noël"), "L.Etrange.Noel");
        assert_eq!(sanitize_title("Ça commence à Châteauroux"), "Ca.Commence.A.Chateauroux");
    }

    #[test]
    fn removes_forbidden_punctuation() {
        assert_eq!(sanitize_title("Mission: Impossible"), "Mission.Impossible");
        assert_eq!(sanitize_title("Who? What! [draft]"), "Who.What.Draft");
    }

    #[test]
    fn removes_leaked_technical_tags() {
        assert_eq!(sanitize_title("Title.FRENCH.1080p"), "Title");
        assert_eq!(sanitize_title("Title.multi.x264"), "Title");
    }

    #[test]
    fn collapses_whitespace_and_dots() {
        assert_eq!(sanitize_title("  some   movie  "), "Some.Movie");
        assert_eq!(sanitize_title("a...b"), "A.B");
    }

    #[test]
    fn preserves_acronyms_and_mixed_case() {
        assert_eq!(sanitize_title("S.W.A.T."), "S.W.A.T");
        assert_eq!(sanitize_title("iCarly"), "iCarly");
        assert_eq!(sanitize_title("NCIS los angeles"), "NCIS.Los.Angeles");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(sanitize_title(""), "");
        assert_eq!(sanitize_title("   "), "");
    }

    #[test]
    fn idempotent_on_realistic_titles() {
        for input in [
            "L'étrange Noël de Monsieur Jack!",
            "Mission: Impossible - Fallout",
            "the lord of the rings",
            "Gladiator II",
            "S.W.A.T.",
            "Amélie poulain.mkv",
        ] {
            let once = sanitize_title(input);
            assert_eq!(sanitize_title(&once), once, "input: {input}");
        }
    }
}
