use crate::config::GroupingConfig;

/// Splits event titles into an event-type label and a base (group) name
#[derive(Debug, Clone)]
pub struct TitleNormalizer {
    keywords: Vec<String>,
}

impl TitleNormalizer {
    pub fn new(config: &GroupingConfig) -> Self {
        Self {
            keywords: config.keywords().to_vec(),
        }
    }

    /// Remove a leading event-type keyword and the space after it.
    ///
    /// "Rehearsal Gala Night" becomes "Gala Night". Titles that don't start
    /// with a keyword followed by a space are returned unchanged. The first
    /// matching keyword in list order wins.
    pub fn strip_event_type<'a>(&self, title: &'a str) -> &'a str {
        for keyword in &self.keywords {
            if let Some(rest) = match_keyword(title, keyword) {
                if rest.starts_with(' ') {
                    return rest.trim();
                }
            }
        }
        title
    }

    /// Label of the event within its group.
    ///
    /// When the title starts with a keyword (no space needed after it) this is
    /// the first word of the title in its original casing, otherwise the
    /// whole title.
    pub fn find_event_type<'a>(&self, title: &'a str) -> &'a str {
        if self
            .keywords
            .iter()
            .any(|keyword| match_keyword(title, keyword).is_some())
        {
            return title.split_whitespace().next().unwrap_or(title);
        }
        title
    }
}

impl Default for TitleNormalizer {
    fn default() -> Self {
        Self::new(&GroupingConfig::default())
    }
}

/// Case-insensitive prefix match of a lower-case keyword against `title`.
/// Returns the part of the title after the matched prefix.
fn match_keyword<'a>(title: &'a str, keyword: &str) -> Option<&'a str> {
    let mut expected = keyword.chars().peekable();

    for (idx, ch) in title.char_indices() {
        if expected.peek().is_none() {
            return Some(&title[idx..]);
        }
        for lower in ch.to_lowercase() {
            match expected.next() {
                Some(k) if k == lower => {}
                Some(_) => return None,
                None => break,
            }
        }
    }

    if expected.peek().is_none() {
        Some("")
    } else {
        None
    }
}
