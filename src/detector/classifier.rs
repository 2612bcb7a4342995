use super::SCRIPT_PREFIX_LENGTH;
use crate::Script;
use regex::Regex;

/// Table of script predicates, tried in order
#[derive(Clone, Debug)]
pub(crate) struct ScriptMatcher<T> {
    entries: Vec<(T, Regex)>,
}

impl<T> ScriptMatcher<T> {
    pub(crate) fn new(
        scripts: impl IntoIterator<Item = (Script, T)>,
    ) -> Result<Self, regex::Error> {
        let entries = scripts
            .into_iter()
            .map(|(script, value)| Regex::new(script.pattern()).map(|r| (value, r)))
            .collect::<Result<_, _>>()?;

        Ok(Self { entries })
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Script with the highest full text occurrence, among the ones found in the prefix.
    /// An equal occurrence keeps the earlier entry.
    pub(crate) fn top_script(&self, text: &str) -> Option<(&T, f64)> {
        let prefix = char_prefix(text, SCRIPT_PREFIX_LENGTH);

        let mut top: Option<(&T, f64)> = None;
        for (value, regex) in self.entries.iter() {
            if occurrence(prefix, regex) <= 0.0 {
                continue;
            }

            let ratio = occurrence(text, regex);
            if top.is_none_or(|(_, top_ratio)| ratio > top_ratio) {
                top = Some((value, ratio));
            }
        }

        top
    }
}

/// Fraction of chars matching `regex`, 0 for an empty text
pub(crate) fn occurrence(text: &str, regex: &Regex) -> f64 {
    let total = text.chars().count();
    if total == 0 {
        return 0.0;
    }

    regex.find_iter(text).count() as f64 / total as f64
}

/// First `len` chars of `text`
#[inline]
pub(crate) fn char_prefix(text: &str, len: usize) -> &str {
    match text.char_indices().nth(len) {
        Some((i, _)) => &text[..i],
        None => text,
    }
}
