use crate::{trigram_profile, Script};
use ::std::collections::HashSet;
use ahash::RandomState;
use classifier::char_prefix;
use compact_str::CompactString;

mod builder;
mod classifier;
mod distance;
mod model;
mod storage;

pub use builder::DetectorBuilder;
use model::Model;
pub use storage::{ModelsStorage, ModelsStorageError};

/// Texts shorter than this (in chars) are undetermined
pub const MIN_LENGTH: usize = 10;
/// Only this many first chars are used for detection
pub const MAX_LENGTH: usize = 2048;
/// Distance added for a trigram absent in a model
pub const MAX_DIFFERENCE: usize = 300;
/// Occurrence above which a singleton script decides the language
pub const SINGLETON_THRESHOLD: f64 = 0.6;
/// Chars used to preselect candidate scripts
pub const SCRIPT_PREFIX_LENGTH: usize = 50;
/// Undetermined language code
pub const UNDETERMINED: &str = "und";

/// Distance returned for a language which is not computed (singleton or undetermined)
const CERTAIN_DISTANCE: usize = 1;

#[derive(Clone, Debug)]
pub struct Detector<'m> {
    models_storage: &'m ModelsStorage,
    pub only: HashSet<CompactString, RandomState>,
    pub ignore: HashSet<CompactString, RandomState>,
    pub min_length: usize,
}

impl<'m> Detector<'m> {
    #[inline]
    fn new(builder: DetectorBuilder<'m>) -> Self {
        Self {
            models_storage: builder.models_storage,
            only: builder.only,
            ignore: builder.ignore,
            min_length: builder.min_length,
        }
    }

    #[inline]
    fn is_allowed(&self, language: &str) -> bool {
        (self.only.is_empty() || self.only.contains(language)) && !self.ignore.contains(language)
    }

    #[inline]
    fn undetermined() -> Vec<(CompactString, usize)> {
        vec![(CompactString::const_new(UNDETERMINED), CERTAIN_DISTANCE)]
    }

    /// Language of a singleton script occurring above [`SINGLETON_THRESHOLD`].
    /// Only the top singleton script is checked, if its language is not allowed
    /// other singleton scripts are not tried.
    fn singleton(&self, text: &str) -> Option<&'static str> {
        let ((script, language), ratio) = self.models_storage.singletons.top_script(text)?;
        if ratio <= SINGLETON_THRESHOLD {
            return None;
        }
        if !self.is_allowed(language) {
            tracing::trace!("Singleton {script:?} {language} is not allowed");
            return None;
        }

        Some(*language)
    }

    fn candidates(&self, script: Script) -> impl Iterator<Item = &'m Model> + '_ {
        self.models_storage
            .script_models(script)
            .iter()
            .filter(|m| self.is_allowed(&m.language))
    }

    /// Returns languages with distances, ordered by distance ascending,
    /// equal distances ordered by language code.
    ///
    /// Lower distance is a better match. A language identified by its script alone,
    /// or [`UNDETERMINED`], is returned alone with the distance 1.
    pub fn detect_all(&self, text: &str) -> Vec<(CompactString, usize)> {
        if text.is_empty() || text.chars().count() < self.min_length {
            return Self::undetermined();
        }

        let text = char_prefix(text, MAX_LENGTH);

        if let Some(language) = self.singleton(text) {
            return vec![(CompactString::const_new(language), CERTAIN_DISTANCE)];
        }

        let Some((&script, _)) = self.models_storage.scripts.top_script(text) else {
            tracing::trace!("No script found");
            return Self::undetermined();
        };

        let mut candidates = self.candidates(script).peekable();
        if candidates.peek().is_none() {
            tracing::trace!("No languages for {script:?}");
            return Self::undetermined();
        }

        let profile = trigram_profile(text);
        distance::distances(&profile, candidates)
    }

    /// Detects the closest language, [`UNDETERMINED`] if none
    #[inline]
    pub fn detect(&self, text: &str) -> CompactString {
        self.detect_all(text)
            .into_iter()
            .next()
            .map_or(CompactString::const_new(UNDETERMINED), |(l, _)| l)
    }
}
