use super::{classifier::ScriptMatcher, model::Model};
use crate::Script;
use ::core::str::FromStr;
use ::std::{env, fmt, fs, io, path::PathBuf, sync::LazyLock};
use ahash::AHashMap;
use compact_str::CompactString;
use serde::Deserialize;
use strum::IntoEnumIterator;
use thiserror::Error;

const EMBEDDED_MODELS: &str = include_str!("../../data/trigrams.json");
const TRIGRAMS_SEPARATOR: char = '|';

static EMBEDDED: LazyLock<Result<ModelsStorage, ModelsStorageError>> =
    LazyLock::new(|| ModelsStorage::from_json(EMBEDDED_MODELS));

/// `{ "<Script>": { "<language>": "tri|tri|..." } }`, trigrams most frequent first
#[derive(Deserialize)]
#[serde(transparent)]
struct FileModels(AHashMap<String, AHashMap<String, String>>);

/// Immutable trigram models grouped by script, with the script tables used for detection
pub struct ModelsStorage {
    pub(super) models: AHashMap<Script, Vec<Model>>,
    pub(super) scripts: ScriptMatcher<Script>,
    pub(super) singletons: ScriptMatcher<(Script, &'static str)>,
}

impl fmt::Debug for ModelsStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelsStorage")
            .field("scripts", &self.scripts.len())
            .field("singletons", &self.singletons.len())
            .field("languages", &self.languages_count())
            .finish_non_exhaustive()
    }
}

impl ModelsStorage {
    /// Models from the file at `LANGRANK_MODELS_PATH`, or the embedded ones
    pub fn new() -> Result<Self, ModelsStorageError> {
        if let Ok(path) = env::var("LANGRANK_MODELS_PATH") {
            let path = PathBuf::from(path);
            match fs::read_to_string(&path) {
                Ok(json) => return Self::from_json(&json),
                Err(e) => {
                    tracing::warn!("Models file {path:?} is not readable: {e}, using embedded")
                }
            }
        }

        Self::from_json(EMBEDDED_MODELS)
    }

    /// Embedded models, parsed once on the first call
    #[inline]
    pub fn embedded() -> Result<&'static Self, &'static ModelsStorageError> {
        EMBEDDED.as_ref()
    }

    /// Reads models from the file
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, ModelsStorageError> {
        let path = path.into();
        let json =
            fs::read_to_string(&path).map_err(|e| ModelsStorageError::ModelsFileRead(path, e))?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, ModelsStorageError> {
        let FileModels(file_models) = serde_json::from_str(json)?;

        let mut lists = Vec::new();
        for (script_name, languages) in file_models.iter() {
            let script = Script::from_str(script_name)
                .map_err(|_| ModelsStorageError::UnknownScript(script_name.clone()))?;
            for (language, trigrams) in languages.iter() {
                lists.push((
                    script,
                    language.as_str(),
                    trigrams.split(TRIGRAMS_SEPARATOR),
                ));
            }
        }

        Self::from_lists(lists)
    }

    /// Builds from trigram lists ordered most frequent first
    pub fn from_lists<'a, T>(
        lists: impl IntoIterator<Item = (Script, &'a str, T)>,
    ) -> Result<Self, ModelsStorageError>
    where
        T: IntoIterator<Item = &'a str>,
    {
        let mut models: AHashMap<Script, Vec<Model>> = AHashMap::new();

        for (script, language, trigrams) in lists {
            if language.is_empty() {
                return Err(ModelsStorageError::EmptyLanguage(script));
            }

            let trigrams: Vec<&str> = trigrams.into_iter().collect();
            if trigrams.is_empty() || trigrams.iter().all(|t| t.is_empty()) {
                return Err(ModelsStorageError::EmptyModel(script, language.into()));
            }
            if let Some(trigram) = trigrams.iter().find(|t| t.chars().count() != 3) {
                return Err(ModelsStorageError::MalformedTrigram {
                    script,
                    language: language.into(),
                    trigram: (*trigram).into(),
                });
            }

            let (model, duplicates) = Model::from_ordered(language.into(), trigrams);
            if duplicates > 0 {
                tracing::warn!("{script:?} {language}: {duplicates} repeated trigrams skipped");
            }

            let script_models = models.entry(script).or_default();
            if script_models.iter().any(|m| m.language == language) {
                return Err(ModelsStorageError::DuplicateLanguage(script, language.into()));
            }
            script_models.push(model);
        }

        for script_models in models.values_mut() {
            script_models.sort_unstable_by(|m1, m2| m1.language.cmp(&m2.language));
        }

        let scripts = ScriptMatcher::new(
            Script::iter()
                .filter(|s| models.contains_key(s))
                .map(|s| (s, s)),
        )?;
        let singletons = ScriptMatcher::new(
            Script::iter().filter_map(|s| s.singleton_language().map(|l| (s, (s, l)))),
        )?;

        let storage = Self {
            models,
            scripts,
            singletons,
        };
        tracing::debug!(
            "Models loaded: {} scripts, {} languages",
            storage.scripts.len(),
            storage.languages_count()
        );

        Ok(storage)
    }

    /// Rank of `trigram` in the model, [`None`] if the script, language or trigram is absent
    pub fn rank_of(&self, script: Script, language: &str, trigram: &str) -> Option<usize> {
        self.models
            .get(&script)?
            .iter()
            .find(|m| m.language == language)?
            .rank_of(trigram)
    }

    /// Languages of the script, ordered by code
    pub fn languages(&self, script: Script) -> impl Iterator<Item = &str> {
        self.script_models(script).iter().map(|m| m.language.as_str())
    }

    /// Scripts having models, in declaration order
    pub fn scripts(&self) -> impl Iterator<Item = Script> + '_ {
        Script::iter().filter(|s| self.models.contains_key(s))
    }

    #[inline]
    pub fn languages_count(&self) -> usize {
        self.models.values().map(Vec::len).sum()
    }

    #[inline]
    pub(super) fn script_models(&self, script: Script) -> &[Model] {
        self.models.get(&script).map_or(&[], Vec::as_slice)
    }
}

#[derive(Error, Debug)]
pub enum ModelsStorageError {
    #[error("Models file {0:?} read error")]
    ModelsFileRead(PathBuf, #[source] io::Error),
    #[error("Models json error")]
    Json(#[from] serde_json::Error),
    #[error("Unknown script {0:?}")]
    UnknownScript(String),
    #[error("Empty language code in {0:?}")]
    EmptyLanguage(Script),
    #[error("Language {1} in {0:?} has no trigrams")]
    EmptyModel(Script, CompactString),
    #[error("Language {1} in {0:?} is listed twice")]
    DuplicateLanguage(Script, CompactString),
    #[error("Trigram {trigram:?} of {language} in {script:?} is not 3 chars long")]
    MalformedTrigram {
        script: Script,
        language: CompactString,
        trigram: CompactString,
    },
    #[error("Script regex error")]
    Regex(#[from] regex::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded() {
        let storage = ModelsStorage::embedded().unwrap();
        assert!(storage.languages_count() > 10);
        assert_eq!(
            storage.scripts().collect::<Vec<_>>(),
            [
                Script::Latin,
                Script::Cyrillic,
                Script::Arabic,
                Script::Devanagari,
                Script::Hebrew,
            ]
        );
        assert_eq!(
            storage.languages(Script::Cyrillic).collect::<Vec<_>>(),
            ["bul", "rus", "ukr"]
        );
    }

    #[test]
    fn test_rank_of() {
        let json = r#"{ "Latin": { "eng": " th|the|he " } }"#;
        let storage = ModelsStorage::from_json(json).unwrap();
        assert_eq!(storage.rank_of(Script::Latin, "eng", " th"), Some(0));
        assert_eq!(storage.rank_of(Script::Latin, "eng", "he "), Some(2));
        assert_eq!(storage.rank_of(Script::Latin, "eng", "xyz"), None);
        assert_eq!(storage.rank_of(Script::Latin, "fra", " th"), None);
        assert_eq!(storage.rank_of(Script::Cyrillic, "eng", " th"), None);
    }

    #[test]
    fn test_unknown_script() {
        let json = r#"{ "Klingon": { "tlh": "abc" } }"#;
        assert!(matches!(
            ModelsStorage::from_json(json),
            Err(ModelsStorageError::UnknownScript(s)) if s == "Klingon"
        ));
    }

    #[test]
    fn test_malformed() {
        assert!(matches!(
            ModelsStorage::from_json("[1, 2]"),
            Err(ModelsStorageError::Json(_))
        ));
        assert!(matches!(
            ModelsStorage::from_json(r#"{ "Latin": { "eng": "abc|abcd" } }"#),
            Err(ModelsStorageError::MalformedTrigram { .. })
        ));
        assert!(matches!(
            ModelsStorage::from_json(r#"{ "Latin": { "eng": "" } }"#),
            Err(ModelsStorageError::EmptyModel(Script::Latin, _))
        ));
        assert!(matches!(
            ModelsStorage::from_json(r#"{ "Latin": { "": "abc" } }"#),
            Err(ModelsStorageError::EmptyLanguage(Script::Latin))
        ));
    }

    #[test]
    fn test_from_file_missing() {
        assert!(matches!(
            ModelsStorage::from_file("/nonexistent/trigrams.json"),
            Err(ModelsStorageError::ModelsFileRead(..))
        ));
    }

    #[test]
    fn test_duplicate_language() {
        let lists = [
            (Script::Latin, "eng", vec!["abc"]),
            (Script::Latin, "eng", vec!["bcd"]),
        ];
        assert!(matches!(
            ModelsStorage::from_lists(lists),
            Err(ModelsStorageError::DuplicateLanguage(..))
        ));
    }

    // one test, the environment is shared by the whole process
    #[test]
    fn test_models_path_env() {
        let dir = tempfile::tempdir().unwrap();

        let models_path = dir.path().join("trigrams.json");
        fs::write(&models_path, r#"{ "Cyrillic": { "rus": " пр|при|ри " } }"#).unwrap();
        env::set_var("LANGRANK_MODELS_PATH", &models_path);
        let storage = ModelsStorage::new().unwrap();
        assert_eq!(storage.scripts().collect::<Vec<_>>(), [Script::Cyrillic]);
        assert_eq!(storage.rank_of(Script::Cyrillic, "rus", "при"), Some(1));

        env::set_var("LANGRANK_MODELS_PATH", dir.path().join("missing.json"));
        let storage = ModelsStorage::new().unwrap();
        assert_eq!(
            storage.languages_count(),
            ModelsStorage::embedded().unwrap().languages_count()
        );

        let malformed_path = dir.path().join("malformed.json");
        fs::write(&malformed_path, "not json").unwrap();
        env::set_var("LANGRANK_MODELS_PATH", &malformed_path);
        assert!(matches!(
            ModelsStorage::new(),
            Err(ModelsStorageError::Json(_))
        ));

        env::remove_var("LANGRANK_MODELS_PATH");
        assert!(ModelsStorage::new().unwrap().languages_count() > 10);
    }
}
