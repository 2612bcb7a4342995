//! # Natural language detection library
//!
//! Guesses the language of a short text by its script and by comparing
//! trigram frequency ranks against per-language models.
//!
//! Scripts used by a single language (Hangul, Greek, Thai, ...) are detected
//! right away. For scripts shared by many languages (Latin, Cyrillic, ...)
//! every language of the script is ranked by distance, lower is better.
//!
//! Language codes are `ISO 639-3`, `und` is returned when nothing can be detected.
//!
//! # Example
//! ```rust
//! use langrank::{DetectorBuilder, ModelsStorage};
//!
//! let models_storage = ModelsStorage::embedded().unwrap();
//! let detector = DetectorBuilder::new(models_storage).build();
//!
//! let text = "Все люди рождаются свободными и равными в своем достоинстве и правах.";
//! assert_eq!(detector.detect(text), "rus");
//!
//! // ordered by distance
//! let all = detector.detect_all(text);
//! assert_eq!(all[0].0, "rus");
//! ```
//! `detector` also has [other methods](struct.Detector.html#implementations)

mod detector;
mod script;
mod trigrams;

pub use detector::{
    Detector, DetectorBuilder, ModelsStorage, ModelsStorageError, MAX_DIFFERENCE, MAX_LENGTH,
    MIN_LENGTH, SCRIPT_PREFIX_LENGTH, SINGLETON_THRESHOLD, UNDETERMINED,
};
pub use script::Script;
pub use trigrams::{clean, trigram_profile, trigrams, TrigramProfile};
