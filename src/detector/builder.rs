use super::{Detector, ModelsStorage, MIN_LENGTH};
use ::std::collections::HashSet;
use ahash::RandomState;
use compact_str::CompactString;

#[derive(Clone, Debug)]
pub struct DetectorBuilder<'m> {
    pub(super) models_storage: &'m ModelsStorage,
    pub(super) only: HashSet<CompactString, RandomState>,
    pub(super) ignore: HashSet<CompactString, RandomState>,
    pub(super) min_length: usize,
}

impl<'m> DetectorBuilder<'m> {
    /// Will have all languages of the storage enabled
    #[inline]
    pub fn new(models_storage: &'m ModelsStorage) -> Self {
        Self {
            models_storage,
            only: Default::default(),
            ignore: Default::default(),
            min_length: MIN_LENGTH,
        }
    }

    #[inline]
    pub fn build(self) -> Detector<'m> {
        Detector::new(self)
    }

    /// Allow only these languages. All are allowed if empty
    #[inline]
    pub fn only<L: Into<CompactString>>(mut self, languages: impl IntoIterator<Item = L>) -> Self {
        self.only = languages.into_iter().map(Into::into).collect();
        self
    }

    /// Never return these languages
    #[inline]
    pub fn ignore<L: Into<CompactString>>(
        mut self,
        languages: impl IntoIterator<Item = L>,
    ) -> Self {
        self.ignore = languages.into_iter().map(Into::into).collect();
        self
    }

    /// Min text length (in chars), shorter text is undetermined
    #[inline]
    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::DetectorBuilder;
    use crate::{ModelsStorage, MIN_LENGTH};

    #[test]
    fn test_build() {
        let storage = ModelsStorage::embedded().unwrap();
        let detector = DetectorBuilder::new(storage).build();
        assert!(detector.only.is_empty());
        assert!(detector.ignore.is_empty());
        assert_eq!(detector.min_length, MIN_LENGTH);
    }

    #[test]
    fn test_languages() {
        let storage = ModelsStorage::embedded().unwrap();
        let detector = DetectorBuilder::new(storage)
            .only(["rus", "ukr"])
            .ignore(vec![String::from("ukr")])
            .min_length(3)
            .build();
        assert_eq!(detector.only.len(), 2);
        assert!(detector.ignore.contains("ukr"));
        assert_eq!(detector.min_length, 3);
    }
}
