use compact_str::CompactString;
use rustc_hash::FxHashMap;

pub(crate) type ModelTrigrams = FxHashMap<CompactString, usize>;

/// Trigram ranks of one language, rank 0 is the most frequent trigram
#[derive(Clone, Debug)]
pub(crate) struct Model {
    pub(crate) language: CompactString,
    pub(crate) trigrams: ModelTrigrams,
}

impl Model {
    /// Ranks are the positions in `trigrams`, a repeated trigram keeps its first rank.
    /// Returns the model and the number of repeated trigrams skipped.
    pub(crate) fn from_ordered<'a>(
        language: CompactString,
        trigrams: impl IntoIterator<Item = &'a str>,
    ) -> (Self, usize) {
        let iter = trigrams.into_iter();
        let mut model_trigrams =
            ModelTrigrams::with_capacity_and_hasher(iter.size_hint().0, Default::default());
        let mut duplicates = 0;

        for (rank, trigram) in iter.enumerate() {
            if model_trigrams.contains_key(trigram) {
                duplicates += 1;
                continue;
            }
            model_trigrams.insert(CompactString::from(trigram), rank);
        }
        model_trigrams.shrink_to_fit();

        (
            Self {
                language,
                trigrams: model_trigrams,
            },
            duplicates,
        )
    }

    #[inline]
    pub(crate) fn rank_of(&self, trigram: &str) -> Option<usize> {
        self.trigrams.get(trigram).copied()
    }
}
