use super::{model::Model, MAX_DIFFERENCE};
use crate::TrigramProfile;
use compact_str::CompactString;

/// Sum of rank differences, [`MAX_DIFFERENCE`] for each trigram absent in the model
pub(crate) fn distance(profile: &TrigramProfile, model: &Model) -> usize {
    profile
        .iter()
        .map(|(trigram, rank)| {
            model
                .rank_of(trigram)
                .map_or(MAX_DIFFERENCE, |model_rank| rank.abs_diff(model_rank))
        })
        .sum()
}

/// Distances to each model, ascending, equal distances ordered by language
pub(crate) fn distances<'a>(
    profile: &TrigramProfile,
    models: impl Iterator<Item = &'a Model>,
) -> Vec<(CompactString, usize)> {
    let mut res: Vec<_> = models
        .map(|model| (model.language.clone(), distance(profile, model)))
        .collect();
    res.sort_unstable_by(|(l1, d1), (l2, d2)| d1.cmp(d2).then_with(|| l1.cmp(l2)));

    res
}
