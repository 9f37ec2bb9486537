use crate::{LabelTable, Prediction, Scores};
use std::cmp::Ordering;

/// Label reported for a class index past the end of the label table.
pub const UNKNOWN_LABEL: &str = "unknown";

// confidence descending, then class index ascending
fn best_first(a: &(usize, f32), b: &(usize, f32)) -> Ordering {
    b.1.total_cmp(&a.1).then(a.0.cmp(&b.0))
}

fn passing(confidences: impl Iterator<Item = f32>, threshold: f32) -> Vec<(usize, f32)> {
    // NaN never compares greater, so it is dropped here too
    confidences
        .enumerate()
        .filter(|&(_, confidence)| confidence > threshold)
        .collect()
}

/// Reduce raw scores to at most `max_results` predictions above `threshold`.
///
/// Confidences come from `Scores::confidence`: byte scores are divided by
/// 255, float scores are clamped to `[0, 1]`.
/// Entries at or below the threshold are discarded before the cut, so the
/// result is the true top-K of the passing entries, best first, with equal
/// confidences ordered by ascending class index.
pub fn rank(scores: &Scores, labels: &LabelTable, threshold: f32, max_results: usize) -> Vec<Prediction> {
    if max_results == 0 {
        return Vec::new();
    }

    let mut candidates = passing(scores.confidences(), threshold);

    if candidates.len() > max_results {
        candidates.select_nth_unstable_by(max_results - 1, best_first);
        candidates.truncate(max_results);
    }
    candidates.sort_unstable_by(best_first);

    candidates
        .into_iter()
        .map(|(index, confidence)| Prediction {
            class_id: index.to_string(),
            label: labels.get(index).unwrap_or(UNKNOWN_LABEL).to_string(),
            confidence,
        })
        .collect()
}
