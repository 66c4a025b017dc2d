use std::hash::Hash;

use crate::error::{Quantity, ScoreError};
use crate::model::labels::LabelSet;
use crate::model::profile::ScoreProfile;
use crate::model::scores::ScoreBreakdown;

/// Balanced F-score (F1) of `predicted_labels` against `true_labels`.
///
/// Both inputs are collapsed to sets first, so order and duplicates are
/// irrelevant. Fails with [`ScoreError::DivisionByZero`] when either set is
/// empty or the two sets share no label.
pub fn multilabel_fscore<L, T, P>(
    true_labels: T,
    predicted_labels: P,
) -> Result<f64, ScoreError>
where
    L: Eq + Hash,
    T: IntoIterator<Item = L>,
    P: IntoIterator<Item = L>,
{
    multilabel_fscore_breakdown(true_labels, predicted_labels).map(|b| b.fscore)
}

/// Same as [`multilabel_fscore`] but keeps the intermediate counts and ratios.
pub fn multilabel_fscore_breakdown<L, T, P>(
    true_labels: T,
    predicted_labels: P,
) -> Result<ScoreBreakdown, ScoreError>
where
    L: Eq + Hash,
    T: IntoIterator<Item = L>,
    P: IntoIterator<Item = L>,
{
    let truth = LabelSet::from_labels(true_labels);
    let predicted = LabelSet::from_labels(predicted_labels);
    score_sets(&truth, &predicted, &ScoreProfile::f1())
}

/// Weighted F-measure; `beta > 1` favours recall, `beta < 1` favours precision.
pub fn multilabel_fbeta<L, T, P>(
    true_labels: T,
    predicted_labels: P,
    profile: &ScoreProfile,
) -> Result<f64, ScoreError>
where
    L: Eq + Hash,
    T: IntoIterator<Item = L>,
    P: IntoIterator<Item = L>,
{
    let truth = LabelSet::from_labels(true_labels);
    let predicted = LabelSet::from_labels(predicted_labels);
    score_sets(&truth, &predicted, profile).map(|b| b.fscore)
}

/// Scores prebuilt [`LabelSet`]s under `profile`, so callers can reuse sets across profiles.
pub fn score_sets<L: Eq + Hash>(
    truth: &LabelSet<L>,
    predicted: &LabelSet<L>,
    profile: &ScoreProfile,
) -> Result<ScoreBreakdown, ScoreError> {
    profile.validate()?;
    let n_true = truth.len();
    let n_pred = predicted.len();
    let n_intersection = truth.intersection_len(predicted);

    let precision = ratio(n_intersection as f64, n_pred as f64, Quantity::Precision)?;
    let recall = ratio(n_intersection as f64, n_true as f64, Quantity::Recall)?;
    let fscore = if profile.is_balanced() {
        ratio(2.0 * precision * recall, precision + recall, Quantity::FScore)?
    } else {
        let b2 = profile.beta * profile.beta;
        ratio(
            (1.0 + b2) * precision * recall,
            b2 * precision + recall,
            Quantity::FScore,
        )?
    };

    tracing::debug!(
        n_true,
        n_pred,
        n_intersection,
        precision,
        recall,
        beta = profile.beta,
        fscore,
        "multilabel f-score"
    );

    Ok(ScoreBreakdown {
        n_true,
        n_pred,
        n_intersection,
        precision,
        recall,
        fscore,
    })
}

fn ratio(numerator: f64, denominator: f64, quantity: Quantity) -> Result<f64, ScoreError> {
    if denominator == 0.0 {
        tracing::warn!(%quantity, "zero denominator");
        return Err(ScoreError::DivisionByZero { quantity });
    }
    Ok(numerator / denominator)
}

#[cfg(test)]
#[path = "../../tests/src_inline/metrics/fscore.rs"]
mod tests;
