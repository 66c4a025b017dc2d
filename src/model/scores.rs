use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub n_true: usize,
    pub n_pred: usize,
    pub n_intersection: usize,
    pub precision: f64,
    pub recall: f64,
    pub fscore: f64,
}
