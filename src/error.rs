use thiserror::Error;

/// Quantity whose denominator was zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Precision,
    Recall,
    FScore,
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Quantity::Precision => write!(f, "precision (empty predicted set)"),
            Quantity::Recall => write!(f, "recall (empty true set)"),
            Quantity::FScore => write!(f, "f-score (no overlap between true and predicted sets)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    #[error("division by zero computing {quantity}")]
    DivisionByZero { quantity: Quantity },
    #[error("invalid beta {0}: must be > 0 with a finite square")]
    InvalidBeta(f64),
}
