pub mod error;
pub mod logging;
pub mod metrics;
pub mod model;

pub use error::{Quantity, ScoreError};
pub use metrics::fscore::{multilabel_fbeta, multilabel_fscore, multilabel_fscore_breakdown};
pub use model::labels::LabelSet;
pub use model::profile::ScoreProfile;
pub use model::scores::ScoreBreakdown;
