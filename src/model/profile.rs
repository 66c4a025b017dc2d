use serde::{Deserialize, Serialize};

use crate::error::ScoreError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreProfile {
    pub beta: f64,
}

impl ScoreProfile {
    pub fn f1() -> Self {
        Self { beta: 1.0 }
    }

    pub fn with_beta(beta: f64) -> Result<Self, ScoreError> {
        let profile = Self { beta };
        profile.validate()?;
        Ok(profile)
    }

    /// Deserialized profiles bypass `with_beta`, so scoring re-checks.
    /// `beta²` must stay finite or the weighted mean degrades to `inf/inf`.
    pub fn validate(&self) -> Result<(), ScoreError> {
        if self.beta > 0.0 && (self.beta * self.beta).is_finite() {
            Ok(())
        } else {
            Err(ScoreError::InvalidBeta(self.beta))
        }
    }

    pub fn is_balanced(&self) -> bool {
        self.beta == 1.0
    }
}

impl Default for ScoreProfile {
    fn default() -> Self {
        Self::f1()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/profile.rs"]
mod tests;
