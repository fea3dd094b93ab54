//! Standardizing feature scaler.
//!
//! Fitted once at training time; applied identically at serving time.
//! Training/serving skew in scaling is a correctness bug, so the artifact
//! carries the feature-contract version and the loader rejects mismatches.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{read_artifact, ModelError, FEATURE_CONTRACT_VERSION, FEATURE_DIM};

/// `(x - mean) / scale` per feature, with sklearn's convention that a
/// zero-variance feature divides by 1 instead of 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    feature_version: u32,
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardScaler {
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let scaler: Self = read_artifact(path)?;
        scaler.validate()?;
        Ok(scaler)
    }

    /// Pass-through scaler (mean 0, scale 1). Test seam.
    pub fn identity() -> Self {
        Self {
            feature_version: FEATURE_CONTRACT_VERSION,
            mean: vec![0.0; FEATURE_DIM],
            scale: vec![1.0; FEATURE_DIM],
        }
    }

    pub fn from_parts(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self, ModelError> {
        let scaler = Self {
            feature_version: FEATURE_CONTRACT_VERSION,
            mean,
            scale,
        };
        scaler.validate()?;
        Ok(scaler)
    }

    fn validate(&self) -> Result<(), ModelError> {
        if self.feature_version != FEATURE_CONTRACT_VERSION {
            return Err(ModelError::ContractMismatch {
                artifact: "scaler",
                artifact_version: self.feature_version,
                engine_version: FEATURE_CONTRACT_VERSION,
            });
        }
        for len in [self.mean.len(), self.scale.len()] {
            if len != FEATURE_DIM {
                return Err(ModelError::DimensionMismatch {
                    artifact: "scaler",
                    expected: FEATURE_DIM,
                    got: len,
                });
            }
        }
        Ok(())
    }

    pub fn transform(&self, features: &[f64; FEATURE_DIM]) -> [f64; FEATURE_DIM] {
        let mut out = [0.0; FEATURE_DIM];
        for i in 0..FEATURE_DIM {
            let divisor = if self.scale[i] == 0.0 { 1.0 } else { self.scale[i] };
            out[i] = (features[i] - self.mean[i]) / divisor;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_passthrough() {
        let scaler = StandardScaler::identity();
        let x = [3.5; FEATURE_DIM];
        assert_eq!(scaler.transform(&x), x);
    }

    #[test]
    fn centers_and_scales() {
        let mut mean = vec![0.0; FEATURE_DIM];
        let mut scale = vec![1.0; FEATURE_DIM];
        mean[0] = 10.0;
        scale[0] = 2.0;
        let scaler = StandardScaler::from_parts(mean, scale).unwrap();

        let mut x = [0.0; FEATURE_DIM];
        x[0] = 14.0;
        let out = scaler.transform(&x);
        assert!((out[0] - 2.0).abs() < 1e-12);
        assert_eq!(out[1], 0.0);
    }

    #[test]
    fn zero_variance_feature_divides_by_one() {
        let mean = vec![1.0; FEATURE_DIM];
        let scale = vec![0.0; FEATURE_DIM];
        let scaler = StandardScaler::from_parts(mean, scale).unwrap();

        let x = [4.0; FEATURE_DIM];
        let out = scaler.transform(&x);
        assert!(out.iter().all(|v| (*v - 3.0).abs() < 1e-12));
    }

    #[test]
    fn wrong_dimension_rejected() {
        let err = StandardScaler::from_parts(vec![0.0; 3], vec![1.0; FEATURE_DIM]).unwrap_err();
        assert!(matches!(err, ModelError::DimensionMismatch { .. }));
    }

    #[test]
    fn contract_version_mismatch_rejected() {
        let json = serde_json::json!({
            "feature_version": FEATURE_CONTRACT_VERSION + 1,
            "mean": vec![0.0; FEATURE_DIM],
            "scale": vec![1.0; FEATURE_DIM],
        });
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scaler.json");
        std::fs::write(&path, json.to_string()).unwrap();

        let err = StandardScaler::load(&path).unwrap_err();
        assert!(matches!(err, ModelError::ContractMismatch { .. }));
    }
}
