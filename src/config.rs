//! Configuration for secret recovery runs.
//!
//! Defines the inputs the driver processes and where the recovered
//! polynomial is evaluated.

use std::path::PathBuf;

use num_bigint::BigInt;
use num_traits::Zero;

/// Input file read by default for the first test case.
pub const DEFAULT_FIRST_INPUT: &str = "test_case_1.json";
/// Input file read by default for the second test case.
pub const DEFAULT_SECOND_INPUT: &str = "test_case_2.json";

/// Settings for one recovery run.
///
/// The binary uses `RecoveryConfig::default()`; library callers may point it
/// at other documents.
#[derive(Debug, Clone)]
pub struct RecoveryConfig {
    /// Documents to process, in order. Output labels count from 1.
    pub inputs: Vec<PathBuf>,

    /// Abscissa the polynomial is evaluated at. The secret lives at 0.
    pub evaluate_at: BigInt,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            inputs: vec![
                PathBuf::from(DEFAULT_FIRST_INPUT),
                PathBuf::from(DEFAULT_SECOND_INPUT),
            ],
            evaluate_at: BigInt::zero(),
        }
    }
}

impl RecoveryConfig {
    /// A configuration over `inputs`, evaluating at 0.
    pub fn with_inputs<I, P>(inputs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RecoveryConfig::default();
        assert_eq!(
            config.inputs,
            vec![PathBuf::from("test_case_1.json"), PathBuf::from("test_case_2.json")]
        );
        assert!(config.evaluate_at.is_zero());
    }

    #[test]
    fn test_with_inputs() {
        let config = RecoveryConfig::with_inputs(["a.json"]);
        assert_eq!(config.inputs, vec![PathBuf::from("a.json")]);
        assert!(config.evaluate_at.is_zero());
    }
}
