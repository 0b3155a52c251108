//! Recovers the constant term of a polynomial from radix-encoded samples.
//!
//! Each input document lists a threshold `k` and sample points whose
//! y-coordinates are written in bases 2..=36. The first `k` points are
//! interpolated exactly and the polynomial is evaluated at x=0.
//!
//! `mpc::polynomial` is not used by recovery itself. It evaluates known
//! polynomials to build sample sets with a known secret, for tests and
//! fixtures.

pub mod config;
pub mod input;
pub mod mpc;

pub use config::RecoveryConfig;
pub use input::TestCase;
pub use mpc::{Point, RecoveryError};

use log::info;
use num_bigint::BigInt;

/// A recovery failure, tagged with the document it came from.
#[derive(Debug)]
pub struct CaseFailure {
    /// 1-based position of the document in the run.
    pub case: usize,
    /// The document path.
    pub path: std::path::PathBuf,
    /// What went wrong.
    pub source: RecoveryError,
}

impl core::fmt::Display for CaseFailure {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Test case {} ({}) failed", self.case, self.path.display())
    }
}

impl std::error::Error for CaseFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Processes every configured document in order.
///
/// Stops at the first failure; no secrets are returned unless all succeed.
pub fn recover_all(config: &RecoveryConfig) -> Result<Vec<BigInt>, CaseFailure> {
    let mut secrets = Vec::with_capacity(config.inputs.len());
    for (i, path) in config.inputs.iter().enumerate() {
        let fail = |source: RecoveryError| CaseFailure {
            case: i + 1,
            path: path.clone(),
            source,
        };
        let case = TestCase::load(path).map_err(fail)?;
        let secret = case.evaluate(&config.evaluate_at).map_err(fail)?;
        info!(
            "Recovered test case {} from {} using {} of {} points",
            i + 1,
            path.display(),
            case.k(),
            case.points().len()
        );
        secrets.push(secret);
    }
    Ok(secrets)
}

/// Formats one output line per secret, labelled from 1.
pub fn render(secrets: &[BigInt]) -> Vec<String> {
    secrets
        .iter()
        .enumerate()
        .map(|(i, secret)| format!("Secret for test case {}: {}", i + 1, secret))
        .collect()
}
