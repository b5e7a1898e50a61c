//! Error Classifier Port
//!
//! Gives shared error handling (e.g. expired credentials) the first look at a
//! failed deployment before the deploy command prints its own report.

use crate::error::DeployError;

pub trait ErrorClassifier {
    /// Returns `true` if the error was fully reported and needs no further output.
    fn handle(&self, error: &DeployError) -> bool;
}

/// Classifier that never handles anything.
pub struct PassthroughClassifier;

impl ErrorClassifier for PassthroughClassifier {
    fn handle(&self, _error: &DeployError) -> bool {
        false
    }
}
