use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::BuildEnv;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckKind {
    /// Failure fails the whole run.
    Mandatory,
    /// Reported only.
    Informational,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Passed,
    Failed,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub name: String,
    pub kind: CheckKind,
    pub status: CheckStatus,
    pub message: String,
}

impl CheckResult {
    pub fn passed(&self) -> bool {
        self.status != CheckStatus::Failed
    }
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub environment: BuildEnv,
    pub checks: Vec<CheckResult>,
    pub passed: bool,
    pub generated_at: DateTime<Utc>,
}

impl Report {
    pub fn new(environment: BuildEnv, checks: Vec<CheckResult>) -> Self {
        let passed = checks
            .iter()
            .filter(|c| c.kind == CheckKind::Mandatory)
            .all(CheckResult::passed);
        Report {
            environment,
            checks,
            passed,
            generated_at: Utc::now(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        if self.passed { 0 } else { 1 }
    }
}
