use crate::app::error::Error;
use serde_derive::Serialize;
use std::fs::File;
use std::path::Path;

#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum Status {
    Passed,
    Failed,
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CaseResult {
    pub name: String,
    pub scenario: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CaseResult {
    pub fn new(name: String, scenario: &str, verdict: Result<(), String>) -> Self {
        let (status, message) = match verdict {
            Ok(()) => (Status::Passed, None),
            Err(message) => (Status::Failed, Some(message)),
        };
        Self {
            name,
            scenario: scenario.to_owned(),
            status,
            message,
        }
    }

    #[inline]
    pub fn is_passed(&self) -> bool {
        self.status == Status::Passed
    }
}

/// Named cases collected over a manifest run, in execution order.
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    name: String,
    cases: Vec<CaseResult>,
}

impl Report {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            cases: vec![],
        }
    }

    pub fn push(&mut self, case: CaseResult) {
        self.cases.push(case);
    }

    pub fn cases(&self) -> &[CaseResult] {
        &self.cases
    }

    pub fn passed(&self) -> usize {
        self.cases.iter().filter(|case| case.is_passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.cases.len() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn save_into_file(&self, path: &Path) -> Result<(), Error> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        serde_json::to_writer_pretty(File::create(path)?, self)?;
        Ok(())
    }
}
