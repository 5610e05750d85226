// src/loc.rs
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use serde::Deserialize;

use crate::error::{Result, WcError};

/// Directory patterns never worth scanning for code statistics.
const EXCLUDED_DIRS: &[&str] = &[
    "target",
    "node_modules",
    ".git",
    ".idea",
    ".vscode",
    "build",
    "dist",
    "bin",
    "obj",
];

/// One per-language record from `scc --format=json`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LanguageSummary {
    pub name: String,
    pub code: usize,
    #[serde(default)]
    pub comment: usize,
    #[serde(default)]
    pub blank: usize,
    #[serde(default)]
    pub complexity: usize,
    #[serde(default)]
    pub count: usize,
    #[serde(default, rename = "WeightedComplexity")]
    pub weighted_complexity: f64,
}

/// The only figure surfaced to callers: code lines summed over every
/// language scc reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeStatsSummary {
    pub total_code_lines: usize,
}

/// Run scc over `paths` and aggregate its per-language output.
///
/// scc's stderr passes straight through to ours. A missing executable is
/// reported separately from a failing or unparsable run.
pub fn count_lines_of_code(paths: &[PathBuf]) -> Result<CodeStatsSummary> {
    let mut cmd = Command::new("scc");
    cmd.arg("--format=json");
    for dir in EXCLUDED_DIRS {
        cmd.arg(format!("--exclude-dir={dir}"));
    }
    cmd.args(paths);
    cmd.stderr(Stdio::inherit());
    log::debug!("invoking {cmd:?}");

    let output = match cmd.output() {
        Ok(output) => output,
        Err(err) if err.kind() == ErrorKind::NotFound => return Err(WcError::DelegateMissing),
        Err(err) => {
            return Err(WcError::DelegateFailed {
                reason: err.to_string(),
            });
        }
    };

    if !output.status.success() {
        return Err(WcError::DelegateFailed {
            reason: format!("scc exited with {}", output.status),
        });
    }

    let summaries = parse_summaries(&output.stdout)?;
    Ok(CodeStatsSummary {
        total_code_lines: total_code_lines(&summaries),
    })
}

fn parse_summaries(bytes: &[u8]) -> Result<Vec<LanguageSummary>> {
    serde_json::from_slice(bytes).map_err(|err| WcError::DelegateOutput {
        details: err.to_string(),
    })
}

fn total_code_lines(summaries: &[LanguageSummary]) -> usize {
    summaries.iter().map(|s| s.code).sum()
}
