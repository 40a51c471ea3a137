use serde::Serialize;

use crate::checker::CheckResult;
use crate::error::Result;

use super::{OutputFormatter, Summary};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: JsonSummary,
    results: Vec<JsonResult<'a>>,
}

#[derive(Serialize)]
struct JsonSummary {
    files: usize,
    failed_files: usize,
    violations: usize,
}

#[derive(Serialize)]
struct JsonResult<'a> {
    path: String,
    check: &'a str,
    status: &'static str,
    truncated: bool,
    violations: Vec<JsonViolation<'a>>,
}

#[derive(Serialize)]
struct JsonViolation<'a> {
    line: usize,
    message: &'a str,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, results: &[CheckResult]) -> Result<String> {
        let summary = Summary::from_results(results);
        let output = JsonOutput {
            summary: JsonSummary {
                files: summary.files,
                failed_files: summary.failed_files,
                violations: summary.violations,
            },
            results: results.iter().map(convert_result).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_result(result: &CheckResult) -> JsonResult<'_> {
    JsonResult {
        path: result.path().display().to_string(),
        check: result.check_id(),
        status: if result.is_failed() { "failed" } else { "passed" },
        truncated: result.is_truncated(),
        violations: result
            .violations()
            .iter()
            .map(|v| JsonViolation {
                line: v.line,
                message: &v.message,
            })
            .collect(),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
