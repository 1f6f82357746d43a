use std::io::Write;

use anyhow::{Context, Result};
use console::Style;

use crate::types::{CheckResult, CheckStatus, Report};

pub const BANNER: &str = "=== Build Test Application ===";
pub const SUCCESS_BANNER: &str = "✅ All checks passed!";
pub const FAILURE_BANNER: &str = "❌ Tests failed!";

fn status_icon(status: CheckStatus) -> &'static str {
    match status {
        CheckStatus::Passed => "✅",
        CheckStatus::Failed => "❌",
        // Warning sign plus variation selector renders wide; pad to line up.
        CheckStatus::Warning => "⚠️ ",
    }
}

pub fn status_line(check: &CheckResult) -> String {
    format!("{} {}", status_icon(check.status), check.message)
}

/// Render the report as plain text lines, in output order.
pub fn render_text(report: &Report) -> Vec<String> {
    let env = &report.environment;
    let mut lines = vec![
        BANNER.to_string(),
        format!("Environment: {}", env.environment),
        format!("Build Number: {}", env.build_number),
        format!("Source Branch: {}", env.source_branch),
        String::new(),
    ];
    lines.extend(report.checks.iter().map(status_line));
    let banner = if report.passed { SUCCESS_BANNER } else { FAILURE_BANNER };
    lines.push(banner.to_string());
    lines
}

/// Print the text rendering to stdout, styling status lines when on a terminal.
pub fn print_text(report: &Report) -> Result<()> {
    let green = Style::new().green();
    let red = Style::new().red().bold();
    let yellow = Style::new().yellow();

    let header_len = 5;
    let check_count = report.checks.len();
    let lines = render_text(report);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for (i, line) in lines.iter().enumerate() {
        let style = if i < header_len {
            None
        } else if i < header_len + check_count {
            match report.checks[i - header_len].status {
                CheckStatus::Passed => Some(&green),
                CheckStatus::Failed => Some(&red),
                CheckStatus::Warning => Some(&yellow),
            }
        } else if report.passed {
            Some(&green)
        } else {
            Some(&red)
        };
        let written = match style {
            Some(s) => writeln!(out, "{}", s.apply_to(line)),
            None => writeln!(out, "{line}"),
        };
        written.context("Failed to write report to stdout")?;
    }
    out.flush().context("Failed to flush stdout")?;
    Ok(())
}

/// Print the report as pretty JSON on stdout.
pub fn print_json(report: &Report) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{json}").context("Failed to write report to stdout")?;
    Ok(())
}

/// One-line tally of check outcomes.
pub fn summary_line(report: &Report) -> String {
    let count = |status: CheckStatus| {
        report.checks.iter().filter(|c| c.status == status).count()
    };
    let warnings = count(CheckStatus::Warning);
    let warning_label = if warnings == 1 { "warning" } else { "warnings" };
    format!(
        "Ran {} checks: {} passed, {} {}, {} failed",
        report.checks.len(),
        count(CheckStatus::Passed),
        warnings,
        warning_label,
        count(CheckStatus::Failed)
    )
}

/// Verbose diagnostics on stderr.
pub fn print_diagnostics(report: &Report) {
    for key in &report.environment.defaulted {
        eprintln!("{key} not set, using default");
    }
    if report.environment.agent_name.is_none() {
        eprintln!("{} not set", crate::config::AGENT_NAME);
    }
    eprintln!("{}", summary_line(report));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::run_checks;
    use crate::config::BuildEnv;
    use crate::types::CheckKind;

    fn report_for(pairs: &[(&str, &str)]) -> Report {
        let env = BuildEnv::from_lookup(|key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        });
        let checks = run_checks(&env);
        Report::new(env, checks)
    }

    #[test]
    fn test_render_local_defaults() {
        let lines = render_text(&report_for(&[]));
        assert_eq!(
            lines,
            vec![
                "=== Build Test Application ===",
                "Environment: local",
                "Build Number: local-build",
                "Source Branch: unknown",
                "",
                "✅ Math test passed",
                "✅ String test passed",
                "⚠️  Agent name not set (expected in pipeline context)",
                "✅ All checks passed!",
            ]
        );
    }

    #[test]
    fn test_render_with_agent() {
        let lines = render_text(&report_for(&[
            ("BUILD_ENV", "ci"),
            ("AGENT_NAME", "agent-7"),
        ]));
        assert_eq!(lines[1], "Environment: ci");
        assert_eq!(lines[7], "✅ Running on agent: agent-7");
        assert_eq!(lines.last().map(String::as_str), Some(SUCCESS_BANNER));
    }

    #[test]
    fn test_render_failure_banner() {
        let env = BuildEnv::from_lookup(|_| None);
        let checks = vec![CheckResult {
            name: "math".to_string(),
            kind: CheckKind::Mandatory,
            status: CheckStatus::Failed,
            message: "Math test failed".to_string(),
        }];
        let lines = render_text(&Report::new(env, checks));
        assert_eq!(lines[5], "❌ Math test failed");
        assert_eq!(lines[6], FAILURE_BANNER);
    }

    #[test]
    fn test_json_shape() {
        let report = report_for(&[("AGENT_NAME", "agent-7")]);
        let v = serde_json::to_value(&report).unwrap();
        assert_eq!(v["passed"], true);
        assert_eq!(v["environment"]["agent_name"], "agent-7");
        assert_eq!(v["checks"].as_array().map(Vec::len), Some(3));
        assert_eq!(v["checks"][0]["kind"], "mandatory");
        assert!(v["generated_at"].is_string());
    }

    #[test]
    fn test_summary_counts_warnings_separately() {
        let report = report_for(&[]);
        assert_eq!(summary_line(&report), "Ran 3 checks: 2 passed, 1 warning, 0 failed");
    }

    #[test]
    fn test_summary_with_agent_set() {
        let report = report_for(&[("AGENT_NAME", "agent-7")]);
        assert_eq!(summary_line(&report), "Ran 3 checks: 3 passed, 0 warnings, 0 failed");
    }
}
