use anyhow::Result;
use colored::Colorize;
use std::io::Write;
use std::time::Duration;

use crate::audit::AuditReport;

pub fn write_console_report(
    out: &mut impl Write,
    report: &AuditReport,
    verbose: bool,
    elapsed: Duration,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "📊 Footer Audit Summary".bright_cyan().bold())?;
    writeln!(out, "{}", "=======================".cyan())?;
    writeln!(out, "Render date: {} (year {})", report.date, report.year)?;

    let total = report.checks.len();
    let passed = report.checks.iter().filter(|c| c.passed).count();
    writeln!(out, "Passed: {}", passed.to_string().green())?;
    writeln!(out, "Failed: {}", (total - passed).to_string().red())?;
    writeln!(out, "Total time: {elapsed:?}")?;
    writeln!(out)?;

    for check in &report.checks {
        let status = if check.passed {
            "✅ PASS".green()
        } else {
            "❌ FAIL".red()
        };
        writeln!(out, "{} {}", status, check.name.bold())?;
        if !check.passed || verbose {
            for failure in &check.failures {
                writeln!(out, "     • {}", failure.red())?;
            }
        }
    }
    Ok(())
}

pub fn write_json_report(out: &mut impl Write, report: &AuditReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::CheckResult;

    fn sample() -> AuditReport {
        AuditReport {
            date: "2024-01-01".to_string(),
            year: 2024,
            checks: vec![
                CheckResult {
                    name: "links",
                    passed: true,
                    failures: Vec::new(),
                },
                CheckResult {
                    name: "copyright",
                    passed: false,
                    failures: vec!["missing \"© 2024 Ziverge Inc.\"".to_string()],
                },
            ],
        }
    }

    #[test]
    fn console_report_lists_failures() {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        write_console_report(&mut buf, &sample(), false, Duration::from_millis(3))
            .expect("write report");
        let text = String::from_utf8(buf).expect("utf8");
        assert!(text.contains("Passed: 1"));
        assert!(text.contains("❌ FAIL copyright"));
        assert!(text.contains("© 2024 Ziverge Inc."));
    }

    #[test]
    fn json_report_round_trips_as_value() {
        let mut buf = Vec::new();
        write_json_report(&mut buf, &sample()).expect("write report");
        let value: serde_json::Value = serde_json::from_slice(&buf).expect("json");
        assert_eq!(value["year"], 2024);
        assert_eq!(value["checks"][1]["name"], "copyright");
        assert_eq!(value["checks"][1]["passed"], false);
    }
}
