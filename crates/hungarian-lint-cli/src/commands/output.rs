//! Shared output formatting for lint results.

use anyhow::Result;
use hungarian_lint_core::{LintResult, Severity, Violation};

use crate::OutputFormat;

/// Print lint results in the specified format.
pub fn print(result: &LintResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => print_compact(result),
    }
    Ok(())
}

fn print_text(result: &LintResult) {
    let (errors, warnings, infos) = result.count_by_severity();

    for violation in &result.violations {
        print!("{}", render_text(violation));
        println!();
    }

    let summary_color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    println!(
        "{}Found {} error(s), {} warning(s), {} info(s) in {} file(s)\x1b[0m",
        summary_color, errors, warnings, infos, result.files_checked
    );

    if !result.skipped.is_empty() {
        println!(
            "\x1b[33mSkipped {} file(s) without a valid tree:\x1b[0m",
            result.skipped.len()
        );
        for path in &result.skipped {
            println!("  {}", path.display());
        }
    }
}

/// Renders one violation as a colored text block.
fn render_text(violation: &Violation) -> String {
    let severity_indicator = match violation.severity {
        Severity::Error => "\x1b[31merror\x1b[0m",
        Severity::Warning => "\x1b[33mwarning\x1b[0m",
        Severity::Info => "\x1b[34minfo\x1b[0m",
    };

    let mut out = format!(
        "{} {} at {}:{}:{}\n  {}: {}\n",
        violation.code,
        violation.rule,
        violation.location.file.display(),
        violation.location.line,
        violation.location.column,
        severity_indicator,
        violation.message,
    );
    for label in &violation.labels {
        out.push_str(&format!(
            "  --> {}:{}: {}\n",
            label.location.line, label.location.column, label.message
        ));
    }
    if let Some(suggestion) = &violation.suggestion {
        out.push_str(&format!("  = help: {}\n", suggestion.message));
    }
    out
}

fn print_json(result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

fn print_compact(result: &LintResult) {
    for violation in &result.violations {
        println!("{violation}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hungarian_lint_core::{Label, Location, Suggestion};
    use std::path::PathBuf;

    fn violation() -> Violation {
        let file = PathBuf::from("src/app.estree.json");
        Violation::new(
            "HN001",
            "hungarian-notation",
            Severity::Warning,
            Location::new(file.clone(), 2, 1),
            "'foo': Variable not named after hungarian notation [VariableDeclaration]",
        )
        .with_label(Label::new(Location::new(file, 2, 5), "identifier `foo`"))
        .with_suggestion(Suggestion::new("Use a type prefix"))
    }

    #[test]
    fn text_block_includes_label_and_help() {
        let text = render_text(&violation());
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "HN001 hungarian-notation at src/app.estree.json:2:1");
        assert!(lines[1].ends_with(
            ": 'foo': Variable not named after hungarian notation [VariableDeclaration]"
        ));
        assert_eq!(lines[2], "  --> 2:5: identifier `foo`");
        assert_eq!(lines[3], "  = help: Use a type prefix");
    }

    #[test]
    fn json_output_shape() {
        let result = LintResult {
            violations: vec![violation()],
            files_checked: 1,
            ..LintResult::default()
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["files_checked"], 1);
        assert_eq!(json["violations"][0]["code"], "HN001");
        assert_eq!(json["violations"][0]["severity"], "warning");
        assert_eq!(json["violations"][0]["labels"][0]["location"]["column"], 5);
    }
}
