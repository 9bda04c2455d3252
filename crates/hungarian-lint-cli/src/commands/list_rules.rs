//! List rules command implementation.

use hungarian_lint_rules::all_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<10} {:<25} Description", "Code", "Name");
    println!("{}", "-".repeat(80));

    for rule in all_rules() {
        println!(
            "{:<10} {:<25} {}",
            rule.code(),
            rule.name(),
            rule.description()
        );
    }

    println!("\nOptions ([rules.hungarian-notation]):");
    println!("  ignore             - names that always pass, matched literally");
    println!("  only_declarations  - skip parameters of function expressions and arrows");
    println!("  mode               - \"construct\" (default) or \"identifier\"");

    println!("\nOverride from the command line, e.g.:");
    println!("  hungarian-lint check --ignore e --ignore oldName");
    println!("  hungarian-lint check --mode identifier --only-declarations");
}
