// Colored terminal output for verification results.

use colored::Colorize;

use crate::verify::{Verdict, VerificationResult};

/// Display a verification result in the terminal.
pub fn display_result(result: &VerificationResult) {
    println!(
        "\n{}",
        format!("=== Claim: \"{}\" ===", super::truncate_chars(&result.statement, 80)).bold()
    );
    println!();
    println!("  Verdict:    {}", colorize_verdict(result.verdict));
    println!("  Confidence: {:.2}%", result.confidence);
    println!("  Articles analyzed: {}", result.articles_analyzed);
    println!("  {}", result.reason.dimmed());

    if result.sources.is_empty() {
        return;
    }

    println!("\n  {} supporting sources:", result.sources.len());
    for (i, source) in result.sources.iter().enumerate() {
        println!("    {}. {}", i + 1, source.dimmed());
    }
    println!();
}

/// Colorize a verdict by how strongly the evidence backs the claim.
fn colorize_verdict(verdict: Verdict) -> colored::ColoredString {
    let label = verdict.as_str();
    match verdict {
        Verdict::LikelyTrue => label.green().bold(),
        Verdict::Uncertain => label.yellow(),
        Verdict::LikelyFalse => label.red().bold(),
        Verdict::Inconclusive => label.dimmed(),
        Verdict::Error => label.bright_red(),
    }
}
