use denorm_eval::{EvaluationReport, LineAlignment};

const RULE_WIDTH: usize = 43;
/// The first two rows (Sentence, Word) are set apart from the category rows.
const LEADING_ROWS: usize = 2;

pub fn format_report(report: &EvaluationReport) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    let mut lines = Vec::new();

    lines.push(rule.clone());
    lines.push(format!("{:<16}{:>8}{:>10}{:>9}", "TYPE", "ERRORS", "TOTAL", "RATE"));
    lines.push(rule.clone());
    for (index, rate) in report.rates.iter().enumerate() {
        if index == LEADING_ROWS {
            lines.push(rule.clone());
        }
        lines.push(format!(
            "{:<16}{:>8}{:>10}{:>8.2}%",
            rate.label, rate.errors, rate.total, rate.rate_percent
        ));
    }
    lines.push(rule.clone());

    let dropped = report.meta.dropped_lines;
    if !dropped.is_empty() {
        lines.push(format!("\n{rule}"));
        lines.push("UNPAIRED LINES (not evaluated):".to_string());
        lines.push(rule.clone());
        lines.push(format!("{:<16}{:>27}", "Reference:", dropped.reference));
        lines.push(format!("{:<16}{:>27}", "Hypothesis:", dropped.hypothesis));
        lines.push(rule.clone());
    }

    if let Some(charsets) = report.charsets.as_ref() {
        lines.push(format!("\n{rule}"));
        lines.push("CHARACTER SETS:".to_string());
        lines.push(rule.clone());
        lines.push(format!("{:<16}{:>8}", "Copy chars:", charsets.copy_chars));
        lines.push(format!("{:<16}{:>8}", "Punctuation:", charsets.punctuation));
        lines.push(format!("{:<16}{:>8}", "Symbols:", charsets.symbols));
        lines.push(rule);
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Every alignment row on its own line, each followed by a space and a
/// blank line.
pub fn format_alignments(alignments: &[LineAlignment]) -> String {
    let mut out = String::from("\nAligned errors:\n");
    for line_alignment in alignments {
        for row in line_alignment.alignment.rows() {
            out.push_str(&row.join(" "));
            out.push_str(" \n\n");
        }
    }
    out
}
