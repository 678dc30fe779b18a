//! End-of-run report

use crate::scrape::RunReport;

/// Formats the run report as plain text
pub fn format_report(report: &RunReport) -> String {
    let mut out = String::new();

    out.push_str("=== Policy-Scout Report ===\n\n");
    out.push_str(&format!("Homepage: {}\n", report.page_url));
    out.push_str(&format!("  External resources: {}\n", report.resources));
    out.push_str(&format!("  Hyperlinks: {}\n", report.links));
    out.push('\n');

    out.push_str(&format!("Followed: {}\n", report.target_url));
    out.push_str(&format!("  Fragments read: {}\n", report.fragments_consumed));
    out.push_str(&format!(
        "  Terminator reached: {}\n",
        if report.terminator_reached { "yes" } else { "no" }
    ));
    out.push_str(&format!(
        "  Words counted: {} ({} distinct)\n",
        report.total_words, report.distinct_words
    ));

    if !report.top_words.is_empty() {
        out.push_str("\nMost frequent words:\n");
        for (word, count) in &report.top_words {
            let shown = if word.is_empty() { "(empty)" } else { word.as_str() };
            out.push_str(&format!("  {:<20} {}\n", shown, count));
        }
    }

    out.push_str("\nFiles:\n");
    for path in [
        &report.resources_path,
        &report.links_path,
        &report.frequency_path,
    ] {
        out.push_str(&format!("  {}\n", path.display()));
    }

    out
}

/// Prints the run report to stdout
pub fn print_report(report: &RunReport) {
    print!("{}", format_report(report));
}
