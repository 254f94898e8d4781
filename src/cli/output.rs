//! Output formatting utilities

use crate::application::{FileBalance, FileScan, MarkerReport};

/// Format scan results for display. Positions are shown 1-based.
pub fn format_scan(scans: &[FileScan]) -> String {
    if scans.is_empty() {
        return "No markers found".to_string();
    }

    let mut output = String::new();
    for scan in scans {
        output.push_str(&format!("{}\n", scan.path.display()));
        if scan.markers.is_empty() {
            output.push_str("  no markers\n");
            continue;
        }
        for located in &scan.markers {
            output.push_str(&format!(
                "  {}:{}  {}  {}\n",
                located.position.line + 1,
                located.position.column + 1,
                located.occurrence.kind,
                located.occurrence.literal
            ));
        }
    }
    output
}

/// Format a statistics report for display
pub fn format_statistics(report: &MarkerReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("Marker: {}\n", report.name));
    output.push_str(&format!("Total: {}\n", report.statistics.total));
    output.push_str(&format!("Opening: {}\n", report.statistics.opening));
    output.push_str(&format!("Closing: {}\n", report.statistics.closing));
    output.push_str(&format!(
        "Balance: {}\n",
        if report.statistics.unbalanced {
            "unbalanced"
        } else {
            "balanced"
        }
    ));
    output.push_str("Locations:\n");
    for located in &report.locations {
        output.push_str(&format!(
            "  {}:{}  {}\n",
            located.position.line + 1,
            located.position.column + 1,
            located.occurrence.literal
        ));
    }
    output
}

/// Format a balance report for display
pub fn format_check(reports: &[FileBalance]) -> String {
    if reports.is_empty() {
        return "All markers balanced".to_string();
    }

    let mut output = String::new();
    for report in reports {
        output.push_str(&format!("{}\n", report.path.display()));
        for balance in &report.unbalanced {
            output.push_str(&format!(
                "  {}  opening {} / closing {}\n",
                balance.name, balance.opening, balance.closing
            ));
        }
    }
    output
}

/// Format a list of marker literals for display
pub fn format_tag_list(literals: &[String]) -> String {
    if literals.is_empty() {
        return "No markers found".to_string();
    }

    let mut output = String::new();
    for literal in literals {
        output.push_str(literal);
        output.push('\n');
    }
    output
}
