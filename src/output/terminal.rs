//! Terminal output utilities.
//!
//! Renders a [`SubnetReport`] as the fixed-width labeled lines the binary
//! prints to stdout.

use crate::models::SubnetReport;

/// Labels are left-aligned and padded to this column width.
const LABEL_WIDTH: usize = 10;

/// Format one labeled report line.
///
/// # Arguments
/// * `label` - The line label, colon included
/// * `value` - The value to print after the label column
pub fn format_row(label: &str, value: &str) -> String {
    format!("{label:<width$} {value}", width = LABEL_WIDTH)
}

/// Render the nine report lines, each newline-terminated, in the fixed
/// output order.
pub fn render_report(report: &SubnetReport) -> String {
    let rows = [
        ("Address:", report.addr.to_string()),
        ("Bitmask:", report.prefix_len.to_string()),
        ("Netmask:", report.netmask.to_string()),
        ("Wildcard:", report.wildcard.to_string()),
        ("Network:", report.network.to_string()),
        ("HostMin:", report.host_min.to_string()),
        ("HostMax:", report.host_max.to_string()),
        ("Broadcast:", report.broadcast.to_string()),
        ("Hosts:", report.host_count.to_string()),
    ];

    let mut out = String::new();
    for (label, value) in rows {
        out.push_str(&format_row(label, &value));
        out.push('\n');
    }
    out
}

/// Print the rendered report to stdout.
pub fn print_report(report: &SubnetReport) {
    print!("{}", render_report(report));
}
