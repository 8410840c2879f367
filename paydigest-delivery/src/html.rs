//! HTML digest composition.
//!
//! The digest body is a heading followed by one section per account with
//! activity: the account name as a subheading and its lines as an
//! unordered list. Lines are already HTML fragments and are embedded
//! without further escaping.

use paydigest_core::ReportResult;

/// Subject line for the digest email.
pub const REPORT_SUBJECT: &str = "Stripe Report";

/// Top-level heading of the digest body.
const REPORT_HEADING: &str = "<h2>Stripe report for the last 24 hrs</h2>";

/// Renders the digest body. Accounts without lines are omitted.
pub fn render_html(report: &ReportResult) -> String {
    let mut html = String::from(REPORT_HEADING);

    for (name, lines) in report.iter() {
        if lines.is_empty() {
            continue;
        }

        html.push_str(&format!("<h3>{name}</h3>"));
        html.push_str("<ul>");
        for line in lines {
            html.push_str(&format!("<li>{line}</li>"));
        }
        html.push_str("</ul>");
    }

    html
}

// ============================================================================
// Tests
// ============================================================================
