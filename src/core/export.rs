//! Markup export of an assembled patch note

use super::fragment::Fragment;

/// Join fragment markup into one HTML block, one fragment per line
pub fn to_html(fragments: &[Fragment]) -> String {
    let mut html = String::from("<div class=\"patch-note\">\n");
    for fragment in fragments {
        html.push_str(&fragment.to_html());
        html.push('\n');
    }
    html.push_str("</div>\n");
    html
}

/// Plain text rendering, one fragment per line
pub fn to_text(fragments: &[Fragment]) -> String {
    fragments
        .iter()
        .map(Fragment::text)
        .collect::<Vec<_>>()
        .join("\n")
}
