//! Components table

use crate::model::Component;
use crate::util::escape_html;

/// Render the "Part Name / Function / Datasheet Link" table
pub fn components_table(components: &[Component]) -> String {
    if components.is_empty() {
        return r#"<div class="empty"><p>No components available.</p></div>"#.to_string();
    }

    let rows: String = components
        .iter()
        .map(|component| {
            let datasheet = match component.datasheet_url() {
                Some(url) => format!(
                    r#"<a href="{}" target="_blank" rel="noopener noreferrer">View</a>"#,
                    escape_html(url)
                ),
                None => r#"<span class="muted">N/A</span>"#.to_string(),
            };
            format!(
                "            <tr>\n                <td><strong>{}</strong></td>\n                <td class=\"function\">{}</td>\n                <td>{}</td>\n            </tr>\n",
                escape_html(&component.name),
                escape_html(&component.function),
                datasheet
            )
        })
        .collect();

    format!(
        r#"<table class="components">
        <thead>
            <tr>
                <th>Part Name</th>
                <th>Function</th>
                <th>Datasheet Link</th>
            </tr>
        </thead>
        <tbody>
{rows}        </tbody>
    </table>"#
    )
}
