//! Example code block

use crate::model::{CodeBlockState, COPY_FEEDBACK_MS};
use crate::syntax::{highlight_html, LanguageId};
use crate::util::escape_html;

/// Header label for a language tag; unknown tags are shown as written
fn language_label(tag: &str) -> String {
    let language = LanguageId::from_tag(tag);
    if language.has_highlighting() {
        language.display_name().to_string()
    } else {
        tag.to_string()
    }
}

/// Render highlighted code with a language label and copy button
pub fn code_block(code: &str, language: &str, state: &CodeBlockState) -> String {
    format!(
        r#"<div class="code-block" data-feedback-ms="{COPY_FEEDBACK_MS}">
            <header>
                <span class="language">{language}</span>
                <button class="copy-button" type="button">{button}</button>
            </header>
            <pre><code>{code}</code></pre>
        </div>"#,
        language = escape_html(&language_label(language)),
        button = state.button_label(),
        code = highlight_html(code, language),
    )
}
