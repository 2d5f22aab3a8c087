//! Generic error page.

use super::{escape, page};

/// Renders the page shown when a request fails.
pub fn render(code: &str, message: &str) -> String {
    page(
        "Error",
        &format!(
            r#"    <div class="centered">
        <h2>Error</h2>
        <p class="error">{message}</p>
        <p><small>{code}</small></p>
    </div>"#,
            message = escape(message),
            code = escape(code),
        ),
    )
}
