//! Summary save outcome pages.

use super::{escape, page};

/// Renders the confirmation after a summary was saved.
pub fn saved(month: &str) -> String {
    page(
        "Summary Saved",
        &format!(
            r#"    <div class="centered">
        <h2>Success!</h2>
        <p class="success">Summary for {} has been saved to your Google sheet!</p>
        <a href="/stats">&larr; Back to Stats</a>
    </div>"#,
            escape(month)
        ),
    )
}

/// Renders the failure page with the error detail.
pub fn failed(detail: &str) -> String {
    let detail = escape(detail);
    page(
        "Error Saving Summary",
        &format!(
            r#"    <div class="centered">
        <h2>Error</h2>
        <p class="error">Failed to save summary: {detail}</p>
        <p>Error details: {detail}</p>
        <a href="/stats">&larr; Back to Stats</a>
    </div>"#
        ),
    )
}
