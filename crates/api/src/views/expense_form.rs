//! Add-expense form.

use super::{escape, page};

/// Renders the add-expense form, optionally with a confirmation message.
pub fn render(message: Option<&str>) -> String {
    let message = message
        .map(|m| format!(r#"    <p class="success">{}</p>"#, escape(m)))
        .unwrap_or_default();

    page(
        "Expense Tracker",
        &format!(
            r#"    <h2>Add Expense</h2>
    <form method="POST" action="/">
        <div class="form-group">
            <label>Item:</label>
            <input type="text" name="item" required>
        </div>
        <div class="form-group">
            <label>Category:</label>
            <input type="text" name="category" required>
        </div>
        <div class="form-group">
            <label>Price:</label>
            <input type="number" step="0.01" name="price" required>
        </div>
        <button type="submit">Add Expense</button>
    </form>
{message}"#
        ),
    )
}
