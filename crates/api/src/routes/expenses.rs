//! Add-expense form.

use axum::{Form, Router, extract::State, response::Html, routing::get};
use chrono::Local;
use tally_core::expense::NewExpense;
use tracing::info;

use crate::{AppState, error::ApiError, views};

/// Creates the expense form routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(show_form).post(add_expense))
}

async fn show_form() -> Html<String> {
    Html(views::expense_form::render(None))
}

async fn add_expense(
    State(state): State<AppState>,
    Form(expense): Form<NewExpense>,
) -> Result<Html<String>, ApiError> {
    let record = expense.stamp(Local::now().date_naive());
    state.expenses.append(&record).await?;

    info!(month = %record.month, item = %record.item, "Expense added");
    let message = "Expense added successfully!";
    Ok(Html(views::expense_form::render(Some(message))))
}
