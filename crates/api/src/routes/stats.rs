//! Monthly statistics page.

use axum::{Form, Router, extract::State, response::Html, routing::get};
use serde::Deserialize;
use tally_core::reports::ReportService;
use tracing::debug;

use crate::{AppState, error::ApiError, views};

/// Month selection posted from the stats page.
#[derive(Debug, Default, Deserialize)]
pub struct StatsForm {
    /// Selected month label; blank means none.
    #[serde(default)]
    pub month: Option<String>,
}

/// Creates the stats routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/stats", get(show_months).post(show_report))
}

async fn show_months(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    render(&state, None).await
}

async fn show_report(
    State(state): State<AppState>,
    Form(form): Form<StatsForm>,
) -> Result<Html<String>, ApiError> {
    render(&state, form.month.as_deref()).await
}

async fn render(state: &AppState, selection: Option<&str>) -> Result<Html<String>, ApiError> {
    let rows = state.expenses.fetch_all().await?;
    let view = ReportService::prepare(selection, &rows, &state.budgets);

    let token = match &view.report {
        Some(report) => {
            debug!(
                month = %report.month,
                categories = report.category_analysis.len(),
                "Report built"
            );
            Some(state.replay.seal(&report.month, &report.summary())?)
        }
        None => None,
    };

    Ok(Html(views::stats::render(&view, token.as_deref())))
}
