//! Saving a report summary to the summaries table.

use axum::{
    Form, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::post,
};
use serde::Deserialize;
use tally_core::reports::ReportSummary;
use tally_shared::AppError;
use tracing::{info, warn};

use crate::{AppState, views};

/// Fields posted by the save button on the stats page.
#[derive(Debug, Deserialize)]
pub struct SaveSummaryForm {
    /// Month label the report covers.
    pub month: String,
    /// Sealed report summary.
    pub summary_data: String,
}

/// Creates the summary routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/save_summary", post(save_summary))
}

async fn save_summary(State(state): State<AppState>, Form(form): Form<SaveSummaryForm>) -> Response {
    let summary: ReportSummary = match state.replay.open(&form.summary_data, &form.month) {
        Ok(summary) => summary,
        Err(err) => {
            warn!(month = %form.month, error = %err, "Rejected summary token");
            return failed(AppError::from(err));
        }
    };

    match state.summaries.publish(&form.month, &summary).await {
        Ok(rows) => {
            info!(month = %form.month, rows, "Summary published");
            Html(views::summary::saved(&form.month)).into_response()
        }
        Err(err) => failed(AppError::from(err)),
    }
}

fn failed(err: AppError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Html(views::summary::failed(&err.to_string()))).into_response()
}
