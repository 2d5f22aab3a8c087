//! HTTP layer with Axum routes and server-rendered pages.
//!
//! This crate provides:
//! - The expense form, stats, and summary routes
//! - HTML views
//! - Error-to-page conversion

pub mod error;
pub mod routes;
pub mod views;

use std::sync::Arc;

use axum::Router;
use tally_core::budget::BudgetTable;
use tally_shared::{ReplayCodec, SheetConfig};
use tally_sheets::{ExpenseRepository, RowStore, SheetTable, SummaryPublisher};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Expense rows.
    pub expenses: ExpenseRepository,
    /// Summary rows.
    pub summaries: SummaryPublisher,
    /// Seals report summaries for the save step.
    pub replay: Arc<ReplayCodec>,
    /// Budget ceilings.
    pub budgets: Arc<BudgetTable>,
}

impl AppState {
    /// Builds state around a row store using the tabs named in `sheet`.
    #[must_use]
    pub fn new(store: Arc<dyn RowStore>, sheet: &SheetConfig, replay: ReplayCodec) -> Self {
        Self {
            expenses: ExpenseRepository::new(store.clone(), SheetTable::expenses(&sheet.tab)),
            summaries: SummaryPublisher::new(store, SheetTable::summaries(&sheet.summaries_tab)),
            replay: Arc::new(replay),
            budgets: Arc::new(BudgetTable::standard().clone()),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::app_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
