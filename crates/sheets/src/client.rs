//! HTTP client for the spreadsheet API.

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde_json::{Map, Value};
use tally_shared::SheetConfig;
use tracing::{debug, error, info};

use crate::error::SheetError;
use crate::store::{RowStore, SheetTable};

/// Row store backed by the spreadsheet REST API.
///
/// Each tab lives at `{base_url}/{user}/{project}/{tab}`; `GET` lists rows
/// and `POST` appends one.
#[derive(Clone)]
pub struct SheetyClient {
    http: reqwest::Client,
    config: SheetConfig,
}

impl std::fmt::Debug for SheetyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetyClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl SheetyClient {
    /// Creates a client with a default HTTP client.
    #[must_use]
    pub fn new(config: SheetConfig) -> Self {
        Self::with_http_client(reqwest::Client::new(), config)
    }

    /// Creates a client reusing an existing HTTP client.
    #[must_use]
    pub const fn with_http_client(http: reqwest::Client, config: SheetConfig) -> Self {
        Self { http, config }
    }

    fn endpoint(&self, table: &SheetTable) -> String {
        self.config.endpoint(&table.tab)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, SheetError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(SheetError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl RowStore for SheetyClient {
    async fn list_rows(&self, table: &SheetTable) -> Result<Vec<Value>, SheetError> {
        let url = self.endpoint(table);

        let response = self
            .http
            .get(&url)
            .header(AUTHORIZATION, self.config.authorization())
            .send()
            .await
            .inspect_err(|e| error!(error = %e, tab = %table.tab, "Failed to fetch rows"))?;
        let response = Self::check(response)
            .await
            .inspect_err(|e| error!(error = %e, tab = %table.tab, "Row store rejected listing"))?;

        let mut body: Value = response.json().await?;
        let rows = match body.get_mut(&table.collection_key).map(Value::take) {
            Some(Value::Array(rows)) => rows,
            Some(other) => {
                return Err(SheetError::Decode(format!(
                    "`{}` is not a list: {other}",
                    table.collection_key
                )));
            }
            None => return Err(SheetError::MissingCollection(table.collection_key.clone())),
        };

        debug!(tab = %table.tab, count = rows.len(), "Fetched rows");
        Ok(rows)
    }

    async fn append_row(&self, table: &SheetTable, row: Value) -> Result<(), SheetError> {
        let url = self.endpoint(table);
        let mut body = Map::new();
        body.insert(table.record_key.clone(), row);

        let response = self
            .http
            .post(&url)
            .header(AUTHORIZATION, self.config.authorization())
            .json(&body)
            .send()
            .await
            .inspect_err(|e| error!(error = %e, tab = %table.tab, "Failed to append row"))?;
        let status = response.status();
        Self::check(response)
            .await
            .inspect_err(|e| error!(error = %e, tab = %table.tab, "Row store rejected append"))?;

        info!(tab = %table.tab, status = status.as_u16(), "Appended row");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        Json, Router,
        extract::State,
        http::{HeaderMap, StatusCode},
        routing::get,
    };
    use serde_json::json;
    use tokio::net::TcpListener;

    use super::*;

    #[derive(Clone, Default)]
    struct Recorded {
        auth: Arc<Mutex<Vec<String>>>,
        bodies: Arc<Mutex<Vec<Value>>>,
    }

    async fn list(State(rec): State<Recorded>, headers: HeaderMap) -> Json<Value> {
        let auth = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        rec.auth.lock().unwrap().push(auth);
        Json(json!({
            "expenses": [
                {"month": "March 2024", "item": "Coffee", "category": "Food", "price": 4.5, "id": 2}
            ]
        }))
    }

    async fn append(State(rec): State<Recorded>, Json(body): Json<Value>) -> StatusCode {
        rec.bodies.lock().unwrap().push(body);
        StatusCode::OK
    }

    async fn spawn_server(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn config(base_url: String) -> SheetConfig {
        SheetConfig {
            token: "abc".to_string(),
            project: "budget".to_string(),
            tab: "expenses".to_string(),
            user: "u1".to_string(),
            base_url,
            summaries_tab: "summaries".to_string(),
        }
    }

    #[tokio::test]
    async fn test_list_rows_unwraps_collection() {
        let rec = Recorded::default();
        let router = Router::new()
            .route("/u1/budget/expenses", get(list).post(append))
            .with_state(rec.clone());
        let client = SheetyClient::new(config(spawn_server(router).await));

        let rows = client
            .list_rows(&SheetTable::expenses("expenses"))
            .await
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["item"], "Coffee");
        assert_eq!(rec.auth.lock().unwrap().as_slice(), ["Bearer abc"]);
    }

    #[tokio::test]
    async fn test_append_row_wraps_record() {
        let rec = Recorded::default();
        let router = Router::new()
            .route("/u1/budget/summaries", get(list).post(append))
            .with_state(rec.clone());
        let client = SheetyClient::new(config(spawn_server(router).await));

        client
            .append_row(
                &SheetTable::summaries("summaries"),
                json!({"month": "March 2024", "item": "x", "category": "Summary", "price": "0"}),
            )
            .await
            .unwrap();

        let bodies = rec.bodies.lock().unwrap();
        assert_eq!(bodies.len(), 1);
        assert_eq!(bodies[0]["summary"]["item"], "x");
    }

    #[tokio::test]
    async fn test_missing_collection_is_an_error() {
        let rec = Recorded::default();
        let router = Router::new()
            .route("/u1/budget/other", get(list))
            .with_state(rec);
        let client = SheetyClient::new(config(spawn_server(router).await));

        let result = client
            .list_rows(&SheetTable::new("other", "others", "other"))
            .await;

        assert!(matches!(result, Err(SheetError::MissingCollection(ref k)) if k == "others"));
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let router = Router::new().route(
            "/u1/budget/expenses",
            get(|| async { (StatusCode::UNAUTHORIZED, "bad token") }),
        );
        let client = SheetyClient::new(config(spawn_server(router).await));

        let result = client.list_rows(&SheetTable::expenses("expenses")).await;

        assert!(matches!(
            result,
            Err(SheetError::Status { status: 401, ref body }) if body == "bad token"
        ));
    }

    #[tokio::test]
    async fn test_unreachable_store() {
        let client = SheetyClient::new(config("http://127.0.0.1:9".to_string()));

        let result = client
            .append_row(&SheetTable::expenses("expenses"), json!({}))
            .await;

        assert!(matches!(result, Err(SheetError::Request(_))));
    }
}
