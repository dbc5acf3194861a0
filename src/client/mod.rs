// src/client/mod.rs
use reqwest::header::{CACHE_CONTROL, HeaderValue};
use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::listing::FileRow;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid resource path {path:?}: {source}")]
    BadPath {
        path: String,
        source: url::ParseError,
    },
}

/// HTTP client for a file share server. Consumes exactly two endpoints:
/// the JSON listing, and `DELETE` on a row's resource path.
#[derive(Debug, Clone)]
pub struct ShareClient {
    http: reqwest::Client,
    base: Url,
}

impl ShareClient {
    pub fn new(base: Url) -> Self {
        ShareClient {
            http: reqwest::Client::new(),
            base,
        }
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    fn resolve(&self, path: &str) -> Result<Url, ClientError> {
        self.base.join(path).map_err(|source| ClientError::BadPath {
            path: path.to_string(),
            source,
        })
    }

    /// Fetch the current listing. Sent with `Cache-Control: no-cache` so
    /// the rows reflect the server's state, not an intermediary's.
    pub async fn fetch_listing(&self) -> Result<Vec<FileRow>, ClientError> {
        let url = self.resolve("listing.json")?;
        debug!(%url, "fetching listing");
        let rows = self
            .http
            .get(url)
            .header(CACHE_CONTROL, HeaderValue::from_static("no-cache"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(rows)
    }

    /// Issue `DELETE` for one resource path. Ok(true) only for a fully
    /// completed exchange with status exactly 200; any other status is
    /// Ok(false), transport failures are Err.
    pub async fn delete(&self, path: &str) -> Result<bool, ClientError> {
        let url = self.resolve(path)?;
        debug!(%url, "sending delete");
        let response = self.http.delete(url).send().await?;
        Ok(response.status() == StatusCode::OK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, Method, Uri};
    use axum::routing::{any, get};
    use axum::{Json, Router};
    use tokio::net::TcpListener;
    use tokio::sync::mpsc;

    async fn spawn_server(app: Router) -> ShareClient {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        ShareClient::new(format!("http://{}", addr).parse().unwrap())
    }

    fn capture_app(
        status: StatusCode,
    ) -> (Router, mpsc::UnboundedReceiver<(Method, String)>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let app = Router::new().route(
            "/*path",
            any(move |method: Method, uri: Uri| {
                let tx = tx.clone();
                async move {
                    let _ = tx.send((method, uri.path().to_string()));
                    status
                }
            }),
        );
        (app, rx)
    }

    #[tokio::test]
    async fn delete_targets_the_exact_resource_path() {
        let (app, mut rx) = capture_app(StatusCode::OK);
        let client = spawn_server(app).await;

        let ok = client.delete("/files/a.txt").await.unwrap();
        assert!(ok);

        let (method, path) = rx.recv().await.unwrap();
        assert_eq!(method, Method::DELETE);
        assert_eq!(path, "/files/a.txt");
    }

    #[tokio::test]
    async fn only_status_200_counts_as_success() {
        for status in [
            StatusCode::NO_CONTENT,
            StatusCode::NOT_FOUND,
            StatusCode::INTERNAL_SERVER_ERROR,
        ] {
            let (app, _rx) = capture_app(status);
            let client = spawn_server(app).await;
            let ok = client.delete("/files/a.txt").await.unwrap();
            assert!(!ok, "status {} must not count as success", status);
        }
    }

    #[tokio::test]
    async fn delete_transport_failure_is_an_error() {
        // Nothing listens here.
        let client = ShareClient::new("http://127.0.0.1:1".parse().unwrap());
        assert!(client.delete("/files/a.txt").await.is_err());
    }

    #[tokio::test]
    async fn fetch_listing_parses_rows_and_bypasses_caches() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let app = Router::new().route(
            "/listing.json",
            get(move |headers: HeaderMap| {
                let tx = tx.clone();
                async move {
                    let cache = headers
                        .get("cache-control")
                        .and_then(|v| v.to_str().ok())
                        .map(String::from);
                    let _ = tx.send(cache);
                    Json(serde_json::json!([
                        {"name": "a.txt", "url": "/files/a.txt", "size": 42, "modified": 1_724_700_000},
                        {"name": "b.txt", "url": "/files/b.txt"}
                    ]))
                }
            }),
        );
        let client = spawn_server(app).await;

        let rows = client.fetch_listing().await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "a.txt");
        assert_eq!(rows[0].url, "/files/a.txt");
        assert_eq!(rows[0].size, 42);
        assert_eq!(rows[0].modified, Some(1_724_700_000));
        // Missing size and modified fall back to defaults.
        assert_eq!(rows[1].size, 0);
        assert_eq!(rows[1].modified, None);

        assert_eq!(rx.recv().await.unwrap().as_deref(), Some("no-cache"));
    }
}
