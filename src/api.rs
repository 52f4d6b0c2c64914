use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::error::SearchError;
use crate::models::{GolfPackage, SearchRequest};

/// Run a package search against the backend.
///
/// One attempt, no retry. Any non-2xx status, transport failure or
/// undecodable body comes back as a [`SearchError`].
pub async fn search_packages(
    config: &ApiConfig,
    request: &SearchRequest,
) -> Result<Vec<GolfPackage>, SearchError> {
    let url = config.search_url();
    debug!(%url, ?request, "Submitting package search");

    let result = send_search(&url, request).await;
    match &result {
        Ok(packages) => debug!(count = packages.len(), "Search returned packages"),
        Err(e) => warn!(error = %e, "Package search failed"),
    }
    result
}

async fn send_search(url: &str, request: &SearchRequest) -> Result<Vec<GolfPackage>, SearchError> {
    let response = reqwest::Client::new()
        .post(url)
        .json(request)
        .send()
        .await?
        .error_for_status()?;

    let body = response.text().await?;
    let packages = serde_json::from_str(&body)?;
    Ok(packages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PartySize;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Answer a single HTTP request with `status` and `body`; the handle
    /// yields the raw request that was received.
    async fn serve_once(status: &'static str, body: &'static str) -> (ApiConfig, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut chunk = [0u8; 1024];
            loop {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&chunk[..n]);
                if request_complete(&raw) {
                    break;
                }
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            String::from_utf8_lossy(&raw).to_string()
        });

        (ApiConfig::new(format!("http://{}", addr)), handle)
    }

    fn request_complete(raw: &[u8]) -> bool {
        let text = String::from_utf8_lossy(raw);
        let Some(header_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..header_end]
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        raw.len() >= header_end + 4 + content_length
    }

    fn florida_request() -> SearchRequest {
        SearchRequest {
            max_price: 750,
            party_size: PartySize::Any,
            location: "Florida".to_string(),
        }
    }

    #[tokio::test]
    async fn test_posts_json_body_to_search_path() {
        let (config, server) = serve_once("200 OK", "[]").await;

        let result = search_packages(&config, &florida_request()).await;
        let raw = server.await.unwrap();

        assert_eq!(result, Ok(vec![]));
        assert!(raw.starts_with("POST /api/search HTTP/1.1\r\n"), "request was: {}", raw);

        let (_, body) = raw.split_once("\r\n\r\n").unwrap();
        let body: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(
            body,
            json!({"maxPrice": 750, "partySize": "any", "location": "Florida"})
        );
    }

    #[tokio::test]
    async fn test_decodes_packages() {
        let (config, server) = serve_once(
            "200 OK",
            r#"[{"id": 4, "name": "Bandon Dunes", "location": "Oregon", "price": {"min": 900, "max": 1400}}]"#,
        )
        .await;

        let packages = search_packages(&config, &florida_request()).await.unwrap();
        server.await.unwrap();

        assert_eq!(packages.len(), 1);
        assert_eq!(packages[0].id, 4);
        assert_eq!(packages[0].price.min(), 900);
    }

    #[tokio::test]
    async fn test_non_2xx_is_status_error() {
        let (config, server) = serve_once("500 Internal Server Error", r#"{"error": "boom"}"#).await;

        let result = search_packages(&config, &florida_request()).await;
        server.await.unwrap();

        assert_eq!(result, Err(SearchError::Status(500)));
    }

    #[tokio::test]
    async fn test_bad_json_is_decode_error() {
        let (config, server) = serve_once("200 OK", "{not json").await;

        let result = search_packages(&config, &florida_request()).await;
        server.await.unwrap();

        assert!(matches!(result, Err(SearchError::Decode(_))), "got {:?}", result);
    }

    #[tokio::test]
    async fn test_refused_connection_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config = ApiConfig::new(format!("http://{}", addr));
        let result = search_packages(&config, &florida_request()).await;

        assert!(matches!(result, Err(SearchError::Network(_))), "got {:?}", result);
    }

    #[tokio::test]
    async fn test_every_failure_shows_same_message() {
        let (config, server) = serve_once("404 Not Found", "").await;

        let err = search_packages(&config, &florida_request()).await.unwrap_err();
        server.await.unwrap();

        assert_eq!(err, SearchError::Status(404));
        assert_eq!(err.user_message(), crate::error::SEARCH_FAILED_MESSAGE);
    }
}
