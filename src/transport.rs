//! Outbound request to the form-processing endpoint

use tracing::debug;
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("request task ended before reporting a result")]
    Abandoned,
}

/// Send the submission as a plain GET. Any HTTP response counts as delivered,
/// the status and body are never inspected.
pub async fn send(client: &reqwest::Client, url: Url) -> Result<(), TransportError> {
    let response = client.get(url).send().await?;
    debug!(status = %response.status(), "Form endpoint responded");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn exec_url(base: &str) -> Url {
        Url::parse_with_params(
            &format!("{}/macros/s/test/exec", base),
            &[
                ("nombre", "Ana"),
                ("email", "ana@test.com"),
                ("asunto", "Mensaje de Ana"),
                ("mensaje", "Hola"),
            ],
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_sends_single_get_with_query() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/macros/s/test/exec"))
            .and(query_param("nombre", "Ana"))
            .and(query_param("email", "ana@test.com"))
            .and(query_param("asunto", "Mensaje de Ana"))
            .and(query_param("mensaje", "Hola"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let result = send(&client, exec_url(&server.uri())).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_error_status_counts_as_delivered() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(1)
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let result = send(&client, exec_url(&server.uri())).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        // Bind a port, then release it so nothing is listening
        let uri = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            format!("http://{}", listener.local_addr().unwrap())
        };

        let client = reqwest::Client::new();
        let result = send(&client, exec_url(&uri)).await;

        assert!(matches!(result, Err(TransportError::Request(_))));
    }
}
