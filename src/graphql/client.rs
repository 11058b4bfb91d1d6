// file: src/graphql/client.rs
// description: authenticated graphql-over-http client for the marketplace api
// reference: https://graphql.org/learn/serving-over-http/

use crate::auth::Credentials;
use crate::error::{FetchError, Result};
use crate::graphql::response::GraphQlEnvelope;
use crate::utils::Validator;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

const BODY_EXCERPT_CHARS: usize = 300;

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    variables: Option<Value>,
}

#[derive(Debug, Clone)]
pub struct GraphQlClient {
    client: Client,
    endpoint: String,
    auth_header: String,
}

impl GraphQlClient {
    pub fn new(endpoint: impl Into<String>, credentials: &Credentials) -> Result<Self> {
        let endpoint = endpoint.into();
        Validator::validate_url(&endpoint)?;

        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint,
            auth_header: credentials.basic_auth_header(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Posts one query and decodes its `data` payload into `T`.
    pub async fn execute<T>(&self, query: &str, variables: Option<Value>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let request = GraphQlRequest { query, variables };

        debug!("POST {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header(AUTHORIZATION, &self.auth_header)
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
                body: Validator::truncate_text(&body, BODY_EXCERPT_CHARS),
            });
        }

        Self::decode(&body)
    }

    fn decode<T>(body: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let envelope: GraphQlEnvelope = serde_json::from_str(body).map_err(|e| {
            FetchError::Protocol(format!(
                "response is not a GraphQL JSON document ({}): {}",
                e,
                Validator::truncate_text(body, BODY_EXCERPT_CHARS)
            ))
        })?;

        let messages = envelope.error_messages();
        if !messages.is_empty() {
            return Err(FetchError::GraphQl(messages));
        }

        let data = envelope
            .data
            .ok_or_else(|| FetchError::Protocol("response has no data field".to_string()))?;

        serde_json::from_value(data)
            .map_err(|e| FetchError::Protocol(format!("unexpected data shape: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::response::SearchData;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn credentials() -> Credentials {
        Credentials::new("maker", "secret")
    }

    async fn client_for(server: &MockServer) -> GraphQlClient {
        GraphQlClient::new(format!("{}/graphql", server.uri()), &credentials()).unwrap()
    }

    #[test]
    fn test_rejects_invalid_endpoint() {
        let err = GraphQlClient::new("cults3d.com/graphql", &credentials()).unwrap_err();
        assert!(matches!(err, FetchError::Validation(_)));
    }

    #[test]
    fn test_request_body_omits_missing_variables() {
        let body = serde_json::to_value(GraphQlRequest {
            query: "{ myself { nick } }",
            variables: None,
        })
        .unwrap();
        assert_eq!(body, json!({ "query": "{ myself { nick } }" }));
    }

    #[tokio::test]
    async fn test_execute_sends_auth_and_decodes_data() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/graphql"))
            .and(header("authorization", credentials().basic_auth_header().as_str()))
            .and(body_partial_json(json!({ "variables": { "input": { "q": "dnd" } } })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "search": { "nodes": [{ "name": "Beholder" }] } }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let data: SearchData = client
            .execute("query", Some(json!({ "input": { "q": "dnd" } })))
            .await
            .unwrap();

        let products = data.into_products();
        assert_eq!(products[0].name.as_deref(), Some("Beholder"));
    }

    #[tokio::test]
    async fn test_execute_surfaces_graphql_errors() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "errors": [{ "message": "Not authorized" }]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.execute::<SearchData>("query", None).await.unwrap_err();
        assert!(matches!(err, FetchError::GraphQl(ref m) if m == &vec!["Not authorized".to_string()]));
    }

    #[tokio::test]
    async fn test_execute_rejects_non_json_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.execute::<SearchData>("query", None).await.unwrap_err();
        assert!(matches!(err, FetchError::Protocol(_)));
    }

    #[tokio::test]
    async fn test_execute_reports_http_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.execute::<SearchData>("query", None).await.unwrap_err();
        match err {
            FetchError::Http { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body, "Unauthorized");
            }
            other => panic!("expected HTTP error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_execute_missing_data_is_protocol_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.execute::<SearchData>("query", None).await.unwrap_err();
        assert!(matches!(err, FetchError::Protocol(_)));
    }

    #[tokio::test]
    async fn test_execute_connection_refused_is_transport_error() {
        let client = GraphQlClient::new("http://127.0.0.1:1/graphql", &credentials()).unwrap();
        let err = client.execute::<SearchData>("query", None).await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }
}
