use anyhow::{Context, Result, bail};
use futures::StreamExt;
use futures::stream::BoxStream;
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::VertexConfig;
use crate::gemini::{GenerateRequest, StreamChunk};
use crate::sse;

/// Port for the one remote capability: submit a generation request and get
/// back a lazy, finite sequence of response chunks. Tests substitute a fake.
pub trait ChunkSource {
    async fn stream_generate(
        &self,
        request: &GenerateRequest,
    ) -> Result<BoxStream<'static, Result<StreamChunk>>>;
}

#[derive(Debug)]
pub struct VertexClient {
    http_client: Arc<reqwest::Client>,
    config: VertexConfig,
}

impl VertexClient {
    pub fn new(http_client: Arc<reqwest::Client>, config: VertexConfig) -> Self {
        Self { http_client, config }
    }

    fn build_target_url(&self) -> String {
        format!(
            "{}/v1/projects/{}/locations/{}/publishers/google/models/{}:streamGenerateContent?alt=sse",
            self.config.base_url(),
            self.config.project,
            self.config.location,
            self.config.model
        )
    }
}

impl ChunkSource for VertexClient {
    async fn stream_generate(
        &self,
        request: &GenerateRequest,
    ) -> Result<BoxStream<'static, Result<StreamChunk>>> {
        let target_url = self.build_target_url();
        let request_id = uuid::Uuid::new_v4().to_string();

        info!("Submitting generation request to: {}", target_url);
        debug!(
            "request body: {}",
            serde_json::to_string(request).context("failed to serialize request")?
        );

        let response = self
            .http_client
            .post(&target_url)
            .header("Content-Type", "application/json")
            .header("Accept", "text/event-stream")
            .header("x-request-id", &request_id)
            .bearer_auth(&self.config.access_token)
            .json(request)
            .send()
            .await
            .context("generation request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            bail!("generation request rejected (status: {}): {}", status, body);
        }

        Ok(sse::decode_chunks(response.bytes_stream()).boxed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gemini::{Content, Part};

    fn test_config(endpoint: String) -> VertexConfig {
        VertexConfig {
            project: "demo-project".to_string(),
            location: "us-central1".to_string(),
            access_token: "test-token".to_string(),
            model: "gemini-2.5-flash".to_string(),
            endpoint: Some(endpoint),
        }
    }

    fn ping_request() -> GenerateRequest {
        GenerateRequest {
            contents: vec![Content::user(vec![Part::text("ping")])],
            tools: None,
            generation_config: None,
            safety_settings: None,
        }
    }

    #[test]
    fn test_build_target_url() {
        let client = VertexClient::new(
            Arc::new(reqwest::Client::new()),
            test_config("https://example.test".to_string()),
        );
        assert_eq!(
            client.build_target_url(),
            "https://example.test/v1/projects/demo-project/locations/us-central1/publishers/google/models/gemini-2.5-flash:streamGenerateContent?alt=sse"
        );
    }

    #[tokio::test]
    async fn test_stream_generate_decodes_sse_body() {
        let mut server = mockito::Server::new_async().await;
        let body = concat!(
            "data: {\"candidates\": [{\"content\": {\"role\": \"model\", \"parts\": [{\"text\": \"Hello\"}]}}]}\n",
            "\n",
            "data: {\"candidates\": [{\"content\": {\"role\": \"model\", \"parts\": [{\"text\": \" world\"}]}}]}\n",
            "\n",
        );
        let _m = server
            .mock(
                "POST",
                "/v1/projects/demo-project/locations/us-central1/publishers/google/models/gemini-2.5-flash:streamGenerateContent",
            )
            .match_query(mockito::Matcher::UrlEncoded("alt".into(), "sse".into()))
            .match_header("authorization", "Bearer test-token")
            .match_header("accept", "text/event-stream")
            .with_status(200)
            .with_header("content-type", "text/event-stream")
            .with_body(body)
            .create();

        let client =
            VertexClient::new(Arc::new(reqwest::Client::new()), test_config(server.url()));

        let chunks = client
            .stream_generate(&ping_request())
            .await
            .expect("stream should open");
        let texts: Vec<String> = chunks
            .map(|chunk| chunk.expect("chunk should decode").text().unwrap_or_default())
            .collect()
            .await;
        assert_eq!(texts, vec!["Hello", " world"]);
    }

    #[tokio::test]
    async fn test_stream_generate_rejected_status_is_error() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock(
                "POST",
                "/v1/projects/demo-project/locations/us-central1/publishers/google/models/gemini-2.5-flash:streamGenerateContent",
            )
            .match_query(mockito::Matcher::UrlEncoded("alt".into(), "sse".into()))
            .with_status(401)
            .with_body("{\"error\": {\"status\": \"UNAUTHENTICATED\"}}")
            .create();

        let client =
            VertexClient::new(Arc::new(reqwest::Client::new()), test_config(server.url()));

        let result = client.stream_generate(&ping_request()).await;
        let err = result.err().expect("401 must surface as an error");
        assert!(err.to_string().contains("401"));
    }
}
