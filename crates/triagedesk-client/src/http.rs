use crate::api::MessageApi;
use crate::envelope::{self, ListPayload, StatsPayload};
use crate::error::Result;
use serde_json::json;
use triagedesk_types::{Message, MessageFilter, MessageStatus, Statistics};

/// HTTP implementation of [`MessageApi`].
///
/// No retries and no explicit timeout policy: a failed or slow call
/// surfaces as an error for the caller to report, it never hangs the
/// render loop beyond the transport default.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_body(&self, url: &str, query: &[(&str, &str)]) -> Result<String> {
        let response = self.http.get(url).query(query).send().await?;
        Ok(response.text().await?)
    }

    async fn post_body(&self, url: &str, body: &serde_json::Value) -> Result<String> {
        let response = self.http.post(url).json(body).send().await?;
        Ok(response.text().await?)
    }
}

impl MessageApi for ApiClient {
    async fn list_messages(&self, filter: &MessageFilter) -> Result<Vec<Message>> {
        let url = format!("{}/api/messages", self.base_url);
        let body = self
            .get_body(
                &url,
                &[("location", &filter.location), ("status", &filter.status)],
            )
            .await?;
        let payload: ListPayload = envelope::decode(&body)?;
        tracing::debug!(count = payload.messages.len(), "fetched message list");
        Ok(payload.messages)
    }

    async fn update_status(
        &self,
        message_id: u64,
        status: MessageStatus,
        assigned_to: Option<&str>,
    ) -> Result<()> {
        let url = format!("{}/api/update_status", self.base_url);
        let body = json!({
            "message_id": message_id,
            "status": status,
            "assigned_to": assigned_to,
        });
        let body = self.post_body(&url, &body).await?;
        envelope::decode_ack(&body)
    }

    async fn submit_message(&self, text: &str) -> Result<()> {
        let url = format!("{}/api/submit_message", self.base_url);
        let body = json!({ "message": text });
        let body = self.post_body(&url, &body).await?;
        envelope::decode_ack(&body)
    }

    async fn fetch_statistics(&self) -> Result<Statistics> {
        let url = format!("{}/api/statistics", self.base_url);
        let body = self.get_body(&url, &[]).await?;
        let payload: StatsPayload = envelope::decode(&body)?;
        Ok(payload.statistics)
    }

    fn media_url(&self, media_id: &str) -> String {
        format!("{}/api/media/{}", self.base_url, media_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_normalized() {
        let client = ApiClient::new("http://localhost:5000/");
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(
            client.media_url("abc123"),
            "http://localhost:5000/api/media/abc123"
        );
    }
}
