use crate::error::Result;
use triagedesk_types::{Message, MessageFilter, MessageStatus, Statistics};

/// The backend endpoint seam the controller talks through.
///
/// Implemented by [`crate::ApiClient`] for real HTTP and by in-memory fakes
/// in controller tests.
#[allow(async_fn_in_trait)]
pub trait MessageApi {
    /// Fetch the message list with both filters applied server-side
    async fn list_messages(&self, filter: &MessageFilter) -> Result<Vec<Message>>;

    /// Change a message's workflow status; `assigned_to` travels as-is
    /// (`null` when `None`)
    async fn update_status(
        &self,
        message_id: u64,
        status: MessageStatus,
        assigned_to: Option<&str>,
    ) -> Result<()>;

    /// Submit a new emergency message; the backend performs all analysis
    /// and scoring before it shows up in a later list fetch
    async fn submit_message(&self, text: &str) -> Result<()>;

    /// Fetch the summary counters for the dashboard tiles
    async fn fetch_statistics(&self) -> Result<Statistics>;

    /// Source URL for embedding or fetching a media attachment. The
    /// default is the backend-relative form; HTTP implementations prepend
    /// their base so the URL resolves outside the backend's own pages.
    fn media_url(&self, media_id: &str) -> String {
        format!("/api/media/{}", media_id)
    }
}
