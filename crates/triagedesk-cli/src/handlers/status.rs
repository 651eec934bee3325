use anyhow::Result;
use owo_colors::OwoColorize;
use triagedesk_board::ASSIGNED_RESPONDER;
use triagedesk_client::{ApiClient, MessageApi};
use triagedesk_types::MessageStatus;

/// Shared handler for `assign` and `resolve`: assignment carries the
/// responder label, resolution clears it.
pub async fn handle(client: &ApiClient, id: u64, status: MessageStatus) -> Result<()> {
    let assigned_to = match status {
        MessageStatus::Assigned => Some(ASSIGNED_RESPONDER),
        _ => None,
    };

    client.update_status(id, status, assigned_to).await?;
    println!(
        "Message #{} marked {}",
        id,
        status.as_str().cyan().bold()
    );
    Ok(())
}
