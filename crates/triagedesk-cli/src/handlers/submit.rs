use anyhow::Result;
use owo_colors::OwoColorize;
use triagedesk_client::{ApiClient, MessageApi};

pub async fn handle(client: &ApiClient, text: &str) -> Result<()> {
    let text = text.trim();
    if text.is_empty() {
        anyhow::bail!("Please enter a message");
    }

    client.submit_message(text).await?;
    println!("{}", "Message processed successfully".green());
    Ok(())
}
