use crate::args::OutputFormat;
use anyhow::Result;
use owo_colors::OwoColorize;
use triagedesk_client::{ApiClient, MessageApi};
use triagedesk_types::{Message, MessageFilter, UrgencyLevel};

pub async fn handle(
    client: &ApiClient,
    location: &str,
    status: &str,
    format: OutputFormat,
) -> Result<()> {
    let filter = MessageFilter::new(location, status);
    let messages = client.list_messages(&filter).await?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&messages)?),
        OutputFormat::Plain => print_messages(&messages),
    }

    Ok(())
}

fn print_messages(messages: &[Message]) {
    if messages.is_empty() {
        println!("{}", "No messages found".dimmed());
        return;
    }

    for msg in messages {
        let urgency = msg.priority.urgency_level;
        let level = match urgency {
            UrgencyLevel::Critical => urgency.as_str().bright_red().bold().to_string(),
            UrgencyLevel::High => urgency.as_str().red().to_string(),
            UrgencyLevel::Medium => urgency.as_str().yellow().to_string(),
            UrgencyLevel::Low => urgency.as_str().green().to_string(),
        };

        println!(
            "{:>4}  {:<8} {:<9} {:>5.1}  {:<16} {}",
            format!("#{}", msg.id).yellow(),
            level,
            msg.status.as_str().cyan(),
            msg.priority.total_score,
            truncate_for_display(&msg.analysis.location, 16),
            truncate_for_display(&msg.original_message, 60),
        );
    }
}

/// Normalize free text to one line and cap its display width, respecting
/// UTF-8 character boundaries
fn truncate_for_display(s: &str, max_chars: usize) -> String {
    let normalized = s
        .replace(['\n', '\r'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    if normalized.chars().count() <= max_chars {
        normalized
    } else {
        let truncated: String = normalized.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}
