use anyhow::Result;
use owo_colors::OwoColorize;
use triagedesk_board::markup::format_timestamp;
use triagedesk_client::{ApiClient, MessageApi};
use triagedesk_types::{Message, MessageFilter, UrgencyLevel};

pub async fn handle(client: &ApiClient, id: u64) -> Result<()> {
    let messages = client.list_messages(&MessageFilter::default()).await?;

    match messages.iter().find(|m| m.id == id) {
        Some(msg) => print_detail(client, msg),
        None => {
            // Same outcome as the dashboard's missing-detail state
            println!("Message {} is no longer available.", id);
        }
    }

    Ok(())
}

fn print_detail(client: &ApiClient, msg: &Message) {
    let analysis = &msg.analysis;
    let priority = &msg.priority;
    let breakdown = &priority.score_breakdown;

    println!("{} #{}", "Message".bold(), msg.id);
    println!("  {}", msg.original_message);
    println!();

    println!("{}", "Analysis".bold());
    println!("  Need:             {}", analysis.need_type);
    println!("  Location:         {}", analysis.location);
    println!("  Base urgency:     {}/10", analysis.urgency_base_score);
    println!(
        "  Immediate danger: {}",
        if analysis.has_immediate_danger {
            "YES".bright_red().to_string()
        } else {
            "no".to_string()
        }
    );
    if !analysis.vulnerable_groups.is_empty() {
        println!("  Vulnerable:       {}", analysis.vulnerable_groups.join(", "));
    }
    if let Some(count) = analysis.estimated_people_count {
        println!("  Estimated people: {}", count);
    }
    if !analysis.keywords_found.is_empty() {
        println!("  Keywords:         {}", analysis.keywords_found.join(", "));
    }
    println!();

    let urgency = priority.urgency_level;
    let urgency_label = match urgency {
        UrgencyLevel::Critical => urgency.as_str().bright_red().bold().to_string(),
        UrgencyLevel::High => urgency.as_str().red().to_string(),
        UrgencyLevel::Medium => urgency.as_str().yellow().to_string(),
        UrgencyLevel::Low => urgency.as_str().green().to_string(),
    };
    println!("{}", "Priority".bold());
    println!("  {} ({}/100)", urgency_label, priority.total_score);
    println!("    base urgency     {:.1}", breakdown.base_urgency);
    println!("    time sensitivity {:.1}", breakdown.time_sensitivity);
    println!("    vulnerable       {:.1}", breakdown.vulnerable_groups);
    println!("    immediate danger {:.1}", breakdown.immediate_danger);
    println!("    people count     {:.1}", breakdown.people_count);
    for reason in &priority.priority_reasons {
        println!("  • {}", reason);
    }
    println!();

    println!("{}", "Status".bold());
    println!("  {}", msg.status.as_str().cyan());
    println!("  Received: {}", format_timestamp(msg.received_at.as_ref()));
    if let Some(who) = &msg.assigned_to {
        println!("  Assigned to: {}", who);
    }
    if let Some(ts) = &msg.resolved_at {
        println!("  Resolved: {}", format_timestamp(Some(ts)));
    }
    if let Some(notes) = msg.notes.as_deref() {
        if !notes.is_empty() {
            println!("  Notes: {}", notes);
        }
    }

    if let Some(media) = &msg.media {
        println!();
        println!("{}", "Media".bold());
        println!("  {} ({})", client.media_url(&media.media_id), media.file_type);
        if let Some(vision) = &media.vision_analysis {
            println!("  Vision: {}", vision.vision_description);
            println!(
                "  Confidence {}%, detected urgency {}/10",
                vision.confidence_score, vision.detected_urgency
            );
            if let Some(people) = vision.detected_people {
                println!("  People detected: {}", people);
            }
            if vision.requires_review {
                println!("  {}", "Flagged for manual review".bright_yellow());
            }
        }
    }
}
