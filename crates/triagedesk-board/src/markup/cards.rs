use crate::markup::escape::{escape_html, format_timestamp};
use triagedesk_types::Message;

/// Render the card list exactly in the order the backend returned it.
///
/// The backend owns ordering (it sorts by priority); the client never
/// re-sorts. An empty list renders the placeholder and zero cards.
pub fn render_card_list(messages: &[Message]) -> String {
    if messages.is_empty() {
        return r#"<div class="loading">No messages found</div>"#.to_string();
    }

    messages.iter().map(render_card).collect()
}

fn render_card(msg: &Message) -> String {
    let urgency = msg.priority.urgency_level.badge_class();
    let analysis = &msg.analysis;

    let media_badge = if msg.has_media() {
        r#"<span class="badge badge-media">📷 Media</span>"#
    } else {
        ""
    };
    let review_badge = if msg.manually_reviewed {
        r#"<span class="badge badge-reviewed">✓ Reviewed</span>"#
    } else {
        ""
    };

    let vulnerable_line = if analysis.vulnerable_groups.is_empty() {
        String::new()
    } else {
        format!(
            r#"<div class="info-item"><strong>⚠️ Vulnerable:</strong> {}</div>"#,
            escape_html(&analysis.vulnerable_groups.join(", "))
        )
    };

    format!(
        r#"<div class="message-card {urgency}" data-message-id="{id}">
  <div class="message-header">
    <span class="message-id">ID: {id}</span>{media_badge}{review_badge}
    <div>
      <span class="urgency-badge {urgency}">{urgency}</span>
      <span class="status-badge {status}">{status}</span>
    </div>
  </div>
  <div class="message-text">{text}</div>
  <div class="message-info">
    <div class="info-item"><strong>Need:</strong> {need}</div>
    <div class="info-item"><strong>📍 Location:</strong> {location}</div>
    <div class="info-item"><strong>⏰ Time:</strong> {time}</div>
    {vulnerable_line}
  </div>
  <div class="score-display">Priority Score: {score} / 100</div>
</div>
"#,
        urgency = urgency,
        id = msg.id,
        media_badge = media_badge,
        review_badge = review_badge,
        status = msg.status.as_str(),
        text = escape_html(&msg.original_message),
        need = escape_html(&analysis.need_type),
        location = escape_html(&analysis.location),
        time = format_timestamp(msg.received_at.as_ref()),
        vulnerable_line = vulnerable_line,
        score = msg.priority.total_score,
    )
}
