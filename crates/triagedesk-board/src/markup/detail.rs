use crate::markup::escape::{escape_html, format_timestamp};
use triagedesk_types::{Media, Message};

/// Render the full detail view for one message from the current snapshot.
///
/// `media_src` is the resolved URL for the attachment when one exists;
/// the caller owns base-URL resolution so the embed works wherever the
/// markup ends up (a backend-served page or a file on disk).
pub fn render_detail(msg: &Message, media_src: Option<&str>) -> String {
    let mut html = String::new();

    html.push_str(&format!("<h2>Message Detail - ID: {}</h2>\n", msg.id));

    html.push_str(&format!(
        r#"<div class="detail-section">
  <h3>📝 Original Message</h3>
  <p class="original-text">{}</p>
</div>
"#,
        escape_html(&msg.original_message)
    ));

    if msg.has_media() {
        if let Some(media) = &msg.media {
            html.push_str(&render_media_section(media, media_src, msg.manually_reviewed));
        }
    }

    html.push_str(&render_analysis_section(msg));
    html.push_str(&render_priority_section(msg));
    html.push_str(&render_status_section(msg));

    html.push_str(
        r#"<div class="modal-actions">
  <button class="btn btn-success" data-action="assign">Assign</button>
  <button class="btn btn-primary" data-action="resolve">Resolve</button>
  <button class="btn btn-secondary" data-action="close-detail">Close</button>
</div>
"#,
    );

    html
}

/// Explicit state for a detail request whose id is gone from the current
/// snapshot (evicted by a racing refresh). Never a blank panel.
pub fn render_detail_missing(id: u64) -> String {
    format!(
        r#"<h2>Message Detail - ID: {id}</h2>
<div class="detail-section detail-missing">
  <p>Message {id} is no longer available. It may have been resolved or removed by another operator.</p>
</div>
<div class="modal-actions">
  <button class="btn btn-secondary" data-action="close-detail">Close</button>
</div>
"#,
        id = id
    )
}

fn render_media_section(media: &Media, src: Option<&str>, manually_reviewed: bool) -> String {
    // The MIME primary category picks the embed element; anything else
    // renders metadata without an embed
    let embed = match src {
        Some(src) if media.file_type.starts_with("image/") => format!(
            r#"<img src="{}" alt="attached media" />"#,
            escape_html(src)
        ),
        Some(src) if media.file_type.starts_with("video/") => format!(
            r#"<video controls src="{}"></video>"#,
            escape_html(src)
        ),
        _ => String::new(),
    };

    let reviewed_note = if manually_reviewed {
        r#" <span class="reviewed-note">(Manually Reviewed)</span>"#
    } else {
        ""
    };

    let mut section = format!(
        r#"<div class="detail-section media-section">
  <h3>📷 Attached Media{reviewed_note}</h3>
  <div class="media-embed">{embed}</div>
"#,
        reviewed_note = reviewed_note,
        embed = embed,
    );

    if let Some(vision) = &media.vision_analysis {
        let people = match vision.detected_people {
            Some(count) => format!("<p><strong>People Detected:</strong> {}</p>\n", count),
            None => String::new(),
        };
        let review_flag = if vision.requires_review {
            "<p class=\"review-flag\"><strong>⚠️ Flagged for manual review</strong></p>\n"
        } else {
            ""
        };

        section.push_str(&format!(
            r#"  <div class="vision-analysis">
    <h4>🤖 AI Vision Analysis</h4>
    <p><strong>Description:</strong> {description}</p>
    <p><strong>Confidence:</strong> {confidence}%</p>
    <p><strong>Detected Urgency:</strong> {urgency}/10</p>
    {people}{review_flag}  </div>
"#,
            description = escape_html(&vision.vision_description),
            confidence = vision.confidence_score,
            urgency = vision.detected_urgency,
            people = people,
            review_flag = review_flag,
        ));
    }

    section.push_str("</div>\n");
    section
}

fn render_analysis_section(msg: &Message) -> String {
    let analysis = &msg.analysis;

    let vulnerable = if analysis.vulnerable_groups.is_empty() {
        String::new()
    } else {
        format!(
            "<p><strong>Vulnerable Groups:</strong> {}</p>\n",
            escape_html(&analysis.vulnerable_groups.join(", "))
        )
    };
    let people = match analysis.estimated_people_count {
        Some(count) => format!("<p><strong>Estimated People:</strong> {}</p>\n", count),
        None => String::new(),
    };
    let keywords = if analysis.keywords_found.is_empty() {
        String::new()
    } else {
        format!(
            "<p><strong>Keywords:</strong> {}</p>\n",
            escape_html(&analysis.keywords_found.join(", "))
        )
    };

    format!(
        r#"<div class="detail-section">
  <h3>🤖 AI Analysis</h3>
  <p><strong>Need Type:</strong> {need}</p>
  <p><strong>Location:</strong> {location}</p>
  <p><strong>Base Urgency Score:</strong> {base}/10</p>
  <p><strong>Immediate Danger:</strong> {danger}</p>
  {vulnerable}{people}{keywords}</div>
"#,
        need = escape_html(&analysis.need_type),
        location = escape_html(&analysis.location),
        base = analysis.urgency_base_score,
        danger = if analysis.has_immediate_danger {
            "YES ⚠️"
        } else {
            "No"
        },
        vulnerable = vulnerable,
        people = people,
        keywords = keywords,
    )
}

fn render_priority_section(msg: &Message) -> String {
    let priority = &msg.priority;
    let breakdown = &priority.score_breakdown;

    let reasons: String = priority
        .priority_reasons
        .iter()
        .map(|reason| format!("    <li>{}</li>\n", escape_html(reason)))
        .collect();

    format!(
        r#"<div class="detail-section">
  <h3>⚡ Priority Assessment</h3>
  <p><strong>Overall Score:</strong> {total}/100</p>
  <p><strong>Urgency Level:</strong> <span class="urgency-badge {urgency}">{urgency}</span></p>
  <p><strong>Score Breakdown:</strong></p>
  <ul class="breakdown-list">
    <li>• Base Urgency: {base:.1}</li>
    <li>• Time Sensitivity: {time:.1}</li>
    <li>• Vulnerable Groups: {vulnerable:.1}</li>
    <li>• Immediate Danger: {danger:.1}</li>
    <li>• People Count: {people:.1}</li>
  </ul>
  <h3>📋 Priority Reasons</h3>
  <ul class="reasons-list">
{reasons}  </ul>
</div>
"#,
        total = priority.total_score,
        urgency = priority.urgency_level.badge_class(),
        base = breakdown.base_urgency,
        time = breakdown.time_sensitivity,
        vulnerable = breakdown.vulnerable_groups,
        danger = breakdown.immediate_danger,
        people = breakdown.people_count,
        reasons = reasons,
    )
}

fn render_status_section(msg: &Message) -> String {
    let assigned = match &msg.assigned_to {
        Some(who) => format!(
            "<p><strong>Assigned To:</strong> {}</p>\n",
            escape_html(who)
        ),
        None => String::new(),
    };
    let resolved = match &msg.resolved_at {
        Some(ts) => format!(
            "<p><strong>Resolved:</strong> {}</p>\n",
            format_timestamp(Some(ts))
        ),
        None => String::new(),
    };
    let notes = match msg.notes.as_deref() {
        Some(notes) if !notes.is_empty() => {
            format!("<p><strong>Notes:</strong> {}</p>\n", escape_html(notes))
        }
        _ => String::new(),
    };

    format!(
        r#"<div class="detail-section">
  <h3>📊 Status Management</h3>
  <p><strong>Current Status:</strong> <span class="status-badge {status}">{status}</span></p>
  <p><strong>Received:</strong> {received}</p>
  {assigned}{resolved}{notes}</div>
"#,
        status = msg.status.as_str(),
        received = format_timestamp(msg.received_at.as_ref()),
        assigned = assigned,
        resolved = resolved,
        notes = notes,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use triagedesk_types::{
        Analysis, MessageStatus, Priority, ScoreBreakdown, UrgencyLevel, VisionAnalysis,
    };

    fn message() -> Message {
        Message {
            id: 42,
            original_message: "Trapped on roof, need rescue, 3 people".to_string(),
            analysis: Analysis {
                need_type: "rescue".to_string(),
                location: "riverside".to_string(),
                urgency_base_score: 9,
                has_immediate_danger: true,
                vulnerable_groups: vec!["children".to_string()],
                estimated_people_count: Some(3),
                keywords_found: vec!["trapped".to_string(), "rescue".to_string()],
            },
            priority: Priority {
                total_score: 92.5,
                urgency_level: UrgencyLevel::Critical,
                priority_reasons: vec![
                    "Immediate danger to life".to_string(),
                    "Children involved".to_string(),
                ],
                score_breakdown: ScoreBreakdown {
                    base_urgency: 36.0,
                    time_sensitivity: 15.0,
                    vulnerable_groups: 16.5,
                    immediate_danger: 20.0,
                    people_count: 5.0,
                },
            },
            status: MessageStatus::Pending,
            received_at: Some("2026-08-20T14:32:00Z".parse().unwrap()),
            assigned_to: None,
            resolved_at: None,
            notes: None,
            manually_reviewed: false,
            media: None,
        }
    }

    #[test]
    fn test_detail_contains_all_breakdown_components() {
        let html = render_detail(&message(), None);
        assert!(html.contains("Base Urgency: 36.0"));
        assert!(html.contains("Time Sensitivity: 15.0"));
        assert!(html.contains("Vulnerable Groups: 16.5"));
        assert!(html.contains("Immediate Danger: 20.0"));
        assert!(html.contains("People Count: 5.0"));
        assert!(html.contains("92.5/100"));
    }

    #[test]
    fn test_detail_reasons_in_order() {
        let html = render_detail(&message(), None);
        let first = html.find("Immediate danger to life").unwrap();
        let second = html.find("Children involved").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_detail_escapes_original_message() {
        let mut msg = message();
        msg.original_message = "<b onmouseover=steal()>help</b>".to_string();
        let html = render_detail(&msg, None);
        assert!(!html.contains("<b onmouseover"));
        assert!(html.contains("&lt;b onmouseover=steal()&gt;help&lt;/b&gt;"));
    }

    #[test]
    fn test_workflow_fields_conditional() {
        let html = render_detail(&message(), None);
        assert!(!html.contains("Assigned To:"));
        assert!(!html.contains("Resolved:"));
        assert!(!html.contains("Notes:"));

        let mut msg = message();
        msg.status = MessageStatus::Resolved;
        msg.assigned_to = Some("Responder Team".to_string());
        msg.resolved_at = Some("2026-08-20T16:00:00Z".parse().unwrap());
        msg.notes = Some("rooftop evacuation complete".to_string());
        let html = render_detail(&msg, None);
        assert!(html.contains("Assigned To:"));
        assert!(html.contains("Responder Team"));
        assert!(html.contains("Resolved:"));
        assert!(html.contains("rooftop evacuation complete"));
    }

    #[test]
    fn test_media_embed_by_mime_category() {
        let mut msg = message();
        msg.media = Some(Media {
            media_id: "m1".to_string(),
            file_type: "image/png".to_string(),
            vision_analysis: None,
        });
        let html = render_detail(&msg, Some("/api/media/m1"));
        assert!(html.contains(r#"<img src="/api/media/m1""#));
        assert!(!html.contains("<video"));

        msg.media = Some(Media {
            media_id: "m2".to_string(),
            file_type: "video/mp4".to_string(),
            vision_analysis: None,
        });
        let html = render_detail(&msg, Some("/api/media/m2"));
        assert!(html.contains(r#"<video controls src="/api/media/m2""#));

        // Unknown primary type renders the section but embeds nothing
        msg.media = Some(Media {
            media_id: "m3".to_string(),
            file_type: "application/pdf".to_string(),
            vision_analysis: None,
        });
        let html = render_detail(&msg, Some("/api/media/m3"));
        assert!(html.contains("Attached Media"));
        assert!(!html.contains("<img"));
        assert!(!html.contains("<video"));
    }

    #[test]
    fn test_media_embed_uses_caller_resolved_url() {
        // The caller resolves the base, so markup written to a file on
        // disk still points at the backend
        let mut msg = message();
        msg.media = Some(Media {
            media_id: "m1".to_string(),
            file_type: "image/jpeg".to_string(),
            vision_analysis: None,
        });
        let html = render_detail(&msg, Some("http://10.0.0.1:5000/api/media/m1"));
        assert!(html.contains(r#"<img src="http://10.0.0.1:5000/api/media/m1""#));

        // No resolved URL means no embed, same as an unknown MIME type
        let html = render_detail(&msg, None);
        assert!(html.contains("Attached Media"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_vision_analysis_block() {
        let mut msg = message();
        msg.media = Some(Media {
            media_id: "m1".to_string(),
            file_type: "image/jpeg".to_string(),
            vision_analysis: Some(VisionAnalysis {
                vision_description: "Flooded street".to_string(),
                confidence_score: 87.0,
                detected_urgency: 8,
                detected_people: Some(2),
                requires_review: true,
            }),
        });
        let html = render_detail(&msg, None);
        assert!(html.contains("AI Vision Analysis"));
        assert!(html.contains("Flooded street"));
        assert!(html.contains("87%"));
        assert!(html.contains("8/10"));
        assert!(html.contains("People Detected:</strong> 2"));
        assert!(html.contains("Flagged for manual review"));
    }

    #[test]
    fn test_missing_detail_is_explicit() {
        let html = render_detail_missing(42);
        assert!(html.contains("Message 42 is no longer available"));
        assert!(html.contains("close-detail"));
        // No action buttons for a message we cannot act on
        assert!(!html.contains("data-action=\"assign\""));
    }
}
