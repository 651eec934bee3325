use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// NOTE: Schema Design Goals
//
// 1. Fidelity: Field names mirror the backend wire format exactly. The
//    backend owns analysis, scoring, and ordering; the client displays
//    what it receives and never recomputes a score.
// 2. Snapshot semantics: Every struct here is an immutable value snapshot.
//    A refresh replaces the whole message list; nothing is patched in
//    place, so the card list and the detail view always agree.
// 3. Tolerance: Optional enrichment (media, vision analysis, people count)
//    is modeled with Option/default so older backend payloads still decode.

/// Workflow status assigned by the operator, stored server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    /// Freshly ingested, nobody is on it yet
    Pending,
    /// A responder team has been assigned
    Assigned,
    /// Closed out
    Resolved,
}

impl MessageStatus {
    /// Wire value, also used as the status badge class in markup
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageStatus::Pending => "pending",
            MessageStatus::Assigned => "assigned",
            MessageStatus::Resolved => "resolved",
        }
    }
}

/// Urgency category computed by the backend's priority engine.
///
/// Ordinal: `CRITICAL > HIGH > MEDIUM > LOW`. Variants are declared
/// low-to-high so the derived ordering matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UrgencyLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl UrgencyLevel {
    /// Wire value (`CRITICAL`, `HIGH`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyLevel::Critical => "CRITICAL",
            UrgencyLevel::High => "HIGH",
            UrgencyLevel::Medium => "MEDIUM",
            UrgencyLevel::Low => "LOW",
        }
    }

    /// CSS class for urgency badges and card borders; intentionally the
    /// wire form, so there is one label vocabulary end to end
    pub fn badge_class(&self) -> &'static str {
        self.as_str()
    }

    /// All levels, highest first (statistics tile order)
    pub fn all() -> [UrgencyLevel; 4] {
        [
            UrgencyLevel::Critical,
            UrgencyLevel::High,
            UrgencyLevel::Medium,
            UrgencyLevel::Low,
        ]
    }
}

/// NLP analysis the backend attaches to every message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    /// Need category (`food`, `water`, `medical`, `rescue`, ... or `unknown`)
    pub need_type: String,

    /// Free-text location label extracted from the message
    pub location: String,

    /// Base urgency on a 0-10 scale, before weighting
    pub urgency_base_score: u8,

    /// Life-threatening situation flagged by the analyzer
    pub has_immediate_danger: bool,

    /// At-risk populations mentioned or inferred (children, elderly, ...)
    #[serde(default)]
    pub vulnerable_groups: Vec<String>,

    /// Headcount estimate when the message states or implies one
    #[serde(default)]
    pub estimated_people_count: Option<u32>,

    /// Distress keywords the analyzer matched
    #[serde(default)]
    pub keywords_found: Vec<String>,
}

/// The five weighted components the backend reports as summing toward
/// the total priority score. Displayed with one decimal, never recomputed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub base_urgency: f64,
    pub time_sensitivity: f64,
    pub vulnerable_groups: f64,
    pub immediate_danger: f64,
    pub people_count: f64,
}

/// Priority assessment computed by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Priority {
    /// Total score on a 0-100 scale (special-case boosts can push it past
    /// the component sum)
    pub total_score: f64,

    pub urgency_level: UrgencyLevel,

    /// Human-readable justifications, in the order the engine produced them
    #[serde(default)]
    pub priority_reasons: Vec<String>,

    pub score_breakdown: ScoreBreakdown,
}

/// AI vision analysis of an attached photo or video
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisionAnalysis {
    pub vision_description: String,

    /// Model confidence as a percentage
    pub confidence_score: f64,

    /// Urgency the vision model read from the media, 0-10
    pub detected_urgency: u8,

    #[serde(default)]
    pub detected_people: Option<u32>,

    /// A human must verify this judgment before it is trusted
    #[serde(default)]
    pub requires_review: bool,
}

/// Media attachment reference; bytes are fetched separately by id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Media {
    pub media_id: String,

    /// MIME type (`image/jpeg`, `video/mp4`, ...); the primary category
    /// selects the embed element
    pub file_type: String,

    #[serde(default)]
    pub vision_analysis: Option<VisionAnalysis>,
}

/// One emergency message, fully enriched server-side
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Server-assigned, stable, unique within a snapshot
    pub id: u64,

    /// Untrusted free text exactly as received; must be escaped before
    /// insertion into markup
    pub original_message: String,

    pub analysis: Analysis,

    pub priority: Priority,

    pub status: MessageStatus,

    #[serde(default)]
    pub received_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub assigned_to: Option<String>,

    #[serde(default)]
    pub resolved_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub notes: Option<String>,

    /// Set once a human has verified the AI-derived judgments
    #[serde(default)]
    pub manually_reviewed: bool,

    #[serde(default)]
    pub media: Option<Media>,
}

impl Message {
    /// A media badge is shown only for attachments with a usable id
    pub fn has_media(&self) -> bool {
        self.media
            .as_ref()
            .is_some_and(|m| !m.media_id.is_empty())
    }
}

/// Summary counters for the dashboard tiles
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Statistics {
    #[serde(default)]
    pub total_messages: u64,

    #[serde(default)]
    pub by_status: HashMap<String, u64>,

    #[serde(default)]
    pub by_urgency: HashMap<UrgencyLevel, u64>,

    #[serde(default)]
    pub by_location: HashMap<String, u64>,
}

impl Statistics {
    /// Tile count for one urgency level; absent keys count as zero
    pub fn urgency_count(&self, level: UrgencyLevel) -> u64 {
        self.by_urgency.get(&level).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_message_json() -> &'static str {
        r#"{
            "id": 7,
            "original_message": "Trapped on roof, need rescue, 3 people",
            "analysis": {
                "need_type": "rescue",
                "location": "riverside",
                "urgency_base_score": 9,
                "has_immediate_danger": true,
                "vulnerable_groups": ["children"],
                "estimated_people_count": 3,
                "keywords_found": ["trapped", "rescue"]
            },
            "priority": {
                "total_score": 92.5,
                "urgency_level": "CRITICAL",
                "priority_reasons": ["Immediate danger to life"],
                "score_breakdown": {
                    "base_urgency": 36.0,
                    "time_sensitivity": 15.0,
                    "vulnerable_groups": 16.5,
                    "immediate_danger": 20.0,
                    "people_count": 5.0
                }
            },
            "status": "pending",
            "received_at": "2026-08-20T14:32:00Z",
            "assigned_to": null,
            "resolved_at": null,
            "notes": ""
        }"#
    }

    #[test]
    fn test_message_decodes_wire_format() {
        let msg: Message = serde_json::from_str(sample_message_json()).unwrap();
        assert_eq!(msg.id, 7);
        assert_eq!(msg.status, MessageStatus::Pending);
        assert_eq!(msg.priority.urgency_level, UrgencyLevel::Critical);
        assert_eq!(msg.analysis.estimated_people_count, Some(3));
        assert!(!msg.manually_reviewed);
        assert!(msg.media.is_none());
        assert!(!msg.has_media());
    }

    #[test]
    fn test_message_with_media_and_vision() {
        let json = r#"{
            "id": 8,
            "original_message": "flooding photo attached",
            "analysis": {
                "need_type": "rescue",
                "location": "old town",
                "urgency_base_score": 7,
                "has_immediate_danger": false
            },
            "priority": {
                "total_score": 61.0,
                "urgency_level": "HIGH",
                "priority_reasons": [],
                "score_breakdown": {
                    "base_urgency": 28.0,
                    "time_sensitivity": 15.0,
                    "vulnerable_groups": 0.0,
                    "immediate_danger": 0.0,
                    "people_count": 18.0
                }
            },
            "status": "assigned",
            "assigned_to": "Responder Team",
            "manually_reviewed": true,
            "media": {
                "media_id": "abc123",
                "file_type": "image/jpeg",
                "vision_analysis": {
                    "vision_description": "Flooded street, water at door level",
                    "confidence_score": 87.0,
                    "detected_urgency": 8,
                    "detected_people": 2,
                    "requires_review": true
                }
            }
        }"#;

        let msg: Message = serde_json::from_str(json).unwrap();
        assert!(msg.has_media());
        assert!(msg.manually_reviewed);
        let vision = msg.media.unwrap().vision_analysis.unwrap();
        assert_eq!(vision.detected_urgency, 8);
        assert!(vision.requires_review);
    }

    #[test]
    fn test_badge_class_matches_wire_form() {
        for level in UrgencyLevel::all() {
            assert_eq!(level.badge_class(), level.as_str());
        }
    }

    #[test]
    fn test_urgency_level_ordering() {
        assert!(UrgencyLevel::Critical > UrgencyLevel::High);
        assert!(UrgencyLevel::High > UrgencyLevel::Medium);
        assert!(UrgencyLevel::Medium > UrgencyLevel::Low);
    }

    #[test]
    fn test_status_roundtrip() {
        for status in [
            MessageStatus::Pending,
            MessageStatus::Assigned,
            MessageStatus::Resolved,
        ] {
            let encoded = serde_json::to_string(&status).unwrap();
            assert_eq!(encoded, format!("\"{}\"", status.as_str()));
            let decoded: MessageStatus = serde_json::from_str(&encoded).unwrap();
            assert_eq!(decoded, status);
        }
    }

    #[test]
    fn test_statistics_missing_levels_count_zero() {
        let stats: Statistics =
            serde_json::from_str(r#"{"total_messages": 2, "by_urgency": {"CRITICAL": 2}}"#)
                .unwrap();
        assert_eq!(stats.urgency_count(UrgencyLevel::Critical), 2);
        assert_eq!(stats.urgency_count(UrgencyLevel::Low), 0);
    }
}
