use triagedesk_types::{Message, MessageFilter};

/// The single source of truth between refreshes.
///
/// Owned by the controller and passed by reference into render calls;
/// renderers never mutate it. The message list is replaced wholesale on
/// every successful fetch (last write wins), so the card list and any
/// detail view derived from the same snapshot always agree.
#[derive(Debug, Default)]
pub struct ViewState {
    messages: Vec<Message>,
    filter: MessageFilter,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the snapshot with a freshly fetched list, preserving the
    /// backend's ordering
    pub fn replace_messages(&mut self, messages: Vec<Message>) {
        self.messages = messages;
    }

    pub fn set_filters(&mut self, location: impl Into<String>, status: impl Into<String>) {
        self.filter = MessageFilter::new(location, status);
    }

    pub fn find_by_id(&self, id: u64) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn filter(&self) -> &MessageFilter {
        &self.filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use triagedesk_types::{
        Analysis, MessageStatus, Priority, ScoreBreakdown, UrgencyLevel,
    };

    fn message(id: u64) -> Message {
        Message {
            id,
            original_message: format!("message {}", id),
            analysis: Analysis {
                need_type: "water".to_string(),
                location: "riverside".to_string(),
                urgency_base_score: 5,
                has_immediate_danger: false,
                vulnerable_groups: vec![],
                estimated_people_count: None,
                keywords_found: vec![],
            },
            priority: Priority {
                total_score: 50.0,
                urgency_level: UrgencyLevel::Medium,
                priority_reasons: vec![],
                score_breakdown: ScoreBreakdown {
                    base_urgency: 20.0,
                    time_sensitivity: 10.0,
                    vulnerable_groups: 0.0,
                    immediate_danger: 0.0,
                    people_count: 20.0,
                },
            },
            status: MessageStatus::Pending,
            received_at: None,
            assigned_to: None,
            resolved_at: None,
            notes: None,
            manually_reviewed: false,
            media: None,
        }
    }

    #[test]
    fn test_replace_swaps_whole_snapshot() {
        let mut state = ViewState::new();
        state.replace_messages(vec![message(1), message(2)]);
        assert_eq!(state.messages().len(), 2);

        state.replace_messages(vec![message(3)]);
        assert_eq!(state.messages().len(), 1);
        assert!(state.find_by_id(1).is_none());
        assert!(state.find_by_id(3).is_some());
    }

    #[test]
    fn test_find_by_id_missing_after_eviction() {
        let mut state = ViewState::new();
        state.replace_messages(vec![message(42)]);
        assert!(state.find_by_id(42).is_some());

        // A racing refresh can evict an id between card render and click
        state.replace_messages(vec![message(7)]);
        assert!(state.find_by_id(42).is_none());
    }

    #[test]
    fn test_set_filters() {
        let mut state = ViewState::new();
        assert!(state.filter().is_unfiltered());

        state.set_filters("riverside", "assigned");
        assert_eq!(state.filter().location, "riverside");
        assert_eq!(state.filter().status, "assigned");
    }
}
