use std::sync::{Arc, Mutex};
use triagedesk_types::{Statistics, UrgencyLevel};

/// Counters for the four summary tiles at the top of the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatTiles {
    pub critical: u64,
    pub high: u64,
    pub medium: u64,
    pub low: u64,
}

impl From<&Statistics> for StatTiles {
    fn from(stats: &Statistics) -> Self {
        Self {
            critical: stats.urgency_count(UrgencyLevel::Critical),
            high: stats.urgency_count(UrgencyLevel::High),
            medium: stats.urgency_count(UrgencyLevel::Medium),
            low: stats.urgency_count(UrgencyLevel::Low),
        }
    }
}

/// The display seam the controller renders into.
///
/// Implementations own the actual presentation (a generated page, a test
/// recorder); the controller only pushes markup and state transitions
/// through this trait and never reads anything back.
pub trait Surface {
    /// Replace the card-list area with freshly rendered markup
    fn set_cards(&mut self, markup: &str);

    fn set_statistics(&mut self, tiles: &StatTiles);

    /// Open the detail modal with the given markup (replaces any previous
    /// detail content)
    fn open_detail(&mut self, markup: &str);

    fn close_detail(&mut self);

    /// Open the submit modal with a fresh, empty input
    fn open_submit(&mut self);

    fn close_submit(&mut self);

    /// Inline outcome inside the submit modal: confirmation text or error
    /// text for correction
    fn set_submit_result(&mut self, result: Result<&str, &str>);

    /// Non-fatal error report; the previously rendered content stays up
    fn show_error(&mut self, message: &str);

    fn show_notice(&mut self, message: &str);
}

/// Recording test double; shared-handle so tests can keep a clone while
/// the controller owns the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    inner: Arc<Mutex<Recorded>>,
}

#[derive(Debug, Default)]
struct Recorded {
    cards: Vec<String>,
    tiles: Vec<StatTiles>,
    detail: Option<String>,
    detail_open: bool,
    submit_open: bool,
    submit_results: Vec<Result<String, String>>,
    errors: Vec<String>,
    notices: Vec<String>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every card-list markup ever set, oldest first
    pub fn cards(&self) -> Vec<String> {
        self.inner.lock().unwrap().cards.clone()
    }

    pub fn latest_cards(&self) -> Option<String> {
        self.inner.lock().unwrap().cards.last().cloned()
    }

    pub fn latest_tiles(&self) -> Option<StatTiles> {
        self.inner.lock().unwrap().tiles.last().copied()
    }

    pub fn detail_open(&self) -> bool {
        self.inner.lock().unwrap().detail_open
    }

    pub fn detail_markup(&self) -> Option<String> {
        self.inner.lock().unwrap().detail.clone()
    }

    pub fn submit_open(&self) -> bool {
        self.inner.lock().unwrap().submit_open
    }

    pub fn submit_results(&self) -> Vec<Result<String, String>> {
        self.inner.lock().unwrap().submit_results.clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.inner.lock().unwrap().errors.clone()
    }

    pub fn notices(&self) -> Vec<String> {
        self.inner.lock().unwrap().notices.clone()
    }
}

impl Surface for RecordingSurface {
    fn set_cards(&mut self, markup: &str) {
        self.inner.lock().unwrap().cards.push(markup.to_string());
    }

    fn set_statistics(&mut self, tiles: &StatTiles) {
        self.inner.lock().unwrap().tiles.push(*tiles);
    }

    fn open_detail(&mut self, markup: &str) {
        let mut inner = self.inner.lock().unwrap();
        inner.detail = Some(markup.to_string());
        inner.detail_open = true;
    }

    fn close_detail(&mut self) {
        self.inner.lock().unwrap().detail_open = false;
    }

    fn open_submit(&mut self) {
        self.inner.lock().unwrap().submit_open = true;
    }

    fn close_submit(&mut self) {
        self.inner.lock().unwrap().submit_open = false;
    }

    fn set_submit_result(&mut self, result: Result<&str, &str>) {
        self.inner
            .lock()
            .unwrap()
            .submit_results
            .push(result.map(str::to_string).map_err(str::to_string));
    }

    fn show_error(&mut self, message: &str) {
        self.inner.lock().unwrap().errors.push(message.to_string());
    }

    fn show_notice(&mut self, message: &str) {
        self.inner
            .lock()
            .unwrap()
            .notices
            .push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_surface_shares_state_across_clones() {
        let surface = RecordingSurface::new();
        let mut handle = surface.clone();

        handle.set_cards("<div>cards</div>");
        handle.open_detail("<h2>detail</h2>");

        assert_eq!(surface.latest_cards().unwrap(), "<div>cards</div>");
        assert!(surface.detail_open());

        handle.close_detail();
        assert!(!surface.detail_open());
        // Markup is retained for inspection even after closing
        assert_eq!(surface.detail_markup().unwrap(), "<h2>detail</h2>");
    }

    #[test]
    fn test_stat_tiles_from_statistics() {
        let stats: Statistics = serde_json::from_str(
            r#"{"by_urgency": {"CRITICAL": 4, "HIGH": 2, "MEDIUM": 1}}"#,
        )
        .unwrap();
        let tiles = StatTiles::from(&stats);
        assert_eq!(tiles.critical, 4);
        assert_eq!(tiles.high, 2);
        assert_eq!(tiles.medium, 1);
        assert_eq!(tiles.low, 0);
    }
}
