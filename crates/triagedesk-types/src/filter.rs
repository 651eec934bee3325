use serde::{Deserialize, Serialize};

/// Sentinel value the backend treats as "no filter"
pub const FILTER_ALL: &str = "all";

/// Client-side filter selection, sent verbatim as query parameters.
///
/// The backend owns filter semantics; the client only forwards the two
/// values and the `all` sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageFilter {
    pub location: String,
    pub status: String,
}

impl Default for MessageFilter {
    fn default() -> Self {
        Self {
            location: FILTER_ALL.to_string(),
            status: FILTER_ALL.to_string(),
        }
    }
}

impl MessageFilter {
    pub fn new(location: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            status: status.into(),
        }
    }

    /// True when both values are the `all` sentinel, i.e. the effective
    /// query is identical to the default
    pub fn is_unfiltered(&self) -> bool {
        self.location == FILTER_ALL && self.status == FILTER_ALL
    }
}
