use chrono::{DateTime, Local, Utc};

/// Escape untrusted text for insertion into HTML markup.
///
/// Applied to every free-text field that originates in user or AI output
/// before it reaches a card or detail view. An unescaped occurrence of any
/// of these characters in rendered markup is a cross-site-scripting defect.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Display form for a receipt or resolution timestamp; missing values
/// render as `N/A`
pub fn format_timestamp(timestamp: Option<&DateTime<Utc>>) -> String {
    match timestamp {
        Some(ts) => ts
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_markup_characters() {
        assert_eq!(
            escape_html(r#"<script>alert("x")</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_escape_ampersand_first() {
        // A pre-existing entity must not double-escape into &amp;lt;
        // from the wrong direction: &lt; becomes &amp;lt; exactly once
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_escape_single_quote() {
        assert_eq!(escape_html("it's"), "it&#39;s");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape_html("need water at riverside"), "need water at riverside");
    }

    #[test]
    fn test_missing_timestamp_renders_na() {
        assert_eq!(format_timestamp(None), "N/A");
    }

    #[test]
    fn test_timestamp_renders_date() {
        let ts: DateTime<Utc> = "2026-08-20T14:32:00Z".parse().unwrap();
        let rendered = format_timestamp(Some(&ts));
        assert!(rendered.contains("2026"));
        assert_ne!(rendered, "N/A");
    }
}
