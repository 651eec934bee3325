use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;
use triagedesk_board::markup::escape_html;
use triagedesk_board::{Controller, StatTiles, Surface};
use triagedesk_client::ApiClient;

/// Poll the backend and keep a static dashboard page up to date on disk.
///
/// The page carries a `meta refresh` so a browser left open on it re-reads
/// the file on the same cadence the poll runs at. Runs until Ctrl-C.
pub async fn handle(
    client: ApiClient,
    out: &Path,
    interval_secs: u64,
    location: String,
    status: String,
) -> Result<()> {
    let surface = HtmlPageSurface::new(out.to_path_buf(), interval_secs);
    // Page exists immediately, even before the first fetch lands
    surface
        .write_page()
        .with_context(|| format!("Failed to write {}", out.display()))?;

    println!(
        "Writing dashboard to {} every {}s (Ctrl-C to stop)",
        out.display(),
        interval_secs
    );

    let controller = Controller::new(client, surface)
        .poll_interval(Duration::from_secs(interval_secs))
        .filters(location, status);

    // No UI events in watch mode; the sender is held open so the poll
    // loop keeps running until Ctrl-C
    let (_tx, rx) = tokio::sync::mpsc::unbounded_channel();

    tokio::select! {
        result = controller.run(rx) => result,
        _ = tokio::signal::ctrl_c() => {
            println!("Stopped.");
            Ok(())
        }
    }
}

/// A [`Surface`] that rewrites one HTML file per update.
///
/// Watch mode has no modals and no interactive submit, so those hooks are
/// no-ops here; only cards, tiles, and errors reach the page.
struct HtmlPageSurface {
    path: PathBuf,
    refresh_secs: u64,
    cards: String,
    tiles: StatTiles,
    error: Option<String>,
}

impl HtmlPageSurface {
    fn new(path: PathBuf, refresh_secs: u64) -> Self {
        Self {
            path,
            refresh_secs,
            cards: r#"<div class="loading">Loading messages...</div>"#.to_string(),
            tiles: StatTiles::default(),
            error: None,
        }
    }

    fn write_page(&self) -> std::io::Result<()> {
        // Write-then-rename so a browser refresh never reads a torn page
        let tmp = self.path.with_extension("html.tmp");
        std::fs::write(&tmp, self.render_page())?;
        std::fs::rename(&tmp, &self.path)
    }

    fn rewrite(&self) {
        if let Err(e) = self.write_page() {
            tracing::warn!(path = %self.path.display(), error = %e, "page write failed");
        }
    }

    fn render_page(&self) -> String {
        let error_banner = match &self.error {
            Some(text) => format!(
                r#"<div class="error-banner">{}</div>"#,
                escape_html(text)
            ),
            None => String::new(),
        };

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta http-equiv="refresh" content="{refresh}">
  <title>Emergency Triage Dashboard</title>
  <style>
    body {{ font-family: sans-serif; background: #1a1a2e; color: #eee; margin: 0; padding: 1rem; }}
    .stats {{ display: flex; gap: 1rem; margin-bottom: 1rem; }}
    .stat-card {{ flex: 1; padding: 0.75rem; border-radius: 8px; text-align: center; }}
    .stat-card .count {{ font-size: 1.8rem; font-weight: bold; }}
    .stat-card.CRITICAL {{ background: #7a1f1f; }}
    .stat-card.HIGH {{ background: #8a4b1f; }}
    .stat-card.MEDIUM {{ background: #8a7a1f; color: #222; }}
    .stat-card.LOW {{ background: #2e6b2e; }}
    .message-card {{ background: #16213e; border-left: 5px solid #555; border-radius: 6px; padding: 0.75rem; margin-bottom: 0.75rem; }}
    .message-card.CRITICAL {{ border-left-color: #e94560; }}
    .message-card.HIGH {{ border-left-color: #ff8c42; }}
    .message-card.MEDIUM {{ border-left-color: #ffd166; }}
    .message-card.LOW {{ border-left-color: #6bcb77; }}
    .message-header {{ display: flex; justify-content: space-between; margin-bottom: 0.5rem; }}
    .urgency-badge, .status-badge, .badge {{ padding: 2px 8px; border-radius: 10px; font-size: 0.75rem; margin-left: 4px; }}
    .urgency-badge.CRITICAL {{ background: #e94560; }}
    .urgency-badge.HIGH {{ background: #ff8c42; color: #222; }}
    .urgency-badge.MEDIUM {{ background: #ffd166; color: #222; }}
    .urgency-badge.LOW {{ background: #6bcb77; color: #222; }}
    .status-badge {{ background: #394867; }}
    .message-info {{ display: flex; flex-wrap: wrap; gap: 0.75rem; font-size: 0.85rem; color: #aaa; }}
    .score-display {{ margin-top: 0.5rem; font-weight: bold; color: #9ad0ec; }}
    .error-banner {{ background: #7a1f1f; padding: 0.75rem; border-radius: 6px; margin-bottom: 1rem; }}
    .loading {{ color: #888; padding: 2rem; text-align: center; }}
  </style>
</head>
<body>
  <h1>🚨 Emergency Triage Dashboard</h1>
  {error_banner}
  <div class="stats">
    <div class="stat-card CRITICAL"><div class="count">{critical}</div>CRITICAL</div>
    <div class="stat-card HIGH"><div class="count">{high}</div>HIGH</div>
    <div class="stat-card MEDIUM"><div class="count">{medium}</div>MEDIUM</div>
    <div class="stat-card LOW"><div class="count">{low}</div>LOW</div>
  </div>
  <div class="messages">
{cards}
  </div>
</body>
</html>
"#,
            refresh = self.refresh_secs,
            error_banner = error_banner,
            critical = self.tiles.critical,
            high = self.tiles.high,
            medium = self.tiles.medium,
            low = self.tiles.low,
            cards = self.cards,
        )
    }
}

impl Surface for HtmlPageSurface {
    fn set_cards(&mut self, markup: &str) {
        self.cards = markup.to_string();
        // Fresh data supersedes any previously shown fetch error
        self.error = None;
        self.rewrite();
    }

    fn set_statistics(&mut self, tiles: &StatTiles) {
        self.tiles = *tiles;
        self.rewrite();
    }

    fn open_detail(&mut self, _markup: &str) {}

    fn close_detail(&mut self) {}

    fn open_submit(&mut self) {}

    fn close_submit(&mut self) {}

    fn set_submit_result(&mut self, _result: Result<&str, &str>) {}

    fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
        self.rewrite();
    }

    fn show_notice(&mut self, message: &str) {
        tracing::info!(message, "notice");
    }
}
