use anyhow::Result;
use owo_colors::OwoColorize;
use triagedesk_board::StatTiles;
use triagedesk_client::{ApiClient, MessageApi};

pub async fn handle(client: &ApiClient) -> Result<()> {
    let stats = client.fetch_statistics().await?;
    let tiles = StatTiles::from(&stats);

    println!("{}", "Urgency".bold());
    println!("  {:<10} {}", "CRITICAL".bright_red().bold(), tiles.critical);
    println!("  {:<10} {}", "HIGH".red(), tiles.high);
    println!("  {:<10} {}", "MEDIUM".yellow(), tiles.medium);
    println!("  {:<10} {}", "LOW".green(), tiles.low);
    println!();

    println!("{}", "Status".bold());
    let mut by_status: Vec<_> = stats.by_status.iter().collect();
    by_status.sort();
    for (status, count) in by_status {
        println!("  {:<10} {}", status.cyan(), count);
    }
    println!();

    println!("{} {}", "Total messages:".bold(), stats.total_messages);
    Ok(())
}
