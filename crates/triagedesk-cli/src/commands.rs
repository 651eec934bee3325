use crate::args::{Cli, Commands};
use crate::config::Config;
use crate::handlers;
use anyhow::Result;
use triagedesk_client::ApiClient;

pub async fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let api_url = config.resolve_api_url(cli.api_url.as_deref());
    let client = ApiClient::new(api_url);

    match cli.command {
        Commands::Watch {
            out,
            interval,
            location,
            status,
        } => {
            let interval_secs = interval.unwrap_or(config.poll_interval_secs);
            handlers::watch::handle(client, &out, interval_secs, location, status).await
        }
        Commands::List {
            location,
            status,
            format,
        } => handlers::list::handle(&client, &location, &status, format).await,
        Commands::Show { id } => handlers::show::handle(&client, id).await,
        Commands::Submit { text } => handlers::submit::handle(&client, &text).await,
        Commands::Assign { id } => {
            handlers::status::handle(&client, id, triagedesk_types::MessageStatus::Assigned).await
        }
        Commands::Resolve { id } => {
            handlers::status::handle(&client, id, triagedesk_types::MessageStatus::Resolved).await
        }
        Commands::Stats => handlers::stats::handle(&client).await,
    }
}
