use anyhow::{bail, Result};
use clap::Parser;
use client_core::{
    config::{load_settings, validate_source_url},
    render::format_table,
    HttpRecordSource, RenderView, TableController,
};
use shared::domain::SortField;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Fetch the user listing and print it as a table")]
struct Args {
    /// Overrides the configured source url.
    #[arg(long)]
    source_url: Option<String>,
    /// Keep only users whose name or email contains this text.
    #[arg(long)]
    query: Option<String>,
    #[arg(long, value_parser = parse_sort_field)]
    sort_by: Option<SortField>,
    #[arg(long)]
    descending: bool,
    /// Randomize row order after filtering and sorting.
    #[arg(long)]
    shuffle: bool,
}

fn parse_sort_field(raw: &str) -> Result<SortField, String> {
    raw.parse::<SortField>().map_err(|err| err.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    let args = Args::parse();

    let mut settings = load_settings()?;
    if let Some(url) = args.source_url {
        validate_source_url(&url)?;
        settings.source_url = url;
    }

    let mut controller = TableController::new(HttpRecordSource::from_settings(&settings)?);
    controller.load().await;

    if let Some(message) = controller.state().error_message() {
        bail!("{message} from {}", settings.source_url);
    }

    if let Some(query) = args.query {
        controller.search(query);
    }
    if args.sort_by.is_some() || args.descending {
        controller.select_sort_field(args.sort_by.unwrap_or_default());
        if args.descending {
            controller.toggle_sort_order();
        }
    }
    if args.shuffle {
        controller.shuffle();
    }
    if let Some(table) = controller.state().table() {
        tracing::info!(
            shown = table.displayed().len(),
            total = table.store().len(),
            "prepared user table"
        );
    }

    match controller.render() {
        RenderView::Table { query, sort, rows, .. } => {
            if !query.is_empty() {
                println!("query: {query}");
            }
            if controller.state().table().is_some_and(|t| t.sort_active()) {
                println!("sorted by {} ({})", sort.field.label(), sort.direction.label());
            }
            println!("{}", format_table(&rows));
            let total = controller.state().table().map_or(0, |t| t.store().len());
            println!("{} of {total} users", rows.len());
        }
        other => bail!("unexpected view after load: {other:?}"),
    }

    Ok(())
}
