use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use socialgrab_collect::{collect, output, CollectRequest};
use socialgrab_common::{merge_results, AppConfig};

#[derive(Parser)]
#[command(
    name = "socialgrab",
    version,
    about = "Collect posts from social platforms, grouped by user"
)]
struct Cli {
    /// Write JSON to this file instead of stdout
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Emit single-line JSON
    #[arg(long, global = true)]
    compact: bool,

    /// Log as JSON lines on stderr
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(flatten)]
    Collect(CollectRequest),

    /// Merge previously written outputs into one grouping
    Merge {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("socialgrab=info,socialgrab_collect=info,platform_apis=info")
    });
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let results = match cli.command {
        Command::Collect(request) => {
            let config = AppConfig::from_env();
            collect(&config, &request).await?
        }
        Command::Merge { files } => {
            info!(files = files.len(), "Merging results");
            let sources = files
                .iter()
                .map(|f| output::read_results(f))
                .collect::<Result<Vec<_>>>()?;
            merge_results(sources)
        }
    };

    info!(
        users = results.len(),
        posts = output::post_count(&results),
        "Collection complete"
    );

    let rendered = output::render(&results, cli.compact)?;
    output::write_output(&rendered, cli.output.as_deref())?;

    Ok(())
}
