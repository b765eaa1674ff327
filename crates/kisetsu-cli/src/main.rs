mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use kisetsu_core::browse::NewestQuery;
use kisetsu_core::config::AppConfig;
use kisetsu_core::error::KisetsuError;
use kisetsu_core::models::{AiringStatus, FilterParams, MediaType};
use kisetsu_runtime::{CancellationToken, CatalogService, Latency};

#[derive(Debug, Parser)]
#[command(name = "kisetsu", version, about = "Browse the newest anime season")]
struct Cli {
    /// Config file to use instead of the per-user one.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Catalog snapshot to load instead of the configured one.
    #[arg(long, global = true, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Skip the simulated response latency.
    #[arg(long, global = true)]
    no_delay: bool,

    /// Print JSON instead of a table.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List one page of the pinned season.
    Newest {
        /// 1-based page number.
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Entries per page (defaults to browse.page_size).
        #[arg(long)]
        size: Option<usize>,

        /// Media type facet; repeatable.
        #[arg(long = "type", value_name = "TYPE")]
        types: Vec<MediaType>,

        /// Airing status facet; repeatable.
        #[arg(long = "status", value_name = "STATUS")]
        statuses: Vec<AiringStatus>,
    },
    /// List the media type facets.
    Types,
    /// List the airing status facets.
    Statuses,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("kisetsu=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(?cli, "Parsed arguments");

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), KisetsuError> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    if let Some(path) = &cli.catalog {
        config.catalog.path = path.display().to_string();
    }
    if cli.no_delay {
        config.service.latency_ms = 0;
    }

    let service = CatalogService::from_config(&config)?;

    let cancel = CancellationToken::new();
    tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Interrupted, cancelling request");
                cancel.cancel();
            }
        }
    });

    let rendered = execute(&service, cli.command, &config, cli.json, &cancel).await?;
    println!("{rendered}");
    Ok(())
}

/// Build the page query for `newest`; unset facets place no constraint.
fn newest_query(
    page: usize,
    size: Option<usize>,
    types: Vec<MediaType>,
    statuses: Vec<AiringStatus>,
    config: &AppConfig,
) -> NewestQuery {
    NewestQuery {
        offset: page,
        size: size.unwrap_or(config.browse.page_size),
        params: FilterParams {
            types: (!types.is_empty()).then_some(types),
            statuses: (!statuses.is_empty()).then_some(statuses),
        },
    }
}

async fn execute<L: Latency>(
    service: &CatalogService<L>,
    command: Command,
    config: &AppConfig,
    json: bool,
    cancel: &CancellationToken,
) -> Result<String, KisetsuError> {
    let rendered = match command {
        Command::Newest {
            page,
            size,
            types,
            statuses,
        } => {
            let query = newest_query(page, size, types, statuses, config);
            let result = service
                .get_newest_cancellable(query.offset, query.size, query.params, cancel)
                .await?;
            if json {
                serde_json::to_string_pretty(&result)?
            } else {
                output::page_table(&result, &service.policy().pin, query.offset, query.size)
            }
        }
        Command::Types => {
            let types = service.get_types_cancellable(cancel).await?;
            if json {
                serde_json::to_string_pretty(&types)?
            } else {
                output::type_list(&types)
            }
        }
        Command::Statuses => {
            let statuses = service.get_statuses_cancellable(cancel).await?;
            if json {
                serde_json::to_string_pretty(&statuses)?
            } else {
                output::status_list(&statuses)
            }
        }
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use kisetsu_core::catalog::Catalog;
    use kisetsu_runtime::NoDelay;

    use super::*;

    fn service() -> CatalogService<NoDelay> {
        CatalogService::new(
            Arc::new(Catalog::bundled().unwrap()),
            AppConfig::default().policy(),
            NoDelay,
        )
    }

    fn command(args: &[&str]) -> Command {
        let mut argv = vec!["kisetsu"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap().command
    }

    #[test]
    fn test_no_facets_means_no_constraint() {
        let config = AppConfig::default();
        let query = newest_query(1, None, vec![], vec![AiringStatus::Ongoing], &config);
        assert_eq!(query.params.types, None);
        assert_eq!(query.params.statuses, Some(vec![AiringStatus::Ongoing]));
    }

    #[test]
    fn test_size_falls_back_to_config() {
        let mut config = AppConfig::default();
        config.browse.page_size = 7;
        assert_eq!(newest_query(2, None, vec![], vec![], &config).size, 7);
        assert_eq!(newest_query(2, Some(3), vec![], vec![], &config).size, 3);
    }

    #[test]
    fn test_repeated_type_flags_collect() {
        match command(&["newest", "--type", "tv", "--type", "MOVIE", "--size", "5"]) {
            Command::Newest {
                page, size, types, ..
            } => {
                assert_eq!(page, 1);
                assert_eq!(size, Some(5));
                assert_eq!(types, vec![MediaType::Tv, MediaType::Movie]);
            }
            other => panic!("Expected Newest, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_page_zero_is_invalid_argument() {
        let config = AppConfig::default();
        let result = execute(
            &service(),
            command(&["newest", "--page", "0"]),
            &config,
            false,
            &CancellationToken::new(),
        )
        .await;
        assert!(matches!(result, Err(KisetsuError::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn test_newest_renders_first_page() {
        let config = AppConfig::default();
        let rendered = execute(
            &service(),
            command(&["newest", "--json"]),
            &config,
            true,
            &CancellationToken::new(),
        )
        .await
        .unwrap();
        let page: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(page["data"].as_array().unwrap().len(), 10);
        assert_eq!(page["total"], 31);
    }
}
