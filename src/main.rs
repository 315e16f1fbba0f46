//! Binary entrypoint for the scrapdex CLI.
//!
//! Commands:
//! - `enrich` - run the offline enrichment pass over the data directory
//! - `browse [--search <term>] [--sort <column>] [--desc] [--cards] [--locale <code>] [--once]`
//!   - interactive browser on a TTY, one-shot render otherwise
//! - `status` - print catalog counts and cross-reference coverage
//! - `init` - create a starter `config.toml`
//!
//! See the library crate docs for module-level details: `scrapdex::`.
use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use log::info;

use scrapdex::browse::{self, render_view, SortColumn, SortDirection, ViewState};
use scrapdex::catalog::{load_bots_from_json, Catalog, Locale};
use scrapdex::config::Config;
use scrapdex::xref::RequirementIndex;

#[derive(Parser)]
#[command(name = "scrapdex")]
#[command(about = "A browsable item database for ARC Raiders")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Enrich the items catalog in place with derived fields
    Enrich,
    /// Browse the enriched catalogs (interactive on a TTY)
    Browse {
        /// Search term (implies one-shot mode)
        #[arg(long)]
        search: Option<String>,

        /// Sort column, e.g. name, value, rarity, quests (implies one-shot mode)
        #[arg(long)]
        sort: Option<String>,

        /// Sort descending instead of ascending (implies one-shot mode)
        #[arg(long)]
        desc: bool,

        /// Card layout instead of the table (implies one-shot mode)
        #[arg(long)]
        cards: bool,

        /// Display-name language code, overriding the config
        #[arg(long)]
        locale: Option<String>,

        /// Render once and exit even on a TTY
        #[arg(long)]
        once: bool,
    },
    /// Show catalog counts and cross-reference coverage
    Status,
    /// Initialize a new scrapdex configuration
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config early to configure logging (except for Init which writes it)
    let pre_config = match cli.command {
        Commands::Init => None,
        _ => Config::load(&cli.config).await.ok(),
    };
    init_logging(&pre_config, cli.verbose);

    match cli.command {
        Commands::Enrich => {
            let config = pre_config.unwrap_or(Config::load(&cli.config).await?);
            info!("Starting scrapdex v{} enrichment", env!("CARGO_PKG_VERSION"));
            scrapdex::enrich::run(&config.database)?;
        }
        Commands::Browse {
            search,
            sort,
            desc,
            cards,
            locale,
            once,
        } => {
            let mut config = pre_config.unwrap_or(Config::load(&cli.config).await?);
            if let Some(code) = locale {
                code.parse::<Locale>()?;
                config.browser.locale = code;
            }
            let catalog = Catalog::load_dir(&config.database)?;
            info!(
                "Loaded {} items, {} quests, {} workbenches, {} projects",
                catalog.items.len(),
                catalog.quests.len(),
                catalog.workbenches.len(),
                catalog.projects.len()
            );

            let one_shot =
                once || search.is_some() || sort.is_some() || desc || cards
                    || !atty::is(atty::Stream::Stdin);
            if one_shot {
                let mut state = ViewState::new(config.browser.locale());
                if let Some(term) = search {
                    state.search = term;
                }
                if let Some(column) = sort.as_deref() {
                    state.sort_column = SortColumn::parse(column).ok_or_else(|| {
                        anyhow!(
                            "unknown sort column '{}' (one of: {})",
                            column,
                            SortColumn::ALL.map(|c| c.as_str()).join(", ")
                        )
                    })?;
                }
                if desc {
                    state.sort_direction = SortDirection::Descending;
                }
                if cards {
                    state.layout = browse::Layout::Cards;
                }
                let index = RequirementIndex::build(&catalog, state.locale);
                print!(
                    "{}",
                    render_view(&catalog, &index, &state, config.browser.page_size)
                );
            } else {
                browse::run_session(catalog, &config.browser).await?;
            }
        }
        Commands::Status => {
            let config = pre_config.unwrap_or(Config::load(&cli.config).await?);
            show_status(&config)?;
        }
        Commands::Init => {
            info!("Initializing new scrapdex configuration");
            Config::create_default(&cli.config).await?;
            info!("Configuration file created at {}", cli.config);
        }
    }

    Ok(())
}

fn show_status(config: &Config) -> Result<()> {
    let catalog = Catalog::load_dir(&config.database)?;
    let bots = load_bots_from_json(config.database.bots_path())?;
    let index = RequirementIndex::build(&catalog, config.browser.locale());

    let with_recycle = catalog
        .items
        .iter()
        .filter(|i| i.recycles_into.is_some())
        .count();
    let enriched = catalog
        .items
        .iter()
        .filter(|i| i.recycle_value > 0 || !i.recycled_from.is_empty() || !i.dropped_by.is_empty())
        .count();
    let dropping = bots.iter().filter(|b| !b.drops.is_empty()).count();
    let with_objectives = catalog
        .quests
        .iter()
        .filter(|q| !q.objectives.is_empty())
        .count();
    let levels: usize = catalog.workbenches.iter().map(|w| w.levels.len()).sum();
    let phases: usize = catalog.projects.iter().map(|p| p.phases.len()).sum();

    println!("Data directory: {}", config.database.data_dir);
    println!(
        "Items:       {} ({} with recycle rules, {} carrying enriched fields)",
        catalog.items.len(),
        with_recycle,
        enriched
    );
    println!("Bots:        {} ({} dropping items)", bots.len(), dropping);
    println!(
        "Quests:      {} ({} with objective text)",
        catalog.quests.len(),
        with_objectives
    );
    println!(
        "Workbenches: {} ({} upgrade levels)",
        catalog.workbenches.len(),
        levels
    );
    println!(
        "Projects:    {} ({} phases)",
        catalog.projects.len(),
        phases
    );
    println!(
        "Cross-refs:  {} items wanted by quests, {} by workbenches, {} by projects",
        index.quest_item_count(),
        index.workbench_item_count(),
        index.project_item_count()
    );
    Ok(())
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    let base_level = match verbosity {
        0 => config
            .as_ref()
            .and_then(|c| c.logging.level.parse().ok())
            .unwrap_or(log::LevelFilter::Info),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);

    if let Some(file) = config.as_ref().and_then(|c| c.logging.file.clone()) {
        if let Ok(f) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&file)
        {
            let sink = std::sync::Arc::new(std::sync::Mutex::new(f));
            // When stdout is a terminal, mirror log lines to the console too.
            let is_tty = atty::is(atty::Stream::Stdout);
            builder.format(move |fmt, record| {
                let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
                let line = format!("{} [{}] {}", ts, record.level(), record.args());
                if let Ok(mut guard) = sink.lock() {
                    let _ = writeln!(guard, "{}", line);
                }
                if is_tty {
                    writeln!(fmt, "{}", line)
                } else {
                    Ok(())
                }
            });
        }
    } else {
        builder.format(|fmt, record| {
            writeln!(
                fmt,
                "{} [{}] {}",
                chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
                record.level(),
                record.args()
            )
        });
    }
    let _ = builder.try_init();
}
