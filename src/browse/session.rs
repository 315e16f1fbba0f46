//! Interactive browse session.
//!
//! A line-oriented shell over stdin, driven by a `tokio::select!` loop.
//! Plain input becomes the search term through a fixed-delay debounce (the
//! latest line always wins; an earlier pending term is replaced, never
//! queued). `:`-prefixed lines are commands and apply immediately.

use anyhow::Result;
use log::{debug, info};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{sleep_until, Duration, Instant};

use crate::browse::render::render;
use crate::browse::view::{Layout, SortColumn, ViewState};
use crate::catalog::{Catalog, Locale};
use crate::config::BrowserConfig;
use crate::xref::RequirementIndex;

/// Defers search recomputation until input has settled for a fixed delay.
/// Each new term replaces the pending one and restarts the window.
#[derive(Debug)]
pub struct SearchDebouncer {
    delay: Duration,
    pending: Option<String>,
    deadline: Option<Instant>,
}

impl SearchDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            deadline: None,
        }
    }

    /// Replace any pending term and restart the delay window.
    pub fn push(&mut self, term: String) {
        self.pending = Some(term);
        self.deadline = Some(Instant::now() + self.delay);
    }

    /// When armed, the instant the pending term settles.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Take the settled term and disarm.
    pub fn take(&mut self) -> Option<String> {
        self.deadline = None;
        self.pending.take()
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Search(String),
    Sort(String),
    SetLocale(String),
    Cards,
    Table,
    Help,
    Quit,
    Unknown(String),
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let Some(rest) = line.strip_prefix(':') else {
        return Command::Search(line.to_string());
    };
    let mut parts = rest.splitn(2, char::is_whitespace);
    let head = parts.next().unwrap_or("").to_ascii_lowercase();
    let arg = parts.next().unwrap_or("").trim();
    match head.as_str() {
        "sort" => Command::Sort(arg.to_string()),
        "locale" => Command::SetLocale(arg.to_string()),
        "cards" => Command::Cards,
        "table" => Command::Table,
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    }
}

fn help_text() -> String {
    let columns: Vec<&str> = SortColumn::ALL.iter().map(|c| c.as_str()).collect();
    let locales: Vec<&str> = Locale::ALL.iter().map(|l| l.as_str()).collect();
    format!(
        "Type to search (empty line clears). Commands:\n\
         :sort <column>   select a column, again to flip ({})\n\
         :locale <code>   switch display language ({})\n\
         :cards / :table  switch layout\n\
         :help            this text\n\
         :quit            exit",
        columns.join(", "),
        locales.join(", ")
    )
}

/// Run the interactive session until `:quit`, EOF, or ctrl-c.
pub async fn run(catalog: Catalog, browser: &BrowserConfig) -> Result<()> {
    let mut state = ViewState::new(browser.locale());
    let mut index = RequirementIndex::build(&catalog, state.locale);
    let mut debounce = SearchDebouncer::new(Duration::from_millis(browser.debounce_ms));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", render(&catalog, &index, &state, browser.page_size));
    println!("{} items loaded. :help for commands.", catalog.items.len());

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    debug!("stdin closed, ending session");
                    break;
                };
                match parse_command(&line) {
                    Command::Quit => break,
                    Command::Help => println!("{}", help_text()),
                    Command::Cards => {
                        state.layout = Layout::Cards;
                        println!("{}", render(&catalog, &index, &state, browser.page_size));
                    }
                    Command::Table => {
                        state.layout = Layout::Table;
                        println!("{}", render(&catalog, &index, &state, browser.page_size));
                    }
                    Command::Sort(arg) => match SortColumn::parse(&arg) {
                        Some(column) => {
                            state.select_column(column);
                            println!("{}", render(&catalog, &index, &state, browser.page_size));
                        }
                        None => {
                            let columns: Vec<&str> =
                                SortColumn::ALL.iter().map(|c| c.as_str()).collect();
                            println!("Unknown column '{}'. One of: {}", arg, columns.join(", "));
                        }
                    },
                    Command::SetLocale(arg) => match arg.parse::<Locale>() {
                        Ok(locale) => {
                            state.locale = locale;
                            // Name resolution feeds the maps, so a locale
                            // change rebuilds them wholesale.
                            index = RequirementIndex::build(&catalog, locale);
                            println!("{}", render(&catalog, &index, &state, browser.page_size));
                        }
                        Err(e) => println!("{}", e),
                    },
                    Command::Unknown(cmd) => {
                        println!("Unknown command ':{}'. :help lists commands.", cmd);
                    }
                    Command::Search(term) => debounce.push(term),
                }
            }

            // Armed only while a search term is pending; otherwise park the
            // arm on a future that never resolves.
            _ = async {
                match debounce.deadline() {
                    Some(deadline) => sleep_until(deadline).await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(term) = debounce.take() {
                    debug!("search settled after debounce");
                    state.search = term;
                    println!("{}", render(&catalog, &index, &state, browser.page_size));
                }
            }

            _ = tokio::signal::ctrl_c() => {
                info!("received shutdown signal");
                break;
            }
        }
    }

    Ok(())
}
