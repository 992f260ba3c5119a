use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use ggoolmoney::{
    chosung, dates,
    config::Config,
    render, LedgerStore, SortConfig, SortDirection, SortKey, TabFilter, TransactionDraft,
    TransactionFilter,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ggoolmoney", about = "꿀머니 — expense ledger with chosung search")]
struct Cli {
    /// Write debug logs to /tmp/ggoolmoney-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    debug: bool,

    /// Ledger directory; overrides `[ledger] data_dir` from config.toml.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List transactions matching QUERY in description, memo, or tab name.
    Search {
        /// Search text; bare consonants (ㅅㅂ) match leading consonants.
        #[arg(default_value = "")]
        query: String,
        /// Only show transactions in this tab.
        #[arg(long)]
        tab: Option<String>,
        /// Sort column: date, description, amount, tabId, createdAt.
        #[arg(long, value_parser = parse_sort_key)]
        sort: Option<SortKey>,
        #[arg(long, conflicts_with = "desc")]
        asc: bool,
        #[arg(long)]
        desc: bool,
    },
    /// Record a new transaction.
    Add {
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        description: String,
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        memo: Option<String>,
        #[arg(long)]
        tab: Option<String>,
    },
    /// Change fields of an existing transaction.
    Edit {
        id: String,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        amount: Option<f64>,
        #[arg(long)]
        memo: Option<String>,
        #[arg(long)]
        tab: Option<String>,
        /// Move the transaction out of its tab.
        #[arg(long, conflicts_with = "tab")]
        unclassify: bool,
    },
    /// Delete a transaction.
    Delete { id: String },
    /// List tabs.
    Tabs,
    /// Create a tab.
    TabAdd {
        name: String,
        #[arg(long, default_value = "📎")]
        icon: String,
        #[arg(long, default_value = "bg-gray-500")]
        color: String,
    },
    /// Rename a tab.
    TabRename { id: String, name: String },
    /// Remove a tab; its transactions become unclassified.
    TabRemove { id: String },
    /// Restore the default tabs.
    TabReset,
    /// Print the leading-consonant string of TEXT.
    Chosung { text: String },
    /// Exit 0 if TEXT matches QUERY, 1 otherwise.
    Match { text: String, query: String },
}

fn parse_sort_key(s: &str) -> Result<SortKey, String> {
    match s {
        "date" => Ok(SortKey::Date),
        "description" => Ok(SortKey::Description),
        "amount" => Ok(SortKey::Amount),
        "tabId" | "tab" => Ok(SortKey::TabId),
        "createdAt" | "created" => Ok(SortKey::CreatedAt),
        other => Err(format!("unknown sort key {other:?}")),
    }
}

fn init_tracing(debug: bool) -> anyhow::Result<()> {
    if debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/ggoolmoney-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("ggoolmoney debug log started — tail -f /tmp/ggoolmoney-debug.log");
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .init();
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug)?;

    // Pure commands need neither config nor ledger.
    match &cli.command {
        Command::Chosung { text } => {
            println!("{}", chosung::chosung_string(text));
            return Ok(());
        }
        Command::Match { text, query } => {
            let hit = chosung::matches(text, query);
            println!("{hit}");
            std::process::exit(if hit { 0 } else { 1 });
        }
        _ => {}
    }

    let config = Config::load().context("loading config.toml")?;
    let data_dir = cli.data_dir.clone().unwrap_or_else(|| config.ledger.data_dir());
    let store = LedgerStore::new(data_dir);
    let mut ledger = store.load()?;

    match cli.command {
        Command::Search { query, tab, sort, asc, desc } => {
            let mut sort_config = config.search.default_sort();
            if let Some(key) = sort {
                sort_config = SortConfig { key, direction: SortDirection::Ascending };
            }
            if asc {
                sort_config.direction = SortDirection::Ascending;
            } else if desc {
                sort_config.direction = SortDirection::Descending;
            }
            let tab_filter = match tab {
                Some(id) => TabFilter::Tab(id),
                None => TabFilter::All,
            };
            let filter = TransactionFilter::new(query)
                .with_tab(tab_filter)
                .with_sort(Some(sort_config));
            let visible = filter.apply(&ledger.transactions, &ledger.tabs);
            println!("{}", render::transaction_list(&visible, &ledger.tabs, &config.display));
            return Ok(());
        }
        Command::Add { date, description, amount, memo, tab } => {
            let date = match date {
                Some(d) => dates::parse_date(&d)?,
                None => dates::parse_date(&dates::today_iso())?,
            };
            let draft = TransactionDraft { date, description, amount, memo, tab_id: tab };
            let tx = ledger.add_transaction(draft)?;
            let tab = tx.tab_id.as_deref().and_then(|id| ledger.tab(id));
            println!("{}", render::transaction_line(&tx, tab, &config.display));
        }
        Command::Edit { id, date, description, amount, memo, tab, unclassify } => {
            let Some(existing) = ledger.transaction(&id) else {
                bail!("no transaction with id {id}");
            };
            let draft = TransactionDraft {
                date: match date {
                    Some(d) => dates::parse_date(&d)?,
                    None => existing.date,
                },
                description: description.unwrap_or_else(|| existing.description.clone()),
                amount: amount.unwrap_or(existing.amount),
                memo: memo.or_else(|| existing.memo.clone()),
                tab_id: if unclassify { None } else { tab.or_else(|| existing.tab_id.clone()) },
            };
            let tx = ledger.edit_transaction(&id, draft)?;
            let tab = tx.tab_id.as_deref().and_then(|id| ledger.tab(id));
            println!("{}", render::transaction_line(&tx, tab, &config.display));
        }
        Command::Delete { id } => {
            if !ledger.delete(&id) {
                bail!("no transaction with id {id}");
            }
            println!("deleted {id}");
        }
        Command::Tabs => {
            for tab in &ledger.tabs {
                println!("{}", render::tab_line(tab));
            }
            return Ok(());
        }
        Command::TabAdd { name, icon, color } => {
            let tab = ledger.add_tab(&name, &icon, &color)?;
            println!("{}", render::tab_line(&tab));
        }
        Command::TabRename { id, name } => {
            let tab = ledger.rename_tab(&id, &name)?;
            println!("{}", render::tab_line(&tab));
        }
        Command::TabRemove { id } => {
            if !ledger.remove_tab(&id) {
                bail!("no tab with id {id}");
            }
            println!("removed tab {id}");
        }
        Command::TabReset => {
            ledger.reset_tabs();
            for tab in &ledger.tabs {
                println!("{}", render::tab_line(tab));
            }
        }
        Command::Chosung { .. } | Command::Match { .. } => unreachable!("handled above"),
    }

    store.save(&ledger)?;
    Ok(())
}
