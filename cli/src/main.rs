//! `storage-inspector`: inspect and edit a JSON-file key/value store with the
//! same rules the browser popup applies to a page's `localStorage`.

mod store;

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use inspector::edit::delete_prompt;
use inspector::format::render_view;
use inspector::{Cache, EditSession, Inspector, Notice, Outcome, StoredValue};

use crate::store::FileAccessor;


#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid JSON in store file: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("store file {0} must hold a JSON object")]
    InvalidStore(String),
    #[error("{0}")]
    Action(String),
    #[error("{prompt} pass --yes to confirm")]
    Unconfirmed { prompt: String },
}

#[derive(Parser, Debug)]
#[command(
    name = "storage-inspector",
    about = "Inspect and edit a localStorage-shaped JSON store"
)]
struct Cli {
    /// JSON file mapping keys to raw stored strings.
    #[arg(
        long,
        env = "STORAGE_INSPECTOR_FILE",
        default_value = "localStorage.json"
    )]
    store: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the whole store as pretty JSON.
    Show {
        /// Print the highlighted HTML markup the popup renders instead.
        #[arg(long, default_value_t = false)]
        markup: bool,
    },
    /// Print `key<TAB>value` lines, sorted by key.
    List {
        #[arg(long, default_value = "")]
        filter: String,
    },
    /// Print item count and total size.
    Stats,
    /// Write every key of a JSON object into the store.
    Import(ImportArgs),
    /// Add or update one entry.
    Set {
        key: String,
        value: String,
        /// Parse VALUE as JSON and store its compact form.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Delete one entry.
    Delete {
        key: String,
        #[arg(long, default_value_t = false)]
        yes: bool,
    },
    /// Print the JSON the popup's Copy button would put on the clipboard.
    Export,
}

#[derive(Args, Debug)]
struct ImportArgs {
    #[arg(long, default_value = "-", help = "Input file path, or - for stdin")]
    input: String,

    /// Remove every existing key before writing.
    #[arg(long, default_value_t = false)]
    clear: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let accessor = FileAccessor::open(cli.store)?;
    log::debug!("using store {}", accessor.path().display());
    let inspector = Inspector::new(accessor);

    match cli.command {
        Command::Show { markup } => {
            let cache = load(&inspector).await?;
            if markup {
                println!("{}", render_view(cache.view()));
            } else {
                println!("{}", cache.copy_payload().unwrap_or_else(|| "{}".to_owned()));
            }
            Ok(())
        }
        Command::List { filter } => {
            let cache = load(&inspector).await?;
            for line in list_lines(&cache, &filter) {
                println!("{line}");
            }
            Ok(())
        }
        Command::Stats => {
            let cache = load(&inspector).await?;
            let counters = cache.counters();
            println!("Items: {}", counters.items);
            println!("Size: {}", counters.size);
            Ok(())
        }
        Command::Import(args) => {
            let text = read_input(&args.input)?;
            report(inspector.import(&text, args.clear).await)
        }
        Command::Set { key, value, json } => {
            let cache = load(&inspector).await?;
            let session = set_session(&cache, &key, &value, json);
            report(inspector.save(&session).await)
        }
        Command::Delete { key, yes } => {
            if !yes {
                return Err(CliError::Unconfirmed {
                    prompt: delete_prompt(&key),
                });
            }
            let cache = load(&inspector).await?;
            report(inspector.delete(&delete_session(&cache, &key)).await)
        }
        Command::Export => {
            let cache = load(&inspector).await?;
            match cache.copy_payload() {
                Some(payload) => {
                    println!("{payload}");
                    Ok(())
                }
                None => notice(&Notice::error(inspector::consts::MSG_NOTHING_TO_COPY)),
            }
        }
    }
}

async fn load(inspector: &Inspector<FileAccessor>) -> Result<Cache, CliError> {
    let mut cache = Cache::default();
    cache.replace(inspector.load().await);
    if cache.view().is_inaccessible() {
        return Err(CliError::Action(inspector::consts::MSG_INACCESSIBLE.to_owned()));
    }
    Ok(cache)
}

fn read_input(input: &str) -> Result<String, CliError> {
    if input == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    Ok(fs::read_to_string(input)?)
}

fn list_lines(cache: &Cache, filter: &str) -> Vec<String> {
    cache
        .rows(filter)
        .into_iter()
        .map(|row| format!("{}\t{}", row.key, row.display))
        .collect()
}

/// Session equivalent to clicking the row for `key` (or Add when it is new)
/// and typing `value`.
fn set_session(cache: &Cache, key: &str, value: &str, json: bool) -> EditSession {
    let mut session = match cache.entry(key) {
        Some(stored) => EditSession::open_for_edit(key, stored),
        None => {
            let mut session = EditSession::open_for_add();
            session.set_key(key);
            session
        }
    };
    session.set_value(value);
    session.set_json(json);
    session
}

/// Session for deleting `key`. Deleting a key that is not stored is allowed.
fn delete_session(cache: &Cache, key: &str) -> EditSession {
    let fallback = StoredValue::raw("");
    EditSession::open_for_edit(key, cache.entry(key).unwrap_or(&fallback))
}

fn report(outcome: Outcome) -> Result<(), CliError> {
    notice(&outcome.notice)
}

fn notice(notice: &Notice) -> Result<(), CliError> {
    if notice.is_error() {
        return Err(CliError::Action(notice.message.clone()));
    }
    eprintln!("{}", notice.message);
    Ok(())
}
