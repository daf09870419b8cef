use clap::Parser;
use kintai::args::{Args, Command, WordsAction};
use kintai::{commands, Config, Result, Session};
use std::process::ExitCode;
use tracing::{debug, error, trace};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();
    let log_level = args.common().log_level();
    init_logger(log_level);
    debug!("Log level set to {}", log_level.to_string().to_lowercase());

    match main_inner(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Exiting with error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

pub fn main_inner(args: Args) -> Result<()> {
    trace!("{args:?}");
    let config = Config::new(args.common().home().path());

    // Route to the appropriate command handler.
    let _: () = match args.command() {
        // The words subcommands edit stored configuration and need no sheet.
        Command::Words(words_args) => match words_args.action() {
            WordsAction::Show => commands::words_show(&config)?.print(),
            WordsAction::Set(set_args) => commands::words_set(&config, set_args.file())?.print(),
            WordsAction::Reset => commands::words_reset(&config)?.print(),
        },

        Command::Day(day_args) => {
            let session = query_session(&args, &config)?;
            commands::day(&session, day_args.day(), day_args.export())?.print()
        }

        Command::Name(name_args) => {
            let session = query_session(&args, &config)?;
            commands::name(&session, name_args.name())?.print()
        }

        Command::Range(range_args) => {
            let session = query_session(&args, &config)?;
            commands::range(&session, range_args.start(), range_args.end())?.print()
        }

        Command::Compare(compare_args) => {
            let session = query_session(&args, &config)?;
            commands::compare(&session, compare_args.first(), compare_args.second())?.print()
        }
    };
    Ok(())
}

/// Build the session a query runs against: the stored off words plus the
/// sheet named by --sheet (when present). Queries with no sheet loaded fail
/// with the typed no-sheet error.
fn query_session(args: &Args, config: &Config) -> Result<Session> {
    let mut session = Session::new(config.load_words()?);
    if let Some(path) = args.common().sheet() {
        session.load(path)?;
    }
    Ok(session)
}

/// Initializes the tracing subscriber.
pub fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => {
            // RUST_LOG exists; use it.
            EnvFilter::from_default_env()
        }
        None => {
            // RUST_LOG does not exist; use default log level for this crate only.
            EnvFilter::new(format!(
                "{}={},{}={}",
                env!("CARGO_CRATE_NAME"),
                level,
                env!("CARGO_BIN_NAME"),
                level
            ))
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
