//! These structs provide the CLI interface for the kintai CLI.

use clap::{Parser, Subcommand};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::error;
use tracing_subscriber::filter::LevelFilter;

/// kintai: look up who works when in a monthly attendance sheet.
///
/// Load an attendance sheet (CSV, employee names in the first column and one
/// column per day of the month) with --sheet, then query it: a single day's
/// roster split into working vs off, one employee's month, every employee
/// over a day range, or two employees side by side.
///
/// The list of "off words" that decides which codes count as a day off can
/// be shown and edited with the words subcommand and is kept under the
/// kintai home directory between runs.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn new(common: Common, command: Command) -> Self {
        Self { common, command }
    }

    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show a single day's roster: who is working and who is off.
    Day(DayArgs),
    /// List one employee's recorded shifts for the month.
    Name(NameArgs),
    /// List every employee's shifts over an inclusive day range.
    Range(RangeArgs),
    /// Compare two employees side by side, one line per day.
    Compare(CompareArgs),
    /// Show or edit the list of off words.
    Words(WordsArgs),
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The attendance sheet (CSV) to load before running a query.
    #[arg(long, short = 's', env = "KINTAI_SHEET")]
    sheet: Option<PathBuf>,

    /// The directory where kintai keeps its configuration. Defaults to
    /// ~/.kintai
    #[arg(long, env = "KINTAI_HOME", default_value_t = default_kintai_home())]
    home: DisplayPath,
}

impl Common {
    pub fn new(log_level: LevelFilter, sheet: Option<PathBuf>, home: PathBuf) -> Self {
        Self {
            log_level,
            sheet,
            home: home.into(),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn sheet(&self) -> Option<&Path> {
        self.sheet.as_deref()
    }

    pub fn home(&self) -> &DisplayPath {
        &self.home
    }
}

/// Args for the `kintai day` command.
#[derive(Debug, Parser, Clone)]
pub struct DayArgs {
    /// The day of the month to report on. Defaults to today.
    day: Option<String>,

    /// Also write the working section to this CSV file.
    #[arg(long)]
    export: Option<PathBuf>,
}

impl DayArgs {
    pub fn new(day: Option<String>, export: Option<PathBuf>) -> Self {
        Self { day, export }
    }

    pub fn day(&self) -> Option<&str> {
        self.day.as_deref()
    }

    pub fn export(&self) -> Option<&Path> {
        self.export.as_deref()
    }
}

/// Args for the `kintai name` command.
#[derive(Debug, Parser, Clone)]
pub struct NameArgs {
    /// The employee name, exactly as it appears in the first column.
    name: String,
}

impl NameArgs {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Args for the `kintai range` command.
#[derive(Debug, Parser, Clone)]
pub struct RangeArgs {
    /// The first day of the range.
    start: String,

    /// The last day of the range (inclusive).
    end: String,
}

impl RangeArgs {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }
}

/// Args for the `kintai compare` command.
#[derive(Debug, Parser, Clone)]
pub struct CompareArgs {
    /// The first employee name.
    first: String,

    /// The second employee name.
    second: String,
}

impl CompareArgs {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }
}

/// Args for the `kintai words` command.
#[derive(Debug, Parser, Clone)]
pub struct WordsArgs {
    #[command(subcommand)]
    action: WordsAction,
}

impl WordsArgs {
    pub fn new(action: WordsAction) -> Self {
        Self { action }
    }

    pub fn action(&self) -> &WordsAction {
        &self.action
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum WordsAction {
    /// Print the current off words, one per line.
    Show,
    /// Replace the off words with the contents of a file (or stdin). One
    /// word per line; blank lines are discarded.
    Set(WordsSetArgs),
    /// Restore the default off words.
    Reset,
}

/// Args for the `kintai words set` command.
#[derive(Debug, Parser, Clone)]
pub struct WordsSetArgs {
    /// The file to read words from. If not supplied, input will be taken
    /// from stdin.
    file: Option<PathBuf>,
}

impl WordsSetArgs {
    pub fn new(file: Option<PathBuf>) -> Self {
        Self { file }
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }
}

fn default_kintai_home() -> DisplayPath {
    DisplayPath(match dirs::home_dir() {
        Some(home) => home.join(".kintai"),
        None => {
            error!(
                "There was an error when trying to get your home directory. You can get around \
                this by providing --home or KINTAI_HOME instead of relying on the default \
                kintai home directory. If you continue using the program right now, you may have \
                problems!",
            );
            PathBuf::from(".kintai")
        }
    })
}

#[derive(Debug, Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DisplayPath(PathBuf);

impl From<PathBuf> for DisplayPath {
    fn from(value: PathBuf) -> Self {
        DisplayPath(value)
    }
}

impl Deref for DisplayPath {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for DisplayPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Display for DisplayPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_string_lossy())
    }
}

impl FromStr for DisplayPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(PathBuf::from(s)))
    }
}

impl DisplayPath {
    pub fn new(path: PathBuf) -> Self {
        Self(path)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_parse() {
        <Args as CommandFactory>::command().debug_assert();
    }

    #[test]
    fn test_day_defaults() {
        let args = Args::try_parse_from(["kintai", "day"]).unwrap();
        let Command::Day(day) = args.command() else {
            panic!("expected the day command");
        };
        assert!(day.day().is_none());
        assert!(day.export().is_none());
    }

    #[test]
    fn test_range_args() {
        let args =
            Args::try_parse_from(["kintai", "--sheet", "k.csv", "range", "5", "10"]).unwrap();
        assert_eq!(args.common().sheet(), Some(Path::new("k.csv")));
        let Command::Range(range) = args.command() else {
            panic!("expected the range command");
        };
        assert_eq!(range.start(), "5");
        assert_eq!(range.end(), "10");
    }

    #[test]
    fn test_words_set_file() {
        let args = Args::try_parse_from(["kintai", "words", "set", "words.txt"]).unwrap();
        let Command::Words(words) = args.command() else {
            panic!("expected the words command");
        };
        let WordsAction::Set(set) = words.action() else {
            panic!("expected words set");
        };
        assert_eq!(set.file(), Some(Path::new("words.txt")));
    }
}
