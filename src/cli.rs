use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, ValueEnum};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Which esports title to query
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GameTitle {
    /// League of Legends (Naver REST provider)
    Lol,
    /// Valorant (OP.GG GraphQL provider)
    Valorant,
}

/// Esports Match Schedule Viewer
///
/// Fetches League of Legends and Valorant match schedules from the Naver
/// and OP.GG esports APIs, normalizes them into one format, and prints
/// them sorted by start time.
///
/// League names are resolved case-insensitively and localized aliases are
/// accepted, e.g. "LCK", "lck", "퍼시픽".
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Esports title to query
    #[arg(value_enum)]
    pub game: GameTitle,

    /// League alias, e.g. LCK, LPL, pacific, 퍼시픽
    pub league: String,

    /// Show a specific month (YYYY-MM) instead of the upcoming matches.
    /// LoL only; Valorant always uses a rolling 30-day window.
    #[arg(long = "month", short = 'm', help_heading = "Display Options")]
    pub month: Option<String>,

    /// Maximum number of upcoming matches to show
    #[arg(long = "limit", short = 'n', help_heading = "Display Options")]
    pub limit: Option<usize>,

    /// Print match start times in Korea Standard Time instead of UTC
    #[arg(long = "kst", help_heading = "Display Options")]
    pub kst: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Enable debug logging to stdout in addition to the log file
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
