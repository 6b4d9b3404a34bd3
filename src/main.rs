use clap::Parser;
use esports_schedule::cli::{Args, GameTitle};
use esports_schedule::config::Config;
use esports_schedule::data_fetcher::api::{HttpTransport, ScheduleService};
use esports_schedule::data_fetcher::models::CanonicalMatch;
use esports_schedule::data_fetcher::processors::{format_kst, parse_year_month};
use esports_schedule::error::AppError;
use esports_schedule::logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    if args.list_config {
        Config::display().await?;
        return Ok(());
    }

    let (log_file_path, _guard) = setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    let config = Config::load().await?;
    let transport = HttpTransport::new(config.http_timeout_seconds)?;
    let service = ScheduleService::new(config, transport);

    let result = match args.game {
        GameTitle::Lol => match &args.month {
            Some(month) => {
                let (year, month) = parse_year_month(month)?;
                service.lol_schedule(&args.league, year, month).await
            }
            None => service.upcoming_lol_matches(&args.league, args.limit).await,
        },
        GameTitle::Valorant => service.valorant_schedule(&args.league).await,
    };

    match result {
        Ok(matches) if matches.is_empty() => {
            println!("No matches scheduled for {}.", args.league);
        }
        Ok(matches) => {
            let shown = match args.game {
                // Valorant windows can be long; honor --limit here too.
                GameTitle::Valorant => args.limit.unwrap_or(matches.len()),
                GameTitle::Lol => matches.len(),
            };
            for m in matches.iter().take(shown) {
                println!("{}", format_match_line(m, args.kst));
            }
        }
        Err(e) if e.is_league_not_found() => {
            eprintln!("Unknown league: {}", args.league);
            std::process::exit(1);
        }
        Err(e) if e.is_not_found() => {
            eprintln!("No schedule data available right now, try again later.");
            tracing::warn!("Schedule unavailable: {e}");
            std::process::exit(2);
        }
        Err(e) => return Err(e),
    }

    Ok(())
}

fn format_match_line(m: &CanonicalMatch, kst: bool) -> String {
    let when = if kst {
        format_kst(m.start_time)
    } else {
        m.start_time.format("%Y-%m-%d %H:%M UTC").to_string()
    };

    let home = placeholder_if_empty(&m.home_team_name);
    let away = placeholder_if_empty(&m.away_team_name);

    let score = match (m.home_score, m.away_score) {
        (Some(home_score), Some(away_score)) => format!(" {home_score}:{away_score}"),
        _ => String::new(),
    };

    format!("{when}  {home} vs {away}{score} [{}]", m.status)
}

fn placeholder_if_empty(name: &str) -> &str {
    if name.is_empty() { "TBD" } else { name }
}
