//! Football form guide CLI
//!
//! Analyzes a team's recent matches from a CSV file or API-Football and
//! writes terminal and HTML reports.

use clap::{Parser, Subcommand};
use footy::{Config, Result};

#[derive(Parser)]
#[command(name = "footy")]
#[command(about = "Football team form analysis from CSV or API-Football", long_about = None)]
struct Cli {
    /// Config file path
    #[arg(short, long, default_value = "footy.toml")]
    config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one team from a CSV file
    Team {
        /// Team name (Turkish characters optional)
        name: String,
        #[command(flatten)]
        source: CsvArgs,
        #[command(flatten)]
        report: ReportArgs,
    },
    /// Compare two teams from a CSV file
    Compare {
        team1: String,
        team2: String,
        #[command(flatten)]
        source: CsvArgs,
        #[command(flatten)]
        report: ReportArgs,
        /// Output format
        #[arg(long, default_value = "table")]
        format: OutputFormat,
    },
    /// API-Football commands (needs API_FOOTBALL_KEY)
    Api {
        #[command(subcommand)]
        action: ApiCommands,
    },
    /// Write a default config file
    Init,
}

#[derive(Subcommand)]
enum ApiCommands {
    /// List available leagues
    Leagues,
    /// Search teams by name (at least 3 characters)
    Search { query: String },
    /// Analyze one team
    Team {
        #[arg(long)]
        team_id: i64,
        #[arg(long)]
        league_id: i64,
        /// Season year (default from config)
        #[arg(long)]
        season: Option<u16>,
        #[command(flatten)]
        report: ReportArgs,
    },
    /// Compare two teams
    Compare {
        #[arg(long)]
        team1_id: i64,
        #[arg(long)]
        team2_id: i64,
        #[arg(long)]
        league_id: i64,
        /// Season year (default from config)
        #[arg(long)]
        season: Option<u16>,
        #[command(flatten)]
        report: ReportArgs,
        /// Output format
        #[arg(long, default_value = "table")]
        format: OutputFormat,
    },
}

#[derive(clap::Args)]
struct CsvArgs {
    /// CSV file with date,home_team,away_team,home_goals,away_goals
    #[arg(long)]
    csv: Option<String>,
}

#[derive(clap::Args)]
struct ReportArgs {
    /// Number of most recent matches
    #[arg(short = 'n', long)]
    last: Option<usize>,
    /// HTML report path
    #[arg(short, long)]
    output: Option<String>,
}

#[derive(Clone, Debug)]
enum OutputFormat {
    Table,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use table or json.", s)),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    // API key may live in .env
    dotenvy::dotenv().ok();

    // Load or create config
    let config = if std::path::Path::new(&cli.config).exists() {
        match Config::load(&cli.config) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        Config::default()
    };

    let result = match cli.command {
        Commands::Team {
            name,
            source,
            report,
        } => commands::csv_team(&config, &name, &source, &report),
        Commands::Compare {
            team1,
            team2,
            source,
            report,
            format,
        } => commands::csv_compare(&config, &team1, &team2, &source, &report, format),
        Commands::Api { action } => match action {
            ApiCommands::Leagues => commands::api_leagues(&config),
            ApiCommands::Search { query } => commands::api_search(&config, &query),
            ApiCommands::Team {
                team_id,
                league_id,
                season,
                report,
            } => commands::api_team(&config, team_id, league_id, season, &report),
            ApiCommands::Compare {
                team1_id,
                team2_id,
                league_id,
                season,
                report,
                format,
            } => commands::api_compare(
                &config, team1_id, team2_id, league_id, season, &report, format,
            ),
        },
        Commands::Init => commands::init(&cli.config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

mod commands {
    use super::*;
    use footy::data::api::ApiClient;
    use footy::data::{fetch_team_matches, load_matches, TeamFixtures};
    use footy::report::{
        comparison_json, comparison_report_html, format_comparison, format_match_comment,
        format_prediction_summary, format_team_report, team_report_html, write_report,
    };
    use footy::{
        analyze_team, match_comment, predict_summary, FootyError, MatchRecord, NameMatch,
        PredictionSummary, TeamAnalysis, TeamId,
    };

    /// Most leagues printed by `api leagues`
    const LEAGUE_LIST_LIMIT: usize = 100;
    /// Most teams printed by `api search`
    const SEARCH_LIST_LIMIT: usize = 20;

    pub fn init(config_path: &str) -> Result<()> {
        let config = Config::default();
        config.save(config_path)?;
        println!("Created default config at {}", config_path);

        println!("\nNext steps:");
        println!("  1. Edit {} to point at your match CSV", config_path);
        println!("  2. Run 'footy team \"Galatasaray\"' for a single-team report");
        println!("  3. Run 'footy compare \"Team A\" \"Team B\"' to compare two teams");
        println!("  4. Set API_FOOTBALL_KEY and use 'footy api ...' for live data");

        Ok(())
    }

    fn window(config: &Config, report: &ReportArgs) -> usize {
        report.last.unwrap_or(config.analysis.last_n)
    }

    fn output_path<'a>(config: &'a Config, report: &'a ReportArgs) -> &'a str {
        report.output.as_deref().unwrap_or(&config.data.output_path)
    }

    fn load_csv(config: &Config, source: &CsvArgs) -> Result<Vec<MatchRecord>> {
        let path = source.csv.as_deref().unwrap_or(&config.data.csv_path);
        load_matches(path)
    }

    fn single_report(analysis: &TeamAnalysis, output: &str) -> Result<()> {
        print!("{}", format_team_report(analysis));
        write_report(output, &team_report_html(analysis))?;
        println!("\nHTML report saved: {}", output);
        Ok(())
    }

    /// Text printed to stdout for a comparison; JSON mode emits only the document
    pub(crate) fn comparison_stdout(
        a: &TeamAnalysis,
        b: &TeamAnalysis,
        comment: &str,
        summary: &PredictionSummary,
        format: &OutputFormat,
    ) -> Result<String> {
        match format {
            OutputFormat::Table => Ok(format!(
                "{}\n{}\n{}",
                format_comparison(a, b),
                format_match_comment(comment),
                format_prediction_summary(summary)
            )),
            OutputFormat::Json => comparison_json(a, b, comment, summary),
        }
    }

    fn comparison_report(
        a: &TeamAnalysis,
        b: &TeamAnalysis,
        output: &str,
        format: OutputFormat,
    ) -> Result<()> {
        let comment = match_comment(&a.total, &b.total);
        let summary = predict_summary(&a.total, &b.total, &a.team_name, &b.team_name);

        println!("{}", comparison_stdout(a, b, &comment, &summary, &format)?);

        let html = comparison_report_html(a, b, Some(&comment), Some(&summary));
        write_report(output, &html)?;
        if let OutputFormat::Table = format {
            println!("HTML report saved: {}", output);
        }
        Ok(())
    }

    pub fn csv_team(config: &Config, name: &str, source: &CsvArgs, report: &ReportArgs) -> Result<()> {
        let records = load_csv(config, source)?;
        let analysis = analyze_team(&records, name, window(config, report), NameMatch::Normalized)?;
        single_report(&analysis, output_path(config, report))
    }

    pub fn csv_compare(
        config: &Config,
        team1: &str,
        team2: &str,
        source: &CsvArgs,
        report: &ReportArgs,
        format: OutputFormat,
    ) -> Result<()> {
        let records = load_csv(config, source)?;
        let last_n = window(config, report);
        let a = analyze_team(&records, team1, last_n, NameMatch::Normalized)?;
        let b = analyze_team(&records, team2, last_n, NameMatch::Normalized)?;
        comparison_report(&a, &b, output_path(config, report), format)
    }

    /// Analyze fetched fixtures under the provider's canonical name
    fn analyze_fetched(fetched: TeamFixtures, team: TeamId, last_n: usize) -> Result<TeamAnalysis> {
        if fetched.records.is_empty() {
            log::warn!(
                "No completed matches for team {}; check the league, season and team id",
                team
            );
            return Err(FootyError::EmptyDataset);
        }
        analyze_team(&fetched.records, &fetched.team_name, last_n, NameMatch::Exact)
    }

    pub fn api_team(
        config: &Config,
        team_id: i64,
        league_id: i64,
        season: Option<u16>,
        report: &ReportArgs,
    ) -> Result<()> {
        let client = ApiClient::from_env(&config.api)?;
        let season = season.unwrap_or(config.api.default_season);
        let last_n = window(config, report);

        let team = TeamId(team_id);
        let fetched = fetch_team_matches(&client, team, league_id, season, last_n)?;
        let analysis = analyze_fetched(fetched, team, last_n)?;
        single_report(&analysis, output_path(config, report))
    }

    pub fn api_compare(
        config: &Config,
        team1_id: i64,
        team2_id: i64,
        league_id: i64,
        season: Option<u16>,
        report: &ReportArgs,
        format: OutputFormat,
    ) -> Result<()> {
        let client = ApiClient::from_env(&config.api)?;
        let season = season.unwrap_or(config.api.default_season);
        let last_n = window(config, report);

        let (team1, team2) = (TeamId(team1_id), TeamId(team2_id));
        let fetched1 = fetch_team_matches(&client, team1, league_id, season, last_n)?;
        let fetched2 = fetch_team_matches(&client, team2, league_id, season, last_n)?;
        let a = analyze_fetched(fetched1, team1, last_n)?;
        let b = analyze_fetched(fetched2, team2, last_n)?;
        comparison_report(&a, &b, output_path(config, report), format)
    }

    pub fn api_leagues(config: &Config) -> Result<()> {
        let client = ApiClient::from_env(&config.api)?;
        let leagues = client.leagues()?;
        if leagues.is_empty() {
            println!("No leagues found.");
            return Ok(());
        }

        println!("\nLeagues (league_id | name | country)");
        println!("{}", "─".repeat(60));
        for league in leagues.iter().take(LEAGUE_LIST_LIMIT) {
            let id = league.id.map(|id| id.to_string()).unwrap_or_default();
            println!("{:>10} | {:<30} | {}", id, league.name, league.country);
        }
        if leagues.len() > LEAGUE_LIST_LIMIT {
            println!("... and {} more", leagues.len() - LEAGUE_LIST_LIMIT);
        }
        Ok(())
    }

    pub fn api_search(config: &Config, query: &str) -> Result<()> {
        let client = ApiClient::from_env(&config.api)?;
        let teams = client.search_teams(query)?;
        if teams.is_empty() {
            println!("No teams found for '{}'.", query);
            return Ok(());
        }

        println!("\nTeam search: '{}'", query);
        println!("{}", "─".repeat(50));
        for team in teams.iter().take(SEARCH_LIST_LIMIT) {
            let id = team.id.map(|id| id.to_string()).unwrap_or_default();
            println!("  team_id: {:<6} | {:<25} | {}", id, team.name, team.country);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::commands::comparison_stdout;
    use super::OutputFormat;
    use chrono::NaiveDate;
    use footy::{match_comment, predict_summary, MatchRecord, TeamAnalysis};

    fn analysis(name: &str, scored: u32, conceded: u32) -> TeamAnalysis {
        let matches = vec![MatchRecord {
            date: NaiveDate::from_ymd_opt(2025, 1, 18).unwrap(),
            home_team: name.to_string(),
            away_team: "Hatayspor".to_string(),
            home_goals: scored,
            away_goals: conceded,
        }];
        TeamAnalysis::from_matches(name.to_string(), matches)
    }

    #[test]
    fn test_json_stdout_is_pure_json() {
        let a = analysis("Göztepe", 3, 1);
        let b = analysis("Kayserispor", 1, 1);
        let comment = match_comment(&a.total, &b.total);
        let summary = predict_summary(&a.total, &b.total, &a.team_name, &b.team_name);

        let text = comparison_stdout(&a, &b, &comment, &summary, &OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["team1"]["team_name"], "Göztepe");
        assert!(!text.contains("HTML report saved"));

        let table = comparison_stdout(&a, &b, &comment, &summary, &OutputFormat::Table).unwrap();
        assert!(table.contains("TEAM COMPARISON"));
        assert!(table.contains("PREDICTION SUMMARY"));
    }
}
