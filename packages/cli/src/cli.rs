//! Command-line interface for Pico y Placa.

use std::io::{self, BufRead, Write};

use clap::{Args, Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use picoplaca_engine::{
    holidays_for, HolidayCalendar, HolidayMode, HolidaySource, LocalHolidays, Province,
    RestrictionEvaluator, VehicleQuery,
};

use crate::config::LookupConfig;
use crate::error::Result;
use crate::remote::AbstractApiHolidays;
use crate::report::{holiday_line, verdict_sentence};

const PLATE_PROMPT: &str =
    "Enter plate (format XXX-YYYY or XX-YYYY, where X is an uppercase letter and Y a digit): ";
const DATE_PROMPT: &str = "Enter the circulation date (format YYYY-MM-DD): ";
const TIME_PROMPT: &str = "Enter the circulation time (format HH:MM): ";

/// Pico y Placa - Check whether a vehicle may circulate in Quito.
#[derive(Parser)]
#[command(name = "picoplaca")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Which regional holidays apply.
#[derive(Args, Debug, Clone)]
pub struct RegionArgs {
    /// Province whose regional holidays apply (ISO 3166-2 code)
    #[arg(long, default_value = "EC-P", conflicts_with = "national")]
    pub province: String,

    /// Only national holidays, no regional ones
    #[arg(long)]
    pub national: bool,
}

impl RegionArgs {
    /// The selected province, `None` for national holidays only.
    pub fn province(&self) -> Result<Option<Province>> {
        if self.national {
            return Ok(None);
        }
        Ok(Some(self.province.parse()?))
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check whether a vehicle may circulate at a date and time.
    ///
    /// Missing arguments are asked for interactively.
    Check {
        /// License plate (e.g., PBX-1234)
        plate: Option<String>,

        /// Date in YYYY-MM-DD format
        date: Option<String>,

        /// Time in HH:MM format
        time: Option<String>,

        /// Look holidays up with the remote provider (needs HOLIDAYS_API_KEY)
        #[arg(long)]
        online: bool,

        #[command(flatten)]
        region: RegionArgs,

        /// Also print which rule decided
        #[arg(long)]
        explain: bool,
    },

    /// List the public holidays of a year.
    Holidays {
        /// Year to list (e.g., 2021)
        year: i32,

        #[command(flatten)]
        region: RegionArgs,

        /// Print the holidays as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            plate,
            date,
            time,
            online,
            region,
            explain,
        } => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let plate = resolve_input(plate, PLATE_PROMPT, &mut input)?;
            let date = resolve_input(date, DATE_PROMPT, &mut input)?;
            let time = resolve_input(time, TIME_PROMPT, &mut input)?;
            check_command(&plate, &date, &time, online, &region, explain)
        }
        Commands::Holidays { year, region, json } => holidays_command(year, &region, json),
    }
}

/// Use `value` if given, otherwise prompt on stderr and read one line.
///
/// Only the line ending is stripped, so prompted and positional values are
/// validated alike.
pub fn resolve_input(
    value: Option<String>,
    prompt: &str,
    input: &mut impl BufRead,
) -> Result<String> {
    if let Some(value) = value {
        return Ok(value);
    }

    let mut stderr = io::stderr();
    write!(stderr, "{prompt}")?;
    stderr.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Build the holiday source selected by `config`.
pub fn holiday_source(
    config: &LookupConfig,
    province: Option<Province>,
) -> Result<Box<dyn HolidaySource>> {
    let source: Box<dyn HolidaySource> = match config.mode {
        HolidayMode::Local => Box::new(LocalHolidays::new(HolidayCalendar::new(province))),
        HolidayMode::Remote => Box::new(AbstractApiHolidays::new(config)?),
    };
    tracing::debug!(
        mode = config.mode.as_str(),
        source = source.name(),
        "Selected holiday source"
    );
    Ok(source)
}

/// Execute the check command.
fn check_command(
    plate: &str,
    date: &str,
    time: &str,
    online: bool,
    region: &RegionArgs,
    explain: bool,
) -> Result<()> {
    // Validate inputs before any lookup
    let query = VehicleQuery::parse(plate, date, time)?;
    let province = region.province()?;

    let mut config = LookupConfig::from_env()?;
    if online {
        config = config.with_mode(HolidayMode::Remote);
    }
    let evaluator = RestrictionEvaluator::new(holiday_source(&config, province)?);

    let decision = if config.mode == HolidayMode::Remote {
        let pb = ProgressBar::new_spinner();
        #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .expect("valid template"),
        );
        pb.set_message("Looking up holidays...");
        pb.enable_steady_tick(std::time::Duration::from_millis(100));

        let result = evaluator.explain(&query);
        pb.finish_and_clear();
        result?
    } else {
        evaluator.explain(&query)?
    };

    tracing::info!(
        plate = %query.plate(),
        date = %query.date(),
        time = %query.time(),
        may_circulate = decision.may_circulate,
        "Decided"
    );

    println!("{}", verdict_sentence(&query, decision.may_circulate));
    if explain {
        println!("{} {}", style("Reason:").bold(), decision.reason);
    }

    Ok(())
}

/// Execute the holidays command.
fn holidays_command(year: i32, region: &RegionArgs, json: bool) -> Result<()> {
    let province = region.province()?;
    let holidays = holidays_for(year, province)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&holidays)?);
        return Ok(());
    }

    let scope = province.map_or("national", |p| p.name());
    println!(
        "{} {} ({})",
        style("Holidays").bold(),
        style(year).cyan(),
        scope
    );
    println!();
    for record in holidays.iter() {
        println!("  {}", holiday_line(record));
    }
    println!();
    println!("{} {}", style("Total:").bold(), holidays.len());

    Ok(())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_cli_parse_check() {
        let cli = Cli::parse_from(["picoplaca", "check", "PBA-1234", "2021-04-06", "08:00"]);

        let Commands::Check {
            plate,
            date,
            time,
            online,
            region,
            explain,
        } = cli.command
        else {
            panic!("expected check command");
        };
        assert_eq!(plate.as_deref(), Some("PBA-1234"));
        assert_eq!(date.as_deref(), Some("2021-04-06"));
        assert_eq!(time.as_deref(), Some("08:00"));
        assert!(!online);
        assert!(!explain);
        assert_eq!(region.province().unwrap(), Some(Province::Pichincha));
    }

    #[test]
    fn test_cli_parse_check_without_arguments() {
        let cli = Cli::parse_from(["picoplaca", "check", "--online", "--national"]);

        let Commands::Check {
            plate,
            online,
            region,
            ..
        } = cli.command
        else {
            panic!("expected check command");
        };
        assert!(plate.is_none());
        assert!(online);
        assert_eq!(region.province().unwrap(), None);
    }

    #[test]
    fn test_cli_province_conflicts_with_national() {
        let result = Cli::try_parse_from([
            "picoplaca",
            "holidays",
            "2021",
            "--province",
            "EC-P",
            "--national",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_holidays() {
        let cli = Cli::parse_from(["picoplaca", "holidays", "2021", "--json"]);

        let Commands::Holidays { year, json, .. } = cli.command else {
            panic!("expected holidays command");
        };
        assert_eq!(year, 2021);
        assert!(json);
    }

    #[test]
    fn test_unknown_province() {
        let region = RegionArgs {
            province: "EC-G".to_string(),
            national: false,
        };
        assert!(region.province().is_err());
    }

    #[test]
    fn test_resolve_input_prefers_argument() {
        let mut input = Cursor::new("ignored\n");
        let value = resolve_input(Some("PBX-1234".into()), PLATE_PROMPT, &mut input).unwrap();
        assert_eq!(value, "PBX-1234");
    }

    #[test]
    fn test_resolve_input_reads_line() {
        let mut input = Cursor::new("PBX-1234\r\n2021-04-02\n08:00");
        let value = resolve_input(None, PLATE_PROMPT, &mut input).unwrap();
        assert_eq!(value, "PBX-1234");
        let value = resolve_input(None, DATE_PROMPT, &mut input).unwrap();
        assert_eq!(value, "2021-04-02");
        let value = resolve_input(None, TIME_PROMPT, &mut input).unwrap();
        assert_eq!(value, "08:00");
    }

    #[test]
    fn test_resolve_input_keeps_surrounding_spaces() {
        let mut input = Cursor::new(" PBX-1234\n");
        let prompted = resolve_input(None, PLATE_PROMPT, &mut input).unwrap();
        let positional = resolve_input(Some(" PBX-1234".into()), PLATE_PROMPT, &mut input).unwrap();
        assert_eq!(prompted, positional);
        assert!(VehicleQuery::parse(&prompted, "2021-04-02", "08:00").is_err());
    }

    #[test]
    fn test_local_source_respects_region() {
        let config = LookupConfig::default();
        let source = holiday_source(&config, Some(Province::Pichincha)).unwrap();
        assert_eq!(source.source_type(), "local");
        assert_eq!(source.name(), "Pichincha");
    }

    #[test]
    fn test_remote_source_selected() {
        let config = LookupConfig::builder().mode(HolidayMode::Remote).build();
        let source = holiday_source(&config, None).unwrap();
        assert_eq!(source.source_type(), "remote");
    }
}
