use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use weekday_picker_core::range_calendar::{dates_in_range, weekdays_in_range};
use weekday_picker_core::resolver::resolve;
use weekday_picker_core::weekend::is_selectable;
use weekday_picker_core::{
    CalendarDate, DateRangeResult, DisplayCursor, PickerConfig, RangeConsumer, SelectionState,
    WeekdayRangePicker,
};

#[derive(Parser)]
#[command(
    name = "weekday-picker",
    about = "Select weekday-only date ranges and list the weekends inside them"
)]
struct Cli {
    /// JSON config file with year window, range order and predefined ranges
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Click a start and an end date and print the resulting range
    Select {
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: CalendarDate,

        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end: CalendarDate,
    },

    /// List the weekend dates inside a range
    Weekends {
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: CalendarDate,

        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end: CalendarDate,
    },

    /// Apply a configured predefined range by label
    Preset {
        /// Label of the predefined range
        label: String,
    },

    /// List configured predefined ranges
    Presets,

    /// Drive a picker from stdin, one interaction per line
    Session,
}

/// One line of `session` input.
#[derive(Debug, PartialEq, Eq)]
enum SessionCommand {
    Click(CalendarDate),
    Next,
    Prev,
    Year(i32),
    Preset(String),
    Cancel,
    Show,
}

fn parse_session_line(line: &str) -> Result<Option<SessionCommand>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();
    let command = match word {
        "click" => SessionCommand::Click(
            rest.parse()
                .with_context(|| format!("invalid date: {rest:?}"))?,
        ),
        "next" => SessionCommand::Next,
        "prev" => SessionCommand::Prev,
        "year" => SessionCommand::Year(
            rest.parse()
                .with_context(|| format!("invalid year: {rest:?}"))?,
        ),
        "preset" if !rest.is_empty() => SessionCommand::Preset(rest.to_string()),
        "preset" => anyhow::bail!("preset needs a label"),
        "cancel" => SessionCommand::Cancel,
        "show" => SessionCommand::Show,
        other => anyhow::bail!(
            "unknown command: {other}. Expected: click, next, prev, year, preset, cancel, show"
        ),
    };
    Ok(Some(command))
}

/// Writes every emission as one JSON line.
struct JsonPrinter<W> {
    out: W,
}

impl<W: Write> RangeConsumer for JsonPrinter<W> {
    fn on_range(&mut self, result: &DateRangeResult) {
        let line = match serde_json::to_string(result) {
            Ok(line) => line,
            Err(e) => {
                warn!("failed to encode range: {e}");
                return;
            }
        };
        if let Err(e) = writeln!(self.out, "{line}") {
            warn!("failed to write range: {e}");
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<PickerConfig> {
    match path {
        Some(path) => PickerConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(PickerConfig::default()),
    }
}

fn today_cursor() -> DisplayCursor {
    DisplayCursor::containing(CalendarDate::from_naive(chrono::Local::now().date_naive()))
}

fn describe(state: SelectionState) -> String {
    match state {
        SelectionState::Empty => "nothing selected".to_string(),
        SelectionState::StartOnly { start } => format!("start {start}, waiting for end"),
        SelectionState::Complete { start, end } => format!("{start} to {end}"),
    }
}

fn cmd_select(
    config: PickerConfig,
    start: CalendarDate,
    end: CalendarDate,
    out: &mut impl Write,
) -> Result<()> {
    let mut emitted = None;
    {
        let mut picker = WeekdayRangePicker::new(
            config,
            DisplayCursor::containing(start),
            |r: &DateRangeResult| emitted = Some(r.clone()),
        );
        for date in [start, end] {
            if !is_selectable(&date) {
                warn!("{date} is not a weekday, click ignored");
            }
            picker.click_date(date);
        }
        info!("selection: {}", describe(picker.selection()));
    }

    match emitted {
        Some(result) => writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?,
        None => writeln!(out, "No range selected: both endpoints must be weekdays.")?,
    }
    Ok(())
}

fn cmd_weekends(
    config: &PickerConfig,
    start: CalendarDate,
    end: CalendarDate,
    out: &mut impl Write,
) -> Result<()> {
    let result = resolve(start, end, config.range_order);
    for weekend in &result.weekends {
        writeln!(out, "{weekend}")?;
    }

    let (first, last) = config.range_order.apply(start, end);
    let days = dates_in_range(first, last).len();
    let weekdays = weekdays_in_range(first, last).len();
    writeln!(
        out,
        "{} to {}: {days} day(s), {weekdays} weekday(s), {} weekend day(s)",
        result.range.0,
        result.range.1,
        result.weekends.len()
    )?;
    Ok(())
}

fn cmd_preset(config: PickerConfig, label: &str, out: &mut impl Write) -> Result<()> {
    let mut picker = WeekdayRangePicker::new(config, today_cursor(), JsonPrinter { out });
    picker
        .apply_predefined_label(label)
        .context("failed to apply predefined range")?;
    Ok(())
}

fn cmd_presets(config: &PickerConfig, out: &mut impl Write) -> Result<()> {
    if config.presets.is_empty() {
        writeln!(out, "No predefined ranges configured.")?;
        return Ok(());
    }
    for preset in &config.presets {
        writeln!(out, "{}: {} to {}", preset.label, preset.start, preset.end)?;
    }
    Ok(())
}

fn cmd_session(config: PickerConfig, input: impl BufRead, out: &mut impl Write) -> Result<()> {
    let mut picker = WeekdayRangePicker::new(config, today_cursor(), JsonPrinter { out });

    for (number, line) in input.lines().enumerate() {
        let line = line.context("failed to read input")?;
        let command = match parse_session_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                warn!("line {}: {e:#}", number + 1);
                continue;
            }
        };

        match command {
            SessionCommand::Click(date) => picker.click_date(date),
            SessionCommand::Next => picker.next_month(),
            SessionCommand::Prev => picker.prev_month(),
            SessionCommand::Year(year) => picker.set_year(year),
            SessionCommand::Preset(label) => {
                if let Err(e) = picker.apply_predefined_label(&label) {
                    warn!("line {}: {e}", number + 1);
                }
            }
            SessionCommand::Cancel => picker.cancel_selection(),
            SessionCommand::Show => {
                let cursor = picker.cursor();
                let status = format!(
                    "showing {}/{}; {}",
                    cursor.month() + 1,
                    cursor.year(),
                    describe(picker.selection())
                );
                writeln!(picker.consumer_mut().out, "{status}")?;
            }
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .init();

    let config = load_config(cli.config.as_ref())?;

    let mut out = std::io::stdout().lock();

    match &cli.command {
        Commands::Select { start, end } => cmd_select(config, *start, *end, &mut out)?,
        Commands::Weekends { start, end } => cmd_weekends(&config, *start, *end, &mut out)?,
        Commands::Preset { label } => cmd_preset(config, label, &mut out)?,
        Commands::Presets => cmd_presets(&config, &mut out)?,
        Commands::Session => cmd_session(config, std::io::stdin().lock(), &mut out)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m - 1, d)
    }

    #[test]
    fn parse_select_args() {
        let cli = Cli::try_parse_from([
            "weekday-picker",
            "select",
            "--start",
            "2024-03-04",
            "--end",
            "2024-03-12",
        ])
        .unwrap();

        match cli.command {
            Commands::Select { start, end } => {
                assert_eq!(start, date(2024, 3, 4));
                assert_eq!(end, date(2024, 3, 12));
            }
            _ => panic!("expected Select command"),
        }
        assert!(cli.config.is_none());
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn parse_select_rejects_bad_date() {
        let result = Cli::try_parse_from([
            "weekday-picker",
            "select",
            "--start",
            "2024-04-31",
            "--end",
            "2024-05-03",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_weekends_with_config() {
        let cli = Cli::try_parse_from([
            "weekday-picker",
            "--config",
            "picker.json",
            "weekends",
            "--start",
            "2024-03-01",
            "--end",
            "2024-03-31",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("picker.json")));
        assert!(matches!(cli.command, Commands::Weekends { .. }));
    }

    #[test]
    fn parse_preset_args() {
        let cli = Cli::try_parse_from(["weekday-picker", "preset", "This week"]).unwrap();
        match cli.command {
            Commands::Preset { label } => assert_eq!(label, "This week"),
            _ => panic!("expected Preset command"),
        }
    }

    #[test]
    fn parse_session_lines() {
        assert_eq!(
            parse_session_line("click 2024-03-04").unwrap(),
            Some(SessionCommand::Click(date(2024, 3, 4)))
        );
        assert_eq!(
            parse_session_line("  next ").unwrap(),
            Some(SessionCommand::Next)
        );
        assert_eq!(parse_session_line("prev").unwrap(), Some(SessionCommand::Prev));
        assert_eq!(
            parse_session_line("year 2027").unwrap(),
            Some(SessionCommand::Year(2027))
        );
        assert_eq!(
            parse_session_line("preset This week").unwrap(),
            Some(SessionCommand::Preset("This week".to_string()))
        );
        assert_eq!(
            parse_session_line("cancel").unwrap(),
            Some(SessionCommand::Cancel)
        );
        assert_eq!(parse_session_line("show").unwrap(), Some(SessionCommand::Show));
    }

    #[test]
    fn parse_session_skips_blank_and_comments() {
        assert_eq!(parse_session_line("").unwrap(), None);
        assert_eq!(parse_session_line("# comment").unwrap(), None);
    }

    #[test]
    fn parse_session_errors() {
        assert!(parse_session_line("click 2024-02-30").is_err());
        assert!(parse_session_line("year soon").is_err());
        assert!(parse_session_line("preset").is_err());
        assert!(parse_session_line("jump").is_err());
    }

    fn output_of(run: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn config_with_preset() -> PickerConfig {
        PickerConfig::from_json(
            r#"{"presets": [{ "label": "Week 10", "start": "2024-03-04", "end": "2024-03-08" }]}"#,
        )
        .unwrap()
    }

    #[test]
    fn session_emits_one_line_per_completed_range() {
        // Saturday click ignored, unknown command skipped, navigation keeps the start.
        let input = "click 2024-03-09\nclick 2024-03-04\nnext\nbogus\nclick 2024-03-12\nshow\n";
        let output = output_of(|out| cmd_session(PickerConfig::default(), input.as_bytes(), out));
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            r#"{"range":["2024-03-04","2024-03-12"],"weekends":["2024-03-09","2024-03-10"]}"#
        );
        assert!(lines[1].starts_with("showing "));
        assert!(lines[1].ends_with("; 2024-03-04 to 2024-03-12"));
    }

    #[test]
    fn session_weekend_only_clicks_emit_nothing() {
        let input = "click 2024-03-09\nclick 2024-03-10\n";
        let output = output_of(|out| cmd_session(PickerConfig::default(), input.as_bytes(), out));
        assert!(output.is_empty());
    }

    #[test]
    fn session_preset_and_cancel() {
        let input = "preset Week 10\npreset Missing\nclick 2024-03-11\ncancel\nclick 2024-03-12\nshow\n";
        let output = output_of(|out| cmd_session(config_with_preset(), input.as_bytes(), out));
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            r#"{"range":["2024-03-04","2024-03-08"],"weekends":[]}"#
        );
        assert!(lines[1].ends_with("; start 2024-03-12, waiting for end"));
    }

    #[test]
    fn select_prints_range() {
        let output = output_of(|out| {
            cmd_select(PickerConfig::default(), date(2024, 3, 4), date(2024, 3, 12), out)
        });
        let result: DateRangeResult = serde_json::from_str(&output).unwrap();
        assert_eq!(
            result.range,
            ("2024-03-04".to_string(), "2024-03-12".to_string())
        );
        assert_eq!(result.weekends, vec!["2024-03-09", "2024-03-10"]);
    }

    #[test]
    fn select_with_weekend_endpoint_prints_nothing_selected() {
        let output = output_of(|out| {
            cmd_select(PickerConfig::default(), date(2024, 3, 4), date(2024, 3, 9), out)
        });
        assert_eq!(
            output,
            "No range selected: both endpoints must be weekdays.\n"
        );
    }

    #[test]
    fn weekends_lists_dates_and_summary() {
        let output = output_of(|out| {
            cmd_weekends(&PickerConfig::default(), date(2024, 3, 4), date(2024, 3, 12), out)
        });
        assert_eq!(
            output,
            "2024-03-09\n2024-03-10\n\
             2024-03-04 to 2024-03-12: 9 day(s), 7 weekday(s), 2 weekend day(s)\n"
        );
    }

    #[test]
    fn weekends_reversed_range_is_normalized() {
        let output = output_of(|out| {
            cmd_weekends(&PickerConfig::default(), date(2024, 3, 8), date(2024, 3, 4), out)
        });
        assert_eq!(
            output,
            "2024-03-04 to 2024-03-08: 5 day(s), 5 weekday(s), 0 weekend day(s)\n"
        );
    }

    #[test]
    fn preset_prints_json_line() {
        let output = output_of(|out| cmd_preset(config_with_preset(), "Week 10", out));
        assert_eq!(
            output,
            "{\"range\":[\"2024-03-04\",\"2024-03-08\"],\"weekends\":[]}\n"
        );
        let mut out = Vec::new();
        assert!(cmd_preset(config_with_preset(), "Missing", &mut out).is_err());
    }

    #[test]
    fn presets_listing() {
        let output = output_of(|out| cmd_presets(&config_with_preset(), out));
        assert_eq!(output, "Week 10: 2024-03-04 to 2024-03-08\n");
        let output = output_of(|out| cmd_presets(&PickerConfig::default(), out));
        assert_eq!(output, "No predefined ranges configured.\n");
    }

    #[test]
    fn describe_states() {
        assert_eq!(describe(SelectionState::Empty), "nothing selected");
        assert_eq!(
            describe(SelectionState::Complete {
                start: date(2024, 3, 4),
                end: date(2024, 3, 8)
            }),
            "2024-03-04 to 2024-03-08"
        );
    }
}
