mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process;

use chrono::NaiveDate;
use common::error::Error;
use common::ports::outbound::{now_iso8601, Clock, LogLevel, LogRecord};

use cli::{config_to_command, parse_args, print_completion, ParseOutcome};
use domain::{latest_first, NewEntry, Theme, TrackCommand};
use ports::inbound::UseCaseRunner;
use usecase::export::{csv_export, csv_filename, format_date, format_weight, share_text};
use usecase::InsightState;
use wiring::{wire_app, App};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl UseCaseRunner for Runner {
    fn run(&mut self, cmd: TrackCommand) -> Result<i32, Error> {
        let _ = self.app.logger.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: "command started".to_string(),
            layer: Some("cli".to_string()),
            kind: Some("lifecycle".to_string()),
            fields: {
                let mut m = BTreeMap::new();
                m.insert("command".to_string(), serde_json::json!(cmd.name()));
                Some(m)
            },
        });

        match cmd {
            TrackCommand::Help => {
                print_help();
                Ok(0)
            }
            TrackCommand::Add { weight, date, note } => {
                let candidate = validate_new_entry(
                    &weight,
                    date.as_deref(),
                    note.as_deref(),
                    self.app.clock.as_ref(),
                )?;
                let entry = self.app.tracker.add(candidate)?;
                println!(
                    "Saved {} kg on {} (id {})",
                    format_weight(entry.weight),
                    format_date(&entry),
                    entry.id
                );
                print_insight(self.app.tracker.insight());
                Ok(0)
            }
            TrackCommand::Remove { id } => {
                self.app.tracker.remove(&id)?;
                println!("Removed entry {} (no-op if it did not exist).", id);
                print_insight(self.app.tracker.insight());
                Ok(0)
            }
            TrackCommand::List => {
                let entries = self.app.tracker.entries();
                if entries.is_empty() {
                    println!("No entries yet. Add one with: fittrack add <weight>");
                    return Ok(0);
                }
                for entry in latest_first(entries) {
                    println!(
                        "{}  {:>6} kg  {}  [{}]",
                        format_date(&entry),
                        format_weight(entry.weight),
                        entry.note.as_deref().unwrap_or("-"),
                        entry.id
                    );
                }
                println!("{} entries total.", entries.len());
                Ok(0)
            }
            TrackCommand::Insight => {
                self.app.tracker.init_refresh();
                print_insight(self.app.tracker.insight());
                Ok(0)
            }
            TrackCommand::Export { out } => {
                let entries = self.app.tracker.entries();
                if entries.is_empty() {
                    println!("No entries to export.");
                    return Ok(0);
                }
                let path = out
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from(csv_filename(self.app.clock.as_ref())));
                // 表計算ソフト向けに UTF-8 BOM を先頭に付ける
                let contents = format!("\u{feff}{}", csv_export(entries));
                self.app.fs.write(&path, &contents)?;
                println!("Exported {} entries to {}", entries.len(), path.display());
                Ok(0)
            }
            TrackCommand::Share => {
                let entries = self.app.tracker.entries();
                if entries.is_empty() {
                    println!("No entries to share.");
                    return Ok(0);
                }
                print!("{}", share_text(entries));
                Ok(0)
            }
            TrackCommand::Theme { value } => match value {
                None => {
                    println!("{}", self.app.theme.current().as_str());
                    Ok(0)
                }
                Some(raw) => {
                    let theme = Theme::from_str(&raw).ok_or_else(|| {
                        Error::invalid_argument(format!("theme must be light or dark: {}", raw))
                    })?;
                    self.app.theme.set(theme)?;
                    println!("Theme set to {}.", theme.as_str());
                    Ok(0)
                }
            },
        }
    }
}

/// add の入力検証（ストアに渡す前に CLI 層で行う）
fn validate_new_entry(
    weight: &str,
    date: Option<&str>,
    note: Option<&str>,
    clock: &dyn Clock,
) -> Result<NewEntry, Error> {
    let weight: f64 = weight
        .parse()
        .map_err(|_| Error::invalid_argument(format!("weight must be a number: {}", weight)))?;
    if !weight.is_finite() || weight <= 0.0 {
        return Err(Error::invalid_argument(
            "weight must be a positive number of kilograms",
        ));
    }

    let day = match date {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| Error::invalid_argument(format!("date must be YYYY-MM-DD: {}", raw)))?,
        None => chrono::DateTime::<chrono::Utc>::from_timestamp_millis(clock.now_ms() as i64)
            .unwrap_or(chrono::DateTime::UNIX_EPOCH)
            .date_naive(),
    };
    let date = chrono::DateTime::<chrono::Utc>::from_naive_utc_and_offset(
        day.and_time(chrono::NaiveTime::MIN),
        chrono::Utc,
    )
    .to_rfc3339();

    let note = note
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from);

    Ok(NewEntry { weight, date, note })
}

fn print_insight(state: &InsightState) {
    match state {
        InsightState::Absent => {
            println!("No insight yet. Log at least two entries and run: fittrack insight")
        }
        InsightState::Pending => println!("Insight request still in progress."),
        InsightState::Present(insight) => {
            println!("Trend: {}", insight.trend.as_str());
            println!("Summary: {}", insight.summary);
            println!("Advice: {}", insight.advice);
            println!("Next: {}", insight.suggested_action);
        }
    }
}

fn print_help() {
    println!("Usage: fittrack [options] <command> [args]");
    println!();
    println!("Commands:");
    println!("  add <weight>        Save a new weight entry (kg)");
    println!("  remove <id>         Delete an entry by id");
    println!("  list                Show entries, newest first");
    println!("  insight             Fetch an AI trend insight for the log");
    println!("  export              Write all entries as CSV");
    println!("  share               Print a shareable text summary");
    println!("  theme [light|dark]  Show or set the display theme");
    println!();
    println!("Options:");
    println!("  -h, --help                 Show this help message");
    println!("  -p, --provider <provider>  LLM provider (gemini, echo). Default: gemini");
    println!("  -m, --model <model>        Model name (e.g. gemini-3-flash-preview)");
    println!("      --date <YYYY-MM-DD>    Date for a new entry (default: today)");
    println!("  -n, --note <text>          Optional note for a new entry");
    println!("  -o, --out <path>           Output path for export");
    println!("      --generate <shell>     Generate shell completion script");
    println!();
    println!("Examples:");
    println!("  fittrack add 75.5 -n \"after training\"");
    println!("  fittrack add 79.2 --date 2024-01-05");
    println!("  fittrack -p echo insight");
}

fn run(outcome: ParseOutcome) -> Result<i32, Error> {
    match outcome {
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            Ok(0)
        }
        ParseOutcome::Config(config) => {
            let provider = config.provider.clone();
            let model = config.model.clone();
            let cmd = config_to_command(config)?;
            if cmd == TrackCommand::Help {
                // ヘルプはデータディレクトリが無くても出せるように配線前に処理する
                print_help();
                return Ok(0);
            }
            let app = wire_app(provider.as_deref(), model)?;
            let mut runner = Runner { app };
            runner.run(cmd)
        }
    }
}

fn main() {
    let outcome = match parse_args() {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(e.exit_code());
        }
    };
    let code = match run(outcome) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    };
    process::exit(code);
}
