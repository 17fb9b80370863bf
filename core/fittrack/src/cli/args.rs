use crate::domain::TrackCommand;
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::error::Error;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub help: bool,
    /// -p / --provider: 使用するLLMプロバイダ
    pub provider: Option<String>,
    /// -m / --model: モデル名の上書き
    pub model: Option<String>,
    /// --date: add で使う日付（YYYY-MM-DD、省略時は今日）
    pub date: Option<String>,
    /// -n / --note: add で付けるメモ
    pub note: Option<String>,
    /// -o / --out: export の出力先パス
    pub out: Option<String>,
    /// 先頭がコマンド語、残りがその引数
    pub command_args: Vec<String>,
}

/// 解析結果: 通常の Config / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("fittrack")
        .about("Track weight entries and get an AI trend insight")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("provider")
                .short('p')
                .long("provider")
                .value_name("provider")
                .help("Specify LLM provider (gemini, echo). Default: gemini")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("model")
                .short('m')
                .long("model")
                .value_name("model")
                .help("Specify model name (e.g. gemini-3-flash-preview)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("date")
                .long("date")
                .value_name("YYYY-MM-DD")
                .help("Date for the new entry (default: today)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("note")
                .short('n')
                .long("note")
                .value_name("text")
                .help("Optional note for the new entry")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("out")
                .short('o')
                .long("out")
                .value_name("path")
                .help("Output path for export (default: fittrack_data_<date>.csv)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("positional")
                .index(1)
                .help("Command (add, remove, list, insight, export, share, theme) and its arguments")
                .num_args(0..),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    Config {
        help: matches.get_flag("help"),
        provider: matches.get_one::<String>("provider").cloned(),
        model: matches.get_one::<String>("model").cloned(),
        date: matches.get_one::<String>("date").cloned(),
        note: matches.get_one::<String>("note").cloned(),
        out: matches.get_one::<String>("out").cloned(),
        command_args: matches
            .get_many::<String>("positional")
            .map(|i| i.cloned().collect())
            .unwrap_or_default(),
    }
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let cmd = build_clap_command();
    let matches = cmd
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// テスト用: 引数スライスから解析する
#[allow(dead_code)]
pub fn parse_args_from(args: &[String]) -> Result<Config, Error> {
    let cmd = build_clap_command();
    let matches = cmd
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "fittrack", &mut std::io::stdout());
}

/// Config を TrackCommand に変換する
pub fn config_to_command(config: Config) -> Result<TrackCommand, Error> {
    if config.help {
        return Ok(TrackCommand::Help);
    }

    let (word, rest) = match config.command_args.split_first() {
        Some((word, rest)) => (word.as_str(), rest),
        None => return Ok(TrackCommand::Help),
    };

    match word {
        "add" => {
            let weight = rest
                .first()
                .cloned()
                .ok_or_else(|| Error::invalid_argument("add requires a weight, e.g. fittrack add 75.5"))?;
            Ok(TrackCommand::Add {
                weight,
                date: config.date,
                note: config.note,
            })
        }
        "remove" | "rm" => {
            let id = rest
                .first()
                .cloned()
                .ok_or_else(|| Error::invalid_argument("remove requires an entry id"))?;
            Ok(TrackCommand::Remove { id })
        }
        "list" | "history" => Ok(TrackCommand::List),
        "insight" => Ok(TrackCommand::Insight),
        "export" => Ok(TrackCommand::Export { out: config.out }),
        "share" => Ok(TrackCommand::Share),
        "theme" => Ok(TrackCommand::Theme {
            value: rest.first().cloned(),
        }),
        other => Err(Error::invalid_argument(format!(
            "Unknown command: {}. Commands: add, remove, list, insight, export, share, theme",
            other
        ))),
    }
}
