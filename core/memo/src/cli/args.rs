use crate::domain::{Category, Command, DateKey, MemoRecord};
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::error::Error;

/// CLI から受け取った設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub home_dir: Option<String>,
    /// 結果を JSON で出力する
    pub json: bool,
    pub command: Command,
}

/// 解析結果: 通常の Config または補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn global_args(cmd: clap::Command) -> clap::Command {
    cmd.disable_help_flag(true)
        .disable_help_subcommand(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Print help")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("home-dir")
                .short('d')
                .long("home-dir")
                .value_name("directory")
                .help("Specify a home directory (sets MEMO_HOME for this process)")
                .global(true)
                .num_args(1),
        )
        .arg(
            clap::Arg::new("json")
                .long("json")
                .help("Print results as JSON")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
}

fn date_arg(required: bool) -> clap::Arg {
    clap::Arg::new("date")
        .value_name("date")
        .help("YYYY/MM/DD (also YYYY-MM-DD)")
        .required(required)
}

fn category_arg() -> clap::Arg {
    clap::Arg::new("category")
        .value_name("category")
        .help("hospital | medicationTime | pain")
        .required(true)
}

fn entries_arg(id: &'static str) -> clap::Arg {
    clap::Arg::new(id)
        .long(id)
        .value_name("text")
        .action(ArgAction::Append)
        .num_args(1)
}

fn build_clap_command() -> clap::Command {
    global_args(
        clap::Command::new("memo")
            .about("Date-keyed memos for hospital visits, medication times and pain")
            .subcommand_required(false)
            .subcommand(clap::Command::new("help").about("Display this help message"))
            .subcommand(
                clap::Command::new("show")
                    .about("Show all memos of one day")
                    .arg(date_arg(true)),
            )
            .subcommand(
                clap::Command::new("add")
                    .about("Append one memo entry")
                    .arg(date_arg(true))
                    .arg(category_arg())
                    .arg(
                        clap::Arg::new("text")
                            .value_name("text")
                            .num_args(1..)
                            .required(true),
                    ),
            )
            .subcommand(
                clap::Command::new("set")
                    .about("Replace all memos of one day (omitted categories become empty)")
                    .arg(date_arg(true))
                    .arg(entries_arg("hospital"))
                    .arg(entries_arg("medication-time"))
                    .arg(entries_arg("pain")),
            )
            .subcommand(
                clap::Command::new("delete")
                    .about("Delete one memo entry by 0-based index")
                    .arg(date_arg(true))
                    .arg(category_arg())
                    .arg(
                        clap::Arg::new("index")
                            .value_name("index")
                            .value_parser(value_parser!(usize))
                            .required(true),
                    ),
            )
            .subcommand(
                clap::Command::new("month")
                    .about("List one category for the month containing date (default: today)")
                    .arg(category_arg())
                    .arg(date_arg(false)),
            )
            .subcommand(
                clap::Command::new("marks")
                    .about("List days with memos in the month containing date (default: today)")
                    .arg(date_arg(false)),
            )
            .subcommand(clap::Command::new("dates").about("List every date that has memos")),
    )
}

fn required_str<'a>(m: &'a clap::ArgMatches, id: &str) -> Result<&'a str, Error> {
    m.get_one::<String>(id)
        .map(String::as_str)
        .ok_or_else(|| Error::invalid_argument(format!("missing <{}>", id)))
}

fn date_of(m: &clap::ArgMatches) -> Result<DateKey, Error> {
    DateKey::parse(required_str(m, "date")?)
}

fn optional_date_of(m: &clap::ArgMatches) -> Result<Option<DateKey>, Error> {
    m.get_one::<String>("date")
        .map(|s| DateKey::parse(s))
        .transpose()
}

fn category_of(m: &clap::ArgMatches) -> Result<Category, Error> {
    required_str(m, "category")?.parse()
}

fn entries_of(m: &clap::ArgMatches, id: &str) -> Vec<String> {
    m.get_many::<String>(id)
        .map(|v| v.cloned().collect())
        .unwrap_or_default()
}

fn matches_to_command(matches: &clap::ArgMatches) -> Result<Command, Error> {
    let command = match matches.subcommand() {
        None | Some(("help", _)) => Command::Help,
        Some(("show", m)) => Command::Show { date: date_of(m)? },
        Some(("add", m)) => Command::Add {
            date: date_of(m)?,
            category: category_of(m)?,
            text: entries_of(m, "text").join(" "),
        },
        Some(("set", m)) => Command::Set {
            date: date_of(m)?,
            record: MemoRecord::new()
                .with(Category::Hospital, entries_of(m, "hospital"))
                .with(Category::MedicationTime, entries_of(m, "medication-time"))
                .with(Category::Pain, entries_of(m, "pain")),
        },
        Some(("delete", m)) => Command::Delete {
            date: date_of(m)?,
            category: category_of(m)?,
            index: m
                .get_one::<usize>("index")
                .copied()
                .ok_or_else(|| Error::invalid_argument("missing <index>"))?,
        },
        Some(("month", m)) => Command::Month {
            category: category_of(m)?,
            reference: optional_date_of(m)?,
        },
        Some(("marks", m)) => Command::Marks {
            reference: optional_date_of(m)?,
        },
        Some(("dates", _)) => Command::Dates,
        Some((other, _)) => {
            return Err(Error::invalid_argument(format!(
                "Command '{}' is not implemented.",
                other
            )))
        }
    };
    Ok(command)
}

/// 任意の引数列を解析する（先頭はプログラム名）
pub fn parse_args_from<I, T>(args: I) -> Result<ParseOutcome, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string().trim_end().to_string()))?;
    if let Some(shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(*shell));
    }
    let help = matches.get_flag("help");
    let command = if help {
        Command::Help
    } else {
        matches_to_command(&matches)?
    };
    Ok(ParseOutcome::Config(Config {
        home_dir: matches.get_one::<String>("home-dir").cloned(),
        json: matches.get_flag("json"),
        command,
    }))
}

pub fn parse_args() -> Result<ParseOutcome, Error> {
    parse_args_from(std::env::args_os())
}

/// 補完スクリプトを stdout に出力する
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "memo", &mut std::io::stdout());
}
