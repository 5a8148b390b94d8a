//! Runner: Command をメモ操作にディスパッチし、表示行を組み立てる
//!
//! 標準出力への書き出しは run() だけが行う。dispatch() は出力行を返すので、
//! テストから表示内容と終了コードの対応を確かめられる。

use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};

use crate::cli::Config;
use crate::domain::{Category, Command, DateKey, DayEntries, MemoRecord, Persistence};
use crate::ports::inbound::MemoCommands;
use crate::wiring::App;

/// Command をディスパッチする Runner（match はここに集約）
pub struct Runner {
    pub app: App,
}

impl Runner {
    pub fn new(app: App) -> Self {
        Self { app }
    }

    /// ライフサイクルをログに残しつつ実行し、結果を stdout に出す
    pub fn run(&mut self, config: Config) -> Result<i32, Error> {
        let command_name = config.command.name();
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "command started")
                .layer("cli")
                .kind("lifecycle")
                .field("command", command_name)
                .field("mutation", config.command.is_mutation()),
        );
        if let Some(fault) = self.app.calendar.store().load_fault() {
            eprintln!("memo: warning: {} (starting with an empty store)", fault);
        }

        let result = self.dispatch(config.command, config.json).map(|lines| {
            for line in &lines {
                println!("{}", line);
            }
            0
        });

        let code = match &result {
            Ok(code) => *code,
            Err(e) => e.exit_code(),
        };
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "command finished")
                .layer("cli")
                .kind("lifecycle")
                .field("command", command_name)
                .field("exit_code", code),
        );
        if let Err(ref e) = result {
            let _ = self
                .app
                .logger
                .log(&LogRecord::new(LogLevel::Error, e.to_string()).layer("cli").kind("error"));
        }
        result
    }

    /// 1 コマンドを実行し、表示する行を返す
    pub fn dispatch(&mut self, command: Command, json: bool) -> Result<Vec<String>, Error> {
        let today = self.app.clock.today();
        let calendar = &mut self.app.calendar;
        match command {
            Command::Help => Ok(help_lines()),
            Command::Show { date } => {
                let record = calendar.on_date_activated(date);
                if json {
                    json_lines(&record_json(&date, &record))
                } else {
                    Ok(day_lines(&date, &record))
                }
            }
            Command::Add {
                date,
                category,
                text,
            } => match calendar.append(date, category, &text) {
                Persistence::Unchanged => Err(Error::invalid_argument("memo text must not be empty")),
                other => check_persisted(other),
            },
            Command::Set { date, record } => check_persisted(calendar.apply_edit(date, record)),
            Command::Delete {
                date,
                category,
                index,
            } => match calendar.apply_delete(date, category, index) {
                Persistence::Unchanged => Err(Error::NotFound(format!(
                    "{} has no {} entry at index {}",
                    date, category, index
                ))),
                other => check_persisted(other),
            },
            Command::Month {
                category,
                reference,
            } => {
                let reference = reference.map(|k| k.date()).unwrap_or(today);
                let rows = calendar.on_category_activated(category, reference);
                if json {
                    json_lines(&serde_json::to_value(&rows)?)
                } else {
                    Ok(month_lines(&rows, &self.app.config.empty_message))
                }
            }
            Command::Marks { reference } => {
                let reference = reference.map(|k| k.date()).unwrap_or(today);
                date_lines(&calendar.marked_days(reference), json)
            }
            Command::Dates => {
                let dates: Vec<DateKey> = calendar.store().keys().copied().collect();
                date_lines(&dates, json)
            }
        }
    }
}

/// 書き込みに失敗した変更はこのプロセス限りで消えるので、CLI ではエラーとして返す
fn check_persisted(persistence: Persistence) -> Result<Vec<String>, Error> {
    match persistence {
        Persistence::Failed(reason) => Err(Error::io_msg(format!(
            "memo was not saved: {}",
            reason
        ))),
        Persistence::Written | Persistence::Unchanged => Ok(Vec::new()),
    }
}

/// 3 分類すべてを（空でも）キーとして持つ JSON
fn record_json(date: &DateKey, record: &MemoRecord) -> serde_json::Value {
    let mut memo = serde_json::Map::new();
    for c in Category::ALL {
        memo.insert(c.as_str().to_string(), serde_json::json!(record.entries(c)));
    }
    serde_json::json!({ "date": date, "memo": memo })
}

fn json_lines(value: &serde_json::Value) -> Result<Vec<String>, Error> {
    Ok(vec![serde_json::to_string_pretty(value)?])
}

pub fn day_lines(date: &DateKey, record: &MemoRecord) -> Vec<String> {
    let mut lines = vec![date.to_string()];
    if record.is_empty() {
        lines.push("  No memo available.".to_string());
        return lines;
    }
    for (category, entries) in record.iter() {
        for (i, text) in entries.iter().enumerate() {
            lines.push(format!("  [{}] {}: {}", i, category.label(), text));
        }
    }
    lines
}

/// 月集計の表示行。0 件なら日付なしのプレースホルダ行を 1 行出す。
pub fn month_lines(rows: &[DayEntries], empty_message: &str) -> Vec<String> {
    if rows.is_empty() {
        return vec![format!("{:10} {}", "", empty_message)];
    }
    rows.iter()
        .map(|row| format!("{:10} {}", row.date.to_string(), row.entries.join(", ")))
        .collect()
}

fn date_lines(dates: &[DateKey], json: bool) -> Result<Vec<String>, Error> {
    if json {
        return json_lines(&serde_json::to_value(dates)?);
    }
    Ok(dates.iter().map(DateKey::to_string).collect())
}

pub fn usage_line() -> &'static str {
    "Usage: memo [-h] [-d|--home-dir directory] [--json] <command> [args...]"
}

pub fn help_lines() -> Vec<String> {
    [
        usage_line(),
        "  -h, --help            Display this help message.",
        "  -d, --home-dir        Specify a home directory (sets MEMO_HOME for this process).",
        "  --json                Print results as JSON.",
        "  --generate <shell>    Generate shell completion script (bash, zsh, fish).",
        "",
        "Commands:",
        "  show <date>                          Show all memos of one day.",
        "  add <date> <category> <text...>      Append one memo entry.",
        "  set <date> [--hospital t]... [--medication-time t]... [--pain t]...",
        "                                       Replace all memos of one day.",
        "  delete <date> <category> <index>     Delete one entry (0-based index as shown by `show`).",
        "  month <category> [<date>]            List one category for the month containing date.",
        "  marks [<date>]                       List days with memos in the month containing date.",
        "  dates                                List every date that has memos.",
        "",
        "  <date>      YYYY/MM/DD (YYYY-MM-DD and unpadded month/day are accepted). Default: today.",
        "  <category>  hospital | medicationTime | pain",
        "",
        "Environment:",
        "  MEMO_HOME   Home directory (config/, data/, state/). Default: XDG directories under memo/.",
        "",
        "Files:",
        "  <config>/config.json      {\"slot\": \"memos\", \"empty_message\": \"...\"}",
        "  <data>/<slot>.json        All memos, keyed by date.",
        "  <state>/logs/memo.jsonl   Structured log.",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
