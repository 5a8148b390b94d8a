//! DateKey（1 日分のメモを識別する `YYYY/MM/DD` キー）
//!
//! 内部では NaiveDate を保持し、表示・保存時のみ正規形の文字列にする。
//! 同じ日付は入力表記に関わらず同じキーになり、異なる日付が同じキーになることはない。

use chrono::{Datelike, NaiveDate};
use common::error::Error;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// 正規形の区切り文字
const SEPARATOR: char = '/';

fn date_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([+-]\d{4,}|\d{4})[/.\-](\d{1,2})[/.\-](\d{1,2})$").expect("date pattern is valid")
    })
}

/// 1 日分のメモレコードのキー（タイムゾーンなし・日単位）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    /// 日付から正規のキーを作る
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// `YYYY/MM/DD`・`YYYY-MM-DD`・`YYYY.MM.DD`（月日のゼロ埋め省略可）を受け付ける。
    /// 0000〜9999 年以外は符号付きの年（`+12345/01/02`, `-0005/03/01`）で表す。
    /// 実在しない日付（2024/02/30 等）は InvalidArgs。
    pub fn parse(s: &str) -> Result<Self, Error> {
        let trimmed = s.trim();
        let caps = date_pattern()
            .captures(trimmed)
            .ok_or_else(|| Error::invalid_argument(format!("invalid date '{}': expected YYYY/MM/DD", s)))?;
        let year: i32 = caps[1].parse().map_err(|_| invalid_date(s))?;
        let month: u32 = caps[2].parse().map_err(|_| invalid_date(s))?;
        let day: u32 = caps[3].parse().map_err(|_| invalid_date(s))?;
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| invalid_date(s))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// 同じ年月に属するか
    pub fn same_month(&self, other: NaiveDate) -> bool {
        self.0.year() == other.year() && self.0.month() == other.month()
    }
}

fn invalid_date(s: &str) -> Error {
    Error::invalid_argument(format!("invalid date '{}': no such calendar day", s))
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year = self.0.year();
        if (0..=9999).contains(&year) {
            write!(f, "{:04}", year)?;
        } else {
            write!(f, "{:+05}", year)?;
        }
        write!(
            f,
            "{sep}{:02}{sep}{:02}",
            self.0.month(),
            self.0.day(),
            sep = SEPARATOR
        )
    }
}

impl FromStr for DateKey {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
