//! メモの分類（病院・服薬時間・痛み）
//!
//! 固定の 3 種類。反復は `Category::ALL` を唯一の定義元とする。

use common::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Hospital,
    MedicationTime,
    Pain,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Hospital, Category::MedicationTime, Category::Pain];

    /// 保存形式でのキー名
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Hospital => "hospital",
            Category::MedicationTime => "medicationTime",
            Category::Pain => "pain",
        }
    }

    /// 1 日表示で各エントリの前に付けるラベル
    pub fn label(&self) -> &'static str {
        match self {
            Category::Hospital => "병원(처방내용)",
            Category::MedicationTime => "약 복용 시간",
            Category::Pain => "통증",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    /// 保存形式のキー名に加え、CLI 向けの別名（medication-time 等）も受け付ける
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "hospital" => Ok(Category::Hospital),
            "medicationTime" | "medication-time" | "medication_time" | "medication" => {
                Ok(Category::MedicationTime)
            }
            "pain" => Ok(Category::Pain),
            other => Err(Error::invalid_argument(format!(
                "unknown category '{}': expected one of hospital, medicationTime, pain",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_match_serde() {
        for c in Category::ALL {
            let json = serde_json::to_string(&c).unwrap();
            assert_eq!(json, format!("\"{}\"", c.as_str()));
            assert_eq!(c.as_str().parse::<Category>().unwrap(), c);
        }
    }

    #[test]
    fn test_cli_aliases() {
        assert_eq!("medication-time".parse::<Category>().unwrap(), Category::MedicationTime);
        assert_eq!("medication".parse::<Category>().unwrap(), Category::MedicationTime);
    }

    #[test]
    fn test_unknown_category_is_usage_error() {
        let err = "diet".parse::<Category>().unwrap_err();
        assert!(err.is_usage());
        assert!(err.to_string().contains("diet"));
    }
}
