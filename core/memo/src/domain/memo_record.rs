//! MemoRecord（1 日分のメモ: 分類ごとのエントリ列）
//!
//! 保存形式は `{"hospital": [...], "medicationTime": [...], "pain": [...]}`。
//! 空の分類は書き出さず、欠けている分類・null は空列として読む。未知のキーは無視する。

use super::category::Category;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoRecord {
    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    hospital: Vec<String>,
    #[serde(
        rename = "medicationTime",
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    medication_time: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pain: Vec<String>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl MemoRecord {
    /// 3 分類とも空のレコード
    pub fn new() -> Self {
        Self::default()
    }

    /// 1 分類分のエントリを差し替えたレコードを返す（builder）
    pub fn with<I, S>(mut self, category: Category, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        *self.entries_mut(category) = entries.into_iter().map(Into::into).collect();
        self
    }

    pub fn entries(&self, category: Category) -> &[String] {
        match category {
            Category::Hospital => &self.hospital,
            Category::MedicationTime => &self.medication_time,
            Category::Pain => &self.pain,
        }
    }

    fn entries_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Hospital => &mut self.hospital,
            Category::MedicationTime => &mut self.medication_time,
            Category::Pain => &mut self.pain,
        }
    }

    /// 分類の末尾に 1 件追加（挿入順を保つ）
    pub fn push(&mut self, category: Category, text: impl Into<String>) {
        self.entries_mut(category).push(text.into());
    }

    /// index のエントリを取り除いて返す。範囲外なら None で、レコードは変わらない。
    pub fn remove_at(&mut self, category: Category, index: usize) -> Option<String> {
        let entries = self.entries_mut(category);
        (index < entries.len()).then(|| entries.remove(index))
    }

    /// index のエントリを除いたコピーを返す（範囲外なら None）
    pub fn without_entry(&self, category: Category, index: usize) -> Option<MemoRecord> {
        let mut copy = self.clone();
        copy.remove_at(category, index).map(|_| copy)
    }

    /// 3 分類とも空か
    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|c| self.entries(*c).is_empty())
    }

    /// 刈り込み: 空のレコードは None（ストアから消す対象）
    pub fn pruned(self) -> Option<MemoRecord> {
        (!self.is_empty()).then_some(self)
    }

    /// 空でない分類を Category::ALL の順に列挙する
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> + '_ {
        Category::ALL
            .into_iter()
            .map(|c| (c, self.entries(c)))
            .filter(|(_, entries)| !entries.is_empty())
    }

    pub fn total_entries(&self) -> usize {
        Category::ALL.iter().map(|c| self.entries(*c).len()).sum()
    }
}
