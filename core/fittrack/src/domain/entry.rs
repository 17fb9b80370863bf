//! 体重記録 1 件のドメイン型
//!
//! 旧クライアントの保存形式（fittrack_entries_v1）と互換のフィールド。

use serde::{Deserialize, Serialize};

/// 体重記録 1 件
///
/// 作成後は削除以外で変更されない。id はコレクション内で一意。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    pub id: String,
    /// kg
    pub weight: f64,
    /// RFC3339 (ISO-8601)
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl WeightEntry {
    /// date をエポックミリ秒に変換する。
    /// 解析できない日付は i64::MIN（ソートで先頭に来る）。
    pub fn timestamp_ms(&self) -> i64 {
        chrono::DateTime::parse_from_rfc3339(&self.date)
            .map(|dt| dt.timestamp_millis())
            .unwrap_or(i64::MIN)
    }
}

/// ストアに渡す記録候補（id はストアが採番する）
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntry {
    pub weight: f64,
    pub date: String,
    pub note: Option<String>,
}

/// 日付昇順のコピーを返す。同一日付は挿入順を保つ（安定ソート）。
pub fn sorted_by_date(entries: &[WeightEntry]) -> Vec<WeightEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by_key(|e| e.timestamp_ms());
    sorted
}

/// 日付降順のコピーを返す（履歴表示用）。
pub fn latest_first(entries: &[WeightEntry]) -> Vec<WeightEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by_key(|e| std::cmp::Reverse(e.timestamp_ms()));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, date: &str) -> WeightEntry {
        WeightEntry {
            id: id.to_string(),
            weight: 80.0,
            date: date.to_string(),
            note: None,
        }
    }

    #[test]
    fn test_sorted_by_date_orders_ascending() {
        let entries = vec![
            entry("b", "2024-01-05T00:00:00+00:00"),
            entry("a", "2024-01-01T00:00:00+00:00"),
            entry("c", "2024-01-03T00:00:00+00:00"),
        ];
        let sorted = sorted_by_date(&entries);
        let ids: Vec<&str> = sorted.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["a", "c", "b"]);
    }

    #[test]
    fn test_duplicate_dates_keep_insertion_order() {
        let entries = vec![
            entry("first", "2024-01-01T00:00:00+00:00"),
            entry("second", "2024-01-01T00:00:00+00:00"),
        ];
        let sorted = sorted_by_date(&entries);
        assert_eq!(sorted[0].id, "first");
        assert_eq!(sorted[1].id, "second");
    }

    #[test]
    fn test_unparseable_date_sorts_first() {
        let entries = vec![
            entry("ok", "2024-01-01T00:00:00+00:00"),
            entry("broken", "not-a-date"),
        ];
        let sorted = sorted_by_date(&entries);
        assert_eq!(sorted[0].id, "broken");
    }

    #[test]
    fn test_latest_first_orders_descending() {
        let entries = vec![
            entry("a", "2024-01-01T00:00:00+00:00"),
            entry("b", "2024-01-05T00:00:00+00:00"),
        ];
        let sorted = latest_first(&entries);
        assert_eq!(sorted[0].id, "b");
    }

    #[test]
    fn test_note_absent_is_not_serialized() {
        let json = serde_json::to_string(&entry("a", "2024-01-01T00:00:00+00:00")).unwrap();
        assert!(!json.contains("note"));
    }

    #[test]
    fn test_deserializes_entry_without_note() {
        let raw = r#"{"id":"x","weight":79.2,"date":"2024-01-05T00:00:00+00:00"}"#;
        let e: WeightEntry = serde_json::from_str(raw).unwrap();
        assert_eq!(e.weight, 79.2);
        assert!(e.note.is_none());
    }
}
