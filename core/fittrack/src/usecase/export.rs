//! CSV エクスポートと共有テキスト（記録コレクションの純粋な整形関数）

use crate::domain::{latest_first, sorted_by_date, WeightEntry};
use common::ports::outbound::Clock;

/// CSV ヘッダ行
const CSV_HEADER: &str = "Date,Weight (kg),Note";

/// 重量を小数表記にする（80.0 -> "80", 79.2 -> "79.2"）
pub(crate) fn format_weight(weight: f64) -> String {
    format!("{}", weight)
}

/// 表示用の日付 YYYY-MM-DD。解析できない保存値はそのまま出す。
pub(crate) fn format_date(entry: &WeightEntry) -> String {
    chrono::DateTime::parse_from_rfc3339(&entry.date)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| entry.date.clone())
}

/// 記録コレクションを CSV にする。行は日付昇順、note は常に引用し
/// 内部の引用符は二重化する。
pub fn csv_export(entries: &[WeightEntry]) -> String {
    let mut lines = vec![CSV_HEADER.to_string()];
    for entry in sorted_by_date(entries) {
        let note = entry
            .note
            .as_deref()
            .unwrap_or("")
            .replace('"', "\"\"");
        lines.push(format!(
            "{},{},\"{}\"",
            format_date(&entry),
            format_weight(entry.weight),
            note
        ));
    }
    lines.join("\n")
}

/// エクスポートファイル名（当日日付入り）
pub fn csv_filename(clock: &dyn Clock) -> String {
    let today = chrono::DateTime::<chrono::Utc>::from_timestamp_millis(clock.now_ms() as i64)
        .unwrap_or(chrono::DateTime::UNIX_EPOCH)
        .format("%Y-%m-%d");
    format!("fittrack_data_{}.csv", today)
}

/// メール本文などに貼れる固定幅の一覧テキスト。
/// 行は日付昇順、末尾に件数と最新体重を付ける。
pub fn share_text(entries: &[WeightEntry]) -> String {
    let mut out = String::new();
    out.push_str("Hello, this is my weight progress recorded in FitTrack:\n\n");
    out.push_str("Date        | Weight (kg) | Notes\n");
    out.push_str("--------------------------------------\n");
    for entry in sorted_by_date(entries) {
        out.push_str(&format!(
            "{:<12}| {:<10}| {}\n",
            format_date(&entry),
            format_weight(entry.weight),
            entry.note.as_deref().unwrap_or("")
        ));
    }
    let latest = latest_first(entries)
        .first()
        .map(|e| format_weight(e.weight))
        .unwrap_or_default();
    out.push_str(&format!(
        "\nTotal entries: {}\nLatest weight: {} kg\n",
        entries.len(),
        latest
    ));
    out
}
