//! 時刻 Outbound ポート
//!
//! ID生成とエクスポートのファイル名が現在時刻に依存するため、テストで固定できるよう trait にする。

/// 現在時刻の抽象（Outbound ポート）
pub trait Clock: Send + Sync {
    /// UNIXエポックからの経過ミリ秒
    fn now_ms(&self) -> u64;
}
