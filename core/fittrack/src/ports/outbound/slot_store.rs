//! 名前付きスロット永続化 Outbound ポート
//!
//! 1 スロット = 1 つのエンコード済み文字列。記録コレクションとテーマ設定が
//! それぞれ別のスロットを使う。usecase はこの trait 経由でのみ永続化に触れる。

use common::error::Error;

/// 名前付きスロットの読み書き抽象（Outbound ポート）
///
/// 実装は `adapter::FileSlotStore` やテスト用のメモリ実装など。
pub trait SlotStore: Send + Sync {
    /// スロットの内容を返す。スロットが存在しなければ Ok(None)。
    fn read_slot(&self, slot: &str) -> Result<Option<String>, Error>;

    /// スロットを丸ごと書き換える（差分書き込みはしない）。
    fn write_slot(&self, slot: &str, value: &str) -> Result<(), Error>;
}
