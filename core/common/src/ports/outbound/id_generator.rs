//! 記録 ID 生成 Outbound ポート
//!
//! usecase は IdGenerator を注入し、テストでは固定 ID を返す実装を渡せる。

/// 一意な記録 ID を生成する抽象（Outbound ポート）
///
/// 返す ID は過去に返したどの ID とも重複しないこと。
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}
