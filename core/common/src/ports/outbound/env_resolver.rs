//! 環境変数解決 Outbound ポート
//!
//! データディレクトリを環境変数から解決する。usecase はこの trait 経由でのみ環境変数にアクセスする。

use crate::error::Error;
use std::path::PathBuf;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// データディレクトリを環境変数から解決する
    ///
    /// 優先順位:
    /// 1. FITTRACK_HOME（設定されていれば）
    /// 2. $XDG_DATA_HOME/fittrack（XDG_DATA_HOME が設定されていれば）
    /// 3. $HOME/.local/share/fittrack
    fn resolve_data_dir(&self) -> Result<PathBuf, Error>;
}
