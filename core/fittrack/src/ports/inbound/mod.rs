//! Inbound ポート: ドライバ（CLI）がアプリを呼び出すインターフェース

use crate::domain::TrackCommand;
use common::error::Error;

/// コマンドを実行する Inbound ポート
///
/// main はこの trait を実装した型（Runner）の run を呼び出す。
pub trait UseCaseRunner {
    fn run(&mut self, cmd: TrackCommand) -> Result<i32, Error>;
}
