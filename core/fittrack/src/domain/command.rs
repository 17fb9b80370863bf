//! CLI から実行されるコマンドのドメイン型

/// fittrack が実行できるコマンド
#[derive(Debug, Clone, PartialEq)]
pub enum TrackCommand {
    Help,
    /// 記録を追加する。weight は未検証の文字列（検証は CLI 層で行う）
    Add {
        weight: String,
        date: Option<String>,
        note: Option<String>,
    },
    /// id の記録を削除する（存在しなければ何もしない）
    Remove { id: String },
    /// 履歴を新しい順に表示する
    List,
    /// インサイトを取得して表示する
    Insight,
    /// CSV にエクスポートする
    Export { out: Option<String> },
    /// 共有用テキストを表示する
    Share,
    /// テーマ設定の表示・変更
    Theme { value: Option<String> },
}

impl TrackCommand {
    /// ログ用のコマンド名
    pub fn name(&self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Add { .. } => "add",
            Self::Remove { .. } => "remove",
            Self::List => "list",
            Self::Insight => "insight",
            Self::Export { .. } => "export",
            Self::Share => "share",
            Self::Theme { .. } => "theme",
        }
    }
}
