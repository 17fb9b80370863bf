//! エラーハンドリング

/// 全レイヤー共通のエラー型
///
/// 終了コードは sysexits 準拠（64: 引数不正, 70: 内部エラー, 74: I/O, 78: 設定）
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    InvalidArgument(String),
    #[error("{0}")]
    Io(String),
    #[error("{0}")]
    Json(String),
    #[error("{0}")]
    Http(String),
    #[error("{0}")]
    Env(String),
}

impl Error {
    /// 引数不正エラー
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// I/Oエラー
    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// JSONエンコード・デコードエラー
    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    /// HTTP通信エラー（非2xxを含む）
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    /// 環境変数未設定などの設定エラー
    pub fn env(msg: impl Into<String>) -> Self {
        Self::Env(msg.into())
    }

    /// プロセス終了コードへの対応付け
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) => 64,
            Self::Io(_) => 74,
            Self::Json(_) | Self::Http(_) => 70,
            Self::Env(_) => 78,
        }
    }
}
