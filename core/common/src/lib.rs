//! FitTrack共通ライブラリ
//!
//! アプリ本体（`fittrack`）から使われる共有機能を提供します。

/// エラーハンドリング
pub mod error;

/// Outbound ポート（FS・時刻・ID・ログ・環境変数）
pub mod ports;

/// 標準アダプタ実装
pub mod adapter;

/// LLMプロバイダ
pub mod llm;
