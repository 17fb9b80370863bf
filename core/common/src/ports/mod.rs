//! ポート定義（usecase が外界に触れるための trait）

pub mod outbound;
