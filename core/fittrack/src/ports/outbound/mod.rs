//! Outbound ポート: アプリ固有の外界アクセス trait
//!
//! 共通ポート（FS・時刻・ID・ログ）は common::ports::outbound にある。

pub mod slot_store;

pub use slot_store::SlotStore;
