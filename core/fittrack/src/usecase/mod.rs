//! ユースケース（ドメインロジック。外界にはポート経由でのみ触れる）

pub mod entry_store;
pub mod export;
pub mod insight;
pub mod theme;
pub mod tracker;

pub use entry_store::EntryStore;
pub use insight::InsightClient;
pub use theme::ThemeStore;
pub use tracker::{InsightState, Tracker};
