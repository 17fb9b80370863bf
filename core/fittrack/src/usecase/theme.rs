//! 表示テーマ設定の読み書き

use crate::domain::Theme;
use crate::ports::outbound::SlotStore;
use common::error::Error;
use std::sync::Arc;

/// テーマ設定の保存先スロット
pub const THEME_SLOT: &str = "fittrack_theme";

/// テーマ設定ストア
pub struct ThemeStore {
    slot: Arc<dyn SlotStore>,
}

impl ThemeStore {
    pub fn new(slot: Arc<dyn SlotStore>) -> Self {
        Self { slot }
    }

    /// 現在のテーマ。スロットが無い・読めない・未知の値なら Light。
    pub fn current(&self) -> Theme {
        self.slot
            .read_slot(THEME_SLOT)
            .ok()
            .flatten()
            .and_then(|s| Theme::from_str(s.trim()))
            .unwrap_or_default()
    }

    pub fn set(&self, theme: Theme) -> Result<(), Error> {
        self.slot.write_slot(THEME_SLOT, theme.as_str())
    }
}
