//! 体重記録コレクションの保持・永続化・購読
//!
//! コレクションはこのストアだけが所有する。変更のたびに全体を 1 スロットへ
//! 書き戻す（差分保存はしない）。読み込み時にスロットが無い・壊れている場合は
//! 空のコレクションとして立ち上がる。

use crate::domain::{NewEntry, WeightEntry};
use crate::ports::outbound::SlotStore;
use common::error::Error;
use common::ports::outbound::{now_iso8601, IdGenerator, Log, LogLevel, LogRecord};
use std::collections::BTreeMap;
use std::sync::Arc;

/// 記録コレクションの保存先スロット
pub const ENTRIES_SLOT: &str = "fittrack_entries_v1";

/// 変更後のコレクション全体を受け取る購読コールバック
pub type Subscriber = Box<dyn Fn(&[WeightEntry])>;

/// 体重記録ストア
pub struct EntryStore {
    entries: Vec<WeightEntry>,
    slot: Arc<dyn SlotStore>,
    id_gen: Arc<dyn IdGenerator>,
    logger: Arc<dyn Log>,
    subscribers: Vec<Subscriber>,
}

impl EntryStore {
    /// スロットから記録を読み込んでストアを作る。
    /// スロット欠落・破損は空コレクションに回復し、ログにのみ残す。
    pub fn load(
        slot: Arc<dyn SlotStore>,
        id_gen: Arc<dyn IdGenerator>,
        logger: Arc<dyn Log>,
    ) -> Self {
        let entries = match slot.read_slot(ENTRIES_SLOT) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<WeightEntry>>(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    log_recovery(logger.as_ref(), "stored entries unreadable", &e.to_string());
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                log_recovery(logger.as_ref(), "entries slot unreadable", &e.to_string());
                Vec::new()
            }
        };
        Self {
            entries,
            slot,
            id_gen,
            logger,
            subscribers: Vec::new(),
        }
    }

    /// 記録候補を追加する。id を採番し、コレクション全体を同期的に永続化して
    /// 保存済みの記録を返す。
    ///
    /// 失敗するのは weight が有限数でない場合のみ。それ以外の入力検証は
    /// 呼び出し側（CLI 層）の責務。
    pub fn add(&mut self, candidate: NewEntry) -> Result<WeightEntry, Error> {
        if !candidate.weight.is_finite() {
            return Err(Error::invalid_argument("weight must be a finite number"));
        }
        let entry = WeightEntry {
            id: self.id_gen.next_id(),
            weight: candidate.weight,
            date: candidate.date,
            note: candidate.note,
        };
        self.entries.push(entry.clone());
        self.persist()?;
        self.notify();
        Ok(entry)
    }

    /// id の記録を削除する。存在しない id は何もしない（エラーではない）。
    pub fn remove(&mut self, id: &str) -> Result<(), Error> {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() == before {
            return Ok(());
        }
        self.persist()?;
        self.notify();
        Ok(())
    }

    /// 挿入順のままの全記録。並べ替えは呼び出し側で行う。
    pub fn list(&self) -> &[WeightEntry] {
        &self.entries
    }

    /// 変更通知を購読する。コールバックは add / remove で実際に変更があった後に
    /// コレクション全体を受け取る。
    pub fn subscribe(&mut self, subscriber: Subscriber) {
        self.subscribers.push(subscriber);
    }

    fn persist(&self) -> Result<(), Error> {
        let raw = serde_json::to_string(&self.entries).map_err(|e| Error::json(e.to_string()))?;
        self.slot.write_slot(ENTRIES_SLOT, &raw)
    }

    fn notify(&self) {
        for subscriber in &self.subscribers {
            subscriber(&self.entries);
        }
    }
}

fn log_recovery(logger: &dyn Log, message: &str, detail: &str) {
    let mut fields = BTreeMap::new();
    fields.insert("detail".to_string(), serde_json::json!(detail));
    fields.insert("recovery".to_string(), serde_json::json!("empty collection"));
    let _ = logger.log(&LogRecord {
        ts: now_iso8601(),
        level: LogLevel::Warn,
        message: message.to_string(),
        layer: Some("usecase".to_string()),
        kind: Some("store".to_string()),
        fields: Some(fields),
    });
}
