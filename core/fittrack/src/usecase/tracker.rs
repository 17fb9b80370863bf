//! インサイト更新ポリシー（コントローラ）
//!
//! コレクション件数 n とインサイト状態の状態機械:
//!
//! * n < 2 の域に入ったら、表示中のインサイトも必ず消して Absent にする
//! * n >= 2 でコレクションが変化したら（追加・削除・初期化）、Pending にして
//!   リクエストを 1 回発行し、返った値を Present として適用する。クライアント内部の
//!   フォールバックも正規の AiInsight なので、この層は成功と劣化を区別しない
//!
//! 各リクエストには単調増加のシーケンス番号を振り、最新の発行番号より古い応答は
//! 適用せずに捨てる。発行（refresh）と適用（apply_response）を分けてあるのは
//! 遅延した応答の追い越しを検証できるようにするため。

use crate::domain::{AiInsight, NewEntry, WeightEntry};
use crate::usecase::entry_store::EntryStore;
use crate::usecase::insight::InsightClient;
use common::error::Error;
use common::ports::outbound::{now_iso8601, Log, LogLevel, LogRecord};
use std::collections::BTreeMap;
use std::sync::Arc;

/// コントローラが保持するインサイト状態
#[derive(Debug, Clone, PartialEq)]
pub enum InsightState {
    Absent,
    Pending,
    Present(AiInsight),
}

/// 記録ストアとインサイトクライアントを束ねるコントローラ
pub struct Tracker {
    store: EntryStore,
    client: InsightClient,
    logger: Arc<dyn Log>,
    state: InsightState,
    dispatched_seq: u64,
    initialized: bool,
}

impl Tracker {
    pub fn new(store: EntryStore, client: InsightClient, logger: Arc<dyn Log>) -> Self {
        Self {
            store,
            client,
            logger,
            state: InsightState::Absent,
            dispatched_seq: 0,
            initialized: false,
        }
    }

    /// 挿入順のままの全記録
    pub fn entries(&self) -> &[WeightEntry] {
        self.store.list()
    }

    /// 現在のインサイト状態
    pub fn insight(&self) -> &InsightState {
        &self.state
    }

    /// 記録を追加し、更新ポリシーを 1 回実行する
    pub fn add(&mut self, candidate: NewEntry) -> Result<WeightEntry, Error> {
        let entry = self.store.add(candidate)?;
        self.refresh();
        Ok(entry)
    }

    /// 記録を削除し、更新ポリシーを 1 回実行する。
    /// 削除で n < 2 になった場合は表示中のインサイトを消す。
    pub fn remove(&mut self, id: &str) -> Result<(), Error> {
        self.store.remove(id)?;
        self.refresh();
        Ok(())
    }

    /// 起動時（復元したコレクションに対する）初回更新。プロセス中 1 回だけ動く。
    pub fn init_refresh(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        self.refresh();
    }

    /// 更新ポリシー本体
    fn refresh(&mut self) {
        if self.store.list().len() < 2 {
            self.state = InsightState::Absent;
            return;
        }
        self.state = InsightState::Pending;
        let seq = self.next_seq();
        let entries = self.store.list().to_vec();
        let insight = self.client.request_insight(&entries);
        self.apply_response(seq, insight);
    }

    fn next_seq(&mut self) -> u64 {
        self.dispatched_seq += 1;
        self.dispatched_seq
    }

    /// seq 番のリクエストの応答を適用する。より新しいリクエストが既に発行されて
    /// いる場合、その応答は古いので捨てる。
    pub(crate) fn apply_response(&mut self, seq: u64, insight: AiInsight) {
        if seq < self.dispatched_seq {
            let mut fields = BTreeMap::new();
            fields.insert("response_seq".to_string(), serde_json::json!(seq));
            fields.insert(
                "latest_seq".to_string(),
                serde_json::json!(self.dispatched_seq),
            );
            let _ = self.logger.log(&LogRecord {
                ts: now_iso8601(),
                level: LogLevel::Debug,
                message: "stale insight response discarded".to_string(),
                layer: Some("usecase".to_string()),
                kind: Some("insight".to_string()),
                fields: Some(fields),
            });
            return;
        }
        self.state = InsightState::Present(insight);
    }

    #[cfg(test)]
    pub(crate) fn dispatched_seq(&self) -> u64 {
        self.dispatched_seq
    }
}
