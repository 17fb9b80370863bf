//! 配線: 標準アダプタで App を組み立てる

use std::collections::BTreeMap;
use std::sync::Arc;

use common::adapter::{FileJsonLog, StdClock, StdEnvResolver, StdFileSystem, StdIdGenerator};
use common::error::Error;
use common::llm::{create_provider, LlmProvider, ProviderType};
use common::ports::outbound::{
    now_iso8601, Clock, EnvResolver, FileSystem, IdGenerator, Log, LogLevel, LogRecord,
};

use crate::adapter::FileSlotStore;
use crate::ports::outbound::SlotStore;
use crate::usecase::{EntryStore, InsightClient, ThemeStore, Tracker};

/// 組み立て済みアプリケーション
pub struct App {
    pub tracker: Tracker,
    pub theme: ThemeStore,
    pub logger: Arc<dyn Log>,
    pub clock: Arc<dyn Clock>,
    pub fs: Arc<dyn FileSystem>,
}

/// 配線: 標準アダプタで App を組み立てる
pub fn wire_app(provider: Option<&str>, model: Option<String>) -> Result<App, Error> {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let clock: Arc<dyn Clock> = Arc::new(StdClock);
    let env: Arc<dyn EnvResolver> = Arc::new(StdEnvResolver);

    let data_dir = env.resolve_data_dir()?;
    let logger: Arc<dyn Log> = Arc::new(FileJsonLog::new(
        Arc::clone(&fs),
        data_dir.join("logs").join("fittrack.log.jsonl"),
    ));
    let slot: Arc<dyn SlotStore> = Arc::new(FileSlotStore::new(Arc::clone(&fs), data_dir));
    let id_gen: Arc<dyn IdGenerator> = Arc::new(StdIdGenerator::new(Arc::clone(&clock)));

    let provider_type = match provider {
        Some(name) => ProviderType::from_str(name).ok_or_else(|| {
            Error::invalid_argument(format!(
                "Unknown provider: {}. Supported providers: gemini, echo",
                name
            ))
        })?,
        None => ProviderType::Gemini,
    };
    let provider: Arc<dyn LlmProvider> = Arc::new(create_provider(provider_type, model));

    let mut store = EntryStore::load(Arc::clone(&slot), id_gen, Arc::clone(&logger));
    {
        // 変更のたびに件数をログに残す購読者
        let log = Arc::clone(&logger);
        store.subscribe(Box::new(move |entries| {
            let mut fields = BTreeMap::new();
            fields.insert("count".to_string(), serde_json::json!(entries.len()));
            let _ = log.log(&LogRecord {
                ts: now_iso8601(),
                level: LogLevel::Info,
                message: "entries changed".to_string(),
                layer: Some("usecase".to_string()),
                kind: Some("store".to_string()),
                fields: Some(fields),
            });
        }));
    }

    let client = InsightClient::new(provider, Arc::clone(&logger));
    let tracker = Tracker::new(store, client, Arc::clone(&logger));

    Ok(App {
        tracker,
        theme: ThemeStore::new(slot),
        logger,
        clock,
        fs,
    })
}
