//! テスト用: メモリ上にスロットを保持する SlotStore 実装

#[cfg(test)]
mod mem {
    use crate::ports::outbound::SlotStore;
    use common::error::Error;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// テスト用: HashMap に保存する SlotStore
    #[derive(Default)]
    pub struct MemorySlotStore {
        slots: Mutex<HashMap<String, String>>,
    }

    impl MemorySlotStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// スロットに初期値を仕込む（破損データの再現などに使う）
        pub fn seed(&self, slot: &str, value: &str) {
            self.slots
                .lock()
                .expect("slot store lock")
                .insert(slot.to_string(), value.to_string());
        }

        /// 現在のスロット内容（書き込み検証用）
        pub fn contents(&self, slot: &str) -> Option<String> {
            self.slots
                .lock()
                .expect("slot store lock")
                .get(slot)
                .cloned()
        }
    }

    impl SlotStore for MemorySlotStore {
        fn read_slot(&self, slot: &str) -> Result<Option<String>, Error> {
            Ok(self
                .slots
                .lock()
                .map_err(|_| Error::io_msg("slot store lock poisoned"))?
                .get(slot)
                .cloned())
        }

        fn write_slot(&self, slot: &str, value: &str) -> Result<(), Error> {
            self.slots
                .lock()
                .map_err(|_| Error::io_msg("slot store lock poisoned"))?
                .insert(slot.to_string(), value.to_string());
            Ok(())
        }
    }
}

#[cfg(test)]
pub use mem::MemorySlotStore;
