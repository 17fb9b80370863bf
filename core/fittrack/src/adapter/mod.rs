//! アダプタ実装（アプリ固有）

pub mod file_slot_store;
pub mod memory_slot_store;
pub mod stub_id_generator;
pub mod stub_provider;

pub use file_slot_store::FileSlotStore;

#[cfg(test)]
pub use memory_slot_store::MemorySlotStore;
#[cfg(test)]
pub use stub_id_generator::StubIdGenerator;
#[cfg(test)]
pub use stub_provider::{StubBehavior, StubProvider};
