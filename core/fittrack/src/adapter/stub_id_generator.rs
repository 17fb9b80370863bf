//! テスト用: 連番の固定 ID を返す IdGenerator 実装


#[cfg(test)]
pub use stub::StubIdGenerator;
