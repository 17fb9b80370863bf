//! ユースケース・CLI の単体テスト（スタブアダプタを注入）

mod insight_tests;
