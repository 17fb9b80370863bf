//! AIインサイトのドメイン型
//!
//! 外部生成サービスのレスポンス（JSON）と同じワイヤ形式。プロセス内でのみ保持し、永続化しない。

use serde::{Deserialize, Serialize};

/// 直近の体重変化の分類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Stable => "stable",
        }
    }
}

/// 外部生成サービスが返すトレンド所見
///
/// 4 フィールドすべて必須。serde がレスポンス検証を兼ねる
/// （フィールド欠落・未知の trend 値は deserialization エラーになる）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiInsight {
    pub summary: String,
    pub trend: Trend,
    pub advice: String,
    #[serde(rename = "suggestedAction")]
    pub suggested_action: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_wire_shape() {
        let raw = r#"{"summary":"s","trend":"down","advice":"a","suggestedAction":"next"}"#;
        let insight: AiInsight = serde_json::from_str(raw).unwrap();
        assert_eq!(insight.trend, Trend::Down);
        assert_eq!(insight.suggested_action, "next");
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let raw = r#"{"summary":"s","trend":"up","advice":"a"}"#;
        assert!(serde_json::from_str::<AiInsight>(raw).is_err());
    }

    #[test]
    fn test_unknown_trend_is_rejected() {
        let raw = r#"{"summary":"s","trend":"sideways","advice":"a","suggestedAction":"n"}"#;
        assert!(serde_json::from_str::<AiInsight>(raw).is_err());
    }
}
