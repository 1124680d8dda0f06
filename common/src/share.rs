//! 共有ペイロード生成
//!
//! Web Share API向けの `{title, text, url}` と、
//! クリップボードフォールバック用の1行テキストを組み立てる。

use crate::types::{MatchResult, SharePayload};

/// 共有タイトル
pub const SHARE_TITLE: &str = "私の映画ドッペルゲンガー";

/// マッチ結果から共有ペイロードを生成
pub fn build_payload(result: &MatchResult, url: &str) -> SharePayload {
    SharePayload {
        title: SHARE_TITLE.to_string(),
        text: format!(
            "私の映画ドッペルゲンガーは {} でした！（一致度 {}%）",
            result.name, result.confidence
        ),
        url: url.to_string(),
    }
}

/// クリップボード用のフォールバックテキスト
pub fn clipboard_text(payload: &SharePayload) -> String {
    format!("{} {}", payload.text, payload.url)
}
