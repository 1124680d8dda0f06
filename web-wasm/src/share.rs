//! Web Share API連携
//!
//! navigator.share が使える環境ではネイティブ共有ダイアログを、
//! 使えない環境ではクリップボードへのコピーにフォールバックする。
//! 失敗はすべて Error::ShareUnsupported に畳み込む。

use movie_match_common::{share::clipboard_text, Error, SharePayload};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::ShareData;

/// 共有の成立方法
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// ネイティブ共有ダイアログ経由
    Shared,
    /// クリップボードへのコピー
    Copied,
}

/// ペイロードを共有する
///
/// 成功してもセッション状態には触れない（結果表示のまま）。
pub async fn share_payload(payload: SharePayload) -> Result<ShareOutcome, Error> {
    let window = web_sys::window()
        .ok_or_else(|| Error::ShareUnsupported("ウィンドウが取得できません".to_string()))?;
    let navigator = window.navigator();

    let has_native_share =
        js_sys::Reflect::has(navigator.as_ref(), &JsValue::from_str("share")).unwrap_or(false);

    if has_native_share {
        let data = ShareData::new();
        data.set_title(&payload.title);
        data.set_text(&payload.text);
        data.set_url(&payload.url);

        JsFuture::from(navigator.share_with_data(&data))
            .await
            .map_err(|e| Error::ShareUnsupported(js_error_message(&e)))?;
        Ok(ShareOutcome::Shared)
    } else {
        let clipboard = navigator.clipboard();
        JsFuture::from(clipboard.write_text(&clipboard_text(&payload)))
            .await
            .map_err(|e| Error::ShareUnsupported(js_error_message(&e)))?;
        Ok(ShareOutcome::Copied)
    }
}

fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_js_error_message_uses_string_value() {
        let value = JsValue::from_str("クリップボードへの書き込みが拒否されました");
        assert_eq!(
            js_error_message(&value),
            "クリップボードへの書き込みが拒否されました"
        );
    }

    #[wasm_bindgen_test]
    fn wasm_js_error_message_falls_back_to_debug() {
        // 文字列でないエラー値でも空メッセージにはならない
        let value = JsValue::from_f64(1.5);
        assert!(!js_error_message(&value).is_empty());
    }

    #[wasm_bindgen_test]
    fn wasm_share_data_carries_payload_fields() {
        let data = ShareData::new();
        data.set_title("私の映画ドッペルゲンガー");
        data.set_text("本文");
        data.set_url("https://example.com/");

        let title =
            js_sys::Reflect::get(data.as_ref(), &JsValue::from_str("title")).expect("titleなし");
        assert_eq!(title.as_string().as_deref(), Some("私の映画ドッペルゲンガー"));

        let url = js_sys::Reflect::get(data.as_ref(), &JsValue::from_str("url")).expect("urlなし");
        assert_eq!(url.as_string().as_deref(), Some("https://example.com/"));
    }
}
