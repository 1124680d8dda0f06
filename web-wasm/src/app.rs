//! メインアプリケーションコンポーネント
//!
//! コアの [`UploadWorkflow`] をページインスタンスごとに1つ保持し、
//! 疑似処理タイマー（gloo Timeout）のスケジュールとキャンセルを担う。
//! 新しいアップロードやリセットでは保留中のTimeoutを破棄する。
//! コア側でもトークン世代チェックにより遅延発火は無効化される。

use crate::components::{
    header::Header, loading_indicator::LoadingIndicator, result_panel::ResultPanel,
    upload_area::UploadArea,
};
use crate::share;
use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use movie_match_common::{
    FileDescriptor, MatchResult, SessionState, UploadWorkflow, PROCESSING_DELAY_MS,
};

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // 表示用の状態
    let (phase, set_phase) = signal(SessionState::Idle);
    let (preview_url, set_preview_url) = signal(None::<String>);
    let (result, set_result) = signal(None::<MatchResult>);
    let (status, set_status) = signal(None::<String>);

    // コアのワークフローと保留中タイマー（非Sendのためローカル保持）
    let workflow =
        StoredValue::new_local(UploadWorkflow::with_seed(js_sys::Date::now() as u64));
    let pending_timer = StoredValue::new_local(None::<Timeout>);

    // ファイル受付ハンドラ
    let on_file = move |file: FileDescriptor| {
        set_status.set(None);

        match workflow.try_update_value(|w| w.accept_file(file)) {
            Some(Ok(accepted)) => {
                set_preview_url.set(Some(accepted.preview_source.clone()));
                set_result.set(None);
                set_phase.set(SessionState::Processing);

                let token = accepted.timer;
                let timeout = Timeout::new(PROCESSING_DELAY_MS, move || {
                    pending_timer.try_update_value(|slot| {
                        slot.take();
                    });

                    let matched = workflow
                        .try_update_value(|w| w.processing_complete(token))
                        .flatten();
                    if let Some(matched) = matched {
                        set_result.set(Some(matched));
                        set_phase.set(SessionState::ResultReady);
                    }
                });

                // 前のタイマーが残っていればキャンセルして差し替え
                let previous = pending_timer
                    .try_update_value(|slot| slot.replace(timeout))
                    .flatten();
                if let Some(old) = previous {
                    old.cancel();
                }
            }
            Some(Err(e)) => {
                web_sys::console::warn_1(&e.to_string().into());
                set_phase.set(SessionState::Error);
                set_status.set(Some(e.to_string()));
            }
            None => {}
        }
    };

    // リセットハンドラ（クリアボタン）
    let on_clear = move || {
        let previous = pending_timer.try_update_value(|slot| slot.take()).flatten();
        if let Some(timer) = previous {
            timer.cancel();
        }

        workflow.try_update_value(|w| w.clear());
        set_preview_url.set(None);
        set_result.set(None);
        set_status.set(None);
        set_phase.set(SessionState::Idle);
    };

    // もう一度ハンドラ（結果パネル）
    let on_retry = move || {
        let previous = pending_timer.try_update_value(|slot| slot.take()).flatten();
        if let Some(timer) = previous {
            timer.cancel();
        }

        workflow.try_update_value(|w| w.retry());
        set_preview_url.set(None);
        set_result.set(None);
        set_status.set(None);
        set_phase.set(SessionState::Idle);
    };

    // 共有ハンドラ
    let on_share = move || {
        let href = web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default();

        match workflow.try_with_value(|w| w.share_payload(&href)) {
            Some(Ok(payload)) => {
                wasm_bindgen_futures::spawn_local(async move {
                    match share::share_payload(payload).await {
                        Ok(share::ShareOutcome::Shared) => {
                            set_status.set(Some("共有しました".to_string()));
                        }
                        Ok(share::ShareOutcome::Copied) => {
                            set_status
                                .set(Some("共有リンクをクリップボードにコピーしました".to_string()));
                        }
                        Err(e) => {
                            web_sys::console::warn_1(&e.to_string().into());
                            set_status.set(Some(e.to_string()));
                        }
                    }
                });
            }
            Some(Err(e)) => set_status.set(Some(e.to_string())),
            None => {}
        }
    };

    view! {
        <div class="container">
            <Header />

            <main class="panels">
                <section class="upload-panel">
                    <h2>"あなたの写真"</h2>
                    <UploadArea on_file=on_file />

                    <Show when=move || preview_url.get().is_some()>
                        <div class="preview fade-in-up">
                            <img
                                class="preview-image"
                                src=move || preview_url.get().unwrap_or_default()
                            />
                            <button class="btn btn-secondary" on:click=move |_| on_clear()>
                                "クリア"
                            </button>
                        </div>
                    </Show>
                </section>

                <section class="results-panel">
                    <h2>"マッチング結果"</h2>

                    <Show when=move || phase.get() == SessionState::Processing>
                        <LoadingIndicator />
                    </Show>

                    <Show when=move || phase.get() == SessionState::ResultReady>
                        <ResultPanel result=result on_share=on_share on_retry=on_retry />
                    </Show>

                    <Show when=move || {
                        matches!(phase.get(), SessionState::Idle | SessionState::Error)
                    }>
                        <p class="text-muted">
                            "写真をアップロードするとそっくりな俳優を探します"
                        </p>
                    </Show>
                </section>
            </main>

            <Show when=move || status.get().is_some()>
                <div class="status-message">{move || status.get().unwrap_or_default()}</div>
            </Show>
        </div>
    }
}
