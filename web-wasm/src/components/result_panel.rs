//! マッチング結果パネルコンポーネント
//!
//! 候補の画像・名前・出演作と、アニメーションする一致度バーを表示する。
//! バーは0%から始め、少し遅れて実際の値まで伸ばす。

use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use movie_match_common::MatchResult;

/// バーのアニメーション開始までの遅延（ミリ秒）
const BAR_ANIMATION_DELAY_MS: u32 = 500;

#[component]
pub fn ResultPanel<FS, FR>(
    result: ReadSignal<Option<MatchResult>>,
    on_share: FS,
    on_retry: FR,
) -> impl IntoView
where
    FS: Fn() + 'static + Clone + Send,
    FR: Fn() + 'static + Clone + Send,
{
    let (bar_width, set_bar_width) = signal(0u8);
    let animation_timer = StoredValue::new_local(None::<Timeout>);

    // 結果が変わるたびにバーを0%へ戻し、遅延後に一致度まで伸ばす
    Effect::new(move |_| {
        let confidence = result.get().map(|r| r.confidence);
        set_bar_width.set(0);

        let timeout = confidence.map(|confidence| {
            Timeout::new(BAR_ANIMATION_DELAY_MS, move || {
                set_bar_width.set(confidence);
            })
        });

        let previous = animation_timer
            .try_update_value(|slot| std::mem::replace(slot, timeout))
            .flatten();
        if let Some(old) = previous {
            old.cancel();
        }
    });

    view! {
        <div class="results-display fade-in-up">
            {move || {
                result.get().map(|matched| {
                    view! {
                        <img
                            class="matched-image"
                            src=matched.image_ref.clone()
                            alt=matched.name.clone()
                        />
                        <h3 class="matched-name">{matched.name.clone()}</h3>
                        <p class="matched-movie">{matched.source_work.clone()}</p>
                        <div class="confidence-bar">
                            <div
                                class="confidence-fill"
                                style=move || format!("width: {}%", bar_width.get())
                            />
                        </div>
                        <p class="confidence-value">{format!("一致度 {}%", matched.confidence)}</p>
                    }
                })
            }}
            <div class="results-actions">
                <button
                    class="btn btn-primary"
                    on:click={
                        let on_share = on_share.clone();
                        move |_| on_share()
                    }
                >
                    "結果を共有"
                </button>
                <button
                    class="btn btn-secondary"
                    on:click={
                        let on_retry = on_retry.clone();
                        move |_| on_retry()
                    }
                >
                    "もう一度"
                </button>
            </div>
        </div>
    }
}
