//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="app-header">
            <h1>"🎬 Movie Selfie Matcher"</h1>
            <p class="text-muted">"あなたにそっくりな映画俳優を探します（結果はお遊びです）"</p>
        </header>
    }
}
