//! 処理中インジケータコンポーネント

use leptos::prelude::*;

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="loading-state">
            <div class="spinner" />
            <p>"AIがそっくりな俳優を探しています..."</p>
        </div>
    }
}
