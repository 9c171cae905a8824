//! 読み込み中表示コンポーネント

use leptos::prelude::*;

/// 起動直後の全画面スピナー
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="loading-content">
                <div class="spinner"></div>
                <p class="text-muted">"Cargando..."</p>
            </div>
        </div>
    }
}
