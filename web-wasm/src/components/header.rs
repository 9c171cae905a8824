//! ヘッダーコンポーネント

use leptos::prelude::*;

/// 各セクションへのリンク（#id）
const NAV_LINKS: [(&str, &str); 4] = [
    ("#inicio", "Inicio"),
    ("#crear-auto", "Crear"),
    ("#vehiculos", "Vehículos"),
    ("#analizar", "Analizar"),
];

#[component]
pub fn Header() -> impl IntoView {
    let (dark, set_dark) = signal(false);

    // テーマはbodyのクラスで切り替える
    let toggle_theme = move |_| {
        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            let _ = body.class_list().toggle("dark-mode");
        }
        set_dark.update(|d| *d = !*d);
    };

    view! {
        <header class="header">
            <div class="header-container">
                <div class="logo">
                    <h1>"CarOnline"</h1>
                </div>
                <nav class="nav">
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| view! { <a href=*href class="nav-link">{*label}</a> })
                        .collect_view()}
                </nav>
                <div class="header-actions">
                    <button class="btn-theme-toggle" on:click=toggle_theme>
                        {move || if dark.get() { "☀️ Claro" } else { "🌙 Oscuro" }}
                    </button>
                </div>
            </div>
        </header>
    }
}
