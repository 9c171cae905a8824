//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use gloo::console;
use gloo::timers::callback::Timeout;
use caronline_common::CreatedRecord;
use crate::components::{
    header::Header,
    loading::LoadingScreen,
    vehicle_create::VehicleCreate,
    vehicle_search::VehicleSearch,
    vehicle_list::VehicleList,
    image_analysis::ImageAnalysis,
};

/// 初回描画までの待ち時間（ミリ秒）
const STARTUP_DELAY_MS: u32 = 1_500;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let (is_loading, set_is_loading) = signal(true);

    // アプリは破棄されないのでタイマーは解放しない
    let _ = Timeout::new(STARTUP_DELAY_MS, move || set_is_loading.set(false)).forget();

    view! {
        <Show
            when=move || !is_loading.get()
            fallback=|| view! { <LoadingScreen /> }
        >
            <div class="App">
                <Homepage />
            </div>
        </Show>
    }
}

/// 1ページ構成のホーム
#[component]
fn Homepage() -> impl IntoView {
    // 作成のたびに一覧を再取得させる
    let (reload, set_reload) = signal(0u32);

    let on_created = move |created: Option<CreatedRecord>| {
        if let Some(record) = &created {
            console::log!(format!("vehículo creado: {}", record.as_value()));
        }
        set_reload.update(|n| *n += 1);
    };

    view! {
        <div class="homepage">
            <Header />

            <section id="inicio">
                <div class="hero">
                    <h2>"Encuentra tu próximo vehículo"</h2>
                    <p>"Compra, vende y analiza vehículos en un solo lugar"</p>
                </div>
            </section>

            <section id="crear-auto">
                <VehicleCreate on_created=on_created />
            </section>

            <section id="vehiculos">
                <VehicleSearch />
                <VehicleList reload=reload />
            </section>

            <section id="analizar">
                <h2 class="section-title">"Analizar Imagen"</h2>
                <ImageAnalysis />
            </section>
        </div>
    }
}
