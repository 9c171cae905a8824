//! 画像解析コンポーネント
//!
//! 選択した画像をupload-imageへ送り、resultadoを表示する。
//! 埋め込みJSONが読めない場合は生の文字列をそのまま出す

use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;
use gloo::console;
use caronline_common::{AnalysisResult, VehicleAnalysis};
use crate::api::vehicles;

const MSG_FILE_REQUIRED: &str = "Por favor selecciona una imagen.";
const MSG_ANALYZE_FAILED: &str = "Error al analizar la imagen";

#[component]
pub fn ImageAnalysis() -> impl IntoView {
    let file_input: NodeRef<Input> = NodeRef::new();
    let (loading, set_loading) = signal(false);
    let (result, set_result) = signal(None::<AnalysisResult>);
    let (error, set_error) = signal(None::<String>);

    let on_upload = move |_| {
        let file = file_input
            .get()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        let Some(file) = file else {
            set_error.set(Some(MSG_FILE_REQUIRED.to_string()));
            return;
        };

        set_loading.set(true);
        set_error.set(None);
        set_result.set(None);
        spawn_local(async move {
            match vehicles::upload_image(&file).await {
                Ok(analysis) => set_result.set(analysis),
                Err(e) => {
                    console::error!(format!("analizar {}: {}", file.name(), e));
                    set_error.set(Some(MSG_ANALYZE_FAILED.to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="analysis-section">
            <h2>"Analizar Imagen de Vehículo"</h2>
            <input type="file" accept="image/*" node_ref=file_input />
            <button class="btn-primary" on:click=on_upload disabled=move || loading.get()>
                {move || if loading.get() { "Analizando..." } else { "Subir y Analizar" }}
            </button>

            {move || error.get().map(|m| view! { <p class="error-msg">{m}</p> })}

            {move || result.get().map(|r| match r {
                AnalysisResult::Structured(analysis) => view! { <AnalysisCard analysis=analysis /> }.into_any(),
                AnalysisResult::Raw(text) => view! {
                    <div class="analysis-raw">
                        <h3>"Resultado (JSON crudo)"</h3>
                        <pre>{text}</pre>
                    </div>
                }.into_any(),
            })}
        </div>
    }
}

#[component]
fn AnalysisCard(analysis: VehicleAnalysis) -> impl IntoView {
    let VehicleAnalysis { marca, modelo, color, caracteristicas } = analysis;

    view! {
        <div class="analysis-card">
            <h3>"🚗 Detalles del Vehículo"</h3>
            <p><strong>"Marca: "</strong>{marca.unwrap_or_default()}</p>
            <p><strong>"Modelo: "</strong>{modelo.unwrap_or_default()}</p>
            <p><strong>"Color: "</strong>{color.unwrap_or_default()}</p>
            {caracteristicas.map(|features| view! {
                <h4>"Características:"</h4>
                <ul>
                    {features.into_iter().map(|c| view! { <li>{c}</li> }).collect_view()}
                </ul>
            })}
        </div>
    }
}
