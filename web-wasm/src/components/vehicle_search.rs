//! ID検索コンポーネント
//!
//! 失敗時はステータスに関係なく「見つからない」旨だけを表示する

use leptos::ev::KeyboardEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use gloo::console;
use caronline_common::{format_price, Vehicle};
use crate::api::vehicles;

const MSG_ID_REQUIRED: &str = "Por favor, ingresa un ID de vehículo";
const MSG_NOT_FOUND: &str = "No se pudo obtener el vehículo. Verifica el ID.";

#[component]
pub fn VehicleSearch() -> impl IntoView {
    let (id, set_id) = signal(String::new());
    let (searching, set_searching) = signal(false);
    let (vehicle, set_vehicle) = signal(None::<Vehicle>);
    let (error, set_error) = signal(None::<String>);

    let search = move || {
        let query = id.get_untracked().trim().to_string();
        set_vehicle.set(None);
        if query.is_empty() {
            set_error.set(Some(MSG_ID_REQUIRED.to_string()));
            return;
        }

        set_error.set(None);
        set_searching.set(true);
        spawn_local(async move {
            match vehicles::find_vehicle(&query).await {
                Ok(found) => set_vehicle.set(Some(found)),
                Err(e) => {
                    console::error!(format!("buscar {}: {}", query, e));
                    set_error.set(Some(MSG_NOT_FOUND.to_string()));
                }
            }
            set_searching.set(false);
        });
    };

    let on_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Enter" {
            search();
        }
    };

    view! {
        <section class="search-section">
            <div class="search-container">
                <div class="search-box">
                    <div class="search-input">
                        <input
                            type="text"
                            placeholder="Ingresa ID del vehículo"
                            prop:value=move || id.get()
                            on:input=move |ev| set_id.set(event_target_value(&ev))
                            on:keydown=on_keydown
                        />
                    </div>
                    <button
                        class="btn-primary"
                        on:click=move |_| search()
                        disabled=move || searching.get()
                    >
                        {move || if searching.get() { "Buscando..." } else { "Buscar por ID" }}
                    </button>
                </div>

                {move || error.get().map(|m| view! { <p class="error-msg">{m}</p> })}

                {move || vehicle.get().map(|v| view! {
                    <div class="vehicle-card">
                        <h3>"Vehículo encontrado"</h3>
                        <p><strong>"ID: "</strong>{v.id}</p>
                        <p><strong>"Marca: "</strong>{v.brand.clone()}</p>
                        <p><strong>"Kilometraje: "</strong>{v.mileage.clone().unwrap_or_default()}</p>
                        <p><strong>"Precio: "</strong>{format_price(v.price)}</p>
                    </div>
                })}
            </div>
        </section>
    }
}
