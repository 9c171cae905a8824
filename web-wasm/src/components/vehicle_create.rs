//! 車両作成フォームコンポーネント

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use gloo::console;
use caronline_common::validation::{CREATE_FAILED, MSG_CREATED};
use caronline_common::{CreatedRecord, VehicleForm};
use crate::api::vehicles;

/// 作成成功時に `on_created` を呼ぶ（レスポンス本文がJSONでなければNone）
#[component]
pub fn VehicleCreate<F>(on_created: F) -> impl IntoView
where
    F: Fn(Option<CreatedRecord>) + 'static + Clone + Send + Sync,
{
    let form = RwSignal::new(VehicleForm::default());
    let (submitting, set_submitting) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (ok_msg, set_ok_msg) = signal(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        set_ok_msg.set(None);

        // チェックNGならリクエストしない
        let payload = match form.with_untracked(|f| f.validate()) {
            Ok(payload) => payload,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };

        set_submitting.set(true);
        let on_created = on_created.clone();
        spawn_local(async move {
            match vehicles::create_vehicle(&payload).await {
                Ok(created) => {
                    set_ok_msg.set(Some(MSG_CREATED.to_string()));
                    form.update(|f| f.clear());
                    on_created(created);
                }
                Err(e) => {
                    console::error!(format!("crear vehículo: {}", e));
                    set_error.set(Some(e.describe(CREATE_FAILED)));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <section class="featured-section">
            <div class="container">
                <div class="section-header">
                    <h2>"Crear Vehículo"</h2>
                    <p>"Ingrese los datos del nuevo vehículo"</p>
                    {move || ok_msg.get().map(|m| view! { <p class="success-msg">{m}</p> })}
                    {move || error.get().map(|m| view! { <p class="error-msg">{m}</p> })}
                </div>

                <form class="vehicle-edit-form create-form" on:submit=on_submit>
                    <div class="form-row">
                        <label for="marca">"Nombre (Marca) *"</label>
                        <input
                            id="marca"
                            name="marca"
                            placeholder="Ej. Mazda"
                            required
                            prop:value=move || form.with(|f| f.brand.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.brand = value);
                            }
                        />
                    </div>

                    <div class="form-row">
                        <label for="kilometraje">"Kilometraje *"</label>
                        <input
                            id="kilometraje"
                            name="kilometraje"
                            placeholder="Ej. 140000"
                            inputmode="numeric"
                            prop:value=move || form.with(|f| f.mileage.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.mileage = value);
                            }
                        />
                    </div>

                    <div class="form-row">
                        <label for="precio">"Precio (GTQ) *"</label>
                        <input
                            id="precio"
                            name="precio"
                            placeholder="Ej. 25000"
                            type="number"
                            step="0.01"
                            min="0"
                            prop:value=move || form.with(|f| f.price.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.price = value);
                            }
                        />
                    </div>

                    <div class="actions">
                        <button type="submit" class="btn-primary" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Creando…" } else { "Crear vehículo" }}
                        </button>
                    </div>
                </form>

                <p class="text-muted">"* Campo obligatorio"</p>
            </div>
        </section>
    }
}
