//! 車両一覧コンポーネント
//!
//! 一覧取得 → グリッド表示。行ごとに詳細の開閉、インライン編集、削除ができる。
//! 画面状態は `ListState`（common）にまとめて1つのシグナルで持つ

use leptos::prelude::*;
use leptos::task::spawn_local;
use gloo::console;
use web_sys::HtmlImageElement;
use caronline_common::{format_price, Error, ListState};
use crate::api::vehicles;

const PLACEHOLDER_IMAGE: &str = "/img/nose.jpg";
const CONFIRM_DELETE: &str = "¿Desea eliminar este vehículo? Esta acción no se puede deshacer.";
const FETCH_FAILED: &str = "Error al obtener vehículos";

fn load_error_message(error: &Error) -> String {
    match error {
        Error::Http { .. } => error.describe(FETCH_FAILED),
        other => other.to_string(),
    }
}

/// `reload` が変わるたびに一覧を取り直す
#[component]
pub fn VehicleList(reload: ReadSignal<u32>) -> impl IntoView {
    let state = RwSignal::new(ListState::default());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    let fetch_vehicles = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match vehicles::list_vehicles().await {
                Ok(list) => state.update(|s| s.replace_vehicles(list)),
                Err(e) => {
                    console::error!(format!("listar vehículos: {}", e));
                    set_error.set(Some(load_error_message(&e)));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        reload.track();
        fetch_vehicles();
    });

    view! {
        <section class="featured-section">
            <div class="container">
                {move || {
                    if loading.get() {
                        view! {
                            <div class="section-header">
                                <h2>"Vehículos Destacados"</h2>
                                <p>"Cargando vehículos..."</p>
                            </div>
                            <div class="loading-spinner">
                                <div class="spinner"></div>
                            </div>
                        }.into_any()
                    } else if let Some(message) = error.get() {
                        view! {
                            <div class="section-header">
                                <h2>"Vehículos Destacados"</h2>
                                <p>{format!("Error: {}", message)}</p>
                            </div>
                            <button class="btn-outline" on:click=move |_| fetch_vehicles()>
                                "Reintentar"
                            </button>
                        }.into_any()
                    } else {
                        view! { <VehicleGrid state=state /> }.into_any()
                    }
                }}
            </div>
        </section>
    }
}

#[component]
fn VehicleGrid(state: RwSignal<ListState>) -> impl IntoView {
    let visible_ids = move || {
        state.with(|s| s.visible().iter().map(|v| v.id).collect::<Vec<_>>())
    };

    view! {
        <div class="section-header">
            <h2>"Vehículos Destacados"</h2>
            <p>"Los mejores vehículos seleccionados para ti"</p>
            {move || {
                state
                    .with(|s| s.notices())
                    .into_iter()
                    .map(|n| view! { <p class=n.css_class()>{n.text().to_string()}</p> })
                    .collect_view()
            }}
        </div>

        <div class="vehicles-grid">
            <For
                each=visible_ids
                key=|id| *id
                children=move |id| view! { <VehicleCard id=id state=state /> }
            />
        </div>

        <Show when=move || state.with(|s| s.has_more())>
            <div class="section-footer">
                {move || {
                    if state.with(|s| s.show_all()) {
                        view! {
                            <button
                                class="btn-outline btn-large"
                                on:click=move |_| state.update(|s| s.set_show_all(false))
                            >
                                "Ver Menos"
                            </button>
                        }.into_any()
                    } else {
                        view! {
                            <button
                                class="btn-outline btn-large"
                                on:click=move |_| state.update(|s| s.set_show_all(true))
                            >
                                {move || format!("Ver Todos los Vehículos ({})", state.with(|s| s.len()))}
                            </button>
                        }.into_any()
                    }
                }}
            </div>
        </Show>
    }
}

/// 1台分のカード
///
/// 行の状態はMemoで切り出し、入力中に要素を作り直さないようにする
#[component]
fn VehicleCard(id: i64, state: RwSignal<ListState>) -> impl IntoView {
    let vehicle = Memo::new(move |_| state.with(|s| s.vehicle(id).cloned()));
    let is_expanded = Memo::new(move |_| state.with(|s| s.is_expanded(id)));
    let is_editing = Memo::new(move |_| state.with(|s| s.is_editing(id)));
    let is_deleting = Memo::new(move |_| state.with(|s| s.is_deleting(id)));
    let is_saving = Memo::new(move |_| state.with(|s| s.is_saving()));
    let can_edit = Memo::new(move |_| state.with(|s| s.can_edit()));
    let can_delete = Memo::new(move |_| state.with(|s| s.can_delete()));

    let on_delete = move |_| {
        if !state.with_untracked(|s| s.can_delete()) {
            return;
        }
        if !gloo::dialogs::confirm(CONFIRM_DELETE) {
            return;
        }
        if !state.try_update(|s| s.begin_delete(id)).unwrap_or(false) {
            return;
        }
        spawn_local(async move {
            match vehicles::delete_vehicle(id).await {
                Ok(()) => state.update(|s| s.complete_delete(id)),
                Err(e) => {
                    console::error!(format!("eliminar vehículo {}: {}", id, e));
                    state.update(|s| s.fail_delete(&e));
                }
            }
        });
    };

    move || {
        vehicle.get().map(|v| {
            let image = v.image_url.clone().unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
            let alt = if v.brand.is_empty() { "Vehículo".to_string() } else { v.brand.clone() };
            let badge = v.condition.clone().zip(v.condition_class());
            let title = v.title();
            let brand = v.brand.clone();
            let mileage = v.mileage.clone().filter(|m| !m.is_empty());
            let price = format_price(v.price);

            view! {
                <div class="vehicle-card">
                    <div class="vehicle-image">
                        <img
                            src=image
                            alt=alt
                            on:error=move |ev| {
                                let img: HtmlImageElement = event_target(&ev);
                                if !img.src().ends_with(PLACEHOLDER_IMAGE) {
                                    img.set_src(PLACEHOLDER_IMAGE);
                                }
                            }
                        />
                        <div class="vehicle-badge">"Destacado"</div>
                        {badge.map(|(text, class)| view! {
                            <div class=format!("estado-badge {}", class)>{text}</div>
                        })}
                    </div>

                    <div class="vehicle-info">
                        <h3>{title}</h3>
                        {move || {
                            if is_editing.get() {
                                return view! {
                                    <EditForm id=id state=state is_saving=is_saving is_deleting=is_deleting />
                                }.into_any();
                            }

                            let details = is_expanded.get().then(|| {
                                let mileage = mileage.clone();
                                let brand = brand.clone();
                                view! {
                                    <div class="vehicle-details">
                                        {mileage.map(|m| view! { <span>{format!("Kilometraje: {}", m)}</span> })}
                                        <span class="brand-tag">{brand}</span>
                                    </div>
                                }
                            });

                            view! {
                                <div class=move || {
                                    if is_expanded.get() { "vehicle-details-expanded" } else { "vehicle-details-collapsed" }
                                }>
                                    {details}
                                    <div class="vehicle-price">
                                        <span class="price">{price.clone()}</span>
                                        <div class="actions">
                                            <button
                                                class="btn-outline"
                                                disabled=move || is_deleting.get()
                                                on:click=move |_| state.update(|s| s.toggle_expanded(id))
                                            >
                                                {move || if is_expanded.get() { "Ver Menos" } else { "Ver Detalles" }}
                                            </button>
                                            <button
                                                class="btn-primary"
                                                disabled=move || is_deleting.get() || !can_edit.get()
                                                on:click=move |_| state.update(|s| {
                                                    s.start_edit(id);
                                                })
                                            >
                                                "Editar"
                                            </button>
                                            <button
                                                class="btn-danger"
                                                disabled=move || !can_delete.get()
                                                on:click=on_delete
                                            >
                                                {move || if is_deleting.get() { "Eliminando…" } else { "Eliminar" }}
                                            </button>
                                        </div>
                                    </div>
                                </div>
                            }.into_any()
                        }}
                    </div>
                </div>
            }
        })
    }
}

/// 行内編集フォーム
#[component]
fn EditForm(
    id: i64,
    state: RwSignal<ListState>,
    is_saving: Memo<bool>,
    is_deleting: Memo<bool>,
) -> impl IntoView {
    let busy = move || is_saving.get() || is_deleting.get();

    let on_save = move |_| {
        // チェックNGならメッセージだけ出して編集モードのまま
        let Some(Ok(payload)) = state.try_update(|s| s.begin_save()) else {
            return;
        };
        spawn_local(async move {
            match vehicles::update_vehicle(&payload).await {
                Ok(()) => state.update(|s| s.complete_save(&payload)),
                Err(e) => {
                    console::error!(format!("actualizar vehículo {}: {}", id, e));
                    state.update(|s| s.fail_save(&e));
                }
            }
        });
    };

    view! {
        <div class="vehicle-edit-form">
            <div class="form-row">
                <label>"Marca"</label>
                <input
                    name="marca"
                    placeholder="Marca"
                    prop:value=move || state.with(|s| s.draft().brand.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.draft_mut().brand = value);
                    }
                />
            </div>
            <div class="form-row">
                <label>"Kilometraje"</label>
                <input
                    name="kilometraje"
                    placeholder="Ej. 140000"
                    prop:value=move || state.with(|s| s.draft().mileage.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.draft_mut().mileage = value);
                    }
                />
            </div>
            <div class="form-row">
                <label>"Precio"</label>
                <input
                    name="precio"
                    placeholder="Ej. 25000"
                    type="number"
                    step="0.01"
                    prop:value=move || state.with(|s| s.draft().price.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.draft_mut().price = value);
                    }
                />
            </div>
            <div class="actions">
                <button class="btn-outline" disabled=busy on:click=move |_| state.update(|s| s.cancel_edit())>
                    "Cancelar"
                </button>
                <button class="btn-primary" disabled=busy on:click=on_save>
                    {move || if is_saving.get() { "Guardando…" } else { "Guardar" }}
                </button>
            </div>
        </div>
    }
}
