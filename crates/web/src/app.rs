//! The shell: transient view state, the settings drawer, and the one
//! generation request.

use leptos::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use viewsmith_core::{DEFAULT_MODEL, GenerateRequest, UserId, can_submit};

use crate::api;
use crate::bus::{UiBus, UiEvent};
use crate::fallback::FallbackView;
use crate::registry::{ResolvedView, ViewRegistry};
use crate::settings::SettingsStore;

#[component]
pub fn Shell() -> impl IntoView {
    let settings = SettingsStore::open();

    let (user_id, set_user_id) = create_signal(None::<UserId>);
    let (prompt, set_prompt) = create_signal(String::new());
    let (model_name, set_model_name) = create_signal(DEFAULT_MODEL.to_string());
    let (token, set_token) = create_signal(String::new());
    let (image_data_url, set_image_data_url) = create_signal(None::<String>);
    let (modify_existing, set_modify_existing) = create_signal(true);
    let (is_submitting, set_is_submitting) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);
    let (drawer_open, set_drawer_open) = create_signal(false);

    // Session identity and saved token come up before anything keys off
    // user_id, so resolution always sees the settled identity.
    if let Some(store) = settings.clone() {
        set_user_id.set(Some(store.ensure_user_id()));
        if let Some(saved) = store.token() {
            set_token.set(saved);
        }
    }

    // Write-through token persistence.
    {
        let settings = settings.clone();
        create_effect(move |_| {
            let value = token.get();
            if let Some(store) = &settings {
                store.set_token(&value);
            }
        });
    }

    // The fallback view reaches the drawer through the typed bus only.
    let bus = UiBus::new();
    provide_context(bus.clone());
    let drawer_subscription = bus.subscribe(move |event| match event {
        UiEvent::OpenSettings => set_drawer_open.set(true),
    });
    on_cleanup(move || drop(drawer_subscription));

    // Re-resolved whenever the identity changes; in practice once per load.
    let registry = ViewRegistry::new(api::components_base());
    let resolved = create_local_resource(
        move || user_id.get(),
        move |id| {
            let registry = registry.clone();
            async move {
                match id {
                    Some(id) => registry.resolve(id).await,
                    None => ResolvedView::NotFound,
                }
            }
        },
    );

    let on_image_selected = move |ev| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        let Ok(reader) = web_sys::FileReader::new() else {
            return;
        };
        let reader_for_load = reader.clone();
        let onloadend = Closure::<dyn FnMut(web_sys::ProgressEvent)>::new(
            move |_: web_sys::ProgressEvent| match reader_for_load.result() {
                Ok(value) if value.as_string().is_some() => {
                    set_image_data_url.set(value.as_string());
                }
                _ => logging::error!("failed to read the selected file as a data URL"),
            },
        );
        reader.set_onloadend(Some(onloadend.as_ref().unchecked_ref()));
        onloadend.forget();

        if reader.read_as_data_url(&file).is_err() {
            logging::error!("failed to start reading the selected file");
        }
    };

    let submit = move |_| {
        if is_submitting.get() {
            return;
        }
        let Some(id) = user_id.get() else {
            return;
        };

        let request = GenerateRequest {
            prompt: prompt.get(),
            image: image_data_url.get(),
            modify_existing: modify_existing.get(),
            model: model_name.get(),
            user_id: id,
        };
        let bearer = token.get();

        set_is_submitting.set(true);
        set_error.set(None);
        set_drawer_open.set(false);

        spawn_local(async move {
            match api::submit_generation(&request, &bearer).await {
                Ok(()) => {
                    // Reload so the registry re-resolves the fresh view with
                    // no stale state anywhere.
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().reload();
                    }
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="shell">
            {move || {
                is_submitting
                    .get()
                    .then(|| view! { <div class="loading-overlay">"Generating…"</div> })
            }}

            <button
                class="settings-toggle"
                on:click=move |_| set_drawer_open.update(|open| *open = !*open)
            >
                "Settings"
            </button>

            {move || {
                drawer_open
                    .get()
                    .then(|| {
                        view! {
                            <div class="drawer">
                                <textarea
                                    placeholder="Enter your prompt"
                                    prop:value=move || prompt.get()
                                    on:input=move |ev| set_prompt.set(event_target_value(&ev))
                                ></textarea>
                                <input
                                    type="text"
                                    placeholder="Enter model name"
                                    prop:value=move || model_name.get()
                                    on:input=move |ev| set_model_name.set(event_target_value(&ev))
                                />
                                <input
                                    type="password"
                                    placeholder="Enter your token"
                                    prop:value=move || token.get()
                                    on:input=move |ev| set_token.set(event_target_value(&ev))
                                />
                                <label class="modify-existing">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || modify_existing.get()
                                        on:change=move |ev| {
                                            set_modify_existing.set(event_target_checked(&ev))
                                        }
                                    />
                                    "Modify existing code"
                                </label>
                                <label class="upload">
                                    "Upload image"
                                    <input type="file" accept="image/*" on:change=on_image_selected/>
                                </label>
                                {move || {
                                    image_data_url
                                        .get()
                                        .map(|_| {
                                            view! {
                                                <p class="upload-note">"Image uploaded successfully!"</p>
                                            }
                                        })
                                }}
                                <button
                                    class="generate"
                                    disabled=move || {
                                        !can_submit(&prompt.get(), &token.get(), is_submitting.get())
                                    }
                                    on:click=submit
                                >
                                    {move || if is_submitting.get() { "Generating…" } else { "Generate" }}
                                </button>
                            </div>
                        }
                    })
            }}

            {move || {
                error
                    .get()
                    .map(|message| view! { <div class="error-banner">{message}</div> })
            }}

            <div class="view-container">
                {move || match resolved.get() {
                    None => view! { <p class="view-pending">"Loading..."</p> }.into_view(),
                    Some(ResolvedView::Generated(markup)) => {
                        view! { <GeneratedView markup/> }.into_view()
                    }
                    Some(ResolvedView::NotFound) => view! { <FallbackView/> }.into_view(),
                }}
            </div>
        </div>
    }
}

/// Renders generated markup inside its own container so a bad fragment is
/// confined there instead of taking down the shell.
#[component]
fn GeneratedView(markup: String) -> impl IntoView {
    if markup.trim().is_empty() {
        return view! {
            <div class="render-error">
                "There was an error rendering the generated view. Please try again."
            </div>
        }
        .into_view();
    }

    view! { <div class="generated-view" inner_html=markup></div> }.into_view()
}
