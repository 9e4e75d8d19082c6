use crate::components::{ErrorDisplay, LoadingSpinner};
use crate::export;
use careerkit_app::domain::{Category, GenerationResult};
use leptos::prelude::*;

#[component]
pub fn GenerationPanel(
    category: RwSignal<Category>,
    #[prop(into)] result: Signal<Option<GenerationResult>>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] can_generate: Signal<bool>,
    #[prop(into)] regenerations_left: Signal<u32>,
    #[prop(into)] on_generate: Callback<()>,
    #[prop(into)] on_regenerate: Callback<()>,
) -> impl IntoView {
    let copy = move |_| {
        if let Some(r) = result.get() {
            export::copy_text(&r.plain_text);
        }
    };
    let download = move |_| {
        if let Some(r) = result.get() {
            export::download_text(&category.get().slug(), &r.plain_text);
        }
    };
    let print = move |_| {
        if let Some(r) = result.get() {
            export::print_html(category.get().label(), &r.html);
        }
    };

    view! {
        <section class="panel" aria-label="Generation panel">
            <label class="panel__field">
                <span class="panel__label">"What should I draft?"</span>
                <select
                    class="panel__select"
                    on:change=move |ev| {
                        if let Some(parsed) = Category::from_label(&event_target_value(&ev)) {
                            category.set(parsed);
                        }
                    }
                >
                    {Category::ALL
                        .iter()
                        .map(|option| {
                            let option = *option;
                            view! {
                                <option
                                    value=option.label()
                                    selected=move || category.get() == option
                                >
                                    {option.label()}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </label>

            <div class="panel__actions">
                <button
                    class="panel__generate"
                    prop:disabled=move || loading.get() || !can_generate.get()
                    on:click=move |_| on_generate.run(())
                >
                    {move || if loading.get() { "Generating..." } else { "Generate" }}
                </button>
                <Show when=move || result.get().is_some()>
                    <button
                        class="panel__regenerate"
                        prop:disabled=move || {
                            loading.get() || !can_generate.get() || regenerations_left.get() == 0
                        }
                        on:click=move |_| on_regenerate.run(())
                    >
                        {move || {
                            format!("Generate Alternative Version ({} left)", regenerations_left.get())
                        }}
                    </button>
                </Show>
            </div>

            <Show when=move || loading.get()>
                <LoadingSpinner/>
            </Show>

            {move || {
                error
                    .get()
                    .map(|message| view! { <ErrorDisplay message=message on_retry=on_generate/> })
            }}

            {move || {
                result
                    .get()
                    .map(|r| {
                        view! {
                            <div class="result">
                                <div class="result__preview" inner_html=r.html.clone()></div>
                                <div class="result__actions">
                                    <button class="result__button" on:click=copy>
                                        "Copy"
                                    </button>
                                    <button class="result__button" on:click=download>
                                        "Download"
                                    </button>
                                    <button class="result__button" on:click=print>
                                        "Print"
                                    </button>
                                </div>
                            </div>
                        }
                    })
            }}
        </section>
    }
}
