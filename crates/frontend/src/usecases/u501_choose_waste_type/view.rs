use crate::routes::routes::ROUTE_SKIP_SIZE;
use crate::shared::icons::icon;
use contracts::enums::waste_type::WasteType;
use leptos::prelude::*;
use leptos_router::components::A;

/// First booking step: what kind of waste goes in the skip.
#[component]
pub fn WasteTypePage() -> impl IntoView {
    let (selected, set_selected) = signal::<Option<WasteType>>(None);

    view! {
        <div class="content waste-type">
            <h1 class="waste-type__title">"Which type of waste best describes what you are disposing of?"</h1>

            <div class="waste-type__grid">
                {WasteType::all().into_iter().map(|waste| {
                    let is_active = move || selected.get() == Some(waste);
                    view! {
                        <button
                            class="waste-type__option"
                            class:waste-type__option--active=is_active
                            type="button"
                            data-waste-type=waste.code()
                            on:click=move |_| set_selected.set(Some(waste))
                        >
                            <span class="waste-type__name">
                                {move || is_active().then(|| icon("check"))}
                                {waste.display_name()}
                            </span>
                            <span class="waste-type__description">{waste.description()}</span>
                        </button>
                    }
                }).collect_view()}
            </div>

            <Show when=move || selected.get().is_some_and(|w| w.is_heavy())>
                <p class="waste-type__hint">
                    "Heavy materials need a skip that allows heavy waste. Use the \"Allows Heavy Waste\" filter on the next step."
                </p>
            </Show>

            <Show when=move || selected.get().is_some()>
                <A href=ROUTE_SKIP_SIZE attr:class="button button--primary waste-type__continue">
                    "Continue"
                </A>
            </Show>
        </div>
    }
}
