use crate::shared::icons::icon;
use contracts::domain::a001_skip::CatalogQuery;
use contracts::enums::sort_order::SortOrder;
use leptos::prelude::*;

#[component]
fn FilterPill(
    label: &'static str,
    icon_name: &'static str,
    #[prop(into)] active: Signal<bool>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class="filter-pill"
            class:filter-pill--active=move || active.get()
            type="button"
            aria-pressed=move || if active.get() { "true" } else { "false" }
            on:click=move |_| on_toggle.run(())
        >
            {icon(icon_name)}
            {label}
        </button>
    }
}

/// Filter pills, sort select and the "Clear Filters" reset.
#[component]
pub fn SkipFilterBar(query: RwSignal<CatalogQuery>) -> impl IntoView {
    let road_active = Signal::derive(move || query.get().filter.road_legal_only);
    let heavy_active = Signal::derive(move || query.get().filter.heavy_waste_only);

    view! {
        <div
            class="filter-bar"
            class:filter-bar--filtered=move || query.get().filter.is_active()
        >
            <FilterPill
                label="Allowed on Road"
                icon_name="car"
                active=road_active
                on_toggle=Callback::new(move |_| query.update(|q| q.toggle_road_legal()))
            />
            <FilterPill
                label="Allows Heavy Waste"
                icon_name="weight"
                active=heavy_active
                on_toggle=Callback::new(move |_| query.update(|q| q.toggle_heavy_waste()))
            />

            <div class="filter-bar__sort">
                <select
                    class="filter-bar__select"
                    prop:value=move || query.get().sort.as_str()
                    on:change=move |ev| {
                        let sort = SortOrder::from_str(&event_target_value(&ev));
                        query.update(|q| q.set_sort(sort));
                    }
                >
                    {SortOrder::all().into_iter().map(|order| view! {
                        <option value=order.as_str()>{order.label()}</option>
                    }).collect_view()}
                </select>
                <span class="filter-bar__chevron">{icon("chevron-down")}</span>
            </div>

            <Show when=move || !query.get().is_default()>
                <button
                    class="button button--ghost filter-bar__clear"
                    type="button"
                    on:click=move |_| query.update(|q| q.reset())
                >
                    "Clear Filters"
                </button>
            </Show>
        </div>
    }
}
