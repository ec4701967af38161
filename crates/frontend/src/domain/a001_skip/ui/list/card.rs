use crate::shared::icons::icon;
use contracts::domain::a001_skip::{Skip, SkipSelection};
use contracts::shared::format::format_price;
use leptos::prelude::*;

const SKIP_IMAGE_URL: &str = "https://hermeq.com/media/amasty/amoptmobile/catalog/product/cache/7ae8b5fd60d2d07f1c6ab0ccf9a8cdfd/s/k/sk1040-4-yard-mini-builders-skip-open-chain-lift-yellow_01_jpg.webp";

/// Round badge on the card corner, struck through when the capability is missing.
#[component]
fn SkipBadge(allowed: bool, icon_name: &'static str, title: &'static str) -> impl IntoView {
    let class = if allowed {
        "skip-badge skip-badge--yes"
    } else {
        "skip-badge skip-badge--no"
    };

    view! {
        <div class=class title=title>
            {icon(icon_name)}
            {(!allowed).then(|| icon("strike"))}
        </div>
    }
}

#[component]
pub fn SkipCard(skip: Skip, selection: RwSignal<SkipSelection>) -> impl IntoView {
    let id = skip.id;
    let is_selected = move || selection.get().is_selected(id);

    let road_title = if skip.allowed_on_road {
        "Allowed on Road"
    } else {
        "Not Allowed on Road"
    };
    let heavy_title = if skip.allows_heavy_waste {
        "Allows Heavy Waste"
    } else {
        "Does Not Allow Heavy Waste"
    };

    view! {
        <div
            class="skip-card"
            class:skip-card--selected=is_selected
            style=format!("background-image: url('{}');", SKIP_IMAGE_URL)
            data-skip-id=id.as_string()
        >
            <div class="skip-card__badges">
                <SkipBadge allowed=skip.allowed_on_road icon_name="car" title=road_title />
                <SkipBadge allowed=skip.allows_heavy_waste icon_name="weight" title=heavy_title />
            </div>

            <div class="skip-card__footer">
                <span class="skip-card__size">{format!("{} yards", skip.size)}</span>
                <span class="skip-card__price">
                    {format_price(skip.gross_price())}
                    <span class="skip-card__hire">
                        {format!(" / {} days hire", skip.hire_period_days)}
                    </span>
                </span>
            </div>

            <div class="skip-card__overlay">
                <button
                    class="button button--primary skip-card__select"
                    type="button"
                    on:click=move |_| selection.update(|s| s.select(id))
                >
                    {move || if is_selected() { "Selected" } else { "Select" }}
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn SkipGrid(
    #[prop(into)] skips: Signal<Vec<Skip>>,
    selection: RwSignal<SkipSelection>,
) -> impl IntoView {
    view! {
        <div class="skip-grid">
            <For
                each=move || skips.get()
                key=|skip| skip.id
                children=move |skip| view! { <SkipCard skip=skip selection=selection /> }
            />
        </div>
    }
}
