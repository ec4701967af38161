pub mod card;
pub mod filter_bar;
pub mod model;
pub mod state;

use self::card::SkipGrid;
use self::filter_bar::SkipFilterBar;
use self::state::{create_state, LoadState, PageView};
use crate::domain::a001_skip::ui::details::SkipModal;
use contracts::domain::a001_skip::Skip;
use contracts::shared::catalog::CatalogLocation;
use leptos::prelude::*;

/// "Choose Skip Size" page: loads the catalog once, then filters, sorts and
/// opens the details modal for the selected skip.
#[component]
#[allow(non_snake_case)]
pub fn SkipSizePage() -> impl IntoView {
    let state = create_state();

    wasm_bindgen_futures::spawn_local(async move {
        let location = CatalogLocation::default();
        let loaded = match model::fetch_skips(&location).await {
            Ok(skips) => LoadState::Loaded(skips),
            Err(e) => {
                log::error!("Skip catalog fetch failed: {:?}", e);
                LoadState::Failed(e)
            }
        };
        // the page may have been left before the fetch resolved
        let _ = state.load.try_set(loaded);
    });

    let visible = Signal::derive(move || {
        let query = state.query.get();
        state.load.with(|load| query.apply(load.skips()))
    });

    let selected_skip = move || -> Option<Skip> {
        let id = state.selection.get().selected()?;
        state
            .load
            .with(|load| load.skips().iter().find(|s| s.id == id).cloned())
    };

    let close_modal = Callback::new(move |_| state.selection.update(|s| s.close()));

    move || {
        if let PageView::Error(message) = state.load.with(PageView::for_load) {
            return view! { <div class="error skip-page__error">{message}</div> }.into_any();
        }

        view! {
            <div class="content skip-page">
                <h1 class="skip-page__title">"Choose Skip Size"</h1>
                <SkipFilterBar query=state.query />

                {move || {
                    if state.load.with(PageView::for_load).shows_grid() {
                        view! {
                            <p class="skip-page__count">
                                {move || format!("{} skips available", visible.get().len())}
                            </p>
                            <SkipGrid skips=visible selection=state.selection />
                        }
                        .into_any()
                    } else {
                        view! { <div class="skip-page__loading">"Loading skips..."</div> }.into_any()
                    }
                }}

                <Show when=move || state.selection.get().is_open()>
                    {move || selected_skip().map(|skip| view! {
                        <SkipModal skip=skip on_close=close_modal />
                    })}
                </Show>
            </div>
        }
        .into_any()
    }
}
