use crate::routes::routes::ROUTE_CHECKOUT;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use contracts::domain::a001_skip::{CheckoutHandoff, Skip};
use contracts::shared::format::format_price;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::location::State;
use leptos_router::NavigateOptions;

const DISCLAIMER: &str = "Imagery and information shown throughout this website may not reflect the exact shape or size specification, colours may vary, options and/or accessories may be featured at additional cost.";

#[component]
fn DetailRow(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="skip-modal__row">
            <span class="skip-modal__label">{label}</span>
            <span class="skip-modal__value">{value}</span>
        </div>
    }
}

/// Details of the selected skip with the checkout handoff.
#[component]
pub fn SkipModal(skip: Skip, on_close: Callback<()>) -> impl IntoView {
    let navigate = use_navigate();
    let gross = skip.gross_price();

    let handoff = CheckoutHandoff::for_skip(skip.clone());
    let checkout = move |_| {
        let state = match serde_wasm_bindgen::to_value(&handoff) {
            Ok(value) => State::new(Some(value)),
            Err(e) => {
                log::error!("Cannot attach skip {} to checkout: {}", handoff.skip.id.value(), e);
                State::new(None)
            }
        };
        log::info!("Checkout for skip {}", handoff.skip.id.value());
        navigate(
            ROUTE_CHECKOUT,
            NavigateOptions {
                state,
                ..Default::default()
            },
        );
    };

    view! {
        <ModalFrame on_close=on_close modal_class="skip-modal".to_string()>
            <div class="skip-modal__header">
                <h3 class="skip-modal__title">"Skip Details"</h3>
                <button
                    class="button button--icon modal__close"
                    type="button"
                    title="Close"
                    on:click=move |_| on_close.run(())
                >
                    {icon("x")}
                </button>
            </div>

            <div class="skip-modal__body">
                <DetailRow label="Size:" value=format!("{} Yards", skip.size) />
                <DetailRow label="Price:" value=format_price(gross) />
                <DetailRow label="Hire Period:" value=format!("{} days", skip.hire_period_days) />

                <div class="skip-modal__disclaimer">
                    <p>{DISCLAIMER}</p>
                </div>

                <button
                    class="button button--primary skip-modal__checkout"
                    type="button"
                    on:click=checkout
                >
                    "Checkout"
                </button>
            </div>
        </ModalFrame>
    }
}
