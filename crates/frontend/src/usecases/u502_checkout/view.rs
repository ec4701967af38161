use crate::routes::routes::ROUTE_SKIP_SIZE;
use crate::shared::icons::icon;
use contracts::domain::a001_skip::CheckoutHandoff;
use contracts::shared::format::format_price;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;
use wasm_bindgen::JsValue;

fn decode_handoff(value: JsValue) -> Option<CheckoutHandoff> {
    if value.is_undefined() || value.is_null() {
        return None;
    }
    match serde_wasm_bindgen::from_value(value) {
        Ok(handoff) => Some(handoff),
        Err(e) => {
            log::warn!("Ignoring unreadable checkout state: {}", e);
            None
        }
    }
}

/// The handoff travels in the history entry; after a reload the router may
/// not expose it, so read `history.state` directly as a fallback.
fn read_handoff() -> Option<CheckoutHandoff> {
    let location = use_location();
    decode_handoff(location.state.get_untracked().to_js_value()).or_else(|| {
        web_sys::window()
            .and_then(|w| w.history().ok())
            .and_then(|h| h.state().ok())
            .and_then(decode_handoff)
    })
}

#[component]
fn SummaryRow(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="checkout__row">
            <span class="checkout__label">{label}</span>
            <span class="checkout__value">{value}</span>
        </div>
    }
}

/// Order summary for the skip chosen in the details modal.
#[component]
pub fn CheckoutPage() -> impl IntoView {
    let Some(handoff) = read_handoff() else {
        return view! {
            <div class="content checkout checkout--empty">
                <h1>"Checkout"</h1>
                <p>"No skip selected."</p>
                <A href=ROUTE_SKIP_SIZE attr:class="button button--primary">"Choose a skip"</A>
            </div>
        }
        .into_any();
    };

    let skip = &handoff.skip;
    let today = chrono::Local::now().date_naive();
    let period = handoff.hire_period(today);

    view! {
        <div class="content checkout">
            <h1 class="checkout__title">"Checkout"</h1>

            <div class="checkout__summary">
                <SummaryRow label="Skip:" value=format!("{} Yard Skip", skip.size) />
                <SummaryRow label="Hire Period:" value=format!("{} days", skip.hire_period_days) />
                <SummaryRow label="Hire Dates:" value=period.format() />
                <SummaryRow label="Price before VAT:" value=format_price(skip.price_before_vat) />
                <SummaryRow label="VAT:" value=format!("{} ({}%)", format_price(skip.vat_amount()), skip.vat) />
                <div class="checkout__row checkout__row--total">
                    <span class="checkout__label">"Total:"</span>
                    <span class="checkout__value">{format_price(handoff.gross)}</span>
                </div>
            </div>

            <A href=ROUTE_SKIP_SIZE attr:class="button button--ghost checkout__back">
                {icon("arrow-left")}
                "Change skip"
            </A>
        </div>
    }
    .into_any()
}
