//! TopHeader component - brand, booking steps and the theme toggle.

use crate::routes::routes::{ROUTE_SKIP_SIZE, ROUTE_WASTE_TYPE};
use crate::shared::theme::ThemeToggle;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn TopHeader() -> impl IntoView {
    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Skip Hire"</span>
            </div>

            <nav class="top-header__steps">
                <A href=ROUTE_WASTE_TYPE attr:class="top-header__step">"Waste Type"</A>
                <A href=ROUTE_SKIP_SIZE attr:class="top-header__step">"Select Skip"</A>
            </nav>

            <div class="top-header__actions">
                <ThemeToggle />
            </div>
        </header>
    }
}
