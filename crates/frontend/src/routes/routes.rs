use crate::domain::a001_skip::ui::list::SkipSizePage;
use crate::layout::Shell;
use crate::system::pages::not_found::NotFoundPage;
use crate::usecases::u501_choose_waste_type::WasteTypePage;
use crate::usecases::u502_checkout::CheckoutPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

pub const ROUTE_SKIP_SIZE: &str = "/";
pub const ROUTE_WASTE_TYPE: &str = "/waste-type";
pub const ROUTE_CHECKOUT: &str = "/checkout";

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=SkipSizePage />
                    <Route path=path!("/waste-type") view=WasteTypePage />
                    <Route path=path!("/checkout") view=CheckoutPage />
                </Routes>
            </Shell>
        </Router>
    }
}
