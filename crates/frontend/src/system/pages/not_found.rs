use crate::shared::icons::icon;
use leptos::prelude::*;

fn go_back() {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        let _ = history.back();
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <div class="not-found__box">
                <h1 class="not-found__code">"404"</h1>
                <h2 class="not-found__title">"Page Not Found"</h2>
                <p class="not-found__text">"The page you're looking for doesn't exist or has been moved."</p>
                <button class="button button--ghost not-found__back" type="button" on:click=move |_| go_back()>
                    {icon("arrow-left")}
                    "Go Back"
                </button>
            </div>
        </div>
    }
}
