use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

/// Defer close to next tick: the listener that fires it is removed when the
/// frame unmounts, and a wasm closure must not be dropped while it runs.
fn close_deferred(on_close: Callback<()>) {
    spawn_local(async move {
        TimeoutFuture::new(0).await;
        on_close.run(());
    });
}

/// A press closes the modal only when the surface is mounted and the
/// press target lies outside it.
fn is_outside_press(surface_mounted: bool, target_inside_surface: bool) -> bool {
    surface_mounted && !target_inside_surface
}

/// Modal frame container (overlay + surface).
///
/// While mounted it listens for `mousedown` on the window and closes when the
/// press lands outside the surface; Escape closes as well. Both listeners are
/// released when the frame is unmounted, whatever the reason.
#[component]
pub fn ModalFrame(
    /// Called when the modal should close.
    on_close: Callback<()>,
    /// Extra class for the modal surface (`div.modal`).
    #[prop(optional)]
    modal_class: Option<String>,
    children: Children,
) -> impl IntoView {
    let surface_ref = NodeRef::<Div>::new();

    let outside_click = window_event_listener(ev::mousedown, move |ev: ev::MouseEvent| {
        let surface = surface_ref.get_untracked();
        let target = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        let inside = surface
            .as_ref()
            .is_some_and(|surface| surface.contains(target.as_ref()));
        if is_outside_press(surface.is_some(), inside) {
            close_deferred(on_close);
        }
    });

    let escape = window_event_listener(ev::keydown, move |ev: ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            close_deferred(on_close);
        }
    });

    on_cleanup(move || {
        outside_click.remove();
        escape.remove();
    });

    let class = match modal_class {
        Some(cls) => format!("modal {cls}"),
        None => "modal".to_string(),
    };

    view! {
        <div class="modal-overlay">
            <div class=class node_ref=surface_ref role="dialog" aria-modal="true">
                {children()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_outside_surface_closes() {
        assert!(is_outside_press(true, false));
    }

    #[test]
    fn test_press_inside_surface_keeps_modal_open() {
        assert!(!is_outside_press(true, true));
    }

    #[test]
    fn test_press_before_surface_is_mounted_is_ignored() {
        assert!(!is_outside_press(false, false));
    }
}
