//! History-mode client router over the route table in `bab_core::routes`.

use bab_core::routes::{Resolution, Route};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

const LEAVE_BUILDER_PROMPT: &str =
    "You have not added your robot to your cart, are you sure you want to leave?";

#[derive(Clone, Copy)]
pub struct RouterState {
    /// `None` when the current path matches no route.
    pub current: RwSignal<Option<Route>>,
    pub path: RwSignal<String>,
    /// Set by the builder while it shows a robot that is not in the cart.
    pub unsaved_robot: RwSignal<bool>,
}

/// Where a resolved path should land. Blocked paths have no destination.
pub fn destination(resolution: &Resolution) -> Option<Option<Route>> {
    match resolution {
        Resolution::Matched(route) => Some(Some(*route)),
        Resolution::NotFound { .. } => Some(None),
        Resolution::Blocked { .. } => None,
    }
}

/// True when moving from `from` to `to` leaves the builder with a robot
/// that was never added to the cart.
pub fn needs_leave_confirmation(from: Option<Route>, to: Option<Route>, unsaved_robot: bool) -> bool {
    unsaved_robot && from == Some(Route::Build) && to != Some(Route::Build)
}

/// Where the builder sends the user once an add-to-cart request settles.
/// Nowhere if it failed or the user has already left the builder.
pub fn after_cart_add(added: bool, current: Option<Route>) -> Option<&'static str> {
    (added && current == Some(Route::Build)).then_some("/cart")
}

fn current_location() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history(path: &str) {
    let pushed = web_sys::window()
        .ok_or(JsValue::NULL)
        .and_then(|w| w.history())
        .and_then(|h| h.push_state_with_url(&JsValue::NULL, "", Some(path)));
    if let Err(e) = pushed {
        web_sys::console::warn_1(&format!("[router] pushState failed: {:?}", e).into());
    }
}

fn confirm_leave() -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(LEAVE_BUILDER_PROMPT).ok())
        .unwrap_or(true)
}

impl RouterState {
    /// Navigate to `path`, running the id guard and the builder leave guard.
    /// Returns whether navigation happened.
    pub fn navigate(&self, path: &str) -> bool {
        let resolution = Route::resolve(path);
        let Some(to) = destination(&resolution) else {
            web_sys::console::log_1(&format!("[router] navigation to {path} blocked by guard").into());
            return false;
        };
        if needs_leave_confirmation(self.current.get_untracked(), to, self.unsaved_robot.get_untracked())
            && !confirm_leave()
        {
            return false;
        }
        push_history(path);
        self.unsaved_robot.set(false);
        self.path.set(path.to_string());
        self.current.set(to);
        true
    }

    /// Sync with the address bar after back/forward.
    fn on_pop_state(&self) {
        let path = current_location();
        let to = destination(&Route::resolve(&path)).unwrap_or(None);
        if needs_leave_confirmation(self.current.get_untracked(), to, self.unsaved_robot.get_untracked())
            && !confirm_leave()
        {
            push_history(&self.path.get_untracked());
            return;
        }
        self.unsaved_robot.set(false);
        self.path.set(path);
        self.current.set(to);
    }
}

pub fn provide_router() -> RouterState {
    let path = current_location();
    // A guarded path typed straight into the address bar has nowhere to
    // fall back to, so it renders as not found.
    let initial = destination(&Route::resolve(&path)).unwrap_or(None);
    let router = RouterState {
        current: RwSignal::new(initial),
        path: RwSignal::new(path),
        unsaved_robot: RwSignal::new(false),
    };

    if let Some(window) = web_sys::window() {
        let onpopstate = Closure::wrap(Box::new(move |_: JsValue| {
            router.on_pop_state();
        }) as Box<dyn FnMut(JsValue)>);
        if window
            .add_event_listener_with_callback("popstate", onpopstate.as_ref().unchecked_ref())
            .is_err()
        {
            web_sys::console::warn_1(&"[router] could not listen for popstate".into());
        }
        onpopstate.forget();
    }

    provide_context(router);
    router
}

pub fn use_router() -> RouterState {
    expect_context::<RouterState>()
}

/// In-app link: renders an `<a>` and navigates without a page load.
#[component]
pub fn Link(
    #[prop(into)] to: String,
    /// Only active on an exact route match, not on child routes.
    #[prop(optional)]
    exact: bool,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let target = destination(&Route::resolve(&to)).flatten();
    let is_active = move || match (target, router.current.get()) {
        (Some(target), Some(current)) if exact => current == target,
        (Some(target), Some(current)) => current.is_within(&target),
        _ => false,
    };
    let href = to.clone();
    view! {
        <a
            href=href
            class=class
            class:active=is_active
            on:click=move |ev: web_sys::MouseEvent| {
                ev.prevent_default();
                router.navigate(&to);
            }
        >
            {children()}
        </a>
    }
}
