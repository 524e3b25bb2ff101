use bab_core::actions;
use bab_core::config::ClientConfig;
use bab_core::store::{RobotsState, StateCell, UsersState};
use bab_core::types::{PartsCatalog, Robot};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::HttpApi;

/// A store module's state held in a signal. Writes notify the reactive graph.
pub struct Reactive<T: 'static>(RwSignal<T>);

impl<T: Send + Sync + 'static> Reactive<T> {
    pub fn new(value: T) -> Self {
        Self(RwSignal::new(value))
    }

    /// Tracked read, for use inside views and memos.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.0.with(f)
    }
}

impl<T: 'static> Clone for Reactive<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for Reactive<T> {}

impl<T: Send + Sync + 'static> StateCell<T> for Reactive<T> {
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.0.with_untracked(f)
    }

    fn write(&self, f: impl FnOnce(&mut T)) {
        self.0.update(f);
    }
}

#[derive(Clone, Copy)]
pub struct AppState {
    pub robots: Reactive<RobotsState>,
    pub users: Reactive<UsersState>,
    api: StoredValue<HttpApi>,
}

pub fn provide_app_state() -> AppState {
    let state = AppState {
        robots: Reactive::new(RobotsState::default()),
        users: Reactive::new(UsersState::default()),
        api: StoredValue::new(HttpApi::new(ClientConfig::default().api)),
    };
    provide_context(state);
    state
}

pub fn use_app_state() -> AppState {
    expect_context::<AppState>()
}

impl AppState {
    /// The catalog, or empty lists while it is loading. Tracked.
    pub fn catalog(&self) -> PartsCatalog {
        self.robots.with(|s| s.parts_or_default())
    }

    pub fn parts_loaded(&self) -> bool {
        self.robots.with(|s| s.parts.is_some())
    }

    pub fn cart_len(&self) -> usize {
        self.robots.with(|s| s.cart.len())
    }

    // ── Actions ──

    pub fn get_parts(&self) {
        let state = *self;
        spawn_local(async move {
            let api = state.api.get_value();
            if let Err(e) = actions::get_parts(&api, &state.robots).await {
                web_sys::console::error_1(&format!("Failed to fetch parts: {e}").into());
            }
        });
    }

    /// Post the cart with `robot` appended. `on_settled` gets `true` once the
    /// server accepted it and the local cart has been updated.
    pub fn add_robot_to_cart(&self, robot: Robot, on_settled: impl FnOnce(bool) + 'static) {
        let state = *self;
        spawn_local(async move {
            let api = state.api.get_value();
            let added = match actions::add_robot_to_cart(&api, &state.robots, robot).await {
                Ok(()) => true,
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to add robot to cart: {e}").into());
                    false
                }
            };
            on_settled(added);
        });
    }

    pub fn sign_in(&self) {
        let state = *self;
        spawn_local(async move {
            let api = state.api.get_value();
            if let Err(e) = actions::sign_in(&api, &state.users).await {
                web_sys::console::error_1(&format!("Sign-in failed: {e}").into());
            }
        });
    }
}
