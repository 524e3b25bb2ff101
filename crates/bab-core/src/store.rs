//! Store state, mutations and getters.
//!
//! State is split into a `robots` module (catalog and cart) and a `users`
//! module (signed-in user). All writes go through the mutation methods below;
//! the containers that hold the state implement [`StateCell`].

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::types::{PartsCatalog, Robot, User};

// ---------------------------------------------------------------------------
// State cells
// ---------------------------------------------------------------------------

/// A container for one store module's state.
///
/// `write` must notify whatever observes the cell once the closure returns.
pub trait StateCell<T> {
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R;
    fn write(&self, f: impl FnOnce(&mut T));
}

type Listener<T> = Rc<dyn Fn(&T)>;

/// Single-threaded state cell with explicit change listeners.
///
/// Cloning yields another handle to the same state. Listeners receive a
/// snapshot of the state, so they may write to the cell or subscribe while
/// being notified. A write made during notification is applied at once and
/// triggers one more round once the current one finishes.
pub struct Observable<T> {
    inner: Rc<ObservableInner<T>>,
}

struct ObservableInner<T> {
    value: RefCell<T>,
    listeners: RefCell<Vec<Listener<T>>>,
    notifying: Cell<bool>,
    dirty: Cell<bool>,
}

impl<T> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(ObservableInner {
                value: RefCell::new(value),
                listeners: RefCell::new(Vec::new()),
                notifying: Cell::new(false),
                dirty: Cell::new(false),
            }),
        }
    }

    /// Register a listener called with the new state after every write.
    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) {
        self.inner.listeners.borrow_mut().push(Rc::new(listener));
    }

    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.inner.value.borrow().clone()
    }
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone> StateCell<T> for Observable<T> {
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.borrow())
    }

    fn write(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.inner.value.borrow_mut());

        let inner = &self.inner;
        inner.dirty.set(true);
        if inner.notifying.replace(true) {
            return;
        }
        while inner.dirty.replace(false) {
            let snapshot = inner.value.borrow().clone();
            let listeners: Vec<Listener<T>> = inner.listeners.borrow().clone();
            for listener in &listeners {
                listener(&snapshot);
            }
        }
        inner.notifying.set(false);
    }
}

// ---------------------------------------------------------------------------
// robots module
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RobotsState {
    /// `None` until the catalog has been fetched.
    pub parts: Option<PartsCatalog>,
    pub cart: Vec<Robot>,
}

impl RobotsState {
    /// Replace the catalog wholesale.
    pub fn update_parts(&mut self, parts: PartsCatalog) {
        self.parts = Some(parts);
    }

    pub fn add_robot_to_cart(&mut self, robot: Robot) {
        self.cart.push(robot);
    }

    /// The catalog, or four empty lists while it is still loading.
    pub fn parts_or_default(&self) -> PartsCatalog {
        self.parts.clone().unwrap_or_default()
    }

    /// Cart entries with at least one part on sale, in cart order.
    pub fn cart_sale_items(&self) -> Vec<Robot> {
        self.cart
            .iter()
            .filter(|robot| robot.has_sale_part())
            .cloned()
            .collect()
    }

    /// The cart body to send when adding `robot`: existing entries plus it.
    pub fn cart_with(&self, robot: &Robot) -> Vec<Robot> {
        let mut cart = Vec::with_capacity(self.cart.len() + 1);
        cart.extend(self.cart.iter().cloned());
        cart.push(robot.clone());
        cart
    }

    pub fn cart_total(&self) -> f64 {
        self.cart.iter().map(|r| r.cost).sum()
    }
}

// ---------------------------------------------------------------------------
// users module
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UsersState {
    pub user: Option<User>,
}

impl UsersState {
    pub fn update_current_user(&mut self, user: User) {
        self.user = Some(user);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Part, PartType};
    use std::cell::Cell;

    fn part(part_type: PartType, on_sale: bool) -> Part {
        Part {
            id: 1,
            part_type,
            title: String::new(),
            description: String::new(),
            src: String::new(),
            cost: 10.0,
            on_sale,
        }
    }

    /// Robot with exactly the given slot index (0..5) on sale, or none.
    fn robot_with_sale_slot(slot: Option<usize>) -> Robot {
        let sale = |i: usize| slot == Some(i);
        Robot::new(
            part(PartType::Heads, sale(0)),
            part(PartType::Arms, sale(1)),
            part(PartType::Torsos, sale(2)),
            part(PartType::Arms, sale(3)),
            part(PartType::Bases, sale(4)),
        )
    }

    #[test]
    fn sale_items_include_any_slot_on_sale() {
        let mut state = RobotsState::default();
        for slot in 0..5 {
            state.add_robot_to_cart(robot_with_sale_slot(Some(slot)));
        }
        assert_eq!(state.cart_sale_items().len(), 5);
    }

    #[test]
    fn sale_items_exclude_robots_without_sale_parts() {
        let mut state = RobotsState::default();
        state.add_robot_to_cart(robot_with_sale_slot(None));
        state.add_robot_to_cart(robot_with_sale_slot(Some(2)));
        state.add_robot_to_cart(robot_with_sale_slot(None));

        let sale = state.cart_sale_items();
        assert_eq!(sale.len(), 1);
        assert!(sale[0].torso.on_sale);
    }

    #[test]
    fn sale_items_of_empty_cart_is_empty() {
        assert!(RobotsState::default().cart_sale_items().is_empty());
    }

    #[test]
    fn update_parts_replaces_catalog() {
        let mut state = RobotsState::default();
        assert!(state.parts_or_default().is_empty());

        state.update_parts(PartsCatalog {
            heads: vec![part(PartType::Heads, false)],
            ..Default::default()
        });
        state.update_parts(PartsCatalog::default());
        assert_eq!(state.parts, Some(PartsCatalog::default()));
    }

    #[test]
    fn cart_with_does_not_touch_state() {
        let mut state = RobotsState::default();
        state.add_robot_to_cart(robot_with_sale_slot(None));
        let proposed = state.cart_with(&robot_with_sale_slot(Some(0)));
        assert_eq!(proposed.len(), 2);
        assert_eq!(state.cart.len(), 1);
    }

    #[test]
    fn cart_total_sums_robot_costs() {
        let mut state = RobotsState::default();
        state.add_robot_to_cart(robot_with_sale_slot(None));
        state.add_robot_to_cart(robot_with_sale_slot(None));
        assert!((state.cart_total() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn observable_notifies_after_write() {
        let cell = Observable::new(RobotsState::default());
        let seen = Rc::new(Cell::new(0usize));
        let seen2 = Rc::clone(&seen);
        cell.subscribe(move |s: &RobotsState| seen2.set(s.cart.len()));

        cell.write(|s| s.add_robot_to_cart(robot_with_sale_slot(None)));
        assert_eq!(seen.get(), 1);
        assert_eq!(cell.read(|s| s.cart.len()), 1);
    }

    #[test]
    fn listener_may_write_back_to_its_cell() {
        let cell = Observable::new(RobotsState::default());
        let handle = cell.clone();
        let rounds = Rc::new(Cell::new(0usize));
        let rounds2 = Rc::clone(&rounds);
        cell.subscribe(move |s: &RobotsState| {
            rounds2.set(rounds2.get() + 1);
            if s.cart.len() == 1 {
                handle.write(|s| s.add_robot_to_cart(robot_with_sale_slot(Some(0))));
            }
        });

        cell.write(|s| s.add_robot_to_cart(robot_with_sale_slot(None)));
        assert_eq!(cell.read(|s| s.cart.len()), 2);
        assert_eq!(rounds.get(), 2);
    }

    #[test]
    fn listener_may_subscribe_during_notification() {
        let cell = Observable::new(UsersState::default());
        let handle = cell.clone();
        let late_calls = Rc::new(Cell::new(0usize));
        let late_calls2 = Rc::clone(&late_calls);
        let added = Cell::new(false);
        cell.subscribe(move |_: &UsersState| {
            if !added.replace(true) {
                let late_calls = Rc::clone(&late_calls2);
                handle.subscribe(move |_: &UsersState| late_calls.set(late_calls.get() + 1));
            }
        });

        cell.write(|s| s.user = None);
        assert_eq!(late_calls.get(), 0);
        cell.write(|s| s.user = None);
        assert_eq!(late_calls.get(), 1);
    }

    #[test]
    fn observable_clones_share_state() {
        let a = Observable::new(UsersState::default());
        let b = a.clone();
        b.write(|s| {
            s.update_current_user(serde_json::from_str(r#"{"id": 1}"#).expect("user"))
        });
        assert!(a.get().user.is_some());
    }
}
