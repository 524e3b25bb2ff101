//! Store actions against an in-memory API double.

use std::cell::RefCell;

use async_trait::async_trait;
use bab_core::actions;
use bab_core::api::{ApiError, RobotApi};
use bab_core::store::{Observable, RobotsState, StateCell, UsersState};
use bab_core::types::{Part, PartType, PartsCatalog, Robot, User};

#[derive(Default)]
struct FakeApi {
    catalog: Option<PartsCatalog>,
    fail_cart: bool,
    user: Option<User>,
    /// Cart bodies received, in order.
    posted: RefCell<Vec<Vec<Robot>>>,
}

#[async_trait(?Send)]
impl RobotApi for FakeApi {
    async fn fetch_parts(&self) -> Result<PartsCatalog, ApiError> {
        self.catalog
            .clone()
            .ok_or_else(|| ApiError::Transport("connection refused".into()))
    }

    async fn post_cart(&self, cart: &[Robot]) -> Result<(), ApiError> {
        self.posted.borrow_mut().push(cart.to_vec());
        if self.fail_cart {
            Err(ApiError::Status {
                status: 500,
                url: "/api/cart".into(),
            })
        } else {
            Ok(())
        }
    }

    async fn sign_in(&self) -> Result<User, ApiError> {
        self.user
            .clone()
            .ok_or_else(|| ApiError::Status {
                status: 401,
                url: "/api/sign-in".into(),
            })
    }
}

fn part(part_type: PartType, id: i64, on_sale: bool) -> Part {
    Part {
        id,
        part_type,
        title: format!("{part_type} {id}"),
        description: String::new(),
        src: String::new(),
        cost: 100.0,
        on_sale,
    }
}

fn robot(on_sale: bool) -> Robot {
    Robot::new(
        part(PartType::Heads, 1, on_sale),
        part(PartType::Arms, 2, false),
        part(PartType::Torsos, 3, false),
        part(PartType::Arms, 2, false),
        part(PartType::Bases, 4, false),
    )
}

#[tokio::test]
async fn get_parts_commits_catalog() {
    let catalog = PartsCatalog {
        heads: vec![part(PartType::Heads, 1, false)],
        ..Default::default()
    };
    let api = FakeApi {
        catalog: Some(catalog.clone()),
        ..Default::default()
    };
    let robots = Observable::new(RobotsState::default());

    actions::get_parts(&api, &robots).await.expect("parts");
    assert_eq!(robots.read(|s| s.parts.clone()), Some(catalog));
}

#[tokio::test]
async fn get_parts_failure_leaves_parts_unset() {
    let api = FakeApi::default();
    let robots = Observable::new(RobotsState::default());

    let err = actions::get_parts(&api, &robots).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
    assert!(robots.read(|s| s.parts.is_none()));
}

#[tokio::test]
async fn add_robot_posts_full_cart_then_appends() {
    let api = FakeApi::default();
    let robots = Observable::new(RobotsState::default());

    actions::add_robot_to_cart(&api, &robots, robot(false)).await.expect("first");
    actions::add_robot_to_cart(&api, &robots, robot(true)).await.expect("second");

    let posted = api.posted.borrow();
    assert_eq!(posted.len(), 2);
    assert_eq!(posted[0].len(), 1);
    assert_eq!(posted[1].len(), 2, "second post carries the whole cart");
    assert_eq!(robots.read(|s| s.cart.len()), 2);
    assert_eq!(robots.read(|s| s.cart_sale_items().len()), 1);
}

#[tokio::test]
async fn add_robot_rejection_leaves_cart_unchanged() {
    let api = FakeApi {
        fail_cart: true,
        ..Default::default()
    };
    let robots = Observable::new(RobotsState::default());
    robots.write(|s| s.add_robot_to_cart(robot(false)));
    let before = robots.get();

    let err = actions::add_robot_to_cart(&api, &robots, robot(true))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 500, .. }));
    assert_eq!(robots.get(), before);
    assert_eq!(api.posted.borrow()[0].len(), 2);
}

#[tokio::test]
async fn cart_is_not_touched_before_the_post_resolves() {
    let api = FakeApi::default();
    let robots = Observable::new(RobotsState::default());
    let writes = std::rc::Rc::new(RefCell::new(Vec::new()));
    let seen = std::rc::Rc::clone(&writes);
    robots.subscribe(move |s: &RobotsState| seen.borrow_mut().push(s.cart.len()));

    actions::add_robot_to_cart(&api, &robots, robot(false)).await.expect("add");

    // Exactly one notification, after the post, with the robot appended.
    assert_eq!(*writes.borrow(), vec![1]);
}

#[tokio::test]
async fn sign_in_records_user() {
    let user: User = serde_json::from_str(r#"{"id": 1, "userName": "ada"}"#).expect("user");
    let api = FakeApi {
        user: Some(user.clone()),
        ..Default::default()
    };
    let users = Observable::new(UsersState::default());

    actions::sign_in(&api, &users).await.expect("sign in");
    assert_eq!(users.get().user, Some(user));
}

#[tokio::test]
async fn sign_in_failure_keeps_user_null() {
    let api = FakeApi::default();
    let users = Observable::new(UsersState::default());

    assert!(actions::sign_in(&api, &users).await.is_err());
    assert!(users.get().user.is_none());
}
