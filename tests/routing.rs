//! Dispatch tests for the resource router.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use tower::ServiceExt;

use resourceful::{resource_id, Action, HandlerFuncs, ResourceRouter};

mod common;
use common::{body_string, request};

fn prefix_router() -> ResourceRouter {
    ResourceRouter::builder()
        .add_resource(
            "prefix",
            HandlerFuncs::new()
                .with_index(|_req: Request<Body>| async { "Index function" })
                .with_show(|req: Request<Body>| async move {
                    format!("Show function for {}", resource_id("prefix", &req))
                }),
        )
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_non_instance_route() {
    let res = prefix_router().oneshot(request("GET", "/prefix")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_string(res).await, "Index function");
}

#[tokio::test]
async fn test_undefined_action() {
    let res = prefix_router().oneshot(request("POST", "/prefix")).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_empty_id_is_404() {
    let res = prefix_router().oneshot(request("GET", "/prefix/")).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_resource_id_present() {
    let res = prefix_router()
        .oneshot(request("GET", "/prefix/prefix_thing"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_string(res).await, "Show function for prefix_thing");
}

#[tokio::test]
async fn test_resource_id_is_decoded() {
    let res = prefix_router()
        .oneshot(request("GET", "/prefix/john%20doe"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_string(res).await, "Show function for john doe");

    let res = prefix_router().oneshot(request("GET", "/prefix/a%2Fb")).await.unwrap();
    assert_eq!(body_string(res).await, "Show function for a/b");
}

#[tokio::test]
async fn test_name_with_space_is_reachable() {
    let router = ResourceRouter::builder()
        .add_resource(
            "my items",
            HandlerFuncs::new().with_index(|_req: Request<Body>| async { "listed" }),
        )
        .build()
        .unwrap();

    let res = router.oneshot(request("GET", "/my%20items")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_string(res).await, "listed");
}

#[tokio::test]
async fn test_resource_id_outside_dispatch() {
    let req = request("GET", "/prefix/thing");
    assert_eq!(resource_id("prefix", &req), "");
    assert_eq!(resource_id("unregistered", &req), "");
}

#[tokio::test]
async fn test_resource_id_for_other_names() {
    let router = ResourceRouter::builder()
        .add_resource(
            "prefix",
            HandlerFuncs::new().with_show(|req: Request<Body>| async move {
                format!(
                    "[{}][{}]",
                    resource_id("prefix", &req),
                    resource_id("unregistered", &req)
                )
            }),
        )
        .build()
        .unwrap();

    let res = router.oneshot(request("GET", "/prefix/7")).await.unwrap();
    assert_eq!(body_string(res).await, "[7][]");
}

#[tokio::test]
async fn test_collection_route_captures_nothing() {
    let router = ResourceRouter::builder()
        .add_resource(
            "prefix",
            HandlerFuncs::new().with_index(|req: Request<Body>| async move {
                format!("[{}]", resource_id("prefix", &req))
            }),
        )
        .build()
        .unwrap();

    let res = router.oneshot(request("GET", "/prefix")).await.unwrap();
    assert_eq!(body_string(res).await, "[]");
}

#[tokio::test]
async fn test_wrong_method_is_404_not_405() {
    let router = prefix_router();
    for (method, path) in [("DELETE", "/prefix"), ("PATCH", "/prefix/1"), ("POST", "/prefix/1")] {
        let res = router.clone().oneshot(request(method, path)).await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "{method} {path}");
    }
}

#[tokio::test]
async fn test_multiple_resources() {
    let a_index = Arc::new(AtomicUsize::new(0));
    let b_index = Arc::new(AtomicUsize::new(0));

    let router = {
        let (a_count, b_count) = (a_index.clone(), b_index.clone());
        ResourceRouter::builder()
            .add_resource(
                "a",
                HandlerFuncs::new()
                    .with_index(move |_req: Request<Body>| {
                        a_count.fetch_add(1, Ordering::SeqCst);
                        async { "a index" }
                    })
                    .with_show(|req: Request<Body>| async move {
                        format!("a:[{}] b:[{}]", resource_id("a", &req), resource_id("b", &req))
                    }),
            )
            .add_resource(
                "b",
                HandlerFuncs::new()
                    .with_index(move |_req: Request<Body>| {
                        b_count.fetch_add(1, Ordering::SeqCst);
                        async { "b index" }
                    })
                    .with_show(|req: Request<Body>| async move {
                        format!("a:[{}] b:[{}]", resource_id("a", &req), resource_id("b", &req))
                    }),
            )
            .build()
            .unwrap()
    };

    let res = router.clone().oneshot(request("GET", "/a")).await.unwrap();
    assert_eq!(body_string(res).await, "a index");
    assert_eq!((a_index.load(Ordering::SeqCst), b_index.load(Ordering::SeqCst)), (1, 0));

    let res = router.clone().oneshot(request("GET", "/b")).await.unwrap();
    assert_eq!(body_string(res).await, "b index");
    assert_eq!((a_index.load(Ordering::SeqCst), b_index.load(Ordering::SeqCst)), (1, 1));

    let res = router.clone().oneshot(request("GET", "/a/42a")).await.unwrap();
    assert_eq!(body_string(res).await, "a:[42a] b:[]");

    let res = router.oneshot(request("GET", "/b/x")).await.unwrap();
    assert_eq!(body_string(res).await, "a:[] b:[x]");
}

#[tokio::test]
async fn test_every_action_dispatches() {
    let mut handlers = HandlerFuncs::new();
    for action in Action::ALL {
        handlers = handlers.with_action(action, move |req: Request<Body>| async move {
            format!("{action} {}", resource_id("things", &req))
        });
    }
    let router = ResourceRouter::builder()
        .add_resource("things", handlers)
        .build()
        .unwrap();

    for (method, path, expected) in [
        ("GET", "/things", "index "),
        ("POST", "/things", "create "),
        ("GET", "/things/1", "show 1"),
        ("PUT", "/things/2", "update 2"),
        ("DELETE", "/things/3", "destroy 3"),
    ] {
        let res = router.dispatch(request(method, path)).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_string(res).await, expected);
    }
}

#[tokio::test]
async fn test_latest_registration_shadows() {
    let router = ResourceRouter::builder()
        .add_resource("dup", HandlerFuncs::new().with_index(|_req: Request<Body>| async { "first" }))
        .add_resource("dup", HandlerFuncs::new().with_index(|_req: Request<Body>| async { "second" }))
        .build()
        .unwrap();

    let res = router.oneshot(request("GET", "/dup")).await.unwrap();
    assert_eq!(body_string(res).await, "second");
}

#[tokio::test]
async fn test_nested_under_axum() {
    let api = prefix_router().into_axum_router();
    let app = axum::Router::new()
        .route("/health", axum::routing::get(|| async { "ok" }))
        .merge(api);

    let res = app.clone().oneshot(request("GET", "/health")).await.unwrap();
    assert_eq!(body_string(res).await, "ok");

    let res = app.clone().oneshot(request("GET", "/prefix/9")).await.unwrap();
    assert_eq!(body_string(res).await, "Show function for 9");

    let res = app.oneshot(request("GET", "/missing")).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_concurrent_dispatch_keeps_ids_separate() {
    let router = prefix_router();
    let tasks: Vec<_> = (0..64)
        .map(|i| {
            let router = router.clone();
            tokio::spawn(async move {
                let res = router.oneshot(request("GET", &format!("/prefix/id{i}"))).await.unwrap();
                (i, body_string(res).await)
            })
        })
        .collect();

    for task in tasks {
        let (i, body) = task.await.unwrap();
        assert_eq!(body, format!("Show function for id{i}"));
    }
}
