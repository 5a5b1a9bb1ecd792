//! Resolver behavior against live local servers: terminal statuses, loops,
//! relative Location targets, truncation, and transport failures.

mod helpers;

use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::routing::get;
use axum::Router;

use helpers::{spawn_server, test_client};
use redirect_checker::resolve;

#[tokio::test]
async fn test_direct_200_has_single_hop_chain() {
    let app = Router::new().route("/", get(|| async { "ok" }));
    let base = spawn_server(app).await;
    let client = test_client();

    let outcome = resolve(&client, &format!("{base}/"), 20).await;
    assert_eq!(outcome.first_status, Some(200));
    assert_eq!(outcome.final_status, Some(200));
    assert!(!outcome.is_loop);
    assert_eq!(outcome.chain.len(), 1);
    assert_eq!(outcome.chain[0].status, Some(200));
}

#[tokio::test]
async fn test_two_address_loop_is_detected() {
    let app = Router::new()
        .route(
            "/a",
            get(|| async { (StatusCode::FOUND, [(header::LOCATION, "/b")]) }),
        )
        .route(
            "/b",
            get(|| async { (StatusCode::FOUND, [(header::LOCATION, "/a")]) }),
        );
    let base = spawn_server(app).await;
    let client = test_client();

    let outcome = resolve(&client, &format!("{base}/a"), 20).await;
    assert!(outcome.is_loop);
    assert_eq!(outcome.first_status, Some(302));
    assert_eq!(outcome.final_status, None);
    // The second visit to /a is not appended: the chain is exactly [a, b]
    assert_eq!(outcome.chain.len(), 2);
    assert_eq!(outcome.chain[0].address, format!("{base}/a"));
    assert_eq!(outcome.chain[1].address, format!("{base}/b"));
}

#[tokio::test]
async fn test_self_loop_is_detected() {
    let app = Router::new().route(
        "/here",
        get(|| async { (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, "/here")]) }),
    );
    let base = spawn_server(app).await;
    let client = test_client();

    let outcome = resolve(&client, &format!("{base}/here"), 20).await;
    assert!(outcome.is_loop);
    assert_eq!(outcome.chain.len(), 1);
}

#[tokio::test]
async fn test_redirect_without_location_is_final() {
    let app = Router::new().route("/nowhere", get(|| async { StatusCode::MOVED_PERMANENTLY }));
    let base = spawn_server(app).await;
    let client = test_client();

    let outcome = resolve(&client, &format!("{base}/nowhere"), 20).await;
    assert_eq!(outcome.first_status, Some(301));
    assert_eq!(outcome.final_status, Some(301));
    assert!(!outcome.is_loop);
    assert_eq!(outcome.chain.len(), 1);
}

#[tokio::test]
async fn test_relative_location_joins_against_current_address() {
    let app = Router::new()
        .route(
            "/old",
            get(|| async { (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, "/new-page")]) }),
        )
        .route("/new-page", get(|| async { "moved" }));
    let base = spawn_server(app).await;
    let client = test_client();

    let outcome = resolve(&client, &format!("{base}/old"), 20).await;
    assert_eq!(outcome.first_status, Some(301));
    assert_eq!(outcome.final_status, Some(200));
    assert_eq!(outcome.chain.len(), 2);
    assert_eq!(outcome.chain[1].address, format!("{base}/new-page"));
}

#[tokio::test]
async fn test_hop_budget_exhaustion_is_truncation_not_loop() {
    // Every hop redirects to a fresh address, so there is never a repeat
    let app = Router::new().route(
        "/hop/{n}",
        get(|Path(n): Path<u64>| async move {
            (
                StatusCode::FOUND,
                [(header::LOCATION, format!("/hop/{}", n + 1))],
            )
        }),
    );
    let base = spawn_server(app).await;
    let client = test_client();

    let max_hops = 5;
    let outcome = resolve(&client, &format!("{base}/hop/0"), max_hops).await;
    assert!(!outcome.is_loop);
    assert_eq!(outcome.first_status, Some(302));
    assert_eq!(outcome.final_status, None);
    assert_eq!(outcome.chain.len(), max_hops);
}

#[tokio::test]
async fn test_transport_failure_yields_absent_outcome() {
    let client = test_client();

    // Nothing listens on port 9; the connection is refused immediately
    let outcome = resolve(&client, "http://127.0.0.1:9/", 20).await;
    assert_eq!(outcome.first_status, None);
    assert_eq!(outcome.final_status, None);
    assert!(!outcome.is_loop);
    assert!(outcome.chain.is_empty());
}

#[tokio::test]
async fn test_transport_failure_mid_chain_discards_first_status() {
    // First hop succeeds with a redirect, second hop hits a closed port. The
    // recorded first status is discarded but the completed hop stays in the
    // chain.
    let app = Router::new().route(
        "/broken",
        get(|| async {
            (
                StatusCode::FOUND,
                [(header::LOCATION, "http://127.0.0.1:9/")],
            )
        }),
    );
    let base = spawn_server(app).await;
    let client = test_client();

    let outcome = resolve(&client, &format!("{base}/broken"), 20).await;
    assert_eq!(outcome.first_status, None);
    assert_eq!(outcome.final_status, None);
    assert!(!outcome.is_loop);
    assert_eq!(outcome.chain.len(), 1);
    assert_eq!(outcome.chain[0].status, Some(302));
}

#[tokio::test]
async fn test_resolution_is_idempotent_against_stable_target() {
    let app = Router::new()
        .route(
            "/old",
            get(|| async { (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, "/new")]) }),
        )
        .route("/new", get(|| async { "ok" }));
    let base = spawn_server(app).await;
    let client = test_client();

    let first = resolve(&client, &format!("{base}/old"), 20).await;
    let second = resolve(&client, &format!("{base}/old"), 20).await;
    assert_eq!(first, second);
}
