mod common;

use crate::common::{run, Env};
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test(flavor = "multi_thread")]
async fn update_rejects_bad_boolean() {
    let env = Env::start().await;
    let mut cmd = env.cmd();
    cmd.args(["edge-application", "update", "--application-id", "1666", "--caching", "yes"]);

    run(cmd).await.failure().stderr(predicate::str::contains(
        "Invalid --caching flag provided: \"yes\". It must have 'true' or 'false' values",
    ));
    assert_eq!(env.request_count().await, 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn update_without_fields() {
    let env = Env::start().await;
    let mut cmd = env.cmd();
    cmd.args(["edge-application", "update", "--application-id", "1666"]);

    run(cmd)
        .await
        .failure()
        .stderr(predicate::str::contains("Inform at least one field to be updated"));
    assert_eq!(env.request_count().await, 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_from_flags() {
    let env = Env::start().await;
    Mock::given(method("POST"))
        .and(path("/edge_applications"))
        .and(body_json(json!({
            "name": "shop",
            "delivery_protocol": "http,https",
            "http_port": 80
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "results": {"id": 1666, "name": "shop", "active": true, "delivery_protocol": "http,https", "http_port": 80}
        })))
        .expect(1)
        .mount(&env.server)
        .await;

    let mut cmd = env.cmd();
    cmd.args(["edge-application", "create", "--name", "shop"])
        .args(["--delivery-protocol", "http,https", "--http-port", "80"]);

    run(cmd)
        .await
        .success()
        .stdout("Created Edge Application with ID 1666 and name shop\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn list_sends_paging_options() {
    let env = Env::start().await;
    Mock::given(method("GET"))
        .and(path("/edge_applications"))
        .and(query_param("page", "2"))
        .and(query_param("page_size", "10"))
        .and(query_param("sort", "desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "results": [{"id": 1666, "name": "shop"}]
        })))
        .expect(1)
        .mount(&env.server)
        .await;

    let mut cmd = env.cmd();
    cmd.args(["edge-applications", "list", "--page", "2", "--page-size", "10", "--sort", "desc"])
        .args(["-f", "csv"]);

    run(cmd)
        .await
        .success()
        .stdout(predicate::str::contains("1666,shop"));
}

#[tokio::test(flavor = "multi_thread")]
async fn server_error_detail() {
    let env = Env::start().await;
    Mock::given(method("GET"))
        .and(path("/edge_applications/1"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Invalid token"})),
        )
        .mount(&env.server)
        .await;

    let mut cmd = env.cmd();
    cmd.args(["edge-application", "describe", "--application-id", "1"]);

    run(cmd)
        .await
        .failure()
        .stderr("Invalid token. Use -h or --help for more information\n");
}
