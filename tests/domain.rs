mod common;

use crate::common::{run, Env};
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test(flavor = "multi_thread")]
async fn delete_domain() {
    let env = Env::start().await;
    Mock::given(method("DELETE"))
        .and(path("/domains/1234"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&env.server)
        .await;

    let mut cmd = env.cmd();
    cmd.args(["domain", "delete", "--domain-id", "1234"]);

    run(cmd)
        .await
        .success()
        .stdout("Domain 1234 was successfully deleted\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_without_id_in_a_pipe() {
    let env = Env::start().await;
    let mut cmd = env.cmd();
    cmd.args(["domain", "delete"]);

    run(cmd)
        .await
        .failure()
        .stderr(predicate::str::contains("required flag(s) \"domain-id\" not set"));
    assert_eq!(env.request_count().await, 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_without_id_does_not_read_piped_stdin() {
    let env = Env::start().await;
    let mut cmd = env.cmd();
    cmd.args(["domain", "delete"]).write_stdin("1234\n");

    run(cmd)
        .await
        .failure()
        .stderr(predicate::str::contains("required flag(s) \"domain-id\" not set"));
    assert_eq!(env.request_count().await, 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn update_verbose() {
    let env = Env::start().await;
    Mock::given(method("PATCH"))
        .and(path("/domains/1234"))
        .and(body_json(json!({"cnames": ["www.example.com"], "is_active": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": {
                "id": 1234,
                "name": "shop",
                "domain_name": "xyz.map.example.net",
                "cnames": ["www.example.com"],
                "cname_access_only": false,
                "digital_certificate_id": null,
                "edge_application_id": 1666,
                "is_active": true
            }
        })))
        .expect(1)
        .mount(&env.server)
        .await;

    let mut cmd = env.cmd();
    cmd.args(["domain", "update", "--domain-id", "1234"])
        .args(["--cnames", "www.example.com", "--active", "true", "--verbose"]);

    run(cmd).await.success().stdout(
        "ID: 1234\nName: shop\nDomain name: xyz.map.example.net\nCnames: www.example.com\nCname access only: false\nEdge application ID: 1666\nActive: true\n",
    );
}
