mod common;

use crate::common::{run, Env, TOKEN};
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

fn created() -> serde_json::Value {
    json!({
        "results": {
            "id": 82706,
            "name": "/tmp/testando.txt",
            "type": null,
            "content_type": "Text",
            "content": "insert your text here"
        }
    })
}

#[tokio::test(flavor = "multi_thread")]
async fn create_text_resource_verbose() {
    let env = Env::start().await;
    Mock::given(method("POST"))
        .and(path("/edge_services/1234/resources"))
        .and(header("Authorization", format!("token {}", TOKEN).as_str()))
        .and(header("Accept", "application/json; version=3"))
        .and(body_json(json!({
            "name": "/tmp/testando.txt",
            "content_type": "Text",
            "content": "insert your text here"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(created()))
        .expect(1)
        .mount(&env.server)
        .await;

    let content = env.file("content.txt", "insert your text here");
    let mut cmd = env.cmd();
    cmd.args(["resource", "create", "1234", "--name", "/tmp/testando.txt"])
        .args(["--content-type", "text", "--content-file"])
        .arg(&content)
        .arg("-v");

    run(cmd)
        .await
        .success()
        .stdout(predicate::str::contains("Name: /tmp/testando.txt\n"))
        .stdout(predicate::str::ends_with("Content: \ninsert your text here\n"));
}

#[tokio::test(flavor = "multi_thread")]
async fn create_text_resource_terse() {
    let env = Env::start().await;
    Mock::given(method("POST"))
        .and(path("/edge_services/1234/resources"))
        .respond_with(ResponseTemplate::new(201).set_body_json(created()))
        .expect(1)
        .mount(&env.server)
        .await;

    let content = env.file("content.txt", "insert your text here");
    let mut cmd = env.cmd();
    cmd.args(["resource", "create", "1234", "--name", "/tmp/testando.txt"])
        .args(["--content-type", "text", "--content-file"])
        .arg(&content);

    run(cmd)
        .await
        .success()
        .stdout("Created Resource with ID 82706 and name /tmp/testando.txt\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn shellscript_without_trigger_is_not_sent() {
    let env = Env::start().await;
    let content = env.file("setup.sh", "echo hello");
    let mut cmd = env.cmd();
    cmd.args(["resource", "create", "1234", "--name", "/tmp/setup.sh"])
        .args(["--content-type", "shellscript", "--content-file"])
        .arg(&content);

    run(cmd)
        .await
        .failure()
        .stderr(predicate::str::contains(
            "Invalid --trigger flag provided. Resources with content type 'shellscript' need one of the triggers: Install, Reload, Uninstall",
        ));
    assert_eq!(env.request_count().await, 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn update_to_shellscript_without_trigger_is_not_sent() {
    let env = Env::start().await;
    let mut cmd = env.cmd();
    cmd.args(["resource", "update", "1234", "--resource-id", "82706"])
        .args(["--content-type", "shellscript"]);

    run(cmd)
        .await
        .failure()
        .stderr(predicate::str::contains(
            "Resources with content type 'shellscript' need one of the triggers",
        ));
    assert_eq!(env.request_count().await, 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn list_without_service_names_the_argument() {
    let env = Env::start().await;
    let mut cmd = env.cmd();
    cmd.args(["resource", "list"]);

    run(cmd)
        .await
        .failure()
        .stderr(predicate::str::contains("required argument(s) \"SERVICE_ID\" not set"));
    assert_eq!(env.request_count().await, 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_content_file() {
    let env = Env::start().await;
    let mut cmd = env.cmd();
    cmd.args(["resource", "create", "1234", "--name", "/tmp/a.txt", "--content-type", "text"]);

    run(cmd)
        .await
        .failure()
        .stderr(predicate::str::contains("required flag(s) \"content-file\" not set"));
    assert_eq!(env.request_count().await, 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn not_found_is_reported_with_hint() {
    let env = Env::start().await;
    Mock::given(method("POST"))
        .and(path("/edge_services/999/resources"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
        .mount(&env.server)
        .await;

    let content = env.file("content.txt", "x");
    let mut cmd = env.cmd();
    cmd.args(["resource", "create", "999", "--name", "/tmp/a.txt"])
        .args(["--content-type", "text", "--content-file"])
        .arg(&content);

    run(cmd)
        .await
        .failure()
        .stdout("")
        .stderr("Not found. Use -h or --help for more information\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn describe_prints_all_details() {
    let env = Env::start().await;
    Mock::given(method("GET"))
        .and(path("/edge_services/1234/resources/82706"))
        .respond_with(ResponseTemplate::new(200).set_body_json(created()))
        .mount(&env.server)
        .await;

    let mut cmd = env.cmd();
    cmd.args(["resource", "describe", "1234", "--resource-id", "82706"]);

    run(cmd).await.success().stdout(
        "ID: 82706\nName: /tmp/testando.txt\nContent type: Text\nContent: \ninsert your text here\n",
    );
}
