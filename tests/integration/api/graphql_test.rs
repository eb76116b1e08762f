//! GraphQL over HTTP integration tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::*;

const CREATE_POST: &str = r#"
    mutation Create($input: PostInputData!) {
        createPost(postInput: $input) { id title imageUrl creator { name } }
    }
"#;

#[tokio::test]
async fn test_graphql_signup_and_login() {
    let app = TestApp::new();

    let created = app
        .graphql(
            None,
            r#"mutation { createUser(userInput: {email: "ada@example.com", name: "Ada", password: "secret"}) { id email status } }"#,
            json!({}),
        )
        .await;
    assert_status!(created, StatusCode::OK);
    assert_eq!(created.body["data"]["createUser"]["status"], "I am new!");

    let login = app
        .graphql(
            None,
            r#"query { login(email: "ada@example.com", password: "secret") { token userId } }"#,
            json!({}),
        )
        .await;
    assert_eq!(
        login.body["data"]["login"]["userId"],
        created.body["data"]["createUser"]["id"]
    );
    assert!(login.body["data"]["login"]["token"].is_string());
}

#[tokio::test]
async fn test_graphql_anonymous_mutation_is_unauthenticated() {
    let app = TestApp::new();

    let response = app
        .graphql(
            None,
            CREATE_POST,
            json!({
                "input": {
                    "title": "Valid title",
                    "content": "Valid content",
                    "imageUrl": "images/a.png"
                }
            }),
        )
        .await;

    assert_eq!(response.body["errors"][0]["extensions"]["code"], 401);
    assert_eq!(response.body["errors"][0]["message"], "Not authenticated!");
}

#[tokio::test]
async fn test_graphql_create_and_list_share_the_feed() {
    let app = TestApp::new();
    let ada = create_test_user(&app, "ada@example.com", "Ada").await;
    create_test_post(&app, &ada, "Posted over REST").await;

    let created = app
        .graphql(
            Some(&ada.token),
            CREATE_POST,
            json!({
                "input": {
                    "title": "Posted over GraphQL",
                    "content": "Valid content",
                    "imageUrl": "images/a.png"
                }
            }),
        )
        .await;
    assert_eq!(created.body["data"]["createPost"]["creator"]["name"], "Ada");

    let listed = app
        .graphql(
            Some(&ada.token),
            "query { posts(page: 1) { totalPosts posts { title } } }",
            json!({}),
        )
        .await;
    assert_eq!(listed.body["data"]["posts"]["totalPosts"], 2);
    assert_eq!(
        listed.body["data"]["posts"]["posts"][0]["title"],
        "Posted over GraphQL"
    );

    let rest = app.get("/feed/posts", Some(&ada.token)).await;
    assert_eq!(rest.body["totalItems"], 2);
}

#[tokio::test]
async fn test_graphql_validation_errors_carry_violations() {
    let app = TestApp::new();
    let ada = create_test_user(&app, "ada@example.com", "Ada").await;

    let response = app
        .graphql(
            Some(&ada.token),
            CREATE_POST,
            json!({ "input": { "title": "abc", "content": "xy", "imageUrl": "" } }),
        )
        .await;

    let error = &response.body["errors"][0];
    assert_eq!(error["extensions"]["code"], 422);
    assert_eq!(error["extensions"]["data"].as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn test_graphql_update_status() {
    let app = TestApp::new();
    let ada = create_test_user(&app, "ada@example.com", "Ada").await;

    let response = app
        .graphql(
            Some(&ada.token),
            r#"mutation { updateStatus(status: "On holiday") { status } }"#,
            json!({}),
        )
        .await;
    assert_eq!(response.body["data"]["updateStatus"]["status"], "On holiday");

    let rest = app.get("/status", Some(&ada.token)).await;
    assert_eq!(rest.body["status"], "On holiday");
}

#[tokio::test]
async fn test_graphiql_is_served() {
    let app = TestApp::new();

    let response = app.get("/graphql", None).await;

    assert_status!(response, StatusCode::OK);
    assert_contains!(response.body.as_str().unwrap_or_default(), "graphiql");
}
