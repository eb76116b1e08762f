//! Feed API integration tests

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use std::time::Duration;

use crate::common::*;

/// Wait for a background image removal to land
async fn wait_for_images(app: &TestApp, expected: usize) {
    for _ in 0..50 {
        if app.stored_images() == expected {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert_eq!(app.stored_images(), expected, "image directory never settled");
}

#[tokio::test]
async fn test_create_post_with_upload() {
    let app = TestApp::new();
    let ada = create_test_user(&app, "ada@example.com", "Ada").await;

    let form = MultipartBody::new()
        .text("title", "  First post  ")
        .text("content", "Hello from the feed")
        .png("photo.png");
    let response = app
        .multipart(Method::POST, "/feed/post", Some(&ada.token), form)
        .await;

    assert_status!(response, StatusCode::CREATED);
    assert_eq!(response.body["message"], "Post created successfully!");
    assert_eq!(response.body["post"]["title"], "First post");
    assert_eq!(parse_id(&response.body["creator"]["id"]), ada.id);
    assert_eq!(response.body["creator"]["name"], "Ada");

    let image_url = response.body["post"]["imageUrl"].as_str().expect("image url");
    assert!(image_url.starts_with("images/"));
    assert_contains!(image_url, "photo.png");
    assert_eq!(app.stored_images(), 1);

    let served = app.get(&format!("/{}", image_url), None).await;
    assert_status!(served, StatusCode::OK);
}

#[tokio::test]
async fn test_create_post_without_image_is_rejected() {
    let app = TestApp::new();
    let ada = create_test_user(&app, "ada@example.com", "Ada").await;

    let form = MultipartBody::new()
        .text("title", "abc")
        .text("content", "Long enough content");
    let response = app
        .multipart(Method::POST, "/feed/post", Some(&ada.token), form)
        .await;

    assert_status!(response, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.body["message"],
        "Validation failed, entered data is incorrect."
    );
    assert_eq!(response.body["data"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_rejected_create_reclaims_upload() {
    let app = TestApp::new();
    let ada = create_test_user(&app, "ada@example.com", "Ada").await;

    let form = MultipartBody::new()
        .text("title", "abc")
        .text("content", "xy")
        .png("photo.png");
    let response = app
        .multipart(Method::POST, "/feed/post", Some(&ada.token), form)
        .await;

    assert_status!(response, StatusCode::UNPROCESSABLE_ENTITY);
    wait_for_images(&app, 0).await;
}

#[tokio::test]
async fn test_unsupported_upload_is_ignored() {
    let app = TestApp::new();
    let ada = create_test_user(&app, "ada@example.com", "Ada").await;

    let form = MultipartBody::new()
        .text("title", "Valid title")
        .text("content", "Valid content")
        .file("image", "notes.txt", "text/plain", b"plain text");
    let response = app
        .multipart(Method::POST, "/feed/post", Some(&ada.token), form)
        .await;

    assert_status!(response, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["data"][0]["message"], "No image provided.");
    assert_eq!(app.stored_images(), 0);
}

#[tokio::test]
async fn test_list_posts_paginates_newest_first() {
    let app = TestApp::new();
    let ada = create_test_user(&app, "ada@example.com", "Ada").await;

    for n in 1..=5 {
        create_test_post(&app, &ada, &format!("Post number {}", n)).await;
    }

    let first = app.get("/feed/posts?page=1", Some(&ada.token)).await;
    assert_status!(first, StatusCode::OK);
    assert_eq!(first.body["totalItems"], 5);
    let titles: Vec<&str> = first.body["posts"]
        .as_array()
        .expect("posts listed")
        .iter()
        .filter_map(|p| p["title"].as_str())
        .collect();
    assert_eq!(titles, vec!["Post number 5", "Post number 4"]);

    let last = app.get("/feed/posts?page=3", Some(&ada.token)).await;
    assert_eq!(last.body["posts"].as_array().map(Vec::len), Some(1));
    assert_eq!(last.body["posts"][0]["title"], "Post number 1");

    let beyond = app.get("/feed/posts?page=4", Some(&ada.token)).await;
    assert_status!(beyond, StatusCode::OK);
    assert_eq!(beyond.body["posts"].as_array().map(Vec::len), Some(0));
    assert_eq!(beyond.body["totalItems"], 5);
}

#[tokio::test]
async fn test_list_posts_defaults_to_first_page() {
    let app = TestApp::new();
    let ada = create_test_user(&app, "ada@example.com", "Ada").await;
    for n in 1..=3 {
        create_test_post(&app, &ada, &format!("Post number {}", n)).await;
    }

    let response = app.get("/feed/posts", Some(&ada.token)).await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["posts"][0]["title"], "Post number 3");
}

#[tokio::test]
async fn test_get_post_resolves_creator() {
    let app = TestApp::new();
    let ada = create_test_user(&app, "ada@example.com", "Ada").await;
    let post = create_test_post(&app, &ada, "Readable post").await;
    let post_id = parse_id(&post["id"]);

    let response = app
        .get(&format!("/feed/post/{}", post_id), Some(&ada.token))
        .await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["message"], "Post fetched.");
    assert_eq!(response.body["post"]["creator"]["name"], "Ada");
}

#[tokio::test]
async fn test_get_unknown_or_malformed_post_is_not_found() {
    let app = TestApp::new();
    let ada = create_test_user(&app, "ada@example.com", "Ada").await;

    let unknown = app
        .get(&format!("/feed/post/{}", uuid::Uuid::new_v4()), Some(&ada.token))
        .await;
    assert_status!(unknown, StatusCode::NOT_FOUND);
    assert_eq!(unknown.body["message"], "Could not find post.");

    let malformed = app.get("/feed/post/not-a-uuid", Some(&ada.token)).await;
    assert_status!(malformed, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_post_keeps_image_when_unspecified() {
    let app = TestApp::new();
    let ada = create_test_user(&app, "ada@example.com", "Ada").await;
    let post = create_test_post(&app, &ada, "Original title").await;
    let post_id = parse_id(&post["id"]);

    let form = MultipartBody::new()
        .text("title", "Changed title")
        .text("content", "Changed content")
        .text("image", "unspecified");
    let response = app
        .multipart(
            Method::PUT,
            &format!("/feed/post/{}", post_id),
            Some(&ada.token),
            form,
        )
        .await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["message"], "Post updated!");
    assert_eq!(response.body["post"]["title"], "Changed title");
    assert_eq!(response.body["post"]["imageUrl"], post["imageUrl"]);
    assert_eq!(app.stored_images(), 1);
}

#[tokio::test]
async fn test_update_post_with_new_upload_reclaims_old_image() {
    let app = TestApp::new();
    let ada = create_test_user(&app, "ada@example.com", "Ada").await;
    let post = create_test_post(&app, &ada, "Original title").await;
    let post_id = parse_id(&post["id"]);

    let form = MultipartBody::new()
        .text("title", "Changed title")
        .text("content", "Changed content")
        .png("replacement.png");
    let response = app
        .multipart(
            Method::PUT,
            &format!("/feed/post/{}", post_id),
            Some(&ada.token),
            form,
        )
        .await;

    assert_status!(response, StatusCode::OK);
    let image_url = response.body["post"]["imageUrl"].as_str().expect("image url");
    assert_contains!(image_url, "replacement.png");
    wait_for_images(&app, 1).await;
}

#[tokio::test]
async fn test_update_by_non_owner_is_forbidden() {
    let app = TestApp::new();
    let ada = create_test_user(&app, "ada@example.com", "Ada").await;
    let bob = create_test_user(&app, "bob@example.com", "Bob").await;
    let post = create_test_post(&app, &ada, "Ada's post").await;
    let post_id = parse_id(&post["id"]);

    let form = MultipartBody::new()
        .text("title", "Hijacked title")
        .text("content", "Hijacked content")
        .text("image", "unspecified");
    let response = app
        .multipart(
            Method::PUT,
            &format!("/feed/post/{}", post_id),
            Some(&bob.token),
            form,
        )
        .await;

    assert_status!(response, StatusCode::FORBIDDEN);
    assert_eq!(response.body["message"], "Not authorized!");

    let unchanged = app
        .get(&format!("/feed/post/{}", post_id), Some(&ada.token))
        .await;
    assert_eq!(unchanged.body["post"]["title"], "Ada's post");
}

#[tokio::test]
async fn test_delete_by_non_owner_is_forbidden() {
    let app = TestApp::new();
    let ada = create_test_user(&app, "ada@example.com", "Ada").await;
    let bob = create_test_user(&app, "bob@example.com", "Bob").await;
    let post = create_test_post(&app, &ada, "Ada's post").await;
    let post_id = parse_id(&post["id"]);

    let response = app
        .empty(
            Method::DELETE,
            &format!("/feed/post/{}", post_id),
            Some(&bob.token),
        )
        .await;
    assert_status!(response, StatusCode::FORBIDDEN);

    let still_there = app
        .get(&format!("/feed/post/{}", post_id), Some(&ada.token))
        .await;
    assert_status!(still_there, StatusCode::OK);
    assert_eq!(app.stored_images(), 1);
}

#[tokio::test]
async fn test_delete_post_removes_post_and_image() {
    let app = TestApp::new();
    let ada = create_test_user(&app, "ada@example.com", "Ada").await;
    let post = create_test_post(&app, &ada, "Short-lived").await;
    let post_id = parse_id(&post["id"]);

    let response = app
        .empty(
            Method::DELETE,
            &format!("/feed/post/{}", post_id),
            Some(&ada.token),
        )
        .await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["message"], "Deleted post.");

    let gone = app
        .get(&format!("/feed/post/{}", post_id), Some(&ada.token))
        .await;
    assert_status!(gone, StatusCode::NOT_FOUND);

    let owner = assert_ok!(app.state.accounts.current_user(ada.id).await);
    assert!(owner.posts().is_empty());
    wait_for_images(&app, 0).await;

    let again = app
        .empty(
            Method::DELETE,
            &format!("/feed/post/{}", post_id),
            Some(&ada.token),
        )
        .await;
    assert_status!(again, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_created_post_is_linked_to_owner() {
    let app = TestApp::new();
    let ada = create_test_user(&app, "ada@example.com", "Ada").await;
    let post = create_test_post(&app, &ada, "Linked post").await;

    let owner = assert_ok!(app.state.accounts.current_user(ada.id).await);
    assert_eq!(owner.posts(), &[parse_id(&post["id"])]);
}

#[tokio::test]
async fn test_update_cannot_take_another_users_image() {
    let app = TestApp::new();
    let ada = create_test_user(&app, "ada@example.com", "Ada").await;
    let bob = create_test_user(&app, "bob@example.com", "Bob").await;
    let adas_post = create_test_post(&app, &ada, "Ada's post").await;
    let bobs_post = create_test_post(&app, &bob, "Bob's post").await;
    let adas_image = adas_post["imageUrl"].as_str().expect("image url");

    let form = MultipartBody::new()
        .text("title", "Changed title")
        .text("content", "Changed content")
        .text("image", adas_image);
    let response = app
        .multipart(
            Method::PUT,
            &format!("/feed/post/{}", parse_id(&bobs_post["id"])),
            Some(&bob.token),
            form,
        )
        .await;

    assert_status!(response, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["data"][0]["message"], "Image is already in use.");

    let unchanged = app
        .get(&format!("/feed/post/{}", parse_id(&bobs_post["id"])), Some(&bob.token))
        .await;
    assert_eq!(unchanged.body["post"]["imageUrl"], bobs_post["imageUrl"]);

    let deleted = app
        .empty(
            Method::DELETE,
            &format!("/feed/post/{}", parse_id(&bobs_post["id"])),
            Some(&bob.token),
        )
        .await;
    assert_status!(deleted, StatusCode::OK);
    wait_for_images(&app, 1).await;

    let served = app.get(&format!("/{}", adas_image), None).await;
    assert_status!(served, StatusCode::OK);
}
