use reqwest::{Method, StatusCode};
use rstest::rstest;
use serde_json::json;

use crate::helpers::{JOBS, NAMES, check_response, random_user_ids, spawn_app};

fn is_millisecond_timestamp(value: &str) -> bool {
    regex::Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d{3}Z$")
        .unwrap()
        .is_match(value)
}

#[tokio::test]
async fn get_user_successful() {
    let app = spawn_app().await;

    let response = app.get("/api/users/2").await;

    let body = check_response(response, StatusCode::OK).await;
    assert_eq!(body["data"]["id"], 2);
    assert_eq!(body["data"]["email"], "janet.weaver@reqres.in");
    assert!(body.get("support").is_some());
}

#[tokio::test]
async fn get_user_unsuccessful() {
    use rand::Rng;
    let app = spawn_app().await;

    for _ in 0..3 {
        let id = rand::thread_rng().gen_range(10_000..=30_000);
        let response = app.get(&format!("/api/users/{id}")).await;
        check_response(response, StatusCode::NOT_FOUND).await;
    }
}

#[rstest]
#[tokio::test]
async fn create_user_successful(
    #[values(NAMES[0], NAMES[1], NAMES[2])] name: &str,
    #[values(JOBS[0], JOBS[1], JOBS[2])] job: &str,
) {
    let app = spawn_app().await;

    let body = json!({ "name": name, "job": job });
    let response = app.post("/api/users", &body).await;

    let data = check_response(response, StatusCode::CREATED).await;
    assert_eq!(data["name"], name);
    assert_eq!(data["job"], job);
}

/// Exact `id` range and timestamp shape are mock guarantees; the public
/// service hands out other ids and field names.
#[tokio::test]
async fn create_user_assigns_id_and_timestamp() {
    if std::env::var("REQRES_BASE_URL").is_ok() {
        return;
    }
    let app = spawn_app().await;

    let body = json!({ "name": "Ivan", "job": "QA_Jun" });
    let response = app.post("/api/users", &body).await;

    let data = check_response(response, StatusCode::CREATED).await;
    let id = data["id"].as_u64().expect("numeric id");
    assert!((1..=999).contains(&id));
    assert!(is_millisecond_timestamp(data["updatedAt"].as_str().expect("updatedAt")));
}

#[rstest]
#[tokio::test]
async fn update_user_successful(
    #[values(Method::PUT, Method::PATCH)] method: Method,
    #[values(NAMES[0], NAMES[1], NAMES[2])] name: &str,
    #[values(JOBS[0], JOBS[1], JOBS[2])] job: &str,
) {
    let app = spawn_app().await;
    let body = json!({ "name": name, "job": job });

    for id in random_user_ids(5) {
        let response = app
            .send(method.clone(), &format!("/api/users/{id}"), Some(&body))
            .await;

        let data = check_response(response, StatusCode::OK).await;
        assert_eq!(data["name"], name);
        assert_eq!(data["job"], job);
        assert!(data.get("id").is_none(), "update echoed an id: {data}");
        assert!(is_millisecond_timestamp(data["updatedAt"].as_str().expect("updatedAt")));
    }
}

#[tokio::test]
async fn delete_user_successful() {
    let app = spawn_app().await;

    for id in random_user_ids(5) {
        let response = app
            .send(Method::DELETE, &format!("/api/users/{id}"), None)
            .await;
        let body = check_response(response, StatusCode::NO_CONTENT).await;
        assert!(body.is_null());
    }
}
