mod common;

use axum::http::StatusCode;
use serde_json::json;
use srq_core::keys;

use common::{answers, app, named_token, send, send_json, token};

#[tokio::test]
async fn health_needs_no_token() {
    let (app, _) = app().await;
    let (status, body) = send_json(&app, "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn missing_token_is_unauthorized() {
    let (app, store) = app().await;
    let (status, _) = send_json(&app, "GET", "/srq20", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send_json(&app, "POST", "/srq20", None, Some(answers(20))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(store.list(keys::EVALUATIONS_PREFIX).await.unwrap().is_empty());
}

#[tokio::test]
async fn token_signed_with_other_secret_is_unauthorized() {
    let (app, _) = app().await;
    let exp = jiff::Timestamp::now().as_second() + 3600;
    let forged = srq_auth::jwt::issue_token(
        &srq_auth::jwt::Claims {
            sub: "mallory".to_string(),
            exp: exp as u64,
            iss: None,
            username: None,
            is_staff: true,
        },
        b"not-the-secret",
    )
    .unwrap();

    let (status, _) = send_json(&app, "GET", "/users", Some(&forged), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn questionnaire_lists_twenty_ordered_questions() {
    let (app, _) = app().await;
    let (status, body) = send_json(&app, "GET", "/srq20", Some(&token("u1", false)), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "SRQ-20");

    let questions = body["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 20);
    let orders: Vec<u64> = questions.iter().map(|q| q["order"].as_u64().unwrap()).collect();
    assert_eq!(orders, (1..=20).collect::<Vec<u64>>());
}

#[tokio::test]
async fn submit_all_yes_returns_severe_and_suggestions() {
    let (app, _) = app().await;
    let (status, body) =
        send_json(&app, "POST", "/srq20", Some(&token("u1", false)), Some(answers(20))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["evaluation"]["score"], 20);
    assert_eq!(body["evaluation"]["level"], "severe");
    assert_eq!(body["evaluation"]["user_id"], "u1");

    let suggestions = body["suggested_activities"].as_array().unwrap();
    assert_eq!(suggestions.len(), 3);
    assert!(suggestions.iter().all(|a| a["level"] == "severe"));
}

#[tokio::test]
async fn submit_all_no_returns_none() {
    let (app, _) = app().await;
    let (status, body) =
        send_json(&app, "POST", "/srq20", Some(&token("u1", false)), Some(answers(0))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["evaluation"]["score"], 0);
    assert_eq!(body["evaluation"]["level"], "none");
    assert_eq!(body["suggested_activities"], json!([]));
}

#[tokio::test]
async fn submit_empty_batch() {
    let (app, _) = app().await;
    let (status, body) = send_json(
        &app,
        "POST",
        "/srq20",
        Some(&token("u1", false)),
        Some(json!({ "answers": [] })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["evaluation"]["score"], 0);
    assert_eq!(body["evaluation"]["level"], "none");
    assert_eq!(body["suggested_activities"], json!([]));
}

#[tokio::test]
async fn unknown_question_is_rejected_without_writes() {
    let (app, store) = app().await;
    let body = json!({
        "answers": [{ "question_id": uuid::Uuid::new_v4(), "value": true }]
    });
    let (status, body) =
        send_json(&app, "POST", "/srq20", Some(&token("u1", false)), Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["reason"], "unknown_question");
    assert!(store.list(keys::EVALUATIONS_PREFIX).await.unwrap().is_empty());
    assert!(store.list(keys::ANSWERS_PREFIX).await.unwrap().is_empty());
}

#[tokio::test]
async fn duplicate_question_is_rejected() {
    let (app, _) = app().await;
    let id = srq_instruments::srq20::questions()[0].id;
    let body = json!({
        "answers": [
            { "question_id": id, "value": true },
            { "question_id": id, "value": true },
        ]
    });
    let (status, body) =
        send_json(&app, "POST", "/srq20", Some(&token("u1", false)), Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["reason"], "duplicate_question");
}

#[tokio::test]
async fn each_authenticated_request_is_recorded() {
    let (app, store) = app().await;
    let user = token("u1", false);
    send(&app, "GET", "/srq20", Some(&user), None).await;
    send(&app, "POST", "/srq20", Some(&user), Some(answers(3))).await;

    let records = srq_audit::access::list_access(&store, Some("u1")).await.unwrap();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.user_id == "u1"));
}

#[tokio::test]
async fn forwarded_ip_is_recorded() {
    let (app, store) = app().await;
    let request = axum::http::Request::builder()
        .uri("/srq20")
        .header("authorization", format!("Bearer {}", token("u1", false)))
        .header("x-forwarded-for", "203.0.113.7, 10.0.0.1")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let records = srq_audit::access::list_access(&store, Some("u1")).await.unwrap();
    assert_eq!(records[0].ip.as_deref(), Some("203.0.113.7"));
}

#[tokio::test]
async fn users_see_only_their_own_evaluations() {
    let (app, _) = app().await;
    let alice = token("alice", false);
    let bob = token("bob", false);

    let (_, submitted) = send_json(&app, "POST", "/srq20", Some(&alice), Some(answers(8))).await;
    let id = submitted["evaluation"]["id"].as_str().unwrap().to_string();
    send(&app, "POST", "/srq20", Some(&bob), Some(answers(1))).await;

    let (status, own) = send_json(&app, "GET", "/evaluations", Some(&alice), None).await;
    assert_eq!(status, StatusCode::OK);
    let own = own.as_array().unwrap();
    assert_eq!(own.len(), 1);
    assert_eq!(own[0]["level"], "moderate");

    let uri = format!("/evaluations/{id}");
    let (status, _) = send_json(&app, "GET", &uri, Some(&alice), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send_json(&app, "GET", &uri, Some(&bob), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send_json(&app, "GET", &uri, Some(&token("staff", true)), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, all) = send_json(&app, "GET", "/evaluations", Some(&token("staff", true)), None).await;
    assert_eq!(all.as_array().unwrap().len(), 2);

    let (_, mild) =
        send_json(&app, "GET", "/evaluations?level=mild", Some(&token("staff", true)), None).await;
    assert_eq!(mild.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn own_answers_are_listed() {
    let (app, _) = app().await;
    let user = token("u1", false);
    send(&app, "POST", "/srq20", Some(&user), Some(answers(4))).await;

    let (status, body) = send_json(&app, "GET", "/answers", Some(&user), None).await;
    assert_eq!(status, StatusCode::OK);
    let answers = body.as_array().unwrap();
    assert_eq!(answers.len(), 20);
    assert_eq!(answers.iter().filter(|a| a["value"] == true).count(), 4);

    let (_, other) = send_json(&app, "GET", "/answers", Some(&token("u2", false)), None).await;
    assert_eq!(other, json!([]));
}

#[tokio::test]
async fn privileged_endpoints_forbid_regular_users() {
    let (app, _) = app().await;
    let user = token("u1", false);

    for uri in [
        "/evaluations/statistics",
        "/evaluations/export",
        "/evaluations/export?format=csv",
        "/users",
        "/access-history",
    ] {
        let (status, _) = send_json(&app, "GET", uri, Some(&user), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN, "{uri}");
    }
}

#[tokio::test]
async fn statistics_over_submissions() {
    let (app, _) = app().await;
    let alice = token("alice", false);
    send(
        &app,
        "PUT",
        "/users/me",
        Some(&alice),
        Some(json!({ "username": "alice", "email": "alice@example.org", "gender": "female" })),
    )
    .await;
    send(&app, "POST", "/srq20", Some(&alice), Some(answers(20))).await;
    send(&app, "POST", "/srq20", Some(&token("bob", false)), Some(answers(0))).await;

    let (status, stats) =
        send_json(&app, "GET", "/evaluations/statistics", Some(&token("staff", true)), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["total_evaluations"], 2);
    assert_eq!(stats["average_score"], 10.0);
    assert_eq!(
        stats["level_distribution"],
        json!([
            { "level": "none", "total": 1 },
            { "level": "severe", "total": 1 },
        ])
    );
    assert_eq!(
        stats["by_gender"],
        json!([
            { "gender": "female", "average_score": 20.0, "total": 1 },
            { "gender": null, "average_score": 0.0, "total": 1 },
        ])
    );
}

#[tokio::test]
async fn statistics_without_evaluations() {
    let (app, _) = app().await;
    let (status, stats) =
        send_json(&app, "GET", "/evaluations/statistics", Some(&token("staff", true)), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["total_evaluations"], 0);
    assert!(stats["average_score"].is_null());
}

#[tokio::test]
async fn export_csv_has_header_and_rows() {
    let (app, _) = app().await;
    send(&app, "POST", "/srq20", Some(&token("u1", false)), Some(answers(9))).await;

    let (status, body) = send(
        &app,
        "GET",
        "/evaluations/export?format=csv",
        Some(&token("staff", true)),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let text = String::from_utf8(body).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("id,user,score,level,timestamp,gender"));
    let row = lines.next().unwrap();
    assert!(row.contains(",u1,9,moderate,"));
    assert!(lines.next().is_none());
}

#[tokio::test]
async fn export_defaults_to_json() {
    let (app, _) = app().await;
    send(&app, "POST", "/srq20", Some(&token("u1", false)), Some(answers(1))).await;

    let (status, body) =
        send_json(&app, "GET", "/evaluations/export", Some(&token("staff", true)), None).await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["user"], "u1");
    assert_eq!(rows[0]["level"], "mild");
    assert!(rows[0]["gender"].is_null());
}

#[tokio::test]
async fn export_rejects_unknown_format() {
    let (app, _) = app().await;
    let (status, body) = send_json(
        &app,
        "GET",
        "/evaluations/export?format=xml",
        Some(&token("staff", true)),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["reason"], "bad_format");
}

#[tokio::test]
async fn profile_is_created_then_updated() {
    let (app, _) = app().await;
    let user = token("u1", false);

    let (status, _) = send_json(&app, "GET", "/users/me", Some(&user), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, created) = send_json(
        &app,
        "PUT",
        "/users/me",
        Some(&user),
        Some(json!({ "username": "ana", "email": "ana@example.org", "birth_date": "1990-04-12" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["id"], "u1");

    let (_, updated) = send_json(
        &app,
        "PUT",
        "/users/me",
        Some(&user),
        Some(json!({ "username": "ana.m", "email": "ana@example.org", "gender": "other" })),
    )
    .await;
    assert_eq!(updated["username"], "ana.m");
    assert_eq!(updated["gender"], "other");
    assert_eq!(updated["created_at"], created["created_at"]);

    let (_, listed) = send_json(&app, "GET", "/users", Some(&token("staff", true)), None).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn profile_requires_an_email() {
    let (app, _) = app().await;
    let (status, _) = send_json(
        &app,
        "PUT",
        "/users/me",
        Some(&token("u1", false)),
        Some(json!({ "username": "ana", "email": "nope" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn catalog_endpoints() {
    let (app, _) = app().await;
    let user = token("u1", false);

    let (_, physical) =
        send_json(&app, "GET", "/questions?category=physical", Some(&user), None).await;
    assert_eq!(physical.as_array().unwrap().len(), 8);

    let (status, _) = send_json(&app, "GET", "/questions?category=mood", Some(&user), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let id = srq_instruments::srq20::questions()[4].id;
    let (status, question) =
        send_json(&app, "GET", &format!("/questions/{id}"), Some(&user), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(question["order"], 5);

    let missing = uuid::Uuid::new_v4();
    let (status, _) =
        send_json(&app, "GET", &format!("/questions/{missing}"), Some(&user), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, activities) = send_json(&app, "GET", "/activities", Some(&user), None).await;
    assert_eq!(activities.as_array().unwrap().len(), 9);
    let (_, none) = send_json(&app, "GET", "/activities?level=none", Some(&user), None).await;
    assert_eq!(none, json!([]));
    let (_, mild) = send_json(&app, "GET", "/activities?level=mild", Some(&user), None).await;
    assert_eq!(mild.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn access_history_for_staff() {
    let (app, _) = app().await;
    send(&app, "GET", "/srq20", Some(&token("u1", false)), None).await;
    send(&app, "GET", "/srq20", Some(&token("u2", false)), None).await;

    let staff = token("staff", true);
    let (status, body) =
        send_json(&app, "GET", "/access-history?user_id=u1", Some(&staff), None).await;
    assert_eq!(status, StatusCode::OK);
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["user_id"], "u1");

    let (_, all) = send_json(&app, "GET", "/access-history", Some(&staff), None).await;
    // u1, u2 and the staff member's earlier request
    assert_eq!(all.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn malformed_submission_body_gets_a_json_error() {
    let (app, store) = app().await;
    let body = json!({ "answers": [{ "question_id": 999, "value": true }] });
    let (status, body) =
        send_json(&app, "POST", "/srq20", Some(&token("u1", false)), Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["reason"], "invalid_request");
    assert!(body["error"].as_str().unwrap().contains("question_id"));
    assert!(store.list(keys::ANSWERS_PREFIX).await.unwrap().is_empty());
}

#[tokio::test]
async fn malformed_path_and_query_get_json_errors() {
    let (app, _) = app().await;
    let user = token("u1", false);

    for uri in [
        "/evaluations/not-a-uuid",
        "/questions/42",
        "/answers?question_id=nope",
    ] {
        let (status, body) = send_json(&app, "GET", uri, Some(&user), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["reason"], "invalid_request", "{uri}");
    }
}

#[tokio::test]
async fn peer_address_is_recorded_without_forwarded_header() {
    let (app, store) = app().await;
    let mut request = axum::http::Request::builder()
        .uri("/srq20")
        .header("authorization", format!("Bearer {}", token("u1", false)))
        .body(axum::body::Body::empty())
        .unwrap();
    let peer: std::net::SocketAddr = "198.51.100.23:51234".parse().unwrap();
    request.extensions_mut().insert(axum::extract::ConnectInfo(peer));

    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let records = srq_audit::access::list_access(&store, Some("u1")).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].ip.as_deref(), Some("198.51.100.23"));
}

#[tokio::test]
async fn staff_can_narrow_listings_to_one_user() {
    let (app, _) = app().await;
    send(&app, "POST", "/srq20", Some(&token("alice", false)), Some(answers(3))).await;
    send(&app, "POST", "/srq20", Some(&token("bob", false)), Some(answers(12))).await;
    let staff = token("staff", true);

    let (status, evaluations) =
        send_json(&app, "GET", "/evaluations?user_id=bob", Some(&staff), None).await;
    assert_eq!(status, StatusCode::OK);
    let evaluations = evaluations.as_array().unwrap();
    assert_eq!(evaluations.len(), 1);
    assert_eq!(evaluations[0]["user_id"], "bob");

    let (_, answers) = send_json(&app, "GET", "/answers?user_id=alice", Some(&staff), None).await;
    let answers = answers.as_array().unwrap();
    assert_eq!(answers.len(), 20);
    assert!(answers.iter().all(|a| a["user_id"] == "alice"));

    let first = srq_instruments::srq20::questions()[0].id;
    let uri = format!("/answers?question_id={first}");
    let (_, by_question) = send_json(&app, "GET", &uri, Some(&staff), None).await;
    let by_question = by_question.as_array().unwrap();
    assert_eq!(by_question.len(), 2);
    assert!(by_question.iter().all(|a| a["question_id"] == first.to_string()));

    let (status, _) = send_json(&app, "GET", "/answers?user_id=a/b", Some(&staff), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn regular_users_cannot_name_another_user() {
    let (app, _) = app().await;
    send(&app, "POST", "/srq20", Some(&token("bob", false)), Some(answers(1))).await;
    let alice = token("alice", false);

    let (status, _) = send_json(&app, "GET", "/evaluations?user_id=bob", Some(&alice), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = send_json(&app, "GET", "/answers?user_id=bob", Some(&alice), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, own) =
        send_json(&app, "GET", "/evaluations?user_id=alice", Some(&alice), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(own, json!([]));
}

#[tokio::test]
async fn blank_username_falls_back_to_token_claim() {
    let (app, _) = app().await;
    let (status, profile) = send_json(
        &app,
        "PUT",
        "/users/me",
        Some(&named_token("u1", "ana.m")),
        Some(json!({ "email": "ana@example.org" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["username"], "ana.m");

    let (status, _) = send_json(
        &app,
        "PUT",
        "/users/me",
        Some(&token("u2", false)),
        Some(json!({ "email": "someone@example.org" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
