pub mod health;
pub mod query;

#[cfg(test)]
mod tests {
    use super::{health::build_health_check_routers, query::build_query_routers};
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
        Router,
    };
    use nlp::IntentResolver;
    use registry::AppRegistry;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        let resolver = IntentResolver::new().unwrap();
        Router::new()
            .merge(build_query_routers())
            .merge(build_health_check_routers())
            .with_state(AppRegistry::in_memory(resolver))
    }

    async fn post_query(app: &Router, path: &str, text: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({ "text": text }).to_string()))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn get_json(app: &Router, path: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::GET)
            .uri(path)
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn booking_a_free_slot_returns_a_confirmation() {
        let app = app();
        let (status, body) = post_query(&app, "/query", "book slot 1").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["query_type"], json!("book_slot"));
        assert_eq!(body["tts_text"], json!("Slot 1 has been booked successfully."));
        assert_eq!(body["database_result"][0]["status"], json!("booked"));
        assert!(body["sql_query"]
            .as_str()
            .unwrap()
            .starts_with("UPDATE parking_slots"));
    }

    #[tokio::test]
    async fn booking_an_occupied_slot_is_unprocessable() {
        let app = app();
        // Slot 3 is booked in the demo data.
        let (status, body) = post_query(&app, "/query", "book slot 3").await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["success"], json!(false));
        assert!(body["error"].as_str().unwrap().contains("not available"));
    }

    #[tokio::test]
    async fn unknown_phrases_come_back_with_suggestions() {
        let app = app();
        let (status, body) = post_query(&app, "/query", "order me a pizza").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error"], json!("No matching pattern found"));
        assert!(!body["suggestions"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_slot_number_is_reported_without_suggestions() {
        let app = app();
        let (status, body) = post_query(&app, "/query", "book slot").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], json!(false));
        assert!(body["error"].as_str().unwrap().contains("slot number"));
        assert!(body.get("suggestions").is_none());
    }

    #[tokio::test]
    async fn listing_available_slots_reports_the_count() {
        let app = app();
        let (status, body) = post_query(&app, "/query", "show available slots").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["query_type"], json!("available_slots"));
        assert_eq!(body["database_result"].as_array().unwrap().len(), 8);
        assert_eq!(body["tts_text"], json!("Found 8 available parking slots."));
    }

    #[tokio::test]
    async fn counting_available_slots_returns_a_number() {
        let app = app();
        let (status, body) = post_query(&app, "/query", "how many slots are available").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["query_type"], json!("available_count"));
        assert_eq!(body["database_result"], json!(8));
        assert_eq!(body["tts_text"], json!("There are 8 available parking slots."));
    }

    #[tokio::test]
    async fn text_query_alias_behaves_like_query() {
        let app = app();
        let (status, body) = post_query(&app, "/text_query", "show users").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["query_type"], json!("users"));
        assert_eq!(body["database_result"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn booking_state_persists_across_requests() {
        let app = app();

        post_query(&app, "/query", "book slot 5").await;
        let (_, body) = post_query(&app, "/query", "show booked slots").await;

        // Two booked in the seed data plus the one above.
        assert_eq!(body["database_result"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn release_all_slots_frees_everything() {
        let app = app();
        let (status, body) = post_query(&app, "/query", "release all slots").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["query_type"], json!("release_all_slots"));
        assert_eq!(
            body["tts_text"],
            json!("Successfully released 2 booked parking slots.")
        );

        let (_, body) = post_query(&app, "/query", "how many slots are booked").await;
        assert_eq!(body["database_result"], json!(0));
    }

    #[tokio::test]
    async fn empty_query_is_rejected() {
        let app = app();
        let (status, body) = post_query(&app, "/query", "").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], json!(false));
    }

    #[tokio::test]
    async fn supported_commands_lists_every_intent() {
        let app = app();
        let (status, body) = get_json(&app, "/supported_commands").await;

        assert_eq!(status, StatusCode::OK);
        let commands = body["commands"].as_object().unwrap();
        assert_eq!(commands.len(), 16);
        assert!(commands.contains_key("book_slot"));
        for command in commands.values() {
            assert!(command["description"].is_string());
            assert!(!command["patterns"].as_array().unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn health_reports_the_backing_store() {
        let app = app();
        let (status, body) = get_json(&app, "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], json!("healthy"));
        assert_eq!(body["database"], json!("connected"));
    }
}
