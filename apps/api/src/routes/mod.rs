pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::catalog::handlers::handle_list_roles;
use crate::extraction::handlers::{handle_analyze_resume, handle_list_skills};
use crate::profile::handlers::handle_normalize;
use crate::recommend::handlers::handle_recommend;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/roles", get(handle_list_roles))
        .route("/api/v1/skills", get(handle_list_skills))
        .route("/api/v1/profile/normalize", post(handle_normalize))
        .route("/api/v1/recommendations", post(handle_recommend))
        .route(
            "/api/v1/resume/analyze",
            post(handle_analyze_resume).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::catalog::RoleCatalog;
    use crate::config::Config;
    use crate::extraction::resume::ResumeAnalyzer;
    use crate::extraction::vocabulary::default_vocabulary;

    fn app_with(catalog: RoleCatalog) -> Router {
        build_router(AppState {
            config: Config::default(),
            catalog: Arc::new(catalog),
            analyzer: Arc::new(ResumeAnalyzer::new(default_vocabulary().unwrap()).unwrap()),
        })
    }

    fn app() -> Router {
        app_with(RoleCatalog::seeded().unwrap())
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn multipart(parts: &[(&str, Option<&str>, &str)]) -> Request<Body> {
        let boundary = "careermatch-test-boundary";
        let mut body = String::new();
        for (name, file_name, content) in parts {
            body.push_str(&format!("--{boundary}\r\n"));
            match file_name {
                Some(file) => body.push_str(&format!(
                    "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file}\"\r\n\
                     Content-Type: application/octet-stream\r\n\r\n"
                )),
                None => body.push_str(&format!(
                    "Content-Disposition: form-data; name=\"{name}\"\r\n\r\n"
                )),
            }
            body.push_str(content);
            body.push_str("\r\n");
        }
        body.push_str(&format!("--{boundary}--\r\n"));

        Request::builder()
            .method("POST")
            .uri("/api/v1/resume/analyze")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_roles_listing() {
        let response = app()
            .oneshot(Request::get("/api/v1/roles").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["count"], 9);
        assert_eq!(json["roles"][0]["title"], "Machine Learning Engineer");
    }

    #[tokio::test]
    async fn test_skills_taxonomy_listing() {
        let response = app()
            .oneshot(Request::get("/api/v1/skills").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert!(json["count"].as_u64().unwrap() > 100);
        assert_eq!(json["categories"][0]["category"], "Programming Languages");
        assert_eq!(json["categories"][0]["skills"][0], "Python");
    }

    #[tokio::test]
    async fn test_normalize_endpoint() {
        let response = app()
            .oneshot(post_json(
                "/api/v1/profile/normalize",
                json!({"skills": [" MySQL ", "Python"], "experience": [{"years": 6}]}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["experience_level"], "senior");
        let names: Vec<&str> = json["skills"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["mysql", "python", "sql"]);
    }

    #[tokio::test]
    async fn test_recommendations_endpoint() {
        let response = app()
            .oneshot(post_json(
                "/api/v1/recommendations",
                json!({
                    "profile": {"skills": ["python", "statistics", "sql", "data analysis",
                                           "machine learning"],
                                "experience": [{"years": 3}]},
                    "options": {"max_results": 2}
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert!(json["request_id"].is_string());
        assert!(json["generated_at"].is_string());
        assert_eq!(json["options"]["max_results"], 2);
        assert_eq!(json["outcome"]["status"], "matched");
        assert_eq!(json["outcome"]["recommendations"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_recommendations_accept_bare_profile() {
        let response = app()
            .oneshot(post_json("/api/v1/recommendations", json!({"skills": []})))
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["outcome"]["status"], "below_threshold");
        assert_eq!(json["outcome"]["recommendations"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_recommendations_empty_catalog() {
        let response = app_with(RoleCatalog::default())
            .oneshot(post_json("/api/v1/recommendations", json!({"profile": {}})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["outcome"]["status"], "no_roles_configured");
    }

    #[tokio::test]
    async fn test_recommendations_bad_options_is_400() {
        let response = app()
            .oneshot(post_json(
                "/api/v1/recommendations",
                json!({"profile": {}, "options": {"max_results": -1}}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_resume_analyze_text_upload() {
        let response = app()
            .oneshot(multipart(&[
                (
                    "resume",
                    Some("cv.txt"),
                    "DevOps engineer with 6 years of experience.\nDocker, Kubernetes, AWS, Linux, Bash, Git",
                ),
                ("interests", None, "Cloud, automation"),
            ]))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["format"], "text");
        assert_eq!(json["extracted"]["years_experience"], 6.0);
        assert_eq!(json["profile"]["experience_level"], "senior");
        assert_eq!(json["outcome"]["status"], "matched");
        assert_eq!(
            json["outcome"]["recommendations"][0]["role"]["title"],
            "DevOps Engineer"
        );
    }

    #[tokio::test]
    async fn test_resume_docx_rejected() {
        let response = app()
            .oneshot(multipart(&[("resume", Some("cv.docx"), "binary")]))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn test_resume_missing_file_is_400() {
        let response = app()
            .oneshot(multipart(&[("interests", None, "ai")]))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
