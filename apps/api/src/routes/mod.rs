pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::recommendation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // HTML pages
        .route("/", get(handlers::handle_index))
        .route("/recommend", post(handlers::handle_recommend))
        // Query history API
        .route("/api/v1/queries", get(handlers::handle_list_queries))
        .route("/api/v1/queries/:id", get(handlers::handle_get_query))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::db::{create_pool, init_schema};
    use crate::errors::AppError;
    use crate::models::query::UserQuery;
    use crate::recommendation::resolver::Career;
    use crate::recommendation::store::{QueryStore, SqliteQueryStore};

    async fn spawn_app() -> (Router, Arc<dyn QueryStore>) {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        init_schema(&pool).await.unwrap();
        let store: Arc<dyn QueryStore> = Arc::new(SqliteQueryStore::new(pool));

        let state = AppState {
            store: Arc::clone(&store),
        };
        (build_router(state), store)
    }

    /// Store whose backend is always unreachable.
    struct UnreachableStore;

    #[async_trait]
    impl QueryStore for UnreachableStore {
        async fn save(&self, _skills: &str, _recommendation: Career) -> Result<i64, AppError> {
            Err(AppError::Persistence(sqlx::Error::PoolClosed))
        }

        async fn recent(&self, _limit: u32) -> Result<Vec<UserQuery>, AppError> {
            Err(AppError::Persistence(sqlx::Error::PoolClosed))
        }

        async fn get(&self, _id: i64) -> Result<Option<UserQuery>, AppError> {
            Err(AppError::Persistence(sqlx::Error::PoolClosed))
        }
    }

    fn post_form(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/recommend")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_index_serves_form() {
        let (app, _) = spawn_app().await;

        let response = app.oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_text(response).await;
        assert!(body.contains(r#"name="skills""#));
    }

    #[tokio::test]
    async fn test_recommend_python_and_sql() {
        let (app, _) = spawn_app().await;

        let response = app
            .oneshot(post_form("skills=I+know+Python+and+SQL"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("AI/ML Engineer"));
    }

    #[tokio::test]
    async fn test_recommend_empty_skills() {
        let (app, _) = spawn_app().await;

        let response = app.oneshot(post_form("skills=")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Software Developer"));
    }

    #[tokio::test]
    async fn test_recommend_persists_one_row() {
        let (app, store) = spawn_app().await;

        let response = app
            .clone()
            .oneshot(post_form("skills=Data+visualisation"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let recent = store.recent(10).await.unwrap();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].skills, "Data visualisation");
        assert_eq!(recent[0].recommendation, Career::DataAnalyst);
    }

    #[tokio::test]
    async fn test_recommend_missing_field_is_client_error() {
        let (app, store) = spawn_app().await;

        let response = app.oneshot(post_form("other=python")).await.unwrap();
        assert!(response.status().is_client_error());
        assert!(store.recent(10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_recommend_storage_failure_is_server_error() {
        let state = AppState {
            store: Arc::new(UnreachableStore),
        };
        let app = build_router(state);

        let response = app.oneshot(post_form("skills=python")).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["error"]["code"], "PERSISTENCE_ERROR");
    }

    #[tokio::test]
    async fn test_history_lists_newest_first() {
        let (app, _) = spawn_app().await;

        for form in ["skills=figma+design", "skills=python"] {
            let response = app.clone().oneshot(post_form(form)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let response = app.oneshot(get("/api/v1/queries")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
        let rows = body.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["recommendation"], "AI/ML Engineer");
        assert_eq!(rows[1]["recommendation"], "UI/UX Designer");
        assert_eq!(rows[1]["skills"], "figma design");
    }

    #[tokio::test]
    async fn test_history_rejects_zero_limit() {
        let (app, _) = spawn_app().await;

        let response = app.oneshot(get("/api/v1/queries?limit=0")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_query_by_id() {
        let (app, store) = spawn_app().await;
        let id = store.save("UX research", Career::SoftwareDeveloper).await.unwrap();

        let response = app
            .clone()
            .oneshot(get(&format!("/api/v1/queries/{id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["skills"], "UX research");

        let response = app
            .oneshot(get(&format!("/api/v1/queries/{}", id + 1)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _) = spawn_app().await;

        let response = app.oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["status"], "ok");
    }
}
