//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use bakery_api::jwt::{Claims, JwtDecoder};
use bakery_api::state::AppState;
use bakery_core::config::AppConfig;
use bakery_database::DatabasePool;
use bakery_database::repositories::notification::NotificationRepository;
use bakery_database::repositories::user::UserRepository;
use bakery_entity::user::UserRole;
use bakery_push::{ExpoPushClient, PushDispatcher};
use bakery_service::notification::approval::ApprovalService;
use bakery_service::notification::composer::RequestComposer;
use bakery_service::notification::resolver::DirectoryAddressResolver;
use bakery_service::notification::service::NotificationService;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
    /// Application config
    pub config: AppConfig,
}

/// Response from a test request
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestApp {
    /// Create a new test application
    pub async fn new() -> Self {
        let config = AppConfig::load("test").expect("Failed to load test config");

        let database = DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database");
        let db_pool = database.pool().clone();

        bakery_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        Self::clean_database(&db_pool).await;

        let notification_repo = Arc::new(NotificationRepository::new(db_pool.clone()));
        let user_repo = Arc::new(UserRepository::new(db_pool.clone()));

        let provider = Arc::new(ExpoPushClient::new(&config.push).expect("push client"));
        let resolver = Arc::new(DirectoryAddressResolver::new(Arc::clone(&user_repo)));
        let dispatcher = Arc::new(PushDispatcher::new(provider, resolver));

        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

        let notification_service =
            Arc::new(NotificationService::new(Arc::clone(&notification_repo)));
        let approval_service = Arc::new(ApprovalService::new(
            Arc::clone(&notification_repo),
            Arc::clone(&dispatcher),
        ));
        let request_composer = Arc::new(RequestComposer::new(Arc::clone(&notification_repo)));

        let app_state = AppState {
            config: Arc::new(config.clone()),
            db_pool: db_pool.clone(),
            jwt_decoder,
            notification_repo,
            user_repo,
            dispatcher,
            notification_service,
            approval_service,
            request_composer,
        };

        let router = bakery_api::build_router(app_state);

        Self {
            router,
            db_pool,
            config,
        }
    }

    /// Clean all test data from the database
    async fn clean_database(pool: &PgPool) {
        for table in &["notificaciones", "usuarios"] {
            let query = format!("DELETE FROM {}", table);
            let _ = sqlx::query(&query).execute(pool).await;
        }
    }

    /// Create a test user and return their ID
    pub async fn create_test_user(
        &self,
        nombre: &str,
        role: UserRole,
        push_token: Option<&str>,
    ) -> Uuid {
        let id = Uuid::new_v4();

        sqlx::query(
            "INSERT INTO usuarios (id, nombre, rol, push_token, activo, created_at) \
             VALUES ($1, $2, $3, $4, TRUE, NOW())",
        )
        .bind(id)
        .bind(nombre)
        .bind(role)
        .bind(push_token)
        .execute(&self.db_pool)
        .await
        .expect("Failed to create test user");

        id
    }

    /// Mint a valid bearer token for a user
    pub fn token_for(&self, user_id: Uuid, nombre: &str, role: UserRole) -> String {
        let claims = Claims {
            sub: user_id,
            nombre: nombre.to_string(),
            rol: role,
            exp: (chrono::Utc::now().timestamp() + 3600) as usize,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.auth.jwt_secret.as_bytes()),
        )
        .expect("Failed to encode token")
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req.body(Body::from(body_str)).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Request failed");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }
}
