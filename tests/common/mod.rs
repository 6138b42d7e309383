#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use food_api::{
    app::App,
    modules::{auth, user},
    types::{AppConfig, AppEnvironment, AuthConfig, Config, Context, DatabaseConfig, Store},
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub struct TestApp {
    pub ctx: Arc<Context>,
    pub router: Router,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

pub struct TestUser {
    pub id: String,
    pub token: String,
}

pub fn config() -> Config {
    Config {
        app: AppConfig {
            host: String::from("127.0.0.1"),
            environment: AppEnvironment::Development,
            port: 0,
        },
        database: DatabaseConfig {
            url: None,
            max_connections: 1,
        },
        auth: AuthConfig {
            session_ttl_hours: 1,
        },
    }
}

impl TestApp {
    pub fn new() -> Self {
        let ctx = Arc::new(Context::new(&config(), Store::in_memory()));
        let router = App::router(ctx.clone());

        Self { ctx, router }
    }

    /// Registers a user straight through the store and opens a session for them.
    pub async fn user(&self, email: &str) -> TestUser {
        let user = self
            .ctx
            .store
            .users
            .create(user::repository::CreateUserPayload {
                email: email.to_string(),
                password_hash: String::from("unused"),
            })
            .await
            .expect("user should be created");

        let session = auth::service::create_session(self.ctx.clone(), user.id.clone())
            .await
            .expect("session should be created");

        TestUser {
            id: user.id,
            token: session.access_token,
        }
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request should build");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("body should be JSON")
        };

        TestResponse { status, body }
    }

    pub async fn create_food(&self, owner: &TestUser, food: Value) -> Value {
        let response = self
            .send(
                Method::POST,
                "/foods",
                Some(&owner.token),
                Some(serde_json::json!({ "food": food })),
            )
            .await;

        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
        response.body["food"].clone()
    }
}
