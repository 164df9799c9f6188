use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use pinpeople::cache::{Cache, CacheError, MemoryCache};
use pinpeople::config::Config;
use pinpeople::state::SharedState;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

struct TestApp {
    router: Router,
    state: Arc<SharedState>,
    cache: Arc<dyn Cache>,
    token: String,
}

fn test_config() -> Config {
    let mut config = Config::default();
    let db_path =
        std::env::temp_dir().join(format!("pinpeople-api-test-{}.db", uuid::Uuid::new_v4()));
    config.general.database_path = format!("sqlite:{}?mode=rwc", db_path.display());
    config.auth.jwt_secret = "test-secret".to_string();
    config
}

async fn spawn_app_with_cache(cache: Arc<dyn Cache>) -> TestApp {
    let state = Arc::new(
        SharedState::with_cache(test_config(), cache.clone())
            .await
            .expect("Failed to create shared state"),
    );
    let token = state.auth_service.login("tester").unwrap();
    let router = pinpeople::api::router(pinpeople::api::create_app_state(state.clone(), None));

    TestApp {
        router,
        state,
        cache,
        token,
    }
}

async fn spawn_app() -> TestApp {
    spawn_app_with_cache(Arc::new(MemoryCache::new())).await
}

impl TestApp {
    async fn request(
        &self,
        method: &str,
        uri: &str,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, Vec<u8>) {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token));

        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    async fn json(
        &self,
        method: &str,
        uri: &str,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, serde_json::Value) {
        let (status, bytes) = self.request(method, uri, body).await;
        let value = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }
}

fn employee_json(name: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "email": format!("{name}@mail.com"),
        "corporateEmail": format!("{name}@corp.com"),
        "position": "Analyst",
        "role": "",
        "responseDate": "2022-01-20",
        "enps": 9
    })
}

struct FailingCache;

#[async_trait::async_trait]
impl Cache for FailingCache {
    async fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        Err(CacheError::Connection("refused".to_string()))
    }

    async fn set(&self, _key: &str, _value: Vec<u8>, _ttl: Duration) -> Result<(), CacheError> {
        Err(CacheError::Connection("refused".to_string()))
    }

    async fn delete(&self, _keys: &[&str]) -> Result<(), CacheError> {
        Err(CacheError::Connection("refused".to_string()))
    }

    async fn delete_prefix(&self, _prefix: &str) -> Result<(), CacheError> {
        Err(CacheError::Connection("refused".to_string()))
    }
}

#[tokio::test]
async fn test_ping_is_public() {
    let app = spawn_app().await;

    let response = app
        .router
        .clone()
        .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json, serde_json::json!({"status": "ok", "message": "pong"}));
}

#[tokio::test]
async fn test_auth_required_on_api_routes() {
    let app = spawn_app().await;

    let basic = format!("Basic {}", app.token);

    for (auth, expected) in [
        (None, "Missing auth token"),
        (Some("Bearer"), "Invalid token format"),
        (Some(basic.as_str()), "Invalid token format"),
        (Some("Bearer not-a-jwt"), "Invalid token"),
    ] {
        let mut builder = Request::builder().uri("/api/employees");
        if let Some(value) = auth {
            builder = builder.header(header::AUTHORIZATION, value);
        }

        let response = app
            .router
            .clone()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], expected);
    }
}

#[tokio::test]
async fn test_login_issues_usable_token() {
    let app = spawn_app().await;

    let login = |username: &str| {
        Request::builder()
            .method("POST")
            .uri("/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                serde_json::json!({"username": username, "password": "x"}).to_string(),
            ))
            .unwrap()
    };

    let response = app.router.clone().oneshot(login("")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app.router.clone().oneshot(login("ana")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let token = json["data"]["token"].as_str().unwrap().to_string();

    let claims = app.state.auth_service.verify(&token).unwrap();
    assert_eq!(claims.sub, "ana");
}

#[tokio::test]
async fn test_empty_listing_envelope() {
    let app = spawn_app().await;

    let (status, body) = app
        .request("GET", "/api/employees?page=1&pageSize=10", None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        String::from_utf8(body).unwrap(),
        r#"{"employees":[],"totalCount":0,"page":1,"pageSize":10,"totalPages":0}"#
    );
}

#[tokio::test]
async fn test_listing_normalizes_pagination() {
    let app = spawn_app().await;
    for name in ["ana", "bia", "caio"] {
        let (status, _) = app
            .json("POST", "/api/employees", Some(employee_json(name)))
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, page) = app
        .json("GET", "/api/employees?page=abc&pageSize=500", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["page"], 1);
    assert_eq!(page["pageSize"], 10);
    assert_eq!(page["totalCount"], 3);
    assert_eq!(page["totalPages"], 1);

    let (_, page) = app
        .json("GET", "/api/employees?page=2&pageSize=2", None)
        .await;
    assert_eq!(page["totalPages"], 2);
    assert_eq!(page["employees"].as_array().unwrap().len(), 1);
    assert_eq!(page["employees"][0]["name"], "caio");
}

#[tokio::test]
async fn test_unaddressable_page_returns_empty_listing() {
    let app = spawn_app().await;
    app.json("POST", "/api/employees", Some(employee_json("ana")))
        .await;

    for page in ["9223372036854775807", "1000000000000000000"] {
        let (status, body) = app
            .json("GET", &format!("/api/employees?page={page}&pageSize=10"), None)
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["employees"], serde_json::json!([]));
        assert_eq!(body["totalCount"], 1);
        assert_eq!(body["page"], page.parse::<u64>().unwrap());
        assert_eq!(body["pageSize"], 10);
        assert_eq!(body["totalPages"], 1);
    }

    let (status, _) = app.request("GET", "/ping", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_listing_service_handles_last_addressable_page() {
    let app = spawn_app().await;
    app.json("POST", "/api/employees", Some(employee_json("ana")))
        .await;

    let pagination = pinpeople::domain::Pagination::new(922_337_203_685_477_581, 10);
    assert!(pagination.offset().is_some());

    let payload = app
        .state
        .employee_service
        .list_employees(pagination)
        .await
        .unwrap();
    let page: serde_json::Value = serde_json::from_slice(&payload).unwrap();
    assert_eq!(page["employees"], serde_json::json!([]));
    assert_eq!(page["totalCount"], 1);

    let past_end = pinpeople::domain::Pagination::new(i64::MAX, 10);
    let payload = app
        .state
        .employee_service
        .list_employees(past_end)
        .await
        .unwrap();
    let page: serde_json::Value = serde_json::from_slice(&payload).unwrap();
    assert_eq!(page["employees"], serde_json::json!([]));
    assert_eq!(page["totalPages"], 1);
}

#[tokio::test]
async fn test_employee_crud() {
    let app = spawn_app().await;

    let (status, created) = app
        .json("POST", "/api/employees", Some(employee_json("ana")))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["data"]["id"].as_i64().unwrap();
    assert!(created["data"]["role"].is_null());
    assert_eq!(created["data"]["responseDate"], "2022-01-20");

    let (status, fetched) = app.json("GET", &format!("/api/employees/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["data"]["corporateEmail"], "ana@corp.com");
    assert_eq!(fetched["data"]["enps"], 9);

    let mut update = employee_json("ana");
    update["position"] = serde_json::json!("Manager");
    let (status, updated) = app
        .json("PUT", &format!("/api/employees/{id}"), Some(update))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["data"]["position"], "Manager");

    let (status, _) = app.request("DELETE", &format!("/api/employees/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, missing) = app.json("GET", &format!("/api/employees/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(missing["success"], false);

    let (status, _) = app.request("DELETE", &format!("/api/employees/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_bad_input_is_rejected() {
    let app = spawn_app().await;

    let (status, body) = app.json("GET", "/api/employees/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid employee ID");

    let (status, body) = app
        .json("POST", "/api/employees", Some(serde_json::json!({"name": 5})))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request body");

    let mut blank = employee_json("ana");
    blank["email"] = serde_json::json!("");
    let (status, _) = app.json("POST", "/api/employees", Some(blank)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_mutations_clear_base_cache_key() {
    let app = spawn_app().await;
    let ttl = Duration::from_secs(300);

    app.cache.set("employees", b"stale".to_vec(), ttl).await.unwrap();
    let (_, created) = app
        .json("POST", "/api/employees", Some(employee_json("ana")))
        .await;
    assert_eq!(app.cache.get("employees").await.unwrap(), None);

    let id = created["data"]["id"].as_i64().unwrap();
    app.cache.set("employees", b"stale".to_vec(), ttl).await.unwrap();
    app.json("PUT", &format!("/api/employees/{id}"), Some(employee_json("bia")))
        .await;
    assert_eq!(app.cache.get("employees").await.unwrap(), None);

    app.cache.set("employees", b"stale".to_vec(), ttl).await.unwrap();
    app.request("DELETE", &format!("/api/employees/{id}"), None).await;
    assert_eq!(app.cache.get("employees").await.unwrap(), None);
}

#[tokio::test]
async fn test_cached_page_is_served_verbatim() {
    let app = spawn_app().await;

    app.cache
        .set(
            "employees:page:1:size:10",
            b"{\"cached\":true}".to_vec(),
            Duration::from_secs(300),
        )
        .await
        .unwrap();

    let (status, body) = app.request("GET", "/api/employees", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"{\"cached\":true}".to_vec());
}

#[tokio::test]
async fn test_failing_cache_does_not_fail_requests() {
    let app = spawn_app_with_cache(Arc::new(FailingCache)).await;

    let (status, created) = app
        .json("POST", "/api/employees", Some(employee_json("ana")))
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, page) = app.json("GET", "/api/employees", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["totalCount"], 1);

    let id = created["data"]["id"].as_i64().unwrap();
    let (status, _) = app.request("DELETE", &format!("/api/employees/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_departments() {
    let app = spawn_app().await;

    let department = serde_json::json!({
        "companyLevel0": "Company",
        "companyLevel1": "Board",
        "companyLevel2": "Management",
        "companyLevel3": "Coordination",
        "companyLevel4": "Area"
    });

    let (status, created) = app
        .json("POST", "/api/departments", Some(department))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["data"]["companyLevel4"], "Area");

    let (status, listed) = app.json("GET", "/api/departments", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed["data"].as_array().unwrap().len(), 1);
    assert_eq!(listed["data"][0]["id"], created["data"]["id"]);
}

#[tokio::test]
async fn test_import_endpoint() {
    let app = spawn_app().await;

    let csv_path =
        std::env::temp_dir().join(format!("pinpeople-api-import-{}.csv", uuid::Uuid::new_v4()));
    let header = (0..32).map(|i| format!("col{i}")).collect::<Vec<_>>().join(";");
    let row = |name: &str| {
        format!(
            "{name};{name}@mail.com;{name}@corp.com;area;analyst;dev;Recife;1 year;female;gen z;A;B;C;D;E;20/01/2022;7;;8;;9;;10;;4;;5;;6;;7;;open"
        )
    };
    std::fs::write(&csv_path, format!("{header}\n{}\n{}\n", row("ana"), row("bia"))).unwrap();

    app.cache
        .set("employees", b"stale".to_vec(), Duration::from_secs(300))
        .await
        .unwrap();

    let (status, summary) = app
        .json(
            "POST",
            "/api/import",
            Some(serde_json::json!({"path": csv_path.display().to_string()})),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["data"]["employeesCreated"], 2);
    assert_eq!(summary["data"]["departmentsCreated"], 1);
    assert_eq!(summary["data"]["locationsCreated"], 1);
    assert_eq!(app.cache.get("employees").await.unwrap(), None);

    let (_, page) = app.json("GET", "/api/employees", None).await;
    assert_eq!(page["totalCount"], 2);
    assert_eq!(page["employees"][0]["openEnps"], "open");

    let (status, body) = app
        .json(
            "POST",
            "/api/import",
            Some(serde_json::json!({"path": "/nonexistent/employees.csv"})),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().starts_with("failed to open file"));

    std::fs::remove_file(&csv_path).ok();
}
