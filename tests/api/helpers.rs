use std::sync::LazyLock;

use reqwest::{Method, Response, StatusCode};
use reqres_mock::{
    configuration::{TelemetrySettings, get_configuration},
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
};
use serde_json::Value;

pub const REGISTERED_EMAIL: &str = "eve.holt@reqres.in";
pub const TOKEN: &str = "QpwL5tke4Pnpja7X4";
pub const NAMES: [&str; 3] = ["Ivan", "Petr", "Jon"];
pub const JOBS: [&str; 3] = ["QA_Jun", "QA_Mid", "QA_Sen"];

static TRACING: LazyLock<()> = LazyLock::new(|| {
    let settings = TelemetrySettings {
        service_name: "test".into(),
        log_filter: "info".into(),
        otlp_endpoint: None,
    };
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(&settings, std::io::stdout).expect("subscriber");
        init_subscriber(subscriber).expect("init subscriber");
    } else {
        let subscriber = get_subscriber(&settings, std::io::sink).expect("subscriber");
        init_subscriber(subscriber).expect("init subscriber");
    }
});

/// The server under test: a freshly spawned mock, or whatever
/// `REQRES_BASE_URL` points at (e.g. `https://reqres.in`).
pub struct TestTarget {
    pub base_url: String,
    client: reqwest::Client,
    api_key: Option<String>,
}

pub async fn spawn_app() -> TestTarget {
    LazyLock::force(&TRACING);

    let client = reqwest::Client::new();
    let api_key = std::env::var("REQRES_API_KEY").ok();

    if let Ok(base_url) = std::env::var("REQRES_BASE_URL") {
        return TestTarget {
            base_url: base_url.trim_end_matches('/').to_owned(),
            client,
            api_key,
        };
    }

    let mut settings = get_configuration().expect("Failed to read configuration");
    settings.application.host = "127.0.0.1".into();
    settings.application.port = 0;

    let application = Application::build(settings)
        .await
        .expect("Failed to build application");
    let port = application.port();
    tokio::spawn(application.run_until_stopped());

    TestTarget {
        base_url: format!("http://127.0.0.1:{port}"),
        client,
        api_key,
    }
}

impl TestTarget {
    pub async fn send(&self, method: Method, endpoint: &str, payload: Option<&Value>) -> Response {
        let url = format!("{}{}", self.base_url, endpoint);
        let mut request = self.client.request(method.clone(), &url);
        if let Some(payload) = payload {
            request = request.json(payload);
        }
        if let Some(key) = &self.api_key {
            request = request.header("x-api-key", key);
        }

        let response = request
            .send()
            .await
            .unwrap_or_else(|e| panic!("{method} {url} failed: {e}"));
        tracing::info!(%method, %url, status = %response.status(), "Request sent");
        response
    }

    pub async fn get(&self, endpoint: &str) -> Response {
        self.send(Method::GET, endpoint, None).await
    }

    pub async fn post(&self, endpoint: &str, payload: &Value) -> Response {
        self.send(Method::POST, endpoint, Some(payload)).await
    }
}

/// Asserts the status and returns the JSON body, if there is one.
pub async fn check_response(response: Response, expected: StatusCode) -> Value {
    let status = response.status();
    let text = response.text().await.expect("Failed to read body");
    assert_eq!(
        status, expected,
        "expected status {expected}, got {status}. Body: {text}"
    );
    if text.is_empty() {
        Value::Null
    } else {
        serde_json::from_str(&text).unwrap_or_else(|e| panic!("body is not JSON ({e}): {text}"))
    }
}

pub fn random_user_ids(count: usize) -> Vec<u32> {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    (0..count).map(|_| rng.gen_range(1..=100)).collect()
}
