use async_trait::async_trait;
use lolli_cli::collab::{MetricsProvider, MetricsSnapshot};
use lolli_cli::collab::metrics::{CoreLoad, MemoryUsage};
use lolli_cli::{routes, MonitorState};
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use tokio::net::TcpListener;

/// Canned provider so tests never touch the host
struct FixedProvider {
    fail: bool,
}

#[async_trait]
impl MetricsProvider for FixedProvider {
    async fn snapshot(&self) -> anyhow::Result<MetricsSnapshot> {
        if self.fail {
            anyhow::bail!("telemetry source unavailable");
        }
        Ok(MetricsSnapshot {
            cpu_stats: vec![CoreLoad {
                core: 0,
                usage: 12.5,
            }],
            ram_stats: MemoryUsage {
                total: 2048.0,
                used: 1024.0,
            },
            disk_stats: vec![],
            process_list: vec![],
            swap_usage: MemoryUsage {
                total: 0.0,
                used: 0.0,
            },
        })
    }
}

async fn spawn_monitor(password: &str, fail: bool) -> String {
    let state = MonitorState::new(password.to_string(), Arc::new(FixedProvider { fail }));
    let app = routes::monitor_router(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn monitor_challenges_on_missing_and_wrong_credentials() {
    let base_url = spawn_monitor("secret", false).await;
    let client = Client::new();

    let res = client.get(format!("{base_url}/")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert!(res.headers().contains_key("WWW-Authenticate"));

    // Unlike the file server, a wrong password re-challenges with 401 too.
    let res = client
        .get(format!("{base_url}/"))
        .basic_auth("admin", Some("nope"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert!(res.headers().contains_key("WWW-Authenticate"));
}

#[tokio::test]
async fn monitor_serves_dashboard_and_snapshot_when_authorized() {
    let base_url = spawn_monitor("secret", false).await;
    let client = Client::new();

    let res = client
        .get(format!("{base_url}/"))
        .basic_auth("admin", Some("secret"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.text().await.unwrap().contains("System Monitor"));

    let res = client
        .get(format!("{base_url}/api/systeminfo"))
        .basic_auth("admin", Some("secret"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["cpuStats"][0]["usage"], 12.5);
    assert_eq!(body["ramStats"]["total"], 2048.0);
    assert!(body.get("swapUsage").is_some());
}

#[tokio::test]
async fn provider_failure_is_a_contained_server_error() {
    let base_url = spawn_monitor("secret", true).await;
    let client = Client::new();

    let res = client
        .get(format!("{base_url}/api/systeminfo"))
        .basic_auth("admin", Some("secret"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

    // The service keeps serving after a collaborator failure.
    let res = client
        .get(format!("{base_url}/"))
        .basic_auth("admin", Some("secret"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}
