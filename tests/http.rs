use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct OverviewResponse {
    today: String,
    start_date: String,
    days_passed: i64,
    current_streak: u32,
}

#[derive(Debug, Deserialize)]
struct TaskView {
    task: String,
    priority: String,
    done: bool,
}

#[derive(Debug, Deserialize)]
struct TodayTasksResponse {
    date: String,
    tasks: Vec<TaskView>,
    completed: bool,
}

#[derive(Debug, Deserialize)]
struct SegmentView {
    segment: String,
    done: usize,
    total: usize,
    pct: u8,
}

#[derive(Debug, Deserialize)]
struct MainGoalView {
    goal: String,
    progress: u8,
}

#[derive(Debug, Deserialize)]
struct GoalsResponse {
    segments: Vec<SegmentView>,
    main_goal: MainGoalView,
}

#[derive(Debug, Deserialize)]
struct BreakStreakResponse {
    broken: bool,
    date: Option<String>,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("habit_http_{}_{}.json", std::process::id(), nanos));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/overview")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_path = unique_data_path();
    let child = Command::new(env!("CARGO_BIN_EXE_habit_tracker"))
        .env("PORT", port.to_string())
        .env("APP_DATA_PATH", data_path)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn get_today(client: &Client, base_url: &str) -> TodayTasksResponse {
    client
        .get(format!("{base_url}/api/tasks/today"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_overview_reports_fresh_document() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let overview: OverviewResponse = client
        .get(format!("{}/api/overview", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert!(!overview.today.is_empty());
    assert_eq!(overview.start_date, overview.today);
    assert_eq!(overview.days_passed, 1);
}

#[tokio::test]
async fn http_task_lifecycle_drives_day_completion() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = get_today(&client, &server.base_url).await;

    let added: TodayTasksResponse = client
        .post(format!("{}/api/tasks", server.base_url))
        .json(&serde_json::json!({ "name": "morning stretch", "priority": "High" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(added.tasks.len(), before.tasks.len() + 1);
    let index = added.tasks.len() - 1;
    let task = &added.tasks[index];
    assert_eq!(task.task, "morning stretch");
    assert_eq!(task.priority, "High");
    assert!(!task.done);
    assert!(!added.completed);
    assert!(!added.date.is_empty());

    // completing every task completes the day
    for i in 0..added.tasks.len() {
        let response = client
            .post(format!("{}/api/tasks/done", server.base_url))
            .json(&serde_json::json!({ "index": i, "done": true }))
            .send()
            .await
            .unwrap();
        assert!(response.status().is_success());
    }

    let after = get_today(&client, &server.base_url).await;
    assert!(after.completed);

    let overview: OverviewResponse = client
        .get(format!("{}/api/overview", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(overview.current_streak >= 1);
}

#[tokio::test]
async fn http_rejects_bad_priority_and_stale_index() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/tasks", server.base_url))
        .json(&serde_json::json!({ "name": "x", "priority": "Urgent" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);

    let response = client
        .post(format!("{}/api/tasks/done", server.base_url))
        .json(&serde_json::json!({ "index": 9999, "done": true }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_goals_and_main_goal_round_trip() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let goals: GoalsResponse = client
        .post(format!("{}/api/goals", server.base_url))
        .json(&serde_json::json!({ "segment": "3 Months", "goal": "read four books" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let segment = goals
        .segments
        .iter()
        .find(|segment| segment.segment == "3_months")
        .expect("missing 3_months segment");
    assert!(segment.total >= 1);

    let index = segment.total - 1;
    let goals: GoalsResponse = client
        .post(format!("{}/api/goals/done", server.base_url))
        .json(&serde_json::json!({ "segment": "3_months", "index": index, "done": true }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let segment = goals
        .segments
        .iter()
        .find(|segment| segment.segment == "3_months")
        .unwrap();
    assert!(segment.done >= 1);
    assert!(segment.pct > 0);

    // out-of-range progress is clamped, not rejected
    let goals: GoalsResponse = client
        .post(format!("{}/api/main-goal", server.base_url))
        .json(&serde_json::json!({ "goal": "run a marathon", "progress": 150 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(goals.main_goal.goal, "run a marathon");
    assert_eq!(goals.main_goal.progress, 100);
}

#[tokio::test]
async fn http_streak_reset_and_break() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    // a completed day to break
    client
        .post(format!("{}/api/tasks", server.base_url))
        .json(&serde_json::json!({ "name": "hydrate", "priority": "Low" }))
        .send()
        .await
        .unwrap();
    let today = get_today(&client, &server.base_url).await;
    for i in 0..today.tasks.len() {
        client
            .post(format!("{}/api/tasks/done", server.base_url))
            .json(&serde_json::json!({ "index": i, "done": true }))
            .send()
            .await
            .unwrap();
    }

    let broken: BreakStreakResponse = client
        .post(format!("{}/api/streak/break", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(broken.broken);
    assert!(broken.date.is_some());

    // nothing left to break
    let broken: BreakStreakResponse = client
        .post(format!("{}/api/streak/break", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(!broken.broken);
    assert!(broken.date.is_none());

    let overview: OverviewResponse = client
        .post(format!("{}/api/streak/reset", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(overview.current_streak, 0);
}
