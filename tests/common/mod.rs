#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use actix_web::http::StatusCode;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use serde_json::{Value, json};

use edu_admin_client::client::ApiClient;
use edu_admin_client::config::ApiConfig;
use edu_admin_client::notify::RecordingNotifier;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub cookie: Option<String>,
    pub body: Option<Value>,
}

#[derive(Debug, Default)]
pub struct FakeState {
    pub courses: Vec<Value>,
    pub students: Vec<Value>,
    pub teachers: Vec<Value>,
    pub teacher_courses: HashMap<String, Vec<Value>>,
    pub student_courses: HashMap<String, Vec<Value>>,
    pub course_grades: Vec<Value>,
    pub current_user: Value,
    pub failing: HashSet<String>,
    pub html: HashSet<String>,
    pub requests: Vec<RecordedRequest>,
}

impl FakeState {
    pub fn seeded() -> Self {
        Self {
            courses: vec![
                json!({"id": 1, "name": "Math", "learn_time": "48", "credit": 3.0, "times": "Mon 1-2"}),
                json!({"id": 2, "name": "Physics", "learn_time": "32", "credit": 2.5}),
            ],
            students: vec![
                json!({"student_id": "S1", "name": "alice", "enrollment_year": 2023}),
                json!({"student_id": "S42", "name": "bob", "enrollment_year": 2024}),
            ],
            teachers: vec![
                json!({"teacher_id": "T1", "name": "Wang"}),
                json!({"teacher_id": "T2", "name": "Li"}),
            ],
            course_grades: vec![json!({
                "id": 1,
                "name": "Math",
                "students": [
                    {"name": "alice", "student_id": "S1", "usual_grade": 90.0, "midterm_grade": 85.5, "final_grade": 0},
                    {"name": "bob", "student_id": "S42"}
                ]
            })],
            current_user: json!({"username": "bob"}),
            ..Default::default()
        }
    }
}

fn envelope(status: StatusCode, success: bool, message: &str, data: Option<Value>) -> HttpResponse {
    let mut body = json!({"success": success, "message": message});
    if let Some(data) = data {
        body["data"] = data;
    }
    HttpResponse::build(status).json(body)
}

async fn handle(req: HttpRequest, body: web::Bytes, state: web::Data<Mutex<FakeState>>) -> HttpResponse {
    let method = req.method().as_str().to_string();
    let path = req
        .path()
        .strip_prefix("/api")
        .unwrap_or(req.path())
        .to_string();
    let cookie = req
        .headers()
        .get("cookie")
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let body: Option<Value> = serde_json::from_slice(&body).ok();

    let mut state = state.lock().expect("fake state");
    state.requests.push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        cookie,
        body: body.clone(),
    });

    if state.html.contains(&path) {
        return HttpResponse::BadGateway()
            .content_type("text/html")
            .body("<html><body>Bad Gateway</body></html>");
    }
    if state.failing.contains(&path) {
        return envelope(
            StatusCode::INTERNAL_SERVER_ERROR,
            false,
            &format!("boom on {path}"),
            None,
        );
    }

    let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();
    match (method.as_str(), segments.as_slice()) {
        ("GET", ["courses"]) => envelope(StatusCode::OK, true, "ok", Some(json!(state.courses))),
        ("GET", ["students"]) => envelope(StatusCode::OK, true, "ok", Some(json!(state.students))),
        ("GET", ["teachers"]) => envelope(StatusCode::OK, true, "ok", Some(json!(state.teachers))),
        ("GET", ["course-grades"]) => {
            envelope(StatusCode::OK, true, "ok", Some(json!(state.course_grades)))
        }
        ("GET", ["current-user"]) => {
            envelope(StatusCode::OK, true, "ok", Some(state.current_user.clone()))
        }
        ("GET", ["teachers", id, "courses"]) => {
            let courses = state.teacher_courses.get(*id).cloned().unwrap_or_default();
            envelope(StatusCode::OK, true, "ok", Some(json!(courses)))
        }
        ("GET", ["students", id, "courses"]) => {
            let courses = state.student_courses.get(*id).cloned().unwrap_or_default();
            envelope(StatusCode::OK, true, "ok", Some(json!(courses)))
        }
        ("PUT", ["teachers", id]) => {
            let id = id.to_string();
            let name = body
                .as_ref()
                .and_then(|b| b.get("name"))
                .cloned()
                .unwrap_or(Value::Null);
            let mut updated = None;
            for teacher in state.teachers.iter_mut() {
                if teacher["teacher_id"] == id.as_str() {
                    teacher["name"] = name.clone();
                    updated = Some(teacher.clone());
                }
            }
            match updated {
                Some(teacher) => envelope(StatusCode::OK, true, "Teacher updated", Some(teacher)),
                None => envelope(StatusCode::NOT_FOUND, false, "Teacher not found", None),
            }
        }
        ("POST", _) => envelope(StatusCode::CREATED, true, "Created", Some(json!({"id": 99}))),
        ("PUT", _) => envelope(StatusCode::OK, true, "Updated", body),
        ("DELETE", _) => envelope(StatusCode::OK, true, "Deleted", None),
        _ => envelope(StatusCode::NOT_FOUND, false, "Not found", None),
    }
}

pub struct FakeServer {
    pub state: Arc<Mutex<FakeState>>,
    pub addr: SocketAddr,
}

impl FakeServer {
    pub async fn start(state: FakeState) -> Self {
        let state = Arc::new(Mutex::new(state));
        let data = web::Data::from(state.clone());
        let server = HttpServer::new(move || {
            App::new()
                .app_data(data.clone())
                .default_service(web::to(handle))
        })
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))
        .expect("bind fake server");
        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());
        Self { state, addr }
    }

    pub fn config(&self) -> ApiConfig {
        ApiConfig::for_host(format!("127.0.0.1:{}", self.addr.port()))
    }

    pub fn client(&self) -> (Arc<ApiClient>, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::new());
        let client = ApiClient::new(&self.config(), notifier.clone()).expect("client");
        (Arc::new(client), notifier)
    }

    pub fn fail(&self, path: &str) {
        self.state.lock().expect("fake state").failing.insert(path.to_string());
    }

    pub fn serve_html(&self, path: &str) {
        self.state.lock().expect("fake state").html.insert(path.to_string());
    }

    pub fn update(&self, f: impl FnOnce(&mut FakeState)) {
        f(&mut self.state.lock().expect("fake state"));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().expect("fake state").requests.clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests().pop().expect("at least one request")
    }

    pub fn clear_requests(&self) {
        self.state.lock().expect("fake state").requests.clear();
    }
}
