//! In-process stub of the college API for integration tests.
//!
//! Serves the auth endpoints plus the students and faculties collections on
//! an ephemeral port, backed by in-memory state the tests can inspect. The
//! protected routes enforce the bearer contract and record every
//! Authorization header they see, so tests can assert not just outcomes but
//! what actually went over the wire.

use std::collections::HashSet;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, Request, State};
use axum::http::{StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

use collegiate::collegiate_client::Api;
use collegiate::collegiate_config::ApiConfig;
use collegiate::collegiate_models::ids::{FacultyId, StudentId};
use collegiate::collegiate_models::{Faculty, FacultyRequest, Student, StudentRequest};
use collegiate::collegiate_session::{Session, SessionStore};

/// Shared state behind the stub server.
#[derive(Default)]
pub struct StubState {
    pub students: Mutex<Vec<Student>>,
    pub faculties: Mutex<Vec<Faculty>>,
    pub usernames: Mutex<HashSet<String>>,
    next_student_id: AtomicI64,
    next_faculty_id: AtomicI64,
    /// Authorization header (or lack of one) of every request that reached
    /// the protected student routes.
    pub student_auth_headers: Mutex<Vec<Option<String>>>,
}

impl StubState {
    fn seeded() -> Self {
        let state = StubState::default();
        {
            let mut students = state.students.lock().unwrap();
            students.push(sample_student(1, "Avery Martin", "CSE"));
            students.push(sample_student(2, "Noor Khan", "ECE"));
        }
        {
            let mut faculties = state.faculties.lock().unwrap();
            for id in 1..=7 {
                faculties.push(sample_faculty(id));
            }
        }
        state.next_student_id.store(3, Ordering::SeqCst);
        state.next_faculty_id.store(8, Ordering::SeqCst);
        state
    }
}

fn sample_student(id: i64, name: &str, branch: &str) -> Student {
    Student {
        student_id: StudentId::new(id),
        student_name: name.to_string(),
        email: format!("student{id}@college.edu"),
        course: "B.Tech".to_string(),
        branch: branch.to_string(),
        address: "12 College Rd".to_string(),
        phone_number: format!("555010{id}"),
        date_of_birth: NaiveDate::from_ymd_opt(2003, 5, 1).unwrap(),
        department_name: "Computer Science".to_string(),
    }
}

fn sample_faculty(id: i64) -> Faculty {
    Faculty {
        faculty_id: FacultyId::new(id),
        faculty_name: format!("Dr. Faculty {id}"),
        designation: "Professor".to_string(),
        email: format!("faculty{id}@college.edu"),
        phone_number: format!("987654{id:04}"),
        specialization: "Algorithms".to_string(),
    }
}

/// A running stub server.
pub struct StubHandle {
    pub base_url: String,
    pub state: Arc<StubState>,
}

impl StubHandle {
    /// An API handle over a fresh in-memory session (not logged in).
    #[allow(dead_code)]
    pub fn api(&self) -> (Api, Arc<SessionStore>) {
        let session = Arc::new(SessionStore::in_memory());
        let config = ApiConfig {
            base_url: self.base_url.clone(),
            timeout_secs: 5,
        };
        (Api::new(&config, session.clone()).unwrap(), session)
    }

    /// An API handle whose session already carries an admin token.
    #[allow(dead_code)]
    pub fn api_as_admin(&self) -> (Api, Arc<SessionStore>) {
        let (api, session) = self.api();
        session
            .set(&Session::new("token-admin", "ROLE_ADMIN"))
            .unwrap();
        (api, session)
    }
}

/// Start the stub on an ephemeral port.
pub async fn spawn_stub() -> StubHandle {
    let state = Arc::new(StubState::seeded());
    let app = router(state.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    StubHandle {
        base_url: format!("http://{addr}"),
        state,
    }
}

fn router(state: Arc<StubState>) -> Router {
    let protected = Router::new()
        .route("/api/students", get(list_students).post(create_student))
        .route(
            "/api/students/{id}",
            get(get_student).put(update_student).delete(delete_student),
        )
        .route("/api/faculties", get(list_faculties).post(create_faculty))
        .route("/api/faculties/paginated", get(paginated_faculties))
        .route(
            "/api/faculties/{id}",
            get(get_faculty).put(update_faculty).delete(delete_faculty),
        )
        .layer(middleware::from_fn_with_state(state.clone(), require_bearer));

    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/signup", post(signup))
        .merge(protected)
        .with_state(state)
}

async fn require_bearer(
    State(state): State<Arc<StubState>>,
    request: Request,
    next: Next,
) -> Response {
    let header_value = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(String::from);

    if request.uri().path().starts_with("/api/students") {
        state
            .student_auth_headers
            .lock()
            .unwrap()
            .push(header_value.clone());
    }

    match header_value
        .as_deref()
        .and_then(|value| value.strip_prefix("Bearer "))
    {
        Some(token) if token.starts_with("token-") => next.run(request).await,
        _ => rejection(StatusCode::UNAUTHORIZED, "Unauthorized"),
    }
}

fn rejection(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}

#[derive(Deserialize)]
struct LoginBody {
    username: String,
    password: String,
}

async fn login(Json(body): Json<LoginBody>) -> Response {
    // "broken" reproduces a 2xx reply with no token in it
    if body.username == "broken" {
        return Json(json!({ "role": "ROLE_ADMIN" })).into_response();
    }

    let role = match (body.username.as_str(), body.password.as_str()) {
        ("admin", "admin123") => Some("ROLE_ADMIN"),
        ("rao", "faculty123") => Some("ROLE_FACULTY"),
        ("dept", "dept123") => Some("ROLE_DEPARTMENT"),
        ("sam", "student123") => Some("ROLE_STUDENT"),
        ("weird", "weird123") => Some("ROLE_UNKNOWN"),
        _ => None,
    };

    match role {
        Some(role) => Json(json!({
            "token": format!("token-{}", body.username),
            "role": role,
        }))
        .into_response(),
        None => rejection(StatusCode::UNAUTHORIZED, "Bad credentials"),
    }
}

#[derive(Deserialize)]
#[allow(dead_code)]
struct SignupBody {
    username: String,
    name: String,
    phone: String,
    password: String,
    email: String,
    role: String,
}

async fn signup(State(state): State<Arc<StubState>>, Json(body): Json<SignupBody>) -> Response {
    let mut usernames = state.usernames.lock().unwrap();
    if !usernames.insert(body.username.clone()) {
        return rejection(
            StatusCode::BAD_REQUEST,
            "Username already exists (duplicate)",
        );
    }
    "User registered successfully".into_response()
}

async fn list_students(State(state): State<Arc<StubState>>) -> Json<Vec<Student>> {
    Json(state.students.lock().unwrap().clone())
}

fn student_from_draft(id: StudentId, draft: &StudentRequest) -> Student {
    Student {
        student_id: id,
        student_name: draft.student_name.clone(),
        email: draft.email.clone(),
        course: draft.course.clone(),
        branch: draft.branch.clone(),
        address: draft.address.clone(),
        phone_number: draft.phone_number.clone(),
        date_of_birth: draft
            .date_of_birth
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()),
        department_name: format!("Department {}", draft.department_id),
    }
}

async fn create_student(
    State(state): State<Arc<StubState>>,
    Json(draft): Json<StudentRequest>,
) -> Json<Student> {
    let id = state.next_student_id.fetch_add(1, Ordering::SeqCst);
    let student = student_from_draft(StudentId::new(id), &draft);
    state.students.lock().unwrap().push(student.clone());
    Json(student)
}

async fn get_student(State(state): State<Arc<StubState>>, Path(id): Path<i64>) -> Response {
    let students = state.students.lock().unwrap();
    match students
        .iter()
        .find(|student| student.student_id == StudentId::new(id))
    {
        Some(student) => Json(student.clone()).into_response(),
        None => rejection(StatusCode::NOT_FOUND, "Student not found"),
    }
}

async fn update_student(
    State(state): State<Arc<StubState>>,
    Path(id): Path<i64>,
    Json(draft): Json<StudentRequest>,
) -> Response {
    let mut students = state.students.lock().unwrap();
    match students
        .iter_mut()
        .find(|student| student.student_id == StudentId::new(id))
    {
        Some(student) => {
            *student = student_from_draft(StudentId::new(id), &draft);
            Json(student.clone()).into_response()
        }
        None => rejection(StatusCode::NOT_FOUND, "Student not found"),
    }
}

async fn delete_student(State(state): State<Arc<StubState>>, Path(id): Path<i64>) -> StatusCode {
    // Deleting an already-absent student still reports success
    state
        .students
        .lock()
        .unwrap()
        .retain(|student| student.student_id != StudentId::new(id));
    StatusCode::NO_CONTENT
}

async fn list_faculties(State(state): State<Arc<StubState>>) -> Json<Vec<Faculty>> {
    Json(state.faculties.lock().unwrap().clone())
}

fn faculty_from_draft(id: FacultyId, draft: &FacultyRequest) -> Faculty {
    Faculty {
        faculty_id: id,
        faculty_name: draft.faculty_name.clone(),
        designation: draft.designation.clone(),
        email: draft.email.clone(),
        phone_number: draft.phone_number.clone(),
        specialization: draft.specialization.clone(),
    }
}

async fn create_faculty(
    State(state): State<Arc<StubState>>,
    Json(draft): Json<FacultyRequest>,
) -> Json<Faculty> {
    let id = state.next_faculty_id.fetch_add(1, Ordering::SeqCst);
    let faculty = faculty_from_draft(FacultyId::new(id), &draft);
    state.faculties.lock().unwrap().push(faculty.clone());
    Json(faculty)
}

async fn get_faculty(State(state): State<Arc<StubState>>, Path(id): Path<i64>) -> Response {
    let faculties = state.faculties.lock().unwrap();
    match faculties
        .iter()
        .find(|faculty| faculty.faculty_id == FacultyId::new(id))
    {
        Some(faculty) => Json(faculty.clone()).into_response(),
        None => rejection(StatusCode::NOT_FOUND, "Faculty not found"),
    }
}

async fn update_faculty(
    State(state): State<Arc<StubState>>,
    Path(id): Path<i64>,
    Json(draft): Json<FacultyRequest>,
) -> Response {
    let mut faculties = state.faculties.lock().unwrap();
    match faculties
        .iter_mut()
        .find(|faculty| faculty.faculty_id == FacultyId::new(id))
    {
        Some(faculty) => {
            *faculty = faculty_from_draft(FacultyId::new(id), &draft);
            Json(faculty.clone()).into_response()
        }
        None => rejection(StatusCode::NOT_FOUND, "Faculty not found"),
    }
}

async fn delete_faculty(State(state): State<Arc<StubState>>, Path(id): Path<i64>) -> StatusCode {
    state
        .faculties
        .lock()
        .unwrap()
        .retain(|faculty| faculty.faculty_id != FacultyId::new(id));
    StatusCode::NO_CONTENT
}

#[derive(Deserialize)]
struct PageParams {
    page: Option<i64>,
    size: Option<i64>,
    #[serde(rename = "sortBy")]
    #[allow(dead_code)]
    sort_by: Option<String>,
    direction: Option<String>,
}

async fn paginated_faculties(
    State(state): State<Arc<StubState>>,
    Query(params): Query<PageParams>,
) -> Json<serde_json::Value> {
    let mut faculties = state.faculties.lock().unwrap().clone();
    faculties.sort_by_key(|faculty| faculty.faculty_id);
    if params.direction.as_deref() == Some("desc") {
        faculties.reverse();
    }

    let size = params.size.unwrap_or(5).max(1);
    let page = params.page.unwrap_or(0).max(0);
    let total = faculties.len() as i64;
    let total_pages = (total + size - 1) / size;
    let content: Vec<Faculty> = faculties
        .into_iter()
        .skip((page * size) as usize)
        .take(size as usize)
        .collect();

    Json(json!({
        "content": content,
        "totalElements": total,
        "totalPages": total_pages,
        "number": page,
    }))
}
