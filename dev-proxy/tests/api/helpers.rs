use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use dev_proxy::{Config, build, telemetry};
use serde_json::json;
use std::net::TcpListener;
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;

pub struct TestApp {
    /// Address of the proxy, e.g. `http://127.0.0.1:41234`
    pub address: String,
    /// Address the proxy forwards to
    pub backend_url: String,
    /// Typed client pointed at the proxy
    pub client: payloads::APIClient,
    /// Raw client for checking headers
    pub http: reqwest::Client,
}

/// Spawn a stub backend and a proxy in front of it.
pub async fn spawn_app() -> TestApp {
    let backend_url = spawn_backend();
    spawn_proxy(backend_url).await
}

/// Spawn a proxy whose backend is not listening.
pub async fn spawn_app_without_backend() -> TestApp {
    // Bind and release a port so nothing answers on it
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    spawn_proxy(format!("http://127.0.0.1:{port}")).await
}

async fn spawn_proxy(backend_url: String) -> TestApp {
    let subscriber = telemetry::get_subscriber("error".into());
    let _ = LogTracer::init();
    let _ = subscriber.try_init();

    let mut config = Config {
        ip: "127.0.0.1".into(),
        port: 0,
        backend_url: backend_url.clone(),
        timeout_secs: 5,
    };
    let server = build(&mut config).unwrap();
    tokio::spawn(server);

    let http = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .cookie_store(true)
        .build()
        .unwrap();
    let address = format!("http://127.0.0.1:{}", config.port);

    TestApp {
        address: address.clone(),
        backend_url,
        client: payloads::APIClient {
            address,
            inner_client: http.clone(),
        },
        http,
    }
}

/// Start the stub backend, returning its base URL.
fn spawn_backend() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let server = HttpServer::new(|| {
        App::new()
            .route("/health", web::get().to(|| async { "ok" }))
            .route("/api/echo", web::to(echo))
            .route("/api/v1/users/login", web::post().to(login))
            .route("/api/v1/users/me", web::get().to(me))
            .route("/api/category", web::get().to(list_categories))
            .route("/api/category", web::post().to(create_category))
            .route("/api/category", web::delete().to(delete_category))
            .route("/api/category/{public_id}", web::get().to(get_category))
            .route("/api/category/{public_id}", web::put().to(update_category))
            .route("/api/files/category/{id}", web::get().to(list_files))
            .route("/api/files/upload", web::post().to(upload))
            .route("/api/files/{id}", web::delete().to(delete_file))
            .route("/api/users/{id}/location", web::get().to(get_location))
            .route("/api/users/{id}/location", web::put().to(put_location))
            .route("/api/posts/introduce", web::get().to(get_introduce))
            .route("/api/posts/introduce", web::post().to(create_introduce))
            .route("/api/posts/introduce", web::put().to(update_introduce))
    })
    .listen(listener)
    .unwrap()
    .run();
    tokio::spawn(server);
    format!("http://127.0.0.1:{port}")
}

fn header(req: &HttpRequest, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

async fn echo(req: HttpRequest, body: web::Bytes) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "method": req.method().as_str(),
        "query": req.query_string(),
        "contentType": header(&req, "content-type"),
        "authorization": header(&req, "authorization"),
        "cookie": header(&req, "cookie"),
        "body": String::from_utf8_lossy(&body),
    }))
}

async fn login(body: web::Json<serde_json::Value>) -> HttpResponse {
    if body["password"] == "correct-horse-1" {
        HttpResponse::Ok()
            .append_header(("set-cookie", "session=ok; Path=/"))
            .finish()
    } else {
        HttpResponse::Unauthorized().body("아이디 또는 비밀번호가 올바르지 않습니다")
    }
}

async fn me(req: HttpRequest) -> HttpResponse {
    let signed_in = header(&req, "cookie")
        .is_some_and(|cookie| cookie.contains("session=ok"));
    if !signed_in {
        return HttpResponse::Unauthorized().finish();
    }
    HttpResponse::Ok().json(json!({
        "id": 5,
        "loginId": "alice",
        "nickname": "앨리스",
        "email": "alice@example.com",
        "imageUrl": null,
        "role": "USER"
    }))
}

async fn list_categories(req: HttpRequest) -> HttpResponse {
    match req.query_string() {
        "userId=5" => {}
        "userId=500" => {
            return HttpResponse::InternalServerError().body("database down");
        }
        _ => return HttpResponse::Ok().json(json!([])),
    }
    HttpResponse::Ok().json(json!([
        {"id": 1, "publicId": "p-1", "categoryTitle": "프로젝트",
         "createdAt": "2024-03-05T14:07:00", "updatedAt": null},
        {"id": 2, "publicId": "p-2", "categoryTitle": "자료",
         "createdAt": null, "updatedAt": null}
    ]))
}

async fn create_category(body: web::Json<serde_json::Value>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "id": 3,
        "publicId": "p-3",
        "categoryTitle": body["categoryTitle"],
    }))
}

async fn get_category(path: web::Path<String>) -> HttpResponse {
    if path.as_str() != "p-1" {
        return HttpResponse::NotFound().body("카테고리를 찾을 수 없습니다");
    }
    HttpResponse::Ok().json(json!({
        "id": 1, "publicId": "p-1", "categoryTitle": "프로젝트"
    }))
}

async fn update_category(
    path: web::Path<String>,
    body: web::Json<serde_json::Value>,
) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "id": 1,
        "publicId": path.into_inner(),
        "categoryTitle": body["categoryTitle"],
    }))
}

async fn delete_category(req: HttpRequest) -> HttpResponse {
    if req.query_string() == "categoryId=1" {
        HttpResponse::Ok().body("카테고리가 삭제되었습니다")
    } else {
        HttpResponse::NotFound().body("카테고리를 찾을 수 없습니다")
    }
}

async fn list_files(path: web::Path<i64>) -> HttpResponse {
    if *path != 1 {
        return HttpResponse::Ok().json(json!([]));
    }
    HttpResponse::Ok().json(json!([
        {"id": "10", "name": "diagram.png", "title": "diagram.png",
         "url": "https://files.example/diagram.png",
         "uploadDate": "2024-03-05T14:07:00", "size": 2048},
        {"id": "11", "name": "notes.pdf", "url": "https://files.example/notes.pdf"}
    ]))
}

async fn upload(req: HttpRequest, body: web::Bytes) -> HttpResponse {
    let is_multipart = header(&req, "content-type")
        .is_some_and(|ct| ct.starts_with("multipart/form-data"));
    let text = String::from_utf8_lossy(&body);
    if is_multipart && text.contains("categoryId") && text.contains("report.pdf")
    {
        HttpResponse::Ok().body("https://files.example/report.pdf")
    } else {
        HttpResponse::BadRequest().body("multipart form expected")
    }
}

async fn delete_file(path: web::Path<String>) -> HttpResponse {
    if path.as_str() == "missing" {
        HttpResponse::NotFound().body("파일을 찾을 수 없습니다")
    } else {
        HttpResponse::Ok().finish()
    }
}

async fn get_location(path: web::Path<i64>) -> HttpResponse {
    match *path {
        5 => {}
        // Address set, contact columns never filled in
        6 => {
            return HttpResponse::Ok().json(json!({
                "lat": 37.5, "lng": 127.0, "address": "서울",
                "email": null, "phoneNumber": null
            }));
        }
        _ => return HttpResponse::NotFound().body("위치 정보가 없습니다"),
    }
    HttpResponse::Ok().json(json!({
        "lat": 37.5665, "lng": 126.978, "address": "서울특별시 중구",
        "email": "alice@example.com", "phoneNumber": "010-1234-5678"
    }))
}

async fn put_location(body: web::Json<serde_json::Value>) -> HttpResponse {
    HttpResponse::Ok().json(body.into_inner())
}

/// Category 1 has an intro, category 2 has none, anything else is unknown.
async fn get_introduce(req: HttpRequest) -> HttpResponse {
    match req.query_string() {
        "categoryId=1" => HttpResponse::Ok().json(json!({
            "title": "프로젝트", "content": "## 프로젝트 개요"
        })),
        "categoryId=2" => {
            HttpResponse::Ok().json(json!({"title": null, "content": null}))
        }
        _ => HttpResponse::NotFound().body("카테고리를 찾을 수 없습니다"),
    }
}

async fn create_introduce(
    req: HttpRequest,
    body: web::Json<serde_json::Value>,
) -> HttpResponse {
    if req.query_string() == "categoryId=1" {
        return HttpResponse::Conflict().body("이미 소개글이 있습니다");
    }
    if body["title"].is_string() && body["content"].is_string() {
        HttpResponse::Ok().body("생성 완료")
    } else {
        HttpResponse::BadRequest().body("title and content expected")
    }
}

async fn update_introduce(
    req: HttpRequest,
    body: web::Json<serde_json::Value>,
) -> HttpResponse {
    if req.query_string() != "categoryId=1" {
        return HttpResponse::NotFound().body("게시글을 찾을 수 없습니다");
    }
    if body["content"].is_string() {
        HttpResponse::Ok().body("수정 완료")
    } else {
        HttpResponse::BadRequest().body("content expected")
    }
}
