use actix_web::http::StatusCode;
use actix_web::{
    HttpRequest, HttpResponse, ResponseError, get, http::header, web,
};
use serde_json::json;
use std::time::Duration;

use crate::telemetry::log_error;

/// Request headers passed through to the backend.
const FORWARDED_REQUEST_HEADERS: [&str; 3] =
    ["content-type", "authorization", "cookie"];

/// The backend every `/api` request is forwarded to.
pub struct Upstream {
    pub backend_url: String,
    pub client: reqwest::Client,
}

impl Upstream {
    pub fn new(
        backend_url: String,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Upstream {
            backend_url,
            client,
        })
    }

    /// `/api/{path}?{query}` on the backend. A path that already starts with
    /// `api/` is not prefixed twice.
    pub fn target_url(&self, path: &str, query: &str) -> String {
        let path = path.strip_prefix("api/").unwrap_or(path);
        let mut url = format!("{}/api/{path}", self.backend_url);
        if !query.is_empty() {
            url.push('?');
            url.push_str(query);
        }
        url
    }
}

#[derive(Debug, thiserror::Error)]
#[error("forwarding to {target_url} failed")]
pub struct ProxyError {
    pub target_url: String,
    #[source]
    pub source: reqwest::Error,
}

impl ProxyError {
    fn describe(&self) -> (&'static str, &'static str) {
        if self.source.is_timeout() {
            ("Request Timeout", "API 요청이 시간 초과되었습니다")
        } else if self.source.is_connect() {
            ("Connection Refused", "백엔드 서버에 연결할 수 없습니다")
        } else {
            ("Bad Gateway", "백엔드 응답을 처리할 수 없습니다")
        }
    }
}

impl ResponseError for ProxyError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_GATEWAY
    }

    fn error_response(&self) -> HttpResponse {
        let (error, message) = self.describe();
        HttpResponse::build(self.status_code()).json(json!({
            "error": error,
            "message": message,
            "targetUrl": self.target_url,
            "timestamp": jiff::Timestamp::now().to_string(),
        }))
    }
}

/// Forward a request to the backend and relay its answer.
pub async fn forward(
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Bytes,
    upstream: web::Data<Upstream>,
) -> Result<HttpResponse, ProxyError> {
    let target_url = upstream.target_url(&path, req.query_string());
    tracing::info!("{} {} -> {target_url}", req.method(), req.uri());

    let method = reqwest::Method::from_bytes(req.method().as_str().as_bytes())
        .unwrap_or(reqwest::Method::GET);
    let mut request = upstream.client.request(method, &target_url);
    for name in FORWARDED_REQUEST_HEADERS {
        if let Some(value) = req.headers().get(name) {
            request = request.header(name, value.as_bytes());
        }
    }
    if !body.is_empty() {
        request = request.body(body.to_vec());
    }

    let response = request.send().await.map_err(|source| {
        let e = ProxyError {
            target_url: target_url.clone(),
            source,
        };
        log_error(anyhow::anyhow!("{e}: {}", e.source));
        e
    })?;

    let status = StatusCode::from_u16(response.status().as_u16())
        .unwrap_or(StatusCode::BAD_GATEWAY);
    tracing::debug!("{target_url} answered {status}");

    let mut relayed = HttpResponse::build(status);
    if let Some(content_type) = response.headers().get("content-type") {
        relayed.insert_header((header::CONTENT_TYPE, content_type.as_bytes()));
    }
    for cookie in response.headers().get_all("set-cookie") {
        relayed.append_header((header::SET_COOKIE, cookie.as_bytes()));
    }

    let body = response.bytes().await.map_err(|source| ProxyError {
        target_url,
        source,
    })?;
    Ok(relayed.body(body.to_vec()))
}

/// Reports whether the backend answers at all.
#[get("/health")]
pub async fn health(upstream: web::Data<Upstream>) -> HttpResponse {
    let url = format!("{}/health", upstream.backend_url);
    match upstream
        .client
        .get(&url)
        .timeout(Duration::from_secs(5))
        .send()
        .await
    {
        Ok(response) => HttpResponse::Ok().json(json!({
            "status": "ok",
            "backend": upstream.backend_url,
            "backendStatus": response.status().as_u16(),
        })),
        Err(e) => {
            tracing::warn!("backend health check failed: {e}");
            HttpResponse::ServiceUnavailable().json(json!({
                "status": "unavailable",
                "backend": upstream.backend_url,
                "message": "백엔드 서버가 일시적으로 사용할 수 없습니다.",
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upstream() -> Upstream {
        Upstream::new("http://localhost:8080".into(), Duration::from_secs(1))
            .unwrap()
    }

    #[test]
    fn target_url_keeps_query_and_prefix() {
        let upstream = upstream();
        assert_eq!(
            upstream.target_url("category", "userId=5"),
            "http://localhost:8080/api/category?userId=5"
        );
        assert_eq!(
            upstream.target_url("users/5/location", ""),
            "http://localhost:8080/api/users/5/location"
        );
        assert_eq!(
            upstream.target_url("api/v1/users/me", ""),
            "http://localhost:8080/api/v1/users/me"
        );
    }
}
