//! 인증 API 호출 계층.
//!
//! `/signin`, `/signup` 두 공개 엔드포인트만 다룹니다.
//! 트레이트로 분리해 테스트에서는 네트워크 없이 목(mock) 구현을 꽂습니다.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// 서버가 돌려준 에러 메시지 (`{"error": "..."}` 본문)
    #[error("{0}")]
    Server(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// `POST /signin` 성공 응답에서 클라이언트가 쓰는 필드들.
#[derive(Debug, Clone, Deserialize)]
pub struct SignInResponse {
    pub token: String,
    pub id: String,
    pub name: String,
    pub email: String,
}

#[allow(async_fn_in_trait)]
pub trait AuthApi {
    async fn sign_in(&self, email: &str, password: &str) -> Result<SignInResponse, ApiError>;
    async fn sign_up(&self, name: &str, email: &str, password: &str) -> Result<(), ApiError>;
}

/// reqwest 기반 구현. `base_url`은 끝에 슬래시 없는 서버 주소입니다.
pub struct HttpAuthApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpAuthApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl AuthApi for HttpAuthApi {
    async fn sign_in(&self, email: &str, password: &str) -> Result<SignInResponse, ApiError> {
        let response = self
            .http
            .post(format!("{}/signin", self.base_url))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(ApiError::Server(error_message(response).await))
        }
    }

    async fn sign_up(&self, name: &str, email: &str, password: &str) -> Result<(), ApiError> {
        let response = self
            .http
            .post(format!("{}/signup", self.base_url))
            .json(&serde_json::json!({
                "name": name,
                "email": email,
                "password": password,
            }))
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(ApiError::Server(error_message(response).await))
        }
    }
}

/// 에러 응답 본문에서 메시지를 뽑습니다. 본문이 JSON이 아니면 상태 코드로 대신합니다.
async fn error_message(response: reqwest::Response) -> String {
    let fallback = format!("request failed with status {}", response.status());
    match response.json::<serde_json::Value>().await {
        Ok(body) => body["error"]
            .as_str()
            .map(str::to_string)
            .unwrap_or(fallback),
        Err(_) => fallback,
    }
}
