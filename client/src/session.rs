//! # 클라이언트 세션 상태 머신
//!
//! 앱이 기억하는 로그인 상태는 둘뿐입니다:
//! - `Anonymous`: 토큰 없음. 게스트 모드로 동작.
//! - `Authenticated`: 유효한 토큰 보유. 디코딩한 신원 정보 캐시.
//!
//! 앱 시작 시 저장소의 토큰을 로컬에서 디코딩해 만료를 검사합니다.
//! 만료됐거나 깨진 토큰은 즉시 버리고 Anonymous로 돌아갑니다.
//! 서명 검증은 하지 않습니다 — 비밀키는 서버에만 있고,
//! 클라이언트가 토큰을 신뢰해도 서버가 요청마다 다시 검증합니다.

use chrono::Utc;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::{ApiError, AuthApi};
use crate::storage::KeyValueStorage;

/// 저장소에서 토큰을 보관하는 키
pub const TOKEN_KEY: &str = "token";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    pub sub: String, // user id
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticated(UserProfile),
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Api(#[from] ApiError),

    /// 서버 응답의 토큰을 디코딩할 수 없음
    #[error("server returned a malformed token")]
    MalformedToken,
}

pub struct SessionManager<S, A> {
    storage: S,
    api: A,
    token: Option<String>,
    state: SessionState,
}

impl<S: KeyValueStorage, A: AuthApi> SessionManager<S, A> {
    /// 저장된 토큰이 있으면 검사한 뒤 시작 상태를 결정합니다.
    pub fn new(storage: S, api: A) -> Self {
        let mut manager = Self {
            storage,
            api,
            token: None,
            state: SessionState::Anonymous,
        };
        manager.restore();
        manager
    }

    fn restore(&mut self) {
        let Some(token) = self.storage.get(TOKEN_KEY) else {
            return;
        };

        match decode_claims(&token) {
            Ok(claims) if claims.exp > Utc::now().timestamp() => {
                self.state = SessionState::Authenticated(UserProfile {
                    id: claims.sub,
                    email: claims.email,
                    name: claims.name,
                });
                self.token = Some(token);
            }
            Ok(_) => {
                // 만료된 토큰은 버리고 Anonymous로
                tracing::debug!("stored token expired, discarding");
                self.storage.remove(TOKEN_KEY);
            }
            Err(e) => {
                tracing::warn!("invalid token in storage, discarding: {}", e);
                self.storage.remove(TOKEN_KEY);
            }
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated(_))
    }

    pub fn user(&self) -> Option<&UserProfile> {
        match &self.state {
            SessionState::Authenticated(user) => Some(user),
            SessionState::Anonymous => None,
        }
    }

    /// API 요청의 Authorization 헤더에 넣을 토큰.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub async fn sign_in(&mut self, email: &str, password: &str) -> Result<(), SessionError> {
        let response = self.api.sign_in(email, password).await?;
        let claims = decode_claims(&response.token).map_err(|_| SessionError::MalformedToken)?;

        self.storage.set(TOKEN_KEY, &response.token);
        self.token = Some(response.token);
        self.state = SessionState::Authenticated(UserProfile {
            id: claims.sub,
            email: claims.email,
            name: claims.name,
        });

        Ok(())
    }

    /// 가입 후 곧바로 로그인까지 진행합니다.
    pub async fn sign_up(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), SessionError> {
        self.api.sign_up(name, email, password).await?;
        self.sign_in(email, password).await
    }

    pub fn sign_out(&mut self) {
        self.storage.remove(TOKEN_KEY);
        self.token = None;
        self.state = SessionState::Anonymous;
    }
}

/// 토큰의 클레임을 서명 검증 없이 디코딩합니다.
pub fn decode_claims(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false; // 만료는 호출측에서 직접 비교

    let data = decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)?;
    Ok(data.claims)
}
