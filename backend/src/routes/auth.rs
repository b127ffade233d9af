use crate::{
    db::users as db_users,
    error::AppError,
    middleware::auth::create_token,
    models::user::{SigninRequest, SignupRequest},
    routes::AppState,
};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use axum::{extract::State, Json};
use serde_json::{json, Value};

pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<Json<Value>, AppError> {
    // Validate input: all three fields are required and non-empty
    let (name, email, password) = match (&req.name, &req.email, &req.password) {
        (Some(name), Some(email), Some(password))
            if !name.is_empty() && !email.is_empty() && !password.is_empty() =>
        {
            (name, email, password)
        }
        _ => return Err(AppError::BadRequest("Missing fields".to_string())),
    };

    // Check if email already exists
    if db_users::find_by_email(&state.pool, email).await?.is_some() {
        return Err(AppError::Conflict(
            "User with email already exists".to_string(),
        ));
    }

    // Hash password with Argon2id
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))?
        .to_string();

    // Create user
    let user_id = uuid::Uuid::now_v7().to_string();
    let user = db_users::create_user(&state.pool, &user_id, name, email, &password_hash).await?;
    tracing::debug!(user_id = %user.id, "new user registered");

    Ok(Json(json!({ "message": "User registered successfully" })))
}

pub async fn signin(
    State(state): State<AppState>,
    Json(req): Json<SigninRequest>,
) -> Result<Json<Value>, AppError> {
    let (email, password) = match (&req.email, &req.password) {
        (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
            (email, password)
        }
        _ => return Err(AppError::BadRequest("Missing fields".to_string())),
    };

    // Find user by email
    let user = db_users::find_by_email(&state.pool, email)
        .await?
        .ok_or(AppError::NotFound)?;

    // Verify password
    let parsed_hash = PasswordHash::new(&user.password_hash)
        .map_err(|e| AppError::Internal(format!("Password hash parse error: {}", e)))?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AppError::Unauthorized("Password did not match".to_string()))?;

    // Issue token carrying the public identity claims
    let token = create_token(&user.id, &user.email, &user.name, &state.jwt_secret)
        .map_err(|e| AppError::Internal(format!("Token generation failed: {}", e)))?;

    Ok(Json(json!({
        "message": "Sign In successful",
        "token": token,
        "id": user.id,
        "name": user.name,
        "email": user.email,
    })))
}
