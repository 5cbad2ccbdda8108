//! Handlers for the `/auth` resource (login, profile).

use axum::extract::State;
use axum::Json;
use rynvlabs_core::error::CoreError;
use rynvlabs_core::types::DbId;
use rynvlabs_db::repositories::AdminRepo;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful authentication response.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub admin: AdminInfo,
}

/// Public admin info embedded in [`AuthResponse`].
#[derive(Debug, Serialize)]
pub struct AdminInfo {
    pub id: DbId,
    pub name: String,
    pub email: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Authenticate with email + password. Returns an access token.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    // A missing account and a bad password produce the same response so the
    // endpoint does not leak which emails exist.
    let admin = AdminRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
        })?;

    let password_valid = verify_password(&input.password, &admin.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    let access_token = generate_access_token(admin.id, &admin.email, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(admin_id = admin.id, "Admin logged in");

    Ok(Json(AuthResponse {
        access_token,
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
        admin: AdminInfo {
            id: admin.id,
            name: admin.name,
            email: admin.email,
        },
    }))
}

/// GET /api/v1/auth/me
///
/// Return the authenticated admin's profile.
pub async fn me(
    State(state): State<AppState>,
    auth: AuthAdmin,
) -> AppResult<Json<DataResponse<AdminInfo>>> {
    let admin = AdminRepo::find_by_id(&state.pool, auth.admin_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Admin",
            id: auth.admin_id,
        }))?;

    Ok(Json(DataResponse {
        data: AdminInfo {
            id: admin.id,
            name: admin.name,
            email: admin.email,
        },
    }))
}
