use axum::{
    async_trait,
    extract::{FromRequestParts, State},
    http::{header, request::Parts, HeaderMap, StatusCode},
    routing::{get, post},
    Json,
};
use lectern_core::{Credentials, Role, SessionData};

use crate::{
    context::ServerContext,
    errors::ServerResult,
    schemas::{LoginSchema, ValidatedJson},
    serialized::{LoginResult, ToSerialized, User},
    Router,
};

/// Wraps [SessionData] so [FromRequestParts] can be implemented for it
pub struct Session(pub SessionData);

#[async_trait]
impl FromRequestParts<ServerContext> for Session {
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerContext,
    ) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|x| x.to_str().ok())
            .ok_or((StatusCode::UNAUTHORIZED, "Missing authorization"))?;

        let words: Vec<_> = value.split_ascii_whitespace().collect();

        if words.first() != Some(&"Bearer") {
            return Err((StatusCode::BAD_REQUEST, "Authorization must be Bearer"));
        }

        let token = words.last().cloned().unwrap_or_default();

        let session = state
            .classroom
            .auth
            .session(token)
            .ok_or((StatusCode::UNAUTHORIZED, "Session does not exist"))?;

        Ok(Self(session))
    }
}

/// A session that is allowed to mutate classroom state.
pub struct TeacherSession(pub SessionData);

#[async_trait]
impl FromRequestParts<ServerContext> for TeacherSession {
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerContext,
    ) -> Result<Self, Self::Rejection> {
        let Session(session) = Session::from_request_parts(parts, state).await?;

        if session.role != Role::Teacher {
            return Err((StatusCode::FORBIDDEN, "Only the teacher may do this"));
        }

        Ok(Self(session))
    }
}

#[utoipa::path(
    post,
    path = "/v1/auth/login",
    tag = "auth",
    request_body = LoginSchema,
    responses(
        (status = 200, body = LoginResult),
        (status = 400, description = "Invalid credentials or malformed body")
    )
)]
async fn login(
    State(context): State<ServerContext>,
    ValidatedJson(body): ValidatedJson<LoginSchema>,
) -> ServerResult<Json<LoginResult>> {
    let session = context.classroom.auth.login(Credentials {
        username: body.username,
        password: body.password,
    })?;

    Ok(Json(session.to_serialized()))
}

#[utoipa::path(
    post,
    path = "/v1/auth/logout",
    tag = "auth",
    security(
        ("BearerAuth" = [])
    ),
    responses(
        (status = 200, description = "Session was discarded, whether it existed or not")
    )
)]
async fn logout(State(context): State<ServerContext>, headers: HeaderMap) {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|x| x.to_str().ok())
        .and_then(|x| x.split_ascii_whitespace().last());

    if let Some(token) = token {
        context.classroom.auth.logout(token);
    }
}

#[utoipa::path(
    get,
    path = "/v1/auth/user",
    tag = "auth",
    security(
        ("BearerAuth" = [])
    ),
    responses(
        (status = 200, body = User)
    )
)]
async fn user(session: Session) -> Json<User> {
    Json(session.0.to_serialized())
}

pub fn router() -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/user", get(user))
}
