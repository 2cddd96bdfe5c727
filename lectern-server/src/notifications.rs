use axum::{extract::State, routing::get, Json};

use crate::{
    auth::{Session, TeacherSession},
    context::ServerContext,
    errors::ServerResult,
    schemas::{NewNotificationSchema, ValidatedJson},
    serialized::{Notification, ToSerialized},
    Router,
};

#[utoipa::path(
    get,
    path = "/v1/notifications",
    tag = "notifications",
    security(
        ("BearerAuth" = [])
    ),
    responses(
        (status = 200, body = Vec<Notification>)
    )
)]
async fn list(_session: Session, State(context): State<ServerContext>) -> Json<Vec<Notification>> {
    Json(context.classroom.notifications.list().to_serialized())
}

#[utoipa::path(
    post,
    path = "/v1/notifications",
    tag = "notifications",
    request_body = NewNotificationSchema,
    security(
        ("BearerAuth" = [])
    ),
    responses(
        (status = 200, body = Vec<Notification>),
        (status = 400, description = "Message is empty"),
        (status = 403, description = "Student sessions may not post notices")
    )
)]
async fn create(
    _session: TeacherSession,
    State(context): State<ServerContext>,
    ValidatedJson(body): ValidatedJson<NewNotificationSchema>,
) -> ServerResult<Json<Vec<Notification>>> {
    context.classroom.notifications.append(&body.message)?;

    Ok(Json(context.classroom.notifications.list().to_serialized()))
}

pub fn router() -> Router {
    Router::new().route("/", get(list).post(create))
}
