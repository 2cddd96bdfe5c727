use axum::{
    extract::State,
    routing::get,
    Json,
};

use crate::{
    auth::{Session, TeacherSession},
    context::ServerContext,
    errors::ServerResult,
    schemas::{StartSessionSchema, ValidatedJson},
    serialized::LiveStatus,
    Router,
};

#[utoipa::path(
    get,
    path = "/v1/live",
    tag = "live",
    security(
        ("BearerAuth" = [])
    ),
    responses(
        (status = 200, body = LiveStatus)
    )
)]
async fn status(_session: Session, State(context): State<ServerContext>) -> Json<LiveStatus> {
    let session = context.classroom.live.read();

    Json(LiveStatus::new(&session, &context.config.video_host))
}

#[utoipa::path(
    post,
    path = "/v1/live",
    tag = "live",
    request_body = StartSessionSchema,
    security(
        ("BearerAuth" = [])
    ),
    responses(
        (status = 200, body = LiveStatus),
        (status = 400, description = "Topic is empty"),
        (status = 403, description = "Student sessions may not go live")
    )
)]
async fn start(
    _session: TeacherSession,
    State(context): State<ServerContext>,
    ValidatedJson(body): ValidatedJson<StartSessionSchema>,
) -> ServerResult<Json<LiveStatus>> {
    context.classroom.live.start_session(&body.topic)?;

    let session = context.classroom.live.read();
    Ok(Json(LiveStatus::new(&session, &context.config.video_host)))
}

#[utoipa::path(
    delete,
    path = "/v1/live",
    tag = "live",
    security(
        ("BearerAuth" = [])
    ),
    responses(
        (status = 200, body = LiveStatus),
        (status = 403, description = "Student sessions may not end a class")
    )
)]
async fn end(
    _session: TeacherSession,
    State(context): State<ServerContext>,
) -> ServerResult<Json<LiveStatus>> {
    context.classroom.live.end_session()?;

    let session = context.classroom.live.read();
    Ok(Json(LiveStatus::new(&session, &context.config.video_host)))
}

pub fn router() -> Router {
    Router::new().route("/", get(status).post(start).delete(end))
}
