//! All schemas that are exposed from endpoints are defined here
//! along with the conversions from core types

use lectern_core::{LiveSession, Notification as CoreNotification, Role, SessionData};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct User {
    username: String,
    role: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResult {
    token: String,
    user: User,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LiveStatus {
    is_live: bool,
    topic: String,
    room_token: String,
    /// Where to join the class, present while it is live
    join_url: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Notification {
    date: String,
    message: String,
}

impl LiveStatus {
    /// The join URL hands the opaque room token to the external
    /// video-conferencing host as a path segment.
    pub fn new(session: &LiveSession, video_host: &str) -> Self {
        let join_url = session
            .is_live
            .then(|| format!("https://{video_host}/{}", session.room_token));

        Self {
            is_live: session.is_live,
            topic: session.topic.clone(),
            room_token: session.room_token.clone(),
            join_url,
        }
    }
}

/// Helper trait to convert any type into a serialized version
pub trait ToSerialized<T>
where
    T: Serialize,
{
    fn to_serialized(&self) -> T;
}

impl<I, O> ToSerialized<Vec<O>> for Vec<I>
where
    I: ToSerialized<O>,
    O: Serialize,
{
    fn to_serialized(&self) -> Vec<O> {
        self.iter().map(|x| x.to_serialized()).collect()
    }
}

impl ToSerialized<User> for SessionData {
    fn to_serialized(&self) -> User {
        let role = match self.role {
            Role::Teacher => "teacher",
            Role::Student => "student",
        };

        User {
            username: self.username.clone(),
            role: role.to_string(),
        }
    }
}

impl ToSerialized<LoginResult> for SessionData {
    fn to_serialized(&self) -> LoginResult {
        LoginResult {
            token: self.token.clone(),
            user: self.to_serialized(),
        }
    }
}

impl ToSerialized<Notification> for CoreNotification {
    fn to_serialized(&self) -> Notification {
        Notification {
            date: self.date.clone(),
            message: self.message.clone(),
        }
    }
}
