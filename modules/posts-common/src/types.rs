use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use uuid::Uuid;

/// A post as held by the store and returned over the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
}

impl Post {
    pub fn new(id: Uuid, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

/// Wire envelope exchanged with the event bus, in both directions.
///
/// `{ "type": "PostCreated", "data": { ... } }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default = "empty_data")]
    pub data: Value,
}

fn empty_data() -> Value {
    Value::Object(Map::new())
}

/// Events emitted by this service.
#[derive(Debug, Clone, PartialEq)]
pub enum PostEvent {
    PostCreated(Post),
}

impl PostEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            PostEvent::PostCreated(_) => "PostCreated",
        }
    }
}

impl From<PostEvent> for Event {
    fn from(event: PostEvent) -> Self {
        let event_type = event.event_type().to_string();
        let data = match event {
            PostEvent::PostCreated(post) => json!({
                "id": post.id,
                "title": post.title,
            }),
        };
        Event { event_type, data }
    }
}
