use serde::{Deserialize, Serialize};

/// Width of the `session_id` columns of `chat_logs` and `visits`.
pub const MAX_SESSION_ID_CHARS: usize = 100;

/// One completed chat turn, written append-only.
#[derive(Debug, Clone, PartialEq)]
pub struct NewChatLog {
    pub session_id: String,
    pub user_message: String,
    pub ai_response: String,
    pub locale: String,
}

/// Speaker of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

/// One message in a conversation.
///
/// Deserializes from `{role, text}` or from the Gemini-style
/// `{role, parts: ["..."]}` the frontend replays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WireTurn")]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
        }
    }
}

#[derive(Deserialize)]
struct WireTurn {
    role: Role,
    text: Option<String>,
    parts: Option<WireParts>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireParts {
    One(String),
    Many(Vec<WirePart>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WirePart {
    Text(String),
    Object { text: String },
}

impl TryFrom<WireTurn> for Turn {
    type Error = String;

    fn try_from(wire: WireTurn) -> Result<Self, Self::Error> {
        let text = match (wire.text, wire.parts) {
            (Some(text), _) => text,
            (None, Some(WireParts::One(text))) => text,
            (None, Some(WireParts::Many(parts))) => parts
                .into_iter()
                .map(|p| match p {
                    WirePart::Text(t) | WirePart::Object { text: t } => t,
                })
                .collect::<Vec<_>>()
                .join("\n"),
            (None, None) => return Err("turn needs `text` or `parts`".to_string()),
        };
        Ok(Turn {
            role: wire.role,
            text,
        })
    }
}
