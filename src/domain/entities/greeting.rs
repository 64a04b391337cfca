use serde::{Deserialize, Serialize};

/// Greeting used whenever generation fails or yields nothing usable
pub const FALLBACK_GREETING: &str = "Have a wonderful day ahead.";

/// Chat message author role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// Sampling controls sent with every completion request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingParams {
    pub temperature: f32,
    pub top_p: f32,
    pub max_completion_tokens: u32,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            temperature: 0.75,
            top_p: 0.9,
            max_completion_tokens: 40,
        }
    }
}

/// Model-agnostic chat completion request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub messages: Vec<ChatMessage>,
    pub sampling: SamplingParams,
}

/// System instruction plus the per-request user instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingPrompt {
    pub system: String,
    pub user: String,
}

impl GreetingPrompt {
    pub fn into_request(self, sampling: SamplingParams) -> CompletionRequest {
        CompletionRequest {
            messages: vec![ChatMessage::system(self.system), ChatMessage::user(self.user)],
            sampling,
        }
    }
}

/// Final greeting: one trimmed, non-empty line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GreetingText(String);

impl GreetingText {
    /// Keeps the first line of a trimmed completion. Returns `None` when
    /// nothing printable is left.
    pub fn from_completion(raw: &str) -> Option<Self> {
        let first_line = raw.trim().lines().next().unwrap_or_default().trim();
        if first_line.is_empty() {
            None
        } else {
            Some(Self(first_line.to_string()))
        }
    }

    pub fn fallback() -> Self {
        Self(FALLBACK_GREETING.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for GreetingText {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::from_completion(&raw).ok_or_else(|| "greeting is empty".to_string())
    }
}

impl From<GreetingText> for String {
    fn from(text: GreetingText) -> Self {
        text.0
    }
}

impl std::fmt::Display for GreetingText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
