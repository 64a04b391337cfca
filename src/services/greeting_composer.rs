use crate::domain::entities::{
    GreetingPrompt, GreetingText, SamplingParams, TimeOfDayLabel,
};
use crate::domain::errors::ProviderError;
use crate::domain::ports::CompletionProvider;
use crate::services::resilience::resilient;
use std::sync::Arc;
use tracing::debug;

pub const COMPLETION_COMPONENT: &str = "groq";

pub const SYSTEM_INSTRUCTION: &str =
    "You are Xlya. Respond in exactly one short line. Never add follow-up sentences.";

/// Builds the user instruction for today's greeting.
///
/// With holidays the prompt names every event and suggests opening with the
/// time-of-day word; without them it asks for a plain greeting of that time
/// of day. A non-blank `user_name` adds one addressing sentence.
pub fn build_prompt(
    holidays: &[String],
    time_of_day: TimeOfDayLabel,
    user_name: Option<&str>,
) -> GreetingPrompt {
    let mut user = if holidays.is_empty() {
        format!(
            "Write ONE short, single-line {} greeting. \
             Human tone. Smooth and natural. \
             No questions. No explanations. \
             Between 6 and 12 words only.",
            time_of_day.as_str().to_lowercase()
        )
    } else {
        format!(
            "Event today: {}. \
             Write ONE short, single-line greeting. \
             Human tone. Light rhythm if natural. \
             No questions. No explanations. \
             Start with '{}' if natural. \
             Between 6 and 12 words only.",
            holidays.join(", "),
            time_of_day
        )
    };

    if let Some(name) = user_name.map(str::trim).filter(|name| !name.is_empty()) {
        user.push_str(&format!(" Address the user as {}.", name));
    }

    GreetingPrompt {
        system: SYSTEM_INSTRUCTION.to_string(),
        user,
    }
}

/// Turns holidays and time of day into a single greeting line
#[derive(Clone)]
pub struct GreetingComposer {
    completion: Arc<dyn CompletionProvider>,
    sampling: SamplingParams,
}

impl GreetingComposer {
    pub fn new(completion: Arc<dyn CompletionProvider>) -> Self {
        Self {
            completion,
            sampling: SamplingParams::default(),
        }
    }

    /// Never fails: generation errors and blank completions yield
    /// [`GreetingText::fallback`].
    pub async fn compose(
        &self,
        holidays: &[String],
        time_of_day: TimeOfDayLabel,
        user_name: Option<&str>,
    ) -> GreetingText {
        let prompt = build_prompt(holidays, time_of_day, user_name);
        debug!(prompt = %prompt.user, "Requesting greeting");
        let request = prompt.into_request(self.sampling);

        let generation = async {
            let raw = self.completion.complete(&request).await?;
            GreetingText::from_completion(&raw)
                .ok_or_else(|| ProviderError::Malformed("empty completion".to_string()))
        };

        resilient(COMPLETION_COMPONENT, generation, GreetingText::fallback).await
    }
}
