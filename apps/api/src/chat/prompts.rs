//! Fixed prompt text for the portfolio assistant.
//!
//! The system instruction is sent once per session as a `user` turn followed by
//! [`MODEL_ACK`]; the client replays both on later turns.

pub const SYSTEM_INSTRUCTION: &str = "You are a helpful assistant for a PUBLIC portfolio website. \
Below is the owner's resume information that they have CHOSEN TO PUBLISH PUBLICLY. \
Answer questions about their experience, skills, projects, languages, and contact information based on this data. \
IMPORTANT: All contact information (email, GitHub, LinkedIn, phone) is PUBLIC and meant to be shared with visitors. \
The 'Languages' section refers to SPOKEN/WRITTEN languages (like English, Spanish), NOT programming languages. \
IMPORTANT: Always respond in the SAME LANGUAGE as the user's question. If they ask in Russian, answer in Russian. If they ask in Chinese, answer in Chinese. \
Be concise, professional, and friendly. \
Keep your responses to a maximum of 100 words. Be brief and to the point.";

pub const MODEL_ACK: &str =
    "I understand. I'm ready to answer questions about this person's resume and experience.";

/// Appended to every user message sent upstream. Not echoed back in history.
pub const BREVITY_SUFFIX: &str =
    "\n\nIMPORTANT: Keep your response to a maximum of 100 words. Be brief and concise.";

/// Translation key of the localized "assistant unavailable" reply.
pub const AI_UNAVAILABLE_KEY: &str = "aiUnavailable";

pub const HARDCODED_FALLBACK: &str = "AI assistant is currently unavailable. Please try again later.";

/// The first-turn grounding message: instruction followed by the résumé text.
pub fn build_system_message(resume_context: &str) -> String {
    format!("{SYSTEM_INSTRUCTION}\n\nRESUME:\n{resume_context}")
}

/// The user's message as sent upstream.
pub fn with_brevity_reminder(message: &str) -> String {
    format!("{message}{BREVITY_SUFFIX}")
}
