//! Prompt templates for horoscope generation.

use chrono::Utc;

use crate::profile::BirthProfile;

/// System instruction for every astrologer request.
pub const ASTROLOGER_SYSTEM_PROMPT: &str = "\
You are a knowledgeable and compassionate AI astrologer. Provide a thoughtful \
response to the user's query.

Guidelines:
- Keep responses concise yet insightful
- Use markdown for formatting
- Focus on practical guidance and positive insights
- Maintain a warm, professional tone";

fn birth_details(profile: &BirthProfile) -> String {
    format!(
        "Birth Details:\n- Date: {}\n- Time: {}\n- Location: {}",
        profile.date_of_birth.as_deref().unwrap_or(""),
        profile.display_time().unwrap_or_default(),
        profile.place_of_birth.as_deref().unwrap_or(""),
    )
}

/// The fixed "daily horoscope" instruction block, templated with the
/// profile's birth details and today's date.
pub fn daily_reading_prompt(profile: &BirthProfile) -> String {
    let name = profile.name.as_deref().unwrap_or("friend");
    let today = Utc::now().format("%Y-%m-%d");
    format!(
        "Dear {name}, I'd love to share your daily astrological insights.\n\n\
         {}\n\n\
         Please provide a daily horoscope for {today} focusing on:\n\
         1. Overall energy and mood\n\
         2. Key opportunities or challenges\n\
         3. Practical guidance for the day\n\n\
         Format the response with clear sections using markdown headings and bullet points.",
        birth_details(profile),
    )
}

/// A user-supplied free-text question, templated with the same birth details.
pub fn question_prompt(profile: &BirthProfile, question: &str) -> String {
    let name = profile.name.as_deref().unwrap_or("friend");
    format!(
        "Dear {name}, I'll help you with your astrological question.\n\n\
         {}\n\n\
         Your Question: {question}\n\n\
         Please provide specific insights related to the question, using your \
         birth details for personalized guidance.",
        birth_details(profile),
    )
}
