//! Answer styles and their fixed text templates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonalityMode {
    /// Professional, clinical tone.
    #[default]
    Doctor,
    /// Warm best friend, uses emoji.
    Bestie,
    /// Nurturing older sister.
    Sister,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPersonality(pub String);

impl fmt::Display for UnknownPersonality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "personality_mode must be one of doctor, bestie, sister (got '{}')",
            self.0
        )
    }
}

impl std::error::Error for UnknownPersonality {}

impl FromStr for PersonalityMode {
    type Err = UnknownPersonality;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "doctor" => Ok(Self::Doctor),
            "bestie" => Ok(Self::Bestie),
            "sister" => Ok(Self::Sister),
            other => Err(UnknownPersonality(other.to_string())),
        }
    }
}

impl fmt::Display for PersonalityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PersonalityMode {
    pub const ALL: [PersonalityMode; 3] = [Self::Doctor, Self::Bestie, Self::Sister];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Doctor => "doctor",
            Self::Bestie => "bestie",
            Self::Sister => "sister",
        }
    }

    /// Lenient parse: anything unrecognized becomes `Doctor`.
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    /// System prompt used when answers are generated.
    pub fn system_prompt(&self) -> &'static str {
        match self {
            Self::Doctor => "You are a professional, knowledgeable healthcare assistant specializing in women's health. Provide accurate, clinical information while being compassionate. Always recommend consulting healthcare professionals for serious concerns.",
            Self::Bestie => "You are a caring, supportive best friend who happens to be very knowledgeable about women's health. Use warm, friendly language with appropriate emojis. Be encouraging and supportive while providing accurate information.",
            Self::Sister => "You are a loving, protective older sister who cares deeply about women's health. Use gentle, reassuring language. Be nurturing and understanding while providing helpful, accurate information.",
        }
    }

    /// Wraps a dataset answer in this mode's preamble and postamble.
    pub fn wrap_answer(&self, answer: &str, question: &str) -> String {
        match self {
            Self::Doctor => format!(
                "Regarding your question about {}: {} I recommend discussing any specific concerns with your healthcare provider for personalized medical advice.",
                question.to_lowercase(),
                answer
            ),
            Self::Bestie => format!(
                "Hey girl! 💕 {} Hope this helps! Remember, you know your body best, so don't hesitate to talk to a healthcare provider if you have concerns. You've got this! 🌟",
                answer
            ),
            Self::Sister => format!(
                "I'm so glad you asked about this! 🤗 {} Remember, every woman's experience is different, and it's always okay to seek professional medical advice. Take care of yourself! 💜",
                answer
            ),
        }
    }

    /// Answer used when nothing in the corpus matches.
    pub fn generic_answer(&self, question: &str) -> String {
        match self {
            Self::Doctor => format!(
                "Thank you for your question about '{}'. While I don't have specific information about this topic in my current knowledge base, I recommend consulting with a qualified healthcare provider for personalized medical advice.",
                question
            ),
            Self::Bestie => format!(
                "That's a great question about '{}'! 💕 I don't have specific info about this right now, but I'd definitely suggest chatting with a doctor who can give you the best advice for your situation. You're smart for asking! 🌟",
                question
            ),
            Self::Sister => format!(
                "I appreciate you asking about '{}' 🤗 While I don't have detailed information about this specific topic, I encourage you to speak with a healthcare professional who can provide personalized guidance. Never hesitate to advocate for your health! 💜",
                question
            ),
        }
    }

    /// Answer used when composing failed unexpectedly.
    pub fn error_answer(&self) -> &'static str {
        match self {
            Self::Doctor => "I apologize, but I'm experiencing technical difficulties. Please try again or consult with a healthcare provider.",
            Self::Bestie => "Oops! Having a little technical hiccup 😅 Can you try asking again? 💕",
            Self::Sister => "Sorry, having some technical trouble right now 🤗 Please try again! 💜",
        }
    }
}
