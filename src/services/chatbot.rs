use rand::Rng;
use tracing::debug;

pub const EMPTY_REPLY: &str = "Please type something to begin our discussion!";
pub const GREETING_REPLY: &str = "Hello there! 👋 I’m your career guide. What are your interests?";
pub const CAREER_REPLY: &str =
    "There are many career paths! Try selecting a domain or entering interests to explore them.";
pub const GUIDANCE_REPLY: &str =
    "Sure! Select a domain or describe your interests, and I’ll help visualize your options.";
pub const THANKS_REPLY: &str = "You’re welcome! 🌟 Keep exploring and analyzing your skills.";

pub const GENERIC_REPLIES: [&str; 5] = [
    "That sounds interesting! Would you like to explore STEM or Creative fields?",
    "Great question! Try selecting a domain to visualize career options.",
    "Focus on your strengths — I can help map them to suitable careers.",
    "You can rate your skills below and get a personalized learning roadmap!",
    "Consider exploring related domains to broaden your career opportunities.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Empty,
    Greeting,
    Career,
    Guidance,
    Thanks,
    Unknown,
}

/// Chooses an index into a reply pool.
pub trait ReplyPicker: Send + Sync {
    /// `len` is never zero. The result must be `< len`.
    fn pick(&self, len: usize) -> usize;
}

/// Uniform pick from the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPicker;

impl ReplyPicker for RandomPicker {
    fn pick(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

// Rule order matters: the first match wins.
pub fn detect_intent(msg: &str) -> Intent {
    let msg_lower = msg.trim().to_lowercase();

    if msg_lower.is_empty() {
        Intent::Empty
    } else if msg_lower.contains("hello") || msg_lower.contains("hi") {
        Intent::Greeting
    } else if msg_lower.contains("career") {
        Intent::Career
    } else if msg_lower.contains("help") || msg_lower.contains("guide") {
        Intent::Guidance
    } else if msg_lower.contains("thanks") {
        Intent::Thanks
    } else {
        Intent::Unknown
    }
}

pub fn interests_suffix(interests: &str) -> String {
    format!(
        " Based on your interests in {}, I suggest exploring those domains in the dendrogram.",
        interests
    )
}

pub fn generate_reply(user_msg: &str, interests: &str, picker: &dyn ReplyPicker) -> String {
    use Intent::*;

    let intent = detect_intent(user_msg);
    debug!(?intent, "classified message");

    let mut reply = match intent {
        Empty => EMPTY_REPLY.to_string(),
        Greeting => GREETING_REPLY.to_string(),
        Career => CAREER_REPLY.to_string(),
        Guidance => GUIDANCE_REPLY.to_string(),
        Thanks => THANKS_REPLY.to_string(),
        Unknown => {
            let idx = picker.pick(GENERIC_REPLIES.len()) % GENERIC_REPLIES.len();
            GENERIC_REPLIES[idx].to_string()
        }
    };

    if !interests.is_empty() {
        reply.push_str(&interests_suffix(interests));
    }
    reply
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(usize);

    impl ReplyPicker for Fixed {
        fn pick(&self, _len: usize) -> usize {
            self.0
        }
    }

    #[test]
    fn whitespace_only_is_empty() {
        assert_eq!(detect_intent("   \t\n"), Intent::Empty);
    }

    #[test]
    fn fixed_picker_selects_pool_entry() {
        assert_eq!(generate_reply("banana", "", &Fixed(3)), GENERIC_REPLIES[3]);
    }

    #[test]
    fn out_of_range_pick_wraps() {
        assert_eq!(generate_reply("banana", "", &Fixed(7)), GENERIC_REPLIES[2]);
    }

    #[test]
    fn random_picker_stays_in_range() {
        for _ in 0..200 {
            assert!(RandomPicker.pick(5) < 5);
        }
    }
}
