use career_navigator::services::chatbot::{
    CAREER_REPLY, EMPTY_REPLY, GENERIC_REPLIES, GREETING_REPLY, GUIDANCE_REPLY, Intent,
    RandomPicker, ReplyPicker, THANKS_REPLY, detect_intent, generate_reply, interests_suffix,
};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Walks the pool in order.
#[derive(Default)]
struct Sequence(AtomicUsize);

impl ReplyPicker for Sequence {
    fn pick(&self, len: usize) -> usize {
        self.0.fetch_add(1, Ordering::SeqCst) % len
    }
}

fn reply(msg: &str) -> String {
    generate_reply(msg, "", &RandomPicker)
}

#[test]
fn test_detect_intent() {
    assert_eq!(detect_intent(""), Intent::Empty);
    assert_eq!(detect_intent("Hello there"), Intent::Greeting);
    assert_eq!(detect_intent("Tell me about career options"), Intent::Career);
    assert_eq!(detect_intent("can you guide me"), Intent::Guidance);
    assert_eq!(detect_intent("thanks a lot"), Intent::Thanks);
    assert_eq!(detect_intent("banana"), Intent::Unknown);
}

#[test]
fn test_empty_message_prompts() {
    assert_eq!(reply(""), EMPTY_REPLY);
    assert_eq!(reply("    "), EMPTY_REPLY);
    assert_eq!(
        generate_reply("", "math", &RandomPicker),
        format!("{EMPTY_REPLY}{}", interests_suffix("math"))
    );
}

#[test]
fn test_whitespace_interests_still_get_suffix() {
    assert_eq!(
        generate_reply("thanks", " ", &RandomPicker),
        format!("{THANKS_REPLY}{}", interests_suffix(" "))
    );
    assert!(
        generate_reply("thanks", " ", &RandomPicker)
            .ends_with(" Based on your interests in  , I suggest exploring those domains in the dendrogram.")
    );
}

#[test]
fn test_greeting_is_case_insensitive() {
    assert_eq!(reply("Hello there"), GREETING_REPLY);
    assert_eq!(reply("HELLO"), GREETING_REPLY);
    assert_eq!(reply("hi"), GREETING_REPLY);
    // substring, not whole word
    assert_eq!(reply("this is it"), GREETING_REPLY);
}

#[test]
fn test_keyword_replies() {
    assert_eq!(reply("Tell me about career options"), CAREER_REPLY);
    assert_eq!(reply("CAREERS"), CAREER_REPLY);
    assert_eq!(reply("can you guide me"), GUIDANCE_REPLY);
    assert_eq!(reply("help"), GUIDANCE_REPLY);
    assert_eq!(reply("thanks a lot"), THANKS_REPLY);
}

#[test]
fn test_rule_precedence() {
    assert_eq!(reply("hi, tell me about career"), GREETING_REPLY);
    assert_eq!(reply("career help"), CAREER_REPLY);
    assert_eq!(reply("thanks for the guide"), GUIDANCE_REPLY);
}

#[test]
fn test_generic_pool_membership_and_spread() {
    let pool: HashSet<&str> = GENERIC_REPLIES.iter().copied().collect();
    let mut seen = HashSet::new();
    for _ in 0..1000 {
        let r = reply("banana");
        assert!(pool.contains(r.as_str()), "unexpected reply: {r}");
        seen.insert(r);
    }
    assert!(seen.len() > 1, "all 1000 generic replies were identical");
}

#[test]
fn test_deterministic_picker_walks_pool() {
    let picker = Sequence::default();
    for expected in GENERIC_REPLIES {
        assert_eq!(generate_reply("banana", "", &picker), expected);
    }
}

#[test]
fn test_interests_suffix() {
    let r = generate_reply("hello", "math, art", &RandomPicker);
    assert_eq!(r, format!("{GREETING_REPLY}{}", interests_suffix("math, art")));
    assert!(r.ends_with(
        " Based on your interests in math, art, I suggest exploring those domains in the dendrogram."
    ));

    let picker = Sequence::default();
    let r = generate_reply("banana", "biology", &picker);
    assert_eq!(r, format!("{}{}", GENERIC_REPLIES[0], interests_suffix("biology")));
}
