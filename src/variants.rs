use serde::{Deserialize, Serialize};

use crate::stable_hash64;

const HOOKS: &[&str] = &[
    "Here's the thing:",
    "Quick thread:",
    "Let me break this down:",
    "Hot take:",
    "Unpopular opinion:",
    "This is important:",
    "Real talk:",
];

const CTAS: &[&str] = &[
    "\n\nWhat do you think?",
    "\n\nThoughts?",
    "\n\nAgree or disagree?",
    "\n\nYour take?",
    "\n\nLet me know in the replies.",
    "\n\nDrop a comment.",
];

const QUESTION_STARTERS: &[&str] = &["Ever wondered", "Have you noticed", "What if", "Why do", "How can"];

const QUESTION_FORMAT_MAX: usize = 200;
const THREAD_TEASER_MIN: usize = 200;
const CREDIBILITY_MAX: usize = 220;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variant {
    pub id: String,
    pub text: String,
    pub strategy: String,
    pub changes: Vec<String>,
}

/// Produces up to 3 alternative phrasings. Candidates are independent (never
/// chained) and taken in fixed rule order. Phrase picks hash off the trimmed
/// input, so the same text always yields the same variants.
pub fn generate_variants(original: &str) -> Vec<Variant> {
    let trimmed = original.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let hash = stable_hash64(trimmed);
    let len = trimmed.chars().count();
    let mut variants = Vec::new();

    if !starts_with_hook(trimmed) {
        let hook = HOOKS[(hash % HOOKS.len() as u64) as usize];
        variants.push(Variant {
            id: "hook".to_string(),
            text: format!("{}\n\n{}", hook, trimmed),
            strategy: "Strong Hook".to_string(),
            changes: vec![
                "Added attention-grabbing opening".to_string(),
                "Increases scroll-stopping power".to_string(),
            ],
        });
    }

    if !has_question(trimmed) {
        let cta = CTAS[((hash >> 8) % CTAS.len() as u64) as usize];
        variants.push(Variant {
            id: "question-cta".to_string(),
            text: format!("{}{}", trimmed, cta),
            strategy: "Question CTA".to_string(),
            changes: vec![
                "Added question to encourage replies".to_string(),
                "Replies are 13-27x more valuable than likes".to_string(),
            ],
        });
    }

    if !has_question(trimmed) && len < QUESTION_FORMAT_MAX {
        let starter = QUESTION_STARTERS[((hash >> 16) % QUESTION_STARTERS.len() as u64) as usize];
        let body = trimmed.to_lowercase();
        let body = body.strip_suffix('.').unwrap_or(&body);
        variants.push(Variant {
            id: "question-format".to_string(),
            text: format!("{} {}?", starter, body),
            strategy: "Question Format".to_string(),
            changes: vec![
                "Reframed as a question".to_string(),
                "Questions drive reply engagement".to_string(),
            ],
        });
    }

    if len > THREAD_TEASER_MIN && !trimmed.contains('🧵') && !trimmed.contains('/') {
        let sentences: Vec<&str> = trimmed
            .split(['.', '!', '?'])
            .map(str::trim)
            .filter(|sentence| !sentence.is_empty())
            .collect();
        if sentences.len() >= 2 {
            variants.push(Variant {
                id: "thread".to_string(),
                text: format!("{}.\n\n🧵 Thread 👇", sentences[0]),
                strategy: "Thread Format".to_string(),
                changes: vec![
                    "Converted to thread format".to_string(),
                    "Threads increase dwell time and reach".to_string(),
                ],
            });
        }
    }

    if !has_numbers(trimmed) && len < CREDIBILITY_MAX {
        variants.push(Variant {
            id: "stats".to_string(),
            text: format!("{}\n\n(Based on recent data)", trimmed),
            strategy: "Add Credibility".to_string(),
            changes: vec![
                "Added credibility signal".to_string(),
                "Data-backed claims perform better".to_string(),
            ],
        });
    }

    variants.truncate(3);
    variants
}

fn starts_with_hook(text: &str) -> bool {
    let first_line = text.lines().next().unwrap_or("").to_lowercase();
    HOOKS.iter().any(|hook| {
        let prefix = hook.trim_end_matches(':').to_lowercase();
        first_line.contains(&prefix)
    })
}

fn has_question(text: &str) -> bool {
    text.contains('?')
}

fn has_numbers(text: &str) -> bool {
    text.chars().any(|ch| ch.is_ascii_digit())
}
