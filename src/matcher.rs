//! Best-match search over the intent catalog.

use crate::model::Intent;
use crate::responses::ResponseSelector;
use crate::scorer::score;
use anyhow::Result;

/// Lowest score a match needs before its intent may answer.
pub const ACCEPTANCE_THRESHOLD: u64 = 5;

pub const EMPTY_INPUT_REPLY: &str = "I didn't catch that. Could you please rephrase your question?";
pub const NO_MATCH_REPLY: &str = "I'm not quite sure I understand. Could you please rephrase your question or provide more details? You can ask about topics like admissions, scholarships, campus life, or specific programs.";
pub const UNRESOLVED_REPLY: &str =
    "I apologize, but I'm not sure how to respond to that. Could you please try asking in a different way?";

#[derive(Debug, Clone, Copy)]
struct MatchResult<'a> {
    intent: Option<&'a Intent>,
    score: u64,
    pattern: &'a str,
}

/// Resolves user messages to replies. The catalog is passed in on every call
/// and never retained; only the reply rotation state lives here.
#[derive(Debug, Default)]
pub struct IntentMatcher {
    selector: ResponseSelector,
}

impl IntentMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selector(selector: ResponseSelector) -> Self {
        Self { selector }
    }

    pub fn selector(&self) -> &ResponseSelector {
        &self.selector
    }

    /// Returns the reply for `input`, or one of the fallback replies.
    ///
    /// Fails only when the winning intent has no responses.
    pub fn resolve(&self, input: &str, intents: &[Intent]) -> Result<String> {
        if input.trim().is_empty() {
            return Ok(EMPTY_INPUT_REPLY.to_string());
        }

        let best = Self::best_match(input, intents);
        log::debug!(
            "Best match for {:?}: intent={:?} pattern={:?} score={}",
            input,
            best.intent.map(|intent| intent.tag.as_str()),
            best.pattern,
            best.score
        );

        if best.score < ACCEPTANCE_THRESHOLD {
            return Ok(NO_MATCH_REPLY.to_string());
        }

        match best.intent {
            Some(intent) => self.selector.next(intent),
            None => Ok(UNRESOLVED_REPLY.to_string()),
        }
    }

    fn best_match<'a>(input: &str, intents: &'a [Intent]) -> MatchResult<'a> {
        let mut best = MatchResult {
            intent: None,
            score: 0,
            pattern: "",
        };

        for intent in intents {
            for pattern in &intent.patterns {
                let score = score(input, pattern);
                // Strictly greater: earlier intents and patterns win ties.
                if score > best.score {
                    best = MatchResult {
                        intent: Some(intent),
                        score,
                        pattern: pattern.as_str(),
                    };
                }
            }
        }

        best
    }
}
