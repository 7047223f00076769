//! Word-overlap similarity between a user message and one trigger phrase.
//!
//! Every rule adds to the score; nothing is normalised or subtracted:
//! 1. +20 when the whole strings are equal (case-insensitive)
//! 2. +15 when the input is one word that appears among the pattern words
//! 3. +5 per input word found in the pattern
//! 4. +3 per input bigram found at the first position of its leading word
//! 5. +2 per (input word, pattern word) pair where one contains the other

const EXACT_MATCH_BONUS: u64 = 20;
const SINGLE_WORD_BONUS: u64 = 15;
const WORD_MATCH_POINTS: u64 = 5;
const CONSECUTIVE_BONUS: u64 = 3;
const PARTIAL_MATCH_POINTS: u64 = 2;

/// Score `input` against `pattern`. Pure and case-insensitive.
///
/// Saturates at `u64::MAX` instead of overflowing.
pub fn score(input: &str, pattern: &str) -> u64 {
    let input_lower = input.to_lowercase();
    let pattern_lower = pattern.to_lowercase();
    let input_words: Vec<&str> = input_lower.split_whitespace().collect();
    let pattern_words: Vec<&str> = pattern_lower.split_whitespace().collect();

    let mut score = 0;

    if input_lower == pattern_lower {
        score = add_points(score, 1, EXACT_MATCH_BONUS);
    }

    if let [word] = input_words.as_slice() {
        if pattern_words.contains(word) {
            score = add_points(score, 1, SINGLE_WORD_BONUS);
        }
    }

    let matched_words = input_words
        .iter()
        .filter(|word| pattern_words.contains(*word))
        .count();
    score = add_points(score, matched_words, WORD_MATCH_POINTS);

    let consecutive = consecutive_matches(&input_words, &pattern_words);
    score = add_points(score, consecutive, CONSECUTIVE_BONUS);

    let partial = partial_matches(&input_words, &pattern_words);
    score = add_points(score, partial, PARTIAL_MATCH_POINTS);

    score
}

fn add_points(score: u64, count: usize, points: u64) -> u64 {
    let count = u64::try_from(count).unwrap_or(u64::MAX);
    score.saturating_add(count.saturating_mul(points))
}

/// Counts input bigrams that also appear in the pattern. Only the first
/// occurrence of the leading word in the pattern is checked.
fn consecutive_matches(input_words: &[&str], pattern_words: &[&str]) -> usize {
    input_words
        .windows(2)
        .filter(|pair| {
            pattern_words
                .iter()
                .position(|word| *word == pair[0])
                .and_then(|idx| pattern_words.get(idx + 1))
                .map_or(false, |next| *next == pair[1])
        })
        .count()
}

/// Counts every (input word, pattern word) pair where one contains the other.
fn partial_matches(input_words: &[&str], pattern_words: &[&str]) -> usize {
    input_words
        .iter()
        .map(|input_word| {
            pattern_words
                .iter()
                .filter(|pattern_word| {
                    pattern_word.contains(input_word) || input_word.contains(*pattern_word)
                })
                .count()
        })
        .fold(0usize, |total, count| total.saturating_add(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_single_word() {
        // exact + single word + word match + self-substring
        assert_eq!(score("hello", "hello"), 42);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(score("Hello", "hello"), score("hello", "hello"));
        assert_eq!(score("CAMPUS Life", "Tell me about campus LIFE"), 17);
    }

    #[test]
    fn test_no_overlap() {
        assert_eq!(score("hi", "hello"), 0);
        assert_eq!(score("xyz123 unrelated gibberish", "Fee structure"), 0);
    }

    #[test]
    fn test_bigram_bonus() {
        // campus + life word matches, "campus life" bigram, two self-substrings
        assert_eq!(score("campus life", "tell me about campus life"), 17);
    }

    #[test]
    fn test_bigram_uses_first_occurrence_only() {
        // "the" first appears before "hostel", so the later "the fee" is not seen
        assert_eq!(score("the fee", "the hostel the fee"), 16);
    }

    #[test]
    fn test_repeated_input_words_count_each_time() {
        assert_eq!(score("fee fee", "fee"), 14);
    }

    #[test]
    fn test_partial_matches_in_both_directions() {
        assert_eq!(score("app", "apply application"), 4);
        assert_eq!(score("applications", "apply application"), 2);
    }

    #[test]
    fn test_whitespace_runs_split_as_one() {
        assert_eq!(score("hi  there", "hi there"), 17);
        assert_eq!(score("hi there", "hi there"), 37);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(score("", "anything at all"), 0);
        assert_eq!(score("   ", "hi"), 0);
    }

    #[test]
    fn test_deterministic() {
        let a = score("What courses does KIT offer?", "Available programs at KIT");
        let b = score("What courses does KIT offer?", "Available programs at KIT");
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_word_found_inside_longer_pattern() {
        // single word + word match + self-substring
        assert_eq!(score("campus", "campus tour"), 22);
    }

    #[test]
    fn test_single_word_bonus_skips_multi_word_input() {
        // word match + self-substring only
        assert_eq!(score("campus tour", "campus"), 7);
    }

    #[test]
    fn test_long_inputs_do_not_overflow() {
        let words = vec!["a"; 3_000].join(" ");
        // exact + 3000 word matches + 2999 bigrams + 3000 * 3000 partial pairs
        assert_eq!(score(&words, &words), 20 + 15_000 + 8_997 + 18_000_000);
    }

    #[test]
    fn test_add_points_saturates() {
        assert_eq!(add_points(u64::MAX - 1, 1, PARTIAL_MATCH_POINTS), u64::MAX);
        assert_eq!(add_points(0, usize::MAX, PARTIAL_MATCH_POINTS), u64::MAX);
        assert_eq!(add_points(10, 4, CONSECUTIVE_BONUS), 22);
    }
}
