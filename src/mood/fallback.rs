use std::collections::HashMap;
use std::sync::OnceLock;

use super::MoodAnalysis;

/// Comedy + Drama, used whenever nothing better can be derived from a mood.
pub const DEFAULT_GENRES: [i32; 2] = [35, 18];

static MOOD_TO_GENRES: OnceLock<HashMap<&'static str, Vec<i32>>> = OnceLock::new();

/// Static mood -> TMDB genre id table, consulted when none of the keyword
/// groups match the mood text.
pub fn mood_genre_table() -> &'static HashMap<&'static str, Vec<i32>> {
    MOOD_TO_GENRES.get_or_init(|| {
        HashMap::from([
            ("cheerful", vec![35, 10751, 16]),
            ("gloomy", vec![18, 10749]),
            ("reflective", vec![18, 36]),
            ("humorous", vec![35, 12]),
            ("melancholy", vec![18, 10402]),
            ("idyllic", vec![10749, 10751]),
            ("chill", vec![35, 16, 10751]),
            ("romantic", vec![10749, 35]),
            ("weird", vec![878, 14, 27]),
            ("horny", vec![10749, 18]),
            ("sleepy", vec![16, 10751, 35]),
            ("angry", vec![28, 53, 80]),
            ("fearful", vec![27, 53]),
            ("lonely", vec![18, 10749]),
            ("tense", vec![53, 9648, 28]),
            ("thoughtful", vec![18, 36, 99]),
            ("thrill-seeking", vec![28, 12, 53]),
            ("playful", vec![35, 16, 10751]),
        ])
    })
}

const POSITIVE_WORDS: &[&str] = &["happy", "cheerful", "upbeat", "excited"];
const REFLECTIVE_WORDS: &[&str] = &["sad", "gloomy", "melancholy", "down"];
const INTENSE_WORDS: &[&str] = &["angry", "mad", "frustrated"];
const ANXIOUS_WORDS: &[&str] = &["scared", "fearful", "nervous"];

fn contains_any(mood: &str, words: &[&str]) -> bool {
    words.iter().any(|w| mood.contains(w))
}

/// Deterministic mood classifier used when the language model is not
/// configured or returned unusable output. Keyword groups are checked in a
/// fixed order and the first match wins; if none match, the full mood
/// string is looked up in the static table.
pub fn fallback_analysis(mood_input: &str) -> MoodAnalysis {
    let mood = mood_input.to_lowercase();

    if contains_any(&mood, POSITIVE_WORDS) {
        // Comedy, Adventure, Animation
        return MoodAnalysis::new(
            vec![35, 12, 16],
            6.5,
            "Fallback: detected positive mood",
        );
    }

    if contains_any(&mood, REFLECTIVE_WORDS) {
        // Drama, Romance
        return MoodAnalysis::new(
            vec![18, 10749],
            7.0,
            "Fallback: detected reflective mood",
        );
    }

    if contains_any(&mood, INTENSE_WORDS) {
        // Action, Thriller, Crime
        return MoodAnalysis::new(vec![28, 53, 80], 6.0, "Fallback: detected intense mood");
    }

    if contains_any(&mood, ANXIOUS_WORDS) {
        // Comedy, Family (comfort movies), and keep horror out
        let mut analysis = MoodAnalysis::new(
            vec![35, 10751],
            6.5,
            "Fallback: detected anxious mood, suggesting comfort movies",
        );
        analysis.avoid_genres = vec![27];
        return analysis;
    }

    let genres = mood_genre_table()
        .get(mood.as_str())
        .cloned()
        .unwrap_or_else(|| DEFAULT_GENRES.to_vec());

    MoodAnalysis::new(genres, 6.0, "Fallback: using basic mood mapping")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_mood() {
        let analysis = fallback_analysis("happy");
        assert_eq!(analysis.genres, vec![35, 12, 16]);
        assert_eq!(analysis.min_rating, Some(6.5));
        assert!(analysis.reasoning.contains("positive mood"));
    }

    #[test]
    fn test_reflective_mood() {
        let analysis = fallback_analysis("feeling a bit gloomy today");
        assert_eq!(analysis.genres, vec![18, 10749]);
        assert_eq!(analysis.min_rating, Some(7.0));
        assert!(analysis.reasoning.contains("reflective mood"));
    }

    #[test]
    fn test_intense_mood() {
        let analysis = fallback_analysis("FRUSTRATED with everything");
        assert_eq!(analysis.genres, vec![28, 53, 80]);
        assert_eq!(analysis.min_rating, Some(6.0));
    }

    #[test]
    fn test_anxious_mood_avoids_horror() {
        let analysis = fallback_analysis("scared");
        assert_eq!(analysis.genres, vec![35, 10751]);
        assert_eq!(analysis.avoid_genres, vec![27]);
        assert_eq!(analysis.min_rating, Some(6.5));
    }

    #[test]
    fn test_group_precedence_first_match_wins() {
        // Contains both a positive and a reflective keyword; the positive
        // group is checked first.
        let analysis = fallback_analysis("happy but sad");
        assert_eq!(analysis.genres, vec![35, 12, 16]);
        assert!(analysis.reasoning.contains("positive mood"));
    }

    #[test]
    fn test_static_table_lookup() {
        let analysis = fallback_analysis("romantic");
        assert_eq!(analysis.genres, vec![10749, 35]);
        assert!(analysis.reasoning.contains("basic mood mapping"));
    }

    #[test]
    fn test_unknown_mood_defaults() {
        let analysis = fallback_analysis("feeling like a pretzel");
        assert_eq!(analysis.genres, DEFAULT_GENRES.to_vec());
        assert_eq!(analysis.min_rating, Some(6.0));
    }

    #[test]
    fn test_deterministic_and_always_valid() {
        for mood in ["", "happy", "zzz", "scared stiff", "tense", "😀"] {
            let a = fallback_analysis(mood);
            let b = fallback_analysis(mood);
            assert_eq!(a, b);
            assert!(!a.genres.is_empty());
            assert!(!a.reasoning.is_empty());
        }
    }
}
