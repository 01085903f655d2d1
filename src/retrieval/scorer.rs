use super::normalize::{normalize_words, qualifying_words};
use crate::corpus::CorpusRecord;
use std::collections::HashSet;

/// Additive weights for each relevance signal.
///
/// One weighting is used for every caller (knowledge answers and prompt
/// context alike) so that rankings are consistent across request types.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    /// Record category equals the requested category.
    pub category: f64,
    /// Whole query contained in the record question, or the other way around.
    pub exact_question: f64,
    /// Extra bonus when the record question equals the query.
    pub identical_question: f64,
    /// Query word found anywhere in "question answer".
    pub text_contains: f64,
    /// Query word equals one of the tags.
    pub tag_exact: f64,
    /// Query word is one of the record's question words.
    pub question_word: f64,
    /// Query word is one of the record's answer words.
    pub answer_word: f64,
    /// Query word is a substring of a tag; applied once per matching tag.
    pub tag_substring: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            category: 0.5,
            exact_question: 10.0,
            identical_question: 10.0,
            text_contains: 0.3,
            tag_exact: 0.4,
            question_word: 0.3,
            answer_word: 0.2,
            tag_substring: 0.2,
        }
    }
}

/// A record paired with its relevance for one query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredMatch<'a> {
    pub record: &'a CorpusRecord,
    pub score: f64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RelevanceScorer {
    weights: ScoringWeights,
}

impl RelevanceScorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Ranks `corpus` against `question`.
    ///
    /// Records scoring zero are dropped, the rest are sorted by descending
    /// score with ties kept in corpus order, then cut to `top_k`.
    pub fn score<'a>(
        &self,
        question: &str,
        category: Option<&str>,
        corpus: &'a [CorpusRecord],
        top_k: usize,
    ) -> Vec<ScoredMatch<'a>> {
        let words = qualifying_words(question);
        if words.is_empty() || corpus.is_empty() || top_k == 0 {
            return Vec::new();
        }
        let lowered = question.trim().to_lowercase();

        let mut matches: Vec<ScoredMatch<'a>> = corpus
            .iter()
            .filter_map(|record| {
                let score = self.score_record(&lowered, &words, category, record);
                (score > 0.0).then_some(ScoredMatch { record, score })
            })
            .collect();

        // `sort_by` is stable, so equal scores keep corpus order.
        matches.sort_by(|a, b| b.score.total_cmp(&a.score));
        matches.truncate(top_k);
        matches
    }

    fn score_record(
        &self,
        lowered: &str,
        words: &[String],
        category: Option<&str>,
        record: &CorpusRecord,
    ) -> f64 {
        let w = &self.weights;
        let mut score = 0.0;

        if category.is_some_and(|c| c == record.category) {
            score += w.category;
        }

        let record_question = record.question.trim().to_lowercase();
        if !record_question.is_empty()
            && (record_question.contains(lowered) || lowered.contains(&record_question))
        {
            score += w.exact_question;
            if record_question == lowered {
                score += w.identical_question;
            }
        }

        let text = format!("{} {}", record.question, record.answer).to_lowercase();
        let tags: Vec<String> = record.tags.iter().map(|t| t.to_lowercase()).collect();
        let question_words: HashSet<String> = normalize_words(&record.question).into_iter().collect();
        let answer_words: HashSet<String> = normalize_words(&record.answer).into_iter().collect();

        for word in words {
            if text.contains(word.as_str()) {
                score += w.text_contains;
            }
            if tags.iter().any(|t| t == word) {
                score += w.tag_exact;
            }
            if question_words.contains(word) {
                score += w.question_word;
            }
            if answer_words.contains(word) {
                score += w.answer_word;
            }
            let tag_hits = tags.iter().filter(|t| t.contains(word.as_str())).count();
            score += w.tag_substring * tag_hits as f64;
        }

        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::default_records;

    fn record(question: &str, answer: &str, category: &str, tags: &[&str]) -> CorpusRecord {
        CorpusRecord::new(question, answer, category, tags, "test")
    }

    #[test]
    fn pcos_question_ranks_pcos_record_first() {
        let corpus = default_records();
        let matches = RelevanceScorer::default().score("What is PCOS?", Some("pcos"), &corpus, 3);

        assert!(!matches.is_empty());
        assert_eq!(matches[0].record.category, "pcos");
        assert!(matches.len() <= 3);
        for pair in matches.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn exact_question_is_always_top_ranked() {
        let corpus = default_records();
        let scorer = RelevanceScorer::default();
        for (i, rec) in corpus.iter().enumerate() {
            let query = rec.question.to_uppercase();
            let matches = scorer.score(&query, None, &corpus, 1);
            assert_eq!(matches.len(), 1);
            assert!(
                std::ptr::eq(matches[0].record, &corpus[i]),
                "record {} was not ranked first for its own question",
                i
            );
        }
    }

    #[test]
    fn identical_question_beats_contained_question() {
        let corpus = vec![
            record(
                "PCOS?",
                "Short note about pcos.",
                "pcos",
                &["pcos", "pcos symptoms", "pcos signs", "pcos care"],
            ),
            record("What is PCOS?", "PCOS is a hormonal condition.", "pcos", &[]),
        ];
        let matches = RelevanceScorer::default().score("What is PCOS?", None, &corpus, 2);

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].record.question, "What is PCOS?");
    }

    #[test]
    fn empty_corpus_or_no_qualifying_words_yields_nothing() {
        let scorer = RelevanceScorer::default();
        assert!(scorer.score("What is PCOS?", Some("pcos"), &[], 5).is_empty());

        let corpus = default_records();
        assert!(scorer.score("is it ok", Some("pcos"), &corpus, 5).is_empty());
        assert!(scorer.score("   ", None, &corpus, 5).is_empty());
    }

    #[test]
    fn zero_score_records_are_discarded() {
        let corpus = vec![
            record("Cramps?", "Heat helps cramps.", "menstruation", &["cramps"]),
            record("Acne?", "Hormones.", "pcos", &["skin"]),
        ];
        let matches = RelevanceScorer::default().score("cramps relief", None, &corpus, 5);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].record.question, "Cramps?");
    }

    #[test]
    fn ties_keep_corpus_order() {
        let corpus = vec![
            record("First", "shared words here", "a", &[]),
            record("Second", "shared words here", "b", &[]),
            record("Third", "shared words here", "c", &[]),
        ];
        let matches = RelevanceScorer::default().score("shared", None, &corpus, 3);
        let order: Vec<&str> = matches.iter().map(|m| m.record.question.as_str()).collect();
        assert_eq!(order, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn top_k_bounds_result_length() {
        let corpus = default_records();
        let matches = RelevanceScorer::default().score("symptoms periods", None, &corpus, 2);
        assert_eq!(matches.len(), 2);
    }

    #[test]
    fn score_grows_with_shared_tag_words() {
        let rec = record("Unrelated", "Nothing to see", "x", &["alpha", "bravo", "charlie"]);
        let corpus = vec![rec];
        let scorer = RelevanceScorer::default();

        let mut previous = 0.0;
        for query in ["zulu", "alpha zulu", "alpha bravo zulu", "alpha bravo charlie zulu"] {
            let score = scorer
                .score(query, None, &corpus, 1)
                .first()
                .map(|m| m.score)
                .unwrap_or(0.0);
            assert!(score >= previous, "{} scored lower than before", query);
            previous = score;
        }
        assert!(previous > 0.0);
    }

    #[test]
    fn category_only_applies_on_exact_match() {
        let corpus = vec![record("Q", "unrelated", "pcos", &[])];
        let scorer = RelevanceScorer::default();

        let with = scorer.score("something", Some("pcos"), &corpus, 1);
        assert_eq!(with.len(), 1);
        assert!((with[0].score - scorer.weights().category).abs() < 1e-9);

        assert!(scorer.score("something", Some("PCOS"), &corpus, 1).is_empty());
    }

    #[test]
    fn word_signals_accumulate_with_documented_weights() {
        let corpus = vec![record(
            "Why do cramps happen?",
            "Cramps come from contractions.",
            "menstruation",
            &["cramps", "period cramps"],
        )];
        let w = ScoringWeights::default();
        let matches = RelevanceScorer::default().score("cramps today", None, &corpus, 1);

        // "today" matches nothing; "cramps" hits text, tag exact, question word,
        // answer word and two tag substrings.
        let expected = w.text_contains + w.tag_exact + w.question_word + w.answer_word
            + 2.0 * w.tag_substring;
        assert!((matches[0].score - expected).abs() < 1e-9);
    }
}
