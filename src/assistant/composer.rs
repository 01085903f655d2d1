//! Turns a question into a `ResponseEnvelope`.
//!
//! Two strategies: generation with retrieved context when the gate is open,
//! and template-wrapped dataset answers otherwise. A failed generation call
//! falls back to the dataset for that request only.

use super::envelope::{clamp_unit, ResponseEnvelope, Source};
use super::gate::{GenerationGate, CHAT_PARAMS};
use super::PersonalityMode;
use crate::corpus::Corpus;
use crate::error::AssistantResult;
use crate::retrieval::{RelevanceScorer, ScoredMatch};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Number of records embedded in a generation prompt.
pub const CONTEXT_TOP_K: usize = 3;

pub const GENERIC_CONFIDENCE: f64 = 0.5;
pub const ERROR_CONFIDENCE: f64 = 0.3;
pub const GENERATED_CONFIDENCE: f64 = 0.9;
pub const GENERATED_WITH_CONTEXT_CONFIDENCE: f64 = 0.95;

const GENERATED_SOURCE_SCORE: f64 = 0.9;
const SOURCE_QUESTION_MAX_CHARS: usize = 100;

pub struct ResponseComposer {
    corpus: Arc<Corpus>,
    scorer: RelevanceScorer,
    gate: Arc<GenerationGate>,
}

impl ResponseComposer {
    pub fn new(corpus: Arc<Corpus>, scorer: RelevanceScorer, gate: Arc<GenerationGate>) -> Self {
        Self {
            corpus,
            scorer,
            gate,
        }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn gate(&self) -> &GenerationGate {
        &self.gate
    }

    /// Answers `question`. Never fails: internal errors become the mode's
    /// error template with confidence 0.3.
    pub async fn compose(
        &self,
        question: &str,
        mode: PersonalityMode,
        category: Option<&str>,
    ) -> ResponseEnvelope {
        match self.try_compose(question, mode, category).await {
            Ok(envelope) => envelope,
            Err(err) => {
                error!("Error getting response: {}", err);
                error_response(mode)
            }
        }
    }

    async fn try_compose(
        &self,
        question: &str,
        mode: PersonalityMode,
        category: Option<&str>,
    ) -> AssistantResult<ResponseEnvelope> {
        if self.gate.is_enabled() {
            match self.generated_response(question, mode, category).await {
                Ok(envelope) => return Ok(envelope),
                Err(err) => warn!("Error with AI response, using knowledge base: {}", err),
            }
        }
        let matches = self.scorer.score(question, category, &self.corpus, 1);
        knowledge_response(question, mode, &matches)
    }

    async fn generated_response(
        &self,
        question: &str,
        mode: PersonalityMode,
        category: Option<&str>,
    ) -> AssistantResult<ResponseEnvelope> {
        let matches = self
            .scorer
            .score(question, category, &self.corpus, CONTEXT_TOP_K);
        let context = build_context(&matches);
        debug!(context_entries = matches.len(), mode = %mode, "Generating answer");

        let answer = self
            .gate
            .generate(mode.system_prompt(), &build_user_prompt(&context, question), CHAT_PARAMS)
            .await?;

        if matches.is_empty() {
            return ResponseEnvelope::new(answer, Vec::new(), GENERATED_CONFIDENCE);
        }
        let mut source = Source::new(
            "Medical knowledge base and clinical guidelines",
            GENERATED_SOURCE_SCORE,
        )
        .with_meta("source", "ai_enhanced")
        .with_meta("context_entries", matches.len());
        if let Some(model) = self.gate.model() {
            source = source.with_meta("model", model);
        }
        ResponseEnvelope::new(answer, vec![source], GENERATED_WITH_CONTEXT_CONFIDENCE)
    }
}

/// Dataset answer for the best match, or the generic answer when there is none.
pub fn knowledge_response(
    question: &str,
    mode: PersonalityMode,
    matches: &[ScoredMatch<'_>],
) -> AssistantResult<ResponseEnvelope> {
    let Some(best) = matches.first() else {
        return Ok(generic_response(question, mode));
    };

    let score = clamp_unit(best.score);
    let source = Source::new(truncate_question(&best.record.question), score)
        .with_meta("category", best.record.category.as_str())
        .with_meta("source", "medical_dataset");

    ResponseEnvelope::new(
        mode.wrap_answer(&best.record.answer, question),
        vec![source],
        score,
    )
}

pub fn generic_response(question: &str, mode: PersonalityMode) -> ResponseEnvelope {
    ResponseEnvelope::canned(mode.generic_answer(question), GENERIC_CONFIDENCE)
}

pub fn error_response(mode: PersonalityMode) -> ResponseEnvelope {
    ResponseEnvelope::canned(mode.error_answer(), ERROR_CONFIDENCE)
}

/// "Q: ...\nA: ..." blocks separated by blank lines.
pub fn build_context(matches: &[ScoredMatch<'_>]) -> String {
    matches
        .iter()
        .map(|m| format!("Q: {}\nA: {}", m.record.question, m.record.answer))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn build_user_prompt(context: &str, question: &str) -> String {
    format!(
        "\nBased on the following medical information context, please answer the user's question about women's health:\n\n\
         CONTEXT:\n{}\n\n\
         QUESTION: {}\n\n\
         Please provide a helpful, accurate response. If the context doesn't contain enough information, use your knowledge but always recommend consulting healthcare professionals for personalized advice.\n",
        context, question
    )
}

fn truncate_question(question: &str) -> String {
    let truncated: String = question.chars().take(SOURCE_QUESTION_MAX_CHARS).collect();
    format!("{}...", truncated)
}
