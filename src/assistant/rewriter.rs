//! Plain-language rewriting of medical text and terms.

use super::gate::{GenerationGate, EXPLAIN_PARAMS, SIMPLIFY_PARAMS};
use std::sync::Arc;
use tracing::error;

pub const SIMPLIFY_PREAMBLE: &str = "Here's a simpler way to understand it: ";

const SIMPLIFY_SYSTEM_PROMPT: &str = "You are an expert at explaining medical information in simple, teen-friendly language. Rewrite the given text using everyday words that a teenager would understand. Keep it accurate but make it easy to read.";
const EXPLAIN_SYSTEM_PROMPT: &str = "You are a helpful medical educator. Explain medical terms in simple, clear language that anyone can understand. Focus on women's health topics.";

/// Literal, case-sensitive replacements applied in this order: longer
/// phrases first, so no replacement can split a longer phrase.
pub const SIMPLIFICATIONS: [(&str, &str); 6] = [
    ("hormonal disorder", "hormone problem"),
    ("reproductive age", "when you can have babies"),
    ("menstrual cycle", "period cycle"),
    ("contraceptives", "birth control"),
    ("gynecological", "women's health"),
    ("syndrome", "condition"),
];

/// Keyed by lower-cased, trimmed term.
pub const EXPLANATIONS: [(&str, &str); 4] = [
    (
        "pcos",
        "PCOS stands for Polycystic Ovary Syndrome. It's a common condition where a woman's hormones are out of balance, causing irregular periods, weight gain, acne, and extra hair growth.",
    ),
    (
        "ovulation",
        "Ovulation is when your ovary releases an egg each month, usually around the middle of your cycle when you're most likely to get pregnant.",
    ),
    (
        "menstruation",
        "Menstruation is your monthly period - when the lining of your uterus sheds. It's a normal part of your reproductive cycle.",
    ),
    (
        "hormones",
        "Hormones are chemical messengers in your body that control many functions, including your menstrual cycle, mood, and growth.",
    ),
];

pub struct TermRewriter {
    gate: Arc<GenerationGate>,
}

impl TermRewriter {
    pub fn new(gate: Arc<GenerationGate>) -> Self {
        Self { gate }
    }

    pub async fn simplify(&self, text: &str) -> String {
        if self.gate.is_enabled() {
            let prompt = format!("Please simplify this medical text for a teenager: {}", text);
            match self
                .gate
                .generate(SIMPLIFY_SYSTEM_PROMPT, &prompt, SIMPLIFY_PARAMS)
                .await
            {
                Ok(simplified) => return simplified,
                Err(err) => error!("Error simplifying with AI: {}", err),
            }
        }
        simplify_with_dictionary(text)
    }

    pub async fn explain(&self, term: &str) -> String {
        if self.gate.is_enabled() {
            let prompt = format!(
                "Please explain the medical term '{}' in simple language that's easy to understand.",
                term
            );
            match self
                .gate
                .generate(EXPLAIN_SYSTEM_PROMPT, &prompt, EXPLAIN_PARAMS)
                .await
            {
                Ok(explanation) => return explanation,
                Err(err) => error!("Error explaining term with AI: {}", err),
            }
        }
        explain_from_dictionary(term)
    }
}

pub fn simplify_with_dictionary(text: &str) -> String {
    let simplified = SIMPLIFICATIONS
        .iter()
        .fold(text.to_string(), |acc, (medical, simple)| {
            acc.replace(medical, simple)
        });
    format!("{}{}", SIMPLIFY_PREAMBLE, simplified)
}

pub fn explain_from_dictionary(term: &str) -> String {
    let key = term.trim().to_lowercase();
    EXPLANATIONS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, explanation)| explanation.to_string())
        .unwrap_or_else(|| {
            format!(
                "'{}' is a medical term. I'd recommend asking your healthcare provider for a detailed explanation specific to your situation.",
                term
            )
        })
}

#[cfg(test)]
mod tests {
    use super::super::gate::testing::ScriptedProvider;
    use super::*;
    use std::time::Duration;

    fn offline() -> TermRewriter {
        TermRewriter::new(Arc::new(GenerationGate::disabled()))
    }

    #[tokio::test]
    async fn simplify_replaces_known_phrases() {
        let out = offline()
            .simplify("PCOS is a hormonal disorder affecting women of reproductive age.")
            .await;
        assert_eq!(
            out,
            "Here's a simpler way to understand it: PCOS is a hormone problem affecting women of when you can have babies."
        );
    }

    #[tokio::test]
    async fn simplify_without_known_terms_only_adds_preamble() {
        let text = "Drink water and rest.";
        let out = offline().simplify(text).await;
        assert_eq!(out, format!("{}{}", SIMPLIFY_PREAMBLE, text));
    }

    #[test]
    fn replacements_are_case_sensitive() {
        assert_eq!(
            simplify_with_dictionary("Syndrome and syndrome"),
            format!("{}Syndrome and condition", SIMPLIFY_PREAMBLE)
        );
    }

    #[tokio::test]
    async fn explain_uses_dictionary_case_insensitively() {
        let rewriter = offline();
        assert_eq!(rewriter.explain("pcos").await, EXPLANATIONS[0].1);
        assert_eq!(rewriter.explain("  Ovulation ").await, EXPLANATIONS[1].1);
    }

    #[tokio::test]
    async fn explain_unknown_term_defers_with_literal_term() {
        let out = offline().explain("Endometriosis").await;
        assert!(out.starts_with("'Endometriosis' is a medical term."));
    }

    #[tokio::test]
    async fn generation_is_preferred_when_available() {
        let provider = Arc::new(ScriptedProvider::replying("Simple words."));
        let rewriter = TermRewriter::new(Arc::new(GenerationGate::enabled(
            provider.clone(),
            Duration::from_secs(5),
        )));

        assert_eq!(rewriter.simplify("syndrome").await, "Simple words.");
        assert_eq!(rewriter.explain("pcos").await, "Simple words.");

        let calls = provider.calls.lock().unwrap();
        assert_eq!(calls[0].1.max_tokens, Some(300));
        assert_eq!(calls[1].1.max_tokens, Some(200));
        assert!(calls[1].0[1].content.contains("'pcos'"));
    }

    #[tokio::test]
    async fn generation_failure_falls_back_to_dictionary() {
        let rewriter = TermRewriter::new(Arc::new(GenerationGate::enabled(
            Arc::new(ScriptedProvider::failing("down")),
            Duration::from_secs(5),
        )));
        assert_eq!(rewriter.explain("pcos").await, EXPLANATIONS[0].1);
        assert_eq!(
            rewriter.simplify("syndrome").await,
            format!("{}condition", SIMPLIFY_PREAMBLE)
        );
    }
}
