//! Shared constants for end-to-end tests
//!
//! When the fixture dataset changes, update only this file.

// ============================================================================
// Fixture Dataset
// ============================================================================

pub const PERIOD_QUESTION: &str = "How long does a normal period last?";
pub const PERIOD_ANSWER: &str =
    "A typical period lasts between three and seven days, and flow is usually heaviest early on.";
pub const PERIOD_CATEGORY: &str = "menstruation";

pub const STRESS_QUESTION: &str = "Can stress delay ovulation?";
pub const STRESS_ANSWER: &str =
    "Yes, high stress can delay ovulation, which pushes your next period later than expected.";

/// Number of records in the fixture dataset
pub const FIXTURE_RECORD_COUNT: usize = 2;

/// A question that matches nothing in the fixture dataset
pub const UNRELATED_QUESTION: &str = "xyzzy plugh quux";

// ============================================================================
// Generation Mock
// ============================================================================

pub const MOCK_API_KEY: &str = "sk-test-key";
pub const MOCK_MODEL: &str = "mock-gpt";
pub const MOCK_REPLY: &str = "This answer came from the generation service.";

// ============================================================================
// Timeouts
// ============================================================================

/// Maximum time to wait for the server to become ready (milliseconds)
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Interval between readiness checks (milliseconds)
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 10;

/// Timeout for HTTP requests made by the test client (seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
