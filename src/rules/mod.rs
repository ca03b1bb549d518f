//! String classification rules.
//!
//! Extraction sweeps up everything that looks like a string literal, so the
//! raw dump mixes real UI copy with identifiers, constants, and framework
//! vocabulary. The rules here decide which strings are worth a translator's
//! time. Each heuristic is a pure function that can be tested on its own; the
//! block-list comes from configuration so the policy can be tuned per project
//! without touching the pipeline.
//!
//! ## Module Structure
//!
//! - `blocklist`: substring match against known technical tokens
//! - `identifier`: camelCase / snake_case identifier heuristics
//! - `token`: short symbolic and constant-like token heuristics

pub mod blocklist;
pub mod identifier;
pub mod token;

use std::fmt;

/// Why a string was rejected as technical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RejectReason {
    BlocklistToken,
    CamelCaseIdentifier,
    SnakeCaseIdentifier,
    ShortSymbolic,
    ConstantLike,
}

impl RejectReason {
    pub fn all() -> [RejectReason; 5] {
        [
            RejectReason::BlocklistToken,
            RejectReason::CamelCaseIdentifier,
            RejectReason::SnakeCaseIdentifier,
            RejectReason::ShortSymbolic,
            RejectReason::ConstantLike,
        ]
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::BlocklistToken => write!(f, "technical keyword"),
            RejectReason::CamelCaseIdentifier => write!(f, "camelCase identifier"),
            RejectReason::SnakeCaseIdentifier => write!(f, "snake_case identifier"),
            RejectReason::ShortSymbolic => write!(f, "short non-alphabetic token"),
            RejectReason::ConstantLike => write!(f, "constant-like token"),
        }
    }
}

/// The classification policy: a block-list plus the fixed case heuristics.
#[derive(Debug, Clone)]
pub struct Policy {
    /// Block-list tokens, lowercased at construction.
    blocklist: Vec<String>,
}

impl Policy {
    pub fn new(blocklist: &[String]) -> Self {
        Self {
            blocklist: blocklist.iter().map(|t| t.to_lowercase()).collect(),
        }
    }

    /// Classify a candidate string.
    ///
    /// Returns the first matching rejection reason, or `None` if the string
    /// is user-facing. Rules short-circuit in a fixed order, so a string that
    /// trips several heuristics reports only the earliest one.
    pub fn classify(&self, text: &str) -> Option<RejectReason> {
        if blocklist::matches(text, &self.blocklist) {
            return Some(RejectReason::BlocklistToken);
        }
        if identifier::is_camel_case(text) {
            return Some(RejectReason::CamelCaseIdentifier);
        }
        if identifier::is_snake_case(text) {
            return Some(RejectReason::SnakeCaseIdentifier);
        }
        if token::is_short_symbolic(text) {
            return Some(RejectReason::ShortSymbolic);
        }
        if token::is_constant_like(text) {
            return Some(RejectReason::ConstantLike);
        }
        None
    }

    pub fn is_technical(&self, text: &str) -> bool {
        self.classify(text).is_some()
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self::new(&crate::config::default_technical_keywords())
    }
}
