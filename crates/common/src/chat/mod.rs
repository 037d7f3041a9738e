//! Chat query-interpretation pipeline
//!
//! Turns one user utterance into a handling lane, a residual keyword set,
//! an expert match query, and a lane-conditioned system prompt:
//!
//! utterance -> classifier -> (canned reply | keywords -> matcher + prompt)
//!
//! Every stage is pure; the gateway handler owns I/O (directory query and
//! completion call) and final response assembly.

pub mod assembler;
pub mod classifier;
pub mod lexicon;
pub mod matcher;
pub mod normalize;
pub mod prompt;

pub use classifier::{classify, Classification, FaqTopic, GreetingKind, Lane};
pub use lexicon::Lexicon;
pub use matcher::MatchQuery;
