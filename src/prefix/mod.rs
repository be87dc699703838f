//! Contiguous sequential pattern mining by prefix projection.

pub mod mining;
pub mod projection;

#[cfg(test)]
mod tests;

pub use mining::{mine_sequences, prefix_span};
pub use projection::{extend_candidates, project_level_one, SequenceCandidate, SequenceCandidates};
