use thiserror::Error;

/// Errors surfaced by the MRZ interpretation pipeline.
///
/// Every failure is caller-visible and non-retriable; the pipeline never
/// returns a partial record alongside an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MrzError {
    /// No line in the recognizer output passed the MRZ-candidate filter.
    #[error("could not detect MRZ-like lines in recognizer output")]
    NoCandidatesFound,

    /// Candidate lines exist but cannot be assembled into a 2- or 3-line
    /// set under the classification rules.
    #[error("not enough MRZ lines found")]
    InsufficientLines,

    /// The dispatcher received a candidate set of unusable length.
    /// Unreachable through the text pipeline, but `parse_lines` accepts
    /// caller-assembled sets and must reject them explicitly.
    #[error("unsupported MRZ layout: {0} line(s)")]
    UnsupportedLayout(usize),
}
