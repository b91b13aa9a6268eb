pub mod checksum;
pub mod classify;
pub mod confidence;
pub mod detect;
pub mod fields;
pub mod normalize;

pub use classify::FormatClassifier;
pub use confidence::ConfidenceScorer;
pub use detect::CandidateDetector;
pub use fields::FieldExtractor;
pub use normalize::LineNormalizer;
