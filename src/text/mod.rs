// Text processing — normalization and keyword-feature extraction.

pub mod features;
pub mod normalize;

pub use features::{extract_features, PostFeatures};
pub use normalize::Normalizer;
