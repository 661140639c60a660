// Skill-based job recommendation.
// Implements: normalization, vocabulary, binary vectorization, cosine similarity,
// ranking, and display shaping. Everything except `handlers` is pure.

pub mod handlers;
pub mod normalize;
pub mod presentation;
pub mod ranker;
pub mod similarity;
pub mod vectorizer;
pub mod vocabulary;
