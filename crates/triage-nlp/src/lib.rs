//! Emergency message triage pipeline.
//!
//! Extracts lexicon keywords and named entities through a
//! [`LinguisticAnalyzer`], scores sentiment through an optional
//! [`SentimentClassifier`], computes a priority score and tier, and renders a
//! templated response from the knowledge base.

pub mod adapters;
pub mod analyzer;
pub mod classifier;
pub mod error;
pub mod extractor;
pub mod pipeline;
pub mod priority;
pub mod response;
pub mod sentiment;

pub use adapters::{optional_classifier, AnyAnalyzer, HttpAnalyzer, LexicalAnalyzer, TeiClassifier};
pub use analyzer::{Document, EntitySpan, LinguisticAnalyzer, Token};
pub use classifier::{Prediction, SentimentClassifier};
pub use error::{AnalyzerError, ClassifierError, TriageError};
pub use extractor::{ExtractionResult, InformationExtractor};
pub use pipeline::TriagePipeline;
pub use priority::{classify_priority, priority_score};
pub use response::{location_phrase, ResponseGenerator};
pub use sentiment::SentimentScorer;
