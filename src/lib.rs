//! Core library for analyzing directed, weighted developer collaboration graphs

pub mod analysis;
pub mod config;
pub mod error;
pub mod graph;
pub mod interaction;

pub use analysis::{run_complete_analysis, AnalysisResult};
pub use config::AnalysisConfig;
pub use error::GraphError;
pub use graph::{new_graph, Graph, GraphBuilder, Representation};
pub use interaction::{Contributor, Interaction, InteractionKind};

/// Crate-wide result type for graph and analysis operations
pub type Result<T> = std::result::Result<T, GraphError>;
