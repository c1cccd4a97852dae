pub mod challenge;
pub mod engine;
pub mod options;
pub mod sink;
pub mod worker;

pub use challenge::Challenge;
pub use engine::{EngineState, EvolutionResult, PopulationEngine};
pub use options::{EvolutionOptions, LogLevel};
pub use sink::{GenerationRecord, GenerationSink, NullSink};
