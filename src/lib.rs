pub mod bounds;
pub mod breeding;
pub mod cost;
pub mod error;
pub mod evolution;
pub mod individual;
pub mod population;
pub mod rng;
pub mod selection;

// Re-export commonly used types for convenience
pub use bounds::{Bound, Bounds};
pub use cost::{CostFunction, Fallible};
pub use error::{GeneticError, OptionExt, Result, ResultExt};
pub use evolution::{run, EvolutionLauncher, EvolutionOptions, EvolutionResult, LogLevel};
pub use individual::Individual;
pub use population::Population;
pub use rng::RandomNumberGenerator;
