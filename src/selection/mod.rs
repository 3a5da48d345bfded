pub mod roulette;

pub use roulette::{selection_weights, RouletteWheelSelection};
