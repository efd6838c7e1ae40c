pub mod model;
pub mod coherence;
