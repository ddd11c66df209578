pub mod body;
pub mod context;
pub mod integrator;
pub mod registry;
pub mod rng;
pub mod starfield;
pub mod time;
