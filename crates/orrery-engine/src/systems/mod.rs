pub mod picking;
pub mod tooltip;
