pub mod fraction;
pub mod geometry;
pub mod gradient;
pub mod index;
pub mod offroute;
pub mod progress;
