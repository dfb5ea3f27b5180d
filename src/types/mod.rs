pub mod congestion;
pub mod gradient;
pub mod route;
