pub mod human;
pub mod random;

pub use human::HumanMode;
pub use random::{RandomConfig, RandomMode};
