pub mod builder;
pub mod player;
pub mod tool_runner;

pub use builder::*;
pub use player::*;
