pub mod config;
pub mod error;
pub mod images;


pub use config::*;
pub use error::*;
pub use images::*;
