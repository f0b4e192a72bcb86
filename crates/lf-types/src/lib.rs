pub mod config;
pub mod errors;
pub mod record;
pub mod result;

pub use config::*;
pub use errors::*;
pub use record::*;
pub use result::*;
