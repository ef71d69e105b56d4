pub mod provider;
pub mod request;

pub use provider::*;
pub use request::*;
