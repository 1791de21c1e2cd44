pub mod account;
pub mod state;

pub use account::*;
pub use state::*;
