// external
pub extern crate hex;

// exports
pub mod global;
pub mod host_context;
pub mod logged;
pub mod memory;
pub mod mock;

pub use global::Config;
pub use host_context::{HostBuffer, HostContext};
pub use logged::LoggedHost;
pub use memory::{InMemoryHost, LogEntry, SelfDestructRecord};
pub use mock::MockHostContext;
