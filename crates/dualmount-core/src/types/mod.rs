//! Domain vocabulary shared by every subsystem.

mod macros;

pub mod environment;
pub mod layer;
pub mod priority;

pub use environment::Environment;
pub use layer::{Layer, ProtectionLevel};
pub use priority::{Priority, RoleCategory};
