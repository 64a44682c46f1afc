//! Layout governance: z-index contracts, safe-frame shells, protection
//! levels, and the validator that checks them.

pub mod banding;
pub mod constraints;
pub mod store;
pub mod types;
pub mod validator;

pub use banding::LayerBanding;
pub use store::LayoutContractStore;
pub use types::*;
pub use validator::{LayoutValidator, CRITICAL_ESCALATION_MESSAGE};
