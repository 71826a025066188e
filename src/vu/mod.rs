//! Virtual-user execution contexts and session jar binding.

pub mod context;

pub use context::{VuContext, VuOptions, VuState};
