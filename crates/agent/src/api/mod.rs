//! Public agent API surface.
//!
//! This module gathers the types the turn loop interacts with so the policy
//! modules can stay focused on decision logic.

pub mod agent;
pub mod errors;

pub use agent::{Agent, DeclareEndAgent};
pub use errors::{AgentError, Result};
