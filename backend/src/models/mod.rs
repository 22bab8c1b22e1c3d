//! Data models for the AI Jurisdiction backend.
//!
//! These models match the frontend TypeScript interfaces for seamless interoperability.

mod auth;
mod case;
mod chat;
mod session;

pub use auth::*;
pub use case::*;
pub use chat::*;
pub use session::*;
