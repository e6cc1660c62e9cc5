//! Domains module containing business logic organized by bounded contexts.
//!
//! - **weather**: weather samples and the providers that produce them
//! - **tools**: the tool catalog and the dispatcher that answers tool calls

pub mod tools;
pub mod weather;
