//! Typed records shared between the HTTP layer and the store.

pub mod health;
pub mod log;
pub mod response;
