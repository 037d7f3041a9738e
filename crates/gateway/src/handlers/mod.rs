//! API handlers module

pub mod chat;
pub mod domains;
pub mod experts;
pub mod health;
