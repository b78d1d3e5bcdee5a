//! Middleware Module
//!
//! Request-processing pieces that run before handler logic.
//!
//! - **`user`** - Extracts the requesting identity from the `user` header

pub mod user;

pub use user::{RequestUser, USER_HEADER};
