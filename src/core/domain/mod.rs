//! Domain types.

mod document;
pub mod expiration;
mod token;

pub use document::{group_key, token_key, TokenGroup, TokenStore};
pub use token::Token;
