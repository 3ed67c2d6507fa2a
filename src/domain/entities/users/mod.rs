//! Users Entity Module

pub mod user;

pub use user::{Profile, User, UserDetails};
