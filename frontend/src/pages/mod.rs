pub mod admin;
pub mod auth;
pub mod games;
pub mod slots;
pub mod support;
