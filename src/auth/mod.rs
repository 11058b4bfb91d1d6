// file: src/auth/mod.rs
// description: authentication module exports
// reference: internal module structure

mod credentials;

pub use credentials::{API_KEY_VAR, Credentials, USERNAME_VAR};
