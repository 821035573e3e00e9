pub mod config;
pub mod error;
pub mod loader;
pub mod record;
pub mod round;
pub mod scorer;
pub mod semester;
// cmd and reports stay modules of the binary crate (main).
