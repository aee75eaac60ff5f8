//! Command implementations for the dataprep CLI.

mod augment;
mod init;
mod normalize;
mod single;

// Re-export all command functions
pub use augment::cmd_augment;
pub use init::cmd_init;
pub use normalize::cmd_normalize;
pub use single::{cmd_invert, cmd_rotate};
