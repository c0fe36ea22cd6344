//! Command implementations for the stitch CLI.
//!
//! Stitch has a single action, implemented in [`setup`]: detect the
//! project's framework, install and scaffold Tailwind when its config
//! is missing, then patch the config and stylesheets.

pub mod setup;
pub(crate) mod utils;

// Re-export the execute function for convenience
pub use setup::execute as setup_execute;
