//! Core library for the stitch CLI.
//!
//! Everything the `stitch` binary does lives here as plain functions
//! taking an explicit project root, so the pieces can be exercised in
//! isolation without touching the process working directory:
//!
//! - [`detect`] - Classify a project as Vite+React and/or Next.js by
//!   probing its `package.json`
//! - [`toolchain`] - Install Tailwind's dev dependencies and scaffold
//!   its config files through an injectable [`Toolchain`] boundary
//! - [`patch`] - Rewrite the `content` placeholder in
//!   `tailwind.config.js` and prepend the `@tailwind` directives to
//!   every `index.css` under the project root
//! - [`error`] - Structured error types for all of the above

pub mod detect;
pub mod error;
pub mod patch;
pub mod toolchain;

pub use detect::{Framework, ProjectProfile};
pub use error::{Error, Result};
pub use toolchain::{NpmToolchain, Toolchain};
