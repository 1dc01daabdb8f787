//! Detect an installed code editor and open a file at a given line and column.
//!
//! ```no_run
//! # async fn run() -> open_in_editor::Result<()> {
//! use open_in_editor::{configure, editors, Environment, Options};
//!
//! let options = Options {
//!     editor: Some("code".into()),
//!     ..Options::default()
//! };
//! let opener = configure(&options, &Environment::capture(), editors::registry())?;
//! opener.open("src/main.rs:12:5").await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod detect;
pub mod editors;
pub mod error;
pub mod location;
pub mod logging;
pub mod opener;
pub mod platform;
pub mod template;

pub use config::Config;
pub use error::{OpenError, Result};
pub use location::FileLocation;
pub use opener::{configure, Environment, Opener, Options};
pub use platform::Platform;
