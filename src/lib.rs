//! CBRN Open Graph image composer
//!
//! Renders the 1200x630 link-preview card: a dark vertical gradient, a green
//! badge with a shield cutout and the product name and tagline, encoded as a
//! size-optimized PNG.
//!
//! # Example
//!
//! ```no_run
//! use og_image::CardConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CardConfig {
//!     output: "web/og-image.png".into(),
//!     ..Default::default()
//! };
//!
//! let rendered = og_image::rendering::render_to_file(&config)?;
//! println!("{}x{} sha256={}", rendered.width, rendered.height, rendered.digest());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

pub mod error;
pub use error::{Error, Result};

pub mod fonts;
pub mod rendering;

pub use fonts::{FontRole, FontSet};
pub use rendering::{render, render_to_file, Rendered};

/// Default location of the generated image, relative to the working directory
pub const DEFAULT_OUTPUT: &str = "web/og-image.png";

/// Where the card is written and which font it prefers.
///
/// The defaults reproduce the site build: `web/og-image.png` rendered with
/// macOS Helvetica, falling back to the built-in bitmap font elsewhere.
///
/// # Examples
///
/// ```
/// let cfg = og_image::CardConfig::default();
/// assert!(cfg.output.ends_with("og-image.png"));
/// ```
#[derive(Debug, Clone)]
pub struct CardConfig {
    /// PNG destination; its parent directory must already exist
    pub output: PathBuf,
    /// Preferred TrueType/OpenType font or collection
    pub font_path: PathBuf,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            font_path: PathBuf::from(fonts::DEFAULT_FONT_PATH),
        }
    }
}
