//! Styled terminal output: bordered panels, parameter panels, and titled
//! lists.
//!
//! Panels wrap and align their content to a target width, with ANSI
//! escape sequences interleaved so that styling never throws off the
//! visible column counts. Everything is validated at construction; a
//! built value renders infallibly through `Display`.
//!
//! ```
//! use tpanel::{Panel, PanelConfig};
//!
//! let config = PanelConfig {
//!     width: Some(20),
//!     ..PanelConfig::default()
//! };
//! let panel = Panel::text("test", &config).unwrap();
//! assert_eq!(
//!     panel.to_string(),
//!     "╭──────────────────╮\n│ test             │\n╰──────────────────╯"
//! );
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod list;
pub mod panel;
pub mod style;
pub mod timing;
pub mod width;

pub use config::Config;
pub use error::Error;
pub use list::TitledList;
pub use panel::{Border, Panel, PanelConfig, ParamsConfig};
pub use style::{Align, Color, FontStyle, Style, RESET};
pub use width::resolve_width;

/// Version string with build metadata from the build script.
pub fn version() -> String {
    let base = env!("CARGO_PKG_VERSION");
    let date = env!("TPANEL_BUILD_DATE");
    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) => format!("{base} ({sha} {date})"),
        None => format!("{base} ({date})"),
    }
}
