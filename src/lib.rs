//! Generate the fixed set of browser-extension PNG icons from one source
//! image.

pub mod config;
pub mod driver;
pub mod icons;
pub mod logging;

pub use config::{IconSize, IconsLayout, ICON_SIZES};
pub use driver::{run, RunOutcome};
pub use icons::{render_icon, resize_icon};
