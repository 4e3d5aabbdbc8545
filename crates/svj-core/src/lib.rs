#![deny(missing_docs)]
#![doc = "Core data types, error taxonomy and number rendering for the SVJ hidden-valley toolkit."]

pub mod errors;
pub mod format;
pub mod ids;
mod params;

pub use errors::{ErrorInfo, SvjError};
pub use format::fmt_g;
pub use ids::{meson_id, meson_flavors, MesonSpin, PdgId};
pub use params::ModelParams;
