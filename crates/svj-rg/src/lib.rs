#![deny(missing_docs)]
#![doc = "Standard Model quark table and renormalisation group running of quark masses."]

/// Fixed quark table and per-scale snapshots.
pub mod quarks;
/// Ellis-Stirling-Webber running of quark masses.
pub mod runner;

pub use quarks::{Quark, QuarkFlavor, QuarkRegistry, QuarkSnapshot, STANDARD_QUARKS};
pub use runner::MassRunner;
