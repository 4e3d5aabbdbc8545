#![deny(missing_docs)]
#![doc = "Dark hadron spectra, decay tables and production setup for hidden-valley models."]

/// Production channels and mediator setup.
pub mod channel;
/// Dark hadron states and decay policies.
pub mod hadron;
pub mod masses;
/// Scheme table and spectrum builds.
pub mod spectrum;

pub use channel::{production_lines, Channel};
pub use hadron::{DarkHadron, DecayChannel, DecayPolicy, DecayTable, HadronSpec, InvisibleDecay};
pub use masses::{DerivedMasses, MassRelation};
pub use spectrum::{build, build_spectrum, Scheme, SpectrumResult};
