use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use svj_core::errors::{ErrorInfo, SvjError};
use svj_core::{ModelParams, PdgId};
use svj_spec::MassRelation;

fn default_channel() -> String {
    "s".to_string()
}

fn default_rho_invisible_partner() -> PdgId {
    53
}

/// YAML model configuration.
///
/// Masses may be given explicitly or derived from a benchmark relation in
/// `masses`; explicit values take precedence over derived ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Production channel name.
    #[serde(default = "default_channel")]
    pub channel: String,
    /// Mediator mass [GeV].
    pub mmed: f64,
    /// Number of dark colors.
    #[serde(rename = "Nc")]
    pub nc: u32,
    /// Number of dark flavors.
    #[serde(rename = "Nf")]
    pub nf: u32,
    /// Number of stable flavors.
    #[serde(rename = "Ns", default)]
    pub ns: u32,
    /// Dark confinement scale [GeV].
    #[serde(default)]
    pub scale: Option<f64>,
    /// Dark quark mass [GeV].
    #[serde(default)]
    pub mq: Option<f64>,
    /// Dark pion mass [GeV].
    #[serde(default)]
    pub mpi: Option<f64>,
    /// Dark rho mass [GeV].
    #[serde(default)]
    pub mrho: Option<f64>,
    /// Probability of producing a vector.
    pub pvector: f64,
    /// Invisible fraction.
    #[serde(default)]
    pub rinv: Option<f64>,
    /// Spectrum scheme name.
    pub spectrum: String,
    /// Invisible target of the cms vector states.
    #[serde(default = "default_rho_invisible_partner")]
    pub rho_invisible_partner: PdgId,
    /// Benchmark mass relation.
    #[serde(default)]
    pub masses: Option<MassRelation>,
}

fn missing_mass(field: &str) -> SvjError {
    SvjError::Config(
        ErrorInfo::new("missing-mass", format!("model configuration lacks {field}"))
            .with_context("field", field)
            .with_hint("set it explicitly or add a `masses` relation"),
    )
}

impl ModelConfig {
    /// Parses a configuration from YAML text.
    pub fn from_yaml(text: &str) -> Result<Self, SvjError> {
        serde_yaml::from_str(text)
            .map_err(|err| SvjError::Serde(ErrorInfo::new("config-parse", err.to_string())))
    }

    /// Resolves derived masses into concrete model parameters.
    pub fn resolve(&self) -> Result<ModelParams, SvjError> {
        let derived = self.masses.map(|relation| relation.masses());
        let pick = |explicit: Option<f64>, derived: Option<f64>, field: &str| {
            explicit.or(derived).ok_or_else(|| missing_mass(field))
        };
        Ok(ModelParams {
            channel: self.channel.clone(),
            mmed: self.mmed,
            nc: self.nc,
            nf: self.nf,
            ns: self.ns,
            scale: pick(self.scale, derived.map(|m| m.scale), "scale")?,
            mq: pick(self.mq, derived.map(|m| m.mq), "mq")?,
            mpi: pick(self.mpi, derived.map(|m| m.mpi), "mpi")?,
            mrho: self.mrho.or(derived.map(|m| m.mrho)),
            pvector: self.pvector,
            rinv: self.rinv,
            spectrum: self.spectrum.clone(),
            rho_invisible_partner: self.rho_invisible_partner,
        })
    }
}

/// Reads and resolves a YAML model configuration.
pub fn load_model(path: &Path) -> Result<ModelParams, SvjError> {
    let text = fs::read_to_string(path).map_err(|err| {
        SvjError::Io(
            ErrorInfo::new("config-read", err.to_string())
                .with_context("path", path.display()),
        )
    })?;
    ModelConfig::from_yaml(&text)?.resolve()
}
