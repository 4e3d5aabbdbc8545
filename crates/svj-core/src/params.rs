use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, SvjError};
use crate::ids::PdgId;

fn default_rho_invisible_partner() -> PdgId {
    53
}

/// Global hidden-valley model parameters.
///
/// Field names follow the model configuration files (`Nc`, `Nf`, `Ns`), so a
/// parameter file can be deserialised directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelParams {
    /// Production channel name (`"s"`).
    pub channel: String,
    /// Mediator mass [GeV].
    pub mmed: f64,
    /// Number of dark colors.
    #[serde(rename = "Nc")]
    pub nc: u32,
    /// Number of dark flavors.
    #[serde(rename = "Nf")]
    pub nf: u32,
    /// Number of flavors whose off-diagonal mesons are stable.
    #[serde(rename = "Ns", default)]
    pub ns: u32,
    /// Dark confinement scale Lambda [GeV].
    pub scale: f64,
    /// Dark quark mass [GeV].
    pub mq: f64,
    /// Dark pion mass [GeV].
    pub mpi: f64,
    /// Dark rho mass [GeV]; falls back to `mpi` when absent.
    #[serde(default)]
    pub mrho: Option<f64>,
    /// Probability of producing a vector rather than a pseudoscalar.
    pub pvector: f64,
    /// Invisible fraction of the unstable dark hadrons.
    #[serde(default)]
    pub rinv: Option<f64>,
    /// Name of the dark hadron spectrum scheme.
    pub spectrum: String,
    /// Invisible target of the cms vector states.
    #[serde(default = "default_rho_invisible_partner")]
    pub rho_invisible_partner: PdgId,
}

impl ModelParams {
    /// Mass assigned to vector states.
    pub fn vector_mass(&self) -> f64 {
        self.mrho.unwrap_or(self.mpi)
    }

    /// Ensures the invisible fraction lies in `[0, 1]`.
    pub fn validate(&self) -> Result<(), SvjError> {
        if let Some(rinv) = self.rinv {
            if !(0.0..=1.0).contains(&rinv) {
                return Err(SvjError::Range(
                    ErrorInfo::new(
                        "rinv-out-of-range",
                        format!("rinv {rinv} not allowed (0 <= rinv <= 1)"),
                    )
                    .with_context("rinv", rinv),
                ));
            }
        }
        Ok(())
    }
}
