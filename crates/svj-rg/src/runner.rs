use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// QCD scale parameter [GeV].
pub const QCD_LAMBDA: f64 = 0.218;

/// Quark mass running following Ellis, Stirling and Webber, with three colors.
///
/// The coefficients are only meaningful for flavor counts `nf <= 6`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MassRunner {
    /// QCD scale parameter [GeV].
    pub lambda: f64,
}

impl Default for MassRunner {
    fn default() -> Self {
        Self { lambda: QCD_LAMBDA }
    }
}

impl MassRunner {
    /// One-loop beta coefficient.
    pub fn b(&self, nf: usize) -> f64 {
        (33.0 - 2.0 * nf as f64) / (12.0 * PI)
    }

    /// Two-loop beta coefficient ratio.
    pub fn bp(&self, nf: usize) -> f64 {
        let nf = nf as f64;
        (153.0 - 19.0 * nf) / (2.0 * PI * (33.0 - 2.0 * nf))
    }

    /// Two-loop anomalous dimension coefficient.
    pub fn cp(&self, nf: usize) -> f64 {
        (303.0 - 10.0 * nf as f64) / (72.0 * PI)
    }

    /// Ratio of the one-loop anomalous dimension to the beta coefficient.
    pub fn cb(&self, nf: usize) -> f64 {
        12.0 / (33.0 - 2.0 * nf as f64)
    }

    /// Two-loop correction factor `1 + c/b (c' - b')`.
    pub fn gamma(&self, nf: usize) -> f64 {
        1.0 + self.cb(nf) * (self.cp(nf) - self.bp(nf))
    }

    /// Strong coupling at scale `q` with `nf` active flavors.
    pub fn alpha_s(&self, q: f64, nf: usize) -> f64 {
        1.0 / (self.b(nf) * (q * q / (self.lambda * self.lambda)).ln())
    }

    /// Renormalisation group invariant mass.
    pub fn m_hat(&self, mass: f64, nf_ref: usize) -> f64 {
        mass / self.alpha_s(mass, nf_ref).powf(self.cb(nf_ref)) / self.gamma(nf_ref)
    }

    /// Runs `mass`, defined with `nf_ref` flavors at its own scale, to scale
    /// `q` with `nf` flavors.
    ///
    /// Masses below the QCD scale have no positive coupling at their
    /// reference point and run to zero.
    pub fn running_mass(&self, mass: f64, nf_ref: usize, q: f64, nf: usize) -> f64 {
        let alpha_ref = self.alpha_s(mass, nf_ref);
        if alpha_ref < 0.0 {
            return 0.0;
        }
        self.m_hat(mass, nf_ref) * self.alpha_s(q, nf).powf(self.cb(nf)) * self.gamma(nf)
    }
}
