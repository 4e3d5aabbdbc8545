use serde::{Deserialize, Serialize};
use svj_core::PdgId;

use crate::runner::MassRunner;

/// Fixed quark flavor entry: identifier and reference mass [GeV].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuarkFlavor {
    /// Simulator flavor code.
    pub id: PdgId,
    /// Reference mass [GeV].
    pub pole_mass: f64,
}

/// Light Standard Model quarks, in ascending mass order.
pub const STANDARD_QUARKS: [QuarkFlavor; 5] = [
    QuarkFlavor { id: 2, pole_mass: 0.0023 },
    QuarkFlavor { id: 1, pole_mass: 0.0048 },
    QuarkFlavor { id: 3, pole_mass: 0.095 },
    QuarkFlavor { id: 4, pole_mass: 1.275 },
    QuarkFlavor { id: 5, pole_mass: 4.18 },
];

/// A quark as seen from one energy scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quark {
    /// Simulator flavor code.
    pub id: PdgId,
    /// Reference mass [GeV].
    pub pole_mass: f64,
    /// Mass run to the snapshot scale; equal to `pole_mass` when inactive.
    pub running_mass: f64,
    /// Counts towards the flavor number at the snapshot scale.
    pub active: bool,
    /// Light enough for a two-body decay at the snapshot scale.
    pub decay_eligible: bool,
}

/// Immutable view of the quark table at a single scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuarkSnapshot {
    scale: f64,
    quarks: Vec<Quark>,
}

impl QuarkSnapshot {
    /// Scale [GeV] at which the snapshot was taken.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// All quarks in ascending mass order.
    pub fn quarks(&self) -> &[Quark] {
        &self.quarks
    }

    /// Quarks lighter than the scale.
    pub fn active(&self) -> impl Iterator<Item = &Quark> + '_ {
        self.quarks.iter().filter(|quark| quark.active)
    }

    /// Quarks lighter than half the scale.
    pub fn decay_eligible(&self) -> impl Iterator<Item = &Quark> + '_ {
        self.quarks.iter().filter(|quark| quark.decay_eligible)
    }

    /// Number of active flavors at the scale.
    pub fn active_count(&self) -> usize {
        self.active().count()
    }
}

/// Fixed quark table together with the running prescription.
///
/// The table itself never changes; every query derives a fresh
/// [`QuarkSnapshot`], so repeated or concurrent evaluations at different
/// scales never observe each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuarkRegistry {
    flavors: Vec<QuarkFlavor>,
    runner: MassRunner,
}

impl Default for QuarkRegistry {
    fn default() -> Self {
        Self::new(STANDARD_QUARKS.to_vec(), MassRunner::default())
    }
}

impl QuarkRegistry {
    /// Creates a registry over `flavors`, which are kept in ascending mass order.
    pub fn new(mut flavors: Vec<QuarkFlavor>, runner: MassRunner) -> Self {
        flavors.sort_by(|a, b| a.pole_mass.total_cmp(&b.pole_mass));
        Self { flavors, runner }
    }

    /// Quark table in ascending mass order.
    pub fn flavors(&self) -> &[QuarkFlavor] {
        &self.flavors
    }

    /// Running prescription used for snapshots.
    pub fn runner(&self) -> &MassRunner {
        &self.runner
    }

    /// Evaluates the table at `scale`.
    ///
    /// Active quarks are run to `scale` with the active count as flavor
    /// number; each uses its position among the active quarks as its
    /// reference flavor number.
    pub fn snapshot(&self, scale: f64) -> QuarkSnapshot {
        let mut quarks: Vec<Quark> = self
            .flavors
            .iter()
            .map(|flavor| Quark {
                id: flavor.id,
                pole_mass: flavor.pole_mass,
                running_mass: flavor.pole_mass,
                active: flavor.pole_mass < scale,
                decay_eligible: 2.0 * flavor.pole_mass < scale,
            })
            .collect();

        let nf = quarks.iter().filter(|quark| quark.active).count();
        for (nf_ref, quark) in quarks.iter_mut().filter(|quark| quark.active).enumerate() {
            quark.running_mass = self.runner.running_mass(quark.pole_mass, nf_ref, scale, nf);
        }

        QuarkSnapshot { scale, quarks }
    }

    /// Quarks lighter than `scale`, in ascending mass order.
    pub fn active_set(&self, scale: f64) -> Vec<Quark> {
        self.snapshot(scale).active().copied().collect()
    }

    /// Quarks lighter than half of `scale`, in ascending mass order.
    pub fn decay_eligible_set(&self, scale: f64) -> Vec<Quark> {
        self.snapshot(scale).decay_eligible().copied().collect()
    }
}
