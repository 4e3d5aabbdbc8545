use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use svj_core::errors::{ErrorInfo, SvjError};
use svj_core::{fmt_g, ModelParams, PdgId};
use svj_spec::{build, Channel, Scheme, SpectrumResult};
use tracing::debug;

use crate::hash::hash_settings;
use crate::template::safe_substitute;

/// Id lists and identity of a configured model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSummary {
    /// Canonical model name.
    pub name: String,
    /// Ids of states that never decay, placeholders included.
    pub stable_ids: Vec<PdgId>,
    /// Ids of all non-placeholder dark hadrons.
    pub dark_hadron_ids: Vec<PdgId>,
    /// Dark hadron ids excluding intermediate `darkPion` states.
    pub dark_hadron_final_ids: Vec<PdgId>,
    /// Hash of the rendered simulator settings.
    pub settings_hash: String,
}

/// Configured hidden-valley model.
#[derive(Debug, Clone)]
pub struct ModelHelper {
    params: ModelParams,
    channel: Channel,
    scheme: Scheme,
    spectrum: SpectrumResult,
}

impl ModelHelper {
    /// Validates the parameters and builds the spectrum.
    pub fn new(params: ModelParams) -> Result<Self, SvjError> {
        params.validate()?;
        let channel: Channel = params.channel.parse()?;
        let scheme: Scheme = params.spectrum.parse()?;
        let spectrum = build(scheme, &params)?;
        debug!(
            scheme = scheme.name(),
            hadrons = spectrum.hadrons.len(),
            stable = spectrum.stable_ids().len(),
            "configured model"
        );
        Ok(Self {
            params,
            channel,
            scheme,
            spectrum,
        })
    }

    /// Model parameters.
    pub fn params(&self) -> &ModelParams {
        &self.params
    }

    /// Spectrum scheme.
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Built spectrum.
    pub fn spectrum(&self) -> &SpectrumResult {
        &self.spectrum
    }

    /// Ids of states that never decay.
    pub fn stable_ids(&self) -> Vec<PdgId> {
        self.spectrum.stable_ids()
    }

    /// Ids of all non-placeholder dark hadrons.
    pub fn dark_hadron_ids(&self) -> Vec<PdgId> {
        self.spectrum.dark_hadron_ids()
    }

    /// Dark hadron ids that appear in final states.
    pub fn dark_hadron_final_ids(&self) -> Vec<PdgId> {
        self.spectrum.final_ids()
    }

    /// Canonical model name built from the parameters.
    pub fn name(&self) -> String {
        let p = &self.params;
        let mut parts = vec![
            format!("{}-channel", self.channel),
            format!("mmed-{}", fmt_g(p.mmed)),
            format!("Nc-{}", p.nc),
            format!("Nf-{}", p.nf),
        ];
        if self.scheme == Scheme::Matt {
            parts.push(format!("Ns-{}", p.ns));
        }
        parts.extend([
            format!("scale-{}", fmt_g(p.scale)),
            format!("mq-{}", fmt_g(p.mq)),
            format!("mpi-{}", fmt_g(p.mpi)),
            format!("mrho-{}", fmt_g(p.vector_mass())),
            format!("pvector-{}", fmt_g(p.pvector)),
            format!("spectrum-{}", self.scheme),
        ]);
        if let Some(rinv) = p.rinv {
            parts.push(format!("rinv-{}", fmt_g(rinv)));
        }
        parts.join("_")
    }

    fn hidden_valley_lines(&self) -> Vec<String> {
        let p = &self.params;
        vec![
            format!("HiddenValley:Ngauge = {}", p.nc),
            // when Fv has spin 0, qv spin fixed at 1/2
            "HiddenValley:spinFv = 0".to_string(),
            "HiddenValley:FSR = on".to_string(),
            "HiddenValley:fragment = on".to_string(),
            "HiddenValley:alphaOrder = 1".to_string(),
            format!("HiddenValley:Lambda = {}", fmt_g(p.scale)),
            format!("HiddenValley:nFlav = {}", p.nf),
            format!("HiddenValley:probVector = {}", fmt_g(p.pvector)),
        ]
    }

    /// Simulator settings: channel setup, hidden-valley globals, then hadrons.
    pub fn simulator_settings(&self) -> Vec<String> {
        let mut lines = self.spectrum.custom_lines.clone();
        lines.extend(self.hidden_valley_lines());
        lines.extend(self.spectrum.hadron_lines());
        lines
    }

    /// Placeholder values for the detector card template.
    pub fn filter_substitutions(&self) -> BTreeMap<String, String> {
        let stable = self.stable_ids();
        let energy_fractions = stable
            .iter()
            .map(|id| format!("  add EnergyFraction {{{id}}} {{0}}"))
            .collect::<Vec<_>>()
            .join("\n");
        BTreeMap::from([
            ("HVEnergyFractions".to_string(), energy_fractions),
            ("HVNuFilter".to_string(), pdg_code_lines(&stable)),
            (
                "HVDarkHadronFilter".to_string(),
                pdg_code_lines(&self.dark_hadron_final_ids()),
            ),
        ])
    }

    /// Fills the detector card template text.
    pub fn detector_settings(&self, template: &str) -> String {
        safe_substitute(template, &self.filter_substitutions())
    }

    /// Reads the detector card template at `path` and fills it.
    pub fn detector_settings_from_file(&self, path: &Path) -> Result<String, SvjError> {
        let template = fs::read_to_string(path).map_err(|err| {
            SvjError::Io(
                ErrorInfo::new("template-read", err.to_string())
                    .with_context("path", path.display()),
            )
        })?;
        Ok(self.detector_settings(&template))
    }

    /// Name, id lists and settings hash.
    pub fn summary(&self) -> Result<ModelSummary, SvjError> {
        Ok(ModelSummary {
            name: self.name(),
            stable_ids: self.stable_ids(),
            dark_hadron_ids: self.dark_hadron_ids(),
            dark_hadron_final_ids: self.dark_hadron_final_ids(),
            settings_hash: hash_settings(&self.simulator_settings())?,
        })
    }
}

fn pdg_code_lines(ids: &[PdgId]) -> String {
    ids.iter()
        .flat_map(|&id| [id, -id])
        .map(|id| format!("  add PdgCode {{{id}}}"))
        .collect::<Vec<_>>()
        .join("\n")
}
