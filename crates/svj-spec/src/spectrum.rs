use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use svj_core::errors::{ErrorInfo, SvjError};
use svj_core::ids::{ensure_flavor_digit, INVISIBLE_PLACEHOLDERS};
use svj_core::{meson_id, MesonSpin, ModelParams, PdgId};
use tracing::debug;

use crate::channel::{production_lines, Channel};
use crate::hadron::{DarkHadron, DecayPolicy};

/// Invisible target of the pseudoscalar states.
pub const PION_INVISIBLE_PARTNER: PdgId = 51;

const PI0: PdgId = 4_900_111;
const PI_OFF: PdgId = 4_900_211;
const RHO0: PdgId = 4_900_113;
const RHO_OFF: PdgId = 4_900_213;

type BuildFn = fn(&ModelParams) -> Result<Vec<DarkHadron>, SvjError>;

struct SchemeEntry {
    scheme: Scheme,
    name: &'static str,
    separate_flavors: bool,
    build: BuildFn,
}

// Indexed by `Scheme` discriminant.
static SCHEMES: [SchemeEntry; 4] = [
    SchemeEntry {
        scheme: Scheme::Cms,
        name: "cms",
        separate_flavors: false,
        build: cms_hadrons,
    },
    SchemeEntry {
        scheme: Scheme::Snowmass,
        name: "snowmass",
        separate_flavors: false,
        build: snowmass_hadrons,
    },
    SchemeEntry {
        scheme: Scheme::SnowmassCmslike,
        name: "snowmass_cmslike",
        separate_flavors: false,
        build: snowmass_cmslike_hadrons,
    },
    SchemeEntry {
        scheme: Scheme::Matt,
        name: "matt",
        separate_flavors: true,
        build: matt_hadrons,
    },
];

/// Registered dark hadron spectrum schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scheme {
    /// Two flavor diagonal/off-diagonal benchmark.
    Cms,
    /// Snowmass benchmark with stable off-diagonal pions.
    Snowmass,
    /// Snowmass masses with cms-like pion decays.
    SnowmassCmslike,
    /// Generalised `Nf` flavor scheme with `Ns` stable flavors.
    Matt,
}

impl Scheme {
    fn entry(self) -> &'static SchemeEntry {
        &SCHEMES[self as usize]
    }

    /// Every registered scheme in table order.
    pub fn all() -> impl Iterator<Item = Scheme> {
        SCHEMES.iter().map(|entry| entry.scheme)
    }

    /// Registered name.
    pub fn name(self) -> &'static str {
        self.entry().name
    }

    /// Whether each dark flavor is a distinct particle.
    pub fn separates_flavors(self) -> bool {
        self.entry().separate_flavors
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scheme {
    type Err = SvjError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        SCHEMES
            .iter()
            .find(|entry| entry.name == value)
            .map(|entry| entry.scheme)
            .ok_or_else(|| {
                let known: Vec<_> = SCHEMES.iter().map(|entry| entry.name).collect();
                SvjError::Config(
                    ErrorInfo::new("unknown-scheme", format!("Unknown spectrum {value}"))
                        .with_context("scheme", value)
                        .with_hint(format!("known spectra: {}", known.join(", "))),
                )
            })
    }
}

/// Output of a spectrum build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectrumResult {
    /// Scheme that produced the spectrum.
    pub scheme: Scheme,
    /// Scheme and channel specific setup lines.
    pub custom_lines: Vec<String>,
    /// Hadrons in emission order, placeholders first.
    pub hadrons: Vec<DarkHadron>,
}

impl SpectrumResult {
    /// Ids of hadrons that never decay.
    ///
    /// Placeholders are stable and therefore included; detector filters
    /// need them alongside the stable dark hadrons.
    pub fn stable_ids(&self) -> Vec<PdgId> {
        self.hadrons
            .iter()
            .filter(|hadron| matches!(hadron.policy(), DecayPolicy::Stable))
            .map(DarkHadron::id)
            .collect()
    }

    /// Ids of every hadron that is not a placeholder.
    pub fn dark_hadron_ids(&self) -> Vec<PdgId> {
        self.real_hadrons().map(DarkHadron::id).collect()
    }

    /// Non-placeholder ids, excluding intermediate `darkPion` states.
    pub fn final_ids(&self) -> Vec<PdgId> {
        self.real_hadrons()
            .filter(|hadron| !matches!(hadron.policy(), DecayPolicy::DarkPion { .. }))
            .map(DarkHadron::id)
            .collect()
    }

    /// Ids of the placeholder states.
    pub fn placeholder_ids(&self) -> Vec<PdgId> {
        self.hadrons
            .iter()
            .filter(|hadron| hadron.is_placeholder())
            .map(DarkHadron::id)
            .collect()
    }

    /// Directive lines of all hadrons in emission order.
    pub fn hadron_lines(&self) -> Vec<String> {
        self.hadrons.iter().flat_map(DarkHadron::lines).collect()
    }

    /// Custom lines followed by the hadron lines.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = self.custom_lines.clone();
        lines.extend(self.hadron_lines());
        lines
    }

    fn real_hadrons(&self) -> impl Iterator<Item = &DarkHadron> + '_ {
        self.hadrons.iter().filter(|hadron| !hadron.is_placeholder())
    }
}

/// Builds the spectrum registered under `name`.
pub fn build_spectrum(name: &str, params: &ModelParams) -> Result<SpectrumResult, SvjError> {
    build(name.parse()?, params)
}

/// Builds the spectrum of `scheme` for the given model.
pub fn build(scheme: Scheme, params: &ModelParams) -> Result<SpectrumResult, SvjError> {
    let entry = scheme.entry();
    let channel: Channel = params.channel.parse()?;
    let custom_lines = production_lines(channel, params, entry.separate_flavors)?;

    let mut hadrons: Vec<DarkHadron> = INVISIBLE_PLACEHOLDERS
        .iter()
        .map(|&id| DarkHadron::placeholder(id))
        .collect();
    hadrons.extend((entry.build)(params)?);

    debug!(
        scheme = entry.name,
        channel = channel.name(),
        hadrons = hadrons.len(),
        custom_lines = custom_lines.len(),
        "built dark hadron spectrum"
    );

    Ok(SpectrumResult {
        scheme,
        custom_lines,
        hadrons,
    })
}

fn pion(id: PdgId, params: &ModelParams, policy: DecayPolicy) -> Result<DarkHadron, SvjError> {
    DarkHadron::new(id, params.mpi, policy)
}

fn rho(id: PdgId, params: &ModelParams, policy: DecayPolicy) -> Result<DarkHadron, SvjError> {
    DarkHadron::new(id, params.vector_mass(), policy)
}

fn rho_decay(first: PdgId, second: PdgId) -> DecayPolicy {
    DecayPolicy::DarkPion {
        daughters: [first, second],
    }
}

fn cms_hadrons(params: &ModelParams) -> Result<Vec<DarkHadron>, SvjError> {
    let rinv = params.rinv;
    let rho_partner = params.rho_invisible_partner;
    Ok(vec![
        pion(PI0, params, DecayPolicy::MassInsertion)?
            .with_optional_invisible(rinv, PION_INVISIBLE_PARTNER),
        pion(PI_OFF, params, DecayPolicy::MassInsertion)?
            .with_optional_invisible(rinv, PION_INVISIBLE_PARTNER),
        rho(RHO0, params, DecayPolicy::Democratic)?.with_optional_invisible(rinv, rho_partner),
        rho(RHO_OFF, params, DecayPolicy::Democratic)?.with_optional_invisible(rinv, rho_partner),
    ])
}

fn snowmass_hadrons(params: &ModelParams) -> Result<Vec<DarkHadron>, SvjError> {
    Ok(vec![
        pion(PI0, params, DecayPolicy::MassInsertion)?
            .with_optional_invisible(params.rinv, PION_INVISIBLE_PARTNER),
        pion(PI_OFF, params, DecayPolicy::Stable)?,
        rho(RHO0, params, rho_decay(PI0, PI_OFF))?,
        rho(RHO_OFF, params, rho_decay(PI_OFF, PI_OFF))?,
    ])
}

fn snowmass_cmslike_hadrons(params: &ModelParams) -> Result<Vec<DarkHadron>, SvjError> {
    Ok(vec![
        pion(PI0, params, DecayPolicy::MassInsertion)?
            .with_optional_invisible(params.rinv, PION_INVISIBLE_PARTNER),
        pion(PI_OFF, params, DecayPolicy::MassInsertion)?
            .with_optional_invisible(params.rinv, PION_INVISIBLE_PARTNER),
        rho(RHO0, params, rho_decay(PI0, PI_OFF))?,
        rho(RHO_OFF, params, rho_decay(PI_OFF, PI_OFF))?,
    ])
}

/// Pseudoscalar and vector for every flavor pair `i >= j`, `i` outermost.
///
/// Off-diagonal pseudoscalars containing one of the first `Ns` flavors are
/// stable and carry the invisible fraction of the model.
fn matt_hadrons(params: &ModelParams) -> Result<Vec<DarkHadron>, SvjError> {
    let nf = ensure_flavor_digit("Nf", params.nf)?;
    let ns = params.ns;
    let mut hadrons = Vec::new();
    for i in 1..=nf {
        for j in 1..=i {
            let pseudoscalar = if i == j || (i > ns && j > ns) {
                DecayPolicy::MassInsertion
            } else {
                DecayPolicy::Stable
            };
            hadrons.push(pion(meson_id(i, j, MesonSpin::Pseudoscalar), params, pseudoscalar)?);
            hadrons.push(rho(
                meson_id(i, j, MesonSpin::Vector),
                params,
                DecayPolicy::DarkRho { n_flavors: nf },
            )?);
        }
    }
    Ok(hadrons)
}
