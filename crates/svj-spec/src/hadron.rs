use serde::{Deserialize, Serialize};
use svj_core::errors::{ErrorInfo, SvjError};
use svj_core::ids::ensure_flavor_digit;
use svj_core::{fmt_g, meson_flavors, meson_id, MesonSpin, PdgId};
use svj_rg::{Quark, QuarkRegistry, QuarkSnapshot};

/// Matrix element code for isotropic decays into invisible states.
pub const ME_ISOTROPIC: u32 = 0;
/// Matrix element code for decays into a hadronising quark pair.
pub const ME_QUARK_PAIR: u32 = 91;
/// Matrix element code for decays into two dark hadrons.
pub const ME_DARK_HADRONS: u32 = 101;

fn config_error(code: &str, message: impl Into<String>, id: PdgId) -> SvjError {
    SvjError::Config(ErrorInfo::new(code, message).with_context("id", id))
}

/// Rule deriving the decay channels of a dark hadron.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "camelCase")]
pub enum DecayPolicy {
    /// No decays at all.
    Stable,
    /// Everything visible goes to the lightest down-type quark pair.
    Simple,
    /// Visible width shared equally among kinematically open quarks.
    Democratic,
    /// Visible width weighted by squared running quark masses.
    MassInsertion,
    /// Decays entirely into the two given dark hadrons.
    DarkPion {
        /// Daughter identifiers, in emission order.
        daughters: [PdgId; 2],
    },
    /// Vector decaying to pseudoscalar pairs of every dark flavor.
    DarkRho {
        /// Number of dark flavors available in the final state.
        n_flavors: u32,
    },
}

impl DecayPolicy {
    /// Name used in configuration files.
    pub fn name(&self) -> &'static str {
        match self {
            DecayPolicy::Stable => "stable",
            DecayPolicy::Simple => "simple",
            DecayPolicy::Democratic => "democratic",
            DecayPolicy::MassInsertion => "massInsertion",
            DecayPolicy::DarkPion { .. } => "darkPion",
            DecayPolicy::DarkRho { .. } => "darkRho",
        }
    }

    /// Resolves a policy name and its positional arguments for hadron `id`.
    ///
    /// `darkPion` takes the two daughter ids, `darkRho` the flavor count.
    pub fn from_name(id: PdgId, name: &str, args: &[PdgId]) -> Result<Self, SvjError> {
        let policy = match name {
            "stable" => DecayPolicy::Stable,
            "simple" => DecayPolicy::Simple,
            "democratic" => DecayPolicy::Democratic,
            "massInsertion" => DecayPolicy::MassInsertion,
            "darkPion" => match args {
                [first, second] => DecayPolicy::DarkPion {
                    daughters: [*first, *second],
                },
                _ => return Err(missing_args(id, name, "two daughter ids", args.len())),
            },
            "darkRho" => match args {
                [n_flavors] if *n_flavors > 0 => DecayPolicy::DarkRho {
                    n_flavors: u32::try_from(*n_flavors)
                        .map_err(|_| missing_args(id, name, "a flavor count", 1))?,
                },
                _ => return Err(missing_args(id, name, "a positive flavor count", args.len())),
            },
            other => {
                return Err(SvjError::Config(
                    ErrorInfo::new("unknown-decay", format!("unknown decay {other} for id {id}"))
                        .with_context("id", id)
                        .with_context("policy", other),
                ))
            }
        };
        Ok(policy)
    }

    /// Positional arguments accepted back by [`DecayPolicy::from_name`].
    pub fn args(&self) -> Vec<PdgId> {
        match self {
            DecayPolicy::DarkPion { daughters } => daughters.to_vec(),
            DecayPolicy::DarkRho { n_flavors } => vec![PdgId::from(*n_flavors)],
            _ => Vec::new(),
        }
    }
}

fn missing_args(id: PdgId, name: &str, expected: &str, found: usize) -> SvjError {
    SvjError::Config(
        ErrorInfo::new(
            "missing-decay-args",
            format!("decay {name} for id {id} expects {expected}"),
        )
        .with_context("id", id)
        .with_context("policy", name)
        .with_context("found", found),
    )
}

/// Invisible decay component of a dark hadron.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvisibleDecay {
    /// Branching fraction into the invisible pair.
    pub fraction: f64,
    /// Placeholder state produced with its antiparticle.
    pub partner: PdgId,
}

/// Single two-body decay channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecayChannel {
    /// Branching fraction.
    pub branching: f64,
    /// Matrix element code.
    pub me_mode: u32,
    /// Decay products.
    pub products: [PdgId; 2],
}

impl DecayChannel {
    fn render(&self, id: PdgId, directive: &str) -> String {
        format!(
            "{id}:{directive} = 1 {} {} {} {}",
            fmt_g(self.branching),
            self.me_mode,
            self.products[0],
            self.products[1]
        )
    }
}

/// Ordered decay table of one dark hadron.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecayTable {
    /// Hadron identifier.
    pub id: PdgId,
    /// Channels in emission order, invisible channel first.
    pub channels: Vec<DecayChannel>,
    /// Whether all decays are switched off.
    pub disable_all: bool,
}

impl DecayTable {
    /// Sum of all branching fractions.
    pub fn total_branching(&self) -> f64 {
        self.channels.iter().map(|channel| channel.branching).sum()
    }

    /// Renders the table as simulator directives.
    ///
    /// The first channel replaces the default decay list (`oneChannel`);
    /// every later one is appended to it (`addChannel`).
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .channels
            .iter()
            .enumerate()
            .map(|(idx, channel)| {
                let directive = if idx == 0 { "oneChannel" } else { "addChannel" };
                channel.render(self.id, directive)
            })
            .collect();
        if self.disable_all {
            lines.push(format!("{}:onMode = 0", self.id));
        }
        lines
    }
}

/// Serializable description of a dark hadron, with the policy given by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HadronSpec {
    /// Hadron identifier.
    pub id: PdgId,
    /// Mass [GeV].
    pub mass: f64,
    /// Decay policy name.
    pub decay: String,
    /// Extra particle properties, attached verbatim.
    #[serde(default)]
    pub props: Vec<String>,
    /// Invisible fraction.
    #[serde(default)]
    pub rinv: Option<f64>,
    /// Invisible partner; required when `rinv` is set.
    #[serde(default)]
    pub dm: Option<PdgId>,
    /// Policy arguments.
    #[serde(default)]
    pub decay_args: Vec<PdgId>,
    /// Marks states that only serve as invisible decay targets.
    #[serde(default)]
    pub placeholder: bool,
}

/// One dark hadron state and the quark view used for its decays.
///
/// Serialises as a [`HadronSpec`]; deserialisation runs the same checks as
/// [`DarkHadron::try_from_spec`] and rebuilds the quark view from the mass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "HadronSpec", into = "HadronSpec")]
pub struct DarkHadron {
    id: PdgId,
    mass: f64,
    policy: DecayPolicy,
    props: Vec<String>,
    invisible: Option<InvisibleDecay>,
    placeholder: bool,
    quarks: QuarkSnapshot,
}

impl DarkHadron {
    /// Creates a hadron and evaluates the quark table at its mass.
    pub fn new(id: PdgId, mass: f64, policy: DecayPolicy) -> Result<Self, SvjError> {
        if let DecayPolicy::DarkRho { n_flavors } = policy {
            ensure_flavor_digit("Nf", n_flavors)?;
            meson_flavors(id)?;
        }
        Ok(Self {
            id,
            mass,
            policy,
            props: Vec::new(),
            invisible: None,
            placeholder: false,
            quarks: QuarkRegistry::default().snapshot(mass),
        })
    }

    /// Stable massless state reserved as an invisible decay product.
    pub fn placeholder(id: PdgId) -> Self {
        Self {
            id,
            mass: 0.0,
            policy: DecayPolicy::Stable,
            props: vec!["isResonance = false".to_string()],
            invisible: None,
            placeholder: true,
            quarks: QuarkRegistry::default().snapshot(0.0),
        }
    }

    /// Validates and builds a hadron from its serialized description.
    pub fn try_from_spec(spec: &HadronSpec) -> Result<Self, SvjError> {
        let policy = DecayPolicy::from_name(spec.id, &spec.decay, &spec.decay_args)?;
        let mut hadron = Self::new(spec.id, spec.mass, policy)?.with_props(spec.props.iter().cloned());
        hadron.placeholder = spec.placeholder;
        if let Some(rinv) = spec.rinv {
            let partner = spec.dm.ok_or_else(|| {
                config_error(
                    "missing-invisible-partner",
                    format!("id {} sets rinv without an invisible partner", spec.id),
                    spec.id,
                )
            })?;
            if !(0.0..=1.0).contains(&rinv) {
                return Err(SvjError::Range(
                    ErrorInfo::new(
                        "rinv-out-of-range",
                        format!("rinv {rinv} not allowed (0 <= rinv <= 1)"),
                    )
                    .with_context("id", spec.id)
                    .with_context("rinv", rinv),
                ));
            }
            hadron = hadron.with_invisible(rinv, partner);
        }
        Ok(hadron)
    }

    /// Appends particle properties.
    pub fn with_props<I, S>(mut self, props: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.props.extend(props.into_iter().map(Into::into));
        self
    }

    /// Adds an invisible decay into `partner` and its antiparticle.
    pub fn with_invisible(mut self, fraction: f64, partner: PdgId) -> Self {
        self.invisible = Some(InvisibleDecay { fraction, partner });
        self
    }

    /// Adds an invisible decay when `fraction` is set.
    pub fn with_optional_invisible(self, fraction: Option<f64>, partner: PdgId) -> Self {
        match fraction {
            Some(fraction) => self.with_invisible(fraction, partner),
            None => self,
        }
    }

    /// Hadron identifier.
    pub fn id(&self) -> PdgId {
        self.id
    }

    /// Mass [GeV].
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Assigned decay policy.
    pub fn policy(&self) -> &DecayPolicy {
        &self.policy
    }

    /// Extra properties in attachment order.
    pub fn props(&self) -> &[String] {
        &self.props
    }

    /// Invisible decay component, if any.
    pub fn invisible(&self) -> Option<&InvisibleDecay> {
        self.invisible.as_ref()
    }

    /// Whether the state only exists as an invisible decay target.
    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    /// Quark table evaluated at the hadron mass.
    pub fn quarks(&self) -> &QuarkSnapshot {
        &self.quarks
    }

    /// Fraction of the width left for visible channels.
    pub fn visible_fraction(&self) -> f64 {
        self.invisible.map_or(1.0, |invisible| 1.0 - invisible.fraction)
    }

    /// Derives the full decay table.
    pub fn decay_table(&self) -> DecayTable {
        let mut channels = Vec::new();
        if let Some(invisible) = &self.invisible {
            channels.push(DecayChannel {
                branching: invisible.fraction,
                me_mode: ME_ISOTROPIC,
                products: [invisible.partner, -invisible.partner],
            });
        }
        let disable_all = matches!(self.policy, DecayPolicy::Stable);
        match &self.policy {
            DecayPolicy::Stable => {}
            DecayPolicy::Simple => channels.extend(self.simple_channels()),
            DecayPolicy::Democratic => channels.extend(self.democratic_channels()),
            DecayPolicy::MassInsertion => channels.extend(self.mass_insertion_channels()),
            DecayPolicy::DarkPion { daughters } => channels.push(DecayChannel {
                branching: 1.0,
                me_mode: ME_DARK_HADRONS,
                products: *daughters,
            }),
            DecayPolicy::DarkRho { n_flavors } => {
                channels.extend(self.dark_rho_channels(*n_flavors))
            }
        }
        DecayTable {
            id: self.id,
            channels,
            disable_all,
        }
    }

    /// Renders mass, properties and decay table as simulator directives.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![format!("{}:m0 = {}", self.id, fmt_g(self.mass))];
        lines.extend(self.props.iter().map(|prop| format!("{}:{prop}", self.id)));
        lines.extend(self.decay_table().lines());
        lines
    }

    fn simple_channels(&self) -> Vec<DecayChannel> {
        self.quarks
            .decay_eligible()
            .find(|quark| quark.id == 1)
            .map(|quark| quark_channels([(quark, self.visible_fraction())]))
            .unwrap_or_default()
    }

    fn democratic_channels(&self) -> Vec<DecayChannel> {
        let quarks: Vec<&Quark> = self.quarks.decay_eligible().collect();
        if quarks.is_empty() {
            return Vec::new();
        }
        let share = self.visible_fraction() / quarks.len() as f64;
        quark_channels(quarks.into_iter().map(|quark| (quark, share)))
    }

    fn mass_insertion_channels(&self) -> Vec<DecayChannel> {
        let denominator: f64 = self
            .quarks
            .decay_eligible()
            .map(|quark| quark.running_mass.powi(2))
            .sum();
        if denominator == 0.0 {
            return self.democratic_channels();
        }
        let visible = self.visible_fraction();
        quark_channels(
            self.quarks
                .decay_eligible()
                .map(|quark| (quark, visible * quark.running_mass.powi(2) / denominator)),
        )
    }

    fn dark_rho_channels(&self, n_flavors: u32) -> Vec<DecayChannel> {
        // validated in `new`
        let Ok((i, j)) = meson_flavors(self.id) else {
            return Vec::new();
        };
        let share = 1.0 / f64::from(n_flavors);
        (1..=n_flavors)
            .map(|n| DecayChannel {
                branching: share,
                me_mode: ME_DARK_HADRONS,
                products: [
                    meson_id(i, n, MesonSpin::Pseudoscalar),
                    meson_id(n, j, MesonSpin::Pseudoscalar),
                ],
            })
            .collect()
    }
}

impl TryFrom<HadronSpec> for DarkHadron {
    type Error = SvjError;

    fn try_from(spec: HadronSpec) -> Result<Self, Self::Error> {
        Self::try_from_spec(&spec)
    }
}

impl From<DarkHadron> for HadronSpec {
    fn from(hadron: DarkHadron) -> Self {
        HadronSpec {
            id: hadron.id,
            mass: hadron.mass,
            decay: hadron.policy.name().to_string(),
            decay_args: hadron.policy.args(),
            rinv: hadron.invisible.map(|invisible| invisible.fraction),
            dm: hadron.invisible.map(|invisible| invisible.partner),
            props: hadron.props,
            placeholder: hadron.placeholder,
        }
    }
}

fn quark_channels<'a, I>(weights: I) -> Vec<DecayChannel>
where
    I: IntoIterator<Item = (&'a Quark, f64)>,
{
    weights
        .into_iter()
        .filter(|(_, branching)| *branching > 0.0)
        .map(|(quark, branching)| DecayChannel {
            branching,
            me_mode: ME_QUARK_PAIR,
            products: [quark.id, -quark.id],
        })
        .collect()
}
