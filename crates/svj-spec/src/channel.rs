use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use svj_core::errors::{ErrorInfo, SvjError};
use svj_core::ids::{dark_quark_id, ensure_flavor_digit, ZPRIME};
use svj_core::{fmt_g, ModelParams};

/// Total mediator branching fraction into dark quarks.
pub const ZPRIME_DARK_FRACTION: f64 = 0.982;
/// Mediator branching fraction into each Standard Model quark pair.
pub const ZPRIME_SM_FRACTION: f64 = 0.003;
/// Mass [GeV] used to decouple unused hidden-valley partners.
pub const DECOUPLED_MASS: f64 = 10000.0;

/// Production channel of the dark quarks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Channel {
    /// Resonant production through a leptophobic Z'.
    #[serde(rename = "s")]
    S,
}

impl Channel {
    /// Short name used in model names and configuration files.
    pub fn name(self) -> &'static str {
        match self {
            Channel::S => "s",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Channel {
    type Err = SvjError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "s" => Ok(Channel::S),
            other => Err(SvjError::Config(
                ErrorInfo::new("unknown-channel", format!("Unknown channel {other}"))
                    .with_context("channel", other)
                    .with_hint("supported channels: s"),
            )),
        }
    }
}

/// Mediator and dark quark setup for `channel`.
///
/// With `separate_flavors` every dark flavor is a distinct particle: the
/// mediator width into dark quarks is split equally among them and each one
/// gets its own mass line.
pub fn production_lines(
    channel: Channel,
    params: &ModelParams,
    separate_flavors: bool,
) -> Result<Vec<String>, SvjError> {
    let flavors = if separate_flavors {
        ensure_flavor_digit("Nf", params.nf)?
    } else {
        1
    };

    let mut lines = match channel {
        Channel::S => s_channel_lines(params.mmed, flavors, separate_flavors),
    };
    lines.extend((1..=flavors).map(|n| format!("{}:m0 = {}", dark_quark_id(n), fmt_g(params.mq))));
    Ok(lines)
}

fn s_channel_lines(mmed: f64, flavors: u32, separate_flavors: bool) -> Vec<String> {
    let mut lines = vec!["HiddenValley:ffbar2Zv = on".to_string()];
    if separate_flavors {
        lines.push("HiddenValley:separateFlav = on".to_string());
    }
    lines.extend([
        format!("{ZPRIME}:m0 = {}", fmt_g(mmed)),
        format!("{ZPRIME}:mMin = {}", fmt_g(mmed - 1.0)),
        format!("{ZPRIME}:mMax = {}", fmt_g(mmed + 1.0)),
        format!("{ZPRIME}:mWidth = 0.01"),
    ]);

    let dark_share = ZPRIME_DARK_FRACTION / f64::from(flavors);
    for n in 1..=flavors {
        let directive = if n == 1 { "oneChannel" } else { "addChannel" };
        let quark = dark_quark_id(n);
        lines.push(format!(
            "{ZPRIME}:{directive} = 1 {} 102 {quark} -{quark}",
            fmt_g(dark_share)
        ));
    }
    // SM couplings needed to produce the Z' from the pp initial state
    for quark in 1..=6 {
        lines.push(format!(
            "{ZPRIME}:addChannel = 1 {} 102 {quark} -{quark}",
            fmt_g(ZPRIME_SM_FRACTION)
        ));
    }
    for partner in (4_900_001..=4_900_006).chain(4_900_011..=4_900_016) {
        lines.push(format!("{partner}:m0 = {}", fmt_g(DECOUPLED_MASS)));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_channel_names_the_channel() {
        let err = "t".parse::<Channel>().unwrap_err();
        assert_eq!(err.code(), "unknown-channel");
        assert_eq!(err.info().context.get("channel").map(String::as_str), Some("t"));
    }
}
