//! Particle identifiers used by the hidden-valley sector.
//!
//! Dark mesons follow the digit convention `4900ijs`: `i` and `j` are the
//! dark (anti)quark flavor indices (single digits, 1..9) and `s` is the
//! spin digit (1 for pseudoscalars, 3 for vectors). A meson whose quark
//! index is lower than its antiquark index is the antiparticle of the
//! canonical `i >= j` state and carries a negative sign.

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, SvjError};

/// Signed particle identifier as understood by the simulator.
pub type PdgId = i64;

/// Leptophobic Z' mediating s-channel production.
pub const ZPRIME: PdgId = 4_900_023;
/// First dark quark; further flavors follow consecutively.
pub const DARK_QUARK: PdgId = 4_900_101;
/// Base offset of the dark meson block.
pub const DARK_MESON_BASE: PdgId = 4_900_000;
/// Reserved invisible placeholder states, in emission order.
pub const INVISIBLE_PLACEHOLDERS: [PdgId; 3] = [51, 52, 53];
/// Largest flavor index that fits in a single id digit.
pub const MAX_FLAVOR_INDEX: u32 = 9;

/// Spin digit of a dark meson identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MesonSpin {
    /// Pseudoscalar ("dark pion").
    Pseudoscalar,
    /// Vector ("dark rho").
    Vector,
}

impl MesonSpin {
    /// Trailing digit of the encoded identifier.
    pub const fn digit(self) -> PdgId {
        match self {
            MesonSpin::Pseudoscalar => 1,
            MesonSpin::Vector => 3,
        }
    }
}

/// Encodes the meson made of dark quark `quark` and dark antiquark `antiquark`.
///
/// The canonical state has `quark >= antiquark`; the reversed pair is its
/// antiparticle, so the digits are swapped and the sign flipped.
pub fn meson_id(quark: u32, antiquark: u32, spin: MesonSpin) -> PdgId {
    let (hi, lo) = if quark >= antiquark {
        (quark, antiquark)
    } else {
        (antiquark, quark)
    };
    let magnitude = DARK_MESON_BASE + 100 * PdgId::from(hi) + 10 * PdgId::from(lo) + spin.digit();
    if quark >= antiquark {
        magnitude
    } else {
        -magnitude
    }
}

/// Recovers the `(i, j)` flavor digits encoded in a dark meson identifier.
pub fn meson_flavors(id: PdgId) -> Result<(u32, u32), SvjError> {
    let magnitude = id.unsigned_abs();
    let base = DARK_MESON_BASE.unsigned_abs();
    if !(base..base + 1000).contains(&magnitude) {
        return Err(SvjError::Config(
            ErrorInfo::new("not-a-dark-meson", format!("id {id} is not a dark meson"))
                .with_context("id", id),
        ));
    }
    let i = ((magnitude / 100) % 10) as u32;
    let j = ((magnitude / 10) % 10) as u32;
    if i == 0 || j == 0 {
        return Err(SvjError::Config(
            ErrorInfo::new(
                "not-a-dark-meson",
                format!("id {id} does not encode two dark flavors"),
            )
            .with_context("id", id),
        ));
    }
    Ok((i, j))
}

/// Identifier of dark quark flavor `index` (1-based).
pub fn dark_quark_id(index: u32) -> PdgId {
    DARK_QUARK + PdgId::from(index) - 1
}

/// Checks that a flavor count fits the single digit meson encoding.
pub fn ensure_flavor_digit(name: &str, value: u32) -> Result<u32, SvjError> {
    if (1..=MAX_FLAVOR_INDEX).contains(&value) {
        Ok(value)
    } else {
        Err(SvjError::Range(
            ErrorInfo::new(
                "flavor-out-of-range",
                format!("{name} = {value} cannot be encoded in a dark meson id"),
            )
            .with_context(name, value)
            .with_hint(format!("use 1 <= {name} <= {MAX_FLAVOR_INDEX}")),
        ))
    }
}
