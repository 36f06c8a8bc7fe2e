//! Data model and decoder for keybinding cheatsheets.
//!
//! A cheatsheet is a forest: an ordered sequence of root [`Bind`]s, each of
//! which may own a subtree of further binds through its [`Action`]. The whole
//! forest is decoded once from a single JSON value, held immutably, and
//! traversed exactly once by the renderer.

use bitflags::bitflags;
use serde::{Deserialize, Deserializer};

use crate::error::Error;

bitflags! {
    /// Modifier keys held down together with a chord's key.
    ///
    /// The wire format is the raw bit value. Bits beyond the named ones are
    /// retained on decode and ignored at render time.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Mods: u32 {
        const SHIFT = 1;
        const CAPS_LOCK = 1 << 1;
        const CTRL = 1 << 2;
        const ALT = 1 << 3;
        const NUM_LOCK = 1 << 4;
        const MOD3 = 1 << 5;
        const SUPER = 1 << 6;
        const MOD5 = 1 << 7;
    }
}

impl Mods {
    /// The modifiers that surface in rendered output, in checked order.
    /// Alt through Mod5 are recognized bits but carry no display label.
    const RENDERED: [(Self, &'static str); 3] = [
        (Self::SHIFT, "shift"),
        (Self::CAPS_LOCK, "caps-lock"),
        (Self::CTRL, "ctrl"),
    ];

    /// Display labels for the held modifiers, in checked order.
    #[must_use]
    pub fn labels(self) -> Vec<&'static str> {
        Self::RENDERED
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, label)| *label)
            .collect()
    }
}

/// Decodes a modifier bit field from a bare JSON integer, keeping any
/// unrecognized high bits.
fn mods_from_bits<'de, D>(deserializer: D) -> Result<Mods, D::Error>
where
    D: Deserializer<'de>,
{
    let bits = u32::deserialize(deserializer)?;
    Ok(Mods::from_bits_retain(bits))
}

/// A combination of modifier keys and a single key.
#[derive(Debug, Clone, Deserialize)]
pub struct Chord {
    /// Modifiers which need to be held down together with the key. May be
    /// empty, meaning the key alone triggers the bind.
    #[serde(deserialize_with = "mods_from_bits")]
    pub modifiers: Mods,
    /// Literal key name, e.g. `"a"` or `"F1"`.
    pub key: String,
}

/// The task performed when a bind is triggered.
///
/// Externally tagged on the wire: `"None"` is the bare no-action sentinel,
/// `{"EnterMode": {"binds": [...]}}` switches to a nested mode. Any other
/// discriminant fails the decode.
#[derive(Debug, Deserialize)]
pub enum Action {
    /// Switch to a nested mode with its own set of binds.
    EnterMode {
        /// The binds available inside the mode, in source order.
        binds: Vec<Bind>,
    },
    /// No further action.
    None,
}

/// A single keybinding: a trigger chord, optional output text, and an action.
///
/// All three fields are required on the wire; `output` may be `null` but may
/// not be missing.
#[derive(Debug, Deserialize)]
pub struct Bind {
    /// The chord that triggers this bind.
    pub chord: Chord,
    /// Descriptive output text, if any.
    #[serde(deserialize_with = "Option::deserialize")]
    pub output: Option<String>,
    /// What triggering the bind does.
    pub action: Action,
}

/// Decodes one JSON array of bind records into the in-memory forest.
///
/// Decoding is strict and all-or-nothing: any structural mismatch (malformed
/// syntax, a missing required field, a wrong field type, an unrecognized
/// `action` discriminant) fails the whole operation. No semantic validation
/// happens beyond shape: any integer is accepted for `modifiers` and any
/// string for `key`.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the input does not match the record shape.
pub fn decode_binds(input: &str) -> Result<Vec<Bind>, Error> {
    let binds = serde_json::from_str(input)?;
    Ok(binds)
}
