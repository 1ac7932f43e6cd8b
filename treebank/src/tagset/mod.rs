//! Conversion between [Interpretation]s and the three external tag encodings.
//!
//! - [Tagset::Vesum]: the internal colon-separated flag string, e.g. `noun:anim:m:v_naz`.
//! - [Tagset::Mte]: the fixed-width positional MULTEXT-East tag, e.g. `Ncmsny`.
//! - [Tagset::Ud]: a Universal Dependencies POS plus sorted features, e.g. `NOUN|Animacy=Anim|Case=Nom`.
//!
//! The lookup tables behind every codec are built once on first use and are read-only afterwards.

use crate::morph::Interpretation;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub mod mte;
pub mod ud;
pub mod vesum;

#[derive(Error, Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum Error {
    #[error("unknown flag \"{flag}\" in tag \"{tag}\"")]
    UnknownFlag { flag: String, tag: String },
    #[error("a lemma is needed to encode {tag} as {tagset}")]
    MissingLemma { tag: String, tagset: Tagset },
    #[error("cannot convert {tag} to {tagset}")]
    UnsupportedConversion { tag: String, tagset: Tagset },
    #[error("invalid {tagset} tag \"{tag}\"")]
    InvalidTag { tag: String, tagset: Tagset },
}

/// The supported tag encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tagset {
    /// The internal flag-string tagset.
    Vesum,
    /// The positional MULTEXT-East tagset.
    Mte,
    /// The Universal Dependencies POS + feature tagset.
    Ud,
}

impl fmt::Display for Tagset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tagset::Vesum => "VESUM",
            Tagset::Mte => "MTE",
            Tagset::Ud => "UD",
        };
        write!(f, "{}", name)
    }
}

/// Options for decoding tags.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecodeOptions {
    /// Fail on flags which can not be mapped. If `false`, they are kept verbatim as
    /// [Flag::Other](crate::morph::Flag::Other).
    #[serde(default = "default_strict")]
    pub strict: bool,
}

fn default_strict() -> bool {
    true
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions { strict: true }
    }
}

impl DecodeOptions {
    /// Options which keep unknown flags instead of failing.
    pub fn lenient() -> Self {
        DecodeOptions { strict: false }
    }
}

/// Decodes a tag with strict options and no lemma or word form.
pub fn decode(tag: &str, tagset: Tagset) -> Result<Interpretation, Error> {
    decode_with(tag, "", "", tagset, DecodeOptions::default())
}

/// Decodes a tag. Some tagsets need the lemma or the word form to fill in
/// attributes they do not encode; pass empty strings if unknown.
pub fn decode_with(
    tag: &str,
    lemma: &str,
    form: &str,
    tagset: Tagset,
    options: DecodeOptions,
) -> Result<Interpretation, Error> {
    let mut interp = match tagset {
        Tagset::Vesum => vesum::decode(tag, options)?,
        Tagset::Mte => mte::decode(tag, form)?,
        Tagset::Ud => ud::decode(tag)?,
    };
    interp.lemma = lemma.to_owned();
    Ok(interp)
}

/// Encodes an interpretation in the given tagset.
pub fn encode(interp: &Interpretation, tagset: Tagset) -> Result<String, Error> {
    match tagset {
        Tagset::Vesum => Ok(vesum::encode(interp)),
        Tagset::Mte => mte::encode(interp),
        Tagset::Ud => ud::encode(interp),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagset_names_in_errors() {
        let error = Error::UnsupportedConversion {
            tag: "predic".into(),
            tagset: Tagset::Ud,
        };
        assert_eq!(error.to_string(), "cannot convert predic to UD");
    }

    #[test]
    fn decode_sets_lemma() {
        let interp = decode_with(
            "noun:inanim:m:v_naz",
            "стіл",
            "стіл",
            Tagset::Vesum,
            DecodeOptions::default(),
        )
        .unwrap();
        assert_eq!(interp.lemma, "стіл");
    }
}
