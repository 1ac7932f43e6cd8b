//! Morphology, enhanced dependencies and validation for a Ukrainian Universal Dependencies
//! treebank.
//! # Overview
//! treebank has the following core abstractions:
//! - An [Interpretation][morph::Interpretation], one morphological reading of a token, which the
//!   [tagset] module converts from and to the VESUM, MULTEXT-East and UD tag formats.
//! - [Sentence][types::Sentence]s of [Token][types::Token]s with basic dependencies, from which
//!   the [enhanced] module derives the enhanced dependency graph.
//! - A [Rules][rules::Rules] set which validates a sentence and reports
//!   [Problem][types::Problem]s.
//! # Examples
//! Convert a tag:
//! ```
//! use treebank::tagset::{self, Tagset};
//!
//! let interp = tagset::decode("verb:imperf:past:m", Tagset::Vesum)?;
//! assert!(interp.is_past());
//! let ud = tagset::encode(&interp, Tagset::Ud)?;
//! assert!(ud.starts_with("VERB|"));
//! assert!(ud.contains("Tense=Past"));
//! # Ok::<(), treebank::Error>(())
//! ```
//! Validate a sentence:
//! ```
//! use treebank::morph::{Case, Feature, Interpretation, Pos};
//! use treebank::rules::Rules;
//! use treebank::types::{Sentence, Token};
//!
//! let subject = Interpretation::new(Pos::Noun, "книжка").with(Feature::Case(Case::Genitive));
//! let sentence = Sentence::new(
//!     "1",
//!     vec![
//!         Token::new("книжок", subject).with_dep("nsubj", 1),
//!         Token::new("лежить", Interpretation::new(Pos::Verb, "лежати")),
//!     ],
//! );
//! let problems = Rules::new().validate(&sentence)?;
//! assert!(problems.iter().any(|x| x.message == "підмет не в називному"));
//! # Ok::<(), treebank::Error>(())
//! ```

use thiserror::Error;

pub mod enhanced;
pub mod grammar;
pub mod graph;
pub mod morph;
pub mod rule;
pub mod rules;
pub mod tagset;
pub mod types;

pub use rules::{Rules, RulesOptions};
pub use types::{Problem, Sentence, Token};

#[derive(Error, Debug)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    Tagset(#[from] tagset::Error),
    #[error(transparent)]
    Graph(#[from] graph::Error),
    #[error(transparent)]
    IdError(#[from] rule::id::Error),
}
