//! Fundamental types used by this crate.

use crate::morph::Interpretation;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fmt, ops::Index, slice};

lazy_static::lazy_static! {
    static ref EMPTY_INTERP: Interpretation = Interpretation::default();
}

/// A basic dependency: the relation to a head token at a sentence position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dependency {
    /// Colon-namespaced relation label, e.g. `acl:relcl`.
    pub relation: String,
    /// Position of the head in the sentence.
    pub head: usize,
}

impl Dependency {
    pub fn new<S: Into<String>>(relation: S, head: usize) -> Self {
        Dependency {
            relation: relation.into(),
            head,
        }
    }
}

/// An edge of the enhanced graph as stored on its dependent.
/// A head of `None` stands for the virtual sentence root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EnhancedDependency {
    pub head: Option<usize>,
    pub relation: String,
}

impl EnhancedDependency {
    pub fn new<S: Into<String>>(head: Option<usize>, relation: S) -> Self {
        EnhancedDependency {
            head,
            relation: relation.into(),
        }
    }
}

/// Relations of helper dependencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HelperRelation {
    /// The dependent is shared by all conjuncts of its head.
    Distrib,
    /// The dependent belongs to the conjuncts collectively.
    Collect,
    /// The dependent belongs to its head only.
    Private,
}

/// An annotation that steers enhanced graph derivation without being part of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HelperDependency {
    pub relation: HelperRelation,
    pub head: usize,
}

/// Escape hatches for known exceptions, set by annotators on single tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TokenTag {
    /// Grafted from another source, so agreement is not checked.
    Graft,
    /// Allowed inside a subtree it does not belong to.
    LegalAlien,
    /// Marked as erroneous in the source text.
    Error,
    /// A conjunction that is legitimately set off by punctuation.
    CommedConj,
    /// A nominative used as vocative.
    NomVoc,
    /// An adjective acting as a determiner head.
    AdjDet,
    /// Promoted to the head position of an elided word.
    Promoted,
    /// A null node standing for an elided word.
    Elided,
    /// A comma that belongs to the predicate.
    PredicateComma,
    /// Punctuation nested inside other punctuation.
    NestedPunct,
    /// An interrogative pronoun that needs no question mark.
    NoQmark,
    /// An `xcomp` that is allowed to have a `mark`.
    XcompMark,
    /// Several names of one type attached to one head.
    MultiNames,
    /// A `:beforeadj` without a hyphen.
    NoDash,
    /// An oblique without a preposition that is not a time span.
    PreplessObl,
    Other(String),
}

impl TokenTag {
    /// Maps the conventional tag name to a tag, keeping unknown names verbatim.
    pub fn parse(tag: &str) -> Self {
        match tag {
            "graft" => TokenTag::Graft,
            "legal_alien" => TokenTag::LegalAlien,
            "error" => TokenTag::Error,
            "commed_conj" => TokenTag::CommedConj,
            "nomvoc" => TokenTag::NomVoc,
            "adjdet" => TokenTag::AdjDet,
            "promoted" => TokenTag::Promoted,
            "elided" => TokenTag::Elided,
            "predicate_comma" => TokenTag::PredicateComma,
            "nestedpunct" => TokenTag::NestedPunct,
            "no_qmark" => TokenTag::NoQmark,
            "xcomp_mark" => TokenTag::XcompMark,
            "multi_names" => TokenTag::MultiNames,
            "no_dash" => TokenTag::NoDash,
            "prepless_obl" => TokenTag::PreplessObl,
            other => TokenTag::Other(other.to_owned()),
        }
    }
}

/// Kinds of document structure markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StructureKind {
    Document,
    Paragraph,
    Sentence,
    Stanza,
    Line,
}

/// A document structure boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Structure {
    pub kind: StructureKind,
    /// Whether this marker closes the structure.
    pub closing: bool,
}

/// A position in a sentence. Either a word with its candidate readings and dependencies or a
/// [Structure] marker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Stable identifier, unique within a document.
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub form: String,
    /// Candidate readings, the chosen one first.
    #[serde(default)]
    pub interps: Vec<Interpretation>,
    /// Basic dependencies, usually exactly one. Empty for the root.
    #[serde(default)]
    pub deps: Vec<Dependency>,
    #[serde(default)]
    pub edeps: Vec<EnhancedDependency>,
    #[serde(default)]
    pub hdeps: Vec<HelperDependency>,
    /// Coreference edges. Carried through unchanged.
    #[serde(default)]
    pub corefs: Vec<Dependency>,
    #[serde(default)]
    pub tags: BTreeSet<TokenTag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structure: Option<Structure>,
}

impl Token {
    /// Creates a word token with one reading.
    pub fn new<S: Into<String>>(form: S, interp: Interpretation) -> Self {
        Token {
            form: form.into(),
            interps: vec![interp],
            ..Default::default()
        }
    }

    /// Creates a structure marker.
    pub fn structure(kind: StructureKind, closing: bool) -> Self {
        Token {
            structure: Some(Structure { kind, closing }),
            ..Default::default()
        }
    }

    /// Builder-style setter for the basic dependency.
    pub fn with_dep<S: Into<String>>(mut self, relation: S, head: usize) -> Self {
        self.deps.push(Dependency::new(relation, head));
        self
    }

    /// Builder-style adder for an alternative reading.
    pub fn with_interp(mut self, interp: Interpretation) -> Self {
        self.interps.push(interp);
        self
    }

    /// Builder-style setter for a tag.
    pub fn with_tag(mut self, tag: TokenTag) -> Self {
        self.tags.insert(tag);
        self
    }

    /// The chosen reading. Structure markers have an empty one.
    pub fn interp(&self) -> &Interpretation {
        self.interps.first().unwrap_or(&EMPTY_INTERP)
    }

    /// The head of the first basic dependency.
    pub fn head(&self) -> Option<usize> {
        self.deps.first().map(|x| x.head)
    }

    /// The relation of the first basic dependency.
    pub fn relation(&self) -> Option<&str> {
        self.deps.first().map(|x| x.relation.as_str())
    }

    pub fn has_tag(&self, tag: &TokenTag) -> bool {
        self.tags.contains(tag)
    }

    pub fn is_word(&self) -> bool {
        self.structure.is_none()
    }

    pub fn is_promoted(&self) -> bool {
        self.has_tag(&TokenTag::Promoted)
    }

    pub fn is_elided(&self) -> bool {
        self.has_tag(&TokenTag::Elided)
    }

    pub fn is_graft(&self) -> bool {
        self.has_tag(&TokenTag::Graft)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.structure {
            Some(structure) => write!(
                f,
                "<{}{:?}>",
                if structure.closing { "/" } else { "" },
                structure.kind
            ),
            None => write!(f, "{}", self.form),
        }
    }
}

/// A sequence of word tokens addressed by position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    #[serde(default)]
    pub id: String,
    pub tokens: Vec<Token>,
}

impl Sentence {
    pub fn new<S: Into<String>>(id: S, tokens: Vec<Token>) -> Self {
        Sentence {
            id: id.into(),
            tokens,
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Gets the token at a position.
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// The forms joined by spaces.
    pub fn text(&self) -> String {
        self.tokens
            .iter()
            .map(|x| x.form.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Index<usize> for Sentence {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

/// One diagnostic: a human-readable message and the positions it concerns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Problem {
    pub message: String,
    pub positions: Vec<usize>,
}

impl Problem {
    pub fn new<S: Into<String>>(message: S, positions: Vec<usize>) -> Self {
        Problem {
            message: message.into(),
            positions,
        }
    }

    /// Creates a problem concerning a single position.
    pub fn at<S: Into<String>>(message: S, position: usize) -> Self {
        Problem::new(message, vec![position])
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {:?}", self.message, self.positions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morph::Pos;

    #[test]
    fn token_accessors() {
        let token = Token::new("ходив", Interpretation::new(Pos::Verb, "ходити"))
            .with_dep("conj", 2)
            .with_tag(TokenTag::Promoted);

        assert_eq!(token.head(), Some(2));
        assert_eq!(token.relation(), Some("conj"));
        assert!(token.is_promoted());
        assert!(!token.is_elided());
        assert_eq!(token.interp().lemma, "ходити");
    }

    #[test]
    fn structure_tokens_have_an_empty_reading() {
        let token = Token::structure(StructureKind::Paragraph, true);
        assert!(!token.is_word());
        assert_eq!(token.interp().pos(), None);
        assert_eq!(token.to_string(), "</Paragraph>");
    }

    #[test]
    fn tags_parse() {
        assert_eq!(TokenTag::parse("legal_alien"), TokenTag::LegalAlien);
        assert_eq!(TokenTag::parse("xyz"), TokenTag::Other("xyz".into()));
    }

    #[test]
    fn problems_serialize() {
        let problem = Problem::at("підмет не в називному", 3);
        let json = serde_json::to_string(&problem).unwrap();
        assert_eq!(
            json,
            r#"{"message":"підмет не в називному","positions":[3]}"#
        );
    }
}
