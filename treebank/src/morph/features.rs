//! The closed catalogue of morphological attributes.
//!
//! Every attribute is an independent enum. [Features] holds at most one value per attribute,
//! [Feature] is a single attribute value and [FeatureKind] names an attribute without a value.

use serde::{Deserialize, Serialize};

/// Marker value for attributes that are either present or absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Yes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Pos {
    Noun,
    Verb,
    Adjective,
    Adverb,
    /// Adverbial participle (дієприслівник).
    Converb,
    Preposition,
    Predicative,
    Conjunction,
    Particle,
    Interjection,
    Numeral,
    Sym,
    Error,
    X,
    Punctuation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Case {
    Nominative,
    Genitive,
    Dative,
    Accusative,
    Instrumental,
    Locative,
    Vocative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Number {
    Singular,
    Plural,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum NumberTantum {
    NoPlural,
    NoSingular,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Animacy {
    Animate,
    Inanimate,
    /// Nouns like "бактерія" which decline either way.
    Bacteria,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Aspect {
    Imperfect,
    Perfect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Tense {
    Past,
    Present,
    Future,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Mood {
    Indicative,
    Imperative,
    Infinitive,
    Impersonal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Voice {
    Active,
    Passive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Person {
    First,
    Second,
    Third,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Degree {
    Positive,
    Comparative,
    Superlative,
    Absolute,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Variant {
    Short,
    Uncontracted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum PronominalType {
    Personal,
    Reflexive,
    Demonstrative,
    Interrogative,
    Relative,
    Negative,
    Indefinite,
    General,
    Emphatic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum ConjunctionType {
    Coordinating,
    Subordinating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum NounType {
    Common,
    Proper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum NameType {
    First,
    Last,
    Patronymic,
    Nick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum NumeralForm {
    Digit,
    Roman,
    Letter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum OrdinalNumeral {
    Yes,
    Maybe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Polarity {
    Positive,
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum PunctuationType {
    Dash,
    Quote,
    Bracket,
    Colon,
    Comma,
    Ellipsis,
    Exclamation,
    Period,
    Question,
    Semicolon,
    Slash,
    Bullet,
    Hyphen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum PunctuationSide {
    Open,
    Close,
}

/// Paradigm or semantic homonym number, `1..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Omonym(pub u8);

macro_rules! feature_model {
    ($($field:ident: $ty:ty => $kind:ident),* $(,)?) => {
        /// Names one attribute of the catalogue.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[allow(missing_docs)]
        pub enum FeatureKind {
            $($kind),*
        }

        impl FeatureKind {
            /// All attributes in declaration order.
            pub const ALL: &'static [FeatureKind] = &[$(FeatureKind::$kind),*];
        }

        /// One value of one attribute.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[allow(missing_docs)]
        pub enum Feature {
            $($kind($ty)),*
        }

        impl Feature {
            /// The attribute this value belongs to.
            pub fn kind(&self) -> FeatureKind {
                match self {
                    $(Feature::$kind(_) => FeatureKind::$kind),*
                }
            }
        }

        /// A record of independently optional attributes.
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[allow(missing_docs)]
        pub struct Features {
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>
            ),*
        }

        impl Features {
            /// Gets the value of an attribute, if set.
            pub fn get(&self, kind: FeatureKind) -> Option<Feature> {
                match kind {
                    $(FeatureKind::$kind => self.$field.map(Feature::$kind)),*
                }
            }

            /// Sets an attribute, replacing any previous value.
            pub fn set(&mut self, feature: Feature) {
                match feature {
                    $(Feature::$kind(value) => self.$field = Some(value)),*
                }
            }

            /// Clears an attribute.
            pub fn unset(&mut self, kind: FeatureKind) {
                match kind {
                    $(FeatureKind::$kind => self.$field = None),*
                }
            }

            /// Iterates over the set attributes in declaration order.
            pub fn iter(&self) -> impl Iterator<Item = Feature> + '_ {
                FeatureKind::ALL.iter().filter_map(move |kind| self.get(*kind))
            }
        }
    };
}

feature_model! {
    pos: Pos => Pos,
    pronoun: Yes => Pronoun,
    participle: Yes => Participle,
    ordinal_numeral: OrdinalNumeral => OrdinalNumeral,
    adjective_as_noun: Yes => AdjectiveAsNoun,
    auxiliary: Yes => Auxiliary,
    case: Case => Case,
    required_case: Case => RequiredCase,
    number: Number => Number,
    number_tantum: NumberTantum => NumberTantum,
    gender: Gender => Gender,
    animacy: Animacy => Animacy,
    required_animacy: Animacy => RequiredAnimacy,
    grammatical_animacy: Animacy => GrammaticalAnimacy,
    aspect: Aspect => Aspect,
    tense: Tense => Tense,
    mood: Mood => Mood,
    voice: Voice => Voice,
    person: Person => Person,
    degree: Degree => Degree,
    variant: Variant => Variant,
    pronominal_type: PronominalType => PronominalType,
    conjunction_type: ConjunctionType => ConjunctionType,
    noun_type: NounType => NounType,
    name_type: NameType => NameType,
    numeral_form: NumeralForm => NumeralForm,
    polarity: Polarity => Polarity,
    reflexivity: Yes => Reflexivity,
    possessiveness: Yes => Possessiveness,
    abbreviation: Yes => Abbreviation,
    uninflectable: Yes => Uninflectable,
    alternativity: Yes => Alternativity,
    vu_alternativity: Yes => VuAlternativity,
    dimin: Yes => Dimin,
    n2adj: Yes => N2Adj,
    colloquial: Yes => Colloquial,
    rarity: Yes => Rarity,
    slang: Yes => Slang,
    badness: Yes => Badness,
    oddness: Yes => Oddness,
    auto: Yes => Auto,
    beforeadj: Yes => Beforeadj,
    foreign: Yes => Foreign,
    preposition_requirement: Yes => PrepositionRequirement,
    punctuation_type: PunctuationType => PunctuationType,
    punctuation_side: PunctuationSide => PunctuationSide,
    paradigm_omonym: Omonym => ParadigmOmonym,
    semantic_omonym: Omonym => SemanticOmonym,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_unset() {
        let mut features = Features::default();
        features.set(Feature::Case(Case::Genitive));
        features.set(Feature::RequiredCase(Case::Locative));

        assert_eq!(features.case, Some(Case::Genitive));
        assert_eq!(
            features.get(FeatureKind::RequiredCase),
            Some(Feature::RequiredCase(Case::Locative))
        );

        features.unset(FeatureKind::Case);
        assert_eq!(features.get(FeatureKind::Case), None);
        assert_eq!(features.iter().count(), 1);
    }

    #[test]
    fn kinds_are_listed_once() {
        let mut kinds = FeatureKind::ALL.to_vec();
        kinds.dedup();
        assert_eq!(kinds.len(), FeatureKind::ALL.len());
        assert_eq!(Feature::Beforeadj(Yes).kind(), FeatureKind::Beforeadj);
    }
}
