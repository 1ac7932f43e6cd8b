//! The feature model: one [Interpretation] per reading of a token.

use crate::tagset::vesum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

mod features;

pub use features::*;

/// An auxiliary flag not covered by the closed feature catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Flag {
    /// Mocking usage.
    Mock,
    /// Instantaneous verbs like "гуп".
    Instant,
    /// Anything else, kept verbatim so that lenient decoding round-trips.
    Other(String),
}

impl Flag {
    /// Maps a flag string to a known flag, falling back to [Flag::Other].
    pub fn parse(flag: &str) -> Self {
        match flag {
            "mock" => Flag::Mock,
            "instant" => Flag::Instant,
            _ => Flag::Other(flag.to_owned()),
        }
    }

    /// Whether this flag is part of the known vocabulary.
    pub fn is_known(&self) -> bool {
        !matches!(self, Flag::Other(_))
    }

    /// The string form of the flag.
    pub fn as_str(&self) -> &str {
        match self {
            Flag::Mock => "mock",
            Flag::Instant => "instant",
            Flag::Other(flag) => flag.as_str(),
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lemmas whose verb forms are tagged as auxiliary in the positional tagset.
pub const AUXILIARY_LEMMAS: &[&str] = &["бути", "будучи", "бувши"];

/// One categorical morphological reading of a token.
///
/// Attributes not meaningful for the part of speech are left unset.
/// Two interpretations are [feature-equal](Interpretation::feature_eq) if their canonical internal
/// tags are the same, and equal (`==`) if additionally their lemmas are.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Interpretation {
    /// The lemma, empty if unknown.
    #[serde(default)]
    pub lemma: String,
    /// The catalogued attributes.
    #[serde(default)]
    pub features: Features,
    /// Flags outside the catalogue.
    #[serde(default)]
    pub flags: BTreeSet<Flag>,
}

impl PartialEq for Interpretation {
    fn eq(&self, other: &Interpretation) -> bool {
        self.lemma == other.lemma && self.feature_eq(other)
    }
}

impl Eq for Interpretation {}

impl Interpretation {
    /// Creates an interpretation with the given part of speech and lemma.
    pub fn new<S: Into<String>>(pos: Pos, lemma: S) -> Self {
        let mut interp = Interpretation {
            lemma: lemma.into(),
            ..Default::default()
        };
        interp.features.pos = Some(pos);
        interp
    }

    /// Builder-style setter.
    pub fn with(mut self, feature: Feature) -> Self {
        self.features.set(feature);
        self
    }

    /// Builder-style lemma setter.
    pub fn with_lemma<S: Into<String>>(mut self, lemma: S) -> Self {
        self.lemma = lemma.into();
        self
    }

    /// Whether both readings encode to the same canonical internal tag. Verbatim
    /// [Flag::Other] flags are not compared.
    pub fn feature_eq(&self, other: &Interpretation) -> bool {
        vesum::catalogued_flags(self) == vesum::catalogued_flags(other)
    }

    /// Whether the reading carries a (known or verbatim) auxiliary flag.
    pub fn has_flag(&self, flag: &Flag) -> bool {
        self.flags.contains(flag)
    }

    /// The grammatical number, defaulting to singular when only a gender is set.
    pub fn get_number(&self) -> Option<Number> {
        self.features.number.or_else(|| {
            if self.features.gender.is_some() {
                Some(Number::Singular)
            } else {
                None
            }
        })
    }

    /// Materializes implied attribute values.
    pub fn denormalize(&mut self) {
        if self.features.number.is_none()
            && self.features.gender.is_some()
            && !self.is_no_singular()
        {
            self.features.number = Some(Number::Singular);
        }
    }

    /// Marks the reading as an auxiliary verb.
    pub fn set_auxiliary(&mut self) -> &mut Self {
        self.features.auxiliary = Some(Yes);
        self
    }

    /// Clears proper-noun attributes.
    pub fn unproper(&mut self) -> &mut Self {
        self.features.noun_type = Some(NounType::Common);
        self.features.name_type = None;
        self
    }

    // part of speech

    pub fn pos(&self) -> Option<Pos> {
        self.features.pos
    }
    fn pos_is(&self, pos: Pos) -> bool {
        self.features.pos == Some(pos)
    }
    pub fn is_noun(&self) -> bool {
        self.pos_is(Pos::Noun)
    }
    pub fn is_verb(&self) -> bool {
        self.pos_is(Pos::Verb)
    }
    /// True for adjectives proper, excluding the `beforeadj` first parts of compounds.
    pub fn is_adjective(&self) -> bool {
        self.pos_is(Pos::Adjective) && !self.is_beforeadj()
    }
    pub fn is_adjectivish(&self) -> bool {
        self.pos_is(Pos::Adjective)
    }
    pub fn is_adverb(&self) -> bool {
        self.pos_is(Pos::Adverb)
    }
    pub fn is_converb(&self) -> bool {
        self.pos_is(Pos::Converb)
    }
    pub fn is_preposition(&self) -> bool {
        self.pos_is(Pos::Preposition)
    }
    pub fn is_predicative(&self) -> bool {
        self.pos_is(Pos::Predicative)
    }
    pub fn is_conjunction(&self) -> bool {
        self.pos_is(Pos::Conjunction)
    }
    pub fn is_particle(&self) -> bool {
        self.pos_is(Pos::Particle)
    }
    pub fn is_interjection(&self) -> bool {
        self.pos_is(Pos::Interjection)
    }
    pub fn is_cardinal_numeral(&self) -> bool {
        self.pos_is(Pos::Numeral)
    }
    pub fn is_sym(&self) -> bool {
        self.pos_is(Pos::Sym)
    }
    pub fn is_error(&self) -> bool {
        self.pos_is(Pos::Error)
    }
    pub fn is_x(&self) -> bool {
        self.pos_is(Pos::X)
    }
    pub fn is_punctuation(&self) -> bool {
        self.pos_is(Pos::Punctuation)
    }

    // lexical subclasses

    pub fn is_pronoun(&self) -> bool {
        self.features.pronoun.is_some()
    }
    pub fn is_participle(&self) -> bool {
        self.features.participle.is_some()
    }
    pub fn is_ordinal_numeral(&self) -> bool {
        self.features.ordinal_numeral == Some(OrdinalNumeral::Yes)
    }
    pub fn can_be_ordinal_numeral(&self) -> bool {
        self.features.ordinal_numeral.is_some()
    }
    pub fn is_adjective_as_noun(&self) -> bool {
        self.features.adjective_as_noun.is_some()
    }
    pub fn is_auxiliary(&self) -> bool {
        self.features.auxiliary.is_some()
    }
    pub fn is_nounish(&self) -> bool {
        self.is_noun() || self.is_adjective_as_noun()
    }
    pub fn is_verbial(&self) -> bool {
        self.is_verb() || self.is_converb() || self.is_participle()
    }
    /// Nouns that denote quantities, like "сотня".
    pub fn is_noun_numeral(&self) -> bool {
        self.is_noun() && self.features.numeral_form.is_some()
    }
    pub fn is_proper(&self) -> bool {
        self.features.noun_type == Some(NounType::Proper)
    }
    pub fn is_abbreviation(&self) -> bool {
        self.features.abbreviation.is_some()
    }
    pub fn is_beforeadj(&self) -> bool {
        self.features.beforeadj.is_some()
    }
    pub fn is_foreign(&self) -> bool {
        self.features.foreign.is_some()
    }
    pub fn is_uninflectable(&self) -> bool {
        self.features.uninflectable.is_some()
    }
    pub fn is_n2adj(&self) -> bool {
        self.features.n2adj.is_some()
    }
    /// First names, last names, patronymics and nicknames.
    pub fn is_name(&self) -> bool {
        self.features.name_type.is_some()
    }

    // pronominal subtypes

    fn pron_type_is(&self, value: PronominalType) -> bool {
        self.features.pronominal_type == Some(value)
    }
    pub fn is_personal(&self) -> bool {
        self.pron_type_is(PronominalType::Personal)
    }
    pub fn is_reflexive_pronoun(&self) -> bool {
        self.pron_type_is(PronominalType::Reflexive)
    }
    pub fn is_demonstrative(&self) -> bool {
        self.pron_type_is(PronominalType::Demonstrative)
    }
    pub fn is_interrogative(&self) -> bool {
        self.pron_type_is(PronominalType::Interrogative)
    }
    pub fn is_relative(&self) -> bool {
        self.pron_type_is(PronominalType::Relative)
    }
    pub fn is_negative_pronoun(&self) -> bool {
        self.pron_type_is(PronominalType::Negative)
    }
    pub fn is_indefinite(&self) -> bool {
        self.pron_type_is(PronominalType::Indefinite)
    }
    pub fn is_general(&self) -> bool {
        self.pron_type_is(PronominalType::General)
    }
    pub fn is_emphatic(&self) -> bool {
        self.pron_type_is(PronominalType::Emphatic)
    }
    /// Interrogative-relative readings like "який" are tagged with both subtypes in the corpus,
    /// so a relative reading counts as potentially interrogative.
    pub fn is_interrogative_or_relative(&self) -> bool {
        self.is_interrogative() || self.is_relative()
    }
    pub fn is_possessive(&self) -> bool {
        self.features.possessiveness.is_some()
    }

    // case

    pub fn has_case(&self) -> bool {
        self.features.case.is_some()
    }
    fn case_is(&self, value: Case) -> bool {
        self.features.case == Some(value)
    }
    pub fn is_nominative(&self) -> bool {
        self.case_is(Case::Nominative)
    }
    pub fn is_genitive(&self) -> bool {
        self.case_is(Case::Genitive)
    }
    pub fn is_dative(&self) -> bool {
        self.case_is(Case::Dative)
    }
    pub fn is_accusative(&self) -> bool {
        self.case_is(Case::Accusative)
    }
    pub fn is_instrumental(&self) -> bool {
        self.case_is(Case::Instrumental)
    }
    pub fn is_locative(&self) -> bool {
        self.case_is(Case::Locative)
    }
    pub fn is_vocative(&self) -> bool {
        self.case_is(Case::Vocative)
    }
    pub fn has_required_case(&self) -> bool {
        self.features.required_case.is_some()
    }

    // gender, number, animacy

    pub fn has_gender(&self) -> bool {
        self.features.gender.is_some()
    }
    pub fn is_masculine(&self) -> bool {
        self.features.gender == Some(Gender::Masculine)
    }
    pub fn is_feminine(&self) -> bool {
        self.features.gender == Some(Gender::Feminine)
    }
    pub fn is_neuter(&self) -> bool {
        self.features.gender == Some(Gender::Neuter)
    }
    pub fn has_number(&self) -> bool {
        self.features.number.is_some()
    }
    pub fn is_singular(&self) -> bool {
        self.features.number == Some(Number::Singular)
    }
    pub fn is_plural(&self) -> bool {
        self.features.number == Some(Number::Plural)
    }
    pub fn is_no_singular(&self) -> bool {
        self.features.number_tantum == Some(NumberTantum::NoSingular)
    }
    pub fn is_no_plural(&self) -> bool {
        self.features.number_tantum == Some(NumberTantum::NoPlural)
    }
    pub fn is_animate(&self) -> bool {
        self.features.animacy == Some(Animacy::Animate)
    }
    pub fn is_inanimate(&self) -> bool {
        self.features.animacy == Some(Animacy::Inanimate)
    }
    pub fn is_bacteria(&self) -> bool {
        self.features.animacy == Some(Animacy::Bacteria)
    }
    /// Inanimate nouns inflected like animate ones, `:animish`.
    pub fn is_grammatically_animate(&self) -> bool {
        self.features.grammatical_animacy == Some(Animacy::Animate)
    }
    pub fn has_person(&self) -> bool {
        self.features.person.is_some()
    }

    // verbal

    pub fn is_imperfect(&self) -> bool {
        self.features.aspect == Some(Aspect::Imperfect)
    }
    pub fn is_perfect(&self) -> bool {
        self.features.aspect == Some(Aspect::Perfect)
    }
    pub fn is_past(&self) -> bool {
        self.features.tense == Some(Tense::Past)
    }
    pub fn is_present(&self) -> bool {
        self.features.tense == Some(Tense::Present)
    }
    pub fn is_future(&self) -> bool {
        self.features.tense == Some(Tense::Future)
    }
    /// Verbs without an explicit mood are indicative.
    pub fn is_indicative(&self) -> bool {
        matches!(self.features.mood, None | Some(Mood::Indicative))
    }
    pub fn is_imperative(&self) -> bool {
        self.features.mood == Some(Mood::Imperative)
    }
    pub fn is_infinitive(&self) -> bool {
        self.features.mood == Some(Mood::Infinitive)
    }
    pub fn is_impersonal(&self) -> bool {
        self.features.mood == Some(Mood::Impersonal)
    }
    pub fn is_finite(&self) -> bool {
        self.is_verb() && !self.is_infinitive() && !self.is_impersonal()
    }
    pub fn is_active(&self) -> bool {
        self.features.voice == Some(Voice::Active)
    }
    pub fn is_passive(&self) -> bool {
        self.features.voice == Some(Voice::Passive)
    }
    pub fn is_reflexive_verb(&self) -> bool {
        self.features.reflexivity.is_some()
    }
    pub fn is_negative(&self) -> bool {
        self.features.polarity == Some(Polarity::Negative)
    }

    // degree and variants

    pub fn is_comparable(&self) -> bool {
        self.features.degree.is_some()
    }
    pub fn is_comparative(&self) -> bool {
        self.features.degree == Some(Degree::Comparative)
    }
    pub fn is_superlative(&self) -> bool {
        self.features.degree == Some(Degree::Superlative)
    }
    pub fn has_nonpositive_degree(&self) -> bool {
        self.is_comparable() && self.features.degree != Some(Degree::Positive)
    }
    pub fn is_short(&self) -> bool {
        self.features.variant == Some(Variant::Short)
    }

    // conjunctions

    pub fn is_coordinating(&self) -> bool {
        self.features.conjunction_type == Some(ConjunctionType::Coordinating)
    }
    pub fn is_subordinating(&self) -> bool {
        self.features.conjunction_type == Some(ConjunctionType::Subordinating)
    }

    // style

    pub fn is_colloquial(&self) -> bool {
        self.features.colloquial.is_some()
    }
    pub fn is_rare(&self) -> bool {
        self.features.rarity.is_some()
    }
    pub fn is_bad(&self) -> bool {
        self.features.badness.is_some()
    }
    pub fn is_odd(&self) -> bool {
        self.features.oddness.is_some()
    }

    // punctuation

    pub fn punctuation_type(&self) -> Option<PunctuationType> {
        self.features.punctuation_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_defaults_to_singular_with_gender() {
        let interp = Interpretation::new(Pos::Noun, "стіл").with(Feature::Gender(Gender::Masculine));
        assert_eq!(interp.get_number(), Some(Number::Singular));
        assert!(!interp.is_singular());

        let mut denormalized = interp.clone();
        denormalized.denormalize();
        assert!(denormalized.is_singular());
        assert!(denormalized.feature_eq(&denormalized.clone()));
        assert!(!denormalized.feature_eq(&interp));
    }

    #[test]
    fn equality_requires_lemma() {
        let a = Interpretation::new(Pos::Noun, "мати").with(Feature::Case(Case::Nominative));
        let b = a.clone().with_lemma("матір");

        assert!(a.feature_eq(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn other_flags_do_not_affect_feature_equality() {
        let a = Interpretation::new(Pos::Adverb, "швидко");
        let mut b = a.clone();
        b.flags.insert(Flag::parse("weird"));
        assert!(a.feature_eq(&b));

        b.flags.insert(Flag::parse("mock"));
        assert!(!a.feature_eq(&b));
    }

    #[test]
    fn feature_equality_follows_encoding() {
        let a = Interpretation::new(Pos::Converb, "прочитавши")
            .with(Feature::Aspect(Aspect::Perfect));
        let b = a.clone().with(Feature::Tense(Tense::Past));
        assert_ne!(a.features, b.features);
        assert!(a.feature_eq(&b));

        let mut common = Interpretation::new(Pos::Noun, "стіл");
        common.unproper();
        assert!(common.feature_eq(&Interpretation::new(Pos::Noun, "стіл")));

        let imperfect = Interpretation::new(Pos::Converb, "читаючи")
            .with(Feature::Aspect(Aspect::Imperfect));
        let present = imperfect.clone().with(Feature::Tense(Tense::Present));
        assert!(!imperfect.feature_eq(&present));
    }

    #[test]
    fn verbs_default_to_indicative() {
        let verb = Interpretation::new(Pos::Verb, "ходити").with(Feature::Tense(Tense::Past));
        assert!(verb.is_indicative());
        assert!(verb.is_finite());
        assert!(verb.is_verbial());
    }
}
