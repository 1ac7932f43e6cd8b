//! The internal flag-string tagset.
//!
//! A tag is a colon-joined list of flags. Encoding sorts the flags by a per-POS order table so that
//! `encode(decode(tag))` is canonical regardless of the input order.

use super::{DecodeOptions, Error};
use crate::morph::*;
use bimap::BiMap;
use indexmap::IndexSet;
use lazy_static::lazy_static;
use log::warn;
use std::collections::HashMap;

/// Position assigned to a class in [ORDERS].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum OrderClass {
    Noun,
    Adjective,
    Verb,
    Numeral,
    Converb,
    X,
    Punctuation,
    Other,
}

impl OrderClass {
    fn of(pos: Option<Pos>) -> Self {
        match pos {
            Some(Pos::Noun) => OrderClass::Noun,
            Some(Pos::Adjective) => OrderClass::Adjective,
            Some(Pos::Verb) => OrderClass::Verb,
            Some(Pos::Numeral) => OrderClass::Numeral,
            Some(Pos::Converb) => OrderClass::Converb,
            Some(Pos::X) => OrderClass::X,
            Some(Pos::Punctuation) => OrderClass::Punctuation,
            _ => OrderClass::Other,
        }
    }
}

use FeatureKind as K;

const NOUN_ORDER: &[FeatureKind] = &[
    K::Pos,
    K::Animacy,
    K::Number,
    K::Gender,
    K::Case,
    K::GrammaticalAnimacy,
    K::Uninflectable,
    K::NumberTantum,
    K::Alternativity,
    K::NounType,
    K::NameType,
    K::Abbreviation,
    K::Possessiveness,
    K::PrepositionRequirement,
    K::Pronoun,
    K::PronominalType,
];

const ADJECTIVE_ORDER: &[FeatureKind] = &[
    K::Pos,
    K::Beforeadj,
    K::Gender,
    K::Number,
    K::Case,
    K::GrammaticalAnimacy,
    K::RequiredAnimacy,
    K::Variant,
    K::Degree,
    K::Abbreviation,
    K::Possessiveness,
    K::Uninflectable,
    K::NumberTantum,
    K::Pronoun,
    K::Participle,
    K::PronominalType,
    K::Aspect,
    K::Voice,
    K::OrdinalNumeral,
    K::AdjectiveAsNoun,
    K::Animacy,
];

const VERB_ORDER: &[FeatureKind] = &[
    K::Pos,
    K::Reflexivity,
    K::Voice,
    K::Aspect,
    K::Tense,
    K::Mood,
    K::Number,
    K::Person,
    K::Gender,
    K::Dimin,
    K::VuAlternativity,
];

const NUMERAL_ORDER: &[FeatureKind] = &[
    K::Pos,
    K::Gender,
    K::Number,
    K::Case,
    K::Uninflectable,
    K::Pronoun,
    K::PronominalType,
];

const CONVERB_ORDER: &[FeatureKind] = &[
    K::Pos,
    K::Reflexivity,
    K::Voice,
    K::Aspect,
    K::Tense,
    K::Alternativity,
];

const X_ORDER: &[FeatureKind] = &[K::Pos, K::Abbreviation];

const PUNCTUATION_ORDER: &[FeatureKind] = &[K::Pos, K::PunctuationType, K::PunctuationSide];

const OTHER_ORDER: &[FeatureKind] = &[
    K::Pos,
    K::Degree,
    K::ConjunctionType,
    K::Case,
    K::RequiredCase,
    K::GrammaticalAnimacy,
    K::RequiredAnimacy,
    K::Uninflectable,
    K::Alternativity,
    K::NumberTantum,
    K::NameType,
    K::Possessiveness,
    K::Abbreviation,
    K::PrepositionRequirement,
    K::Pronoun,
    K::Participle,
    K::OrdinalNumeral,
    K::AdjectiveAsNoun,
    K::PronominalType,
    K::Person,
];

/// Appended to every order table.
const STYLE_ORDER: &[FeatureKind] = &[
    K::Colloquial,
    K::Slang,
    K::Rarity,
    K::Badness,
    K::Oddness,
    K::Auto,
    K::SemanticOmonym,
    K::ParadigmOmonym,
];

lazy_static! {
    static ref FLAGS: BiMap<&'static str, Feature> = {
        let mut map = BiMap::new();
        let table: &[(&'static str, Feature)] = &[
            ("noun", Feature::Pos(Pos::Noun)),
            ("verb", Feature::Pos(Pos::Verb)),
            ("adj", Feature::Pos(Pos::Adjective)),
            ("adv", Feature::Pos(Pos::Adverb)),
            ("advp", Feature::Pos(Pos::Converb)),
            ("prep", Feature::Pos(Pos::Preposition)),
            ("predic", Feature::Pos(Pos::Predicative)),
            ("conj", Feature::Pos(Pos::Conjunction)),
            ("part", Feature::Pos(Pos::Particle)),
            ("intj", Feature::Pos(Pos::Interjection)),
            ("numr", Feature::Pos(Pos::Numeral)),
            ("sym", Feature::Pos(Pos::Sym)),
            ("error", Feature::Pos(Pos::Error)),
            ("x", Feature::Pos(Pos::X)),
            ("punct", Feature::Pos(Pos::Punctuation)),
            ("&pron", Feature::Pronoun(Yes)),
            ("&adjp", Feature::Participle(Yes)),
            ("&numr", Feature::OrdinalNumeral(OrdinalNumeral::Yes)),
            ("&_numr", Feature::OrdinalNumeral(OrdinalNumeral::Maybe)),
            ("&noun", Feature::AdjectiveAsNoun(Yes)),
            ("digit", Feature::NumeralForm(NumeralForm::Digit)),
            ("roman", Feature::NumeralForm(NumeralForm::Roman)),
            ("letter", Feature::NumeralForm(NumeralForm::Letter)),
            ("prop", Feature::NounType(NounType::Proper)),
            ("fname", Feature::NameType(NameType::First)),
            ("lname", Feature::NameType(NameType::Last)),
            ("patr", Feature::NameType(NameType::Patronymic)),
            ("nick", Feature::NameType(NameType::Nick)),
            ("anim", Feature::Animacy(Animacy::Animate)),
            ("inanim", Feature::Animacy(Animacy::Inanimate)),
            ("unanim", Feature::Animacy(Animacy::Bacteria)),
            ("animish", Feature::GrammaticalAnimacy(Animacy::Animate)),
            ("inanimish", Feature::GrammaticalAnimacy(Animacy::Inanimate)),
            ("ranim", Feature::RequiredAnimacy(Animacy::Animate)),
            ("rinanim", Feature::RequiredAnimacy(Animacy::Inanimate)),
            ("rev", Feature::Reflexivity(Yes)),
            ("v_naz", Feature::Case(Case::Nominative)),
            ("v_rod", Feature::Case(Case::Genitive)),
            ("v_dav", Feature::Case(Case::Dative)),
            ("v_zna", Feature::Case(Case::Accusative)),
            ("v_oru", Feature::Case(Case::Instrumental)),
            ("v_mis", Feature::Case(Case::Locative)),
            ("v_kly", Feature::Case(Case::Vocative)),
            ("rv_rod", Feature::RequiredCase(Case::Genitive)),
            ("rv_dav", Feature::RequiredCase(Case::Dative)),
            ("rv_zna", Feature::RequiredCase(Case::Accusative)),
            ("rv_oru", Feature::RequiredCase(Case::Instrumental)),
            ("rv_mis", Feature::RequiredCase(Case::Locative)),
            ("imperf", Feature::Aspect(Aspect::Imperfect)),
            ("perf", Feature::Aspect(Aspect::Perfect)),
            ("past", Feature::Tense(Tense::Past)),
            ("pres", Feature::Tense(Tense::Present)),
            ("futr", Feature::Tense(Tense::Future)),
            ("impr", Feature::Mood(Mood::Imperative)),
            ("inf", Feature::Mood(Mood::Infinitive)),
            ("impers", Feature::Mood(Mood::Impersonal)),
            ("actv", Feature::Voice(Voice::Active)),
            ("pasv", Feature::Voice(Voice::Passive)),
            ("compb", Feature::Degree(Degree::Positive)),
            ("compr", Feature::Degree(Degree::Comparative)),
            ("super", Feature::Degree(Degree::Superlative)),
            ("abs", Feature::Degree(Degree::Absolute)),
            ("short", Feature::Variant(Variant::Short)),
            ("uncontr", Feature::Variant(Variant::Uncontracted)),
            ("pers", Feature::PronominalType(PronominalType::Personal)),
            ("refl", Feature::PronominalType(PronominalType::Reflexive)),
            ("dem", Feature::PronominalType(PronominalType::Demonstrative)),
            ("int", Feature::PronominalType(PronominalType::Interrogative)),
            ("rel", Feature::PronominalType(PronominalType::Relative)),
            ("ind", Feature::PronominalType(PronominalType::Indefinite)),
            ("gen", Feature::PronominalType(PronominalType::General)),
            ("emph", Feature::PronominalType(PronominalType::Emphatic)),
            // the only ambiguous flag: negative pronoun type for pronouns, see `decode`
            ("neg", Feature::Polarity(Polarity::Negative)),
            ("coord", Feature::ConjunctionType(ConjunctionType::Coordinating)),
            ("subord", Feature::ConjunctionType(ConjunctionType::Subordinating)),
            ("m", Feature::Gender(Gender::Masculine)),
            ("f", Feature::Gender(Gender::Feminine)),
            ("n", Feature::Gender(Gender::Neuter)),
            ("s", Feature::Number(Number::Singular)),
            ("p", Feature::Number(Number::Plural)),
            ("1", Feature::Person(Person::First)),
            ("2", Feature::Person(Person::Second)),
            ("3", Feature::Person(Person::Third)),
            ("np", Feature::NumberTantum(NumberTantum::NoPlural)),
            ("ns", Feature::NumberTantum(NumberTantum::NoSingular)),
            ("nv", Feature::Uninflectable(Yes)),
            ("alt", Feature::Alternativity(Yes)),
            ("v-u", Feature::VuAlternativity(Yes)),
            ("dimin", Feature::Dimin(Yes)),
            ("n2adj", Feature::N2Adj(Yes)),
            ("abbr", Feature::Abbreviation(Yes)),
            ("poss", Feature::Possessiveness(Yes)),
            ("coll", Feature::Colloquial(Yes)),
            ("rare", Feature::Rarity(Yes)),
            ("slang", Feature::Slang(Yes)),
            ("bad", Feature::Badness(Yes)),
            ("odd", Feature::Oddness(Yes)),
            ("auto", Feature::Auto(Yes)),
            ("beforeadj", Feature::Beforeadj(Yes)),
            ("foreign", Feature::Foreign(Yes)),
            ("rprep", Feature::PrepositionRequirement(Yes)),
            ("dash", Feature::PunctuationType(PunctuationType::Dash)),
            ("quote", Feature::PunctuationType(PunctuationType::Quote)),
            ("bracket", Feature::PunctuationType(PunctuationType::Bracket)),
            ("colon", Feature::PunctuationType(PunctuationType::Colon)),
            ("comma", Feature::PunctuationType(PunctuationType::Comma)),
            ("ellipsis", Feature::PunctuationType(PunctuationType::Ellipsis)),
            ("excl", Feature::PunctuationType(PunctuationType::Exclamation)),
            ("period", Feature::PunctuationType(PunctuationType::Period)),
            ("quest", Feature::PunctuationType(PunctuationType::Question)),
            ("semicolon", Feature::PunctuationType(PunctuationType::Semicolon)),
            ("slash", Feature::PunctuationType(PunctuationType::Slash)),
            ("bullet", Feature::PunctuationType(PunctuationType::Bullet)),
            ("hyphen", Feature::PunctuationType(PunctuationType::Hyphen)),
            ("open", Feature::PunctuationSide(PunctuationSide::Open)),
            ("close", Feature::PunctuationSide(PunctuationSide::Close)),
            ("xp1", Feature::ParadigmOmonym(Omonym(1))),
            ("xp2", Feature::ParadigmOmonym(Omonym(2))),
            ("xp3", Feature::ParadigmOmonym(Omonym(3))),
            ("xp4", Feature::ParadigmOmonym(Omonym(4))),
            ("xp5", Feature::ParadigmOmonym(Omonym(5))),
            ("xp6", Feature::ParadigmOmonym(Omonym(6))),
            ("xp7", Feature::ParadigmOmonym(Omonym(7))),
            ("xp8", Feature::ParadigmOmonym(Omonym(8))),
            ("xp9", Feature::ParadigmOmonym(Omonym(9))),
            ("xv1", Feature::SemanticOmonym(Omonym(1))),
            ("xv2", Feature::SemanticOmonym(Omonym(2))),
            ("xv3", Feature::SemanticOmonym(Omonym(3))),
            ("xv4", Feature::SemanticOmonym(Omonym(4))),
            ("xv5", Feature::SemanticOmonym(Omonym(5))),
            ("xv6", Feature::SemanticOmonym(Omonym(6))),
            ("xv7", Feature::SemanticOmonym(Omonym(7))),
            ("xv8", Feature::SemanticOmonym(Omonym(8))),
            ("xv9", Feature::SemanticOmonym(Omonym(9))),
        ];
        for (flag, feature) in table {
            map.insert(*flag, *feature);
        }
        map
    };
    static ref ORDERS: HashMap<OrderClass, IndexSet<FeatureKind>> = {
        let tables: &[(OrderClass, &[FeatureKind])] = &[
            (OrderClass::Noun, NOUN_ORDER),
            (OrderClass::Adjective, ADJECTIVE_ORDER),
            (OrderClass::Verb, VERB_ORDER),
            (OrderClass::Numeral, NUMERAL_ORDER),
            (OrderClass::Converb, CONVERB_ORDER),
            (OrderClass::X, X_ORDER),
            (OrderClass::Punctuation, PUNCTUATION_ORDER),
            (OrderClass::Other, OTHER_ORDER),
        ];
        tables
            .iter()
            .map(|(class, order)| {
                let set = order.iter().chain(STYLE_ORDER.iter()).copied().collect();
                (*class, set)
            })
            .collect()
    };
}

/// Maps a single flag to a feature value, if it is part of the catalogue.
pub fn flag_to_feature(flag: &str) -> Option<Feature> {
    FLAGS.get_by_left(&flag).copied()
}

/// Maps a feature value to its flag. Some values have no flag of their own, e.g. the indicative
/// mood, which is implied by the absence of other moods.
pub fn feature_to_flag(feature: Feature) -> Option<&'static str> {
    match feature {
        Feature::PronominalType(PronominalType::Negative) => Some("neg"),
        _ => FLAGS.get_by_right(&feature).copied(),
    }
}

/// Decodes a tag. Under strict options an unmappable flag is an error, otherwise it is kept as
/// [Flag::Other].
pub fn decode(tag: &str, options: DecodeOptions) -> Result<Interpretation, Error> {
    if tag.is_empty() {
        return Err(Error::InvalidTag {
            tag: tag.to_owned(),
            tagset: super::Tagset::Vesum,
        });
    }

    let mut interp = Interpretation::default();

    for flag in tag.split(':') {
        if let Some(feature) = flag_to_feature(flag) {
            interp.features.set(feature);
            continue;
        }

        let parsed = Flag::parse(flag);
        if !parsed.is_known() {
            if options.strict {
                return Err(Error::UnknownFlag {
                    flag: flag.to_owned(),
                    tag: tag.to_owned(),
                });
            }
            warn!("keeping unknown flag \"{}\" in tag \"{}\"", flag, tag);
        }
        interp.flags.insert(parsed);
    }

    if interp.is_pronoun() && interp.is_negative() {
        interp.features.pronominal_type = Some(PronominalType::Negative);
        interp.features.polarity = None;
    }

    Ok(interp)
}

/// Fills in attributes implied by the lemma: the tense of adverbial participles.
pub fn complete_from_lemma(interp: &mut Interpretation) {
    if interp.is_converb() && interp.features.tense.is_none() {
        let lemma = interp.lemma.trim_end_matches("сь");
        if lemma.ends_with("ши") {
            interp.features.tense = Some(Tense::Past);
        } else if lemma.ends_with("чи") {
            interp.features.tense = Some(Tense::Present);
        }
    }
}

/// Encodes an interpretation as a canonical flag string.
pub fn encode(interp: &Interpretation) -> String {
    let mut output = catalogued_flags(interp);
    output.extend(
        interp
            .flags
            .iter()
            .filter(|x| !x.is_known())
            .map(|x| x.as_str()),
    );
    output.join(":")
}

/// The sorted flags of the catalogued features and known auxiliary flags, leaving out the
/// verbatim [Flag::Other] ones.
pub(crate) fn catalogued_flags(interp: &Interpretation) -> Vec<&str> {
    let order = &ORDERS[&OrderClass::of(interp.features.pos)];
    // perfect converbs are always past
    let implied_tense = interp.is_converb() && interp.is_perfect();

    let mut flags: Vec<(usize, usize, &'static str)> = interp
        .features
        .iter()
        .filter(|feature| !(implied_tense && feature.kind() == FeatureKind::Tense))
        .filter_map(|feature| {
            let flag = feature_to_flag(feature)?;
            let kind = feature.kind();
            let rank = order.get_index_of(&kind).unwrap_or(usize::MAX);
            let tiebreak = FeatureKind::ALL
                .iter()
                .position(|x| *x == kind)
                .unwrap_or(usize::MAX);
            Some((rank, tiebreak, flag))
        })
        .collect();
    flags.sort_unstable();

    flags
        .into_iter()
        .map(|(_, _, flag)| flag)
        .chain(
            interp
                .flags
                .iter()
                .filter(|x| x.is_known())
                .map(|x| x.as_str()),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(tag: &str) -> String {
        encode(&decode(tag, DecodeOptions::default()).unwrap())
    }

    #[test]
    fn canonical_tags_roundtrip() {
        for tag in &[
            "noun:anim:m:v_naz",
            "noun:inanim:p:v_rod:ns",
            "adj:f:v_zna:ranim:compb",
            "verb:rev:imperf:past:m",
            "verb:perf:futr:s:3",
            "noun:anim:f:v_naz:prop:fname",
            "adj:m:v_naz:&pron:dem",
            "noun:unanim:m:v_naz:&pron:neg",
            "prep:rv_rod",
            "conj:coord",
            "advp:perf",
            "advp:imperf:pres",
            "advp:rev:imperf:past",
            "adj:p:v_naz:&adjp:imperf:actv",
            "punct:quote:open",
            "noun:inanim:m:v_naz:coll:xp2",
        ] {
            assert_eq!(&roundtrip(tag), tag);
        }
    }

    #[test]
    fn flags_are_reordered() {
        assert_eq!(roundtrip("v_naz:m:anim:noun"), "noun:anim:m:v_naz");
        assert_eq!(roundtrip("rare:adv:compr"), "adv:compr:rare");
    }

    #[test]
    fn neg_is_disambiguated_by_pronoun() {
        let pronoun = decode("noun:anim:m:v_naz:&pron:neg", DecodeOptions::default()).unwrap();
        assert!(pronoun.is_negative_pronoun());
        assert!(!pronoun.is_negative());

        let verb = decode("verb:imperf:pres:s:3:neg", DecodeOptions::default()).unwrap();
        assert!(verb.is_negative());
        assert_eq!(verb.features.pronominal_type, None);
    }

    #[test]
    fn strict_and_lenient() {
        let error = decode("noun:inanim:m:v_naz:wat", DecodeOptions::default()).unwrap_err();
        assert_eq!(
            error,
            Error::UnknownFlag {
                flag: "wat".into(),
                tag: "noun:inanim:m:v_naz:wat".into()
            }
        );

        let interp = decode("noun:inanim:m:v_naz:wat", DecodeOptions::lenient()).unwrap();
        assert!(interp.has_flag(&Flag::Other("wat".into())));
        assert_eq!(encode(&interp), "noun:inanim:m:v_naz:wat");

        let known = decode("verb:perf:past:m:instant", DecodeOptions::default()).unwrap();
        assert!(known.has_flag(&Flag::Instant));
    }

    #[test]
    fn converb_tense_comes_from_lemma() {
        let mut interp = decode("advp:imperf", DecodeOptions::default())
            .unwrap()
            .with_lemma("читаючи");
        complete_from_lemma(&mut interp);
        assert!(interp.is_present());
        assert_eq!(encode(&interp), "advp:imperf:pres");

        let mut past = Interpretation::new(Pos::Converb, "прочитавшись")
            .with(Feature::Aspect(Aspect::Perfect));
        complete_from_lemma(&mut past);
        assert!(past.is_past());
        assert_eq!(encode(&past), "advp:perf");
    }

    #[test]
    fn imperfect_converb_keeps_tense() {
        let interp = decode("advp:imperf:pres", DecodeOptions::default()).unwrap();
        assert!(interp.is_present());
        assert_eq!(encode(&interp), "advp:imperf:pres");
        assert_eq!(roundtrip("advp:perf:past"), "advp:perf");
    }
}
