//! The Universal Dependencies tagset: a coarse POS plus `Key=Value` features.
//!
//! Most features map one to one, but a few are derived. These derivations run in a fixed order
//! in [to_ud] since later steps may override earlier ones.

use super::{Error, Tagset};
use crate::morph::*;
use indexmap::IndexMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use unicase::UniCase;

/// A UD part of speech.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum UdPos {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
    X,
}

impl UdPos {
    /// Every part of speech.
    pub const ALL: [UdPos; 17] = [
        UdPos::Adj,
        UdPos::Adp,
        UdPos::Adv,
        UdPos::Aux,
        UdPos::Cconj,
        UdPos::Det,
        UdPos::Intj,
        UdPos::Noun,
        UdPos::Num,
        UdPos::Part,
        UdPos::Pron,
        UdPos::Propn,
        UdPos::Punct,
        UdPos::Sconj,
        UdPos::Sym,
        UdPos::Verb,
        UdPos::X,
    ];

    /// The canonical upper-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            UdPos::Adj => "ADJ",
            UdPos::Adp => "ADP",
            UdPos::Adv => "ADV",
            UdPos::Aux => "AUX",
            UdPos::Cconj => "CCONJ",
            UdPos::Det => "DET",
            UdPos::Intj => "INTJ",
            UdPos::Noun => "NOUN",
            UdPos::Num => "NUM",
            UdPos::Part => "PART",
            UdPos::Pron => "PRON",
            UdPos::Propn => "PROPN",
            UdPos::Punct => "PUNCT",
            UdPos::Sconj => "SCONJ",
            UdPos::Sym => "SYM",
            UdPos::Verb => "VERB",
            UdPos::X => "X",
        }
    }

    /// Collapses proper nouns and pronouns into nouns.
    pub fn dumb_down(self) -> Self {
        match self {
            UdPos::Propn | UdPos::Pron => UdPos::Noun,
            x => x,
        }
    }
}

impl FromStr for UdPos {
    type Err = Error;

    /// Parses a POS name case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = UniCase::new(s);

        UdPos::ALL
            .iter()
            .copied()
            .find(|pos| UniCase::new(pos.as_str()) == name)
            .ok_or_else(|| invalid(s))
    }
}

impl fmt::Display for UdPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A decoded UD tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UdTag {
    /// The coarse part of speech.
    pub pos: UdPos,
    /// Features by name.
    pub features: IndexMap<&'static str, &'static str>,
}

impl UdTag {
    /// Gets a feature value.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.features.get(key).copied()
    }

    /// The features as `|`-joined `Key=Value` pairs, sorted case-insensitively by key.
    pub fn features_string(&self) -> String {
        self.features
            .iter()
            .sorted_by_key(|(key, _)| UniCase::new(**key))
            .map(|(key, value)| format!("{}={}", key, value))
            .join("|")
    }
}

impl fmt::Display for UdTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let features = self.features_string();
        if features.is_empty() {
            write!(f, "{}", self.pos)
        } else {
            write!(f, "{}|{}", self.pos, features)
        }
    }
}

fn invalid(tag: &str) -> Error {
    Error::InvalidTag {
        tag: tag.to_owned(),
        tagset: Tagset::Ud,
    }
}

fn case_value(case: Case) -> &'static str {
    match case {
        Case::Nominative => "Nom",
        Case::Genitive => "Gen",
        Case::Dative => "Dat",
        Case::Accusative => "Acc",
        Case::Instrumental => "Ins",
        Case::Locative => "Loc",
        Case::Vocative => "Voc",
    }
}

fn animacy_value(animacy: Animacy) -> Option<&'static str> {
    match animacy {
        Animacy::Animate => Some("Anim"),
        Animacy::Inanimate => Some("Inan"),
        Animacy::Bacteria => None,
    }
}

fn pos_value(pos: Pos) -> Option<UdPos> {
    Some(match pos {
        Pos::Noun => UdPos::Noun,
        Pos::Adjective => UdPos::Adj,
        Pos::Interjection => UdPos::Intj,
        Pos::Verb | Pos::Converb => UdPos::Verb,
        Pos::Adverb => UdPos::Adv,
        Pos::X | Pos::Error => UdPos::X,
        Pos::Sym => UdPos::Sym,
        Pos::Particle => UdPos::Part,
        Pos::Punctuation => UdPos::Punct,
        Pos::Preposition => UdPos::Adp,
        Pos::Numeral => UdPos::Num,
        Pos::Conjunction | Pos::Predicative => return None,
    })
}

/// The one-to-one part of the mapping. `None` for values with no UD counterpart.
fn feature_value(feature: Feature) -> Option<(&'static str, &'static str)> {
    Some(match feature {
        Feature::Abbreviation(_) => ("Abbr", "Yes"),
        Feature::Animacy(x) | Feature::RequiredAnimacy(x) => ("Animacy", animacy_value(x)?),
        Feature::GrammaticalAnimacy(x) => ("Animacy[gram]", animacy_value(x)?),
        Feature::Aspect(x) => (
            "Aspect",
            match x {
                Aspect::Imperfect => "Imp",
                Aspect::Perfect => "Perf",
            },
        ),
        Feature::Case(x) | Feature::RequiredCase(x) => ("Case", case_value(x)),
        Feature::Degree(x) => (
            "Degree",
            match x {
                Degree::Positive => "Pos",
                Degree::Comparative => "Cmp",
                Degree::Superlative => "Sup",
                Degree::Absolute => "Abs",
            },
        ),
        Feature::Gender(x) => (
            "Gender",
            match x {
                Gender::Masculine => "Masc",
                Gender::Feminine => "Fem",
                Gender::Neuter => "Neut",
            },
        ),
        Feature::Mood(x) => (
            "Mood",
            match x {
                Mood::Indicative => "Ind",
                Mood::Imperative => "Imp",
                _ => return None,
            },
        ),
        Feature::Number(x) => (
            "Number",
            match x {
                Number::Singular => "Sing",
                Number::Plural => "Plur",
            },
        ),
        Feature::Person(x) => (
            "Person",
            match x {
                Person::First => "1",
                Person::Second => "2",
                Person::Third => "3",
            },
        ),
        Feature::Possessiveness(_) => ("Poss", "Yes"),
        Feature::PronominalType(x) => (
            "PronType",
            match x {
                PronominalType::Personal => "Prs",
                PronominalType::Interrogative => "Int",
                PronominalType::Relative => "Rel",
                PronominalType::Demonstrative => "Dem",
                PronominalType::General => "Tot",
                PronominalType::Negative => "Neg",
                PronominalType::Indefinite => "Ind",
                PronominalType::Emphatic => "Emp",
                PronominalType::Reflexive => return None,
            },
        ),
        Feature::Tense(x) => (
            "Tense",
            match x {
                Tense::Past => "Past",
                Tense::Present => "Pres",
                Tense::Future => "Fut",
            },
        ),
        Feature::Voice(x) => (
            "Voice",
            match x {
                Voice::Active => "Act",
                Voice::Passive => "Pass",
            },
        ),
        Feature::Polarity(x) => (
            "Polarity",
            match x {
                Polarity::Positive => "Pos",
                Polarity::Negative => "Neg",
            },
        ),
        Feature::NameType(x) => (
            "NameType",
            match x {
                NameType::First => "Giv",
                NameType::Last => "Sur",
                NameType::Patronymic => "Pat",
                NameType::Nick => return None,
            },
        ),
        Feature::Foreign(_) => ("Foreign", "Yes"),
        Feature::Variant(x) => (
            "Variant",
            match x {
                Variant::Short => "Short",
                Variant::Uncontracted => "Uncontr",
            },
        ),
        Feature::PrepositionRequirement(_) => ("PrepCase", "Pre"),
        Feature::Alternativity(_) => ("Orth", "Alt"),
        Feature::Uninflectable(_) => ("Uninflect", "Yes"),
        Feature::Reflexivity(_) => ("Reverse", "Yes"),
        Feature::PunctuationType(x) => (
            "PunctType",
            match x {
                PunctuationType::Dash => "Dash",
                PunctuationType::Quote => "Quot",
                PunctuationType::Bracket => "Brck",
                PunctuationType::Colon => "Colo",
                PunctuationType::Comma => "Comm",
                PunctuationType::Ellipsis => "Elip",
                PunctuationType::Exclamation => "Excl",
                PunctuationType::Period => "Peri",
                PunctuationType::Question => "Qest",
                PunctuationType::Semicolon => "Semi",
                PunctuationType::Slash => "Slsh",
                PunctuationType::Bullet => "Bull",
                PunctuationType::Hyphen => "Hyph",
            },
        ),
        Feature::PunctuationSide(x) => (
            "PunctSide",
            match x {
                PunctuationSide::Open => "Ini",
                PunctuationSide::Close => "Fin",
            },
        ),
        _ => return None,
    })
}

/// Converts an interpretation to its UD form.
///
/// # Errors
/// [Error::UnsupportedConversion] for emphatic pronouns (these are split into multiword tokens
/// before conversion), participles without voice and parts of speech with no UD counterpart.
pub fn to_ud(interp: &Interpretation) -> Result<UdTag, Error> {
    let unsupported = || Error::UnsupportedConversion {
        tag: super::vesum::encode(interp),
        tagset: Tagset::Ud,
    };

    let mut interp = interp.clone();
    interp.denormalize();

    if interp.is_emphatic() {
        return Err(unsupported());
    }

    let mut pos = interp.pos().and_then(pos_value);
    let mut features = IndexMap::new();

    for feature in interp.features.iter() {
        if let Some((key, value)) = feature_value(feature) {
            features.insert(key, value);
        }
    }

    if interp.is_conjunction() {
        pos = Some(if interp.is_subordinating() {
            UdPos::Sconj
        } else {
            UdPos::Cconj
        });
    }

    if interp.is_no_singular() {
        features.insert("Number", "Ptan");
    }

    if interp.is_reflexive_pronoun() {
        features.insert("Reflex", "Yes");
        features.insert("PronType", "Prs");
    }

    if interp.is_nounish() {
        pos = Some(if interp.is_proper() {
            UdPos::Propn
        } else if interp.is_pronoun() {
            UdPos::Pron
        } else {
            UdPos::Noun
        });
        if interp.is_noun_numeral() {
            features.insert("NumType", "Card");
        }
    }

    if interp.is_cardinal_numeral() {
        features.insert("NumType", "Card");
        if interp.is_pronoun() {
            pos = Some(UdPos::Det);
        }
    } else if interp.is_ordinal_numeral() {
        features.insert("NumType", "Ord");
    }

    if interp.is_verb() {
        match interp.features.mood {
            None | Some(Mood::Indicative) => {
                features.insert("Mood", "Ind");
                features.insert("VerbForm", "Fin");
            }
            Some(Mood::Imperative) => {
                features.insert("Mood", "Imp");
                features.insert("VerbForm", "Fin");
            }
            Some(Mood::Infinitive) => {
                features.insert("VerbForm", "Inf");
            }
            Some(Mood::Impersonal) => {
                features.insert("Mood", "Ind");
                features.insert("VerbForm", "Fin");
                features.insert("Person", "0");
            }
        }
    } else if interp.is_converb() {
        features.insert("VerbForm", "Conv");
    } else if interp.is_adjective() && !interp.is_adjective_as_noun() {
        if interp.is_pronoun() {
            pos = Some(UdPos::Det);
        } else if interp.is_participle() {
            features.insert("VerbForm", "Part");
            if !features.contains_key("Voice") {
                return Err(unsupported());
            }
        }
    } else if interp.is_beforeadj() {
        features.insert("Hyph", "Yes");
    }

    if interp.is_auxiliary() {
        pos = Some(UdPos::Aux);
    }

    if interp.is_colloquial() {
        features.insert("Style", "Coll");
    } else if interp.is_rare() {
        features.insert("Style", "Rare");
    } else if interp.is_odd() {
        features.insert("Style", "Odd");
    }

    Ok(UdTag {
        pos: pos.ok_or_else(unsupported)?,
        features,
    })
}

/// Encodes an interpretation as `POS` or `POS|Key=Value|...`.
pub fn encode(interp: &Interpretation) -> Result<String, Error> {
    Ok(to_ud(interp)?.to_string())
}

/// Decodes `POS|Key=Value|...` back into an interpretation. Derived values are mapped back to
/// the attributes they came from where that is unambiguous.
pub fn decode(tag: &str) -> Result<Interpretation, Error> {
    let mut parts = tag.split('|');
    let pos: UdPos = parts
        .next()
        .filter(|x| !x.is_empty())
        .ok_or_else(|| invalid(tag))?
        .parse()
        .map_err(|_| invalid(tag))?;

    let mut pairs = Vec::new();
    for part in parts {
        let (key, value) = part.split_once('=').ok_or_else(|| invalid(tag))?;
        pairs.push((key, value));
    }
    let has = |key: &str, value: &str| pairs.iter().any(|(k, v)| *k == key && *v == value);

    let mut interp = Interpretation::default();
    let features = &mut interp.features;
    features.pos = Some(match pos {
        UdPos::Noun | UdPos::Propn | UdPos::Pron => Pos::Noun,
        UdPos::Adj => Pos::Adjective,
        UdPos::Det if has("NumType", "Card") => Pos::Numeral,
        UdPos::Det => Pos::Adjective,
        UdPos::Verb if has("VerbForm", "Conv") => Pos::Converb,
        UdPos::Verb | UdPos::Aux => Pos::Verb,
        UdPos::Adv => Pos::Adverb,
        UdPos::Adp => Pos::Preposition,
        UdPos::Cconj | UdPos::Sconj => Pos::Conjunction,
        UdPos::Num => Pos::Numeral,
        UdPos::Part => Pos::Particle,
        UdPos::Intj => Pos::Interjection,
        UdPos::Punct => Pos::Punctuation,
        UdPos::Sym => Pos::Sym,
        UdPos::X => Pos::X,
    });
    match pos {
        UdPos::Propn => features.noun_type = Some(NounType::Proper),
        UdPos::Pron | UdPos::Det => features.pronoun = Some(Yes),
        UdPos::Aux => features.auxiliary = Some(Yes),
        UdPos::Cconj => features.conjunction_type = Some(ConjunctionType::Coordinating),
        UdPos::Sconj => features.conjunction_type = Some(ConjunctionType::Subordinating),
        _ => {}
    }
    let adjectival = features.pos == Some(Pos::Adjective);

    for (key, value) in pairs.iter().copied() {
        let feature = match (key, value) {
            ("Case", value) => {
                let case = decode_case(value).ok_or_else(|| invalid(tag))?;
                if pos == UdPos::Adp {
                    Feature::RequiredCase(case)
                } else {
                    Feature::Case(case)
                }
            }
            ("Animacy", value) => {
                let animacy = decode_animacy(value).ok_or_else(|| invalid(tag))?;
                if adjectival {
                    Feature::RequiredAnimacy(animacy)
                } else {
                    Feature::Animacy(animacy)
                }
            }
            ("Animacy[gram]", value) => {
                Feature::GrammaticalAnimacy(decode_animacy(value).ok_or_else(|| invalid(tag))?)
            }
            ("Number", "Ptan") => {
                features.number_tantum = Some(NumberTantum::NoSingular);
                Feature::Number(Number::Plural)
            }
            ("Mood", "Ind") | ("VerbForm", "Fin") | ("VerbForm", "Conv") | ("NumType", "Card") => {
                continue
            }
            ("VerbForm", "Part") => Feature::Participle(Yes),
            ("Person", "0") => Feature::Mood(Mood::Impersonal),
            ("Reflex", "Yes") => Feature::PronominalType(PronominalType::Reflexive),
            ("PronType", "Prs") if has("Reflex", "Yes") => continue,
            ("NumType", "Ord") => Feature::OrdinalNumeral(OrdinalNumeral::Yes),
            ("Hyph", "Yes") => Feature::Beforeadj(Yes),
            ("Style", "Coll") => Feature::Colloquial(Yes),
            ("Style", "Rare") => Feature::Rarity(Yes),
            ("Style", "Odd") => Feature::Oddness(Yes),
            ("VerbForm", "Inf") => Feature::Mood(Mood::Infinitive),
            (key, value) => reverse_lookup(key, value).ok_or_else(|| invalid(tag))?,
        };
        features.set(feature);
    }

    // singular is implied by gender
    if features.gender.is_some() && features.number == Some(Number::Singular) {
        features.number = None;
    }

    Ok(interp)
}

fn decode_case(value: &str) -> Option<Case> {
    [
        Case::Nominative,
        Case::Genitive,
        Case::Dative,
        Case::Accusative,
        Case::Instrumental,
        Case::Locative,
        Case::Vocative,
    ]
    .iter()
    .copied()
    .find(|x| case_value(*x) == value)
}

fn decode_animacy(value: &str) -> Option<Animacy> {
    match value {
        "Anim" => Some(Animacy::Animate),
        "Inan" => Some(Animacy::Inanimate),
        _ => None,
    }
}

lazy_static::lazy_static! {
    static ref REVERSE: IndexMap<(&'static str, &'static str), Feature> = {
        let mut map = IndexMap::new();
        let candidates = [
            Feature::Abbreviation(Yes),
            Feature::Aspect(Aspect::Imperfect),
            Feature::Aspect(Aspect::Perfect),
            Feature::Degree(Degree::Positive),
            Feature::Degree(Degree::Comparative),
            Feature::Degree(Degree::Superlative),
            Feature::Degree(Degree::Absolute),
            Feature::Gender(Gender::Masculine),
            Feature::Gender(Gender::Feminine),
            Feature::Gender(Gender::Neuter),
            Feature::Mood(Mood::Imperative),
            Feature::Number(Number::Singular),
            Feature::Number(Number::Plural),
            Feature::Person(Person::First),
            Feature::Person(Person::Second),
            Feature::Person(Person::Third),
            Feature::Possessiveness(Yes),
            Feature::PronominalType(PronominalType::Personal),
            Feature::PronominalType(PronominalType::Interrogative),
            Feature::PronominalType(PronominalType::Relative),
            Feature::PronominalType(PronominalType::Demonstrative),
            Feature::PronominalType(PronominalType::General),
            Feature::PronominalType(PronominalType::Negative),
            Feature::PronominalType(PronominalType::Indefinite),
            Feature::PronominalType(PronominalType::Emphatic),
            Feature::Tense(Tense::Past),
            Feature::Tense(Tense::Present),
            Feature::Tense(Tense::Future),
            Feature::Voice(Voice::Active),
            Feature::Voice(Voice::Passive),
            Feature::Polarity(Polarity::Positive),
            Feature::Polarity(Polarity::Negative),
            Feature::NameType(NameType::First),
            Feature::NameType(NameType::Last),
            Feature::NameType(NameType::Patronymic),
            Feature::Foreign(Yes),
            Feature::Variant(Variant::Short),
            Feature::Variant(Variant::Uncontracted),
            Feature::PrepositionRequirement(Yes),
            Feature::Alternativity(Yes),
            Feature::Uninflectable(Yes),
            Feature::Reflexivity(Yes),
            Feature::PunctuationType(PunctuationType::Dash),
            Feature::PunctuationType(PunctuationType::Quote),
            Feature::PunctuationType(PunctuationType::Bracket),
            Feature::PunctuationType(PunctuationType::Colon),
            Feature::PunctuationType(PunctuationType::Comma),
            Feature::PunctuationType(PunctuationType::Ellipsis),
            Feature::PunctuationType(PunctuationType::Exclamation),
            Feature::PunctuationType(PunctuationType::Period),
            Feature::PunctuationType(PunctuationType::Question),
            Feature::PunctuationType(PunctuationType::Semicolon),
            Feature::PunctuationType(PunctuationType::Slash),
            Feature::PunctuationType(PunctuationType::Bullet),
            Feature::PunctuationType(PunctuationType::Hyphen),
            Feature::PunctuationSide(PunctuationSide::Open),
            Feature::PunctuationSide(PunctuationSide::Close),
        ];
        for feature in candidates.iter() {
            if let Some(pair) = feature_value(*feature) {
                map.insert(pair, *feature);
            }
        }
        map
    };
}

fn reverse_lookup(key: &str, value: &str) -> Option<Feature> {
    REVERSE
        .iter()
        .find(|((k, v), _)| *k == key && *v == value)
        .map(|(_, feature)| *feature)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagset::{vesum, DecodeOptions};

    fn ud(tag: &str) -> String {
        encode(&vesum::decode(tag, DecodeOptions::default()).unwrap()).unwrap()
    }

    #[test]
    fn past_verb() {
        assert_eq!(
            ud("verb:imperf:past:m"),
            "VERB|Aspect=Imp|Gender=Masc|Mood=Ind|Number=Sing|Tense=Past|VerbForm=Fin"
        );
    }

    #[test]
    fn nominals() {
        assert_eq!(
            ud("noun:anim:m:v_naz"),
            "NOUN|Animacy=Anim|Case=Nom|Gender=Masc|Number=Sing"
        );
        assert_eq!(
            ud("noun:anim:f:v_naz:prop:fname"),
            "PROPN|Animacy=Anim|Case=Nom|Gender=Fem|NameType=Giv|Number=Sing"
        );
        assert_eq!(
            ud("noun:inanim:p:v_rod:ns"),
            "NOUN|Animacy=Inan|Case=Gen|Number=Ptan"
        );
        assert_eq!(
            ud("noun:unanim:m:v_zna:&pron:refl"),
            "PRON|Case=Acc|Gender=Masc|Number=Sing|PronType=Prs|Reflex=Yes"
        );
    }

    #[test]
    fn feature_keys_sort_case_insensitively() {
        let tag = ud("noun:inanim:m:v_naz:inanimish");
        let keys: Vec<_> = tag.split('|').skip(1).map(|x| x.split('=').next().unwrap()).collect();
        assert_eq!(keys, vec!["Animacy", "Animacy[gram]", "Case", "Gender", "Number"]);
    }

    #[test]
    fn derived_pos() {
        assert_eq!(ud("conj:subord"), "SCONJ");
        assert_eq!(ud("conj:coord"), "CCONJ");
        assert_eq!(ud("adj:m:v_naz:&pron:dem"), "DET|Case=Nom|Gender=Masc|Number=Sing|PronType=Dem");
        assert_eq!(ud("prep:rv_rod"), "ADP|Case=Gen");
        assert_eq!(ud("advp:perf"), "VERB|Aspect=Perf|VerbForm=Conv");
        assert_eq!(ud("verb:imperf:inf"), "VERB|Aspect=Imp|VerbForm=Inf");

        let mut aux = vesum::decode("verb:imperf:futr:s:3", DecodeOptions::default()).unwrap();
        aux.set_auxiliary();
        assert!(encode(&aux).unwrap().starts_with("AUX|"));
    }

    #[test]
    fn style_priority() {
        assert!(ud("adv:coll:rare").ends_with("Style=Coll"));
        assert!(ud("adv:rare:odd").ends_with("Style=Rare"));
    }

    #[test]
    fn unsupported() {
        let emphatic = vesum::decode("adj:m:v_naz:&pron:emph", DecodeOptions::default()).unwrap();
        assert!(matches!(
            encode(&emphatic),
            Err(Error::UnsupportedConversion { .. })
        ));
        let participle = vesum::decode("adj:m:v_naz:&adjp:perf", DecodeOptions::default()).unwrap();
        assert!(encode(&participle).is_err());
        assert!(encode(&Interpretation::new(Pos::Predicative, "треба")).is_err());
    }

    #[test]
    fn decodes_back() {
        for tag in &[
            "noun:anim:m:v_naz",
            "noun:anim:f:v_naz:prop:fname",
            "noun:inanim:p:v_rod:ns",
            "verb:imperf:past:m",
            "adj:m:v_naz:&pron:dem",
            "prep:rv_rod",
            "conj:subord",
            "advp:perf",
        ] {
            let interp = vesum::decode(tag, DecodeOptions::default()).unwrap();
            let decoded = decode(&encode(&interp).unwrap()).unwrap();
            assert_eq!(&vesum::encode(&decoded), tag);
        }
    }

    #[test]
    fn invalid_tags() {
        assert!(decode("").is_err());
        assert!(decode("NOUNS").is_err());
        assert!(decode("NOUN|Case").is_err());
        assert!(decode("NOUN|Case=Xyz").is_err());
    }

    #[test]
    fn pos_names_ignore_case() {
        assert_eq!("propn".parse::<UdPos>().unwrap(), UdPos::Propn);
        assert_eq!("Sconj".parse::<UdPos>().unwrap(), UdPos::Sconj);
        assert!(decode("noun|Case=Nom").unwrap().is_noun());
    }
}
