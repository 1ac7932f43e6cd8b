//! The positional MULTEXT-East tagset.
//!
//! The first character is the POS class, every following character is a column whose meaning
//! depends on the class. `-` means unset. Some columns are lossy in one direction:
//! adjective definiteness (derived from the variant on encode), the pronoun referent type,
//! the preposition and conjunction formation (derived from the lemma) and noun common gender.

use super::{Error, Tagset};
use crate::morph::*;

/// Attribute governed by a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    NounType,
    VerbType,
    Gender,
    Number,
    Case,
    RequiredCase,
    Animacy,
    RequiredAnimacy,
    Aspect,
    Mood,
    Tense,
    Person,
    Degree,
    Voice,
    PronominalType,
    ConjunctionType,
    NumeralForm,
}

use Column as C;

/// Column schema per POS class. `None` columns are handled by the class-specific tweaks.
fn schema(class: char) -> Option<&'static [Option<Column>]> {
    Some(match class {
        'N' => &[
            None,
            Some(C::NounType),
            Some(C::Gender),
            Some(C::Number),
            Some(C::Case),
            Some(C::Animacy),
        ],
        'V' => &[
            None,
            Some(C::VerbType),
            Some(C::Aspect),
            Some(C::Mood),
            Some(C::Tense),
            Some(C::Person),
            Some(C::Number),
            Some(C::Gender),
        ],
        'A' => &[
            None,
            None,
            Some(C::Degree),
            Some(C::Gender),
            Some(C::Number),
            Some(C::Case),
            None,
            Some(C::RequiredAnimacy),
            Some(C::Aspect),
            Some(C::Voice),
            Some(C::Tense),
        ],
        'P' => &[
            None,
            Some(C::PronominalType),
            None,
            Some(C::Person),
            Some(C::Gender),
            Some(C::RequiredAnimacy),
            Some(C::Number),
            Some(C::Case),
            None,
        ],
        'R' => &[None, Some(C::Degree)],
        'S' => &[None, None, None, Some(C::RequiredCase)],
        'C' => &[None, Some(C::ConjunctionType), None],
        'M' => &[
            None,
            Some(C::NumeralForm),
            None,
            Some(C::Gender),
            Some(C::Number),
            Some(C::Case),
            Some(C::RequiredAnimacy),
        ],
        'Q' | 'I' | 'X' | 'Y' | 'U' => &[None],
        _ => return None,
    })
}

/// The maximum length of a tag of the given POS class.
pub fn schema_width(class: char) -> Option<usize> {
    schema(class).map(|x| x.len())
}

fn case_value(ch: char) -> Option<Case> {
    Some(match ch {
        'n' => Case::Nominative,
        'g' => Case::Genitive,
        'd' => Case::Dative,
        'a' => Case::Accusative,
        'i' => Case::Instrumental,
        'l' => Case::Locative,
        'v' => Case::Vocative,
        _ => return None,
    })
}

fn case_char(case: Case) -> char {
    match case {
        Case::Nominative => 'n',
        Case::Genitive => 'g',
        Case::Dative => 'd',
        Case::Accusative => 'a',
        Case::Instrumental => 'i',
        Case::Locative => 'l',
        Case::Vocative => 'v',
    }
}

fn animacy_value(ch: char) -> Option<Animacy> {
    match ch {
        'y' => Some(Animacy::Animate),
        'n' => Some(Animacy::Inanimate),
        _ => None,
    }
}

fn animacy_char(animacy: Animacy) -> Option<char> {
    match animacy {
        Animacy::Animate => Some('y'),
        Animacy::Inanimate => Some('n'),
        Animacy::Bacteria => None,
    }
}

fn column_value(column: Column, ch: char) -> Option<Feature> {
    Some(match (column, ch) {
        (C::NounType, 'c') => Feature::NounType(NounType::Common),
        (C::NounType, 'p') => Feature::NounType(NounType::Proper),
        (C::VerbType, 'a') => Feature::Auxiliary(Yes),
        (C::Gender, 'm') => Feature::Gender(Gender::Masculine),
        (C::Gender, 'f') => Feature::Gender(Gender::Feminine),
        (C::Gender, 'n') => Feature::Gender(Gender::Neuter),
        (C::Number, 's') => Feature::Number(Number::Singular),
        (C::Number, 'p') => Feature::Number(Number::Plural),
        (C::Case, ch) => Feature::Case(case_value(ch)?),
        (C::RequiredCase, ch) => Feature::RequiredCase(case_value(ch)?),
        (C::Animacy, ch) => Feature::Animacy(animacy_value(ch)?),
        (C::RequiredAnimacy, ch) => Feature::RequiredAnimacy(animacy_value(ch)?),
        (C::Aspect, 'p') => Feature::Aspect(Aspect::Imperfect),
        (C::Aspect, 'e') => Feature::Aspect(Aspect::Perfect),
        (C::Mood, 'm') => Feature::Mood(Mood::Imperative),
        (C::Mood, 'n') => Feature::Mood(Mood::Infinitive),
        (C::Mood, 'o') => Feature::Mood(Mood::Impersonal),
        (C::Tense, 's') => Feature::Tense(Tense::Past),
        (C::Tense, 'p') => Feature::Tense(Tense::Present),
        (C::Tense, 'f') => Feature::Tense(Tense::Future),
        (C::Person, '1') => Feature::Person(Person::First),
        (C::Person, '2') => Feature::Person(Person::Second),
        (C::Person, '3') => Feature::Person(Person::Third),
        (C::Degree, 'p') => Feature::Degree(Degree::Positive),
        (C::Degree, 'c') => Feature::Degree(Degree::Comparative),
        (C::Degree, 's') => Feature::Degree(Degree::Superlative),
        (C::Voice, 'a') => Feature::Voice(Voice::Active),
        (C::Voice, 'p') => Feature::Voice(Voice::Passive),
        (C::PronominalType, 'p') => Feature::PronominalType(PronominalType::Personal),
        (C::PronominalType, 'x') => Feature::PronominalType(PronominalType::Reflexive),
        (C::PronominalType, 'd') => Feature::PronominalType(PronominalType::Demonstrative),
        (C::PronominalType, 'q') => Feature::PronominalType(PronominalType::Interrogative),
        (C::PronominalType, 'r') => Feature::PronominalType(PronominalType::Relative),
        (C::PronominalType, 'z') => Feature::PronominalType(PronominalType::Negative),
        (C::PronominalType, 'i') => Feature::PronominalType(PronominalType::Indefinite),
        (C::PronominalType, 'g') => Feature::PronominalType(PronominalType::General),
        (C::PronominalType, 'h') => Feature::PronominalType(PronominalType::Emphatic),
        (C::ConjunctionType, 'c') => Feature::ConjunctionType(ConjunctionType::Coordinating),
        (C::ConjunctionType, 's') => Feature::ConjunctionType(ConjunctionType::Subordinating),
        (C::NumeralForm, 'd') => Feature::NumeralForm(NumeralForm::Digit),
        (C::NumeralForm, 'r') => Feature::NumeralForm(NumeralForm::Roman),
        (C::NumeralForm, 'l') => Feature::NumeralForm(NumeralForm::Letter),
        _ => return None,
    })
}

fn invalid(tag: &str) -> Error {
    Error::InvalidTag {
        tag: tag.to_owned(),
        tagset: Tagset::Mte,
    }
}

/// Decodes a positional tag. The word form is used to detect reflexive verbs.
pub fn decode(tag: &str, form: &str) -> Result<Interpretation, Error> {
    let flags: Vec<char> = tag.chars().collect();
    let class = *flags.first().ok_or_else(|| invalid(tag))?;
    let columns = schema(class).ok_or_else(|| invalid(tag))?;
    if flags.len() > columns.len() {
        return Err(invalid(tag));
    }
    let at = |i: usize| flags.get(i).copied().unwrap_or('-');

    let mut interp = Interpretation::default();
    for (column, ch) in columns.iter().zip(flags.iter()).skip(1) {
        if *ch == '-' {
            continue;
        }
        if let Some(feature) = column.and_then(|column| column_value(column, *ch)) {
            interp.features.set(feature);
        }
    }

    let features = &mut interp.features;
    match class {
        'N' => {
            features.pos = Some(Pos::Noun);
            match at(2) {
                // common gender
                'c' => features.gender = Some(Gender::Feminine),
                '-' => features.number_tantum = Some(NumberTantum::NoSingular),
                _ => {}
            }
        }
        'V' => {
            // biaspectual
            if at(2) == 'b' {
                features.aspect = Some(Aspect::Imperfect);
            }
            if form.ends_with("ся") || form.ends_with("сь") {
                features.reflexivity = Some(Yes);
            }
            features.pos = Some(if at(3) == 'g' { Pos::Converb } else { Pos::Verb });
        }
        'A' => {
            features.pos = Some(Pos::Adjective);
            match at(1) {
                'p' => features.participle = Some(Yes),
                'b' => features.beforeadj = Some(Yes),
                _ => {}
            }
            if features.gender == Some(Gender::Masculine) {
                if at(6) == 's' {
                    features.variant = Some(Variant::Short);
                }
            } else if at(6) == 'f' && (at(5) == 'n' || at(5) == 'a') {
                features.variant = Some(Variant::Uncontracted);
            }
        }
        'P' => {
            features.pronoun = Some(Yes);
            features.pos = Some(match at(8) {
                'n' => Pos::Noun,
                'a' => Pos::Adjective,
                'r' => Pos::Adverb,
                'm' => Pos::Numeral,
                _ => return Err(invalid(tag)),
            });
            if at(1) == 's' {
                features.possessiveness = Some(Yes);
                features.pronominal_type = Some(PronominalType::Personal);
            }
        }
        'M' => match at(2) {
            'o' => {
                features.pos = Some(Pos::Adjective);
                features.ordinal_numeral = Some(OrdinalNumeral::Yes);
            }
            _ => features.pos = Some(Pos::Numeral),
        },
        'R' => features.pos = Some(Pos::Adverb),
        'S' => features.pos = Some(Pos::Preposition),
        'C' => features.pos = Some(Pos::Conjunction),
        'Q' => features.pos = Some(Pos::Particle),
        'I' => features.pos = Some(Pos::Interjection),
        'X' => features.pos = Some(Pos::X),
        'Y' => {
            features.pos = Some(Pos::X);
            features.abbreviation = Some(Yes);
        }
        'U' => features.pos = Some(Pos::Punctuation),
        _ => return Err(invalid(tag)),
    }

    // singular is implied by gender
    if features.gender.is_some()
        && features.number == Some(Number::Singular)
        && features.pos != Some(Pos::Numeral)
        && features.ordinal_numeral.is_none()
    {
        features.number = None;
    }

    Ok(interp)
}

fn or_dash(ch: Option<char>) -> char {
    ch.unwrap_or('-')
}

fn gender_char(interp: &Interpretation) -> Option<char> {
    interp.features.gender.map(|x| match x {
        Gender::Masculine => 'm',
        Gender::Feminine => 'f',
        Gender::Neuter => 'n',
    })
}

fn number_char(interp: &Interpretation) -> Option<char> {
    interp.get_number().map(|x| match x {
        Number::Singular => 's',
        Number::Plural => 'p',
    })
}

fn person_char(interp: &Interpretation) -> Option<char> {
    interp.features.person.map(|x| match x {
        Person::First => '1',
        Person::Second => '2',
        Person::Third => '3',
    })
}

fn tense_char(interp: &Interpretation) -> Option<char> {
    interp.features.tense.map(|x| match x {
        Tense::Past => 's',
        Tense::Present => 'p',
        Tense::Future => 'f',
    })
}

fn aspect_char(interp: &Interpretation) -> Option<char> {
    interp.features.aspect.map(|x| match x {
        Aspect::Imperfect => 'p',
        Aspect::Perfect => 'e',
    })
}

fn voice_char(interp: &Interpretation) -> Option<char> {
    interp.features.voice.map(|x| match x {
        Voice::Active => 'a',
        Voice::Passive => 'p',
    })
}

fn degree_char(interp: &Interpretation) -> Option<char> {
    interp.features.degree.and_then(|x| match x {
        Degree::Positive => Some('p'),
        Degree::Comparative => Some('c'),
        Degree::Superlative => Some('s'),
        Degree::Absolute => None,
    })
}

fn case_char_of(interp: &Interpretation) -> Option<char> {
    interp.features.case.map(case_char)
}

fn pronominal_type_char(value: PronominalType) -> char {
    match value {
        PronominalType::Personal => 'p',
        PronominalType::Reflexive => 'x',
        PronominalType::Demonstrative => 'd',
        PronominalType::Interrogative => 'q',
        PronominalType::Relative => 'r',
        PronominalType::Negative => 'z',
        PronominalType::Indefinite => 'i',
        PronominalType::General => 'g',
        PronominalType::Emphatic => 'h',
    }
}

fn default_definiteness(interp: &Interpretation) -> char {
    let features = &interp.features;
    let short_by_gender = matches!(features.gender, Some(Gender::Feminine) | Some(Gender::Neuter))
        || (features.number == Some(Number::Plural)
            && features.required_animacy != Some(Animacy::Animate));
    let nominative_or_accusative =
        matches!(features.case, Some(Case::Nominative) | Some(Case::Accusative));

    if short_by_gender && nominative_or_accusative {
        's'
    } else {
        'f'
    }
}

fn trim_trailing_dash(mut tag: String) -> String {
    while tag.len() > 1 && tag.ends_with('-') {
        tag.pop();
    }
    tag
}

/// Encodes an interpretation as a positional tag.
///
/// # Errors
/// - [Error::MissingLemma] for verbs, prepositions and conjunctions without a lemma.
/// - [Error::UnsupportedConversion] if a mandatory column has no value or the POS has no class.
pub fn encode(interp: &Interpretation) -> Result<String, Error> {
    let unsupported = || Error::UnsupportedConversion {
        tag: super::vesum::encode(interp),
        tagset: Tagset::Mte,
    };
    let missing_lemma = || Error::MissingLemma {
        tag: super::vesum::encode(interp),
        tagset: Tagset::Mte,
    };
    let lemma = interp.lemma.as_str();
    let mut tag = String::new();

    if lemma == "незважаючи" && interp.is_preposition() {
        return Ok("Vmpgp".to_owned());
    }
    if interp.is_abbreviation() {
        return Ok("Y".to_owned());
    }
    if interp.is_beforeadj() {
        return Ok("Ab".to_owned());
    }

    if interp.is_cardinal_numeral() || interp.is_ordinal_numeral() {
        tag.push('M');
        tag.push(match interp.features.numeral_form {
            Some(NumeralForm::Digit) => 'd',
            Some(NumeralForm::Roman) => 'r',
            _ => 'l',
        });
        tag.push(if interp.is_cardinal_numeral() { 'c' } else { 'o' });
        tag.push(or_dash(gender_char(interp)));
        tag.push(or_dash(number_char(interp)));
        tag.push(or_dash(case_char_of(interp)));
        tag.extend(interp.features.required_animacy.and_then(animacy_char));
        return Ok(trim_trailing_dash(tag));
    }

    if interp.is_pronoun() {
        let type_char = if interp.is_possessive() {
            's'
        } else {
            interp
                .features
                .pronominal_type
                .map(pronominal_type_char)
                .ok_or_else(unsupported)?
        };
        let syntactic_type = match interp.pos() {
            Some(Pos::Noun) => 'n',
            Some(Pos::Adjective) => 'a',
            Some(Pos::Adverb) => 'r',
            Some(Pos::Numeral) => 'm',
            _ => return Err(unsupported()),
        };
        let animacy = interp
            .features
            .required_animacy
            .and_then(animacy_char)
            .or_else(|| interp.features.animacy.and_then(animacy_char));

        tag.push('P');
        tag.push(type_char);
        tag.push(if interp.is_possessive() { 'p' } else { '-' });
        tag.push(or_dash(person_char(interp)));
        tag.push(or_dash(gender_char(interp)));
        tag.push(or_dash(animacy));
        tag.push(or_dash(number_char(interp)));
        tag.push(or_dash(case_char_of(interp)));
        tag.push(syntactic_type);
        return Ok(tag);
    }

    if interp.is_noun() {
        let animacy = match interp.features.animacy {
            Some(Animacy::Bacteria) => Some('y'),
            Some(x) => animacy_char(x),
            None => None,
        };
        tag.push('N');
        tag.push(if interp.is_proper() { 'p' } else { 'c' });
        tag.push(or_dash(gender_char(interp)));
        tag.push(or_dash(number_char(interp)));
        tag.push(or_dash(case_char_of(interp)));
        tag.push(or_dash(animacy));
        return Ok(trim_trailing_dash(tag));
    }

    if interp.is_verb() || interp.is_converb() {
        if lemma.is_empty() {
            return Err(missing_lemma());
        }
        let form = if interp.is_converb() {
            'g'
        } else {
            match interp.features.mood {
                Some(Mood::Imperative) => 'm',
                Some(Mood::Infinitive) => 'n',
                Some(Mood::Impersonal) => 'o',
                _ => 'i',
            }
        };
        tag.push('V');
        tag.push(if AUXILIARY_LEMMAS.contains(&lemma) { 'a' } else { 'm' });
        tag.push(aspect_char(interp).ok_or_else(unsupported)?);
        tag.push(form);
        tag.push(or_dash(tense_char(interp)));
        tag.push(or_dash(person_char(interp)));
        tag.push(or_dash(number_char(interp)));
        tag.extend(gender_char(interp));
        return Ok(trim_trailing_dash(tag));
    }

    match interp.pos() {
        Some(Pos::Adjective) => {
            tag.push('A');
            tag.push(if interp.is_participle() {
                'p'
            } else if interp.is_comparable() {
                'f'
            } else {
                'o'
            });
            tag.push(if interp.is_participle() {
                '-'
            } else {
                or_dash(degree_char(interp))
            });
            tag.push(or_dash(gender_char(interp)));
            tag.push(number_char(interp).ok_or_else(unsupported)?);
            tag.push(or_dash(case_char_of(interp)));
            tag.push(match interp.features.variant {
                Some(Variant::Short) => 's',
                Some(Variant::Uncontracted) => 'f',
                None => default_definiteness(interp),
            });
            let required_animacy = interp.features.required_animacy.and_then(animacy_char);
            if interp.is_participle() {
                tag.push(or_dash(required_animacy));
                tag.extend(aspect_char(interp));
                tag.extend(voice_char(interp));
                let tense = tense_char(interp).or_else(|| {
                    if interp.is_active() && interp.is_imperfect() {
                        Some('p')
                    } else {
                        None
                    }
                });
                tag.extend(tense);
            } else {
                tag.extend(required_animacy);
            }
        }
        Some(Pos::Preposition) => {
            if lemma.is_empty() {
                return Err(missing_lemma());
            }
            tag.push_str("Sp");
            tag.push(if lemma.contains('-') { 'c' } else { 's' });
            tag.push(
                interp
                    .features
                    .required_case
                    .map(case_char)
                    .ok_or_else(unsupported)?,
            );
        }
        Some(Pos::Conjunction) => {
            if lemma.is_empty() {
                return Err(missing_lemma());
            }
            tag.push('C');
            tag.push(match interp.features.conjunction_type {
                Some(ConjunctionType::Coordinating) => 'c',
                Some(ConjunctionType::Subordinating) => 's',
                None => return Err(unsupported()),
            });
            tag.push(if lemma.contains('-') { 'c' } else { 's' });
        }
        Some(Pos::Adverb) => {
            tag.push('R');
            tag.extend(degree_char(interp));
        }
        Some(Pos::Particle) => tag.push('Q'),
        Some(Pos::Interjection) => tag.push('I'),
        Some(Pos::X) | Some(Pos::Sym) => tag.push('X'),
        Some(Pos::Predicative) => tag.push_str("Vm-p"),
        Some(Pos::Punctuation) => tag.push('U'),
        _ => return Err(unsupported()),
    }

    Ok(trim_trailing_dash(tag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagset::{vesum, DecodeOptions};

    fn from_vesum(tag: &str, lemma: &str) -> Interpretation {
        vesum::decode(tag, DecodeOptions::default())
            .unwrap()
            .with_lemma(lemma)
    }

    #[test]
    fn encodes_nouns() {
        let interp = from_vesum("noun:anim:m:v_naz", "кіт");
        assert_eq!(encode(&interp).unwrap(), "Ncmsny");

        let plural = from_vesum("noun:inanim:p:v_rod:ns", "ножиці");
        assert_eq!(encode(&plural).unwrap(), "Nc-pgn");
    }

    #[test]
    fn verbs_need_a_lemma() {
        let interp = from_vesum("verb:imperf:past:m", "");
        assert!(matches!(encode(&interp), Err(Error::MissingLemma { .. })));

        let interp = from_vesum("verb:imperf:past:m", "ходити");
        assert_eq!(encode(&interp).unwrap(), "Vmpis-sm");

        let aux = from_vesum("verb:imperf:past:m", "бути");
        assert_eq!(encode(&aux).unwrap(), "Vapis-sm");
    }

    #[test]
    fn decodes_nouns() {
        let interp = decode("Ncmsny", "кіт").unwrap();
        assert_eq!(vesum::encode(&interp), "noun:anim:m:v_naz");

        let common_gender = decode("Nccsny", "сирота").unwrap();
        assert!(common_gender.is_feminine());
    }

    #[test]
    fn decodes_pronoun_syntactic_type() {
        let interp = decode("Pd--m-sna", "той").unwrap();
        assert!(interp.is_pronoun());
        assert!(interp.is_adjectivish());
        assert!(interp.is_demonstrative());

        assert!(matches!(decode("Pd--m-snz", ""), Err(Error::InvalidTag { .. })));
    }

    #[test]
    fn decodes_verbs() {
        let interp = decode("Vmpgp", "читаючи").unwrap();
        assert!(interp.is_converb());

        let reflexive = decode("Vmeis-sm", "вмився").unwrap();
        assert!(reflexive.is_verb());
        assert!(reflexive.is_reflexive_verb());
        assert!(reflexive.is_perfect());
    }

    #[test]
    fn adjective_definiteness() {
        let interp = from_vesum("adj:f:v_naz:compb", "гарний");
        assert_eq!(encode(&interp).unwrap(), "Afpfsns");

        let masculine = from_vesum("adj:m:v_rod:compb", "гарний");
        assert_eq!(encode(&masculine).unwrap(), "Afpmsgf");
    }

    #[test]
    fn positional_roundtrip_is_idempotent() {
        for (tag, form) in &[
            ("Ncmsny", "кіт"),
            ("Afpfsns", "гарна"),
            ("Vmpis-sm", "ходив"),
            ("Spsg", "до"),
            ("Ccs", "і"),
            ("Rc", "швидше"),
            ("Q", "не"),
            ("U", ","),
        ] {
            let lemma = match *tag {
                "Vmpis-sm" => "ходити",
                "Afpfsns" => "гарний",
                _ => *form,
            };
            let mut interp = decode(tag, form).unwrap();
            interp.lemma = lemma.to_owned();
            let encoded = encode(&interp).unwrap();
            assert_eq!(&encoded, tag);
            assert!(encoded.chars().count() <= schema_width(tag.chars().next().unwrap()).unwrap());
        }
    }

    #[test]
    fn unsupported_pos() {
        let interp = Interpretation::new(Pos::Error, "");
        assert!(matches!(
            encode(&interp),
            Err(Error::UnsupportedConversion { .. })
        ));
    }
}
