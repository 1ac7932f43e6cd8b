use super::*;
use crate::morph::{Gender, Interpretation, Number, Person};

/// Whether an adjectival modifier agrees with its noun in gender and case.
///
/// Promoted nouns, genderless pronouns ("я", "ми", ...) and grafts accept any gender. The case
/// may match either the noun or the numeral governing it.
pub fn noun_adjective_agreement(adjective: Node, noun: Node) -> bool {
    let adj = adjective.interp();
    let noun_interp = noun.interp();

    let gender_agrees = adj.features.gender.is_none()
        || adj.features.gender == noun_interp.features.gender
        || noun.token().is_promoted()
        || noun.token().is_graft()
        || noun.lemma_in(GENDERLESS_PRONOUNS)
        || noun_interp.is_no_singular()
        || noun_interp.is_x();

    let case_agrees = adj.features.case.is_none()
        || adj.features.case == noun_interp.features.case
        || adj.features.case == this_or_governed_case(noun)
        || noun_interp.is_uninflectable();

    gender_agrees && case_agrees
}

/// Whether a numeral with gender ("два", "дві") agrees with the noun it quantifies.
pub fn numeral_noun_gender_agreement(numeral: &Interpretation, noun: &Interpretation) -> bool {
    match (numeral.features.gender, noun.features.gender) {
        (Some(numeral_gender), Some(noun_gender)) => {
            numeral_gender == noun_gender
                || (numeral_gender == Gender::Masculine && noun_gender == Gender::Neuter)
        }
        _ => true,
    }
}

/// Whether a verbal predicate agrees with its nominative subject in number and person. Past
/// forms agree in gender instead of person.
pub fn subject_predicate_agreement(subject: Node, predicate: Node) -> bool {
    let subj = subject.interp();
    let pred = predicate.interp();

    if !pred.is_finite() || subject.token().is_graft() || is_x_foreign(subject) {
        return true;
    }
    if !subj.is_nominative() || is_quantificational_nsubj(subject) {
        return true;
    }

    let subject_number = subj.get_number();
    let predicate_number = pred.get_number();
    let number_agrees = match (subject_number, predicate_number) {
        (Some(a), Some(b)) => a == b || subject.has_child("conj"),
        _ => true,
    };

    let person_agrees = match (subj.features.person, pred.features.person) {
        (Some(a), Some(b)) => a == b,
        (None, Some(b)) => b == Person::Third,
        _ => true,
    };

    let gender_agrees = !pred.is_past()
        || predicate_number == Some(Number::Plural)
        || subject.lemma_in(GENDERLESS_PRONOUNS)
        || match (subj.features.gender, pred.features.gender) {
            (Some(a), Some(b)) => a == b,
            _ => true,
        };

    number_agrees && person_agrees && gender_agrees
}

/// Whether an adjectival or participial predicate agrees with the subject in number and, in
/// the singular, in gender. Case is free: "він був щасливим".
pub fn subject_adjective_agreement(subject: Node, adjective: Node) -> bool {
    let subj = subject.interp();
    let adj = adjective.interp();

    if subject.lemma_in(GENDERLESS_PRONOUNS) || subject.token().is_graft() {
        return true;
    }

    let number_agrees = match (subj.get_number(), adj.get_number()) {
        (Some(a), Some(b)) => a == b,
        _ => true,
    };
    let gender_agrees = adj.get_number() == Some(Number::Plural)
        || match (subj.features.gender, adj.features.gender) {
            (Some(a), Some(b)) => a == b,
            _ => true,
        };

    number_agrees && gender_agrees
}

/// Whether two nominals stand in the same case, as appositions and conjuncts usually do.
pub fn noun_noun_agreed(a: Node, b: Node) -> bool {
    match (a.interp().features.case, b.interp().features.case) {
        (Some(x), Some(y)) => {
            x == y || a.interp().is_uninflectable() || b.interp().is_uninflectable()
        }
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        graph::{EnhancedGraph, Tree},
        morph::{Case, Feature, Mood, Pos, Tense},
        types::{Sentence, Token},
    };

    fn with_context<F>(tokens: Vec<Token>, f: F)
    where
        F: FnOnce(Context),
    {
        let sentence = Sentence::new("s", tokens);
        let tree = Tree::from_tokens(&sentence.tokens).unwrap();
        let graph = EnhancedGraph::new(sentence.len());
        f(Context::new(&sentence, &tree, &graph));
    }

    fn reading(pos: Pos, lemma: &str, features: &[Feature]) -> Interpretation {
        features
            .iter()
            .fold(Interpretation::new(pos, lemma), |interp, x| interp.with(*x))
    }

    #[test]
    fn adjectives_agree_in_gender_and_case() {
        let adjective = |gender, case| {
            Token::new(
                "новий",
                reading(
                    Pos::Adjective,
                    "новий",
                    &[Feature::Gender(gender), Feature::Case(case)],
                ),
            )
            .with_dep("amod", 1)
        };
        let noun = Token::new(
            "стіл",
            reading(
                Pos::Noun,
                "стіл",
                &[
                    Feature::Gender(Gender::Masculine),
                    Feature::Case(Case::Nominative),
                ],
            ),
        );

        with_context(
            vec![adjective(Gender::Masculine, Case::Nominative), noun.clone()],
            |context| assert!(noun_adjective_agreement(context.node(0), context.node(1))),
        );
        with_context(
            vec![adjective(Gender::Feminine, Case::Nominative), noun.clone()],
            |context| assert!(!noun_adjective_agreement(context.node(0), context.node(1))),
        );
        with_context(
            vec![adjective(Gender::Masculine, Case::Genitive), noun],
            |context| assert!(!noun_adjective_agreement(context.node(0), context.node(1))),
        );
    }

    #[test]
    fn subjects_agree_with_past_verbs() {
        let subject = Token::new(
            "мама",
            reading(
                Pos::Noun,
                "мама",
                &[
                    Feature::Gender(Gender::Feminine),
                    Feature::Case(Case::Nominative),
                ],
            ),
        )
        .with_dep("nsubj", 1);
        let verb = |gender| {
            Token::new(
                "спала",
                reading(
                    Pos::Verb,
                    "спати",
                    &[
                        Feature::Mood(Mood::Indicative),
                        Feature::Tense(Tense::Past),
                        Feature::Gender(gender),
                    ],
                ),
            )
        };

        with_context(vec![subject.clone(), verb(Gender::Feminine)], |context| {
            assert!(subject_predicate_agreement(context.node(0), context.node(1)))
        });
        with_context(vec![subject, verb(Gender::Masculine)], |context| {
            assert!(!subject_predicate_agreement(context.node(0), context.node(1)))
        });
    }

    #[test]
    fn numeral_gender() {
        let two = reading(Pos::Numeral, "два", &[Feature::Gender(Gender::Masculine)]);
        let two_fem = reading(Pos::Numeral, "два", &[Feature::Gender(Gender::Feminine)]);
        let window = reading(Pos::Noun, "вікно", &[Feature::Gender(Gender::Neuter)]);
        let book = reading(Pos::Noun, "книжка", &[Feature::Gender(Gender::Feminine)]);

        assert!(numeral_noun_gender_agreement(&two, &window));
        assert!(numeral_noun_gender_agreement(&two_fem, &book));
        assert!(!numeral_noun_gender_agreement(&two, &book));
    }
}
