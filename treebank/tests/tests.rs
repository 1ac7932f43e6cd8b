use std::collections::BTreeSet;
use std::convert::TryInto;

use lazy_static::lazy_static;
use quickcheck_macros::quickcheck;
use treebank::{
    enhanced::{self, BuilderOptions},
    graph::{DupePolicy, Endpoint, EnhancedGraph},
    morph::{
        Case, Feature, Gender, Interpretation, Mood, Number, Person, Pos, PronominalType,
        PunctuationType, Tense, Yes,
    },
    rule::id::Category,
    tagset::{self, Tagset},
    types::{EnhancedDependency, HelperDependency, HelperRelation},
    Problem, Rules, RulesOptions, Sentence, Token,
};

fn noun(form: &str, lemma: &str, case: Case) -> Token {
    Token::new(
        form,
        Interpretation::new(Pos::Noun, lemma)
            .with(Feature::Case(case))
            .with(Feature::Gender(Gender::Feminine))
            .with(Feature::Number(Number::Singular)),
    )
}

fn verb(form: &str, lemma: &str) -> Token {
    Token::new(
        form,
        Interpretation::new(Pos::Verb, lemma)
            .with(Feature::Mood(Mood::Indicative))
            .with(Feature::Tense(Tense::Present))
            .with(Feature::Person(Person::Third))
            .with(Feature::Number(Number::Singular)),
    )
}

fn infinitive(form: &str) -> Token {
    Token::new(
        form,
        Interpretation::new(Pos::Verb, form).with(Feature::Mood(Mood::Infinitive)),
    )
}

fn period() -> Token {
    Token::new(
        ".",
        Interpretation::new(Pos::Punctuation, ".")
            .with(Feature::PunctuationType(PunctuationType::Period)),
    )
}

fn relative(form: &str, case: Case) -> Token {
    Token::new(
        form,
        Interpretation::new(Pos::Adjective, "який")
            .with(Feature::Pronoun(Yes))
            .with(Feature::PronominalType(PronominalType::Relative))
            .with(Feature::Case(case)),
    )
}

/// Reorders tokens so that the token at `order[i]` moves to position `i`, remapping heads.
fn permute(sentence: &Sentence, order: &[usize]) -> Sentence {
    let mut position = vec![0; order.len()];
    for (new, old) in order.iter().enumerate() {
        position[*old] = new;
    }

    let tokens = order
        .iter()
        .map(|old| {
            let mut token = sentence[*old].clone();
            for dep in token.deps.iter_mut() {
                dep.head = position[dep.head];
            }
            for hdep in token.hdeps.iter_mut() {
                hdep.head = position[hdep.head];
            }
            token
        })
        .collect();

    Sentence::new(sentence.id.as_str(), tokens)
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn order_from_keys(keys: &[u32], n: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by_key(|i| (keys.get(*i).copied().unwrap_or(0), *i));
    order
}

/// Arrows as (start, end, relation) in the positions of the unpermuted sentence.
fn arrow_set(graph: &EnhancedGraph, order: &[usize]) -> BTreeSet<(Option<usize>, usize, String)> {
    graph
        .arrows()
        .map(|(_, x)| {
            (
                x.start.node().map(|node| order[node]),
                order[x.end],
                x.relation.clone(),
            )
        })
        .collect()
}

lazy_static! {
    static ref RULES: Rules = Rules::new();

    // "Книжок бракує ."
    static ref GENITIVE_SUBJECT: Sentence = Sentence::new(
        "genitive-subject",
        vec![
            noun("книжок", "книжка", Case::Genitive).with_dep("nsubj", 1),
            verb("бракує", "бракувати"),
            period().with_dep("punct", 1),
        ],
    );

    // "Він читав , писав і малював"
    static ref CONJUNCTS: Sentence = {
        let mut subject = Token::new("він", Interpretation::new(Pos::Noun, "він"))
            .with_dep("nsubj", 1);
        subject.hdeps.push(HelperDependency {
            relation: HelperRelation::Distrib,
            head: 1,
        });

        Sentence::new(
            "conjuncts",
            vec![
                subject,
                verb("читав", "читати"),
                Token::new(",", Interpretation::new(Pos::Punctuation, ",")).with_dep("punct", 3),
                verb("писав", "писати").with_dep("conj", 1),
                Token::new("і", Interpretation::new(Pos::Conjunction, "і")).with_dep("cc", 5),
                verb("малював", "малювати").with_dep("conj", 1),
            ],
        )
    };

    // "Книжок швидко лежить столі ." with an adverb as amod and the period under "столі"
    static ref MESSY: Sentence = Sentence::new(
        "messy",
        vec![
            noun("книжок", "книжка", Case::Genitive).with_dep("nsubj", 2),
            Token::new("швидко", Interpretation::new(Pos::Adverb, "швидко")).with_dep("amod", 0),
            verb("лежить", "лежати"),
            noun("столі", "стіл", Case::Locative).with_dep("obl", 2),
            period().with_dep("punct", 3),
        ],
    );
}

#[test]
fn genitive_subject_is_reported_once() {
    init_logger();
    let problems = RULES.validate(&GENITIVE_SUBJECT).unwrap();

    assert_eq!(problems, vec![Problem::at("підмет не в називному", 0)]);
}

#[test]
fn negated_genitive_subject_is_fine() {
    // "Книжок не бракує ."
    let sentence = Sentence::new(
        "negated",
        vec![
            noun("книжок", "книжка", Case::Genitive).with_dep("nsubj", 2),
            Token::new(
                "не",
                Interpretation::new(Pos::Particle, "не")
                    .with(Feature::Polarity(treebank::morph::Polarity::Negative)),
            )
            .with_dep("advmod", 2),
            verb("бракує", "бракувати"),
            period().with_dep("punct", 2),
        ],
    );

    let problems = RULES.validate(&sentence).unwrap();
    assert!(problems.iter().all(|x| x.message != "підмет не в називному"));
}

#[test]
fn xcomp_subject_comes_from_object() {
    // "Мама попросила вчора прийти додому сина"
    let mut sentence = Sentence::new(
        "xcomp",
        vec![
            noun("мама", "мама", Case::Nominative).with_dep("nsubj", 1),
            verb("попросила", "попросити"),
            Token::new("вчора", Interpretation::new(Pos::Adverb, "вчора")).with_dep("advmod", 1),
            infinitive("прийти").with_dep("xcomp", 1),
            Token::new("додому", Interpretation::new(Pos::Adverb, "додому")).with_dep("advmod", 3),
            noun("сина", "син", Case::Accusative).with_dep("obj", 1),
        ],
    );

    let graph = enhanced::build(&sentence, &BuilderOptions::default()).unwrap();
    assert!(graph.has_arrow(Endpoint::Node(3), 5, "nsubj"));
    assert!(!graph.has_arrow(Endpoint::Node(3), 0, "nsubj"));

    enhanced::generate(&mut sentence, &BuilderOptions::default()).unwrap();
    assert!(sentence[5]
        .edeps
        .contains(&EnhancedDependency::new(Some(3), "nsubj")));
}

#[test]
fn ignored_duplicates_return_the_original_arrow() {
    let mut graph = EnhancedGraph::new(3);

    let first = graph
        .add_arrow(Endpoint::Node(0), 1, "obj", DupePolicy::Raise, true)
        .unwrap();
    let second = graph
        .add_arrow(Endpoint::Node(0), 1, "obj", DupePolicy::Ignore, true)
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(graph.len(), 1);
    assert!(graph
        .add_arrow(Endpoint::Node(0), 1, "obj", DupePolicy::Raise, true)
        .is_err());
}

#[test]
fn subject_is_shared_by_all_conjuncts() {
    let graph = enhanced::build(&CONJUNCTS, &BuilderOptions::default()).unwrap();

    for conjunct in &[1, 3, 5] {
        assert!(graph.has_arrow(Endpoint::Node(*conjunct), 0, "nsubj"));
        assert!(graph.has_arrow(Endpoint::Root, *conjunct, "root"));
    }
}

#[quickcheck]
fn conjunct_propagation_is_order_independent(keys: Vec<u32>) -> bool {
    let identity: Vec<usize> = (0..CONJUNCTS.len()).collect();
    let expected = arrow_set(
        &enhanced::build(&CONJUNCTS, &BuilderOptions::default()).unwrap(),
        &identity,
    );

    let order = order_from_keys(&keys, CONJUNCTS.len());
    let permuted = permute(&CONJUNCTS, &order);
    let graph = enhanced::build(&permuted, &BuilderOptions::default()).unwrap();

    arrow_set(&graph, &order) == expected
}

#[test]
fn relative_reference_is_never_duplicated() {
    init_logger();
    // "книжка , яку я читав"
    let mut sentence = Sentence::new(
        "relcl",
        vec![
            noun("книжка", "книжка", Case::Nominative),
            Token::new(",", Interpretation::new(Pos::Punctuation, ",")).with_dep("punct", 4),
            relative("яку", Case::Accusative).with_dep("obj", 4),
            Token::new("я", Interpretation::new(Pos::Noun, "я")).with_dep("nsubj", 4),
            verb("читав", "читати").with_dep("acl:relcl", 0),
        ],
    );

    enhanced::generate(&mut sentence, &BuilderOptions::default()).unwrap();
    let once = sentence.clone();
    enhanced::generate(&mut sentence, &BuilderOptions::default()).unwrap();

    assert_eq!(once, sentence);
    assert_eq!(
        sentence[2]
            .edeps
            .iter()
            .filter(|x| x.relation == "ref")
            .collect::<Vec<_>>(),
        vec![&EnhancedDependency::new(Some(0), "ref")]
    );
    assert!(sentence[0]
        .edeps
        .contains(&EnhancedDependency::new(Some(4), "obj:rel")));
}

#[test]
fn validation_is_repeatable() {
    let first = RULES.validate(&MESSY).unwrap();
    let second = RULES.validate(&MESSY).unwrap();

    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[quickcheck]
fn validation_does_not_depend_on_rule_order(keys: Vec<u32>) -> bool {
    let rules: Vec<_> = RULES.rules().to_vec();
    let order = order_from_keys(&keys, rules.len());
    let shuffled: Rules = order.iter().map(|i| rules[*i].clone()).collect();

    shuffled.validate(&MESSY).unwrap() == RULES.validate(&MESSY).unwrap()
}

#[test]
fn rules_can_be_disabled_enabled() {
    let mut rules = Rules::new();

    // enabled by default
    assert!(!rules.validate(&GENITIVE_SUBJECT).unwrap().is_empty());

    rules
        .select_mut(&Category::new("case").join("nsubj").into())
        .for_each(|x| x.disable());

    // disabled now
    assert!(rules.validate(&GENITIVE_SUBJECT).unwrap().is_empty());

    // "Він читав писав": the second conjunct has neither cc nor a comma
    let sentence = Sentence::new(
        "asyndeton",
        vec![
            Token::new("він", Interpretation::new(Pos::Noun, "він")).with_dep("nsubj", 1),
            verb("читав", "читати"),
            verb("писав", "писати").with_dep("conj", 1),
        ],
    );
    let is_asyndeton = |x: &Problem| x.message == "conj без cc чи коми";

    // disabled by default
    assert!(!rules.validate(&sentence).unwrap().iter().any(is_asyndeton));

    rules
        .select_mut(&"disabled/conj".try_into().unwrap())
        .for_each(|x| x.enable());

    // enabled now
    assert!(rules.validate(&sentence).unwrap().iter().any(is_asyndeton));
}

#[test]
fn options_deserialize_from_json() {
    let options: RulesOptions =
        serde_json::from_str(r#"{"ignore_ids": ["case/nsubj", "TABLE"]}"#).unwrap();

    assert!(options.ids.is_empty());
    assert_eq!(options.ignore_ids.len(), 2);

    let rules = Rules::with_options(&options);
    assert!(rules.validate(&GENITIVE_SUBJECT).unwrap().is_empty());

    assert!(serde_json::from_str::<RulesOptions>(r#"{"ids": ["case//0"]}"#).is_err());
}

const CANONICAL_TAGS: &[&str] = &[
    "noun:anim:m:v_naz",
    "noun:inanim:p:v_rod:ns",
    "adj:f:v_zna:ranim:compb",
    "verb:rev:imperf:past:m",
    "verb:perf:futr:s:3",
    "noun:anim:f:v_naz:prop:fname",
    "prep:rv_rod",
    "conj:coord",
    "adj:m:v_naz:&pron:dem",
    "adj:p:v_naz:&adjp:imperf:actv",
    "adv:compr:rare",
    "advp:perf",
    "advp:imperf:pres",
    "advp:rev:imperf:past",
    "punct:quote:open",
];

#[test]
fn past_verb_converts_to_ud() {
    // "ходив"
    for tag in &["verb:past:m", "verb:imperf:past:m"] {
        let interp = tagset::decode(tag, Tagset::Vesum).unwrap();
        let ud = tagset::encode(&interp, Tagset::Ud).unwrap();

        for feature in &["Mood=Ind", "Tense=Past", "Gender=Masc", "VerbForm=Fin"] {
            assert!(ud.contains(feature), "{}", ud);
        }
        assert!(ud.starts_with("VERB|"));
    }
}

#[quickcheck]
fn vesum_encoding_ignores_flag_order(index: usize, keys: Vec<u32>) -> bool {
    let tag = CANONICAL_TAGS[index % CANONICAL_TAGS.len()];
    let flags: Vec<&str> = tag.split(':').collect();
    let order = order_from_keys(&keys, flags.len());
    let shuffled = order.iter().map(|i| flags[*i]).collect::<Vec<_>>().join(":");

    let interp = tagset::decode(&shuffled, Tagset::Vesum).unwrap();
    tagset::encode(&interp, Tagset::Vesum).unwrap() == tag
}
