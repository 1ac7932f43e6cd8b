//! Derives the enhanced dependency graph of a sentence from its basic tree.
//!
//! The passes run in a fixed order, each one reading the graph left by the previous ones:
//!
//! 1. seed the graph with the basic dependencies
//! 2. connect nodes without a head to the virtual root
//! 3. load manually annotated enhanced dependencies
//! 4. propagate relations across conjuncts
//! 5. project controlled subjects of `xcomp` predicates
//! 6. project subjects of `advcl:sp` secondary predicates
//! 7. link relative clauses through `ref` arrows
//!
//! Every pass plans its arrows on an unchanged graph and adds them afterwards, so the result
//! does not depend on the order of the nodes. Passes after loading ignore duplicates, so running
//! the builder on its own output adds nothing.

use crate::{
    grammar::{self, u_eq, u_eq_some, SUBJECTS},
    graph::{Arrow, DupePolicy, Endpoint, EnhancedGraph, Error},
    tagset::ud::{self, UdPos},
    types::{EnhancedDependency, HelperRelation, Sentence},
};
use log::debug;
use serde::{Deserialize, Serialize};

/// Toggles the optional passes. Seeding, the virtual root and manual edges always apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderOptions {
    pub propagate_conjuncts: bool,
    pub project_xcomp_subjects: bool,
    pub project_advcl_sp_subjects: bool,
    pub link_relative_clauses: bool,
}

impl Default for BuilderOptions {
    fn default() -> Self {
        BuilderOptions {
            propagate_conjuncts: true,
            project_xcomp_subjects: true,
            project_advcl_sp_subjects: true,
            link_relative_clauses: true,
        }
    }
}

/// Relations copied to other heads as they are.
const FUNCTIONAL_RELATIONS: &[&str] = &[
    "cop", "aux", "mark", "case", "dep", "cc", "vocative", "xcomp", "appos",
];

/// Dependents of a governor that can control the subject of its `xcomp`, by priority.
const CONTROLLERS: &[&str] = &["obj", "iobj", "nsubj", "csubj"];

type Planned = Vec<(Endpoint, usize, String)>;

/// Builds the enhanced graph of `sentence`.
///
/// # Errors
/// - [Error::MissingNode] if a basic or enhanced dependency points outside the sentence.
/// - [Error::SelfLoop] if a dependency points at its own token.
/// - [Error::DuplicateArrow] if a basic dependency or a manual enhanced one is repeated.
pub fn build(sentence: &Sentence, options: &BuilderOptions) -> Result<EnhancedGraph, Error> {
    let mut graph = EnhancedGraph::new(sentence.len());

    seed(sentence, &mut graph)?;
    connect_ephemeral_root(sentence, &mut graph)?;
    load_manual(sentence, &mut graph)?;

    if options.propagate_conjuncts {
        run(&mut graph, "shared dependents", |x| plan_shared_dependents(sentence, x))?;
        run(&mut graph, "conjunct heads", |x| plan_conjunct_heads(sentence, x))?;
    }
    if options.project_xcomp_subjects {
        run(&mut graph, "xcomp subjects", plan_xcomp_subjects)?;
    }
    if options.project_advcl_sp_subjects {
        run(&mut graph, "advcl:sp subjects", plan_advcl_sp_subjects)?;
    }
    if options.link_relative_clauses {
        run(&mut graph, "relative references", |x| plan_references(sentence, x))?;
        run(&mut graph, "relative clauses", |x| plan_relative_links(sentence, x))?;
    }

    Ok(graph)
}

/// Builds the enhanced graph and stores it on the tokens: the `edeps` of every token become its
/// incoming arrows, sorted by head.
pub fn generate(sentence: &mut Sentence, options: &BuilderOptions) -> Result<(), Error> {
    let graph = build(sentence, options)?;

    for (position, token) in sentence.tokens.iter_mut().enumerate() {
        let mut edeps: Vec<_> = graph
            .incoming_arrows(position)
            .map(|x| EnhancedDependency::new(x.start.node(), x.relation.as_str()))
            .collect();
        edeps.sort();
        token.edeps = edeps;
    }

    debug!(
        "wrote {} enhanced dependencies to sentence {}",
        graph.len(),
        sentence.id
    );
    Ok(())
}

/// The relation `new_dependent` should get when it takes over `existing` from another node,
/// e.g. an `amod` becomes a `det` if the new dependent is a determiner.
pub fn find_relation_analog(
    sentence: &Sentence,
    existing: &Arrow,
    new_dependent: usize,
) -> String {
    let relation = existing.relation.as_str();
    let interp = sentence[new_dependent].interp();

    if interp.is_x() || u_eq_some(relation, FUNCTIONAL_RELATIONS) {
        return relation.to_owned();
    }

    let pos = ud::to_ud(interp).ok().map(|x| x.pos.dumb_down());
    let head_is_converb = existing
        .start
        .node()
        .map_or(false, |x| sentence[x].interp().is_converb());

    let analog = if u_eq(relation, "obl") && interp.is_adverb() {
        "advmod"
    } else if u_eq(relation, "advmod") && interp.is_nounish() {
        "obl"
    } else if u_eq(relation, "amod") && pos == Some(UdPos::Det) {
        "det"
    } else if u_eq(relation, "det") && pos == Some(UdPos::Adj) {
        "amod"
    } else if u_eq_some(relation, &["amod", "det"]) && interp.is_nounish() {
        "nmod"
    } else if u_eq(relation, "advcl") && head_is_converb && interp.is_adjective() {
        "advcl:sp"
    } else {
        relation
    };

    analog.to_owned()
}

/// Plans arrows on the current graph, then adds them.
fn run<F>(graph: &mut EnhancedGraph, pass: &str, plan: F) -> Result<(), Error>
where
    F: FnOnce(&EnhancedGraph) -> Planned,
{
    let planned = plan(&*graph);
    let before = graph.len();
    for (start, end, relation) in planned {
        graph.add_arrow(start, end, relation, DupePolicy::Ignore, true)?;
    }
    debug!("{}: {} arrows added", pass, graph.len() - before);
    Ok(())
}

fn seed(sentence: &Sentence, graph: &mut EnhancedGraph) -> Result<(), Error> {
    for (position, token) in sentence.iter().enumerate() {
        for dep in &token.deps {
            // a promoted token keeps only the edges it inherits from an elided head
            let head_is_elided = sentence.get(dep.head).map_or(false, |x| x.is_elided());
            if token.is_promoted() && !head_is_elided {
                continue;
            }
            graph.add_arrow(
                Endpoint::Node(dep.head),
                position,
                dep.relation.as_str(),
                DupePolicy::Raise,
                true,
            )?;
        }
    }

    debug!("seed: {} arrows", graph.len());
    Ok(())
}

fn connect_ephemeral_root(sentence: &Sentence, graph: &mut EnhancedGraph) -> Result<(), Error> {
    let headless: Vec<usize> = (0..sentence.len())
        .filter(|x| sentence[*x].is_word() && !graph.has_incoming(*x))
        .collect();

    for node in &headless {
        graph.add_arrow(Endpoint::Root, *node, "root", DupePolicy::Raise, true)?;
    }

    debug!("root: {} nodes connected", headless.len());
    Ok(())
}

fn load_manual(sentence: &Sentence, graph: &mut EnhancedGraph) -> Result<(), Error> {
    let seeded = graph.len();
    let mut skipped = 0;

    for (position, token) in sentence.iter().enumerate() {
        for edep in &token.edeps {
            let start = edep.head.map_or(Endpoint::Root, Endpoint::Node);
            let existing = graph.find(start, position, &edep.relation);

            if existing.map_or(false, |x| x.index() < seeded) {
                skipped += 1;
                continue;
            }
            graph.add_arrow(
                start,
                position,
                edep.relation.as_str(),
                DupePolicy::Raise,
                true,
            )?;
        }
    }

    debug!(
        "manual: {} arrows loaded, {} already seeded",
        graph.len() - seeded,
        skipped
    );
    Ok(())
}

fn is_conj(arrow: &Arrow) -> bool {
    u_eq(&arrow.relation, "conj")
}

/// Dependents marked as shared by the conjuncts of their head.
fn plan_shared_dependents(sentence: &Sentence, graph: &EnhancedGraph) -> Planned {
    let mut planned = Planned::new();
    for node in 0..graph.node_count() {
        let heads: Vec<usize> = graph
            .walk_back(node, |x| is_conj(x) && x.relation != "conj:parataxis")
            .filter_map(|id| graph.arrow(id).start.node())
            .collect();

        for head in heads {
            for arrow in graph.outgoing_arrows(Endpoint::Node(head)) {
                let shared = sentence[arrow.end].hdeps.iter().any(|x| {
                    x.head == head
                        && matches!(x.relation, HelperRelation::Distrib | HelperRelation::Collect)
                });
                if shared && arrow.end != node {
                    planned.push((Endpoint::Node(node), arrow.end, arrow.relation.clone()));
                }
            }
        }
    }
    planned
}

/// Relations of the topmost conjunct.
fn plan_conjunct_heads(sentence: &Sentence, graph: &EnhancedGraph) -> Planned {
    let mut planned = Planned::new();
    for node in 0..graph.node_count() {
        let top = graph
            .walk_back(node, is_conj)
            .last()
            .and_then(|id| graph.arrow(id).start.node());
        let top = match top {
            Some(top) => top,
            None => continue,
        };

        for arrow in graph.incoming_arrows(top) {
            if u_eq(&arrow.relation, "parataxis") || arrow.start == Endpoint::Node(node) {
                continue;
            }
            planned.push((
                arrow.start,
                node,
                find_relation_analog(sentence, arrow, node),
            ));
        }
    }
    planned
}

fn has_subject(graph: &EnhancedGraph, node: usize) -> bool {
    graph
        .outgoing_arrows(Endpoint::Node(node))
        .any(|x| u_eq_some(&x.relation, SUBJECTS))
}

fn subject_relation(controller: &Arrow) -> String {
    if u_eq(&controller.relation, "csubj") {
        "csubj".to_owned()
    } else {
        "nsubj".to_owned()
    }
}

fn plan_xcomp_subjects(graph: &EnhancedGraph) -> Planned {
    let mut planned = Planned::new();

    for node in 0..graph.node_count() {
        if has_subject(graph, node) {
            continue;
        }
        let governors: Vec<usize> = graph
            .walk_back(node, |x| u_eq(&x.relation, "xcomp"))
            .filter_map(|id| graph.arrow(id).start.node())
            .collect();

        let controller = governors.into_iter().find_map(|governor| {
            CONTROLLERS.iter().find_map(|relation| {
                graph
                    .outgoing_arrows(Endpoint::Node(governor))
                    .find(|x| x.end != node && u_eq(&x.relation, relation))
            })
        });

        if let Some(controller) = controller {
            planned.push((
                Endpoint::Node(node),
                controller.end,
                subject_relation(controller),
            ));
        }
    }

    planned
}

fn plan_advcl_sp_subjects(graph: &EnhancedGraph) -> Planned {
    let mut planned = Planned::new();

    for node in 0..graph.node_count() {
        if has_subject(graph, node) {
            continue;
        }
        let governors = graph
            .incoming_arrows(node)
            .filter(|x| u_eq(&x.relation, "advcl:sp"))
            .filter_map(|x| x.start.node());

        for governor in governors {
            let subject = graph
                .outgoing_arrows(Endpoint::Node(governor))
                .find(|x| x.end != node && u_eq_some(&x.relation, SUBJECTS));
            if let Some(subject) = subject {
                planned.push((Endpoint::Node(node), subject.end, subject_relation(subject)));
            }
        }
    }

    planned
}

/// The first relative pronoun inside the clause headed by `clause`, not descending into nested
/// relative clauses.
fn find_relative(sentence: &Sentence, graph: &EnhancedGraph, clause: usize) -> Option<usize> {
    if sentence[clause].interp().is_relative() {
        return Some(clause);
    }

    graph
        .paths_forward(clause, |x| x.relation == "acl:relcl", |_| false)
        .filter_map(|path| path.last().map(|id| graph.arrow(*id).end))
        .find(|x| sentence[*x].interp().is_relative())
}

/// `ref` arrows from antecedents to the relative pronouns of their clauses, unless annotated.
fn plan_references(sentence: &Sentence, graph: &EnhancedGraph) -> Planned {
    let mut planned = Planned::new();
    for (_, clause) in graph.arrows() {
        if clause.relation != "acl:relcl" {
            continue;
        }
        let antecedent = match clause.start.node() {
            Some(x) => x,
            None => continue,
        };
        if let Some(pronoun) = find_relative(sentence, graph, clause.end) {
            let referenced = graph
                .incoming_arrows(pronoun)
                .any(|x| u_eq(&x.relation, "ref"));
            if pronoun != antecedent && !referenced {
                planned.push((Endpoint::Node(antecedent), pronoun, "ref".to_owned()));
            }
        }
    }
    planned
}

/// Moves the relations of relative pronouns to their antecedents.
fn plan_relative_links(sentence: &Sentence, graph: &EnhancedGraph) -> Planned {
    let mut planned = Planned::new();
    for (_, reference) in graph.arrows() {
        if !u_eq(&reference.relation, "ref") {
            continue;
        }
        let antecedent = match reference.start.node() {
            Some(x) => x,
            None => continue,
        };
        let pronoun = reference.end;

        if grammar::is_nonverbal_predicate_enhanced(graph, pronoun) {
            for subject in graph
                .outgoing_arrows(Endpoint::Node(pronoun))
                .filter(|x| u_eq_some(&x.relation, SUBJECTS) && x.end != antecedent)
            {
                planned.push((
                    Endpoint::Node(antecedent),
                    subject.end,
                    format!("{}:relnompred", subject.relation),
                ));
            }
        } else {
            for arrow in graph.incoming_arrows(pronoun) {
                if u_eq_some(&arrow.relation, &["conj", "ref"])
                    || arrow.start == Endpoint::Node(antecedent)
                {
                    continue;
                }
                let relation = find_relation_analog(sentence, arrow, antecedent);
                planned.push((arrow.start, antecedent, grammar::relativize(&relation)));
            }
        }
    }
    planned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        morph::{Case, Feature, Interpretation, Mood, Pos, PronominalType},
        types::{HelperDependency, Token, TokenTag},
    };

    fn word(form: &str, pos: Pos) -> Token {
        Token::new(form, Interpretation::new(pos, form))
    }

    fn relative(form: &str) -> Token {
        Token::new(
            form,
            Interpretation::new(Pos::Adjective, "який")
                .with(Feature::PronominalType(PronominalType::Relative))
                .with(Feature::Case(Case::Nominative)),
        )
    }

    #[test]
    fn seeds_and_roots() {
        // "Мама спить"
        let sentence = Sentence::new(
            "s",
            vec![
                word("мама", Pos::Noun).with_dep("nsubj", 1),
                word("спить", Pos::Verb),
            ],
        );
        let graph = build(&sentence, &BuilderOptions::default()).unwrap();

        assert_eq!(graph.len(), 2);
        assert!(graph.has_arrow(Endpoint::Node(1), 0, "nsubj"));
        assert!(graph.has_arrow(Endpoint::Root, 1, "root"));
    }

    #[test]
    fn projects_object_control() {
        // "Я попросив його прийти"
        let sentence = Sentence::new(
            "s",
            vec![
                word("я", Pos::Noun).with_dep("nsubj", 1),
                word("попросив", Pos::Verb),
                word("його", Pos::Noun).with_dep("obj", 1),
                Token::new(
                    "прийти",
                    Interpretation::new(Pos::Verb, "прийти")
                        .with(Feature::Mood(Mood::Infinitive)),
                )
                .with_dep("xcomp", 1),
            ],
        );
        let graph = build(&sentence, &BuilderOptions::default()).unwrap();

        assert!(graph.has_arrow(Endpoint::Node(3), 2, "nsubj"));
        assert!(!graph.has_arrow(Endpoint::Node(3), 0, "nsubj"));

        let options = BuilderOptions {
            project_xcomp_subjects: false,
            ..BuilderOptions::default()
        };
        let graph = build(&sentence, &options).unwrap();
        assert!(!graph.has_arrow(Endpoint::Node(3), 2, "nsubj"));
    }

    #[test]
    fn propagates_to_conjuncts() {
        // "Він читав і писав"
        let mut subject = word("він", Pos::Noun).with_dep("nsubj", 1);
        subject.hdeps.push(HelperDependency {
            relation: HelperRelation::Distrib,
            head: 1,
        });
        let sentence = Sentence::new(
            "s",
            vec![
                subject,
                word("читав", Pos::Verb),
                word("і", Pos::Conjunction).with_dep("cc", 3),
                word("писав", Pos::Verb).with_dep("conj", 1),
            ],
        );
        let graph = build(&sentence, &BuilderOptions::default()).unwrap();

        assert!(graph.has_arrow(Endpoint::Root, 3, "root"));
        assert!(graph.has_arrow(Endpoint::Node(3), 0, "nsubj"));
        assert!(!graph.has_arrow(Endpoint::Node(3), 2, "cc"));
    }

    #[test]
    fn conjuncts_inherit_incoming_arrows() {
        // "Бачу маму і тата"
        let sentence = Sentence::new(
            "s",
            vec![
                word("бачу", Pos::Verb),
                word("маму", Pos::Noun).with_dep("obj", 0),
                word("і", Pos::Conjunction).with_dep("cc", 3),
                word("тата", Pos::Noun).with_dep("conj", 1),
            ],
        );
        let graph = build(&sentence, &BuilderOptions::default()).unwrap();
        assert!(graph.has_arrow(Endpoint::Node(0), 3, "obj"));
        assert!(!graph.has_arrow(Endpoint::Root, 3, "root"));

        let options = BuilderOptions {
            propagate_conjuncts: false,
            ..BuilderOptions::default()
        };
        let graph = build(&sentence, &options).unwrap();
        assert!(!graph.has_arrow(Endpoint::Node(0), 3, "obj"));

        // "Кажу: читав, писав" with "читав" attached as parataxis
        let sentence = Sentence::new(
            "s",
            vec![
                word("кажу", Pos::Verb),
                word("читав", Pos::Verb).with_dep("parataxis", 0),
                word("писав", Pos::Verb).with_dep("conj", 1),
            ],
        );
        let graph = build(&sentence, &BuilderOptions::default()).unwrap();
        assert!(graph.has_arrow(Endpoint::Node(1), 2, "conj"));
        assert!(!graph.has_arrow(Endpoint::Node(0), 2, "parataxis"));
    }

    #[test]
    fn promoted_tokens_keep_only_elided_heads() {
        // "Я додому, зараз" with the verb "піду" elided after "зараз"
        let sentence = Sentence::new(
            "s",
            vec![
                word("я", Pos::Noun).with_dep("nsubj", 3),
                word("додому", Pos::Adverb)
                    .with_dep("advmod", 3)
                    .with_dep("dep", 2)
                    .with_tag(TokenTag::Promoted),
                word("зараз", Pos::Adverb),
                word("піду", Pos::Verb)
                    .with_dep("parataxis", 2)
                    .with_tag(TokenTag::Elided),
            ],
        );
        let graph = build(&sentence, &BuilderOptions::default()).unwrap();

        assert!(graph.has_arrow(Endpoint::Node(3), 0, "nsubj"));
        assert!(graph.has_arrow(Endpoint::Node(3), 1, "advmod"));
        assert!(!graph.has_arrow(Endpoint::Node(2), 1, "dep"));
        assert!(graph.has_arrow(Endpoint::Node(2), 3, "parataxis"));
        assert!(graph.has_arrow(Endpoint::Root, 2, "root"));
        assert_eq!(graph.len(), 4);
    }

    #[test]
    fn relation_analogs() {
        let sentence = Sentence::new(
            "s",
            vec![
                word("тут", Pos::Adverb),
                word("дім", Pos::Noun),
                Token::new(
                    "цей",
                    Interpretation::new(Pos::Adjective, "цей")
                        .with(Feature::Pronoun(crate::morph::Yes))
                        .with(Feature::PronominalType(PronominalType::Demonstrative)),
                ),
            ],
        );
        let arrow = |relation: &str| Arrow {
            start: Endpoint::Node(1),
            end: 1,
            relation: relation.to_owned(),
        };

        assert_eq!(find_relation_analog(&sentence, &arrow("obl"), 0), "advmod");
        assert_eq!(find_relation_analog(&sentence, &arrow("advmod"), 1), "obl");
        assert_eq!(find_relation_analog(&sentence, &arrow("amod"), 2), "det");
        assert_eq!(find_relation_analog(&sentence, &arrow("amod"), 1), "nmod");
        assert_eq!(find_relation_analog(&sentence, &arrow("case"), 1), "case");
    }

    #[test]
    fn links_relative_clauses_once() {
        // "людина , яка прийшла"
        let mut sentence = Sentence::new(
            "s",
            vec![
                word("людина", Pos::Noun),
                word(",", Pos::Punctuation).with_dep("punct", 3),
                relative("яка").with_dep("nsubj", 3),
                word("прийшла", Pos::Verb).with_dep("acl:relcl", 0),
            ],
        );
        let graph = build(&sentence, &BuilderOptions::default()).unwrap();
        assert!(graph.has_arrow(Endpoint::Node(0), 2, "ref"));
        assert!(graph.has_arrow(Endpoint::Node(3), 0, "nsubj:rel"));

        generate(&mut sentence, &BuilderOptions::default()).unwrap();
        let once = sentence.clone();
        generate(&mut sentence, &BuilderOptions::default()).unwrap();

        assert_eq!(once, sentence);
        assert_eq!(
            sentence[2]
                .edeps
                .iter()
                .filter(|x| x.relation == "ref")
                .count(),
            1
        );
        assert_eq!(
            sentence[0].edeps,
            vec![
                EnhancedDependency::new(None, "root"),
                EnhancedDependency::new(Some(3), "nsubj:rel"),
            ]
        );
    }

    #[test]
    fn rejects_bad_input() {
        let sentence = Sentence::new("s", vec![word("x", Pos::X).with_dep("dep", 4)]);
        assert_eq!(
            build(&sentence, &BuilderOptions::default()),
            Err(Error::MissingNode(4))
        );

        let mut token = word("x", Pos::X);
        token.edeps.push(EnhancedDependency::new(Some(0), "dep"));
        let sentence = Sentence::new("s", vec![token]);
        assert!(matches!(
            build(&sentence, &BuilderOptions::default()),
            Err(Error::SelfLoop { node: 0, .. })
        ));
    }
}
