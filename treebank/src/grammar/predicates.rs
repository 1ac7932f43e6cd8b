use super::*;
use crate::{
    graph::{EnhancedGraph, Endpoint},
    morph::Case,
};

/// Foreign material and unanalyzed tokens.
pub fn is_x_foreign(node: Node) -> bool {
    let interp = node.interp();
    interp.is_x() || interp.is_foreign()
}

pub fn is_subordinate_clause_root(node: Node) -> bool {
    node.rel_is_some(SUBORDINATE_CLAUSES)
}

/// Whether `node` can head a clause.
pub fn can_be_predicate(node: Node) -> bool {
    let interp = node.interp();

    node.token().is_promoted()
        || node.is_root()
        || node.rel_is("parataxis")
        || is_x_foreign(node)
        || interp.is_verbial()
        || node.children().any(|x| x.rel_is_some(SUBJECTS) || x.rel_is("cop"))
}

/// A looser variant of [can_be_predicate] that also accepts every reading which could head a
/// nominal predicate.
pub fn can_be_predicate_loose(node: Node) -> bool {
    let interp = node.interp();
    let nominal = interp.is_nounish() || interp.is_adjective();

    node.token().is_promoted()
        || node.is_root()
        || node.rel_is("parataxis")
        || interp.is_interjection()
        || interp.is_verb()
        || interp.is_converb()
        || interp.is_adverb()
        || (node.has_child("cop")
            && nominal
            && (interp.is_nominative() || interp.is_instrumental() || interp.is_locative()))
        || (nominal && interp.is_nominative())
        || node.rel().map_or(false, |x| CLAUSAL_MODIFIERS.contains(&x))
}

/// Whether `node` can fill a nominal slot like a subject.
pub fn can_act_as_noun(node: Node) -> bool {
    let interp = node.interp();

    interp.is_nounish()
        || (node.token().is_promoted()
            && (interp.is_adjectivish() || interp.is_cardinal_numeral()))
        || node.token().is_graft()
        || is_x_foreign(node)
        || interp.is_sym()
}

/// [can_act_as_noun], extended with relatives heading subordinate clauses and the demonstrative
/// "той".
pub fn can_act_as_noun_for_obj(node: Node) -> bool {
    let interp = node.interp();

    can_act_as_noun(node)
        || (!node.is_root()
            && interp.is_relative()
            && this_or_conj_head(node, |x| {
                x.parent().map_or(false, is_subordinate_clause_root)
            }))
        || (node.lemma() == "той" && interp.is_demonstrative())
}

/// Applies `predicate` to the first node up from `node` that is not attached as `conj`.
pub fn this_or_conj_head<F>(node: Node, predicate: F) -> bool
where
    F: Fn(Node) -> bool,
{
    node.walk_this_and_up()
        .find(|x| !x.rel_is("conj"))
        .map_or(false, predicate)
}

/// A relative pronoun (or its conjunct) inside an `acl:relcl` clause.
pub fn is_relative_in_relcl(node: Node) -> bool {
    if !node.interp().is_relative() {
        return false;
    }
    let clause_root = node
        .walk_this_and_up()
        .find(|x| x.rel_is_some(CLAUSE_RELS) || x.is_root());

    clause_root.map_or(false, |x| x.rel_exact("acl:relcl"))
}

/// The case of `node`, or of the numeral governing it, e.g. the nominative of "п'ять" in
/// "п'ять книжок".
pub fn this_or_governed_case(node: Node) -> Option<Case> {
    node.children()
        .find(|x| x.rel().map_or(false, is_governing))
        .and_then(|x| x.interp().features.case)
        .or(node.interp().features.case)
}

pub fn is_quantitative_adverb_modifier(node: Node) -> bool {
    node.rel_exact("advmod:amtgov")
}

/// A noun quantified by an adverb like "багато".
pub fn is_quantitative_adverb_modified(node: Node) -> bool {
    node.children().any(is_quantitative_adverb_modifier)
}

/// A genitive subject of a quantity expression: "багато людей", "п'ять книжок".
pub fn is_quantificational_nsubj(node: Node) -> bool {
    node.rel_is("nsubj")
        && node.interp().is_genitive()
        && node.children().any(|x| {
            x.rel().map_or(false, is_numeric_modifier)
                || is_quantitative_adverb_modifier(x)
                || x.lemma_in(QUANTITATIVE_ADVERBS)
        })
}

pub fn is_negated(node: Node) -> bool {
    node.children()
        .any(|x| x.interp().is_negative() && (x.rel_is("advmod") || x.rel_is("discourse")))
}

/// An infinitive that is not part of an analytic future like "буду читати".
pub fn is_infinitive_analytically(node: Node) -> bool {
    node.interp().is_infinitive()
        && !node
            .children()
            .any(|x| x.rel_is("aux") && x.interp().is_future())
}

pub fn has_copula(node: Node) -> bool {
    node.has_child("cop")
}

/// A non-verbal word heading a clause with a copula.
pub fn is_nominal_predicate(node: Node) -> bool {
    has_copula(node) && !node.interp().is_verbial()
}

/// Whether `node` heads a non-verbal predicate in the enhanced graph, i.e. has an outgoing
/// `cop` arrow.
pub fn is_nonverbal_predicate_enhanced(graph: &EnhancedGraph, node: usize) -> bool {
    graph
        .outgoing_arrows(Endpoint::Node(node))
        .any(|x| u_eq(&x.relation, "cop"))
}

/// Whether a relative pronoun is attached inside the clause of `node`, without descending into
/// nested clauses.
pub fn has_own_relative(node: Node) -> bool {
    let mut stack = vec![node];

    while let Some(current) = stack.pop() {
        if current.interp().is_relative() {
            return true;
        }
        stack.extend(current.children().filter(|x| !x.rel_is_some(CLAUSE_RELS)));
    }

    false
}

/// Whether `node` can head an adnominal clause.
pub fn is_feasible_acl_root(node: Node) -> bool {
    can_be_predicate(node)
        || node.interp().is_participle()
        || node.interp().is_infinitive()
        || node.has_child("mark")
        || has_own_relative(node)
}

/// The "день у день" construction: a noun repeated under itself with a preposition.
pub fn is_den_u_den(node: Node) -> bool {
    node.parent()
        .map_or(false, |x| x.lemma() == node.lemma() && node.has_child("case"))
}

/// A conjunct with neither a coordinating conjunction nor punctuation before it.
pub fn is_conj_without_cc_or_punct(node: Node) -> bool {
    node.rel_is("conj")
        && !node.rel_exact("conj:svc")
        && !node.children().any(|x| {
            x.rel_is("cc") || (x.rel_is("punct") && x.index() < node.index())
        })
}

/// Forms like "2,5" that a tokenizer may split.
pub fn can_be_decimal_fraction(node: Node) -> bool {
    let mut parts = node.form().splitn(2, |x| x == ',' || x == '.');

    match (parts.next(), parts.next()) {
        (Some(whole), Some(fraction)) => {
            !whole.is_empty()
                && !fraction.is_empty()
                && whole.chars().all(|x| x.is_ascii_digit())
                && fraction.chars().all(|x| x.is_ascii_digit())
        }
        _ => false,
    }
}

/// A converb attached as an adnominal clause.
pub fn is_adverbial_acl(node: Node) -> bool {
    node.rel_is("acl") && node.interp().is_converb()
}

/// "треба", "можна" and the like heading a clausal subject.
pub fn is_modal_adv(node: Node) -> bool {
    node.interp().is_adverb() && node.lemma_in(SOME_MODAL_ADVS) && node.has_child("csubj")
}

pub fn is_valency_having_adjective(node: Node) -> bool {
    node.interp().is_adjective() && node.lemma_in(VALENCY_HAVING_ADJECTIVES)
}

pub fn is_inf_valency_adjective(node: Node) -> bool {
    node.interp().is_adjective() && node.lemma_in(INF_VALENCY_ADJECTIVES)
}

pub fn is_advmod_particle(node: Node) -> bool {
    node.interp().is_particle() && node.lemma_in(ADVMOD_PARTICLES)
}

/// Accusative time spans: "цілий день", "щороку".
pub fn is_temporal_accusative(node: Node) -> bool {
    node.interp().is_accusative() && node.lemma_in(TEMPORAL_ACCUSATIVES)
}

/// A comparative "як"/"ніж" attached to `node`.
pub fn has_comparative_marker(node: Node) -> bool {
    node.children()
        .any(|x| (x.rel_is("mark") || x.rel_is("case")) && x.lemma_in(COMPARATIVE_SCONJS))
}

/// An auxiliary verb attached with anything but `cop` or `aux`.
pub fn is_aux_with_no_cop_aux(node: Node) -> bool {
    node.interp().is_auxiliary() && !node.is_root() && !node.rel_is_some(&["cop", "aux"])
}

/// A nominal introduced by "як": "працює як лікар".
pub fn can_be_as_something_for_xcomp(node: Node) -> bool {
    let interp = node.interp();

    (interp.is_nounish() || interp.is_adjective())
        && node
            .children()
            .any(|x| x.rel_is("mark") && x.lemma() == "як")
}

/// Whether a "?" hangs off `node` directly.
pub fn has_question_mark(node: Node) -> bool {
    node.children().any(|x| x.lemma().contains('?'))
}

pub fn is_month(node: Node) -> bool {
    node.lemma_in(MONTHS)
}

pub fn is_currency_symbol(node: Node) -> bool {
    CURRENCY_SYMBOLS.contains(&node.form())
}
