//! Reusable linguistic predicates over relations, nodes and readings.
//!
//! Relations are compared "universally" with [u_eq]: `acl:relcl` is an `acl`. Node predicates
//! take a [Node], a view of one position that knows the sentence, the basic tree and the
//! enhanced graph.

use crate::tagset::ud::UdPos;

mod agreement;
mod node;
mod predicates;

pub use agreement::*;
pub use node::*;
pub use predicates::*;

/// Whether `relation` is `universal` or one of its subtypes.
pub fn u_eq(relation: &str, universal: &str) -> bool {
    relation == universal
        || (relation.starts_with(universal)
            && relation[universal.len()..].starts_with(':'))
}

/// Whether `relation` [u_eq]s any of `universals`.
pub fn u_eq_some(relation: &str, universals: &[&str]) -> bool {
    universals.iter().any(|x| u_eq(relation, x))
}

pub fn is_numeric_modifier(relation: &str) -> bool {
    u_eq(relation, "nummod") || relation == "det:nummod" || relation == "det:numgov"
}

/// Relations where the numeral governs the case of its head.
pub fn is_governing(relation: &str) -> bool {
    relation == "nummod:gov" || relation == "det:numgov"
}

/// Adds `:rel` to a relation that is not subtyped yet.
pub fn relativize(relation: &str) -> String {
    if relation.contains(':') {
        relation.to_owned()
    } else {
        format!("{}:rel", relation)
    }
}

/// Positions missing between the first and last of the sorted `positions`.
pub fn find_holes(positions: &[usize]) -> Vec<usize> {
    positions
        .windows(2)
        .flat_map(|pair| (pair[0] + 1)..pair[1])
        .collect()
}

pub const SUBJECTS: &[&str] = &["nsubj", "csubj"];
pub const CORE_COMPLEMENTS: &[&str] = &["obj", "ccomp"];
pub const CLAUSAL_MODIFIERS: &[&str] = &["acl", "advcl"];
pub const SUBORDINATE_CLAUSES: &[&str] = &["csubj", "ccomp", "xcomp", "advcl", "acl"];
pub const CLAUSE_RELS: &[&str] = &["csubj", "ccomp", "xcomp", "advcl", "acl", "parataxis"];
pub const MARK_ROOT_RELS: &[&str] = &[
    "csubj",
    "ccomp",
    "xcomp",
    "advcl",
    "acl",
    "parataxis",
    "appos",
];

/// Relations whose subtrees must cover a contiguous range of positions.
pub const CONTINUOUS_REL: &[&str] = &["csubj", "ccomp", "advcl", "acl", "appos", "flat", "fixed"];

/// Relations whose dependents take no dependents of their own, except punctuation. Under
/// `cop` and `aux` a negation or a conditional particle is allowed too.
pub const LEAF_RELATIONS: &[&str] = &["cop", "aux", "expl", "fixed", "flat", "goeswith", "punct"];

/// Relations whose dependent must follow its head.
pub const RIGHT_POINTED_RELATIONS: &[&str] = &["conj", "flat", "fixed", "goeswith"];
/// Relations whose dependent must precede its head.
pub const LEFT_POINTED_RELATIONS: &[&str] = &["cc", "mark"];

pub const POSES_NEVER_ROOT: &[UdPos] = &[
    UdPos::Adp,
    UdPos::Aux,
    UdPos::Cconj,
    UdPos::Sconj,
    UdPos::Part,
    UdPos::Punct,
];

pub const DISCOURSE_DESTINATIONS: &[UdPos] = &[UdPos::Part, UdPos::Intj, UdPos::Adv, UdPos::Sym];

/// Basic relations in use.
pub const ALLOWED_RELATIONS: &[&str] = &[
    "acl",
    "acl:relcl",
    "advcl",
    "advcl:sp",
    "advcl:svc",
    "advmod",
    "advmod:a",
    "advmod:amtgov",
    "amod",
    "appos",
    "aux",
    "aux:pass",
    "case",
    "cc",
    "ccomp",
    "compound",
    "compound:svc",
    "conj",
    "conj:parataxis",
    "conj:svc",
    "cop",
    "csubj",
    "csubj:pass",
    "dep",
    "det",
    "det:numgov",
    "det:nummod",
    "discourse",
    "dislocated",
    "expl",
    "fixed",
    "flat",
    "flat:conjpack",
    "flat:foreign",
    "flat:name",
    "flat:range",
    "flat:repeat",
    "flat:title",
    "goeswith",
    "iobj",
    "list",
    "mark",
    "nmod",
    "nsubj",
    "nsubj:pass",
    "nummod",
    "nummod:gov",
    "obj",
    "obl",
    "obl:agent",
    "orphan",
    "parataxis",
    "parataxis:discourse",
    "parataxis:newsent",
    "parataxis:thatis",
    "punct",
    "reparandum",
    "vocative",
    "xcomp",
    "xcomp:sp",
];

pub const COPULA_LEMMAS: &[&str] = &["бути", "бувати", "являти", "становити"];
pub const AUX_LEMMAS: &[&str] = &["бути", "бувати", "б", "би", "будучи", "бувши"];
pub const CONDITIONAL_AUX_LEMMAS: &[&str] = &["б", "би"];
pub const EXPL_FORMS: &[&str] = &["це", "воно", "то"];

pub const GENDERLESS_PRONOUNS: &[&str] = &[
    "я",
    "ти",
    "ми",
    "ви",
    "вони",
    "себе",
    "ніщо",
    "хтось",
    "ніхто",
    "абихто",
    "дещо",
    "будь-хто",
    "хто-небудь",
];

pub const QUANTITATIVE_ADVERBS: &[&str] = &["мало", "багато", "чимало", "трохи", "небагато"];

pub const TEMPORAL_ACCUSATIVES: &[&str] = &[
    "вечір",
    "година",
    "день",
    "доба",
    "ніч",
    "раз",
    "рік",
    "секунда",
    "тиждень",
    "хвилина",
    "хвилинка",
    "ранок",
    "мить",
    "час",
    "безліч",
    "р.",
];

pub const MONTHS: &[&str] = &[
    "січень",
    "лютий",
    "березень",
    "квітень",
    "травень",
    "червень",
    "липень",
    "серпень",
    "вересень",
    "жовтень",
    "листопад",
    "грудень",
];

pub const CURRENCY_SYMBOLS: &[&str] = &["$", "€", "₴", "£", "¥"];
pub const COMPARATIVE_SCONJS: &[&str] = &["ніж", "як"];
pub const COMPARATIVE_ADVS: &[&str] = &["більш", "менш", "більше", "менше"];

pub const WORDS_WITH_INS_VALENCY: &[&str] = &[
    "керувати",
    "володіти",
    "опікуватися",
    "користуватися",
    "цікавитися",
    "займатися",
    "пишатися",
];

pub const VALENCY_HAVING_ADJECTIVES: &[&str] = &[
    "вдячний",
    "винний",
    "відомий",
    "властивий",
    "гідний",
    "готовий",
    "здатний",
    "повний",
    "потрібний",
    "радий",
    "схожий",
    "певний",
];

pub const INF_VALENCY_ADJECTIVES: &[&str] = &[
    "готовий",
    "здатний",
    "змушений",
    "повинний",
    "радий",
    "спроможний",
    "вільний",
    "зобов’язаний",
];

pub const ADVMOD_PARTICLES: &[&str] = &["не", "ледь", "майже", "лише", "тільки", "навіть", "вже"];
pub const ADVERBS_MODIFYING_NOUNS: &[&str] = &["майже", "саме", "якраз", "особливо", "зокрема"];
pub const SOME_MODAL_ADVS: &[&str] = &["треба", "можна", "необхідно", "потрібно", "слід", "варто"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn universal_equality() {
        assert!(u_eq("acl:relcl", "acl"));
        assert!(u_eq("acl", "acl"));
        assert!(!u_eq("aclx", "acl"));
        assert!(!u_eq("acl", "acl:relcl"));
        assert!(u_eq_some("nsubj:pass", SUBJECTS));
        assert!(!u_eq_some("obj", SUBJECTS));
    }

    #[test]
    fn relation_helpers() {
        assert_eq!(relativize("obj"), "obj:rel");
        assert_eq!(relativize("nsubj:pass"), "nsubj:pass");
        assert!(is_numeric_modifier("nummod:gov"));
        assert!(is_numeric_modifier("det:numgov"));
        assert!(is_governing("det:numgov"));
        assert!(!is_governing("nummod"));
    }

    #[test]
    fn holes() {
        assert_eq!(find_holes(&[1, 2, 5, 6, 8]), vec![3, 4, 7]);
        assert!(find_holes(&[3, 4, 5]).is_empty());
        assert!(find_holes(&[3]).is_empty());
        assert_eq!(find_holes(&[2, 4]), vec![3]);
    }
}
