use super::{id::Index, Validate};
use crate::{
    grammar::{find_holes, u_eq, Context, Node},
    types::{Problem, TokenTag},
};

/// Requires the subtrees of some relations to cover a contiguous span of the sentence.
///
/// A token inside the span that belongs elsewhere is a hole. Holes under another root, holes
/// tagged with (or inside a subtree tagged with) the escape tag and elided tokens are allowed.
#[derive(Debug, Clone)]
pub struct ContinuityRule {
    id: Index,
    enabled: bool,
    relations: Vec<String>,
    escape: TokenTag,
}

impl ContinuityRule {
    pub fn new<S: AsRef<str>>(id: Index, relations: &[S], escape: TokenTag) -> Self {
        ContinuityRule {
            id,
            enabled: true,
            relations: relations.iter().map(|x| x.as_ref().to_owned()).collect(),
            escape,
        }
    }

    fn relation_of(&self, node: Node) -> Option<&str> {
        let rel = node.rel()?;
        self.relations
            .iter()
            .find(|x| u_eq(rel, x))
            .map(|x| x.as_str())
    }

    fn is_alien(&self, node: Node, hole: Node) -> bool {
        !hole.token().is_elided()
            && hole.root() == node.root()
            && !hole
                .walk_this_and_up()
                .any(|x| x.token().has_tag(&self.escape))
    }
}

impl Validate for ContinuityRule {
    fn id(&self) -> &Index {
        &self.id
    }

    fn enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn apply(&self, context: &Context) -> Vec<Problem> {
        let mut problems = Vec::new();

        for node in context.words() {
            let relation = match self.relation_of(node) {
                Some(x) => x,
                None => continue,
            };
            // "треба було йти": the infinitive of an adverbial predicate may wrap around it
            if node.interp().is_infinitive()
                && node.parent().map_or(false, |x| x.interp().is_adverb())
            {
                continue;
            }

            let holes: Vec<usize> = find_holes(&node.subtree())
                .into_iter()
                .filter(|x| self.is_alien(node, context.node(*x)))
                .collect();

            if !holes.is_empty() {
                problems.push(Problem::new(
                    format!("чужі токени всередині {}", relation),
                    holes,
                ));
            }
        }

        problems
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        graph::{EnhancedGraph, Tree},
        morph::{Interpretation, Pos},
        types::{Sentence, Token},
    };

    fn word(form: &str, pos: Pos) -> Token {
        Token::new(form, Interpretation::new(pos, form))
    }

    fn problems(sentence: &Sentence) -> Vec<Problem> {
        let tree = Tree::from_tokens(&sentence.tokens).unwrap();
        let graph = EnhancedGraph::new(sentence.len());
        let rule = ContinuityRule::new(
            Index::new("continuity", "subtree", 0),
            &["acl", "advcl"],
            TokenTag::LegalAlien,
        );
        rule.apply(&Context::new(sentence, &tree, &graph))
    }

    #[test]
    fn finds_aliens() {
        // acl at 1 with a dependent at 3; the verb at 2 belongs to the root clause
        let sentence = Sentence::new(
            "s",
            vec![
                word("книжка", Pos::Noun).with_dep("nsubj", 2),
                word("прочитана", Pos::Adjective).with_dep("acl", 0),
                word("лежить", Pos::Verb),
                word("мною", Pos::Noun).with_dep("obl", 1),
            ],
        );
        assert_eq!(
            problems(&sentence),
            vec![Problem::new("чужі токени всередині acl", vec![2])]
        );

        let mut tagged = sentence;
        tagged.tokens[2].tags.insert(TokenTag::LegalAlien);
        assert!(problems(&tagged).is_empty());
    }

    #[test]
    fn elided_tokens_are_not_aliens() {
        let sentence = Sentence::new(
            "s",
            vec![
                word("книжка", Pos::Noun).with_dep("nsubj", 2),
                word("прочитана", Pos::Adjective).with_dep("acl", 0),
                word("лежить", Pos::Verb).with_tag(TokenTag::Elided),
                word("мною", Pos::Noun).with_dep("obl", 1),
            ],
        );
        assert!(problems(&sentence).is_empty());
    }

    #[test]
    fn escape_tag_covers_its_subtree() {
        let mut sentence = Sentence::new(
            "s",
            vec![
                word("книжка", Pos::Noun).with_dep("nsubj", 3),
                word("прочитана", Pos::Adjective).with_dep("acl", 0),
                word("вже", Pos::Adverb).with_dep("advmod", 4),
                word("лежить", Pos::Verb),
                word("давно", Pos::Adverb).with_dep("advmod", 3),
                word("мною", Pos::Noun).with_dep("obl", 1),
            ],
        );
        assert_eq!(
            problems(&sentence),
            vec![Problem::new("чужі токени всередині acl", vec![2, 3, 4])]
        );

        sentence.tokens[3].tags.insert(TokenTag::LegalAlien);
        assert!(problems(&sentence).is_empty());
    }

    #[test]
    fn contiguous_subtrees_pass() {
        let sentence = Sentence::new(
            "s",
            vec![
                word("книжка", Pos::Noun).with_dep("nsubj", 3),
                word("прочитана", Pos::Adjective).with_dep("acl", 0),
                word("мною", Pos::Noun).with_dep("obl", 1),
                word("лежить", Pos::Verb),
            ],
        );
        assert!(problems(&sentence).is_empty());
    }
}
