use super::{u_eq, u_eq_some};
use crate::{
    graph::{Arrow, EnhancedGraph, Endpoint, Tree},
    morph::Interpretation,
    tagset::ud::{self, UdPos},
    types::{Sentence, Token},
};

/// Everything a predicate may look at: the sentence with its basic tree and enhanced graph.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    pub sentence: &'a Sentence,
    pub tree: &'a Tree,
    pub graph: &'a EnhancedGraph,
}

impl<'a> Context<'a> {
    pub fn new(sentence: &'a Sentence, tree: &'a Tree, graph: &'a EnhancedGraph) -> Self {
        Context {
            sentence,
            tree,
            graph,
        }
    }

    pub fn len(&self) -> usize {
        self.sentence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentence.is_empty()
    }

    /// Word nodes in sentence order, skipping structure markers.
    pub fn words(&self) -> impl Iterator<Item = Node<'a>> + 'a {
        self.nodes().filter(|x| x.token().is_word())
    }

    /// The node at `index`. `index` must be a position of the sentence.
    pub fn node(&self, index: usize) -> Node<'a> {
        Node {
            context: *self,
            index,
        }
    }

    /// All nodes in sentence order.
    pub fn nodes(&self) -> impl Iterator<Item = Node<'a>> + 'a {
        let context = *self;
        (0..self.len()).map(move |x| context.node(x))
    }
}

/// A position in a [Context], with navigation over the basic tree.
#[derive(Debug, Clone, Copy)]
pub struct Node<'a> {
    context: Context<'a>,
    index: usize,
}

impl<'a> PartialEq for Node<'a> {
    fn eq(&self, other: &Node<'a>) -> bool {
        self.index == other.index
    }
}

impl<'a> Node<'a> {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn context(&self) -> Context<'a> {
        self.context
    }

    pub fn token(&self) -> &'a Token {
        &self.context.sentence[self.index]
    }

    pub fn interp(&self) -> &'a Interpretation {
        self.token().interp()
    }

    pub fn form(&self) -> &'a str {
        &self.token().form
    }

    pub fn lemma(&self) -> &'a str {
        &self.interp().lemma
    }

    /// Whether the lemma is one of `lemmas`.
    pub fn lemma_in(&self, lemmas: &[&str]) -> bool {
        lemmas.contains(&self.lemma())
    }

    /// The basic relation to the parent, `None` for a root.
    pub fn rel(&self) -> Option<&'a str> {
        self.token().relation()
    }

    /// Whether the basic relation [u_eq]s `universal`.
    pub fn rel_is(&self, universal: &str) -> bool {
        self.rel().map_or(false, |x| u_eq(x, universal))
    }

    pub fn rel_is_some(&self, universals: &[&str]) -> bool {
        self.rel().map_or(false, |x| u_eq_some(x, universals))
    }

    /// Whether the basic relation is exactly `relation`.
    pub fn rel_exact(&self, relation: &str) -> bool {
        self.rel() == Some(relation)
    }

    /// The UD part of speech of the chosen reading, if it converts.
    pub fn ud_pos(&self) -> Option<UdPos> {
        ud::to_ud(self.interp()).ok().map(|x| x.pos)
    }

    pub fn parent(&self) -> Option<Node<'a>> {
        self.context
            .tree
            .parent(self.index)
            .map(|x| self.context.node(x))
    }

    pub fn is_root(&self) -> bool {
        self.context.tree.is_root(self.index)
    }

    pub fn children(&self) -> impl Iterator<Item = Node<'a>> + 'a {
        let context = self.context;
        context
            .tree
            .children(self.index)
            .iter()
            .map(move |x| context.node(*x))
    }

    pub fn has_children(&self) -> bool {
        !self.context.tree.children(self.index).is_empty()
    }

    /// Whether a child is attached with a relation [u_eq] to `universal`.
    pub fn has_child(&self, universal: &str) -> bool {
        self.children().any(|x| x.rel_is(universal))
    }

    pub fn has_child_exact(&self, relation: &str) -> bool {
        self.children().any(|x| x.rel_exact(relation))
    }

    /// Other children of the parent.
    pub fn siblings(&self) -> impl Iterator<Item = Node<'a>> + 'a {
        let index = self.index;
        self.parent()
            .into_iter()
            .flat_map(|x| x.children())
            .filter(move |x| x.index != index)
    }

    pub fn has_sibling(&self, universal: &str) -> bool {
        self.siblings().any(|x| x.rel_is(universal))
    }

    pub fn ancestors(&self) -> impl Iterator<Item = Node<'a>> + 'a {
        let context = self.context;
        context
            .tree
            .ancestors(self.index)
            .map(move |x| context.node(x))
    }

    /// This node followed by its ancestors.
    pub fn walk_this_and_up(&self) -> impl Iterator<Item = Node<'a>> + 'a {
        std::iter::once(*self).chain(self.ancestors())
    }

    /// Positions of this node and its descendants, sorted.
    pub fn subtree(&self) -> Vec<usize> {
        let mut positions = self.context.tree.subtree(self.index);
        positions.sort_unstable();
        positions
    }

    /// The topmost ancestor.
    pub fn root(&self) -> Node<'a> {
        self.context.node(self.context.tree.root(self.index))
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.context.len()
    }

    /// The node at `self.index + offset`, if it exists.
    pub fn offset(&self, offset: isize) -> Option<Node<'a>> {
        let index = self.index as isize + offset;
        if index < 0 || index as usize >= self.context.len() {
            None
        } else {
            Some(self.context.node(index as usize))
        }
    }

    /// Enhanced arrows ending at this node.
    pub fn incoming_arrows(&self) -> impl Iterator<Item = &'a Arrow> + 'a {
        self.context.graph.incoming_arrows(self.index)
    }

    /// Enhanced arrows starting at this node.
    pub fn outgoing_arrows(&self) -> impl Iterator<Item = &'a Arrow> + 'a {
        self.context
            .graph
            .outgoing_arrows(Endpoint::Node(self.index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morph::Pos;

    #[test]
    fn navigation() {
        // "Мама миє раму ."
        let sentence = Sentence::new(
            "s",
            vec![
                Token::new("Мама", Interpretation::new(Pos::Noun, "мама")).with_dep("nsubj", 1),
                Token::new("миє", Interpretation::new(Pos::Verb, "мити")),
                Token::new("раму", Interpretation::new(Pos::Noun, "рама")).with_dep("obj", 1),
                Token::new(".", Interpretation::new(Pos::Punctuation, ".")).with_dep("punct", 1),
            ],
        );
        let tree = Tree::from_tokens(&sentence.tokens).unwrap();
        let graph = EnhancedGraph::new(sentence.len());
        let context = Context::new(&sentence, &tree, &graph);

        let verb = context.node(1);
        assert!(verb.is_root());
        assert!(verb.has_child("nsubj"));
        assert!(!verb.has_child("iobj"));
        assert_eq!(verb.children().count(), 3);
        assert_eq!(verb.subtree(), vec![0, 1, 2, 3]);

        let subject = context.node(0);
        assert_eq!(subject.parent().map(|x| x.index()), Some(1));
        assert!(subject.has_sibling("obj"));
        assert_eq!(subject.root().index(), 1);
        assert!(subject.is_first());
        assert!(context.node(3).is_last());
        assert_eq!(subject.offset(-1), None);
        assert_eq!(subject.walk_this_and_up().count(), 2);
        assert_eq!(verb.ud_pos(), Some(UdPos::Verb));
    }
}
