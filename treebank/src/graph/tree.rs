use super::Error;
use crate::types::Token;

/// A node of the basic tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeNode {
    parent: Option<usize>,
    children: Vec<usize>,
}

/// The basic dependency tree (or forest, if several tokens have no head) of a sentence.
/// Node `i` is token `i`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    nodes: Vec<TreeNode>,
}

impl Tree {
    /// Builds the tree from the first basic dependency of every token.
    ///
    /// # Errors
    /// - [Error::MissingHead] if a head is outside the sentence.
    /// - [Error::SelfLoop] if a token is its own head.
    pub fn from_tokens(tokens: &[Token]) -> Result<Self, Error> {
        let mut nodes = vec![TreeNode::default(); tokens.len()];

        for (position, token) in tokens.iter().enumerate() {
            if let Some(dep) = token.deps.first() {
                if dep.head >= tokens.len() {
                    return Err(Error::MissingHead {
                        position,
                        head: dep.head,
                    });
                }
                if dep.head == position {
                    return Err(Error::SelfLoop {
                        node: position,
                        relation: dep.relation.clone(),
                    });
                }
                nodes[position].parent = Some(dep.head);
                nodes[dep.head].children.push(position);
            }
        }

        Ok(Tree { nodes })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn parent(&self, node: usize) -> Option<usize> {
        self.nodes.get(node).and_then(|x| x.parent)
    }

    /// Children in ascending position.
    pub fn children(&self, node: usize) -> &[usize] {
        self.nodes
            .get(node)
            .map_or(&[], |x| x.children.as_slice())
    }

    pub fn is_root(&self, node: usize) -> bool {
        self.parent(node).is_none()
    }

    /// All nodes without a parent.
    pub fn roots(&self) -> Vec<usize> {
        (0..self.len()).filter(|x| self.is_root(*x)).collect()
    }

    /// Walks the parent chain, excluding `node` itself.
    pub fn ancestors(&self, node: usize) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            current: node,
            remaining: self.len(),
        }
    }

    /// `node` followed by its ancestors.
    pub fn walk_this_and_up(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        std::iter::once(node).chain(self.ancestors(node))
    }

    /// The topmost ancestor of `node`, or `node` if it is a root.
    pub fn root(&self, node: usize) -> usize {
        self.walk_this_and_up(node).last().unwrap_or(node)
    }

    pub fn depth(&self, node: usize) -> usize {
        self.ancestors(node).count()
    }

    /// Positions of `node` and all its descendants in depth-first preorder.
    pub fn subtree(&self, node: usize) -> Vec<usize> {
        let mut output = Vec::new();
        let mut stack = vec![node];

        while let Some(current) = stack.pop() {
            output.push(current);
            stack.extend(self.children(current).iter().rev());
        }

        output
    }
}

/// Iterator over the ancestors of a node. Bounded by the node count, so a malformed cyclic input
/// terminates.
pub struct Ancestors<'a> {
    tree: &'a Tree,
    current: usize,
    remaining: usize,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let parent = self.tree.parent(self.current)?;
        self.current = parent;
        Some(parent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morph::{Interpretation, Pos};

    fn token(head: Option<usize>) -> Token {
        let token = Token::new("x", Interpretation::new(Pos::X, "x"));
        match head {
            Some(head) => token.with_dep("dep", head),
            None => token,
        }
    }

    //   1
    //  / \
    // 0   3
    //    / \
    //   2   4
    fn tree() -> Tree {
        Tree::from_tokens(&[
            token(Some(1)),
            token(None),
            token(Some(3)),
            token(Some(1)),
            token(Some(3)),
        ])
        .unwrap()
    }

    #[test]
    fn structure() {
        let tree = tree();
        assert_eq!(tree.roots(), vec![1]);
        assert_eq!(tree.children(1), &[0, 3]);
        assert_eq!(tree.children(3), &[2, 4]);
        assert_eq!(tree.parent(4), Some(3));
        assert!(tree.is_root(1));
        assert!(tree.children(7).is_empty());
    }

    #[test]
    fn walks() {
        let tree = tree();
        assert_eq!(tree.ancestors(4).collect::<Vec<_>>(), vec![3, 1]);
        assert_eq!(tree.walk_this_and_up(2).collect::<Vec<_>>(), vec![2, 3, 1]);
        assert_eq!(tree.root(4), 1);
        assert_eq!(tree.root(1), 1);
        assert_eq!(tree.depth(2), 2);
        assert_eq!(tree.subtree(1), vec![1, 0, 3, 2, 4]);
        assert_eq!(tree.subtree(3), vec![3, 2, 4]);
    }

    #[test]
    fn bad_heads() {
        assert_eq!(
            Tree::from_tokens(&[token(Some(5))]),
            Err(Error::MissingHead {
                position: 0,
                head: 5
            })
        );
        assert!(matches!(
            Tree::from_tokens(&[token(Some(0))]),
            Err(Error::SelfLoop { node: 0, .. })
        ));
    }

    #[test]
    fn cycles_terminate() {
        let tree = Tree::from_tokens(&[token(Some(1)), token(Some(0))]).unwrap();
        assert_eq!(tree.ancestors(0).count(), 2);
    }
}
