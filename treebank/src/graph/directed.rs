use super::Error;
use serde::{Deserialize, Serialize};
use std::{collections::VecDeque, fmt};

/// The start of an arrow: a node or the virtual root above all nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Endpoint {
    Root,
    Node(usize),
}

impl Endpoint {
    /// The node position, `None` for the root.
    pub fn node(&self) -> Option<usize> {
        match self {
            Endpoint::Root => None,
            Endpoint::Node(x) => Some(*x),
        }
    }
}

impl From<usize> for Endpoint {
    fn from(node: usize) -> Self {
        Endpoint::Node(node)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Root => write!(f, "root"),
            Endpoint::Node(x) => write!(f, "{}", x),
        }
    }
}

/// Identifies an arrow within its graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ArrowId(usize);

impl ArrowId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A labeled arrow from a head to a dependent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Arrow {
    pub start: Endpoint,
    pub end: usize,
    pub relation: String,
}

/// What to do when adding an arrow whose start, end and relation already exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DupePolicy {
    /// Add a second arrow.
    Duplicate,
    /// Keep and return the existing arrow.
    Ignore,
    /// Fail with [Error::DuplicateArrow].
    Raise,
}

/// The enhanced multigraph. Arrows live in an arena and nodes keep the ids of their incoming
/// and outgoing arrows in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnhancedGraph {
    arrows: Vec<Arrow>,
    incoming: Vec<Vec<ArrowId>>,
    outgoing: Vec<Vec<ArrowId>>,
    root_outgoing: Vec<ArrowId>,
}

impl EnhancedGraph {
    /// Creates a graph with `n` nodes and no arrows.
    pub fn new(n: usize) -> Self {
        EnhancedGraph {
            arrows: Vec::new(),
            incoming: vec![Vec::new(); n],
            outgoing: vec![Vec::new(); n],
            root_outgoing: Vec::new(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.incoming.len()
    }

    /// The number of arrows.
    pub fn len(&self) -> usize {
        self.arrows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arrows.is_empty()
    }

    pub fn arrow(&self, id: ArrowId) -> &Arrow {
        &self.arrows[id.0]
    }

    /// All arrows with their ids in insertion order.
    pub fn arrows(&self) -> impl Iterator<Item = (ArrowId, &Arrow)> {
        self.arrows.iter().enumerate().map(|(i, x)| (ArrowId(i), x))
    }

    pub fn incoming(&self, node: usize) -> &[ArrowId] {
        self.incoming.get(node).map_or(&[], |x| x.as_slice())
    }

    pub fn outgoing(&self, endpoint: Endpoint) -> &[ArrowId] {
        match endpoint {
            Endpoint::Root => &self.root_outgoing,
            Endpoint::Node(node) => self.outgoing.get(node).map_or(&[], |x| x.as_slice()),
        }
    }

    pub fn incoming_arrows(&self, node: usize) -> impl Iterator<Item = &Arrow> {
        self.incoming(node).iter().map(move |x| self.arrow(*x))
    }

    pub fn outgoing_arrows(&self, endpoint: Endpoint) -> impl Iterator<Item = &Arrow> {
        self.outgoing(endpoint).iter().map(move |x| self.arrow(*x))
    }

    pub fn has_incoming(&self, node: usize) -> bool {
        !self.incoming(node).is_empty()
    }

    /// Finds the first arrow with the given start, end and relation.
    pub fn find(&self, start: Endpoint, end: usize, relation: &str) -> Option<ArrowId> {
        self.incoming(end)
            .iter()
            .copied()
            .find(|id| {
                let arrow = self.arrow(*id);
                arrow.start == start && arrow.relation == relation
            })
    }

    pub fn has_arrow(&self, start: Endpoint, end: usize, relation: &str) -> bool {
        self.find(start, end, relation).is_some()
    }

    /// Adds an arrow from `start` to `end`.
    ///
    /// # Errors
    /// - [Error::MissingNode] if an endpoint is outside the graph.
    /// - [Error::SelfLoop] if `start == end` and `reject_self_loop` is set.
    /// - [Error::DuplicateArrow] if the arrow exists and the policy is [DupePolicy::Raise].
    pub fn add_arrow<S: Into<String>>(
        &mut self,
        start: Endpoint,
        end: usize,
        relation: S,
        policy: DupePolicy,
        reject_self_loop: bool,
    ) -> Result<ArrowId, Error> {
        let relation = relation.into();

        if end >= self.node_count() {
            return Err(Error::MissingNode(end));
        }
        if let Endpoint::Node(node) = start {
            if node >= self.node_count() {
                return Err(Error::MissingNode(node));
            }
            if node == end && reject_self_loop {
                return Err(Error::SelfLoop { node, relation });
            }
        }

        if let Some(existing) = self.find(start, end, &relation) {
            match policy {
                DupePolicy::Ignore => return Ok(existing),
                DupePolicy::Raise => {
                    return Err(Error::DuplicateArrow {
                        start,
                        end,
                        relation,
                    })
                }
                DupePolicy::Duplicate => {}
            }
        }

        let id = ArrowId(self.arrows.len());
        self.arrows.push(Arrow {
            start,
            end,
            relation,
        });
        self.incoming[end].push(id);
        match start {
            Endpoint::Root => self.root_outgoing.push(id),
            Endpoint::Node(node) => self.outgoing[node].push(id),
        }

        Ok(id)
    }

    /// Follows incoming arrows upwards, at each step taking the first one `selector` accepts.
    /// Stops at the root, at a node with no accepted arrow or when a node repeats.
    pub fn walk_back<F>(&self, node: usize, selector: F) -> WalkBack<'_, F>
    where
        F: FnMut(&Arrow) -> bool,
    {
        WalkBack {
            graph: self,
            current: Some(node),
            visited: vec![node],
            selector,
        }
    }

    /// Breadth-first enumeration of arrow chains leaving `node`.
    ///
    /// Each new chain is checked by its last arrow: if `cut_and_filter` accepts it, the chain is
    /// dropped; otherwise it is yielded, and if `cut_and_include` accepts it, it is not extended
    /// further. Chains never revisit a node.
    pub fn paths_forward<F, G>(
        &self,
        node: usize,
        cut_and_filter: F,
        cut_and_include: G,
    ) -> Paths<'_, F, G>
    where
        F: Fn(&Arrow) -> bool,
        G: Fn(&Arrow) -> bool,
    {
        Paths::new(
            self,
            node,
            Direction::Forward,
            cut_and_filter,
            cut_and_include,
        )
    }

    /// Like [paths_forward](EnhancedGraph::paths_forward), following arrows against their
    /// direction.
    pub fn paths_backward<F, G>(
        &self,
        node: usize,
        cut_and_filter: F,
        cut_and_include: G,
    ) -> Paths<'_, F, G>
    where
        F: Fn(&Arrow) -> bool,
        G: Fn(&Arrow) -> bool,
    {
        Paths::new(
            self,
            node,
            Direction::Backward,
            cut_and_filter,
            cut_and_include,
        )
    }
}

/// See [EnhancedGraph::walk_back].
pub struct WalkBack<'a, F> {
    graph: &'a EnhancedGraph,
    current: Option<usize>,
    visited: Vec<usize>,
    selector: F,
}

impl<'a, F> Iterator for WalkBack<'a, F>
where
    F: FnMut(&Arrow) -> bool,
{
    type Item = ArrowId;

    fn next(&mut self) -> Option<ArrowId> {
        let current = self.current.take()?;
        let graph = self.graph;
        let selector = &mut self.selector;
        let id = graph
            .incoming(current)
            .iter()
            .copied()
            .find(|id| selector(graph.arrow(*id)))?;

        if let Endpoint::Node(start) = graph.arrow(id).start {
            if !self.visited.contains(&start) {
                self.visited.push(start);
                self.current = Some(start);
            }
        }

        Some(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// A lazy breadth-first iterator over arrow chains. Not restartable: once exhausted it stays
/// exhausted.
pub struct Paths<'a, F, G> {
    graph: &'a EnhancedGraph,
    direction: Direction,
    origin: usize,
    queue: VecDeque<Vec<ArrowId>>,
    cut_and_filter: F,
    cut_and_include: G,
}

impl<'a, F, G> Paths<'a, F, G>
where
    F: Fn(&Arrow) -> bool,
    G: Fn(&Arrow) -> bool,
{
    fn new(
        graph: &'a EnhancedGraph,
        origin: usize,
        direction: Direction,
        cut_and_filter: F,
        cut_and_include: G,
    ) -> Self {
        let mut paths = Paths {
            graph,
            direction,
            origin,
            queue: VecDeque::new(),
            cut_and_filter,
            cut_and_include,
        };
        paths.extend(&[], Some(origin));
        paths
    }

    /// The node an arrow leads to in the walking direction.
    fn far_end(&self, id: ArrowId) -> Option<usize> {
        let arrow = self.graph.arrow(id);
        match self.direction {
            Direction::Forward => Some(arrow.end),
            Direction::Backward => arrow.start.node(),
        }
    }

    fn extend(&mut self, path: &[ArrowId], node: Option<usize>) {
        let node = match node {
            Some(node) => node,
            None => return,
        };
        let graph = self.graph;
        let next = match self.direction {
            Direction::Forward => graph.outgoing(Endpoint::Node(node)),
            Direction::Backward => graph.incoming(node),
        };

        for id in next {
            let revisits = match self.far_end(*id) {
                Some(far) => {
                    far == self.origin || path.iter().any(|x| self.far_end(*x) == Some(far))
                }
                None => false,
            };
            if revisits {
                continue;
            }
            let mut extended = path.to_vec();
            extended.push(*id);
            self.queue.push_back(extended);
        }
    }
}

impl<'a, F, G> Iterator for Paths<'a, F, G>
where
    F: Fn(&Arrow) -> bool,
    G: Fn(&Arrow) -> bool,
{
    type Item = Vec<ArrowId>;

    fn next(&mut self) -> Option<Vec<ArrowId>> {
        loop {
            let path = self.queue.pop_front()?;
            let last = *path.last()?;
            let graph = self.graph;
            let arrow = graph.arrow(last);

            if (self.cut_and_filter)(arrow) {
                continue;
            }
            if !(self.cut_and_include)(arrow) {
                let far = self.far_end(last);
                self.extend(&path, far);
            }
            return Some(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(graph: &mut EnhancedGraph, start: usize, end: usize, relation: &str) -> ArrowId {
        graph
            .add_arrow(Endpoint::Node(start), end, relation, DupePolicy::Raise, true)
            .unwrap()
    }

    #[test]
    fn dupe_policies() {
        let mut graph = EnhancedGraph::new(3);
        let id = add(&mut graph, 0, 1, "obj");

        let again = graph
            .add_arrow(Endpoint::Node(0), 1, "obj", DupePolicy::Ignore, true)
            .unwrap();
        assert_eq!(again, id);
        assert_eq!(graph.len(), 1);

        assert!(matches!(
            graph.add_arrow(Endpoint::Node(0), 1, "obj", DupePolicy::Raise, true),
            Err(Error::DuplicateArrow { .. })
        ));

        let duplicate = graph
            .add_arrow(Endpoint::Node(0), 1, "obj", DupePolicy::Duplicate, true)
            .unwrap();
        assert_ne!(duplicate, id);
        assert_eq!(graph.len(), 2);

        // a different label is a different arrow
        add(&mut graph, 0, 1, "iobj");
        assert_eq!(graph.incoming(1).len(), 3);
    }

    #[test]
    fn self_loops() {
        let mut graph = EnhancedGraph::new(2);
        assert_eq!(
            graph.add_arrow(Endpoint::Node(1), 1, "ref", DupePolicy::Raise, true),
            Err(Error::SelfLoop {
                node: 1,
                relation: "ref".into()
            })
        );
        assert!(graph
            .add_arrow(Endpoint::Node(1), 1, "ref", DupePolicy::Raise, false)
            .is_ok());
        assert_eq!(
            graph.add_arrow(Endpoint::Node(0), 2, "obj", DupePolicy::Raise, true),
            Err(Error::MissingNode(2))
        );
    }

    #[test]
    fn root_arrows() {
        let mut graph = EnhancedGraph::new(2);
        graph
            .add_arrow(Endpoint::Root, 0, "root", DupePolicy::Raise, true)
            .unwrap();
        assert_eq!(graph.outgoing(Endpoint::Root).len(), 1);
        assert!(graph.has_arrow(Endpoint::Root, 0, "root"));
        assert!(!graph.has_incoming(1));
    }

    #[test]
    fn walks_back() {
        // 0 -conj-> 1 -conj-> 2
        let mut graph = EnhancedGraph::new(3);
        let a = add(&mut graph, 0, 1, "conj");
        let b = add(&mut graph, 1, 2, "conj");

        let chain: Vec<_> = graph.walk_back(2, |x| x.relation == "conj").collect();
        assert_eq!(chain, vec![b, a]);
        assert_eq!(graph.walk_back(2, |x| x.relation == "obj").count(), 0);
    }

    #[test]
    fn walk_back_is_cycle_safe() {
        let mut graph = EnhancedGraph::new(2);
        add(&mut graph, 0, 1, "conj");
        add(&mut graph, 1, 0, "conj");
        assert_eq!(graph.walk_back(1, |_| true).count(), 2);
    }

    #[test]
    fn paths() {
        // 0 -acl:relcl-> 1 -nsubj-> 2
        //                1 -acl:relcl-> 3 -obj-> 4
        let mut graph = EnhancedGraph::new(5);
        add(&mut graph, 0, 1, "acl:relcl");
        let nsubj = add(&mut graph, 1, 2, "nsubj");
        let inner = add(&mut graph, 1, 3, "acl:relcl");
        add(&mut graph, 3, 4, "obj");

        let all: Vec<_> = graph.paths_forward(1, |_| false, |_| false).collect();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0], vec![nsubj]);

        let filtered: Vec<_> = graph
            .paths_forward(1, |x| x.relation == "acl:relcl", |_| false)
            .collect();
        assert_eq!(filtered, vec![vec![nsubj]]);

        let included: Vec<_> = graph
            .paths_forward(1, |_| false, |x| x.relation == "acl:relcl")
            .collect();
        assert_eq!(included, vec![vec![nsubj], vec![inner]]);

        let backward: Vec<_> = graph.paths_backward(4, |_| false, |_| false).collect();
        assert_eq!(backward.len(), 3);
        assert_eq!(graph.arrow(*backward[2].last().unwrap()).start, Endpoint::Node(0));
    }

    #[test]
    fn paths_are_not_restartable() {
        let mut graph = EnhancedGraph::new(2);
        add(&mut graph, 0, 1, "obj");
        let mut paths = graph.paths_forward(0, |_| false, |_| false);
        assert!(paths.next().is_some());
        assert!(paths.next().is_none());
        assert!(paths.next().is_none());
    }
}
