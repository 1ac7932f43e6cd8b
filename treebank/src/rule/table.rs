use super::{id::Index, Validate};
use crate::{
    grammar::{is_x_foreign, u_eq, Context, Node},
    types::Problem,
};
use std::fmt;

/// One end of a relation: what the node there must be, and how to tell.
#[derive(Clone)]
pub struct Side {
    /// Completes "`{relation}` не ...", e.g. "з іменника".
    pub message: String,
    pub check: fn(Node<'_>) -> bool,
}

impl fmt::Debug for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Side")
            .field("message", &self.message)
            .finish()
    }
}

/// A row of the relation table: the nodes a relation may connect.
///
/// A relation written with a trailing colon (`det:`) matches only itself; otherwise subtypes
/// match too (`obl` covers `obl:agent`). The origin is checked on the head and the destination
/// on the dependent; foreign words pass both checks.
#[derive(Debug, Clone)]
pub struct TableRule {
    id: Index,
    enabled: bool,
    relation: String,
    exact: bool,
    origin: Option<Side>,
    destination: Option<Side>,
}

impl TableRule {
    pub fn new(id: Index, relation: &str) -> Self {
        let exact = relation.ends_with(':');

        TableRule {
            id,
            enabled: true,
            relation: relation.trim_end_matches(':').to_owned(),
            exact,
            origin: None,
            destination: None,
        }
    }

    /// Sets the check on the head.
    pub fn origin<S: Into<String>>(mut self, message: S, check: fn(Node<'_>) -> bool) -> Self {
        self.origin = Some(Side {
            message: message.into(),
            check,
        });
        self
    }

    /// Sets the check on the dependent.
    pub fn destination<S: Into<String>>(
        mut self,
        message: S,
        check: fn(Node<'_>) -> bool,
    ) -> Self {
        self.destination = Some(Side {
            message: message.into(),
            check,
        });
        self
    }

    pub fn relation(&self) -> &str {
        &self.relation
    }

    fn matches(&self, node: Node) -> bool {
        node.rel().map_or(false, |x| {
            if self.exact {
                x == self.relation
            } else {
                u_eq(x, &self.relation)
            }
        })
    }

    fn problem(&self, side: &Side, position: usize) -> Problem {
        Problem::at(format!("{} не {}", self.relation, side.message), position)
    }
}

impl Validate for TableRule {
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

        for node in context.words().filter(|x| self.matches(*x)) {
            if let (Some(origin), Some(head)) = (&self.origin, node.parent()) {
                if !is_x_foreign(head) && !(origin.check)(head) {
                    problems.push(self.problem(origin, node.index()));
                }
            }
            if let Some(destination) = &self.destination {
                if !is_x_foreign(node) && !(destination.check)(node) {
                    problems.push(self.problem(destination, node.index()));
                }
            }
        }

        problems
    }
}
