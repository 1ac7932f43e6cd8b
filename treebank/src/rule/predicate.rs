use super::{id::Index, Validate};
use crate::{
    grammar::{Context, Node},
    graph::Arrow,
    types::Problem,
};
use std::fmt;

/// What a [PredicateRule] looks at. Every check returns whether it found a violation.
#[derive(Clone, Copy)]
pub enum Check {
    /// Checks every word.
    Node(fn(Node<'_>) -> bool),
    /// Checks every word and names what is wrong. The name replaces `{}` in the message.
    Describe(fn(Node<'_>) -> Option<String>),
    /// Checks every enhanced arrow. Problems point at the dependent.
    Arrow(fn(&Context<'_>, &Arrow) -> bool),
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Check::Node(_) => "Node",
            Check::Describe(_) => "Describe",
            Check::Arrow(_) => "Arrow",
        };
        write!(f, "Check::{}", kind)
    }
}

/// A rule built from an arbitrary predicate.
#[derive(Debug, Clone)]
pub struct PredicateRule {
    id: Index,
    enabled: bool,
    message: String,
    check: Check,
}

impl PredicateRule {
    pub fn new<S: Into<String>>(id: Index, message: S, check: Check) -> Self {
        PredicateRule {
            id,
            enabled: true,
            message: message.into(),
            check,
        }
    }

    pub fn node<S: Into<String>>(id: Index, message: S, check: fn(Node<'_>) -> bool) -> Self {
        PredicateRule::new(id, message, Check::Node(check))
    }

    pub fn describe<S: Into<String>>(
        id: Index,
        message: S,
        check: fn(Node<'_>) -> Option<String>,
    ) -> Self {
        PredicateRule::new(id, message, Check::Describe(check))
    }

    pub fn arrow<S: Into<String>>(
        id: Index,
        message: S,
        check: fn(&Context<'_>, &Arrow) -> bool,
    ) -> Self {
        PredicateRule::new(id, message, Check::Arrow(check))
    }

    /// Builder-style switch for rules that ship disabled.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Validate for PredicateRule {
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
        match self.check {
            Check::Node(check) => context
                .words()
                .filter(|x| check(*x))
                .map(|x| Problem::at(self.message.as_str(), x.index()))
                .collect(),
            Check::Describe(check) => context
                .words()
                .filter_map(|x| {
                    check(x).map(|detail| {
                        Problem::at(self.message.replace("{}", &detail), x.index())
                    })
                })
                .collect(),
            Check::Arrow(check) => context
                .graph
                .arrows()
                .filter(|(_, arrow)| check(context, arrow))
                .map(|(_, arrow)| Problem::at(self.message.as_str(), arrow.end))
                .collect(),
        }
    }
}
