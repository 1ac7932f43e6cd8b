//! Sets of validation rules.

use crate::{
    enhanced::{self, BuilderOptions},
    grammar::Context,
    graph::{EnhancedGraph, Tree},
    rule::{catalogue, id::Selector, Rule, Validate},
    types::{Problem, Sentence},
    Error,
};
use log::info;
use serde::{Deserialize, Serialize};
use std::iter::FromIterator;

/// Options for a rule set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RulesOptions {
    /// Rules to enable. If empty, the rules keep their default state.
    #[serde(default)]
    pub ids: Vec<Selector>,
    /// Rules to disable. Applied after `ids`.
    #[serde(default)]
    pub ignore_ids: Vec<Selector>,
}

/// A set of validation rules.
#[derive(Debug, Clone)]
pub struct Rules {
    rules: Vec<Rule>,
}

impl Default for Rules {
    fn default() -> Self {
        Rules::new()
    }
}

impl Rules {
    /// Creates the built-in rule set, with the rules in their default state.
    pub fn new() -> Self {
        catalogue().into_iter().collect()
    }

    /// Creates the built-in rule set and applies `options`.
    pub fn with_options(options: &RulesOptions) -> Self {
        let mut rules = Rules::new();
        rules.apply_options(options);
        rules
    }

    /// Enables and disables rules according to `options`.
    pub fn apply_options(&mut self, options: &RulesOptions) {
        if !options.ids.is_empty() {
            for rule in self.rules.iter_mut() {
                let selected = options.ids.iter().any(|x| x.is_match(rule.id()));
                rule.set_enabled(selected);
            }
        }

        for selector in &options.ignore_ids {
            for rule in self.select_mut(selector) {
                rule.disable();
            }
        }
    }

    /// All rules in evaluation order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// All rules in evaluation order (mutable).
    pub fn rules_mut(&mut self) -> &mut [Rule] {
        &mut self.rules
    }

    /// Returns an iterator over all rules matching the selector.
    pub fn select<'a>(&'a self, selector: &'a Selector) -> RulesIter<'a> {
        RulesIter {
            inner: self.rules.iter(),
            selector: Some(selector),
        }
    }

    /// Returns an iterator over all rules matching the selector (mutable).
    pub fn select_mut<'a>(&'a mut self, selector: &'a Selector) -> RulesIterMut<'a> {
        RulesIterMut {
            inner: self.rules.iter_mut(),
            selector: Some(selector),
        }
    }

    /// Validates a sentence, building its basic tree and enhanced graph first.
    ///
    /// # Errors
    /// - If the basic dependencies do not form a tree.
    /// - If the enhanced graph can not be built, e.g. because of a self loop.
    pub fn validate(&self, sentence: &Sentence) -> Result<Vec<Problem>, Error> {
        let tree = Tree::from_tokens(&sentence.tokens)?;
        let graph: EnhancedGraph = enhanced::build(sentence, &BuilderOptions::default())?;

        Ok(self.validate_with(&Context::new(sentence, &tree, &graph)))
    }

    /// Evaluates all enabled rules. Problems are sorted by their first position, then by message,
    /// and deduplicated.
    pub fn validate_with(&self, context: &Context) -> Vec<Problem> {
        let mut problems: Vec<Problem> = self
            .rules
            .iter()
            .filter(|rule| rule.enabled())
            .flat_map(|rule| rule.apply(context))
            .collect();

        problems.sort_by(|a, b| {
            a.positions
                .first()
                .cmp(&b.positions.first())
                .then_with(|| a.message.cmp(&b.message))
                .then_with(|| a.positions.cmp(&b.positions))
        });
        problems.dedup();

        info!(
            "{0} problems in sentence {1}",
            problems.len(),
            context.sentence.id
        );

        problems
    }
}

/// An iterator over references to rules.
pub struct RulesIter<'a> {
    selector: Option<&'a Selector>,
    inner: std::slice::Iter<'a, Rule>,
}

impl<'a> Iterator for RulesIter<'a> {
    type Item = &'a Rule;
    fn next(&mut self) -> Option<Self::Item> {
        let selector = self.selector.as_ref();

        self.inner
            .find(|rule| selector.map_or(true, |s| s.is_match(rule.id())))
    }
}

/// An iterator over mutable references to rules.
pub struct RulesIterMut<'a> {
    selector: Option<&'a Selector>,
    inner: std::slice::IterMut<'a, Rule>,
}

impl<'a> Iterator for RulesIterMut<'a> {
    type Item = &'a mut Rule;
    fn next(&mut self) -> Option<Self::Item> {
        let selector = self.selector.as_ref();

        self.inner
            .find(|rule| selector.map_or(true, |s| s.is_match(rule.id())))
    }
}

impl IntoIterator for Rules {
    type Item = Rule;
    type IntoIter = std::vec::IntoIter<Rule>;
    fn into_iter(self) -> Self::IntoIter {
        self.rules.into_iter()
    }
}

impl<R> FromIterator<R> for Rules
where
    R: Into<Rule>,
{
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        let rules: Vec<Rule> = iter.into_iter().map(|x| x.into()).collect();
        Self { rules }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::id::Category;
    use std::convert::TryInto;

    #[test]
    fn options_select_and_ignore() {
        let options = RulesOptions {
            ids: vec![Category::new("case").into()],
            ignore_ids: vec!["case/nsubj".try_into().unwrap()],
        };
        let rules = Rules::with_options(&options);

        for rule in rules.rules() {
            let category = rule.id().category().as_str();
            let group = rule.id().parent().as_str();
            assert_eq!(
                rule.enabled(),
                category == "case" && group != "nsubj",
                "{}",
                rule.id()
            );
        }
    }

    #[test]
    fn empty_options_keep_defaults() {
        let rules = Rules::with_options(&RulesOptions::default());
        let defaults = Rules::new();

        assert!(rules
            .rules()
            .iter()
            .zip(defaults.rules())
            .all(|(a, b)| a.enabled() == b.enabled()));
    }
}
