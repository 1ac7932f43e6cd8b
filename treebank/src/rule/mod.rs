//! Validation rules. Every rule inspects a [Context] and reports the [Problem]s it finds; rules
//! never modify the sentence and never fail.

use crate::{grammar::Context, types::Problem};
use enum_dispatch::enum_dispatch;

mod catalogue;
mod continuity;
pub mod id;
mod predicate;
mod table;

pub use catalogue::catalogue;
pub use continuity::ContinuityRule;
pub use predicate::{Check, PredicateRule};
pub use table::{Side, TableRule};

use id::Index;

/// Any validation rule.
#[enum_dispatch]
#[derive(Debug, Clone)]
pub enum Rule {
    TableRule,
    PredicateRule,
    ContinuityRule,
}

/// The interface all rules share.
#[enum_dispatch(Rule)]
pub trait Validate {
    fn id(&self) -> &Index;

    /// Disabled rules report nothing.
    fn enabled(&self) -> bool;

    fn set_enabled(&mut self, enabled: bool);

    /// Finds all violations of this rule, regardless of whether it is enabled.
    fn apply(&self, context: &Context) -> Vec<Problem>;
}

impl Rule {
    pub fn enable(&mut self) {
        self.set_enabled(true);
    }

    pub fn disable(&mut self) {
        self.set_enabled(false);
    }
}
