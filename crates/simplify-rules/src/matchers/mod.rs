//! Builtin simplification rules.
//!
//! Each submodule registers the matchers for one family of callees. Order of
//! registration is the order matchers are tried, so within a family the more
//! specific suggestion goes first.

mod buffers;
mod lists;
mod point;
mod search;

use crate::registry::RuleRegistry;

pub(crate) fn register_builtins(registry: &mut RuleRegistry) {
    point::register(registry);
    buffers::register(registry);
    search::register(registry);
    lists::register(registry);
}
