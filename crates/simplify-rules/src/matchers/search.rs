//! Buffer searches: literal regexps and redundant bounds.

use crate::diagnostic::Diagnostic;
use crate::pattern;
use crate::registry::{MatchContext, RuleRegistry};
use simplify_forms::{CallForm, Expr};

const REGEXP_SEARCHES: [&str; 2] = ["re-search-forward", "re-search-backward"];
const PLAIN_SEARCHES: [&str; 2] = ["search-forward", "search-backward"];

pub(super) fn register(registry: &mut RuleRegistry) {
    registry.register_fn(&REGEXP_SEARCHES, "search-literal-regexp", literal_regexp);
    registry.register_fn(&REGEXP_SEARCHES, "search-default-bound", default_bound);
    registry.register_fn(&PLAIN_SEARCHES, "search-default-bound", default_bound);
}

fn is_forward(callee: &str) -> bool {
    callee.ends_with("-forward")
}

/// `(re-search-forward "foo\\.el")` -> `(search-forward "foo.el")`.
fn literal_regexp(cx: &MatchContext<'_>, call: &CallForm) -> Option<Diagnostic> {
    let literal = pattern::literal_of_fixed(call.arg(0)?.as_str()?)?;
    let plain = if is_forward(cx.callee) {
        "search-forward"
    } else {
        "search-backward"
    };
    let mut args = call.args().to_vec();
    args[0] = Expr::string(literal);
    let suggestion = call.with_callee(plain).with_args(args);
    Some(Diagnostic::new("search-literal-regexp", call).suggest(suggestion))
}

/// A bound of `(point-max)` searching forward, or `(point-min)` searching
/// backward, is the same as no bound.
fn default_bound(cx: &MatchContext<'_>, call: &CallForm) -> Option<Diagnostic> {
    let default = if is_forward(cx.callee) {
        "point-max"
    } else {
        "point-min"
    };
    if !call.arg(1)?.is_nullary_call(default) {
        return None;
    }

    let mut args = call.args().to_vec();
    if args.len() == 2 {
        args.pop();
    } else {
        args[1] = Expr::nil();
    }
    Some(Diagnostic::new("search-default-bound", call).suggest(call.with_args(args)))
}
