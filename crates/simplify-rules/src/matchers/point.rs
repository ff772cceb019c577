//! `(char-after (point))` and `(char-before (point))`.

use crate::diagnostic::Diagnostic;
use crate::registry::{MatchContext, RuleRegistry};
use simplify_forms::CallForm;

pub(super) fn register(registry: &mut RuleRegistry) {
    registry.register_fn(
        &["char-after", "char-before"],
        "char-at-point",
        char_at_point,
    );
}

/// Position argument defaults to point.
fn char_at_point(_cx: &MatchContext<'_>, call: &CallForm) -> Option<Diagnostic> {
    if !call.sole_arg()?.is_nullary_call("point") {
        return None;
    }
    Some(Diagnostic::new("char-at-point", call).suggest(call.with_args(Vec::new())))
}
