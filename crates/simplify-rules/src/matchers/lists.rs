//! List motion with an explicit count of one.

use crate::capability::Capability;
use crate::diagnostic::Diagnostic;
use crate::registry::{MatchContext, RuleRegistry};
use simplify_forms::CallForm;

pub(super) fn register(registry: &mut RuleRegistry) {
    registry.register_fn(
        &["up-list", "down-list", "backward-up-list"],
        "list-motion-one",
        list_motion_one,
    );
}

/// `(up-list 1)` -> `(up-list)` where the count is optional.
fn list_motion_one(cx: &MatchContext<'_>, call: &CallForm) -> Option<Diagnostic> {
    let cap = Capability::ListMotionOptionalArg;
    if call.sole_arg()?.as_int() != Some(1) || !cx.has(cap) {
        return None;
    }
    let diag = Diagnostic::new("list-motion-one", call);
    Some(diag.suggest_requiring(call.with_args(Vec::new()), cap))
}
