//! Buffer and window arguments that default to the current one.

use crate::capability::Capability;
use crate::diagnostic::Diagnostic;
use crate::registry::{MatchContext, RuleRegistry};
use simplify_forms::{CallForm, Expr};

pub(super) fn register(registry: &mut RuleRegistry) {
    registry.register_fn(
        &["delete-window"],
        "delete-window-selected",
        delete_window_selected,
    );
    registry.register_fn(&["kill-buffer"], "kill-buffer-current", kill_buffer_current);
    registry.register_fn(&["kill-buffer"], "kill-buffer-nil", kill_buffer_nil);
}

/// `(delete-window (selected-window))` -> `(delete-window)`.
fn delete_window_selected(cx: &MatchContext<'_>, call: &CallForm) -> Option<Diagnostic> {
    let cap = Capability::DeleteWindowOptionalArg;
    if !call.sole_arg()?.is_nullary_call("selected-window") || !cx.has(cap) {
        return None;
    }
    let diag = Diagnostic::new("delete-window-selected", call);
    Some(diag.suggest_requiring(call.with_args(Vec::new()), cap))
}

/// `(kill-buffer (current-buffer))` -> `(kill-buffer nil)`, and `(kill-buffer)`
/// where the argument is optional.
fn kill_buffer_current(cx: &MatchContext<'_>, call: &CallForm) -> Option<Diagnostic> {
    if !call.sole_arg()?.is_nullary_call("current-buffer") {
        return None;
    }
    let cap = Capability::KillBufferOptionalArg;
    let diag = Diagnostic::new("kill-buffer-current", call);
    let diag = diag.suggest(call.with_args(vec![Expr::nil()]));
    if !cx.has(cap) {
        return Some(diag);
    }
    Some(diag.suggest_requiring(call.with_args(Vec::new()), cap))
}

/// `(kill-buffer nil)` -> `(kill-buffer)` where the argument is optional.
fn kill_buffer_nil(cx: &MatchContext<'_>, call: &CallForm) -> Option<Diagnostic> {
    let cap = Capability::KillBufferOptionalArg;
    if !call.sole_arg()?.is_nil() || !cx.has(cap) {
        return None;
    }
    let diag = Diagnostic::new("kill-buffer-nil", call);
    Some(diag.suggest_requiring(call.with_args(Vec::new()), cap))
}

#[cfg(test)]
mod tests {
    use crate::capability::Capability;
    use crate::matchers::test_support::check;
    use simplify_forms::{CallForm, Expr};

    fn kill_current() -> CallForm {
        CallForm::named("kill-buffer", [Expr::call0("current-buffer")])
    }

    #[test]
    fn test_delete_window_selected() {
        let call = CallForm::named("delete-window", [Expr::call0("selected-window")]);
        let diag = check(&["delete-window"], &call).unwrap();
        assert_eq!(diag.rule, "delete-window-selected");
        assert_eq!(
            diag.message(),
            "(delete-window (selected-window)) can be simplified to (delete-window) \
             in Emacs 21 and up or XEmacs"
        );
    }

    #[test]
    fn test_delete_window_without_capability() {
        let call = CallForm::named("delete-window", [Expr::call0("selected-window")]);
        assert!(check(&[], &call).is_none());
    }

    #[test]
    fn test_delete_other_window() {
        let call = CallForm::named("delete-window", [Expr::symbol("win")]);
        assert!(check(&["delete-window"], &call).is_none());
    }

    #[test]
    fn test_kill_current_buffer_old_host() {
        let diag = check(&[], &kill_current()).unwrap();
        assert_eq!(diag.rule, "kill-buffer-current");
        assert_eq!(diag.suggestions.len(), 1);
        assert_eq!(diag.suggestions[0].requires, None);
        assert_eq!(
            diag.message(),
            "(kill-buffer (current-buffer)) can be simplified to (kill-buffer nil)"
        );
    }

    #[test]
    fn test_kill_current_buffer_new_host() {
        let diag = check(&["kill-buffer"], &kill_current()).unwrap();
        assert_eq!(diag.suggestions.len(), 2);
        assert_eq!(
            diag.suggestions[1].requires,
            Some(Capability::KillBufferOptionalArg)
        );
        assert_eq!(
            diag.message(),
            "(kill-buffer (current-buffer)) can be simplified to (kill-buffer nil), \
             or (kill-buffer) in Emacs 23 and up"
        );
    }

    #[test]
    fn test_kill_buffer_nil() {
        let call = CallForm::named("kill-buffer", [Expr::nil()]);
        let diag = check(&["kill-buffer"], &call).unwrap();
        assert_eq!(diag.rule, "kill-buffer-nil");
        assert_eq!(
            diag.message(),
            "(kill-buffer nil) can be simplified to (kill-buffer) in Emacs 23 and up"
        );
        assert!(check(&[], &call).is_none());
    }

    #[test]
    fn test_kill_buffer_empty_list_is_nil() {
        let call = CallForm::named("kill-buffer", [Expr::list([])]);
        assert!(check(&["kill-buffer"], &call).is_some());
    }

    #[test]
    fn test_kill_named_buffer() {
        let call = CallForm::named("kill-buffer", [Expr::string("*scratch*")]);
        assert!(check(&["kill-buffer"], &call).is_none());
        assert!(check(&["kill-buffer"], &CallForm::named("kill-buffer", [])).is_none());
    }
}
