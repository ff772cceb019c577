//! Diagnostics produced by simplification rules.

use crate::capability::Capability;
use serde::Serialize;
use simplify_forms::{CallForm, Expr};
use std::fmt;

/// Warning category all simplification diagnostics belong to.
pub const CATEGORY: &str = "simplify";

/// One possible rewrite of the original call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// The simpler form.
    pub form: Expr,
    /// Host capability the rewrite relies on, if any.
    pub requires: Option<Capability>,
}

/// A call that could be written more simply.
///
/// Carries no location; the host's sink knows where it is compiling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub category: &'static str,
    /// Id of the rule that matched (e.g. "kill-buffer-current").
    pub rule: &'static str,
    pub original: Expr,
    pub suggestions: Vec<Suggestion>,
}

impl Diagnostic {
    /// A diagnostic for `original` with no suggestions yet.
    pub fn new(rule: &'static str, original: &CallForm) -> Self {
        Self {
            category: CATEGORY,
            rule,
            original: original.to_expr(),
            suggestions: Vec::new(),
        }
    }

    /// Add a rewrite valid on every host.
    pub fn suggest(mut self, form: CallForm) -> Self {
        self.suggestions.push(Suggestion {
            form: form.to_expr(),
            requires: None,
        });
        self
    }

    /// Add a rewrite that is only valid when the host has `capability`.
    pub fn suggest_requiring(mut self, form: CallForm, capability: Capability) -> Self {
        self.suggestions.push(Suggestion {
            form: form.to_expr(),
            requires: Some(capability),
        });
        self
    }

    /// Rendered message, e.g. `(kill-buffer (current-buffer)) can be simplified
    /// to (kill-buffer nil), or (kill-buffer) in Emacs 23 and up`.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} can be simplified to ", self.original)?;
        for (i, suggestion) in self.suggestions.iter().enumerate() {
            if i > 0 {
                f.write_str(", or ")?;
            }
            write!(f, "{}", suggestion.form)?;
            if let Some(capability) = suggestion.requires {
                write!(f, " in {}", capability.host_requirement())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_single() {
        let call = CallForm::named("char-after", [Expr::call0("point")]);
        let suggestion = CallForm::named("char-after", []);
        let diag = Diagnostic::new("char-at-point", &call).suggest(suggestion);
        assert_eq!(diag.category, "simplify");
        assert_eq!(
            diag.message(),
            "(char-after (point)) can be simplified to (char-after)"
        );
    }

    #[test]
    fn test_message_with_requirement() {
        let cap = Capability::KillBufferOptionalArg;
        let call = CallForm::named("kill-buffer", [Expr::call0("current-buffer")]);
        let diag = Diagnostic::new("kill-buffer-current", &call)
            .suggest(CallForm::named("kill-buffer", [Expr::nil()]))
            .suggest_requiring(CallForm::named("kill-buffer", []), cap);
        assert_eq!(
            diag.message(),
            "(kill-buffer (current-buffer)) can be simplified to (kill-buffer nil), \
             or (kill-buffer) in Emacs 23 and up"
        );
    }

    #[test]
    fn test_serialize() {
        let cap = Capability::KillBufferOptionalArg;
        let call = CallForm::named("kill-buffer", [Expr::nil()]);
        let kill = CallForm::named("kill-buffer", []);
        let diag = Diagnostic::new("kill-buffer-nil", &call).suggest_requiring(kill, cap);
        let json = serde_json::to_value(&diag).unwrap();
        assert_eq!(json["category"], "simplify");
        assert_eq!(json["original"], "(kill-buffer nil)");
        assert_eq!(json["suggestions"][0]["form"], "(kill-buffer)");
        assert_eq!(
            json["suggestions"][0]["requires"],
            "kill-buffer-optional-arg"
        );
    }
}
