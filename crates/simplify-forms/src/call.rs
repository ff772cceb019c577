//! Call forms and their normalization from host entry points.

use crate::expr::Expr;
use std::fmt;

/// A call expression: head plus unevaluated arguments.
///
/// Rules borrow a `CallForm` for the duration of one dispatch and never keep it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallForm {
    head: Expr,
    args: Vec<Expr>,
}

impl CallForm {
    pub fn new(head: Expr, args: Vec<Expr>) -> Self {
        Self { head, args }
    }

    /// A call whose head is the plain symbol `callee`.
    pub fn named(callee: &str, args: impl IntoIterator<Item = Expr>) -> Self {
        Self::new(Expr::symbol(callee), args.into_iter().collect())
    }

    /// Split a whole `(f a b ...)` form. Atoms and `()` are not calls.
    pub fn from_expr(expr: &Expr) -> Option<Self> {
        let (head, args) = expr.as_list()?.split_first()?;
        Some(Self::new(head.clone(), args.to_vec()))
    }

    pub fn head(&self) -> &Expr {
        &self.head
    }

    pub fn args(&self) -> &[Expr] {
        &self.args
    }

    pub fn arg(&self, index: usize) -> Option<&Expr> {
        self.args.get(index)
    }

    /// The callee name, only when the head is a plain symbol.
    ///
    /// A computed head such as `((lambda (x) x) 1)` has no static callee.
    pub fn callee(&self) -> Option<&str> {
        self.head.as_symbol()
    }

    /// The argument of a one-argument call.
    pub fn sole_arg(&self) -> Option<&Expr> {
        match self.args.as_slice() {
            [arg] => Some(arg),
            _ => None,
        }
    }

    /// Same head, different arguments.
    pub fn with_args(&self, args: Vec<Expr>) -> Self {
        Self::new(self.head.clone(), args)
    }

    /// Same arguments, different callee.
    pub fn with_callee(&self, callee: &str) -> Self {
        Self::new(Expr::symbol(callee), self.args.clone())
    }

    pub fn to_expr(&self) -> Expr {
        Expr::list(std::iter::once(self.head.clone()).chain(self.args.iter().cloned()))
    }
}

impl fmt::Display for CallForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.head)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        f.write_str(")")
    }
}

/// A call as seen at one of the host compiler's entry points.
///
/// Hosts compile calls through arity-specialized paths, so the same source call
/// may arrive in any of these shapes. Each interception point wraps what it
/// receives in the matching variant and hands the normalized form to dispatch.
#[derive(Debug, Clone, Copy)]
pub enum HostCall<'a> {
    Nullary { head: &'a Expr },
    Unary { head: &'a Expr, arg: &'a Expr },
    Binary { head: &'a Expr, args: [&'a Expr; 2] },
    Ternary { head: &'a Expr, args: [&'a Expr; 3] },
    Variadic { head: &'a Expr, args: &'a [Expr] },
    /// The whole unevaluated `(f args...)` form.
    Form(&'a Expr),
}

impl HostCall<'_> {
    pub fn normalize(&self) -> Option<CallForm> {
        let (head, args) = match *self {
            HostCall::Nullary { head } => (head, Vec::new()),
            HostCall::Unary { head, arg } => (head, vec![arg.clone()]),
            HostCall::Binary { head, args } => (head, args.map(Expr::clone).into()),
            HostCall::Ternary { head, args } => (head, args.map(Expr::clone).into()),
            HostCall::Variadic { head, args } => (head, args.to_vec()),
            HostCall::Form(expr) => return CallForm::from_expr(expr),
        };
        Some(CallForm::new(head.clone(), args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kill_current() -> Expr {
        Expr::list([Expr::symbol("kill-buffer"), Expr::call0("current-buffer")])
    }

    #[test]
    fn test_from_expr() {
        let call = CallForm::from_expr(&kill_current()).unwrap();
        assert_eq!(call.callee(), Some("kill-buffer"));
        assert_eq!(call.sole_arg(), Some(&Expr::call0("current-buffer")));
        assert_eq!(call.to_expr(), kill_current());
    }

    #[test]
    fn test_from_expr_rejects_non_calls() {
        assert!(CallForm::from_expr(&Expr::symbol("foo")).is_none());
        assert!(CallForm::from_expr(&Expr::list([])).is_none());
        assert!(CallForm::from_expr(&Expr::string("foo")).is_none());
    }

    #[test]
    fn test_computed_head_has_no_callee() {
        let lambda = Expr::list([
            Expr::symbol("lambda"),
            Expr::list([Expr::symbol("x")]),
            Expr::symbol("x"),
        ]);
        let call = CallForm::new(lambda, vec![Expr::int(1)]);
        assert_eq!(call.callee(), None);
    }

    #[test]
    fn test_with_callee_keeps_args() {
        let call = CallForm::named("re-search-forward", [Expr::string("x"), Expr::nil()]);
        let renamed = call.with_callee("search-forward");
        assert_eq!(renamed.callee(), Some("search-forward"));
        assert_eq!(renamed.args(), call.args());
    }

    #[test]
    fn test_display() {
        let call = CallForm::named("search-forward", [Expr::string("x"), Expr::nil()]);
        assert_eq!(call.to_string(), r#"(search-forward "x" nil)"#);
        let bare = CallForm::named("kill-buffer", []);
        assert_eq!(bare.to_string(), "(kill-buffer)");
    }

    #[test]
    fn test_host_call_shapes_agree() {
        let head = Expr::symbol("re-search-forward");
        let pattern = Expr::string("foo");
        let bound = Expr::call0("point-max");
        let whole = Expr::list([head.clone(), pattern.clone(), bound.clone()]);

        let binary = HostCall::Binary {
            head: &head,
            args: [&pattern, &bound],
        }
        .normalize();
        let args = [pattern.clone(), bound.clone()];
        let variadic = HostCall::Variadic {
            head: &head,
            args: &args,
        }
        .normalize();
        let form = HostCall::Form(&whole).normalize();

        assert!(binary.is_some());
        assert_eq!(binary, variadic);
        assert_eq!(binary, form);
    }

    #[test]
    fn test_host_call_nullary_and_unary() {
        let head = Expr::symbol("up-list");
        let one = Expr::int(1);
        assert_eq!(
            HostCall::Nullary { head: &head }.normalize(),
            Some(CallForm::named("up-list", []))
        );
        assert_eq!(
            HostCall::Unary {
                head: &head,
                arg: &one,
            }
            .normalize(),
            Some(CallForm::named("up-list", [Expr::int(1)]))
        );
    }
}
