//! Unevaluated Lisp forms.
//!
//! The host compiler hands over forms it has already read. Only the node kinds
//! the simplification rules look at are distinguished; everything else a host
//! reads (floats, vectors, characters) can be passed as an opaque symbol since
//! no rule ever inspects it.

use serde::{Serialize, Serializer};
use std::fmt;

/// A single unevaluated form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// A symbol, including `nil` and `t`.
    Symbol(String),
    /// An integer literal.
    Int(i64),
    /// A string literal, unescaped.
    Str(String),
    /// A list form `(a b ...)`. The empty list reads as `nil`.
    List(Vec<Expr>),
}

impl Expr {
    pub fn symbol(name: impl Into<String>) -> Self {
        Expr::Symbol(name.into())
    }

    pub fn string(text: impl Into<String>) -> Self {
        Expr::Str(text.into())
    }

    pub fn int(value: i64) -> Self {
        Expr::Int(value)
    }

    pub fn list(items: impl IntoIterator<Item = Expr>) -> Self {
        Expr::List(items.into_iter().collect())
    }

    pub fn nil() -> Self {
        Expr::symbol("nil")
    }

    /// A call with no arguments, e.g. `(point)`.
    pub fn call0(callee: &str) -> Self {
        Expr::List(vec![Expr::symbol(callee)])
    }

    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Expr::Symbol(name) => Some(name),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Expr::Str(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Expr::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Expr]> {
        match self {
            Expr::List(items) => Some(items),
            _ => None,
        }
    }

    /// True for `nil` and `()`, which read as the same object.
    pub fn is_nil(&self) -> bool {
        match self {
            Expr::Symbol(name) => name == "nil",
            Expr::List(items) => items.is_empty(),
            _ => false,
        }
    }

    /// True when this form is exactly `(callee)`.
    pub fn is_nullary_call(&self, callee: &str) -> bool {
        matches!(self.as_list(), Some([Expr::Symbol(head)]) if head == callee)
    }

    /// `(quote x)` prints as `'x`.
    fn quoted(&self) -> Option<&Expr> {
        match self.as_list() {
            Some([Expr::Symbol(head), inner]) if head == "quote" => Some(inner),
            _ => None,
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Symbol(name) => f.write_str(name),
            Expr::Int(value) => write!(f, "{value}"),
            Expr::Str(text) => write_string_literal(f, text),
            Expr::List(items) => {
                if let Some(inner) = self.quoted() {
                    return write!(f, "'{inner}");
                }
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str(")")
            }
        }
    }
}

/// Lisp string read syntax: only backslash and double quote need escaping.
fn write_string_literal(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in text.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '"' => f.write_str("\\\"")?,
            _ => write!(f, "{c}")?,
        }
    }
    f.write_str("\"")
}

/// Forms serialize as their printed representation.
impl Serialize for Expr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_call() {
        let form = Expr::list([Expr::symbol("kill-buffer"), Expr::call0("current-buffer")]);
        assert_eq!(form.to_string(), "(kill-buffer (current-buffer))");
        assert_eq!(Expr::list([]).to_string(), "()");
    }

    #[test]
    fn test_print_string_escapes() {
        // The pattern a\.b is written "a\\.b" in Lisp source.
        assert_eq!(Expr::string("a\\.b").to_string(), r#""a\\.b""#);
        assert_eq!(Expr::string("say \"hi\"").to_string(), r#""say \"hi\"""#);
    }

    #[test]
    fn test_print_quote() {
        let form = Expr::list([Expr::symbol("quote"), Expr::symbol("foo")]);
        assert_eq!(form.to_string(), "'foo");
    }

    #[test]
    fn test_nil_forms() {
        assert!(Expr::nil().is_nil());
        assert!(Expr::list([]).is_nil());
        assert!(!Expr::symbol("t").is_nil());
        assert!(!Expr::string("nil").is_nil());
    }

    #[test]
    fn test_nullary_call() {
        assert!(Expr::call0("point").is_nullary_call("point"));
        assert!(!Expr::call0("point").is_nullary_call("point-max"));
        let with_arg = Expr::list([Expr::symbol("point"), Expr::int(1)]);
        assert!(!with_arg.is_nullary_call("point"));
        assert!(!Expr::symbol("point").is_nullary_call("point"));
    }

    #[test]
    fn test_serialize_as_text() {
        let json = serde_json::to_string(&Expr::call0("point")).unwrap();
        assert_eq!(json, r#""(point)""#);
    }
}
