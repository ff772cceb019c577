//! Unevaluated Lisp forms as seen by the simplify rule engine.
//!
//! The host compiler reads source; this crate only models what it hands over:
//!
//! ```text
//! host entry point ──> HostCall ──normalize()──> CallForm ──> rule engine
//!                      (arity shape)             (head + args)
//! ```
//!
//! Forms print back to Lisp read syntax so diagnostics can quote them:
//!
//! ```
//! use simplify_forms::{CallForm, Expr};
//!
//! let call = CallForm::named("char-after", [Expr::call0("point")]);
//! assert_eq!(call.to_string(), "(char-after (point))");
//! ```

pub mod call;
pub mod expr;

pub use call::{CallForm, HostCall};
pub use expr::Expr;
