//! Rule engine reporting calls that can be written more simply.
//!
//! Hooked into a Lisp byte compiler, the engine looks at every call whose head
//! is a plain symbol and reports behavior-preserving simplifications under the
//! `simplify` warning category. It never changes what gets compiled.
//!
//! # Architecture
//!
//! ```text
//! host ──HostCall──> ObserverSet ──CallForm──> Engine::observe
//!                                               │
//!                     WarningGate::enabled() ◄──┤  (fresh read of host config)
//!                     RuleRegistry::lookup() ◄──┤  (callee -> ordered matchers)
//!                     Matcher::check()       ◄──┤  (first diagnostic wins)
//!                       └─ CapabilityProbe       (probe host once, cached)
//!                     Emitter::emit()        ◄──┘  (to the host's sink)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use simplify_rules::{CapabilityProbe, CollectSink, Engine};
//! use simplify_config::WarningConfig;
//! use simplify_forms::{CallForm, Expr};
//!
//! let sink = CollectSink::new();
//! let engine = Engine::new(CapabilityProbe::new(host), WarningConfig::All)
//!     .with_sink(sink.clone());
//!
//! engine.observe(&CallForm::named("char-after", [Expr::call0("point")]));
//! // sink.messages() == ["(char-after (point)) can be simplified to (char-after)"]
//! ```

pub mod capability;
pub mod diagnostic;
pub mod emit;
pub mod engine;
pub mod gate;
pub mod hook;
pub mod pattern;
pub mod registry;

mod matchers;

pub use capability::{Capability, CapabilityProbe, Host, HostError, ScratchId};
pub use diagnostic::{CATEGORY, Diagnostic, Suggestion};
pub use emit::{CollectSink, DiagnosticSink, Emitter, StderrSink};
pub use engine::Engine;
pub use gate::WarningGate;
pub use hook::{CallObserver, ObserverId, ObserverSet};
pub use pattern::{is_fixed, literal_of_fixed};
pub use registry::{FnMatcher, MatchContext, Matcher, RuleRegistry};
