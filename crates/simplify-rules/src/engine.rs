//! The dispatcher tying rules, capabilities, the gate and the emitter together.

use crate::capability::{CapabilityProbe, Host};
use crate::diagnostic::Diagnostic;
use crate::emit::{DiagnosticSink, Emitter, StderrSink};
use crate::gate::WarningGate;
use crate::registry::{MatchContext, RuleRegistry};
use simplify_config::{ConfigSource, SharedConfig, SimplifyConfig};
use simplify_forms::CallForm;
use std::sync::Arc;

/// One analysis context per compilation.
///
/// Owns the rule registry (fixed once built), the capability cache and the
/// reporting sink. The warning selection is read through `ConfigSource` on
/// every call.
pub struct Engine {
    registry: RuleRegistry,
    capabilities: CapabilityProbe,
    gate: WarningGate,
    emitter: Emitter,
}

impl Engine {
    /// Builtin rules, reporting to stderr.
    pub fn new(capabilities: CapabilityProbe, config: impl ConfigSource + 'static) -> Self {
        Self {
            registry: RuleRegistry::builtin(),
            capabilities,
            gate: WarningGate::new(config),
            emitter: Emitter::new(StderrSink::default()),
        }
    }

    /// Engine for a loaded config file, using its capability overrides.
    ///
    /// The warning selection is seeded from the file and returned as a live
    /// handle; changes the host makes through it apply from the next dispatch.
    pub fn from_config(host: Arc<dyn Host>, config: &SimplifyConfig) -> (Self, SharedConfig) {
        let capabilities = CapabilityProbe::new(host).with_config_overrides(config);
        let warnings = config.shared_warnings();
        (Self::new(capabilities, warnings.clone()), warnings)
    }

    pub fn with_registry(mut self, registry: RuleRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_sink(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.emitter = Emitter::new(sink);
        self
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    pub fn capabilities(&self) -> &CapabilityProbe {
        &self.capabilities
    }

    /// The diagnostic for one observed call, if any.
    ///
    /// Only the call itself is examined, never its argument sub-forms, and
    /// only when its head is a plain symbol. At most one diagnostic results:
    /// the first matcher registered for the callee that matches.
    pub fn dispatch(&self, call: &CallForm) -> Option<Diagnostic> {
        if !self.gate.enabled() {
            return None;
        }
        let callee = call.callee()?;
        let cx = MatchContext::new(callee, &self.capabilities);
        let diagnostic = self
            .registry
            .lookup(callee)
            .iter()
            .find_map(|matcher| matcher.check(&cx, call));
        if let Some(diagnostic) = &diagnostic {
            tracing::trace!(callee, rule = diagnostic.rule, "matched");
        }
        diagnostic
    }

    /// Dispatch and report the result to the sink.
    pub fn observe(&self, call: &CallForm) {
        if let Some(diagnostic) = self.dispatch(call) {
            self.emitter.emit(&diagnostic);
        }
    }
}
