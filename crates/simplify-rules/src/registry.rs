//! Callee -> ordered matcher lists.

use crate::capability::{Capability, CapabilityProbe};
use crate::diagnostic::Diagnostic;
use simplify_forms::CallForm;
use std::collections::HashMap;
use std::sync::Arc;

/// What a matcher can see besides the call itself.
pub struct MatchContext<'a> {
    /// Callee the matcher was looked up under.
    pub callee: &'a str,
    capabilities: &'a CapabilityProbe,
}

impl<'a> MatchContext<'a> {
    pub fn new(callee: &'a str, capabilities: &'a CapabilityProbe) -> Self {
        Self {
            callee,
            capabilities,
        }
    }

    /// Whether the host has `capability`. Probes on first use.
    pub fn has(&self, capability: Capability) -> bool {
        self.capabilities.probe(capability)
    }
}

/// A check for one simplifiable call shape.
///
/// A call of the wrong shape is a non-match, never an error.
pub trait Matcher: Send + Sync {
    /// Rule id reported in diagnostics.
    fn id(&self) -> &'static str;

    fn check(&self, cx: &MatchContext<'_>, call: &CallForm) -> Option<Diagnostic>;
}

/// Signature of a matcher written as a plain function or closure.
pub type CheckFn = dyn Fn(&MatchContext<'_>, &CallForm) -> Option<Diagnostic> + Send + Sync;

/// Matcher backed by a function.
pub struct FnMatcher {
    id: &'static str,
    check: Box<CheckFn>,
}

impl FnMatcher {
    pub fn new<F>(id: &'static str, check: F) -> Self
    where
        F: Fn(&MatchContext<'_>, &CallForm) -> Option<Diagnostic> + Send + Sync + 'static,
    {
        Self {
            id,
            check: Box::new(check),
        }
    }
}

impl Matcher for FnMatcher {
    fn id(&self) -> &'static str {
        self.id
    }

    fn check(&self, cx: &MatchContext<'_>, call: &CallForm) -> Option<Diagnostic> {
        (self.check)(cx, call)
    }
}

/// Registry of matchers keyed by callee name.
///
/// Populated before the engine is built and read-only afterwards.
#[derive(Default)]
pub struct RuleRegistry {
    rules: HashMap<String, Vec<Arc<dyn Matcher>>>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// All builtin simplification rules.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        crate::matchers::register_builtins(&mut registry);
        registry
    }

    /// Append `matcher` to the list tried for `callee`.
    pub fn register(&mut self, callee: &str, matcher: Arc<dyn Matcher>) {
        self.rules
            .entry(callee.to_string())
            .or_default()
            .push(matcher);
    }

    /// Register one function matcher under several callees.
    pub fn register_fn<F>(&mut self, callees: &[&str], id: &'static str, check: F)
    where
        F: Fn(&MatchContext<'_>, &CallForm) -> Option<Diagnostic> + Send + Sync + 'static,
    {
        let matcher: Arc<dyn Matcher> = Arc::new(FnMatcher::new(id, check));
        for callee in callees {
            self.register(callee, Arc::clone(&matcher));
        }
    }

    /// Matchers for `callee` in registration order; empty when unknown.
    pub fn lookup(&self, callee: &str) -> &[Arc<dyn Matcher>] {
        self.rules
            .get(callee)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Registered callee names, sorted.
    pub fn callees(&self) -> Vec<&str> {
        let mut callees: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        callees.sort_unstable();
        callees
    }

    /// Distinct rule ids, sorted.
    pub fn rule_ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<&'static str> = self
            .rules
            .values()
            .flat_map(|matchers| matchers.iter().map(|m| m.id()))
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}
