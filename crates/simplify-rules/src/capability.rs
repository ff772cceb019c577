//! Probing the running host for optional-argument support.
//!
//! Whether `(kill-buffer)` is accepted without an argument depends on the host
//! version. The only reliable check is to try it: each probe evaluates the
//! zero-argument form inside a throwaway scratch context and reads success as
//! "supported". Results are cached per engine.

use serde::Serialize;
use simplify_config::SimplifyConfig;
use simplify_forms::{CallForm, Expr};
use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, OnceLock};

/// An optional-argument behavior that only some host versions have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Capability {
    /// `(kill-buffer)` kills the current buffer.
    KillBufferOptionalArg,
    /// `(delete-window)` deletes the selected window.
    DeleteWindowOptionalArg,
    /// `(up-list)`, `(down-list)` and `(backward-up-list)` move by one.
    ListMotionOptionalArg,
}

impl Capability {
    pub const ALL: [Capability; 3] = [
        Capability::KillBufferOptionalArg,
        Capability::DeleteWindowOptionalArg,
        Capability::ListMotionOptionalArg,
    ];

    /// Key used in `[capabilities]` config overrides.
    pub fn id(self) -> &'static str {
        match self {
            Capability::KillBufferOptionalArg => "kill-buffer-optional-arg",
            Capability::DeleteWindowOptionalArg => "delete-window-optional-arg",
            Capability::ListMotionOptionalArg => "list-motion-optional-arg",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cap| cap.id() == id)
    }

    /// Which hosts have it, for diagnostic messages.
    pub fn host_requirement(self) -> &'static str {
        match self {
            Capability::KillBufferOptionalArg => "Emacs 23 and up",
            Capability::DeleteWindowOptionalArg => "Emacs 21 and up or XEmacs",
            Capability::ListMotionOptionalArg => "Emacs 21 and up",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }

    /// Forms evaluated, in order, inside the scratch context.
    fn probe_forms(self) -> Vec<CallForm> {
        match self {
            Capability::KillBufferOptionalArg => vec![CallForm::named("kill-buffer", [])],
            Capability::DeleteWindowOptionalArg => vec![CallForm::named("delete-window", [])],
            Capability::ListMotionOptionalArg => vec![
                CallForm::named("insert", [Expr::string("(())")]),
                CallForm::named("goto-char", [Expr::call0("point-min")]),
                CallForm::named("down-list", []),
                CallForm::named("up-list", []),
            ],
        }
    }
}

/// Handle on a host scratch context (a temporary buffer shown in a
/// temporary window).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScratchId(pub u64);

/// Error signalled by the host while evaluating a form.
#[derive(Debug, Clone, thiserror::Error)]
pub enum HostError {
    #[error("{symbol}: {data}")]
    Signal { symbol: String, data: String },

    #[error("wrong number of arguments: {callee}, {given}")]
    WrongNumberOfArguments { callee: String, given: usize },

    #[error("cannot create scratch context: {0}")]
    NoScratch(String),
}

/// The running host compiler's evaluator, as far as probing needs it.
pub trait Host: Send + Sync {
    /// Create a fresh scratch context that nothing else refers to.
    fn acquire_scratch(&self) -> Result<ScratchId, HostError>;

    /// Dispose of a scratch context. Must tolerate contexts the probed
    /// form already destroyed.
    fn release_scratch(&self, scratch: ScratchId);

    /// Evaluate `call` with `scratch` current.
    fn eval_in(&self, scratch: ScratchId, call: &CallForm) -> Result<(), HostError>;
}

/// Releases its scratch context when dropped, including during unwinding.
struct ScratchGuard<'a> {
    host: &'a dyn Host,
    id: ScratchId,
}

impl<'a> ScratchGuard<'a> {
    fn acquire(host: &'a dyn Host) -> Result<Self, HostError> {
        let id = host.acquire_scratch()?;
        Ok(Self { host, id })
    }
}

impl Drop for ScratchGuard<'_> {
    fn drop(&mut self) {
        self.host.release_scratch(self.id);
    }
}

/// Lazily probed, write-once capability flags.
pub struct CapabilityProbe {
    host: Arc<dyn Host>,
    overrides: HashMap<Capability, bool>,
    cache: [OnceLock<bool>; Capability::ALL.len()],
}

impl CapabilityProbe {
    pub fn new(host: Arc<dyn Host>) -> Self {
        Self {
            host,
            overrides: HashMap::new(),
            cache: Default::default(),
        }
    }

    /// Pin a capability; it will never be probed.
    pub fn with_override(mut self, capability: Capability, value: bool) -> Self {
        self.overrides.insert(capability, value);
        self
    }

    /// Apply the `[capabilities]` table of a config file.
    pub fn with_config_overrides(mut self, config: &SimplifyConfig) -> Self {
        for (id, value) in &config.capability_overrides {
            match Capability::from_id(id) {
                Some(capability) => {
                    self.overrides.insert(capability, *value);
                }
                None => tracing::warn!(id = %id, "unknown capability in config, ignoring"),
            }
        }
        self
    }

    /// Whether the host has `capability`. Probes at most once.
    pub fn probe(&self, capability: Capability) -> bool {
        if let Some(value) = self.overrides.get(&capability) {
            return *value;
        }
        *self.cache[capability.slot()].get_or_init(|| self.probe_uncached(capability))
    }

    /// Run the probe without consulting or filling the cache.
    ///
    /// Never fails: host errors and panics both mean "absent".
    pub fn probe_uncached(&self, capability: Capability) -> bool {
        let host = self.host.as_ref();
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| -> Result<(), HostError> {
            let scratch = ScratchGuard::acquire(host)?;
            for form in capability.probe_forms() {
                host.eval_in(scratch.id, &form)?;
            }
            Ok(())
        }));

        let present = match outcome {
            Ok(Ok(())) => true,
            Ok(Err(err)) => {
                tracing::debug!(capability = capability.id(), error = %err, "probe failed");
                false
            }
            Err(_) => {
                tracing::debug!(capability = capability.id(), "probe panicked");
                false
            }
        };
        tracing::debug!(capability = capability.id(), present, "probed capability");
        present
    }
}
