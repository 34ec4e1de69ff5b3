use crate::config::CalcConfig;
use crate::core::{CalcError, Operand, Result};
use crate::history::{History, HistoryEntry};
use crate::plugins::{Computation, Operation, OperationExt, OperationRegistry, PluginManifest};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

/// Dispatch context: one operation registry plus one history log.
///
/// The registry and the history never reference each other; every
/// computation goes lookup -> execute -> append through this type, and a
/// failed computation leaves the history untouched.
pub struct Calculator {
    registry: OperationRegistry,
    history: History,
}

impl Calculator {
    /// Calculator with the built-in operations and an unbounded history
    pub fn new() -> Result<Self> {
        Ok(Self::with_registry(OperationRegistry::with_default_operations()?))
    }

    pub fn with_registry(registry: OperationRegistry) -> Self {
        Self {
            registry,
            history: History::new(),
        }
    }

    /// Assemble a calculator from configuration.
    ///
    /// The plugin manifest, when configured, is loaded and validated before
    /// any operation is registered.
    pub fn from_config(config: &CalcConfig) -> Result<Self> {
        config.validate().map_err(CalcError::Config)?;

        let registry = match &config.plugin_manifest {
            Some(path) => PluginManifest::load(path)?.build_registry()?,
            None => OperationRegistry::with_default_operations()?,
        };

        let history = match config.history_limit {
            Some(limit) => History::with_limit(limit),
            None => History::new(),
        };

        info!(
            operations = registry.len(),
            history_limit = ?config.history_limit,
            "calculator ready"
        );

        Ok(Self { registry, history })
    }

    /// Run the named operation and record it.
    pub fn execute(
        &mut self,
        operation: &str,
        a: impl Into<Operand>,
        b: impl Into<Operand>,
    ) -> Result<Decimal> {
        let name = operation.trim().to_lowercase();
        let (a, b) = (a.into(), b.into());

        let outcome = self
            .registry
            .lookup(&name)
            .and_then(|op| op.evaluate(&a, &b));

        match outcome {
            Ok(Computation { a, b, result }) => {
                debug!(operation = %name, %a, %b, %result, "computed");
                self.history.append(name, a, b, result);
                Ok(result)
            }
            Err(err) if err.is_user_error() => {
                debug!(operation = %name, error = %err, "computation rejected");
                Err(err)
            }
            Err(err) => {
                warn!(operation = %name, error = %err, "computation failed");
                Err(err)
            }
        }
    }

    pub fn lookup(&self, operation: &str) -> Result<&dyn Operation> {
        self.registry.lookup(operation)
    }

    pub fn registry(&self) -> &OperationRegistry {
        &self.registry
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.history.last()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Registered operation names, sorted
    pub fn operations(&self) -> Vec<&str> {
        self.registry.operation_names()
    }
}
