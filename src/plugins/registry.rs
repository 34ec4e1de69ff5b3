use super::{Operation, builtin_operations};
use crate::core::{CalcError, Result};
use std::collections::BTreeMap;
use tracing::debug;

/// Registry of operations keyed by lowercase name
///
/// Append-only: names are unique and an existing entry is never replaced.
#[derive(Default)]
pub struct OperationRegistry {
    operations: BTreeMap<String, Box<dyn Operation>>,
}

impl OperationRegistry {
    pub fn new() -> Self {
        Self {
            operations: BTreeMap::new(),
        }
    }

    /// Registry populated from the built-in operation table
    pub fn with_default_operations() -> Result<Self> {
        let mut registry = Self::new();

        for operation in builtin_operations() {
            registry.register_plugin(operation)?;
        }

        Ok(registry)
    }

    /// Register an operation under its own name
    pub fn register_plugin(&mut self, operation: Box<dyn Operation>) -> Result<()> {
        let name = operation.name();
        self.register(name, operation)
    }

    /// Register an operation under an explicit name
    pub fn register(&mut self, name: &str, operation: Box<dyn Operation>) -> Result<()> {
        let key = normalize(name);
        if key.is_empty() {
            return Err(CalcError::InvalidPlugin(
                "operation name cannot be empty".into(),
            ));
        }
        if self.operations.contains_key(&key) {
            return Err(CalcError::DuplicateRegistration(key));
        }

        debug!(operation = %key, plugin = operation.name(), "registered operation");
        self.operations.insert(key, operation);
        Ok(())
    }

    /// Find an operation by name (case-insensitive)
    pub fn lookup(&self, name: &str) -> Result<&dyn Operation> {
        self.operations
            .get(&normalize(name))
            .map(|boxed| &**boxed)
            .ok_or_else(|| CalcError::OperationNotFound(name.trim().to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.operations.contains_key(&normalize(name))
    }

    /// Registered names in sorted order
    pub fn operation_names(&self) -> Vec<&str> {
        self.operations.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

pub(crate) fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::add::Add;
    use crate::plugins::divide::Divide;
    use crate::plugins::multiply::Multiply;

    #[test]
    fn test_default_operations_registered() {
        let registry = OperationRegistry::with_default_operations().unwrap();
        assert_eq!(
            registry.operation_names(),
            vec!["add", "divide", "multiply", "subtract"]
        );
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let registry = OperationRegistry::with_default_operations().unwrap();
        let op = registry.lookup("  MuLtIpLy ").unwrap();
        assert_eq!(op.name(), "multiply");
    }

    #[test]
    fn test_lookup_missing() {
        let registry = OperationRegistry::with_default_operations().unwrap();
        let err = registry.lookup("modulo").err().unwrap();
        assert_eq!(err, CalcError::OperationNotFound("modulo".into()));
    }

    #[test]
    fn test_duplicate_rejected_both_orders() {
        let mut registry = OperationRegistry::new();
        registry.register_plugin(Box::new(Add)).unwrap();
        let err = registry.register("ADD", Box::new(Multiply)).unwrap_err();
        assert_eq!(err, CalcError::DuplicateRegistration("add".into()));

        let mut registry = OperationRegistry::new();
        registry.register("add", Box::new(Multiply)).unwrap();
        let err = registry.register_plugin(Box::new(Add)).unwrap_err();
        assert_eq!(err, CalcError::DuplicateRegistration("add".into()));

        // The first registration is kept
        assert_eq!(registry.lookup("add").unwrap().name(), "multiply");
    }

    #[test]
    fn test_alias_registration() {
        let mut registry = OperationRegistry::new();
        registry.register("Over", Box::new(Divide)).unwrap();
        assert!(registry.contains("over"));
        assert!(!registry.contains("divide"));
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut registry = OperationRegistry::new();
        let err = registry.register("   ", Box::new(Add)).unwrap_err();
        assert!(matches!(err, CalcError::InvalidPlugin(_)));
        assert!(registry.is_empty());
    }
}
