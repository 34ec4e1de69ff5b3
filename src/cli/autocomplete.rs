use super::command::COMMANDS;
use rustcalc::Calculator;
use std::collections::BTreeSet;

pub struct Autocompleter {
    commands: BTreeSet<String>,
}

impl Autocompleter {
    pub fn new() -> Self {
        Self {
            commands: COMMANDS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Commands and registered operation names starting with `input`
    pub fn get_suggestions(&self, input: &str, calculator: &Calculator) -> Vec<String> {
        let prefix = input.to_lowercase();
        let mut suggestions: BTreeSet<String> = BTreeSet::new();

        for command in &self.commands {
            if command.starts_with(&prefix) {
                suggestions.insert(command.clone());
            }
        }

        // Operations come from the live registry, so manifest aliases show up too
        for name in calculator.operations() {
            if name.starts_with(&prefix) {
                suggestions.insert(name.to_string());
            }
        }

        suggestions.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestions_include_operations_and_commands() {
        let calculator = Calculator::new().unwrap();
        let completer = Autocompleter::new();

        assert_eq!(completer.get_suggestions("d", &calculator), vec!["divide"]);
        assert_eq!(
            completer.get_suggestions("E", &calculator),
            vec!["exit", "export"]
        );
        assert!(completer.get_suggestions("zzz", &calculator).is_empty());
    }
}
