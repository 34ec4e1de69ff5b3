use super::command::{COMMANDS, Command};
use rustcalc::{CalcError, Calculator, HistoryEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Error,
}

/// Output produced for one line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub tone: Tone,
    pub lines: Vec<String>,
    pub exit: bool,
}

impl Reply {
    fn info(lines: Vec<String>) -> Self {
        Self {
            tone: Tone::Info,
            lines,
            exit: false,
        }
    }

    fn success(line: String) -> Self {
        Self {
            tone: Tone::Success,
            lines: vec![line],
            exit: false,
        }
    }

    fn error(line: String) -> Self {
        Self {
            tone: Tone::Error,
            lines: vec![line],
            exit: false,
        }
    }
}

/// Interactive session state, independent of the terminal
pub struct Session {
    calculator: Calculator,
}

impl Session {
    pub fn new(calculator: Calculator) -> Self {
        Self { calculator }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn handle(&mut self, input: &str) -> Reply {
        let command = match Command::parse(input) {
            Ok(command) => command,
            Err(usage) => return Reply::error(usage),
        };

        match command {
            Command::Menu => Reply::info(self.menu()),
            Command::History => {
                if self.calculator.history().is_empty() {
                    Reply::info(vec!["No calculations recorded.".into()])
                } else {
                    Reply::info(self.calculator.history().iter().map(format_entry).collect())
                }
            }
            Command::Last => match self.calculator.last() {
                Some(entry) => Reply::info(vec![format_entry(entry)]),
                None => Reply::info(vec!["No history available".into()]),
            },
            Command::Clear => {
                self.calculator.clear_history();
                Reply::info(vec!["History cleared.".into()])
            }
            Command::Export => match self.calculator.history().export_json() {
                Ok(json) => Reply::info(json.lines().map(str::to_string).collect()),
                Err(e) => Reply::error(format!("Error: {}", e)),
            },
            Command::Exit => Reply {
                tone: Tone::Info,
                lines: vec!["Exiting calculator. Goodbye!".into()],
                exit: true,
            },
            Command::Calculate { operation, a, b } => {
                match self.calculator.execute(&operation, a, b) {
                    Ok(result) => Reply::success(format!("Result: {}", result)),
                    Err(CalcError::OperationNotFound(name)) => {
                        Reply::error(format!("Operation '{}' not found.", name))
                    }
                    Err(e) => Reply::error(format!("Error: {}", e)),
                }
            }
        }
    }

    fn menu(&self) -> Vec<String> {
        let mut lines = vec![
            "Operations:".to_string(),
            format!("  {}", self.calculator.operations().join(", ")),
            "Usage: <operation> <number1> <number2>   e.g. add 2 3".to_string(),
            "Commands:".to_string(),
        ];
        lines.push(format!("  {}", COMMANDS.join(", ")));
        lines
    }
}

/// Render a history entry as `a operation b = result`
pub fn format_entry(entry: &HistoryEntry) -> String {
    format!("{} {} {} = {}", entry.a, entry.operation, entry.b, entry.result)
}
