use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref CALCULATION: Regex = Regex::new(r"^\s*(\S+)\s+(\S+)\s+(\S+)\s*$").unwrap();
}

pub const USAGE: &str = "Invalid input! Format: <operation> <number1> <number2>";

/// Words understood by the interactive session besides operation names
pub const COMMANDS: &[&str] = &[
    "menu", "help", "history", "last", "clear", "export", "exit", "quit",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Menu,
    History,
    Last,
    Clear,
    Export,
    Exit,
    Calculate {
        operation: String,
        a: String,
        b: String,
    },
}

impl Command {
    /// Parse one line of input. Session commands win over operation names.
    pub fn parse(input: &str) -> Result<Self, String> {
        let trimmed = input.trim();

        match trimmed.to_lowercase().as_str() {
            "menu" | "help" => return Ok(Self::Menu),
            "history" => return Ok(Self::History),
            "last" => return Ok(Self::Last),
            "clear" => return Ok(Self::Clear),
            "export" => return Ok(Self::Export),
            "exit" | "quit" => return Ok(Self::Exit),
            _ => {}
        }

        let caps = CALCULATION
            .captures(trimmed)
            .ok_or_else(|| USAGE.to_string())?;

        Ok(Self::Calculate {
            operation: caps[1].to_lowercase(),
            a: caps[2].to_string(),
            b: caps[3].to_string(),
        })
    }
}
