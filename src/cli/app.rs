use super::autocomplete::Autocompleter;
use super::session::{Session, Tone};
use super::ui;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use std::io;
use tui_textarea::{Input, Key, TextArea};

pub struct App<'a> {
    pub textarea: TextArea<'a>,
    pub messages: Vec<Line<'static>>,
    pub session: Session,
    pub exit: bool,

    // Autocomplete State
    pub autocompleter: Autocompleter,
    pub suggestions: Vec<String>,
    pub suggestion_index: usize,
    pub popup_open: bool,
}

impl<'a> App<'a> {
    pub fn new(session: Session) -> Self {
        Self {
            textarea: Self::new_textarea(),
            messages: vec![
                Line::from(vec![Span::styled(
                    "== Welcome to REPL Calculator ==",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )]),
                Line::from("Type 'menu' for options, or enter calculations (e.g., add 2 3)."),
                Line::from("-".repeat(50)),
            ],
            session,
            exit: false,
            autocompleter: Autocompleter::new(),
            suggestions: Vec::new(),
            suggestion_index: 0,
            popup_open: false,
        }
    }

    fn new_textarea() -> TextArea<'static> {
        let mut textarea = TextArea::default();
        textarea.set_placeholder_text("<operation> <a> <b>  (Enter to run, Tab to complete, Esc to quit)");
        textarea.set_block(
            ratatui::widgets::Block::default()
                .borders(ratatui::widgets::Borders::ALL)
                .title(" >> "),
        );
        textarea
    }

    fn reset_textarea(&mut self) {
        self.textarea = Self::new_textarea();
    }

    pub fn run(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let res = self.run_loop(&mut terminal);

        // Restore terminal even when the loop failed
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        res
    }

    fn run_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| ui::draw(f, self))?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if self.popup_open {
                    match key.code {
                        KeyCode::Down => {
                            if !self.suggestions.is_empty() {
                                self.suggestion_index =
                                    (self.suggestion_index + 1) % self.suggestions.len();
                            }
                            continue;
                        }
                        KeyCode::Up => {
                            if !self.suggestions.is_empty() {
                                self.suggestion_index = (self.suggestion_index
                                    + self.suggestions.len()
                                    - 1)
                                    % self.suggestions.len();
                            }
                            continue;
                        }
                        KeyCode::Enter | KeyCode::Tab => {
                            self.accept_suggestion();
                            continue;
                        }
                        KeyCode::Esc => {
                            self.popup_open = false;
                            continue;
                        }
                        _ => {
                            self.popup_open = false;
                        }
                    }
                }

                match key.code {
                    KeyCode::Esc => {
                        self.exit = true;
                    }
                    KeyCode::Enter => {
                        self.submit();
                    }
                    KeyCode::Tab => {
                        self.update_suggestions();
                        self.popup_open = !self.suggestions.is_empty();
                    }
                    _ => {
                        self.textarea.input(key);
                        // Only the first word names an operation or command
                        if let KeyCode::Char(c) = key.code {
                            if c.is_alphabetic() && self.at_first_word() {
                                self.update_suggestions();
                                self.popup_open = !self.suggestions.is_empty();
                            }
                        }
                    }
                }
            }

            if self.exit {
                return Ok(());
            }
        }
    }

    fn current_line(&self) -> String {
        self.textarea.lines().first().cloned().unwrap_or_default()
    }

    fn at_first_word(&self) -> bool {
        let (_, col) = self.textarea.cursor();
        !self
            .current_line()
            .chars()
            .take(col)
            .any(char::is_whitespace)
    }

    fn current_word(&self) -> String {
        let (_, col) = self.textarea.cursor();
        let prefix: Vec<char> = self.current_line().chars().take(col).collect();

        match prefix.iter().rposition(|c| c.is_whitespace()) {
            Some(sep) => prefix[sep + 1..].iter().collect(),
            None => prefix.iter().collect(),
        }
    }

    fn update_suggestions(&mut self) {
        let word = self.current_word();
        if word.is_empty() {
            self.suggestions.clear();
            self.popup_open = false;
            return;
        }

        self.suggestions = self
            .autocompleter
            .get_suggestions(&word, self.session.calculator());
        self.suggestion_index = 0;
    }

    fn accept_suggestion(&mut self) {
        let Some(suggestion) = self.suggestions.get(self.suggestion_index).cloned() else {
            return;
        };

        for _ in 0..self.current_word().chars().count() {
            self.textarea.input(Input {
                key: Key::Backspace,
                ctrl: false,
                alt: false,
                shift: false,
            });
        }

        self.textarea.insert_str(&suggestion);
        self.textarea.insert_char(' ');
        self.popup_open = false;
    }

    fn submit(&mut self) {
        let input = self.current_line();
        if input.trim().is_empty() {
            return;
        }

        self.messages.push(Line::from(vec![
            Span::styled(">> ", Style::default().fg(Color::Yellow)),
            Span::raw(input.clone()),
        ]));
        self.reset_textarea();

        let reply = self.session.handle(&input);
        let style = match reply.tone {
            Tone::Info => Style::default(),
            Tone::Success => Style::default().fg(Color::Green),
            Tone::Error => Style::default().fg(Color::Red),
        };

        for line in reply.lines {
            self.messages.push(Line::from(Span::styled(line, style)));
        }

        if reply.exit {
            self.exit = true;
        }
    }
}
