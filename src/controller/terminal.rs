//! Line-oriented terminal controller.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crossterm::style::Stylize;
use tracing::{debug, instrument, warn};
use unicode_width::UnicodeWidthStr;

use super::{Controller, ControllerError, Intent, Notice, StateView};
use crate::{Difficulty, LobbyAction, MainMenuAction, PlayerIntent, secret_bound};

const PROMPT: &str = "(?) ";
const CONTINUE_PROMPT: &str = "Press Enter to continue...";
const RULE_WIDTH: usize = 48;

/// Controller that prints framed panels and reads numbered choices line by line.
///
/// Input and output are generic so the same controller runs against the real
/// terminal or against in-memory buffers.
#[derive(Debug)]
pub struct TerminalController<R, W> {
    input: R,
    output: W,
    notices: VecDeque<Notice>,
}

impl TerminalController<io::StdinLock<'static>, io::Stdout> {
    /// Creates a controller bound to the process stdin and stdout.
    #[instrument]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalController<R, W> {
    /// Creates a controller over the given input and output.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            notices: VecDeque::new(),
        }
    }

    /// Consumes the controller and returns its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, ControllerError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            warn!("Input stream closed");
            return Err(ControllerError::new("Input stream closed"));
        }
        Ok(line.trim().to_string())
    }

    /// Prompts until the answer parses and passes `valid`.
    ///
    /// Unparsable answers print "wrong type", rejected ones "wrong value".
    fn ask<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Option<T>,
        valid: impl Fn(&T) -> bool,
    ) -> Result<T, ControllerError> {
        loop {
            let line = self.read_line(prompt)?;

            let Some(value) = parse(&line) else {
                debug!(input = %line, "Rejected input type");
                writeln!(self.output, "{}", "wrong type".red())?;
                continue;
            };

            if valid(&value) {
                return Ok(value);
            }

            debug!(input = %line, "Rejected input value");
            writeln!(self.output, "{}", "wrong value".red())?;
        }
    }

    fn select<T: Copy>(&mut self, prompt: &str, choices: &[(i64, T)]) -> Result<T, ControllerError> {
        let key = self.ask(
            prompt,
            |s| s.parse::<i64>().ok(),
            |key| choices.iter().any(|(k, _)| k == key),
        )?;

        choices
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, choice)| *choice)
            .ok_or_else(|| ControllerError::new(format!("No choice bound to key {}", key)))
    }

    fn panel(&mut self, title: Option<&str>, lines: &[String]) -> io::Result<()> {
        let title_width = title.map_or(0, |t| t.width() + 2);
        let inner = lines
            .iter()
            .map(|l| l.width())
            .max()
            .unwrap_or(0)
            .max(title_width);
        let span = inner + 2;

        match title {
            Some(t) => writeln!(
                self.output,
                "╭─ {} {}╮",
                t.bold(),
                "─".repeat(span - title_width - 1)
            )?,
            None => writeln!(self.output, "╭{}╮", "─".repeat(span))?,
        }
        for line in lines {
            writeln!(
                self.output,
                "│ {}{} │",
                line,
                " ".repeat(inner - line.width())
            )?;
        }
        writeln!(self.output, "╰{}╯", "─".repeat(span))
    }

    fn rule(&mut self, title: &str) -> io::Result<()> {
        let side = RULE_WIDTH.saturating_sub(title.width() + 2) / 2;
        writeln!(
            self.output,
            "{} {} {}",
            "─".repeat(side),
            title,
            "─".repeat(side)
        )
    }

    fn table(&mut self, columns: &[&str], rows: &[[&str; 2]]) -> io::Result<()> {
        let mut widths: Vec<usize> = columns.iter().map(|c| c.width()).collect();
        for row in rows {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.width());
            }
        }

        let border = |left: &str, mid: &str, right: &str| {
            let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
            format!("{}{}{}", left, segments.join(mid), right)
        };
        let format_row = |cells: &[&str]| {
            let padded: Vec<String> = cells
                .iter()
                .zip(widths.iter())
                .map(|(cell, w)| format!(" {}{} ", cell, " ".repeat(w - cell.width())))
                .collect();
            format!("│{}│", padded.join("│"))
        };

        writeln!(self.output, "{}", border("┌", "┬", "┐"))?;
        writeln!(self.output, "{}", format_row(columns))?;
        writeln!(self.output, "{}", border("├", "┼", "┤"))?;
        for row in rows {
            writeln!(self.output, "{}", format_row(&row[..]))?;
        }
        writeln!(self.output, "{}", border("└", "┴", "┘"))
    }

    fn flush_notices(&mut self) -> io::Result<()> {
        while let Some(notice) = self.notices.pop_front() {
            match notice {
                Notice::TooHigh => {
                    writeln!(self.output, "{} Guess is too high", "(v)".yellow())?
                }
                Notice::TooLow => writeln!(self.output, "{} Guess is too low", "(^)".yellow())?,
            }
        }
        Ok(())
    }
}

/// Numeric key shown for a main menu action.
///
/// New Lobby moves to key 0 when no saved lobby can be loaded.
pub(crate) fn main_menu_key(action: MainMenuAction, load_offered: bool) -> i64 {
    match action {
        MainMenuAction::LoadLobby => 0,
        MainMenuAction::NewLobby if load_offered => 1,
        MainMenuAction::NewLobby => 0,
        MainMenuAction::Credits => 2,
        MainMenuAction::Quit => 99,
    }
}

/// Numeric key shown for a lobby action.
pub(crate) fn lobby_key(action: LobbyAction, load_offered: bool) -> i64 {
    match action {
        LobbyAction::LoadGame => 0,
        LobbyAction::NewGame if load_offered => 1,
        LobbyAction::NewGame => 0,
        LobbyAction::Quit => 99,
    }
}

fn main_menu_choices(actions: &[MainMenuAction]) -> Vec<(i64, MainMenuAction)> {
    let load_offered = actions.contains(&MainMenuAction::LoadLobby);
    let mut choices: Vec<_> = actions
        .iter()
        .map(|&a| (main_menu_key(a, load_offered), a))
        .collect();
    choices.sort_by_key(|(key, _)| *key);
    choices
}

fn lobby_choices(actions: &[LobbyAction]) -> Vec<(i64, LobbyAction)> {
    let load_offered = actions.contains(&LobbyAction::LoadGame);
    let mut choices: Vec<_> = actions
        .iter()
        .map(|&a| (lobby_key(a, load_offered), a))
        .collect();
    choices.sort_by_key(|(key, _)| *key);
    choices
}

fn difficulty_choices(difficulties: &[Difficulty]) -> Vec<(i64, Difficulty)> {
    (0_i64..).zip(difficulties.iter().copied()).collect()
}

fn menu_lines<T: std::fmt::Display>(choices: &[(i64, T)]) -> Vec<String> {
    choices
        .iter()
        .map(|(key, choice)| format!("{}. {}", key, choice))
        .collect()
}

fn parse_guess(input: &str) -> Option<PlayerIntent> {
    match input {
        "q" | "Q" | "quit" => Some(PlayerIntent::Quit),
        other => other.parse::<i64>().ok().map(PlayerIntent::Guess),
    }
}

impl<R: BufRead, W: Write> Controller for TerminalController<R, W> {
    #[instrument(skip(self, view), fields(screen = %view.kind()))]
    fn draw(&mut self, view: StateView<'_>) -> Result<(), ControllerError> {
        match view {
            StateView::MainMenu { actions } => {
                let lines = menu_lines(&main_menu_choices(actions));
                self.panel(Some("Guess the Number"), &lines)?;
            }
            StateView::Lobby { state, actions } => {
                self.panel(Some("Lobby"), &[format!("Score: {}", state.score())])?;
                let lines = menu_lines(&lobby_choices(actions));
                self.panel(None, &lines)?;
            }
            StateView::NewGameSetup { .. } => self.rule("Setting up new game")?,
            StateView::Game(state) => {
                let difficulty = state.settings().difficulty();
                self.panel(
                    None,
                    &[
                        format!("Difficulty: {}", difficulty),
                        format!("Max: {}", secret_bound(difficulty)),
                        format!("Guess count: {}", state.report().guess_count()),
                        "q: save and quit".to_string(),
                    ],
                )?;
                self.flush_notices()?;
            }
            StateView::Victory { settings, report } => {
                self.panel(
                    None,
                    &[
                        format!(
                            "difficulty: {}, score: {}",
                            settings.difficulty(),
                            report.score()
                        ),
                        "Victory! \\^-^/".to_string(),
                    ],
                )?;
            }
            StateView::Credits { columns, rows } => self.table(columns, rows)?,
        }
        self.output.flush()?;
        Ok(())
    }

    #[instrument(skip(self, view), fields(screen = %view.kind()))]
    fn update(&mut self, view: StateView<'_>) -> Result<Intent, ControllerError> {
        let intent = match view {
            StateView::MainMenu { actions } => {
                Intent::MainMenu(self.select(PROMPT, &main_menu_choices(actions))?)
            }
            StateView::Lobby { actions, .. } => {
                Intent::Lobby(self.select(PROMPT, &lobby_choices(actions))?)
            }
            StateView::NewGameSetup { difficulties } => {
                let choices = difficulty_choices(difficulties);
                let labels: Vec<String> = choices
                    .iter()
                    .map(|(key, difficulty)| format!("{}:{}", key, difficulty))
                    .collect();
                let prompt = format!("{} {}", labels.join(" "), PROMPT);
                Intent::Difficulty(self.select(&prompt, &choices)?)
            }
            StateView::Game(_) => Intent::Player(self.ask(PROMPT, parse_guess, |_| true)?),
            StateView::Victory { .. } | StateView::Credits { .. } => {
                self.read_line(CONTINUE_PROMPT)?;
                Intent::Continue
            }
        };
        debug!(intent = ?intent, "Intent read");
        Ok(intent)
    }

    fn on_notice(&mut self, notice: Notice) {
        self.notices.push_back(notice);
    }
}
