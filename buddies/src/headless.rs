//! Headless mode for Math Buddies.
//!
//! A line-oriented protocol over stdin/stdout for scripted play and automated
//! testing. No terminal UI is drawn.

use std::io::{self, BufRead, Write};

use buddies_core::{Banner, GameDriver, GameStatus, ProblemId};

use crate::ui::glyphs::{object_caption, visual_lines};
use crate::ui::widgets::header::flames;

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Exit,
    Quit,
    Status,
    Help,
    Clear,
    Answer(u32),
    Unknown(String),
}

/// Whether to keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Parse one line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let command = match line.strip_prefix('#') {
        Some(rest) => match rest.trim().to_lowercase().as_str() {
            "start" => Command::Start,
            "exit" => Command::Exit,
            "quit" => Command::Quit,
            "status" => Command::Status,
            "help" => Command::Help,
            "clear" => Command::Clear,
            _ => Command::Unknown(line.to_string()),
        },
        None => match line.parse::<u32>() {
            Ok(value) => Command::Answer(value),
            Err(_) => Command::Unknown(line.to_string()),
        },
    };
    Some(command)
}

const HELP: &[&str] = &[
    "  #start   - Start a new game",
    "  #exit    - Return to the menu",
    "  #quit    - Leave the program",
    "  #status  - Show score, streak and the current problem",
    "  #clear   - Clear the typed answer",
    "  #help    - Show this help",
    "  <number> - Answer the current problem",
];

/// A game driven by text commands.
pub struct HeadlessGame {
    driver: GameDriver,
}

impl HeadlessGame {
    pub fn new(driver: GameDriver) -> Self {
        Self { driver }
    }

    /// Run one command, writing its output to `out`.
    pub async fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<Flow> {
        match command {
            Command::Start => {
                if self.driver.start() {
                    writeln!(out, "[START] Let's count!")?;
                    self.print_problem(out, "[PROBLEM]")?;
                } else {
                    writeln!(out, "[ERROR] Already playing. Type #exit first.")?;
                }
            }
            Command::Exit => {
                if self.driver.exit() {
                    writeln!(out, "[MENU] Final score: {}", self.driver.session().score())?;
                } else {
                    writeln!(out, "[ERROR] Not playing.")?;
                }
            }
            Command::Quit => {
                writeln!(out, "Goodbye!")?;
                return Ok(Flow::Quit);
            }
            Command::Status => self.print_status(out)?,
            Command::Help => {
                writeln!(out, "[HELP]")?;
                for line in HELP {
                    writeln!(out, "{line}")?;
                }
            }
            Command::Clear => {
                self.driver.clear_input();
                writeln!(out, "[INPUT] cleared")?;
            }
            Command::Answer(value) => self.answer(value, out).await?,
            Command::Unknown(text) => {
                writeln!(out, "[ERROR] Unknown command '{text}'. Type #help for help.")?;
            }
        }
        out.flush()?;
        Ok(Flow::Continue)
    }

    async fn answer<W: Write>(&mut self, value: u32, out: &mut W) -> io::Result<()> {
        if self.driver.session().status() != GameStatus::Playing {
            return writeln!(out, "[ERROR] Type #start to play.");
        }
        if value > 99 {
            return writeln!(out, "[ERROR] Answers have at most two digits.");
        }

        self.driver.clear_input();
        for c in value.to_string().chars() {
            self.driver.press_digit(c);
        }
        if self.driver.submit().is_none() {
            return writeln!(out, "[ERROR] Wait for the next problem.");
        }

        if let Banner::Feedback(feedback) = self.driver.session().banner() {
            writeln!(out, "[FEEDBACK] {}", feedback.message)?;
        }
        let session = self.driver.session();
        writeln!(out, "[SCORE] {} {}", session.score(), flames(session.streak()))?;

        self.follow_effects(out).await
    }

    /// Report encouragement and the next problem as they land.
    async fn follow_effects<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let mut shown = self.current_problem();
        loop {
            let pending = self.driver.has_pending();
            let changed = match self.driver.try_next_event() {
                Some(changed) => changed,
                None if pending => self.driver.next_event().await,
                None => return Ok(()),
            };
            if !changed {
                continue;
            }

            let current = self.current_problem();
            if current != shown {
                shown = current;
                self.print_problem(out, "[NEXT]")?;
            } else if let Some(text) = self.driver.session().encouragement() {
                writeln!(out, "[BUDDY] {text}")?;
            }
            out.flush()?;
        }
    }

    fn current_problem(&self) -> Option<ProblemId> {
        self.driver.session().problem().map(|p| p.id())
    }

    fn print_problem<W: Write>(&self, out: &mut W, tag: &str) -> io::Result<()> {
        let Some(problem) = self.driver.session().problem() else {
            return Ok(());
        };
        writeln!(
            out,
            "{tag} {}   (count the {})",
            problem,
            object_caption(problem.object_type())
        )?;
        let visual = buddies_core::render(problem.object_type(), problem.num2());
        for line in visual_lines(&visual, false) {
            writeln!(out, "    {line}")?;
        }
        Ok(())
    }

    fn print_status<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let session = self.driver.session();
        writeln!(out, "[STATUS]")?;
        writeln!(out, "  State: {:?}", session.status())?;
        writeln!(out, "  Score: {}", session.score())?;
        writeln!(out, "  Streak: {}", session.streak())?;
        if let Some(problem) = session.problem() {
            writeln!(out, "  Problem: {problem}")?;
            writeln!(out, "  Typed: {}", session.input().as_str())?;
        }
        Ok(())
    }
}

/// Run the game in headless mode, reading commands from stdin.
pub async fn run_headless(driver: GameDriver) -> io::Result<()> {
    let mut game = HeadlessGame::new(driver);
    let mut stdout = io::stdout();

    println!("=== Math Buddies Headless Mode ===");
    println!();
    println!("Commands:");
    for line in HELP {
        println!("{line}");
    }
    println!();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Error reading input: {e}");
                break;
            }
        };

        let Some(command) = parse_command(&line) else {
            continue;
        };
        if game.execute(command, &mut stdout).await? == Flow::Quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use buddies_core::testing::MockEncourager;
    use buddies_core::{GameConfig, Session};

    fn game(mock: MockEncourager) -> HeadlessGame {
        HeadlessGame::new(GameDriver::new(
            Session::seeded(21),
            Arc::new(mock),
            &GameConfig::default(),
        ))
    }

    async fn run(game: &mut HeadlessGame, command: Command) -> String {
        let mut out = Vec::new();
        game.execute(command, &mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    fn answer(game: &HeadlessGame) -> u32 {
        game.driver.session().problem().unwrap().answer()
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("   "), None);
        assert_eq!(parse_command("#start"), Some(Command::Start));
        assert_eq!(parse_command("# QUIT "), Some(Command::Quit));
        assert_eq!(parse_command(" 12 "), Some(Command::Answer(12)));
        assert_eq!(
            parse_command("twelve"),
            Some(Command::Unknown("twelve".to_string()))
        );
        assert_eq!(
            parse_command("#save"),
            Some(Command::Unknown("#save".to_string()))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_answer_before_start() {
        let mut game = game(MockEncourager::replying("Hi"));
        let out = run(&mut game, Command::Answer(3)).await;
        assert!(out.contains("#start"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_correct_answer_prints_cheer_then_next_problem() {
        let mut game = game(MockEncourager::replying("Math star!"));
        let out = run(&mut game, Command::Start).await;
        assert!(out.contains("[PROBLEM]"));

        let correct = answer(&game);
        let out = run(&mut game, Command::Answer(correct)).await;
        assert!(out.contains("[FEEDBACK] Correct!"));
        assert!(out.contains("[SCORE] 10 🔥"));
        let cheer = out.find("[BUDDY] Math star!").unwrap();
        let next = out.find("[NEXT]").unwrap();
        assert!(cheer < next);
    }

    #[tokio::test(start_paused = true)]
    async fn test_wrong_answer_keeps_problem() {
        let mut game = game(MockEncourager::failing());
        run(&mut game, Command::Start).await;
        let wrong = answer(&game) + 1;

        let out = run(&mut game, Command::Answer(wrong)).await;
        assert!(out.contains("[FEEDBACK] Not quite! Try again."));
        assert!(out.contains("[BUDDY] Keep trying!"));
        assert!(!out.contains("[NEXT]"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_three_digit_answer_rejected() {
        let mut game = game(MockEncourager::replying("Hi"));
        run(&mut game, Command::Start).await;
        let out = run(&mut game, Command::Answer(123)).await;
        assert!(out.contains("two digits"));
        assert_eq!(game.driver.session().streak(), 0);
        assert!(game.driver.session().feedback().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_exit_and_quit() {
        let mut game = game(MockEncourager::replying("Hi"));
        assert!(run(&mut game, Command::Exit).await.contains("Not playing"));
        run(&mut game, Command::Start).await;
        assert!(run(&mut game, Command::Exit).await.contains("Final score: 0"));

        let mut out = Vec::new();
        let flow = game.execute(Command::Quit, &mut out).await.unwrap();
        assert_eq!(flow, Flow::Quit);
    }
}
