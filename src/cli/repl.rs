//! Read-eval-print loop over the roster
//!
//! [`Session`] owns the roster for one run of the program and is generic over
//! its streams, so tests drive it with in-memory buffers exactly as the
//! binary drives it with stdin, stdout and stderr.

use super::display::render_table;
use super::help::REPL_HELP;
use crate::config::RosterConfig;
use crate::core::parse_grades;
use crate::error::{ErrorCode, Result, RosterError};
use crate::roster::{Roster, Student};
use crate::storage::StudentStore;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// One parsed REPL line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    Add,
    List,
    Select,
    Save(PathBuf),
    Load(PathBuf),
    Help,
    /// Blank line, nothing to do
    Empty,
}

impl Command {
    /// Parse a line typed at the prompt.
    ///
    /// The keyword is case-insensitive. The file name after `save`/`load` keeps
    /// its case and may contain spaces.
    pub fn parse(line: &str) -> Result<Self> {
        let trimmed = line.trim();
        let Some(keyword) = trimmed.split_whitespace().next() else {
            return Ok(Self::Empty);
        };
        let rest = trimmed[keyword.len()..].trim();
        let keyword = keyword.to_lowercase();

        let command = match (keyword.as_str(), rest.is_empty()) {
            ("exit", true) => Self::Exit,
            ("add", true) => Self::Add,
            ("list", true) => Self::List,
            ("select", true) => Self::Select,
            ("help", true) => Self::Help,
            ("save" | "load", true) => return Err(RosterError::missing_argument(&keyword)),
            ("save", false) => Self::Save(PathBuf::from(rest)),
            ("load", false) => Self::Load(PathBuf::from(rest)),
            _ => return Err(RosterError::unknown_command(&trimmed.to_lowercase())),
        };
        Ok(command)
    }
}

/// Whether the loop should keep reading after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

fn terminal_error(err: io::Error) -> RosterError {
    RosterError::input(
        ErrorCode::INPUT_TERMINAL,
        format!("terminal I/O failed: {err}"),
    )
}

/// Interactive session state and streams
pub struct Session<R, W, E> {
    input: R,
    out: W,
    err: E,
    roster: Roster,
    store: StudentStore,
    prompt: String,
}

impl<R: BufRead, W: Write, E: Write> Session<R, W, E> {
    pub fn new(config: &RosterConfig, input: R, out: W, err: E) -> Self {
        Self {
            input,
            out,
            err,
            roster: Roster::new(config.average),
            store: StudentStore::new(config.schema_path.clone()),
            prompt: config.prompt.clone(),
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Tear the session down, returning the roster and both output streams
    pub fn into_inner(self) -> (Roster, W, E) {
        (self.roster, self.out, self.err)
    }

    /// Run until `exit` or end of input.
    ///
    /// Command failures are reported on the error stream and the loop goes
    /// on; only a failure of the streams themselves ends the session early.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            write!(self.out, "{}", self.prompt)?;
            self.out.flush()?;

            let Some(line) = self.read_line()? else {
                debug!("End of input, leaving REPL");
                writeln!(self.out)?;
                break;
            };
            trace!(line = %line.trim_end(), "Read command line");

            let outcome = Command::parse(&line).and_then(|command| self.execute(command));
            match outcome {
                Ok(Flow::Exit) => break,
                Ok(Flow::Continue) => {}
                Err(e) if !e.is_recoverable() => return Err(e.into()),
                Err(e) => self.report(&e)?,
            }
        }
        Ok(())
    }

    /// Execute one command against the roster
    pub fn execute(&mut self, command: Command) -> Result<Flow> {
        debug!(?command, "Executing command");
        match command {
            Command::Exit => return Ok(Flow::Exit),
            Command::Empty => {}
            Command::Add => {
                let student = self.read_student()?;
                self.roster.add(student);
            }
            Command::List => self.print(&render_table(self.roster.students()))?,
            Command::Select => self.print(&render_table(self.roster.select()))?,
            Command::Save(path) => {
                self.store.save(&path, self.roster.students())?;
                self.print(&format!(
                    "Saved {} student(s) to {}\n",
                    self.roster.len(),
                    path.display()
                ))?;
            }
            Command::Load(path) => {
                self.load_file(&path)?;
            }
            Command::Help => self.print(REPL_HELP)?,
        }
        Ok(Flow::Continue)
    }

    /// Validate and load `path`, replacing the roster only on success
    pub fn load_file(&mut self, path: &Path) -> Result<usize> {
        let students = self.store.load(path)?;
        let count = students.len();
        self.roster.replace(students);
        self.print(&format!(
            "Validation succeeded!\nLoaded {} student(s) from {}\n",
            count,
            path.display()
        ))?;
        Ok(count)
    }

    /// Print an error to the error stream
    pub fn report(&mut self, error: &RosterError) -> io::Result<()> {
        debug!(
            code = error.code(),
            kind = error.description(),
            "Command failed: {}",
            error
        );
        if error.is_validation() {
            writeln!(self.err, "Validation failed!")?;
            for line in error.user_message().lines() {
                writeln!(self.err, "  {line}")?;
            }
        } else {
            writeln!(self.err, "Error: {}", error.user_message())?;
        }
        self.err.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn ask(&mut self, label: &str) -> Result<String> {
        self.print(label)?;
        match self.read_line().map_err(terminal_error)? {
            Some(line) => Ok(line.trim().to_string()),
            None => Err(RosterError::input(
                ErrorCode::INPUT_CLOSED,
                "input closed before the student was complete",
            )),
        }
    }

    fn read_student(&mut self) -> Result<Student> {
        let name = self.ask("Surname and initials: ")?;
        let group_number = self.ask("Group number: ")?;
        let grades = parse_grades(&self.ask("Grades (space separated): ")?)?;
        Ok(Student::new(name, group_number, grades))
    }

    fn print(&mut self, text: &str) -> Result<()> {
        self.out
            .write_all(text.as_bytes())
            .and_then(|()| self.out.flush())
            .map_err(terminal_error)
    }
}
