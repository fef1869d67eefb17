#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::{
    config::{self, OutputFormat},
    constants::{BACK_WORDS, LANDING_BANNER, LANDING_CHOICES, QUIT_WORDS},
    error::GpaError,
    form::{CgpaForm, Form, SgpaForm, Slot},
    notify::Notification,
    report::{self, GpaReport},
    scale::GradeScale,
};

/// Which screen the session is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Choice between SGPA and CGPA.
    Landing,
    /// SGPA form.
    Sgpa,
    /// CGPA form.
    Cgpa,
}

/// What the user asked for at a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Reply {
    /// Text to use.
    Text(String),
    /// Leave the current form.
    Back,
    /// End the session, also used on end of input.
    Quit,
}

/// What happened once a form screen was left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Exit {
    /// Back to the landing screen.
    Landing,
    /// The session should end.
    Quit,
}

/// Line based input and output for a session.
struct Console<R, W> {
    /// Where answers are read from.
    input: R,
    /// Where prompts and results are written.
    out:   W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Writes `prompt` and reads one answer.
    fn ask(&mut self, prompt: &str) -> Result<Reply> {
        write!(self.out, "{prompt} ").context("Failed to write prompt")?;
        self.out.flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read answer")?;
        if read == 0 {
            return Ok(Reply::Quit);
        }

        let answer = line.trim();
        let lowered = answer.to_ascii_lowercase();
        if QUIT_WORDS.contains(&lowered.as_str()) {
            Ok(Reply::Quit)
        } else if BACK_WORDS.contains(&lowered.as_str()) {
            Ok(Reply::Back)
        } else {
            Ok(Reply::Text(answer.to_string()))
        }
    }

    /// Writes one line.
    fn say(&mut self, text: impl std::fmt::Display) -> Result<()> {
        writeln!(self.out, "{text}").context("Failed to write output")
    }
}

/// An interactive calculator moving between the landing screen and the two
/// forms.
pub struct Session<R, W> {
    /// Terminal, or anything standing in for it.
    console: Console<R, W>,
    /// Current screen.
    screen:  Screen,
    /// SGPA screen state.
    sgpa:    SgpaForm,
    /// CGPA screen state.
    cgpa:    CgpaForm,
    /// Scale shown by the `scale` choice.
    scale:   GradeScale,
    /// How results are printed.
    output:  OutputFormat,
    /// Results computed so far, oldest first.
    history: Vec<GpaReport>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// A session on the landing screen using the configured output format.
    pub fn new(input: R, out: W) -> Self {
        Self {
            console: Console { input, out },
            screen:  Screen::Landing,
            sgpa:    SgpaForm::new(),
            cgpa:    CgpaForm::new(),
            scale:   GradeScale::standard(),
            output:  config::output(),
            history: Vec::new(),
        }
    }

    /// Prints results in `output` instead of the configured format.
    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// Current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Results computed so far.
    pub fn history(&self) -> &[GpaReport] {
        &self.history
    }

    /// Everything written so far.
    pub fn sink(&self) -> &W {
        &self.console.out
    }

    /// Consumes the session, returning the output sink.
    pub fn into_output(self) -> W {
        self.console.out
    }

    /// Runs until the user quits or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let exit = match self.screen {
                Screen::Landing => self.landing()?,
                Screen::Sgpa => {
                    let exit = run_form(&mut self.console, &mut self.sgpa, self.output)?;
                    self.record(exit)
                }
                Screen::Cgpa => {
                    let exit = run_form(&mut self.console, &mut self.cgpa, self.output)?;
                    self.record(exit)
                }
            };

            match exit {
                Some(Exit::Quit) => break,
                Some(Exit::Landing) => self.screen = Screen::Landing,
                None => {}
            }
        }

        tracing::debug!(results = self.history.len(), "session ended");
        Ok(())
    }

    /// Keeps the report of a completed form and passes the exit along.
    fn record(&mut self, exit: (Exit, Option<GpaReport>)) -> Option<Exit> {
        let (exit, report) = exit;
        self.history.extend(report);
        Some(exit)
    }

    /// Shows the landing screen and handles one choice.
    fn landing(&mut self) -> Result<Option<Exit>> {
        self.console.say(LANDING_BANNER.bold())?;
        for (command, description) in LANDING_CHOICES {
            self.console.say(format!("  {:<6} {description}", command.cyan()))?;
        }

        let choice = match self.console.ask(">")? {
            Reply::Quit => return Ok(Some(Exit::Quit)),
            Reply::Back => return Ok(None),
            Reply::Text(text) => text.to_ascii_lowercase(),
        };

        match choice.as_str() {
            "sgpa" | "1" => self.screen = Screen::Sgpa,
            "cgpa" | "2" => self.screen = Screen::Cgpa,
            "scale" | "3" => self.console.say(report::scale_table(&self.scale))?,
            other => {
                tracing::warn!("Unknown landing choice `{other}`");
                self.console
                    .say(format!("Unknown choice `{other}`, pick sgpa, cgpa, scale or quit"))?;
            }
        }
        Ok(None)
    }
}

/// Walks a form from count to result.
///
/// Returns how the form was left and the report if one was computed. The
/// form is reset whenever it is left.
fn run_form<F, R, W>(
    console: &mut Console<R, W>,
    form: &mut F,
    output: OutputFormat,
) -> Result<(Exit, Option<GpaReport>)>
where
    F: Form,
    R: BufRead,
    W: Write,
{
    let bounds = form.bounds();
    let prompt = format!(
        "Number of {} ({}-{}):",
        F::COUNT_OF,
        bounds.start(),
        bounds.end()
    );

    loop {
        match console.ask(&prompt)? {
            Reply::Quit => return leave(form, Exit::Quit),
            Reply::Back => return leave(form, Exit::Landing),
            Reply::Text(text) => match form.set_count(&text) {
                Ok(_) => break,
                Err(e) => notify_error(console, &e)?,
            },
        }
    }

    let mut pending = form.slots();
    loop {
        for slot in pending {
            match console.ask(&format!("{}:", slot.label()))? {
                Reply::Quit => return leave(form, Exit::Quit),
                Reply::Back => return leave(form, Exit::Landing),
                Reply::Text(text) => {
                    form.fill(slot, &text);
                }
            }
        }

        match form.submit() {
            Ok(report) => {
                console.say(Notification::from(&report))?;
                let rendered =
                    report::render(&report, output).context("Failed to render the result")?;
                console.say(rendered)?;
                form.reset();
                return Ok((Exit::Landing, Some(report)));
            }
            Err(e) => {
                notify_error(console, &e)?;
                pending = slots_to_retry(form, &e);
            }
        }
    }
}

/// Fields that must be asked again after `err`.
fn slots_to_retry<F: Form>(form: &F, err: &GpaError) -> Vec<Slot> {
    let slots = form.slots();
    if let Some(position) = err.position() {
        return slots.into_iter().filter(|s| s.id == position).collect();
    }

    let empty: Vec<Slot> = slots
        .iter()
        .copied()
        .filter(|s| form.value(*s).is_none_or(|v| v.trim().is_empty()))
        .collect();
    if empty.is_empty() { slots } else { empty }
}

/// Prints `err` as a notification.
fn notify_error<R: BufRead, W: Write>(console: &mut Console<R, W>, err: &GpaError) -> Result<()> {
    tracing::warn!(kind = ?err.kind(), "{err}");
    console.say(Notification::from(err))
}

/// Resets `form` and reports `exit` without a result.
fn leave<F: Form>(form: &mut F, exit: Exit) -> Result<(Exit, Option<GpaReport>)> {
    form.reset();
    Ok((exit, None))
}
