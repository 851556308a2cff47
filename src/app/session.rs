use crate::app::render::{render, OutputFormat};
use crate::core::browser::ContactBrowser;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

pub const PROMPT: &str = "Search by name or number";

const HELP: &str = "\
Type text to search by name or number (an empty line shows everything).
  :open N   show details for contact N
  :close    close the details
  :clear    clear the search
  :help     show this help
  :quit     exit
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Open(usize),
    Close,
    Clear,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        let Some(rest) = line.strip_prefix(':') else {
            return Command::Search(line.to_string());
        };

        let mut parts = rest.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some("open"), Some(n), None) => match n.parse() {
                Ok(position) => Command::Open(position),
                Err(_) => Command::Unknown(line.to_string()),
            },
            (Some("close"), None, None) => Command::Close,
            (Some("clear"), None, None) => Command::Clear,
            (Some("help"), None, None) => Command::Help,
            (Some("quit") | Some("q"), None, None) => Command::Quit,
            _ => Command::Unknown(line.to_string()),
        }
    }
}

/// Line-driven browsing: every line is a new query or a command, and the
/// view is re-rendered after each one.
pub struct Session<'a> {
    browser: &'a mut ContactBrowser,
    format: OutputFormat,
}

impl<'a> Session<'a> {
    pub fn new(browser: &'a mut ContactBrowser, format: OutputFormat) -> Self {
        Self { browser, format }
    }

    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> Result<()> {
        writeln!(output, "{} (:help for commands)", PROMPT)?;
        output.write_all(render(self.browser, self.format)?.as_bytes())?;

        for line in input.lines() {
            let command = Command::parse(&line?);
            tracing::debug!("Session command: {:?}", command);

            if !self.apply(command, output)? {
                break;
            }
        }

        output.flush()?;
        Ok(())
    }

    // Returns false once the session should end.
    fn apply<W: Write>(&mut self, command: Command, output: &mut W) -> Result<bool> {
        match command {
            Command::Search(query) => self.browser.set_query(query),
            Command::Clear => self.browser.set_query(""),
            Command::Open(position) => {
                if self.browser.select_at(position).is_none() {
                    writeln!(output, "No contact at position {}", position)?;
                    return Ok(true);
                }
            }
            Command::Close => self.browser.clear_selection(),
            Command::Help => {
                output.write_all(HELP.as_bytes())?;
                return Ok(true);
            }
            Command::Quit => return Ok(false),
            Command::Unknown(line) => {
                writeln!(output, "Unknown command: {} (try :help)", line)?;
                return Ok(true);
            }
        }

        writeln!(output)?;
        output.write_all(render(self.browser, self.format)?.as_bytes())?;
        Ok(true)
    }
}
