use std::io::Write;
use std::process::Command;

use serde::Serialize;
use tracing::debug;

use crate::cli::OutputFormat;
use crate::error::OpenError;
use crate::pane::Pane;

/// Host side of the commands: shows resolved files and user notices.
pub trait Editor {
    fn show(&mut self, path: &str, pane: Option<Pane>) -> Result<(), OpenError>;

    fn notify(&mut self, message: &str);
}

#[derive(Debug, Serialize)]
struct Shown<'a> {
    path: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pane: Option<Pane>,
}

#[derive(Debug, Serialize)]
struct Notice<'a> {
    message: &'a str,
}

/// Writes results to `out` instead of opening anything. Notices go to
/// stderr in text mode and to `out` in JSON mode.
pub struct PrintEditor<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> PrintEditor<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_json<T: Serialize>(&mut self, value: &T) -> Result<(), OpenError> {
        let line = serde_json::to_string(value).map_err(|e| OpenError::Output(e.to_string()))?;
        writeln!(self.out, "{line}").map_err(|e| OpenError::Output(e.to_string()))
    }
}

impl<W: Write> Editor for PrintEditor<W> {
    fn show(&mut self, path: &str, pane: Option<Pane>) -> Result<(), OpenError> {
        match self.format {
            OutputFormat::Text => {
                let written = match pane {
                    Some(pane) => writeln!(self.out, "{path}\t{}", pane.as_str()),
                    None => writeln!(self.out, "{path}"),
                };
                written.map_err(|e| OpenError::Output(e.to_string()))
            }
            OutputFormat::Json => self.write_json(&Shown { path, pane }),
        }
    }

    fn notify(&mut self, message: &str) {
        match self.format {
            OutputFormat::Text => eprintln!("{message}"),
            OutputFormat::Json => {
                if let Err(e) = self.write_json(&Notice { message }) {
                    eprintln!("{message} ({e})");
                }
            }
        }
    }
}

/// Hands the resolved file to an external editor command, e.g. `code -r`.
///
/// The path is appended as the last argument. When a pane is requested,
/// `COUNTERPART_PANE` is set to `one` or `two` for the child process.
#[derive(Debug, Clone)]
pub struct CommandEditor {
    program: String,
    args: Vec<String>,
}

impl CommandEditor {
    pub fn parse(command: &str) -> Result<Self, OpenError> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next().ok_or(OpenError::EmptyEditorCommand)?;
        Ok(Self {
            program,
            args: parts.collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl Editor for CommandEditor {
    fn show(&mut self, path: &str, pane: Option<Pane>) -> Result<(), OpenError> {
        let mut command = Command::new(&self.program);
        command.args(&self.args).arg(path);
        if let Some(pane) = pane {
            command.env("COUNTERPART_PANE", pane.as_str());
        }

        debug!(program = %self.program, path, "launching editor");
        let status = command
            .status()
            .map_err(|e| OpenError::launch(&self.program, e))?;

        if !status.success() {
            return Err(OpenError::EditorFailed {
                program: self.program.clone(),
                status,
            });
        }
        Ok(())
    }

    fn notify(&mut self, message: &str) {
        eprintln!("{message}");
    }
}
