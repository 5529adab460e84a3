//! Interactive line shell
//!
//! Mirrors the list screen: a name input buffer with an Add action, and
//! per-record Delete / Edit / Cancel / Done actions driven by one shared
//! [`EditSession`].

use crate::application::ListStore;
use crate::cli::commands::parse_id;
use crate::cli::output::format_record;
use crate::cli::EditSession;
use crate::error::Result;
use crate::infrastructure::KeyValueStore;
use std::io::{BufRead, Write};

const HELP: &str = "\
Commands:
  list              Show all entries
  name <text>       Set the name input
  add [text]        Add the name input (or <text>) as a new entry
  delete <id>       Delete the entry with <id>
  edit <id>         Start editing <id> (again to cancel)
  text <value>      Set the edit buffer
  done              Save the edit buffer to the entry being edited
  cancel            Leave edit mode without saving
  sync              Retry saving after a failed write
  help              Show this help
  quit              Leave the shell";

/// Interactive session over one list
pub struct Shell<S> {
    store: ListStore<S>,
    input: String,
    edit: EditSession,
}

impl<S: KeyValueStore> Shell<S> {
    pub fn new(store: ListStore<S>) -> Self {
        Shell {
            store,
            input: String::new(),
            edit: EditSession::new(),
        }
    }

    pub fn store(&self) -> &ListStore<S> {
        &self.store
    }

    /// Current contents of the name input
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn edit_session(&self) -> &EditSession {
        &self.edit
    }

    /// Read commands from `input` until EOF or `quit`
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<()> {
        writeln!(out, "roster shell - type 'help' for commands")?;
        for raw in input.split(b'\n') {
            let raw = raw?;
            let line = match String::from_utf8(raw) {
                Ok(line) => line,
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping input line");
                    writeln!(out, "Skipped line: not valid UTF-8")?;
                    continue;
                }
            };
            if !self.execute(line.trim_end_matches('\r'), &mut out)? {
                break;
            }
        }
        out.flush()?;
        Ok(())
    }

    /// Run one command line. Returns false when the shell should exit.
    pub fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> Result<bool> {
        let line = line.trim_start();
        let (command, rest) = match line.split_once(' ') {
            Some((command, rest)) => (command, rest),
            None => (line.trim_end(), ""),
        };

        match command {
            "" => {}
            "help" | "?" => writeln!(out, "{}", HELP)?,
            "list" | "ls" => self.render(out)?,
            "name" => {
                self.input = rest.to_string();
                writeln!(out, "Input: {}", self.input)?;
            }
            "add" => {
                if !rest.is_empty() {
                    self.input = rest.to_string();
                }
                let record = self.store.add(&self.input);
                writeln!(out, "Added {}", format_record(&record))?;
                if self.store.is_dirty() {
                    writeln!(out, "Not saved: storage write failed")?;
                } else {
                    self.input.clear();
                }
            }
            "delete" | "rm" => match parse_id(rest) {
                Ok(id) => {
                    self.store.delete(id);
                    writeln!(out, "Deleted ID: {}", id)?;
                    self.report_dirty(out)?;
                }
                Err(e) => writeln!(out, "{}", e)?,
            },
            "edit" => match parse_id(rest) {
                Ok(id) => match self.store.get(id) {
                    Some(record) => {
                        if self.edit.toggle(id, &record.first) {
                            writeln!(out, "Editing ID: {} ({})", id, self.edit.buffer())?;
                        } else {
                            writeln!(out, "Edit cancelled")?;
                        }
                    }
                    None => writeln!(out, "No entry with ID {}", id)?,
                },
                Err(e) => writeln!(out, "{}", e)?,
            },
            "text" => {
                if self.edit.editing_id().is_some() {
                    self.edit.set_buffer(rest);
                    writeln!(out, "Edit buffer: {}", self.edit.buffer())?;
                } else {
                    writeln!(out, "Not editing; use 'edit <id>' first")?;
                }
            }
            "done" => match self.edit.pending() {
                Some((id, value)) => {
                    let value = value.to_string();
                    self.store.update(id, &value);
                    if self.store.is_dirty() {
                        writeln!(out, "Not saved: storage write failed")?;
                    } else {
                        self.edit.finish();
                        writeln!(out, "Updated ID: {}  First Name: {}", id, value)?;
                    }
                }
                None => writeln!(out, "Not editing; use 'edit <id>' first")?,
            },
            "cancel" => {
                self.edit.cancel();
                writeln!(out, "Edit cancelled")?;
            }
            "sync" => {
                if self.store.flush() {
                    writeln!(out, "Saved")?;
                } else {
                    writeln!(out, "Not saved: storage write failed")?;
                }
            }
            "quit" | "exit" => return Ok(false),
            other => writeln!(out, "Unknown command: '{}'. Type 'help'", other)?,
        }

        Ok(true)
    }

    fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.store.is_empty() {
            writeln!(out, "No entries")?;
            return Ok(());
        }

        for record in self.store.records() {
            if self.edit.editing_id() == Some(record.id) {
                writeln!(out, "ID: {}  [editing] {}", record.id, self.edit.buffer())?;
            } else {
                writeln!(out, "{}", format_record(record))?;
            }
        }
        Ok(())
    }

    fn report_dirty<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.store.is_dirty() {
            writeln!(out, "Not saved: storage write failed")?;
        }
        Ok(())
    }
}
