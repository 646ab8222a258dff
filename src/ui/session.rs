//! One interactive session: the form, its history and the commands that drive them.

use clap::{Parser, Subcommand};

use crate::calculator::{ServiceTierKind, copy_to_clipboard};
use crate::config::Config;
use crate::error::Result;
use crate::history::{HistoryStore, RecordId};
use crate::ui::form::TipForm;
use crate::ui::history::HistoryView;

/// Commands whose argument is the rest of the line, spacing included.
const FREE_TEXT_COMMANDS: [&str; 4] = ["name", "location", "bill", "custom"];

/// A single line typed at the prompt.
#[derive(Debug, Parser)]
#[command(
    no_binary_name = true,
    disable_version_flag = true,
    help_template = "{all-args}"
)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum ShellCommand {
    /// Set the restaurant name
    Name {
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Set the restaurant location
    Location {
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Set the bill amount
    Bill {
        #[arg(allow_hyphen_values = true)]
        amount: Option<String>,
    },
    /// Press a tier button: good, great, awesome or custom
    Tier { tier: ServiceTierKind },
    /// Set the custom tip percentage
    Custom {
        #[arg(allow_hyphen_values = true)]
        percentage: Option<String>,
    },
    /// Calculate the total and save it to history
    Calc,
    /// Clear every field
    Clear,
    /// Show the current form
    Show,
    /// List the history
    History {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Move the history selection up
    Up,
    /// Move the history selection down
    Down,
    /// Select a history record by id
    Select { id: u64 },
    /// Delete a history record by id, or the selected one
    Delete { id: Option<u64> },
    /// Copy the last total to the clipboard
    Copy,
    /// Leave the session
    #[command(alias = "exit")]
    Quit,
}

/// What the prompt loop should do after a command.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue(String),
    Quit,
}

/// Owns everything that lives for one session; dropped when it ends.
#[derive(Debug)]
pub struct Session {
    config: Config,
    form: TipForm,
    history: HistoryStore,
    history_view: HistoryView,
}

impl Session {
    pub fn new(config: Config) -> Self {
        let history = HistoryStore::new();
        Self {
            config,
            form: TipForm::new(),
            history_view: HistoryView::new(&history),
            history,
        }
    }

    pub fn form(&self) -> &TipForm {
        &self.form
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Parse and run one input line.
    ///
    /// Parse failures (including `help`) come back as text to print.
    pub fn handle_line(&mut self, line: &str) -> Result<Flow> {
        match ShellLine::try_parse_from(split_line(line)) {
            Ok(parsed) => self.execute(parsed.command),
            Err(err) => Ok(Flow::Continue(err.render().to_string())),
        }
    }

    pub fn execute(&mut self, command: ShellCommand) -> Result<Flow> {
        let output = match command {
            ShellCommand::Name { text } => {
                self.form.restaurant_name = text.join(" ");
                format!("Restaurant: {}", self.form.restaurant_name)
            }
            ShellCommand::Location { text } => {
                self.form.restaurant_location = text.join(" ");
                format!("Location: {}", self.form.restaurant_location)
            }
            ShellCommand::Bill { amount } => {
                self.form.bill_amount = amount.unwrap_or_default();
                format!("Bill Amount: {}", self.form.bill_amount)
            }
            ShellCommand::Tier { tier } => {
                self.form.select_tier(tier);
                if tier == ServiceTierKind::Custom && self.form.show_custom_input() {
                    format!("Selected {} (set it with `custom <percent>`)", tier)
                } else {
                    format!("Selected {}", tier)
                }
            }
            ShellCommand::Custom { percentage } => {
                self.form.custom_tip_percentage = percentage.unwrap_or_default();
                format!("Custom Tip (%): {}", self.form.custom_tip_percentage)
            }
            ShellCommand::Calc => self.calculate(),
            ShellCommand::Clear => {
                self.form.clear();
                "Cleared".to_string()
            }
            ShellCommand::Show => self.render_form(),
            ShellCommand::History { json } => self.render_history(json)?,
            ShellCommand::Up => {
                self.history_view.select_up(&self.history);
                self.history_view.render(&self.history, &self.config)
            }
            ShellCommand::Down => {
                self.history_view.select_down(&self.history);
                self.history_view.render(&self.history, &self.config)
            }
            ShellCommand::Select { id } => {
                if self.history_view.select_record(&self.history, RecordId(id)) {
                    self.history_view.render(&self.history, &self.config)
                } else {
                    format!("No history record [{}]", id)
                }
            }
            ShellCommand::Delete { id: Some(id) } => {
                match self.history_view.delete(&mut self.history, RecordId(id)) {
                    Some(removed) => format!("Deleted [{}]", removed.id),
                    None => format!("No history record [{}]", id),
                }
            }
            ShellCommand::Delete { id: None } => {
                match self.history_view.delete_selected(&mut self.history) {
                    Some(removed) => format!("Deleted [{}]", removed.id),
                    None => "No history to delete".to_string(),
                }
            }
            ShellCommand::Copy => match self.form.total() {
                Some(result) => {
                    let text = result.display_total();
                    copy_to_clipboard(&text)?;
                    format!("Copied {}", text)
                }
                None => "Nothing to copy yet".to_string(),
            },
            ShellCommand::Quit => return Ok(Flow::Quit),
        };

        Ok(Flow::Continue(output))
    }

    fn calculate(&mut self) -> String {
        let submission = self.form.submit(&mut self.history);
        let total = format!(
            "Total Bill: {}{}",
            self.config.currency_symbol,
            submission.result.display_total()
        );

        match submission.recorded {
            Some(id) => format!("{}\nSaved to history as [{}]", total, id),
            None => format!("{}\nNo tier selected, not saved to history", total),
        }
    }

    fn render_form(&self) -> String {
        let form = &self.form;
        let mut lines = vec![
            format!("Restaurant: {}", form.restaurant_name),
            format!("Location: {}", form.restaurant_location),
            format!("Bill Amount: {}", form.bill_amount),
        ];

        for kind in ServiceTierKind::ALL {
            let mark = if form.selected_tier() == Some(kind) { "[x]" } else { "[ ]" };
            lines.push(format!("{} {}", mark, kind));
        }

        if form.show_custom_input() {
            lines.push(format!("Custom Tip (%): {}", form.custom_tip_percentage));
        }

        if let Some(result) = form.total() {
            lines.push(format!(
                "Total Bill: {}{}",
                self.config.currency_symbol,
                result.display_total()
            ));
        }

        lines.join("\n")
    }

    fn render_history(&mut self, json: bool) -> Result<String> {
        if json {
            let records = self.history.list();
            let text = if self.config.history_json_pretty {
                serde_json::to_string_pretty(records)?
            } else {
                serde_json::to_string(records)?
            };
            return Ok(text);
        }

        Ok(self.history_view.render(&self.history, &self.config))
    }
}

/// Split a prompt line into arguments.
///
/// `name`, `location`, `bill` and `custom` take everything after the command
/// word as a single argument; other commands split on whitespace.
fn split_line(line: &str) -> Vec<&str> {
    let line = line.trim_start();
    if let Some((word, rest)) = line.split_once(char::is_whitespace)
        && FREE_TEXT_COMMANDS.contains(&word)
    {
        let rest = rest.trim_start();
        return if rest.is_empty() { vec![word] } else { vec![word, rest] };
    }
    line.split_whitespace().collect()
}
