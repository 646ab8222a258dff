//! Line-editor front end around a [`Session`].

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::config::Config;
use crate::error::Result;
use crate::ui::session::{Flow, Session};

const PROMPT: &str = "eztip> ";

/// Run the prompt loop until `quit`, Ctrl-C or Ctrl-D.
///
/// History lives only as long as this call.
pub fn run(config: Config) -> Result<()> {
    let mut editor = DefaultEditor::new()?;
    let mut session = Session::new(config);

    println!("EZTip");
    println!("Type 'help' for commands, 'quit' to exit.");

    loop {
        let line = match editor.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let _ = editor.add_history_entry(trimmed);

        match session.handle_line(trimmed) {
            Ok(Flow::Continue(output)) => println!("{}", output.trim_end()),
            Ok(Flow::Quit) => break,
            // Clipboard and export failures are shown but do not end the session.
            Err(err) => {
                tracing::warn!(error = %err, "command failed");
                eprintln!("error: {}", err);
            }
        }
    }

    tracing::debug!(records = session.history().len(), "session ended, history discarded");
    Ok(())
}
