use std::io::{self, BufRead, Write};

use bizhub_core::Interaction;
use parking_lot::Mutex;
use tracing::warn;

/// Confirm, alert and prompt over line-oriented terminal I/O
///
/// End of input answers "no" to confirmations and cancels prompts.
pub struct TerminalInteraction {
    input: Mutex<Box<dyn BufRead + Send>>,
    output: Mutex<Box<dyn Write + Send>>,
    assume_yes: bool,
}

impl TerminalInteraction {
    /// Read stdin and write stdout. `assume_yes` pre-confirms every question.
    pub fn stdio(assume_yes: bool) -> Self {
        Self::with_io(io::BufReader::new(io::stdin()), io::stdout(), assume_yes)
    }

    pub fn with_io(
        input: impl BufRead + Send + 'static,
        output: impl Write + Send + 'static,
        assume_yes: bool,
    ) -> Self {
        Self {
            input: Mutex::new(Box::new(input)),
            output: Mutex::new(Box::new(output)),
            assume_yes,
        }
    }

    fn write_line(&self, text: &str, newline: bool) {
        let mut output = self.output.lock();
        let written = if newline {
            writeln!(output, "{text}")
        } else {
            write!(output, "{text} ")
        };
        if let Err(err) = written.and_then(|()| output.flush()) {
            warn!(error = %err, "terminal write failed");
        }
    }

    fn read_line(&self) -> Option<String> {
        let mut line = String::new();
        match self.input.lock().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(err) => {
                warn!(error = %err, "terminal read failed");
                None
            }
        }
    }
}

impl Interaction for TerminalInteraction {
    fn confirm(&self, question: &str) -> bool {
        if self.assume_yes {
            self.write_line(&format!("{question} [y/N] y"), true);
            return true;
        }
        self.write_line(&format!("{question} [y/N]"), false);
        self.read_line()
            .map(|answer| matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
            .unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        self.write_line(message, true);
    }

    fn prompt(&self, message: &str) -> Option<String> {
        self.write_line(message, false);
        self.read_line()
    }
}
