//! The interactive chat loop.


use std::io::{BufRead, Write};

use crate::classifier::Classifier;
use crate::command::{parse, Input};
use crate::config::ChatboxConfig;
use crate::error::{ChatError, ChatResult};
use crate::intent::{IntentCatalog, ResponseSelector};

/// Why a session stopped reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user typed the exit command.
    Exit,
    /// The reader ran out of lines.
    EndOfInput,
}

/// One conversation: borrowed catalog and classifier, owned selector.
pub struct Session<'a, C: Classifier + ?Sized> {
    catalog: &'a IntentCatalog,
    classifier: &'a C,
    selector: ResponseSelector,
    config: &'a ChatboxConfig,
}

impl<'a, C: Classifier + ?Sized> Session<'a, C> {
    pub fn new(
        catalog: &'a IntentCatalog,
        classifier: &'a C,
        selector: ResponseSelector,
        config: &'a ChatboxConfig,
    ) -> Self {
        Self {
            catalog,
            classifier,
            selector,
            config,
        }
    }

    /// Classify `text` and pick a reply for the predicted tag.
    pub fn respond(&mut self, text: &str) -> ChatResult<String> {
        let tag = self.classifier.predict(text)?;
        self.selector.select(&tag, self.catalog)
    }

    /// Drive the prompt/reply loop until exit or end of input.
    ///
    /// Anything that goes wrong with one line (undecodable bytes, a failed
    /// prediction, a missing or empty intent) is written to `output` and the
    /// loop keeps going. Only failures of `input` or `output` end the session.
    pub fn run<R, W>(&mut self, mut input: R, mut output: W) -> ChatResult<SessionEnd>
    where
        R: BufRead,
        W: Write,
    {
        writeln!(output, "{}", self.config.welcome)?;
        let mut exchanges = 0usize;

        loop {
            write!(output, "{}", self.config.user_prompt)?;
            output.flush()?;

            let mut buf = Vec::new();
            if input.read_until(b'\n', &mut buf)? == 0 {
                tracing::info!("input closed after {exchanges} exchanges");
                return Ok(SessionEnd::EndOfInput);
            }
            let line = match String::from_utf8(buf) {
                Ok(line) => line,
                Err(error) => {
                    let error = ChatError::InvalidInput(format!(
                        "line is not valid UTF-8: {}",
                        error.utf8_error()
                    ));
                    self.report(&mut output, &error)?;
                    continue;
                }
            };

            let text = match parse(&line, &self.config.exit_command) {
                Input::Exit => {
                    writeln!(output, "{}", self.config.farewell)?;
                    tracing::info!("session ended by user after {exchanges} exchanges");
                    return Ok(SessionEnd::Exit);
                }
                Input::Blank => continue,
                Input::Utterance(text) => text,
            };

            exchanges += 1;
            match self.respond(&text) {
                Ok(response) => {
                    writeln!(output, "{}{}", self.config.bot_prefix, response)?;
                }
                Err(error) => {
                    tracing::debug!("no response for {text:?}");
                    self.report(&mut output, &error)?;
                }
            }
        }
    }

    /// Tell the user one exchange failed.
    fn report<W: Write>(&self, output: &mut W, error: &ChatError) -> ChatResult<()> {
        tracing::warn!("exchange failed: {error}");
        writeln!(
            output,
            "{}Sorry, I don't have an answer for that ({error}).",
            self.config.bot_prefix
        )?;
        Ok(())
    }
}
