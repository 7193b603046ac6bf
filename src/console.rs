use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

/// Blocking line-based console: a paired input and output stream.
///
/// Interactive play runs over stdin/stdout; tests drive full games by
/// injecting scripted byte buffers instead.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<BufReader<Stdin>, Stdout> {
    /// Console wired to the process stdin/stdout
    pub fn stdio() -> Self {
        Console {
            input: BufReader::new(io::stdin()),
            output: io::stdout(),
        }
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// The output sink, for transcript inspection in tests
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Print a full line of output
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Print the prompt without a trailing newline and read one trimmed line.
    /// A closed input stream is an error; re-prompting applies to malformed
    /// lines, not EOF.
    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed while awaiting a response",
            ));
        }
        Ok(line.trim().to_string())
    }

    /// Prompt until `parse` accepts the answer, printing `invalid` and
    /// re-prompting indefinitely on malformed input.
    pub fn prompt_until<T, F>(&mut self, prompt: &str, invalid: &str, parse: F) -> io::Result<T>
    where
        F: Fn(&str) -> Option<T>,
    {
        loop {
            let answer = self.ask(prompt)?;
            match parse(&answer) {
                Some(value) => return Ok(value),
                None => self.line(invalid)?,
            }
        }
    }

    /// Yes/no prompt accepting the fixed vocabulary y/yes/n/no (case-insensitive)
    pub fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        self.prompt_until(prompt, "Invalid input. Please enter 'y' or 'n'.", |answer| {
            match answer.to_lowercase().as_str() {
                "y" | "yes" => Some(true),
                "n" | "no" => Some(false),
                _ => None,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scripted(input: &str) -> Console<&[u8], Vec<u8>> {
        Console::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn test_prompt_until_accepts_first_valid_line() {
        let mut console = scripted("42\n");
        let value = console
            .prompt_until("Number: ", "Not a number.", |s| s.parse::<u32>().ok())
            .unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_prompt_until_reprompts_on_garbage() {
        let mut console = scripted("abc\n\n99\n");
        let value = console
            .prompt_until("Number: ", "Not a number.", |s| s.parse::<u32>().ok())
            .unwrap();
        assert_eq!(value, 99);

        let output = String::from_utf8(console.output).unwrap();
        assert_eq!(output.matches("Not a number.").count(), 2);
        assert_eq!(output.matches("Number: ").count(), 3);
    }

    #[test]
    fn test_confirm_vocabulary() {
        for (input, expected) in [("y\n", true), ("YES\n", true), ("n\n", false), ("No\n", false)] {
            let mut console = scripted(input);
            assert_eq!(console.confirm("(y/n): ").unwrap(), expected);
        }
    }

    #[test]
    fn test_confirm_rejects_unknown_tokens() {
        let mut console = scripted("maybe\nyes\n");
        assert!(console.confirm("(y/n): ").unwrap());
        let output = String::from_utf8(console.output).unwrap();
        assert!(output.contains("Invalid input. Please enter 'y' or 'n'."));
    }

    #[test]
    fn test_eof_is_an_error_not_a_retry() {
        let mut console = scripted("");
        let err = console.confirm("(y/n): ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_input_is_trimmed() {
        let mut console = scripted("  yes \n");
        assert!(console.confirm("(y/n): ").unwrap());
    }
}
