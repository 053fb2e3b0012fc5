//! Line-oriented terminal input and output
//!
//! Every interactive flow talks to the user through [`Console`], so flows can
//! be driven by scripted input in tests. A prompt that returns `None` means
//! input is exhausted and the caller should leave the current screen.

use std::io::{self, BufRead, Write};

/// ANSI color codes
pub struct Color;

impl Color {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
}

/// Width of the `*` rule around section titles
const TITLE_WIDTH: usize = 40;

pub trait Console {
    /// Show `prompt` and read one line without its line terminator
    fn read_line(&mut self, prompt: &str) -> Option<String>;

    fn write_line(&mut self, text: &str);

    fn use_color(&self) -> bool {
        false
    }

    /// Read one line with surrounding whitespace removed
    fn ask(&mut self, prompt: &str) -> Option<String> {
        self.read_line(prompt).map(|line| line.trim().to_string())
    }

    fn print_error(&mut self, message: &str) {
        let line = if self.use_color() {
            format!("\n{}**ERROR**: {}{}", Color::RED, message, Color::RESET)
        } else {
            format!("\n**ERROR**: {}", message)
        };
        self.write_line(&line);
    }

    fn print_success(&mut self, message: &str) {
        let line = if self.use_color() {
            format!("\n{}{}{}", Color::GREEN, message, Color::RESET)
        } else {
            format!("\n{}", message)
        };
        self.write_line(&line);
    }

    fn print_section_title(&mut self, title: &str) {
        let rule = "*".repeat(TITLE_WIDTH);
        let centered = format!("{:^width$}", title, width = TITLE_WIDTH);
        if self.use_color() {
            self.write_line(&format!(
                "\n{}\n{}{}{}\n{}\n",
                rule,
                Color::BOLD,
                centered,
                Color::RESET,
                rule
            ));
        } else {
            self.write_line(&format!("\n{}\n{}\n{}\n", rule, centered, rule));
        }
    }

    /// Ask until the answer is "yes" or "no"
    fn confirm(&mut self, prompt: &str) -> Option<bool> {
        loop {
            match self.ask(prompt)?.to_lowercase().as_str() {
                "yes" => return Some(true),
                "no" => return Some(false),
                _ => self.print_error("Please enter 'yes' or 'no'."),
            }
        }
    }

    /// Ask until the answer is an integer within `min..=max`
    fn choose_number(&mut self, prompt: &str, min: usize, max: usize) -> Option<usize> {
        loop {
            let answer = self.ask(prompt)?;
            match answer.parse::<usize>() {
                Ok(value) if (min..=max).contains(&value) => return Some(value),
                Ok(_) => self.print_error(&format!(
                    "Please enter a number between {} and {}.",
                    min, max
                )),
                Err(_) => self.print_error("Invalid input. Please enter a valid number."),
            }
        }
    }
}

/// Console over a line reader and a writer, stdin and stdout by default
pub struct StdConsole<R = io::StdinLock<'static>, W = io::Stdout> {
    reader: R,
    writer: W,
    use_color: bool,
}

impl StdConsole {
    pub fn new(use_color: bool) -> Self {
        Self::with_io(io::stdin().lock(), io::stdout(), use_color)
    }
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    pub fn with_io(reader: R, writer: W, use_color: bool) -> Self {
        Self {
            reader,
            writer,
            use_color,
        }
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = writeln!(self.writer, "{}", text).and_then(|_| self.writer.flush()) {
            log::debug!("Failed to write output: {}", e);
        }
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        self.emit(prompt);

        // Bytes that are not UTF-8 become replacement characters, so the
        // caller sees an invalid answer and asks again
        let mut buf = Vec::new();
        match self.reader.read_until(b'\n', &mut buf) {
            Ok(0) => {
                log::debug!("Input closed");
                None
            }
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                Some(line.trim_end_matches(['\r', '\n']).to_string())
            }
            Err(e) => {
                log::warn!("Failed to read input: {}", e);
                None
            }
        }
    }

    fn write_line(&mut self, text: &str) {
        self.emit(text);
    }

    fn use_color(&self) -> bool {
        self.use_color
    }
}
