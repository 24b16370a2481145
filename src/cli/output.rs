//! Colored terminal output for the packager.
//!
//! Keeps user-facing messages (progress, success, hints) separate from
//! `log` diagnostics, which go through `env_logger` and `RUST_LOG`. Colors
//! are only emitted when the stream is a terminal; `NO_COLOR` and
//! `TERM=dumb` are honored by termcolor itself.

use std::io::{self, IsTerminal, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Verbosity-aware writer for user-facing messages.
#[derive(Debug, Clone, Copy)]
pub struct OutputManager {
    verbose: bool,
    quiet: bool,
}

impl OutputManager {
    /// Creates an output manager. `quiet` wins over `verbose`.
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose: verbose && !quiet,
            quiet,
        }
    }

    /// Returns `true` when verbose messages are printed.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Prints a dimmed detail line only in verbose mode.
    pub fn verbose(&self, message: &str) -> io::Result<()> {
        if !self.verbose {
            return Ok(());
        }
        let stdout = stdout();
        write_verbose(&mut stdout.lock(), message)
    }

    /// Prints a progress line unless quiet.
    pub fn progress(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let stdout = stdout();
        write_progress(&mut stdout.lock(), message)
    }

    /// Prints a success line unless quiet.
    pub fn success(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let stdout = stdout();
        write_success(&mut stdout.lock(), message)
    }

    /// Prints an error and its hints to stderr. Never suppressed.
    pub fn error(&self, message: &str, hints: &[String]) -> io::Result<()> {
        let stderr = StandardStream::stderr(color_choice(io::stderr().is_terminal()));
        write_error(&mut stderr.lock(), message, hints)
    }
}

fn stdout() -> StandardStream {
    StandardStream::stdout(color_choice(io::stdout().is_terminal()))
}

fn color_choice(is_terminal: bool) -> ColorChoice {
    if is_terminal {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

fn write_verbose(out: &mut impl WriteColor, message: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_dimmed(true))?;
    write!(out, "  {message}")?;
    out.reset()?;
    writeln!(out)
}

fn write_progress(out: &mut impl WriteColor, message: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
    write!(out, "{message}")?;
    out.reset()?;
    writeln!(out)
}

fn write_success(out: &mut impl WriteColor, message: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
    write!(out, "{message}")?;
    out.reset()?;
    writeln!(out)
}

fn write_error(out: &mut impl WriteColor, message: &str, hints: &[String]) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(out, "Error:")?;
    out.reset()?;
    writeln!(out, " {message}")?;

    for hint in hints {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
        write!(out, "  hint:")?;
        out.reset()?;
        writeln!(out, " {hint}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::Buffer;

    fn text(buffer: &Buffer) -> String {
        String::from_utf8(buffer.as_slice().to_vec()).expect("utf-8 output")
    }

    #[test]
    fn quiet_overrides_verbose() {
        assert!(!OutputManager::new(true, true).is_verbose());
        assert!(OutputManager::new(true, false).is_verbose());
        assert!(!OutputManager::new(false, false).is_verbose());
    }

    #[test]
    fn plain_output_has_no_escape_codes() {
        let mut buffer = Buffer::no_color();
        write_success(&mut buffer, "Successfully created package 'Mod.zip'").unwrap();
        write_verbose(&mut buffer, "Icon: icon.png").unwrap();
        assert_eq!(
            text(&buffer),
            "Successfully created package 'Mod.zip'\n  Icon: icon.png\n"
        );
    }

    #[test]
    fn colored_output_wraps_messages() {
        let mut buffer = Buffer::ansi();
        write_success(&mut buffer, "done").unwrap();
        let out = text(&buffer);
        assert!(out.contains("\x1b[0m\x1b[1m\x1b[32mdone"), "{out:?}");
        assert!(out.ends_with("\x1b[0m\n"), "{out:?}");
    }

    #[test]
    fn error_lists_every_hint() {
        let mut buffer = Buffer::no_color();
        write_error(
            &mut buffer,
            "Invalid version string '1.x'",
            &["Use 1.0.0".to_string(), "See --help".to_string()],
        )
        .unwrap();
        assert_eq!(
            text(&buffer),
            "Error: Invalid version string '1.x'\n  hint: Use 1.0.0\n  hint: See --help\n"
        );

        let mut colored = Buffer::ansi();
        write_error(&mut colored, "boom", &["retry".to_string()]).unwrap();
        let out = text(&colored);
        assert!(out.contains("\x1b[31mError:"), "{out:?}");
        assert!(out.contains("\x1b[33m  hint:"), "{out:?}");
    }

    #[test]
    fn non_terminals_get_no_color() {
        assert_eq!(color_choice(false), ColorChoice::Never);
        assert_eq!(color_choice(true), ColorChoice::Auto);
    }
}
