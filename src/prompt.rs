//! Interactive prompts: search term, option menu and the final acknowledgment.
//!
//! Key capture sits behind [`ChoiceSource`] so the menu logic does not care whether
//! the answer came from a raw terminal key press or a line of piped input.

use std::io::{self, BufRead, Write};
use tracing::debug;

use crate::config::{validate_term, Mode};
use crate::errors::LocatorError;

/// One answer to the option menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// ENTER: copy files and write the log
    Confirm,
    /// `1`: write the log only
    Alternate,
    /// ESC: stop without touching anything
    Cancel,
    /// Anything else; the menu is shown again
    Unrecognized,
}

/// Something that can produce menu answers.
pub trait ChoiceSource {
    fn next_choice(&mut self) -> io::Result<Choice>;
}

/// Single key presses read from the terminal in raw mode.
pub struct TerminalKeys;

impl ChoiceSource for TerminalKeys {
    fn next_choice(&mut self) -> io::Result<Choice> {
        crossterm::terminal::enable_raw_mode()?;
        let choice = read_key();
        // Always leave raw mode, even if reading failed.
        let _ = crossterm::terminal::disable_raw_mode();
        choice
    }
}

fn read_key() -> io::Result<Choice> {
    use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        let choice = match key.code {
            KeyCode::Enter => Choice::Confirm,
            KeyCode::Char('1') => Choice::Alternate,
            KeyCode::Esc => Choice::Cancel,
            // Raw mode swallows SIGINT; treat Ctrl+C like ESC.
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Choice::Cancel,
            _ => Choice::Unrecognized,
        };
        return Ok(choice);
    }
}

/// Line-based answers, used when stdin is not a terminal (pipes, tests).
///
/// - empty line -> Confirm
/// - `1` -> Alternate
/// - `esc`, a literal ESC byte, or end of input -> Cancel
pub struct LineChoices<R> {
    input: R,
}

impl<R: BufRead> LineChoices<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> ChoiceSource for LineChoices<R> {
    fn next_choice(&mut self) -> io::Result<Choice> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(Choice::Cancel);
        }
        let answer = line.trim();
        let choice = match answer {
            "" => Choice::Confirm,
            "1" => Choice::Alternate,
            "\u{1b}" => Choice::Cancel,
            a if a.eq_ignore_ascii_case("esc") => Choice::Cancel,
            _ => Choice::Unrecognized,
        };
        Ok(choice)
    }
}

/// Ask for the search term until a usable one is typed.
///
/// Only the line terminator is removed; spaces and case are kept as typed.
pub fn read_term<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> anyhow::Result<String> {
    loop {
        write!(output, "Digite o nome (ou parte do nome) do arquivo a ser localizado: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(LocatorError::InputClosed("search term").into());
        }
        let term = strip_line_ending(&line);

        match validate_term(term) {
            Ok(()) => return Ok(term.to_string()),
            Err(e) => {
                debug!(error = %e, "rejected search term");
                writeln!(output, "Termo inválido ({}). Tente novamente.", reason_pt(&e))?;
            }
        }
    }
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

fn reason_pt(e: &LocatorError) -> &'static str {
    match e {
        LocatorError::InvalidTerm { reason, .. } if reason.contains("empty") => "vazio",
        LocatorError::InvalidTerm { reason, .. } if reason.contains("separator") => {
            "contém separador de pasta"
        }
        _ => "nome de pasta reservado",
    }
}

/// Show the option menu until one of the three choices is made.
pub fn read_mode<S: ChoiceSource, W: Write>(source: &mut S, output: &mut W) -> io::Result<Mode> {
    loop {
        writeln!(output)?;
        writeln!(output, "Pressione ENTER para copiar os arquivos e criar um log")?;
        writeln!(output, "Digite 1 para apenas criar o log (sem copiar)")?;
        writeln!(output, "Ou pressione ESC para cancelar")?;
        writeln!(output)?;
        write!(output, "Escolha: ")?;
        output.flush()?;

        match source.next_choice()? {
            Choice::Confirm => {
                writeln!(output, "ENTER")?;
                return Ok(Mode::CopyAndLog);
            }
            Choice::Alternate => {
                writeln!(output, "1")?;
                return Ok(Mode::LogOnly);
            }
            Choice::Cancel => {
                writeln!(output)?;
                writeln!(output, "Operação cancelada pelo usuário.")?;
                return Ok(Mode::Cancelled);
            }
            Choice::Unrecognized => {
                writeln!(output)?;
                writeln!(output, "Opção inválida! Tente novamente.")?;
            }
        }
    }
}

/// Block until the user presses ENTER (or input closes).
pub fn wait_for_ack<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<()> {
    writeln!(output)?;
    write!(output, "Pressione ENTER para sair...")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::io::Cursor;

    struct Scripted(VecDeque<Choice>);

    impl ChoiceSource for Scripted {
        fn next_choice(&mut self) -> io::Result<Choice> {
            self.0
                .pop_front()
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
        }
    }

    fn run_menu(choices: &[Choice]) -> (Mode, String, usize) {
        let mut src = Scripted(choices.iter().copied().collect());
        let mut out = Vec::new();
        let mode = read_mode(&mut src, &mut out).unwrap();
        (mode, String::from_utf8(out).unwrap(), src.0.len())
    }

    #[test]
    fn menu_maps_choices_to_modes() {
        assert_eq!(run_menu(&[Choice::Confirm]).0, Mode::CopyAndLog);
        assert_eq!(run_menu(&[Choice::Alternate]).0, Mode::LogOnly);
        assert_eq!(run_menu(&[Choice::Cancel]).0, Mode::Cancelled);
    }

    #[test]
    fn menu_reprompts_on_unrecognized() {
        let (mode, text, left) =
            run_menu(&[Choice::Unrecognized, Choice::Unrecognized, Choice::Alternate, Choice::Confirm]);
        assert_eq!(mode, Mode::LogOnly);
        assert_eq!(left, 1, "stops reading once a valid choice is made");
        assert_eq!(text.matches("Opção inválida!").count(), 2);
        assert_eq!(text.matches("Escolha: ").count(), 3);
    }

    #[test]
    fn cancel_prints_message() {
        let (_, text, _) = run_menu(&[Choice::Cancel]);
        assert!(text.contains("Operação cancelada pelo usuário."));
    }

    #[test]
    fn line_choices_mapping() {
        let mut src = LineChoices::new(Cursor::new("\n1\r\nESC\n\u{1b}\nx\n"));
        assert_eq!(src.next_choice().unwrap(), Choice::Confirm);
        assert_eq!(src.next_choice().unwrap(), Choice::Alternate);
        assert_eq!(src.next_choice().unwrap(), Choice::Cancel);
        assert_eq!(src.next_choice().unwrap(), Choice::Cancel);
        assert_eq!(src.next_choice().unwrap(), Choice::Unrecognized);
        // end of input
        assert_eq!(src.next_choice().unwrap(), Choice::Cancel);
    }

    #[test]
    fn term_keeps_spaces_and_case() {
        let mut input = Cursor::new("  RePort \r\n");
        let mut out = Vec::new();
        assert_eq!(read_term(&mut input, &mut out).unwrap(), "  RePort ");
    }

    #[test]
    fn term_reprompts_until_valid() {
        let mut input = Cursor::new("\na/b\nreport\n");
        let mut out = Vec::new();
        assert_eq!(read_term(&mut input, &mut out).unwrap(), "report");
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Termo inválido").count(), 2);
        assert!(text.contains("vazio"));
        assert!(text.contains("separador"));
    }

    #[test]
    fn term_eof_is_fatal() {
        let mut input = Cursor::new("");
        let mut out = Vec::new();
        let err = read_term(&mut input, &mut out).unwrap_err();
        assert_eq!(err.downcast_ref::<LocatorError>().unwrap().kind(), "input_closed");
    }

    #[test]
    fn ack_returns_on_enter_or_eof() {
        let mut out = Vec::new();
        wait_for_ack(&mut Cursor::new("\n"), &mut out).unwrap();
        wait_for_ack(&mut Cursor::new(""), &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("Pressione ENTER para sair..."));
    }
}
