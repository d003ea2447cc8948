//! The search log: header, one block per match, warnings and footer.
//!
//! Every write error is fatal for the run and surfaces as `LocatorError::LogWrite`.
//! The buffered handle is flushed by `finish()`; on early return it is flushed on drop.

use chrono::{DateTime, Local};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::errors::LocatorError;

/// Timestamp format used inside the log (dd/mm/yyyy hh:mm:ss).
pub const DISPLAY_TIME_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Text used when a file's modification time cannot be read.
pub const UNKNOWN_TIME: &str = "indisponível";

const RULE_WIDTH: usize = 45;

/// One matched file as it appears in the log.
#[derive(Debug, Clone)]
pub struct LogEntry<'a> {
    pub index: usize,
    pub name: &'a str,
    pub folder: &'a Path,
    pub full_path: &'a Path,
    pub modified: Option<DateTime<Local>>,
}

pub struct Report {
    path: PathBuf,
    out: BufWriter<File>,
}

impl Report {
    /// Create (or truncate) the log file at `path`.
    pub fn create(path: &Path) -> Result<Self, LocatorError> {
        let file = File::create(path).map_err(|source| LocatorError::LogFileCreate {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            out: BufWriter::new(file),
        })
    }

    pub fn header(&mut self, term: &str, started_at: &DateTime<Local>, base: &Path) -> Result<(), LocatorError> {
        let res = (|| -> io::Result<()> {
            writeln!(self.out, "========== LOCALIZADOR DE ARQUIVOS ==========")?;
            writeln!(self.out, "Termo buscado (ignore case): {term}")?;
            writeln!(self.out, "Data e hora da busca: {}", started_at.format(DISPLAY_TIME_FORMAT))?;
            writeln!(self.out, "Pasta base: {}", base.display())?;
            writeln!(self.out, "{}", "=".repeat(RULE_WIDTH))?;
            writeln!(self.out)
        })();
        self.check(res)
    }

    /// Write the numbered block for a match; `warnings` go inside the block.
    pub fn entry(&mut self, entry: &LogEntry<'_>, warnings: &[String]) -> Result<(), LocatorError> {
        let modified = entry
            .modified
            .map(|t| t.format(DISPLAY_TIME_FORMAT).to_string())
            .unwrap_or_else(|| UNKNOWN_TIME.to_string());
        let res = (|| -> io::Result<()> {
            writeln!(self.out, "[{}] Arquivo encontrado:", entry.index)?;
            writeln!(self.out, "  • Nome: {}", entry.name)?;
            writeln!(self.out, "  • Pasta: {}", entry.folder.display())?;
            writeln!(self.out, "  • Caminho completo: {}", entry.full_path.display())?;
            writeln!(self.out, "  • Modificado em: {modified}")?;
            for w in warnings {
                writeln!(self.out, "  ! Aviso: {w}")?;
            }
            writeln!(self.out, "{}", "-".repeat(RULE_WIDTH))
        })();
        self.check(res)
    }

    /// A directory that could not be read; its subtree is skipped.
    pub fn skipped_dir(&mut self, path: Option<&Path>, reason: &str) -> Result<(), LocatorError> {
        let shown = path
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(caminho desconhecido)".to_string());
        let res = (|| -> io::Result<()> {
            writeln!(self.out, "[AVISO] Não foi possível acessar: {shown}")?;
            writeln!(self.out, "  ! Motivo: {reason}")?;
            writeln!(self.out, "{}", "-".repeat(RULE_WIDTH))
        })();
        self.check(res)
    }

    pub fn footer(&mut self, total: usize) -> Result<(), LocatorError> {
        let res = (|| -> io::Result<()> {
            writeln!(self.out)?;
            writeln!(self.out, "Total de arquivos encontrados: {total}")?;
            writeln!(self.out, "========== FIM DO LOG ==========")
        })();
        self.check(res)
    }

    /// Flush buffered text and sync the file to disk.
    pub fn finish(mut self) -> Result<PathBuf, LocatorError> {
        let res = self.out.flush().and_then(|_| self.out.get_ref().sync_all());
        self.check(res)?;
        Ok(self.path)
    }

    fn check(&self, res: io::Result<()>) -> Result<(), LocatorError> {
        res.map_err(|source| LocatorError::LogWrite {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn renders_expected_layout() {
        let td = tempfile::tempdir().unwrap();
        let path = td.path().join("r.txt");
        let t = Local.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let base = Path::new("/base");

        let mut r = Report::create(&path).unwrap();
        r.header("Rep", &t, base).unwrap();
        r.entry(
            &LogEntry {
                index: 1,
                name: "report.TXT",
                folder: base,
                full_path: &base.join("report.TXT"),
                modified: Some(t),
            },
            &[],
        )
        .unwrap();
        r.entry(
            &LogEntry {
                index: 2,
                name: "x_rep",
                folder: base,
                full_path: &base.join("x_rep"),
                modified: None,
            },
            &["falha ao copiar: boom".to_string()],
        )
        .unwrap();
        r.footer(2).unwrap();
        let written = r.finish().unwrap();
        assert_eq!(written, path);

        let text = std::fs::read_to_string(&path).unwrap();
        let rule_eq = "=".repeat(45);
        let rule_dash = "-".repeat(45);
        let expected_head = format!(
            "========== LOCALIZADOR DE ARQUIVOS ==========\n\
             Termo buscado (ignore case): Rep\n\
             Data e hora da busca: 02/01/2025 03:04:05\n\
             Pasta base: {}\n\
             {rule_eq}\n\n\
             [1] Arquivo encontrado:\n",
            base.display()
        );
        assert!(text.starts_with(&expected_head), "got:\n{text}");
        assert!(text.contains("  • Modificado em: 02/01/2025 03:04:05\n"));
        assert!(text.contains(&format!(
            "  • Modificado em: indisponível\n  ! Aviso: falha ao copiar: boom\n{rule_dash}\n"
        )));
        assert!(text.ends_with("\nTotal de arquivos encontrados: 2\n========== FIM DO LOG ==========\n"));
    }

    #[test]
    fn create_in_missing_dir_is_typed_error() {
        let td = tempfile::tempdir().unwrap();
        let err = Report::create(&td.path().join("missing").join("r.txt")).err().unwrap();
        assert_eq!(err.kind(), "log_file_create");
    }
}
