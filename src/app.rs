//! Application orchestrator.
//! term -> option menu (exit on cancel) -> base dir -> destination -> search -> summary -> ENTER.

use anyhow::Result;
use chrono::Local;
use std::io;
use std::path::Path;
use std::process::ExitCode;
use tracing::{debug, error};

use file_locator::cli::Args;
use file_locator::output as out;
use file_locator::prompt::{self, LineChoices, TerminalKeys};
use file_locator::{
    create_destination, current_executable, resolve_base_dir, run_search, Config, LocatorError, Mode,
    SearchOutcome, SearchRequest,
};

use crate::logging::init_tracing;

/// Run the CLI application. Fatal errors are reported here, once, and turned into exit code 1.
pub fn run(args: Args) -> ExitCode {
    let mut cfg = Config::default();
    args.apply_overrides(&mut cfg);

    // Held until the end of run() so the diagnostics file is flushed on every path.
    let _guard = match init_tracing(&cfg.log_level, cfg.trace_file.as_deref(), cfg.json) {
        Ok(guard) => guard,
        Err(e) => {
            out::print_error(&format!("Falha ao iniciar o diagnóstico: {e}"));
            return ExitCode::FAILURE;
        }
    };
    debug!("Starting file_locator: {:?}", args);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    out::print_user("----LOCALIZADOR DE ARQUIVOS-----");

    let result = (|| -> Result<Option<SearchOutcome>> {
        let term = match args.term.clone() {
            Some(t) => t,
            None => prompt::read_term(&mut input, &mut stdout)?,
        };

        let mode = match args.mode {
            Some(m) => Mode::from(m),
            None if atty::is(atty::Stream::Stdin) => prompt::read_mode(&mut TerminalKeys, &mut stdout)?,
            None => prompt::read_mode(&mut LineChoices::new(&mut input), &mut stdout)?,
        };
        if mode == Mode::Cancelled {
            return Ok(None);
        }

        let self_path = current_executable()?;
        let base_dir = resolve_base_dir(cfg.base_dir.as_deref())?;
        let destination = create_destination(&base_dir, &term, mode)?;

        let request = SearchRequest::new(term, base_dir, mode)
            .with_destination(destination)
            .with_self_path(Some(self_path))
            .with_started_at(Local::now());
        let outcome = run_search(&request)?;
        print_summary(&outcome, request.destination.as_deref());
        Ok(Some(outcome))
    })();

    let code = match &result {
        // Cancelled: leave immediately, nothing was created.
        Ok(None) => return ExitCode::SUCCESS,
        Ok(Some(_)) => ExitCode::SUCCESS,
        Err(e) => {
            report_fatal(e);
            ExitCode::FAILURE
        }
    };

    if cfg.wait_for_ack {
        let _ = prompt::wait_for_ack(&mut input, &mut stdout);
    }
    code
}

fn print_summary(outcome: &SearchOutcome, destination: Option<&Path>) {
    out::print_user("");
    out::print_success("Operação concluída.");
    out::print_user(&format!("Total de arquivos encontrados: {}", outcome.matches));
    if let Some(dest) = destination {
        out::print_user(&format!("Arquivos copiados: {}", outcome.copied));
        out::print_user(&format!("Pasta de destino: {}", dest.display()));
    }
    out::print_user(&format!("Log oculto salvo em: {}", outcome.hidden_log.display()));
    if !outcome.log_dir_hidden {
        out::print_user("Observação: neste sistema a pasta \"log\" não pôde ser marcada como oculta.");
    }
    if let Some(visible) = &outcome.visible_log {
        out::print_user(&format!("Log visível salvo em: {}", visible.display()));
    }
    if outcome.warnings > 0 {
        out::print_warn(&format!(
            "{} aviso(s) registrado(s) no log; confira os itens marcados com \"Aviso\".",
            outcome.warnings
        ));
    }
}

fn report_fatal(e: &anyhow::Error) {
    if let Some(le) = e.downcast_ref::<LocatorError>() {
        error!(code = le.code(), kind = le.kind(), error = %le, "run aborted");
    } else {
        error!(error = ?e, "run aborted");
    }
    out::print_error(&format!("{:#}", e));
}
