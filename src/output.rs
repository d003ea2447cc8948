//! Console lines shown to the person running the locator.
//! The banner, menu and summary go to stdout; warnings and errors go to stderr.
//! Prefixes are colored only when the stream they are written to is a terminal.

use owo_colors::OwoColorize;

fn colored(stream: atty::Stream) -> bool {
    atty::is(stream)
}

/// `aviso: …` on stderr.
pub fn print_warn(msg: &str) {
    if colored(atty::Stream::Stderr) {
        eprintln!("{} {}", "aviso:".yellow().bold(), msg);
    } else {
        eprintln!("aviso: {msg}");
    }
}

/// `erro: …` on stderr.
pub fn print_error(msg: &str) {
    if colored(atty::Stream::Stderr) {
        eprintln!("{} {}", "erro:".red().bold(), msg);
    } else {
        eprintln!("erro: {msg}");
    }
}

/// Completion line on stdout.
pub fn print_success(msg: &str) {
    if colored(atty::Stream::Stdout) {
        println!("{} {}", "ok:".green().bold(), msg);
    } else {
        println!("ok: {msg}");
    }
}

/// Plain stdout line (banner, summary fields).
pub fn print_user(msg: &str) {
    println!("{msg}");
}
