//! The `wordform quiz` command: an interactive loop over stdin/stdout.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

use wordform_core::report::SessionReport;
use wordform_core::{SelectionPolicy, Trainer};

use crate::display::{write_no_words, write_results};

pub fn execute(
    config_path: Option<PathBuf>,
    page: usize,
    catalog_path: Option<PathBuf>,
    selection: Option<SelectionPolicy>,
) -> Result<()> {
    let (config, catalog) = super::load_catalog(config_path.as_deref(), catalog_path, selection)?;
    anyhow::ensure!(!catalog.is_empty(), "catalog '{}' has no words", catalog.name());

    let mut trainer = Trainer::start_at(catalog, config.selection, page);
    run(&mut trainer, io::stdin().lock(), io::stdout().lock())
}

/// What the learner chose after seeing a page's results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavCommand {
    Retry,
    Next,
    Prev,
    GoTo(usize),
    Quit,
}

fn parse_nav(line: &str) -> Option<NavCommand> {
    let mut parts = line.split_whitespace();
    let cmd = parts.next()?.to_lowercase();
    match cmd.as_str() {
        "r" | "retry" => Some(NavCommand::Retry),
        "n" | "next" => Some(NavCommand::Next),
        "p" | "prev" | "previous" => Some(NavCommand::Prev),
        "q" | "quit" | "exit" => Some(NavCommand::Quit),
        "g" | "go" | "goto" => parts.next()?.parse().ok().map(NavCommand::GoTo),
        other => other.parse().ok().map(NavCommand::GoTo),
    }
}

/// Drive the trainer until the learner quits or input ends.
pub fn run<R: BufRead, W: Write>(trainer: &mut Trainer, mut input: R, mut out: W) -> Result<()> {
    loop {
        if !play_page(trainer, &mut input, &mut out)? {
            return Ok(());
        }

        loop {
            write!(
                out,
                "\n[r]etry  [n]ext  [p]rev  [g N] go to page  [q]uit > "
            )?;
            out.flush()?;

            let Some(line) = read_line(&mut input)? else {
                writeln!(out)?;
                return Ok(());
            };
            if line.trim().is_empty() {
                continue;
            }

            match parse_nav(&line) {
                Some(NavCommand::Retry) => {
                    trainer.retry();
                    break;
                }
                Some(NavCommand::Next) => {
                    if trainer.next_page() {
                        break;
                    }
                    writeln!(out, "Already on the last page.")?;
                }
                Some(NavCommand::Prev) => {
                    if trainer.prev_page() {
                        break;
                    }
                    writeln!(out, "Already on the first page.")?;
                }
                Some(NavCommand::GoTo(page)) => {
                    trainer.go_to_page(page);
                    break;
                }
                Some(NavCommand::Quit) => return Ok(()),
                None => writeln!(out, "Unknown command: {}", line.trim())?,
            }
        }
    }
}

/// Ask every question on the current page, then grade and print results.
///
/// Returns `false` if input ended before the page was finished.
fn play_page<R: BufRead, W: Write>(
    trainer: &mut Trainer,
    input: &mut R,
    out: &mut W,
) -> Result<bool> {
    if trainer.session().is_empty() {
        write_no_words(out, trainer.current_page(), trainer.total_pages())?;
        return Ok(true);
    }

    writeln!(
        out,
        "Page {} of {} - Test Your Knowledge\n",
        trainer.current_page(),
        trainer.total_pages()
    )?;

    let prompts: Vec<String> = trainer
        .session()
        .questions()
        .iter()
        .map(|q| q.prompt())
        .collect();
    for (index, prompt) in prompts.iter().enumerate() {
        write!(out, "{}. {} ", index + 1, prompt)?;
        out.flush()?;
        let Some(answer) = read_line(input)? else {
            writeln!(out)?;
            return Ok(false);
        };
        trainer.session_mut().set_answer(index, answer)?;
    }

    trainer.session_mut().submit();
    let report = SessionReport::from_session(trainer.session(), trainer.catalog())
        .ok_or_else(|| anyhow::anyhow!("session was not submitted"))?;

    writeln!(out)?;
    write_results(out, &report)?;
    Ok(true)
}

/// One line without its terminator, or `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let len = line.trim_end_matches(&['\r', '\n'][..]).len();
    line.truncate(len);
    Ok(Some(line))
}
