//! Interactive mode: ask for a URL or a local-storage export on stdin.

use anyhow::{Context, Result};
use jrd_core::pipeline::Pipeline;
use std::io::{BufRead, Write};

use super::local_storage::download_text;
use super::url::run_url;

/// What the user entered at the prompt.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum PromptInput {
    Url(String),
    LocalStorage(String),
}

pub async fn run_prompt(pipeline: &Pipeline) -> Result<()> {
    let input = {
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();
        ask(&mut stdin.lock(), &mut stdout)?
    };
    match input {
        PromptInput::Url(url) => run_url(pipeline, &url).await,
        PromptInput::LocalStorage(text) => {
            println!("Downloading...");
            download_text(pipeline, &text).await
        }
    }
}

/// Asks for the input mode (default 1 = URL) and then for the input itself.
pub(crate) fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<PromptInput> {
    writeln!(out, "Input from URL (1) or from local storage JSON (2)? Default: 1")?;
    out.flush()?;
    let choice = read_line(input)?;
    writeln!(out)?;
    if choice == "2" {
        writeln!(out, "Input local storage JSON:")?;
        out.flush()?;
        let text = read_line(input)?;
        writeln!(out)?;
        Ok(PromptInput::LocalStorage(text))
    } else {
        writeln!(out, "Input URL:")?;
        out.flush()?;
        let url = read_line(input)?;
        writeln!(out)?;
        Ok(PromptInput::Url(url))
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    input.read_line(&mut line).context("read from stdin")?;
    Ok(line.trim().to_string())
}
