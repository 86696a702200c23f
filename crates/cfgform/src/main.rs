use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};

use cfgform_core::{rewrite_line, FormRenderer, RequestParams, Rewrite};

#[derive(Parser, Debug)]
#[command(name = "cfgform")]
#[command(about = "Generate an HTML form from a config file, or apply CGI request data to it.", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase diagnostic verbosity (repeatable).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Write output to FILE instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    out: Option<PathBuf>,

    /// Decode a CGI-style query string and apply it to the input.
    #[arg(short, long, value_name = "STRING")]
    request: Option<String>,

    /// Print the decoded value of one request parameter instead of
    /// processing the input.
    #[arg(short, long, value_name = "NAME", requires = "request")]
    print: Option<String>,

    /// Config file to read (stdin when omitted).
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    try_main().map_err(|err| {
        eprintln!("{err:#}");
        err
    })
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();

    let mut out: Box<dyn Write> = match &cli.out {
        Some(path) => {
            Box::new(File::create(path).with_context(|| format!("open {}", path.display()))?)
        }
        None => Box::new(io::stdout().lock()),
    };

    let params = match &cli.request {
        Some(query) => {
            if cli.verbose >= 2 {
                eprintln!("cgi: {query}");
            }
            let params = RequestParams::parse(query);
            if cli.verbose >= 2 {
                for (key, value) in params.iter() {
                    eprintln!("cgi: {key}={value}");
                }
            }
            Some(params)
        }
        None => None,
    };

    if let (Some(name), Some(params)) = (&cli.print, params.as_ref()) {
        writeln!(out, "{}", params.get(name).unwrap_or(""))?;
        return Ok(());
    }

    let input: Box<dyn BufRead> = match &cli.config {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("open {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin().lock())),
    };

    match params {
        Some(params) => apply_request(input, &mut out, &params, cli.verbose),
        None => render_form(input, &mut out),
    }
}

fn render_form(input: impl BufRead, out: &mut impl Write) -> Result<()> {
    let mut renderer = FormRenderer::new();
    for line in input.lines() {
        let line = line.context("read input line")?;
        renderer.push_line(&line, out)?;
    }
    renderer.finish(out)
}

fn apply_request(
    input: impl BufRead,
    out: &mut impl Write,
    params: &RequestParams,
    verbose: u8,
) -> Result<()> {
    for line in input.lines() {
        let line = line.context("read input line")?;
        let rewrite = rewrite_line(&line, params);
        if verbose >= 1 {
            if let Rewrite::Assign {
                key,
                value,
                overridden,
            } = &rewrite
            {
                let action = if *overridden { "changing" } else { "writing" };
                eprintln!("{action} {key}={value}");
            }
        }
        writeln!(out, "{}", rewrite.to_line())?;
    }
    Ok(())
}
