use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use anyhow::{Context, Result};
use caffe_markdown::{parse, render, tokenize};
use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(name = "caffe-md", version, about = "Parse markdown into an AST or HTML")]
struct Cli {
    /// Markdown file to read (default: stdin)
    file: Option<PathBuf>,

    /// What to print
    #[arg(long, value_enum, default_value = "html")]
    emit: Emit,
}

#[derive(Clone, Copy, ValueEnum)]
enum Emit {
    Tokens,
    Ast,
    Html,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let input = match &cli.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
    };

    let tokens = tokenize(&input);
    let output = match cli.emit {
        Emit::Tokens => {
            serde_json::to_string_pretty(&tokens).context("Failed to serialize tokens")?
        }
        Emit::Ast => {
            serde_json::to_string_pretty(&parse(&tokens)).context("Failed to serialize AST")?
        }
        Emit::Html => render(&parse(&tokens)),
    };
    println!("{}", output);

    Ok(())
}
