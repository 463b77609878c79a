//! Build automation tasks for flatdb
//!
//! - `generate-cli-docs`: write the CLI reference from the clap definitions

use anyhow::Context;
use clap::Parser;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation tasks for flatdb", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Generate the markdown CLI reference
    GenerateCliDocs {
        /// Output directory for generated documentation
        #[arg(short, long, default_value = "docs")]
        output_dir: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::GenerateCliDocs { output_dir } => generate_cli_docs(&output_dir)?,
    }

    Ok(())
}

fn generate_cli_docs(output_dir: &str) -> anyhow::Result<()> {
    println!("Generating CLI documentation...");

    let markdown = clap_markdown::help_markdown::<flatdb_cli::Cli>();

    let content = format!(
        r#"# flatdb CLI Reference

Generated from the CLI source code on {}.

## Quick Start

```bash
# Tags of every entry
flatdb tags sequences.gbk

# One field, cleaned
flatdb get sequences.gbk --tag DEFINITION

# Field lines with the tag column removed, as JSON
flatdb get uniprot_sprot.dat.gz --tag DR --lines --output json

# Everything in the first entry
flatdb show genes.kegg --limit 1
```

The format is taken from `--format`, then the file extension, then the first
entry's content.

## Environment Variables

- `FLATDB_FORMAT` - Format used when none can be determined
- `FLATDB_OUTPUT` - Default output style (`text` or `json`)
- `FLATDB_LIMIT` - Default maximum number of entries
- `LOG_LEVEL`, `LOG_OUTPUT`, `LOG_FORMAT`, `LOG_FILTER` - Logging overrides

A `.env` file in the working directory is loaded at start-up.

{}

---

*To update, run `cargo xtask generate-cli-docs`.*
"#,
        chrono::Utc::now().format("%Y-%m-%d"),
        markdown
    );

    let output_path = PathBuf::from(output_dir);
    fs::create_dir_all(&output_path)
        .with_context(|| format!("Failed to create {}", output_path.display()))?;

    let file_path = output_path.join("cli-reference.md");
    fs::write(&file_path, content)
        .with_context(|| format!("Failed to write {}", file_path.display()))?;

    println!("Generated CLI documentation at: {}", file_path.display());

    Ok(())
}
