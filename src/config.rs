use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_NAMES_FILE: &str = "NamesOrderedByFrequency";
pub const DEFAULT_ADDRESSES_FILE: &str = "AddressesSortedAlphabetically";

#[derive(Parser, Debug)]
#[command(name = "contactsort")]
#[command(about = "Summarises a CSV contact list into name frequencies and sorted addresses")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Contact list to read
    #[arg(long, default_value = "Files/Data.csv")]
    pub input: PathBuf,

    /// Directory the output files are written to (must exist)
    #[arg(long, default_value = "OutputFiles")]
    pub output_dir: PathBuf,

    /// File name, without extension, for the name frequency list
    #[arg(long)]
    pub names_file: Option<String>,

    /// File name, without extension, for the sorted address list
    #[arg(long)]
    pub addresses_file: Option<String>,

    /// Use the default file names instead of asking for them
    #[arg(long)]
    pub no_prompt: bool,
}

#[derive(Debug, PartialEq)]
pub struct OutputTargets {
    pub names: PathBuf,
    pub addresses: PathBuf,
}

impl Cli {
    pub fn output_targets<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        out: &mut W,
    ) -> io::Result<OutputTargets> {
        Ok(OutputTargets {
            names: self.target(&self.names_file, DEFAULT_NAMES_FILE, input, out)?,
            addresses: self.target(&self.addresses_file, DEFAULT_ADDRESSES_FILE, input, out)?,
        })
    }

    fn target<R: BufRead, W: Write>(
        &self,
        given: &Option<String>,
        default: &str,
        input: &mut R,
        out: &mut W,
    ) -> io::Result<PathBuf> {
        if let Some(stem) = given {
            return Ok(txt_path(&self.output_dir, stem));
        }
        if self.no_prompt {
            return Ok(txt_path(&self.output_dir, default));
        }
        prompt(&self.output_dir, default, input, out)
    }
}

fn txt_path(dir: &Path, stem: &str) -> PathBuf {
    dir.join(format!("{}.txt", stem))
}

/// Asks for a file name; an empty answer (or no answer at all) picks `default`.
pub fn prompt<R: BufRead, W: Write>(
    dir: &Path,
    default: &str,
    input: &mut R,
    out: &mut W,
) -> io::Result<PathBuf> {
    writeln!(out, "Specify a name for {} or leave blank for default:", default)?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim();

    let path = if answer.is_empty() {
        let path = txt_path(dir, default);
        writeln!(out, "No input provided. Using default value: {}", path.display())?;
        path
    } else {
        let path = txt_path(dir, answer);
        writeln!(out, "Using provided value: {}", path.display())?;
        path
    };
    Ok(path)
}
