//! tprint CLI - Render delimited text as a bordered table

#[cfg(feature = "cli")]
use anyhow::{anyhow, bail, Context, Result};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};
#[cfg(feature = "cli")]
use tabprint::{Alignment, TableOptions, TablePrinter};
#[cfg(feature = "cli")]
use tracing_subscriber::EnvFilter;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "tprint")]
#[command(version)]
#[command(about = "tprint - Render CSV or other delimited text as a bordered table", long_about = None)]
struct Cli {
    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Table title, `\n` sequences start a new title line
    #[arg(short, long)]
    title: Option<String>,

    /// Alignment of the title
    #[arg(long)]
    title_align: Option<Alignment>,

    /// Digits after the decimal point for floating point values
    #[arg(short, long)]
    precision: Option<usize>,

    /// Pattern written between columns
    #[arg(short, long)]
    separator: Option<String>,

    /// Field delimiter of the input
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,

    /// Column alignments, one of l/r/c per column (missing columns are left aligned)
    #[arg(short, long, default_value = "")]
    align: String,

    /// Minimum width shared by every column
    #[arg(short, long, default_value_t = 0)]
    width: usize,

    /// Format numeric fields (integers as is, decimals in scientific notation)
    #[arg(short, long)]
    numeric: bool,

    /// TOML file with table options; command line flags take precedence
    #[arg(short, long)]
    config: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Read input
    let input = match cli.input_file {
        Some(ref path) => fs::read_to_string(path).with_context(|| format!("reading {}", path))?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let options = resolve_options(&cli)?;
    let records = read_records(&input, cli.delimiter)?;
    let alignments = parse_alignments(&cli.align)?;

    match cli.output {
        Some(ref path) => {
            let file = fs::File::create(path).with_context(|| format!("creating {}", path))?;
            let mut table = TablePrinter::with_options(options, io::BufWriter::new(file));
            fill_table(&mut table, &records, &alignments, cli.width, cli.numeric)?;
            table.print()?;
            eprintln!("✓ Output written to: {}", path);
        }
        None => {
            let mut table = TablePrinter::with_options(options, io::stdout().lock());
            fill_table(&mut table, &records, &alignments, cli.width, cli.numeric)?;
            table.print()?;
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(feature = "cli")]
fn resolve_options(cli: &Cli) -> Result<TableOptions> {
    let mut options = match cli.config {
        Some(ref path) => {
            let text = fs::read_to_string(path).with_context(|| format!("reading {}", path))?;
            TableOptions::from_toml_str(&text)?
        }
        None => TableOptions::default(),
    };

    if let Some(ref title) = cli.title {
        options.title = title.replace("\\n", "\n");
    }
    if let Some(alignment) = cli.title_align {
        options.title_alignment = alignment;
    }
    if let Some(precision) = cli.precision {
        options.precision = precision;
    }
    if let Some(ref separator) = cli.separator {
        options.separator = separator.clone();
    }
    Ok(options)
}

#[cfg(feature = "cli")]
fn read_records(input: &str, delimiter: char) -> Result<Vec<Vec<String>>> {
    let delimiter = u8::try_from(delimiter)
        .ok()
        .filter(u8::is_ascii)
        .with_context(|| format!("delimiter '{}' is not an ASCII character", delimiter))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(input.as_bytes());

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record.context("malformed input record")?;
        records.push(record.iter().map(str::to_string).collect());
    }
    Ok(records)
}

#[cfg(feature = "cli")]
fn parse_alignments(letters: &str) -> Result<Vec<Alignment>> {
    letters
        .chars()
        .map(|c| match Alignment::from_char(c) {
            Some(alignment) => Ok(alignment),
            None => Err(anyhow!("unknown alignment '{}', expected one of l, r, c", c)),
        })
        .collect()
}

#[cfg(feature = "cli")]
fn fill_table<W: Write>(
    table: &mut TablePrinter<W>,
    records: &[Vec<String>],
    alignments: &[Alignment],
    width: usize,
    numeric: bool,
) -> Result<()> {
    let Some((header, body)) = records.split_first() else {
        bail!("input is empty, expected a header row");
    };

    for (index, name) in header.iter().enumerate() {
        let alignment = alignments.get(index).copied().unwrap_or_default();
        table.add_column(name, alignment, width)?;
    }

    for record in body {
        for field in record.iter().take(header.len()) {
            push_field(table, field, numeric)?;
        }
        table.end_row();
    }
    Ok(())
}

#[cfg(feature = "cli")]
fn push_field<W>(table: &mut TablePrinter<W>, field: &str, numeric: bool) -> Result<()> {
    let trimmed = field.trim();
    if numeric {
        if let Ok(value) = trimmed.parse::<i64>() {
            table.push(value)?;
            return Ok(());
        }
        if let Ok(value) = trimmed.parse::<f64>() {
            table.push(value)?;
            return Ok(());
        }
    }
    table.push(field)?;
    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install tabprint --features cli");
    eprintln!("  tprint [OPTIONS] [INPUT_FILE]");
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_alignments() {
        assert_eq!(
            parse_alignments("lrc").unwrap(),
            vec![Alignment::Left, Alignment::Right, Alignment::Center]
        );
        assert!(parse_alignments("lx").is_err());
        assert!(parse_alignments("").unwrap().is_empty());
    }

    #[test]
    fn test_read_records_with_delimiter() {
        let records = read_records("a;b\n1;2\n3\n", ';').unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[1], vec!["1", "2"]);
        assert_eq!(records[2], vec!["3"]);
        assert!(read_records("a", 'é').is_err());
    }

    #[test]
    fn test_fill_table_numeric() {
        let records = read_records("n,x\n1,0.5\n2\n", ',').unwrap();
        let mut table = TablePrinter::with_output("", 8, Vec::<u8>::new(), " | ");
        fill_table(&mut table, &records, &[Alignment::Right], 0, true).unwrap();

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.cell(0, 1).unwrap().line(0), "5.0e-01");
        assert!(table.cell(1, 1).unwrap().is_empty());
        assert_eq!(table.columns()[0].alignment(), Alignment::Right);
        assert_eq!(table.columns()[1].alignment(), Alignment::Left);
    }

    #[test]
    fn test_fill_table_empty_input() {
        let mut table = TablePrinter::with_output("", 8, Vec::<u8>::new(), " | ");
        assert!(fill_table(&mut table, &[], &[], 0, false).is_err());
    }
}
