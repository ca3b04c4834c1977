mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "kvitto",
    version,
    about = "Convert statement PDFs into spreadsheet tables"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the statement table and write it as CSV
    Convert {
        /// Path to the statement PDF
        input: PathBuf,

        /// Output CSV file
        #[arg(short, long, default_value = "statement.csv")]
        out: PathBuf,

        /// Document password, for encrypted statements
        #[arg(short, long)]
        password: Option<String>,

        /// Specific 1-based pages, e.g. 1,3,5 (default: all pages)
        #[arg(long, value_delimiter = ',', conflicts_with_all = ["from", "to"])]
        pages: Vec<usize>,

        /// First page of a range (1-based, inclusive)
        #[arg(long, requires = "to")]
        from: Option<usize>,

        /// Last page of a range (1-based, inclusive)
        #[arg(long, requires = "from")]
        to: Option<usize>,

        /// Keep only records with a non-empty Balance
        #[arg(long)]
        filtered: bool,

        /// Vertical bucket height for row grouping, in page units
        #[arg(long, default_value_t = 10.0)]
        row_height: f32,
    },
    /// Extract and print the table without writing a file
    Preview {
        /// Path to the statement PDF
        input: PathBuf,

        /// Document password, for encrypted statements
        #[arg(short, long)]
        password: Option<String>,

        /// Specific 1-based pages, e.g. 1,3,5 (default: all pages)
        #[arg(long, value_delimiter = ',', conflicts_with_all = ["from", "to"])]
        pages: Vec<usize>,

        /// First page of a range (1-based, inclusive)
        #[arg(long, requires = "to")]
        from: Option<usize>,

        /// Last page of a range (1-based, inclusive)
        #[arg(long, requires = "from")]
        to: Option<usize>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Vertical bucket height for row grouping, in page units
        #[arg(long, default_value_t = 10.0)]
        row_height: f32,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert {
            input,
            out,
            password,
            pages,
            from,
            to,
            filtered,
            row_height,
        } => commands::convert::run(
            input,
            out,
            password,
            commands::selection(&pages, from, to),
            filtered,
            row_height,
        ),
        Commands::Preview {
            input,
            password,
            pages,
            from,
            to,
            output,
            row_height,
        } => commands::preview::run(
            input,
            password,
            commands::selection(&pages, from, to),
            &output,
            row_height,
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
