use clap::{Args, Parser, Subcommand, ValueEnum};
use ikebana::prelude::*;
use std::io::{self, BufRead};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Command line interface for the Ikebana bouquet assembly engine
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Match every flower in an input file and print the bouquets
    Run {
        /// Input file holding designs and the flower stream
        input: String,

        /// Load compiled designs from this book instead of the input file
        #[arg(short, long)]
        book: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Print leftover stock and timings to stderr
        #[arg(short, long)]
        summary: bool,

        #[command(flatten)]
        options: FacilityOptions,
    },
    /// Read flowers line by line from stdin, printing bouquets as they complete
    Stream {
        /// File holding the bouquet designs
        designs: String,

        #[command(flatten)]
        options: FacilityOptions,
    },
    /// Compile the designs of an input file into a reusable book
    Compile {
        /// Input file holding the designs
        input: String,

        /// Where to write the compiled book
        #[arg(short, long, default_value = "designs.book")]
        output: String,

        /// Skip malformed designs instead of failing
        #[arg(long)]
        skip_malformed: bool,
    },
}

#[derive(Args, Debug)]
struct FacilityOptions {
    /// JSON config file
    #[arg(short, long)]
    config: Option<String>,

    /// Filler deduction policy, overrides the config file
    #[arg(long, value_enum)]
    filler: Option<FillerCli>,
}

/// CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FillerCli {
    SingleType,
    Spread,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Run {
            input,
            book,
            format,
            summary,
            options,
        } => run_file(&input, book.as_deref(), format, summary, &options),
        Command::Stream { designs, options } => run_stream(&designs, &options),
        Command::Compile {
            input,
            output,
            skip_malformed,
        } => compile_book(&input, &output, skip_malformed),
    }
}

/// Logs go to stderr so stdout only carries bouquets.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ikebana={}", level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(options: &FacilityOptions) -> FacilityConfig {
    let mut config = match &options.config {
        Some(path) => FacilityConfig::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load config: {}", e))),
        None => FacilityConfig::default(),
    };
    if let Some(filler) = options.filler {
        config.filler_policy = match filler {
            FillerCli::SingleType => FillerPolicy::SingleType,
            FillerCli::Spread => FillerPolicy::Spread,
        };
    }
    config
}

fn run_file(
    input_path: &str,
    book_path: Option<&str>,
    format: OutputFormat,
    summary: bool,
    options: &FacilityOptions,
) {
    let total_start = Instant::now();
    let config = load_config(options);

    let input = read_input(input_path).unwrap_or_else(|e| exit_with_error(&e.to_string()));

    let compile_start = Instant::now();
    let mut facility = match book_path {
        Some(path) => {
            let book = RecipeBook::from_file(path)
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to load book: {}", e)));
            Facility::new(book, &config)
        }
        None => Facility::from_text(&input, &config)
            .unwrap_or_else(|e| exit_with_error(&format!("Design compilation failed: {}", e))),
    };
    let compile_duration = compile_start.elapsed();

    let match_start = Instant::now();
    let mut bouquets: Vec<Bouquet> = Vec::new();
    match format {
        OutputFormat::Text => {
            let mut emitter = WriterEmitter::new(io::stdout().lock());
            let mut tee = Tee {
                inner: &mut emitter,
                kept: &mut bouquets,
            };
            facility
                .run(extract_flowers(&input), &mut tee)
                .unwrap_or_else(|e| exit_with_error(&e.to_string()));
        }
        OutputFormat::Json => {
            facility
                .run(extract_flowers(&input), &mut bouquets)
                .unwrap_or_else(|e| exit_with_error(&e.to_string()));
        }
    }
    let match_duration = match_start.elapsed();

    let report = facility.report(bouquets);
    if format == OutputFormat::Json {
        let json = serde_json::to_string_pretty(&report)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to encode report: {}", e)));
        println!("{}", json);
    }

    if summary {
        eprintln!("\n--- Facility Summary ---");
        eprint!("{}", report);
        eprintln!("Leftover flowers:     {}", report.leftover_total());
        eprintln!("\n--- Performance Summary ---");
        eprintln!("Design Compilation:   {:?}", compile_duration);
        eprintln!("Matching:             {:?}", match_duration);
        eprintln!("-----------------------------");
        eprintln!("Total Execution:      {:?}", total_start.elapsed());
    }
}

/// Forwards each bouquet to the writer while keeping it for the report.
struct Tee<'a, E: Emitter> {
    inner: &'a mut E,
    kept: &'a mut Vec<Bouquet>,
}

impl<E: Emitter> Emitter for Tee<'_, E> {
    fn emit(&mut self, bouquet: &Bouquet) -> std::result::Result<(), EmitError> {
        self.inner.emit(bouquet)?;
        self.kept.emit(bouquet)
    }
}

fn run_stream(designs_path: &str, options: &FacilityOptions) {
    let config = load_config(options);
    let designs = read_input(designs_path).unwrap_or_else(|e| exit_with_error(&e.to_string()));
    let mut facility = Facility::from_text(&designs, &config)
        .unwrap_or_else(|e| exit_with_error(&format!("Design compilation failed: {}", e)));
    let mut emitter = WriterEmitter::new(io::stdout().lock());

    for line in io::stdin().lock().lines() {
        let line =
            line.unwrap_or_else(|e| exit_with_error(&format!("Failed to read stdin: {}", e)));
        facility
            .run(extract_flowers(&line), &mut emitter)
            .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    }
}

fn compile_book(input_path: &str, output_path: &str, skip_malformed: bool) {
    let input = read_input(input_path).unwrap_or_else(|e| exit_with_error(&e.to_string()));
    let book = Compiler::builder(extract_recipe_descriptions(&input))
        .skip_malformed(skip_malformed)
        .build()
        .compile()
        .unwrap_or_else(|e| exit_with_error(&format!("Design compilation failed: {}", e)));
    book.save(output_path)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    println!(
        "Compiled {} designs ({} large, {} small) into '{}'",
        book.len(),
        book.large.len(),
        book.small.len(),
        output_path
    );
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
