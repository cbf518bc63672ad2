use clap::Parser;
use ikebana::recipe::SizeClass;
use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;
use std::fs;

/// A CLI tool to generate sample input for the Ikebana facility
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated input file to
    #[arg(short, long, default_value = "generated_input.txt")]
    output: String,

    /// Number of designs to generate per size class
    #[arg(long, default_value_t = 5)]
    designs: usize,

    /// Number of flowers in the generated stream
    #[arg(long, default_value_t = 1000)]
    flowers: usize,

    /// Number of distinct flower types, starting at 'a'
    #[arg(long, default_value_t = 8)]
    species: u8,

    /// Maximum quantity of a single flower type within a design
    #[arg(long, default_value_t = 10)]
    max_quantity: u32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.species == 0 || cli.species > 26 {
        eprintln!("Error: --species must be between 1 and 26, got {}", cli.species);
        std::process::exit(1);
    }
    if cli.designs > 26 {
        eprintln!("Error: --designs cannot exceed 26 per size class, got {}", cli.designs);
        std::process::exit(1);
    }
    if cli.max_quantity == 0 {
        eprintln!("Error: --max-quantity must be at least 1");
        std::process::exit(1);
    }

    println!(
        "Generating {} designs per size class and {} flowers over {} species...",
        cli.designs, cli.flowers, cli.species
    );

    let species: Vec<char> = (b'a'..b'a' + cli.species).map(char::from).collect();
    let mut lines = Vec::new();
    for size in SizeClass::ALL {
        for id in (b'A'..b'A' + cli.designs as u8).map(char::from) {
            lines.push(generate_design(&mut rng, id, size, &species, cli.max_quantity));
        }
    }
    lines.push(String::new());
    lines.extend(generate_flowers(&mut rng, &species, cli.flowers));

    fs::write(&cli.output, lines.join("\n") + "\n")?;

    println!("Successfully generated and saved input to '{}'", cli.output);

    Ok(())
}

/// Generates one design such as `AS3a7c12`, with a random amount of filler.
fn generate_design(
    rng: &mut ThreadRng,
    id: char,
    size: SizeClass,
    species: &[char],
    max_quantity: u32,
) -> String {
    let type_count = rng.random_range(1..=species.len().min(3));
    let mut chosen: Vec<char> = species.choose_multiple(rng, type_count).copied().collect();
    chosen.sort_unstable();

    let mut design = format!("{}{}", id, size);
    let mut named = 0;
    for kind in chosen {
        let quantity = rng.random_range(1..=max_quantity);
        named += quantity;
        design.push_str(&format!("{}{}", quantity, kind));
    }
    let filler = rng.random_range(0..=max_quantity);
    design.push_str(&(named + filler).to_string());
    design
}

/// Generates the flower stream, one flower per line.
fn generate_flowers(rng: &mut ThreadRng, species: &[char], count: usize) -> Vec<String> {
    (0..count)
        .map(|_| {
            let kind = species[rng.random_range(0..species.len())];
            let size = if rng.random_bool(0.5) {
                SizeClass::Large
            } else {
                SizeClass::Small
            };
            format!("{}{}", kind, size)
        })
        .collect()
}
