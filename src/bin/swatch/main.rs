//! Swatch CLI - colored mesh component analysis tool.
//!
//! Usage: swatch <COMMAND> [OPTIONS] <INPUT> [OUTPUT]
//!
//! Run `swatch --help` for available commands.

use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, Subcommand};

use swatch::algo::{vertex_adjacency_edges, ColorComponents, ComponentsOptions};
use swatch::io;

#[derive(Parser)]
#[command(name = "swatch")]
#[command(author, version, about = "Colored mesh component analysis", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display mesh information
    Info {
        /// Input mesh file
        input: PathBuf,
    },

    /// Partition vertices into identically colored connected components
    Components {
        /// Input mesh file
        input: PathBuf,

        /// Output text file, one group per line; prints to stdout when omitted
        output: Option<PathBuf>,

        /// Use single-threaded execution (for benchmarking)
        #[arg(long)]
        sequential: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Commands::Info { input } => {
            cmd_info(&input)?;
        }

        Commands::Components {
            input,
            output,
            sequential,
        } => {
            cmd_components(&input, output.as_deref(), sequential)?;
        }
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn Error>> {
    let mesh = io::load(input)?;

    println!("File: {}", input.display());
    println!("Vertices: {}", mesh.num_vertices());
    println!("Triangles: {}", mesh.num_triangles());

    let edges = vertex_adjacency_edges(mesh.triangles());
    println!("Adjacency edges: {}", edges.len());
    println!("Distinct colors: {}", mesh.num_distinct_colors());

    if let Some((min, max)) = mesh.bounding_box() {
        println!(
            "Bounding box: ({:.3}, {:.3}, {:.3}) to ({:.3}, {:.3}, {:.3})",
            min.x, min.y, min.z, max.x, max.y, max.z
        );
    }

    let components = mesh.identically_colored_components(&ComponentsOptions::default())?;
    println!("Color components: {}", components.component_count());
    if let (Some(largest), Some(smallest)) = (components.largest(), components.smallest()) {
        println!(
            "Component sizes: {} (largest) to {} (smallest)",
            largest.len(),
            smallest.len()
        );
    }

    Ok(())
}

fn cmd_components(
    input: &Path,
    output: Option<&Path>,
    sequential: bool,
) -> Result<(), Box<dyn Error>> {
    let mesh = io::load(input)?;

    println!(
        "Loaded: {} vertices, {} triangles",
        mesh.num_vertices(),
        mesh.num_triangles()
    );

    let options = ComponentsOptions::default().with_parallel(!sequential);

    let start = Instant::now();
    let components = mesh.identically_colored_components(&options)?;
    let elapsed = start.elapsed();

    println!(
        "Found {} identically colored components ({:.2?})",
        components.component_count(),
        elapsed
    );

    match output {
        Some(path) => {
            let file = File::create(path)?;
            let mut writer = BufWriter::new(file);
            write_groups(&mut writer, &components)?;
            writer.flush()?;
            println!("Saved: {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            write_groups(&mut stdout.lock(), &components)?;
        }
    }

    Ok(())
}

/// One group per line, members space-separated in ascending index order.
fn write_groups<W: Write>(writer: &mut W, components: &ColorComponents) -> std::io::Result<()> {
    for group in components.iter() {
        let members: Vec<String> = group.iter().map(|v| v.to_string()).collect();
        writeln!(writer, "{}", members.join(" "))?;
    }
    Ok(())
}
