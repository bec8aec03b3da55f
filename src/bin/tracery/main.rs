//! Tracery CLI - wireframe face reconstruction tool.
//!
//! Usage: tracery <COMMAND> <INPUT>
//!
//! Run `tracery --help` for available commands.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, Subcommand};

use tracery::error::Result;
use tracery::io;
use tracery::wire::Wireframe;

#[derive(Parser)]
#[command(name = "tracery")]
#[command(author, version, about = "Wireframe face reconstruction CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display wireframe information
    Info {
        /// Input wireframe file
        input: PathBuf,
    },

    /// Reconstruct faces and print a face table
    Faces {
        /// Input wireframe file
        input: PathBuf,

        /// Print the vertex loop of every face
        #[arg(long)]
        loops: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Info { input } => info(&input),
        Commands::Faces { input, loops } => faces(&input, loops),
    }
}

fn info(input: &Path) -> Result<()> {
    let wire = io::load(input)?;

    println!("{}", input.display());
    println!("  nodes:    {}", wire.num_nodes());
    println!("  elements: {}", wire.num_elems());
    let arcs = wire.elems().iter().filter(|e| e.is_arc()).count();
    println!("  arcs:     {}", arcs);

    if let Some((min, max)) = wire.bounding_box() {
        println!(
            "  bounds:   [{:.3}, {:.3}, {:.3}] - [{:.3}, {:.3}, {:.3}]",
            min.x, min.y, min.z, max.x, max.y, max.z
        );
    }
    Ok(())
}

fn faces(input: &Path, print_loops: bool) -> Result<()> {
    let mut wire = io::load(input)?;

    let start = Instant::now();
    wire.generate_faces()?;
    let elapsed = start.elapsed();

    println!(
        "{}: {} faces from {} nodes / {} elements ({:.2?})",
        input.display(),
        wire.num_faces(),
        wire.num_nodes(),
        wire.num_elems(),
        elapsed
    );

    println!("{:>6} {:>6} {:>12}  centroid", "face", "verts", "area");
    let mut total = 0.0;
    for (i, face) in wire.faces().iter().enumerate() {
        let c = face.centroid;
        println!(
            "{:>6} {:>6} {:>12.6}  ({:.4}, {:.4}, {:.4})",
            i,
            face.points.len(),
            face.area,
            c.x,
            c.y,
            c.z
        );
        if print_loops {
            println!("       {:?}", face.points);
        }
        total += face.area;
    }
    println!("total area: {:.6}", total);
    Ok(())
}
