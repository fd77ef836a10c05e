// Headless viewer for generated structures.
//
// Builds one tree or hut with the requested parameters and prints what was
// generated: resolved parameters, voxel count, refused placements, a block
// histogram and, on request, the structure as one ASCII grid per y layer.
// With a block registry it also materializes the model and reports blocks
// that have no textures. `blocks` lists every entry of a registry file.
//
// Usage:
//   zenith_viewer tree [--species NAME] [--height N] [--seed N] [COMMON]
//   zenith_viewer hut [--style NAME] [--no-furnishings] [--seed N] [COMMON]
//   zenith_viewer blocks --registry PATH [--config PATH]
//
//   COMMON:
//     --config <PATH>     Viewer config JSON (grid size, asset prefix, offset)
//     --registry <PATH>   BlockRegistry.json to materialize against
//     --slices            Print every non-empty y layer
//
// Logging goes through env_logger; set RUST_LOG=debug to see generation
// parameters.

use std::collections::BTreeMap;
use std::path::PathBuf;

use zenith_models::config::ViewerConfig;
use zenith_models::grid::VoxelGrid;
use zenith_models::hut_gen::HutModel;
use zenith_models::registry::BlockRegistry;
use zenith_models::report::GenerationReport;
use zenith_models::tree_gen::TreeModel;
use zenith_models::types::{HutStyle, TreeSpecies};

#[derive(Debug, PartialEq)]
enum Command {
    Tree {
        species: TreeSpecies,
        height: i32,
    },
    Hut {
        style: HutStyle,
        furnishings: bool,
    },
    Blocks,
}

#[derive(Debug)]
struct Options {
    command: Command,
    seed: Option<u64>,
    config: Option<PathBuf>,
    registry: Option<PathBuf>,
    slices: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();
    let options = parse_args(&args).unwrap_or_else(|msg| {
        eprintln!("{msg}");
        print_usage();
        std::process::exit(1);
    });

    let config = match &options.config {
        Some(path) => ViewerConfig::load(path).unwrap_or_else(|e| {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }),
        None => ViewerConfig::default(),
    };

    let registry = options.registry.as_ref().map(|path| {
        let mut registry = BlockRegistry::new(config.assets_path.clone());
        if let Err(e) = registry.load_file(path) {
            eprintln!("Failed to load block registry: {e}");
            std::process::exit(1);
        }
        registry
    });

    match options.command {
        Command::Blocks => match &registry {
            Some(registry) => print_blocks(registry),
            None => {
                eprintln!("blocks requires --registry <PATH>");
                std::process::exit(1);
            }
        },
        Command::Tree { species, height } => {
            let grid = &config.grid;
            let mut model = TreeModel::new(grid.vox_max_height, grid.vox_width);
            if let Some(seed) = options.seed {
                model.set_random_seed(seed);
            }
            let report = model.generate_tree(species, height);
            println!("Tree: {species}, height {} (requested {height})", report.height);
            show(model.grid_mut(), &report, &config, registry.as_ref(), options.slices);
        }
        Command::Hut { style, furnishings } => {
            let grid = &config.grid;
            let mut model = HutModel::new(grid.vox_width, grid.vox_max_height, grid.vox_depth);
            if let Some(seed) = options.seed {
                model.set_random_seed(seed);
            }
            let report = model.generate_hut(style, furnishings);
            println!("Hut: {style}, furnishings: {furnishings}");
            show(model.grid_mut(), &report, &config, registry.as_ref(), options.slices);
        }
    }
}

/// Parse `args` (including the program name). Returns a message on error.
fn parse_args(args: &[String]) -> Result<Options, String> {
    let Some(sub) = args.get(1) else {
        return Err("Missing command".to_owned());
    };
    let mut command = match sub.as_str() {
        "tree" => Command::Tree {
            species: TreeSpecies::Birch,
            height: 0,
        },
        "hut" => Command::Hut {
            style: HutStyle::Basic,
            furnishings: true,
        },
        "blocks" => Command::Blocks,
        "--help" | "-h" => {
            print_usage();
            std::process::exit(0);
        }
        other => return Err(format!("Unknown command: {other}")),
    };
    let mut options = Options {
        command: Command::Blocks,
        seed: None,
        config: None,
        registry: None,
        slices: false,
    };

    let mut i = 2;
    while i < args.len() {
        let flag = args[i].as_str();
        let mut value = || {
            i += 1;
            args.get(i)
                .cloned()
                .ok_or_else(|| format!("{flag} requires a value"))
        };
        match (flag, &mut command) {
            ("--species", Command::Tree { species, .. }) => {
                *species = value()?
                    .parse::<TreeSpecies>()
                    .map_err(|e| e.to_string())?;
            }
            ("--height", Command::Tree { height, .. }) => {
                *height = value()?
                    .parse()
                    .map_err(|_| "--height requires a number".to_owned())?;
            }
            ("--style", Command::Hut { style, .. }) => {
                *style = value()?
                    .parse::<HutStyle>()
                    .map_err(|e| e.to_string())?;
            }
            ("--no-furnishings", Command::Hut { furnishings, .. }) => {
                *furnishings = false;
            }
            ("--seed", Command::Tree { .. } | Command::Hut { .. }) => {
                options.seed = Some(
                    value()?
                        .parse()
                        .map_err(|_| "--seed requires an unsigned number".to_owned())?,
                );
            }
            ("--config", _) => options.config = Some(PathBuf::from(value()?)),
            ("--registry", _) => options.registry = Some(PathBuf::from(value()?)),
            ("--slices", _) => options.slices = true,
            ("--help" | "-h", _) => {
                print_usage();
                std::process::exit(0);
            }
            (other, _) => return Err(format!("Unknown argument for {sub}: {other}")),
        }
        i += 1;
    }

    options.command = command;
    Ok(options)
}

fn print_usage() {
    println!("Usage: zenith_viewer <tree|hut|blocks> [OPTIONS]");
    println!();
    println!("tree:");
    println!("  --species <NAME>    oak, spruce, birch, jungle, acacia, dark_oak (default: birch)");
    println!("  --height <N>        Trunk height; 0 or less picks one at random (default: 0)");
    println!("  --seed <N>          Fixed random seed (default: clock)");
    println!("hut:");
    println!("  --style <NAME>      basic, round, longhouse, tiered (default: basic)");
    println!("  --no-furnishings    Leave the interior empty");
    println!("  --seed <N>          Fixed random seed (default: clock)");
    println!("common:");
    println!("  --config <PATH>     Viewer config JSON");
    println!("  --registry <PATH>   Block registry JSON (required for blocks)");
    println!("  --slices            Print every non-empty y layer");
    println!("  --help, -h          Show this help");
}

fn print_blocks(registry: &BlockRegistry) {
    println!("Loaded {} blocks.", registry.block_count());
    for (id, textures) in registry.iter() {
        println!("Block ID: {id}");
        println!("  Top:    {}", textures.top);
        println!("  Bottom: {}", textures.bottom);
        println!("  Front:  {}", textures.front);
        println!("  Back:   {}", textures.back);
        println!("  Left:   {}", textures.left);
        println!("  Right:  {}", textures.right);
        println!();
    }
}

fn show(
    grid: &mut VoxelGrid,
    report: &GenerationReport,
    config: &ViewerConfig,
    registry: Option<&BlockRegistry>,
    slices: bool,
) {
    let (w, h, d) = grid.dimensions();
    println!("Grid: {w}x{h}x{d}, voxels: {}", report.voxel_count);
    if !report.rejected.is_empty() {
        println!("Refused placements: {}", report.rejected.len());
        for e in &report.rejected {
            println!("  {e}");
        }
    }

    let histogram = histogram(grid);
    println!("Blocks:");
    for (block, count) in &histogram {
        println!("  {block:<20} {count}");
    }

    if slices {
        print_slices(grid, &histogram);
    }

    if let Some(registry) = registry {
        grid.set_position(config.model_position);
        let result = grid.materialize(registry);
        println!("Render objects: {}", result.created);
        for e in &result.skipped {
            println!("  skipped {e}");
        }
    }
}

fn histogram(grid: &VoxelGrid) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for (_, block) in grid.blocks() {
        *counts.entry(block.to_string()).or_insert(0) += 1;
    }
    counts
}

/// One glyph per block id, assigned in histogram (alphabetical) order.
fn legend(histogram: &BTreeMap<String, usize>) -> BTreeMap<&str, char> {
    const GLYPHS: &str = "#@%&*+=ox~^$abcdefghijklmnpqrstuvwyz";
    histogram
        .keys()
        .zip(GLYPHS.chars().chain(std::iter::repeat('?')))
        .map(|(block, glyph)| (block.as_str(), glyph))
        .collect()
}

fn print_slices(grid: &VoxelGrid, histogram: &BTreeMap<String, usize>) {
    let legend = legend(histogram);
    println!("Legend:");
    for (block, glyph) in &legend {
        println!("  {glyph} {block}");
    }

    let (w, h, d) = grid.dimensions();
    for y in 0..h as i32 {
        let occupied = (0..w as i32)
            .any(|x| (0..d as i32).any(|z| grid.is_occupied(x, y, z)));
        if !occupied {
            continue;
        }
        println!("y = {y}");
        for z in 0..d as i32 {
            let row: String = (0..w as i32)
                .map(|x| match grid.block_type(x, y, z) {
                    Some(block) => legend.get(block.as_str()).copied().unwrap_or('?'),
                    None => '.',
                })
                .collect();
            println!("  {row}");
        }
    }
}
