//! Avorion Mesher CLI
//!
//! Generate 3D meshes from Avorion design files.

use avorion_mesher::{
    export_glb, export_raw, load_design, Design, DesignSummary, Mesher, MesherConfig,
    MesherOutput, ObjExport, ShapeResolution, SignedAxis, DESIGN_FORWARD, DESIGN_UP,
};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "avorion-mesher")]
#[command(author, version, about = "Generate 3D meshes from Avorion design files", long_about = None)]
struct Cli {
    /// Increase log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mesh a ship or turret design
    Mesh {
        /// Input design XML file
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path (extension is added if missing)
        #[arg(short, long)]
        output: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "glb")]
        format: OutputFormat,

        /// JSON file with mesher settings; flags below override it
        #[arg(long)]
        config: Option<PathBuf>,

        /// Join blocks into one mesh per hull or turret part
        #[arg(long)]
        merge_blocks: bool,

        /// Move the center of the result to the origin
        #[arg(long)]
        recenter: bool,

        /// Generate unknown block types as cubes instead of failing
        #[arg(long)]
        lenient: bool,

        /// Forward axis of the design (e.g. "-z", "y") [default: -z]
        #[arg(long, allow_hyphen_values = true, value_parser = parse_axis)]
        forward: Option<SignedAxis>,

        /// Up axis of the design [default: y]
        #[arg(long, allow_hyphen_values = true, value_parser = parse_axis)]
        up: Option<SignedAxis>,

        /// Also mesh the turrets embedded in a ship design
        #[arg(long)]
        turrets: bool,
    },

    /// Show information about a design
    Info {
        /// Input design XML file
        #[arg(short, long)]
        input: PathBuf,

        /// Count unknown block types as "The Rest" instead of failing
        #[arg(long)]
        lenient: bool,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Binary glTF format
    Glb,
    /// Wavefront OBJ format
    Obj,
    /// Raw mesh buffers as JSON
    Json,
}

impl OutputFormat {
    fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Glb => "glb",
            OutputFormat::Obj => "obj",
            OutputFormat::Json => "json",
        }
    }
}

fn parse_axis(s: &str) -> Result<SignedAxis, String> {
    SignedAxis::from_str(s).ok_or_else(|| format!("Invalid axis: '{}'. Use x, -x, y, -y, z or -z", s))
}

fn policy(lenient: bool) -> ShapeResolution {
    if lenient {
        ShapeResolution::Lenient
    } else {
        ShapeResolution::Strict
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .without_time()
        .compact()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Mesh {
            input,
            output,
            format,
            config,
            merge_blocks,
            recenter,
            lenient,
            forward,
            up,
            turrets,
        } => {
            let (mut mesher_config, forward, up) = match config {
                Some(path) => (MesherConfig::load(path)?, forward, up),
                // Without a config file, convert from the game's design frame.
                None => (
                    MesherConfig::default(),
                    forward.or(Some(DESIGN_FORWARD)),
                    up.or(Some(DESIGN_UP)),
                ),
            };
            if merge_blocks {
                mesher_config.separate_blocks = false;
            }
            if recenter {
                mesher_config.recenter_to_origin = true;
            }
            if lenient {
                mesher_config.shape_resolution = ShapeResolution::Lenient;
            }
            let mesher_config = mesher_config
                .with_axis_override(forward, up)
                .ok_or("--forward and --up must name different axes")?;

            mesh_design(&input, &output, format, mesher_config, turrets)?;
        }
        Commands::Info { input, lenient } => {
            show_design_info(&input, policy(lenient))?;
        }
    }

    Ok(())
}

fn mesh_design(
    input_path: &Path,
    output_path: &Path,
    format: OutputFormat,
    config: MesherConfig,
    with_turrets: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    info!("Loading design from {:?}...", input_path);
    let design = load_design(input_path)?;
    info!("  {} blocks in '{}'", design.blocks().count(), design.name());

    let mesher = Mesher::with_config(config);
    let output = mesher.build(&design)?;
    report(&output);
    export_output(&output, output_path, format, design.name())?;

    if let (true, Design::Ship(ship)) = (with_turrets, &design) {
        for turret in &ship.turrets {
            let turret_output = match mesher.build_turret(turret) {
                Ok(output) => output,
                Err(e) => {
                    warn!("Skipping {}: {}", turret.name, e);
                    continue;
                }
            };
            report(&turret_output);
            let path = output_path.with_file_name(format!("{}.{}", turret.name, format.extension()));
            export_output(&turret_output, &path, format, &turret.name)?;
        }
    }

    Ok(())
}

fn report(output: &MesherOutput) {
    info!(
        "  Generated {} meshes, {} vertices, {} faces",
        output.meshes.len(),
        output.total_vertices(),
        output.total_faces()
    );
    for warning in &output.warnings {
        warn!("{}", warning);
    }
}

fn show_design_info(
    input_path: &Path,
    policy: ShapeResolution,
) -> Result<(), Box<dyn std::error::Error>> {
    let design = load_design(input_path)?;
    let summary = DesignSummary::of(&design, policy)?;

    println!("Design: {}", summary.name);
    println!("  Blocks: {}", summary.block_count);
    println!("  Turrets: {}", summary.turret_count);
    if let Some(bounds) = summary.bounds {
        let [x, y, z] = bounds.dimensions();
        println!("  Size: {} x {} x {}", x, y, z);
    }
    println!("\nBlocks by category:");
    for (category, count) in &summary.by_category {
        println!("  {:<24} {}", category.name(), count);
    }
    println!("\nBlocks by material:");
    for (material, count) in &summary.by_material {
        println!("  {:<24} {}", material, count);
    }

    Ok(())
}

fn export_output(
    output: &MesherOutput,
    path: &Path,
    format: OutputFormat,
    name: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(format.extension())
    };

    match format {
        OutputFormat::Glb => {
            let glb_data = export_glb(output)?;
            fs::write(&path, &glb_data)?;
            info!("Exported GLB ({} bytes) to {:?}", glb_data.len(), path);
        }
        OutputFormat::Obj => {
            let obj_export = ObjExport::from_output(output, name)?;
            let mtl_path = obj_export.write_to(&path)?;
            info!("Exported OBJ to {:?}", path);
            info!("  Material: {:?}", mtl_path);
        }
        OutputFormat::Json => {
            let json = export_raw(output).to_json()?;
            fs::write(&path, json)?;
            info!("Exported raw mesh data to {:?}", path);
        }
    }

    Ok(())
}
