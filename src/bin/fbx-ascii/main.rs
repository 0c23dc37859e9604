//! fbx-ascii CLI - write FBX ASCII documents from scene descriptions.

use std::env;
use std::path::{Path, PathBuf};

use fbx_ascii::ascii::SceneDescription;
use fbx_ascii::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(level: &str) {
    // RUST_LOG wins over the command line flags
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args: Vec<String> = env::args().collect();

    // Parse global flags
    let mut level = "info";
    let mut filtered_args: Vec<&str> = Vec::new();
    for arg in &args[1..] {
        match arg.as_str() {
            "-v" | "--verbose" => level = "debug",
            "-vv" | "--trace" => level = "trace",
            "-q" | "--quiet" => level = "warn",
            _ => filtered_args.push(arg),
        }
    }
    init_logging(level);

    if filtered_args.is_empty() {
        print_help();
        return;
    }

    let result = match filtered_args[0] {
        // Export command - scene description to fbx
        "export" | "e" => {
            let Some(input) = filtered_args.get(1).filter(|a| !a.starts_with('-')) else {
                eprintln!("Error: missing scene file");
                eprintln!("Usage: fbx-ascii export <scene.json> [-o out.fbx] [--config opts.json]");
                std::process::exit(1);
            };
            let input = Path::new(input);
            let output = flag_value(&filtered_args, &["-o", "--output"])
                .map(PathBuf::from)
                .unwrap_or_else(|| input.with_extension(fbx_ascii::ascii::constants::FILE_EXTENSION));
            let config = flag_value(&filtered_args, &["-c", "--config"]);
            cmd_export(input, &output, config)
        }

        // Sample command - animated quad
        "sample" | "s" => {
            let output = flag_value(&filtered_args, &["-o", "--output"]).unwrap_or("sample.fbx");
            let config = flag_value(&filtered_args, &["-c", "--config"]);
            cmd_sample(Path::new(output), config)
        }

        "help" | "h" | "-h" | "--help" => {
            print_help();
            Ok(())
        }

        other => {
            eprintln!("Unknown command: {}", other);
            print_help();
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn print_help() {
    println!("fbx-ascii {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: fbx-ascii [flags] <command> [args]");
    println!();
    println!("Commands:");
    println!("  export, e <scene.json>   Write an FBX file from a JSON scene description");
    println!("      -o, --output <file>  Output path (default: input with .fbx extension)");
    println!("      -c, --config <file>  Export options (JSON)");
    println!("  sample, s                Write an animated quad");
    println!("      -o, --output <file>  Output path (default: sample.fbx)");
    println!("  help, h                  Show this help");
    println!();
    println!("Flags:");
    println!("  -v, --verbose            Debug logging");
    println!("  -vv, --trace             Trace logging");
    println!("  -q, --quiet              Warnings and errors only");
}

/// Value following any of `names`.
fn flag_value<'a>(args: &[&'a str], names: &[&str]) -> Option<&'a str> {
    args.iter()
        .position(|a| names.contains(a))
        .and_then(|i| args.get(i + 1))
        .copied()
}

fn load_options(config: Option<&str>) -> Result<ExportOptions> {
    match config {
        Some(path) => {
            info!("Loading options from {}", path);
            ExportOptions::load(path)
        }
        None => Ok(ExportOptions::default()),
    }
}

fn cmd_export(input: &Path, output: &Path, config: Option<&str>) -> Result<()> {
    let options = load_options(config)?;
    let description = SceneDescription::load(input)?;
    info!("Exporting {} meshes from {}", description.meshes.len(), input.display());

    let scene = description.build(options)?;
    scene.write_file(output)?;
    info!(
        "Wrote {} ({} objects, {} connections)",
        output.display(),
        scene.objects().len(),
        scene.connections().len()
    );
    Ok(())
}

fn cmd_sample(output: &Path, config: Option<&str>) -> Result<()> {
    let options = load_options(config)?;
    let mut scene = FbxScene::new(options);
    let model = scene.add_mesh(&MeshData::quad("Quad"), Mat4::IDENTITY)?;

    let mut anim = AnimObject::new();
    anim.add_frame(Vec3::ZERO, Quat::IDENTITY, 0.0);
    anim.add_frame(Vec3::ONE, Quat::IDENTITY, 1.0);
    scene.animate(model, &anim)?;
    scene.connect_to_scene(model)?;

    scene.write_file(output)?;
    info!("Wrote {}", output.display());
    Ok(())
}
