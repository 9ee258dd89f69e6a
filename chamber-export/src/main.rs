use std::{path::Path, process::ExitCode};

use chamber::{
    ChamberConfig, ChamberError, ChamberVolume, VoxelData, io::export_to_obj,
    spatial::{OctreeOpsState, OctreeOpsWrite},
};
use glam::IVec3;
use rustc_hash::FxHashSet;

const USAGE: &str = "Usage: chamber-export [--resolution <n>] <output.obj> <x,y,z[:texture]>...";

struct Args {
    resolution: i32,
    output: String,
    cells: Vec<(IVec3, VoxelData)>,
}

fn parse_cell(arg: &str) -> Option<(IVec3, VoxelData)> {
    let (coords, texture) = match arg.split_once(':') {
        Some((coords, texture)) => (coords, texture.parse::<u32>().ok()?),
        None => (arg, 1),
    };

    let mut parts = coords.split(',').map(|part| part.trim().parse::<i32>());

    let x = parts.next()?.ok()?;
    let y = parts.next()?.ok()?;
    let z = parts.next()?.ok()?;

    if parts.next().is_some() {
        return None;
    }

    Some((IVec3::new(x, y, z), VoxelData::with_texture(texture)))
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Option<Args> {
    let mut resolution = ChamberConfig::default().edit_resolution();
    let mut output = None;
    let mut cells = Vec::new();

    while let Some(arg) = args.next() {
        if arg == "--resolution" {
            resolution = args.next()?.parse().ok()?;
        } else if output.is_none() {
            output = Some(arg);
        } else {
            match parse_cell(&arg) {
                Some(cell) => cells.push(cell),
                None => log::warn!("Ignoring malformed cell '{arg}'"),
            }
        }
    }

    Some(Args {
        resolution,
        output: output?,
        cells,
    })
}

fn run(args: Args) -> Result<(), ChamberError> {
    #[cfg(feature = "tracy")]
    let _span = tracy_client::span!("chamber-export");

    let config = ChamberConfig::new(ChamberConfig::default().max_extent(), args.resolution)?;
    let mut volume = ChamberVolume::with_config(config);

    let mut seen = FxHashSet::default();

    for (cell, voxel) in args.cells {
        if !seen.insert(cell) {
            log::warn!("Cell {cell} given more than once, last texture wins");
        }

        if !volume.set_cell(cell, voxel) {
            log::warn!(
                "Cell {cell} is outside the {0}x{0}x{0} edit grid",
                config.cells_per_axis()
            );
        }
    }

    let merged = volume.octree_mut().simplify();
    let octree = volume.octree();

    log::info!(
        "Chamber: {} nodes, {} leaves, {merged} merged, {}",
        octree.node_count(),
        octree.leaf_count(),
        humanize_bytes::humanize_bytes_decimal!(octree.total_memory_size())
    );

    let output = Path::new(&args.output);
    let name = output
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("chamber")
        .to_string();

    let vertices = volume.render();
    export_to_obj(&name, output, vertices)?;

    log::info!(
        "Wrote {} triangles to {}",
        vertices.len() / 3,
        output.display()
    );

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Some(args) = parse_args(std::env::args().skip(1)) else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
