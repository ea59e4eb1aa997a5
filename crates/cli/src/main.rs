use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use hullmesh::api::{
    draw_points, CircleBoundary, CloudReplay, MeshCfg, PointCloudCfg, PointLayout,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod derived;
mod document;
mod provenance;

use derived::{derive_document, hull_of, mesh_of, LayerMesh};
use document::{Document, Layer, RawPoint};
use provenance::Provenance;

#[derive(Parser)]
#[command(name = "hullmesh")]
#[command(about = "Convex hulls and flood-fill meshes for layered point documents")]
struct Cmd {
    /// Log verbosity on stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Convex hull of every layer
    Hull {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Triangulation of every layer, as index triples into the layer's points
    Mesh {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
        #[command(flatten)]
        mesh_args: MeshArgs,
    },
    /// Hull and (optionally) mesh per layer, with a provenance sidecar
    Derive {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Triangulate even when the document does not ask for it
        #[arg(long)]
        mesh: bool,
        #[command(flatten)]
        mesh_args: MeshArgs,
    },
    /// Write a single-layer document of random points
    Sample {
        #[arg(long, default_value_t = 32)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, value_enum, default_value_t = LayoutArg::Uniform)]
        layout: LayoutArg,
        /// Half-width (uniform), radius (circle) or spacing (grid)
        #[arg(long, default_value_t = 100.0)]
        extent: f64,
        /// Round coordinates to integers
        #[arg(long)]
        integer: bool,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(clap::Args, Clone, Copy, Debug)]
struct MeshArgs {
    /// Reject points exactly on a circumcircle
    #[arg(long)]
    exclusive: bool,
    /// Also accept candidates on the apex side of a crossed edge
    #[arg(long)]
    allow_same_side: bool,
}

impl MeshArgs {
    fn cfg(self) -> MeshCfg {
        MeshCfg {
            boundary: if self.exclusive {
                CircleBoundary::Exclusive
            } else {
                CircleBoundary::Inclusive
            },
            opposite_side: !self.allow_same_side,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum LayoutArg {
    Uniform,
    Circle,
    Grid,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Hull { input, out } => hull(&input, out.as_deref()),
        Action::Mesh {
            input,
            out,
            mesh_args,
        } => mesh(&input, out.as_deref(), mesh_args.cfg()),
        Action::Derive {
            input,
            out,
            mesh,
            mesh_args,
        } => derive(&input, &out, mesh, mesh_args.cfg()),
        Action::Sample {
            count,
            seed,
            index,
            layout,
            extent,
            integer,
            out,
        } => sample(
            sample_cfg(count, layout, extent, integer),
            CloudReplay { seed, index },
            &out,
        ),
        Action::Report => report(),
    }
}

fn hull(input: &Path, out: Option<&Path>) -> Result<()> {
    let doc = Document::load(input)?;
    tracing::info!(input = %input.display(), layers = doc.layers.len(), "hull");
    let hulls: Vec<_> = doc.layers.iter().map(hull_of).collect();
    emit(out, &hulls)
}

fn mesh(input: &Path, out: Option<&Path>, cfg: MeshCfg) -> Result<()> {
    let doc = Document::load(input)?;
    tracing::info!(input = %input.display(), layers = doc.layers.len(), ?cfg, "mesh");
    let meshes: Vec<LayerMesh> = doc
        .layers
        .iter()
        .map(|layer| LayerMesh {
            name: layer.name.clone(),
            vertices: layer.points.clone(),
            mesh: mesh_of(layer, cfg),
        })
        .collect();
    emit(out, &meshes)
}

fn derive(input: &Path, out: &Path, with_mesh: bool, cfg: MeshCfg) -> Result<()> {
    let doc = Document::load(input)?;
    tracing::info!(input = %input.display(), out = %out.display(), with_mesh, "derive");
    let derived = derive_document(&doc, with_mesh, cfg);
    write_json(out, &derived)?;
    let params = serde_json::json!({
        "input": input.to_string_lossy(),
        "mesh": with_mesh || doc.show_triangulation,
        "exclusive": cfg.boundary == CircleBoundary::Exclusive,
        "opposite_side": cfg.opposite_side,
    });
    let record = Provenance::of_run(input, &doc, &derived, params)?;
    let prov = provenance::write_sidecar(out, record)?;
    tracing::info!(provenance = %prov.display(), "wrote sidecar");
    Ok(())
}

fn sample_cfg(count: usize, layout: LayoutArg, extent: f64, integer: bool) -> PointCloudCfg {
    let layout = match layout {
        LayoutArg::Uniform => PointLayout::Uniform { half_width: extent },
        LayoutArg::Circle => PointLayout::Circle { radius: extent },
        LayoutArg::Grid => {
            let side = (count as f64).sqrt().ceil() as usize;
            PointLayout::Grid {
                cols: side,
                rows: side,
                spacing: extent,
            }
        }
    };
    PointCloudCfg {
        count,
        layout,
        integer_coords: integer,
    }
}

fn sample(cfg: PointCloudCfg, tok: CloudReplay, out: &Path) -> Result<()> {
    tracing::info!(count = cfg.count, seed = tok.seed, index = tok.index, out = %out.display(), "sample");
    let doc = Document {
        layers: vec![Layer {
            name: "sample".to_string(),
            selected: true,
            points: draw_points(cfg, tok).into_iter().map(RawPoint::from).collect(),
        }],
        show_triangulation: false,
    };
    doc.save(out)
}

fn report() -> Result<()> {
    let cfg = MeshCfg::default();
    let obj = Provenance::new(serde_json::json!({
        "exclusive": cfg.boundary == CircleBoundary::Exclusive,
        "opposite_side": cfg.opposite_side,
    }));
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

/// Pretty JSON to `out`, or to stdout when no path is given.
fn emit<T: Serialize>(out: Option<&Path>, value: &T) -> Result<()> {
    match out {
        Some(path) => write_json(path, value),
        None => {
            println!("{}", serde_json::to_string_pretty(value)?);
            Ok(())
        }
    }
}

pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let bytes = serde_json::to_vec_pretty(value)?;
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::fs;
    use tempfile::tempdir;

    fn square_doc(dir: &Path, show_triangulation: bool) -> PathBuf {
        let path = dir.join("square.json");
        let doc = Document {
            layers: vec![Layer {
                name: "square".into(),
                selected: false,
                points: [(0.0, 0.0), (4.0, 0.0), (0.0, 4.0), (4.0, 4.0)]
                    .iter()
                    .map(|&(x, y)| RawPoint { x, y })
                    .collect(),
            }],
            show_triangulation,
        };
        doc.save(&path).unwrap();
        path
    }

    fn read(path: &Path) -> Value {
        serde_json::from_slice(&fs::read(path).unwrap()).unwrap()
    }

    #[test]
    fn hull_writes_one_polygon_per_layer() {
        let dir = tempdir().unwrap();
        let input = square_doc(dir.path(), false);
        let out = dir.path().join("out/hull.json");
        hull(&input, Some(&out)).unwrap();
        let v = read(&out);
        assert_eq!(v[0]["name"], "square");
        assert_eq!(v[0]["hull"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn mesh_flags_reach_the_engine() {
        let dir = tempdir().unwrap();
        let input = square_doc(dir.path(), false);
        let out = dir.path().join("mesh.json");

        mesh(&input, Some(&out), MeshArgs { exclusive: false, allow_same_side: false }.cfg())
            .unwrap();
        let v = read(&out);
        assert_eq!(v[0]["triangulated"], true);
        assert_eq!(v[0]["triangles"], serde_json::json!([[0, 1, 2], [1, 2, 3]]));
        assert_eq!(v[0]["vertices"].as_array().unwrap().len(), 4);

        mesh(&input, Some(&out), MeshArgs { exclusive: true, allow_same_side: false }.cfg())
            .unwrap();
        assert_eq!(read(&out)[0]["triangulated"], false);

        mesh(&input, Some(&out), MeshArgs { exclusive: false, allow_same_side: true }.cfg())
            .unwrap();
        assert_eq!(read(&out)[0]["triangles"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn derive_writes_output_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = square_doc(dir.path(), true);
        let out = dir.path().join("derived.json");
        derive(&input, &out, false, MeshCfg::default()).unwrap();
        let v = read(&out);
        assert_eq!(v[0]["mesh"]["triangles"].as_array().unwrap().len(), 2);
        let prov = read(&dir.path().join("derived.provenance.json"));
        assert_eq!(prov["params"]["mesh"], true);
        assert_eq!(prov["input"]["layers"], 1);
        assert_eq!(prov["input"]["bytes"], fs::metadata(&input).unwrap().len());
        assert_eq!(prov["layers"][0]["name"], "square");
        assert_eq!(prov["layers"][0]["points"], 4);
        assert_eq!(prov["layers"][0]["hull_vertices"], 4);
        assert_eq!(prov["layers"][0]["triangles"], 2);
    }

    #[test]
    fn derive_skips_mesh_unless_requested() {
        let dir = tempdir().unwrap();
        let input = square_doc(dir.path(), false);
        let out = dir.path().join("derived.json");
        derive(&input, &out, false, MeshCfg::default()).unwrap();
        assert!(read(&out)[0].get("mesh").is_none());
    }

    #[test]
    fn sample_round_trips_through_the_document() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("sample.json");
        let cfg = sample_cfg(9, LayoutArg::Grid, 2.0, true);
        sample(cfg, CloudReplay { seed: 3, index: 0 }, &out).unwrap();
        let doc = Document::load(&out).unwrap();
        assert_eq!(doc.layers.len(), 1);
        assert_eq!(doc.layers[0].points.len(), 9);
        for p in &doc.layers[0].points {
            assert!(p.x >= 0.0 && p.x <= 4.0 && p.y >= 0.0 && p.y <= 4.0);
        }
    }

    #[test]
    fn missing_input_names_the_path() {
        let dir = tempdir().unwrap();
        let err = hull(&dir.path().join("nope.json"), None).unwrap_err();
        assert!(format!("{err:#}").contains("nope.json"));
    }
}
