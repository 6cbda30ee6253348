use anyhow::Result;
use clap::{Parser, Subcommand};
use recist::GeomCfg;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod compare;
mod extract;
mod figure;
mod input;
mod provenance;
mod record;

use extract::OnDegenerate;
use input::Study;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Long/short diameter extraction for nodule contours")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Measure every contour and write one diameter record per line
    Extract {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Sine of the smallest angle at which two segments still count as crossing
        #[arg(long, default_value_t = GeomCfg::default().eps_parallel)]
        eps_parallel: f64,
        /// Ray half-length in hull bounding-box diagonals (>= 1)
        #[arg(long, default_value_t = GeomCfg::default().ray_scale)]
        ray_scale: f64,
        #[arg(long, value_enum, default_value_t = OnDegenerate::Skip)]
        on_degenerate: OnDegenerate,
        /// Also write <out-stem>.provenance.json next to the output
        #[arg(long)]
        provenance: bool,
    },
    /// Compare a diameters file against key-slice annotations (JSON on stdout)
    Compare {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        diameters: PathBuf,
    },
    /// Render one SVG per key slice: hull, computed and annotated axes
    Figure {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        diameters: PathBuf,
        #[arg(long)]
        out_dir: PathBuf,
        /// Also write <out-dir>.provenance.json next to the directory
        #[arg(long)]
        provenance: bool,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Extract {
            input,
            out,
            eps_parallel,
            ray_scale,
            on_degenerate,
            provenance,
        } => {
            let cfg = GeomCfg {
                eps_parallel,
                ray_scale,
            }
            .validated()?;
            run_extract(input, out, cfg, on_degenerate, provenance)
        }
        Action::Compare { input, diameters } => run_compare(input, diameters),
        Action::Figure {
            input,
            diameters,
            out_dir,
            provenance,
        } => {
            tracing::info!(input = %input.display(), out_dir = %out_dir.display(), "figure");
            let written = figure::run(&input, &diameters, &out_dir, provenance)?;
            tracing::info!(figures = written.len(), "done");
            Ok(())
        }
        Action::Report => report(),
    }
}

fn run_extract(
    input: PathBuf,
    out: PathBuf,
    cfg: GeomCfg,
    on_degenerate: OnDegenerate,
    with_provenance: bool,
) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), ?cfg, "extract");
    let contours = Study::load(&input)?.contours()?;
    let ex = extract::extract(&contours, &cfg, on_degenerate)?;
    extract::write_records(&out, &ex.measured)?;
    tracing::info!(
        contours = contours.len(),
        measured = ex.measured.len(),
        skipped = ex.skipped.len(),
        "done"
    );

    if with_provenance {
        let mut payload = provenance::Payload::new(serde_json::json!({
            "eps_parallel": cfg.eps_parallel,
            "ray_scale": cfg.ray_scale,
            "on_degenerate": format!("{on_degenerate:?}").to_lowercase(),
        }));
        payload.inputs.push(input.to_string_lossy().into_owned());
        payload.counts = serde_json::json!({
            "contours": contours.len(),
            "measured": ex.measured.len(),
            "skipped": ex.skipped.len(),
        });
        let path = provenance::write_sidecar(&out, payload)?;
        tracing::info!(path = %path.display(), "provenance");
    }
    Ok(())
}

fn run_compare(input: PathBuf, diameters: PathBuf) -> Result<()> {
    tracing::info!(input = %input.display(), diameters = %diameters.display(), "compare");
    let study = Study::load(&input)?;
    let records = record::read_records(&diameters)?;
    let rows = compare::compare(&study, &records);
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "recist_version": recist::VERSION,
        "defaults": {
            "eps_parallel": GeomCfg::default().eps_parallel,
            "ray_scale": GeomCfg::default().ray_scale,
        }
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
