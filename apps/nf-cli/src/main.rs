use clap::{Parser, Subcommand};
use nf_app::{
    AppResult, RunOptions, RunProgressEvent, RunRequest, RunStage, RunTimingSummary,
    project_service, query, run_service,
};
use nf_results::CsvOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "nozzleflow")]
#[command(about = "Minimum-length supersonic nozzle design by the method of characteristics", long_about = None)]
struct Cli {
    /// Print per-stage timings to stderr
    #[arg(long, global = true)]
    timing: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate project file syntax and every design
    Validate {
        /// Path to the project YAML or JSON file
        project_path: PathBuf,
    },
    /// List designs in a project
    Designs {
        /// Path to the project YAML or JSON file
        project_path: PathBuf,
    },
    /// Design a nozzle, reusing a cached run when possible
    Run {
        /// Path to the project YAML or JSON file
        project_path: PathBuf,
        /// Design ID to solve
        design_id: String,
        /// Skip cache and force re-run
        #[arg(long)]
        no_cache: bool,
    },
    /// List cached runs for a project
    Runs {
        /// Path to the project YAML or JSON file
        project_path: PathBuf,
        /// Only show runs of this design
        #[arg(long)]
        design: Option<String>,
    },
    /// Show details of a cached run
    ShowRun {
        /// Path to the project YAML or JSON file
        project_path: PathBuf,
        /// Run ID to display
        run_id: String,
    },
    /// Export the points of a run as CSV
    Export {
        /// Path to the project YAML or JSON file
        project_path: PathBuf,
        /// Run ID
        run_id: String,
        /// Only export wall points
        #[arg(long)]
        walls_only: bool,
        /// Prefix each row with its point label (T1, F3, W2, ...)
        #[arg(long)]
        names: bool,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if cli.timing {
        nf_core::timing::enable_timing();
    }

    match cli.command {
        Commands::Validate { project_path } => cmd_validate(&project_path),
        Commands::Designs { project_path } => cmd_designs(&project_path),
        Commands::Run {
            project_path,
            design_id,
            no_cache,
        } => cmd_run(&project_path, &design_id, !no_cache),
        Commands::Runs {
            project_path,
            design,
        } => cmd_runs(&project_path, design.as_deref()),
        Commands::ShowRun {
            project_path,
            run_id,
        } => cmd_show_run(&project_path, &run_id),
        Commands::Export {
            project_path,
            run_id,
            walls_only,
            names,
            output,
        } => cmd_export(
            &project_path,
            &run_id,
            CsvOptions { names, walls_only },
            output.as_deref(),
        ),
    }
}

fn cmd_validate(project_path: &Path) -> AppResult<()> {
    println!("Validating project: {}", project_path.display());
    let project = project_service::load_project(project_path)?;
    project_service::validate_project(&project)?;
    println!("✓ Project is valid ({} designs)", project.designs.len());
    Ok(())
}

fn cmd_designs(project_path: &Path) -> AppResult<()> {
    let project = project_service::load_project(project_path)?;
    let designs = project_service::list_designs(&project);

    if designs.is_empty() {
        println!("No designs found in project");
    } else {
        println!("Designs in project:");
        for d in designs {
            println!(
                "  {} - {} (gamma {}, exit Mach {}, {} characteristics, {} points)",
                d.id, d.name, d.gamma, d.exit_mach, d.characteristics, d.expected_points
            );
        }
    }
    Ok(())
}

fn cmd_run(project_path: &Path, design_id: &str, use_cache: bool) -> AppResult<()> {
    println!("Designing nozzle: {}", design_id);

    let request = RunRequest {
        project_path,
        design_id,
        options: RunOptions {
            use_cache,
            ..RunOptions::default()
        },
    };

    let response = run_service::ensure_run_with_progress(
        &request,
        Some(&mut |event| render_cli_progress(&event)),
    )?;
    clear_progress_line();

    if response.loaded_from_cache {
        println!("✓ Loaded from cache: {}", response.run_id);
    } else {
        println!("✓ Design completed: {}", response.run_id);
    }

    print_timing_summary(&response.timing);

    let (_manifest, points) = run_service::load_run(project_path, &response.run_id)?;
    print_run_summary(&query::get_run_summary(&points)?);

    Ok(())
}

fn clear_progress_line() {
    print!("\r{}\r", " ".repeat(100));
    let _ = io::stdout().flush();
}

fn render_cli_progress(event: &RunProgressEvent) {
    if event.stage == RunStage::Completed {
        return;
    }
    let mut line = format!(
        "\r{}  elapsed={:.2}s",
        event.stage.as_str(),
        event.elapsed_wall_s
    );
    if let Some(msg) = &event.message {
        line.push_str(&format!("  {}", msg));
    }
    print!("{:<100}", line);
    let _ = io::stdout().flush();
}

fn print_timing_summary(timing: &RunTimingSummary) {
    let total = timing.total_time_s.max(1.0e-12);
    let pct = |t: f64| 100.0 * t / total;

    println!("\nTiming summary:");
    if timing.load_cache_time_s > 0.0 {
        println!("  Cache load: {:.3}s", timing.load_cache_time_s);
    } else {
        println!(
            "  Table:   {:.3}s ({:.1}%)  {} rows",
            timing.table_time_s,
            pct(timing.table_time_s),
            timing.table_rows
        );
        println!(
            "  Seed:    {:.3}s ({:.1}%)",
            timing.seed_time_s,
            pct(timing.seed_time_s)
        );
        println!(
            "  March:   {:.3}s ({:.1}%)",
            timing.march_time_s,
            pct(timing.march_time_s)
        );
        println!(
            "  Save:    {:.3}s ({:.1}%)",
            timing.save_time_s,
            pct(timing.save_time_s)
        );
    }
    println!("  Total:   {:.3}s", timing.total_time_s);
}

fn print_run_summary(summary: &query::RunSummary) {
    println!("\nNozzle:");
    println!(
        "  Points: {} ({} throat, {} flow, {} wall)",
        summary.point_count, summary.throat_count, summary.flow_count, summary.wall_count
    );
    println!("  Throat turning angle: {:.4} deg", summary.throat_angle_deg);
    println!(
        "  Exit: Mach {:.4}, flow angle {:.2e} deg",
        summary.exit_mach, summary.exit_flow_angle_deg
    );
    println!("  Length: {:.6}", summary.exit_x);
    println!("  Exit half-height (area ratio): {:.6}", summary.exit_y);
    println!("  Length / exit height: {:.4}", summary.length_to_height());
}

fn cmd_runs(project_path: &Path, design_id: Option<&str>) -> AppResult<()> {
    let runs = run_service::list_runs(project_path, design_id)?;

    if runs.is_empty() {
        println!("No cached runs found");
    } else {
        println!("Cached runs:");
        for manifest in runs {
            println!(
                "  {} {} ({}, {} points)",
                manifest.run_id, manifest.design_id, manifest.timestamp, manifest.point_count
            );
        }
    }
    Ok(())
}

fn cmd_show_run(project_path: &Path, run_id: &str) -> AppResult<()> {
    println!("Loading run: {}", run_id);

    let (manifest, points) = run_service::load_run(project_path, run_id)?;

    println!("\nRun:");
    println!("  Design: {} ({})", manifest.design_id, manifest.design_name);
    println!("  Created: {}", manifest.timestamp);
    println!("  Solver version: {}", manifest.solver_version);
    println!("  Lines: {}", manifest.line_count);

    print_run_summary(&query::get_run_summary(&points)?);

    println!("\nWall contour:");
    println!("  {:>12} {:>12} {:>10}", "x", "y", "Mach");
    for p in query::wall_contour(&points) {
        println!(
            "  {:>12.6} {:>12.6} {:>10.5}",
            p.position.x, p.position.y, p.mach_number
        );
    }

    Ok(())
}

fn cmd_export(
    project_path: &Path,
    run_id: &str,
    options: CsvOptions,
    output: Option<&Path>,
) -> AppResult<()> {
    let (_manifest, points) = run_service::load_run(project_path, run_id)?;
    let csv = query::export_csv(&points, options);

    if let Some(path) = output {
        std::fs::write(path, &csv)?;
        println!(
            "✓ Exported {} rows to {}",
            csv.lines().count().saturating_sub(1),
            path.display()
        );
    } else {
        print!("{}", csv);
    }

    Ok(())
}
