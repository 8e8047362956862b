use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use rand::SeedableRng;
use rand::prelude::SmallRng;
use thousands::Separable;

use rrt_cli::config::CliConfig;
use rrt_cli::io;
use rrt_cli::io::cli::Cli;
use rrt_cli::io::output::RunOutput;
use rrt_cli::scene_gen::generate_scene;
use rrt_rs::io::export::export_solution;
use rrt_rs::io::import::import_scene;
use rrt_rs::io::svg::solution_to_svg;
use rrt_rs::rrt::{PlanOutcome, RRTPlanner};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let mut config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            CliConfig::default()
        }
        Some(config_file) => {
            io::read_json(&config_file).context("incorrect config file format")?
        }
    };
    if let Some(seed) = args.seed {
        config.prng_seed = Some(seed);
    }
    config.rrt.validate().context("invalid planner configuration")?;

    info!("[MAIN] Successfully parsed CliConfig: {config:?}");

    let mut rng = match config.prng_seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let (query, stem) = match &args.scene_file {
        Some(scene_file) => {
            let query = import_scene(&io::read_json(scene_file)?, config.rrt.endpoint_radius)
                .with_context(|| format!("invalid scene: {}", scene_file.display()))?;
            let stem = scene_file
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("scene")
                .to_string();
            (query, stem)
        }
        None => {
            info!("[MAIN] No scene file provided, generating a random scene");
            let query = generate_scene(&config.scene, config.rrt.endpoint_radius, &mut rng)?;
            (query, "generated".to_string())
        }
    };

    fs::create_dir_all(&args.output_folder).with_context(|| {
        format!(
            "could not create output folder: {}",
            args.output_folder.display()
        )
    })?;

    let solution = RRTPlanner::new(&query.scene, query.start, query.goal, config.rrt, rng)?.solve();

    match solution.outcome {
        PlanOutcome::PathFound => info!(
            "[MAIN] path found after {} iterations, tree of {} nodes",
            solution.n_iterations.separate_with_commas(),
            solution.tree.n_nodes().separate_with_commas()
        ),
        PlanOutcome::NoPathFound => warn!(
            "[MAIN] no path found within {} iterations, writing the partial tree",
            solution.n_iterations.separate_with_commas()
        ),
    }

    {
        let output = RunOutput {
            solution: export_solution(&query.scene, &solution),
            config,
        };
        let solution_path = args.output_folder.join(format!("sol_{stem}.json"));
        io::write_json(&output, Path::new(&solution_path))?;
    }

    {
        let svg_path = args.output_folder.join(format!("sol_{stem}.svg"));
        let svg = solution_to_svg(&query.scene, &solution, config.svg_draw_options);
        io::write_svg(&svg, Path::new(&svg_path))?;
    }

    Ok(())
}
