#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::prelude::SmallRng;
    use test_case::test_case;

    use rrt_cli::config::{CliConfig, SceneGenConfig};
    use rrt_cli::io;
    use rrt_cli::io::output::RunOutput;
    use rrt_cli::scene_gen::generate_scene;
    use rrt_rs::geometry::geo_traits::{CollidesWith, Contains};
    use rrt_rs::geometry::primitives::Circle;
    use rrt_rs::io::export::export_solution;
    use rrt_rs::io::import::import_scene;
    use rrt_rs::io::svg::solution_to_svg;
    use rrt_rs::rrt::{PlanOutcome, RRTPlanner};
    use rrt_rs::util::assertions;

    #[test_case(0; "seed 0")]
    #[test_case(1; "seed 1")]
    #[test_case(2; "seed 2")]
    #[test_case(3; "seed 3")]
    #[test_case(12345; "seed 12345")]
    fn generated_scene_is_valid(seed: u64) {
        let config = SceneGenConfig::default();
        let endpoint_radius = 1.0;
        let mut rng = SmallRng::seed_from_u64(seed);
        let query = generate_scene(&config, endpoint_radius, &mut rng).unwrap();
        let scene = &query.scene;

        assert_eq!(scene.obstacles.len(), config.n_obstacles);
        assert_eq!(scene.region.width(), config.width);
        assert_eq!(scene.region.height(), config.height);
        assert!(assertions::scene_is_consistent(scene));

        for obstacle in scene.obstacles.iter() {
            let (w, h) = (obstacle.width(), obstacle.height());
            assert!(config.obstacle_width_range.0 <= w && w <= config.obstacle_width_range.1);
            assert!(config.obstacle_height_range.0 <= h && h <= config.obstacle_height_range.1);
        }

        for endpoint in [query.start, query.goal] {
            let disk = Circle::try_new(endpoint, endpoint_radius).unwrap();
            assert!(scene.region.shape.contains(&disk));
            assert!(scene.obstacles.iter().all(|o| !o.shape.collides_with(&disk)));
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let config = SceneGenConfig::default();
        let a = generate_scene(&config, 1.0, &mut SmallRng::seed_from_u64(8)).unwrap();
        let b = generate_scene(&config, 1.0, &mut SmallRng::seed_from_u64(8)).unwrap();

        assert_eq!(a.start, b.start);
        assert_eq!(a.goal, b.goal);
        for (oa, ob) in a.scene.obstacles.iter().zip(b.scene.obstacles.iter()) {
            assert_eq!(oa.rect, ob.rect);
        }
    }

    #[test_case(0; "seed 0")]
    #[test_case(4; "seed 4")]
    fn generate_solve_and_write(seed: u64) {
        let mut config = CliConfig {
            prng_seed: Some(seed),
            ..CliConfig::default()
        };
        config.rrt.max_iterations = Some(20_000);
        let mut rng = SmallRng::seed_from_u64(seed);
        let query = generate_scene(&config.scene, config.rrt.endpoint_radius, &mut rng).unwrap();
        let solution = RRTPlanner::new(&query.scene, query.start, query.goal, config.rrt, rng)
            .unwrap()
            .solve();

        let output_folder = std::env::temp_dir().join(format!("rrt_cli_test_{seed}"));
        std::fs::create_dir_all(&output_folder).unwrap();
        let json_path = output_folder.join("sol.json");
        let svg_path = output_folder.join("sol.svg");

        let output = RunOutput {
            solution: export_solution(&query.scene, &solution),
            config,
        };
        io::write_json(&output, &json_path).unwrap();
        io::write_svg(
            &solution_to_svg(&query.scene, &solution, config.svg_draw_options),
            &svg_path,
        )
        .unwrap();

        let read_back: RunOutput = io::read_json(&json_path).unwrap();
        assert_eq!(read_back.config, config);
        assert_eq!(read_back.solution.outcome, solution.outcome);
        assert_eq!(read_back.solution.nodes.len(), solution.tree.n_nodes());
        assert_eq!(
            read_back.solution.path.is_some(),
            solution.outcome == PlanOutcome::PathFound
        );

        // the scene embedded in the output can be planned in again
        let again = import_scene(&read_back.solution.scene, config.rrt.endpoint_radius).unwrap();
        assert_eq!(again.scene.obstacles.len(), query.scene.obstacles.len());
        assert!(svg_path.exists());
    }
}
