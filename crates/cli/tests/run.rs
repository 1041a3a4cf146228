use std::{
    fs,
    path::{Path, PathBuf},
};

use approx::assert_relative_eq;
use clap::Parser;
use pendulum_cli::{Cli, run};
use pendulum_solvers::transient::verlet::Status;

/// A scratch directory under the system temp dir, removed on drop.
struct Scratch(PathBuf);

impl Scratch {
    fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("pendulum-cli-{name}-{}", std::process::id()));
        fs::create_dir_all(&dir).expect("temp dir should be creatable");
        Self(dir)
    }

    fn path(&self, file: &str) -> PathBuf {
        self.0.join(file)
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        fs::remove_dir_all(&self.0).ok();
    }
}

fn cli(args: &[&Path]) -> Cli {
    let args = std::iter::once(Path::new("pendulum")).chain(args.iter().copied());
    Cli::try_parse_from(args).expect("valid arguments")
}

fn data_lines(path: &Path) -> Vec<Vec<f64>> {
    fs::read_to_string(path)
        .expect("output should exist")
        .lines()
        .filter(|line| !line.starts_with('#'))
        .map(|line| {
            line.split_whitespace()
                .map(|field| field.parse().expect("numeric field"))
                .collect()
        })
        .collect()
}

#[test]
fn writes_positions_and_angles() {
    let scratch = Scratch::new("both");
    let config = scratch.path("run.conf");
    let output = scratch.path("positions.txt");
    let angles = scratch.path("angles.txt");
    fs::write(
        &config,
        "# short run\nL1=2.0\nL2=3.0\nDT=0.01\nTOTAL_TIME=10.0 # seconds\n",
    )
    .expect("config should be writable");

    let mut cli = cli(&[&config, &output]);
    cli.angles = Some(angles.clone());
    let summary = run(&cli).expect("run should succeed");

    assert_eq!(summary.status, Status::Complete);
    assert_eq!(summary.steps, 1000);
    assert_eq!(summary.samples, 10);
    assert!(!summary.diagnostics.any_clamped());

    let header = fs::read_to_string(&output).expect("output should exist");
    assert!(header.starts_with("# Double pendulum simulation data\n# L1=2 L2=3\n"));

    let positions = data_lines(&output);
    let angles = data_lines(&angles);
    assert_eq!(positions.len(), 10);
    assert_eq!(angles.len(), 10);

    for (i, (position, angle)) in positions.iter().zip(&angles).enumerate() {
        assert_eq!(position.len(), 5);
        assert_eq!(angle.len(), 3);

        #[allow(clippy::cast_precision_loss)]
        let time = i as f64;
        assert_relative_eq!(position[0], time, epsilon = 1e-9);
        assert_eq!(position[0], angle[0]);

        // Positions and angles describe the same state.
        let (theta1, theta2) = (angle[1], angle[2]);
        assert_relative_eq!(position[1], 2.0 * theta1.sin(), epsilon = 1e-12);
        assert_relative_eq!(position[2], -2.0 * theta1.cos(), epsilon = 1e-12);
        assert_relative_eq!(position[3], position[1] + 3.0 * theta2.sin(), epsilon = 1e-12);
        assert_relative_eq!(position[4], position[2] - 3.0 * theta2.cos(), epsilon = 1e-12);
    }
}

#[test]
fn missing_config_uses_defaults() {
    let scratch = Scratch::new("defaults");
    let output = scratch.path("positions.txt");

    let summary =
        run(&cli(&[&scratch.path("absent.conf"), &output])).expect("run should succeed");

    // 20 s at 10 ms, sampled every 100 steps.
    assert_eq!(summary.steps, 2000);
    assert_eq!(summary.samples, 20);

    let first = &data_lines(&output)[0];
    assert_relative_eq!(first[0], 0.0);
    assert_relative_eq!(first[1], 1.5_f64.sin(), epsilon = 1e-12);
    assert_relative_eq!(first[2], -1.5_f64.cos(), epsilon = 1e-12);
}

#[test]
fn sample_interval_is_configurable() {
    let scratch = Scratch::new("every");
    let config = scratch.path("run.conf");
    let output = scratch.path("positions.txt");
    fs::write(&config, "TOTAL_TIME=1.0\n").expect("config should be writable");

    let mut cli = cli(&[&config, &output]);
    cli.every = 10;
    let summary = run(&cli).expect("run should succeed");

    assert_eq!(summary.samples, 10);
    assert_eq!(data_lines(&output).len(), 10);
}

#[test]
fn unwritable_output_is_an_error() {
    let scratch = Scratch::new("unwritable");
    let output = scratch.path("no-such-dir").join("positions.txt");

    let result = run(&cli(&[&scratch.path("absent.conf"), &output]));

    let message = format!("{:#}", result.expect_err("output should fail"));
    assert!(message.contains("cannot open output"), "{message}");
}

#[test]
fn unwritable_angles_leave_no_positions_file() {
    let scratch = Scratch::new("unwritable-angles");
    let output = scratch.path("positions.txt");

    let mut cli = cli(&[&scratch.path("absent.conf"), &output]);
    cli.angles = Some(scratch.path("no-such-dir").join("angles.txt"));
    let result = run(&cli);

    let message = format!("{:#}", result.expect_err("angles output should fail"));
    assert!(message.contains("cannot open output"), "{message}");
    assert!(!output.exists());
}

#[test]
fn zero_time_step_is_an_error() {
    let scratch = Scratch::new("zero-dt");
    let config = scratch.path("run.conf");
    let output = scratch.path("positions.txt");
    fs::write(&config, "DT=0\n").expect("config should be writable");

    let result = run(&cli(&[&config, &output]));

    let message = format!("{:#}", result.expect_err("zero dt should fail"));
    assert!(message.contains("time step"), "{message}");
    assert!(!output.exists());
}

#[test]
fn energy_is_roughly_conserved_at_small_steps() {
    let scratch = Scratch::new("energy");
    let config = scratch.path("run.conf");
    let output = scratch.path("positions.txt");
    fs::write(&config, "DT=0.001\nTOTAL_TIME=1.0\n").expect("config should be writable");

    let summary = run(&cli(&[&config, &output])).expect("run should succeed");

    let drift = (summary.final_energy - summary.initial_energy) / summary.initial_energy.abs();
    assert!(drift.abs() < 0.03, "energy drifted by {:.2}%", drift * 100.0);
}
