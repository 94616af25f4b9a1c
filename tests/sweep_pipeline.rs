//! End-to-end sweep tests driven by fake benchmark scripts.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use tempfile::TempDir;

use poly_vector_benchmark::error::SweepError;
use poly_vector_benchmark::sweep::{run_sweep, SweepConfig};

/// Writes an executable shell script standing in for the benchmark binary.
fn fake_benchmark(dir: &TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("fake_benchmark.sh");
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    path
}

fn config(executable: PathBuf) -> SweepConfig {
    SweepConfig {
        executable,
        lower: 0,
        upper: 2,
        step: 1,
        trials: 2,
        iterations: 1,
    }
}

#[test]
fn well_formed_output_yields_one_mean_per_point_and_variant() {
    let dir = TempDir::new().unwrap();
    let exe = fake_benchmark(&dir, "echo '100ms, x'");

    let series = run_sweep(&config(exe)).unwrap();

    assert_eq!(series.len(), 2);
    for s in &series {
        let elems: Vec<u64> = s.points.iter().map(|p| p.element_count).collect();
        assert_eq!(elems, vec![0, 1]);
        assert!(s.points.iter().all(|p| p.mean_time == 100.0));
    }
}

#[test]
fn silent_benchmark_aborts_the_sweep() {
    let dir = TempDir::new().unwrap();
    let exe = fake_benchmark(&dir, "exit 0");

    let err = run_sweep(&config(exe)).unwrap_err();
    assert!(matches!(err, SweepError::NoOutput));
}

#[test]
fn diagnostic_noise_before_the_timing_line_is_fatal() {
    let dir = TempDir::new().unwrap();
    let exe = fake_benchmark(&dir, "echo 'warning: cold cache'\necho '100ms, x'");

    let err = run_sweep(&config(exe)).unwrap_err();
    assert!(matches!(err, SweepError::Parse(_)));
}

#[test]
fn exit_status_is_ignored_when_the_timing_line_is_well_formed() {
    let dir = TempDir::new().unwrap();
    let exe = fake_benchmark(&dir, "echo '7 ms , unique_elems:3'\nexit 1");

    let series = run_sweep(&config(exe)).unwrap();
    assert!(series
        .iter()
        .all(|s| s.points.iter().all(|p| p.mean_time == 7.0)));
}

#[test]
fn arguments_are_passed_positionally() {
    let dir = TempDir::new().unwrap();
    // Echo the element count back as the timing value.
    let exe = fake_benchmark(&dir, "echo \"${1}ms, elems=$1 iters=$2 variant=$3\"");

    let mut cfg = config(exe);
    cfg.lower = 5;
    cfg.upper = 7;
    let series = run_sweep(&cfg).unwrap();

    for s in &series {
        assert_eq!(s.points[0].element_count, 5);
        assert_eq!(s.points[0].mean_time, 5.0);
        assert_eq!(s.points[1].mean_time, 6.0);
    }
}

#[test]
fn variant_tag_selects_the_benchmarked_code_path() {
    let dir = TempDir::new().unwrap();
    let exe = fake_benchmark(
        &dir,
        "case \"$3\" in poly_vec) echo '1ms, x';; unique_ptr_vec) echo '2ms, x';; *) echo 'bad';; esac",
    );

    let series = run_sweep(&config(exe)).unwrap();
    assert!(series[0].points.iter().all(|p| p.mean_time == 1.0));
    assert!(series[1].points.iter().all(|p| p.mean_time == 2.0));
}
