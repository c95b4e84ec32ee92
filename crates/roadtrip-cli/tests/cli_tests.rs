use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

const BERKELEY_TO_SAN_JOSE: &str = "From Berkeley:\n\
                                    \n\
                                    1. Take Shattuck south for 3.2 miles.\n\
                                    2. Take I-880 south for 30.6 miles to SanJose.\n";

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/bay_area.map")
        .canonicalize()
        .expect("fixture map present")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("roadtrip");
    cmd.env_remove("ROADTRIP_MAP").env("RUST_LOG", "error");
    cmd
}

fn prepare_command() -> Command {
    let mut cmd = cli();
    cmd.arg("--map").arg(fixture_path());
    cmd
}

#[test]
fn single_trip_prints_merged_directions() {
    prepare_command()
        .args(["Berkeley", "SanJose"])
        .assert()
        .success()
        .stdout(BERKELEY_TO_SAN_JOSE);
}

#[test]
fn multi_leg_trip_numbers_steps_across_legs() {
    prepare_command()
        .args(["Richmond", "Oakland", "SanFrancisco"])
        .assert()
        .success()
        .stdout(predicate::str::contains("From Richmond:"))
        .stdout(predicate::str::contains("4. Take I-880 north for 2.9 miles.\n"))
        .stdout(predicate::str::contains(
            "5. Take Bay_Bridge west for 9.4 miles to SanFrancisco.",
        ))
        .stdout(predicate::str::contains("to Oakland").not());
}

#[test]
fn waypoints_flag_names_each_leg_end() {
    prepare_command()
        .args(["--waypoints", "Richmond", "Oakland", "SanFrancisco"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "3. Take Shattuck south for 3.2 miles to Oakland.",
        ));
}

#[test]
fn dijkstra_algorithm_is_supported() {
    prepare_command()
        .args(["--algorithm", "dijkstra", "Berkeley", "SanJose"])
        .assert()
        .success()
        .stdout(BERKELEY_TO_SAN_JOSE);
}

#[test]
fn json_format_emits_itinerary() {
    let output = prepare_command()
        .args(["--format", "json", "Oakland", "Alameda"])
        .output()
        .expect("run roadtrip");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["algorithm"], "a-star");
    assert_eq!(value["origin"], "Oakland");
    assert_eq!(value["destination"], "Alameda");
    assert_eq!(value["steps"][0]["road"], "Webster_Tube");
    assert_eq!(value["total_miles"], 2.3);
}

#[test]
fn trips_are_read_from_stdin_when_no_destinations_given() {
    prepare_command()
        .write_stdin("Berkeley, SanJose\n\nOakland,Alameda\n")
        .assert()
        .success()
        .stdout(format!(
            "{BERKELEY_TO_SAN_JOSE}\nFrom Oakland:\n\n1. Take Webster_Tube south for 2.3 miles to Alameda.\n"
        ));
}

#[test]
fn failing_stdin_trip_does_not_block_the_others() {
    prepare_command()
        .write_stdin("Oakland,Farallon\nBerkeley,SanJose\n")
        .assert()
        .failure()
        .stdout(BERKELEY_TO_SAN_JOSE)
        .stderr(predicate::str::contains(
            "no path found from Oakland to Farallon",
        ));
}

#[test]
fn unknown_location_fails_without_stdout() {
    prepare_command()
        .args(["Oakland", "SanFransisco"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no location named SanFransisco"))
        .stderr(predicate::str::contains("'SanFrancisco'"));
}

#[test]
fn single_destination_is_rejected() {
    prepare_command()
        .arg("Oakland")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "must have at least two locations for a trip (got 1)",
        ));
}

#[test]
fn missing_map_file_is_reported() {
    let temp = tempdir().expect("create temp dir");
    cli()
        .arg("--map")
        .arg(temp.path().join("Nowhere.map"))
        .args(["Oakland", "Alameda"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("failed to load map from"))
        .stderr(predicate::str::contains("cannot read map file"));
}

#[test]
fn map_path_falls_back_to_environment() {
    cli()
        .env("ROADTRIP_MAP", fixture_path())
        .args(["Berkeley", "SanJose"])
        .assert()
        .success()
        .stdout(BERKELEY_TO_SAN_JOSE);
}

#[test]
fn duplicate_roads_need_overwrite_flag() {
    let temp = tempdir().expect("create temp dir");
    let map = temp.path().join("dupe.map");
    fs::write(&map, "L A 0 0\nL B 1 0\nR A Old 2 E B\nR A New 1.5 E B\n").expect("write map");

    cli()
        .arg("--map")
        .arg(&map)
        .args(["A", "B"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate road between A and B"));

    cli()
        .arg("--map")
        .arg(&map)
        .args(["--allow-road-overwrite", "A", "B"])
        .assert()
        .success()
        .stdout("From A:\n\n1. Take New east for 1.5 miles to B.\n");
}

#[test]
fn output_flag_writes_report_to_file() {
    let temp = tempdir().expect("create temp dir");
    let report = temp.path().join("trip.txt");

    prepare_command()
        .arg("-o")
        .arg(&report)
        .args(["Berkeley", "SanJose"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = fs::read_to_string(&report).expect("report written");
    assert_eq!(written, BERKELEY_TO_SAN_JOSE);
}
