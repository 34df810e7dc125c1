use std::fs;
use std::path::Path;

use stats_extract::{ExtractError, Invocation, MissingFilePolicy, OutputRow};
use tempfile::tempdir;

fn write_stats(root: &Path, dir: &str, content: &str) {
    let run_dir = root.join(dir);
    fs::create_dir_all(&run_dir).expect("run directory created");
    fs::write(run_dir.join("stats.txt"), content).expect("stats file written");
}

fn invocation(root: &Path, stat: &str, counts: &[&str]) -> Invocation {
    let prefix = format!("{}/run", root.display());
    Invocation::from_parts(
        Some(prefix),
        Some(stat.to_owned()),
        counts.iter().map(|count| count.to_string()).collect(),
    )
    .expect("valid invocation")
}

fn rendered(invocation: &Invocation) -> Vec<String> {
    stats_extract::run(invocation)
        .map(|row| row.expect("row extracted").to_string())
        .collect()
}

#[test]
fn collects_every_match_in_line_order() {
    let temp_dir = tempdir().expect("temporary directory");
    write_stats(temp_dir.path(), "run1", "time 10\nmem 20\ntime 15\n");

    let rows = rendered(&invocation(temp_dir.path(), "time", &["1"]));

    assert_eq!(rows, vec!["1,10,15"]);
}

#[test]
fn emits_one_row_per_count_in_given_order() {
    let temp_dir = tempdir().expect("temporary directory");
    write_stats(temp_dir.path(), "run1", "x 1\n");
    write_stats(temp_dir.path(), "run2", "x 2\n");
    write_stats(temp_dir.path(), "run10", "x 10\n");

    let rows = rendered(&invocation(temp_dir.path(), "x", &["2", "10", "1"]));

    assert_eq!(rows, vec!["2,2", "10,10", "1,1"]);
}

#[test]
fn row_without_matches_is_count_alone() {
    let temp_dir = tempdir().expect("temporary directory");
    write_stats(temp_dir.path(), "run5", "mem 20\nlatency 42\n");

    let rows = rendered(&invocation(temp_dir.path(), "time", &["5"]));

    assert_eq!(rows, vec!["5"]);
}

#[test]
fn key_only_line_keeps_an_empty_column() {
    let temp_dir = tempdir().expect("temporary directory");
    write_stats(temp_dir.path(), "run1", "time\ntime 7 ms\n");

    let row = stats_extract::run(&invocation(temp_dir.path(), "time", &["1"]))
        .next()
        .expect("one row")
        .expect("row extracted");

    assert_eq!(
        row,
        OutputRow {
            count: "1".into(),
            values: vec![String::new(), "7".into()],
        }
    );
    assert_eq!(row.to_string(), "1,,7");
}

#[test]
fn abort_stops_at_first_missing_file() {
    let temp_dir = tempdir().expect("temporary directory");
    write_stats(temp_dir.path(), "run1", "x 1\n");
    write_stats(temp_dir.path(), "run3", "x 3\n");

    let invocation = invocation(temp_dir.path(), "x", &["1", "2", "3"]);
    let mut rows = stats_extract::run(&invocation);

    assert_eq!(
        rows.next().expect("first row").expect("row extracted").to_string(),
        "1,1"
    );
    match rows.next() {
        Some(Err(ExtractError::StatsFile { path, .. })) => {
            assert!(path.ends_with("run2/stats.txt"), "unexpected path {path:?}");
        }
        other => panic!("expected a stats file error, got {other:?}"),
    }
    assert!(rows.next().is_none());
    assert!(rows.next().is_none());
}

#[test]
fn skip_policy_continues_past_missing_file() {
    let temp_dir = tempdir().expect("temporary directory");
    write_stats(temp_dir.path(), "run1", "x 1\n");
    write_stats(temp_dir.path(), "run3", "x 3\n");

    let invocation =
        invocation(temp_dir.path(), "x", &["1", "2", "3"]).with_policy(MissingFilePolicy::Skip);

    assert_eq!(rendered(&invocation), vec!["1,1", "3,3"]);
}

#[test]
fn repeated_runs_are_identical() {
    let temp_dir = tempdir().expect("temporary directory");
    write_stats(temp_dir.path(), "run1", "latency 42\nlatency 43\n");
    write_stats(temp_dir.path(), "run2", "latency 44\n");

    let invocation = invocation(temp_dir.path(), "latency", &["1", "2"]);

    assert_eq!(rendered(&invocation), rendered(&invocation));
    assert_eq!(rendered(&invocation), vec!["1,42,43", "2,44"]);
}
