use std::fs;
use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use randcsv_generate::errors::GenerationError;
use randcsv_generate::{
    GenerateOptions, GenerationEngine, Invocation, RowCountSource, interpret_args,
};

fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|date| date.and_hms_opt(12, 30, 45))
        .unwrap_or_default()
}

fn engine_for(out_path: PathBuf) -> GenerationEngine {
    let options = GenerateOptions {
        out_path,
        ..GenerateOptions::default()
    };
    GenerationEngine::with_clock(options, fixed_now)
}

fn run_args(args: &[&str], seed: u64, out_path: PathBuf) -> (String, u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let Invocation::Generate(request) = interpret_args(args, &mut rng).expect("interpret args")
    else {
        panic!("expected generation request");
    };
    let engine = engine_for(out_path);
    let result = engine.run(&request, &mut rng).expect("run generation");
    let contents = fs::read_to_string(&result.out_path).expect("read generated file");
    (contents, result.report.rows_written)
}

#[test]
fn number_color_scenario() {
    let out_path = temp_out_dir("number_color").join("generated.csv");
    let (contents, rows) = run_args(&["3", "NUMBER", "COLOR"], 1, out_path);

    assert_eq!(rows, 3);
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(contents.ends_with('\n'));

    for line in lines {
        let fields: Vec<&str> = line.split(", ").collect();
        assert_eq!(fields.len(), 2, "line: {line}");

        let number: i64 = fields[0].parse().expect("number field");
        assert!((1..=99).contains(&number));

        let color = fields[1];
        assert_eq!(color.len(), 7);
        assert!(color.starts_with('#'));
        assert!(
            color[1..]
                .chars()
                .all(|ch| ch.is_ascii_digit() || ('a'..='f').contains(&ch))
        );
    }
}

#[test]
fn date_only_scenario_randomizes_rows() {
    for seed in [2, 3, 4] {
        let out_path = temp_out_dir("date_only").join("generated.csv");
        let (contents, rows) = run_args(&["DATE"], seed, out_path);

        assert!((1..=30).contains(&rows));
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len() as u64, rows);
        for line in lines {
            assert_eq!(line, "2024-01-01 12:30:45");
            assert!(
                NaiveDateTime::parse_from_str(line, "%Y-%m-%d %H:%M:%S").is_ok(),
                "bad date: {line}"
            );
        }
    }
}

#[test]
fn pick_list_resolves_to_listed_values() {
    let out_path = temp_out_dir("pick_list").join("generated.csv");
    let (contents, _) = run_args(&["40", "A:B:C", "hexa"], 5, out_path);

    for line in contents.lines() {
        let fields: Vec<&str> = line.split(", ").collect();
        assert_eq!(fields.len(), 2);
        assert!(["A", "B", "C"].contains(&fields[0]), "line: {line}");
        assert_eq!(fields[1].len(), 32);
    }
}

#[test]
fn zero_rows_truncates_existing_file() {
    let out_path = temp_out_dir("zero_rows").join("generated.csv");
    fs::write(&out_path, "stale\n").expect("seed stale file");

    let (contents, rows) = run_args(&["0", "STRING"], 6, out_path);

    assert_eq!(rows, 0);
    assert!(contents.is_empty());
}

#[test]
fn generate_is_deterministic() {
    let args = ["12", "STRING", "NUMBER", "DATET", "HEXA", "COLOR", "x:y:z"];
    let (a, _) = run_args(&args, 42, temp_out_dir("run_a").join("generated.csv"));
    let (b, _) = run_args(&args, 42, temp_out_dir("run_b").join("generated.csv"));

    assert_eq!(a, b, "generated.csv should be deterministic");
}

#[test]
fn report_counts_rows_and_usage() {
    let out_path = temp_out_dir("report").join("generated.csv");
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let Invocation::Generate(request) =
        interpret_args(&["5", "number", "a:b"], &mut rng).expect("interpret args")
    else {
        panic!("expected generation request");
    };

    let result = engine_for(out_path.clone())
        .run(&request, &mut rng)
        .expect("run generation");
    let report = result.report;

    assert_eq!(report.rows_requested, 5);
    assert_eq!(report.rows_written, 5);
    assert_eq!(report.columns, 2);
    assert_eq!(report.row_count_source, RowCountSource::Explicit);
    assert_eq!(report.generator_usage.get("number"), Some(&5));
    assert_eq!(report.generator_usage.get("pick_list"), Some(&5));

    let on_disk = fs::metadata(&out_path).expect("stat generated file").len();
    assert_eq!(report.bytes_written, on_disk);
}

#[test]
fn missing_directory_is_file_creation_error() {
    let out_path = temp_out_dir("missing")
        .join("does-not-exist")
        .join("generated.csv");
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let Invocation::Generate(request) =
        interpret_args(&["2", "NUMBER"], &mut rng).expect("interpret args")
    else {
        panic!("expected generation request");
    };

    let result = engine_for(out_path.clone()).run(&request, &mut rng);

    assert!(matches!(
        result,
        Err(GenerationError::FileCreation { ref path, .. }) if *path == out_path
    ));
    assert!(!out_path.exists());
}

fn temp_out_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("randcsv_generate_{label}_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp out dir");
    dir
}
