use golden::Harness;
use golden::comparators::{RegexComparator, ToleranceComparator};
use golden::error::HarnessError;
use golden::report::Failure;
use golden::traits::normalizer::Normalizer;
use golden::utilities::line_normalization::{RegexNormalizer, TrimLineEnds};
use serial_test::serial;
use std::io::{self, BufRead, Read, Write};
use util::config::{DEFAULT_TEST_DIR, HarnessConfig};
use util::test_helpers::setup_test_data_dir;

/// `n` followed by `n` integers; prints the sum.
fn sum(input: &mut dyn BufRead, output: &mut dyn Write) -> io::Result<()> {
    let mut first = String::new();
    input.read_line(&mut first)?;
    let n: usize = first.trim().parse().unwrap_or(0);
    let mut rest = String::new();
    input.read_to_string(&mut rest)?;
    let total: i64 = rest
        .split_whitespace()
        .take(n)
        .filter_map(|t| t.parse::<i64>().ok())
        .sum();
    writeln!(output, "{total}")
}

/// Repeated queries of `n` then `n` integers; prints each mean.
fn average(input: &mut dyn BufRead, output: &mut dyn Write) -> io::Result<()> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    let mut tokens = text.split_whitespace().map(|t| t.parse::<f64>().unwrap_or(0.0));
    while let Some(n) = tokens.next() {
        let n = n as usize;
        let total: f64 = tokens.by_ref().take(n).sum();
        writeln!(output, "{:.10}", total / n as f64)?;
    }
    Ok(())
}

#[test]
#[serial]
fn default_directory_is_testdata() {
    HarnessConfig::set_test_dir(DEFAULT_TEST_DIR);
    let _guard = golden::init_logging();

    let suite = Harness::new(sum).run_all_blocking().unwrap();
    HarnessConfig::reset();
    assert_eq!(suite.total, 4);
    suite.assert_passed();
}

#[test]
#[serial]
fn configured_directory_is_used() {
    HarnessConfig::set_test_dir("tests/fixtures/average");
    let harness = Harness::new(average).with_comparator(ToleranceComparator::default());
    HarnessConfig::reset();

    let suite = harness.run_all_blocking().unwrap();
    let names: Vec<&str> = suite.cases.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["thirds", "two_queries"]);
    suite.assert_passed();
}

#[test]
#[serial]
fn exact_comparison_rejects_rounding() {
    let suite = Harness::new(average)
        .with_test_dir("tests/fixtures/average")
        .run_all_blocking()
        .unwrap();
    assert_eq!(suite.failed, 2);
    assert!(matches!(
        suite.case("thirds").unwrap().failures.as_slice(),
        [Failure::Content { .. }]
    ));
}

#[test]
#[serial]
fn single_named_case() {
    let report = Harness::new(sum)
        .with_test_dir("testdata")
        .run_case_blocking("five")
        .unwrap();
    assert!(report.passed);
    assert_eq!(report.name, "five");
}

#[test]
#[serial]
fn unknown_case_name_is_fatal() {
    let result = Harness::new(sum)
        .with_test_dir("testdata")
        .run_case_blocking("five.a");
    assert!(matches!(result, Err(HarnessError::CaseNotFound(_))));
}

#[tokio::test]
#[serial]
async fn line_count_mismatch_has_no_line_failures() {
    let dir = setup_test_data_dir(&[("t1", "x"), ("t1.a", "1\n2\n3\n")]);
    fn two(_: &mut dyn BufRead, output: &mut dyn Write) -> io::Result<()> {
        output.write_all(b"1\n2\n")
    }
    let report = Harness::new(two)
        .with_test_dir(dir.path())
        .with_comparator(|e: &str, a: &str| e == a)
        .run_case("t1")
        .await
        .unwrap();
    assert_eq!(
        report.failures,
        vec![Failure::LineCount {
            expected: 3,
            actual: 2,
        }]
    );
}

#[tokio::test]
#[serial]
async fn normalizers_and_regex_lines() {
    fn timed(_: &mut dyn BufRead, output: &mut dyn Write) -> io::Result<()> {
        output.write_all(b"Case #1: 42   \nsolved in (0.37s)\n")
    }
    let dir = setup_test_data_dir(&[
        ("t1", ""),
        ("t1.a", "Case #\\d+: \\d+\nsolved in \\(0\\.0s\\)\n"),
    ]);

    let failing = Harness::new(timed)
        .with_test_dir(dir.path())
        .with_comparator(RegexComparator)
        .run_case("t1")
        .await
        .unwrap();
    assert_eq!(failing.failures.len(), 2, "{failing}");

    let masked = Harness::new(timed)
        .with_test_dir(dir.path())
        .with_comparator(RegexComparator)
        .with_normalizer(RegexNormalizer::new(r"\(\d+\.\d+s\)", "(0.0s)").unwrap())
        .run_case("t1")
        .await
        .unwrap();
    // Only the trailing spaces on line 0 remain.
    assert_eq!(masked.failures.len(), 1, "{masked}");

    let mask = RegexNormalizer::new(r"\(\d+\.\d+s\)", "(0.0s)").unwrap();
    let trimmed = Harness::new(timed)
        .with_test_dir(dir.path())
        .with_comparator(RegexComparator)
        .with_normalizer(move |text: &str| TrimLineEnds.normalize(&mask.normalize(text)))
        .run_case("t1")
        .await
        .unwrap();
    assert!(trimmed.passed, "{trimmed}");
}

#[test]
#[serial]
fn report_serializes_to_json() {
    let suite = Harness::new(sum)
        .with_test_dir("testdata")
        .run_all_blocking()
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&suite.to_json().unwrap()).unwrap();
    assert_eq!(json["total"], 4);
    assert_eq!(json["failed"], 0);
    assert_eq!(json["cases"][0]["name"], "empty");
}
