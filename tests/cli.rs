use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn ranks_an_html_corpus_with_both_estimators() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("pagerank")?;
    cmd.arg("test_data/corpus");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "PageRank Results from Sampling (n = 10000)",
        ))
        .stdout(predicate::str::contains("PageRank Results from Iteration"))
        .stdout(predicate::str::contains("1.html: 0."));
    Ok(())
}

#[test]
fn ranks_a_json_corpus() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("pagerank")?;
    cmd.arg("test_data/trivial.json");
    // the symmetric pair converges to an even split
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("a: 0.5000"))
        .stdout(predicate::str::contains("b: 0.5000"));
    Ok(())
}

#[test]
fn json_output_carries_both_rank_tables() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("pagerank")?;
    cmd.arg("test_data/trivial.json").arg("--json");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"sampling\""))
        .stdout(predicate::str::contains("\"iteration\""))
        .stdout(predicate::str::contains("\"damping\": 0.85"));
    Ok(())
}

#[test]
fn missing_corpus_path_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("pagerank")?;
    cmd.arg("test_data/no_such_corpus");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
    Ok(())
}

#[test]
fn out_of_range_damping_factor_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("pagerank")?;
    cmd.arg("test_data/corpus").arg("--damping").arg("1.5");
    cmd.assert().failure().stderr(predicate::str::contains(
        "damping factor must be strictly between 0 and 1",
    ));
    Ok(())
}

#[test]
fn zero_samples_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("pagerank")?;
    cmd.arg("test_data/corpus").arg("--samples").arg("0");
    cmd.assert().failure().stderr(predicate::str::contains(
        "sample count must be at least 1",
    ));
    Ok(())
}
