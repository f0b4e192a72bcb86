use anyhow::Result;
use lf_triage::{archive, collect, rank, run_triage, score_all, top, HistogramConfig, TriageConfig};
use lf_types::{write_record, CandidateConfig, SimulationResult, PERFORMANCE_FILE};
use std::fs;
use std::path::{Path, PathBuf};

fn definition(legs: u32) -> CandidateConfig {
    CandidateConfig {
        motor_radius: 1.5,
        main_length: 10.0,
        main_height: 2.0,
        upper_extension: 3.0,
        leg_width: 3.0,
        leg_height: 5.0,
        leg_angle: 15f64.to_radians(),
        foot_height: 5.0,
        leg_number: legs,
    }
}

/// A successful run whose x-velocity averages to `mean`.
fn run_with_mean(mean: f64, legs: u32) -> SimulationResult {
    let spex = vec![mean - 1.0, mean, mean + 1.0];
    let n = spex.len();
    SimulationResult {
        status: 0,
        status_string: Some("no error".to_string()),
        definition: definition(legs),
        time: vec![0.0, 0.5, 1.0],
        posx: vec![-30.0, -29.0, -28.0],
        posy: vec![0.0; n],
        spex,
        spey: vec![0.0; n],
        bodyangle: vec![0.0; n],
        engineangle: vec![0.0, 90.0, 180.0],
    }
}

fn write_run(root: &Path, name: &str, result: &SimulationResult) -> Result<PathBuf> {
    let dir = root.join(name);
    fs::create_dir_all(&dir)?;
    let path = dir.join(PERFORMANCE_FILE);
    write_record(&path, result)?;
    Ok(path)
}

#[test]
fn three_runs_top_two_are_archived_in_rank_order() -> Result<()> {
    let root = tempfile::tempdir()?;
    let a = write_run(root.path(), "a", &run_with_mean(5.0, 3))?;
    let b = write_run(root.path(), "b", &run_with_mean(9.0, 4))?;
    let c = write_run(root.path(), "c", &run_with_mean(7.0, 5))?;

    let ranked = rank(score_all(collect(root.path())?)?);
    let ranking: Vec<(f64, &Path)> = ranked
        .iter()
        .map(|e| (e.score, e.source_path.as_path()))
        .collect();
    assert_eq!(
        ranking,
        vec![(9.0, b.as_path()), (7.0, c.as_path()), (5.0, a.as_path())]
    );
    assert_eq!(ranked[0].config.leg_number, 4);

    let champions = top(&ranked, 2);
    assert_eq!(champions.len(), 2);

    let out = tempfile::tempdir()?;
    let dest = out.path().join("champions");
    fs::create_dir_all(&dest)?;
    fs::write(dest.join("champion.07"), "left over from an earlier run")?;

    archive(champions, &dest)?;
    let mut names: Vec<String> = fs::read_dir(&dest)?
        .map(|e| e.map(|e| e.file_name().to_string_lossy().into_owned()))
        .collect::<std::io::Result<_>>()?;
    names.sort();
    assert_eq!(names, vec!["champion.00", "champion.01"]);
    assert_eq!(fs::read(dest.join("champion.00"))?, fs::read(&b)?);
    assert_eq!(fs::read(dest.join("champion.01"))?, fs::read(&c)?);
    Ok(())
}

#[test]
fn full_run_prints_leaderboard_and_writes_artifacts() -> Result<()> {
    let root = tempfile::tempdir()?;
    for (i, mean) in [1.0, 4.0, 2.0, 8.0, 3.0].iter().enumerate() {
        write_run(root.path(), &format!("{i:04}"), &run_with_mean(*mean, 3))?;
    }

    let out = tempfile::tempdir()?;
    let config = TriageConfig::new(root.path())
        .with_top_k(3)
        .with_archive(Some(out.path().join("champions")), "champion")
        .with_histogram(Some(out.path().join("scores.svg")), HistogramConfig::default())
        .with_leaderboard_json(Some(out.path().join("leaderboard.json")));

    let mut stdout = Vec::new();
    let outcome = run_triage(&config, &mut stdout)?;
    let text = String::from_utf8(stdout)?;

    assert!(text.starts_with("found 5 results\nchampions\n"));
    assert_eq!(text.lines().count(), 2 + 3);
    assert_eq!(outcome.leaderboard.total_results, 5);
    let scores: Vec<f64> = outcome.leaderboard.rows.iter().map(|r| r.score).collect();
    assert_eq!(scores, vec![8.0, 4.0, 3.0]);
    assert_eq!(outcome.archived.len(), 3);
    assert_eq!(outcome.histogram.as_ref().map(|h| h.total()), Some(5));
    assert!(out.path().join("scores.svg").is_file());
    assert!(out.path().join("leaderboard.json").is_file());

    // Running again over the same tree yields the same ranking and archive.
    let again = run_triage(&config, &mut Vec::new())?;
    assert_eq!(again.ranked, outcome.ranked);
    assert_eq!(fs::read_dir(out.path().join("champions"))?.count(), 3);
    Ok(())
}
