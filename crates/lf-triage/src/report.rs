//! Leaderboard rendering and score-distribution artifacts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;
use uuid::Uuid;

use lf_types::{write_record, CandidateConfig, LfError, LfResult};

use crate::ranking::RankedEntry;

/// One leaderboard line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardRow {
    pub rank: usize,
    pub score: f64,
    pub source_path: PathBuf,
    pub definition: CandidateConfig,
}

/// Score-ranked view of one triage run, top entries only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leaderboard {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub root: PathBuf,
    pub total_results: usize,
    pub rows: Vec<LeaderboardRow>,
}

impl Leaderboard {
    pub fn new(root: impl Into<PathBuf>, total_results: usize, top: &[RankedEntry]) -> Self {
        let rows = top
            .iter()
            .enumerate()
            .map(|(rank, entry)| LeaderboardRow {
                rank,
                score: entry.score,
                source_path: entry.source_path.clone(),
                definition: entry.config.clone(),
            })
            .collect();
        Self {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            root: root.into(),
            total_results,
            rows,
        }
    }

    /// Plain-text rendering for the terminal.
    pub fn render(&self, show_definitions: bool) -> String {
        let mut lines = vec![
            format!("found {} results", self.total_results),
            "champions".to_string(),
        ];
        for row in &self.rows {
            lines.push(format!(
                "{:>3} {:>12.6} {}",
                row.rank,
                row.score,
                row.source_path.display()
            ));
            if show_definitions {
                lines.extend(
                    row.definition
                        .to_string()
                        .lines()
                        .map(|line| format!("      {line}")),
                );
            }
        }
        lines.push(String::new());
        lines.join("\n")
    }

    pub fn print<W: Write>(&self, writer: &mut W, show_definitions: bool) -> LfResult<()> {
        writer.write_all(self.render(show_definitions).as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    pub fn write_json(&self, path: &Path) -> LfResult<()> {
        write_record(path, self)
            .map_err(|e| LfError::Report(format!("cannot write {}: {e}", path.display())))?;
        info!("Wrote leaderboard to {}", path.display());
        Ok(())
    }
}

/// Fixed bucket range for the score histogram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramConfig {
    pub low: f64,
    pub high: f64,
    pub bins: usize,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            low: -5.0,
            high: 15.0,
            bins: 40,
        }
    }
}

impl HistogramConfig {
    pub fn validate(&self) -> LfResult<()> {
        if self.bins == 0 || !(self.high > self.low) {
            return Err(LfError::Report(format!(
                "invalid histogram range [{}, {}) with {} bins",
                self.low, self.high, self.bins
            )));
        }
        Ok(())
    }

    fn bin_width(&self) -> f64 {
        (self.high - self.low) / self.bins as f64
    }
}

/// Score distribution over `[low, high)`.
///
/// Values outside the range are tallied separately and never bucketed.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub config: HistogramConfig,
    pub counts: Vec<usize>,
    pub underflow: usize,
    pub overflow: usize,
}

impl Histogram {
    pub fn from_scores(scores: &[f64], config: HistogramConfig) -> LfResult<Self> {
        config.validate()?;
        let mut counts = vec![0usize; config.bins];
        let mut underflow = 0;
        let mut overflow = 0;
        let width = config.bin_width();

        for &score in scores {
            if score.is_nan() || score < config.low {
                underflow += 1;
            } else if score >= config.high {
                overflow += 1;
            } else {
                let bin = (((score - config.low) / width) as usize).min(config.bins - 1);
                counts[bin] += 1;
            }
        }

        Ok(Self {
            config,
            counts,
            underflow,
            overflow,
        })
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum::<usize>() + self.underflow + self.overflow
    }

    /// Render as a standalone SVG bar chart.
    pub fn render_svg(&self) -> String {
        const WIDTH: f64 = 800.0;
        const HEIGHT: f64 = 400.0;
        const MARGIN: f64 = 40.0;

        let plot_w = WIDTH - 2.0 * MARGIN;
        let plot_h = HEIGHT - 2.0 * MARGIN;
        let peak = self.counts.iter().copied().max().unwrap_or(0).max(1) as f64;
        let bar_w = plot_w / self.counts.len() as f64;

        let mut svg = vec![
            format!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}">"#
            ),
            r#"<rect width="100%" height="100%" fill="white"/>"#.to_string(),
        ];
        for (i, &count) in self.counts.iter().enumerate() {
            if count == 0 {
                continue;
            }
            let h = count as f64 / peak * plot_h;
            let x = MARGIN + i as f64 * bar_w;
            let y = HEIGHT - MARGIN - h;
            svg.push(format!(
                r#"<rect x="{x:.2}" y="{y:.2}" width="{:.2}" height="{h:.2}" fill="steelblue" stroke="white"/>"#,
                bar_w
            ));
        }
        let axis_y = HEIGHT - MARGIN;
        svg.push(format!(
            r#"<line x1="{MARGIN}" y1="{axis_y}" x2="{}" y2="{axis_y}" stroke="black"/>"#,
            WIDTH - MARGIN
        ));
        svg.push(format!(
            r#"<text x="{MARGIN}" y="{}" font-size="12">{}</text>"#,
            axis_y + 16.0,
            self.config.low
        ));
        svg.push(format!(
            r#"<text x="{}" y="{}" font-size="12" text-anchor="end">{}</text>"#,
            WIDTH - MARGIN,
            axis_y + 16.0,
            self.config.high
        ));
        svg.push(format!(
            r#"<text x="{}" y="{}" font-size="14" text-anchor="middle">mean x speed, n={} (below {}, above {})</text>"#,
            WIDTH / 2.0,
            MARGIN / 2.0,
            self.total(),
            self.underflow,
            self.overflow
        ));
        svg.push("</svg>".to_string());
        svg.push(String::new());
        svg.join("\n")
    }

    pub fn write_svg(&self, path: &Path) -> LfResult<()> {
        std::fs::write(path, self.render_svg())
            .map_err(|e| LfError::Report(format!("cannot write {}: {e}", path.display())))?;
        info!(
            "Wrote score histogram to {} ({} outside range)",
            path.display(),
            self.underflow + self.overflow
        );
        Ok(())
    }
}
