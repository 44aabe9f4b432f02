//! Simulation report generation.

use super::runner::{CrashCause, RunStats};
use std::collections::BTreeMap;

/// Aggregated results from a batch of runs.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_timed_out: u32,
    pub max_frames: u64,

    pub avg_score: f64,
    pub best_score: u32,
    pub worst_score: u32,
    pub avg_frames: f64,
    pub avg_flaps: f64,

    /// score -> number of runs ending on it
    pub score_distribution: BTreeMap<u32, u32>,
    pub crash_causes: BTreeMap<CrashCause, u32>,

    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>, max_frames: u64) -> Self {
        let num_runs = runs.len() as u32;
        let n = num_runs.max(1) as f64;
        let runs_timed_out = runs.iter().filter(|r| r.timed_out()).count() as u32;

        let avg_score = runs.iter().map(|r| r.score as f64).sum::<f64>() / n;
        let avg_frames = runs.iter().map(|r| r.frames as f64).sum::<f64>() / n;
        let avg_flaps = runs.iter().map(|r| r.flaps as f64).sum::<f64>() / n;
        let best_score = runs.iter().map(|r| r.score).max().unwrap_or(0);
        let worst_score = runs.iter().map(|r| r.score).min().unwrap_or(0);

        let mut score_distribution = BTreeMap::new();
        let mut crash_causes = BTreeMap::new();
        for run in &runs {
            *score_distribution.entry(run.score).or_insert(0) += 1;
            if let Some(cause) = run.crash {
                *crash_causes.entry(cause).or_insert(0) += 1;
            }
        }

        Self {
            num_runs,
            runs_timed_out,
            max_frames,
            avg_score,
            best_score,
            worst_score,
            avg_frames,
            avg_flaps,
            score_distribution,
            crash_causes,
            run_stats: runs,
        }
    }

    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    AUTOPILOT REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} survived {} frames\n\n",
            self.num_runs, self.runs_timed_out, self.max_frames
        ));

        report.push_str("── SCORES ───────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Score:   {:.2}\n", self.avg_score));
        report.push_str(&format!("  Best Score:  {}\n", self.best_score));
        report.push_str(&format!("  Worst Score: {}\n", self.worst_score));
        report.push_str(&format!("  Avg Frames:  {:.0}\n", self.avg_frames));
        report.push_str(&format!("  Avg Flaps:   {:.1}\n\n", self.avg_flaps));

        report.push_str("── CRASHES ──────────────────────────────────────────────────────\n");
        for cause in [CrashCause::Pipe, CrashCause::Floor, CrashCause::Ceiling] {
            let count = self.crash_causes.get(&cause).copied().unwrap_or(0);
            report.push_str(&format!("  {:<8} {}\n", format!("{:?}:", cause), count));
        }
        report.push('\n');

        report.push_str("── SCORE DISTRIBUTION ───────────────────────────────────────────\n");
        for (score, count) in &self.score_distribution {
            let pct = (*count as f64 / self.num_runs.max(1) as f64) * 100.0;
            let bar = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!("  {:>4}: {:>5.1}% {}\n", score, pct, bar));
        }

        report
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

impl serde::Serialize for SimReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("SimReport", 11)?;
        state.serialize_field("num_runs", &self.num_runs)?;
        state.serialize_field("runs_timed_out", &self.runs_timed_out)?;
        state.serialize_field("max_frames", &self.max_frames)?;
        state.serialize_field("avg_score", &self.avg_score)?;
        state.serialize_field("best_score", &self.best_score)?;
        state.serialize_field("worst_score", &self.worst_score)?;
        state.serialize_field("avg_frames", &self.avg_frames)?;
        state.serialize_field("avg_flaps", &self.avg_flaps)?;
        state.serialize_field("score_distribution", &self.score_distribution)?;
        state.serialize_field("crash_causes", &self.crash_causes)?;
        state.serialize_field("runs", &self.run_stats)?;
        state.end()
    }
}
