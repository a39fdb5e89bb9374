use std::io::Write;
use std::path::{Path, PathBuf};

use crate::analysis::registry::FrameRegistry;
use crate::analysis::sequence::{SequenceSummary, summarize};
use crate::dump::discover::discover;
use crate::dump::metadata::{ParseOutcome, read_record};
use crate::foundation::error::FramesiftResult;

/// How many leading frames the alternation listing shows by default.
///
/// A display limit only: enough for a human to eyeball the expected
/// strict-alternation pattern, independent of the gap analysis.
pub const DEFAULT_ALTERNATION_WINDOW: usize = 10;

/// Presentation knobs for the rendered report.
#[derive(Clone, Copy, Debug)]
pub struct ReportOptions {
    /// Leading window of sorted indices shown in the alternation listing.
    pub window: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            window: DEFAULT_ALTERNATION_WINDOW,
        }
    }
}

/// Everything one analysis run produced, ready to render.
///
/// The report is plain data; [`AnalysisReport::render`] is the only place
/// output formatting happens, so tests can assert on exact bytes.
#[derive(Debug)]
pub struct AnalysisReport {
    /// Directory the run analyzed.
    pub scratch_dir: PathBuf,
    /// How many metadata files discovery found.
    pub metadata_file_count: usize,
    /// How many raw pixel files discovery found (never opened).
    pub raw_file_count: usize,
    /// Per-file parse results in discovery (file name) order.
    pub outcomes: Vec<ParseOutcome>,
    /// Successfully parsed records keyed by frame index.
    pub registry: FrameRegistry,
    /// Range and gaps; `None` when no record parsed.
    pub summary: Option<SequenceSummary>,
    /// Presentation options the report was built with.
    pub options: ReportOptions,
}

/// Runs the whole pipeline over one scratch directory.
///
/// This is a pure function of the directory contents: no environment reads,
/// no writes, no state between runs. Only an unlistable directory errors;
/// per-file failures are carried inside the report.
#[tracing::instrument(skip(options))]
pub fn analyze_directory(dir: &Path, options: ReportOptions) -> FramesiftResult<AnalysisReport> {
    let dumps = discover(dir)?;

    let mut registry = FrameRegistry::new();
    let mut outcomes = Vec::with_capacity(dumps.metadata_files.len());
    for path in &dumps.metadata_files {
        let outcome = read_record(path);
        if let ParseOutcome::Parsed(record) = &outcome {
            registry.insert(record.clone());
        }
        outcomes.push(outcome);
    }

    let summary = summarize(&registry);
    tracing::debug!(
        parsed = registry.len(),
        failures = outcomes.len() - registry.len() - registry.collisions().len(),
        gaps = summary.as_ref().map_or(0, |s| s.gaps.len()),
        "analysis complete"
    );

    Ok(AnalysisReport {
        scratch_dir: dir.to_path_buf(),
        metadata_file_count: dumps.metadata_files.len(),
        raw_file_count: dumps.raw_files.len(),
        outcomes,
        registry,
        summary,
        options,
    })
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

impl AnalysisReport {
    /// Writes the human-readable report.
    pub fn render(&self, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(out, "Scratch directory: {}", self.scratch_dir.display())?;
        writeln!(out, "Found {} metadata files", self.metadata_file_count)?;
        writeln!(out, "Found {} raw pixel files", self.raw_file_count)?;
        writeln!(out)?;

        if self.metadata_file_count == 0 {
            writeln!(
                out,
                "No frame dumps found. Make sure the app ran with the instrumented DLL."
            )?;
            return Ok(());
        }

        writeln!(out, "=== Frame Sequence Analysis ===")?;
        for outcome in &self.outcomes {
            match outcome {
                ParseOutcome::Parsed(rec) => {
                    writeln!(
                        out,
                        "Frame {:04}: DisplayingAlt={}",
                        rec.index,
                        rec.surface.token()
                    )?;
                }
                ParseOutcome::Malformed { path, reason } => {
                    writeln!(out, "Error parsing {}: {reason}", file_name(path))?;
                }
                ParseOutcome::Unreadable { path, reason } => {
                    writeln!(out, "Error reading {}: {reason}", file_name(path))?;
                }
            }
        }
        writeln!(out)?;

        let Some(summary) = &self.summary else {
            writeln!(out, "No frames found.")?;
            return Ok(());
        };

        writeln!(out, "=== Frame Sequence Check ===")?;
        writeln!(out, "Frame {} to {}", summary.min, summary.max)?;
        if summary.gaps.is_empty() {
            writeln!(out, "No gaps in frames {} to {}", summary.min, summary.max)?;
        } else {
            writeln!(
                out,
                "Found {} gaps in frame sequence:",
                summary.gaps.len()
            )?;
            for gap in &summary.gaps {
                writeln!(
                    out,
                    "  Gap between frame {} and {} (missing {} frames)",
                    gap.before,
                    gap.after,
                    gap.missing()
                )?;
            }
        }
        if !self.registry.collisions().is_empty() {
            let list: Vec<String> = self
                .registry
                .collisions()
                .iter()
                .map(|i| i.to_string())
                .collect();
            writeln!(
                out,
                "Duplicate frame indices: {} ({})",
                self.registry.collisions().len(),
                list.join(", ")
            )?;
        }
        writeln!(out)?;

        writeln!(out, "=== Double-Buffering Pattern ===")?;
        for index in self
            .registry
            .sorted_indices()
            .into_iter()
            .take(self.options.window)
        {
            // Index comes from the registry, so the lookup cannot miss.
            let Some(rec) = self.registry.get(index) else {
                continue;
            };
            writeln!(
                out,
                "Frame {index:04}: Surface {} being displayed",
                rec.surface.label()
            )?;
        }
        Ok(())
    }

    /// Renders into a `String`, mostly for tests and logging.
    pub fn render_to_string(&self) -> String {
        let mut buf = Vec::new();
        self.render(&mut buf)
            .expect("writing to a Vec cannot fail");
        String::from_utf8(buf).expect("report is valid utf-8")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::core::{FrameIndex, FrameRecord, SurfaceFlag};

    fn record(index: u64, surface: SurfaceFlag) -> FrameRecord {
        FrameRecord {
            index: FrameIndex(index),
            surface,
            source_path: PathBuf::from(format!("gifbolt_frame_{index:04}.txt")),
            raw_metadata: String::new(),
        }
    }

    fn report_for(records: Vec<FrameRecord>, options: ReportOptions) -> AnalysisReport {
        let mut registry = FrameRegistry::new();
        let mut outcomes = Vec::new();
        for rec in records {
            outcomes.push(ParseOutcome::Parsed(rec.clone()));
            registry.insert(rec);
        }
        let count = outcomes.len();
        let summary = summarize(&registry);
        AnalysisReport {
            scratch_dir: PathBuf::from("/scratch"),
            metadata_file_count: count,
            raw_file_count: 0,
            outcomes,
            registry,
            summary,
            options,
        }
    }

    #[test]
    fn window_caps_the_alternation_listing() {
        let records = (0..20).map(|i| record(i, SurfaceFlag::Alt)).collect();
        let text = report_for(records, ReportOptions { window: 3 }).render_to_string();
        assert_eq!(
            text.matches("being displayed").count(),
            3,
            "window of 3 must list exactly 3 frames:\n{text}"
        );
    }

    #[test]
    fn unknown_surface_is_rendered_as_unknown() {
        let text = report_for(
            vec![record(0, SurfaceFlag::Unknown)],
            ReportOptions::default(),
        )
        .render_to_string();
        assert!(text.contains("Frame 0000: Surface Unknown being displayed"));
        assert!(!text.contains("Surface Primary"));
    }

    #[test]
    fn collisions_show_up_in_the_report() {
        let mut rep = report_for(
            vec![record(4, SurfaceFlag::Primary)],
            ReportOptions::default(),
        );
        rep.registry.insert(record(4, SurfaceFlag::Alt));
        let text = rep.render_to_string();
        assert!(text.contains("Duplicate frame indices: 1 (4)"));
    }

    #[test]
    fn no_collision_line_without_collisions() {
        let text = report_for(
            vec![record(0, SurfaceFlag::Primary), record(1, SurfaceFlag::Alt)],
            ReportOptions::default(),
        )
        .render_to_string();
        assert!(!text.contains("Duplicate frame indices"));
    }
}
