//! Turns a raw best-track payload into ordered records and a summary.

use log::warn;

use super::{summarize, TrackError, TrackRecord, TrackSummary};

/// Records parsed from one payload, plus how many lines were dropped.
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    pub records: Vec<TrackRecord>,
    pub skipped: usize,
}

/// Parses a track file into records ordered oldest first.
///
/// Malformed lines are skipped. An input with no usable lines yields an empty
/// vector. A garbled coordinate fails the whole payload.
pub fn parse(raw_text: &str) -> Result<Vec<TrackRecord>, TrackError> {
    Ok(parse_with_outcome(raw_text)?.records)
}

pub fn parse_with_outcome(raw_text: &str) -> Result<ParseOutcome, TrackError> {
    let mut outcome = ParseOutcome::default();

    for (idx, line) in raw_text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match TrackRecord::from_line(line, idx + 1) {
            Ok(record) => outcome.records.push(record),
            Err(e) if e.is_recoverable() => {
                warn!("Skipping line: {}", e);
                outcome.skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    // The feed lists the newest fix first
    outcome.records.reverse();
    outcome.skipped += retain_track_fixes(&mut outcome.records);

    Ok(outcome)
}

/// Drops fixes that belong to another storm.
///
/// The track's id is the one most fixes carry, ties going to the oldest, so a
/// single stray line cannot evict the rest. Names are left as read.
fn retain_track_fixes(records: &mut Vec<TrackRecord>) -> usize {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for record in records.iter() {
        let id = record.storm_id.to_ascii_uppercase();
        match counts.iter_mut().find(|(seen, _)| *seen == id) {
            Some((_, count)) => *count += 1,
            None => counts.push((id, 1)),
        }
    }

    let mut best: Option<&(String, usize)> = None;
    for entry in &counts {
        if best.map_or(true, |(_, count)| entry.1 > *count) {
            best = Some(entry);
        }
    }
    let Some((storm_id, _)) = best else {
        return 0;
    };

    let before = records.len();
    records.retain(|r| {
        let same = r.storm_id.eq_ignore_ascii_case(storm_id);
        if !same {
            warn!("Skipping fix for {} inside track {}", r.storm_id, storm_id);
        }
        same
    });

    before - records.len()
}

/// One storm's ingested track. Built once from a payload and read-only after.
#[derive(Debug, Clone)]
pub struct TrackIngestor {
    records: Vec<TrackRecord>,
    summary: TrackSummary,
    skipped: usize,
}

impl TrackIngestor {
    pub fn from_text(raw_text: &str) -> Result<Self, TrackError> {
        let ParseOutcome { records, skipped } = parse_with_outcome(raw_text)?;
        let summary = summarize(&records)?;

        Ok(TrackIngestor {
            records,
            summary,
            skipped,
        })
    }

    pub fn records(&self) -> &[TrackRecord] {
        &self.records
    }

    pub fn summary(&self) -> &TrackSummary {
        &self.summary
    }

    /// Number of lines dropped while parsing.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

// -- Tests -------------------------------------------------------------------
