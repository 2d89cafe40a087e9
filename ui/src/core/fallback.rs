//! Era fallback selection.
//!
//! When the preferred era's track has no lessons, the remaining catalog eras
//! are probed one at a time, in priority order, until one yields content. The
//! scan is modelled as an explicit state machine ([`FallbackScan`]) so that the
//! async driver ([`select_era`]) stays a thin loop around it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use api::{Track, TrackSource};
use tracing::{debug, info, warn};

use super::era::EraCode;

/// Shared flag set when a newer selection request supersedes this one.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    /// Every era, preferred included, came back empty or failed.
    #[error("no learning paths are available for any era")]
    NoContentAvailable,
    /// A newer selection superseded this one; results were discarded.
    #[error("era selection was superseded")]
    Cancelled,
}

/// The accepted era and its track.
#[derive(Debug, Clone, PartialEq)]
pub struct EraSelection {
    pub era: EraCode,
    pub track: Track,
    pub used_fallback: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanState {
    /// Probing the preferred era.
    Probing(EraCode),
    /// Probing `candidates[i]`.
    ProbingCandidate(usize),
    Accepted(EraCode),
    Exhausted,
    Cancelled,
}

impl ScanState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Accepted(_) | Self::Exhausted | Self::Cancelled)
    }
}

/// One fallback scan over a candidate list. Never visits an era twice.
#[derive(Debug, Clone)]
pub struct FallbackScan {
    preferred: EraCode,
    candidates: Vec<EraCode>,
    probed: Vec<EraCode>,
    state: ScanState,
}

impl FallbackScan {
    pub fn new(preferred: EraCode, candidates: Vec<EraCode>) -> Self {
        Self {
            state: ScanState::Probing(preferred.clone()),
            preferred,
            candidates,
            probed: Vec::new(),
        }
    }

    pub fn state(&self) -> &ScanState {
        &self.state
    }

    /// Eras probed so far, in probe order.
    pub fn probed(&self) -> &[EraCode] {
        &self.probed
    }

    /// Era the scan is waiting on, or `None` once terminal.
    pub fn next_probe(&self) -> Option<&EraCode> {
        match &self.state {
            ScanState::Probing(era) => Some(era),
            ScanState::ProbingCandidate(idx) => self.candidates.get(*idx),
            _ => None,
        }
    }

    /// Feed back the result of probing [`Self::next_probe`].
    pub fn record(&mut self, has_content: bool) -> &ScanState {
        let Some(era) = self.next_probe().cloned() else {
            return &self.state;
        };
        self.probed.push(era.clone());

        self.state = if has_content {
            ScanState::Accepted(era)
        } else {
            let start = match self.state {
                ScanState::ProbingCandidate(idx) => idx + 1,
                _ => 0,
            };
            match self.next_candidate_from(start) {
                Some(idx) => ScanState::ProbingCandidate(idx),
                None => ScanState::Exhausted,
            }
        };
        &self.state
    }

    pub fn cancel(&mut self) {
        if !self.state.is_terminal() {
            self.state = ScanState::Cancelled;
        }
    }

    /// Whether the era currently being probed is a fallback candidate.
    pub fn probing_fallback(&self) -> bool {
        matches!(self.state, ScanState::ProbingCandidate(_))
    }

    fn next_candidate_from(&self, start: usize) -> Option<usize> {
        self.candidates
            .iter()
            .enumerate()
            .skip(start)
            .find(|(_, era)| **era != self.preferred && !self.probed.contains(*era))
            .map(|(idx, _)| idx)
    }
}

/// Pick the era to display, probing `candidates` sequentially when
/// `preferred` has no lessons. Fetch failures count as empty tracks.
/// `cancel` is checked after every probe.
pub async fn select_era<S: TrackSource>(
    preferred: &EraCode,
    candidates: &[EraCode],
    source: &S,
    cancel: &CancellationToken,
) -> Result<EraSelection, SelectError> {
    let mut scan = FallbackScan::new(preferred.clone(), candidates.to_vec());

    while let Some(era) = scan.next_probe().cloned() {
        let fetched = match source.fetch_track(era.as_str()).await {
            Ok(track) => Some(track),
            Err(err) => {
                warn!(era = %era, error = %err, "track probe failed, treating as empty");
                None
            }
        };

        if cancel.is_cancelled() {
            scan.cancel();
            debug!(era = %era, "era selection superseded, discarding probe");
            return Err(SelectError::Cancelled);
        }

        let used_fallback = scan.probing_fallback();
        match fetched {
            Some(track) if track.has_lessons() => {
                scan.record(true);
                if used_fallback {
                    info!(preferred = %preferred, era = %era, "falling back to era with content");
                }
                return Ok(EraSelection {
                    era,
                    track,
                    used_fallback,
                });
            }
            _ => {
                debug!(era = %era, "era has no lessons");
                scan.record(false);
            }
        }
    }

    warn!(preferred = %preferred, probed = scan.probed().len(), "no era has content");
    Err(SelectError::NoContentAvailable)
}
