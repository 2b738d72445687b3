//! Core detection domain: the analysis state machine, result types, and
//! session stats.
//!
//! Analysis is currently simulated client-side; `simulated_result()` is the
//! single seam a real inference client would replace.

use serde::{Deserialize, Serialize};

use crate::error::UploadError;

/// Milliseconds between progress ticks during simulated analysis.
pub const TICK_INTERVAL_MS: i32 = 200;

/// Progress added per tick. 10 ticks from zero to done.
pub const PROGRESS_STEP: u8 = 10;

/// Severity of a detected condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }

    /// CSS class for the severity badge.
    pub fn badge_class(&self) -> &'static str {
        match self {
            Severity::Low => "severity-badge severity-low",
            Severity::Medium => "severity-badge severity-medium",
            Severity::High => "severity-badge severity-high",
        }
    }
}

/// Overall verdict for the scanned plant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Diseased,
}

/// Structured output of one plant scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub disease: String,
    /// Confidence percentage, 0-100.
    pub confidence: u8,
    pub severity: Severity,
    pub treatment: String,
    pub prevention: String,
    pub status: HealthStatus,
}

/// The canned result the simulation produces for every scan.
///
/// A real inference client would return this from the model instead.
pub fn simulated_result() -> DetectionResult {
    DetectionResult {
        disease: "Leaf Spot Disease".to_string(),
        confidence: 87,
        severity: Severity::Medium,
        treatment: "Apply copper-based fungicide every 2 weeks. Remove affected \
                    leaves and improve air circulation."
            .to_string(),
        prevention: "Avoid overhead watering, ensure proper spacing between \
                     plants, and maintain good air circulation."
            .to_string(),
        status: HealthStatus::Diseased,
    }
}

/// An image the user selected for analysis, held in memory as a data URL.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedImage {
    pub file_name: String,
    pub mime: String,
    pub data_url: String,
    pub byte_len: usize,
}

impl UploadedImage {
    /// Build from raw file bytes. Rejects anything that is not an image MIME
    /// type without constructing anything.
    pub fn new(file_name: &str, mime: &str, bytes: &[u8]) -> Result<Self, UploadError> {
        if !is_image_mime(mime) {
            return Err(UploadError::NotAnImage {
                mime: mime.to_string(),
            });
        }

        use base64::Engine as _;
        let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
        Ok(UploadedImage {
            file_name: file_name.to_string(),
            mime: mime.to_string(),
            data_url: format!("data:{};base64,{}", mime, encoded),
            byte_len: bytes.len(),
        })
    }
}

/// True for `image/*` MIME types, the only kind the intake accepts.
pub fn is_image_mime(mime: &str) -> bool {
    mime.starts_with("image/")
}

/// Analysis workflow state.
///
/// A tagged union rather than separate flags so invalid combinations
/// (analyzing with a stale result visible, progress without an analysis)
/// cannot be represented.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisState {
    /// Waiting for an image.
    Idle,
    /// Simulated analysis running, progress in 0..=100.
    Analyzing { progress: u8 },
    /// Analysis finished.
    Complete { result: DetectionResult },
}

impl AnalysisState {
    /// Start (or restart) an analysis. Any previous result is discarded and
    /// progress returns to zero.
    pub fn begin(&mut self) {
        *self = AnalysisState::Analyzing { progress: 0 };
    }

    /// Advance the simulation by one tick. Returns `true` exactly once, on
    /// the tick that completes the analysis; the caller clears its timer on
    /// that signal. No-op outside `Analyzing`.
    pub fn advance(&mut self) -> bool {
        match self {
            AnalysisState::Analyzing { progress } => {
                *progress = (*progress + PROGRESS_STEP).min(100);
                if *progress >= 100 {
                    *self = AnalysisState::Complete {
                        result: simulated_result(),
                    };
                    true
                } else {
                    false
                }
            }
            _ => false,
        }
    }

    /// Back to `Idle` from any state.
    pub fn reset(&mut self) {
        *self = AnalysisState::Idle;
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self, AnalysisState::Analyzing { .. })
    }

    /// Displayed progress percentage: 0 outside `Analyzing`.
    pub fn progress(&self) -> u8 {
        match self {
            AnalysisState::Analyzing { progress } => *progress,
            _ => 0,
        }
    }
}

/// Session-local scan counters shown in the dashboard stat cards.
///
/// Seeded with demo values; nothing is persisted across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanStats {
    pub total_scans: u32,
    pub healthy_plants: u32,
    pub diseases_found: u32,
    pub accuracy_percent: u8,
}

impl Default for ScanStats {
    fn default() -> Self {
        ScanStats {
            total_scans: 24,
            healthy_plants: 18,
            diseases_found: 6,
            accuracy_percent: 95,
        }
    }
}

impl ScanStats {
    /// Count a completed scan.
    pub fn record(&mut self, result: &DetectionResult) {
        self.total_scans += 1;
        match result.status {
            HealthStatus::Healthy => self.healthy_plants += 1,
            HealthStatus::Diseased => self.diseases_found += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_image_mime() {
        let err = UploadedImage::new("report.pdf", "application/pdf", &[1, 2, 3]);
        assert!(matches!(err, Err(UploadError::NotAnImage { .. })));
    }

    #[test]
    fn test_accepts_image_mime() {
        let img = UploadedImage::new("palm.jpg", "image/jpeg", &[0xff, 0xd8]).unwrap();
        assert_eq!(img.file_name, "palm.jpg");
        assert_eq!(img.byte_len, 2);
        assert!(img.data_url.starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn test_begin_starts_at_zero() {
        let mut state = AnalysisState::Idle;
        state.begin();
        assert_eq!(state, AnalysisState::Analyzing { progress: 0 });
    }

    #[test]
    fn test_progress_sequence_reaches_exactly_100() {
        let mut state = AnalysisState::Idle;
        state.begin();

        let mut seen = vec![state.progress()];
        let mut ticks = 0;
        while state.is_analyzing() {
            let done = state.advance();
            ticks += 1;
            if !done {
                seen.push(state.progress());
            }
            assert!(ticks <= 20, "simulation failed to terminate");
        }

        assert_eq!(ticks, 10);
        assert_eq!(seen, vec![0, 10, 20, 30, 40, 50, 60, 70, 80, 90]);
    }

    #[test]
    fn test_completion_yields_canned_result() {
        let mut state = AnalysisState::Idle;
        state.begin();
        while !state.advance() {}

        match state {
            AnalysisState::Complete { ref result } => {
                assert_eq!(result, &simulated_result());
                assert_eq!(result.disease, "Leaf Spot Disease");
                assert_eq!(result.confidence, 87);
                assert_eq!(result.severity, Severity::Medium);
                assert_eq!(result.status, HealthStatus::Diseased);
            }
            ref other => panic!("expected Complete, got {:?}", other),
        }
    }

    #[test]
    fn test_advance_is_noop_outside_analyzing() {
        let mut idle = AnalysisState::Idle;
        assert!(!idle.advance());
        assert_eq!(idle, AnalysisState::Idle);

        let mut done = AnalysisState::Complete {
            result: simulated_result(),
        };
        assert!(!done.advance());
        assert!(matches!(done, AnalysisState::Complete { .. }));
    }

    #[test]
    fn test_reset_from_every_state() {
        let mut state = AnalysisState::Idle;
        state.reset();
        assert_eq!(state, AnalysisState::Idle);

        state.begin();
        state.advance();
        state.reset();
        assert_eq!(state, AnalysisState::Idle);
        assert_eq!(state.progress(), 0);

        state.begin();
        while !state.advance() {}
        state.reset();
        assert_eq!(state, AnalysisState::Idle);
    }

    #[test]
    fn test_begin_mid_analysis_restarts_cleanly() {
        let mut state = AnalysisState::Idle;
        state.begin();
        for _ in 0..5 {
            state.advance();
        }
        assert_eq!(state.progress(), 50);

        // Re-upload mid-analysis: progress restarts, no stale result.
        state.begin();
        assert_eq!(state, AnalysisState::Analyzing { progress: 0 });

        let mut ticks = 0;
        while !state.advance() {
            ticks += 1;
        }
        assert_eq!(ticks + 1, 10);
    }

    #[test]
    fn test_progress_never_exceeds_100() {
        let mut state = AnalysisState::Analyzing { progress: 95 };
        state.advance();
        match state {
            AnalysisState::Complete { .. } => {}
            ref other => panic!("expected Complete, got {:?}", other),
        }
    }

    #[test]
    fn test_result_serde_round_trip() {
        let json = serde_json::to_string(&simulated_result()).unwrap();
        assert!(json.contains("Leaf Spot Disease"));
        assert!(json.contains("\"diseased\""));

        let back: DetectionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, simulated_result());
    }

    #[test]
    fn test_stats_record_both_statuses() {
        let mut stats = ScanStats::default();
        assert_eq!(stats.total_scans, 24);

        stats.record(&simulated_result());
        assert_eq!(stats.total_scans, 25);
        assert_eq!(stats.diseases_found, 7);
        assert_eq!(stats.healthy_plants, 18);

        let healthy = DetectionResult {
            status: HealthStatus::Healthy,
            ..simulated_result()
        };
        stats.record(&healthy);
        assert_eq!(stats.total_scans, 26);
        assert_eq!(stats.healthy_plants, 19);
    }
}
