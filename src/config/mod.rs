//! Configuration management for Gesture Puzzle
//!
//! Handles loading, parsing and validation of the YAML session file.
//! Every section is optional; missing values fall back to the reference
//! tuning for a unit-scale normalized hand skeleton.

use anyhow::{Context, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::hand::Vec2;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct AppConfig {
    #[serde(default)]
    pub gesture: GestureConfig,
    #[serde(default)]
    pub interaction: InteractionConfig,
    #[serde(default)]
    pub tracking: TrackingConfig,
    #[serde(default)]
    pub puzzle: PuzzleConfig,
    #[serde(default)]
    pub replay: ReplayConfig,
}

/// Gesture classification thresholds
///
/// Distances are in the keypoint pipeline's units and depend on how it
/// normalizes hand scale.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct GestureConfig {
    /// Every fist joint pair must be strictly closer than this
    #[serde(default = "default_fist_tolerance")]
    pub fist_tolerance: f32,
    #[serde(default)]
    pub palm: PalmThresholds,
}

/// Minimum wrist-to-fingertip reach per finger for an open palm
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct PalmThresholds {
    #[serde(default = "default_palm_thumb")]
    pub thumb: f32,
    #[serde(default = "default_palm_index")]
    pub index: f32,
    #[serde(default = "default_palm_middle")]
    pub middle: f32,
    #[serde(default = "default_palm_ring")]
    pub ring: f32,
    #[serde(default = "default_palm_pinky")]
    pub pinky: f32,
}

/// Grab/release tuning for the piece controller
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct InteractionConfig {
    /// Max cursor-to-piece distance for a grab (inclusive)
    #[serde(default = "default_grab_tolerance")]
    pub grab_tolerance: f32,
    /// Max piece-to-slot distance at release for a snap (inclusive)
    #[serde(default = "default_snap_tolerance")]
    pub snap_tolerance: f32,
    #[serde(default)]
    pub grab_selection: GrabSelection,
    #[serde(default)]
    pub none_gesture: NoneGesturePolicy,
}

/// Which candidate a grab picks when several pieces are in reach
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum GrabSelection {
    /// Lowest piece index within reach
    #[default]
    FirstMatch,
    /// Piece closest to the cursor, lowest index on ties
    Nearest,
}

/// How a held piece reacts while the classifier reads no gesture
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum NoneGesturePolicy {
    /// Keep holding and keep dragging
    #[default]
    Ignore,
    /// Keep holding but stop following the cursor
    FreezeDrag,
    /// Release after this many consecutive frames without a gesture
    ReleaseAfter { frames: u32 },
}

/// Keypoint source handling
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct TrackingConfig {
    #[serde(default)]
    pub missing_hand: MissingHandPolicy,
    /// Frames reporting a lower detection confidence count as "no hand"
    #[serde(default = "default_min_confidence")]
    pub min_confidence: f32,
}

/// What the controller does on a frame with no detected hand
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MissingHandPolicy {
    /// Skip the frame entirely
    #[default]
    Skip,
    /// Replay the last detected skeleton
    ReuseLast,
}

/// Piece layout
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct PuzzleConfig {
    pub pieces: Vec<PieceConfig>,
}

/// One draggable piece and its target slot
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct PieceConfig {
    pub start: Vec2,
    pub slot: Vec2,
}

/// Frame replay settings for the binary
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct ReplayConfig {
    #[serde(default = "default_fps")]
    pub fps: u32,
}

impl AppConfig {
    /// Load configuration from file with validation
    pub async fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file: {}", path))?;

        Self::from_yaml_str(&contents)
            .with_context(|| format!("Invalid config file: {}", path))
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        let config: AppConfig =
            serde_yaml::from_str(contents).context("Failed to parse YAML config")?;

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to file
    pub async fn save(&self, path: &str) -> Result<()> {
        let yaml = serde_yaml::to_string(self).context("Failed to serialize config to YAML")?;

        fs::write(path, yaml)
            .await
            .with_context(|| format!("Failed to write config file: {}", path))?;

        Ok(())
    }

    /// JSON schema of the configuration file
    pub fn json_schema() -> Result<String> {
        let schema = schemars::schema_for!(AppConfig);
        serde_json::to_string_pretty(&schema).context("Failed to serialize config schema")
    }

    /// Validate configuration for correctness and consistency
    pub fn validate(&self) -> Result<()> {
        check_positive("gesture.fist_tolerance", self.gesture.fist_tolerance)?;
        let palm = &self.gesture.palm;
        for (name, value) in [
            ("gesture.palm.thumb", palm.thumb),
            ("gesture.palm.index", palm.index),
            ("gesture.palm.middle", palm.middle),
            ("gesture.palm.ring", palm.ring),
            ("gesture.palm.pinky", palm.pinky),
        ] {
            check_positive(name, value)?;
        }

        check_positive("interaction.grab_tolerance", self.interaction.grab_tolerance)?;
        check_positive("interaction.snap_tolerance", self.interaction.snap_tolerance)?;
        if let NoneGesturePolicy::ReleaseAfter { frames: 0 } = self.interaction.none_gesture {
            anyhow::bail!("interaction.none_gesture.frames must be at least 1");
        }

        let min_confidence = self.tracking.min_confidence;
        if !(0.0..=1.0).contains(&min_confidence) {
            anyhow::bail!(
                "tracking.min_confidence {} is invalid (must be 0.0-1.0)",
                min_confidence
            );
        }

        if self.puzzle.pieces.is_empty() {
            anyhow::bail!("At least one puzzle piece must be defined");
        }
        for (idx, piece) in self.puzzle.pieces.iter().enumerate() {
            if !piece.start.is_finite() {
                anyhow::bail!("Piece {} start position must be finite", idx);
            }
            if !piece.slot.is_finite() {
                anyhow::bail!("Piece {} slot position must be finite", idx);
            }
        }

        if self.replay.fps == 0 || self.replay.fps > 1000 {
            anyhow::bail!("replay.fps {} is invalid (must be 1-1000)", self.replay.fps);
        }

        Ok(())
    }
}

fn check_positive(name: &str, value: f32) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        anyhow::bail!("{} must be a positive number, got {}", name, value);
    }
    Ok(())
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            fist_tolerance: default_fist_tolerance(),
            palm: PalmThresholds::default(),
        }
    }
}

impl Default for PalmThresholds {
    fn default() -> Self {
        Self {
            thumb: default_palm_thumb(),
            index: default_palm_index(),
            middle: default_palm_middle(),
            ring: default_palm_ring(),
            pinky: default_palm_pinky(),
        }
    }
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            grab_tolerance: default_grab_tolerance(),
            snap_tolerance: default_snap_tolerance(),
            grab_selection: GrabSelection::default(),
            none_gesture: NoneGesturePolicy::default(),
        }
    }
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            missing_hand: MissingHandPolicy::default(),
            min_confidence: default_min_confidence(),
        }
    }
}

impl Default for PuzzleConfig {
    /// Four pieces scattered on the left, slots in a 2x2 grid on the right
    fn default() -> Self {
        let piece = |start: [f32; 2], slot: [f32; 2]| PieceConfig {
            start: start.into(),
            slot: slot.into(),
        };
        Self {
            pieces: vec![
                piece([0.15, 0.35], [0.65, 0.15]),
                piece([0.25, -0.05], [0.85, 0.15]),
                piece([0.15, -0.35], [0.65, -0.15]),
                piece([0.40, 0.20], [0.85, -0.15]),
            ],
        }
    }
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self { fps: default_fps() }
    }
}

// Default value functions
fn default_fist_tolerance() -> f32 { 0.1 }
fn default_palm_thumb() -> f32 { 0.2 }
fn default_palm_index() -> f32 { 0.3 }
fn default_palm_middle() -> f32 { 0.3 }
fn default_palm_ring() -> f32 { 0.3 }
fn default_palm_pinky() -> f32 { 0.25 }
fn default_grab_tolerance() -> f32 { 0.2 }
fn default_snap_tolerance() -> f32 { 0.05 }
fn default_min_confidence() -> f32 { 0.5 }
fn default_fps() -> u32 { 30 }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        config.validate().unwrap();
        assert_eq!(config.puzzle.pieces.len(), 4);
        assert_eq!(config.gesture.fist_tolerance, 0.1);
        assert_eq!(config.gesture.palm.pinky, 0.25);
        assert_eq!(config.interaction.grab_tolerance, 0.2);
        assert_eq!(config.interaction.snap_tolerance, 0.05);
        assert_eq!(config.interaction.none_gesture, NoneGesturePolicy::Ignore);
        assert_eq!(config.tracking.missing_hand, MissingHandPolicy::Skip);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = AppConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_sections() {
        let yaml = r#"
gesture:
  fist_tolerance: 0.08
  palm:
    thumb: 0.15
interaction:
  grab_selection: nearest
  none_gesture:
    mode: release_after
    frames: 15
tracking:
  missing_hand: reuse_last
puzzle:
  pieces:
    - start: { x: 0.0, y: 0.0 }
      slot: { x: 0.5, y: 0.5 }
"#;
        let config = AppConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.gesture.fist_tolerance, 0.08);
        assert_eq!(config.gesture.palm.thumb, 0.15);
        assert_eq!(config.gesture.palm.index, 0.3);
        assert_eq!(config.interaction.grab_selection, GrabSelection::Nearest);
        assert_eq!(
            config.interaction.none_gesture,
            NoneGesturePolicy::ReleaseAfter { frames: 15 }
        );
        assert_eq!(config.tracking.missing_hand, MissingHandPolicy::ReuseLast);
        assert_eq!(config.puzzle.pieces.len(), 1);
        assert_eq!(config.puzzle.pieces[0].slot, Vec2::new(0.5, 0.5));
    }

    #[test]
    fn test_freeze_drag_policy_parses() {
        let config =
            AppConfig::from_yaml_str("interaction:\n  none_gesture:\n    mode: freeze_drag\n")
                .unwrap();
        assert_eq!(config.interaction.none_gesture, NoneGesturePolicy::FreezeDrag);
    }

    #[test]
    fn test_rejects_non_positive_tolerance() {
        let err = AppConfig::from_yaml_str("interaction:\n  snap_tolerance: 0.0\n").unwrap_err();
        assert!(err.to_string().contains("interaction.snap_tolerance"));

        let err = AppConfig::from_yaml_str("gesture:\n  palm:\n    ring: -0.3\n").unwrap_err();
        assert!(err.to_string().contains("gesture.palm.ring"));
    }

    #[test]
    fn test_rejects_empty_pieces() {
        let err = AppConfig::from_yaml_str("puzzle:\n  pieces: []\n").unwrap_err();
        assert!(err.to_string().contains("At least one puzzle piece"));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let yaml = "interaction:\n  none_gesture:\n    mode: release_after\n    frames: 0\n";
        assert!(AppConfig::from_yaml_str(yaml).is_err());
    }

    #[test]
    fn test_rejects_bad_confidence_and_fps() {
        assert!(AppConfig::from_yaml_str("tracking:\n  min_confidence: 1.5\n").is_err());
        assert!(AppConfig::from_yaml_str("replay:\n  fps: 0\n").is_err());
    }

    #[test]
    fn test_rejects_unknown_policy() {
        assert!(AppConfig::from_yaml_str("tracking:\n  missing_hand: guess\n").is_err());
    }

    #[test]
    fn test_schema_mentions_sections() {
        let schema = AppConfig::json_schema().unwrap();
        assert!(schema.contains("interaction"));
        assert!(schema.contains("fist_tolerance"));
    }

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("puzzle.yaml");
        let path = path.to_str().unwrap();

        let mut config = AppConfig::default();
        config.interaction.none_gesture = NoneGesturePolicy::ReleaseAfter { frames: 10 };
        config.save(path).await.unwrap();

        let loaded = AppConfig::load(path).await.unwrap();
        assert_eq!(loaded, config);
    }

    #[tokio::test]
    async fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");
        let err = AppConfig::load(path.to_str().unwrap()).await.unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
