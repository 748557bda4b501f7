//! Domain models for the media catalog
//!
//! Entities mirror the backend's wire shape. Identifiers are assigned by the
//! backend and treated as opaque; the client never generates or mutates one.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an exercise, as issued by the backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExerciseId(String);

impl ExerciseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExerciseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a music track, as issued by the backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MusicId(String);

impl MusicId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MusicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Exercise difficulty level
///
/// The admin UI offers exactly three levels, but the backend is free to hold
/// anything; unknown values round-trip through `Other` so a stray record can
/// never fail decoding or rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Other(String),
}

impl Difficulty {
    /// The levels offered for selection, in display order.
    pub const LEVELS: [&'static str; 3] = ["Beginner", "Intermediate", "Advanced"];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Other(value) => value,
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Beginner
    }
}

impl From<String> for Difficulty {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Beginner" => Self::Beginner,
            "Intermediate" => Self::Intermediate,
            "Advanced" => Self::Advanced,
            _ => Self::Other(value),
        }
    }
}

impl From<Difficulty> for String {
    fn from(value: Difficulty) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A guided exercise with an uploaded demonstration video
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    #[serde(rename = "_id")]
    pub id: ExerciseId,

    #[serde(rename = "exercise_name")]
    pub name: String,

    pub category: String,

    /// Free-form, e.g. "10 min"
    pub duration: String,

    #[serde(default)]
    pub difficulty: Difficulty,

    #[serde(default)]
    pub description: String,

    /// Ordered steps; empty when none were provided
    #[serde(default)]
    pub instructions: Vec<String>,

    /// Stored-media reference as recorded by the backend
    #[serde(default)]
    pub file_path: String,

    /// Server-composed playable URL, when the list response carries one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

/// A relaxation music track with an uploaded audio file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Music {
    #[serde(rename = "_id")]
    pub id: MusicId,

    #[serde(rename = "music_name")]
    pub name: String,

    pub author: String,

    pub category: String,

    #[serde(default)]
    pub file_path: String,
}

/// Anything carrying a category, for the shared index/filter derivations
pub trait Categorized {
    fn category(&self) -> &str;
}

impl Categorized for Exercise {
    fn category(&self) -> &str {
        &self.category
    }
}

impl Categorized for Music {
    fn category(&self) -> &str {
        &self.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_exercise_wire_shape() {
        let json = r#"{
            "_id": "665f1c2ab8d3e4f5a6b7c8d9",
            "exercise_name": "Morning Stretch",
            "category": "Stretching",
            "duration": "10 min",
            "difficulty": "Beginner",
            "description": "Gentle full-body warmup",
            "instructions": ["Stand straight", "Reach arms overhead"],
            "file_path": "665f1c2ab8d3e4f5a6b7c8d9.mp4",
            "video_url": "/uploads/exercise_videos/665f1c2ab8d3e4f5a6b7c8d9.mp4"
        }"#;

        let exercise: Exercise = serde_json::from_str(json).unwrap();
        assert_eq!(exercise.id.as_str(), "665f1c2ab8d3e4f5a6b7c8d9");
        assert_eq!(exercise.name, "Morning Stretch");
        assert_eq!(exercise.difficulty, Difficulty::Beginner);
        assert_eq!(exercise.instructions.len(), 2);
        assert!(exercise.video_url.is_some());
    }

    #[test]
    fn test_decode_exercise_minimal_fields() {
        let json = r#"{
            "_id": "abc",
            "exercise_name": "Plank",
            "category": "Core",
            "duration": "1 min"
        }"#;

        let exercise: Exercise = serde_json::from_str(json).unwrap();
        assert_eq!(exercise.difficulty, Difficulty::Beginner);
        assert!(exercise.description.is_empty());
        assert!(exercise.instructions.is_empty());
        assert!(exercise.video_url.is_none());
    }

    #[test]
    fn test_unknown_difficulty_passes_through() {
        let json = r#"{
            "_id": "abc",
            "exercise_name": "Sprint",
            "category": "Cardio",
            "duration": "5 min",
            "difficulty": "Expert"
        }"#;

        let exercise: Exercise = serde_json::from_str(json).unwrap();
        assert_eq!(exercise.difficulty, Difficulty::Other("Expert".to_string()));
        assert_eq!(exercise.difficulty.as_str(), "Expert");

        // And it survives re-serialization unchanged.
        let round = serde_json::to_value(&exercise).unwrap();
        assert_eq!(round["difficulty"], "Expert");
    }

    #[test]
    fn test_decode_music_wire_shape() {
        let json = r#"{
            "_id": "770a1b2c",
            "music_name": "Calm Waters",
            "author": "A. Composer",
            "category": "Focus",
            "file_path": "uploads/770a1b2c.mp3"
        }"#;

        let music: Music = serde_json::from_str(json).unwrap();
        assert_eq!(music.id.as_str(), "770a1b2c");
        assert_eq!(music.name, "Calm Waters");
        assert_eq!(music.category(), "Focus");
    }
}
