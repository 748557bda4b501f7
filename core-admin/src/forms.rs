//! Create-form and staged-edit field state
//!
//! Plain field structs per media kind, validated client-side before any
//! network call. Instructions are edited as one newline-delimited text and
//! recomposed into an ordered step sequence on submission.

use core_catalog::models::{Difficulty, Exercise, Music};
use core_catalog::repositories::{ExercisePatch, MediaUpload, MusicPatch, NewExercise, NewMusic};
use core_catalog::{CatalogError, Result};

/// Create-form state for one media kind.
///
/// `draft()` performs the required-field validation and converts the form
/// into a submission payload; a failed draft means no request is attempted.
pub trait CreateForm: Default {
    type Draft: Send;

    fn draft(&self) -> Result<Self::Draft>;

    /// Reset every field to its default value.
    fn clear(&mut self) {
        *self = Self::default();
    }
}

fn require(value: &str, field: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::Validation {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Split instruction text into ordered steps, one per line.
///
/// Interior blank lines are kept as empty steps; a single trailing newline
/// does not produce a trailing empty step.
pub fn split_steps(text: &str) -> Vec<String> {
    let text = text.strip_suffix('\n').unwrap_or(text);
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n').map(str::to_string).collect()
}

/// Join steps back into editable text, one per line.
pub fn join_steps(steps: &[String]) -> String {
    steps.join("\n")
}

/// Fields of the "Add New Exercise" form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseForm {
    pub name: String,
    pub category: String,
    pub duration: String,
    pub difficulty: Difficulty,
    pub description: String,
    /// One step per line
    pub instructions: String,
    pub media: Option<MediaUpload>,
}

impl Default for ExerciseForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: String::new(),
            duration: String::new(),
            difficulty: Difficulty::Beginner,
            description: String::new(),
            instructions: String::new(),
            media: None,
        }
    }
}

impl CreateForm for ExerciseForm {
    type Draft = NewExercise;

    fn draft(&self) -> Result<NewExercise> {
        let media = self.media.clone().ok_or_else(|| CatalogError::Validation {
            field: "media file".to_string(),
        })?;
        require(&self.name, "name")?;
        require(&self.category, "category")?;
        require(&self.duration, "duration")?;

        Ok(NewExercise {
            name: self.name.clone(),
            category: self.category.clone(),
            duration: self.duration.clone(),
            difficulty: self.difficulty.clone(),
            description: self.description.clone(),
            instructions: split_steps(&self.instructions),
            media,
        })
    }
}

/// Fields of the "Upload Music" form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MusicForm {
    pub name: String,
    pub author: String,
    pub category: String,
    pub media: Option<MediaUpload>,
}

impl CreateForm for MusicForm {
    type Draft = NewMusic;

    fn draft(&self) -> Result<NewMusic> {
        let media = self.media.clone().ok_or_else(|| CatalogError::Validation {
            field: "media file".to_string(),
        })?;
        require(&self.name, "name")?;
        require(&self.author, "author")?;
        require(&self.category, "category")?;

        Ok(NewMusic {
            name: self.name.clone(),
            author: self.author.clone(),
            category: self.category.clone(),
            media,
        })
    }
}

/// Staged copy of an exercise's editable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseStaged {
    pub name: String,
    pub category: String,
    pub duration: String,
    pub difficulty: Difficulty,
    pub description: String,
    /// One step per line
    pub instructions: String,
}

impl ExerciseStaged {
    pub fn from_entity(exercise: &Exercise) -> Self {
        Self {
            name: exercise.name.clone(),
            category: exercise.category.clone(),
            duration: exercise.duration.clone(),
            difficulty: exercise.difficulty.clone(),
            description: exercise.description.clone(),
            instructions: join_steps(&exercise.instructions),
        }
    }

    pub fn validate(&self) -> Result<()> {
        require(&self.name, "name")?;
        require(&self.category, "category")?;
        require(&self.duration, "duration")
    }

    pub fn to_patch(&self) -> ExercisePatch {
        ExercisePatch {
            exercise_name: self.name.clone(),
            category: self.category.clone(),
            duration: self.duration.clone(),
            difficulty: self.difficulty.clone(),
            description: self.description.clone(),
            instructions: split_steps(&self.instructions),
        }
    }
}

/// Staged copy of a music track's editable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MusicStaged {
    pub name: String,
    pub author: String,
    pub category: String,
}

impl MusicStaged {
    pub fn from_entity(music: &Music) -> Self {
        Self {
            name: music.name.clone(),
            author: music.author.clone(),
            category: music.category.clone(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        require(&self.name, "name")?;
        require(&self.author, "author")?;
        require(&self.category, "category")
    }

    pub fn to_patch(&self) -> MusicPatch {
        MusicPatch {
            music_name: self.name.clone(),
            author: self.author.clone(),
            category: self.category.clone(),
        }
    }
}
