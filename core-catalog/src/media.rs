//! Playable URL resolution for stored media references
//!
//! The backend records a media reference per entity and serves the files
//! statically under `/uploads/`. Playable URLs are composed from the final
//! path segment of the reference; no check is made that the URL resolves.

use crate::models::{Exercise, Music};

/// Resolves playable URLs against the backend's static file routes.
#[derive(Debug, Clone)]
pub struct MediaServer {
    base_url: String,
}

impl MediaServer {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Playable URL for an exercise video, or `None` when the entity has no
    /// stored media. A server-composed `video_url` takes precedence over
    /// composing one from the file reference.
    pub fn exercise_video_url(&self, exercise: &Exercise) -> Option<String> {
        if let Some(url) = &exercise.video_url {
            return Some(self.absolute(url));
        }

        file_name(&exercise.file_path)
            .map(|name| format!("{}/uploads/exercise_videos/{}", self.base_url, name))
    }

    /// Playable URL for a music track, or `None` when the entity has no
    /// stored media.
    pub fn music_audio_url(&self, music: &Music) -> Option<String> {
        file_name(&music.file_path).map(|name| format!("{}/uploads/{}", self.base_url, name))
    }

    fn absolute(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

/// Final path segment of a stored-media reference.
fn file_name(path: &str) -> Option<&str> {
    path.rsplit('/').next().filter(|segment| !segment.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, ExerciseId, MusicId};

    fn exercise(file_path: &str, video_url: Option<&str>) -> Exercise {
        Exercise {
            id: ExerciseId::new("e1"),
            name: "Stretch".to_string(),
            category: "Stretching".to_string(),
            duration: "10 min".to_string(),
            difficulty: Difficulty::Beginner,
            description: String::new(),
            instructions: Vec::new(),
            file_path: file_path.to_string(),
            video_url: video_url.map(str::to_string),
        }
    }

    fn music(file_path: &str) -> Music {
        Music {
            id: MusicId::new("m1"),
            name: "Calm".to_string(),
            author: "A".to_string(),
            category: "Focus".to_string(),
            file_path: file_path.to_string(),
        }
    }

    #[test]
    fn test_music_url_uses_last_path_segment() {
        let server = MediaServer::new("http://localhost:5000");
        let url = server.music_audio_url(&music("some/dir/770a.mp3"));
        assert_eq!(url.as_deref(), Some("http://localhost:5000/uploads/770a.mp3"));
    }

    #[test]
    fn test_exercise_url_composed_from_reference() {
        let server = MediaServer::new("http://localhost:5000/");
        let url = server.exercise_video_url(&exercise("665f.mp4", None));
        assert_eq!(
            url.as_deref(),
            Some("http://localhost:5000/uploads/exercise_videos/665f.mp4")
        );
    }

    #[test]
    fn test_exercise_url_prefers_server_supplied() {
        let server = MediaServer::new("http://localhost:5000");
        let url = server.exercise_video_url(&exercise(
            "665f.mp4",
            Some("/uploads/exercise_videos/665f.mp4"),
        ));
        assert_eq!(
            url.as_deref(),
            Some("http://localhost:5000/uploads/exercise_videos/665f.mp4")
        );
    }

    #[test]
    fn test_missing_media_reference_yields_none() {
        let server = MediaServer::new("http://localhost:5000");
        assert!(server.music_audio_url(&music("")).is_none());
        assert!(server.exercise_video_url(&exercise("", None)).is_none());
    }
}
