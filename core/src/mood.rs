//! Pet moods and the animation descriptor each mood is drawn with.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::verb::Verb;

/// How long a mood animation runs, in seconds.
pub const ANIMATION_DURATION_SECS: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Excited,
    Transformed,
    Changed,
    Sad,
    #[default]
    Neutral,
}

impl Mood {
    /// Mood for a raw method name. Anything but the exact upper-case name of
    /// one of the five verbs is neutral.
    pub fn for_method(method: &str) -> Mood {
        Verb::ALL
            .into_iter()
            .find(|verb| verb.as_str() == method)
            .map_or(Mood::Neutral, Verb::mood)
    }

    /// Lookup by mood name, falling back to neutral.
    pub fn from_name(name: &str) -> Mood {
        match name {
            "happy" => Mood::Happy,
            "excited" => Mood::Excited,
            "transformed" => Mood::Transformed,
            "changed" => Mood::Changed,
            "sad" => Mood::Sad,
            _ => Mood::Neutral,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Excited => "excited",
            Mood::Transformed => "transformed",
            Mood::Changed => "changed",
            Mood::Sad => "sad",
            Mood::Neutral => "neutral",
        }
    }

    pub fn animation(self) -> Animation {
        Animation::for_mood(self)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyframe tracks for one mood animation. Empty tracks are not animated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Animation {
    pub scale: Vec<f32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rotate: Vec<f32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub y: Vec<f32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub opacity: Vec<f32>,
    pub duration_secs: f32,
}

impl Animation {
    fn scale(scale: &[f32]) -> Self {
        Self {
            scale: scale.to_vec(),
            rotate: Vec::new(),
            y: Vec::new(),
            opacity: Vec::new(),
            duration_secs: ANIMATION_DURATION_SECS,
        }
    }

    pub fn for_mood(mood: Mood) -> Self {
        match mood {
            Mood::Happy => Self {
                rotate: vec![0.0, 5.0, -5.0, 0.0],
                ..Self::scale(&[1.0, 1.2, 1.0])
            },
            Mood::Excited => Self {
                y: vec![0.0, -10.0, 0.0],
                ..Self::scale(&[1.0, 1.3, 1.0])
            },
            Mood::Transformed => Self::scale(&[1.0, 1.1, 1.2, 1.0]),
            Mood::Changed => Self::scale(&[1.0, 1.05, 1.0]),
            Mood::Sad => Self {
                opacity: vec![1.0, 0.7, 1.0],
                ..Self::scale(&[1.0, 0.9, 1.0])
            },
            Mood::Neutral => Self::neutral(),
        }
    }

    /// Animation for a mood given by name; unknown names get the neutral one.
    pub fn for_mood_name(name: &str) -> Self {
        Self::for_mood(Mood::from_name(name))
    }

    pub fn neutral() -> Self {
        Self::scale(&[1.0])
    }

    /// A single-keyframe scale of 1 with no other tracks is a still pose.
    pub fn is_still(&self) -> bool {
        self.scale == [1.0] && self.rotate.is_empty() && self.y.is_empty() && self.opacity.is_empty()
    }
}
