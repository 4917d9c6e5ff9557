use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Category assigned to exercises the catalog does not know
pub const DEFAULT_CATEGORY: &str = "Other";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseInfo {
    pub category: String,
}

/// Read-only exercise lookup used to tag parsed entries with a category
pub trait ExerciseLookup {
    fn lookup(&self, name: &str) -> Option<ExerciseInfo>;

    /// Category for `name`, falling back to [`DEFAULT_CATEGORY`]
    fn category_for(&self, name: &str) -> String {
        self.lookup(name)
            .map(|info| info.category)
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string())
    }
}

impl<T: ExerciseLookup + ?Sized> ExerciseLookup for &T {
    fn lookup(&self, name: &str) -> Option<ExerciseInfo> {
        (**self).lookup(name)
    }
}

/// In-memory exercise library keyed by exact exercise name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExerciseCatalog {
    categories: HashMap<String, String>,
}

const BUILTIN_EXERCISES: &[(&str, &str)] = &[
    ("Barbell Squat", "Legs"),
    ("Front Squat", "Legs"),
    ("Bulgarian Split Squat", "Legs"),
    ("Flat Barbell Bench Press", "Chest"),
    ("Incline Dumbbell Press", "Chest"),
    ("Overhead Press", "Triceps"),
    ("Parallel Bar Triceps Dip", "Triceps"),
    ("Deadlift", "Back"),
    ("Barbell Row", "Back"),
    ("Dumbbell Row", "Back"),
    ("Pull Up", "Back"),
    ("Pull Ups", "Back"),
    ("Pull-ups", "Back"),
    ("Decline Crunch", "Core"),
    ("Landmines", "Core"),
    ("Cable side bend", "Core"),
];

impl ExerciseCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The default exercise library
    pub fn builtin() -> Self {
        BUILTIN_EXERCISES
            .iter()
            .map(|(name, category)| (name.to_string(), category.to_string()))
            .collect()
    }

    pub fn insert(&mut self, name: impl Into<String>, category: impl Into<String>) {
        self.categories.insert(name.into(), category.into());
    }

    /// Add every entry of `other`, replacing existing categories
    pub fn merge(&mut self, other: ExerciseCatalog) {
        self.categories.extend(other.categories);
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl FromIterator<(String, String)> for ExerciseCatalog {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            categories: iter.into_iter().collect(),
        }
    }
}

impl ExerciseLookup for ExerciseCatalog {
    fn lookup(&self, name: &str) -> Option<ExerciseInfo> {
        self.categories.get(name).map(|category| ExerciseInfo {
            category: category.clone(),
        })
    }
}
