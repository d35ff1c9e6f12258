//! Courses a student is enrolled in, shown on the account dashboard.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogItem, ItemKind, Level, MagicDirection, ProgressStatus};
use crate::ids::ItemId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurriculumCourse {
    pub id: ItemId,
    pub title: String,
    pub direction: MagicDirection,
    pub level: Level,
    pub lessons_total: u16,
    pub lessons_completed: u16,
    pub enrolled_on: NaiveDate,
}

impl CurriculumCourse {
    /// Completion percentage, rounded down and capped at 100.
    pub fn progress_percent(&self) -> u8 {
        if self.lessons_total == 0 {
            return 0;
        }
        let done = u32::from(self.lessons_completed.min(self.lessons_total));
        (done * 100 / u32::from(self.lessons_total)) as u8
    }

    pub fn status(&self) -> ProgressStatus {
        match self.progress_percent() {
            0 => ProgressStatus::NotStarted,
            100 => ProgressStatus::Completed,
            _ => ProgressStatus::InProgress,
        }
    }
}

impl CatalogItem for CurriculumCourse {
    const KIND: ItemKind = ItemKind::Curriculum;

    fn id(&self) -> &ItemId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn date(&self) -> Option<NaiveDate> {
        Some(self.enrolled_on)
    }

    fn progress(&self) -> Option<u8> {
        Some(self.progress_percent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(total: u16, done: u16) -> CurriculumCourse {
        CurriculumCourse {
            id: ItemId::new("cc1"),
            title: "Основы Таро".to_string(),
            direction: MagicDirection::Tarot,
            level: Level::Beginner,
            lessons_total: total,
            lessons_completed: done,
            enrolled_on: NaiveDate::default(),
        }
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(course(12, 3).progress_percent(), 25);
        assert_eq!(course(3, 1).progress_percent(), 33);
        assert_eq!(course(0, 0).progress_percent(), 0);
        assert_eq!(course(4, 9).progress_percent(), 100);
    }

    #[test]
    fn test_status_follows_progress() {
        assert_eq!(course(10, 0).status(), ProgressStatus::NotStarted);
        assert_eq!(course(10, 5).status(), ProgressStatus::InProgress);
        assert_eq!(course(10, 10).status(), ProgressStatus::Completed);
    }
}
