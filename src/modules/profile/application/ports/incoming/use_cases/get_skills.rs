use crate::content::application::domain::Skill;
use crate::content::application::search::SkillGroups;

//
// ──────────────────────────────────────────────────────────
// Incoming Ports (Use Cases)
// ──────────────────────────────────────────────────────────
//

/// Flat skill list in source order, e.g. the home page's top six.
pub trait GetSkillsUseCase: Send + Sync {
    fn execute(&self, limit: Option<usize>) -> Vec<Skill>;
}

/// Skills sectioned by category for the about page.
pub trait GetGroupedSkillsUseCase: Send + Sync {
    fn execute(&self) -> SkillGroups;
}
