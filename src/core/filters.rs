use crate::models::{Goal, Label, Tool};

/// Case-insensitive substring test against a set of label fields
#[inline]
fn any_label_contains<F>(labels: &[Label], field: F, needle: &str) -> bool
where
    F: Fn(&Label) -> &str,
{
    let needle = needle.to_lowercase();
    labels
        .iter()
        .any(|label| field(label).to_lowercase().contains(&needle))
}

/// Count how many of the goal's keyword family appear in the tool's
/// category or tag slugs
#[inline]
pub fn goal_keyword_hits(tool: &Tool, goal: &Goal) -> usize {
    goal.keyword_family()
        .iter()
        .filter(|term| {
            any_label_contains(&tool.categories, |c| c.slug.as_str(), term)
                || any_label_contains(&tool.tags, |t| t.slug.as_str(), term)
        })
        .count()
}

/// Check whether a technology is mentioned by a tag name or the description
#[inline]
pub fn supports_technology(tool: &Tool, tech: &str) -> bool {
    any_label_contains(&tool.tags, |t| t.name.as_str(), tech)
        || tool.description.to_lowercase().contains(&tech.to_lowercase())
}

/// Check whether a requested feature keyword appears in any tag slug
#[inline]
pub fn has_feature(tool: &Tool, feature: &str) -> bool {
    any_label_contains(&tool.tags, |t| t.slug.as_str(), feature)
}

/// A tool is beginner-friendly when any tag slug mentions "beginner"
#[inline]
pub fn is_beginner_friendly(tool: &Tool) -> bool {
    any_label_contains(&tool.tags, |t| t.slug.as_str(), "beginner")
}
