use crate::models::{Budget, ExperienceLevel, Goal, PricingType, QueryProfile, Tool};
use crate::core::filters::{goal_keyword_hits, has_feature, is_beginner_friendly, supports_technology};

/// Contribution of one criterion to the total score
#[derive(Debug, Clone, PartialEq)]
pub struct CriterionScore {
    pub points: f64,
    pub reason: Option<String>,
}

impl CriterionScore {
    fn silent(points: f64) -> Self {
        Self { points, reason: None }
    }

    fn explained(points: f64, reason: impl Into<String>) -> Self {
        Self {
            points,
            reason: Some(reason.into()),
        }
    }
}

/// Calculate a match score (0-100) and the reasons behind it
///
/// Scoring formula:
/// score = round(
///     budget_score +               # up to 30
///     goal_score +                 # up to 25
///     tech_score +                 # up to 20
///     feature_score +              # up to 15
///     experience_score             # up to 10
/// )
///
/// Reasons keep the criterion order above.
pub fn calculate_match_score(tool: &Tool, profile: &QueryProfile) -> (u8, Vec<String>) {
    let criteria = [
        calculate_budget_score(tool, &profile.budget),
        calculate_goal_score(tool, &profile.primary_goal),
        calculate_tech_score(tool, &profile.tech_stack),
        calculate_feature_score(tool, &profile.features),
        calculate_experience_score(tool, &profile.experience_level),
    ];

    let total: f64 = criteria.iter().map(|c| c.points).sum();
    debug_assert!((0.0..=100.0).contains(&total));

    let reasons = criteria.into_iter().filter_map(|c| c.reason).collect();

    (total.round() as u8, reasons)
}

/// Budget fit (0-30)
pub fn calculate_budget_score(tool: &Tool, budget: &Budget) -> CriterionScore {
    let pricing = tool.pricing_type;

    match budget {
        Budget::Free => {
            if pricing.is_free() {
                CriterionScore::explained(30.0, "✓ Completely free")
            } else if tool.has_free_tier || pricing == PricingType::Freemium {
                CriterionScore::explained(20.0, "✓ Has free tier available")
            } else {
                CriterionScore::explained(0.0, "✗ Requires payment")
            }
        }
        Budget::Under20 => {
            if pricing.is_free() || tool.has_free_tier {
                CriterionScore::explained(30.0, "✓ Fits your budget (free tier)")
            } else if matches!(pricing, PricingType::Freemium | PricingType::Subscription) {
                CriterionScore::explained(25.0, "✓ Likely within $20/month")
            } else {
                CriterionScore::silent(15.0)
            }
        }
        Budget::Under50 => {
            if pricing != PricingType::Paid {
                CriterionScore::explained(30.0, "✓ Within your budget")
            } else {
                CriterionScore::silent(20.0)
            }
        }
        Budget::Flexible => {
            CriterionScore::explained(30.0, "✓ Flexible budget - all options available")
        }
        Budget::Other(_) => CriterionScore::silent(15.0),
    }
}

/// Goal alignment (0-25)
pub fn calculate_goal_score(tool: &Tool, goal: &Goal) -> CriterionScore {
    match goal_keyword_hits(tool, goal) {
        0 => CriterionScore::silent(0.0),
        1 => CriterionScore::explained(15.0, format!("✓ Good for {}", goal.as_str())),
        _ => CriterionScore::explained(25.0, format!("✓ Perfect for {}", goal.as_str())),
    }
}

/// Tech stack compatibility (0-20)
pub fn calculate_tech_score(tool: &Tool, tech_stack: &[String]) -> CriterionScore {
    if tech_stack.is_empty() {
        return CriterionScore::explained(10.0, "○ Tech stack not specified");
    }

    let compatible: Vec<&str> = tech_stack
        .iter()
        .filter(|tech| supports_technology(tool, tech))
        .map(String::as_str)
        .collect();

    if compatible.len() >= tech_stack.len() {
        CriterionScore::explained(20.0, format!("✓ Compatible with {}", compatible.join(", ")))
    } else if !compatible.is_empty() {
        CriterionScore::explained(10.0, format!("✓ Works with {}", compatible.join(", ")))
    } else {
        CriterionScore::silent(5.0)
    }
}

/// Requested feature coverage (0-15)
pub fn calculate_feature_score(tool: &Tool, features: &[String]) -> CriterionScore {
    if features.is_empty() {
        return CriterionScore::silent(7.0);
    }

    let matched = features.iter().filter(|f| has_feature(tool, f)).count();

    if matched >= features.len() {
        CriterionScore::explained(15.0, "✓ Has all requested features")
    } else if matched > 0 {
        CriterionScore::explained(
            10.0,
            format!("✓ Has {} of {} features", matched, features.len()),
        )
    } else {
        CriterionScore::silent(0.0)
    }
}

/// Experience level fit (0-10)
pub fn calculate_experience_score(tool: &Tool, level: &ExperienceLevel) -> CriterionScore {
    let beginner_friendly = is_beginner_friendly(tool);

    match level {
        ExperienceLevel::Beginner if beginner_friendly => {
            CriterionScore::explained(10.0, "✓ Beginner-friendly")
        }
        ExperienceLevel::Advanced if !beginner_friendly => {
            CriterionScore::explained(10.0, "✓ Suitable for advanced users")
        }
        _ => CriterionScore::silent(7.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Label, ProjectType};

    fn create_test_tool(pricing_type: PricingType, has_free_tier: bool) -> Tool {
        Tool {
            id: "tool_1".to_string(),
            name: "Test Tool".to_string(),
            slug: "test-tool".to_string(),
            description: "An AI assistant for JavaScript developers".to_string(),
            long_description: None,
            website_url: "https://example.com".to_string(),
            logo_url: None,
            pricing_type,
            pricing_details: None,
            has_free_tier,
            categories: vec![Label::new("Development", "development")],
            tags: vec![
                Label::new("Code Completion", "code-completion"),
                Label::new("Beginner Friendly", "beginner-friendly"),
                Label::new("VS Code", "vscode"),
            ],
            average_rating: None,
            review_count: 0,
            favorite_count: 0,
            view_count: 0,
            created_at: None,
        }
    }

    fn create_test_profile() -> QueryProfile {
        QueryProfile {
            project_type: ProjectType::WebApp,
            tech_stack: vec![],
            budget: Budget::Flexible,
            experience_level: ExperienceLevel::Intermediate,
            primary_goal: Goal::Coding,
            features: vec![],
        }
    }

    fn techs(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_budget_free_tier_requested() {
        let open = create_test_tool(PricingType::OpenSource, false);
        let freemium = create_test_tool(PricingType::Freemium, false);
        let paid_with_trial = create_test_tool(PricingType::Paid, true);
        let paid = create_test_tool(PricingType::Paid, false);

        assert_eq!(calculate_budget_score(&open, &Budget::Free).points, 30.0);
        assert_eq!(calculate_budget_score(&freemium, &Budget::Free).points, 20.0);
        assert_eq!(calculate_budget_score(&paid_with_trial, &Budget::Free).points, 20.0);

        let paid_score = calculate_budget_score(&paid, &Budget::Free);
        assert_eq!(paid_score.points, 0.0);
        assert_eq!(paid_score.reason.as_deref(), Some("✗ Requires payment"));
    }

    #[test]
    fn test_budget_under_20() {
        let subscription = create_test_tool(PricingType::Subscription, false);
        let subscription_free_tier = create_test_tool(PricingType::Subscription, true);
        let paid = create_test_tool(PricingType::Paid, false);

        assert_eq!(calculate_budget_score(&subscription, &Budget::Under20).points, 25.0);
        assert_eq!(calculate_budget_score(&subscription_free_tier, &Budget::Under20).points, 30.0);
        assert_eq!(
            calculate_budget_score(&paid, &Budget::Under20),
            CriterionScore { points: 15.0, reason: None }
        );
    }

    #[test]
    fn test_budget_under_50_paid_is_silent() {
        let paid = create_test_tool(PricingType::Paid, true);
        let score = calculate_budget_score(&paid, &Budget::Under50);

        assert_eq!(score.points, 20.0);
        assert!(score.reason.is_none());
    }

    #[test]
    fn test_budget_flexible_always_full() {
        for pricing in PricingType::ALL {
            let tool = create_test_tool(pricing, false);
            assert_eq!(calculate_budget_score(&tool, &Budget::Flexible).points, 30.0);
        }
    }

    #[test]
    fn test_budget_unknown_is_neutral() {
        let tool = create_test_tool(PricingType::Free, true);
        let score = calculate_budget_score(&tool, &Budget::Other("unlimited".to_string()));

        assert_eq!(score, CriterionScore { points: 15.0, reason: None });
    }

    #[test]
    fn test_goal_score_bands() {
        let tool = create_test_tool(PricingType::Free, false);

        let coding = calculate_goal_score(&tool, &Goal::Coding);
        assert_eq!(coding.points, 25.0);
        assert_eq!(coding.reason.as_deref(), Some("✓ Perfect for coding"));

        let mut design_tool = tool.clone();
        design_tool.categories = vec![Label::new("Design", "design")];
        let design = calculate_goal_score(&design_tool, &Goal::Design);
        assert_eq!(design.points, 15.0);
        assert_eq!(design.reason.as_deref(), Some("✓ Good for design"));

        assert_eq!(calculate_goal_score(&tool, &Goal::Writing), CriterionScore { points: 0.0, reason: None });
    }

    #[test]
    fn test_tech_score_bands() {
        let tool = create_test_tool(PricingType::Free, false);

        let unspecified = calculate_tech_score(&tool, &[]);
        assert_eq!(unspecified.points, 10.0);
        assert_eq!(unspecified.reason.as_deref(), Some("○ Tech stack not specified"));

        let all = calculate_tech_score(&tool, &techs(&["JavaScript", "VS Code"]));
        assert_eq!(all.points, 20.0);
        assert_eq!(all.reason.as_deref(), Some("✓ Compatible with JavaScript, VS Code"));

        let partial = calculate_tech_score(&tool, &techs(&["javascript", "go"]));
        assert_eq!(partial.points, 10.0);
        assert_eq!(partial.reason.as_deref(), Some("✓ Works with javascript"));

        assert_eq!(
            calculate_tech_score(&tool, &techs(&["haskell"])),
            CriterionScore { points: 5.0, reason: None }
        );
    }

    #[test]
    fn test_feature_score_bands() {
        let tool = create_test_tool(PricingType::Free, false);

        assert_eq!(calculate_feature_score(&tool, &[]), CriterionScore { points: 7.0, reason: None });

        let all = calculate_feature_score(&tool, &techs(&["code-completion", "VSCODE"]));
        assert_eq!(all.points, 15.0);
        assert_eq!(all.reason.as_deref(), Some("✓ Has all requested features"));

        let some = calculate_feature_score(&tool, &techs(&["vscode", "voice", "chat"]));
        assert_eq!(some.points, 10.0);
        assert_eq!(some.reason.as_deref(), Some("✓ Has 1 of 3 features"));

        assert_eq!(calculate_feature_score(&tool, &techs(&["voice"])).points, 0.0);
    }

    #[test]
    fn test_experience_score() {
        let friendly = create_test_tool(PricingType::Free, false);
        let mut expert = friendly.clone();
        expert.tags.retain(|t| !t.slug.contains("beginner"));

        assert_eq!(calculate_experience_score(&friendly, &ExperienceLevel::Beginner).points, 10.0);
        assert_eq!(calculate_experience_score(&expert, &ExperienceLevel::Beginner).points, 7.0);
        assert_eq!(calculate_experience_score(&expert, &ExperienceLevel::Advanced).points, 10.0);
        assert_eq!(calculate_experience_score(&friendly, &ExperienceLevel::Advanced).points, 7.0);

        let intermediate = calculate_experience_score(&friendly, &ExperienceLevel::Intermediate);
        assert_eq!(intermediate, CriterionScore { points: 7.0, reason: None });
    }

    #[test]
    fn test_calculate_match_score_sums_and_orders_reasons() {
        let tool = create_test_tool(PricingType::Free, false);
        let mut profile = create_test_profile();
        profile.experience_level = ExperienceLevel::Beginner;

        let (score, reasons) = calculate_match_score(&tool, &profile);

        // 30 + 25 + 10 + 7 + 10
        assert_eq!(score, 82);
        assert_eq!(
            reasons,
            vec![
                "✓ Flexible budget - all options available",
                "✓ Perfect for coding",
                "○ Tech stack not specified",
                "✓ Beginner-friendly",
            ]
        );
    }

    #[test]
    fn test_maximum_score_is_100() {
        let tool = create_test_tool(PricingType::Free, false);
        let mut profile = create_test_profile();
        profile.experience_level = ExperienceLevel::Beginner;
        profile.tech_stack = techs(&["javascript"]);
        profile.features = techs(&["code-completion"]);

        let (score, reasons) = calculate_match_score(&tool, &profile);

        assert_eq!(score, 100);
        assert_eq!(reasons.len(), 5);
    }
}
