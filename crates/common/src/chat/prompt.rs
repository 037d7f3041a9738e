//! Lane-conditioned system prompts
//!
//! The wording here is a tuning surface; the behavioral contracts are
//! not: platform framing, brief technology explanations on request, no
//! unprompted recitation of site navigation, no external websites, a
//! 2-3 line cap on the short-answer lane, and markdown structure on the
//! roadmap lane.

use crate::chat::classifier::Lane;

/// What the platform does, offered to the model so it can answer
/// site questions when (and only when) the user asks about the site.
const SITE_FEATURES: &str = "\
This platform (\"ExpertLink\") helps users find and connect with verified technical experts.
Main features:
- Search experts by name, domain, or location
- Filter experts by domain (AI, Backend, Cloud, Cybersecurity, Data Science, etc)
- Save experts to the wishlist and review them on the dashboard
- Contact support via the Contact page
- Users get recommendations based on their interests";

const BASE_PROMPT: &str = "\
You are a helpful assistant on a platform for connecting users with technical experts.
If the user asks about a technology, such as \"java\", briefly explain what it is.
Only describe the site and its features when the user asks about the site itself, not in every answer.
Do not mention external websites.";

const SHORT_ANSWER_RULE: &str = "Keep your answer to 2-3 lines at most.";

const DETAILED_RULE: &str = "Give a detailed, thorough answer.";

const ROADMAP_PROMPT: &str = "\
You are a helpful assistant on a platform for connecting users with technical experts.
The user wants to know what goes into building the system they described. Respond in markdown:
- Open with a `#` heading naming the system, followed by a 2-3 sentence description of what it does.
- Under a `## Required Expertise` heading, list the expertise domains and the key skills for each as a numbered list, one domain per item.
Do not lay out a full step-by-step roadmap or timeline.
Do not describe this platform or its features.
Do not mention external websites.
Finish by asking the user which of the listed domains they would like to be matched with an expert for.";

/// Compose the system instruction for a lane. Canned lanes never reach
/// the completion service, but composing for them is well-defined and
/// falls back to the base prompt.
pub fn system_prompt(lane: &Lane) -> String {
    match lane {
        Lane::Roadmap => ROADMAP_PROMPT.to_string(),
        Lane::ShortAnswer => format!("{BASE_PROMPT}\n{SITE_FEATURES}\n{SHORT_ANSWER_RULE}"),
        Lane::Detailed => format!("{BASE_PROMPT}\n{SITE_FEATURES}\n{DETAILED_RULE}"),
        _ => format!("{BASE_PROMPT}\n{SITE_FEATURES}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::classifier::{FaqTopic, GreetingKind};

    #[test]
    fn test_roadmap_prompt_demands_markdown_structure() {
        let prompt = system_prompt(&Lane::Roadmap);
        assert!(prompt.contains("`#` heading"));
        assert!(prompt.contains("## Required Expertise"));
        assert!(prompt.contains("numbered list"));
        assert!(prompt.contains("Do not lay out a full step-by-step roadmap"));
        assert!(prompt.contains("which of the listed domains"));
    }

    #[test]
    fn test_short_answer_is_capped() {
        let prompt = system_prompt(&Lane::ShortAnswer);
        assert!(prompt.contains("2-3 lines at most"));
    }

    #[test]
    fn test_detailed_overrides_cap() {
        let prompt = system_prompt(&Lane::Detailed);
        assert!(prompt.contains("detailed"));
        assert!(!prompt.contains("2-3 lines at most"));
    }

    #[test]
    fn test_no_external_sites_in_any_lane() {
        for lane in [
            Lane::Greeting(GreetingKind::Generic),
            Lane::Faq(FaqTopic::Contact),
            Lane::Roadmap,
            Lane::ShortAnswer,
            Lane::Detailed,
            Lane::Default,
        ] {
            assert!(system_prompt(&lane).contains("Do not mention external websites."));
        }
    }
}
