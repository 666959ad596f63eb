//! Keyword resolver - deterministic offline interrogation.

use async_trait::async_trait;
use rand::Rng;

use crate::domain::case::{Case, Suspect};
use crate::domain::session::Message;
use crate::ports::{Interrogator, ServiceError};

/// Generic deflection lines used when no keyword matches.
///
/// One slot is role-parameterized and filled in at pick time.
const DEFLECTIONS: [&str; 6] = [
    "我没什么好说的。",
    "警官，你是在怀疑我吗？",
    "我不记得了。",
    "这和我无关。",
    "我是{role}，我怎么会做这种事？",
    "你能去问别人吗？",
];

/// Offline interrogation resolver.
///
/// Scans the suspect's keyword response list in order and returns the
/// first entry whose keywords contain a substring of the normalized
/// query; earlier entries win ties. With no match (or no list at
/// all), returns a uniformly random generic deflection. Never fails
/// and never blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordResolver;

impl KeywordResolver {
    /// Creates a resolver.
    pub fn new() -> Self {
        Self
    }

    /// Produces the suspect's reply to the query.
    pub fn respond(&self, suspect: &Suspect, query: &str) -> String {
        let normalized = query.to_lowercase();

        if let Some(responses) = suspect.offline_responses() {
            let matched = responses.iter().find(|entry| {
                entry
                    .keywords()
                    .iter()
                    .any(|keyword| normalized.contains(&keyword.to_lowercase()))
            });
            if let Some(entry) = matched {
                return entry.response().to_string();
            }
        }

        self.deflect(suspect)
    }

    /// Picks a random generic deflection line.
    fn deflect(&self, suspect: &Suspect) -> String {
        let index = rand::thread_rng().gen_range(0..DEFLECTIONS.len());
        DEFLECTIONS[index].replace("{role}", suspect.role())
    }
}

#[async_trait]
impl Interrogator for KeywordResolver {
    async fn interrogate(
        &self,
        _case: &Case,
        suspect: &Suspect,
        _history: &[Message],
        query: &str,
    ) -> Result<String, ServiceError> {
        Ok(self.respond(suspect, query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::case::OfflineResponse;
    use crate::domain::foundation::SuspectId;

    fn driver() -> Suspect {
        Suspect::new(
            SuspectId::new("s3").unwrap(),
            "王司机",
            "司机",
            "年轻英俊的司机。",
            "driver",
            "看见大小姐从书房窗户跑出来。",
            "轻浮，警惕。",
        )
        .with_offline_responses(vec![
            OfflineResponse::new(["哪里", "在哪"], "我在车里睡觉啊。"),
            OfflineResponse::new(["秘密"], "每个人都有秘密，但这不犯法吧？"),
            OfflineResponse::new(["哪里", "书房"], "后面的条目不该被选中。"),
        ])
    }

    fn silent_suspect() -> Suspect {
        Suspect::new(
            SuspectId::new("x1").unwrap(),
            "无名氏",
            "园丁",
            "没有台词的配角。",
            "default",
            "无",
            "木讷",
        )
    }

    fn expected_deflections(suspect: &Suspect) -> Vec<String> {
        DEFLECTIONS
            .iter()
            .map(|line| line.replace("{role}", suspect.role()))
            .collect()
    }

    #[test]
    fn keyword_match_returns_exact_response() {
        let resolver = KeywordResolver::new();
        let reply = resolver.respond(&driver(), "案发时你在哪里？");
        assert_eq!(reply, "我在车里睡觉啊。");
    }

    #[test]
    fn matching_is_case_insensitive() {
        let resolver = KeywordResolver::new();
        let suspect = driver().with_offline_responses(vec![OfflineResponse::new(
            ["ALIBI"],
            "我有不在场证明。",
        )]);
        let reply = resolver.respond(&suspect, "tell me about your alibi");
        assert_eq!(reply, "我有不在场证明。");
    }

    #[test]
    fn first_matching_entry_wins() {
        let resolver = KeywordResolver::new();
        // "书房" also matches the third entry, but "哪里" hits the first
        let reply = resolver.respond(&driver(), "你在哪里？去过书房吗？");
        assert_eq!(reply, "我在车里睡觉啊。");
    }

    #[test]
    fn no_match_returns_a_generic_deflection() {
        let resolver = KeywordResolver::new();
        let suspect = driver();
        let allowed = expected_deflections(&suspect);

        for _ in 0..20 {
            let reply = resolver.respond(&suspect, "昨晚的天气怎么样？");
            assert!(!reply.is_empty());
            assert!(allowed.contains(&reply), "unexpected deflection: {}", reply);
        }
    }

    #[test]
    fn suspect_without_responses_still_answers() {
        let resolver = KeywordResolver::new();
        let suspect = silent_suspect();
        let allowed = expected_deflections(&suspect);

        let reply = resolver.respond(&suspect, "你在哪里？");
        assert!(allowed.contains(&reply));
    }

    #[test]
    fn role_parameterized_deflection_uses_suspect_role() {
        let suspect = silent_suspect();
        let allowed = expected_deflections(&suspect);
        assert!(allowed.contains(&"我是园丁，我怎么会做这种事？".to_string()));
    }

    #[tokio::test]
    async fn interrogate_never_fails() {
        let resolver = KeywordResolver::new();
        let case = crate::adapters::offline::Casebook::builtin()
            .pick(crate::domain::case::Difficulty::Easy)
            .unwrap();
        let suspect = &case.suspects()[0];

        let reply = resolver
            .interrogate(&case, suspect, &[], "你在哪里？")
            .await
            .unwrap();
        assert_eq!(reply, "我在餐车为几位美丽的女士表演纸牌魔术，很多人可以作证。");
    }
}
