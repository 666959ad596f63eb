//! Prompt composition for the generative-language API.

use crate::domain::case::{Case, Difficulty, Suspect};

/// System instruction for case generation.
pub const CASE_WRITER_SYSTEM: &str =
    "你是一个专业的剧本杀编剧。你的故事逻辑严密，人物性格鲜明。";

/// Prompt asking the model to author a complete case as JSON.
pub fn case_generation(difficulty: Difficulty) -> String {
    format!(
        "你是一位顶级的侦探小说家。请为游戏《神探之心》设计一个悬疑案件。\n\
         语言必须是：中文 (Chinese)。\n\
         \n\
         案件要求：\n\
         1. 标题：类似“豪门惊梦”这样的四字或短语标题。\n\
         2. 背景：通常发生在一个封闭或半封闭的环境（如别墅、列车、古堡）。\n\
         3. 死者：通常是富有或有权势的人。\n\
         4. 嫌疑人：必须正好有3位（例如：管家、亲属、合作伙伴/司机）。\n\
         5. 难度：{}。\n\
         \n\
         请输出JSON格式。",
        difficulty.label()
    )
}

/// System instruction putting the model in character for one suspect.
pub fn interrogation_system(case: &Case, suspect: &Suspect) -> String {
    format!(
        "你现在正在进行一场角色扮演游戏。\n\
         当前案件：{title}\n\
         案件背景：{introduction}\n\
         真相（绝对保密）：{solution}\n\
         \n\
         你扮演的角色：{name} ({role})。\n\
         你的性格：{personality}。\n\
         你的秘密：{secret}（只有当被问到相关关键点或证据确凿时才透露一点，不要直接全盘托出）。\n\
         \n\
         玩家是侦探。请以【{name}】的口吻回答侦探的问题。\n\
         - 坚持你的设定。\n\
         - 如果你是凶手，你要撒谎或误导，但不能逻辑崩坏。\n\
         - 如果你不是凶手，你要洗清嫌疑，但可能因为其他秘密而有所隐瞒。\n\
         - 既然是中文游戏，请用自然的中文口语回答。\n\
         - 回答不要太长，保持对话感。",
        title = case.title(),
        introduction = case.introduction(),
        solution = case.solution(),
        name = suspect.name(),
        role = suspect.role(),
        personality = suspect.personality(),
        secret = suspect.secret(),
    )
}

/// Prompt asking the model to judge an accusation as JSON.
pub fn evaluation(case: &Case, statement: &str) -> String {
    format!(
        "案件真相: \"{}\"\n\
         玩家的推理: \"{}\"\n\
         \n\
         任务:\n\
         1. 判断玩家是否找出了真凶。\n\
         2. 判断玩家对作案手法和动机的推理是否正确。\n\
         3. 给出0-100的评分（80分以上算破案成功）。\n\
         4. 用中文给出简短的评价和反馈。\n\
         \n\
         输出JSON格式。",
        case.solution(),
        statement
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::offline::Casebook;

    #[test]
    fn case_generation_interpolates_difficulty_label() {
        let prompt = case_generation(Difficulty::Hard);
        assert!(prompt.contains("难度：困难。"));
        assert!(prompt.contains("必须正好有3位"));
    }

    #[test]
    fn interrogation_system_carries_role_play_context() {
        let case = Casebook::builtin().pick(Difficulty::Easy).unwrap();
        let suspect = &case.suspects()[0];
        let prompt = interrogation_system(&case, suspect);

        assert!(prompt.contains(case.title()));
        assert!(prompt.contains(case.solution()));
        assert!(prompt.contains(suspect.name()));
        assert!(prompt.contains(suspect.secret()));
    }

    #[test]
    fn evaluation_quotes_solution_and_statement() {
        let case = Casebook::builtin().pick(Difficulty::Easy).unwrap();
        let prompt = evaluation(&case, "I accuse 赵魔术师.");

        assert!(prompt.contains("案件真相: \"魔术师\""));
        assert!(prompt.contains("玩家的推理: \"I accuse 赵魔术师.\""));
        assert!(prompt.contains("80分以上算破案成功"));
    }
}
