//! Lexical markers checked by the title rules.

/// Words that signal practical, search-worthy content.
pub const HIGH_VALUE_WORDS: &[&str] = &[
    "如何", "方法", "技巧", "秘诀", "攻略", "教程", "指南", "揭秘", "解析",
];

/// Words that frame a title as a question.
pub const QUESTION_WORDS: &[&str] = &["什么", "怎么", "为什么", "如何", "哪些", "怎样"];

/// Words that add emotional pull.
pub const EMOTIONAL_WORDS: &[&str] = &[
    "惊人", "震撼", "神奇", "完美", "实用", "高效", "简单", "必备", "重要",
];

/// Returns true if `text` contains any of `words` as a substring.
pub fn contains_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|word| text.contains(word))
}

/// Returns true if `text` contains an ASCII digit.
pub fn has_digit(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
}
