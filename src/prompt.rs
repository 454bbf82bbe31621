use serde::{Deserialize, Serialize};

const ANSWER_PROMPT: &str = "You are a helpful and versatile assistant, especially skilled in programming and devops. Answer the user's question(s) in a very concise manner, unless it requires a long response or the user specifically asks you for one.";

const SHELL_PROMPT: &str = "You are a helpful and versatile assistant, especially skilled in programming and devops. The user is asking for a bash terminal command. Respond ONLY with the exact, executable bash command that accomplishes what they're asking for. Do not include explanations, markdown formatting, unnecessary quotation marks, or any text other than the command itself. The command will be automatically executed in the user's terminal.";

/// What kind of answer the user wants back.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// A short prose answer.
    #[default]
    Answer,
    /// A single executable terminal command, copied to the clipboard.
    Shell,
}

impl Mode {
    pub fn from_shell_flag(shell: bool) -> Self {
        if shell {
            Mode::Shell
        } else {
            Mode::Answer
        }
    }

    /// The fixed system prompt sent ahead of the user's question.
    pub fn system_prompt(self) -> &'static str {
        match self {
            Mode::Answer => ANSWER_PROMPT,
            Mode::Shell => SHELL_PROMPT,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// The system message followed by the user's question.
pub fn messages(mode: Mode, question: &str) -> Vec<Message> {
    vec![Message::system(mode.system_prompt()), Message::user(question)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_flag_selects_mode() {
        assert_eq!(Mode::from_shell_flag(true), Mode::Shell);
        assert_eq!(Mode::from_shell_flag(false), Mode::Answer);
        assert_eq!(Mode::default(), Mode::Answer);
    }

    #[test]
    fn each_mode_has_its_own_prompt() {
        assert_ne!(Mode::Answer.system_prompt(), Mode::Shell.system_prompt());
        assert!(Mode::Shell.system_prompt().contains("bash terminal command"));
        assert!(Mode::Answer.system_prompt().contains("very concise manner"));
    }

    #[test]
    fn messages_put_the_system_prompt_first() {
        let messages = messages(Mode::Shell, "list files");

        assert_eq!(
            messages,
            vec![
                Message::system(SHELL_PROMPT),
                Message::user("list files"),
            ]
        );
    }

    #[test]
    fn roles_serialize_lowercase() {
        let json = serde_json::to_value(Message::user("hi")).unwrap();

        assert_eq!(json, serde_json::json!({ "role": "user", "content": "hi" }));
    }
}
