use crate::prelude::*;

const COPIED_SUFFIX: &str = "Copied to clipboard";

/// Somewhere to put the shell command the model answered with.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The operating system clipboard.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let mut ctx = copypasta_ext::try_context()
            .ok_or_else(|| Error::Clipboard("no clipboard available".into()))?;
        ctx.set_contents(text.to_string())
            .map_err(Error::Clipboard)?;

        log::info!("copy to clipboard");
        Ok(())
    }
}

/// Turns the model's answer into the text printed to stdout.
///
/// In shell mode the answer is trimmed, copied to `clipboard` and followed by a confirmation line.
pub fn finish(text: String, mode: Mode, clipboard: &mut impl Clipboard) -> Result<String> {
    match mode {
        Mode::Answer => Ok(text),
        Mode::Shell => {
            let command = text.trim();
            clipboard.set_text(command)?;
            Ok(format!("{command}\n{COPIED_SUFFIX}"))
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Records what would have been copied.
    #[derive(Debug, Default)]
    pub(crate) struct FakeClipboard {
        pub(crate) contents: Option<String>,
        pub(crate) fail: bool,
    }

    impl Clipboard for FakeClipboard {
        fn set_text(&mut self, text: &str) -> Result<()> {
            if self.fail {
                return Err(Error::Clipboard("clipboard is gone".into()));
            }
            self.contents = Some(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn answer_mode_returns_text_unchanged() {
        let mut clipboard = FakeClipboard::default();

        let output = finish(" Paris \n".to_string(), Mode::Answer, &mut clipboard).unwrap();

        assert_eq!(output, " Paris \n");
        assert_eq!(clipboard.contents, None);
    }

    #[test]
    fn shell_mode_trims_copies_and_confirms() {
        let mut clipboard = FakeClipboard::default();

        let output = finish(" ls -la \n".to_string(), Mode::Shell, &mut clipboard).unwrap();

        assert_eq!(output, "ls -la\nCopied to clipboard");
        assert_eq!(clipboard.contents.as_deref(), Some("ls -la"));
    }

    #[test]
    fn clipboard_failure_is_an_error() {
        let mut clipboard = FakeClipboard {
            fail: true,
            ..Default::default()
        };

        let err = finish("ls".to_string(), Mode::Shell, &mut clipboard).unwrap_err();

        assert_eq!(err.to_string(), "Failed to copy to clipboard: clipboard is gone");
    }
}
