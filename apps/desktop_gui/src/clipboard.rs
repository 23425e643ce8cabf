//! Clipboard access behind a small trait so the form can be tested headless.

use arboard::Clipboard;

pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), String>;
}

/// System clipboard via `arboard`, opened on first use and kept for the
/// lifetime of the app (some platforms drop the contents with the handle).
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<Clipboard>,
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), String> {
        if self.inner.is_none() {
            self.inner = Some(Clipboard::new().map_err(|err| err.to_string())?);
        }
        let clipboard = self
            .inner
            .as_mut()
            .ok_or_else(|| "clipboard unavailable".to_string())?;
        clipboard
            .set_text(text.to_string())
            .map_err(|err| err.to_string())
    }
}

#[cfg(test)]
#[derive(Default)]
pub struct RecordingClipboard {
    pub writes: Vec<String>,
    pub fail_with: Option<String>,
}

#[cfg(test)]
impl ClipboardSink for RecordingClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), String> {
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        self.writes.push(text.to_string());
        Ok(())
    }
}
