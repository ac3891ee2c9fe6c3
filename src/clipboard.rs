//! Clipboard collaborator
//!
//! Writes run off the event loop; the outcome comes back as a
//! [`ClipboardEvent`] on a channel the event loop drains each tick.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc::UnboundedSender;

/// Outcome of a clipboard write
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardEvent {
    Copied { chars: usize },
    Failed(String),
}

/// Trait for clipboard writes, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClipboardWriter: Send + Sync {
    async fn write_text(&self, text: String) -> Result<()>;
}

/// System clipboard via arboard. The handle is opened on first use and
/// kept for the life of the app: on X11 and Wayland the copied text is only
/// served while its owner is alive.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Arc<Mutex<Option<arboard::Clipboard>>>,
}

#[async_trait]
impl ClipboardWriter for SystemClipboard {
    async fn write_text(&self, text: String) -> Result<()> {
        let handle = self.handle.clone();
        // arboard talks to the display server synchronously
        tokio::task::spawn_blocking(move || -> Result<()> {
            let mut guard = handle
                .lock()
                .map_err(|_| anyhow!("clipboard handle poisoned"))?;
            if guard.is_none() {
                *guard = Some(arboard::Clipboard::new()?);
            }
            if let Some(clipboard) = guard.as_mut() {
                clipboard.set_text(text)?;
            }
            Ok(())
        })
        .await?
    }
}

/// Write `text` to the clipboard and report the outcome on `events`
pub async fn copy_text(
    writer: Arc<dyn ClipboardWriter>,
    text: String,
    events: UnboundedSender<ClipboardEvent>,
) {
    let chars = text.chars().count();
    let event = match writer.write_text(text).await {
        Ok(()) => {
            tracing::info!("Copied {chars} chars to clipboard");
            ClipboardEvent::Copied { chars }
        }
        Err(e) => {
            tracing::warn!("Clipboard write failed: {e:#}");
            ClipboardEvent::Failed(e.to_string())
        }
    };
    // The receiver is gone only when the app is shutting down
    let _ = events.send(event);
}

/// Fire-and-forget variant of [`copy_text`] for the event loop
pub fn spawn_copy(
    writer: Arc<dyn ClipboardWriter>,
    text: String,
    events: UnboundedSender<ClipboardEvent>,
) {
    tokio::spawn(copy_text(writer, text, events));
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;
    use tokio::sync::mpsc::unbounded_channel;

    #[tokio::test]
    async fn test_copy_reports_success() {
        let mut mock = MockClipboardWriter::new();
        mock.expect_write_text()
            .with(eq("{}".to_string()))
            .times(1)
            .returning(|_| Ok(()));
        let (tx, mut rx) = unbounded_channel();

        copy_text(Arc::new(mock), "{}".to_string(), tx).await;

        assert_eq!(rx.recv().await, Some(ClipboardEvent::Copied { chars: 2 }));
    }

    #[tokio::test]
    async fn test_copy_reports_failure() {
        let mut mock = MockClipboardWriter::new();
        mock.expect_write_text()
            .times(1)
            .returning(|_| Err(anyhow::anyhow!("no display")));
        let (tx, mut rx) = unbounded_channel();

        copy_text(Arc::new(mock), "{}".to_string(), tx).await;

        assert_eq!(
            rx.recv().await,
            Some(ClipboardEvent::Failed("no display".to_string()))
        );
    }

    #[test]
    fn test_copy_with_closed_receiver_does_not_panic() {
        let mut mock = MockClipboardWriter::new();
        mock.expect_write_text().returning(|_| Ok(()));
        let (tx, rx) = unbounded_channel();
        drop(rx);

        tokio_test::block_on(copy_text(Arc::new(mock), "x".to_string(), tx));
    }

    #[test]
    fn test_system_clipboard_opens_lazily() {
        let clipboard = SystemClipboard::default();
        assert!(clipboard.handle.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_spawn_copy_delivers_event() {
        let mut mock = MockClipboardWriter::new();
        mock.expect_write_text().returning(|_| Ok(()));
        let (tx, mut rx) = unbounded_channel();

        spawn_copy(Arc::new(mock), "héllo".to_string(), tx);

        assert_eq!(rx.recv().await, Some(ClipboardEvent::Copied { chars: 5 }));
    }
}
