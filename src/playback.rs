//! Playback overlay state machine.
//!
//! The overlay opens in exclusive (full-terminal) presentation. When the
//! environment reports that exclusive mode ended, the overlay shrinks to a
//! windowed presentation instead of closing; only an explicit close (or
//! escape while windowed) removes it.
//!
//! Environment interaction is returned as [`PlaybackEffect`] values so the
//! state machine itself never touches the terminal or the browser.

use url::Url;

use crate::catalog::Title;
use crate::util::{embed_url, VideoRefError};

/// How much of the screen the overlay occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// Full-viewport takeover.
    Exclusive,
    /// Reduced, centered overlay.
    Windowed,
}

/// Requests for the surrounding environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackEffect {
    /// Acquire exclusive presentation for the embed at `url`.
    EnterExclusive { url: Url },
    /// Release exclusive presentation.
    LeaveExclusive,
    /// Hand the embed URL to the system browser.
    LaunchExternal { url: Url },
}

/// An open overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackSession {
    pub title_id: u64,
    pub title: String,
    pub url: Url,
    pub presentation: Presentation,
}

#[derive(Debug, Default)]
pub struct PlaybackOverlay {
    session: Option<PlaybackSession>,
    launch_external: bool,
}

impl PlaybackOverlay {
    /// `launch_external` adds a `LaunchExternal` effect to every `open`.
    pub fn new(launch_external: bool) -> Self {
        Self {
            session: None,
            launch_external,
        }
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&PlaybackSession> {
        self.session.as_ref()
    }

    pub fn presentation(&self) -> Option<Presentation> {
        self.session.as_ref().map(|s| s.presentation)
    }

    /// Open the overlay for `title`, replacing any open session.
    ///
    /// Fails without changing state when the title's video reference is not
    /// usable.
    pub fn open(&mut self, title: &Title) -> Result<Vec<PlaybackEffect>, VideoRefError> {
        let url = embed_url(&title.video)?;

        let mut effects = Vec::with_capacity(2);
        effects.push(PlaybackEffect::EnterExclusive { url: url.clone() });
        if self.launch_external {
            effects.push(PlaybackEffect::LaunchExternal { url: url.clone() });
        }

        tracing::info!(id = title.id, title = %title.title, "Opening playback overlay");
        self.session = Some(PlaybackSession {
            title_id: title.id,
            title: title.title.clone(),
            url,
            presentation: Presentation::Exclusive,
        });
        Ok(effects)
    }

    /// Remove the overlay, releasing exclusive presentation if still held.
    pub fn close(&mut self) -> Vec<PlaybackEffect> {
        match self.session.take() {
            Some(session) => {
                tracing::debug!(id = session.title_id, "Closed playback overlay");
                if session.presentation == Presentation::Exclusive {
                    vec![PlaybackEffect::LeaveExclusive]
                } else {
                    Vec::new()
                }
            }
            None => Vec::new(),
        }
    }

    /// Escape key: leave exclusive mode first, close when already windowed.
    pub fn escape(&mut self) -> Vec<PlaybackEffect> {
        match self.presentation() {
            Some(Presentation::Exclusive) => vec![PlaybackEffect::LeaveExclusive],
            Some(Presentation::Windowed) => self.close(),
            None => Vec::new(),
        }
    }

    /// Ask to return to exclusive presentation from windowed.
    pub fn request_exclusive(&mut self) -> Vec<PlaybackEffect> {
        match &self.session {
            Some(session) if session.presentation == Presentation::Windowed => {
                vec![PlaybackEffect::EnterExclusive {
                    url: session.url.clone(),
                }]
            }
            _ => Vec::new(),
        }
    }

    /// The environment reports exclusive presentation was entered or left.
    pub fn exclusive_changed(&mut self, active: bool) {
        if let Some(session) = self.session.as_mut() {
            session.presentation = if active {
                Presentation::Exclusive
            } else {
                Presentation::Windowed
            };
        }
    }
}
