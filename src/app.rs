use crate::catalog::{CategoryRow, Title};
use crate::config::Config;
use crate::keybindings::KeybindingRegistry;
use crate::nav::{dispatch, ArrowDirection, Effect, InputEvent, SelectionState};
use crate::playback::{PlaybackEffect, PlaybackOverlay, Presentation};
use crate::theme::{StyleMap, ThemeVariant};
use crate::util::{embed_url, validate_url_for_open};
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use std::borrow::Cow;
use tokio::time::Instant;
use url::Url;

/// How long a status message stays on screen.
const STATUS_TTL_SECS: u64 = 3;

// ============================================================================
// Layout Geometry
// ============================================================================

/// Screen areas of one rendered carousel, recorded for mouse hit-testing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowGeometry {
    /// Index into `App::rows`.
    pub row: usize,
    pub left_arrow: Rect,
    pub right_arrow: Rect,
    /// `(title index, cell area)` for every visible cell.
    pub items: Vec<(usize, Rect)>,
}

/// Geometry captured during the last render.
///
/// Mouse events carry only a terminal cell position, so the renderer
/// records where each clickable element landed.
#[derive(Debug, Clone, Default)]
pub struct LayoutGeometry {
    pub play_button: Rect,
    pub rows: Vec<RowGeometry>,
    /// Carousel rows that fit vertically.
    pub visible_rows: usize,
    /// Cells that fit in one carousel.
    pub visible_items: usize,
    /// Area of the windowed player, when one is drawn.
    pub player: Option<Rect>,
    /// Largest help scroll offset that still fills the overlay.
    pub help_max_scroll: usize,
}

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Browse(InputEvent),
    PlayButton,
}

impl LayoutGeometry {
    /// Forget every clickable area while keeping the viewport sizes.
    pub fn clear_hit_areas(&mut self) {
        self.play_button = Rect::default();
        self.rows.clear();
        self.player = None;
    }

    /// Resolve a click position against the browse screen.
    pub fn hit(&self, column: u16, row: u16) -> Option<HitTarget> {
        let pos = Position::new(column, row);

        if self.play_button.contains(pos) {
            return Some(HitTarget::PlayButton);
        }

        for geometry in &self.rows {
            let event = if geometry.left_arrow.contains(pos) {
                InputEvent::ArrowButton {
                    row: geometry.row,
                    direction: ArrowDirection::Left,
                }
            } else if geometry.right_arrow.contains(pos) {
                InputEvent::ArrowButton {
                    row: geometry.row,
                    direction: ArrowDirection::Right,
                }
            } else if let Some((index, _)) = geometry.items.iter().find(|(_, r)| r.contains(pos)) {
                InputEvent::ItemClick {
                    row: geometry.row,
                    index: *index,
                }
            } else {
                continue;
            };
            return Some(HitTarget::Browse(event));
        }

        None
    }
}

// ============================================================================
// Application State
// ============================================================================

pub struct App {
    pub rows: Vec<CategoryRow>,
    pub selection: SelectionState,
    pub overlay: PlaybackOverlay,

    /// First carousel row drawn.
    pub row_offset: usize,
    /// First cell drawn in the active carousel. Other rows start at 0.
    pub item_offset: usize,
    pub layout: LayoutGeometry,

    pub theme_variant: ThemeVariant,
    pub theme: StyleMap,
    pub keybindings: KeybindingRegistry,
    pub mouse_capture: bool,

    /// Status message with timestamp for auto-expiry
    pub status_message: Option<(Cow<'static, str>, Instant)>,

    pub show_help: bool,
    pub help_scroll_offset: usize,

    /// Only render when set; cleared after each frame.
    pub needs_redraw: bool,
}

impl App {
    /// Build the application state for already-grouped rows.
    ///
    /// Config problems that do not prevent startup (unknown theme, bad
    /// keybinding overrides) are logged and surfaced in the status bar.
    pub fn new(rows: Vec<CategoryRow>, config: &Config) -> Self {
        let mut warnings = Vec::new();

        let theme_variant = ThemeVariant::from_str_name(&config.theme).unwrap_or_else(|| {
            warnings.push(format!("Unknown theme '{}', using Dark", config.theme));
            ThemeVariant::Dark
        });

        let mut keybindings = KeybindingRegistry::new();
        warnings.extend(keybindings.apply_overrides(&config.keybindings));

        let mut app = Self {
            rows,
            selection: SelectionState::default(),
            overlay: PlaybackOverlay::new(config.launch_external_player),
            row_offset: 0,
            item_offset: 0,
            layout: LayoutGeometry::default(),
            theme_variant,
            theme: StyleMap::from_palette(&theme_variant.palette()),
            keybindings,
            mouse_capture: config.mouse,
            status_message: None,
            show_help: false,
            help_scroll_offset: 0,
            needs_redraw: true,
        };

        for warning in &warnings {
            tracing::warn!(warning = %warning, "Configuration problem");
        }
        if let Some(first) = warnings.into_iter().next() {
            app.set_status(first);
        }

        app
    }

    /// Resolve a semantic role name to its `Style`.
    pub fn style(&self, role: &str) -> Style {
        self.theme.resolve(role)
    }

    pub fn set_theme(&mut self, variant: ThemeVariant) {
        self.theme_variant = variant;
        self.theme = StyleMap::from_palette(&variant.palette());
        self.needs_redraw = true;
    }

    /// Cycle to the next theme variant (Dark → Light → Dark).
    ///
    /// Returns the name of the new theme for status display.
    pub fn cycle_theme(&mut self) -> &'static str {
        let next = self.theme_variant.next();
        self.set_theme(next);
        next.name()
    }

    pub fn active_row(&self) -> Option<&CategoryRow> {
        self.selection.active_row(&self.rows)
    }

    /// Title shown in the banner.
    pub fn active_title(&self) -> Option<&Title> {
        self.selection.active_title(&self.rows)
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Run a browse event through the dispatcher and apply its view effects.
    ///
    /// Returns true when the selection changed.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        let previous = self.selection;
        let outcome = dispatch(previous, &self.rows, event);
        let changed = outcome.changed(previous);

        self.selection = outcome.state;
        for effect in outcome.effects {
            self.apply_effect(effect);
        }
        if changed {
            self.needs_redraw = true;
        }
        changed
    }

    /// Update the viewport for a dispatcher effect.
    pub fn apply_effect(&mut self, effect: Effect) {
        match effect {
            Effect::ScrollRowIntoView { row } => {
                let visible = self.layout.visible_rows.max(1);
                if row < self.row_offset {
                    self.row_offset = row;
                } else if row >= self.row_offset + visible {
                    self.row_offset = row + 1 - visible;
                }
            }
            Effect::ScrollItemIntoView { row, index } => {
                let len = self.rows.get(row).map_or(0, CategoryRow::len);
                let visible = self.layout.visible_items.max(1);
                self.item_offset = index.min(len.saturating_sub(visible));
            }
        }
    }

    /// Re-run the viewport effects for the current selection.
    ///
    /// Called after a resize changes how many rows or cells fit.
    pub fn refresh_viewport(&mut self) {
        let SelectionState { category, movie } = self.selection;
        self.row_offset = self.row_offset.min(category);
        self.apply_effect(Effect::ScrollRowIntoView { row: category });
        self.apply_effect(Effect::ScrollItemIntoView {
            row: category,
            index: movie,
        });
    }

    /// Scroll the help overlay by `delta` lines, within the range the last
    /// render could show.
    pub fn scroll_help(&mut self, delta: isize) {
        let next = self
            .help_scroll_offset
            .saturating_add_signed(delta)
            .min(self.layout.help_max_scroll);
        if next != self.help_scroll_offset {
            self.help_scroll_offset = next;
            self.needs_redraw = true;
        }
    }

    // ========================================================================
    // Playback
    // ========================================================================

    /// Open the player for the active title.
    pub fn play_active(&mut self) {
        let Some(title) = self.active_title().cloned() else {
            return;
        };

        match self.overlay.open(&title) {
            Ok(effects) => self.apply_playback_effects(effects),
            Err(e) => {
                tracing::warn!(id = title.id, error = %e, "Cannot play title");
                self.set_status(format!("Cannot play \"{}\": {}", title.title, e));
            }
        }
        self.needs_redraw = true;
    }

    pub fn escape_player(&mut self) {
        let effects = self.overlay.escape();
        self.apply_playback_effects(effects);
        self.needs_redraw = true;
    }

    pub fn close_player(&mut self) {
        let effects = self.overlay.close();
        self.apply_playback_effects(effects);
        self.needs_redraw = true;
    }

    pub fn request_fullscreen(&mut self) {
        let effects = self.overlay.request_exclusive();
        self.apply_playback_effects(effects);
        self.needs_redraw = true;
    }

    /// Carry out overlay requests.
    ///
    /// The terminal grants and releases full-screen presentation
    /// immediately, so enter/leave requests are acknowledged in place.
    pub fn apply_playback_effects(&mut self, effects: Vec<PlaybackEffect>) {
        for effect in effects {
            match effect {
                PlaybackEffect::EnterExclusive { url } => {
                    tracing::debug!(url = %url, "Entering full-screen player");
                    self.overlay.exclusive_changed(true);
                }
                PlaybackEffect::LeaveExclusive => {
                    self.overlay.exclusive_changed(false);
                }
                PlaybackEffect::LaunchExternal { url } => self.open_url(&url),
            }
        }
    }

    /// Hand the embed URL of the open session (or the active title) to the
    /// system browser.
    pub fn open_in_browser(&mut self) {
        let url = match self.overlay.session() {
            Some(session) => session.url.clone(),
            None => {
                let Some(title) = self.active_title() else {
                    return;
                };
                match embed_url(&title.video) {
                    Ok(url) => url,
                    Err(e) => {
                        self.set_status(format!("Invalid video reference: {}", e));
                        return;
                    }
                }
            }
        };
        self.open_url(&url);
    }

    fn open_url(&mut self, url: &Url) {
        if let Err(e) = validate_url_for_open(url) {
            self.set_status(e);
        } else if let Err(e) = open::that(url.as_str()) {
            tracing::warn!(url = %url, error = %e, "Failed to launch browser");
            self.set_status(format!("Failed to open browser: {}", e));
        } else {
            self.set_status("Opened in browser");
        }
    }

    /// Whether the player covers the whole screen.
    pub fn player_is_fullscreen(&self) -> bool {
        self.overlay.presentation() == Some(Presentation::Exclusive)
    }

    // ========================================================================
    // Status
    // ========================================================================

    /// Set status message (will auto-expire after 3 seconds)
    pub fn set_status(&mut self, msg: impl Into<Cow<'static, str>>) {
        self.status_message = Some((msg.into(), Instant::now()));
        self.needs_redraw = true;
    }

    /// Clear status message if expired (older than 3 seconds)
    /// Returns true if a message was actually cleared
    pub fn clear_expired_status(&mut self) -> bool {
        if let Some((_, time)) = &self.status_message {
            if time.elapsed().as_secs() >= STATUS_TTL_SECS {
                self.status_message = None;
                return true;
            }
        }
        false
    }
}

// ============================================================================
// Tests
// ============================================================================
