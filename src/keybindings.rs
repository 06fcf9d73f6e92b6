//! Keybinding registry: maps actions to key events with config overrides.
//!
//! Key handling is data-driven: the UI asks the registry which action a key
//! means in the current context, and users can rebind actions in config.toml.
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

// ============================================================================
// Action Enum
// ============================================================================

/// All user-facing actions that can be triggered by keybindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    NavUp,
    NavDown,
    NavLeft,
    NavRight,
    Play,
    Back,
    ClosePlayer,
    Fullscreen,
    OpenInBrowser,
    CycleTheme,
    ShowHelp,
}

impl Action {
    /// Human-readable description for the help screen.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Quit => "Quit application",
            Self::NavUp => "Previous category",
            Self::NavDown => "Next category",
            Self::NavLeft => "Previous title (wraps)",
            Self::NavRight => "Next title (wraps)",
            Self::Play => "Play active title",
            Self::Back => "Leave fullscreen / close player",
            Self::ClosePlayer => "Close player",
            Self::Fullscreen => "Return to fullscreen",
            Self::OpenInBrowser => "Open video in browser",
            Self::CycleTheme => "Cycle theme",
            Self::ShowHelp => "Show help",
        }
    }
}

// ============================================================================
// Context Enum
// ============================================================================

/// Dispatch context. Determines which bindings are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Context {
    /// Browsing the catalog.
    Global,
    /// Playback overlay open.
    Player,
}

// ============================================================================
// Key Specification
// ============================================================================

/// A key event: code + modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeySpec {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeySpec {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    /// Normalize an incoming key event for lookup.
    ///
    /// Terminals report uppercase letters with SHIFT set; bindings store the
    /// uppercase char alone, so SHIFT is dropped for character keys.
    pub fn from_event(code: KeyCode, modifiers: KeyModifiers) -> Self {
        match code {
            KeyCode::Char(_) => Self::new(code, modifiers.difference(KeyModifiers::SHIFT)),
            _ => Self::new(code, modifiers),
        }
    }
}

/// Parse a key string from config into a KeySpec.
///
/// Supported formats:
/// - Single char: "q", "j", "/"
/// - Named keys: "Enter", "Esc", "Tab", "Up", "Down", "Left", "Right", "Space"
/// - Modifier combos: "Ctrl+c"
/// - Function keys: "F1" through "F12"
fn parse_key_string(s: &str) -> Option<KeySpec> {
    let s = s.trim();

    if let Some(rest) = s.strip_prefix("Ctrl+") {
        let mut chars = rest.trim().chars();
        let c = chars.next()?;
        return match chars.next() {
            None => Some(KeySpec::ctrl(c)),
            Some(_) => None,
        };
    }

    match s.to_lowercase().as_str() {
        "enter" | "return" => return Some(KeySpec::plain(KeyCode::Enter)),
        "esc" | "escape" => return Some(KeySpec::plain(KeyCode::Esc)),
        "tab" => return Some(KeySpec::plain(KeyCode::Tab)),
        "up" => return Some(KeySpec::plain(KeyCode::Up)),
        "down" => return Some(KeySpec::plain(KeyCode::Down)),
        "left" => return Some(KeySpec::plain(KeyCode::Left)),
        "right" => return Some(KeySpec::plain(KeyCode::Right)),
        "backspace" => return Some(KeySpec::plain(KeyCode::Backspace)),
        "space" => return Some(KeySpec::plain(KeyCode::Char(' '))),
        _ => {}
    }

    if let Some(n) = s.strip_prefix(['F', 'f']) {
        if let Ok(n) = n.parse::<u8>() {
            return (1..=12).contains(&n).then(|| KeySpec::plain(KeyCode::F(n)));
        }
    }

    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(KeySpec::plain(KeyCode::Char(c))),
        _ => None,
    }
}

/// Format a KeySpec as a human-readable string for the help screen.
fn format_key(key: &KeySpec) -> String {
    let modifier = if key.modifiers.contains(KeyModifiers::CONTROL) {
        "Ctrl+"
    } else {
        ""
    };

    let key_name = match key.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => "?".to_string(),
    };

    format!("{}{}", modifier, key_name)
}

// ============================================================================
// Keybinding Registry
// ============================================================================

/// Registry of keybindings, supporting default bindings and config overrides.
///
/// The same key can map to different actions in different contexts; lookups
/// fall back to `Global` when the context has no binding of its own.
pub struct KeybindingRegistry {
    /// Primary lookup: (Context, KeySpec) -> Action
    lookup: HashMap<(Context, KeySpec), Action>,
    /// All bindings for help screen enumeration
    bindings: Vec<(Context, KeySpec, Action)>,
}

impl KeybindingRegistry {
    /// Create a registry with the default bindings.
    pub fn new() -> Self {
        let mut registry = Self {
            lookup: HashMap::new(),
            bindings: Vec::new(),
        };
        registry.register_defaults();
        registry
    }

    fn bind(&mut self, context: Context, key: KeySpec, action: Action) {
        self.lookup.insert((context, key), action);
        self.bindings.push((context, key, action));
    }

    fn register_defaults(&mut self) {
        use KeyCode::{Char, Down, Enter, Esc, Left, Right, Up};

        // === Browsing ===
        self.bind(Context::Global, KeySpec::plain(Char('q')), Action::Quit);
        self.bind(Context::Global, KeySpec::ctrl('c'), Action::Quit);

        // Vertical: categories
        self.bind(Context::Global, KeySpec::plain(Up), Action::NavUp);
        self.bind(Context::Global, KeySpec::plain(Char('k')), Action::NavUp);
        self.bind(Context::Global, KeySpec::plain(Down), Action::NavDown);
        self.bind(Context::Global, KeySpec::plain(Char('j')), Action::NavDown);

        // Horizontal: titles within the active row
        self.bind(Context::Global, KeySpec::plain(Left), Action::NavLeft);
        self.bind(Context::Global, KeySpec::plain(Char('h')), Action::NavLeft);
        self.bind(Context::Global, KeySpec::plain(Right), Action::NavRight);
        self.bind(Context::Global, KeySpec::plain(Char('l')), Action::NavRight);

        self.bind(Context::Global, KeySpec::plain(Enter), Action::Play);
        self.bind(Context::Global, KeySpec::plain(Char('p')), Action::Play);
        self.bind(
            Context::Global,
            KeySpec::plain(Char('o')),
            Action::OpenInBrowser,
        );
        self.bind(
            Context::Global,
            KeySpec::plain(Char('T')),
            Action::CycleTheme,
        );
        self.bind(Context::Global, KeySpec::plain(Char('?')), Action::ShowHelp);

        // === Player overlay ===
        self.bind(Context::Player, KeySpec::plain(Esc), Action::Back);
        self.bind(
            Context::Player,
            KeySpec::plain(Char('x')),
            Action::ClosePlayer,
        );
        self.bind(
            Context::Player,
            KeySpec::plain(Char('q')),
            Action::ClosePlayer,
        );
        self.bind(
            Context::Player,
            KeySpec::plain(Char('f')),
            Action::Fullscreen,
        );
        self.bind(
            Context::Player,
            KeySpec::plain(Char('o')),
            Action::OpenInBrowser,
        );
    }

    /// Apply user overrides from config keybindings map.
    ///
    /// Keys in the map are action names (e.g., "quit", "nav_down").
    /// Values are key strings (e.g., "q", "Ctrl+d", "F5").
    ///
    /// Returns a list of warnings for unrecognized action names or unparseable keys.
    pub fn apply_overrides(&mut self, overrides: &HashMap<String, String>) -> Vec<String> {
        let mut warnings = Vec::new();

        for (action_name, key_str) in overrides {
            let Some(action) = parse_action_name(action_name) else {
                warnings.push(format!("Unknown action '{}', ignoring", action_name));
                continue;
            };

            let Some(key) = parse_key_string(key_str) else {
                warnings.push(format!(
                    "Cannot parse key '{}' for action '{}', ignoring",
                    key_str, action_name
                ));
                continue;
            };

            // Contexts the action was bound in, without duplicates
            let mut contexts: Vec<Context> = Vec::new();
            for (c, _, a) in &self.bindings {
                if *a == action && !contexts.contains(c) {
                    contexts.push(*c);
                }
            }

            self.lookup.retain(|_, a| *a != action);
            self.bindings.retain(|(_, _, a)| *a != action);

            for ctx in contexts {
                self.bind(ctx, key, action);
            }

            tracing::info!(
                action = %action_name,
                key = %key_str,
                "Applied keybinding override"
            );
        }

        warnings
    }

    /// Look up the action for a given key in a given context.
    ///
    /// Tries the specific context first, then falls back to Global.
    pub fn action_for_key(
        &self,
        code: KeyCode,
        modifiers: KeyModifiers,
        context: Context,
    ) -> Option<Action> {
        let key = KeySpec::from_event(code, modifiers);

        if let Some(&action) = self.lookup.get(&(context, key)) {
            return Some(action);
        }

        if context != Context::Global {
            if let Some(&action) = self.lookup.get(&(Context::Global, key)) {
                return Some(action);
            }
        }

        None
    }

    /// Display string of the first key bound to `action` in `context`.
    pub fn key_label(&self, context: Context, action: Action) -> Option<String> {
        self.bindings
            .iter()
            .find(|(c, _, a)| *c == context && *a == action)
            .map(|(_, key, _)| format_key(key))
    }

    /// Get all bindings for the help screen.
    ///
    /// Returns (context, key_display_string, action, description) tuples.
    pub fn all_bindings(&self) -> Vec<(Context, String, Action, &'static str)> {
        self.bindings
            .iter()
            .map(|(ctx, key, action)| (*ctx, format_key(key), *action, action.describe()))
            .collect()
    }
}

impl Default for KeybindingRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse an action name string (from config) into an Action enum.
fn parse_action_name(name: &str) -> Option<Action> {
    match name.to_lowercase().as_str() {
        "quit" => Some(Action::Quit),
        "nav_up" | "navup" | "up" | "category_up" => Some(Action::NavUp),
        "nav_down" | "navdown" | "down" | "category_down" => Some(Action::NavDown),
        "nav_left" | "navleft" | "left" | "previous" => Some(Action::NavLeft),
        "nav_right" | "navright" | "right" | "next" => Some(Action::NavRight),
        "play" => Some(Action::Play),
        "back" => Some(Action::Back),
        "close_player" | "closeplayer" | "close" => Some(Action::ClosePlayer),
        "fullscreen" => Some(Action::Fullscreen),
        "open_in_browser" | "openinbrowser" | "open" => Some(Action::OpenInBrowser),
        "cycle_theme" | "cycletheme" | "theme" => Some(Action::CycleTheme),
        "show_help" | "showhelp" | "help" => Some(Action::ShowHelp),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
