//! Widget event types.
//!
//! Hosts translate their native input into these events and hand them to a
//! widget together with the target [`NodeId`](horizon_disclosure_core::NodeId).
//! Widgets report back through the [`EventBase`]: `accept()` marks the event
//! as handled, `prevent_default()` asks the host to skip its own default
//! action (for example scrolling the page on ArrowDown).

/// Keyboard modifiers that may be held during input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held (Cmd on macOS).
    pub control: bool,
    /// The Alt key is held (Option on macOS).
    pub alt: bool,
    /// The Meta/Super key is held (Windows key, Cmd on macOS).
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum MouseButton {
    /// Primary button (usually left).
    #[default]
    Left = 0,
    /// Secondary button (usually right).
    Right = 1,
    /// Middle button (scroll wheel click).
    Middle = 2,
}

/// Common data for all widget events.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventBase {
    accepted: bool,
    default_prevented: bool,
}

impl EventBase {
    /// Create a new event base.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event, preventing further propagation.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event, allowing further propagation.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }

    /// Ask the host to skip its default action for this event.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether a handler asked to skip the host's default action.
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Click (activation by pointer) event.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClickEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was clicked.
    pub button: MouseButton,
    /// Keyboard modifiers held during the click.
    pub modifiers: KeyboardModifiers,
}

impl ClickEvent {
    /// Create a primary-button click with no modifiers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a click with the given button.
    pub fn with_button(button: MouseButton) -> Self {
        Self {
            button,
            ..Self::default()
        }
    }
}

/// Focus in event, sent when the node gains keyboard focus.
#[derive(Debug, Clone, Copy)]
pub struct FocusInEvent {
    /// Base event data.
    pub base: EventBase,
    /// The reason focus was gained.
    pub reason: FocusReason,
}

impl FocusInEvent {
    /// Create a new focus in event.
    pub fn new(reason: FocusReason) -> Self {
        Self {
            base: EventBase::new(),
            reason,
        }
    }
}

/// Focus out event, sent when the node loses keyboard focus.
#[derive(Debug, Clone, Copy)]
pub struct FocusOutEvent {
    /// Base event data.
    pub base: EventBase,
    /// The reason focus was lost.
    pub reason: FocusReason,
}

impl FocusOutEvent {
    /// Create a new focus out event.
    pub fn new(reason: FocusReason) -> Self {
        Self {
            base: EventBase::new(),
            reason,
        }
    }
}

/// Reason for focus change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusReason {
    /// Focus changed due to mouse click.
    Mouse,
    /// Focus changed due to Tab key.
    Tab,
    /// Focus changed due to Shift+Tab (backtab).
    Backtab,
    /// Focus moved by arrow/Home/End navigation inside a composite widget.
    Navigation,
    /// Focus changed programmatically.
    #[default]
    Other,
}

/// Keyboard keys understood by the widgets.
///
/// Keys the widgets never react to decode to [`Key::Unidentified`]; hosts can
/// still deliver them and the widgets leave them unhandled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum Key {
    // Navigation
    ArrowUp, ArrowDown, ArrowLeft, ArrowRight,
    Home, End, PageUp, PageDown,

    // Editing
    Backspace, Delete,
    Enter, Tab,

    // Whitespace
    Space,

    // Control
    Escape,

    /// Any key without a dedicated variant.
    Unidentified,
}

/// Key press event, sent when a key is pressed.
#[derive(Debug, Clone)]
pub struct KeyPressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The key that was pressed.
    pub key: Key,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
    /// Whether this is a key repeat event (key held down).
    pub is_repeat: bool,
}

impl KeyPressEvent {
    /// Create a new key press event.
    pub fn new(key: Key, modifiers: KeyboardModifiers, is_repeat: bool) -> Self {
        Self {
            base: EventBase::new(),
            key,
            modifiers,
            is_repeat,
        }
    }

    /// Create an unmodified, non-repeat key press.
    pub fn key(key: Key) -> Self {
        Self::new(key, KeyboardModifiers::NONE, false)
    }
}

/// Enum wrapper for all widget event types.
#[derive(Debug, Clone)]
pub enum WidgetEvent {
    /// Pointer activation.
    Click(ClickEvent),
    /// Key press event.
    KeyPress(KeyPressEvent),
    /// Focus in event.
    FocusIn(FocusInEvent),
    /// Focus out event.
    FocusOut(FocusOutEvent),
}

impl WidgetEvent {
    fn base(&self) -> &EventBase {
        match self {
            Self::Click(e) => &e.base,
            Self::KeyPress(e) => &e.base,
            Self::FocusIn(e) => &e.base,
            Self::FocusOut(e) => &e.base,
        }
    }

    fn base_mut(&mut self) -> &mut EventBase {
        match self {
            Self::Click(e) => &mut e.base,
            Self::KeyPress(e) => &mut e.base,
            Self::FocusIn(e) => &mut e.base,
            Self::FocusOut(e) => &mut e.base,
        }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.base().is_accepted()
    }

    /// Accept the event.
    pub fn accept(&mut self) {
        self.base_mut().accept();
    }

    /// Ignore the event.
    pub fn ignore(&mut self) {
        self.base_mut().ignore();
    }

    /// Ask the host to skip its default action.
    pub fn prevent_default(&mut self) {
        self.base_mut().prevent_default();
    }

    /// Whether a handler asked to skip the host's default action.
    pub fn is_default_prevented(&self) -> bool {
        self.base().is_default_prevented()
    }
}

impl From<ClickEvent> for WidgetEvent {
    fn from(event: ClickEvent) -> Self {
        Self::Click(event)
    }
}

impl From<KeyPressEvent> for WidgetEvent {
    fn from(event: KeyPressEvent) -> Self {
        Self::KeyPress(event)
    }
}

impl From<FocusInEvent> for WidgetEvent {
    fn from(event: FocusInEvent) -> Self {
        Self::FocusIn(event)
    }
}

impl From<FocusOutEvent> for WidgetEvent {
    fn from(event: FocusOutEvent) -> Self {
        Self::FocusOut(event)
    }
}
