//! Active input control scheme.

use crate::model::ControlSchemeKind;
use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use std::fmt;
use tracing::debug;

/// Input bindings deciding which gestures drive the camera.
pub trait ControlScheme: fmt::Debug {
    /// Which scheme this is.
    fn kind(&self) -> ControlSchemeKind;

    /// Whether `event` belongs to camera navigation rather than to the
    /// active manipulator.
    fn controls_camera(&self, event: &MouseEvent) -> bool;
}

/// Builds control schemes on demand.
pub trait ControlSchemeFactory {
    /// Build a fresh scheme of `kind`.
    fn create(&self, kind: ControlSchemeKind) -> Box<dyn ControlScheme>;
}

impl<F> ControlSchemeFactory for F
where
    F: Fn(ControlSchemeKind) -> Box<dyn ControlScheme>,
{
    fn create(&self, kind: ControlSchemeKind) -> Box<dyn ControlScheme> {
        self(kind)
    }
}

/// Reference bindings for headless hosts.
///
/// - Maya: Alt + any button
/// - Maya laptop: Alt + left/right, Ctrl + Alt stands in for the middle button
/// - Max: middle button, with or without Alt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardControlScheme {
    kind: ControlSchemeKind,
}

impl StandardControlScheme {
    /// Reference bindings for `kind`.
    pub fn new(kind: ControlSchemeKind) -> Self {
        Self { kind }
    }
}

impl ControlScheme for StandardControlScheme {
    fn kind(&self) -> ControlSchemeKind {
        self.kind
    }

    fn controls_camera(&self, event: &MouseEvent) -> bool {
        let button = match event.kind {
            MouseEventKind::Down(b) | MouseEventKind::Drag(b) => b,
            _ => return false,
        };
        let alt = event.modifiers.contains(KeyModifiers::ALT);
        match self.kind {
            ControlSchemeKind::Maya => alt,
            ControlSchemeKind::MayaLaptop => {
                alt && (button != MouseButton::Middle
                    || event.modifiers.contains(KeyModifiers::CONTROL))
            }
            ControlSchemeKind::Max => button == MouseButton::Middle,
        }
    }
}

/// Factory producing [`StandardControlScheme`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardSchemes;

impl ControlSchemeFactory for StandardSchemes {
    fn create(&self, kind: ControlSchemeKind) -> Box<dyn ControlScheme> {
        Box::new(StandardControlScheme::new(kind))
    }
}

/// Holds the active control scheme.
///
/// Selecting a scheme always builds a fresh instance; nothing carries over
/// from the previous one.
pub struct InputScheme {
    active: Box<dyn ControlScheme>,
    factory: Box<dyn ControlSchemeFactory>,
}

impl InputScheme {
    /// Start with a scheme of `kind` built by `factory`.
    pub fn new(factory: Box<dyn ControlSchemeFactory>, kind: ControlSchemeKind) -> Self {
        let active = factory.create(kind);
        Self { active, factory }
    }

    /// Kind of the active scheme.
    pub fn kind(&self) -> ControlSchemeKind {
        self.active.kind()
    }

    /// The scheme currently in use.
    pub fn active(&self) -> &dyn ControlScheme {
        self.active.as_ref()
    }

    /// Replace the active scheme with a new instance of `kind`.
    pub fn select(&mut self, kind: ControlSchemeKind) {
        let previous = self.active.kind();
        self.active = self.factory.create(kind);
        debug!(%previous, current = %kind, "Control scheme replaced");
    }
}

impl fmt::Debug for InputScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputScheme")
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}
