use carousel::InputEvent;

/// Host event listeners a strip may hold on its surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ListenerKind {
    /// Enter/leave/down/move/up/cancel and click.
    Pointer,
    Wheel,
    /// Track size observation.
    Resize,
    /// Document-level keys while an overlay is open.
    Keyboard,
}

impl ListenerKind {
    pub const ALL: [Self; 4] = [Self::Pointer, Self::Wheel, Self::Resize, Self::Keyboard];

    fn slot(self) -> usize {
        match self {
            Self::Pointer => 0,
            Self::Wheel => 1,
            Self::Resize => 2,
            Self::Keyboard => 3,
        }
    }

    /// The listener an engine input arrives through.
    pub fn for_input(event: &InputEvent) -> Self {
        match event {
            InputEvent::Wheel { .. } => Self::Wheel,
            _ => Self::Pointer,
        }
    }
}

/// Where listeners are attached (a DOM element, a widget, a test double).
pub trait EventSurface {
    fn attach(&mut self, kind: ListenerKind);
    fn detach(&mut self, kind: ListenerKind);
}

/// Tracks which listeners are attached so each is added and removed exactly once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListenerSet {
    attached: [bool; 4],
}

impl ListenerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_attached(&self, kind: ListenerKind) -> bool {
        self.attached[kind.slot()]
    }

    pub fn count(&self) -> usize {
        self.attached.iter().filter(|a| **a).count()
    }

    pub fn attach<E: EventSurface + ?Sized>(&mut self, kind: ListenerKind, surface: &mut E) {
        let slot = &mut self.attached[kind.slot()];
        if !*slot {
            *slot = true;
            surface.attach(kind);
        }
    }

    pub fn detach<E: EventSurface + ?Sized>(&mut self, kind: ListenerKind, surface: &mut E) {
        let slot = &mut self.attached[kind.slot()];
        if *slot {
            *slot = false;
            surface.detach(kind);
        }
    }

    pub fn detach_all<E: EventSurface + ?Sized>(&mut self, surface: &mut E) {
        for kind in ListenerKind::ALL {
            self.detach(kind, surface);
        }
    }
}
