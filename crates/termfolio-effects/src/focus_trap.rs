//! Focus trap: keeps keyboard focus cycling inside a modal.
//!
//! The trap works against a [`FocusHost`], the element tree that owns focus.
//! Tab on the last focusable element wraps to the first; Shift+Tab on the
//! first wraps to the last. When the trap is destroyed, focus returns to
//! whatever held it before the trap was attached.

/// Element categories relevant to focusability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Anchor { has_href: bool },
    Area { has_href: bool },
    Input,
    Select,
    Textarea,
    Button,
    Iframe,
    Object,
    Embed,
    Other,
}

/// An element inside the trapped container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Focusable {
    pub id: String,
    pub kind: ElementKind,
    pub disabled: bool,
    pub tab_index: Option<i32>,
    pub content_editable: bool,
}

impl Focusable {
    pub fn new(id: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            id: id.into(),
            kind,
            disabled: false,
            tab_index: None,
            content_editable: false,
        }
    }

    /// Whether keyboard navigation can land on this element.
    ///
    /// Links and areas need an `href`; form controls must not be disabled;
    /// embedded content always qualifies; anything else needs
    /// `tabindex="0"` or `contenteditable`.
    pub fn is_focusable(&self) -> bool {
        let by_kind = match self.kind {
            ElementKind::Anchor { has_href } | ElementKind::Area { has_href } => has_href,
            ElementKind::Input | ElementKind::Select | ElementKind::Textarea | ElementKind::Button => {
                !self.disabled
            },
            ElementKind::Iframe | ElementKind::Object | ElementKind::Embed => true,
            ElementKind::Other => false,
        };
        by_kind || self.tab_index == Some(0) || self.content_editable
    }
}

/// Keys the trap cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Tab,
    Enter,
    Escape,
    Char(char),
}

/// The element tree that owns keyboard focus.
pub trait FocusHost {
    /// Elements inside the trapped container, in document order.
    fn elements(&self) -> Vec<Focusable>;

    /// Id of the element that currently has focus anywhere in the document.
    fn active_element(&self) -> Option<String>;

    /// Move focus to `id`.
    fn focus(&mut self, id: &str);
}

/// Attached focus trap.
#[derive(Debug)]
pub struct FocusTrap {
    previous: Option<String>,
    first: Option<String>,
    last: Option<String>,
}

impl FocusTrap {
    /// Attach to `host`: remember the current focus and move focus to the
    /// first focusable element.
    pub fn attach(host: &mut dyn FocusHost) -> Self {
        let mut trap = Self {
            previous: host.active_element(),
            first: None,
            last: None,
        };
        trap.refresh(host);
        if let Some(first) = &trap.first {
            host.focus(first);
        }
        trap
    }

    /// Recompute the first and last focusable elements.
    fn refresh(&mut self, host: &dyn FocusHost) {
        let focusable: Vec<String> = host
            .elements()
            .into_iter()
            .filter(Focusable::is_focusable)
            .map(|e| e.id)
            .collect();
        self.first = focusable.first().cloned();
        self.last = focusable.last().cloned();
    }

    /// Handle a key press. Returns `true` when the default Tab behavior
    /// must be suppressed because focus was wrapped.
    pub fn handle_key(&mut self, host: &mut dyn FocusHost, key: Key, shift: bool) -> bool {
        if key != Key::Tab {
            return false;
        }

        // The container may have changed since the last key press.
        self.refresh(host);
        let (Some(first), Some(last)) = (self.first.clone(), self.last.clone()) else {
            return false;
        };

        let active = host.active_element();
        if shift {
            if active.as_deref() == Some(first.as_str()) {
                host.focus(&last);
                return true;
            }
        } else if active.as_deref() == Some(last.as_str()) {
            host.focus(&first);
            return true;
        }
        false
    }

    /// Detach and return focus to the element focused before `attach`.
    pub fn destroy(self, host: &mut dyn FocusHost) {
        if let Some(prev) = &self.previous {
            host.focus(prev);
        }
    }
}
