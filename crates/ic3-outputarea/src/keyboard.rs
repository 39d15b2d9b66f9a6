//! Keyboard event bookkeeping for output subareas

use ic3_core::{Element, NodeId};

/// Records which output subareas have been wired for keyboard handling.
///
/// Interactive output must not leak keystrokes to the surrounding cell
/// shortcuts. The host-side event plumbing lives in the browser; this model
/// keeps the part that matters for the document tree: the element is made
/// focusable (`tabindex="-1"`) and its id is remembered so a host can attach
/// its handlers later.
///
/// # Examples
///
/// ```rust
/// use ic3_core::Element;
/// use ic3_outputarea::KeyboardManager;
///
/// let mut manager = KeyboardManager::new();
/// let mut subarea = Element::new("div");
/// manager.register_events(&mut subarea);
///
/// assert_eq!(subarea.attr("tabindex"), Some("-1"));
/// assert!(manager.is_registered(subarea.id()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardManager {
    registered: Vec<NodeId>,
}

impl KeyboardManager {
    /// Create a manager with no registered elements.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            registered: Vec::new(),
        }
    }

    /// Mark an element focusable and record it for keyboard handling.
    ///
    /// Registering the same element twice is a no-op for the bookkeeping;
    /// the `tabindex` attribute is simply written again.
    pub fn register_events(&mut self, element: &mut Element) {
        element.set_attr("tabindex", "-1");
        let id = element.id();
        if !self.registered.contains(&id) {
            self.registered.push(id);
        }
    }

    /// Check whether an element id has been registered.
    #[inline]
    #[must_use]
    pub fn is_registered(&self, id: NodeId) -> bool {
        self.registered.contains(&id)
    }

    /// All registered element ids, in registration order.
    #[inline]
    #[must_use]
    pub fn registered(&self) -> &[NodeId] {
        &self.registered
    }

    /// Number of registered elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.registered.len()
    }

    /// Check if no elements have been registered.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registered.is_empty()
    }
}
