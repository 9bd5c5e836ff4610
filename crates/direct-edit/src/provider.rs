//! The provider contract.
//!
//! A provider knows how to read and write the label of some kind of diagram
//! element. The controller never inspects elements itself; it asks each
//! registered provider in turn whether it can edit one.

use direct_edit_core::Rect;

use crate::context::ActivationContext;

/// Reads and persists element labels for the editing session.
///
/// # Example
///
/// ```
/// use direct_edit::{ActivationContext, Bounds, DirectEditingProvider};
/// use direct_edit::Rect;
///
/// struct Label;
///
/// impl DirectEditingProvider<String> for Label {
///     fn can_activate(&self, element: &String) -> Option<ActivationContext> {
///         Some(ActivationContext::new(Bounds::new(0.0, 0.0, 100.0, 20.0), element.clone()))
///     }
///
///     fn commit(&self, _element: &String, new_text: &str, _old_text: &str, _bounds: Rect) {
///         println!("new label: {new_text}");
///     }
/// }
/// ```
pub trait DirectEditingProvider<E>: Send + Sync {
    /// Decide whether `element` can be edited, and how.
    ///
    /// Must not mutate the element. Returning `None` passes the element on
    /// to the next registered provider.
    fn can_activate(&self, element: &E) -> Option<ActivationContext>;

    /// Apply an edit to the element.
    ///
    /// `bounds` is the surface's rendered geometry at completion, which may
    /// differ from the activation bounds after autosize or a manual resize.
    /// Failures are the provider's own concern.
    fn commit(&self, element: &E, new_text: &str, old_text: &str, bounds: Rect);
}
