//! Gesture-to-mutation translation for the builder's drag interactions.
//!
//! Three drag domains share one pointer: palette items inserted via the
//! drop-area sentinel, field cards reordered within the canvas, and
//! choice rows reordered within the open field editor. The coordinator
//! keeps them strictly separate: only a target in the domain the drag
//! originated from is ever acted upon.
//!
//! Reorders apply live on every drag-over that resolves to a valid
//! same-domain target; drag-end is authoritative only for the palette
//! insertion case. The will-insert indicator arms while a palette drag
//! hovers the sentinel and disarms when it leaves, and unconditionally on
//! drag-end, aborted drags included.

use formloom_api::{FieldId, FieldType};
use tracing::{debug, trace};

use crate::schema::FormSchema;

/// What a drag started from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragSource {
    /// A palette item of the given catalog type.
    Palette(FieldType),
    /// A field card on the canvas.
    Field(FieldId),
    /// A choice row inside the currently open field editor. Choices have
    /// no identity of their own, so the row is tracked by position.
    Choice { field: FieldId, index: usize },
}

/// What the pointer is over when an event fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragTarget {
    /// The designated "append new field here" sentinel.
    DropArea,
    Field(FieldId),
    Choice { field: FieldId, index: usize },
}

/// What an event did to the schema, so the caller knows whether to
/// re-render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEffect {
    None,
    Appended(FieldId),
    MovedField,
    MovedChoice,
}

/// Translates pointer drag events into schema mutations.
///
/// One coordinator serves one builder surface. The host gesture system
/// serializes drags, so overlapping drag-starts cannot occur; if one
/// arrives anyway the new drag simply becomes current.
#[derive(Debug, Default)]
pub struct DragCoordinator {
    dragging: Option<DragSource>,
    indicator_armed: bool,
}

impl DragCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging.is_some()
    }

    pub fn source(&self) -> Option<&DragSource> {
        self.dragging.as_ref()
    }

    /// Whether the drop-area sentinel should show its "will insert here"
    /// indicator.
    pub fn insert_indicator_armed(&self) -> bool {
        self.indicator_armed
    }

    /// Record the dragged element and enter the Dragging state.
    pub fn on_drag_start(&mut self, source: DragSource) {
        self.indicator_armed = false;
        debug!(?source, "drag started");
        self.dragging = Some(source);
    }

    /// Route a drag-over event. Fires many times per drag; each firing
    /// that resolves to a valid same-domain reorder target applies its
    /// move immediately.
    pub fn on_drag_over(&mut self, schema: &mut FormSchema, target: DragTarget) -> DragEffect {
        let Some(source) = self.dragging.clone() else {
            trace!("drag-over with no active drag");
            return DragEffect::None;
        };
        if let (DragSource::Palette(_), DragTarget::DropArea) = (&source, &target) {
            self.indicator_armed = true;
            return DragEffect::None;
        }
        // Any other hover leaves the sentinel, so the indicator disarms.
        self.indicator_armed = false;
        self.resolve_reorder(schema, &source, &target)
    }

    /// Route a drag-end event. Appends the dragged catalog type when a
    /// palette drag is released over the sentinel; reorder releases route
    /// through the same resolution as drag-over; anything unrecognized
    /// mutates nothing. The coordinator always returns to Idle.
    pub fn on_drag_end(
        &mut self,
        schema: &mut FormSchema,
        target: Option<DragTarget>,
    ) -> DragEffect {
        let source = self.dragging.take();
        self.indicator_armed = false;
        let Some(source) = source else {
            return DragEffect::None;
        };
        let Some(target) = target else {
            trace!(?source, "drag released over nothing");
            return DragEffect::None;
        };
        if let (DragSource::Palette(field_type), DragTarget::DropArea) = (&source, &target) {
            let field = schema.append(*field_type);
            let id = field.id.clone();
            debug!(%id, %field_type, "palette item inserted");
            return DragEffect::Appended(id);
        }
        self.resolve_reorder(schema, &source, &target)
    }

    /// Same-domain reorder resolution shared by drag-over and drag-end.
    /// Cross-domain pairs fall through without touching anything.
    fn resolve_reorder(
        &mut self,
        schema: &mut FormSchema,
        source: &DragSource,
        target: &DragTarget,
    ) -> DragEffect {
        match (source, target) {
            (DragSource::Field(from), DragTarget::Field(to)) => {
                if schema.reorder(from, to) {
                    DragEffect::MovedField
                } else {
                    DragEffect::None
                }
            }
            (
                DragSource::Choice { field, index: from },
                DragTarget::Choice {
                    field: target_field,
                    index: to,
                },
            ) => {
                if field != target_field {
                    // A choice row from another field's list; never acted on.
                    return DragEffect::None;
                }
                if schema.reorder_choice(field, *from, *to) {
                    // The dragged row now sits at the target index; keep the
                    // source in step so further drag-overs move the right row.
                    self.dragging = Some(DragSource::Choice {
                        field: field.clone(),
                        index: *to,
                    });
                    DragEffect::MovedChoice
                } else {
                    DragEffect::None
                }
            }
            _ => {
                trace!(?source, ?target, "cross-domain hover ignored");
                DragEffect::None
            }
        }
    }
}
