//! Semantic annotations attached to nodes by an external resolver.
//!
//! The values are opaque handles: this crate stores and copies them, it never
//! interprets them.

use bitflags::bitflags;

/// Handle to an element (declaration) owned by the resolver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u32);

/// Handle to a type owned by the resolver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub u32);

/// Elements recorded for the non-primary meaning of an identifier, such as the
/// getter of a compound assignment target whose setter is the primary element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct AuxiliaryElements {
    pub static_element: Option<ElementId>,
    pub propagated_element: Option<ElementId>,
}

bitflags! {
    /// Annotation slots a node variant is able to carry.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct AnnotationSlots: u8 {
        /// The element declared (or directive target) of the node.
        const ELEMENT = 1 << 0;
        const STATIC_ELEMENT = 1 << 1;
        const PROPAGATED_ELEMENT = 1 << 2;
        const STATIC_TYPE = 1 << 3;
        const PROPAGATED_TYPE = 1 << 4;
        const AUXILIARY = 1 << 5;

        const RESOLVED_ELEMENTS = Self::STATIC_ELEMENT.bits() | Self::PROPAGATED_ELEMENT.bits();
        const TYPES = Self::STATIC_TYPE.bits() | Self::PROPAGATED_TYPE.bits();
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Annotations {
    pub element: Option<ElementId>,
    pub static_element: Option<ElementId>,
    pub propagated_element: Option<ElementId>,
    pub static_type: Option<TypeId>,
    pub propagated_type: Option<TypeId>,
    pub auxiliary: Option<AuxiliaryElements>,
}

impl Annotations {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Keeps the slots in `slots` and clears the others.
    pub fn restrict(self, slots: AnnotationSlots) -> Self {
        Self {
            element: self.element.filter(|_| slots.contains(AnnotationSlots::ELEMENT)),
            static_element: self
                .static_element
                .filter(|_| slots.contains(AnnotationSlots::STATIC_ELEMENT)),
            propagated_element: self
                .propagated_element
                .filter(|_| slots.contains(AnnotationSlots::PROPAGATED_ELEMENT)),
            static_type: self.static_type.filter(|_| slots.contains(AnnotationSlots::STATIC_TYPE)),
            propagated_type: self
                .propagated_type
                .filter(|_| slots.contains(AnnotationSlots::PROPAGATED_TYPE)),
            auxiliary: self.auxiliary.filter(|_| slots.contains(AnnotationSlots::AUXILIARY)),
        }
    }
}
