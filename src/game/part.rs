use glam::Vec3;

/// Identifies one of the station's two animated parts.
#[derive(Clone, Copy, Debug, Eq, PartialEq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum PartId {
    /// Board carriage, travels along Z.
    Carriage,
    /// Solder head, travels on X and Y.
    Head,
}

/// A scene part whose local position this component animates. The original
/// position is captured once at construction and never changes.
#[derive(Clone, Copy, Debug)]
pub struct MovablePart {
    position: Vec3,
    original: Vec3,
}

impl MovablePart {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            original: position,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    pub fn original_position(&self) -> Vec3 {
        self.original
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }
}

/// The two animated parts, owned by the host scene. Either may be absent, in
/// which case its moves complete immediately.
#[derive(Debug, Default)]
pub struct StationParts {
    pub carriage: Option<MovablePart>,
    pub head: Option<MovablePart>,
}

impl StationParts {
    pub fn get(&self, id: PartId) -> Option<&MovablePart> {
        match id {
            PartId::Carriage => self.carriage.as_ref(),
            PartId::Head => self.head.as_ref(),
        }
    }

    pub fn get_mut(&mut self, id: PartId) -> Option<&mut MovablePart> {
        match id {
            PartId::Carriage => self.carriage.as_mut(),
            PartId::Head => self.head.as_mut(),
        }
    }
}
