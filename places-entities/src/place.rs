use crate::geo::MapPoint;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Image {
    /// Absolute URL or a path relative to the API root.
    pub src: String,
    pub alt: String,
}

// A place that can be picked by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub pos: MapPoint,
    pub image: Image,
}

impl Place {
    pub fn has_valid_pos(&self) -> bool {
        self.pos.is_valid()
    }
}
