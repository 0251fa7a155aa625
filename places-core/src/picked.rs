/// Places the user would like to visit.
///
/// The most recently picked place comes first
/// and every place is contained at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PickedPlaces {
    ids: Vec<String>,
}

impl PickedPlaces {
    /// Returns `false` if the place has already been picked.
    pub fn select(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.contains(&id) {
            log::debug!("Place {id} has already been picked");
            return false;
        }
        log::debug!("Pick place {id}");
        self.ids.insert(0, id);
        true
    }

    /// Returns `false` if the place has not been picked.
    pub fn deselect(&mut self, id: &str) -> bool {
        let count = self.ids.len();
        self.ids.retain(|x| x != id);
        self.ids.len() < count
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|x| x == id)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
