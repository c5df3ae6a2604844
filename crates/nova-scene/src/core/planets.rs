use crate::components::planet::Planet;

/// Planet storage using a flat Vec, in spawn order.
/// The spawn index doubles as the hover-zone / zoom-hook index.
pub struct PlanetSet {
    planets: Vec<Planet>,
}

impl PlanetSet {
    pub fn new() -> Self {
        Self::with_capacity(8)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            planets: Vec::with_capacity(capacity),
        }
    }

    /// Add a planet. Returns its index.
    pub fn spawn(&mut self, planet: Planet) -> usize {
        self.planets.push(planet);
        self.planets.len() - 1
    }

    /// Planet by spawn index.
    pub fn at(&self, index: usize) -> Option<&Planet> {
        self.planets.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Planet> {
        self.planets.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Planet> {
        self.planets.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.planets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }
}

impl Default for PlanetSet {
    fn default() -> Self {
        Self::new()
    }
}
