//! Street store with add/change/remove validation

use std::collections::BTreeMap;

use log::debug;

use super::Street;
use crate::error::StoreError;
use crate::model::Point;

/// Current set of streets, keyed by lower-cased name.
///
/// Iteration is in name order, which fixes the order in which a build
/// visits streets and therefore the order identities are handed out.
#[derive(Debug, Clone, Default)]
pub struct StreetStore {
    streets: BTreeMap<String, Street>,
}

fn normalize(name: &str) -> String {
    name.to_lowercase()
}

fn validate_points(points: &[Point]) -> Result<(), StoreError> {
    if points.is_empty() {
        return Err(StoreError::EmptyPointList);
    }
    points.iter().try_for_each(Point::check_range)?;
    Ok(())
}

impl StreetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a new street.
    ///
    /// # Errors
    ///
    /// `EmptyPointList` without points, `CoordinateOutOfRange` for a point
    /// beyond the coordinate limit, `DuplicateStreet` if the name is taken.
    pub fn add(&mut self, name: &str, points: Vec<Point>) -> Result<(), StoreError> {
        validate_points(&points)?;
        let key = normalize(name);
        if self.streets.contains_key(&key) {
            return Err(StoreError::DuplicateStreet(key));
        }
        debug!("Adding street \"{key}\" with {} points", points.len());
        self.streets.insert(key.clone(), Street::new(key, points));
        Ok(())
    }

    /// Replaces the polyline of an existing street.
    ///
    /// # Errors
    ///
    /// `EmptyPointList` or `CoordinateOutOfRange` as for [`StreetStore::add`],
    /// `UnknownStreet` if the name is absent.
    pub fn change(&mut self, name: &str, points: Vec<Point>) -> Result<(), StoreError> {
        validate_points(&points)?;
        let key = normalize(name);
        let street = self
            .streets
            .get_mut(&key)
            .ok_or_else(|| StoreError::UnknownStreet(key.clone()))?;
        debug!("Changing street \"{key}\" to {} points", points.len());
        street.points = points;
        Ok(())
    }

    /// Removes a street.
    ///
    /// # Errors
    ///
    /// `UnknownStreet` if the name is absent.
    pub fn remove(&mut self, name: &str) -> Result<Street, StoreError> {
        let key = normalize(name);
        let street = self
            .streets
            .remove(&key)
            .ok_or(StoreError::UnknownStreet(key))?;
        debug!("Removed street \"{}\"", street.name);
        Ok(street)
    }

    pub fn get(&self, name: &str) -> Option<&Street> {
        self.streets.get(&normalize(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.streets.contains_key(&normalize(name))
    }

    /// Streets in name order
    pub fn iter(&self) -> impl Iterator<Item = &Street> {
        self.streets.values()
    }

    pub fn len(&self) -> usize {
        self.streets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.streets.is_empty()
    }
}
