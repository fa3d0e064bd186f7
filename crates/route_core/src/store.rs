//! Route storage.
//!
//! The engine only needs a complete snapshot of the routes, see [`ProvidesRoutes`].
//! Maintaining the routes goes through [`RouteStore`].
use std::path::{Path, PathBuf};

use log::debug;

use crate::constants::RouteId;
use crate::error::StoreError;
use crate::graph::FlightRoute;

/// Supplies the current list of routes
pub trait ProvidesRoutes {
    fn routes(&self) -> Result<Vec<FlightRoute>, StoreError>;
}

pub trait RouteStore: ProvidesRoutes {
    fn get(&self, id: RouteId) -> Result<FlightRoute, StoreError>;

    /// Adds `route` and returns all routes including the new one.
    fn create(&mut self, route: FlightRoute) -> Result<Vec<FlightRoute>, StoreError>;

    fn update(&mut self, route: FlightRoute) -> Result<FlightRoute, StoreError>;

    fn delete(&mut self, id: RouteId) -> Result<(), StoreError>;
}

/// Routes kept in a csv file with the header `id,origin,destination,cost`.
///
/// The file is read on every call, a missing file is an empty route list.
#[derive(Debug, Clone)]
pub struct CsvRouteStore {
    path: PathBuf,
}

impl CsvRouteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CsvRouteStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<FlightRoute>, StoreError> {
        if !self.path.exists() {
            debug!("{:?} does not exist yet, no routes", self.path);
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.path)?;
        let routes = reader
            .deserialize()
            .collect::<Result<Vec<FlightRoute>, csv::Error>>()?;
        debug!("Loaded {} routes from {:?}", routes.len(), self.path);
        Ok(routes)
    }

    fn save(&self, routes: &[FlightRoute]) -> Result<(), StoreError> {
        let mut wtr = csv::Writer::from_path(&self.path)?;
        for route in routes {
            wtr.serialize(route)?;
        }
        wtr.flush()?;
        debug!("Saved {} routes to {:?}", routes.len(), self.path);
        Ok(())
    }
}

impl ProvidesRoutes for CsvRouteStore {
    fn routes(&self) -> Result<Vec<FlightRoute>, StoreError> {
        self.load()
    }
}

impl RouteStore for CsvRouteStore {
    fn get(&self, id: RouteId) -> Result<FlightRoute, StoreError> {
        self.load()?
            .into_iter()
            .find(|route| route.id == id)
            .ok_or(StoreError::RouteNotFound(id))
    }

    fn create(&mut self, route: FlightRoute) -> Result<Vec<FlightRoute>, StoreError> {
        let mut routes = self.load()?;
        if routes.iter().any(|r| r.id == route.id) {
            return Err(StoreError::DuplicateRoute(route.id));
        }

        routes.push(route);
        self.save(&routes)?;
        Ok(routes)
    }

    fn update(&mut self, route: FlightRoute) -> Result<FlightRoute, StoreError> {
        let mut routes = self.load()?;
        let pos = routes
            .iter()
            .position(|r| r.id == route.id)
            .ok_or(StoreError::RouteNotFound(route.id))?;

        // The updated route moves to the end of the file
        routes.remove(pos);
        routes.push(route.clone());
        self.save(&routes)?;
        Ok(route)
    }

    fn delete(&mut self, id: RouteId) -> Result<(), StoreError> {
        let mut routes = self.load()?;
        let pos = routes
            .iter()
            .position(|r| r.id == id)
            .ok_or(StoreError::RouteNotFound(id))?;

        routes.remove(pos);
        self.save(&routes)
    }
}
