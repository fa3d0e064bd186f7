use log::{debug, info};
use thiserror::Error;

use crate::constants::RouteId;
use crate::error::{RouteError, StoreError};
use crate::graph::FlightRoute;
use crate::search::{cheapest_route, cheapest_route::CheapestRoute};
use crate::store::RouteStore;
use crate::validation::{CheapestRouteRequest, FlightRouteRequest, Validate, ValidationErrors};

/// Coarse classification of a [`ServiceError`] for whoever presents it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidRequest,
    NotFound,
    BusinessRule,
    Internal,
}

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error(transparent)]
    Route(#[from] RouteError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::Validation(_) => ErrorKind::InvalidRequest,
            ServiceError::Route(RouteError::NotFound { .. }) => ErrorKind::NotFound,
            ServiceError::Route(RouteError::Unreachable { .. }) => ErrorKind::BusinessRule,
            ServiceError::Store(StoreError::RouteNotFound(_)) => ErrorKind::NotFound,
            ServiceError::Store(StoreError::DuplicateRoute(_)) => ErrorKind::BusinessRule,
            ServiceError::Store(StoreError::Csv(_) | StoreError::Io(_)) => ErrorKind::Internal,
        }
    }

    /// HTTP status code matching [`ServiceError::kind`]
    pub fn status_code(&self) -> u16 {
        match self.kind() {
            ErrorKind::InvalidRequest | ErrorKind::BusinessRule => 400,
            ErrorKind::NotFound => 404,
            ErrorKind::Internal => 500,
        }
    }
}

/// Validates requests and runs them against a route store.
pub struct RouteService<S> {
    store: S,
}

impl<S: RouteStore> RouteService<S> {
    pub fn new(store: S) -> Self {
        RouteService { store }
    }

    pub fn cheapest(&self, request: &CheapestRouteRequest) -> Result<CheapestRoute, ServiceError> {
        request.validate()?;

        let routes = self.store.routes()?;
        debug!(
            "Searching {} -> {} over {} routes",
            request.origin,
            request.destination,
            routes.len()
        );

        let route = cheapest_route(&routes, &request.origin, &request.destination)?;
        info!(
            "Cheapest route {} costs {}",
            route.description(),
            route.total_cost
        );
        Ok(route)
    }

    pub fn route(&self, id: RouteId) -> Result<FlightRoute, ServiceError> {
        Ok(self.store.get(id)?)
    }

    pub fn routes(&self) -> Result<Vec<FlightRoute>, ServiceError> {
        Ok(self.store.routes()?)
    }

    pub fn create(&mut self, request: FlightRouteRequest) -> Result<Vec<FlightRoute>, ServiceError> {
        request.validate()?;
        info!("Creating route {}", request.id);
        Ok(self.store.create(request.into())?)
    }

    pub fn update(&mut self, request: FlightRouteRequest) -> Result<FlightRoute, ServiceError> {
        request.validate()?;
        info!("Updating route {}", request.id);
        Ok(self.store.update(request.into())?)
    }

    pub fn delete(&mut self, id: RouteId) -> Result<(), ServiceError> {
        info!("Deleting route {}", id);
        Ok(self.store.delete(id)?)
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use tempfile::TempDir;

    use crate::store::CsvRouteStore;

    use super::*;

    fn service() -> (TempDir, RouteService<CsvRouteStore>) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("routes.csv");
        fs::copy(
            Path::new(env!("CARGO_MANIFEST_DIR")).join("test_data/routes.csv"),
            &path,
        )
        .unwrap();
        (dir, RouteService::new(CsvRouteStore::new(path)))
    }

    #[test]
    fn cheapest_route_from_store() {
        let (_dir, service) = service();
        let route = service
            .cheapest(&CheapestRouteRequest::new("GRU", "CDG"))
            .unwrap();

        assert_eq!(route.description(), "GRU - BRC - SCL - ORL - CDG");
        assert_eq!(route.total_cost, 40);
    }

    #[test]
    fn error_kinds() {
        let (_dir, service) = service();

        let err = service
            .cheapest(&CheapestRouteRequest::new("GRU", "gru"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRequest);
        assert_eq!(err.status_code(), 400);

        let err = service
            .cheapest(&CheapestRouteRequest::new("XXX", "GRU"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.to_string(), "FlightRoute not found with Origin: XXX");

        let err = service
            .cheapest(&CheapestRouteRequest::new("BRC", "GRU"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BusinessRule);
        assert_eq!(err.to_string(), "No route found from BRC to GRU");
    }

    #[test]
    fn new_route_changes_the_answer() {
        let (_dir, mut service) = service();

        service
            .create(FlightRouteRequest::new(8, "BRC", "CDG", 1))
            .unwrap();
        let route = service
            .cheapest(&CheapestRouteRequest::new("GRU", "CDG"))
            .unwrap();
        assert_eq!(route.description(), "GRU - BRC - CDG");
        assert_eq!(route.total_cost, 11);

        service.delete(8).unwrap();
        let route = service
            .cheapest(&CheapestRouteRequest::new("GRU", "CDG"))
            .unwrap();
        assert_eq!(route.total_cost, 40);
    }

    #[test]
    fn invalid_route_is_not_stored() {
        let (_dir, mut service) = service();

        let err = service
            .create(FlightRouteRequest::new(8, "BRC", "CDG", 101))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRequest);
        assert_eq!(service.routes().unwrap().len(), 7);
    }

    #[test]
    fn store_errors_are_classified() {
        let (_dir, mut service) = service();

        let err = service
            .create(FlightRouteRequest::new(1, "BRC", "CDG", 1))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BusinessRule);

        let err = service.route(77).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let err = service
            .update(FlightRouteRequest::new(77, "BRC", "CDG", 1))
            .unwrap_err();
        assert_eq!(err.status_code(), 404);

        let updated = service
            .update(FlightRouteRequest::new(6, "ORL", "CDG", 1))
            .unwrap();
        assert_eq!(service.route(6).unwrap(), updated);
    }
}
