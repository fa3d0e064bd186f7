//! Request validation done before the engine or the store sees a request.
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{Cost, RouteId, AIRPORT_CODE_LEN, MAX_ROUTE_COST};
use crate::graph::FlightRoute;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        ValidationError {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every rule a request violates, in rule order
#[derive(Error, Debug, Clone, PartialEq, Eq, Default)]
#[error("One or more validation errors occurred.")]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn messages(&self) -> Vec<&str> {
        self.0.iter().map(|e| e.message.as_str()).collect()
    }

    fn into_result(self) -> Result<(), ValidationErrors> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheapestRouteRequest {
    pub origin: String,
    pub destination: String,
}

impl CheapestRouteRequest {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        CheapestRouteRequest {
            origin: origin.into(),
            destination: destination.into(),
        }
    }
}

impl Validate for CheapestRouteRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();
        check_endpoints(&self.origin, &self.destination, &mut errors);
        ValidationErrors(errors).into_result()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightRouteRequest {
    pub id: RouteId,
    pub origin: String,
    pub destination: String,
    pub cost: Cost,
}

impl FlightRouteRequest {
    pub fn new(
        id: RouteId,
        origin: impl Into<String>,
        destination: impl Into<String>,
        cost: Cost,
    ) -> Self {
        FlightRouteRequest {
            id,
            origin: origin.into(),
            destination: destination.into(),
            cost,
        }
    }
}

impl Validate for FlightRouteRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();

        if self.cost == 0 {
            errors.push(ValidationError::new("cost", "Cost must be greater than 0"));
        } else if self.cost > MAX_ROUTE_COST {
            errors.push(ValidationError::new(
                "cost",
                format!("Cost cannot exceed {}", MAX_ROUTE_COST),
            ));
        }
        check_endpoints(&self.origin, &self.destination, &mut errors);

        ValidationErrors(errors).into_result()
    }
}

impl From<FlightRouteRequest> for FlightRoute {
    fn from(request: FlightRouteRequest) -> Self {
        FlightRoute::new(request.id, request.origin, request.destination, request.cost)
    }
}

fn check_airport_code(
    field: &'static str,
    label: &str,
    code: &str,
    errors: &mut Vec<ValidationError>,
) {
    if code.trim().is_empty() {
        errors.push(ValidationError::new(field, format!("{} is required", label)));
    }
    if code.chars().count() != AIRPORT_CODE_LEN {
        errors.push(ValidationError::new(
            field,
            format!("{} must be {} characters long", label, AIRPORT_CODE_LEN),
        ));
    }
}

fn check_endpoints(origin: &str, destination: &str, errors: &mut Vec<ValidationError>) {
    check_airport_code("origin", "Origin", origin, errors);
    check_airport_code("destination", "Destination", destination, errors);

    if origin.to_lowercase() == destination.to_lowercase() {
        errors.push(ValidationError::new(
            "route",
            "Origin and Destination cannot be the same",
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_query() {
        assert_eq!(CheapestRouteRequest::new("GRU", "CDG").validate(), Ok(()));
    }

    #[test]
    fn query_needs_both_codes() {
        let err = CheapestRouteRequest::new("", "CDGX").validate().unwrap_err();
        assert_eq!(
            err.messages(),
            vec![
                "Origin is required",
                "Origin must be 3 characters long",
                "Destination must be 3 characters long"
            ]
        );
        assert_eq!(err.errors()[0].field, "origin");
        assert_eq!(err.errors()[1].field, "origin");
    }

    #[test]
    fn blank_code_of_the_right_length_is_only_missing() {
        let err = CheapestRouteRequest::new("   ", "CDG").validate().unwrap_err();
        assert_eq!(err.messages(), vec!["Origin is required"]);
    }

    #[test]
    fn query_endpoints_differ_ignoring_case() {
        let err = CheapestRouteRequest::new("gru", "GRU").validate().unwrap_err();
        assert_eq!(err.messages(), vec!["Origin and Destination cannot be the same"]);
    }

    #[test]
    fn valid_route() {
        assert_eq!(FlightRouteRequest::new(1, "GRU", "BRC", 100).validate(), Ok(()));
        assert_eq!(FlightRouteRequest::new(1, "GRU", "BRC", 1).validate(), Ok(()));
    }

    #[test]
    fn route_cost_bounds() {
        let err = FlightRouteRequest::new(1, "GRU", "BRC", 0)
            .validate()
            .unwrap_err();
        assert_eq!(err.messages(), vec!["Cost must be greater than 0"]);

        let err = FlightRouteRequest::new(1, "GRU", "BRC", 101)
            .validate()
            .unwrap_err();
        assert_eq!(err.messages(), vec!["Cost cannot exceed 100"]);
    }

    #[test]
    fn route_collects_every_violation() {
        let err = FlightRouteRequest::new(1, "GR", "  ", 0)
            .validate()
            .unwrap_err();
        assert_eq!(
            err.messages(),
            vec![
                "Cost must be greater than 0",
                "Origin must be 3 characters long",
                "Destination is required",
                "Destination must be 3 characters long",
            ]
        );
        assert_eq!(err.to_string(), "One or more validation errors occurred.");
    }

    #[test]
    fn request_into_route() {
        let route: FlightRoute = FlightRouteRequest::new(4, "GRU", "SCL", 20).into();
        assert_eq!(route, FlightRoute::new(4, "GRU", "SCL", 20));
    }
}
