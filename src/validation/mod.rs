//! Route validation.
//!
//! Confirms that a candidate route is a closed tour through the required
//! locations, starting and ending at the home location. Every solver runs
//! this check on its own output before returning.

mod validator;

pub use validator::{validate_route, validate_route_against, RouteValidator};
