//! The application route table.
//!
//! Two routes, mirroring the agency browser's pages: the summary view at the
//! root path and the agency-detail view at `/agency/{agency_name}`, with the
//! captured agency name forwarded to the detail view as its input property.

use crate::error::RouterError;
use crate::params::Param;
use crate::router::Router;

/// Name of the agency-detail route, for navigation by name.
pub const AGENCY_ROUTE: &str = "agency";

/// Builds the navigation controller for the agency browser.
///
/// `summary` and `agency_detail` are the two view units; the router treats
/// them as opaque. The returned router is bound to a fresh in-memory
/// history positioned at the root path, so the summary view is current
/// until the first navigation.
///
/// # Errors
///
/// Returns [`RouterError`] if route registration fails. With this fixed
/// table that indicates a programming error, but the error is surfaced
/// rather than panicking so the host application decides how to fail.
pub fn agency_router<V, S, A>(summary: S, agency_detail: A) -> Result<Router<V>, RouterError>
where
	V: 'static,
	S: Fn() -> V + Send + Sync + 'static,
	A: Fn(Param<String>) -> V + Send + Sync + 'static,
{
	Router::new()
		.route("/", summary)?
		.named_route_with(AGENCY_ROUTE, "/agency/{agency_name}", agency_detail)
}
