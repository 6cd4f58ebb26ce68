//! View handler abstractions.
//!
//! A route binds a path pattern to an opaque view unit. [`ViewHandler`] is
//! the seam between the two: the router hands it the captured placeholder
//! values, and it produces a rendered view of type `V`. Whether captures are
//! forwarded to the view ("props from path") is decided by which handler
//! kind the route was registered with.

use std::marker::PhantomData;
use std::sync::Arc;

use crate::error::RouterError;
use crate::params::{FromParams, Param, RouteParams};

/// A view constructor invocable at render time.
pub trait ViewHandler<V>: Send + Sync {
	/// Produces the view for a matched route.
	///
	/// # Errors
	///
	/// Returns [`RouterError::Param`] when typed parameter extraction fails.
	fn call(&self, params: &RouteParams) -> Result<V, RouterError>;
}

/// Handler for views that take no input properties.
///
/// Captured placeholder values, if any, are dropped.
struct UnitHandler<F> {
	view: F,
}

impl<V, F> ViewHandler<V> for UnitHandler<F>
where
	F: Fn() -> V + Send + Sync,
{
	fn call(&self, _params: &RouteParams) -> Result<V, RouterError> {
		Ok((self.view)())
	}
}

/// Handler for views that receive captured placeholder values as typed input.
struct ParamsHandler<F, T> {
	view: F,
	_marker: PhantomData<fn() -> T>,
}

impl<V, F, T> ViewHandler<V> for ParamsHandler<F, T>
where
	F: Fn(Param<T>) -> V + Send + Sync,
	T: FromParams,
{
	fn call(&self, params: &RouteParams) -> Result<V, RouterError> {
		let input = Param::<T>::from_params(params)?;
		Ok((self.view)(input))
	}
}

/// Wraps a zero-property view constructor.
pub(crate) fn unit_handler<V, F>(view: F) -> Arc<dyn ViewHandler<V>>
where
	F: Fn() -> V + Send + Sync + 'static,
	V: 'static,
{
	Arc::new(UnitHandler { view })
}

/// Wraps a view constructor that takes typed input properties.
pub(crate) fn params_handler<V, F, T>(view: F) -> Arc<dyn ViewHandler<V>>
where
	F: Fn(Param<T>) -> V + Send + Sync + 'static,
	T: FromParams + 'static,
	V: 'static,
{
	Arc::new(ParamsHandler {
		view,
		_marker: PhantomData,
	})
}
