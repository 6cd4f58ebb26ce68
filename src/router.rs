//! The navigation controller.
//!
//! A [`Router`] owns an ordered, immutable route table and an in-memory
//! history. It resolves paths to views, navigates programmatically by path
//! or by route name, and exposes the currently resolved view to the
//! rendering layer.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::RouterError;
use crate::handler::{ViewHandler, params_handler, unit_handler};
use crate::history::MemoryHistory;
use crate::params::{FromParams, Param, RouteParams};
use crate::pattern::PathPattern;

/// A single route descriptor: a path pattern bound to a view unit.
pub struct Route<V> {
	pattern: PathPattern,
	name: Option<String>,
	handler: Arc<dyn ViewHandler<V>>,
}

impl<V> Clone for Route<V> {
	fn clone(&self) -> Self {
		Self {
			pattern: self.pattern.clone(),
			name: self.name.clone(),
			handler: Arc::clone(&self.handler),
		}
	}
}

impl<V> std::fmt::Debug for Route<V> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Route")
			.field("pattern", &self.pattern)
			.field("name", &self.name)
			.finish()
	}
}

impl<V> Route<V> {
	/// Returns the route name, if any.
	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	/// Returns the path pattern.
	pub fn pattern(&self) -> &PathPattern {
		&self.pattern
	}
}

/// A matched route with the values captured from the path.
#[derive(Debug, Clone)]
pub struct RouteMatch<V> {
	/// The matched route descriptor.
	pub route: Route<V>,
	/// Placeholder values captured from the path.
	pub params: RouteParams,
}

impl<V> RouteMatch<V> {
	/// Renders the matched view, forwarding captured values when the route
	/// was registered with a parameter-taking view constructor.
	pub fn render(&self) -> Result<V, RouterError> {
		self.route.handler.call(&self.params)
	}
}

/// The client-side navigation controller.
///
/// Built once at startup from a fixed list of routes; the table cannot be
/// mutated afterwards. Navigation records entries in an in-memory history
/// stack and never touches any host-visible address state.
pub struct Router<V> {
	routes: Vec<Route<V>>,
	names: HashMap<String, usize>,
	not_found: Option<Arc<dyn Fn() -> V + Send + Sync>>,
	history: RwLock<MemoryHistory>,
}

impl<V> std::fmt::Debug for Router<V> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Router")
			.field("routes_count", &self.routes.len())
			.field("named_routes", &self.names.keys().collect::<Vec<_>>())
			.field("history", &*self.history.read())
			.finish()
	}
}

impl<V: 'static> Default for Router<V> {
	fn default() -> Self {
		Self::new()
	}
}

/// The empty path is an alias for the root.
fn normalize(path: &str) -> &str {
	if path.is_empty() { "/" } else { path }
}

impl<V: 'static> Router<V> {
	/// Creates an empty router positioned at the root path.
	pub fn new() -> Self {
		Self {
			routes: Vec::new(),
			names: HashMap::new(),
			not_found: None,
			history: RwLock::new(MemoryHistory::new()),
		}
	}

	fn add(mut self, route: Route<V>) -> Result<Self, RouterError> {
		if self
			.routes
			.iter()
			.any(|r| r.pattern.pattern() == route.pattern.pattern())
		{
			return Err(RouterError::DuplicatePattern(
				route.pattern.pattern().to_string(),
			));
		}
		if let Some(name) = &route.name {
			if self.names.contains_key(name) {
				return Err(RouterError::DuplicateName(name.clone()));
			}
			self.names.insert(name.clone(), self.routes.len());
		}
		self.routes.push(route);
		Ok(self)
	}

	/// Adds a route whose view takes no input properties.
	///
	/// # Errors
	///
	/// Returns [`RouterError::Pattern`] for a malformed pattern or
	/// [`RouterError::DuplicatePattern`] when the pattern is already
	/// registered.
	pub fn route<F>(self, pattern: &str, view: F) -> Result<Self, RouterError>
	where
		F: Fn() -> V + Send + Sync + 'static,
	{
		self.add(Route {
			pattern: PathPattern::new(pattern)?,
			name: None,
			handler: unit_handler(view),
		})
	}

	/// Adds a named route whose view takes no input properties.
	pub fn named_route<F>(self, name: &str, pattern: &str, view: F) -> Result<Self, RouterError>
	where
		F: Fn() -> V + Send + Sync + 'static,
	{
		self.add(Route {
			pattern: PathPattern::new(pattern)?,
			name: Some(name.to_string()),
			handler: unit_handler(view),
		})
	}

	/// Adds a route whose view receives the captured placeholder values as
	/// typed input properties.
	pub fn route_with<F, T>(self, pattern: &str, view: F) -> Result<Self, RouterError>
	where
		F: Fn(Param<T>) -> V + Send + Sync + 'static,
		T: FromParams + 'static,
	{
		self.add(Route {
			pattern: PathPattern::new(pattern)?,
			name: None,
			handler: params_handler(view),
		})
	}

	/// Adds a named route whose view receives the captured placeholder
	/// values as typed input properties.
	pub fn named_route_with<F, T>(
		self,
		name: &str,
		pattern: &str,
		view: F,
	) -> Result<Self, RouterError>
	where
		F: Fn(Param<T>) -> V + Send + Sync + 'static,
		T: FromParams + 'static,
	{
		self.add(Route {
			pattern: PathPattern::new(pattern)?,
			name: Some(name.to_string()),
			handler: params_handler(view),
		})
	}

	/// Sets the view rendered when no route matches the current path.
	pub fn not_found<F>(mut self, view: F) -> Self
	where
		F: Fn() -> V + Send + Sync + 'static,
	{
		self.not_found = Some(Arc::new(view));
		self
	}

	/// Resolves a path against the route table.
	///
	/// Routes are tried in registration order; the first match wins. Pure
	/// with respect to router state: resolution never records history.
	///
	/// # Errors
	///
	/// Returns [`RouterError::NotFound`] when no route matches.
	pub fn resolve(&self, path: &str) -> Result<RouteMatch<V>, RouterError> {
		let path = normalize(path);
		for route in &self.routes {
			if let Some((named, ordered)) = route.pattern.matches(path) {
				return Ok(RouteMatch {
					route: route.clone(),
					params: RouteParams::new(named, ordered),
				});
			}
		}
		tracing::debug!(path = %path, "no route matched");
		Err(RouterError::NotFound(path.to_string()))
	}

	/// Navigates to a path, recording a new history entry.
	///
	/// # Errors
	///
	/// Returns [`RouterError::NotFound`] for an unmatched path; history is
	/// left untouched in that case.
	pub fn push(&self, path: &str) -> Result<(), RouterError> {
		let resolved = self.resolve(path)?;
		let path = normalize(path);
		tracing::debug!(path = %path, route = ?resolved.route.name(), "push");
		self.history.write().push(path);
		Ok(())
	}

	/// Navigates to a path, replacing the current history entry.
	pub fn replace(&self, path: &str) -> Result<(), RouterError> {
		let resolved = self.resolve(path)?;
		let path = normalize(path);
		tracing::debug!(path = %path, route = ?resolved.route.name(), "replace");
		self.history.write().replace(path);
		Ok(())
	}

	/// Navigates to a named route, substituting `params` for the pattern's
	/// placeholders. Equivalent to [`Router::push`] with the literal path.
	pub fn push_named(&self, name: &str, params: &[(&str, &str)]) -> Result<(), RouterError> {
		let path = self.reverse(name, params)?;
		self.push(&path)
	}

	/// Builds a concrete path for a named route.
	///
	/// # Errors
	///
	/// Returns [`RouterError::UnknownName`] for an unregistered name or
	/// [`RouterError::MissingParameter`] when a placeholder has no value.
	pub fn reverse(&self, name: &str, params: &[(&str, &str)]) -> Result<String, RouterError> {
		let index = self
			.names
			.get(name)
			.ok_or_else(|| RouterError::UnknownName(name.to_string()))?;
		let pattern = &self.routes[*index].pattern;

		let map: HashMap<String, String> = params
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect();

		for required in pattern.param_names() {
			if !map.contains_key(required) {
				return Err(RouterError::MissingParameter(required.clone()));
			}
		}
		pattern
			.reverse(&map)
			.ok_or_else(|| RouterError::MissingParameter(pattern.pattern().to_string()))
	}

	/// Moves one history entry back. Returns whether the cursor moved.
	pub fn back(&self) -> bool {
		let moved = self.history.write().back();
		if moved {
			tracing::debug!(path = %self.current_path(), "back");
		}
		moved
	}

	/// Moves one history entry forward. Returns whether the cursor moved.
	pub fn forward(&self) -> bool {
		let moved = self.history.write().forward();
		if moved {
			tracing::debug!(path = %self.current_path(), "forward");
		}
		moved
	}

	/// Returns the path of the current history entry.
	pub fn current_path(&self) -> String {
		self.history.read().current().to_string()
	}

	/// Resolves the current history entry against the route table.
	pub fn current_match(&self) -> Result<RouteMatch<V>, RouterError> {
		self.resolve(&self.current_path())
	}

	/// Renders the view for the current history entry.
	///
	/// Falls back to the registered not-found view when the current path
	/// does not match or its view fails to render; returns `None` when no
	/// fallback is registered.
	pub fn current_view(&self) -> Option<V> {
		match self.current_match().and_then(|m| m.render()) {
			Ok(view) => Some(view),
			Err(_) => self.not_found.as_ref().map(|f| f()),
		}
	}

	/// Returns the number of registered routes.
	pub fn route_count(&self) -> usize {
		self.routes.len()
	}

	/// Checks whether a route name is registered.
	pub fn has_route(&self, name: &str) -> bool {
		self.names.contains_key(name)
	}

	/// Returns the number of entries in the navigation history.
	pub fn history_len(&self) -> usize {
		self.history.read().len()
	}

	/// Returns whether a `back` would move.
	pub fn can_go_back(&self) -> bool {
		self.history.read().can_go_back()
	}

	/// Returns whether a `forward` would move.
	pub fn can_go_forward(&self) -> bool {
		self.history.read().can_go_forward()
	}
}
