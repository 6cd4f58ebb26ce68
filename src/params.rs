//! Typed extraction of captured placeholder values.
//!
//! When a route is registered with a parameter-taking view constructor, the
//! values captured from the matched path are forwarded to the view as typed
//! input. [`RouteParams`] carries the captures; [`FromParams`] converts them.

use std::collections::HashMap;
use std::ops::Deref;

use crate::error::ParamError;

/// Placeholder values captured from a matched path.
///
/// Holds both the name→value map and the values in pattern order, so tuple
/// extraction follows the order of placeholders in the pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
	named: HashMap<String, String>,
	ordered: Vec<String>,
}

impl RouteParams {
	/// Creates a new parameter set.
	pub fn new(named: HashMap<String, String>, ordered: Vec<String>) -> Self {
		Self { named, ordered }
	}

	/// Looks up a captured value by placeholder name.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.named.get(name).map(String::as_str)
	}

	/// Returns the captured values in pattern order.
	pub fn values(&self) -> &[String] {
		&self.ordered
	}

	/// Returns the number of captured values.
	pub fn len(&self) -> usize {
		self.ordered.len()
	}

	/// Returns whether no values were captured.
	pub fn is_empty(&self) -> bool {
		self.ordered.is_empty()
	}
}

/// A single typed input property extracted from the path.
///
/// Destructure it in a view constructor to receive the captured value:
///
/// ```ignore
/// let router = Router::new()
/// 	.named_route_with("agency", "/agency/{agency_name}", |Param(name): Param<String>| {
/// 		agency_details_page(name)
/// 	})?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Param<T>(pub T);

impl<T> Param<T> {
	/// Unwraps the inner value.
	pub fn into_inner(self) -> T {
		self.0
	}
}

impl<T> Deref for Param<T> {
	type Target = T;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

/// Conversion from captured placeholder values.
pub trait FromParams: Sized {
	/// Extracts `Self` from the captured values.
	///
	/// # Errors
	///
	/// Returns [`ParamError::CountMismatch`] when the number of captures does
	/// not fit, or [`ParamError::Parse`] when a capture fails to parse.
	fn from_params(params: &RouteParams) -> Result<Self, ParamError>;
}

fn single(params: &RouteParams) -> Result<&str, ParamError> {
	if params.len() != 1 {
		return Err(ParamError::CountMismatch {
			expected: 1,
			actual: params.len(),
		});
	}
	Ok(&params.values()[0])
}

impl FromParams for String {
	fn from_params(params: &RouteParams) -> Result<Self, ParamError> {
		single(params).map(str::to_string)
	}
}

macro_rules! impl_from_params_for_primitive {
	($($ty:ty => $type_name:expr),* $(,)?) => {
		$(
			impl FromParams for $ty {
				fn from_params(params: &RouteParams) -> Result<Self, ParamError> {
					let raw = single(params)?;
					raw.parse::<$ty>().map_err(|e| ParamError::Parse {
						ty: $type_name,
						raw: raw.to_string(),
						message: e.to_string(),
					})
				}
			}
		)*
	};
}

impl_from_params_for_primitive! {
	i32 => "i32",
	i64 => "i64",
	u32 => "u32",
	u64 => "u64",
	bool => "bool",
}

impl<T: FromParams> FromParams for Param<T> {
	fn from_params(params: &RouteParams) -> Result<Self, ParamError> {
		T::from_params(params).map(Param)
	}
}

macro_rules! parse_tuple_element {
	($params:expr, $idx:tt, $ty:ty) => {{
		$params.values()[$idx]
			.parse::<$ty>()
			.map_err(|e| ParamError::Parse {
				ty: std::any::type_name::<$ty>(),
				raw: $params.values()[$idx].clone(),
				message: e.to_string(),
			})?
	}};
}

macro_rules! impl_from_params_for_tuple {
	($($idx:tt => $ty:ident),+ $(,)?) => {
		impl<$($ty),+> FromParams for ($($ty,)+)
		where
			$($ty: std::str::FromStr,)+
			$(<$ty as std::str::FromStr>::Err: std::fmt::Display,)+
		{
			fn from_params(params: &RouteParams) -> Result<Self, ParamError> {
				let expected = [$($idx),+].len();
				if params.len() != expected {
					return Err(ParamError::CountMismatch {
						expected,
						actual: params.len(),
					});
				}
				Ok(($(parse_tuple_element!(params, $idx, $ty),)+))
			}
		}
	};
}

impl_from_params_for_tuple!(0 => A, 1 => B);
impl_from_params_for_tuple!(0 => A, 1 => B, 2 => C);
