use std::collections::BTreeSet;
use std::fmt;


/// An ordered set of names.
///
/// Iteration and rendering are sorted, so log output and error messages built
/// from a set are stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StringSet(BTreeSet<String>);

impl StringSet {
	/// Creates an empty set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a single name.
	pub fn add(&mut self, name: impl Into<String>) -> &mut Self {
		self.0.insert(name.into());
		self
	}

	/// Adds every name yielded by `names`.
	pub fn add_all<I, S>(&mut self, names: I) -> &mut Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.0.extend(names.into_iter().map(Into::into));
		self
	}

	/// Adds every member of `other`.
	pub fn add_set(&mut self, other: &StringSet) -> &mut Self {
		self.0.extend(other.0.iter().cloned());
		self
	}

	pub fn remove(&mut self, name: &str) -> &mut Self {
		self.0.remove(name);
		self
	}

	/// Removes every member of `other`.
	pub fn remove_set(&mut self, other: &StringSet) -> &mut Self {
		self.0.retain(|n| !other.contains(n));
		self
	}

	pub fn contains(&self, name: &str) -> bool {
		self.0.contains(name)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterates the members in sorted order.
	pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
		self.0.iter().map(String::as_str)
	}

	/// Returns a new set holding the members of both sets.
	pub fn union(&self, other: &StringSet) -> StringSet {
		let mut set = self.clone();
		set.add_set(other);
		set
	}

	/// Returns a new set holding the members of `self` not in `other`.
	pub fn difference(&self, other: &StringSet) -> StringSet {
		let mut set = self.clone();
		set.remove_set(other);
		set
	}
}

impl<S: Into<String>> FromIterator<S> for StringSet {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		Self(iter.into_iter().map(Into::into).collect())
	}
}

impl<S: Into<String>> Extend<S> for StringSet {
	fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
		self.0.extend(iter.into_iter().map(Into::into));
	}
}

impl IntoIterator for StringSet {
	type Item = String;
	type IntoIter = std::collections::btree_set::IntoIter<String>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a> IntoIterator for &'a StringSet {
	type Item = &'a String;
	type IntoIter = std::collections::btree_set::Iter<'a, String>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

impl fmt::Display for StringSet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("[")?;
		for (i, name) in self.0.iter().enumerate() {
			if i > 0 {
				f.write_str(", ")?;
			}
			f.write_str(name)?;
		}
		f.write_str("]")
	}
}
