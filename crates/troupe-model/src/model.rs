// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Resource model identifiers.

use std::sync::Arc;

/// Identifies a kind of resource: a robot type, a payload, an interface
/// type, a functionality.
///
/// The identifier is an IRI-like string shared behind an `Arc`, so clones are
/// a reference count bump. Ordering is the lexicographic order of the
/// identifier, which gives every pool a canonical key order.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceModel(Arc<str>);

impl ResourceModel {
    /// Creates a model from its identifier.
    #[inline]
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(Arc::from(id.as_ref()))
    }

    /// The full identifier.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The fragment after the last `#` or `/`, or the whole identifier if it
    /// has neither.
    ///
    /// ```rust
    /// # use troupe_model::model::ResourceModel;
    /// let m = ResourceModel::new("http://example.org/om#Sherpa");
    /// assert_eq!(m.fragment(), "Sherpa");
    /// ```
    pub fn fragment(&self) -> &str {
        match self.0.rfind(['#', '/']) {
            Some(pos) if pos + 1 < self.0.len() => &self.0[pos + 1..],
            _ => &self.0,
        }
    }
}

impl std::fmt::Debug for ResourceModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for ResourceModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResourceModel {
    #[inline]
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ResourceModel {
    #[inline]
    fn from(id: String) -> Self {
        Self(Arc::from(id))
    }
}

impl From<&ResourceModel> for ResourceModel {
    #[inline]
    fn from(model: &ResourceModel) -> Self {
        model.clone()
    }
}

impl AsRef<str> for ResourceModel {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_lexicographic() {
        let a = ResourceModel::new("om#BaseCamp");
        let b = ResourceModel::new("om#Sherpa");
        assert!(a < b);
    }

    #[test]
    fn test_clone_shares_identifier() {
        let a = ResourceModel::new("om#Payload");
        let b = a.clone();
        assert_eq!(a, b);
        assert!(Arc::ptr_eq(&a.0, &b.0));
    }

    #[test]
    fn test_fragment() {
        assert_eq!(ResourceModel::new("a/b/Camera").fragment(), "Camera");
        assert_eq!(ResourceModel::new("Camera").fragment(), "Camera");
        assert_eq!(ResourceModel::new("om#").fragment(), "om#");
    }
}
