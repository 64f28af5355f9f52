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

//! Index spaces of the connectivity search.

use troupe_core::utils::index::{TypedIndex, TypedIndexTag};

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct InstanceIndexTag;

impl TypedIndexTag for InstanceIndexTag {
    const NAME: &'static str = "InstanceIndex";
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct InterfaceIndexTag;

impl TypedIndexTag for InterfaceIndexTag {
    const NAME: &'static str = "InterfaceIndex";
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct InterfaceTypeIndexTag;

impl TypedIndexTag for InterfaceTypeIndexTag {
    const NAME: &'static str = "InterfaceTypeIndex";
}

/// One resource instance of the pool under test.
pub type InstanceIndex = TypedIndex<InstanceIndexTag>;

/// One interface endpoint, owned by exactly one instance.
pub type InterfaceIndex = TypedIndex<InterfaceIndexTag>;

/// One distinct interface model.
pub type InterfaceTypeIndex = TypedIndex<InterfaceTypeIndexTag>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_names() {
        assert_eq!(format!("{}", InstanceIndex::new(2)), "InstanceIndex(2)");
        assert_eq!(format!("{}", InterfaceIndex::new(0)), "InterfaceIndex(0)");
        assert_eq!(
            format!("{:?}", InterfaceTypeIndex::new(7)),
            "InterfaceTypeIndex(7)"
        );
    }
}
