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

//! Errors of the mapping engine.

use std::time::Duration;
use troupe_model::error::ModelError;
use troupe_model::model::ResourceModel;
use troupe_model::pool::ModelPool;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MappingError {
    /// The request cannot be answered as posed, e.g. an empty pool or an
    /// empty functionality list.
    #[error("invalid argument: {reason} (pool: {pool}, functionalities: {functionalities:?})")]
    InvalidArgument {
        reason: String,
        pool: ModelPool,
        functionalities: Vec<ResourceModel>,
    },

    /// The property constraints of `resource` cannot be met by `pool`, no
    /// matter how it is scaled.
    #[error("'{resource}' cannot be satisfied by {pool}: {reason}")]
    Unsatisfiable {
        resource: ResourceModel,
        pool: ModelPool,
        reason: String,
    },

    /// A functionality that should be known to the mapping is missing.
    #[error("unknown functionality '{0}'")]
    UnknownFunctionality(ResourceModel),

    /// The wall-clock budget ran out while enumerating combinations.
    #[error("search timed out after {elapsed:?}")]
    SearchTimeout { elapsed: Duration },

    #[error(transparent)]
    Model(#[from] ModelError),
}

impl MappingError {
    pub(crate) fn invalid_argument(
        reason: impl Into<String>,
        pool: &ModelPool,
        functionalities: &[ResourceModel],
    ) -> Self {
        MappingError::InvalidArgument {
            reason: reason.into(),
            pool: pool.clone(),
            functionalities: functionalities.to_vec(),
        }
    }

    pub(crate) fn unsatisfiable(
        resource: &ResourceModel,
        pool: &ModelPool,
        reason: impl Into<String>,
    ) -> Self {
        MappingError::Unsatisfiable {
            resource: resource.clone(),
            pool: pool.clone(),
            reason: reason.into(),
        }
    }

    /// Returns `true` for errors caused by the run's time limit.
    #[inline]
    pub fn is_timeout(&self) -> bool {
        matches!(self, MappingError::SearchTimeout { .. })
    }
}
