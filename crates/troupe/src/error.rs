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

use troupe_mapping::error::MappingError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AskError {
    /// A query needs the functionality mapping, but `prepare` has not run.
    #[error("organization ask is not prepared: call `prepare` with a model pool first")]
    NotPrepared,

    #[error(transparent)]
    Mapping(#[from] MappingError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_mapping_errors_convert() {
        let e: AskError = MappingError::SearchTimeout {
            elapsed: Duration::from_secs(1),
        }
        .into();
        match &e {
            AskError::Mapping(inner) => assert!(inner.is_timeout()),
            other => panic!("expected Mapping error, got {:?}", other),
        }
        assert_eq!(e.to_string(), "search timed out after 1s");
    }
}
