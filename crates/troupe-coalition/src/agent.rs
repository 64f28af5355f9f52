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

//! # Atomic Agents
//!
//! A pool `{Sherpa: 2, Crex: 1}` unfolds into the agents `Crex#0`,
//! `Sherpa#0` and `Sherpa#1`. Ids count per model, so agents of the same
//! model differ only by id and are interchangeable for every evaluation that
//! looks at the model pool of a coalition.

use troupe_model::model::ResourceModel;
use troupe_model::pool::ModelPool;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AtomicAgent {
    model: ResourceModel,
    id: u32,
}

impl AtomicAgent {
    #[inline]
    pub fn new(model: impl Into<ResourceModel>, id: u32) -> Self {
        Self {
            model: model.into(),
            id,
        }
    }

    #[inline]
    pub fn model(&self) -> &ResourceModel {
        &self.model
    }

    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// One agent per atom of `pool`, in model order.
    pub fn from_pool(pool: &ModelPool) -> Vec<AtomicAgent> {
        pool.iter()
            .flat_map(|(model, count)| (0..count).map(move |id| AtomicAgent::new(model.clone(), id)))
            .collect()
    }
}

impl std::fmt::Display for AtomicAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.model.fragment(), self.id)
    }
}

/// The model pool of a group of agents.
pub fn model_pool(agents: &[AtomicAgent]) -> ModelPool {
    let mut pool = ModelPool::new();
    for agent in agents {
        pool.add(agent.model.clone(), 1);
    }
    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_unfolds_into_agents() {
        let pool = ModelPool::from_pairs([("Sherpa", 2), ("Crex", 1), ("BaseCamp", 0)]);
        let agents = AtomicAgent::from_pool(&pool);
        assert_eq!(
            agents,
            vec![
                AtomicAgent::new("Crex", 0),
                AtomicAgent::new("Sherpa", 0),
                AtomicAgent::new("Sherpa", 1),
            ]
        );
        assert_eq!(agents[2].to_string(), "Sherpa#1");
    }

    #[test]
    fn test_model_pool_round_trip() {
        let pool = ModelPool::from_pairs([("Sherpa", 2), ("Crex", 1)]);
        assert_eq!(model_pool(&AtomicAgent::from_pool(&pool)), pool);
        assert!(model_pool(&[]).is_empty());
    }
}
