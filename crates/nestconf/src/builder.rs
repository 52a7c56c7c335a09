//! Assembly of a configuration from registered sources

use std::fmt;

use nestconf_source::{Result, Source};
use nestconf_store::{MergeStrategy, NestedStore};

/// A source together with the path its content is merged at.
struct SourceBinding {
    source: Box<dyn Source>,
    /// `None` merges at the root.
    target: Option<String>,
}

/// Builds a [`NestedStore`] from an ordered list of sources.
///
/// Sources are fetched and merged in the order they were added, so a
/// later source overrides an earlier one wherever both set the same path.
/// Building does not consume the builder; every call starts from an empty
/// store and fetches every source again.
#[derive(Default)]
pub struct ConfigBuilder {
    bindings: Vec<SourceBinding>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a source whose content is merged at the root.
    pub fn add_source(self, source: impl Source + 'static) -> Self {
        self.add_binding(source, None)
    }

    /// Add a source whose content is merged at `target`.
    pub fn add_source_at(self, source: impl Source + 'static, target: &str) -> Self {
        self.add_binding(source, Some(target))
    }

    /// Add a source merged at `target`, or at the root when `target` is
    /// `None`.
    pub fn add_binding(mut self, source: impl Source + 'static, target: Option<&str>) -> Self {
        self.bindings.push(SourceBinding {
            source: Box::new(source),
            target: target.map(str::to_string),
        });
        self
    }

    /// Number of registered sources.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Build the configuration, replacing conflicting lists.
    pub fn build(&self) -> Result<NestedStore> {
        self.build_with(MergeStrategy::default())
    }

    /// Build the configuration with the given merge strategy.
    ///
    /// Stops at the first source that fails to fetch and returns its error
    /// unchanged. No partial configuration is returned.
    pub fn build_with(&self, strategy: MergeStrategy) -> Result<NestedStore> {
        let mut config = NestedStore::new();

        for (index, binding) in self.bindings.iter().enumerate() {
            let content = binding.source.fetch()?;
            tracing::debug!(
                index,
                source = %binding.source.describe(),
                target = binding.target.as_deref().unwrap_or("<root>"),
                %strategy,
                "Merging configuration source"
            );
            config.merge(
                &NestedStore::from_map(content),
                binding.target.as_deref(),
                strategy,
            );
        }

        tracing::debug!(
            sources = self.bindings.len(),
            keys = config.len(),
            "Built configuration"
        );
        Ok(config)
    }
}

impl fmt::Debug for ConfigBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sources: Vec<(String, Option<&str>)> = self
            .bindings
            .iter()
            .map(|binding| (binding.source.describe(), binding.target.as_deref()))
            .collect();

        f.debug_struct("ConfigBuilder")
            .field("sources", &sources)
            .finish()
    }
}
