//! Static plugin registration for sorting strategies and input generators.
//!
//! A [`Registry`] is an ordered, name-addressable set of plugins. Iteration
//! is always lexicographic by display name, so two runs over the same
//! registry lay out their result matrices identically. The default tables at
//! the bottom of this module are the single place a new strategy or generator
//! has to be listed; the engine only ever sees a registry.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::SortBenchError;
use crate::generators::{self, InputGenerator};
use crate::sorters::{self, SortingAlgorithm};

/// Anything a registry can key by display name.
pub trait Named {
    fn display_name(&self) -> &str;
}

impl Named for dyn SortingAlgorithm {
    fn display_name(&self) -> &str {
        self.name()
    }
}

impl Named for dyn InputGenerator {
    fn display_name(&self) -> &str {
        self.name()
    }
}

pub type AlgorithmRegistry = Registry<dyn SortingAlgorithm>;
pub type GeneratorRegistry = Registry<dyn InputGenerator>;

pub struct Registry<P: ?Sized + Named> {
    entries: BTreeMap<String, Arc<P>>,
}

impl<P: ?Sized + Named> Registry<P> {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Registers a plugin under its display name. Names are unique.
    pub fn register(&mut self, plugin: Arc<P>) -> Result<(), SortBenchError> {
        let name = plugin.display_name().to_string();
        if self.entries.contains_key(&name) {
            return Err(SortBenchError::DuplicatePlugin(name));
        }
        self.entries.insert(name, plugin);
        Ok(())
    }

    /// Find a plugin by name
    pub fn get(&self, name: &str) -> Option<&Arc<P>> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Display names in iteration order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// `(name, plugin)` pairs in lexicographic name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<P>)> {
        self.entries.iter().map(|(name, plugin)| (name.as_str(), plugin))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Builds a sub-registry holding only `names`. Repeated names collapse
    /// into one entry; a name that is not registered is an error.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<Self, SortBenchError> {
        let mut selected = BTreeMap::new();
        for name in names {
            let name = name.as_ref();
            let plugin = self
                .entries
                .get(name)
                .ok_or_else(|| SortBenchError::UnknownPlugin(name.to_string()))?;
            selected.insert(name.to_string(), Arc::clone(plugin));
        }
        Ok(Self { entries: selected })
    }

    /// Builds a registry from a fixed table. The first entry wins on a name
    /// clash; later ones are dropped with a warning.
    fn from_table(plugins: Vec<Arc<P>>) -> Self {
        let mut registry = Self::new();
        for plugin in plugins {
            if let Err(err) = registry.register(plugin) {
                log::warn!("Skipping plugin from static table: {}", err);
            }
        }
        registry
    }
}

impl<P: ?Sized + Named> Default for Registry<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: ?Sized + Named> Clone for Registry<P> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

//==================================================================================
// Static Registration Tables
//==================================================================================

/// Build the default registry with every sorting strategy in the crate.
pub fn default_algorithms() -> AlgorithmRegistry {
    Registry::from_table(vec![
        Arc::new(sorters::BubbleSort::up()) as Arc<dyn SortingAlgorithm>,
        Arc::new(sorters::BubbleSort::down()),
        Arc::new(sorters::LibrarySort),
        Arc::new(sorters::MergeSort),
        Arc::new(sorters::SelectionSort),
        Arc::new(sorters::RecursivePartitionSort),
    ])
}

/// Build the default registry with every input generator in the crate.
pub fn default_generators() -> GeneratorRegistry {
    Registry::from_table(vec![
        Arc::new(generators::Sorted) as Arc<dyn InputGenerator>,
        Arc::new(generators::NearlySorted),
        Arc::new(generators::Reversed),
        Arc::new(generators::RandomPermutation),
    ])
}
