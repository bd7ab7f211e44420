//! Ordered plugin list.
//!
//! Rollup runs plugins in the order they are listed, so a configuration file
//! adds them in the exact order it needs. There are no phases to sort by.

use serde::Serialize;

use super::{PluginFactory, PluginInstance, PluginKind};
use crate::Result;

pub struct Pipeline<'a> {
    factory: &'a dyn PluginFactory,
    plugins: Vec<PluginInstance>,
}

impl<'a> Pipeline<'a> {
    pub fn new(factory: &'a dyn PluginFactory) -> Self {
        Self {
            factory,
            plugins: Vec::new(),
        }
    }

    /// Serialize `settings` and append the plugin created by the factory
    pub fn add<S: Serialize + ?Sized>(&mut self, kind: PluginKind, settings: &S) -> Result<()> {
        let settings = serde_json::to_value(settings)?;
        let plugin = self.factory.create(kind, settings)?;
        tracing::trace!(plugin = %kind, position = self.plugins.len(), "adding plugin");
        self.plugins.push(plugin);
        Ok(())
    }

    /// Append the plugin only when `condition` holds
    pub fn add_if<S: Serialize + ?Sized>(
        &mut self,
        condition: bool,
        kind: PluginKind,
        settings: &S,
    ) -> Result<()> {
        if condition {
            self.add(kind, settings)?;
        }
        Ok(())
    }

    pub fn into_plugins(self) -> Vec<PluginInstance> {
        self.plugins
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}
