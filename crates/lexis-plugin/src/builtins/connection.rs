//! Built-in connection cost editor.

use crate::{Connection, EditConnectionCostPlugin, PluginError, PluginType};
use lexis_doc::Document;

/// Makes the configured connections effectively impossible.
///
/// Properties: `inhibitedPair`, a list of `[left, right]` id pairs.
#[derive(Debug, Default)]
pub struct InhibitConnection {
    pairs: Vec<(usize, usize)>,
}

impl InhibitConnection {
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }
}

impl PluginType for InhibitConnection {
    fn construct() -> Result<Self, PluginError> {
        Ok(Self::default())
    }

    fn configure(&mut self, properties: &Document) -> Result<(), PluginError> {
        let Some(pairs) = properties.opt_list("inhibitedPair")? else {
            return Ok(());
        };
        self.pairs = pairs
            .iter()
            .enumerate()
            .map(|(i, pair)| {
                let invalid =
                    || PluginError::invalid(format!("inhibitedPair[{i}]"), "expected [left, right]");
                let id = |value: &serde_json::Value| {
                    value
                        .as_u64()
                        .and_then(|n| usize::try_from(n).ok())
                        .ok_or_else(invalid)
                };
                let ids = pair.as_array().ok_or_else(invalid)?;
                match ids.as_slice() {
                    [left, right] => Ok((id(left)?, id(right)?)),
                    _ => Err(invalid()),
                }
            })
            .collect::<Result<_, _>>()?;
        Ok(())
    }
}

impl EditConnectionCostPlugin for InhibitConnection {
    fn edit(&self, connection: &mut Connection) -> Result<(), PluginError> {
        for &(left, right) in &self.pairs {
            connection.set_cost(left, right, i16::MAX)?;
        }
        tracing::debug!(pairs = self.pairs.len(), "Inhibited connections");
        Ok(())
    }
}
