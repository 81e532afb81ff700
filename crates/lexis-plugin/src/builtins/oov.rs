//! Built-in OOV provider.

use crate::{OovCandidate, OovProviderPlugin, PluginError, PluginType};
use lexis_doc::Document;

const DEFAULT_COST: i64 = 30000;

/// Emits a one-character unknown word when no dictionary word starts at the span.
///
/// Properties: `oovPOS` (list of strings), `leftId`, `rightId`, `cost`.
#[derive(Debug)]
pub struct SimpleOovProvider {
    pos: Vec<String>,
    left_id: i16,
    right_id: i16,
    cost: i16,
}

impl PluginType for SimpleOovProvider {
    fn construct() -> Result<Self, PluginError> {
        Ok(Self {
            pos: Vec::new(),
            left_id: 0,
            right_id: 0,
            cost: DEFAULT_COST as i16,
        })
    }

    fn configure(&mut self, properties: &Document) -> Result<(), PluginError> {
        self.pos = properties.opt_string_list("oovPOS")?;
        self.left_id = to_i16(properties, "leftId", 0)?;
        self.right_id = to_i16(properties, "rightId", 0)?;
        self.cost = to_i16(properties, "cost", DEFAULT_COST)?;
        Ok(())
    }
}

fn to_i16(properties: &Document, key: &str, default: i64) -> Result<i16, PluginError> {
    let value = properties.get_int_or(key, default)?;
    i16::try_from(value)
        .map_err(|_| PluginError::invalid(key, format!("{value} does not fit in 16 bits")))
}

impl OovProviderPlugin for SimpleOovProvider {
    fn provide_oov(&self, span: &str, has_other_words: bool) -> Vec<OovCandidate> {
        if has_other_words {
            return Vec::new();
        }
        span.chars()
            .next()
            .map(|c| OovCandidate {
                surface: c.to_string(),
                left_id: self.left_id,
                right_id: self.right_id,
                cost: self.cost,
                pos: self.pos.clone(),
            })
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn configured(json: &str) -> Result<SimpleOovProvider, PluginError> {
        let mut plugin = SimpleOovProvider::construct()?;
        plugin.configure(&Document::parse(json).unwrap())?;
        Ok(plugin)
    }

    #[test]
    fn test_defaults() {
        let plugin = configured("{}").unwrap();
        let candidates = plugin.provide_oov("未知語", false);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].surface, "未");
        assert_eq!(candidates[0].cost, 30000);
    }

    #[test]
    fn test_configured_values() {
        let plugin = configured(
            r#"{"oovPOS": ["名詞", "普通名詞"], "leftId": 5, "rightId": 6, "cost": 12000}"#,
        )
        .unwrap();
        let candidate = &plugin.provide_oov("x", false)[0];
        assert_eq!(candidate.pos, vec!["名詞", "普通名詞"]);
        assert_eq!((candidate.left_id, candidate.right_id), (5, 6));
        assert_eq!(candidate.cost, 12000);
    }

    #[test]
    fn test_silent_when_other_words_exist() {
        let plugin = configured("{}").unwrap();
        assert!(plugin.provide_oov("x", true).is_empty());
        assert!(plugin.provide_oov("", false).is_empty());
    }

    #[test]
    fn test_cost_out_of_range() {
        let err = configured(r#"{"cost": 40000}"#).unwrap_err();
        assert!(matches!(err, PluginError::InvalidSetting { ref key, .. } if key == "cost"));
    }

    #[test]
    fn test_cost_wrong_type() {
        let err = configured(r#"{"cost": "cheap"}"#).unwrap_err();
        assert!(matches!(err, PluginError::Doc(_)));
    }
}
