//! Built-in path rewrite plugin.

use crate::{PathRewritePlugin, PluginError, PluginType};

/// Joins runs of adjacent all-digit tokens into one token.
#[derive(Debug, Default)]
pub struct JoinNumeric;

impl PluginType for JoinNumeric {
    fn construct() -> Result<Self, PluginError> {
        Ok(Self)
    }
}

fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_numeric)
}

impl PathRewritePlugin for JoinNumeric {
    fn rewrite(&self, path: Vec<String>) -> Vec<String> {
        let mut out: Vec<String> = Vec::with_capacity(path.len());
        for token in path {
            match out.last_mut() {
                Some(last) if is_numeric(last) && is_numeric(&token) => last.push_str(&token),
                _ => out.push(token),
            }
        }
        out
    }
}
