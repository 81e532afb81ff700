//! Built-in input text plugins.

use crate::{InputTextPlugin, PluginError, PluginType};
use lexis_doc::Document;

/// Lowercases the whole input.
#[derive(Debug, Default)]
pub struct LowercaseInputText;

impl PluginType for LowercaseInputText {
    fn construct() -> Result<Self, PluginError> {
        Ok(Self)
    }
}

impl InputTextPlugin for LowercaseInputText {
    fn rewrite(&self, text: &str) -> String {
        text.to_lowercase()
    }
}

const DEFAULT_MARKS: [char; 5] = ['ー', '-', '⁓', '〜', '〰'];
const DEFAULT_REPLACEMENT: &str = "ー";

/// Collapses runs of two or more prolonged sound marks into one replacement symbol.
///
/// Properties: `prolongedSoundMarks` (list of single characters) and
/// `replacementSymbol` (string).
#[derive(Debug)]
pub struct ProlongedSoundMarkInputText {
    marks: Vec<char>,
    replacement: String,
}

impl PluginType for ProlongedSoundMarkInputText {
    fn construct() -> Result<Self, PluginError> {
        Ok(Self {
            marks: DEFAULT_MARKS.to_vec(),
            replacement: DEFAULT_REPLACEMENT.to_string(),
        })
    }

    fn configure(&mut self, properties: &Document) -> Result<(), PluginError> {
        let marks = properties.opt_string_list("prolongedSoundMarks")?;
        if !marks.is_empty() {
            self.marks = marks
                .iter()
                .map(|mark| {
                    let mut chars = mark.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) => Ok(c),
                        _ => Err(PluginError::invalid(
                            "prolongedSoundMarks",
                            format!("'{mark}' is not a single character"),
                        )),
                    }
                })
                .collect::<Result<_, _>>()?;
        }
        if let Some(replacement) = properties.opt_string("replacementSymbol")? {
            self.replacement = replacement.to_string();
        }
        Ok(())
    }
}

impl InputTextPlugin for ProlongedSoundMarkInputText {
    fn rewrite(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut run = String::new();
        let flush = |run: &mut String, out: &mut String| {
            if run.chars().count() > 1 {
                out.push_str(&self.replacement);
            } else {
                out.push_str(run);
            }
            run.clear();
        };
        for c in text.chars() {
            if self.marks.contains(&c) {
                run.push(c);
            } else {
                flush(&mut run, &mut out);
                out.push(c);
            }
        }
        flush(&mut run, &mut out);
        out
    }
}
