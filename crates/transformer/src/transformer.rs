use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::emitter::Emitter;
use crate::error::MinifyError;

/// Default boundary on input size. Inputs over this are rejected before any
/// lexing happens.
pub const MAX_INPUT_LEN: usize = 1 << 20;

/// Nothing here changes renaming, spacing, or encoding; `filename` feeds
/// diagnostics and `max_input_len` overrides the boundary bound.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MinifyOptions {
    pub filename: Option<String>,
    pub max_input_len: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinifyOutput {
    pub content: String,
    /// Final rename table, sorted by assigned short name.
    pub renames: Vec<(String, String)>,
}

pub fn minify(source: &str, options: &MinifyOptions) -> Result<MinifyOutput, MinifyError> {
    let max = options.max_input_len.unwrap_or(MAX_INPUT_LEN);
    if source.len() > max {
        return Err(MinifyError::InputTooLarge {
            len: source.len(),
            max,
        });
    }

    trace!(
        filename = options.filename.as_deref().unwrap_or("<stdin>"),
        len = source.len(),
        "minifying"
    );

    let (content, map) = Emitter::new().run(source)?;

    let renames = map
        .into_iter()
        .sorted_by_key(|(_, short)| short.clone())
        .collect::<Vec<_>>();

    trace!(
        out_len = content.len(),
        renamed = renames.len(),
        "minified"
    );

    Ok(MinifyOutput { content, renames })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renames_first_fresh_ident_and_encodes_char() {
        let out = minify("const xyz_counter: i64 = 'A';", &MinifyOptions::default()).unwrap();

        assert_eq!(out.content, "const a:i64=65;");
        assert_eq!(
            out.renames,
            vec![("xyz_counter".to_string(), "a".to_string())]
        );
    }

    #[test]
    fn reserved_identifiers_pass_through() {
        let out = minify("const _ = main;", &MinifyOptions::default()).unwrap();

        assert_eq!(out.content, "const _=main;");
        assert!(out.renames.is_empty());
    }

    #[test]
    fn invalid_input_is_rejected() {
        let err = minify("const ` = 1;", &MinifyOptions::default()).unwrap_err();

        assert!(matches!(err, MinifyError::InvalidSource(_)));
    }

    #[test]
    fn oversized_input_is_rejected_before_lexing() {
        let options = MinifyOptions {
            max_input_len: Some(8),
            ..Default::default()
        };

        let err = minify("const x = 1;", &options).unwrap_err();

        assert_eq!(err, MinifyError::InputTooLarge { len: 12, max: 8 });
    }

    #[test]
    fn options_deserialize_from_camel_case_json() {
        let options: MinifyOptions =
            serde_json::from_str(r#"{"filename":"demo.zig","maxInputLen":1024}"#).unwrap();

        assert_eq!(options.filename.as_deref(), Some("demo.zig"));
        assert_eq!(options.max_input_len, Some(1024));
    }
}
