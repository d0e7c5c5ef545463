//! Rendering of parameter strings for one form snapshot.

use anyhow::{Context, Result};
use cnauth_core::{AuthOverride, FieldPrefix, FormFields};
use serde::Serialize;

use crate::args::OutputFormat;

#[derive(Debug, Serialize)]
pub struct RenderedParams {
    pub prefix: String,
    pub params: String,
}

pub fn render_all<F: FormFields + ?Sized>(
    form: &F,
    prefixes: &[FieldPrefix],
) -> Result<Vec<RenderedParams>> {
    prefixes
        .iter()
        .map(|prefix| {
            let decision = AuthOverride::from_form(form, prefix)
                .with_context(|| format!("failed to build parameters for prefix '{}'", prefix))?;
            Ok(RenderedParams {
                prefix: prefix.to_string(),
                params: decision.to_query_string(),
            })
        })
        .collect()
}

pub fn format_output(rendered: &[RenderedParams], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(rendered
            .iter()
            .map(|r| r.params.as_str())
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            serde_json::to_string_pretty(rendered).context("failed to serialize parameters")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cnauth_core::FormSnapshot;

    fn prefixes(names: &[&str]) -> Vec<FieldPrefix> {
        names.iter().map(|n| n.parse().unwrap()).collect()
    }

    #[test]
    fn test_render_keeps_argument_order() {
        let form = FormSnapshot::new()
            .with_checkbox("b.override_auth", false)
            .with_checkbox("a.override_auth", false);
        let rendered = render_all(&form, &prefixes(&["b", "a"])).unwrap();
        let names: Vec<&str> = rendered.iter().map(|r| r.prefix.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_text_output_one_line_per_prefix() {
        let form = FormSnapshot::new()
            .with_checkbox("a.override_auth", false)
            .with_value("b.collabneturl", "http://x")
            .with_value("b.username", "u")
            .with_value("b.password", "pw");
        let rendered = render_all(&form, &prefixes(&["a", "b"])).unwrap();
        let out = format_output(&rendered, OutputFormat::Text).unwrap();
        assert_eq!(
            out,
            "override_auth=false\nurl=http%3A//x&username=u&password=pw&override_auth=true"
        );
    }

    #[test]
    fn test_json_output() {
        let form = FormSnapshot::new().with_checkbox("a.override_auth", false);
        let rendered = render_all(&form, &prefixes(&["a"])).unwrap();
        let out = format_output(&rendered, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["prefix"], "a");
        assert_eq!(value[0]["params"], "override_auth=false");
    }

    #[test]
    fn test_missing_field_context() {
        let form = FormSnapshot::new();
        let err = render_all(&form, &prefixes(&["a"])).unwrap_err();
        assert!(err.to_string().contains("prefix 'a'"));
        assert!(err.downcast_ref::<cnauth_core::AuthParamError>().is_some());
    }
}
