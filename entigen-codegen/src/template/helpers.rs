//! The closed set of functions templates can call.

use std::sync::{Arc, LazyLock};

use entigen_config::{ExportType, Feature};
use entigen_core::{
    pluralize, singularize, to_camel_case, to_kebab_case, to_pascal_case, to_snake_case,
    upper_first,
};
use entigen_ir::RelationType;
use minijinja::{Environment, ErrorKind, Value};
use regex::Regex;

use super::HelperContext;
use crate::ArtifactKind;

static QUOTED_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^()"]+)":"#).expect("quoted key pattern is valid"));

/// A function registered in every template environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Helper {
    EntityName,
    PropertyName,
    FileName,
    EntityFile,
    SharedFile,
    RelationType,
    IsRelationArray,
    ResolvePath,
    OutputPath,
    Json,
    JsonStringify,
    CamelCase,
    PascalCase,
    ParamCase,
    SnakeCase,
    Lower,
    UpperFirst,
    Pluralize,
    Singularize,
    Visibility,
    StrictMode,
    DefaultExport,
    Feature,
    LocalImport,
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
    Both,
    Either,
}

impl Helper {
    pub const ALL: [Helper; 32] = [
        Helper::EntityName,
        Helper::PropertyName,
        Helper::FileName,
        Helper::EntityFile,
        Helper::SharedFile,
        Helper::RelationType,
        Helper::IsRelationArray,
        Helper::ResolvePath,
        Helper::OutputPath,
        Helper::Json,
        Helper::JsonStringify,
        Helper::CamelCase,
        Helper::PascalCase,
        Helper::ParamCase,
        Helper::SnakeCase,
        Helper::Lower,
        Helper::UpperFirst,
        Helper::Pluralize,
        Helper::Singularize,
        Helper::Visibility,
        Helper::StrictMode,
        Helper::DefaultExport,
        Helper::Feature,
        Helper::LocalImport,
        Helper::Eq,
        Helper::Ne,
        Helper::Gt,
        Helper::Gte,
        Helper::Lt,
        Helper::Lte,
        Helper::Both,
        Helper::Either,
    ];

    /// Name templates call the helper by.
    pub fn name(&self) -> &'static str {
        match self {
            Helper::EntityName => "entity_name",
            Helper::PropertyName => "property_name",
            Helper::FileName => "file_name",
            Helper::EntityFile => "entity_file",
            Helper::SharedFile => "shared_file",
            Helper::RelationType => "relation_type",
            Helper::IsRelationArray => "is_relation_array",
            Helper::ResolvePath => "resolve_path",
            Helper::OutputPath => "output_path",
            Helper::Json => "json",
            Helper::JsonStringify => "json_stringify",
            Helper::CamelCase => "camel_case",
            Helper::PascalCase => "pascal_case",
            Helper::ParamCase => "param_case",
            Helper::SnakeCase => "snake_case",
            Helper::Lower => "lower",
            Helper::UpperFirst => "upper_first",
            Helper::Pluralize => "pluralize",
            Helper::Singularize => "singularize",
            Helper::Visibility => "visibility",
            Helper::StrictMode => "strict_mode",
            Helper::DefaultExport => "default_export",
            Helper::Feature => "feature",
            Helper::LocalImport => "local_import",
            Helper::Eq => "eq",
            Helper::Ne => "ne",
            Helper::Gt => "gt",
            Helper::Gte => "gte",
            Helper::Lt => "lt",
            Helper::Lte => "lte",
            Helper::Both => "both",
            Helper::Either => "either",
        }
    }

    pub fn from_name(name: &str) -> Option<Helper> {
        Helper::ALL.into_iter().find(|helper| helper.name() == name)
    }

    /// Register this helper in `env`, closing over the run's context.
    pub fn register(self, env: &mut Environment<'static>, ctx: &Arc<HelperContext>) {
        let name = self.name();
        let ctx = Arc::clone(ctx);
        match self {
            Helper::EntityName => {
                env.add_function(name, move |raw: String| ctx.naming().entity_name(&raw))
            }
            Helper::PropertyName => {
                env.add_function(name, move |raw: String| ctx.naming().property_name(&raw))
            }
            Helper::FileName => env.add_function(
                name,
                move |raw: String, kind: Option<String>| -> Result<String, minijinja::Error> {
                    let kind = kind.as_deref().map(parse_kind).transpose()?;
                    Ok(ctx.naming().file_name(&raw, kind))
                },
            ),
            Helper::EntityFile => env.add_function(
                name,
                move |entity: String, kind: String| -> Result<String, minijinja::Error> {
                    Ok(ctx.entity_file(&entity, parse_kind(&kind)?))
                },
            ),
            Helper::SharedFile => env.add_function(
                name,
                move |kind: String| -> Result<String, minijinja::Error> {
                    let kind = parse_kind(&kind)?;
                    ctx.naming().shared_file(kind).ok_or_else(|| {
                        invalid(format!("'{kind}' is written once per entity, use entity_file"))
                    })
                },
            ),
            Helper::RelationType => env.add_function(
                name,
                move |target: String, relation: String| -> Result<String, minijinja::Error> {
                    Ok(ctx.relation_type(&target, parse_relation(&relation)?))
                },
            ),
            Helper::IsRelationArray => env.add_function(
                name,
                |relation: String| -> Result<bool, minijinja::Error> {
                    Ok(parse_relation(&relation)?.is_array())
                },
            ),
            Helper::ResolvePath => env.add_function(
                name,
                move |from: String, to: String| -> Result<String, minijinja::Error> {
                    Ok(ctx.naming().resolve_path(parse_kind(&from)?, parse_kind(&to)?))
                },
            ),
            Helper::OutputPath => env.add_function(
                name,
                move |kind: String| -> Result<String, minijinja::Error> {
                    Ok(ctx.naming().output_dir(parse_kind(&kind)?).to_string())
                },
            ),
            Helper::Json => env.add_function(name, |value: Value| json_inline(&value)),
            Helper::JsonStringify => env.add_function(name, |value: Value| {
                serde_json::to_string(&value).map_err(|err| invalid(err.to_string()))
            }),
            Helper::CamelCase => env.add_function(name, |s: String| to_camel_case(&s)),
            Helper::PascalCase => env.add_function(name, |s: String| to_pascal_case(&s)),
            Helper::ParamCase => env.add_function(name, |s: String| to_kebab_case(&s)),
            Helper::SnakeCase => env.add_function(name, |s: String| to_snake_case(&s)),
            Helper::Lower => env.add_function(name, |s: String| s.to_lowercase()),
            Helper::UpperFirst => env.add_function(name, |s: String| upper_first(&s)),
            Helper::Pluralize => env.add_function(name, |s: String| pluralize(&s)),
            Helper::Singularize => env.add_function(name, |s: String| singularize(&s)),
            Helper::Visibility => {
                env.add_function(name, move || ctx.options.style.visibility.prefix())
            }
            Helper::StrictMode => env.add_function(name, move || {
                ctx.options.style.strict_mode.marker().to_string()
            }),
            Helper::DefaultExport => env.add_function(name, move || match ctx.options.style.export {
                ExportType::Default => "default ".to_string(),
                ExportType::Named => String::new(),
            }),
            Helper::Feature => env.add_function(
                name,
                move |feature: String| -> Result<bool, minijinja::Error> {
                    let feature: Feature = feature.parse().map_err(invalid)?;
                    Ok(ctx.options.features.enabled(feature))
                },
            ),
            Helper::LocalImport => env.add_function(name, |s: String| format!("{{{s}}}")),
            Helper::Eq => env.add_function(name, |a: Value, b: Value| a == b),
            Helper::Ne => env.add_function(name, |a: Value, b: Value| a != b),
            Helper::Gt => env.add_function(name, |a: Value, b: Value| a > b),
            Helper::Gte => env.add_function(name, |a: Value, b: Value| a >= b),
            Helper::Lt => env.add_function(name, |a: Value, b: Value| a < b),
            Helper::Lte => env.add_function(name, |a: Value, b: Value| a <= b),
            Helper::Both => env.add_function(name, |a: Value, b: Value| a.is_true() && b.is_true()),
            Helper::Either => {
                env.add_function(name, |a: Value, b: Value| a.is_true() || b.is_true())
            }
        }
    }
}

fn invalid(message: impl Into<String>) -> minijinja::Error {
    minijinja::Error::new(ErrorKind::InvalidOperation, message.into())
}

fn parse_kind(kind: &str) -> Result<ArtifactKind, minijinja::Error> {
    kind.parse().map_err(|err: crate::Error| invalid(err.to_string()))
}

fn parse_relation(relation: &str) -> Result<RelationType, minijinja::Error> {
    relation.parse().map_err(invalid)
}

/// Compact JSON with unquoted keys and the outer braces of an object removed,
/// ready to splice into a decorator's option object.
fn json_inline(value: &Value) -> Result<String, minijinja::Error> {
    let json = serde_json::to_string(value).map_err(|err| invalid(err.to_string()))?;
    let unquoted = QUOTED_KEY.replace_all(&json, "$1:");
    let unquoted = unquoted.as_ref();
    let inner = unquoted
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .unwrap_or(unquoted);
    Ok(inner.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_unique() {
        for helper in Helper::ALL {
            assert_eq!(Helper::from_name(helper.name()), Some(helper));
        }
        assert_eq!(Helper::from_name("toEntityName"), None);
    }

    #[test]
    fn test_json_inline() {
        let value = Value::from_serialize(serde_json::json!({
            "name": "created_at",
            "nullable": true,
            "default": "now()",
        }));
        assert_eq!(
            json_inline(&value).unwrap(),
            r#"name:"created_at",nullable:true,default:"now()""#
        );
    }

    #[test]
    fn test_json_inline_empty_object() {
        let value = Value::from_serialize(serde_json::json!({}));
        assert_eq!(json_inline(&value).unwrap(), "");
    }
}
