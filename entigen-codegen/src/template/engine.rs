use std::{borrow::Cow, path::Path, sync::Arc};

use minijinja::{AutoEscape, Environment, ErrorKind};
use serde::Serialize;

use super::{Helper, HelperContext};
use crate::{ArtifactKind, Error, Result};

/// Names minijinja resolves without any registration.
const BUILTINS: &[&str] = &[
    "range", "dict", "debug", "namespace", "loop", "super", "self", "varargs", "kwargs", "caller",
];

/// Extension of template override files.
pub const TEMPLATE_EXTENSION: &str = "jinja";

/// Built-in template sources of a language backend.
pub trait TemplateSet: Send + Sync {
    /// Source of the template rendering `kind`, if the backend has one.
    fn source(&self, kind: ArtifactKind) -> Option<&'static str>;
}

/// Source for `kind`: the file `<template-name>.jinja` in `overrides` when it
/// exists, the built-in source otherwise.
pub fn template_source(
    templates: &dyn TemplateSet,
    overrides: Option<&Path>,
    kind: ArtifactKind,
) -> Result<Cow<'static, str>> {
    if let Some(dir) = overrides {
        let path = dir.join(format!("{}.{TEMPLATE_EXTENSION}", kind.template_name()));
        if path.is_file() {
            return std::fs::read_to_string(&path)
                .map(Cow::Owned)
                .map_err(|source| Error::io(path, source));
        }
    }

    templates
        .source(kind)
        .map(Cow::Borrowed)
        .ok_or_else(|| Error::MissingTemplate(kind.template_name().to_string()))
}

/// Compiles templates and renders them with the helper set bound to one run.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    pub fn new(context: HelperContext) -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);

        let context = Arc::new(context);
        for helper in Helper::ALL {
            helper.register(&mut env, &context);
        }

        Self { env }
    }

    /// Compile the template for `kind` and register it.
    ///
    /// Every name the template reads without declaring it must be a helper, a
    /// root context field of `kind`, or a minijinja builtin. Anything else is
    /// reported as [`Error::MissingHelper`] and the template is discarded.
    pub fn compile(
        &mut self,
        kind: ArtifactKind,
        source: impl Into<Cow<'static, str>>,
    ) -> Result<()> {
        let name = kind.template_name();
        self.env.add_template_owned(name, source.into())?;

        let mut unknown: Vec<String> = self
            .env
            .get_template(name)?
            .undeclared_variables(false)
            .into_iter()
            .filter(|var| !is_known(var, kind))
            .collect();
        unknown.sort();

        if let Some(helper) = unknown.into_iter().next() {
            self.env.remove_template(name);
            return Err(Error::MissingHelper {
                template: name.to_string(),
                helper,
            });
        }

        Ok(())
    }

    /// Whether the template for `kind` has been compiled.
    pub fn has_template(&self, kind: ArtifactKind) -> bool {
        self.env.get_template(kind.template_name()).is_ok()
    }

    /// Render the template for `kind` with `context` as its root.
    pub fn render<S: Serialize>(&self, kind: ArtifactKind, context: S) -> Result<String> {
        let name = kind.template_name();
        let template = self
            .env
            .get_template(name)
            .map_err(|_| Error::MissingTemplate(name.to_string()))?;

        template.render(context).map_err(|err| {
            if err.kind() == ErrorKind::UnknownFunction {
                let detail = err.detail().unwrap_or_default();
                let helper = detail.strip_suffix(" is unknown").unwrap_or(detail);
                Error::MissingHelper {
                    template: name.to_string(),
                    helper: helper.to_string(),
                }
            } else {
                Error::Template(err)
            }
        })
    }
}

fn is_known(var: &str, kind: ArtifactKind) -> bool {
    Helper::from_name(var).is_some()
        || kind.context_fields().iter().any(|field| *field == var)
        || BUILTINS.iter().any(|builtin| *builtin == var)
}

#[cfg(test)]
mod tests {
    use entigen_config::GenerationOptions;
    use entigen_ir::{Entity, Model};

    use super::*;

    fn engine() -> TemplateEngine {
        let options = GenerationOptions::default();
        let model = Model::new(vec![Entity::new("user"), Entity::new("organization")]);
        TemplateEngine::new(HelperContext::new(options, model))
    }

    struct OnlyModel;

    impl TemplateSet for OnlyModel {
        fn source(&self, kind: ArtifactKind) -> Option<&'static str> {
            (kind == ArtifactKind::Model)
                .then_some("export interface {{ entity_name(name) }} {}\n")
        }
    }

    #[test]
    fn test_render_entity_context() {
        let mut engine = engine();
        engine
            .compile(
                ArtifactKind::Model,
                "export interface {{ entity_name(name) }} {}\n",
            )
            .unwrap();

        let out = engine.render(ArtifactKind::Model, Entity::new("users")).unwrap();
        assert_eq!(out, "export interface User {}\n");
    }

    #[test]
    fn test_no_html_escaping() {
        let mut engine = engine();
        engine
            .compile(ArtifactKind::Model, "{{ '<' ~ name ~ '>' }} & {{ local_import('A') }}")
            .unwrap();
        let out = engine.render(ArtifactKind::Model, Entity::new("x")).unwrap();
        assert_eq!(out, "<x> & {A}");
    }

    #[test]
    fn test_unknown_helper_fails_compile() {
        let mut engine = engine();
        let err = engine
            .compile(ArtifactKind::Entity, "{{ toEntityName(name) }}")
            .unwrap_err();

        match err {
            Error::MissingHelper { template, helper } => {
                assert_eq!(template, "entity");
                assert_eq!(helper, "toEntityName");
            }
            other => panic!("expected missing helper, got {other:?}"),
        }
        assert!(!engine.has_template(ArtifactKind::Entity));
    }

    #[test]
    fn test_context_fields_are_per_kind() {
        let mut engine = engine();
        engine
            .compile(ArtifactKind::Index, "{% for e in entities %}{{ e.name }}{% endfor %}")
            .unwrap();
        assert!(matches!(
            engine.compile(ArtifactKind::Tsconfig, "{{ entities }}"),
            Err(Error::MissingHelper { .. })
        ));
    }

    #[test]
    fn test_loop_variables_are_declared() {
        let mut engine = engine();
        engine
            .compile(
                ArtifactKind::Model,
                "{% for column in columns %}{{ loop.index }}:{{ column.name }}{% endfor %}",
            )
            .unwrap();
    }

    #[test]
    fn test_helpers_read_options() {
        let mut options = GenerationOptions::default();
        options.features.lazy = true;
        options.style.export = entigen_config::ExportType::Default;
        let mut engine = TemplateEngine::new(HelperContext::new(options, Model::default()));

        engine
            .compile(
                ArtifactKind::Model,
                "export {{ default_export() }}class X {{ feature('lazy') }}",
            )
            .unwrap();
        let out = engine.render(ArtifactKind::Model, Entity::new("x")).unwrap();
        assert_eq!(out, "export default class X true");
    }

    #[test]
    fn test_unknown_feature_is_render_error() {
        let mut engine = engine();
        engine
            .compile(ArtifactKind::Model, "{{ feature('timestamps') }}")
            .unwrap();
        let err = engine.render(ArtifactKind::Model, Entity::new("x")).unwrap_err();
        assert!(matches!(err, Error::Template(_)));
    }

    #[test]
    fn test_render_uncompiled() {
        let engine = engine();
        let err = engine.render(ArtifactKind::Dto, ()).unwrap_err();
        assert!(matches!(err, Error::MissingTemplate(name) if name == "generic-dtos"));
    }

    #[test]
    fn test_template_source_override() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("model.jinja"), "custom").unwrap();

        let source = template_source(&OnlyModel, Some(dir.path()), ArtifactKind::Model).unwrap();
        assert_eq!(source, "custom");

        let source = template_source(&OnlyModel, None, ArtifactKind::Model).unwrap();
        assert!(source.starts_with("export interface"));

        let err = template_source(&OnlyModel, Some(dir.path()), ArtifactKind::Entity).unwrap_err();
        assert!(matches!(err, Error::MissingTemplate(_)));
    }
}
