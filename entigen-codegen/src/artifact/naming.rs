//! Naming decisions shared by the orchestrator and the template helpers.
//!
//! Every file name and import path of a run is derived here so that the file
//! written for an artifact and the specifiers other artifacts use to import it
//! always agree.

use std::path::{Path, PathBuf};

use entigen_config::GenerationOptions;
use entigen_core::{convert_case, pluralize, relative_import_path, singularize};

use super::ArtifactKind;

/// Naming policy of one run.
#[derive(Debug, Clone, Copy)]
pub struct Naming<'a> {
    options: &'a GenerationOptions,
}

impl<'a> Naming<'a> {
    pub fn new(options: &'a GenerationOptions) -> Self {
        Self { options }
    }

    /// Type name of an entity: singular, in the entity case style.
    pub fn entity_name(&self, raw: &str) -> String {
        convert_case(&singularize(raw), self.options.naming.entity)
    }

    /// Property name in the property case style.
    pub fn property_name(&self, raw: &str) -> String {
        convert_case(raw, self.options.naming.property)
    }

    /// Apply the plurality policy to a base file name.
    pub fn plurality(&self, file_name: &str) -> String {
        if self.options.naming.pluralize {
            pluralize(file_name)
        } else {
            singularize(file_name)
        }
    }

    /// File name (without extension) of `kind`'s artifact for an entity whose
    /// base file name is `file_name`.
    ///
    /// Plurality is applied to the base name, then the kind's prefix and
    /// suffix are joined with `-`, then the composite is cased once.
    pub fn file_name(&self, file_name: &str, kind: Option<ArtifactKind>) -> String {
        let base = self.plurality(file_name);
        let (prefix, suffix) = kind.map(|k| k.affixes()).unwrap_or((None, None));

        let mut composite = String::with_capacity(base.len() + 16);
        if let Some(prefix) = prefix {
            composite.push_str(prefix);
            composite.push('-');
        }
        composite.push_str(&base);
        if let Some(suffix) = suffix {
            composite.push('-');
            composite.push_str(suffix);
        }

        convert_case(&composite, self.options.naming.file)
    }

    /// File name (without extension) of a single-file kind.
    ///
    /// Project config files keep their conventional names.
    pub fn shared_file(&self, kind: ArtifactKind) -> Option<String> {
        let name = kind.static_name()?;
        if kind.is_config() {
            Some(name.to_string())
        } else {
            Some(convert_case(name, self.options.naming.file))
        }
    }

    /// Output directory of `kind`, relative to the project root.
    pub fn output_dir(&self, kind: ArtifactKind) -> &'a str {
        let options: &'a GenerationOptions = self.options;
        let output = &options.output;
        match kind {
            ArtifactKind::Tsconfig | ArtifactKind::Ormconfig => ".",
            ArtifactKind::Schema => &output.schemas,
            ArtifactKind::Model => &output.models,
            ArtifactKind::Entity | ArtifactKind::Index => &output.entities,
            ArtifactKind::Repository | ArtifactKind::RepositoryPort => &output.ports,
            ArtifactKind::Dto => &output.dtos,
            ArtifactKind::RepositoryAdapterBase | ArtifactKind::RepositoryAdapter => {
                &output.adapters
            }
        }
    }

    /// Relative import path from `from`'s directory to `to`'s directory.
    pub fn resolve_path(&self, from: ArtifactKind, to: ArtifactKind) -> String {
        relative_import_path(self.output_dir(from), self.output_dir(to))
    }

    /// Path of a generated file below `root`.
    pub fn target_path(&self, root: &Path, kind: ArtifactKind, file_name: &str) -> PathBuf {
        entigen_core::output_file(root, self.output_dir(kind), file_name, kind.extension())
    }
}

#[cfg(test)]
mod tests {
    use entigen_config::CaseStyle;

    use super::*;

    fn options(file: CaseStyle, pluralize: bool) -> GenerationOptions {
        let mut options = GenerationOptions::default();
        options.naming.file = file;
        options.naming.pluralize = pluralize;
        options
    }

    #[test]
    fn test_entity_name_is_singular() {
        let options = GenerationOptions::default();
        let naming = Naming::new(&options);
        assert_eq!(naming.entity_name("users"), "User");
        assert_eq!(naming.entity_name("user_roles"), "UserRole");
        assert_eq!(naming.entity_name("people"), "Person");
    }

    #[test]
    fn test_file_name_plurality() {
        let plural = options(CaseStyle::Camel, true);
        let singular = options(CaseStyle::Camel, false);
        assert_eq!(Naming::new(&plural).file_name("user", None), "users");
        assert_eq!(Naming::new(&singular).file_name("users", None), "user");
    }

    #[test]
    fn test_file_name_affixes_cased_once() {
        let options = options(CaseStyle::Pascal, false);
        let naming = Naming::new(&options);

        assert_eq!(naming.file_name("user", Some(ArtifactKind::Entity)), "User");
        assert_eq!(
            naming.file_name("user", Some(ArtifactKind::Schema)),
            "UserSchema"
        );
        assert_eq!(
            naming.file_name("user_role", Some(ArtifactKind::RepositoryPort)),
            "UserRoleRepository"
        );
        assert_eq!(
            naming.file_name("user", Some(ArtifactKind::RepositoryAdapter)),
            "TypeORMUserRepository"
        );
    }

    #[test]
    fn test_file_name_kebab() {
        let options = options(CaseStyle::Kebab, true);
        let naming = Naming::new(&options);
        assert_eq!(
            naming.file_name("userRole", Some(ArtifactKind::Schema)),
            "user-roles-schema"
        );
    }

    #[test]
    fn test_shared_file() {
        let options = options(CaseStyle::Pascal, true);
        let naming = Naming::new(&options);
        assert_eq!(naming.shared_file(ArtifactKind::Index).as_deref(), Some("Index"));
        assert_eq!(
            naming.shared_file(ArtifactKind::RepositoryAdapterBase).as_deref(),
            Some("TypeORMRepository")
        );
        assert_eq!(
            naming.shared_file(ArtifactKind::Tsconfig).as_deref(),
            Some("tsconfig")
        );
        assert_eq!(naming.shared_file(ArtifactKind::Entity), None);
    }

    #[test]
    fn test_resolve_path() {
        let options = GenerationOptions::default();
        let naming = Naming::new(&options);
        assert_eq!(
            naming.resolve_path(ArtifactKind::Model, ArtifactKind::Entity),
            "../entities/"
        );
        assert_eq!(
            naming.resolve_path(ArtifactKind::Entity, ArtifactKind::Index),
            "./"
        );
        assert_eq!(
            naming.resolve_path(ArtifactKind::RepositoryAdapter, ArtifactKind::Repository),
            "../ports/"
        );
    }

    #[test]
    fn test_target_path() {
        let options = options(CaseStyle::Pascal, false);
        let naming = Naming::new(&options);
        let path = naming.target_path(Path::new("out"), ArtifactKind::Model, "User");
        assert_eq!(path, Path::new("out").join("models").join("User.ts"));
    }
}
