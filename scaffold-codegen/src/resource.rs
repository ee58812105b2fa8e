//! Registration requests for generated resources.

use goscaffold_core::{
    normalize_resource_name, to_camel_case, to_pascal_case, validate_module_path,
};
use goscaffold_manifest::Layout;

/// A resource to register: its snake_case name and the module it lives in.
///
/// Everything the registry needs is derived from these two values, so the
/// type names it references stay consistent with the model, repository,
/// service and controller files generated for the same resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDescriptor {
    name: String,
    module_path: String,
    layout: Layout,
}

impl ResourceDescriptor {
    /// Create a descriptor in the default (`internal/`) layout.
    ///
    /// The name is lowercased and must be a valid Go package name. The
    /// module path must be non-empty, without whitespace or quotes.
    pub fn new(name: &str, module_path: impl Into<String>) -> goscaffold_core::Result<Self> {
        let module_path = module_path.into();
        validate_module_path(&module_path)?;
        Ok(Self {
            name: normalize_resource_name(name)?,
            module_path,
            layout: Layout::default(),
        })
    }

    /// Place the resource package according to `layout`.
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// The snake_case name, which is also the Go package name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn module_path(&self) -> &str {
        &self.module_path
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Exported type name, e.g. `UserAccount`.
    pub fn pascal_name(&self) -> String {
        to_pascal_case(&self.name)
    }

    /// Unexported type name, e.g. `userAccount`.
    pub fn camel_name(&self) -> String {
        to_camel_case(&self.name)
    }

    /// Import path of the resource package.
    pub fn import_path(&self) -> String {
        self.layout.package_import_path(&self.module_path, &self.name)
    }

    /// Composite literal of the model, e.g. `user_account.UserAccount{}`.
    pub fn model_reference(&self) -> String {
        format!("{}.{}{{}}", self.name, self.pascal_name())
    }

    /// The model reference as passed to `AutoMigrate`: `&user_account.UserAccount{}`.
    pub fn model_entry(&self) -> String {
        format!("&{}", self.model_reference())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_names() {
        let resource = ResourceDescriptor::new("user_account", "github.com/acme/api").unwrap();

        assert_eq!(resource.name(), "user_account");
        assert_eq!(resource.pascal_name(), "UserAccount");
        assert_eq!(resource.camel_name(), "userAccount");
        assert_eq!(resource.model_reference(), "user_account.UserAccount{}");
        assert_eq!(resource.model_entry(), "&user_account.UserAccount{}");
    }

    #[test]
    fn test_import_path_follows_layout() {
        let resource = ResourceDescriptor::new("order", "github.com/acme/api").unwrap();
        assert_eq!(resource.layout(), Layout::Internal);
        assert_eq!(resource.import_path(), "github.com/acme/api/internal/order");

        let flat = resource.clone().with_layout(Layout::Flat);
        assert_eq!(flat.import_path(), "github.com/acme/api/order");

        let src = resource.with_layout(Layout::Src);
        assert_eq!(src.import_path(), "github.com/acme/api/src/order");
    }

    #[test]
    fn test_name_is_lowercased() {
        let resource = ResourceDescriptor::new("Invoice", "example.com/shop").unwrap();
        assert_eq!(resource.name(), "invoice");
        assert_eq!(resource.model_entry(), "&invoice.Invoice{}");
    }

    #[test]
    fn test_invalid_name_is_rejected() {
        let err = ResourceDescriptor::new("order-item", "example.com/shop").unwrap_err();
        assert!(matches!(err, goscaffold_core::Error::InvalidResourceName { .. }));
    }

    #[test]
    fn test_unusable_module_path_is_rejected() {
        for module in ["", "github.com/acme api", "github.com/ac\"me/api"] {
            let err = ResourceDescriptor::new("order", module).unwrap_err();
            assert!(
                matches!(err, goscaffold_core::Error::InvalidModulePath { .. }),
                "expected InvalidModulePath for {module:?}, got {err:?}"
            );
        }
    }
}
