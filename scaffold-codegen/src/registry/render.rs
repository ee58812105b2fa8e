use super::{RegistryDocument, RegistrySkeleton};
use crate::builder::CodeBuilder;

/// Render the complete registry file.
///
/// ```text
/// package migrations
///
/// import (
///     "gorm.io/gorm"
/// )
///
/// func MigrateAll(db *gorm.DB) error {
///     return db.AutoMigrate(
///         &order.Order{},
///     )
/// }
/// ```
pub fn render_registry(document: &RegistryDocument, skeleton: &RegistrySkeleton) -> String {
    CodeBuilder::new()
        .line(&format!("package {}", skeleton.package))
        .blank()
        .block_with_close("import (", ")", |b| {
            b.each(document.imports(), |b, import| b.line(&format!("\"{}\"", import)))
        })
        .blank()
        .block_with_close(
            &format!("{}(db *gorm.DB) error {{", skeleton.function_prefix()),
            "}",
            |b| {
                b.block_with_close("return db.AutoMigrate(", ")", |b| {
                    b.each(document.models(), |b, model| b.line(&format!("{},", model)))
                })
            },
        )
        .build()
}
