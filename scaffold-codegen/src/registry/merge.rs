use super::{
    ParsedRegistry, RegistryDocument, RegistrySkeleton, SkippedLine, parse_registry,
    render_registry,
};
use crate::ResourceDescriptor;

/// Folds one resource into the registry text.
///
/// Pure: reading the previous file and writing the result are left to the
/// caller, so the same merger can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct RegistryMerger {
    skeleton: RegistrySkeleton,
}

/// Everything a merge produced besides the text itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    /// The complete replacement file
    pub text: String,
    /// The merged entry sets
    pub document: RegistryDocument,
    /// The resource's entries were both present before the merge
    pub already_registered: bool,
    /// Lines of the previous text that were dropped
    pub skipped: Vec<SkippedLine>,
}

impl RegistryMerger {
    pub fn new(skeleton: RegistrySkeleton) -> Self {
        Self { skeleton }
    }

    pub fn skeleton(&self) -> &RegistrySkeleton {
        &self.skeleton
    }

    /// Produce the new registry text from the previous text, if any, and a
    /// resource to add.
    pub fn merge(&self, previous: Option<&str>, resource: &ResourceDescriptor) -> String {
        self.merge_detailed(previous, resource).text
    }

    /// Like [`merge`](Self::merge), also returning the merged sets and what
    /// was dropped from the previous text.
    pub fn merge_detailed(
        &self,
        previous: Option<&str>,
        resource: &ResourceDescriptor,
    ) -> MergeOutcome {
        let ParsedRegistry {
            mut document,
            skipped,
        } = match previous {
            Some(text) => self.parse(text),
            None => ParsedRegistry {
                document: RegistryDocument::new(&self.skeleton),
                skipped: Vec::new(),
            },
        };

        let already_registered = !document.insert(resource);
        let text = self.render(&document);

        MergeOutcome {
            text,
            document,
            already_registered,
            skipped,
        }
    }

    /// Read entries back out of registry text.
    pub fn parse(&self, text: &str) -> ParsedRegistry {
        parse_registry(text, &self.skeleton)
    }

    /// Render a document with this merger's skeleton.
    pub fn render(&self, document: &RegistryDocument) -> String {
        render_registry(document, &self.skeleton)
    }
}
