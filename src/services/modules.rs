use crate::models::{ModuleGroup, SubjectItem};
use crate::services::sanitizer::sanitize;

/// Rebuilds module -> subjects from the flat curriculum list.
///
/// An item with a module name opens a new group; items without one join the latest
/// group. Items before the first named module have nowhere to go and are dropped.
pub fn group_by_module(items: Vec<SubjectItem>) -> Vec<ModuleGroup> {
    let mut groups: Vec<ModuleGroup> = Vec::new();

    for item in items {
        let module = item.module.clone();
        let subject = SubjectItem {
            details: sanitize(&item.details),
            ..item
        };

        if !module.is_empty() {
            groups.push(ModuleGroup {
                module,
                subjects: vec![subject],
            });
        } else if let Some(current) = groups.last_mut() {
            current.subjects.push(subject);
        }
    }

    groups
}
