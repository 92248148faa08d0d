//! List commands - overview, create, rename, delete, show

use std::path::PathBuf;

use shoplist::output::{ListOverview, ListSummary, ListView, OperationResult, OutputMode};

use super::session::{self, Manager};

/// Show every list; the first is the active one
pub fn lists(dir: Option<PathBuf>, mode: OutputMode) -> anyhow::Result<()> {
    let manager = session::open(dir)?;

    let lists: Vec<ListSummary> = manager
        .lists()
        .iter()
        .enumerate()
        .map(|(index, list)| ListSummary::new(list, index == 0))
        .collect();

    ListOverview {
        total: lists.len(),
        lists,
    }
    .render(mode);
    Ok(())
}

/// Create a list
pub fn new_list(dir: Option<PathBuf>, name: Option<&str>, mode: OutputMode) -> anyhow::Result<()> {
    let mut manager = session::open(dir)?;
    let outcome = manager.create_list(name);
    let id = match &outcome {
        Ok(list) => list.id.clone(),
        // create_list puts the list first before saving
        Err(_) => manager.first().map(|l| l.id.clone()).unwrap_or_default(),
    };
    session::settle(&mut manager, outcome)?;

    render_list(&manager, &id, mode);
    Ok(())
}

/// Rename a list
pub fn rename(
    dir: Option<PathBuf>,
    reference: &str,
    name: &str,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let mut manager = session::open(dir)?;
    let id = session::resolve_list(&manager, Some(reference))?;

    let outcome = manager.rename_list(&id, name);
    session::settle(&mut manager, outcome)?;

    render_list(&manager, &id, mode);
    Ok(())
}

/// Delete a list
pub fn delete(dir: Option<PathBuf>, reference: &str, mode: OutputMode) -> anyhow::Result<()> {
    let mut manager = session::open(dir)?;
    let id = session::resolve_list(&manager, Some(reference))?;
    let name = manager.get(&id).map(|l| l.name.clone()).unwrap_or_default();

    let outcome = manager.delete_list(&id);
    session::settle(&mut manager, outcome)?;

    let mut message = format!("Deleted list: {name}");
    if let Some(active) = manager.first() {
        message.push_str(&format!("\nActive list is now: {}", active.name));
    }
    OperationResult::ok(message).render(mode);
    Ok(())
}

/// Show one list
pub fn show(dir: Option<PathBuf>, reference: Option<&str>, mode: OutputMode) -> anyhow::Result<()> {
    let manager = session::open(dir)?;
    let id = session::resolve_list(&manager, reference)?;

    render_list(&manager, &id, mode);
    Ok(())
}

/// Render a list from the manager's working set
pub fn render_list(manager: &Manager, list_id: &str, mode: OutputMode) {
    if let Some(list) = manager.get(list_id) {
        let unsaved = manager.pending_writes().contains_key(list_id);
        ListView::new(list, unsaved).render(mode);
    }
}
