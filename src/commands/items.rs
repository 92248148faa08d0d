//! Item commands - add, toggle, reorder

use std::path::PathBuf;

use anyhow::anyhow;
use shoplist::Partition;
use shoplist::output::OutputMode;

use super::lists::render_list;
use super::session;

/// Add an item to the top of a list
pub fn add(
    dir: Option<PathBuf>,
    list: Option<&str>,
    text: &str,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let mut manager = session::open(dir)?;
    let id = session::resolve_list(&manager, list)?;

    let outcome = manager.add_item(&id, text);
    session::settle(&mut manager, outcome)?;

    render_list(&manager, &id, mode);
    Ok(())
}

/// Flip an item between bought and not bought
pub fn toggle(
    dir: Option<PathBuf>,
    list: Option<&str>,
    item: &str,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let mut manager = session::open(dir)?;
    let id = session::resolve_list(&manager, list)?;
    let current = manager.get(&id).ok_or_else(|| anyhow!("List not found: {id}"))?;
    let item_id = session::resolve_item(current, item)?;

    let outcome = manager.toggle_bought(&id, &item_id);
    session::settle(&mut manager, outcome)?;

    render_list(&manager, &id, mode);
    Ok(())
}

/// Reorder one partition of a list
pub fn reorder(
    dir: Option<PathBuf>,
    list: Option<&str>,
    partition: Partition,
    items: &[String],
    mode: OutputMode,
) -> anyhow::Result<()> {
    let mut manager = session::open(dir)?;
    let id = session::resolve_list(&manager, list)?;
    let current = manager.get(&id).ok_or_else(|| anyhow!("List not found: {id}"))?;
    let order = items
        .iter()
        .map(|reference| session::resolve_item(current, reference))
        .collect::<anyhow::Result<Vec<String>>>()?;

    let outcome = manager.reorder_partition(&id, partition, &order);
    session::settle(&mut manager, outcome)?;

    render_list(&manager, &id, mode);
    Ok(())
}
