//! Shared plumbing for commands: opening the manager, resolving list and
//! item references, and settling persistence failures.

use std::path::PathBuf;

use anyhow::{Context, anyhow, bail};
use log::warn;
use shoplist::{Config, JsonListStore, ListManager, ShoppingList, SystemIdentity};

/// The manager every command runs against
pub type Manager = ListManager<JsonListStore, SystemIdentity>;

/// Shortest item id prefix accepted as a reference
const MIN_ID_PREFIX: usize = 4;

/// Open the lists directory (`--dir`, else config, else the platform default)
pub fn open(dir: Option<PathBuf>) -> anyhow::Result<Manager> {
    let config = Config::load();
    let dir = dir.unwrap_or_else(|| config.lists_dir());
    let store = JsonListStore::new(&dir);

    let manager = ListManager::open(store, SystemIdentity::new())
        .with_context(|| format!("cannot open lists directory {}", dir.display()))?
        .with_name_prefix(config.lists.default_name_prefix);
    Ok(manager)
}

/// Turn a mutation outcome into a command outcome
///
/// A change that reached memory but not disk gets one retry; if that fails
/// too the command fails, since the change dies with this process.
pub fn settle<T>(manager: &mut Manager, outcome: shoplist::Result<T>) -> anyhow::Result<()> {
    match outcome {
        Ok(_) => Ok(()),
        Err(err) if err.is_persistence() => {
            warn!("{err}; retrying once");
            manager.retry_pending().map_err(|retry| {
                anyhow!(retry).context("the change was applied but could not be saved")
            })
        },
        Err(err) => Err(err.into()),
    }
}

/// Resolve a list reference to its id
///
/// `None` means the active list (the first one). Otherwise tries the exact
/// id, then a unique case-insensitive name.
pub fn resolve_list(manager: &Manager, reference: Option<&str>) -> anyhow::Result<String> {
    let Some(reference) = reference else {
        return manager
            .first()
            .map(|l| l.id.clone())
            .ok_or_else(|| anyhow!("No lists yet. Create one with: shoplist new <NAME>"));
    };

    if let Some(list) = manager.get(reference) {
        return Ok(list.id.clone());
    }

    let wanted = reference.trim().to_lowercase();
    let by_name = manager
        .lists()
        .iter()
        .filter(|l| l.name.to_lowercase() == wanted)
        .map(|l| l.id.as_str());

    unique("list", reference, by_name)?.ok_or_else(|| anyhow!("List not found: {reference}"))
}

/// Resolve an item reference within `list` to its id
///
/// Tries the exact id, then a unique case-insensitive text, then a unique
/// id prefix of at least four characters.
pub fn resolve_item(list: &ShoppingList, reference: &str) -> anyhow::Result<String> {
    if let Some(item) = list.item(reference) {
        return Ok(item.id.clone());
    }

    let wanted = reference.trim().to_lowercase();
    let by_text = list.items.iter().filter(|i| i.text.to_lowercase() == wanted).map(|i| i.id.as_str());
    if let Some(id) = unique("item", reference, by_text)? {
        return Ok(id);
    }

    if reference.len() >= MIN_ID_PREFIX {
        let by_prefix = list.items.iter().filter(|i| i.id.starts_with(reference)).map(|i| i.id.as_str());
        if let Some(id) = unique("item", reference, by_prefix)? {
            return Ok(id);
        }
    }

    bail!("Item not found in {}: {reference}", list.name)
}

fn unique<'a>(
    what: &str,
    reference: &str,
    mut candidates: impl Iterator<Item = &'a str>,
) -> anyhow::Result<Option<String>> {
    let Some(first) = candidates.next() else {
        return Ok(None);
    };
    if candidates.next().is_some() {
        bail!("Ambiguous {what} reference '{reference}'; use the id instead");
    }
    Ok(Some(first.to_string()))
}
