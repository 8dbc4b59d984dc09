use super::prelude::*;
use crate::tag::normalize_tag;

pub fn load_locations<R: LocationRepo>(repo: &R) -> Result<Vec<Location>> {
    Ok(repo.all_locations()?)
}

/// Tags are matched after normalization, i.e. `#Tacos` finds `tacos`.
pub fn load_locations_by_tag<R: LocationRepo>(repo: &R, tag: &str) -> Result<Vec<Location>> {
    match normalize_tag(tag) {
        Some(tag) => Ok(repo.locations_by_tag(&tag)?),
        None => Ok(vec![]),
    }
}

pub fn load_tags<R: TagRepo>(repo: &R) -> Result<Vec<String>> {
    let mut tags: Vec<_> = repo.all_tags()?.into_iter().map(|t| t.id).collect();
    tags.sort_unstable();
    Ok(tags)
}
