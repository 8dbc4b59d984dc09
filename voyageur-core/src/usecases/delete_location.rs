use super::prelude::*;

pub fn delete_location<R: LocationRepo>(repo: &R, id: &str) -> Result<()> {
    log::info!("Deleting location {id}");
    repo.delete_location(id)?;
    Ok(())
}
