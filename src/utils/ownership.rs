/// Records that belong to exactly one user.
pub trait Owned {
    fn owner_id(&self) -> &str;
}

#[derive(Debug, PartialEq)]
pub struct NotFound;

#[derive(Debug, PartialEq)]
pub struct NotOwner;

/// Fails with [`NotFound`] when the lookup came back empty, otherwise hands the
/// record through unchanged.
pub fn handle_404<T>(record: Option<T>) -> Result<T, NotFound> {
    record.ok_or(NotFound)
}

pub fn require_ownership<T: Owned>(requester_id: &str, record: &T) -> Result<(), NotOwner> {
    if record.owner_id() != requester_id {
        return Err(NotOwner);
    }

    Ok(())
}
