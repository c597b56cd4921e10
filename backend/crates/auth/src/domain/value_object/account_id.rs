use kernel::id::Id;

pub struct AccountMarker;
pub type AccountId = Id<AccountMarker>;
