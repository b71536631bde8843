pub mod contact;
pub mod identity;
pub mod missing;
pub mod name;
pub mod phone;

pub use contact::{
    ContactInfo, ContactRecord, ContactSlot, OpportunityInfo, OutputContactRow, RawContactRow,
    ValueSet,
};
pub use identity::{identity_key, title_case, IdentityKey};
pub use missing::{MissingValues, DEFAULT_MISSING_VALUES};
pub use name::{clean_name, CleanedName, INVALID_NAME};
pub use phone::extract_phone_digits;
