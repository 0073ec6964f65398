pub mod address;
pub mod member;

pub use address::{Address, AddressFields, PgAddressStore};
pub use member::{Member, MemberSummary, PgMemberStore, VerificationRecord};
