pub mod member;

pub use member::{MemberData, MemberInput, MemberSummaryData, MembersData, VerificationData};
