pub mod aggregate;

pub use aggregate::{Inquiry, InquiryCreatedResponse, InquiryDto, InquiryId};
