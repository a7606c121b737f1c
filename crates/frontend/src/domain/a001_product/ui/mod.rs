pub mod card;
pub mod catalog;
pub mod category_page;
pub mod home;
pub mod landing;
pub mod modal;
