//! Page components. All of them are thin views; the interesting logic
//! lives in the header and the core crate.

mod catalog;
mod contact;
mod home;
mod orders;
mod profile;

pub use catalog::Catalog;
pub use contact::Contact;
pub use home::Home;
pub use orders::Orders;
pub use profile::Profile;
