pub use super::accommodation::Entity as Accommodation;
pub use super::location::Entity as Location;
pub use super::user::Entity as User;
