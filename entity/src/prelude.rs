pub use super::appointment::Entity as Appointment;
pub use super::dentist::Entity as Dentist;
pub use super::patient::Entity as Patient;
