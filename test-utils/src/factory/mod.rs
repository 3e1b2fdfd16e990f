//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Defaults are unique
//! per call so natural keys (DNI, license) never collide between rows of one test.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let patient = factory::create_patient(&db).await?;
//! let dentist = factory::create_dentist(&db).await?;
//! let appointment = factory::create_appointment(&db, patient.id, dentist.id).await?;
//!
//! // Or everything at once
//! let (patient, dentist, appointment) =
//!     factory::helpers::create_appointment_with_dependencies(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let patient = factory::patient::PatientFactory::new(&db)
//!     .dni(30111222)
//!     .email("ana@example.com")
//!     .build()
//!     .await?;
//! ```

pub mod appointment;
pub mod dentist;
pub mod helpers;
pub mod patient;

pub use appointment::create_appointment;
pub use dentist::create_dentist;
pub use patient::create_patient;
