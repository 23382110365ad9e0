/*! Field normalizers.

Cleans documents at rest: phone numbers, postal codes and bilingual street
names. The low-level normalizers work on single values; the [Clean]
implementations wrap them into document-level cleaners whose patches the
pipeline driver applies through the store.
!*/
mod clean;
mod phone;
mod postal;
mod street;

pub use clean::{AddressCleaner, Clean, Patch, PhoneCleaner};
pub use phone::{Normalized, PhoneNormalizer};
pub use postal::PostalNormalizer;
pub use street::StreetNormalizer;
