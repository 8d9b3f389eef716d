//! User record dataset consumed by the search endpoint.
//!
//! The dataset is a versioned JSON document enumerating user rows. Only a
//! handful of fields (id, names, age, gender, biography) are read by the
//! search evaluator; the rest are carried through untouched so the document
//! round-trips without loss.
//!
//! The crate is independent of backend domain types; the backend maps
//! [`DatasetRow`] values into its own record type at startup.
//!
//! # Example
//!
//! ```
//! use user_dataset::Dataset;
//!
//! let json = r#"{
//!     "version": 1,
//!     "rows": [{
//!         "id": 0,
//!         "guid": "1a6fa827-62f1-45f6-b579-aaead2b47169",
//!         "isActive": false,
//!         "balance": "$2,144.93",
//!         "picture": "http://placehold.it/32x32",
//!         "age": 22,
//!         "eyeColor": "green",
//!         "first_name": "Boyd",
//!         "last_name": "Wolf",
//!         "gender": "male",
//!         "company": "HOPELI",
//!         "email": "boydwolf@hopeli.com",
//!         "phone": "+1 (956) 593-2402",
//!         "address": "586 Winthrop Street, Edneyville, Mississippi, 9555",
//!         "about": "Nulla cillum enim voluptate consequat laborum esse excepteur occaecat.",
//!         "registered": "2017-02-05T06:23:27 -03:00",
//!         "favoriteFruit": "apple"
//!     }]
//! }"#;
//!
//! let dataset = Dataset::from_json(json).expect("valid dataset");
//! assert_eq!(dataset.rows().len(), 1);
//! assert_eq!(dataset.rows()[0].first_name, "Boyd");
//! ```

mod dataset;
mod error;

pub use dataset::{Dataset, DatasetRow, SUPPORTED_VERSION};
pub use error::DatasetError;
