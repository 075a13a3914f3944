//! Canonical XML wire format for bucket replication configuration.
//!
//! The replication control-plane API consumes a restricted XML dialect:
//!
//! - no XML declaration prolog -- the document starts at the root element;
//! - no namespace declarations or prefixes anywhere;
//! - no carriage returns or line feeds -- the whole document is one line;
//! - `Role` first, then one `Rule` element per rule in evaluation order.
//!
//! # Key components
//!
//! - [`XmlSerialize`] trait and [`to_canonical_xml`] for encoding a
//!   configuration into the canonical single-line document
//! - [`to_canonical_xml_lossy`] for the legacy never-fails boundary
//! - [`XmlDeserialize`] trait and [`from_xml`] for parsing a
//!   GET-bucket-replication body back into the wire types

pub mod deserialize;
pub mod error;
pub mod serialize;

pub use deserialize::{XmlDeserialize, from_xml};
pub use error::XmlError;
pub use serialize::{XmlSerialize, to_canonical_xml, to_canonical_xml_lossy};
