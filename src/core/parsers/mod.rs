//! File parsers for resource documents.
//!
//! - `xml`: Android `strings.xml` parser (`<resources>` documents)

pub mod xml;
