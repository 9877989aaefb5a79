//! Resolution error kinds.
//!
//! Every error is detected during the pure resolution pass, before any plan is
//! handed to the provisioning executor, and names the offending entity key.

use thiserror::Error;

/// Errors raised while resolving definitions into a provisioning plan.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// A definition document could not be parsed into the expected shape.
    #[error("definition '{key}' failed to parse at {path}: {message}")]
    DefinitionParse {
        /// Identifier of the offending document (file stem).
        key: String,
        /// Path inside the document where parsing failed.
        path: String,
        /// Underlying parser message.
        message: String,
    },

    /// Two derived entities resolved to the same key.
    #[error("duplicate {collection} key '{key}' derived from input")]
    DuplicateKey {
        /// Collection in which the collision occurred.
        collection: &'static str,
        /// The colliding key.
        key: String,
    },

    /// A peering was requested but no hub identity could be resolved.
    #[error("virtual network '{key}' requests hub peering but no hub identity is resolvable")]
    HubUnresolved {
        /// Key of the virtual network that requested the peering.
        key: String,
    },

    /// A derived entity references a key absent from its expected collection.
    #[error("{entity} '{key}' references missing {target} '{reference}'")]
    DanglingReference {
        /// Kind of the referencing entity.
        entity: &'static str,
        /// Key of the referencing entity.
        key: String,
        /// Kind of the missing target.
        target: &'static str,
        /// The reference that did not resolve.
        reference: String,
    },
}
