/*!
 * Translator implementations.
 *
 * This module contains the narrow interface the engine consumes translations
 * through, plus its implementations:
 * - `remote`: JSON client for an HTTP translation endpoint
 * - `mock`: configurable in-memory translator for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Common trait for translation backends
///
/// This is the only surface through which the engine reaches the network.
/// Implementations must be safe to share across concurrent per-block
/// requests.
#[async_trait]
pub trait Translator: Send + Sync + Debug {
    /// Translate a text into the target language
    ///
    /// # Arguments
    /// * `text` - The source text to translate
    /// * `target_language` - Lowercased ISO 639 code of the target language
    /// * `source_hint` - Optional ISO 639 code of the source language
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The translated text or a transport error
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
        source_hint: Option<&str>,
    ) -> Result<String, ProviderError>;

    /// Test the connection to the backend
    async fn test_connection(&self) -> Result<(), ProviderError>;
}

pub mod mock;
pub mod remote;
