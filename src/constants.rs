//! A set of constants used by the library.

/// The base URL of the Bot API. The bot token is appended directly after it.
pub const API_BASE: &str = "https://api.telegram.org/bot";

/// The base URL used to download files. The bot token is appended directly after it.
pub const FILE_BASE: &str = "https://api.telegram.org/file/bot";

/// Wire strings of the face parts a mask can be anchored to.
///
/// See [`MaskPoint`] for the typed counterpart.
///
/// [`MaskPoint`]: crate::model::MaskPoint
pub mod mask_point {
    pub const FOREHEAD: &str = "forehead";
    pub const EYES: &str = "eyes";
    pub const MOUTH: &str = "mouth";
    pub const CHIN: &str = "chin";
}
