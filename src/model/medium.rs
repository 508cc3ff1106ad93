use super::PhotoSize;

/// A file-like object of the Bot API: a photo size, a sticker, a document, and so on.
///
/// Two media are equal if their [`file_unique_id`]s are equal; the models implementing this
/// trait compare that way.
///
/// [`file_unique_id`]: Medium::file_unique_id
pub trait Medium {
    /// Identifier for this file, which can be used to download or reuse the file.
    ///
    /// Differs between bots, and may change over time.
    fn file_id(&self) -> &str;

    /// Unique identifier for this file, which is supposed to be the same over time and for
    /// different bots. Can't be used to download or reuse the file.
    fn file_unique_id(&self) -> &str;

    /// File size in bytes, if known.
    fn file_size(&self) -> Option<u64>;
}

/// A [`Medium`] that may come with a preview thumbnail.
pub trait ThumbedMedium: Medium {
    /// The thumbnail of the file, if any.
    fn thumb(&self) -> Option<&PhotoSize>;
}
