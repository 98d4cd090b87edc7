use crate::error::Error;

#[cfg_attr(test, mockall::automock)]
pub trait QrCodeService: Send + Sync {
    ///
    /// Encodes content as QR code image.
    ///
    /// ### Returns
    /// image embedded in `data:` URL, ready to be used as `src` of `<img>`
    ///
    /// ### Errors
    /// - [Error::Unexpected] when content cannot be encoded
    ///
    fn render_data_url(&self, content: &str) -> Result<String, Error>;
}
